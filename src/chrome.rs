//! Poster chrome - masthead, ad bands and the footer pill drawn around every template

use crate::compositor::{draw_placeholder, draw_stretched, PlaceholderStyle};
use crate::context::{DrawContext, TextAlign, TextBaseline};
use crate::layout::Layout;
use crate::slots::{ImageSlot, SlotId};
use crate::text::FontWeight;
use crate::{Color, Rect};
use chrono::{DateTime, FixedOffset, Offset, Utc};

const MASTHEAD_FILL: Color = Color::from_hex(0x0d3a78);
const MASTHEAD_TEXT_X: f32 = 48.0;

const FOOTER_SIZE: f32 = 32.0;
const FOOTER_PADDING_X: f32 = 24.0;
const FOOTER_SIDE_MARGIN: f32 = 80.0;
const FOOTER_LIFT: f32 = 8.0;
const FOOTER_TEXT: Color = Color::from_hex(0x1f1f1f);

/// Masthead image stretched over the band, or the brand name on a solid band
pub fn draw_masthead(ctx: &mut DrawContext<'_>, slot: &ImageSlot, rect: &Rect, brand: &str) {
    ctx.scoped(|ctx| {
        if let Some(bitmap) = slot.bitmap() {
            draw_stretched(ctx, bitmap, rect);
            return;
        }
        ctx.fill_rect(rect, MASTHEAD_FILL);
        ctx.set_fill(Color::WHITE);
        ctx.set_font((rect.height * 0.42).floor(), FontWeight::Bold);
        ctx.set_baseline(TextBaseline::Middle);
        ctx.fill_text(brand, rect.x + MASTHEAD_TEXT_X, rect.y + rect.height / 2.0);
    });
}

/// Ad image stretched over the band, or a labelled placeholder
pub fn draw_ad_band(ctx: &mut DrawContext<'_>, slot: &ImageSlot, id: SlotId, rect: &Rect, accent: Color) {
    ctx.scoped(|ctx| match slot.bitmap() {
        Some(bitmap) => draw_stretched(ctx, bitmap, rect),
        None => draw_placeholder(ctx, rect, &PlaceholderStyle::ad(rect), id.placeholder_caption(), accent),
    });
}

/// `"{site} • {stamp} • Made by: {username}"`
pub fn footer_text(site: &str, stamp: &str, username: &str) -> String {
    format!("{site} • {stamp} • Made by: {username}")
}

/// Poster timestamp in a fixed UTC offset, e.g. "16 Oct 2026, 3:45 pm"
pub fn format_timestamp(now: DateTime<Utc>, utc_offset_minutes: i32) -> String {
    let offset = FixedOffset::east_opt(utc_offset_minutes * 60).unwrap_or_else(|| Utc.fix());
    now.with_timezone(&offset).format("%-d %b %Y, %-I:%M %P").to_string()
}

/// Pill geometry for a footer caption of `text_width`
pub fn footer_pill(layout: &Layout, text_width: f32) -> Rect {
    let width = (text_width + FOOTER_PADDING_X * 2.0).min(layout.canvas_width - FOOTER_SIDE_MARGIN);
    let height = FOOTER_SIZE * 1.8;
    let center_x = layout.canvas_width / 2.0;
    let center_y = layout.bottom_ad_y - height / 2.0 - FOOTER_LIFT;
    Rect::new(center_x - width / 2.0, center_y - height / 2.0, width, height)
}

/// Translucent pill centred just above the bottom ad band
pub fn draw_footer(ctx: &mut DrawContext<'_>, layout: &Layout, text: &str) {
    ctx.scoped(|ctx| {
        ctx.set_font(FOOTER_SIZE, FontWeight::Medium);
        let pill = footer_pill(layout, ctx.measure_text(text));
        ctx.fill_rect(&pill, Color::WHITE.with_alpha(0.88));
        ctx.set_fill(FOOTER_TEXT);
        ctx.set_align(TextAlign::Center);
        ctx.set_baseline(TextBaseline::Middle);
        let center = pill.center();
        ctx.fill_text(text, center.x, center.y);
    });
}
