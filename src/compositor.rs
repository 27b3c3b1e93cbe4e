//! Image compositor - cover-fit and stretched bitmap drawing, dashed placeholders

use crate::assets::Bitmap;
use crate::context::{DrawContext, TextAlign, TextBaseline};
use crate::paint::{Dash, Paint, PaintStyle};
use crate::slots::ImageSlot;
use crate::text::FontWeight;
use crate::{Color, Rect};

const CAPTION_COLOR: Color = Color::from_hex(0x666666);
const BORDER_WIDTH: f32 = 4.0;
const BORDER_ALPHA: f32 = 0.8;

/// Source region of a `src_w`×`src_h` image that matches `target`'s aspect ratio
///
/// The longer source dimension is centre-cropped; the result scaled into
/// `target` fills it exactly.
pub fn cover_crop(src_w: f32, src_h: f32, target: &Rect) -> Rect {
    if src_w <= 0.0 || src_h <= 0.0 || target.is_empty() {
        return Rect::new(0.0, 0.0, src_w.max(0.0), src_h.max(0.0));
    }
    let image_ratio = src_w / src_h;
    let target_ratio = target.aspect();
    if image_ratio > target_ratio {
        let width = src_h * target_ratio;
        Rect::new((src_w - width) / 2.0, 0.0, width, src_h)
    } else {
        let height = src_w / target_ratio;
        Rect::new(0.0, (src_h - height) / 2.0, src_w, height)
    }
}

/// Draw `bitmap` cropped to fill `rect` without letterboxing
pub fn draw_cover(ctx: &mut DrawContext<'_>, bitmap: &Bitmap, rect: &Rect) {
    let src = cover_crop(bitmap.width as f32, bitmap.height as f32, rect);
    ctx.canvas_mut().draw_image_region(bitmap, src, *rect);
}

/// Draw the whole bitmap stretched to `rect` (masthead and ad bands)
pub fn draw_stretched(ctx: &mut DrawContext<'_>, bitmap: &Bitmap, rect: &Rect) {
    let src = Rect::new(0.0, 0.0, bitmap.width as f32, bitmap.height as f32);
    ctx.canvas_mut().draw_image_region(bitmap, src, *rect);
}

/// Look of an empty slot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaceholderStyle {
    pub fill: Color,
    pub inset: f32,
    pub dash: Dash,
    pub caption_size: f32,
}

impl PlaceholderStyle {
    /// Ad bands
    pub fn ad(rect: &Rect) -> Self {
        Self {
            fill: Color::from_hex(0xf6f6f6),
            inset: 12.0,
            dash: Dash::new(14.0, 10.0),
            caption_size: (rect.height * 0.4).min(42.0),
        }
    }

    /// Photo slots
    pub fn photo(rect: &Rect) -> Self {
        Self {
            fill: Color::from_hex(0xf2f2f2),
            inset: 10.0,
            dash: Dash::new(16.0, 12.0),
            caption_size: (rect.width.min(rect.height) * 0.06).max(28.0),
        }
    }
}

/// Neutral fill, dashed accent border and a centred caption
pub fn draw_placeholder(
    ctx: &mut DrawContext<'_>,
    rect: &Rect,
    style: &PlaceholderStyle,
    caption: &str,
    accent: Color,
) {
    ctx.scoped(|ctx| {
        ctx.fill_rect(rect, style.fill);
        let border = Paint::new()
            .with_style(PaintStyle::Stroke)
            .with_color(accent.with_alpha(BORDER_ALPHA))
            .with_stroke_width(BORDER_WIDTH)
            .with_dash(style.dash);
        ctx.draw_rect(&rect.inset(style.inset, style.inset), &border);

        ctx.set_fill(CAPTION_COLOR);
        ctx.set_font(style.caption_size, FontWeight::Medium);
        ctx.set_align(TextAlign::Center);
        ctx.set_baseline(TextBaseline::Middle);
        let center = rect.center();
        ctx.fill_text(caption, center.x, center.y);
    });
}

/// Photo slot clipped to `rect`: the image when ready, otherwise a placeholder
///
/// Returns the bottom edge, or `rect.y` when there is no room to draw.
pub fn draw_photo_slot(
    ctx: &mut DrawContext<'_>,
    slot: &ImageSlot,
    rect: &Rect,
    caption: &str,
    accent: Color,
) -> f32 {
    if rect.height <= 0.0 {
        return rect.y;
    }
    ctx.scoped(|ctx| {
        ctx.clip(*rect);
        match slot.bitmap() {
            Some(bitmap) => draw_cover(ctx, bitmap, rect),
            None => draw_placeholder(ctx, rect, &PlaceholderStyle::photo(rect), caption, accent),
        }
    });
    rect.bottom()
}
