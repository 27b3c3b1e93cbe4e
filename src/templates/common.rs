//! Blocks shared by all templates: headline, byline, photo geometry

use crate::compositor::draw_photo_slot;
use crate::context::DrawContext;
use crate::layout::Layout;
use crate::slots::{ImageSlot, SlotId};
use crate::state::PosterState;
use crate::text::FontWeight;
use crate::typography::{draw_justified, draw_wrapped, fit_font_size, JustifyResult};
use crate::{Color, Rect};

pub const DEFAULT_HEADLINE: &str = "अपना समाचार शीर्षक यहाँ लिखें";
pub const DEFAULT_BODY: &str =
    "मुख्य समाचार विवरण यहाँ जोड़ा जाएगा। संक्षिप्त बिंदुओं का उपयोग करें ताकि पोस्टर पूरी तरह संतुलित दिखे।";
pub const DEFAULT_SECOND_BODY: &str = "अतिरिक्त जानकारी के लिए यहाँ पाठ लिखें।";
pub const DEFAULT_CAPTION_SUMMARY: &str = "प्रमुख बिंदु यहाँ जाएँ";

const KICKER_SIZE: f32 = 36.0;
const HEADLINE_BASE: f32 = 82.0;
const HEADLINE_MIN: f32 = 48.0;
const HEADLINE_COLOR: Color = Color::from_hex(0x121212);
const BYLINE_SIZE: f32 = 32.0;

/// Gap between the header block and the photo
const PHOTO_OFFSET: f32 = 3.0;
/// Below this much vertical room the photo stops honouring its template minimum
const TIGHT_SPACE: f32 = 180.0;
const PHOTO_MAX: f32 = 540.0;
const PHOTO_FLOOR: f32 = 160.0;

/// Summary kicker (if any) and the adaptively sized headline; returns the cursor below
pub fn draw_headline_block(ctx: &mut DrawContext<'_>, state: &PosterState, layout: &Layout) -> f32 {
    ctx.scoped(|ctx| {
        let mut cursor_y = layout.content_y;
        let kicker = state.summary.trim();
        if !kicker.is_empty() {
            ctx.set_fill(state.accent);
            ctx.set_font(KICKER_SIZE, FontWeight::SemiBold);
            cursor_y = draw_wrapped(
                ctx,
                kicker,
                layout.content_x,
                cursor_y,
                layout.content_width,
                KICKER_SIZE * 1.2,
            );
            cursor_y += 12.0;
        }

        let headline = match state.headline.trim() {
            "" => DEFAULT_HEADLINE,
            text => text,
        };
        let size = fit_font_size(
            ctx,
            headline,
            layout.content_width,
            HEADLINE_BASE,
            HEADLINE_MIN,
            FontWeight::Bold,
        );
        ctx.set_fill(HEADLINE_COLOR);
        ctx.set_font(size, FontWeight::Bold);
        draw_wrapped(ctx, headline, layout.content_x, cursor_y, layout.content_width, size * 1.05)
    })
}

/// Single-line byline in the accent colour; a blank byline leaves `y` unchanged
///
/// A byline that would cross `content_bottom` is skipped but still advances
/// the cursor, so the body below it sees no room either.
pub fn draw_byline(ctx: &mut DrawContext<'_>, state: &PosterState, layout: &Layout, x: f32, y: f32) -> f32 {
    let byline = state.byline.trim();
    if byline.is_empty() {
        return y;
    }
    if y + BYLINE_SIZE > layout.content_bottom {
        return y + BYLINE_SIZE * 1.4;
    }
    ctx.scoped(|ctx| {
        ctx.set_fill(state.accent.with_alpha(0.9));
        ctx.set_font(BYLINE_SIZE, FontWeight::SemiBold);
        ctx.fill_text(byline, x, y);
    });
    y + BYLINE_SIZE * 1.4
}

/// Per-template photo sizing: target fraction of content height, minimum
/// height, and space to keep free below the photo
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhotoSpec {
    pub fraction: f32,
    pub min_height: f32,
    pub reserved: f32,
}

impl PhotoSpec {
    pub const fn new(fraction: f32, min_height: f32, reserved: f32) -> Self {
        Self { fraction, min_height, reserved }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhotoRegion {
    pub y: f32,
    pub height: f32,
}

impl PhotoRegion {
    pub fn rect(&self, layout: &Layout) -> Rect {
        Rect::new(layout.content_x, self.y, layout.content_width, self.height)
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// Photo rectangle below the header block
pub fn compute_photo_region(layout: &Layout, header_bottom: f32, spec: PhotoSpec) -> PhotoRegion {
    let y = header_bottom + PHOTO_OFFSET;
    let available = layout.content_bottom - y;
    if available <= TIGHT_SPACE {
        return PhotoRegion { y, height: (available - 40.0).max(PHOTO_FLOOR) };
    }

    let min = spec.min_height;
    let reserved = spec.reserved;
    let mut height = (layout.content_height * spec.fraction).min(PHOTO_MAX);
    if !height.is_finite() || height < min {
        height = (available - reserved).min(min.max(available * 0.55));
    }
    if !height.is_finite() || height <= 0.0 {
        height = (available - reserved).max(min);
    }
    if height > available - 80.0 {
        height = min.max(available - 80.0);
    }
    if height < min {
        height = min.min(available - 60.0);
    }
    if !height.is_finite() || height <= 0.0 {
        height = (available * 0.7).max(200.0);
    }
    height = height.min(available - 40.0).max(PHOTO_FLOOR);
    PhotoRegion { y, height }
}

/// Primary photo across the content width; returns its bottom edge
pub fn draw_primary_photo(
    ctx: &mut DrawContext<'_>,
    state: &PosterState,
    layout: &Layout,
    region: PhotoRegion,
) -> f32 {
    draw_slot(ctx, &state.primary_photo, SlotId::PrimaryPhoto, state.accent, region.rect(layout))
}

pub fn draw_secondary_photo(
    ctx: &mut DrawContext<'_>,
    state: &PosterState,
    layout: &Layout,
    region: PhotoRegion,
) -> f32 {
    draw_slot(ctx, &state.secondary_photo, SlotId::SecondaryPhoto, state.accent, region.rect(layout))
}

fn draw_slot(ctx: &mut DrawContext<'_>, slot: &ImageSlot, id: SlotId, accent: Color, rect: Rect) -> f32 {
    draw_photo_slot(ctx, slot, &rect, id.placeholder_caption(), accent)
}

/// Trimmed body text, or the template's default copy when blank
pub fn body_text<'s>(state: &'s PosterState, fallback: &'s str) -> &'s str {
    match state.body.trim() {
        "" => fallback,
        body => body,
    }
}

/// Body typography for one template
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyStyle {
    pub size: f32,
    pub line_factor: f32,
    pub color: Color,
}

impl BodyStyle {
    pub const fn new(size: f32, line_factor: f32, color: Color) -> Self {
        Self { size, line_factor, color }
    }

    pub fn line_height(&self) -> f32 {
        self.size * self.line_factor
    }
}

/// Justified body block in `style`, bounded to `max_height`
pub fn draw_body(
    ctx: &mut DrawContext<'_>,
    text: &str,
    style: BodyStyle,
    rect: Rect,
) -> JustifyResult {
    ctx.scoped(|ctx| {
        ctx.set_fill(style.color);
        ctx.set_font(style.size, FontWeight::Regular);
        draw_justified(ctx, text, rect.x, rect.y, rect.width, style.line_height(), Some(rect.height))
    })
}
