//! Two-column - body split across two justified columns
//!
//! Column one gets the full remaining height; whatever it can't hold flows
//! into column two. Text that overflows column two is dropped.

use super::common::{
    body_text, compute_photo_region, draw_body, draw_byline, draw_headline_block,
    draw_primary_photo, BodyStyle, PhotoSpec, DEFAULT_BODY,
};
use crate::context::DrawContext;
use crate::layout::Layout;
use crate::state::PosterState;
use crate::{Color, Rect};
use tracing::debug;

const PHOTO: PhotoSpec = PhotoSpec::new(0.48, 240.0, 160.0);
const BODY: BodyStyle = BodyStyle::new(34.0, 1.4, Color::from_hex(0x1d1d1d));
pub const COLUMN_GAP: f32 = 42.0;

pub fn column_width(layout: &Layout) -> f32 {
    (layout.content_width - COLUMN_GAP) / 2.0
}

pub fn render(ctx: &mut DrawContext<'_>, state: &PosterState, layout: &Layout) {
    let header_bottom = draw_headline_block(ctx, state, layout);
    let photo = compute_photo_region(layout, header_bottom, PHOTO);
    let photo_bottom = draw_primary_photo(ctx, state, layout, photo);

    let text_y = draw_byline(ctx, state, layout, layout.content_x, photo_bottom + 24.0);
    let width = column_width(layout);
    let height = layout.content_bottom - text_y;

    let first = Rect::new(layout.content_x, text_y, width, height);
    let spill = draw_body(ctx, body_text(state, DEFAULT_BODY), BODY, first);
    if !spill.overflowed() {
        return;
    }

    let second = Rect::new(layout.content_x + width + COLUMN_GAP, text_y, width, height);
    let tail = draw_body(ctx, &spill.remainder, BODY, second);
    if tail.overflowed() {
        debug!(dropped_chars = tail.remainder.chars().count(), "two_column body overflowed both columns");
    }
}
