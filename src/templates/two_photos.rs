//! Two photos - primary and secondary photos stacked above the body

use super::common::{
    body_text, compute_photo_region, draw_body, draw_byline, draw_headline_block,
    draw_primary_photo, draw_secondary_photo, BodyStyle, PhotoRegion, PhotoSpec,
    DEFAULT_SECOND_BODY,
};
use crate::context::DrawContext;
use crate::layout::Layout;
use crate::state::PosterState;
use crate::{Color, Rect};

const PHOTO: PhotoSpec = PhotoSpec::new(0.4, 220.0, 220.0);
const BODY: BodyStyle = BodyStyle::new(34.0, 1.45, Color::from_hex(0x202020));
const PHOTO_GAP: f32 = 12.0;
const SECONDARY_MIN: f32 = 200.0;
const SECONDARY_MAX: f32 = 420.0;

/// Secondary photo takes half the space left under the primary, within bounds
pub fn secondary_height(remaining: f32) -> f32 {
    (remaining * 0.5).min(SECONDARY_MAX).max(SECONDARY_MIN)
}

pub fn render(ctx: &mut DrawContext<'_>, state: &PosterState, layout: &Layout) {
    let header_bottom = draw_headline_block(ctx, state, layout);
    let primary = compute_photo_region(layout, header_bottom, PHOTO);
    let primary_bottom = draw_primary_photo(ctx, state, layout, primary);

    let second_y = primary_bottom + PHOTO_GAP;
    let secondary = PhotoRegion {
        y: second_y,
        height: secondary_height(layout.content_bottom - second_y),
    };
    let secondary_bottom = draw_secondary_photo(ctx, state, layout, secondary);

    let text_y = draw_byline(ctx, state, layout, layout.content_x, secondary_bottom + 20.0);
    let body = Rect::new(
        layout.content_x,
        text_y,
        layout.content_width,
        layout.content_bottom - text_y,
    );
    draw_body(ctx, body_text(state, DEFAULT_SECOND_BODY), BODY, body);
}
