//! Overlay - body text set in white on a dark scrim over the photo

use super::common::{
    body_text, compute_photo_region, draw_body, draw_byline, draw_headline_block,
    draw_primary_photo, BodyStyle, PhotoSpec, DEFAULT_BODY,
};
use crate::context::DrawContext;
use crate::layout::Layout;
use crate::state::PosterState;
use crate::Color;

const PHOTO: PhotoSpec = PhotoSpec::new(0.68, 260.0, 120.0);
const BODY: BodyStyle = BodyStyle::new(36.0, 1.4, Color::WHITE);
const SCRIM: Color = Color::new(0, 0, 0, 89);
const SCRIM_PADDING: f32 = 36.0;

pub fn render(ctx: &mut DrawContext<'_>, state: &PosterState, layout: &Layout) {
    let header_bottom = draw_headline_block(ctx, state, layout);
    let photo = compute_photo_region(layout, header_bottom, PHOTO);
    let photo_bottom = draw_primary_photo(ctx, state, layout, photo);

    let photo_rect = photo.rect(layout);
    ctx.scoped(|ctx| ctx.fill_rect(&photo_rect, SCRIM));
    draw_body(
        ctx,
        body_text(state, DEFAULT_BODY),
        BODY,
        photo_rect.inset(SCRIM_PADDING, SCRIM_PADDING),
    );

    draw_byline(ctx, state, layout, layout.content_x, photo_bottom + 18.0);
}
