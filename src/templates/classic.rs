//! Classic - headline, one large photo, byline, justified body

use super::common::{
    body_text, compute_photo_region, draw_body, draw_byline, draw_headline_block,
    draw_primary_photo, BodyStyle, PhotoSpec, DEFAULT_BODY,
};
use crate::context::DrawContext;
use crate::layout::Layout;
use crate::state::PosterState;
use crate::{Color, Rect};

const PHOTO: PhotoSpec = PhotoSpec::new(0.52, 260.0, 160.0);
const BODY: BodyStyle = BodyStyle::new(38.0, 1.45, Color::from_hex(0x1b1b1b));

pub fn render(ctx: &mut DrawContext<'_>, state: &PosterState, layout: &Layout) {
    let header_bottom = draw_headline_block(ctx, state, layout);
    let photo = compute_photo_region(layout, header_bottom, PHOTO);
    let photo_bottom = draw_primary_photo(ctx, state, layout, photo);

    let text_y = draw_byline(ctx, state, layout, layout.content_x, photo_bottom + 24.0);
    let body = Rect::new(
        layout.content_x,
        text_y,
        layout.content_width,
        layout.content_bottom - text_y,
    );
    draw_body(ctx, body_text(state, DEFAULT_BODY), BODY, body);
}
