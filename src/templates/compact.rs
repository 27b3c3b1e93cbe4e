//! Compact - smaller photo, byline and body inside a tinted card

use super::common::{
    body_text, compute_photo_region, draw_body, draw_byline, draw_headline_block,
    draw_primary_photo, BodyStyle, PhotoSpec, DEFAULT_BODY,
};
use crate::context::DrawContext;
use crate::layout::Layout;
use crate::state::PosterState;
use crate::{Color, Rect};

const PHOTO: PhotoSpec = PhotoSpec::new(0.42, 220.0, 140.0);
const BODY: BodyStyle = BodyStyle::new(34.0, 1.4, Color::from_hex(0x1d1d1d));
const CARD_MIN_HEIGHT: f32 = 160.0;
const CARD_PADDING: f32 = 24.0;
const CARD_TINT: Color = Color::new(0, 0, 0, 13);

pub fn render(ctx: &mut DrawContext<'_>, state: &PosterState, layout: &Layout) {
    let header_bottom = draw_headline_block(ctx, state, layout);
    let photo = compute_photo_region(layout, header_bottom, PHOTO);
    let photo_bottom = draw_primary_photo(ctx, state, layout, photo);

    let card_y = photo_bottom + 20.0;
    let card_height = (layout.content_bottom - card_y).max(CARD_MIN_HEIGHT);
    let card = Rect::new(layout.content_x, card_y, layout.content_width, card_height);
    ctx.scoped(|ctx| ctx.fill_rect(&card, CARD_TINT));

    let text_x = layout.content_x + CARD_PADDING;
    let text_y = draw_byline(ctx, state, layout, text_x, card_y + CARD_PADDING);
    let body = Rect::new(
        text_x,
        text_y,
        layout.content_width - CARD_PADDING * 2.0,
        card_height - (text_y - card_y) - CARD_PADDING,
    );
    draw_body(ctx, body_text(state, DEFAULT_BODY), BODY, body);
}
