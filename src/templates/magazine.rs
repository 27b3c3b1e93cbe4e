//! Magazine - tall photo with an accent caption band carrying the summary

use super::common::{
    body_text, compute_photo_region, draw_body, draw_byline, draw_headline_block,
    draw_primary_photo, BodyStyle, PhotoSpec, DEFAULT_BODY, DEFAULT_CAPTION_SUMMARY,
};
use crate::context::DrawContext;
use crate::layout::Layout;
use crate::state::PosterState;
use crate::text::FontWeight;
use crate::typography::draw_wrapped;
use crate::{Color, Rect};

const PHOTO: PhotoSpec = PhotoSpec::new(0.6, 260.0, 160.0);
const BODY: BodyStyle = BodyStyle::new(36.0, 1.45, Color::from_hex(0x1b1b1b));
/// Caption band covers this share of the photo, capped at `BAND_MAX`
const BAND_FRACTION: f32 = 0.32;
const BAND_MAX: f32 = 150.0;
const BAND_PADDING: f32 = 24.0;

pub fn render(ctx: &mut DrawContext<'_>, state: &PosterState, layout: &Layout) {
    let header_bottom = draw_headline_block(ctx, state, layout);
    let photo = compute_photo_region(layout, header_bottom, PHOTO);
    let photo_bottom = draw_primary_photo(ctx, state, layout, photo);

    let band_height = (photo.height * BAND_FRACTION).min(BAND_MAX);
    let band = Rect::new(layout.content_x, photo_bottom - band_height, layout.content_width, band_height);
    ctx.scoped(|ctx| {
        ctx.fill_rect(&band, state.accent.with_alpha(0.82));
        let caption_size = (band_height * 0.35).max(34.0);
        ctx.set_fill(Color::WHITE);
        ctx.set_font(caption_size, FontWeight::SemiBold);
        let caption = match state.summary.trim() {
            "" => DEFAULT_CAPTION_SUMMARY,
            summary => summary,
        };
        draw_wrapped(
            ctx,
            caption,
            band.x + BAND_PADDING,
            band.y + 16.0,
            band.width - BAND_PADDING * 2.0,
            caption_size * 1.15,
        );
    });

    let text_y = draw_byline(ctx, state, layout, layout.content_x, photo_bottom + 24.0);
    let body = Rect::new(
        layout.content_x,
        text_y,
        layout.content_width,
        layout.content_bottom - text_y,
    );
    draw_body(ctx, body_text(state, DEFAULT_BODY), BODY, body);
}
