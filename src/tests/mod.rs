//! Unit tests
//! Layout, typography, compositing, templates, image slots, session loop, config and export

pub mod typography_tests;
pub mod template_tests;
pub mod export_tests;

use crate::context::{DrawContext, TextRun};
use crate::text::BlockFace;
use crate::{Canvas, PosterSession, StudioConfig};
use base64::Engine;
use chrono::{DateTime, TimeZone, Utc};
use image::{Rgba, RgbaImage};

/// Run `f` against a block-glyph context on a fresh canvas; returns its result and the text runs
pub(crate) fn with_block_ctx<R>(
    width: u32,
    height: u32,
    f: impl FnOnce(&mut DrawContext<'_>) -> R,
) -> (R, Vec<TextRun>) {
    let mut canvas = Canvas::new(width, height);
    let face = BlockFace;
    let mut ctx = DrawContext::new(&mut canvas, &face);
    let out = f(&mut ctx);
    (out, ctx.into_runs())
}

/// Encoded PNG of a solid colour
pub(crate) fn png_bytes(width: u32, height: u32, rgba: [u8; 4]) -> Vec<u8> {
    encode_png(RgbaImage::from_pixel(width, height, Rgba(rgba)))
}

pub(crate) fn encode_png(image: RgbaImage) -> Vec<u8> {
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(image)
        .write_to(&mut std::io::Cursor::new(&mut buf), image::ImageOutputFormat::Png)
        .unwrap();
    buf
}

pub(crate) fn png_data_uri(width: u32, height: u32, rgba: [u8; 4]) -> String {
    let payload = base64::engine::general_purpose::STANDARD.encode(png_bytes(width, height, rgba));
    format!("data:image/png;base64,{payload}")
}

/// 16 Oct 2026 10:15:30 UTC (3:45 pm in Kolkata)
pub(crate) fn fixed_clock() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 16, 10, 15, 30).unwrap()
}

/// Config without a masthead file so nothing touches the filesystem
pub(crate) fn test_config() -> StudioConfig {
    StudioConfig { masthead: String::new(), ..StudioConfig::default() }
}

pub(crate) fn test_session() -> PosterSession {
    PosterSession::new(test_config(), Box::new(BlockFace)).with_clock(fixed_clock)
}

/// Devanagari words for wrapping scenarios
pub(crate) const HINDI_WORDS: [&str; 8] = [
    "समाचार", "शहर", "प्रशासन", "नागरिक", "बैठक", "विकास", "योजना", "जानकारी",
];

pub(crate) fn hindi_text(words: usize) -> String {
    (0..words)
        .map(|i| HINDI_WORDS[i % HINDI_WORDS.len()])
        .collect::<Vec<_>>()
        .join(" ")
}
