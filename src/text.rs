//! Text rendering module - font faces with glyph rasterisation and a font-less fallback

use crate::error::{PosterError, PosterResult};
use crate::{Canvas, Color};
use fontdue::{Font, FontSettings, Metrics};
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::Path;
use tracing::{info, warn};

/// CSS-style font weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FontWeight {
    Regular,
    Medium,
    SemiBold,
    Bold,
}

impl FontWeight {
    pub fn numeric(self) -> u16 {
        match self {
            FontWeight::Regular => 400,
            FontWeight::Medium => 500,
            FontWeight::SemiBold => 600,
            FontWeight::Bold => 700,
        }
    }

    pub fn is_heavy(self) -> bool {
        self.numeric() >= 600
    }
}

/// Anything that can measure and paint a run of text
pub trait FontFace {
    /// Advance width of `text` at `size`
    fn measure(&self, text: &str, size: f32, weight: FontWeight) -> f32;

    /// Distance from the top of the line box to the baseline
    fn ascent(&self, size: f32) -> f32;

    /// Distance from the baseline to the bottom of the line box
    fn descent(&self, size: f32) -> f32;

    /// Paint `text` with its baseline at `baseline_y`; returns the advance
    fn draw(
        &self,
        canvas: &mut Canvas,
        text: &str,
        x: f32,
        baseline_y: f32,
        size: f32,
        weight: FontWeight,
        color: Color,
    ) -> f32;
}

type GlyphKey = (char, u32, bool);

/// Glyph face backed by fontdue, with an optional bold companion
pub struct GlyphFace {
    regular: Font,
    bold: Option<Font>,
    /// (char, size*10, bold) -> rasterised glyph
    cache: RefCell<HashMap<GlyphKey, (Metrics, Vec<u8>)>>,
}

/// System fonts that cover Devanagari and Latin, most preferred first
const SYSTEM_REGULAR_FONTS: &[&str] = &[
    "/usr/share/fonts/truetype/noto/NotoSansDevanagari-Regular.ttf",
    "/usr/share/fonts/noto/NotoSansDevanagari-Regular.ttf",
    "/usr/share/fonts/google-noto/NotoSansDevanagari-Regular.ttf",
    "/Library/Fonts/NotoSansDevanagari-Regular.ttf",
    "C:\\Windows\\Fonts\\mangal.ttf",
    "/usr/share/fonts/truetype/mukta/Mukta-Regular.ttf",
    "/System/Library/Fonts/Kohinoor.ttc",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
];

const SYSTEM_BOLD_FONTS: &[&str] = &[
    "/usr/share/fonts/truetype/noto/NotoSansDevanagari-Bold.ttf",
    "/usr/share/fonts/noto/NotoSansDevanagari-Bold.ttf",
    "/usr/share/fonts/google-noto/NotoSansDevanagari-Bold.ttf",
    "/Library/Fonts/NotoSansDevanagari-Bold.ttf",
    "C:\\Windows\\Fonts\\mangalb.ttf",
    "/usr/share/fonts/truetype/mukta/Mukta-Bold.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
];

fn parse_font(data: &[u8]) -> PosterResult<Font> {
    let settings = FontSettings {
        scale: 40.0,
        ..Default::default()
    };
    Font::from_bytes(data, settings).map_err(|e| PosterError::Font(e.to_string()))
}

impl GlyphFace {
    pub fn from_bytes(regular: &[u8], bold: Option<&[u8]>) -> PosterResult<Self> {
        let regular = parse_font(regular)?;
        let bold = bold.map(parse_font).transpose()?;
        Ok(Self {
            regular,
            bold,
            cache: RefCell::new(HashMap::new()),
        })
    }

    pub fn from_files(regular: &Path, bold: Option<&Path>) -> PosterResult<Self> {
        let regular_data = std::fs::read(regular)?;
        let bold_data = bold.map(std::fs::read).transpose()?;
        Self::from_bytes(&regular_data, bold_data.as_deref())
    }

    /// Probe the well-known system font locations
    pub fn load_system() -> PosterResult<Self> {
        let regular = SYSTEM_REGULAR_FONTS
            .iter()
            .map(Path::new)
            .find(|p| p.exists())
            .ok_or_else(|| PosterError::Font("no system font found".into()))?;
        let bold = SYSTEM_BOLD_FONTS.iter().map(Path::new).find(|p| p.exists());
        let face = Self::from_files(regular, bold)?;
        info!(regular = %regular.display(), bold = ?bold.map(|b| b.display().to_string()), "loaded system font");
        Ok(face)
    }

    fn font_for(&self, weight: FontWeight) -> (&Font, bool) {
        match (&self.bold, weight.is_heavy()) {
            (Some(bold), true) => (bold, false),
            (None, true) => (&self.regular, true),
            _ => (&self.regular, false),
        }
    }

    fn glyph(&self, ch: char, size: f32, weight: FontWeight) -> (Metrics, Vec<u8>) {
        let heavy = weight.is_heavy();
        let key = (ch, (size * 10.0) as u32, heavy);
        if let Some(hit) = self.cache.borrow().get(&key) {
            return hit.clone();
        }
        let (font, _) = self.font_for(weight);
        let rendered = font.rasterize(ch, size);
        self.cache.borrow_mut().insert(key, rendered.clone());
        rendered
    }
}

impl FontFace for GlyphFace {
    fn measure(&self, text: &str, size: f32, weight: FontWeight) -> f32 {
        let (font, _) = self.font_for(weight);
        text.chars().map(|ch| font.metrics(ch, size).advance_width).sum()
    }

    fn ascent(&self, size: f32) -> f32 {
        self.regular
            .horizontal_line_metrics(size)
            .map(|m| m.ascent)
            .unwrap_or(size * 0.8)
    }

    fn descent(&self, size: f32) -> f32 {
        self.regular
            .horizontal_line_metrics(size)
            .map(|m| -m.descent)
            .unwrap_or(size * 0.2)
    }

    fn draw(
        &self,
        canvas: &mut Canvas,
        text: &str,
        x: f32,
        baseline_y: f32,
        size: f32,
        weight: FontWeight,
        color: Color,
    ) -> f32 {
        let (_, synthetic_bold) = self.font_for(weight);
        let smear = if synthetic_bold { (size / 48.0).max(1.0).round() as i32 } else { 0 };
        let mut cursor_x = x;

        for ch in text.chars() {
            let (metrics, bitmap) = self.glyph(ch, size, weight);
            if metrics.width == 0 || metrics.height == 0 {
                cursor_x += metrics.advance_width;
                continue;
            }

            let glyph_x = cursor_x + metrics.xmin as f32;
            let glyph_y = baseline_y - metrics.height as f32 - metrics.ymin as f32;

            for gy in 0..metrics.height {
                for gx in 0..metrics.width {
                    let coverage = bitmap[gy * metrics.width + gx] as f32 / 255.0;
                    if coverage <= 0.001 {
                        continue;
                    }
                    let px = (glyph_x + gx as f32).round() as i32;
                    let py = (glyph_y + gy as f32).round() as i32;
                    for offset in 0..=smear {
                        canvas.set_pixel_coverage(px + offset, py, color, coverage);
                    }
                }
            }

            cursor_x += metrics.advance_width;
        }
        cursor_x - x
    }
}

/// Font-less face: fixed advances, one box per glyph
///
/// Used when no font file can be found, and wherever metrics must be
/// deterministic.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlockFace;

impl BlockFace {
    pub const ADVANCE: f32 = 0.6;
}

impl FontFace for BlockFace {
    fn measure(&self, text: &str, size: f32, _weight: FontWeight) -> f32 {
        text.chars().count() as f32 * size * Self::ADVANCE
    }

    fn ascent(&self, size: f32) -> f32 {
        size * 0.8
    }

    fn descent(&self, size: f32) -> f32 {
        size * 0.2
    }

    fn draw(
        &self,
        canvas: &mut Canvas,
        text: &str,
        x: f32,
        baseline_y: f32,
        size: f32,
        _weight: FontWeight,
        color: Color,
    ) -> f32 {
        let advance = size * Self::ADVANCE;
        let glyph_height = size * 0.7;
        for (i, ch) in text.chars().enumerate() {
            if ch.is_whitespace() {
                continue;
            }
            let gx = x + i as f32 * advance;
            let rect = crate::Rect::new(gx + 1.0, baseline_y - glyph_height, advance - 2.0, glyph_height);
            canvas.fill_rect(&rect, color);
        }
        self.measure(text, size, FontWeight::Regular)
    }
}

/// Pick the best available face: configured files, then system fonts, then blocks
pub fn resolve_face(regular: Option<&Path>, bold: Option<&Path>) -> Box<dyn FontFace> {
    if let Some(path) = regular {
        match GlyphFace::from_files(path, bold) {
            Ok(face) => {
                info!(font = %path.display(), "loaded configured font");
                return Box::new(face);
            }
            Err(err) => warn!(font = %path.display(), error = %err, "configured font unusable"),
        }
    }
    match GlyphFace::load_system() {
        Ok(face) => Box::new(face),
        Err(err) => {
            warn!(error = %err, "falling back to block glyphs");
            Box::new(BlockFace)
        }
    }
}
