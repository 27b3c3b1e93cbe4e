//! Poster state - the mutable content model every repaint reads

use crate::slots::{ImageSlot, SlotId};
use crate::templates::TemplateId;
use crate::Color;
use serde::{Deserialize, Serialize};

pub const DEFAULT_BACKGROUND: Color = Color::from_hex(0xffffff);
pub const DEFAULT_ACCENT: Color = Color::from_hex(0xc62828);

/// Editable poster content
///
/// Fields are written only through `PosterSession` setters, each of which
/// requests a repaint. No history is kept.
#[derive(Debug, Clone)]
pub struct PosterState {
    pub(crate) template: TemplateId,
    pub(crate) headline: String,
    pub(crate) summary: String,
    pub(crate) body: String,
    pub(crate) byline: String,
    pub(crate) background: Color,
    pub(crate) accent: Color,
    pub(crate) primary_photo: ImageSlot,
    pub(crate) secondary_photo: ImageSlot,
}

impl Default for PosterState {
    fn default() -> Self {
        Self {
            template: TemplateId::default(),
            headline: String::new(),
            summary: String::new(),
            body: String::new(),
            byline: String::new(),
            background: DEFAULT_BACKGROUND,
            accent: DEFAULT_ACCENT,
            primary_photo: ImageSlot::default(),
            secondary_photo: ImageSlot::default(),
        }
    }
}

impl PosterState {
    pub fn template(&self) -> TemplateId { self.template }
    pub fn headline(&self) -> &str { &self.headline }
    pub fn summary(&self) -> &str { &self.summary }
    pub fn body(&self) -> &str { &self.body }
    pub fn byline(&self) -> &str { &self.byline }
    pub fn background(&self) -> Color { self.background }
    pub fn accent(&self) -> Color { self.accent }
    pub fn primary_photo(&self) -> &ImageSlot { &self.primary_photo }
    pub fn secondary_photo(&self) -> &ImageSlot { &self.secondary_photo }
}

/// Masthead and ad bitmaps shared read-only by every template
#[derive(Debug, Clone, Default)]
pub struct StaticAssets {
    pub(crate) masthead: ImageSlot,
    pub(crate) top_ad: ImageSlot,
    pub(crate) bottom_ad: ImageSlot,
}

impl StaticAssets {
    pub fn masthead(&self) -> &ImageSlot { &self.masthead }
    pub fn top_ad(&self) -> &ImageSlot { &self.top_ad }
    pub fn bottom_ad(&self) -> &ImageSlot { &self.bottom_ad }
}

/// Serialisable snapshot of the editable fields (content files, CLI input)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PosterContent {
    /// Template id; unknown ids fall back to classic
    pub template: Option<String>,
    pub headline: String,
    pub summary: String,
    pub body: String,
    pub byline: String,
    pub background_color: Option<Color>,
    pub accent_color: Option<Color>,
    /// Image references (path, URL or data URI)
    pub primary_photo: Option<String>,
    pub secondary_photo: Option<String>,
}

impl PosterContent {
    /// Image references keyed by slot, skipping unset ones
    pub fn photo_references(&self) -> Vec<(SlotId, &str)> {
        [
            (SlotId::PrimaryPhoto, self.primary_photo.as_deref()),
            (SlotId::SecondaryPhoto, self.secondary_photo.as_deref()),
        ]
        .into_iter()
        .filter_map(|(slot, reference)| reference.map(|r| (slot, r)))
        .collect()
    }
}
