//! Design templates - six layout strategies over the shared content rectangle
//! Each template lives in its own file and has the same signature.

mod common;
mod classic;
mod compact;
mod magazine;
mod overlay;
mod two_column;
mod two_photos;

pub use common::{
    compute_photo_region, draw_byline, draw_headline_block, PhotoRegion, PhotoSpec,
    DEFAULT_BODY, DEFAULT_CAPTION_SUMMARY, DEFAULT_HEADLINE, DEFAULT_SECOND_BODY,
};
pub use two_column::{column_width, COLUMN_GAP};
pub use two_photos::secondary_height;

use crate::context::DrawContext;
use crate::layout::Layout;
use crate::state::PosterState;
use crate::Rect;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// Stable renderer signature shared by every template
pub type TemplateFn = fn(&mut DrawContext<'_>, &PosterState, &Layout);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateId {
    #[default]
    Classic,
    Compact,
    Magazine,
    Overlay,
    TwoColumn,
    TwoPhotos,
}

impl TemplateId {
    pub const ALL: [TemplateId; 6] = [
        TemplateId::Classic,
        TemplateId::Compact,
        TemplateId::Magazine,
        TemplateId::Overlay,
        TemplateId::TwoColumn,
        TemplateId::TwoPhotos,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TemplateId::Classic => "classic",
            TemplateId::Compact => "compact",
            TemplateId::Magazine => "magazine",
            TemplateId::Overlay => "overlay",
            TemplateId::TwoColumn => "two_column",
            TemplateId::TwoPhotos => "two_photos",
        }
    }

    /// Human-readable name for pickers
    pub fn label(self) -> &'static str {
        match self {
            TemplateId::Classic => "Classic",
            TemplateId::Compact => "Compact",
            TemplateId::Magazine => "Magazine",
            TemplateId::Overlay => "Overlay",
            TemplateId::TwoColumn => "Two-column",
            TemplateId::TwoPhotos => "Two Photos",
        }
    }

    /// Resolve an id, falling back to classic for anything unknown
    pub fn resolve(id: &str) -> Self {
        id.parse().unwrap_or_else(|_| {
            warn!(template = id, "unknown template id, using classic");
            TemplateId::Classic
        })
    }

    pub fn renderer(self) -> TemplateFn {
        match self {
            TemplateId::Classic => classic::render,
            TemplateId::Compact => compact::render,
            TemplateId::Magazine => magazine::render,
            TemplateId::Overlay => overlay::render,
            TemplateId::TwoColumn => two_column::render,
            TemplateId::TwoPhotos => two_photos::render,
        }
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTemplate(pub String);

impl fmt::Display for UnknownTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown template id: {}", self.0)
    }
}

impl std::error::Error for UnknownTemplate {}

impl FromStr for TemplateId {
    type Err = UnknownTemplate;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace('-', "_");
        TemplateId::ALL
            .into_iter()
            .find(|id| id.as_str() == key)
            .ok_or_else(|| UnknownTemplate(s.to_string()))
    }
}

/// Render the state's template into the layout's content rectangle
///
/// Drawing is clipped to the content band so an oversized header never
/// reaches the footer or the bottom ad.
pub fn render_template(ctx: &mut DrawContext<'_>, state: &PosterState, layout: &Layout) {
    let render = state.template.renderer();
    let band = Rect::new(0.0, layout.content_y, layout.canvas_width, layout.content_height);
    ctx.scoped(|ctx| {
        ctx.clip(band);
        render(ctx, state, layout)
    });
}
