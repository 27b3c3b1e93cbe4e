//! Studio configuration - loaded from JSON, every field optional

use crate::error::{PosterError, PosterResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

/// A top/bottom ad image pair (opaque image references)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdPair {
    pub top: String,
    pub bottom: String,
}

impl AdPair {
    pub fn new(top: impl Into<String>, bottom: impl Into<String>) -> Self {
        Self { top: top.into(), bottom: bottom.into() }
    }
}

/// Font files; both optional, system fonts are searched otherwise
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    pub regular: Option<PathBuf>,
    pub bold: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct StudioConfig {
    /// Shown in the footer as "Made by"
    pub username: String,
    pub site_name: String,
    /// Drawn on the masthead placeholder
    pub brand_name: String,
    /// Masthead image reference
    pub masthead: String,
    pub ad_pairs: Vec<AdPair>,
    pub fonts: FontConfig,
    /// Footer clock offset from UTC (Asia/Kolkata by default)
    pub utc_offset_minutes: i32,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            username: "editor".into(),
            site_name: "www.chandigarhdinbhar.in".into(),
            brand_name: "Chandigarh Dinbhar".into(),
            masthead: "assets/masthead.png".into(),
            ad_pairs: Vec::new(),
            fonts: FontConfig::default(),
            utc_offset_minutes: 330,
        }
    }
}

impl StudioConfig {
    pub fn from_json(json: &str) -> PosterResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> PosterResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
            .map_err(|e| PosterError::Config(format!("{}: {e}", path.display())))
    }

    /// Load `path` if given and present, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> PosterResult<Self> {
        match path {
            Some(path) if path.exists() => {
                let config = Self::load(path)?;
                info!(config = %path.display(), ad_pairs = config.ad_pairs.len(), "loaded studio config");
                Ok(config)
            }
            Some(path) => {
                info!(config = %path.display(), "config file missing, using defaults");
                Ok(Self::default())
            }
            None => Ok(Self::default()),
        }
    }
}
