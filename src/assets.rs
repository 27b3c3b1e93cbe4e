//! Image assets - opaque references, fetching and decoding
//!
//! References come from uploads, configuration and the ad feed. They may be
//! network URLs, `data:` URIs, or local paths.

use crate::error::{PosterError, PosterResult};
use base64::Engine;
use image::RgbaImage;
use std::fmt;
use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);
const FETCH_LIMIT: u64 = 10 * 1024 * 1024;

/// Decoded RGBA bitmap, cheap to clone
#[derive(Clone)]
pub struct Bitmap {
    pub width: u32,
    pub height: u32,
    pixels: Arc<RgbaImage>,
}

impl Bitmap {
    pub fn from_image(image: RgbaImage) -> Self {
        Self {
            width: image.width(),
            height: image.height(),
            pixels: Arc::new(image),
        }
    }

    /// Decode any format the `image` crate recognises
    pub fn decode(bytes: &[u8]) -> PosterResult<Self> {
        let img = image::load_from_memory(bytes)?;
        Ok(Self::from_image(img.to_rgba8()))
    }

    /// Raw RGBA bytes, row-major
    pub fn data(&self) -> &[u8] {
        self.pixels.as_raw()
    }
}

impl fmt::Debug for Bitmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bitmap")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

/// Where an image comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// Raw file bytes (e.g. an upload)
    Bytes(Vec<u8>),
    /// `data:<mime>;base64,<payload>`
    DataUri(String),
    Url(String),
    Path(PathBuf),
}

impl ImageSource {
    /// Interpret an opaque reference; blank references mean "no image"
    pub fn from_reference(reference: &str) -> Option<Self> {
        let reference = reference.trim();
        if reference.is_empty() {
            return None;
        }
        Some(if reference.starts_with("data:") {
            Self::DataUri(reference.to_string())
        } else if reference.starts_with("http://") || reference.starts_with("https://") {
            Self::Url(reference.to_string())
        } else {
            Self::Path(PathBuf::from(reference))
        })
    }

    /// Short description for logs
    pub fn describe(&self) -> String {
        match self {
            Self::Bytes(bytes) => format!("{} bytes", bytes.len()),
            Self::DataUri(uri) => format!("data URI ({} chars)", uri.len()),
            Self::Url(url) => url.clone(),
            Self::Path(path) => path.display().to_string(),
        }
    }

    /// Fetch the encoded bytes behind this source
    pub fn fetch(&self) -> PosterResult<Vec<u8>> {
        match self {
            Self::Bytes(bytes) => Ok(bytes.clone()),
            Self::DataUri(uri) => decode_data_uri(uri),
            Self::Url(url) => fetch_url(url),
            Self::Path(path) => Ok(std::fs::read(path)?),
        }
    }

    /// Fetch and decode
    pub fn load(&self) -> PosterResult<Bitmap> {
        Bitmap::decode(&self.fetch()?)
    }
}

fn decode_data_uri(uri: &str) -> PosterResult<Vec<u8>> {
    let (header, payload) = uri
        .split_once(',')
        .ok_or_else(|| PosterError::Decode("data URI without payload".into()))?;
    if !header.ends_with(";base64") {
        return Err(PosterError::Decode("only base64 data URIs are supported".into()));
    }
    base64::engine::general_purpose::STANDARD
        .decode(payload.trim())
        .map_err(|e| PosterError::Decode(e.to_string()))
}

fn fetch_url(url: &str) -> PosterResult<Vec<u8>> {
    let response = ureq::get(url)
        .timeout(FETCH_TIMEOUT)
        .call()
        .map_err(|e| PosterError::Fetch(format!("{url}: {e}")))?;

    let mut bytes = Vec::new();
    response
        .into_reader()
        .take(FETCH_LIMIT)
        .read_to_end(&mut bytes)
        .map_err(|e| PosterError::Fetch(format!("{url}: {e}")))?;
    Ok(bytes)
}
