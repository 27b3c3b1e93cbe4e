//! Raster export of the settled poster canvas (PNG or JPEG)

use crate::error::{PosterError, PosterResult};
use crate::templates::TemplateId;
use crate::{Canvas, Color};
use chrono::{DateTime, Utc};
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{ColorType, ImageEncoder};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const JPEG_QUALITY: u8 = 92;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Png,
    Jpeg,
}

impl ExportFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Jpeg => "jpeg",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Jpeg => "jpg",
        }
    }

    pub fn mime(self) -> &'static str {
        match self {
            ExportFormat::Png => "image/png",
            ExportFormat::Jpeg => "image/jpeg",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = PosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "png" => Ok(ExportFormat::Png),
            "jpeg" | "jpg" => Ok(ExportFormat::Jpeg),
            other => Err(PosterError::Encode(format!("unknown export format: {other}"))),
        }
    }
}

/// An encoded poster ready to be written or downloaded
#[derive(Debug, Clone)]
pub struct ExportArtifact {
    pub template: TemplateId,
    pub format: ExportFormat,
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// `poster-{template}-{timestamp}.{ext}` with `:` and `.` replaced by `-`
pub fn export_file_name(template: TemplateId, format: ExportFormat, at: DateTime<Utc>) -> String {
    let stamp = at.format("%Y-%m-%dT%H-%M-%S-%3fZ");
    format!("poster-{}-{}.{}", template, stamp, format.extension())
}

/// Encode the canvas; JPEG output is flattened over `background`
pub fn encode(canvas: &Canvas, format: ExportFormat, background: Color) -> PosterResult<Vec<u8>> {
    let (width, height) = (canvas.width(), canvas.height());
    let mut buf = Vec::new();
    match format {
        ExportFormat::Png => {
            PngEncoder::new(&mut buf)
                .write_image(&canvas.to_rgba(), width, height, ColorType::Rgba8)
                .map_err(|e| PosterError::Encode(format!("PNG encoding failed: {e}")))?;
        }
        ExportFormat::Jpeg => {
            let backdrop = Color { a: 255, ..background };
            let mut rgb = Vec::with_capacity((width * height * 3) as usize);
            for pixel in canvas.pixels() {
                let flat = pixel.blend(&backdrop);
                rgb.extend_from_slice(&[flat.r, flat.g, flat.b]);
            }
            JpegEncoder::new_with_quality(&mut buf, JPEG_QUALITY)
                .write_image(&rgb, width, height, ColorType::Rgb8)
                .map_err(|e| PosterError::Encode(format!("JPEG encoding failed: {e}")))?;
        }
    }
    Ok(buf)
}
