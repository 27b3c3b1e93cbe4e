//! Poster Studio - news poster rendering engine
//! Fixed 1080x1350 canvas: masthead, ad bands, one of six content templates, footer

mod canvas;
mod color;
mod geometry;
mod paint;

pub use canvas::Canvas;
pub use color::Color;
pub use geometry::{Point, Rect};
pub use paint::{Dash, Paint, PaintStyle};

pub mod error;
pub use error::{PosterError, PosterResult};

// Fonts and the drawing handle
pub mod text;
pub mod context;

// Layout, text and image engines
pub mod layout;
pub mod typography;
pub mod compositor;

// Images and their load slots
pub mod assets;
pub mod slots;

// Content model and templates
pub mod state;
pub mod templates;
pub mod chrome;

// Session loop and its boundaries
pub mod scheduler;
pub mod config;
pub mod collaborators;
pub mod export;
pub mod session;

pub use config::{AdPair, StudioConfig};
pub use layout::Layout;
pub use session::{PosterSession, RenderReport};
pub use templates::TemplateId;

#[cfg(test)]
mod tests;
