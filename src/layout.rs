//! Layout engine - the fixed poster chrome shared by every template

use crate::Rect;

/// Fixed poster canvas size
pub const CANVAS_WIDTH: u32 = 1080;
pub const CANVAS_HEIGHT: u32 = 1350;

pub const MASTHEAD_HEIGHT: f32 = 180.0;
pub const AD_HEIGHT: f32 = 120.0;
pub const MARGIN_X: f32 = 72.0;
/// Gap between the top ad band and the content rectangle
pub const CONTENT_GAP: f32 = 36.0;
/// Reserved above the bottom ad band for the footer caption
pub const FOOTER_RESERVED: f32 = 96.0;
/// Smallest extent a computed rectangle may collapse to
pub const MIN_EXTENT: f32 = 1.0;

/// Per-repaint chrome and content geometry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub canvas_width: f32,
    pub canvas_height: f32,
    pub content_x: f32,
    pub content_y: f32,
    pub content_width: f32,
    pub content_height: f32,
    pub content_bottom: f32,
    pub top_ad_y: f32,
    pub bottom_ad_y: f32,
}

impl Layout {
    /// Pure function of the canvas size; degenerate sizes clamp to `MIN_EXTENT`
    pub fn compute(width: f32, height: f32) -> Self {
        let top_ad_y = MASTHEAD_HEIGHT;
        let bottom_ad_y = height - AD_HEIGHT;
        let content_y = top_ad_y + AD_HEIGHT + CONTENT_GAP;
        let content_bottom = (bottom_ad_y - FOOTER_RESERVED).max(content_y + MIN_EXTENT);
        let content_width = (width - MARGIN_X * 2.0).max(MIN_EXTENT);

        Self {
            canvas_width: width,
            canvas_height: height,
            content_x: MARGIN_X,
            content_y,
            content_width,
            content_height: content_bottom - content_y,
            content_bottom,
            top_ad_y,
            bottom_ad_y,
        }
    }

    /// Layout for the fixed poster canvas
    pub fn poster() -> Self {
        Self::compute(CANVAS_WIDTH as f32, CANVAS_HEIGHT as f32)
    }

    pub fn masthead(&self) -> Rect {
        Rect::new(0.0, 0.0, self.canvas_width, MASTHEAD_HEIGHT)
    }

    pub fn top_ad(&self) -> Rect {
        Rect::new(0.0, self.top_ad_y, self.canvas_width, AD_HEIGHT)
    }

    pub fn bottom_ad(&self) -> Rect {
        Rect::new(0.0, self.bottom_ad_y, self.canvas_width, AD_HEIGHT)
    }

    pub fn content(&self) -> Rect {
        Rect::new(self.content_x, self.content_y, self.content_width, self.content_height)
    }

    /// Band between the content rectangle and the bottom ad, kept for the footer
    pub fn footer(&self) -> Rect {
        Rect::new(0.0, self.content_bottom, self.canvas_width, (self.bottom_ad_y - self.content_bottom).max(0.0))
    }
}
