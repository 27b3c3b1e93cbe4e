//! Draw context - the explicit drawing handle passed to every typography,
//! compositor and template call.

use crate::text::{FontFace, FontWeight};
use crate::{Canvas, Color, Paint, Rect};

/// Horizontal anchor for `fill_text`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

/// Vertical anchor for `fill_text`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextBaseline {
    /// `y` is the top of the line box
    Top,
    /// `y` is the vertical centre of the line box
    Middle,
}

/// Current text state; saved and restored with the canvas clip
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextState {
    pub fill: Color,
    pub size: f32,
    pub weight: FontWeight,
    pub align: TextAlign,
    pub baseline: TextBaseline,
}

impl Default for TextState {
    fn default() -> Self {
        Self {
            fill: Color::BLACK,
            size: 16.0,
            weight: FontWeight::Regular,
            align: TextAlign::Left,
            baseline: TextBaseline::Top,
        }
    }
}

/// One `fill_text` call as it landed on the canvas
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    /// Left edge after alignment
    pub x: f32,
    /// Top of the line box
    pub y: f32,
    pub size: f32,
    pub width: f32,
}

impl TextRun {
    pub fn bottom(&self) -> f32 {
        self.y + self.size
    }
}

pub struct DrawContext<'a> {
    canvas: &'a mut Canvas,
    face: &'a dyn FontFace,
    state: TextState,
    stack: Vec<TextState>,
    runs: Vec<TextRun>,
}

impl<'a> DrawContext<'a> {
    pub fn new(canvas: &'a mut Canvas, face: &'a dyn FontFace) -> Self {
        Self {
            canvas,
            face,
            state: TextState::default(),
            stack: Vec::new(),
            runs: Vec::new(),
        }
    }

    pub fn save(&mut self) {
        self.canvas.save();
        self.stack.push(self.state);
    }

    pub fn restore(&mut self) {
        if let Some(state) = self.stack.pop() {
            self.state = state;
            self.canvas.restore();
        }
    }

    /// Run `f` between a save and its matching restore
    pub fn scoped<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        self.save();
        let out = f(self);
        self.restore();
        out
    }

    pub fn state(&self) -> TextState {
        self.state
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn set_fill(&mut self, color: Color) {
        self.state.fill = color;
    }

    pub fn set_font(&mut self, size: f32, weight: FontWeight) {
        self.state.size = size;
        self.state.weight = weight;
    }

    pub fn set_align(&mut self, align: TextAlign) {
        self.state.align = align;
    }

    pub fn set_baseline(&mut self, baseline: TextBaseline) {
        self.state.baseline = baseline;
    }

    pub fn clip(&mut self, rect: Rect) {
        self.canvas.clip_rect(rect);
    }

    pub fn canvas_width(&self) -> f32 {
        self.canvas.width() as f32
    }

    pub fn canvas_height(&self) -> f32 {
        self.canvas.height() as f32
    }

    /// Width of `text` in the current font
    pub fn measure_text(&self, text: &str) -> f32 {
        self.face.measure(text, self.state.size, self.state.weight)
    }

    /// Width of `text` at an explicit size and weight
    pub fn measure_with(&self, text: &str, size: f32, weight: FontWeight) -> f32 {
        self.face.measure(text, size, weight)
    }

    pub fn fill_rect(&mut self, rect: &Rect, color: Color) {
        self.canvas.fill_rect(rect, color);
    }

    pub fn draw_rect(&mut self, rect: &Rect, paint: &Paint) {
        self.canvas.draw_rect(rect, paint);
    }

    pub fn canvas_mut(&mut self) -> &mut Canvas {
        &mut *self.canvas
    }

    /// Draw `text` anchored at (x, y) per the current alignment and baseline
    pub fn fill_text(&mut self, text: &str, x: f32, y: f32) {
        if text.is_empty() {
            return;
        }
        let TextState { fill, size, weight, align, baseline } = self.state;
        let width = self.face.measure(text, size, weight);
        let left = match align {
            TextAlign::Left => x,
            TextAlign::Center => x - width / 2.0,
        };
        let ascent = self.face.ascent(size);
        let descent = self.face.descent(size);
        let top = match baseline {
            TextBaseline::Top => y,
            TextBaseline::Middle => y - (ascent + descent) / 2.0,
        };
        self.face.draw(&mut *self.canvas, text, left, top + ascent, size, weight, fill);
        self.runs.push(TextRun {
            text: text.to_string(),
            x: left,
            y: top,
            size,
            width,
        });
    }

    /// Text runs drawn so far
    pub fn runs(&self) -> &[TextRun] {
        &self.runs
    }

    pub fn into_runs(self) -> Vec<TextRun> {
        self.runs
    }
}
