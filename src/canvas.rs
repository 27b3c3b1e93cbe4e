//! Canvas module - the poster drawing surface

use crate::assets::Bitmap;
use crate::{Color, Paint, PaintStyle, Rect};

/// Saved canvas state
#[derive(Clone)]
struct CanvasState {
    clip_rect: Option<Rect>,
}

/// Canvas - fixed-size RGBA pixel buffer
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
    clip_rect: Option<Rect>,
    state_stack: Vec<CanvasState>,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::TRANSPARENT; (width * height) as usize],
            clip_rect: None,
            state_stack: Vec::new(),
        }
    }

    /// Save the current clip
    pub fn save(&mut self) {
        self.state_stack.push(CanvasState {
            clip_rect: self.clip_rect,
        });
    }

    /// Restore the last saved clip
    pub fn restore(&mut self) {
        if let Some(state) = self.state_stack.pop() {
            self.clip_rect = state.clip_rect;
        }
    }

    pub fn width(&self) -> u32 { self.width }
    pub fn height(&self) -> u32 { self.height }

    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width as f32, self.height as f32)
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    pub fn clip(&self) -> Option<Rect> {
        self.clip_rect
    }

    pub fn save_depth(&self) -> usize {
        self.state_stack.len()
    }

    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    /// Narrow the clip to `rect` (intersected with any existing clip)
    pub fn clip_rect(&mut self, rect: Rect) {
        self.clip_rect = Some(match self.clip_rect {
            Some(current) => current.intersect(&rect),
            None => rect,
        });
    }

    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Color {
        if x < self.width && y < self.height {
            self.pixels[(y * self.width + x) as usize]
        } else {
            Color::TRANSPARENT
        }
    }

    /// Blend one pixel, honouring canvas bounds and clip
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }

        if let Some(clip) = &self.clip_rect {
            if x < clip.x as i32 || x >= clip.right() as i32 ||
               y < clip.y as i32 || y >= clip.bottom() as i32 {
                return;
            }
        }

        let idx = (y as u32 * self.width + x as u32) as usize;
        if color.a == 255 {
            self.pixels[idx] = color;
        } else if color.a > 0 {
            self.pixels[idx] = color.blend(&self.pixels[idx]);
        }
    }

    /// Blend with fractional coverage (glyph anti-aliasing)
    #[inline]
    pub fn set_pixel_coverage(&mut self, x: i32, y: i32, color: Color, coverage: f32) {
        if coverage <= 0.0 { return; }
        let a = (color.a as f32 * coverage.min(1.0)) as u8;
        if a > 0 {
            self.set_pixel(x, y, Color::new(color.r, color.g, color.b, a));
        }
    }

    pub fn draw_rect(&mut self, rect: &Rect, paint: &Paint) {
        match paint.style {
            PaintStyle::Fill => self.fill_rect(rect, paint.color),
            PaintStyle::Stroke => self.stroke_rect(rect, paint),
            PaintStyle::FillAndStroke => {
                self.fill_rect(rect, paint.color);
                self.stroke_rect(rect, paint);
            }
        }
    }

    pub fn fill_rect(&mut self, rect: &Rect, color: Color) {
        let x0 = rect.x.max(0.0).round() as i32;
        let y0 = rect.y.max(0.0).round() as i32;
        let x1 = rect.right().min(self.width as f32).round() as i32;
        let y1 = rect.bottom().min(self.height as f32).round() as i32;

        for y in y0..y1 {
            for x in x0..x1 {
                self.set_pixel(x, y, color);
            }
        }
    }

    /// Stroke centred on the rectangle edges; dashed when the paint carries a dash
    fn stroke_rect(&mut self, rect: &Rect, paint: &Paint) {
        let w = paint.stroke_width;
        let half = w / 2.0;
        let Some(dash) = paint.dash else {
            self.fill_rect(&Rect::new(rect.x - half, rect.y - half, rect.width + w, w), paint.color);
            self.fill_rect(&Rect::new(rect.x - half, rect.bottom() - half, rect.width + w, w), paint.color);
            self.fill_rect(&Rect::new(rect.x - half, rect.y - half, w, rect.height + w), paint.color);
            self.fill_rect(&Rect::new(rect.right() - half, rect.y - half, w, rect.height + w), paint.color);
            return;
        };

        let period = dash.on + dash.off;
        if period <= 0.0 {
            return;
        }
        // Walk the perimeter clockwise, carrying the dash phase across corners
        let corners = [
            (rect.x, rect.y, rect.right(), rect.y),
            (rect.right(), rect.y, rect.right(), rect.bottom()),
            (rect.right(), rect.bottom(), rect.x, rect.bottom()),
            (rect.x, rect.bottom(), rect.x, rect.y),
        ];
        let mut phase = 0.0f32;
        for (sx, sy, ex, ey) in corners {
            let len = (ex - sx).abs() + (ey - sy).abs();
            let (dx, dy) = if len > 0.0 { ((ex - sx) / len, (ey - sy) / len) } else { (0.0, 0.0) };
            let mut t = 0.0f32;
            while t < len {
                let in_period = phase % period;
                let (span, on) = if in_period < dash.on {
                    (dash.on - in_period, true)
                } else {
                    (period - in_period, false)
                };
                let step = span.min(len - t);
                if on {
                    let ax = sx + dx * t;
                    let ay = sy + dy * t;
                    let bx = sx + dx * (t + step);
                    let by = sy + dy * (t + step);
                    let seg = Rect::new(
                        ax.min(bx) - half,
                        ay.min(by) - half,
                        (bx - ax).abs() + w,
                        (by - ay).abs() + w,
                    );
                    self.fill_rect(&seg, paint.color);
                }
                t += step;
                phase += step;
            }
        }
    }

    /// Draw the `src` region of `bitmap` scaled into `dst` (bilinear sampling)
    pub fn draw_image_region(&mut self, bitmap: &Bitmap, src: Rect, dst: Rect) {
        if dst.is_empty() || src.is_empty() || bitmap.width == 0 || bitmap.height == 0 {
            return;
        }
        let img_w = bitmap.width;
        let img_h = bitmap.height;
        let data = bitmap.data();
        if data.len() < (img_w * img_h * 4) as usize {
            return;
        }

        let scale_x = src.width / dst.width;
        let scale_y = src.height / dst.height;

        let dest_x0 = dst.x.max(0.0).round() as i32;
        let dest_y0 = dst.y.max(0.0).round() as i32;
        let dest_x1 = dst.right().min(self.width as f32).round() as i32;
        let dest_y1 = dst.bottom().min(self.height as f32).round() as i32;

        let sample = |sx: u32, sy: u32| -> [f32; 4] {
            let sx = sx.min(img_w - 1);
            let sy = sy.min(img_h - 1);
            let idx = ((sy * img_w + sx) * 4) as usize;
            [
                data[idx] as f32,
                data[idx + 1] as f32,
                data[idx + 2] as f32,
                data[idx + 3] as f32,
            ]
        };
        let lerp = |a: f32, b: f32, t: f32| a + (b - a) * t;

        for dest_y in dest_y0..dest_y1 {
            for dest_x in dest_x0..dest_x1 {
                // Sample at pixel centres
                let local_x = (src.x + (dest_x as f32 + 0.5 - dst.x) * scale_x - 0.5).max(0.0);
                let local_y = (src.y + (dest_y as f32 + 0.5 - dst.y) * scale_y - 0.5).max(0.0);

                let src_x = local_x.floor() as u32;
                let src_y = local_y.floor() as u32;
                let fx = local_x - src_x as f32;
                let fy = local_y - src_y as f32;

                let c00 = sample(src_x, src_y);
                let c10 = sample(src_x + 1, src_y);
                let c01 = sample(src_x, src_y + 1);
                let c11 = sample(src_x + 1, src_y + 1);

                let mut out = [0u8; 4];
                for (i, channel) in out.iter_mut().enumerate() {
                    *channel = lerp(lerp(c00[i], c10[i], fx), lerp(c01[i], c11[i], fx), fy) as u8;
                }

                self.set_pixel(dest_x, dest_y, Color::new(out[0], out[1], out[2], out[3]));
            }
        }
    }

    /// Export as RGBA bytes
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut data = Vec::with_capacity((self.width * self.height * 4) as usize);
        for pixel in &self.pixels {
            data.extend_from_slice(&[pixel.r, pixel.g, pixel.b, pixel.a]);
        }
        data
    }
}
