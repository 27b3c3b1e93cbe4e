//! Typography engine - adaptive sizing, greedy wrapping and justified paragraphs
//! with a vertical budget.

use crate::context::DrawContext;
use crate::text::FontWeight;

/// Decrement used by the adaptive font-size search
pub const FONT_STEP: f32 = 2.0;

/// Extra spacing after a paragraph, as a fraction of the line height
pub const PARAGRAPH_SPACING: f32 = 0.6;

/// Outcome of a height-bounded justified draw
#[derive(Debug, Clone, PartialEq, Default)]
pub struct JustifyResult {
    /// Cursor after the last drawn line
    pub cursor_y: f32,
    /// Text that did not fit; empty when everything was drawn
    pub remainder: String,
}

impl JustifyResult {
    pub fn overflowed(&self) -> bool {
        !self.remainder.is_empty()
    }
}

/// Split on runs of newlines, keeping leading/trailing empty paragraphs
pub fn paragraphs(text: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut start = 0;
    let mut in_break = false;
    for (i, ch) in text.char_indices() {
        if ch == '\n' {
            if !in_break {
                out.push(&text[start..i]);
                in_break = true;
            }
            start = i + 1;
        } else {
            in_break = false;
        }
    }
    out.push(&text[start..]);
    out
}

/// Largest size in `min..=base` (stepping by 2) at which every word fits `max_width`
///
/// Only individual words are tested, not whole lines. Clamps to `min` when no
/// size satisfies the constraint.
pub fn fit_font_size(
    ctx: &DrawContext<'_>,
    text: &str,
    max_width: f32,
    base: f32,
    min: f32,
    weight: FontWeight,
) -> f32 {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.is_empty() {
        return base.max(min);
    }
    let mut size = base;
    while size > min {
        let too_wide = words
            .iter()
            .any(|word| ctx.measure_with(word, size, weight) > max_width);
        if !too_wide {
            break;
        }
        size -= FONT_STEP;
    }
    size.max(min)
}

/// Greedy line packing in the current font; an over-wide word gets its own line
pub fn wrap_words(ctx: &DrawContext<'_>, words: &[&str], max_width: f32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in words {
        let candidate = if line.is_empty() {
            (*word).to_string()
        } else {
            format!("{line} {word}")
        };
        if !line.is_empty() && ctx.measure_text(&candidate) > max_width {
            lines.push(std::mem::replace(&mut line, (*word).to_string()));
        } else {
            line = candidate;
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Left-aligned wrapped text; returns the cursor after the last line
pub fn draw_wrapped(
    ctx: &mut DrawContext<'_>,
    text: &str,
    x: f32,
    y: f32,
    max_width: f32,
    line_height: f32,
) -> f32 {
    if text.trim().is_empty() {
        return y;
    }
    let paras = paragraphs(text);
    let last = paras.len() - 1;
    let mut cursor_y = y;

    for (index, paragraph) in paras.iter().enumerate() {
        let words: Vec<&str> = paragraph.split_whitespace().collect();
        if words.is_empty() {
            cursor_y += line_height;
            continue;
        }
        for line in wrap_words(ctx, &words, max_width) {
            ctx.fill_text(&line, x, cursor_y);
            cursor_y += line_height;
        }
        if index < last {
            cursor_y += line_height * PARAGRAPH_SPACING;
        }
    }
    cursor_y
}

/// Justified paragraphs with an optional height budget
///
/// Every non-final line of a paragraph is stretched to `max_width`. Drawing
/// stops as soon as the next line would cross `y + max_height`; everything
/// from that point on (including later paragraphs) comes back as the
/// remainder.
pub fn draw_justified(
    ctx: &mut DrawContext<'_>,
    text: &str,
    x: f32,
    y: f32,
    max_width: f32,
    line_height: f32,
    max_height: Option<f32>,
) -> JustifyResult {
    if text.trim().is_empty() {
        return JustifyResult { cursor_y: y, remainder: String::new() };
    }
    let max_y = y + max_height.unwrap_or(f32::INFINITY);
    let paras = paragraphs(text);
    let space_width = match ctx.measure_text(" ") {
        w if w > 0.0 => w,
        _ => 4.0,
    };
    let mut cursor_y = y;

    let overflow = |cursor_y: f32, head: Option<String>, rest: &[&str]| {
        let mut parts: Vec<String> = head.into_iter().collect();
        parts.extend(rest.iter().map(|p| (*p).to_string()));
        JustifyResult {
            cursor_y,
            remainder: parts.join("\n").trim().to_string(),
        }
    };

    for (p_index, raw) in paras.iter().enumerate() {
        let later = &paras[p_index + 1..];
        let words: Vec<&str> = raw.split_whitespace().collect();
        if words.is_empty() {
            if cursor_y + line_height > max_y {
                return overflow(cursor_y, None, later);
            }
            cursor_y += line_height;
            continue;
        }

        let mut line_words: Vec<&str> = Vec::new();
        let mut line_width = 0.0;

        for (w_index, &word) in words.iter().enumerate() {
            let word_width = ctx.measure_text(word);
            if line_words.is_empty() {
                line_words.push(word);
                line_width = word_width;
                continue;
            }
            let projected = line_width + space_width + word_width;
            if projected > max_width {
                if cursor_y + line_height > max_y {
                    let mut head = line_words.clone();
                    head.extend_from_slice(&words[w_index..]);
                    return overflow(cursor_y, Some(head.join(" ")), later);
                }
                draw_justified_line(ctx, &line_words, x, cursor_y, max_width, space_width, false);
                cursor_y += line_height;
                line_words = vec![word];
                line_width = word_width;
            } else {
                line_words.push(word);
                line_width = projected;
            }
        }

        if !line_words.is_empty() {
            if cursor_y + line_height > max_y {
                return overflow(cursor_y, Some(line_words.join(" ")), later);
            }
            draw_justified_line(ctx, &line_words, x, cursor_y, max_width, space_width, true);
            cursor_y += line_height;
        }

        if !later.is_empty() {
            if cursor_y + line_height * PARAGRAPH_SPACING > max_y {
                return overflow(cursor_y, None, later);
            }
            cursor_y += line_height * PARAGRAPH_SPACING;
        }
    }

    JustifyResult { cursor_y, remainder: String::new() }
}

/// One line: stretched across `max_width`, or left-aligned when final or single-word
fn draw_justified_line(
    ctx: &mut DrawContext<'_>,
    words: &[&str],
    x: f32,
    y: f32,
    max_width: f32,
    space_width: f32,
    is_last_line: bool,
) {
    if words.len() <= 1 || is_last_line {
        ctx.fill_text(&words.join(" "), x, y);
        return;
    }
    let widths: Vec<f32> = words.iter().map(|w| ctx.measure_text(w)).collect();
    let total: f32 = widths.iter().sum();
    let gaps = words.len() - 1;
    let gap_width = if gaps > 0 { (max_width - total) / gaps as f32 } else { space_width };

    let mut cursor_x = x;
    for (word, width) in words.iter().zip(&widths) {
        ctx.fill_text(word, cursor_x, y);
        cursor_x += width + gap_width;
    }
}
