//! Typography engine tests
//! Block glyphs: every char is 0.6 × size wide

use super::{with_block_ctx, HINDI_WORDS};
use crate::text::FontWeight;
use crate::typography::{draw_justified, draw_wrapped, fit_font_size, paragraphs, wrap_words};
use proptest::prelude::*;

fn words_of(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

#[test]
fn test_paragraphs_collapse_newline_runs() {
    assert_eq!(paragraphs("a\n\n\nb"), vec!["a", "b"]);
    assert_eq!(paragraphs("\na\n"), vec!["", "a", ""]);
    assert_eq!(paragraphs("single"), vec!["single"]);
}

#[test]
fn test_fit_font_size_steps_down_by_two() {
    // A 10-char word needs 6 × size ≤ 300
    let (size, _) = with_block_ctx(400, 200, |ctx| {
        fit_font_size(ctx, "abcdefghij short", 300.0, 82.0, 48.0, FontWeight::Bold)
    });
    assert_eq!(size, 50.0);
}

#[test]
fn test_fit_font_size_keeps_base_when_everything_fits() {
    let (size, _) = with_block_ctx(400, 200, |ctx| fit_font_size(ctx, "a b c", 900.0, 82.0, 48.0, FontWeight::Bold));
    assert_eq!(size, 82.0);
}

#[test]
fn test_fit_font_size_clamps_to_min() {
    let long = "x".repeat(100);
    let (size, _) = with_block_ctx(400, 200, |ctx| fit_font_size(ctx, &long, 300.0, 82.0, 48.0, FontWeight::Bold));
    assert_eq!(size, 48.0);
}

#[test]
fn test_wrap_words_greedy() {
    let (lines, _) = with_block_ctx(200, 100, |ctx| {
        ctx.set_font(10.0, FontWeight::Regular);
        wrap_words(ctx, &["aaaa", "bbbb", "cccc"], 60.0)
    });
    assert_eq!(lines, vec!["aaaa bbbb".to_string(), "cccc".to_string()]);
}

#[test]
fn test_wrap_words_overwide_word_gets_own_line() {
    let (lines, _) = with_block_ctx(200, 100, |ctx| {
        ctx.set_font(10.0, FontWeight::Regular);
        wrap_words(ctx, &["ab", "abcdefghijklmnop", "cd"], 60.0)
    });
    assert_eq!(lines, vec!["ab", "abcdefghijklmnop", "cd"]);
}

#[test]
fn test_draw_wrapped_empty_draws_nothing() {
    let (cursor, runs) = with_block_ctx(200, 100, |ctx| draw_wrapped(ctx, "  \n ", 0.0, 12.0, 100.0, 20.0));
    assert_eq!(cursor, 12.0);
    assert!(runs.is_empty());
}

#[test]
fn test_draw_wrapped_adds_paragraph_spacing() {
    let (cursor, runs) = with_block_ctx(400, 400, |ctx| {
        ctx.set_font(10.0, FontWeight::Regular);
        draw_wrapped(ctx, "one\ntwo", 0.0, 0.0, 300.0, 20.0)
    });
    assert_eq!(runs.len(), 2);
    assert_eq!(runs[1].y, 32.0);
    assert_eq!(cursor, 52.0);
}

#[test]
fn test_justified_lines_span_full_width() {
    let text = "aaa bb cccc d eeeee ff ggg hhhh";
    let (result, runs) = with_block_ctx(400, 400, |ctx| {
        ctx.set_font(10.0, FontWeight::Regular);
        draw_justified(ctx, text, 10.0, 0.0, 90.0, 14.0, None)
    });
    assert!(!result.overflowed());

    let last_line_y = runs.iter().map(|r| r.y).fold(f32::MIN, f32::max);
    let mut line_ys: Vec<f32> = runs.iter().map(|r| r.y).collect();
    line_ys.dedup();
    for y in line_ys.into_iter().filter(|y| *y < last_line_y) {
        let line: Vec<_> = runs.iter().filter(|r| r.y == y).collect();
        if line.len() < 2 {
            continue;
        }
        let right = line.iter().map(|r| r.x + r.width).fold(f32::MIN, f32::max);
        assert!((right - 100.0).abs() < 0.01, "line at {y} ends at {right}");
    }
}

#[test]
fn test_justified_last_line_is_left_aligned() {
    let (_, runs) = with_block_ctx(400, 400, |ctx| {
        ctx.set_font(10.0, FontWeight::Regular);
        draw_justified(ctx, "aaaa bbbb cccc dd", 0.0, 0.0, 60.0, 14.0, None)
    });
    let last = runs.last().unwrap();
    assert_eq!(last.text, "cccc dd");
    assert_eq!(last.x, 0.0);
}

#[test]
fn test_justified_remainder_carries_later_paragraphs() {
    let text = "aaaa bbbb cccc\ndddd eeee\nffff";
    let (result, runs) = with_block_ctx(400, 400, |ctx| {
        ctx.set_font(10.0, FontWeight::Regular);
        draw_justified(ctx, text, 0.0, 0.0, 60.0, 20.0, Some(40.0))
    });
    assert!(result.overflowed());
    assert_eq!(result.remainder, "dddd eeee\nffff");
    assert!(runs.iter().all(|r| r.y + 20.0 <= 40.0));
}

#[test]
fn test_justified_whitespace_runs_are_single_separators() {
    let (result, runs) = with_block_ctx(400, 400, |ctx| {
        ctx.set_font(10.0, FontWeight::Regular);
        draw_justified(ctx, "aaaa  \tbbbb\t cc", 0.0, 0.0, 300.0, 20.0, None)
    });
    assert!(!result.overflowed());
    assert_eq!(runs.len(), 1);
    assert_eq!(runs[0].text, "aaaa bbbb cc");
}

#[test]
fn test_justified_budget_ending_at_blank_paragraph() {
    // "aaaa" plus paragraph spacing uses exactly the 32px budget
    let (result, runs) = with_block_ctx(400, 400, |ctx| {
        ctx.set_font(10.0, FontWeight::Regular);
        draw_justified(ctx, "aaaa\n \nbbbb\ncccc", 0.0, 0.0, 300.0, 20.0, Some(32.0))
    });
    assert_eq!(runs.len(), 1);
    assert_eq!(runs[0].text, "aaaa");
    assert_eq!(result.cursor_y, 32.0);
    assert_eq!(result.remainder, "bbbb\ncccc");
}

#[test]
fn test_justified_blank_paragraph_takes_a_line() {
    let (result, runs) = with_block_ctx(400, 400, |ctx| {
        ctx.set_font(10.0, FontWeight::Regular);
        draw_justified(ctx, "समाचार\n \nशहर", 0.0, 0.0, 300.0, 20.0, None)
    });
    assert!(!result.overflowed());
    assert_eq!(runs.len(), 2);
    // line + spacing, blank line, then the last paragraph
    assert_eq!(runs[1].y, 20.0 + 12.0 + 20.0);
}

#[test]
fn test_justified_zero_height_returns_everything() {
    let (result, runs) = with_block_ctx(400, 400, |ctx| {
        ctx.set_font(10.0, FontWeight::Regular);
        draw_justified(ctx, "alpha beta", 0.0, 5.0, 300.0, 20.0, Some(0.0))
    });
    assert!(runs.is_empty());
    assert_eq!(result.cursor_y, 5.0);
    assert_eq!(result.remainder, "alpha beta");
}

#[test]
fn test_justified_empty_text() {
    let (result, runs) = with_block_ctx(100, 100, |ctx| draw_justified(ctx, "", 0.0, 7.0, 50.0, 10.0, Some(5.0)));
    assert!(runs.is_empty());
    assert_eq!(result.cursor_y, 7.0);
    assert!(!result.overflowed());
}

fn word_strategy() -> impl Strategy<Value = String> {
    "[a-z]{1,9}"
}

fn mixed_word_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => word_strategy(),
        1 => prop::sample::select(HINDI_WORDS.to_vec()).prop_map(str::to_string),
    ]
}

fn separator_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![" ", "  ", "\t", " \t "])
}

fn paragraph_join_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["\n", "\n\n", "\n \n", "\n\t\n"])
}

fn paragraph_strategy() -> impl Strategy<Value = String> {
    (mixed_word_strategy(), prop::collection::vec((separator_strategy(), mixed_word_strategy()), 0..11)).prop_map(
        |(first, rest)| {
            let mut para = first;
            for (sep, word) in rest {
                para.push_str(sep);
                para.push_str(&word);
            }
            para
        },
    )
}

fn text_strategy() -> impl Strategy<Value = String> {
    (paragraph_strategy(), prop::collection::vec((paragraph_join_strategy(), paragraph_strategy()), 0..4)).prop_map(
        |(first, rest)| {
            let mut text = first;
            for (join, para) in rest {
                text.push_str(join);
                text.push_str(&para);
            }
            text
        },
    )
}

proptest! {
    #[test]
    fn prop_justified_is_lossless_and_bounded(
        text in text_strategy(),
        max_width in 40.0f32..300.0,
        lines in 0u32..12,
    ) {
        let line_height = 14.0;
        let max_height = lines as f32 * line_height;
        let (result, runs) = with_block_ctx(400, 400, |ctx| {
            ctx.set_font(10.0, FontWeight::Regular);
            draw_justified(ctx, &text, 0.0, 0.0, max_width, line_height, Some(max_height))
        });

        let mut seen: Vec<String> = runs.iter().flat_map(|r| words_of(&r.text)).collect();
        seen.extend(words_of(&result.remainder));
        prop_assert_eq!(seen, words_of(&text));

        for run in &runs {
            prop_assert!(run.y + line_height <= max_height + 0.001);
        }
        prop_assert!(result.cursor_y <= max_height + 0.001);
    }

    #[test]
    fn prop_unbounded_justify_has_no_remainder(text in text_strategy(), max_width in 40.0f32..300.0) {
        let (result, _) = with_block_ctx(400, 400, |ctx| {
            ctx.set_font(10.0, FontWeight::Regular);
            draw_justified(ctx, &text, 0.0, 0.0, max_width, 14.0, None)
        });
        prop_assert!(!result.overflowed());
    }

    #[test]
    fn prop_fit_font_size_stays_in_range(
        words in prop::collection::vec(word_strategy(), 1..8),
        max_width in 20.0f32..900.0,
    ) {
        let text = words.join(" ");
        let (size, _) = with_block_ctx(10, 10, |ctx| fit_font_size(ctx, &text, max_width, 82.0, 48.0, FontWeight::Bold));
        prop_assert!((48.0..=82.0).contains(&size));
        if size > 48.0 {
            for word in &words {
                prop_assert!(word.chars().count() as f32 * size * 0.6 <= max_width);
            }
        }
    }
}
