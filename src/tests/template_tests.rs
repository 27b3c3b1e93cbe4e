//! Template registry and per-template layout tests

use super::{hindi_text, with_block_ctx, HINDI_WORDS};
use crate::context::TextRun;
use crate::layout::Layout;
use crate::state::PosterState;
use crate::templates::{
    column_width, compute_photo_region, draw_headline_block, render_template, secondary_height,
    PhotoSpec, TemplateId, COLUMN_GAP, DEFAULT_HEADLINE,
};
use proptest::prelude::*;

fn render(state: &PosterState) -> Vec<TextRun> {
    let layout = Layout::poster();
    let ((), runs) = with_block_ctx(1080, 1350, |ctx| {
        render_template(ctx, state, &layout);
        assert_eq!(ctx.depth(), 0);
        assert_eq!(ctx.canvas_mut().save_depth(), 0);
    });
    runs
}

fn state_for(template: TemplateId) -> PosterState {
    PosterState { template, byline: "संवाददाता".into(), ..PosterState::default() }
}

#[test]
fn test_template_ids_parse() {
    assert_eq!("two_column".parse::<TemplateId>().unwrap(), TemplateId::TwoColumn);
    assert_eq!("Two-Photos".parse::<TemplateId>().unwrap(), TemplateId::TwoPhotos);
    assert!("poster".parse::<TemplateId>().is_err());
    assert_eq!(TemplateId::resolve("nonexistent"), TemplateId::Classic);
    assert_eq!(TemplateId::default(), TemplateId::Classic);
}

#[test]
fn test_template_ids_are_stable() {
    let ids: Vec<&str> = TemplateId::ALL.iter().map(|id| id.as_str()).collect();
    assert_eq!(ids, ["classic", "compact", "magazine", "overlay", "two_column", "two_photos"]);
    for id in TemplateId::ALL {
        assert_eq!(id.to_string().parse::<TemplateId>().unwrap(), id);
    }
}

#[test]
fn test_every_template_renders_inside_content() {
    let layout = Layout::poster();
    for id in TemplateId::ALL {
        let runs = render(&state_for(id));
        assert!(!runs.is_empty(), "{id} drew nothing");
        for run in &runs {
            assert!(run.y >= layout.content_y - 0.01, "{id}: '{}' above content", run.text);
            assert!(
                run.bottom() <= layout.content_bottom + 0.01,
                "{id}: '{}' ends at {} past {}",
                run.text,
                run.bottom(),
                layout.content_bottom
            );
        }
    }
}

#[test]
fn test_blank_headline_uses_default() {
    let runs = render(&PosterState::default());
    let headline: Vec<&str> = runs.iter().filter(|r| r.size >= 48.0).map(|r| r.text.as_str()).collect();
    assert_eq!(headline.join(" "), DEFAULT_HEADLINE);
}

#[test]
fn test_classic_without_photo_shows_placeholder() {
    let runs = render(&state_for(TemplateId::Classic));
    assert!(runs.iter().any(|r| r.text == "Upload primary photo"));
    assert!(!runs.iter().any(|r| r.text == "Upload secondary photo"));
}

#[test]
fn test_two_photos_shows_both_placeholders() {
    let runs = render(&state_for(TemplateId::TwoPhotos));
    assert!(runs.iter().any(|r| r.text == "Upload primary photo"));
    assert!(runs.iter().any(|r| r.text == "Upload secondary photo"));
}

#[test]
fn test_summary_kicker_precedes_headline() {
    let state = PosterState {
        summary: "ताज़ा खबर".into(),
        headline: "शहर में बारिश".into(),
        ..PosterState::default()
    };
    let runs = render(&state);
    let kicker = runs.iter().find(|r| r.text == "ताज़ा खबर").unwrap();
    let headline = runs.iter().find(|r| r.text == "शहर में बारिश").unwrap();
    assert_eq!(kicker.size, 36.0);
    assert_eq!(kicker.y, Layout::poster().content_y);
    assert!(headline.y >= kicker.y + 36.0 * 1.2 + 12.0 - 0.01);
}

#[test]
fn test_two_column_flows_remainder_into_second_column() {
    let layout = Layout::poster();
    let state = PosterState {
        template: TemplateId::TwoColumn,
        headline: "नगर निगम की बैठक".into(),
        body: hindi_text(120),
        ..PosterState::default()
    };
    let runs = render(&state);
    let body: Vec<&TextRun> = runs.iter().filter(|r| r.size == 34.0).collect();
    let second_x = layout.content_x + column_width(&layout) + COLUMN_GAP;

    assert!(body.iter().any(|r| r.x < second_x), "first column empty");
    assert!(body.iter().any(|r| r.x >= second_x - 0.01), "nothing flowed into column two");
    for run in &body {
        assert!(run.bottom() <= layout.content_bottom + 0.01);
        assert!(run.x + run.width <= layout.content_x + layout.content_width + 0.01);
    }

    // Columns start on the same baseline
    let first_top = body.iter().filter(|r| r.x < second_x).map(|r| r.y).fold(f32::MAX, f32::min);
    let second_top = body.iter().filter(|r| r.x >= second_x - 0.01).map(|r| r.y).fold(f32::MAX, f32::min);
    assert_eq!(first_top, second_top);
}

#[test]
fn test_two_column_short_body_stays_in_first_column() {
    let layout = Layout::poster();
    let state = PosterState { template: TemplateId::TwoColumn, body: hindi_text(4), ..PosterState::default() };
    let runs = render(&state);
    let second_x = layout.content_x + column_width(&layout) + COLUMN_GAP;
    assert!(runs.iter().filter(|r| r.size == 34.0).all(|r| r.x < second_x));
}

#[test]
fn test_photo_region_follows_template_fraction() {
    let layout = Layout::poster();
    let region = compute_photo_region(&layout, 500.0, PhotoSpec::new(0.52, 260.0, 160.0));
    assert_eq!(region.y, 503.0);
    assert!((region.height - 798.0 * 0.52).abs() < 0.01);
}

#[test]
fn test_photo_region_caps_at_max() {
    let layout = Layout::poster();
    let region = compute_photo_region(&layout, 340.0, PhotoSpec::new(0.9, 260.0, 120.0));
    assert_eq!(region.height, 540.0);
}

#[test]
fn test_photo_region_tight_space_keeps_floor() {
    let layout = Layout::poster();
    let region = compute_photo_region(&layout, 1000.0, PhotoSpec::new(0.52, 260.0, 160.0));
    assert_eq!(region.y, 1003.0);
    assert_eq!(region.height, 160.0);
}

#[test]
fn test_photo_region_pulls_back_to_leave_room() {
    let layout = Layout::poster();
    // 331 available: the 0.52 target would crowd out the body
    let region = compute_photo_region(&layout, 800.0, PhotoSpec::new(0.52, 260.0, 160.0));
    assert_eq!(region.height, 260.0);
    assert!(region.bottom() <= layout.content_bottom);
}

#[test]
fn test_secondary_height_bounds() {
    assert_eq!(secondary_height(100.0), 200.0);
    assert_eq!(secondary_height(600.0), 300.0);
    assert_eq!(secondary_height(2000.0), 420.0);
}

#[test]
fn test_two_column_mixed_script_scenario() {
    let layout = Layout::poster();
    let mut body = String::new();
    let mut i = 0;
    while body.chars().count() < 400 {
        let word = if i % 3 == 0 { "update" } else { HINDI_WORDS[i % HINDI_WORDS.len()] };
        if !body.is_empty() {
            body.push(' ');
        }
        body.push_str(word);
        i += 1;
    }
    let state = PosterState {
        template: TemplateId::TwoColumn,
        headline: "परीक्षण शीर्षक".into(),
        body,
        ..PosterState::default()
    };
    let runs = render(&state);
    let second_x = layout.content_x + column_width(&layout) + COLUMN_GAP;
    assert!(runs.iter().any(|r| r.size == 34.0 && r.x >= second_x - 0.01));
    assert!(runs.iter().all(|r| r.bottom() <= layout.content_bottom + 0.01));
}

#[test]
fn test_switching_templates_repaints_fully() {
    let state = PosterState { body: hindi_text(30), byline: "ब्यूरो".into(), ..PosterState::default() };
    for from in TemplateId::ALL {
        for to in TemplateId::ALL {
            for id in [from, to] {
                let runs = render(&PosterState { template: id, ..state.clone() });
                assert!(runs.iter().any(|r| r.text == "ब्यूरो"), "{id} lost the byline");
                assert!(runs.iter().any(|r| r.size >= 48.0), "{id} lost the headline");
            }
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    // Only boundedness: text past column two is dropped
    #[test]
    fn prop_two_column_stays_in_bounds(words in 0usize..300, with_byline in any::<bool>()) {
        let layout = Layout::poster();
        let state = PosterState {
            template: TemplateId::TwoColumn,
            body: hindi_text(words),
            byline: if with_byline { "संवाददाता".into() } else { String::new() },
            ..PosterState::default()
        };
        for run in render(&state) {
            prop_assert!(run.bottom() <= layout.content_bottom + 0.01);
            prop_assert!(run.x + run.width <= layout.content_x + layout.content_width + 0.01);
        }
    }
}

#[test]
fn test_oversized_header_stays_out_of_footer() {
    let layout = Layout::poster();
    let state = PosterState {
        summary: hindi_text(40),
        headline: hindi_text(30),
        byline: "संवाददाता".into(),
        ..PosterState::default()
    };
    let ((), header_runs) = with_block_ctx(1080, 1350, |ctx| {
        let bottom = draw_headline_block(ctx, &state, &layout);
        assert!(bottom > layout.content_bottom, "header ends at {bottom}");
    });
    assert!(!header_runs.is_empty());

    let first_free_row = layout.content_bottom.ceil() as u32 + 1;
    for id in TemplateId::ALL {
        let state = PosterState { template: id, ..state.clone() };
        let ((), runs) = with_block_ctx(1080, 1350, |ctx| {
            render_template(ctx, &state, &layout);
            let canvas = ctx.canvas_mut();
            assert_eq!(canvas.clip(), None, "{id} leaked its clip");
            for y in first_free_row..canvas.height() {
                for x in (0..canvas.width()).step_by(7) {
                    assert_eq!(canvas.get_pixel(x, y).a, 0, "{id} painted ({x}, {y})");
                }
            }
        });
        assert!(!runs.iter().any(|r| r.text == "संवाददाता"), "{id} drew the byline below content");
    }
}
