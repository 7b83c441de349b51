use lumina::{
    constants::{GAUGE_WIDTH, RUBRIC_BAR_WIDTH},
    essay::{EssayResult, FeedbackItem, FeedbackKind, NlpMetrics, RubricScores},
    report,
};

fn plain() {
    colored::control::set_override(false);
}

fn sample_result() -> EssayResult {
    EssayResult::builder()
        .overall_score(72.0)
        .rubric_scores(
            RubricScores::builder()
                .content(70.0)
                .organization(75.0)
                .grammar(80.0)
                .vocabulary(65.0)
                .build(),
        )
        .metrics(
            NlpMetrics::builder()
                .word_count(60_u32)
                .sentence_count(1_u32)
                .readability_score("8th grade")
                .lexical_diversity(0.02)
                .sentence_complexity(1.0)
                .build(),
        )
        .feedback(vec![
            FeedbackItem::builder()
                .category("Organization")
                .kind(FeedbackKind::Improvement)
                .text("Add transitions between paragraphs.")
                .build(),
            FeedbackItem::builder()
                .category("Content")
                .kind(FeedbackKind::Positive)
                .text("Clear central argument.")
                .build(),
        ])
        .summary("Needs variety.")
        .build()
}

#[test]
fn gauge_displays_the_raw_score() {
    plain();

    assert!(report::gauge(72.0).ends_with("72"));
    assert!(report::gauge(66.5).ends_with("66.5"));
    assert!(report::gauge(0.0).ends_with("0"));
}

#[test]
fn gauge_does_not_clamp_out_of_range_scores() {
    plain();

    // 150/100 fills the track to its end; the label stays raw.
    assert!(report::gauge(150.0).ends_with("150"));
    // Negative scores leave the track empty but keep their label.
    let below = report::gauge(-10.0);
    assert!(below.ends_with("-10"));
    assert!(!below.contains('█'));
}

#[test]
fn lexical_diversity_formats_as_one_decimal_percent() {
    assert_eq!(report::format_lexical_diversity(0.02), "2.0%");
    assert_eq!(report::format_lexical_diversity(0.1234), "12.3%");
    assert_eq!(report::format_lexical_diversity(1.0), "100.0%");
    assert_eq!(report::format_lexical_diversity(0.0), "0.0%");
}

#[test]
fn sentence_complexity_formats_out_of_ten() {
    assert_eq!(report::format_sentence_complexity(1.0), "1.0/10");
    assert_eq!(report::format_sentence_complexity(7.5), "7.5/10");
    // Out-of-scale values are formatted, not clamped.
    assert_eq!(report::format_sentence_complexity(12.0), "12.0/10");
}

#[test]
fn metrics_panel_shows_each_value_verbatim() {
    plain();
    let panel = report::metrics_panel(&sample_result().metrics);

    assert!(panel.contains("NLP Metrics"));
    assert!(panel.contains("Word Count"));
    assert!(panel.contains("60"));
    assert!(panel.contains("Sentences"));
    assert!(panel.contains("8th grade"));
    assert!(panel.contains("2.0%"));
    assert!(panel.contains("1.0/10"));
}

#[test]
fn rubric_chart_lists_every_axis_with_its_raw_score() {
    plain();
    let chart = report::rubric_chart(&sample_result().rubric_scores);

    assert!(chart.contains("Content"));
    assert!(chart.contains("70"));
    assert!(chart.contains("Organization"));
    assert!(chart.contains("75"));
    assert!(chart.contains("Grammar"));
    assert!(chart.contains("80"));
    assert!(chart.contains("Vocabulary"));
    assert!(chart.contains("65"));
}

#[test]
fn feedback_cards_preserve_service_order() {
    plain();
    let result = sample_result();
    let cards = report::feedback_cards(&result.feedback);

    let improvement = cards
        .find("Add transitions between paragraphs.")
        .expect("improvement item rendered");
    let positive = cards
        .find("Clear central argument.")
        .expect("positive item rendered");

    // The improvement item came first from the service, so it renders first,
    // ahead of the positive one.
    assert!(improvement < positive);
}

#[test]
fn feedback_cards_mark_kinds_differently() {
    plain();
    let cards = report::feedback_cards(&sample_result().feedback);

    assert!(cards.contains("! ORGANIZATION"));
    assert!(cards.contains("+ CONTENT"));
}

#[test]
fn empty_feedback_renders_a_placeholder() {
    plain();
    let cards = report::feedback_cards(&[]);

    assert!(cards.contains("(none)"));
}

#[test]
fn render_includes_every_section() {
    plain();
    let rendered = report::render(&sample_result());

    assert!(rendered.contains("Grading Report"));
    assert!(rendered.contains("Overall Grade"));
    assert!(rendered.contains("Needs variety."));
    assert!(rendered.contains("NLP Metrics"));
    assert!(rendered.contains("Rubric Analysis"));
    assert!(rendered.contains("Feedback"));
    assert!(rendered.contains("New Analysis"));
}

#[test]
fn render_trusts_out_of_range_results_as_is() {
    plain();
    let mut result = sample_result();
    result.overall_score = 150.0;
    result.rubric_scores.grammar = -5.0;
    result.metrics.sentence_complexity = 12.0;

    let rendered = report::render(&result);

    assert!(rendered.contains("150"));
    assert!(rendered.contains("-5"));
    assert!(rendered.contains("12.0/10"));
}

#[test]
fn gauge_saturates_the_track_for_huge_scores() {
    plain();
    let full = "█".repeat(GAUGE_WIDTH);

    let gauge = report::gauge(1e308);

    assert!(gauge.starts_with(&format!("[{full}]")));
    assert!(gauge.ends_with(&1e308_f64.to_string()));
}

#[test]
fn rubric_bars_saturate_for_huge_scores() {
    plain();
    let mut scores = sample_result().rubric_scores;
    scores.grammar = 1e9;

    let chart = report::rubric_chart(&scores);
    let grammar = chart.lines().find(|line| line.contains("Grammar")).expect("grammar line");

    assert!(grammar.contains(&"█".repeat(RUBRIC_BAR_WIDTH)));
    assert!(grammar.ends_with("1000000000"));
}

#[test]
fn render_survives_arbitrarily_large_scores() {
    plain();
    let mut result = sample_result();
    // A bare JSON "number" admits values this size, so the renderer has to
    // take them in stride.
    result.overall_score = 1e308;
    result.rubric_scores.organization = 4e9;

    let rendered = report::render(&result);

    assert!(rendered.contains(&"█".repeat(GAUGE_WIDTH)));
    assert!(rendered.contains("4000000000"));
}
