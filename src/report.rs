#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use colored::{ColoredString, Colorize};
use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Panel, Style, Width, object::Rows},
};

use crate::{
    constants::{GAUGE_WIDTH, METRIC_VALUE_WIDTH, RUBRIC_BAR_WIDTH, SCORE_SCALE},
    essay::{EssayResult, FeedbackItem, FeedbackKind, NlpMetrics, RubricScores},
};

/// One row of the metrics panel.
#[derive(Tabled)]
struct MetricRow {
    /// Metric label.
    #[tabled(rename = "Metric")]
    metric: &'static str,
    /// Formatted value, verbatim from the result.
    #[tabled(rename = "Value")]
    value:  String,
}

/// Renders the complete grading report: overall gauge and summary, metrics
/// panel, rubric chart, and feedback cards.
///
/// Every value is rendered exactly as the scoring service returned it. Out of
/// range scores keep their raw labels while the bar fills saturate at the
/// track ends, which makes a misbehaving model visible instead of hiding it.
pub fn render(result: &EssayResult) -> String {
    let sections = vec![
        header(),
        overall_section(result),
        metrics_panel(&result.metrics),
        rubric_chart(&result.rubric_scores),
        feedback_cards(&result.feedback),
        "New Analysis discards this report; grade another draft any time."
            .dimmed()
            .to_string(),
    ];

    sections.join("\n\n")
}

/// Renders the report title block.
fn header() -> String {
    format!(
        "{}\n{}",
        "Grading Report".bold().underline(),
        "Comprehensive analysis of your essay submission".dimmed()
    )
}

/// Renders the overall-score gauge alongside the summary paragraph.
fn overall_section(result: &EssayResult) -> String {
    format!(
        "{}\n\n  {}\n\n  {}",
        "Overall Grade".bold(),
        gauge(result.overall_score),
        result.summary
    )
}

/// Renders a score gauge on a 0-100 track, followed by the raw score.
///
/// The fill saturates at both ends of the track; an out-of-range score shows
/// only in the label.
pub fn gauge(score: f64) -> String {
    let filled = ((score / SCORE_SCALE) * GAUGE_WIDTH as f64).round() as usize;
    let filled = filled.min(GAUGE_WIDTH);
    let empty = GAUGE_WIDTH - filled;
    let track = format!("{}{}", "█".repeat(filled), "░".repeat(empty));

    format!("[{}] {}", banded(&track, score), banded(&score.to_string(), score).bold())
}

/// Renders the five NLP metrics as a bordered panel.
pub fn metrics_panel(metrics: &NlpMetrics) -> String {
    let rows = vec![
        MetricRow {
            metric: "Word Count",
            value:  metrics.word_count.to_string(),
        },
        MetricRow {
            metric: "Sentences",
            value:  metrics.sentence_count.to_string(),
        },
        MetricRow {
            metric: "Readability",
            value:  metrics.readability_score.clone(),
        },
        MetricRow {
            metric: "Lexical Diversity",
            value:  format_lexical_diversity(metrics.lexical_diversity),
        },
        MetricRow {
            metric: "Complexity",
            value:  format_sentence_complexity(metrics.sentence_complexity),
        },
    ];

    Table::new(&rows)
        .with(Panel::header("NLP Metrics"))
        .with(Modify::new(Rows::first()).with(Alignment::center()))
        .with(Modify::new(Rows::new(1..)).with(Width::wrap(METRIC_VALUE_WIDTH).keep_words(true)))
        .with(Style::modern())
        .to_string()
}

/// Renders the four rubric axes as labelled bars on a 0-100 track.
pub fn rubric_chart(scores: &RubricScores) -> String {
    let axes = [
        ("Content", scores.content),
        ("Organization", scores.organization),
        ("Grammar", scores.grammar),
        ("Vocabulary", scores.vocabulary),
    ];

    let mut lines = Vec::with_capacity(axes.len() + 1);
    lines.push("Rubric Analysis".bold().to_string());

    for (axis, score) in axes {
        let filled = ((score / SCORE_SCALE) * RUBRIC_BAR_WIDTH as f64).round() as usize;
        let filled = filled.min(RUBRIC_BAR_WIDTH);
        let empty = RUBRIC_BAR_WIDTH - filled;
        let track = format!("{}{}", "█".repeat(filled), "░".repeat(empty));

        lines.push(format!("  {axis:<13} {} {score}", banded(&track, score)));
    }

    lines.join("\n")
}

/// Renders feedback cards in the order the scoring service produced them,
/// with strengths marked `+` and suggestions marked `!`.
pub fn feedback_cards(items: &[FeedbackItem]) -> String {
    let mut lines = Vec::with_capacity(items.len() + 1);
    lines.push("Feedback".bold().to_string());

    if items.is_empty() {
        lines.push("  (none)".dimmed().to_string());
    }

    for item in items {
        let marker = match item.kind {
            FeedbackKind::Positive => "+".green().bold(),
            FeedbackKind::Improvement => "!".yellow().bold(),
        };

        lines.push(format!("  {marker} {} {}", item.category.to_uppercase().dimmed(), item.text));
    }

    lines.join("\n")
}

/// Formats lexical diversity as a one-decimal percentage (`0.02` -> `2.0%`).
pub fn format_lexical_diversity(value: f64) -> String {
    format!("{:.1}%", value * 100.0)
}

/// Formats sentence complexity as one decimal out of ten (`1.0` -> `1.0/10`).
pub fn format_sentence_complexity(value: f64) -> String {
    format!("{value:.1}/10")
}

/// Applies the report's score bands: 80 and above green, 60 and above blue,
/// 40 and above yellow, anything below red.
fn banded(text: &str, score: f64) -> ColoredString {
    if score >= 80.0 {
        text.green()
    } else if score >= 60.0 {
        text.blue()
    } else if score >= 40.0 {
        text.yellow()
    } else {
        text.red()
    }
}
