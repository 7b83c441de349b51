#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Minimum number of whitespace-separated words required before a draft is
/// worth sending to the scoring service.
pub const MIN_ESSAY_WORDS: usize = 50;

/// Upper bound of the overall and rubric score scales.
pub const SCORE_SCALE: f64 = 100.0;

/// Character width of the overall-score gauge track.
pub const GAUGE_WIDTH: usize = 40;

/// Character width of each rubric bar track.
pub const RUBRIC_BAR_WIDTH: usize = 25;

/// Column width that metric values wrap at in the metrics panel.
pub const METRIC_VALUE_WIDTH: usize = 36;
