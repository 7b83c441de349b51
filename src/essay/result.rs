use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

#[derive(Serialize, Deserialize, TypedBuilder, Clone, Copy, Debug, PartialEq)]
#[builder(doc)]
/// The four writing-rubric axes, each scored 0-100 by the scoring service.
pub struct RubricScores {
    /// Quality and development of ideas and argument.
    pub content:      f64,
    /// Structure, transitions, and flow.
    pub organization: f64,
    /// Grammatical correctness and mechanics.
    pub grammar:      f64,
    /// Range and precision of word choice.
    pub vocabulary:   f64,
}

#[derive(Serialize, Deserialize, TypedBuilder, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
#[builder(field_defaults(setter(into)))]
#[builder(doc)]
/// Quantitative text statistics computed by the scoring service.
pub struct NlpMetrics {
    /// Total number of words in the essay.
    pub word_count:          u32,
    /// Total number of sentences in the essay.
    pub sentence_count:      u32,
    /// Readability on a common scale, already formatted for display
    /// (for example a Flesch-Kincaid grade level).
    pub readability_score:   String,
    /// Ratio of unique words to total words, 0.0-1.0.
    pub lexical_diversity:   f64,
    /// Average sentence complexity on a 0.0-10.0 scale.
    pub sentence_complexity: f64,
}

/// Whether a feedback item praises the essay or asks for improvement.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackKind {
    /// Something the essay already does well.
    Positive,
    /// Something the writer should work on.
    Improvement,
}

#[derive(Serialize, Deserialize, TypedBuilder, Clone, Debug, PartialEq)]
#[builder(field_defaults(setter(into)))]
#[builder(doc)]
/// One piece of qualitative commentary about the essay.
pub struct FeedbackItem {
    /// Short label naming the writing dimension the comment addresses.
    pub category: String,
    /// Whether this is praise or a suggestion.
    #[serde(rename = "type")]
    pub kind:     FeedbackKind,
    /// The commentary itself.
    pub text:     String,
}

#[derive(Serialize, Deserialize, TypedBuilder, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
#[builder(field_defaults(setter(into)))]
#[builder(doc)]
/// The complete structured grading report for one essay, exactly as returned
/// by the scoring service. Values are trusted and rendered as-is; nothing is
/// recomputed or clamped on this side.
pub struct EssayResult {
    /// Holistic grade on a 0-100 scale.
    pub overall_score: f64,
    /// Per-axis rubric scores.
    pub rubric_scores: RubricScores,
    /// Quantitative text statistics.
    pub metrics:       NlpMetrics,
    /// Qualitative commentary, kept in the order the service produced it.
    pub feedback:      Vec<FeedbackItem>,
    /// One-paragraph overall impression of the essay.
    pub summary:       String,
}
