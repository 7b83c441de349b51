#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Education levels an essay can be graded against.
pub mod level;
/// The graded-result data contract shared with the scoring service.
pub mod result;

pub use level::EducationLevel;
pub use result::{EssayResult, FeedbackItem, FeedbackKind, NlpMetrics, RubricScores};
