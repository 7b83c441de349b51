#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Chat-completion client for OpenAI-compatible scoring endpoints.
pub mod openai;
/// Prompt assets for the scoring client.
pub mod prompts;
/// Response schema mirroring the graded-result contract.
pub mod schema;

use anyhow::Result;
use futures::future::BoxFuture;

use crate::essay::{EducationLevel, EssayResult};

pub use openai::OpenAiScorer;
pub use prompts::ScoringPrompts;

/// The scoring oracle boundary. All judgment about an essay lives behind this
/// trait; callers hand over the text and level, and get back either a
/// complete [`EssayResult`] or an error.
///
/// Implementations make at most one outbound request per call and never
/// return a partially filled result.
pub trait EssayScorer {
    /// Scores `essay` against the expectations for `level`.
    fn score<'a>(
        &'a self,
        essay: &'a str,
        level: EducationLevel,
    ) -> BoxFuture<'a, Result<EssayResult>>;
}
