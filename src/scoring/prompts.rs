use crate::essay::EducationLevel;

/// Prompt assets used by the scoring client.
#[derive(Clone)]
pub struct ScoringPrompts {
    /// System prompt framing the model as an academic writing assessor.
    assessor_system: String,
    /// Per-essay request template with `{LEVEL}` and `{ESSAY}` placeholders.
    grading_request: String,
}

impl ScoringPrompts {
    /// Load prompt templates embedded in the binary.
    pub fn load() -> Self {
        Self {
            assessor_system: include_str!("prompts/assessor_system.md").to_string(),
            grading_request: include_str!("prompts/grading_request.md").to_string(),
        }
    }

    /// Returns the assessor system prompt.
    pub fn assessor_system(&self) -> &str {
        &self.assessor_system
    }

    /// Renders the grading request for one essay at one education level.
    ///
    /// The level is substituted before the essay so that placeholder-looking
    /// text inside the essay is never expanded.
    pub fn grading_request(&self, essay: &str, level: EducationLevel) -> String {
        self.grading_request
            .replace("{LEVEL}", level.as_str())
            .replace("{ESSAY}", essay)
    }
}
