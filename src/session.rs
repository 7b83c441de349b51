#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use anyhow::Result;
use tracing::{debug, error, warn};

use crate::{
    constants::MIN_ESSAY_WORDS,
    essay::{EducationLevel, EssayResult},
    scoring::EssayScorer,
};

/// An enum to represent user-visible submission failures.
///
/// Everything that can go wrong inside the scoring client collapses into
/// [`FormError::ScoringFailed`]; the underlying cause is logged but never
/// shown, so a failed attempt always reads the same to the writer.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// The draft does not meet the minimum length for analysis.
    #[error(
        "Essay is too short for a meaningful analysis. Please write at least {MIN_ESSAY_WORDS} \
         words."
    )]
    TooShort,
    /// The scoring call failed, for whatever reason.
    #[error("An error occurred during grading. Please try again.")]
    ScoringFailed,
}

/// Which part of the submission lifecycle a session is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The draft is editable, possibly with an error to surface.
    Editing,
    /// One scoring call is outstanding; inputs are locked.
    Submitting,
    /// A graded result is held for review.
    Reviewing,
}

/// Tagged lifecycle state. Kept private so transitions only happen through
/// the session's operations.
#[derive(Debug)]
enum State {
    /// Collecting or correcting the draft.
    Editing {
        /// Validation or scoring failure to surface, if any.
        error: Option<FormError>,
    },
    /// Waiting on the single outstanding scoring call.
    Submitting,
    /// Holding the graded result until the next reset.
    Reviewing {
        /// The result, trusted verbatim from the scoring service.
        result: EssayResult,
    },
}

/// One essay-submission lifecycle: draft, validate, score, review, reset.
///
/// The draft and the education level live outside the state tag, so a failed
/// attempt returns to editing with the text intact and only an error added.
/// While a call is outstanding every input is locked; stale outcomes and
/// repeat submissions are ignored rather than allowed to race.
#[derive(Debug)]
pub struct Session {
    /// Current draft text.
    essay: String,
    /// Academic level the essay will be graded against.
    level: EducationLevel,
    /// Lifecycle tag.
    state: State,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(EducationLevel::default())
    }
}

impl Session {
    /// Creates an empty editable session for `level`.
    pub fn new(level: EducationLevel) -> Self {
        Self {
            essay: String::new(),
            level,
            state: State::Editing { error: None },
        }
    }

    /// Returns the current lifecycle phase.
    pub fn phase(&self) -> Phase {
        match self.state {
            State::Editing { .. } => Phase::Editing,
            State::Submitting => Phase::Submitting,
            State::Reviewing { .. } => Phase::Reviewing,
        }
    }

    /// Returns the current draft text.
    pub fn essay(&self) -> &str {
        &self.essay
    }

    /// Returns the selected education level.
    pub fn level(&self) -> EducationLevel {
        self.level
    }

    /// Returns the number of whitespace-separated words in the draft.
    pub fn word_count(&self) -> usize {
        self.essay.split_whitespace().count()
    }

    /// Returns the number of characters in the draft.
    pub fn character_count(&self) -> usize {
        self.essay.chars().count()
    }

    /// Returns the error to surface while editing, if one is pending.
    pub fn error(&self) -> Option<&FormError> {
        match &self.state {
            State::Editing { error } => error.as_ref(),
            _ => None,
        }
    }

    /// Returns the graded result while reviewing.
    pub fn result(&self) -> Option<&EssayResult> {
        match &self.state {
            State::Reviewing { result } => Some(result),
            _ => None,
        }
    }

    /// Replaces the draft text. Returns whether the edit was accepted; edits
    /// are refused unless the session is editable.
    pub fn set_essay(&mut self, essay: impl Into<String>) -> bool {
        match self.state {
            State::Editing { .. } => {
                self.essay = essay.into();
                true
            }
            _ => {
                warn!("Ignoring essay edit while {:?}", self.phase());
                false
            }
        }
    }

    /// Selects the education level. Returns whether the change was accepted;
    /// the level is locked once a request is outstanding.
    pub fn set_level(&mut self, level: EducationLevel) -> bool {
        match self.state {
            State::Editing { .. } => {
                self.level = level;
                true
            }
            _ => {
                warn!("Ignoring level change while {:?}", self.phase());
                false
            }
        }
    }

    /// Validates the draft and, when it passes, locks the session for one
    /// scoring call. Returns whether a call should now be made.
    ///
    /// A draft under the word minimum records [`FormError::TooShort`] and
    /// stays editable; no request is owed in that case. Repeat submissions
    /// while locked or reviewing are ignored.
    pub fn begin_submit(&mut self) -> bool {
        if !matches!(self.state, State::Editing { .. }) {
            warn!("Ignoring submission while {:?}", self.phase());
            return false;
        }

        if self.word_count() < MIN_ESSAY_WORDS {
            debug!(words = self.word_count(), "Rejecting draft below the word minimum");
            self.state = State::Editing {
                error: Some(FormError::TooShort),
            };
            return false;
        }

        self.state = State::Submitting;
        true
    }

    /// Applies the outcome of the outstanding scoring call. Outcomes arriving
    /// in any other phase are stale and dropped.
    ///
    /// Success moves to reviewing; failure returns to editing with the draft
    /// intact and the generic [`FormError::ScoringFailed`] recorded.
    pub fn finish_submit(&mut self, outcome: Result<EssayResult>) {
        if !matches!(self.state, State::Submitting) {
            warn!("Dropping scoring outcome while {:?}", self.phase());
            return;
        }

        match outcome {
            Ok(result) => self.state = State::Reviewing { result },
            Err(e) => {
                error!("Essay scoring failed: {e:#}");
                self.state = State::Editing {
                    error: Some(FormError::ScoringFailed),
                };
            }
        }
    }

    /// Runs one full submission attempt against `scorer` and returns the
    /// resulting phase.
    ///
    /// When validation passes this makes exactly one scoring call; when it
    /// fails, none.
    pub async fn submit<S>(&mut self, scorer: &S) -> Phase
    where
        S: EssayScorer + ?Sized,
    {
        if self.begin_submit() {
            let outcome = scorer.score(self.essay.as_str(), self.level).await;
            self.finish_submit(outcome);
        }

        self.phase()
    }

    /// Discards the draft, any pending error, and any held result, returning
    /// to a clean editable state. The education level is kept.
    pub fn reset(&mut self) {
        self.essay.clear();
        self.state = State::Editing { error: None };
    }
}
