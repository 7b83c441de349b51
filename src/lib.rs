//! # lumina
//!
//! An essay grading assistant. Lumina collects a draft and an education
//! level, asks an LLM scoring service for a structured grading report, and
//! renders that report in the terminal.
//!
//! All judgment about the essay happens inside the external model; this crate
//! owns the submission lifecycle, the request/response contract, and the
//! presentation, and deliberately computes no scores of its own.

#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Environment-backed configuration and embedded prompt assets.
pub mod config;
/// A module defining a bunch of constant values to be used throughout.
pub mod constants;
/// The graded-essay data contract shared with the scoring service.
pub mod essay;
/// Terminal rendering of a grading report.
pub mod report;
/// The scoring oracle boundary and its OpenAI-compatible client.
pub mod scoring;
/// The essay-submission lifecycle state machine.
pub mod session;
