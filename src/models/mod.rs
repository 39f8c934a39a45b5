//! Domain models for Canvass.
//!
//! # Core Concepts
//!
//! ## Immutable Content
//!
//! - [`Survey`]: A named, ordered list of questions. Loaded once at startup
//!   into the catalog and never mutated afterwards.
//! - [`Question`]: A prompt with an ordered list of choices.
//! - [`Choice`]: A selectable label, optionally inviting a free-text note.
//!
//! ## Per-Respondent State
//!
//! - [`Answer`]: One respondent's recorded choice (plus optional free text)
//!   for one question. Answers are appended to the session's answer sequence
//!   and never mutated after creation.

mod answer;
mod survey;

pub use answer::*;
pub use survey::*;
