use serde::{Deserialize, Serialize};

/// One respondent's recorded answer to one question.
///
/// Created when a question submission is accepted, appended to the session's
/// answer sequence, and never mutated afterwards. The number of recorded
/// answers doubles as the respondent's progress: the next question to show
/// is always `answers.len()`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Answer {
    /// The selected choice label.
    pub choice: String,
    /// Optional free-text supplement. Empty when the form omitted it.
    #[serde(default)]
    pub text: String,
}
