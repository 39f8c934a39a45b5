use serde::{Deserialize, Serialize};

/// A named, ordered list of questions presented to a respondent one at a time.
///
/// Surveys are immutable content: they are parsed from the catalog (or built
/// in) once at startup and shared read-only across all requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Survey {
    /// Stable identifier used in forms, session state, and the completion
    /// cookie name (`completed_<id>`).
    pub id: String,
    pub title: String,
    /// Shown on the start-confirmation page before the first question.
    #[serde(default)]
    pub instructions: Option<String>,
    pub questions: Vec<Question>,
}

impl Survey {
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }
}

/// A prompt with an ordered list of choices.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub prompt: String,
    pub choices: Vec<Choice>,
}

impl Question {
    /// Whether the question view should render an optional free-text input.
    pub fn allows_text(&self) -> bool {
        self.choices.iter().any(|c| c.allow_text)
    }
}

/// One selectable option for a question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Choice {
    /// Short label, doubling as the submitted choice identifier.
    pub label: String,
    /// Invites a free-text supplement alongside this choice.
    #[serde(default)]
    pub allow_text: bool,
}

impl Choice {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            allow_text: false,
        }
    }

    pub fn with_text(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            allow_text: true,
        }
    }
}
