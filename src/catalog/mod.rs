//! The survey catalog: every survey the server can hand out.
//!
//! The catalog is constructed once at startup (from a TOML file or from the
//! built-in set) and passed into the router state. Handlers only ever read
//! from it; nothing mutates a catalog after construction.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::models::{Choice, Question, Survey};

/// Errors raised while loading or validating a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("survey '{0}' is defined twice")]
    DuplicateId(String),
    #[error("survey has an empty id")]
    EmptyId,
    #[error("survey '{0}' has an empty title")]
    EmptyTitle(String),
    #[error("survey '{0}' has no questions")]
    NoQuestions(String),
    #[error("survey '{0}': question {1} has no choices")]
    NoChoices(String, usize),
}

/// On-disk shape of a catalog file: a flat list of surveys.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    surveys: Vec<Survey>,
}

/// A read-only mapping from survey id to [`Survey`].
#[derive(Debug, Clone)]
pub struct Catalog {
    surveys: BTreeMap<String, Survey>,
}

impl Catalog {
    /// Build a catalog from a list of surveys, validating each one.
    pub fn new(surveys: Vec<Survey>) -> Result<Self, CatalogError> {
        let mut map = BTreeMap::new();
        for survey in surveys {
            validate(&survey)?;
            if map.contains_key(&survey.id) {
                return Err(CatalogError::DuplicateId(survey.id));
            }
            map.insert(survey.id.clone(), survey);
        }
        Ok(Self { surveys: map })
    }

    /// Load and validate a catalog from a TOML file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }

    /// Parse and validate a catalog from TOML text.
    pub fn from_toml_str(raw: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(raw)?;
        Self::new(file.surveys)
    }

    /// The surveys shipped with the binary, used when no catalog file is
    /// given on the command line.
    pub fn builtin() -> Self {
        let satisfaction = Survey {
            id: "satisfaction".to_string(),
            title: "Customer Satisfaction Survey".to_string(),
            instructions: Some(
                "Please fill out a survey about your experience with us.".to_string(),
            ),
            questions: vec![
                Question {
                    prompt: "Have you shopped here before?".to_string(),
                    choices: vec![Choice::new("Yes"), Choice::new("No")],
                },
                Question {
                    prompt: "Did someone else shop here today?".to_string(),
                    choices: vec![Choice::new("Yes"), Choice::new("No")],
                },
                Question {
                    prompt: "On average, how much do you spend a month on frisbees?".to_string(),
                    choices: vec![Choice::new("Less than $10,000"), Choice::new("$10,000 or more")],
                },
                Question {
                    prompt: "Are you likely to shop here again?".to_string(),
                    choices: vec![Choice::with_text("Yes"), Choice::with_text("No")],
                },
            ],
        };

        let personality = Survey {
            id: "personality".to_string(),
            title: "Rithm Personality Test".to_string(),
            instructions: Some("Learn more about yourself with our personality quiz!".to_string()),
            questions: vec![
                Question {
                    prompt: "Do you ever dream about code?".to_string(),
                    choices: vec![Choice::new("Yes"), Choice::new("No")],
                },
                Question {
                    prompt: "Do you enjoy short walks on the beach?".to_string(),
                    choices: vec![Choice::new("Yes"), Choice::new("No")],
                },
                Question {
                    prompt: "Have you ever seen a breakpoint?".to_string(),
                    choices: vec![Choice::with_text("Yes"), Choice::with_text("No")],
                },
            ],
        };

        Self::new(vec![satisfaction, personality]).expect("built-in catalog is valid")
    }

    pub fn get(&self, id: &str) -> Option<&Survey> {
        self.surveys.get(id)
    }

    /// All surveys, ordered by id for stable rendering.
    pub fn iter(&self) -> impl Iterator<Item = &Survey> {
        self.surveys.values()
    }

    pub fn len(&self) -> usize {
        self.surveys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.surveys.is_empty()
    }
}

fn validate(survey: &Survey) -> Result<(), CatalogError> {
    if survey.id.trim().is_empty() {
        return Err(CatalogError::EmptyId);
    }
    if survey.title.trim().is_empty() {
        return Err(CatalogError::EmptyTitle(survey.id.clone()));
    }
    if survey.questions.is_empty() {
        return Err(CatalogError::NoQuestions(survey.id.clone()));
    }
    for (i, question) in survey.questions.iter().enumerate() {
        if question.choices.is_empty() {
            return Err(CatalogError::NoChoices(survey.id.clone(), i));
        }
    }
    Ok(())
}
