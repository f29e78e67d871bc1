//! Answer values collected by the wizard forms.

use serde::{Deserialize, Serialize};

use std::collections::BTreeMap;

/// Stable keys under which each form writes its answers.
pub mod keys {
    pub const PREDICTIVE_PROBLEM: &str = "predictive_problem";
    pub const PROBLEM_CONTEXT: &str = "problem_context";
    pub const DATA_SOURCES: &str = "data_sources";
    pub const STANDARDIZATION: &str = "standardization";
    pub const CLEANING: &str = "cleaning";
    pub const PATTERNS: &str = "patterns";
    pub const FEATURES: &str = "features";
    pub const ML_TECHNIQUE: &str = "ml_technique";
}

/// A single stored answer: free text / one choice, or a list of choices.
///
/// Untagged so answers files read naturally:
/// `predictive_problem = "Steel hardness variation"` or
/// `features = ["temp", "speed"]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Text(String),
    Choices(Vec<String>),
}

impl AnswerValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AnswerValue::Text(text) => Some(text),
            AnswerValue::Choices(_) => None,
        }
    }

    /// The answer viewed as a list. A text answer is a one-element list.
    pub fn as_choices(&self) -> Vec<&str> {
        match self {
            AnswerValue::Text(text) => vec![text.as_str()],
            AnswerValue::Choices(items) => items.iter().map(String::as_str).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            AnswerValue::Text(text) => text.trim().is_empty(),
            AnswerValue::Choices(items) => items.is_empty(),
        }
    }
}

impl From<&str> for AnswerValue {
    fn from(value: &str) -> Self {
        AnswerValue::Text(value.to_string())
    }
}

impl From<String> for AnswerValue {
    fn from(value: String) -> Self {
        AnswerValue::Text(value)
    }
}

impl From<Vec<String>> for AnswerValue {
    fn from(value: Vec<String>) -> Self {
        AnswerValue::Choices(value)
    }
}

/// Answers submitted for one form, keyed by field key.
pub type FormSubmission = BTreeMap<String, AnswerValue>;
