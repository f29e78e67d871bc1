//! Form definitions rendered by each question step.

use serde::{Deserialize, Serialize};

use crate::answer::AnswerValue;
use crate::step::WizardStep;

/// The input widget a field is answered with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldKind {
    /// Exactly one option; `default` indexes into `options`.
    SingleChoice { options: Vec<String>, default: usize },
    /// Any subset of `options`, preselected with `defaults`.
    MultiChoice {
        options: Vec<String>,
        defaults: Vec<String>,
    },
    /// Free text. `required` fields must be non-blank on submit.
    FreeText { default: String, required: bool },
}

/// One input of a step form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormField {
    /// Session store key the answer is written under.
    pub key: String,
    pub label: String,
    /// Sub-heading grouping related fields, if any.
    pub section: Option<String>,
    /// Extra guidance shown above the input.
    pub hint: Option<String>,
    pub kind: FieldKind,
}

impl FormField {
    /// The value a field reports when the user leaves it untouched.
    pub fn default_value(&self) -> AnswerValue {
        match &self.kind {
            FieldKind::SingleChoice { options, default } => {
                AnswerValue::Text(options.get(*default).cloned().unwrap_or_default())
            }
            FieldKind::MultiChoice { defaults, .. } => AnswerValue::Choices(defaults.clone()),
            FieldKind::FreeText { default, .. } => AnswerValue::Text(default.clone()),
        }
    }

    pub fn is_required(&self) -> bool {
        matches!(self.kind, FieldKind::FreeText { required: true, .. })
    }
}

/// Everything needed to present one question step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepForm {
    pub step: WizardStep,
    pub title: String,
    /// Short explanatory banner shown before the fields.
    pub intro: Option<String>,
    pub fields: Vec<FormField>,
    pub submit_label: String,
}

impl StepForm {
    pub fn field(&self, key: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.key == key)
    }
}
