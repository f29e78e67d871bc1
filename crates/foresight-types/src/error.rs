use thiserror::Error;

use crate::step::WizardStep;

/// Errors raised while reading an uploaded dataset.
///
/// This is the only failure surfaced to the user during a normal run.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("unsupported file type '{0}' (expected .csv, .tsv or .xlsx)")]
    UnsupportedFormat(String),

    #[error("failed to read file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid CSV data: {0}")]
    Csv(String),

    #[error("invalid Excel workbook: {0}")]
    Workbook(String),

    #[error("worksheet '{0}' not found")]
    SheetNotFound(String),

    #[error("file has no header row")]
    Empty,
}

/// Errors from driving the wizard state machine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WizardError {
    #[error("expected step '{expected}', but the wizard is at '{actual}'")]
    StepMismatch {
        expected: WizardStep,
        actual: WizardStep,
    },

    #[error("the wizard is complete; restart to begin a new analysis")]
    AlreadyComplete,

    #[error("no dataset has been uploaded")]
    NoDataset,

    #[error("step '{step}' has no field '{key}'")]
    UnknownField { step: WizardStep, key: String },

    #[error("field '{0}' is required")]
    MissingField(String),

    #[error("field '{key}' takes a single value, not a list")]
    InvalidValue { key: String },

    #[error("step '{0}' has no form to submit")]
    NotAQuestion(WizardStep),

    #[error("the prompt is only available at the final step (currently '{0}')")]
    PromptNotReady(WizardStep),

    #[error("failed to serialize dataset: {0}")]
    Serialize(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_error_display() {
        let err = DatasetError::UnsupportedFormat("json".to_string());
        assert_eq!(
            err.to_string(),
            "unsupported file type 'json' (expected .csv, .tsv or .xlsx)"
        );
    }

    #[test]
    fn test_step_mismatch_display() {
        let err = WizardError::StepMismatch {
            expected: WizardStep::Technique,
            actual: WizardStep::Problem,
        };
        assert_eq!(
            err.to_string(),
            "expected step 'technique', but the wizard is at 'problem'"
        );
    }

    #[test]
    fn test_unknown_field_display() {
        let err = WizardError::UnknownField {
            step: WizardStep::Problem,
            key: "colour".to_string(),
        };
        assert!(err.to_string().contains("colour"));
        assert!(err.to_string().contains("problem"));
    }

    #[test]
    fn test_invalid_value_display() {
        let err = WizardError::InvalidValue {
            key: "ml_technique".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "field 'ml_technique' takes a single value, not a list"
        );
    }
}
