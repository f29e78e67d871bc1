//! Session store and step cursor.
//!
//! The `Session` struct lives in `foresight-types`; this module provides an
//! extension trait (`SessionExt`) with the lifecycle operations: advancing
//! the step, resetting, and reading / writing answers.

use chrono::Utc;
use foresight_types::answer::AnswerValue;
use foresight_types::dataset::Dataset;
use foresight_types::error::WizardError;
use foresight_types::session::{Session, SessionId};
use foresight_types::step::WizardStep;

use std::collections::BTreeMap;

/// Create a fresh session at the upload step with no answers.
pub fn new_session() -> Session {
    Session {
        id: SessionId::new(),
        step: WizardStep::Upload,
        dataset: None,
        answers: BTreeMap::new(),
        created_at: Utc::now(),
    }
}

/// Extension trait for `Session` lifecycle management.
pub trait SessionExt {
    /// Move to the next step. Fails at the terminal step; the cursor never
    /// moves backward.
    fn advance(&mut self) -> Result<WizardStep, WizardError>;

    /// Drop the dataset and every answer and return to the upload step.
    fn reset(&mut self);

    /// Store (or overwrite) an answer.
    fn set_answer(&mut self, key: &str, value: AnswerValue);

    /// A single-value answer, if one was stored under `key`.
    fn text_answer(&self, key: &str) -> Option<&str>;

    /// A list answer; empty when nothing was stored.
    fn list_answer(&self, key: &str) -> Vec<&str>;

    /// The uploaded dataset, or `WizardError::NoDataset`.
    fn require_dataset(&self) -> Result<&Dataset, WizardError>;

    /// Whether every step has been walked and the prompt can be rendered.
    fn is_complete(&self) -> bool;
}

impl SessionExt for Session {
    fn advance(&mut self) -> Result<WizardStep, WizardError> {
        let next = self.step.next().ok_or(WizardError::AlreadyComplete)?;
        tracing::debug!(session = %self.id, from = %self.step, to = %next, "advancing step");
        self.step = next;
        Ok(next)
    }

    fn reset(&mut self) {
        tracing::debug!(session = %self.id, "resetting session");
        *self = new_session();
    }

    fn set_answer(&mut self, key: &str, value: AnswerValue) {
        self.answers.insert(key.to_string(), value);
    }

    fn text_answer(&self, key: &str) -> Option<&str> {
        self.answers.get(key).and_then(AnswerValue::as_text)
    }

    fn list_answer(&self, key: &str) -> Vec<&str> {
        self.answers
            .get(key)
            .map(AnswerValue::as_choices)
            .unwrap_or_default()
    }

    fn require_dataset(&self) -> Result<&Dataset, WizardError> {
        self.dataset.as_ref().ok_or(WizardError::NoDataset)
    }

    fn is_complete(&self) -> bool {
        self.step.is_terminal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use foresight_types::dataset::DatasetFormat;

    #[test]
    fn test_new_session_starts_at_upload() {
        let session = new_session();
        assert_eq!(session.step, WizardStep::Upload);
        assert!(session.dataset.is_none());
        assert!(session.answers.is_empty());
        assert!(!session.is_complete());
    }

    #[test]
    fn test_advance_walks_every_step_then_stops() {
        let mut session = new_session();
        let mut visited = vec![session.step];
        while let Ok(step) = session.advance() {
            visited.push(step);
        }
        assert_eq!(visited, WizardStep::ALL.to_vec());
        assert!(session.is_complete());
        assert_eq!(session.advance(), Err(WizardError::AlreadyComplete));
        assert_eq!(session.step, WizardStep::Prompt);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut session = new_session();
        let first_id = session.id;
        session.dataset = Some(Dataset::new("a.csv", DatasetFormat::Csv, vec![], vec![]));
        session.set_answer("patterns", AnswerValue::Choices(vec!["x".to_string()]));
        session.advance().unwrap();
        session.advance().unwrap();

        session.reset();

        assert_eq!(session.step, WizardStep::Upload);
        assert!(session.dataset.is_none());
        assert!(session.answers.is_empty());
        assert_ne!(session.id, first_id);
    }

    #[test]
    fn test_answer_accessors() {
        let mut session = new_session();
        session.set_answer("problem", AnswerValue::from("cracks"));
        session.set_answer(
            "sources",
            AnswerValue::Choices(vec!["SCADA".to_string(), "LIMS".to_string()]),
        );

        assert_eq!(session.text_answer("problem"), Some("cracks"));
        assert_eq!(session.text_answer("sources"), None);
        assert_eq!(session.list_answer("sources"), vec!["SCADA", "LIMS"]);
        assert!(session.list_answer("missing").is_empty());
        assert_eq!(session.text_answer("missing"), None);
    }

    #[test]
    fn test_set_answer_overwrites() {
        let mut session = new_session();
        session.set_answer("k", AnswerValue::from("first"));
        session.set_answer("k", AnswerValue::from("second"));
        assert_eq!(session.text_answer("k"), Some("second"));
        assert_eq!(session.answers.len(), 1);
    }

    #[test]
    fn test_require_dataset() {
        let mut session = new_session();
        assert_eq!(session.require_dataset().unwrap_err(), WizardError::NoDataset);
        session.dataset = Some(Dataset::new("a.csv", DatasetFormat::Csv, vec![], vec![]));
        assert!(session.require_dataset().is_ok());
    }
}
