//! Step controller driving one wizard session.
//!
//! Front-ends (the interactive terminal wizard, the non-interactive `render`
//! command) only talk to `WizardController`: they ask for the current form,
//! submit answers for the current step, and render the prompt at the end.

use foresight_types::answer::{AnswerValue, FormSubmission};
use foresight_types::config::GlobalConfig;
use foresight_types::dataset::Dataset;
use foresight_types::error::WizardError;
use foresight_types::form::{FieldKind, FormField, StepForm};
use foresight_types::session::Session;
use foresight_types::step::WizardStep;

use crate::wizard::catalog::build_step_form;
use crate::wizard::prompt::render_prompt;
use crate::wizard::state::{new_session, SessionExt};

pub struct WizardController {
    session: Session,
    config: GlobalConfig,
}

impl WizardController {
    pub fn new(config: GlobalConfig) -> Self {
        Self {
            session: new_session(),
            config,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn config(&self) -> &GlobalConfig {
        &self.config
    }

    pub fn step(&self) -> WizardStep {
        self.session.step
    }

    /// The form for the current step, if it has one.
    pub fn current_form(&self) -> Option<StepForm> {
        build_step_form(self.session.step, &self.session)
    }

    /// Store the uploaded dataset and move to the first question.
    ///
    /// Only valid at the upload step.
    pub fn upload(&mut self, dataset: Dataset) -> Result<WizardStep, WizardError> {
        self.expect_step(WizardStep::Upload)?;
        tracing::info!(
            session = %self.session.id,
            file = %dataset.name,
            columns = dataset.columns.len(),
            rows = dataset.row_count(),
            "dataset uploaded"
        );
        self.session.dataset = Some(dataset);
        self.session.advance()
    }

    /// Submit the form for `step` and advance.
    ///
    /// `step` must be the current step. Fields missing from `submission` take
    /// the form's default value. Keys that do not belong to the form are
    /// rejected, values must fit their field's shape (see
    /// [`conform_to_field`]), and required free-text fields must be
    /// non-blank. Nothing is written to the session unless the whole
    /// submission is accepted.
    pub fn submit(
        &mut self,
        step: WizardStep,
        mut submission: FormSubmission,
    ) -> Result<WizardStep, WizardError> {
        self.expect_step(step)?;
        if step.is_terminal() {
            return Err(WizardError::AlreadyComplete);
        }
        if !step.is_question() {
            return Err(WizardError::NotAQuestion(step));
        }
        self.session.require_dataset()?;
        let form = self
            .current_form()
            .ok_or(WizardError::NotAQuestion(step))?;

        if let Some(key) = submission.keys().find(|key| form.field(key).is_none()) {
            return Err(WizardError::UnknownField {
                step,
                key: key.clone(),
            });
        }

        let mut accepted = Vec::with_capacity(form.fields.len());
        for field in &form.fields {
            let value = match submission.remove(&field.key) {
                Some(value) => conform_to_field(field, value)?,
                None => field.default_value(),
            };
            if field.is_required() && value.is_empty() {
                return Err(WizardError::MissingField(field.key.clone()));
            }
            accepted.push((field.key.clone(), value));
        }

        for (key, value) in accepted {
            self.session.set_answer(&key, value);
        }
        tracing::info!(session = %self.session.id, %step, "step submitted");
        self.session.advance()
    }

    /// Restart is offered once the user is past the upload step.
    pub fn can_restart(&self) -> bool {
        self.session.step > WizardStep::Upload
    }

    /// Discard the dataset and every answer and return to the upload step.
    pub fn restart(&mut self) {
        tracing::info!(session = %self.session.id, step = %self.session.step, "restarting analysis");
        self.session.reset();
    }

    /// Render the final prompt. Only available at the terminal step.
    pub fn render_prompt(&self) -> Result<String, WizardError> {
        if !self.session.is_complete() {
            return Err(WizardError::PromptNotReady(self.session.step));
        }
        render_prompt(&self.session, &self.config)
    }

    fn expect_step(&self, expected: WizardStep) -> Result<(), WizardError> {
        if self.session.step.is_terminal() && expected != WizardStep::Prompt {
            return Err(WizardError::AlreadyComplete);
        }
        if self.session.step != expected {
            return Err(WizardError::StepMismatch {
                expected,
                actual: self.session.step,
            });
        }
        Ok(())
    }
}

/// Bring a submitted value into the shape its field stores.
///
/// Single-value fields take text; a one-element list is unwrapped and a
/// longer list is rejected. Multi-choice fields always store a list, so a
/// bare text value becomes a one-element list.
fn conform_to_field(field: &FormField, value: AnswerValue) -> Result<AnswerValue, WizardError> {
    match (&field.kind, value) {
        (FieldKind::MultiChoice { .. }, AnswerValue::Text(text)) => {
            Ok(AnswerValue::Choices(vec![text]))
        }
        (FieldKind::MultiChoice { .. }, choices) => Ok(choices),
        (_, AnswerValue::Text(text)) => Ok(AnswerValue::Text(text)),
        (_, AnswerValue::Choices(mut items)) if items.len() == 1 => {
            Ok(AnswerValue::Text(items.remove(0)))
        }
        (_, AnswerValue::Choices(_)) => Err(WizardError::InvalidValue {
            key: field.key.clone(),
        }),
    }
}
