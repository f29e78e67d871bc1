//! Non-interactive prompt rendering (`fsight render`).
//!
//! Walks every step with answers read from a JSON or TOML file, so the same
//! inputs always produce the same prompt.

use std::path::Path;

use anyhow::{bail, Context, Result};

use foresight_core::source::DatasetSource;
use foresight_core::wizard::controller::WizardController;
use foresight_types::answer::FormSubmission;
use foresight_types::error::WizardError;

use crate::state::AppState;

/// Render the prompt for `file` using answers from `answers_path`.
///
/// # Examples
///
/// ```bash
/// fsight render history.csv --answers answers.toml
/// ```
pub async fn render(
    state: &AppState,
    file: &Path,
    answers_path: Option<&Path>,
    json: bool,
) -> Result<()> {
    let mut answers = match answers_path {
        Some(path) => load_answers(path).await?,
        None => FormSubmission::new(),
    };

    let dataset = state
        .source
        .load(file)
        .await
        .with_context(|| format!("Failed to load dataset {}", file.display()))?;

    let mut controller = WizardController::new(state.config.clone());
    controller.upload(dataset)?;
    let prompt = answer_all_steps(&mut controller, &mut answers)?;

    for key in answers.keys() {
        tracing::warn!(key = %key, "ignoring answer that matches no wizard field");
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&prompt_json(&controller, &prompt))?);
    } else {
        print!("{prompt}");
    }
    Ok(())
}

/// Submit every remaining question step, taking each field's answer out of
/// `answers` (or its default), then render the prompt.
///
/// Keys left in `answers` afterwards matched no field.
pub fn answer_all_steps(
    controller: &mut WizardController,
    answers: &mut FormSubmission,
) -> Result<String, WizardError> {
    while let Some(form) = controller.current_form() {
        let submission: FormSubmission = form
            .fields
            .iter()
            .filter_map(|field| answers.remove_entry(&field.key))
            .collect();
        controller.submit(form.step, submission)?;
    }
    controller.render_prompt()
}

/// JSON document describing a finished session.
pub fn prompt_json(controller: &WizardController, prompt: &str) -> serde_json::Value {
    let session = controller.session();
    serde_json::json!({
        "session_id": session.id.to_string(),
        "dataset": session.dataset.as_ref().map(|ds| serde_json::json!({
            "name": ds.name,
            "format": ds.format,
            "columns": ds.columns,
            "rows": ds.row_count(),
        })),
        "answers": session.answers,
        "prompt": prompt,
    })
}

/// Read an answers file; the format follows the extension.
async fn load_answers(path: &Path) -> Result<FormSubmission> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read answers file {}", path.display()))?;
    parse_answers(path, &content)
}

fn parse_answers(path: &Path, content: &str) -> Result<FormSubmission> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    let answers = match extension.as_str() {
        "json" => serde_json::from_str(content)
            .with_context(|| format!("Invalid JSON in {}", path.display()))?,
        "toml" => toml::from_str(content)
            .with_context(|| format!("Invalid TOML in {}", path.display()))?,
        other => bail!("Unsupported answers file type '.{other}' (expected .json or .toml)"),
    };
    Ok(answers)
}
