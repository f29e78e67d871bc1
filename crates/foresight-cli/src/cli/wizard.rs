//! Interactive terminal wizard (`fsight run`).
//!
//! Drives a `WizardController` step by step with dialoguer prompts: a file
//! path for the upload, arrow-key selection for choices, and a final screen
//! showing the generated prompt. Every question step also offers to start a
//! new analysis, which discards all answers and returns to the upload.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Result;
use console::style;
use dialoguer::{Confirm, Input, MultiSelect, Select};
use indicatif::{ProgressBar, ProgressStyle};

use foresight_core::source::DatasetSource;
use foresight_core::wizard::catalog::step_title;
use foresight_core::wizard::controller::WizardController;
use foresight_types::answer::{AnswerValue, FormSubmission};
use foresight_types::form::{FieldKind, FormField, StepForm};
use foresight_types::step::WizardStep;

use crate::cli::render::prompt_json;
use crate::state::AppState;

const RESTART_LABEL: &str = "Start a new analysis";

/// What the user chose at the bottom of a step.
enum StepAction {
    Submit(FormSubmission),
    Restart,
}

/// Run the wizard until the user declines to start another analysis.
///
/// `file` pre-fills the first upload; later restarts always ask for a path.
pub async fn run_wizard(state: &AppState, file: Option<PathBuf>, json: bool) -> Result<()> {
    let mut controller = WizardController::new(state.config.clone());
    let mut pending_file = file;

    print_banner();

    loop {
        match controller.step() {
            WizardStep::Upload => {
                let path = match pending_file.take() {
                    Some(path) => path,
                    None => ask_for_path()?,
                };
                upload_file(state, &mut controller, &path).await?;
            }

            WizardStep::Prompt => {
                show_prompt(&controller, json)?;

                let again = controller.can_restart()
                    && Confirm::new()
                        .with_prompt(RESTART_LABEL)
                        .default(false)
                        .interact()?;
                if !again {
                    break;
                }
                controller.restart();
                print_banner();
            }

            step => {
                let Some(form) = controller.current_form() else {
                    // Question steps always have a form once a dataset is loaded.
                    controller.restart();
                    continue;
                };
                match ask_form(&form, controller.can_restart())? {
                    StepAction::Submit(submission) => {
                        controller.submit(step, submission)?;
                    }
                    StepAction::Restart => {
                        controller.restart();
                        print_banner();
                    }
                }
            }
        }
    }

    Ok(())
}

fn print_banner() {
    println!();
    println!("  {}", style("Predictive Analysis AI").cyan().bold());
    println!(
        "  {}",
        style("Build a complete predictive-analysis prompt, step by step, with just a few selections.")
            .dim()
    );
}

fn ask_for_path() -> Result<PathBuf> {
    println!();
    println!("{}", style(step_title(WizardStep::Upload)).bold());
    let raw: String = Input::new()
        .with_prompt("Path to your history file (.csv, .tsv or .xlsx)")
        .validate_with(|input: &String| -> Result<(), &str> {
            if input.trim().is_empty() {
                Err("Please enter a file path")
            } else {
                Ok(())
            }
        })
        .interact_text()?;
    Ok(PathBuf::from(raw.trim()))
}

/// Load `path` and hand it to the controller. Load failures are reported and
/// leave the wizard at the upload step so the user can try another file.
async fn upload_file(
    state: &AppState,
    controller: &mut WizardController,
    path: &Path,
) -> Result<()> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}")?);
    spinner.set_message(format!("Reading {}...", path.display()));
    spinner.enable_steady_tick(Duration::from_millis(80));

    let loaded = state.source.load(path).await;
    spinner.finish_and_clear();

    match loaded {
        Ok(dataset) => {
            println!(
                "  {} Loaded {} ({} rows x {} columns)",
                style("✓").green().bold(),
                style(&dataset.name).cyan(),
                dataset.row_count(),
                dataset.columns.len()
            );
            controller.upload(dataset)?;
        }
        Err(e) => {
            tracing::warn!(file = %path.display(), error = %e, "dataset load failed");
            println!(
                "  {} Could not process the file: {}",
                style("✗").red().bold(),
                style(e).red()
            );
        }
    }
    Ok(())
}

/// Ask every field of `form`, then the continue / restart choice. Restart is
/// only listed when `offer_restart` is set.
fn ask_form(form: &StepForm, offer_restart: bool) -> Result<StepAction> {
    println!();
    println!("{}", style(&form.title).bold());
    if let Some(intro) = &form.intro {
        println!("  {}", style(intro).yellow());
    }

    let mut submission = FormSubmission::new();
    let mut current_section: Option<&str> = None;

    for field in &form.fields {
        if let Some(section) = field.section.as_deref() {
            if current_section != Some(section) {
                println!();
                println!("{}", style(section).cyan());
                current_section = Some(section);
            }
        }
        if let Some(hint) = &field.hint {
            println!("  {}", style(hint).dim());
        }
        if let Some(value) = ask_field(field)? {
            submission.insert(field.key.clone(), value);
        }
    }

    let mut actions = vec![form.submit_label.as_str()];
    if offer_restart {
        actions.push(RESTART_LABEL);
    }
    let choice = Select::new().items(actions.as_slice()).default(0).interact()?;
    Ok(if choice == 0 {
        StepAction::Submit(submission)
    } else {
        StepAction::Restart
    })
}

/// Prompt for one field. `None` leaves the field to its default.
fn ask_field(field: &FormField) -> Result<Option<AnswerValue>> {
    match &field.kind {
        FieldKind::SingleChoice { options, default } => {
            if options.is_empty() {
                return Ok(None);
            }
            let index = Select::new()
                .with_prompt(&field.label)
                .items(options.as_slice())
                .default((*default).min(options.len() - 1))
                .interact()?;
            Ok(Some(AnswerValue::Text(options[index].clone())))
        }

        FieldKind::MultiChoice { options, defaults } => {
            if options.is_empty() {
                println!("  {} {}", style(&field.label).dim(), style("(nothing to select)").dim());
                return Ok(None);
            }
            let checked: Vec<bool> = options.iter().map(|o| defaults.contains(o)).collect();
            let picked = MultiSelect::new()
                .with_prompt(&field.label)
                .items(options.as_slice())
                .defaults(&checked)
                .interact()?;
            Ok(Some(AnswerValue::Choices(
                picked.into_iter().map(|i| options[i].clone()).collect(),
            )))
        }

        FieldKind::FreeText { default, required } => {
            let required = *required;
            let text: String = Input::new()
                .with_prompt(&field.label)
                .with_initial_text(default.clone())
                .allow_empty(!required)
                .validate_with(move |input: &String| -> Result<(), &str> {
                    if required && input.trim().is_empty() {
                        Err("This field is required")
                    } else {
                        Ok(())
                    }
                })
                .interact_text()?;
            Ok(Some(AnswerValue::Text(text.trim().to_string())))
        }
    }
}

fn show_prompt(controller: &WizardController, json: bool) -> Result<()> {
    let prompt = controller.render_prompt()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&prompt_json(controller, &prompt))?);
        return Ok(());
    }

    println!();
    println!(
        "{}",
        style(step_title(WizardStep::Prompt)).green().bold()
    );
    println!("{}", style("---").cyan());
    println!("{prompt}");
    println!("{}", style("---").cyan());
    println!(
        "  {} Copy all the text above and paste it into your preferred AI. The data is already included!",
        style("ℹ").cyan()
    );
    println!();
    Ok(())
}
