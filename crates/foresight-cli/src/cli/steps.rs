//! `fsight steps`: list the wizard's steps and the answer keys each one
//! collects. Handy when writing an answers file for `fsight render`.

use anyhow::Result;
use comfy_table::{presets, Cell, Color, ContentArrangement, Table};
use console::style;

use foresight_core::wizard::catalog::{build_step_form, step_title};
use foresight_core::wizard::state::new_session;
use foresight_infra::config::CONFIG_FILE;
use foresight_types::answer::keys;
use foresight_types::form::{FieldKind, FormField, StepForm};
use foresight_types::step::WizardStep;

use crate::state::AppState;

pub fn list_steps(state: &AppState, json: bool) -> Result<()> {
    let forms = step_forms();

    if json {
        println!("{}", serde_json::to_string_pretty(&forms)?);
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("#").fg(Color::White),
        Cell::new("Step").fg(Color::White),
        Cell::new("Title").fg(Color::White),
        Cell::new("Fields").fg(Color::White),
    ]);

    for step in WizardStep::ALL {
        let fields = forms
            .iter()
            .find(|f| f.step == step)
            .map(|form| {
                form.fields
                    .iter()
                    .map(describe_field)
                    .collect::<Vec<_>>()
                    .join("\n")
            })
            .unwrap_or_else(|| "-".to_string());

        table.add_row(vec![
            Cell::new(step.index()),
            Cell::new(step.as_str()).fg(Color::Cyan),
            Cell::new(step_title(step)),
            Cell::new(fields).fg(Color::DarkGrey),
        ]);
    }

    println!();
    println!("{table}");
    println!();
    println!(
        "  Settings are read from {}",
        style(state.data_dir.join(CONFIG_FILE).display()).yellow()
    );
    println!();
    Ok(())
}

/// Forms for every question step of a fresh session. Dataset-driven options
/// are empty because nothing is uploaded yet.
fn step_forms() -> Vec<StepForm> {
    let session = new_session();
    WizardStep::QUESTIONS
        .iter()
        .filter_map(|step| build_step_form(*step, &session))
        .collect()
}

fn describe_field(field: &FormField) -> String {
    let kind = match &field.kind {
        FieldKind::SingleChoice { options, .. } => format!("one of {}", options.len()),
        FieldKind::MultiChoice { .. } if field.key == keys::FEATURES => {
            "any of (dataset columns)".to_string()
        }
        FieldKind::MultiChoice { options, .. } => format!("any of {}", options.len()),
        FieldKind::FreeText { required: true, .. } => "text".to_string(),
        FieldKind::FreeText { .. } => "text, optional".to_string(),
    };
    format!("{}: {kind}", field.key)
}
