//! Question catalog: what each step asks and which options it offers.
//!
//! Forms are built on demand from the current session because two of them
//! depend on earlier answers: the feature list comes from the uploaded
//! dataset's columns, and the technique step preselects the technique
//! suggested for the chosen problem.

use foresight_types::answer::keys;
use foresight_types::form::{FieldKind, FormField, StepForm};
use foresight_types::session::Session;
use foresight_types::step::WizardStep;

use crate::wizard::state::SessionExt;
use crate::wizard::suggest::{suggest_technique, Technique};

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

pub const PROBLEMS: [&str; 4] = [
    "Rolling mill component failure",
    "Steel hardness variation",
    "Crack formation in hot rolling",
    "Optimal service life of a blast furnace refractory",
];

pub const DATA_SOURCES: [&str; 4] = [
    "Process sensors (SCADA)",
    "Laboratory data (LIMS)",
    "Maintenance logs (SAP-PM)",
    "Production data (ERP)",
];

pub const STANDARDIZATION: [&str; 2] = [
    "Unify units of measure",
    "Normalize data (0 to 1 scale)",
];

pub const CLEANING: [&str; 4] = [
    "Handle missing or null values (NaNs)",
    "Remove outliers",
    "Create derived variables",
    "Consolidate data into a single table",
];

pub const PATTERNS: [&str; 3] = [
    "Correlation between variables and the target event",
    "Seasonality or cyclicity in failures",
    "Behavior changes that precede the event",
];

const CONTINUE: &str = "Continue";
const FINISH: &str = "Finish and generate prompt";

// ---------------------------------------------------------------------------
// Form construction
// ---------------------------------------------------------------------------

/// Build the form for `step`, or `None` for steps without a form
/// (upload and the final prompt).
pub fn build_step_form(step: WizardStep, session: &Session) -> Option<StepForm> {
    match step {
        WizardStep::Problem => Some(problem_form()),
        WizardStep::DataPreparation => Some(data_preparation_form()),
        WizardStep::AnalysisFocus => Some(analysis_focus_form(session)),
        WizardStep::Technique => Some(technique_form(session)),
        WizardStep::Upload | WizardStep::Prompt => None,
    }
}

/// Title shown for steps that have no form.
pub fn step_title(step: WizardStep) -> &'static str {
    match step {
        WizardStep::Upload => "Starting point: your historical data",
        WizardStep::Problem => "Step 1: What problem do you want to predict?",
        WizardStep::DataPreparation => "Step 2: Describe how your data is prepared",
        WizardStep::AnalysisFocus => "Step 3: Define the analysis focus and the variables",
        WizardStep::Technique => "Step 4: Choose the machine learning approach",
        WizardStep::Prompt => "Predictive prompt generated successfully!",
    }
}

fn problem_form() -> StepForm {
    StepForm {
        step: WizardStep::Problem,
        title: step_title(WizardStep::Problem).to_string(),
        intro: None,
        fields: vec![
            FormField {
                key: keys::PREDICTIVE_PROBLEM.to_string(),
                label: "Select the target of your predictive analysis:".to_string(),
                section: None,
                hint: None,
                kind: single_choice(&PROBLEMS, 0),
            },
            FormField {
                key: keys::PROBLEM_CONTEXT.to_string(),
                label: "Anything else the analyst should know about this problem? (optional)"
                    .to_string(),
                section: None,
                hint: None,
                kind: FieldKind::FreeText {
                    default: String::new(),
                    required: false,
                },
            },
        ],
        submit_label: CONTINUE.to_string(),
    }
}

fn data_preparation_form() -> StepForm {
    StepForm {
        step: WizardStep::DataPreparation,
        title: step_title(WizardStep::DataPreparation).to_string(),
        intro: None,
        fields: vec![
            FormField {
                key: keys::DATA_SOURCES.to_string(),
                label: "Which sources was this data extracted from?".to_string(),
                section: Some("Sources and Integration".to_string()),
                hint: None,
                kind: multi_choice(&DATA_SOURCES, &[]),
            },
            FormField {
                key: keys::STANDARDIZATION.to_string(),
                label: "Which standardizations are needed?".to_string(),
                section: Some("Scale Standardization".to_string()),
                hint: None,
                kind: multi_choice(&STANDARDIZATION, &[]),
            },
            FormField {
                key: keys::CLEANING.to_string(),
                label: "Which cleaning and feature engineering tasks should be considered?"
                    .to_string(),
                section: Some("Cleaning and Transformation".to_string()),
                hint: None,
                kind: multi_choice(&CLEANING, &[]),
            },
        ],
        submit_label: CONTINUE.to_string(),
    }
}

fn analysis_focus_form(session: &Session) -> StepForm {
    let columns: Vec<&str> = session
        .dataset
        .as_ref()
        .map(|ds| ds.columns.iter().map(String::as_str).collect())
        .unwrap_or_default();

    StepForm {
        step: WizardStep::AnalysisFocus,
        title: step_title(WizardStep::AnalysisFocus).to_string(),
        intro: None,
        fields: vec![
            FormField {
                key: keys::PATTERNS.to_string(),
                label: "What kinds of patterns should the AI look for in the historical data?"
                    .to_string(),
                section: Some("Historical Patterns to Investigate".to_string()),
                hint: None,
                kind: multi_choice(&PATTERNS, &[]),
            },
            FormField {
                key: keys::FEATURES.to_string(),
                label: "Select the variables (features):".to_string(),
                section: Some("Relevant Variable Selection (Feature Selection)".to_string()),
                hint: Some(
                    "Select the columns of your table that you believe matter most for \
                     predicting the problem."
                        .to_string(),
                ),
                kind: multi_choice(&columns, &columns),
            },
        ],
        submit_label: CONTINUE.to_string(),
    }
}

fn technique_form(session: &Session) -> StepForm {
    let suggested = suggest_technique(session.text_answer(keys::PREDICTIVE_PROBLEM));
    let labels: Vec<&str> = Technique::ALL.iter().map(|t| t.label()).collect();

    StepForm {
        step: WizardStep::Technique,
        title: step_title(WizardStep::Technique).to_string(),
        intro: Some(
            "Based on the chosen problem we suggest a technique. You can change it if you wish."
                .to_string(),
        ),
        fields: vec![FormField {
            key: keys::ML_TECHNIQUE.to_string(),
            label: "Select the predictive modeling technique:".to_string(),
            section: None,
            hint: None,
            kind: single_choice(&labels, suggested.index()),
        }],
        submit_label: FINISH.to_string(),
    }
}

fn single_choice(options: &[&str], default: usize) -> FieldKind {
    FieldKind::SingleChoice {
        options: options.iter().map(|o| o.to_string()).collect(),
        default,
    }
}

fn multi_choice(options: &[&str], defaults: &[&str]) -> FieldKind {
    FieldKind::MultiChoice {
        options: options.iter().map(|o| o.to_string()).collect(),
        defaults: defaults.iter().map(|o| o.to_string()).collect(),
    }
}
