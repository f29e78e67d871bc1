//! Final prompt renderer.
//!
//! Pure string formatting: every collected answer is substituted into a fixed
//! multi-section template and the dataset's CSV text is appended after a
//! marker line. Nothing here fails on missing answers -- lists render empty
//! and single values render as the configured undefined label.

use foresight_types::answer::keys;
use foresight_types::config::GlobalConfig;
use foresight_types::error::WizardError;
use foresight_types::session::Session;

use crate::dataset::to_csv_string;
use crate::wizard::state::SessionExt;
use crate::wizard::suggest::short_name;

/// Marker line preceding the embedded dataset.
pub const DATA_MARKER: &str = "--- DATA FOR ANALYSIS ---";

const PERSONA: &str = "**Persona:**\n\
You are a senior data scientist specializing in predictive modeling for heavy industry. \
Your task is to analyze the data provided and present the results clearly and visually.";

const OUTPUT_FORMAT: &str = "**4. Expected Output Format (What you should produce):**
- **Exploratory Analysis (EDA):** Present a bullet-point summary of the main insights found in the data.
- **Model Results:** Present the model's main performance metrics (e.g. R², MAE for regression; Accuracy, F1-Score for classification).
- **Chart (Main Result):** This is the most important part. Your task is to produce a visualization of the importance of each variable (feature importance). Deliver the result using the following ORDER OF PREFERENCE:
    - **1st (Preferred): SVG code.** Directly generate the code for a bar chart in SVG format. Wrap the complete SVG code in a code block.
    - **2nd (Alternative): Python code.** If SVG is not possible, provide complete Python code using `matplotlib` or `plotly` to generate the bar chart.
    - **3rd (Last Resort): Markdown table.** If neither option above is possible, present the variable importance data in a Markdown table with the columns \"Variable\" and \"Importance Index (0 to 1)\".
- **Conclusion and Recommendations:** Provide a 2-3 sentence summary of the main insights (e.g. \"Variable X was the most influential...\") and recommend practical actions based on the analysis.";

/// Render the complete prompt for a session.
///
/// The caller decides whether the session is far enough along; see
/// `WizardController::render_prompt` for the step check.
pub fn render_prompt(session: &Session, config: &GlobalConfig) -> Result<String, WizardError> {
    let data = match &session.dataset {
        Some(dataset) => to_csv_string(dataset)?,
        None => String::new(),
    };

    let mut sections = Vec::with_capacity(6);
    sections.push(PERSONA.to_string());
    sections.push(goal_section(session, config));
    sections.push(preparation_section(session, config));
    sections.push(approach_section(session, config));
    sections.push(OUTPUT_FORMAT.to_string());

    let mut prompt = sections.join("\n\n");
    prompt.push_str("\n\n");
    prompt.push_str(DATA_MARKER);
    prompt.push('\n');
    prompt.push_str(&data);
    prompt.push('\n');

    tracing::debug!(
        session = %session.id,
        chars = prompt.len(),
        "rendered prompt"
    );
    Ok(prompt)
}

fn goal_section(session: &Session, config: &GlobalConfig) -> String {
    let problem = single(session, keys::PREDICTIVE_PROBLEM, config);
    let mut section = format!(
        "**1. Main Goal of the Predictive Analysis:**\n\
         The goal is to build a model capable of predicting: **{problem}**."
    );
    if let Some(context) = session
        .text_answer(keys::PROBLEM_CONTEXT)
        .map(str::trim)
        .filter(|c| !c.is_empty())
    {
        section.push_str(&format!("\n- **Additional Context:** {context}"));
    }
    section
}

fn preparation_section(session: &Session, config: &GlobalConfig) -> String {
    format!(
        "**2. Data Context and Preparation (Instructions for you):**\n\
         - **Data Sources:** Consider that the data came from: {}.\n\
         - **Standardization and Normalization:** When analyzing, apply the following standardizations: {}.\n\
         - **Cleaning and Feature Engineering:** Perform the following preprocessing steps: {}.",
        joined(session, keys::DATA_SOURCES, config),
        joined(session, keys::STANDARDIZATION, config),
        joined(session, keys::CLEANING, config),
    )
}

fn approach_section(session: &Session, config: &GlobalConfig) -> String {
    let technique = single(session, keys::ML_TECHNIQUE, config);
    format!(
        "**3. Analytical and Modeling Approach (Instructions for you):**\n\
         - **Historical Pattern Analysis:** Investigate the following patterns: {}.\n\
         - **Relevant Variables (Features):** Build the model primarily using the following variables: {}.\n\
         - **Machine Learning Technique:** Use the following approach: **{}**.",
        joined(session, keys::PATTERNS, config),
        joined(session, keys::FEATURES, config),
        short_name(&technique),
    )
}

/// A single-value answer, or the undefined label when it was never stored.
fn single(session: &Session, key: &str, config: &GlobalConfig) -> String {
    session
        .text_answer(key)
        .unwrap_or(&config.undefined_label)
        .to_string()
}

fn joined(session: &Session, key: &str, config: &GlobalConfig) -> String {
    session.list_answer(key).join(&config.list_separator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::state::new_session;
    use foresight_types::answer::AnswerValue;
    use foresight_types::dataset::{Dataset, DatasetFormat};

    fn choices(items: &[&str]) -> AnswerValue {
        AnswerValue::Choices(items.iter().map(|s| s.to_string()).collect())
    }

    fn filled_session() -> Session {
        let mut session = new_session();
        session.dataset = Some(Dataset::new(
            "mill.csv",
            DatasetFormat::Csv,
            vec!["temp".to_string(), "speed".to_string()],
            vec![vec!["1200".to_string(), "3.5".to_string()]],
        ));
        session.set_answer(keys::PREDICTIVE_PROBLEM, AnswerValue::from("Steel hardness variation"));
        session.set_answer(keys::DATA_SOURCES, choices(&["SCADA", "LIMS"]));
        session.set_answer(keys::STANDARDIZATION, choices(&["Unify units of measure"]));
        session.set_answer(keys::CLEANING, choices(&["Remove outliers"]));
        session.set_answer(keys::PATTERNS, choices(&["Seasonality or cyclicity in failures"]));
        session.set_answer(keys::FEATURES, choices(&["temp", "speed"]));
        session.set_answer(
            keys::ML_TECHNIQUE,
            AnswerValue::from(
                "Regression (predict a continuous numeric value, e.g. hardness, service life)",
            ),
        );
        session
    }

    #[test]
    fn test_all_answers_appear() {
        let prompt = render_prompt(&filled_session(), &GlobalConfig::default()).unwrap();
        assert!(prompt.contains("predicting: **Steel hardness variation**."));
        assert!(prompt.contains("the data came from: SCADA, LIMS."));
        assert!(prompt.contains("standardizations: Unify units of measure."));
        assert!(prompt.contains("preprocessing steps: Remove outliers."));
        assert!(prompt.contains("patterns: Seasonality or cyclicity in failures."));
        assert!(prompt.contains("variables: temp, speed."));
        assert!(prompt.contains("approach: **Regression**."));
    }

    #[test]
    fn test_dataset_is_appended_after_marker() {
        let prompt = render_prompt(&filled_session(), &GlobalConfig::default()).unwrap();
        assert!(prompt.starts_with("**Persona:**\n"));
        assert!(prompt.ends_with("--- DATA FOR ANALYSIS ---\ntemp,speed\n1200,3.5\n\n"));
    }

    #[test]
    fn test_missing_answers_render_placeholders() {
        let prompt = render_prompt(&new_session(), &GlobalConfig::default()).unwrap();
        assert!(prompt.contains("predicting: **Not defined**."));
        assert!(prompt.contains("approach: **Not defined**."));
        assert!(prompt.contains("the data came from: ."));
        assert!(prompt.contains("variables: ."));
        assert!(prompt.ends_with("--- DATA FOR ANALYSIS ---\n\n"));
    }

    #[test]
    fn test_config_separator_and_label() {
        let config = GlobalConfig {
            list_separator: " | ".to_string(),
            undefined_label: "n/a".to_string(),
            ..GlobalConfig::default()
        };
        let mut session = filled_session();
        session.answers.remove(keys::ML_TECHNIQUE);
        let prompt = render_prompt(&session, &config).unwrap();
        assert!(prompt.contains("the data came from: SCADA | LIMS."));
        assert!(prompt.contains("approach: **n/a**."));
    }

    #[test]
    fn test_problem_context_only_when_present() {
        let mut session = filled_session();
        let prompt = render_prompt(&session, &GlobalConfig::default()).unwrap();
        assert!(!prompt.contains("Additional Context"));

        session.set_answer(keys::PROBLEM_CONTEXT, AnswerValue::from("  Line 2 only  "));
        let prompt = render_prompt(&session, &GlobalConfig::default()).unwrap();
        assert!(prompt.contains("- **Additional Context:** Line 2 only\n"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let session = filled_session();
        let config = GlobalConfig::default();
        let first = render_prompt(&session, &config).unwrap();
        let second = render_prompt(&session.clone(), &config).unwrap();
        assert_eq!(first, second);
    }
}
