use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

/// A position in the wizard's fixed linear step sequence.
///
/// The discriminant is the step index shown to the user (`Upload` is step 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    Upload = 0,
    Problem = 1,
    DataPreparation = 2,
    AnalysisFocus = 3,
    Technique = 4,
    Prompt = 5,
}

impl WizardStep {
    /// Every step, in order.
    pub const ALL: [WizardStep; 6] = [
        WizardStep::Upload,
        WizardStep::Problem,
        WizardStep::DataPreparation,
        WizardStep::AnalysisFocus,
        WizardStep::Technique,
        WizardStep::Prompt,
    ];

    /// Steps that present a form to the user.
    pub const QUESTIONS: [WizardStep; 4] = [
        WizardStep::Problem,
        WizardStep::DataPreparation,
        WizardStep::AnalysisFocus,
        WizardStep::Technique,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// The step that follows this one, or `None` for the terminal step.
    pub fn next(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    pub fn is_terminal(self) -> bool {
        self == WizardStep::Prompt
    }

    pub fn is_question(self) -> bool {
        Self::QUESTIONS.contains(&self)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            WizardStep::Upload => "upload",
            WizardStep::Problem => "problem",
            WizardStep::DataPreparation => "data_preparation",
            WizardStep::AnalysisFocus => "analysis_focus",
            WizardStep::Technique => "technique",
            WizardStep::Prompt => "prompt",
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for WizardStep {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|step| step.as_str() == s)
            .ok_or_else(|| format!("unknown wizard step: '{s}'"))
    }
}
