//! Modeling technique suggestion for the technique step.

use std::fmt;

/// Machine learning approaches the wizard offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Technique {
    Regression,
    Classification,
    TimeSeries,
}

impl Technique {
    /// Option order on the technique step.
    pub const ALL: [Technique; 3] = [
        Technique::Regression,
        Technique::Classification,
        Technique::TimeSeries,
    ];

    /// Full option label, including the parenthesised explanation.
    pub fn label(self) -> &'static str {
        match self {
            Technique::Regression => {
                "Regression (predict a continuous numeric value, e.g. hardness, service life)"
            }
            Technique::Classification => {
                "Classification (predict a category, e.g. \"will fail\" or \"will not fail\")"
            }
            Technique::TimeSeries => {
                "Time Series Analysis (predict future values based on a time sequence)"
            }
        }
    }

    pub fn index(self) -> usize {
        match self {
            Technique::Regression => 0,
            Technique::Classification => 1,
            Technique::TimeSeries => 2,
        }
    }
}

impl fmt::Display for Technique {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", short_name(self.label()))
    }
}

/// Problem phrases that imply a technique. Matched case-insensitively.
const HINTS: &[(&str, Technique)] = &[
    ("optimal service life", Technique::Regression),
    ("hardness variation", Technique::Regression),
    ("component failure", Technique::Classification),
    ("crack formation", Technique::Classification),
];

/// Pick the technique to preselect for the chosen problem.
///
/// Falls back to time series analysis when the problem is unknown or unset.
pub fn suggest_technique(problem: Option<&str>) -> Technique {
    let Some(problem) = problem else {
        return Technique::TimeSeries;
    };
    let problem = problem.to_lowercase();
    HINTS
        .iter()
        .find(|(phrase, _)| problem.contains(phrase))
        .map(|(_, technique)| *technique)
        .unwrap_or(Technique::TimeSeries)
}

/// Text before the first `" ("`, e.g. `"Regression"` for the regression
/// option label.
pub fn short_name(label: &str) -> &str {
    label.split(" (").next().unwrap_or(label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regression_problems() {
        assert_eq!(
            suggest_technique(Some("Optimal service life of a blast furnace refractory")),
            Technique::Regression
        );
        assert_eq!(
            suggest_technique(Some("Steel hardness variation")),
            Technique::Regression
        );
    }

    #[test]
    fn test_classification_problems() {
        assert_eq!(
            suggest_technique(Some("Rolling mill component failure")),
            Technique::Classification
        );
        assert_eq!(
            suggest_technique(Some("CRACK FORMATION in hot rolling")),
            Technique::Classification
        );
    }

    #[test]
    fn test_fallback_is_time_series() {
        assert_eq!(suggest_technique(None), Technique::TimeSeries);
        assert_eq!(suggest_technique(Some("")), Technique::TimeSeries);
        assert_eq!(
            suggest_technique(Some("Energy demand next week")),
            Technique::TimeSeries
        );
    }

    #[test]
    fn test_short_name() {
        assert_eq!(short_name(Technique::Regression.label()), "Regression");
        assert_eq!(
            short_name(Technique::TimeSeries.label()),
            "Time Series Analysis"
        );
        assert_eq!(short_name("Custom approach"), "Custom approach");
        assert_eq!(short_name(""), "");
        assert_eq!(Technique::Classification.to_string(), "Classification");
    }

    #[test]
    fn test_indices_follow_option_order() {
        for (i, technique) in Technique::ALL.iter().enumerate() {
            assert_eq!(technique.index(), i);
        }
    }
}
