use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::answer::AnswerValue;
use crate::dataset::Dataset;
use crate::step::WizardStep;

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Unique identifier for a wizard session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SessionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Per-run wizard state: the step cursor, the uploaded dataset and every
/// answer submitted so far.
///
/// Lifecycle management (advance, reset, answer writes) lives in
/// `foresight-core` as the `SessionExt` extension trait.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub id: SessionId,
    pub step: WizardStep,
    /// Set by the upload step; `None` until then.
    pub dataset: Option<Dataset>,
    /// Answers keyed by form field key. Ordered so output is deterministic.
    pub answers: BTreeMap<String, AnswerValue>,
    pub created_at: DateTime<Utc>,
}
