//! Business logic for Foresight.
//!
//! Owns the wizard state machine, the step form catalog and the prompt
//! renderer. It depends only on `foresight-types` and pure formatting crates --
//! never on `foresight-infra` or any file/terminal IO.

pub mod dataset;
pub mod source;
pub mod wizard;
