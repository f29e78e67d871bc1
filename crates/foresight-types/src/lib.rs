//! Shared domain types for Foresight.
//!
//! This crate contains the core domain types used across the Foresight wizard:
//! steps, answers, datasets, form definitions, sessions, configuration and
//! their associated error types.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod answer;
pub mod config;
pub mod dataset;
pub mod error;
pub mod form;
pub mod session;
pub mod step;
