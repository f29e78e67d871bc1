//! Guided wizard: session lifecycle, step forms and the final prompt.
//!
//! `state` holds the session store and step cursor, `catalog` defines what
//! each question step asks, `suggest` picks the default modeling technique,
//! `prompt` renders the final text and `controller` ties them together for
//! front-ends.

pub mod catalog;
pub mod controller;
pub mod prompt;
pub mod state;
pub mod suggest;
