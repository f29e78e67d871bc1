//! Infrastructure layer for Foresight.
//!
//! Contains the implementations behind the ports defined in `foresight-core`:
//! the file-backed dataset source (CSV, TSV and XLSX readers), the
//! `config.toml` loader and data directory resolution.

pub mod config;
pub mod dataset;
pub mod filesystem;
