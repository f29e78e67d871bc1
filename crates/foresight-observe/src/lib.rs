//! Observability setup for Foresight: structured logging with optional
//! OpenTelemetry span export.

pub mod tracing_setup;
