//! Observability setup for Lingo: structured logging and optional
//! OpenTelemetry span export.

pub mod tracing_setup;
