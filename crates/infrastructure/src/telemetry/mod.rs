//! Telemetry infrastructure
//!
//! Structured logging via `tracing`.

mod subscriber;

pub use subscriber::{TelemetryConfig, TelemetryError, init_telemetry};
