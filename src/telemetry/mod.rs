//! Logging setup for prreview.
//!
//! Structured logs via the `tracing` crate. Every executed command is logged
//! at debug level under the `prreview::cmd` target.
//!
//! # Feature Flags
//!
//! - `release-logs`: Strip debug/trace at compile time
//! - `max-perf`: Disable all tracing for maximum performance

mod init;

pub use init::{init_telemetry, TelemetryConfig};
