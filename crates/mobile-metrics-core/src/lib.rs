//! mobile-metrics core: client metric model, payload decoding, and validation.
//!
//! This crate defines the payload contract and error surface shared by the
//! intake pipeline and any transport built on top of it. It carries no I/O or
//! runtime dependencies.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here. Malformed client
//! input must surface as `MetricsError`/`ValidationError`, never as a crash.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod model;
pub mod payload;
pub mod validate;

/// Shared result type.
pub use error::{ErrorCode, MetricsError, Result, ValidationError};
pub use model::{AppMetric, DeviceMetric, EventKind, Metric, MetricData, SecurityMetric, SecurityMetrics};
pub use payload::decode_metric;
pub use validate::{Limits, Verdict};
