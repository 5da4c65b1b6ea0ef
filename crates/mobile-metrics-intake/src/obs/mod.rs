//! Lightweight in-process counters.
//!
//! Intake outcomes are stored as atomics and rendered in Prometheus text format
//! by whoever embeds the intake.

pub mod metrics;

pub use metrics::{CounterVec, IntakeMetrics};
