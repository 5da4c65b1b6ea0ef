//! mobile-metrics intake library entry.
//!
//! Wires config, decoding, validation, counters and a downstream sink into the
//! collaborator that accepts or rejects client metric payloads. Consumed by the
//! CLI binary (`main.rs`) and by integration tests.

pub mod cli;
pub mod config;
pub mod intake;
pub mod obs;
pub mod sink;

pub use intake::{MetricIntake, Outcome};
pub use sink::{LogSink, MemorySink, MetricSink};
