//! Top-level facade crate for mobile-metrics.
//!
//! Re-exports the core model/validator and the intake pipeline so users can depend on a single crate.

pub mod core {
    pub use mobile_metrics_core::*;
}

pub mod intake {
    pub use mobile_metrics_intake::*;
}
