//! Intake configuration.
//!
//! YAML only, unknown keys rejected at every level. A file that parses is
//! range-checked before it is handed out, so callers never see a config the
//! intake would refuse to run with.

pub mod schema;

use std::path::Path;

use mobile_metrics_core::error::{MetricsError, Result};

pub use schema::{IntakeConfig, LimitsSection};

/// Read and validate a config file. Read failures name the offending path.
pub fn load_from_file(path: impl AsRef<Path>) -> Result<IntakeConfig> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|e| {
        MetricsError::Internal(format!("read config {} failed: {e}", path.display()))
    })?;
    load_from_str(&text).map_err(|e| match e {
        MetricsError::BadRequest(msg) => {
            MetricsError::BadRequest(format!("{}: {msg}", path.display()))
        }
        other => other,
    })
}

pub fn load_from_str(text: &str) -> Result<IntakeConfig> {
    let cfg: IntakeConfig = serde_yaml::from_str(text)
        .map_err(|e| MetricsError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
