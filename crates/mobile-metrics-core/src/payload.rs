//! JSON payload decoding.
//!
//! Decoding only checks JSON syntax and field types. Presence and length rules
//! belong to [`crate::validate`], so a syntactically fine payload always gets a
//! validation reason instead of a generic decode error.

use crate::error::{MetricsError, Result};
use crate::model::Metric;

/// Decode a metric from a raw JSON body.
pub fn decode_metric(body: &[u8]) -> Result<Metric> {
    serde_json::from_slice(body)
        .map_err(|e| MetricsError::BadRequest(format!("invalid json: {e}")))
}
