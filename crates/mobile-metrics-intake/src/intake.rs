//! Intake pipeline: size guard -> decode -> validate -> forward.
//!
//! Every payload ends in exactly one [`Outcome`]; each outcome is logged and
//! counted. Nothing in here panics on client input.

use std::sync::Arc;

use bytes::Bytes;

use mobile_metrics_core::error::MetricsError;
use mobile_metrics_core::validate::{Limits, Verdict};
use mobile_metrics_core::{decode_metric, EventKind};

use crate::config::IntakeConfig;
use crate::obs::IntakeMetrics;
use crate::sink::MetricSink;

/// Result of submitting one payload.
#[derive(Debug)]
pub enum Outcome {
    Accepted { client_id: String, kind: EventKind },
    Rejected(MetricsError),
}

impl Outcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Outcome::Accepted { .. })
    }

    /// `(valid, reason)` view for callers that only relay the reason.
    pub fn verdict(&self) -> Verdict {
        match self {
            Outcome::Accepted { .. } => Verdict::ok(),
            Outcome::Rejected(e) => Verdict::rejected(e.to_string()),
        }
    }
}

/// Construct once, then share via Arc.
pub struct MetricIntake {
    max_payload_bytes: usize,
    limits: Limits,
    sink: Arc<dyn MetricSink>,
    metrics: IntakeMetrics,
}

impl MetricIntake {
    pub fn new(cfg: &IntakeConfig, sink: Arc<dyn MetricSink>) -> Self {
        Self {
            max_payload_bytes: cfg.limits.max_payload_bytes,
            limits: cfg.limits.validation_limits(),
            sink,
            metrics: IntakeMetrics::default(),
        }
    }

    pub fn metrics(&self) -> &IntakeMetrics {
        &self.metrics
    }

    pub fn submit(&self, body: Bytes) -> Outcome {
        if body.len() > self.max_payload_bytes {
            tracing::warn!(len = body.len(), max = self.max_payload_bytes, "payload too large");
            return self.reject("none", MetricsError::PayloadTooLarge);
        }

        let metric = match decode_metric(&body) {
            Ok(m) => m,
            Err(e) => {
                tracing::warn!(error = %e, "payload decode failed");
                return self.reject("none", e);
            }
        };

        let kind = metric.kind();
        if let Err(e) = metric.check(&self.limits) {
            tracing::warn!(
                client_id = %metric.client_id,
                event_type = %metric.event_type,
                reason = %e,
                "metric rejected"
            );
            return self.reject(kind.as_str(), e.into());
        }

        let client_id = metric.client_id.clone();
        if let Err(e) = self.sink.forward(metric) {
            tracing::error!(client_id = %client_id, error = %e, "sink forward failed");
            return self.reject(kind.as_str(), e);
        }

        tracing::info!(client_id = %client_id, event_type = kind.as_str(), "metric accepted");
        self.metrics
            .payloads
            .inc(&[("outcome", "accepted"), ("type", kind.as_str())]);
        Outcome::Accepted { client_id, kind }
    }

    fn reject(&self, kind: &str, err: MetricsError) -> Outcome {
        self.metrics
            .payloads
            .inc(&[("outcome", "rejected"), ("type", kind)]);
        self.metrics
            .rejections
            .inc(&[("code", err.error_code().as_str())]);
        Outcome::Rejected(err)
    }
}
