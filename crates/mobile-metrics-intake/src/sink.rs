//! Downstream receivers for accepted metrics.
//!
//! A transport or storage layer implements [`MetricSink`]; the intake only
//! forwards metrics that passed validation.

use std::sync::Mutex;

use mobile_metrics_core::error::{MetricsError, Result};
use mobile_metrics_core::Metric;

pub trait MetricSink: Send + Sync {
    fn forward(&self, metric: Metric) -> Result<()>;
}

/// Logs accepted metrics and drops them.
#[derive(Debug, Default)]
pub struct LogSink;

impl MetricSink for LogSink {
    fn forward(&self, metric: Metric) -> Result<()> {
        let security_checks = metric
            .data
            .as_ref()
            .and_then(|d| d.security.as_ref())
            .map(|s| s.len())
            .unwrap_or(0);
        tracing::info!(
            client_id = %metric.client_id,
            event_type = %metric.event_type,
            security_checks,
            "metric forwarded"
        );
        Ok(())
    }
}

/// Keeps accepted metrics in memory (tests, dry runs).
#[derive(Debug, Default)]
pub struct MemorySink {
    inner: Mutex<Vec<Metric>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything forwarded so far.
    pub fn metrics(&self) -> Vec<Metric> {
        match self.inner.lock() {
            Ok(g) => g.clone(),
            Err(_) => Vec::new(),
        }
    }
}

impl MetricSink for MemorySink {
    fn forward(&self, metric: Metric) -> Result<()> {
        // Poisoned mutex means a writer panicked; report instead of propagating the panic.
        let mut g = self
            .inner
            .lock()
            .map_err(|_| MetricsError::Internal("memory sink poisoned".into()))?;
        g.push(metric);
        Ok(())
    }
}
