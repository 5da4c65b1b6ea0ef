//! Command-line front end for the intake.
//!
//! Kept in the library so argument handling and the per-source loop can be
//! driven from tests without spawning the binary.

use std::io::{Read, Write};
use std::sync::Arc;

use bytes::Bytes;
use clap::Parser;

use mobile_metrics_core::error::{MetricsError, Result};

use crate::config::{self, IntakeConfig};
use crate::intake::MetricIntake;
use crate::sink::LogSink;

/// Validate client metric payloads.
#[derive(Parser, Debug)]
#[command(name = "mobile-metrics-intake")]
#[command(about = "Validate client metric payloads against the intake rules")]
pub struct Args {
    /// YAML config file (defaults apply when neither flag nor env is set)
    #[arg(long, env = "MOBILE_METRICS_CONFIG")]
    pub config: Option<String>,

    /// Payload files, one JSON metric each; `-` or none reads stdin
    pub files: Vec<String>,
}

impl Args {
    pub fn sources(&self) -> Vec<String> {
        if self.files.is_empty() {
            vec!["-".to_string()]
        } else {
            self.files.clone()
        }
    }
}

/// How a run ended; maps onto the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    AllAccepted,
    AnyRejected,
    Failed,
}

impl RunStatus {
    pub fn exit_code(self) -> u8 {
        match self {
            RunStatus::AllAccepted => 0,
            RunStatus::AnyRejected => 1,
            RunStatus::Failed => 2,
        }
    }
}

pub fn load_config(args: &Args) -> Result<IntakeConfig> {
    match &args.config {
        Some(path) => config::load_from_file(path),
        None => Ok(IntakeConfig::default()),
    }
}

fn read_source(name: &str) -> Result<Bytes> {
    let buf = if name == "-" {
        let mut buf = Vec::new();
        std::io::stdin()
            .read_to_end(&mut buf)
            .map_err(|e| MetricsError::Internal(format!("read stdin failed: {e}")))?;
        buf
    } else {
        std::fs::read(name)
            .map_err(|e| MetricsError::Internal(format!("read {name} failed: {e}")))?
    };
    Ok(Bytes::from(buf))
}

/// Submit each source in order and write one verdict line per source.
/// A source that cannot be read stops the run.
pub fn run_sources<W: Write>(intake: &MetricIntake, sources: &[String], out: &mut W) -> RunStatus {
    let mut status = RunStatus::AllAccepted;
    for src in sources {
        let body = match read_source(src) {
            Ok(b) => b,
            Err(e) => {
                tracing::error!(source = %src, error = %e, "payload read failed");
                return RunStatus::Failed;
            }
        };
        let verdict = intake.submit(body).verdict();
        if verdict.valid {
            let _ = writeln!(out, "{src}: ok");
        } else {
            status = RunStatus::AnyRejected;
            let _ = writeln!(out, "{src}: rejected: {}", verdict.reason);
        }
    }
    status
}

pub fn run<W: Write>(args: &Args, out: &mut W) -> RunStatus {
    let cfg = match load_config(args) {
        Ok(c) => c,
        Err(e) => {
            tracing::error!(error = %e, "config load failed");
            return RunStatus::Failed;
        }
    };

    let intake = MetricIntake::new(&cfg, Arc::new(LogSink));
    let status = run_sources(&intake, &args.sources(), out);
    tracing::debug!(counters = %intake.metrics().render(), "intake finished");
    status
}
