//! mobile-metrics intake CLI.
//!
//! Usage: `mobile-metrics-intake [--config <path>] [FILE...]`
//! Exit code: 0 all accepted, 1 any rejected, 2 usage/config/read error.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use mobile_metrics_intake::cli::{self, Args};

fn main() -> ExitCode {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let args = Args::parse();
    let status = cli::run(&args, &mut std::io::stdout().lock());
    ExitCode::from(status.exit_code())
}
