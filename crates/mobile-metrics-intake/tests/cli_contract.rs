#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::Parser;

use mobile_metrics_intake::cli::{self, Args, RunStatus};

const BIN: &str = "mobile-metrics-intake";
const INIT_OK: &str = r#"{"clientId":"c1","type":"init","data":{"app":{},"device":{}}}"#;
const UNKNOWN_TYPE: &str = r#"{"clientId":"c1","type":"bogus","data":{"app":{},"device":{}}}"#;

fn scratch_file(name: &str, contents: &str) -> String {
    let path: PathBuf = std::env::temp_dir().join(format!(
        "mobile-metrics-cli-{}-{name}",
        std::process::id()
    ));
    std::fs::write(&path, contents).unwrap();
    path.to_string_lossy().into_owned()
}

fn args(config: Option<String>, files: Vec<String>) -> Args {
    Args { config, files }
}

fn run(args: &Args) -> (RunStatus, String) {
    let mut out = Vec::new();
    let status = cli::run(args, &mut out);
    (status, String::from_utf8(out).unwrap())
}

#[test]
fn help_is_not_a_payload() {
    let err = Args::try_parse_from([BIN, "--help"]).expect_err("help exits early");
    assert_eq!(err.kind(), ErrorKind::DisplayHelp);
}

#[test]
fn config_equals_form_is_a_flag() {
    let a = Args::try_parse_from([BIN, "--config=cfg.yaml", "a.json", "b.json"]).unwrap();
    assert_eq!(a.config.as_deref(), Some("cfg.yaml"));
    assert_eq!(a.files, vec!["a.json", "b.json"]);
}

#[test]
fn config_flag_beats_env_beats_defaults() {
    // only test in this binary that touches the env var or parses without --config
    std::env::set_var("MOBILE_METRICS_CONFIG", "from-env.yaml");

    let a = Args::try_parse_from([BIN, "--config", "from-flag.yaml"]).unwrap();
    assert_eq!(a.config.as_deref(), Some("from-flag.yaml"));

    let a = Args::try_parse_from([BIN, "p.json"]).unwrap();
    assert_eq!(a.config.as_deref(), Some("from-env.yaml"));

    std::env::remove_var("MOBILE_METRICS_CONFIG");

    let a = Args::try_parse_from([BIN]).unwrap();
    assert!(a.config.is_none());
    assert_eq!(a.sources(), vec!["-"]);
    let cfg = cli::load_config(&a).unwrap();
    assert_eq!(cfg.limits.client_id_max_len, 128);
    assert_eq!(cfg.limits.max_payload_bytes, 65536);
}

#[test]
fn all_accepted_exits_zero() {
    let p = scratch_file("ok.json", INIT_OK);
    let (status, out) = run(&args(None, vec![p.clone()]));
    assert_eq!(status, RunStatus::AllAccepted);
    assert_eq!(status.exit_code(), 0);
    assert_eq!(out, format!("{p}: ok\n"));
}

#[test]
fn any_rejected_exits_one_and_reports_each_source() {
    let ok = scratch_file("mixed-ok.json", INIT_OK);
    let bad = scratch_file("mixed-bad.json", UNKNOWN_TYPE);
    let (status, out) = run(&args(None, vec![ok.clone(), bad.clone()]));
    assert_eq!(status, RunStatus::AnyRejected);
    assert_eq!(status.exit_code(), 1);
    assert_eq!(
        out,
        format!("{ok}: ok\n{bad}: rejected: payload type unknown\n")
    );
}

#[test]
fn unreadable_source_exits_two() {
    let (status, _) = run(&args(None, vec!["no-such-payload.json".into()]));
    assert_eq!(status, RunStatus::Failed);
    assert_eq!(status.exit_code(), 2);
}

#[test]
fn bad_config_exits_two() {
    let (status, out) = run(&args(Some("no-such-config.yaml".into()), vec![]));
    assert_eq!(status.exit_code(), 2);
    assert!(out.is_empty());

    let cfg = scratch_file("bad.yaml", "version: 2\n");
    let (status, _) = run(&args(Some(cfg), vec![]));
    assert_eq!(status, RunStatus::Failed);
}

#[test]
fn config_file_limits_apply() {
    let cfg = scratch_file("tight.yaml", "version: 1\nlimits:\n  client_id_max_len: 1\n");
    let p = scratch_file("tight-payload.json", INIT_OK);
    let (status, out) = run(&args(Some(cfg), vec![p.clone()]));
    assert_eq!(status, RunStatus::AnyRejected);
    assert_eq!(out, format!("{p}: rejected: clientId exceeded maximum length of 1\n"));
}
