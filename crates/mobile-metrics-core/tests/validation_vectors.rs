//! Payload validation vector tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use mobile_metrics_core::decode_metric;

use vector_loader::load;

fn run(files: &[&str]) {
    for f in files {
        let v = load(f);
        let metric = decode_metric(&v.body())
            .unwrap_or_else(|e| panic!("vector={} failed to decode: {e}", v.description));
        let verdict = metric.validate();

        assert_eq!(verdict.valid, v.expect.valid, "vector={}", v.description);
        assert_eq!(verdict.reason, v.expect.reason, "vector={}", v.description);
    }
}

#[test]
fn top_level_vectors() {
    run(&[
        "missing_client_id",
        "absent_client_id",
        "client_id_too_long",
        "client_id_max_ok",
        "missing_type",
        "type_too_long",
        "timestamp_not_a_number",
        "timestamp_float",
        "timestamp_empty_string",
        "data_missing",
        "data_null",
        "data_empty_object",
        "data_all_null",
        "unknown_type",
    ]);
}

#[test]
fn init_vectors() {
    run(&[
        "init_minimal_ok",
        "init_full_ok",
        "init_string_timestamp_ok",
        "init_unknown_fields_ok",
        "init_missing_app",
        "init_missing_device",
    ]);
}

#[test]
fn security_vectors() {
    run(&[
        "security_ok",
        "security_missing_app",
        "security_missing_array",
        "security_empty",
        "security_too_long",
        "security_max_ok",
        "security_missing_passed",
        "security_null_id",
        "security_first_failure_wins",
        "security_null_entry",
        "security_null_entry_after_valid",
    ]);
}
