//! Integration tests for the full run → handoff → consume pipeline

use std::fs;
use std::time::Duration;

use checkout_relay::consumer;
use checkout_relay::handoff::{OrderRecord, append_row};
use checkout_relay::report::{LATEST_REPORT_NAME, RunResult};
use checkout_relay::storefront::{self, RunOptions};
use checkout_relay::workspace::Workspace;

fn fast_options(root: std::path::PathBuf) -> RunOptions {
    let workspace = Workspace::new(root);
    workspace.init().expect("Failed to create workspace");
    let mut opts = RunOptions::from_config(workspace);
    opts.timeout = Duration::from_millis(20);
    opts.stage_delay_ms = 0;
    opts.poll_interval = Duration::from_millis(1);
    opts
}

#[test]
fn test_run_then_consume_pipeline() {
    let dir = tempfile::tempdir().unwrap();
    let opts = fast_options(dir.path().join("results"));

    // Two back-to-back runs append two rows under a single header
    for _ in 0..2 {
        let mut driver = storefront::scripted_session();
        let result = storefront::run(&mut driver, &opts);
        assert!(!result.has_errors(), "run should pass: {:?}", result.steps);
    }

    let content = fs::read_to_string(&opts.csv_out).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "order_id,product_title,product_url,generated_at_utc");

    let mut result = RunResult::new();
    let count = consumer::consume(&opts.csv_out, &mut result).unwrap();
    assert_eq!(count, 2);
    assert!(
        result
            .steps
            .iter()
            .filter(|s| s.title == "Order Row")
            .all(|s| s.description.contains("order_id=ORD-31544"))
    );
}

#[test]
fn test_failed_run_still_writes_report_tree() {
    let dir = tempfile::tempdir().unwrap();
    let opts = fast_options(dir.path().join("results"));

    let mut driver = storefront::scripted_session()
        .without_element(checkout_relay::storefront::sel::LOGIN_EMAIL);
    let result = storefront::run(&mut driver, &opts);

    assert!(result.has_errors());

    let latest = opts.workspace.reports_dir().join(LATEST_REPORT_NAME);
    let html = fs::read_to_string(&latest).unwrap();
    assert!(html.contains("FAILED"));
    // failure detail from the login stage survives into the report
    assert!(html.contains("Email field not found"));

    // the error screenshot landed next to the reports
    let screenshots: Vec<_> = fs::read_dir(opts.workspace.screenshots_dir())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    assert!(screenshots.iter().any(|n| n.starts_with("checkout-error-")));
}

#[test]
fn test_report_escapes_hostile_row_data() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("orders.csv");
    append_row(
        &path,
        &OrderRecord {
            order_id: "ORD<script>".to_string(),
            product_title: "Sneaker & \"Co\"".to_string(),
            ..Default::default()
        },
    )
    .unwrap();

    let mut result = RunResult::new();
    consumer::consume(&path, &mut result).unwrap();
    let html = checkout_relay::report::render(&result);

    assert!(!html.contains("ORD<script>"));
    assert!(html.contains("ORD&lt;script&gt;"));
    assert!(html.contains("Sneaker &amp; &quot;Co&quot;"));
}
