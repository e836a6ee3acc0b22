//! Downstream consumer over the CSV handoff file.
//!
//! Reads order rows written by the storefront run and processes them. The
//! processing itself is a stub that echoes each row; the real SAP-side
//! integration replaces the per-row step with upload/RFC/API calls.

use std::path::Path;

use crate::handoff::{self, HandoffError};
use crate::report::RunResult;

/// Prefix for consumer-side reports
pub const CONSUMER_REPORT_PREFIX: &str = "consumer-run";

/// Read every handoff row in file order, recording one step per order.
///
/// Fails fast when the input file is missing, before any row is yielded:
/// a missing handoff file means a misconfigured pipeline, not a transient
/// condition. Returns the number of rows processed.
pub fn consume(input: &Path, result: &mut RunResult) -> Result<usize, HandoffError> {
    let rows = handoff::read_rows(input)?;
    result.csv_out_path = input.display().to_string();
    let description = format!("Reading order rows from {}", input.display());
    result.note("📥", "Handoff Input", &description);

    let mut count = 0;
    for row in rows {
        let row = row?;
        count += 1;
        let description = format!(
            "Processing order_id={} title={} url={} ts={}",
            row.order_id, row.product_title, row.product_url, row.generated_at_utc
        );
        result.note("📦", "Order Row", &description);
    }

    let description = format!("Processed {} order row(s)", count);
    result.note("✅", "Handoff Complete", &description);
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handoff::{OrderRecord, append_row};

    #[test]
    fn test_consume_counts_rows_and_records_steps() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("orders.csv");
        for i in 0..2 {
            append_row(
                &path,
                &OrderRecord {
                    order_id: format!("ORD{}", i),
                    product_title: "Shoe".to_string(),
                    ..Default::default()
                },
            )
            .unwrap();
        }

        let mut result = RunResult::new();
        let count = consume(&path, &mut result).unwrap();

        assert_eq!(count, 2);
        assert!(!result.has_errors());
        let rows: Vec<_> = result
            .steps
            .iter()
            .filter(|s| s.title == "Order Row")
            .collect();
        assert_eq!(rows.len(), 2);
        assert!(rows[0].description.contains("order_id=ORD0"));
        assert!(rows[1].description.contains("order_id=ORD1"));
    }

    #[test]
    fn test_consume_missing_input_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.csv");

        let mut result = RunResult::new();
        let outcome = consume(&path, &mut result);

        assert!(matches!(outcome, Err(HandoffError::MissingInput(_))));
        // fail-fast: nothing was recorded before the error surfaced
        assert!(result.steps.is_empty());
    }
}
