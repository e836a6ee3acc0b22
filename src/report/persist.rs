//! Report persistence.
//!
//! A failed report write must never take down a run: by the time the report
//! is persisted the run's real-world side effects have already happened, so
//! I/O errors are logged to stderr and swallowed.

use std::fs;
use std::path::{Path, PathBuf};

use crate::workspace::filename_timestamp;

/// Name of the always-overwritten copy of the most recent report.
pub const LATEST_REPORT_NAME: &str = "latest-report.html";

/// Write a timestamped report plus `latest-report.html` into `reports_dir`,
/// creating the directory if absent. Returns the timestamped path, or
/// `None` when the write failed.
pub fn persist(html: &str, reports_dir: &Path, prefix: &str) -> Option<PathBuf> {
    match write_reports(html, reports_dir, prefix) {
        Ok(report_path) => {
            println!("\n📊 HTML report generated: {}", report_path.display());
            println!(
                "📋 Latest report saved: {}",
                reports_dir.join(LATEST_REPORT_NAME).display()
            );
            Some(report_path)
        }
        Err(err) => {
            eprintln!("❌ Failed to write HTML report: {}", err);
            None
        }
    }
}

fn write_reports(html: &str, reports_dir: &Path, prefix: &str) -> std::io::Result<PathBuf> {
    fs::create_dir_all(reports_dir)?;
    let report_path = reports_dir.join(format!("{}-{}.html", prefix, filename_timestamp()));
    fs::write(&report_path, html)?;
    fs::write(reports_dir.join(LATEST_REPORT_NAME), html)?;
    Ok(report_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_persist_writes_both_files() {
        let dir = tempfile::tempdir().unwrap();
        let reports_dir = dir.path().join("reports");

        let report_path = persist("<html></html>", &reports_dir, "test-run").unwrap();
        assert!(report_path.exists());
        assert!(report_path.file_name().unwrap().to_string_lossy().starts_with("test-run-"));

        let latest = reports_dir.join(LATEST_REPORT_NAME);
        assert_eq!(fs::read_to_string(latest).unwrap(), "<html></html>");
    }

    #[test]
    fn test_persist_overwrites_latest() {
        let dir = tempfile::tempdir().unwrap();
        let reports_dir = dir.path().join("reports");

        persist("first", &reports_dir, "test-run").unwrap();
        persist("second", &reports_dir, "test-run").unwrap();

        let latest = reports_dir.join(LATEST_REPORT_NAME);
        assert_eq!(fs::read_to_string(latest).unwrap(), "second");
    }

    #[test]
    fn test_persist_swallows_io_errors() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        fs::write(&blocker, "file in the way").unwrap();

        // reports_dir collides with an existing file, so create_dir_all fails
        assert!(persist("<html></html>", &blocker, "test-run").is_none());
    }
}
