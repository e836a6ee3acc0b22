//! Results-tree management for run artifacts.
//!
//! A workspace owns the directory layout one run writes into:
//! - `<root>/screenshots` for PNG captures
//! - `<root>/reports` for the HTML reports
//! plus the default location of the CSV handoff file.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::config;

/// Subdirectory for PNG captures
pub const SCREENSHOTS_DIR_NAME: &str = "screenshots";

/// Subdirectory for HTML reports
pub const REPORTS_DIR_NAME: &str = "reports";

/// Directory layout for one run's artifacts
#[derive(Debug, Clone)]
pub struct Workspace {
    root: PathBuf,
}

impl Workspace {
    /// Create a workspace rooted at a specific directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Create a workspace rooted at the configured results directory.
    pub fn from_config() -> Self {
        Self::new(&config::get().paths.results_dir)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn screenshots_dir(&self) -> PathBuf {
        self.root.join(SCREENSHOTS_DIR_NAME)
    }

    pub fn reports_dir(&self) -> PathBuf {
        self.root.join(REPORTS_DIR_NAME)
    }

    /// Default location of the CSV handoff file for this workspace.
    pub fn default_csv_path(&self) -> PathBuf {
        self.root.join(&config::get().paths.csv_filename)
    }

    /// Create the screenshots and reports directories.
    pub fn init(&self) -> std::io::Result<()> {
        fs::create_dir_all(self.screenshots_dir())?;
        fs::create_dir_all(self.reports_dir())?;
        Ok(())
    }

    /// Path for a new screenshot: `screenshots/<prefix>-<timestamp>.png`.
    pub fn screenshot_path(&self, prefix: &str) -> PathBuf {
        self.screenshots_dir()
            .join(format!("{}-{}.png", prefix, filename_timestamp()))
    }
}

impl Default for Workspace {
    fn default() -> Self {
        Self::from_config()
    }
}

/// Timestamp suffix for generated file names, safe on every filesystem.
pub fn filename_timestamp() -> String {
    Local::now().format("%Y-%m-%dT%H-%M-%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workspace_layout() {
        let workspace = Workspace::new("test-results");
        assert_eq!(workspace.root(), Path::new("test-results"));
        assert_eq!(
            workspace.screenshots_dir(),
            Path::new("test-results/screenshots")
        );
        assert_eq!(workspace.reports_dir(), Path::new("test-results/reports"));
    }

    #[test]
    fn test_init_creates_directories() {
        let dir = tempfile::tempdir().unwrap();
        let workspace = Workspace::new(dir.path().join("results"));

        workspace.init().unwrap();
        assert!(workspace.screenshots_dir().is_dir());
        assert!(workspace.reports_dir().is_dir());

        // init is idempotent
        workspace.init().unwrap();
    }

    #[test]
    fn test_screenshot_path_shape() {
        let workspace = Workspace::new("results");
        let path = workspace.screenshot_path("checkout-run");
        let name = path.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("checkout-run-"));
        assert!(name.ends_with(".png"));
        assert!(path.starts_with("results/screenshots"));
    }

    #[test]
    fn test_filename_timestamp_has_no_separators() {
        let ts = filename_timestamp();
        assert!(!ts.contains(':'));
        assert!(!ts.contains(' '));
    }
}
