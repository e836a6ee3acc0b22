//! Types for the execution log: steps and the accumulated run result.

use chrono::Local;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Classification of a recorded step.
///
/// `Info` renders without a CSS class in the HTML report; the other two map
/// to the `warning` and `error` step styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepKind {
    #[default]
    Info,
    Warning,
    Error,
}

impl StepKind {
    /// CSS class suffix used by the report renderer.
    pub fn css_class(&self) -> &'static str {
        match self {
            StepKind::Info => "",
            StepKind::Warning => "warning",
            StepKind::Error => "error",
        }
    }
}

/// One recorded event in a run. Steps are never mutated after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Step {
    /// Short symbolic tag (e.g. an emoji) for human scanning
    pub icon: String,

    /// Short label
    pub title: String,

    /// Human-readable detail
    pub description: String,

    /// Classification tag
    pub kind: StepKind,

    /// Optional long-form text (trace output, raw URL), may be empty
    pub details: String,

    /// 12-hour local wall-clock time, captured at creation
    pub timestamp: String,
}

impl Step {
    /// Create a step with a freshly captured timestamp.
    pub fn new(icon: &str, title: &str, description: &str, kind: StepKind, details: &str) -> Self {
        Self {
            icon: icon.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            kind,
            details: details.to_string(),
            timestamp: Local::now().format("%I:%M:%S %p").to_string(),
        }
    }
}

/// Accumulated state of one automation run.
///
/// Created empty at run start; every stage appends steps and may set zero or
/// more scalar fields. Absence of a value is not an error. The execution
/// time is set exactly once at the end of both the success and the failure
/// exit path.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunResult {
    /// Ordered sequence of steps, insertion order is chronological
    pub steps: Vec<Step>,

    pub page_title: String,
    pub final_url: String,
    pub product_title: String,
    pub product_url: String,
    pub order_id: String,
    pub screenshot_path: String,
    pub csv_out_path: String,
    pub browser_name: String,
    pub browser_version: String,

    /// Duration of the run in milliseconds
    pub execution_time_ms: u64,
}

impl RunResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a step and echo it to stdout so a human watching the run gets
    /// real-time feedback while the structured log accumulates for the
    /// report. Recording never fails; a failed echo write is dropped.
    pub fn record(&mut self, icon: &str, title: &str, description: &str, kind: StepKind, details: &str) {
        let step = Step::new(icon, title, description, kind, details);
        let _ = writeln!(
            std::io::stdout(),
            "{} {}: {}",
            step.icon,
            step.title,
            step.description
        );
        self.steps.push(step);
    }

    /// Shorthand for an informational step with no details.
    pub fn note(&mut self, icon: &str, title: &str, description: &str) {
        self.record(icon, title, description, StepKind::Info, "");
    }

    /// Number of error-kind steps recorded so far.
    pub fn error_count(&self) -> usize {
        self.steps
            .iter()
            .filter(|s| s.kind == StepKind::Error)
            .count()
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    #[test]
    fn test_record_preserves_insertion_order() {
        let mut result = RunResult::new();
        result.note("🚀", "Start", "first");
        result.record("❌", "Fail", "second", StepKind::Error, "boom");
        result.note("🔒", "Cleanup", "third");

        let titles: Vec<&str> = result.steps.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Start", "Fail", "Cleanup"]);
    }

    #[test]
    fn test_step_timestamp_format() {
        let step = Step::new("🚀", "Start", "desc", StepKind::Info, "");
        assert!(NaiveTime::parse_from_str(&step.timestamp, "%I:%M:%S %p").is_ok());
    }

    #[test]
    fn test_error_counting() {
        let mut result = RunResult::new();
        assert!(!result.has_errors());

        result.note("✅", "Ok", "fine");
        result.record("⚠️", "Warn", "careful", StepKind::Warning, "");
        assert!(!result.has_errors());

        result.record("❌", "Fail", "boom", StepKind::Error, "");
        result.record("❌", "Fail Again", "boom", StepKind::Error, "");
        assert_eq!(result.error_count(), 2);
        assert!(result.has_errors());
    }

    #[test]
    fn test_kind_css_classes() {
        assert_eq!(StepKind::Info.css_class(), "");
        assert_eq!(StepKind::Warning.css_class(), "warning");
        assert_eq!(StepKind::Error.css_class(), "error");
    }

    #[test]
    fn test_result_serializes() {
        let mut result = RunResult::new();
        result.note("🚀", "Start", "first");
        result.order_id = "ORD-1".to_string();

        let json = serde_json::to_string(&result).unwrap();
        let back: RunResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back.steps.len(), 1);
        assert_eq!(back.order_id, "ORD-1");
        assert_eq!(back.steps[0].kind, StepKind::Info);
    }
}
