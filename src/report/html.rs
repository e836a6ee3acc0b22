//! HTML rendering of a run result.
//!
//! `render` is a pure function from a [`RunResult`] to a self-contained
//! document: inline styles, no external assets except the relative
//! screenshot reference. Pass/fail status and step counts are derived from
//! the steps at render time, never cached on the result.

use chrono::{DateTime, Local};
use std::path::Path;

use crate::report::types::RunResult;

const REPORT_TITLE: &str = "Storefront Automation Report";

const STYLE: &str = "\
body{font-family:Arial,sans-serif;margin:20px;background-color:#f5f5f5;}\n\
.container{max-width:1200px;margin:0 auto;background:white;padding:20px;border-radius:8px;box-shadow:0 2px 10px rgba(0,0,0,0.1);}\n\
.header{text-align:center;color:#333;border-bottom:3px solid #4CAF50;padding-bottom:20px;margin-bottom:30px;}\n\
.test-info{background:#e8f5e8;padding:15px;border-radius:5px;margin:20px 0;}\n\
.step{margin:15px 0;padding:10px;border-left:4px solid #4CAF50;background:#f9f9f9;}\n\
.step.error{border-left-color:#f44336;background:#ffebee;}\n\
.step.warning{border-left-color:#ff9800;background:#fff3e0;}\n\
.timestamp{color:#666;font-size:.9em;}\n\
.screenshot{text-align:center;margin:20px 0;}\n\
.screenshot img{max-width:100%;border:1px solid #ddd;border-radius:5px;}\n\
.summary{background:#e3f2fd;padding:15px;border-radius:5px;margin:20px 0;}\n\
.status-pass{color:#4CAF50;font-weight:bold;}\n\
.status-fail{color:#f44336;font-weight:bold;}\n\
.details{background:#fafafa;padding:10px;border-radius:5px;margin:10px 0;font-family:monospace;white-space:pre-wrap;}\n";

/// Escape the five HTML metacharacters so dynamic strings pulled from the
/// automated site can never produce broken or injected markup.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Render the report with the generation time bound to now.
pub fn render(result: &RunResult) -> String {
    render_at(result, Local::now())
}

/// Render the report for a fixed generation time.
pub fn render_at(result: &RunResult, generated_at: DateTime<Local>) -> String {
    let timestamp = generated_at.format("%Y-%m-%d %H:%M:%S").to_string();

    let failed = result.has_errors();
    let status = if failed {
        "<span class=\"status-fail\">❌ FAILED</span>"
    } else {
        "<span class=\"status-pass\">✅ PASSED</span>"
    };
    let total_steps = result.steps.len();
    let error_steps = result.error_count();
    let ok_steps = total_steps - error_steps;

    let screenshot_rel = base_name(&result.screenshot_path);
    let csv_rel = normalize_path(&result.csv_out_path);

    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{}</title>\n", REPORT_TITLE));
    html.push_str("<style>\n");
    html.push_str(STYLE);
    html.push_str("</style>\n</head>\n<body>\n<div class=\"container\">\n");

    html.push_str(&format!(
        "<div class=\"header\"><h1>🧪 {}</h1><p class=\"timestamp\">Generated on: {}</p></div>\n",
        REPORT_TITLE, timestamp
    ));

    html.push_str("<div class=\"test-info\">\n<h2>📋 Run Summary</h2>\n");
    html.push_str(&format!("<p><strong>Status:</strong> {}</p>\n", status));
    html.push_str(&format!(
        "<p><strong>Execution Time:</strong> {}ms</p>\n",
        result.execution_time_ms
    ));
    html.push_str(&format!(
        "<p><strong>Steps:</strong> {} OK / {} errors (total {})</p>\n",
        ok_steps, error_steps, total_steps
    ));
    html.push_str(&format!(
        "<p><strong>Browser:</strong> {} {}</p>\n",
        escape(&result.browser_name),
        escape(&result.browser_version)
    ));
    html.push_str("</div>\n");

    html.push_str("<div class=\"summary\">\n<h3>📊 Run Results</h3>\n");
    html.push_str(&format!(
        "<p><strong>Page Title:</strong> {}</p>\n",
        escape(&result.page_title)
    ));
    html.push_str(&format!(
        "<p><strong>Final URL:</strong> {}</p>\n",
        escape(&result.final_url)
    ));
    html.push_str(&format!(
        "<p><strong>Screenshot:</strong> {}</p>\n",
        escape(&screenshot_rel)
    ));
    html.push_str(&format!(
        "<p><strong>Order ID:</strong> {}</p>\n",
        escape(&result.order_id)
    ));
    html.push_str(&format!(
        "<p><strong>Product Title:</strong> {}</p>\n",
        escape(&result.product_title)
    ));
    html.push_str(&format!(
        "<p><strong>Product URL:</strong> {}</p>\n",
        escape(&result.product_url)
    ));
    if !csv_rel.is_empty() {
        html.push_str(&format!(
            "<p><strong>CSV Output:</strong> {}</p>\n",
            escape(&csv_rel)
        ));
    }
    html.push_str("</div>\n");

    html.push_str("<h3>📝 Execution Steps</h3>\n");
    for step in &result.steps {
        let cls = step.kind.css_class();
        if cls.is_empty() {
            html.push_str("<div class=\"step\">\n");
        } else {
            html.push_str(&format!("<div class=\"step {}\">\n", cls));
        }
        html.push_str(&format!(
            "<strong>{}</strong>\n",
            escape(&format!("{} {}", step.icon, step.title))
        ));
        html.push_str(&format!("<p>{}</p>\n", escape(&step.description)));
        html.push_str(&format!(
            "<div class=\"timestamp\">{}</div>\n",
            escape(&step.timestamp)
        ));
        if !step.details.is_empty() {
            html.push_str(&format!(
                "<div class=\"details\">{}</div>\n",
                escape(&step.details)
            ));
        }
        html.push_str("</div>\n");
    }

    if !screenshot_rel.is_empty() {
        html.push_str(&format!(
            "<div class=\"screenshot\">\n<h3>📸 Screenshot</h3>\n\
             <img src=\"../screenshots/{}\" alt=\"Run Screenshot\">\n\
             <p>Screenshot saved: {}</p>\n</div>\n",
            escape(&screenshot_rel),
            escape(&screenshot_rel)
        ));
    }

    html.push_str(&format!(
        "<footer style=\"text-align:center;margin-top:30px;color:#666;border-top:1px solid #eee;padding-top:20px;\">\n\
         <p>Generated by checkout-relay | {}</p>\n\
         </footer>\n</div>\n</body>\n</html>",
        timestamp
    ));

    html
}

/// File base name of a path-ish string; empty input stays empty.
fn base_name(path: &str) -> String {
    if path.is_empty() {
        return String::new();
    }
    Path::new(path)
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_default()
}

/// Forward-slash form of a path-ish string for display.
fn normalize_path(path: &str) -> String {
    path.replace('\\', "/")
}
