//! Abstraction over the UI-automation driver that executes a run.
//!
//! The orchestrator never talks to a browser or GUI scripting engine
//! directly; it drives this trait. Live WebDriver (or SAP GUI) backends
//! implement it out of tree. [`ScriptedDriver`] implements it over a canned
//! in-memory session so the harness itself can be rehearsed and tested
//! without a live target.
//!
//! Interaction helpers return explicit results instead of relying on
//! exception suppression: a helper that can legitimately come up empty
//! returns an `Option`, and the fallback chains compose those outcomes.

use std::collections::HashMap;
use std::fmt;
use std::thread;
use std::time::{Duration, Instant};

use crate::report::{RunResult, StepKind};

/// Result type for driver operations
pub type DriverResult<T> = Result<T, DriverError>;

/// Error types for driver operations
#[derive(Debug)]
pub enum DriverError {
    /// Navigation or page-level failure
    Navigation(String),

    /// An element interaction was rejected
    Interaction(String),

    /// Screenshot capture failed
    Screenshot(String),
}

impl fmt::Display for DriverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DriverError::Navigation(msg) => write!(f, "Navigation error: {}", msg),
            DriverError::Interaction(msg) => write!(f, "Interaction error: {}", msg),
            DriverError::Screenshot(msg) => write!(f, "Screenshot error: {}", msg),
        }
    }
}

impl std::error::Error for DriverError {}

/// Locator for a page element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    Css(String),
    XPath(String),
}

impl Selector {
    pub fn css(value: impl Into<String>) -> Self {
        Selector::Css(value.into())
    }

    pub fn xpath(value: impl Into<String>) -> Self {
        Selector::XPath(value.into())
    }

    /// The raw locator string, without the mode.
    pub fn value(&self) -> &str {
        match self {
            Selector::Css(v) | Selector::XPath(v) => v,
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

/// Ordered set of alternative locators, tried in sequence until one matches.
#[derive(Debug, Clone, Default)]
pub struct SelectorGroup {
    selectors: Vec<Selector>,
}

impl SelectorGroup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn css(mut self, value: impl Into<String>) -> Self {
        self.selectors.push(Selector::css(value));
        self
    }

    pub fn xpath(mut self, value: impl Into<String>) -> Self {
        self.selectors.push(Selector::xpath(value));
        self
    }

    pub fn selectors(&self) -> &[Selector] {
        &self.selectors
    }
}

/// Handle to a located element, valid for the page it was found on.
#[derive(Debug, Clone)]
pub struct Element {
    /// Locator string the element was resolved from
    pub selector: String,
}

/// The three click strategies, tried in order by [`click_with_fallback`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickMethod {
    /// Native element click
    Direct,
    /// Script-invoked click
    Script,
    /// Simulated pointer move-and-click
    Pointer,
}

impl ClickMethod {
    pub const ALL: [ClickMethod; 3] = [ClickMethod::Direct, ClickMethod::Script, ClickMethod::Pointer];

    pub fn label(&self) -> &'static str {
        match self {
            ClickMethod::Direct => "direct method",
            ClickMethod::Script => "JavaScript method",
            ClickMethod::Pointer => "pointer method",
        }
    }
}

/// Trait for UI-automation backends.
///
/// All operations are synchronous and blocking; the orchestrator issues one
/// action at a time.
pub trait Driver {
    fn navigate(&mut self, url: &str) -> DriverResult<()>;

    /// Whether the current document has finished loading.
    fn page_ready(&mut self) -> DriverResult<bool>;

    /// All elements currently matching the selector.
    fn find(&mut self, selector: &Selector) -> DriverResult<Vec<Element>>;

    fn click(&mut self, element: &Element, method: ClickMethod) -> DriverResult<()>;

    fn fill(&mut self, element: &Element, text: &str) -> DriverResult<()>;

    /// Scroll an element into view.
    fn scroll_to(&mut self, element: &Element) -> DriverResult<()>;

    /// Scroll the page to a fixed vertical offset.
    fn scroll_page(&mut self, y: u32) -> DriverResult<()>;

    fn page_title(&mut self) -> DriverResult<String>;

    fn current_url(&mut self) -> DriverResult<String>;

    fn element_text(&mut self, element: &Element) -> DriverResult<String>;

    /// PNG-encoded screenshot of the current page.
    fn screenshot_png(&mut self) -> DriverResult<Vec<u8>>;

    /// Browser name and version, when the backend knows them.
    fn identity(&mut self) -> DriverResult<(String, String)>;

    fn close(&mut self) -> DriverResult<()>;
}

/// Fixed, unconditional delay between stages.
pub fn pause(ms: u64) {
    if ms > 0 {
        thread::sleep(Duration::from_millis(ms));
    }
}

/// Try each selector in order; per-selector faults are swallowed and the
/// first match wins.
pub fn find_first(driver: &mut dyn Driver, group: &SelectorGroup) -> Option<Element> {
    for selector in group.selectors() {
        if let Ok(mut found) = driver.find(selector) {
            if !found.is_empty() {
                return Some(found.remove(0));
            }
        }
    }
    None
}

/// Poll for an element until the timeout elapses.
pub fn wait_for_element(
    driver: &mut dyn Driver,
    group: &SelectorGroup,
    timeout: Duration,
    poll_interval: Duration,
) -> Option<Element> {
    let deadline = Instant::now() + timeout;
    loop {
        if let Some(element) = find_first(driver, group) {
            return Some(element);
        }
        let remaining = deadline.saturating_duration_since(Instant::now());
        if remaining.is_zero() {
            return None;
        }
        thread::sleep(poll_interval.min(remaining));
    }
}

/// Poll for the page-load-complete condition, swallowing backend faults.
pub fn wait_for_page_load(driver: &mut dyn Driver, timeout: Duration, poll_interval: Duration) {
    let deadline = Instant::now() + timeout;
    loop {
        if driver.page_ready().unwrap_or(false) {
            return;
        }
        let remaining = deadline.saturating_duration_since(Instant::now());
        if remaining.is_zero() {
            return;
        }
        thread::sleep(poll_interval.min(remaining));
    }
}

/// Scroll an element into view; a scroll failure never aborts a run.
pub fn scroll_into_view(driver: &mut dyn Driver, element: &Element) {
    let _ = driver.scroll_to(element);
}

/// Native click, then script-invoked click, then simulated pointer click.
///
/// Each success is logged as its own step; only total exhaustion of the
/// chain is escalated, as one error step. Returns whether a click landed.
pub fn click_with_fallback(
    driver: &mut dyn Driver,
    result: &mut RunResult,
    element: &Element,
    success_title: &str,
) -> bool {
    let mut last_error = String::new();
    for method in ClickMethod::ALL {
        match driver.click(element, method) {
            Ok(()) => {
                result.note(
                    "✅",
                    success_title,
                    &format!("Successfully clicked ({})", method.label()),
                );
                return true;
            }
            Err(err) => last_error = err.to_string(),
        }
    }
    result.record(
        "❌",
        "All Click Methods Failed",
        &format!("All click methods failed: {}", last_error),
        StepKind::Error,
        "",
    );
    false
}

// ============================================================================
// Scripted backend
// ============================================================================

/// Behavior of one scripted element.
#[derive(Debug, Clone, Default)]
struct ScriptedElement {
    /// Visible text returned by `element_text`
    text: String,
    /// How many click methods fail before one succeeds (3 = all fail)
    click_failures: u8,
    /// Page transition applied when the element is clicked: (title, url)
    on_click: Option<(String, String)>,
}

/// Deterministic in-memory session for rehearsing the harness without a
/// live target.
///
/// Elements are keyed by their locator string; navigation transitions and
/// per-element click failures are scripted up front, and every interaction
/// is journaled for assertions.
#[derive(Debug, Default)]
pub struct ScriptedDriver {
    elements: HashMap<String, ScriptedElement>,
    pages: HashMap<String, String>,
    title: String,
    url: String,
    browser_name: String,
    browser_version: String,
    actions: Vec<String>,
    closed: bool,
    fail_close: bool,
    fail_screenshot: bool,
}

/// Minimal PNG payload returned by scripted screenshots.
const SCRIPTED_PNG: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

impl ScriptedDriver {
    pub fn new() -> Self {
        Self {
            browser_name: "scripted".to_string(),
            browser_version: "1.0".to_string(),
            ..Default::default()
        }
    }

    /// Register a page title served when navigating to `url`.
    pub fn with_page(mut self, url: &str, title: &str) -> Self {
        self.pages.insert(url.to_string(), title.to_string());
        self
    }

    /// Register an element present on every page of the session.
    pub fn with_element(mut self, selector: &str, text: &str) -> Self {
        self.elements.insert(
            selector.to_string(),
            ScriptedElement {
                text: text.to_string(),
                ..Default::default()
            },
        );
        self
    }

    /// Make clicking `selector` transition the page to (title, url).
    pub fn with_transition(mut self, selector: &str, title: &str, url: &str) -> Self {
        let entry = self.elements.entry(selector.to_string()).or_default();
        entry.on_click = Some((title.to_string(), url.to_string()));
        self
    }

    /// Make the first `failures` click methods on `selector` fail.
    pub fn with_click_failures(mut self, selector: &str, failures: u8) -> Self {
        let entry = self.elements.entry(selector.to_string()).or_default();
        entry.click_failures = failures;
        self
    }

    /// Remove a previously registered element.
    pub fn without_element(mut self, selector: &str) -> Self {
        self.elements.remove(selector);
        self
    }

    pub fn failing_close(mut self) -> Self {
        self.fail_close = true;
        self
    }

    pub fn failing_screenshot(mut self) -> Self {
        self.fail_screenshot = true;
        self
    }

    /// Journal of every interaction performed so far.
    pub fn actions(&self) -> &[String] {
        &self.actions
    }

    fn ensure_open(&self) -> DriverResult<()> {
        if self.closed {
            Err(DriverError::Interaction("session is closed".to_string()))
        } else {
            Ok(())
        }
    }

    fn lookup(&self, element: &Element) -> DriverResult<&ScriptedElement> {
        self.elements.get(&element.selector).ok_or_else(|| {
            DriverError::Interaction(format!("stale element: {}", element.selector))
        })
    }
}

impl Driver for ScriptedDriver {
    fn navigate(&mut self, url: &str) -> DriverResult<()> {
        self.ensure_open()?;
        self.url = url.to_string();
        self.title = self
            .pages
            .get(url)
            .cloned()
            .unwrap_or_else(|| "Scripted Page".to_string());
        self.actions.push(format!("navigate {}", url));
        Ok(())
    }

    fn page_ready(&mut self) -> DriverResult<bool> {
        self.ensure_open()?;
        Ok(true)
    }

    fn find(&mut self, selector: &Selector) -> DriverResult<Vec<Element>> {
        self.ensure_open()?;
        if self.elements.contains_key(selector.value()) {
            Ok(vec![Element {
                selector: selector.value().to_string(),
            }])
        } else {
            Ok(Vec::new())
        }
    }

    fn click(&mut self, element: &Element, method: ClickMethod) -> DriverResult<()> {
        self.ensure_open()?;
        let scripted = self.lookup(element)?;
        let method_index = ClickMethod::ALL
            .iter()
            .position(|m| m == &method)
            .unwrap_or(0) as u8;
        if method_index < scripted.click_failures {
            return Err(DriverError::Interaction(format!(
                "click rejected ({}): {}",
                method.label(),
                element.selector
            )));
        }
        if let Some((title, url)) = scripted.on_click.clone() {
            self.title = title;
            self.url = url;
        }
        self.actions
            .push(format!("click {} ({})", element.selector, method.label()));
        Ok(())
    }

    fn fill(&mut self, element: &Element, text: &str) -> DriverResult<()> {
        self.ensure_open()?;
        self.lookup(element)?;
        self.actions
            .push(format!("fill {} = {}", element.selector, text));
        Ok(())
    }

    fn scroll_to(&mut self, element: &Element) -> DriverResult<()> {
        self.ensure_open()?;
        self.lookup(element)?;
        self.actions.push(format!("scroll-to {}", element.selector));
        Ok(())
    }

    fn scroll_page(&mut self, y: u32) -> DriverResult<()> {
        self.ensure_open()?;
        self.actions.push(format!("scroll-page {}", y));
        Ok(())
    }

    fn page_title(&mut self) -> DriverResult<String> {
        self.ensure_open()?;
        Ok(self.title.clone())
    }

    fn current_url(&mut self) -> DriverResult<String> {
        self.ensure_open()?;
        Ok(self.url.clone())
    }

    fn element_text(&mut self, element: &Element) -> DriverResult<String> {
        self.ensure_open()?;
        Ok(self.lookup(element)?.text.clone())
    }

    fn screenshot_png(&mut self) -> DriverResult<Vec<u8>> {
        self.ensure_open()?;
        if self.fail_screenshot {
            return Err(DriverError::Screenshot("capture unavailable".to_string()));
        }
        self.actions.push("screenshot".to_string());
        Ok(SCRIPTED_PNG.to_vec())
    }

    fn identity(&mut self) -> DriverResult<(String, String)> {
        self.ensure_open()?;
        Ok((self.browser_name.clone(), self.browser_version.clone()))
    }

    fn close(&mut self) -> DriverResult<()> {
        if self.fail_close {
            return Err(DriverError::Interaction(
                "session did not shut down cleanly".to_string(),
            ));
        }
        self.closed = true;
        self.actions.push("close".to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_first_tries_selectors_in_order() {
        let mut driver = ScriptedDriver::new().with_element(".second", "");
        let group = SelectorGroup::new().css(".first").css(".second").css(".third");

        let element = find_first(&mut driver, &group).unwrap();
        assert_eq!(element.selector, ".second");
    }

    #[test]
    fn test_find_first_empty_when_nothing_matches() {
        let mut driver = ScriptedDriver::new();
        let group = SelectorGroup::new().css(".missing").xpath("//nope");
        assert!(find_first(&mut driver, &group).is_none());
    }

    #[test]
    fn test_wait_for_element_times_out() {
        let mut driver = ScriptedDriver::new();
        let group = SelectorGroup::new().css(".missing");

        let start = Instant::now();
        let found = wait_for_element(
            &mut driver,
            &group,
            Duration::from_millis(30),
            Duration::from_millis(5),
        );
        assert!(found.is_none());
        assert!(start.elapsed() >= Duration::from_millis(30));
    }

    #[test]
    fn test_click_fallback_first_method_succeeds() {
        let mut driver = ScriptedDriver::new().with_element("#buy", "");
        let mut result = RunResult::new();
        let element = Element {
            selector: "#buy".to_string(),
        };

        assert!(click_with_fallback(&mut driver, &mut result, &element, "Buy Clicked"));
        assert_eq!(result.steps.len(), 1);
        assert!(result.steps[0].description.contains("direct method"));
    }

    #[test]
    fn test_click_fallback_recovers_on_later_method() {
        let mut driver = ScriptedDriver::new()
            .with_element("#buy", "")
            .with_click_failures("#buy", 2);
        let mut result = RunResult::new();
        let element = Element {
            selector: "#buy".to_string(),
        };

        assert!(click_with_fallback(&mut driver, &mut result, &element, "Buy Clicked"));
        assert!(result.steps[0].description.contains("pointer method"));
        assert!(!result.has_errors());
    }

    #[test]
    fn test_click_fallback_exhaustion_records_error() {
        let mut driver = ScriptedDriver::new()
            .with_element("#buy", "")
            .with_click_failures("#buy", 3);
        let mut result = RunResult::new();
        let element = Element {
            selector: "#buy".to_string(),
        };

        assert!(!click_with_fallback(&mut driver, &mut result, &element, "Buy Clicked"));
        assert_eq!(result.error_count(), 1);
        assert_eq!(result.steps[0].title, "All Click Methods Failed");
    }

    #[test]
    fn test_scripted_transition_on_click() {
        let mut driver = ScriptedDriver::new()
            .with_element("#go", "")
            .with_transition("#go", "Cart", "http://shop/cart");
        let element = Element {
            selector: "#go".to_string(),
        };

        driver.click(&element, ClickMethod::Direct).unwrap();
        assert_eq!(driver.page_title().unwrap(), "Cart");
        assert_eq!(driver.current_url().unwrap(), "http://shop/cart");
    }

    #[test]
    fn test_scripted_driver_rejects_use_after_close() {
        let mut driver = ScriptedDriver::new();
        driver.close().unwrap();
        assert!(driver.navigate("http://shop").is_err());
        assert!(driver.page_title().is_err());
    }

    #[test]
    fn test_scripted_screenshot_failure_injection() {
        let mut driver = ScriptedDriver::new().failing_screenshot();
        assert!(matches!(
            driver.screenshot_png(),
            Err(DriverError::Screenshot(_))
        ));
    }
}
