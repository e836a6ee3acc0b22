//! Storefront checkout orchestration.
//!
//! Drives a [`Driver`] through the fixed storefront flow: navigate, login,
//! browse, product search, add-to-cart, checkout, payment and fulfillment
//! handoff. Every stage transition is recorded as at least one step, and a
//! single top-level failure boundary in [`run`] guarantees the run always
//! reaches the screenshot, cleanup, CSV-write and report-persist stages on
//! both exit paths.

use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use chrono::Utc;

use crate::config;
use crate::driver::{
    ClickMethod, Driver, DriverError, Element, ScriptedDriver, Selector, SelectorGroup,
    click_with_fallback, find_first, pause, scroll_into_view, wait_for_element,
    wait_for_page_load,
};
use crate::handoff::{self, OrderRecord};
use crate::report::{self, RunResult, StepKind};
use crate::workspace::Workspace;

/// Prefix for run reports and success screenshots
pub const RUN_PREFIX: &str = "checkout-run";

/// Prefix for screenshots captured after a failure
pub const ERROR_SCREENSHOT_PREFIX: &str = "checkout-error";

// Card data accepted by the payment sandbox.
const SANDBOX_CARD_NUMBER: &str = "4111111111111111";
const SANDBOX_CARD_EXPIRY: &str = "12/28";
const SANDBOX_CARD_CVV: &str = "100";
const SANDBOX_CARD_HOLDER: &str = "Test User";
const SANDBOX_CARD_EMAIL: &str = "test.user@example.com";

/// Locators for the storefront and fulfillment screens, named by role.
pub mod sel {
    pub const LOGIN_ENTRY: &str = "//div[contains(text(),'Log in | Sign up')]";
    pub const LOGIN_EMAIL: &str = "input[type='email']";
    pub const LOGIN_PASSWORD: &str = "input[type='password']";
    pub const LOGIN_SUBMIT: &str = "//button[contains(text(),'Log in')]";

    pub const CATEGORY_LINK: &str = "//span[contains(text(),'Footwear')]";

    pub const PRODUCT_CARD: &str = ".plp-card";
    pub const PRODUCT_FALLBACKS_CSS: [&str; 12] = [
        ".product-item",
        ".product-card",
        ".product-tile",
        ".product",
        "[data-testid*='product']",
        "[data-testid*='item']",
        ".item",
        "article",
        "a[href*='/product']",
        "a[href*='/item']",
        ".grid-item",
        ".listing-item",
    ];
    pub const PRODUCT_FALLBACKS_XPATH: [&str; 4] = [
        "//a[contains(@href, '/product')]",
        "//div[contains(@class, 'product')]",
        "//article",
        "//a[contains(@class, 'product')]",
    ];

    pub const SIZE_OPTION: &str = "(//button[contains(@class,'size-variant')])[1]";
    pub const ADD_TO_CART: &str = "//button[contains(text(),'Add to cart')]";

    pub const GO_TO_CART: &str = "//button[contains(text(),'Go to Cart')]";
    pub const CHECKOUT: &str = "//button[contains(text(),'Checkout')]";
    pub const HOME_DELIVERY: &str = "//div[contains(text(),'Home delivery')]";
    pub const DELIVERY_CONTINUE: &str = "//button[contains(text(),'Continue')]";

    pub const MORE_PAYMENT_OPTIONS: &str = "[name='more-payment-options']";
    pub const CONTINUE_TO_PAYMENT: &str = "//button[contains(text(),'Continue to payment')]";
    pub const CARD_NUMBER: &str = "[name='cardNumber']";
    pub const CARD_EXPIRY: &str = "[name='expyear']";
    pub const CARD_CVV: &str = "[name='cvv']";
    pub const CARD_HOLDER: &str = "[name='name']";
    pub const CARD_EMAIL: &str = "[name='email']";
    pub const CONTINUE_PAYMENT: &str = "//button[contains(text(),'Continue payment')]";
    pub const OTP_FIELD: &str = "[name='challengeDataEntry']";
    pub const OTP_SUBMIT: &str = "//button[contains(text(),'Submit')]";
    pub const VIEW_ORDER_DETAILS: &str = "//button[contains(text(),'View order details')]";
    pub const ORDER_ID: &str = "(//span[contains(@class,'order-number')])[1]";

    pub const FULFILLMENT_SEARCH: &str = "input[name='order-search']";
    pub const FULFILLMENT_ORDER_ROW: &str = "//tr[contains(@id,'gridview')]";
    pub const FULFILLMENT_SHIPMENTS_TAB: &str = "//li[contains(text(),'Shipments')]";
    pub const FULFILLMENT_COMPLETE: &str = "//button[contains(text(),'Complete Shipment')]";
}

/// Options for one storefront run, defaulted from [`config`].
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub base_url: String,
    pub fulfillment_url: String,
    pub shopper_email: String,
    pub shopper_password: String,
    /// WebDriver executable a live integration would launch
    pub driver_path: String,
    /// Destination of the CSV handoff row
    pub csv_out: PathBuf,
    pub workspace: Workspace,
    pub report_prefix: String,
    /// Bound on element and page-load waits
    pub timeout: Duration,
    /// Fixed delay between stages (milliseconds)
    pub stage_delay_ms: u64,
    pub poll_interval: Duration,
}

impl RunOptions {
    /// Build options for a workspace from the global configuration.
    pub fn from_config(workspace: Workspace) -> Self {
        let cfg = config::get();
        Self {
            base_url: cfg.storefront.base_url.clone(),
            fulfillment_url: cfg.storefront.fulfillment_url.clone(),
            shopper_email: cfg.storefront.shopper_email.clone(),
            shopper_password: cfg.storefront.shopper_password.clone(),
            driver_path: cfg.paths.driver_path.clone(),
            csv_out: workspace.default_csv_path(),
            workspace,
            report_prefix: RUN_PREFIX.to_string(),
            timeout: Duration::from_secs(cfg.timing.timeout_secs),
            stage_delay_ms: cfg.timing.stage_delay_ms,
            poll_interval: Duration::from_millis(cfg.timing.poll_interval_ms),
        }
    }
}

/// A stage-level fault carried to the top-level boundary.
#[derive(Debug)]
pub struct StageError {
    stage: &'static str,
    message: String,
    details: String,
}

impl StageError {
    fn new(stage: &'static str, message: impl Into<String>) -> Self {
        let message = message.into();
        let details = format!("stage: {}\n{}", stage, message);
        Self {
            stage,
            message,
            details,
        }
    }

    fn from_driver(stage: &'static str, err: DriverError) -> Self {
        let details = format!("stage: {}\n{:?}", stage, err);
        Self {
            stage,
            message: err.to_string(),
            details,
        }
    }

    pub fn stage(&self) -> &str {
        self.stage
    }

    pub fn details(&self) -> &str {
        &self.details
    }
}

impl fmt::Display for StageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} stage failed: {}", self.stage, self.message)
    }
}

impl std::error::Error for StageError {}

/// Run the full storefront flow behind the top-level failure boundary.
///
/// Never returns early: both exit paths capture a screenshot, close the
/// driver, attempt the CSV handoff, finalize the execution time and persist
/// the HTML report.
pub fn run(driver: &mut dyn Driver, opts: &RunOptions) -> RunResult {
    let started = Instant::now();
    let mut result = RunResult::new();
    result.csv_out_path = opts.csv_out.display().to_string();

    result.note("🚀", "Run Started", "Initializing storefront checkout run");

    let screenshot_prefix = match drive(driver, opts, &mut result) {
        Ok(()) => {
            result.note(
                "🎯",
                "Run Completed",
                "Storefront checkout flow completed successfully",
            );
            RUN_PREFIX
        }
        Err(err) => {
            result.record(
                "❌",
                "Run Failed",
                &err.to_string(),
                StepKind::Error,
                err.details(),
            );
            ERROR_SCREENSHOT_PREFIX
        }
    };

    capture_screenshot(driver, opts, &mut result, screenshot_prefix);
    close_driver(driver, &mut result);
    export_order(opts, &mut result);

    result.execution_time_ms = started.elapsed().as_millis() as u64;
    let timing = format!("Total execution time: {}ms", result.execution_time_ms);
    result.note("⏱️", "Execution Time", &timing);

    let html = report::render(&result);
    report::persist(&html, &opts.workspace.reports_dir(), &opts.report_prefix);

    result
}

/// The staged flow proper; any `Err` is converted into a single error step
/// by the boundary in [`run`].
fn drive(driver: &mut dyn Driver, opts: &RunOptions, result: &mut RunResult) -> Result<(), StageError> {
    setup(driver, opts, result)?;
    navigate(driver, opts, result)?;
    login(driver, opts, result)?;
    browse(driver, opts, result)?;
    let product = locate_product(driver, opts, result)?;
    open_product(driver, opts, result, &product)?;
    add_to_cart(driver, opts, result)?;
    checkout(driver, opts, result)?;
    let order_id = payment(driver, opts, result)?;
    result.order_id = order_id.clone();
    fulfillment_handoff(driver, opts, result, &order_id)?;
    Ok(())
}

// ============================================================================
// Stage helpers
// ============================================================================

fn wait_and_click(
    driver: &mut dyn Driver,
    opts: &RunOptions,
    stage: &'static str,
    group: &SelectorGroup,
    missing: &str,
) -> Result<(), StageError> {
    let element = wait_for_element(driver, group, opts.timeout, opts.poll_interval)
        .ok_or_else(|| StageError::new(stage, missing))?;
    driver
        .click(&element, ClickMethod::Direct)
        .map_err(|e| StageError::from_driver(stage, e))
}

fn wait_and_fill(
    driver: &mut dyn Driver,
    opts: &RunOptions,
    stage: &'static str,
    group: &SelectorGroup,
    missing: &str,
    value: &str,
) -> Result<(), StageError> {
    let element = wait_for_element(driver, group, opts.timeout, opts.poll_interval)
        .ok_or_else(|| StageError::new(stage, missing))?;
    driver
        .fill(&element, value)
        .map_err(|e| StageError::from_driver(stage, e))
}

// ============================================================================
// Stages
// ============================================================================

fn setup(driver: &mut dyn Driver, opts: &RunOptions, result: &mut RunResult) -> Result<(), StageError> {
    let description = format!("Preparing automation driver ({})", opts.driver_path);
    result.note("⚙️", "Driver Setup", &description);
    if let Ok((name, version)) = driver.identity() {
        result.browser_name = name;
        result.browser_version = version;
    }
    result.note("✅", "Driver Ready", "Automation driver session established");
    Ok(())
}

fn navigate(driver: &mut dyn Driver, opts: &RunOptions, result: &mut RunResult) -> Result<(), StageError> {
    result.note("🌐", "Navigation", "Navigating to the storefront homepage");
    driver
        .navigate(&opts.base_url)
        .map_err(|e| StageError::from_driver("navigation", e))?;
    wait_for_page_load(driver, opts.timeout, opts.poll_interval);

    result.page_title = driver.page_title().unwrap_or_default();
    result.final_url = driver.current_url().unwrap_or_default();
    let description = format!("Page title: \"{}\"", result.page_title);
    let details = format!("URL: {}", result.final_url);
    result.record("📄", "Page Loaded", &description, StepKind::Info, &details);
    Ok(())
}

fn login(driver: &mut dyn Driver, opts: &RunOptions, result: &mut RunResult) -> Result<(), StageError> {
    pause(opts.stage_delay_ms);
    result.note("🔑", "Login", "Opening the sign-in dialog");

    let entry = SelectorGroup::new().xpath(sel::LOGIN_ENTRY);
    if let Some(element) = find_first(driver, &entry) {
        driver
            .click(&element, ClickMethod::Direct)
            .map_err(|e| StageError::from_driver("login", e))?;
    }
    pause(opts.stage_delay_ms);

    wait_and_fill(
        driver,
        opts,
        "login",
        &SelectorGroup::new().css(sel::LOGIN_EMAIL),
        "Email field not found",
        &opts.shopper_email,
    )?;
    wait_and_fill(
        driver,
        opts,
        "login",
        &SelectorGroup::new().css(sel::LOGIN_PASSWORD),
        "Password field not found",
        &opts.shopper_password,
    )?;
    wait_and_click(
        driver,
        opts,
        "login",
        &SelectorGroup::new().xpath(sel::LOGIN_SUBMIT),
        "Login button not found",
    )?;
    pause(opts.stage_delay_ms);

    result.note("✅", "Login", "Successfully signed in to the storefront");
    Ok(())
}

fn browse(driver: &mut dyn Driver, opts: &RunOptions, result: &mut RunResult) -> Result<(), StageError> {
    result.note("🧭", "Category Navigation", "Looking for the featured category");
    wait_and_click(
        driver,
        opts,
        "browse",
        &SelectorGroup::new().xpath(sel::CATEGORY_LINK),
        "Category link not found in navigation",
    )?;

    result.note("📜", "Page Scroll", "Scrolling down to find products on the page");
    let _ = driver.scroll_page(800);
    pause(opts.stage_delay_ms);
    Ok(())
}

fn locate_product(
    driver: &mut dyn Driver,
    opts: &RunOptions,
    result: &mut RunResult,
) -> Result<Element, StageError> {
    result.note("🛍️", "Product Search", "Looking for products after scrolling");

    let primary = Selector::css(sel::PRODUCT_CARD);
    if let Ok(found) = driver.find(&primary) {
        if let Some(element) = found.into_iter().next() {
            let description = format!("Found a product using selector: {}", primary);
            result.note("✅", "Product Found", &description);
            return Ok(element);
        }
    }
    result.note(
        "⚠️",
        "Primary Selector Search",
        "No products matched the primary card selector",
    );

    result.note("🔍", "Fallback Search", "Trying fallback product selectors");
    for selector in sel::PRODUCT_FALLBACKS_CSS {
        if let Ok(found) = driver.find(&Selector::css(selector)) {
            if let Some(element) = found.into_iter().next() {
                let description = format!("Found a product using selector: {}", selector);
                result.note("✅", "Product Found", &description);
                return Ok(element);
            }
        }
    }

    result.note("📜", "Further Scroll", "No products found, scrolling down further");
    let _ = driver.scroll_page(1500);
    pause(opts.stage_delay_ms);
    for selector in sel::PRODUCT_FALLBACKS_XPATH {
        if let Ok(found) = driver.find(&Selector::xpath(selector)) {
            if let Some(element) = found.into_iter().next() {
                let description = format!("Found a product using XPath: {}", selector);
                result.note("✅", "Product Found", &description);
                return Ok(element);
            }
        }
    }

    Err(StageError::new(
        "product-search",
        "No products found on the current page",
    ))
}

fn open_product(
    driver: &mut dyn Driver,
    opts: &RunOptions,
    result: &mut RunResult,
    product: &Element,
) -> Result<(), StageError> {
    scroll_into_view(driver, product);
    pause(opts.stage_delay_ms);

    if !click_with_fallback(driver, result, product, "Product Selected") {
        return Err(StageError::new(
            "product-selection",
            "Could not select a product after multiple attempts",
        ));
    }
    pause(opts.stage_delay_ms);

    result.product_title = driver.page_title().unwrap_or_default();
    result.product_url = driver.current_url().unwrap_or_default();
    let description = format!("Navigated to product page: \"{}\"", result.product_title);
    let details = format!("URL: {}", result.product_url);
    result.record("📦", "Product Page", &description, StepKind::Info, &details);
    Ok(())
}

fn add_to_cart(driver: &mut dyn Driver, opts: &RunOptions, result: &mut RunResult) -> Result<(), StageError> {
    wait_and_click(
        driver,
        opts,
        "add-to-cart",
        &SelectorGroup::new().xpath(sel::SIZE_OPTION),
        "Size option not found",
    )?;
    result.note("📏", "Size Selected", "Picked the first available size");

    result.note("🛒", "Add to Cart Search", "Looking for the add-to-cart button");
    let _ = driver.scroll_page(250);
    wait_and_click(
        driver,
        opts,
        "add-to-cart",
        &SelectorGroup::new().xpath(sel::ADD_TO_CART),
        "Add-to-cart button not found",
    )?;
    result.note("🛒", "Add to Cart", "Add-to-cart button clicked");
    pause(opts.stage_delay_ms);

    let details = format!("Current URL: {}", driver.current_url().unwrap_or_default());
    result.record(
        "🎉",
        "Add to Cart Success",
        "Product added to the cart",
        StepKind::Info,
        &details,
    );
    Ok(())
}

fn checkout(driver: &mut dyn Driver, opts: &RunOptions, result: &mut RunResult) -> Result<(), StageError> {
    result.note("🛒", "Checkout Flow", "Starting checkout process");
    pause(opts.stage_delay_ms);

    wait_and_click(
        driver,
        opts,
        "checkout",
        &SelectorGroup::new().xpath(sel::GO_TO_CART),
        "Go-to-cart button not found",
    )?;
    let description = format!(
        "Navigated to cart page: \"{}\"",
        driver.page_title().unwrap_or_default()
    );
    let details = format!("URL: {}", driver.current_url().unwrap_or_default());
    result.record("📄", "Cart Page", &description, StepKind::Info, &details);

    wait_and_click(
        driver,
        opts,
        "checkout",
        &SelectorGroup::new().xpath(sel::CHECKOUT),
        "Checkout button not found",
    )?;
    result.note("🛒", "Checkout", "Checkout button clicked");
    pause(opts.stage_delay_ms);

    wait_and_click(
        driver,
        opts,
        "checkout",
        &SelectorGroup::new().xpath(sel::HOME_DELIVERY),
        "Home delivery option not found",
    )?;
    result.note("🚚", "Delivery Option", "Selected home delivery");

    wait_and_click(
        driver,
        opts,
        "checkout",
        &SelectorGroup::new().xpath(sel::DELIVERY_CONTINUE),
        "Continue button not found",
    )?;
    result.note("🛒", "Checkout", "Clicked continue to payment selection");
    Ok(())
}

fn payment(driver: &mut dyn Driver, opts: &RunOptions, result: &mut RunResult) -> Result<String, StageError> {
    result.note("💳", "Payment Flow", "Starting payment process");
    let _ = driver.scroll_page(350);
    pause(opts.stage_delay_ms);

    wait_and_click(
        driver,
        opts,
        "payment",
        &SelectorGroup::new().css(sel::MORE_PAYMENT_OPTIONS),
        "More-payment-options control not found",
    )?;
    result.note("💳", "Payment Flow", "Selected more payment options");

    wait_and_click(
        driver,
        opts,
        "payment",
        &SelectorGroup::new().xpath(sel::CONTINUE_TO_PAYMENT),
        "Continue-to-payment button not found",
    )?;
    pause(opts.stage_delay_ms);

    for (selector, missing, value) in [
        (sel::CARD_NUMBER, "Card number field not found", SANDBOX_CARD_NUMBER),
        (sel::CARD_EXPIRY, "Card expiry field not found", SANDBOX_CARD_EXPIRY),
        (sel::CARD_CVV, "Card CVV field not found", SANDBOX_CARD_CVV),
        (sel::CARD_HOLDER, "Card holder field not found", SANDBOX_CARD_HOLDER),
        (sel::CARD_EMAIL, "Card email field not found", SANDBOX_CARD_EMAIL),
    ] {
        wait_and_fill(
            driver,
            opts,
            "payment",
            &SelectorGroup::new().css(selector),
            missing,
            value,
        )?;
    }
    result.note("💳", "Card Details", "Entered sandbox card details");

    wait_and_click(
        driver,
        opts,
        "payment",
        &SelectorGroup::new().xpath(sel::CONTINUE_PAYMENT),
        "Continue-payment button not found",
    )?;
    pause(opts.stage_delay_ms);

    wait_and_fill(
        driver,
        opts,
        "payment",
        &SelectorGroup::new().css(sel::OTP_FIELD),
        "Challenge code field not found",
        "123456",
    )?;
    wait_and_click(
        driver,
        opts,
        "payment",
        &SelectorGroup::new().xpath(sel::OTP_SUBMIT),
        "Challenge submit button not found",
    )?;
    result.note("🔐", "Payment Challenge", "Submitted the payment challenge code");
    pause(opts.stage_delay_ms);

    wait_and_click(
        driver,
        opts,
        "payment",
        &SelectorGroup::new().xpath(sel::VIEW_ORDER_DETAILS),
        "View-order-details button not found",
    )?;
    pause(opts.stage_delay_ms);

    let order_element = find_first(driver, &SelectorGroup::new().xpath(sel::ORDER_ID))
        .ok_or_else(|| StageError::new("payment", "Order id not found on confirmation page"))?;
    let order_id = driver
        .element_text(&order_element)
        .map_err(|e| StageError::from_driver("payment", e))?;
    let description = format!("Order placed with id {}", order_id);
    result.note("🧾", "Order Confirmed", &description);
    Ok(order_id)
}

fn fulfillment_handoff(
    driver: &mut dyn Driver,
    opts: &RunOptions,
    result: &mut RunResult,
    order_id: &str,
) -> Result<(), StageError> {
    result.note("📦", "Fulfillment Handoff", "Opening the fulfillment console");
    driver
        .navigate(&opts.fulfillment_url)
        .map_err(|e| StageError::from_driver("fulfillment", e))?;
    wait_for_page_load(driver, opts.timeout, opts.poll_interval);

    wait_and_fill(
        driver,
        opts,
        "fulfillment",
        &SelectorGroup::new().css(sel::FULFILLMENT_SEARCH),
        "Order search box not found",
        order_id,
    )?;
    let description = format!("Searching for order {}", order_id);
    result.note("🔎", "Order Search", &description);
    pause(opts.stage_delay_ms);

    for (selector, missing) in [
        (sel::FULFILLMENT_ORDER_ROW, "Order row not found in results"),
        (sel::FULFILLMENT_SHIPMENTS_TAB, "Shipments tab not found"),
        (sel::FULFILLMENT_COMPLETE, "Complete-shipment button not found"),
    ] {
        wait_and_click(
            driver,
            opts,
            "fulfillment",
            &SelectorGroup::new().xpath(selector),
            missing,
        )?;
    }

    result.note("✅", "Shipment Completed", "Fulfillment shipment completed for the order");
    Ok(())
}

// ============================================================================
// Post-boundary stages (run on both exit paths)
// ============================================================================

fn capture_screenshot(driver: &mut dyn Driver, opts: &RunOptions, result: &mut RunResult, prefix: &str) {
    result.note("📸", "Final Screenshot", "Capturing final page screenshot");
    match driver.screenshot_png() {
        Ok(bytes) => {
            let path = opts.workspace.screenshot_path(prefix);
            let written = fs::create_dir_all(opts.workspace.screenshots_dir())
                .and_then(|_| fs::write(&path, &bytes));
            match written {
                Ok(()) => {
                    result.screenshot_path = path.display().to_string();
                    let name = path
                        .file_name()
                        .map(|n| n.to_string_lossy().to_string())
                        .unwrap_or_default();
                    let description = format!("Screenshot saved: {}", name);
                    result.note("✅", "Screenshot Saved", &description);
                }
                Err(err) => {
                    let description = format!("Could not write screenshot: {}", err);
                    result.record("⚠️", "Screenshot Failed", &description, StepKind::Warning, "");
                }
            }
        }
        Err(err) => {
            let description = format!("Could not capture screenshot: {}", err);
            result.record("⚠️", "Screenshot Failed", &description, StepKind::Warning, "");
        }
    }
}

fn close_driver(driver: &mut dyn Driver, result: &mut RunResult) {
    match driver.close() {
        Ok(()) => result.note("🔒", "Cleanup", "Driver session closed"),
        Err(err) => {
            let description = format!("Error closing driver session: {}", err);
            result.record("⚠️", "Cleanup Failed", &description, StepKind::Warning, "");
        }
    }
}

/// CSV-write stage: runs on both exit paths, writes only when an order id
/// was actually captured.
fn export_order(opts: &RunOptions, result: &mut RunResult) {
    if result.order_id.is_empty() {
        result.record(
            "⚠️",
            "CSV Export Skipped",
            "No order id captured, nothing to hand off",
            StepKind::Warning,
            "",
        );
        return;
    }

    let record = OrderRecord {
        order_id: result.order_id.clone(),
        product_title: result.product_title.clone(),
        product_url: result.product_url.clone(),
        generated_at_utc: Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string(),
    };
    match handoff::append_row(&opts.csv_out, &record) {
        Ok(()) => {
            let description = format!("Order row appended to {}", opts.csv_out.display());
            result.note("🧾", "CSV Export", &description);
        }
        Err(err) => {
            let description = format!("Could not write handoff row: {}", err);
            result.record("⚠️", "CSV Export Failed", &description, StepKind::Warning, "");
        }
    }
}

/// Canned storefront session covering the full happy path of [`run`].
pub fn scripted_session() -> ScriptedDriver {
    let cfg = config::get();
    let base_url = cfg.storefront.base_url.trim_end_matches('/').to_string();
    let fulfillment_url = cfg.storefront.fulfillment_url.clone();
    let product_url = format!("{}/product/scripted-trainer", base_url);

    ScriptedDriver::new()
        .with_page(&cfg.storefront.base_url, "Home | Scripted Storefront")
        .with_page(&fulfillment_url, "Fulfillment Console")
        .with_element(sel::LOGIN_ENTRY, "Log in | Sign up")
        .with_element(sel::LOGIN_EMAIL, "")
        .with_element(sel::LOGIN_PASSWORD, "")
        .with_element(sel::LOGIN_SUBMIT, "Log in")
        .with_element(sel::CATEGORY_LINK, "Footwear")
        .with_element(sel::PRODUCT_CARD, "Scripted Trainer")
        .with_transition(
            sel::PRODUCT_CARD,
            "Scripted Trainer | Scripted Storefront",
            &product_url,
        )
        .with_element(sel::SIZE_OPTION, "UK 9")
        .with_element(sel::ADD_TO_CART, "Add to cart")
        .with_element(sel::GO_TO_CART, "Go to Cart")
        .with_transition(
            sel::GO_TO_CART,
            "Cart | Scripted Storefront",
            &format!("{}/cart", base_url),
        )
        .with_element(sel::CHECKOUT, "Checkout")
        .with_transition(
            sel::CHECKOUT,
            "Delivery | Scripted Storefront",
            &format!("{}/checkout/delivery", base_url),
        )
        .with_element(sel::HOME_DELIVERY, "Home delivery")
        .with_element(sel::DELIVERY_CONTINUE, "Continue")
        .with_element(sel::MORE_PAYMENT_OPTIONS, "More payment options")
        .with_element(sel::CONTINUE_TO_PAYMENT, "Continue to payment")
        .with_element(sel::CARD_NUMBER, "")
        .with_element(sel::CARD_EXPIRY, "")
        .with_element(sel::CARD_CVV, "")
        .with_element(sel::CARD_HOLDER, "")
        .with_element(sel::CARD_EMAIL, "")
        .with_element(sel::CONTINUE_PAYMENT, "Continue payment")
        .with_element(sel::OTP_FIELD, "")
        .with_element(sel::OTP_SUBMIT, "Submit")
        .with_element(sel::VIEW_ORDER_DETAILS, "View order details")
        .with_transition(
            sel::VIEW_ORDER_DETAILS,
            "Order Confirmed | Scripted Storefront",
            &format!("{}/order/ORD-31544", base_url),
        )
        .with_element(sel::ORDER_ID, "ORD-31544")
        .with_element(sel::FULFILLMENT_SEARCH, "")
        .with_element(sel::FULFILLMENT_ORDER_ROW, "ORD-31544")
        .with_element(sel::FULFILLMENT_SHIPMENTS_TAB, "Shipments")
        .with_element(sel::FULFILLMENT_COMPLETE, "Complete Shipment")
}
