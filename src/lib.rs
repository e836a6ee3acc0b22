//! Checkout Relay - storefront checkout rehearsal with step reporting.
//!
//! This crate provides:
//! - An execution log of timestamped steps with live console echo
//! - A pure HTML report renderer plus crash-safe report persistence
//! - A CSV handoff contract between the checkout run and downstream consumers
//! - A driver seam for UI-automation backends, with a scripted session for rehearsal
//! - Orchestrators for the storefront run and the CSV consumer
//!
//! # Example
//!
//! ```rust,no_run
//! use checkout_relay::storefront::{self, RunOptions};
//! use checkout_relay::workspace::Workspace;
//!
//! let workspace = Workspace::new("test-results");
//! workspace.init().unwrap();
//! let opts = RunOptions::from_config(workspace);
//! let mut driver = storefront::scripted_session();
//! let result = storefront::run(&mut driver, &opts);
//! assert!(!result.steps.is_empty());
//! ```

pub mod config;
pub mod consumer;
pub mod driver;
pub mod handoff;
pub mod report;
pub mod storefront;
pub mod workspace;

// Re-export report types
pub use report::{RunResult, Step, StepKind, persist, render};

// Re-export the driver seam
pub use driver::{
    ClickMethod, Driver, DriverError, DriverResult, Element, ScriptedDriver, Selector,
    SelectorGroup, click_with_fallback, find_first, wait_for_element,
};

// Re-export the handoff contract
pub use handoff::{HANDOFF_HEADERS, HandoffError, OrderRecord, RowReader, append_row, read_rows};

// Re-export orchestration entry points
pub use consumer::consume;
pub use storefront::{RunOptions, run, scripted_session};

// Re-export workspace management
pub use workspace::Workspace;
