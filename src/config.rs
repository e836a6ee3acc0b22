//! Configuration management with environment variable support.
//!
//! Centralized configuration for checkout-relay:
//! - Environment variables for all configurable values
//! - Sensible defaults matching the original hardcoded flow
//! - Cached global access via `config::get()`
//!
//! # Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `CHECKOUT_RELAY_BASE_URL` | Storefront base URL | `https://uat.storefront.example.com/en/fashion` |
//! | `CHECKOUT_RELAY_FULFILLMENT_URL` | Fulfillment console URL | `https://fulfillment.example.com/` |
//! | `CHECKOUT_RELAY_SHOPPER_EMAIL` | Storefront login email | `qa.shopper@example.com` |
//! | `CHECKOUT_RELAY_SHOPPER_PASSWORD` | Storefront login password | `change-me` |
//! | `CHECKOUT_RELAY_RESULTS_DIR` | Root directory for run artifacts | `test-results` |
//! | `CHECKOUT_RELAY_CSV_OUT` | Handoff CSV file name inside the results dir | `orders.csv` |
//! | `CHECKOUT_RELAY_DRIVER_PATH` | WebDriver executable path or name | `chromedriver` |
//! | `CHECKOUT_RELAY_TIMEOUT` | Element/page wait timeout (seconds) | `15` |
//! | `CHECKOUT_RELAY_STAGE_DELAY` | Fixed delay between stages (ms) | `2000` |
//! | `CHECKOUT_RELAY_POLL_INTERVAL` | Wait polling interval (ms) | `250` |

use std::env;
use std::sync::OnceLock;

// ============================================================================
// Default Values
// ============================================================================

/// Default storefront base URL
pub const DEFAULT_BASE_URL: &str = "https://uat.storefront.example.com/en/fashion";

/// Default fulfillment console URL
pub const DEFAULT_FULFILLMENT_URL: &str = "https://fulfillment.example.com/";

/// Default storefront login email
pub const DEFAULT_SHOPPER_EMAIL: &str = "qa.shopper@example.com";

/// Default storefront login password
pub const DEFAULT_SHOPPER_PASSWORD: &str = "change-me";

/// Default root directory for run artifacts
pub const DEFAULT_RESULTS_DIR: &str = "test-results";

/// Default handoff CSV file name
pub const DEFAULT_CSV_FILENAME: &str = "orders.csv";

/// Default element/page wait timeout (seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Default fixed delay between stages (milliseconds)
pub const DEFAULT_STAGE_DELAY_MS: u64 = 2000;

/// Default wait polling interval (milliseconds)
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 250;

/// Default WebDriver executable name on the PATH
pub fn default_driver_path() -> &'static str {
    if cfg!(windows) {
        "chromedriver.exe"
    } else {
        "chromedriver"
    }
}

// ============================================================================
// Environment Variable Names
// ============================================================================

/// Environment variable for the storefront base URL
pub const ENV_BASE_URL: &str = "CHECKOUT_RELAY_BASE_URL";

/// Environment variable for the fulfillment console URL
pub const ENV_FULFILLMENT_URL: &str = "CHECKOUT_RELAY_FULFILLMENT_URL";

/// Environment variable for the storefront login email
pub const ENV_SHOPPER_EMAIL: &str = "CHECKOUT_RELAY_SHOPPER_EMAIL";

/// Environment variable for the storefront login password
pub const ENV_SHOPPER_PASSWORD: &str = "CHECKOUT_RELAY_SHOPPER_PASSWORD";

/// Environment variable for the results directory
pub const ENV_RESULTS_DIR: &str = "CHECKOUT_RELAY_RESULTS_DIR";

/// Environment variable for the handoff CSV file name
pub const ENV_CSV_OUT: &str = "CHECKOUT_RELAY_CSV_OUT";

/// Environment variable for the WebDriver executable
pub const ENV_DRIVER_PATH: &str = "CHECKOUT_RELAY_DRIVER_PATH";

/// Environment variable for the wait timeout (seconds)
pub const ENV_TIMEOUT: &str = "CHECKOUT_RELAY_TIMEOUT";

/// Environment variable for the inter-stage delay (ms)
pub const ENV_STAGE_DELAY: &str = "CHECKOUT_RELAY_STAGE_DELAY";

/// Environment variable for the wait polling interval (ms)
pub const ENV_POLL_INTERVAL: &str = "CHECKOUT_RELAY_POLL_INTERVAL";

// ============================================================================
// Configuration Getters (with caching)
// ============================================================================

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Get the global configuration (initialized from environment on first access)
pub fn get() -> &'static Config {
    CONFIG.get_or_init(Config::from_env)
}

/// Centralized configuration for checkout-relay
#[derive(Debug, Clone)]
pub struct Config {
    /// Storefront endpoints and credentials
    pub storefront: StorefrontSettings,
    /// Wait and delay tuning
    pub timing: TimingSettings,
    /// Output locations
    pub paths: PathSettings,
}

/// Storefront endpoints and credentials
#[derive(Debug, Clone)]
pub struct StorefrontSettings {
    pub base_url: String,
    pub fulfillment_url: String,
    pub shopper_email: String,
    pub shopper_password: String,
}

/// Wait and delay tuning
#[derive(Debug, Clone)]
pub struct TimingSettings {
    /// Element/page wait timeout (seconds)
    pub timeout_secs: u64,
    /// Fixed delay between stages (milliseconds)
    pub stage_delay_ms: u64,
    /// Wait polling interval (milliseconds)
    pub poll_interval_ms: u64,
}

/// Output locations
#[derive(Debug, Clone)]
pub struct PathSettings {
    pub results_dir: String,
    pub csv_filename: String,
    pub driver_path: String,
}

impl Config {
    /// Create configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        Self {
            storefront: StorefrontSettings::from_env(),
            timing: TimingSettings::from_env(),
            paths: PathSettings::from_env(),
        }
    }

    /// Create configuration with all defaults (ignoring environment)
    pub fn defaults() -> Self {
        Self {
            storefront: StorefrontSettings::defaults(),
            timing: TimingSettings::defaults(),
            paths: PathSettings::defaults(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

impl StorefrontSettings {
    pub fn from_env() -> Self {
        Self {
            base_url: env::var(ENV_BASE_URL).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            fulfillment_url: env::var(ENV_FULFILLMENT_URL)
                .unwrap_or_else(|_| DEFAULT_FULFILLMENT_URL.to_string()),
            shopper_email: env::var(ENV_SHOPPER_EMAIL)
                .unwrap_or_else(|_| DEFAULT_SHOPPER_EMAIL.to_string()),
            shopper_password: env::var(ENV_SHOPPER_PASSWORD)
                .unwrap_or_else(|_| DEFAULT_SHOPPER_PASSWORD.to_string()),
        }
    }

    pub fn defaults() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            fulfillment_url: DEFAULT_FULFILLMENT_URL.to_string(),
            shopper_email: DEFAULT_SHOPPER_EMAIL.to_string(),
            shopper_password: DEFAULT_SHOPPER_PASSWORD.to_string(),
        }
    }
}

impl TimingSettings {
    pub fn from_env() -> Self {
        Self {
            timeout_secs: parse_env(ENV_TIMEOUT, DEFAULT_TIMEOUT_SECS),
            stage_delay_ms: parse_env(ENV_STAGE_DELAY, DEFAULT_STAGE_DELAY_MS),
            poll_interval_ms: parse_env(ENV_POLL_INTERVAL, DEFAULT_POLL_INTERVAL_MS),
        }
    }

    pub fn defaults() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            stage_delay_ms: DEFAULT_STAGE_DELAY_MS,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
        }
    }
}

impl PathSettings {
    pub fn from_env() -> Self {
        Self {
            results_dir: env::var(ENV_RESULTS_DIR)
                .unwrap_or_else(|_| DEFAULT_RESULTS_DIR.to_string()),
            csv_filename: env::var(ENV_CSV_OUT)
                .unwrap_or_else(|_| DEFAULT_CSV_FILENAME.to_string()),
            driver_path: env::var(ENV_DRIVER_PATH)
                .unwrap_or_else(|_| default_driver_path().to_string()),
        }
    }

    pub fn defaults() -> Self {
        Self {
            results_dir: DEFAULT_RESULTS_DIR.to_string(),
            csv_filename: DEFAULT_CSV_FILENAME.to_string(),
            driver_path: default_driver_path().to_string(),
        }
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn parse_env(name: &str, default: u64) -> u64 {
    env::var(name)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}
