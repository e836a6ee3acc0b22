use clap::{Parser, Subcommand};
use std::error::Error;
use std::path::PathBuf;

use checkout_relay::consumer::{self, CONSUMER_REPORT_PREFIX};
use checkout_relay::report::{self, RunResult, StepKind};
use checkout_relay::storefront::{self, RunOptions};
use checkout_relay::workspace::Workspace;

/// Checkout Relay - storefront checkout rehearsal harness
#[derive(Parser, Debug)]
#[command(
    name = "checkout-relay",
    about = "Storefront checkout rehearsal with step logging, HTML reports and CSV order handoff",
    after_help = "ENVIRONMENT VARIABLES:\n\
        CHECKOUT_RELAY_BASE_URL         Storefront base URL\n\
        CHECKOUT_RELAY_FULFILLMENT_URL  Fulfillment console URL\n\
        CHECKOUT_RELAY_SHOPPER_EMAIL    Storefront login email\n\
        CHECKOUT_RELAY_SHOPPER_PASSWORD Storefront login password\n\
        CHECKOUT_RELAY_RESULTS_DIR      Root directory for run artifacts\n\
        CHECKOUT_RELAY_DRIVER_PATH      WebDriver executable path or name\n\
        CHECKOUT_RELAY_TIMEOUT          Element/page wait timeout (seconds)\n\
        CHECKOUT_RELAY_STAGE_DELAY      Delay between stages (ms)"
)]
struct Args {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Rehearse the storefront checkout flow against the scripted session
    Run {
        /// Path to write the order handoff CSV (default: <results-dir>/orders.csv)
        #[arg(long)]
        csv_out: Option<PathBuf>,

        /// Path or name of the WebDriver executable a live integration would launch
        #[arg(long, env = "CHECKOUT_RELAY_DRIVER_PATH")]
        driver_path: Option<String>,

        /// Storefront base URL
        #[arg(long, env = "CHECKOUT_RELAY_BASE_URL")]
        base_url: Option<String>,

        /// Root directory for screenshots, reports and the default CSV
        #[arg(short, long, env = "CHECKOUT_RELAY_RESULTS_DIR")]
        results_dir: Option<PathBuf>,

        /// Output the full run result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Consume order rows from a handoff CSV written by `run`
    Consume {
        /// Path to the handoff CSV
        #[arg(short, long)]
        input: PathBuf,

        /// Root directory for the consumer report
        #[arg(short, long, env = "CHECKOUT_RELAY_RESULTS_DIR")]
        results_dir: Option<PathBuf>,

        /// Output the full consumer result as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    match args.command {
        Some(Commands::Run {
            csv_out,
            driver_path,
            base_url,
            results_dir,
            json,
        }) => {
            let workspace = match results_dir {
                Some(dir) => Workspace::new(dir),
                None => Workspace::from_config(),
            };
            workspace.init()?;

            let mut opts = RunOptions::from_config(workspace);
            if let Some(path) = csv_out {
                opts.csv_out = path;
            }
            if let Some(path) = driver_path {
                opts.driver_path = path;
            }
            if let Some(url) = base_url {
                opts.base_url = url;
            }

            let mut driver = storefront::scripted_session();
            let result = storefront::run(&mut driver, &opts);

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            }
        }

        Some(Commands::Consume {
            input,
            results_dir,
            json,
        }) => {
            let workspace = match results_dir {
                Some(dir) => Workspace::new(dir),
                None => Workspace::from_config(),
            };
            workspace.init()?;

            let mut result = RunResult::new();
            let outcome = consumer::consume(&input, &mut result);
            if let Err(err) = &outcome {
                result.record("❌", "Consumer Failed", &err.to_string(), StepKind::Error, "");
            }

            let html = report::render(&result);
            report::persist(&html, &workspace.reports_dir(), CONSUMER_REPORT_PREFIX);

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            }
            outcome?;
        }

        None => {
            println!("Checkout Relay - storefront checkout rehearsal harness");
            println!();
            println!("Usage: checkout-relay <COMMAND>");
            println!();
            println!("Commands:");
            println!("  run      Rehearse the storefront checkout flow and write the handoff CSV");
            println!("  consume  Read order rows back from a handoff CSV");
            println!();
            println!("Run with --help for more information.");
        }
    }

    Ok(())
}
