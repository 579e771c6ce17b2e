#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

// Core modules
pub mod analysis;
pub mod app;
pub mod config;
pub mod data;
pub mod domain;
pub mod engine;
mod ui;
pub mod utils;

// Re-export commonly used types outside of crate (for the binary and integration tests)
pub use analysis::{DisplayPoint, TransformedHistory, transform_history};
pub use app::{App, Route};
pub use config::PERSISTENCE;
pub use data::{StockApiClient, StockDataProvider};
pub use domain::{HistoryWindow, InstrumentCatalog, PriceSample};
pub use engine::{FetchOutcome, FetchRequest, FetchWorker, StockView, StockViewAction, ViewPhase};

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Base address of the stock service (catalog at the base, history at `{base}/{ticker}`)
    #[arg(long)]
    pub api_base: Option<String>,

    /// Label the time axis with a 24-hour clock instead of 12-hour AM/PM
    #[arg(long, default_value_t = false)]
    pub clock_24h: bool,

    /// Initial page route, e.g. `/` or `/heatmap`
    #[arg(long)]
    pub page: Option<String>,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> App {
    App::new(cc, args)
}
