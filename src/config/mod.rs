//! Configuration module for the stock tracker application.

// Can all be private now because we have a public re-export.
mod api;
mod debug;
mod persistence;

// Can't be private because we don't re-export it
pub mod plot;

// Re-export commonly used items
pub use api::{STOCK_API, StockApiConfig};
pub use debug::DF;
pub use persistence::PERSISTENCE;
pub use plot::PLOT_CONFIG;
