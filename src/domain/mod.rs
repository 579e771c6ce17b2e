// Domain types and value objects
mod catalog;
mod history_window;
mod price_sample;

pub use catalog::InstrumentCatalog;
pub use history_window::HistoryWindow;
pub use price_sample::{PriceHistory, PriceSample};
