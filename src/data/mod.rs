mod client;
mod provider;

pub use {
    client::{CatalogResponse, StockApiClient, parse_catalog, parse_history},
    provider::StockDataProvider,
};
