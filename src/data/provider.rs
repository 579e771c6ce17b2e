use anyhow::Result;
use async_trait::async_trait;

use crate::domain::{HistoryWindow, InstrumentCatalog, PriceHistory};

/// Abstract interface for reading stock data.
///
/// Browser futures aren't `Send`, so the wasm build relaxes the bound.
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
pub trait StockDataProvider: Send + Sync {
    /// Fetch the name -> ticker catalog.
    async fn fetch_catalog(&self) -> Result<InstrumentCatalog>;

    /// Fetch the trailing `window` of price samples for `ticker`.
    async fn fetch_history(&self, ticker: &str, window: HistoryWindow) -> Result<PriceHistory>;
}
