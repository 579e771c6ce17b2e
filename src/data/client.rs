//! HTTP implementation of [`StockDataProvider`] backed by `reqwest`.

use {
    anyhow::{Context, Result},
    async_trait::async_trait,
    reqwest::Client,
    serde::Deserialize,
};

use crate::{
    config::STOCK_API,
    data::StockDataProvider,
    domain::{HistoryWindow, InstrumentCatalog, PriceHistory},
};

/// Body of `GET {base}`.
#[derive(Debug, Deserialize)]
pub struct CatalogResponse {
    pub stocks: InstrumentCatalog,
}

#[derive(Debug, Clone)]
pub struct StockApiClient {
    http: Client,
    base_url: String,
}

impl Default for StockApiClient {
    fn default() -> Self {
        Self::new(STOCK_API.base_url)
    }
}

impl StockApiClient {
    /// No timeout is configured: a hung request stays pending.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn catalog_url(&self) -> String {
        self.base_url.clone()
    }

    pub fn history_url(&self, ticker: &str, window: HistoryWindow) -> String {
        format!(
            "{}/{}?{}={}",
            self.base_url,
            ticker,
            STOCK_API.window_param,
            window.minutes()
        )
    }
}

/// A `null` body is an empty history rather than an error.
pub fn parse_history(body: &str) -> Result<PriceHistory> {
    let history: Option<PriceHistory> =
        serde_json::from_str(body).context("malformed price history body")?;
    Ok(history.unwrap_or_default())
}

pub fn parse_catalog(body: &str) -> Result<InstrumentCatalog> {
    let response: CatalogResponse =
        serde_json::from_str(body).context("malformed stock catalog body")?;
    Ok(response.stocks)
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl StockDataProvider for StockApiClient {
    async fn fetch_catalog(&self) -> Result<InstrumentCatalog> {
        let url = self.catalog_url();
        let body = self.get_text(&url).await?;
        let catalog = parse_catalog(&body).with_context(|| format!("GET {}", url))?;

        let dupes = catalog.duplicate_tickers();
        if !dupes.is_empty() {
            log::warn!("Catalog lists tickers under more than one name: {:?}", dupes);
        }
        Ok(catalog)
    }

    async fn fetch_history(&self, ticker: &str, window: HistoryWindow) -> Result<PriceHistory> {
        let url = self.history_url(ticker, window);
        let body = self.get_text(&url).await?;
        parse_history(&body).with_context(|| format!("GET {}", url))
    }
}

impl StockApiClient {
    async fn get_text(&self, url: &str) -> Result<String> {
        self.http
            .get(url)
            .send()
            .await
            .with_context(|| format!("GET {} failed", url))?
            .error_for_status()
            .with_context(|| format!("GET {} returned an error status", url))?
            .text()
            .await
            .with_context(|| format!("GET {} body could not be read", url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_url_for_acme_thirty_minutes() {
        let client = StockApiClient::new("http://example.test/evaluation-service/stocks");
        assert_eq!(
            client.history_url("ACME", HistoryWindow::from_minutes(30)),
            "http://example.test/evaluation-service/stocks/ACME?minutes=30"
        );
    }

    #[test]
    fn off_menu_window_is_passed_through() {
        let client = StockApiClient::new("http://example.test/stocks");
        assert_eq!(
            client.history_url("NVDA", HistoryWindow::from_minutes(7)),
            "http://example.test/stocks/NVDA?minutes=7"
        );
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let client = StockApiClient::new("http://example.test/stocks/");
        assert_eq!(client.base_url(), "http://example.test/stocks");
        assert_eq!(client.catalog_url(), "http://example.test/stocks");
    }

    #[test]
    fn default_client_targets_configured_service() {
        assert_eq!(StockApiClient::default().base_url(), STOCK_API.base_url);
    }

    #[test]
    fn parses_catalog_body() {
        let body = r#"{"stocks": {"Advanced Micro Devices, Inc.": "AMD", "Alphabet Inc. Class A": "GOOGL"}}"#;
        let catalog = parse_catalog(body).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.ticker_for("Advanced Micro Devices, Inc."), Some("AMD"));
    }

    #[test]
    fn catalog_without_stocks_key_is_an_error() {
        assert!(parse_catalog(r#"{"AMD": "AMD"}"#).is_err());
    }

    #[test]
    fn parses_history_body() {
        let body = r#"[
            {"lastUpdatedAt": "2025-05-08T04:11:42.465706306Z", "price": 258.47},
            {"lastUpdatedAt": "2025-05-08T04:12:12.465706306Z", "price": 261.09}
        ]"#;
        let history = parse_history(body).unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[1].price, 261.09);
        assert!(history[0].last_updated_at < history[1].last_updated_at);
    }

    #[test]
    fn null_history_is_empty() {
        assert!(parse_history("null").unwrap().is_empty());
    }

    #[test]
    fn garbage_history_is_an_error() {
        assert!(parse_history("<html>502 Bad Gateway</html>").is_err());
        assert!(parse_history(r#"{"price": 1}"#).is_err());
    }
}
