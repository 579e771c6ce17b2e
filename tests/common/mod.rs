//! Shared fake stock service for integration tests.
#![allow(dead_code)]

use std::{collections::HashMap, sync::Mutex, time::Duration};

use anyhow::{Result, bail};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

use stock_tracker::{HistoryWindow, InstrumentCatalog, PriceSample, StockDataProvider};

#[derive(Default)]
pub struct FakeStockService {
    /// `None` makes the catalog read fail.
    pub catalog: Option<InstrumentCatalog>,
    /// Prices keyed by ticker; any window returns the same series.
    pub prices: HashMap<String, Vec<f64>>,
    /// Tickers whose history read fails.
    pub failing: Vec<String>,
    /// Artificial latency per ticker.
    pub delays: HashMap<String, Duration>,
    /// Every read, as `catalog` or `{ticker}?minutes={N}`.
    pub calls: Mutex<Vec<String>>,
}

impl FakeStockService {
    pub fn with_catalog(entries: &[(&str, &str)]) -> Self {
        Self {
            catalog: Some(InstrumentCatalog::from_entries(entries.iter().copied())),
            ..Default::default()
        }
    }

    pub fn prices(mut self, ticker: &str, prices: &[f64]) -> Self {
        self.prices.insert(ticker.to_string(), prices.to_vec());
        self
    }

    pub fn failing(mut self, ticker: &str) -> Self {
        self.failing.push(ticker.to_string());
        self
    }

    pub fn delay(mut self, ticker: &str, delay: Duration) -> Self {
        self.delays.insert(ticker.to_string(), delay);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn history_calls(&self) -> usize {
        self.calls().iter().filter(|c| *c != "catalog").count()
    }
}

pub fn samples(prices: &[f64]) -> Vec<PriceSample> {
    let t0: DateTime<Utc> = "2025-05-08T04:11:42Z".parse().unwrap();
    prices
        .iter()
        .enumerate()
        .map(|(i, &p)| PriceSample::new(t0 + chrono::Duration::seconds(30 * i as i64), p))
        .collect()
}

#[async_trait]
impl StockDataProvider for FakeStockService {
    async fn fetch_catalog(&self) -> Result<InstrumentCatalog> {
        self.calls.lock().unwrap().push("catalog".to_string());
        match &self.catalog {
            Some(catalog) => Ok(catalog.clone()),
            None => bail!("catalog service unavailable"),
        }
    }

    async fn fetch_history(&self, ticker: &str, window: HistoryWindow) -> Result<Vec<PriceSample>> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("{}?minutes={}", ticker, window.minutes()));

        if let Some(delay) = self.delays.get(ticker) {
            tokio::time::sleep(*delay).await;
        }
        if self.failing.iter().any(|t| t == ticker) {
            bail!("history service returned 503 for {}", ticker);
        }
        Ok(samples(self.prices.get(ticker).map(Vec::as_slice).unwrap_or_default()))
    }
}
