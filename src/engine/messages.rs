use anyhow::Result;

use crate::domain::{HistoryWindow, InstrumentCatalog, PriceHistory};

/// A read the stock view wants performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchRequest {
    Catalog,
    History(HistoryQuery),
}

/// One history read, tagged with the sequence number it was issued under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryQuery {
    pub seq: u64,
    pub ticker: String,
    pub window: HistoryWindow,
}

/// The result returned by the worker
#[derive(Debug)]
pub enum FetchOutcome {
    Catalog {
        duration_ms: u128,
        result: Result<InstrumentCatalog>,
    },
    History {
        query: HistoryQuery,
        duration_ms: u128,
        result: Result<PriceHistory>,
    },
}
