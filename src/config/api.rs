//! Remote stock service configuration

use crate::domain::HistoryWindow;

pub struct StockApiConfig {
    /// Base address. Catalog lives here, history at `{base}/{ticker}?minutes={N}`
    pub base_url: &'static str,
    /// Query parameter carrying the trailing window length
    pub window_param: &'static str,
    /// Windows offered in the interval selector
    pub window_menu: &'static [HistoryWindow],
    pub default_window: HistoryWindow,
}

pub const STOCK_API: StockApiConfig = StockApiConfig {
    base_url: "http://20.244.56.144/evaluation-service/stocks",
    window_param: "minutes",
    window_menu: &[
        HistoryWindow::from_minutes(5),
        HistoryWindow::from_minutes(15),
        HistoryWindow::from_minutes(30),
        HistoryWindow::from_minutes(60),
    ],
    default_window: HistoryWindow::from_minutes(30),
};
