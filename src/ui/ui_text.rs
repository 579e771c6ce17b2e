use std::sync::LazyLock;

pub const ICON_CHART: &str = "📈";
pub const ICON_HEATMAP: &str = "🔥";

pub struct UiText {
    // --- NAV ---
    pub nav_stocks: String,
    pub nav_heatmap: String,
    pub nav_clock: &'static str,

    // --- STOCK PAGE ---
    pub sp_title: &'static str,
    pub sp_stock_label: &'static str,
    pub sp_stock_placeholder: &'static str,
    pub sp_stock_empty: &'static str,
    pub sp_interval_label: &'static str,
    pub sp_select_prompt: &'static str,
    pub sp_no_samples: &'static str,

    // --- PLOT LABELS ---
    pub plot_series_price: &'static str,
    pub plot_series_average: &'static str,
    pub plot_x_axis: &'static str,
    pub plot_y_axis: &'static str,

    // --- HEATMAP PAGE ---
    pub hm_title: &'static str,
    pub hm_body: &'static str,
}

pub static UI_TEXT: LazyLock<UiText> = LazyLock::new(|| UiText {
    nav_stocks: format!("{} Stocks", ICON_CHART),
    nav_heatmap: format!("{} Heatmap", ICON_HEATMAP),
    nav_clock: "Clock:",

    sp_title: "Stock Price Tracker",
    sp_stock_label: "Stock",
    sp_stock_placeholder: "Select a stock",
    sp_stock_empty: "No stocks available",
    sp_interval_label: "Time Interval (min)",
    sp_select_prompt: "Pick a stock to chart its recent prices.",
    sp_no_samples: "No price samples in this window.",

    plot_series_price: "Stock Price",
    plot_series_average: "Average",
    plot_x_axis: "Time",
    plot_y_axis: "Price",

    hm_title: "Correlation Heatmap",
    hm_body: "The heatmap page is not wired to a data source in this build.",
});
