mod heatmap_page;
mod price_chart;
mod stock_page;
mod ui_config;
mod ui_text;

pub(crate) use heatmap_page::render_heatmap_page;
pub(crate) use price_chart::PriceChart;
pub(crate) use stock_page::render_stock_page;
pub(crate) use ui_config::{UI_CONFIG, UI_TEXT};
