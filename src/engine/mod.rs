mod messages;
mod stock_view;
mod worker;

pub use messages::{FetchOutcome, FetchRequest, HistoryQuery};
pub use stock_view::{StockView, StockViewAction, ViewPhase};
pub use worker::{FetchWorker, RepaintHook, execute};
