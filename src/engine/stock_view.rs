//! State owned by the stock page: what is selected, what was fetched, and
//! which history request is still allowed to land.

use chrono::Local;

use crate::{
    analysis::{TransformedHistory, transform_history},
    domain::{HistoryWindow, InstrumentCatalog, PriceHistory, PriceSample},
    engine::messages::{FetchOutcome, FetchRequest, HistoryQuery},
    utils::ClockFormat,
};

#[cfg(debug_assertions)]
use crate::config::DF;

/// What the user did on the stock page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StockViewAction {
    SelectInstrument(String),
    SelectWindow(HistoryWindow),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewPhase {
    NoInstrumentSelected,
    Loading,
    Loaded,
}

#[derive(Debug, Default)]
pub struct StockView {
    catalog: InstrumentCatalog,
    selected: Option<String>,
    window: HistoryWindow,
    history: PriceHistory,
    transformed: TransformedHistory,
    loading: bool,
    clock: ClockFormat,
    /// Sequence number handed to the next history request.
    next_seq: u64,
    /// Only the outcome carrying this sequence number is applied.
    current_seq: Option<u64>,
}

impl StockView {
    pub fn new(window: HistoryWindow, clock: ClockFormat) -> Self {
        Self {
            window,
            clock,
            ..Default::default()
        }
    }

    /// Request issued once when the page is first shown.
    pub fn mount(&self) -> FetchRequest {
        FetchRequest::Catalog
    }

    pub fn handle(&mut self, action: StockViewAction) -> Option<FetchRequest> {
        match action {
            StockViewAction::SelectInstrument(ticker) => self.select_instrument(ticker),
            StockViewAction::SelectWindow(window) => self.select_window(window),
        }
    }

    fn select_instrument(&mut self, ticker: String) -> Option<FetchRequest> {
        if !self.catalog.contains_ticker(&ticker) {
            log::warn!("Ignoring selection of unknown ticker {}", ticker);
            return None;
        }
        #[cfg(debug_assertions)]
        if DF.log_selection {
            log::info!("SELECTION: instrument -> {}", ticker);
        }
        self.selected = Some(ticker);
        self.issue_history()
    }

    fn select_window(&mut self, window: HistoryWindow) -> Option<FetchRequest> {
        #[cfg(debug_assertions)]
        if DF.log_selection {
            log::info!("SELECTION: window -> {} min", window);
        }
        if !window.is_menu_entry() {
            log::warn!("Window of {} min is not a selector entry; requesting it as-is", window);
        }
        self.window = window;
        self.issue_history()
    }

    /// Enters loading and tags a fresh history request. No-op without a selection.
    fn issue_history(&mut self) -> Option<FetchRequest> {
        let ticker = self.selected.clone()?;
        let seq = self.next_seq;
        self.next_seq += 1;
        self.current_seq = Some(seq);
        self.loading = true;
        Some(FetchRequest::History(HistoryQuery {
            seq,
            ticker,
            window: self.window,
        }))
    }

    pub fn apply(&mut self, outcome: FetchOutcome) {
        match outcome {
            FetchOutcome::Catalog { result, .. } => match result {
                Ok(catalog) => {
                    if !self.catalog.is_empty() {
                        log::warn!("Catalog already loaded; ignoring a second catalog response");
                        return;
                    }
                    #[cfg(debug_assertions)]
                    if DF.log_catalog {
                        log::info!("Catalog loaded with {} instruments: {:?}", catalog.len(), catalog);
                    }
                    self.catalog = catalog;
                }
                Err(e) => log::error!("Error fetching stocks: {:#}", e),
            },
            FetchOutcome::History { query, result, .. } => {
                if self.current_seq != Some(query.seq) {
                    #[cfg(debug_assertions)]
                    if DF.log_stale_discards {
                        log::info!(
                            "Discarding stale history for {} ({} min), seq {} superseded by {:?}",
                            query.ticker,
                            query.window,
                            query.seq,
                            self.current_seq
                        );
                    }
                    return;
                }
                self.current_seq = None;
                self.loading = false;
                match result {
                    Ok(history) => self.replace_history(history),
                    Err(e) => log::error!("Error fetching stock history: {:#}", e),
                }
            }
        }
    }

    pub fn set_clock_format(&mut self, clock: ClockFormat) {
        if self.clock != clock {
            self.clock = clock;
            self.retransform();
        }
    }

    fn replace_history(&mut self, history: PriceHistory) {
        self.history = history;
        self.retransform();
    }

    fn retransform(&mut self) {
        self.transformed = transform_history(Some(self.history.as_slice()), &Local, self.clock);
    }

    pub fn phase(&self) -> ViewPhase {
        match (&self.selected, self.loading) {
            (None, _) => ViewPhase::NoInstrumentSelected,
            (Some(_), true) => ViewPhase::Loading,
            (Some(_), false) => ViewPhase::Loaded,
        }
    }

    pub fn catalog(&self) -> &InstrumentCatalog {
        &self.catalog
    }

    pub fn selected_ticker(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Display name of the selection, falling back to the ticker.
    pub fn selected_name(&self) -> Option<&str> {
        let ticker = self.selected.as_deref()?;
        Some(self.catalog.name_for(ticker).unwrap_or(ticker))
    }

    pub fn window(&self) -> HistoryWindow {
        self.window
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn history(&self) -> &[PriceSample] {
        &self.history
    }

    pub fn transformed(&self) -> &TransformedHistory {
        &self.transformed
    }

    pub fn clock_format(&self) -> ClockFormat {
        self.clock
    }
}
