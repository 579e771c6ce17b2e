use std::sync::{
    Arc,
    mpsc::{self, Receiver, Sender},
};

#[cfg(not(target_arch = "wasm32"))]
use {anyhow::Context, std::thread, tokio::runtime::Runtime};

use super::messages::{FetchOutcome, FetchRequest};

use crate::{
    data::StockDataProvider,
    utils::{AppInstant, elapsed_ms},
};

#[cfg(debug_assertions)]
use crate::config::DF;

/// Called after every outcome is queued so the UI wakes up to drain it.
pub type RepaintHook = Arc<dyn Fn() + Send + Sync>;

/// Performs one read against the provider. Never fails: errors travel inside the outcome.
pub async fn execute(provider: &dyn StockDataProvider, request: FetchRequest) -> FetchOutcome {
    let start = AppInstant::now();
    match request {
        FetchRequest::Catalog => {
            let result = provider.fetch_catalog().await;
            FetchOutcome::Catalog {
                duration_ms: elapsed_ms(start),
                result,
            }
        }
        FetchRequest::History(query) => {
            let result = provider.fetch_history(&query.ticker, query.window).await;
            FetchOutcome::History {
                query,
                duration_ms: elapsed_ms(start),
                result,
            }
        }
    }
}

/// Runs fetches off the UI thread and hands outcomes back over a channel.
///
/// Every request runs independently, so completions can arrive in any order.
pub struct FetchWorker {
    #[cfg(not(target_arch = "wasm32"))]
    request_tx: Sender<FetchRequest>,
    #[cfg(target_arch = "wasm32")]
    provider: Arc<dyn StockDataProvider>,
    #[cfg(target_arch = "wasm32")]
    outcome_tx: Sender<FetchOutcome>,
    #[cfg(target_arch = "wasm32")]
    repaint: RepaintHook,
    outcome_rx: Receiver<FetchOutcome>,
}

impl FetchWorker {
    /// NATIVE: one background thread owning a tokio runtime; each request becomes a task.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn spawn(
        provider: Arc<dyn StockDataProvider>,
        repaint: RepaintHook,
    ) -> anyhow::Result<Self> {
        let (request_tx, request_rx) = mpsc::channel::<FetchRequest>();
        let (outcome_tx, outcome_rx) = mpsc::channel();
        let rt = Runtime::new().context("Failed to create fetch runtime")?;

        thread::Builder::new()
            .name("fetch-worker".into())
            .spawn(move || {
                while let Ok(request) = request_rx.recv() {
                    let provider = provider.clone();
                    let outcome_tx = outcome_tx.clone();
                    let repaint = repaint.clone();
                    rt.spawn(async move {
                        let outcome = execute(provider.as_ref(), request).await;
                        log_completion(&outcome);
                        if outcome_tx.send(outcome).is_ok() {
                            repaint();
                        }
                    });
                }
            })
            .context("Failed to spawn fetch worker thread")?;

        Ok(Self {
            request_tx,
            outcome_rx,
        })
    }

    /// WASM: no threads; each request is a local future on the browser event loop.
    #[cfg(target_arch = "wasm32")]
    pub fn spawn(
        provider: Arc<dyn StockDataProvider>,
        repaint: RepaintHook,
    ) -> anyhow::Result<Self> {
        let (outcome_tx, outcome_rx) = mpsc::channel();
        Ok(Self {
            provider,
            outcome_tx,
            repaint,
            outcome_rx,
        })
    }

    pub fn dispatch(&self, request: FetchRequest) {
        #[cfg(debug_assertions)]
        if DF.log_fetches {
            log::info!("FETCH dispatched: {:?}", request);
        }

        #[cfg(not(target_arch = "wasm32"))]
        if self.request_tx.send(request).is_err() {
            log::error!("Fetch worker has shut down; request dropped");
        }

        #[cfg(target_arch = "wasm32")]
        {
            let provider = self.provider.clone();
            let outcome_tx = self.outcome_tx.clone();
            let repaint = self.repaint.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let outcome = execute(provider.as_ref(), request).await;
                log_completion(&outcome);
                if outcome_tx.send(outcome).is_ok() {
                    repaint();
                }
            });
        }
    }

    /// Everything that completed since the last call, in completion order.
    pub fn drain(&self) -> Vec<FetchOutcome> {
        self.outcome_rx.try_iter().collect()
    }
}

fn log_completion(_outcome: &FetchOutcome) {
    #[cfg(debug_assertions)]
    if DF.log_fetches {
        match _outcome {
            FetchOutcome::Catalog {
                duration_ms,
                result,
            } => log::info!(
                "FETCH catalog finished in {}ms (ok: {})",
                duration_ms,
                result.is_ok()
            ),
            FetchOutcome::History {
                query,
                duration_ms,
                result,
            } => log::info!(
                "FETCH history {} / {} min (seq {}) finished in {}ms (ok: {})",
                query.ticker,
                query.window,
                query.seq,
                duration_ms,
                result.is_ok()
            ),
        }
    }
}
