//! The native fetch worker runs requests concurrently and reports back over a channel.
#![cfg(not(target_arch = "wasm32"))]

mod common;

use std::{
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
    thread,
    time::{Duration, Instant},
};

use common::FakeStockService;
use stock_tracker::{
    FetchOutcome, FetchWorker, HistoryWindow, StockView, StockViewAction, ViewPhase,
    engine::RepaintHook, utils::ClockFormat,
};

fn wait_for(worker: &FetchWorker, expected: usize) -> Vec<FetchOutcome> {
    let deadline = Instant::now() + Duration::from_secs(5);
    let mut outcomes = Vec::new();
    while outcomes.len() < expected && Instant::now() < deadline {
        outcomes.extend(worker.drain());
        thread::sleep(Duration::from_millis(5));
    }
    outcomes
}

fn counting_repaint() -> (RepaintHook, Arc<AtomicUsize>) {
    let count = Arc::new(AtomicUsize::new(0));
    let hook_count = count.clone();
    let hook: RepaintHook = Arc::new(move || {
        hook_count.fetch_add(1, Ordering::SeqCst);
    });
    (hook, count)
}

#[test]
fn catalog_round_trip_requests_repaint() {
    let service = Arc::new(FakeStockService::with_catalog(&[("Acme", "ACME")]));
    let (repaint, repaints) = counting_repaint();
    let worker = FetchWorker::spawn(service, repaint).unwrap();

    let mut view = StockView::new(HistoryWindow::default(), ClockFormat::TwelveHour);
    worker.dispatch(view.mount());

    let outcomes = wait_for(&worker, 1);
    assert_eq!(outcomes.len(), 1);
    for outcome in outcomes {
        view.apply(outcome);
    }
    assert_eq!(view.catalog().ticker_for("Acme"), Some("ACME"));

    // The hook fires just after the outcome is queued.
    let deadline = Instant::now() + Duration::from_secs(1);
    while repaints.load(Ordering::SeqCst) == 0 && Instant::now() < deadline {
        thread::sleep(Duration::from_millis(5));
    }
    assert_eq!(repaints.load(Ordering::SeqCst), 1);
}

#[test]
fn slow_superseded_request_is_discarded() {
    let service = Arc::new(
        FakeStockService::with_catalog(&[("Acme", "ACME"), ("Globex", "GBX")])
            .prices("ACME", &[1.0, 2.0, 3.0])
            .prices("GBX", &[42.0])
            .delay("ACME", Duration::from_millis(300)),
    );
    let (repaint, _) = counting_repaint();
    let worker = FetchWorker::spawn(service.clone(), repaint).unwrap();

    let mut view = StockView::new(HistoryWindow::default(), ClockFormat::TwentyFourHour);
    worker.dispatch(view.mount());
    for outcome in wait_for(&worker, 1) {
        view.apply(outcome);
    }

    let slow = view.handle(StockViewAction::SelectInstrument("ACME".into())).unwrap();
    worker.dispatch(slow);
    let fast = view.handle(StockViewAction::SelectInstrument("GBX".into())).unwrap();
    worker.dispatch(fast);

    let outcomes = wait_for(&worker, 2);
    assert_eq!(outcomes.len(), 2);

    // The fast request overtakes the slow one.
    match &outcomes[0] {
        FetchOutcome::History { query, .. } => assert_eq!(query.ticker, "GBX"),
        other => panic!("unexpected outcome {:?}", other),
    }

    for outcome in outcomes {
        view.apply(outcome);
    }
    assert_eq!(view.phase(), ViewPhase::Loaded);
    assert_eq!(view.transformed().average, 42.0);
    assert_eq!(service.history_calls(), 2);
}
