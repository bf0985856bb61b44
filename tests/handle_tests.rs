use price_chart::geometry::Point;
use price_chart::{
    ChartConfig, ChartError, ChartHandle, FetchError, FetchOutcome, PointerOutcome, PriceSource,
    RawSample, StaticSource, TimeWindow, ViewConfig,
};
use std::sync::{Arc, Barrier};
use std::thread;

const T0: f64 = 1_704_067_200_000.0;
const DAY: f64 = 86_400_000.0;

fn raw(n: usize, base: f64) -> Vec<RawSample> {
    (0..n)
        .map(|i| RawSample::epoch_ms(T0 + DAY * i as f64, base + i as f64))
        .collect()
}

#[test]
fn test_fetch_with_static_source() {
    let bitcoin = ViewConfig::new("bitcoin", TimeWindow::Year);
    let source = Arc::new(StaticSource::new());
    source.insert(bitcoin.clone(), raw(5, 40_000.0));

    let chart = ChartHandle::new(ChartConfig::default(), bitcoin);
    let worker = chart.fetch_with(source).unwrap();
    assert_eq!(worker.join().unwrap(), FetchOutcome::Applied);

    chart.read(|view| {
        assert_eq!(view.series().len(), 5);
        assert_eq!(view.scene().unwrap().path_vertex_count(), 5);
    });
    assert!(chart.to_svg().contains("Bitcoin Price - Yearly"));
}

#[test]
fn test_slow_response_for_old_view_loses() {
    let bitcoin = ViewConfig::new("bitcoin", TimeWindow::Year);
    let ethereum = ViewConfig::new("ethereum", TimeWindow::Day);

    // The bitcoin fetch blocks until the test releases it, after the
    // ethereum fetch has already been delivered.
    let gate = Arc::new(Barrier::new(2));
    let worker_gate = Arc::clone(&gate);
    let source: Arc<dyn PriceSource> = Arc::new(move |view: &ViewConfig| -> Result<Vec<RawSample>, FetchError> {
        if view.asset.id() == "bitcoin" {
            worker_gate.wait();
            Ok(raw(3, 40_000.0))
        } else {
            Ok(raw(7, 2_000.0))
        }
    });

    let chart = ChartHandle::new(ChartConfig::default(), bitcoin);
    let slow = chart.fetch_with(Arc::clone(&source)).unwrap();
    let fast = chart.show(ethereum.clone(), source).unwrap().unwrap();

    assert_eq!(fast.join().unwrap(), FetchOutcome::Applied);
    gate.wait();
    assert_eq!(slow.join().unwrap(), FetchOutcome::Stale);

    assert_eq!(chart.title(), "Ethereum Price - Daily");
    chart.read(|view| {
        assert_eq!(view.view(), &ethereum);
        assert_eq!(view.series().len(), 7);
        assert_eq!(view.series().first().unwrap().value, 2_000.0);
    });
}

#[test]
fn test_show_same_view_does_not_fetch() {
    let bitcoin = ViewConfig::new("bitcoin", TimeWindow::Year);
    let source: Arc<dyn PriceSource> = Arc::new(StaticSource::new());
    let chart = ChartHandle::new(ChartConfig::default(), bitcoin.clone());
    assert!(chart.show(bitcoin, source).unwrap().is_none());
}

#[test]
fn test_failing_source_draws_empty_frame() {
    let chart = ChartHandle::new(ChartConfig::default(), ViewConfig::new("bitcoin", TimeWindow::Month));
    let source = Arc::new(StaticSource::new());
    let outcome = chart.fetch_with(source).unwrap().join().unwrap();
    assert_eq!(outcome, FetchOutcome::Applied);

    chart.read(|view| {
        assert!(view.series().is_empty());
        assert!(matches!(
            view.last_error(),
            Some(ChartError::Fetch(FetchError::NotFound { .. }))
        ));
    });
    assert!(chart.event_surface().is_none());
}

#[test]
fn test_panicking_source_reports_lost_worker() {
    let chart = ChartHandle::new(ChartConfig::default(), ViewConfig::new("bitcoin", TimeWindow::Day));
    let source: Arc<dyn PriceSource> = Arc::new(|_: &ViewConfig| -> Result<Vec<RawSample>, FetchError> {
        panic!("source exploded")
    });
    let outcome = chart.fetch_with(source).unwrap().join().unwrap();
    assert_eq!(outcome, FetchOutcome::Applied);
    chart.read(|view| {
        assert!(matches!(
            view.last_error(),
            Some(ChartError::Fetch(FetchError::WorkerLost))
        ));
    });
}

#[test]
fn test_pointer_events_from_other_threads() {
    let bitcoin = ViewConfig::new("bitcoin", TimeWindow::Year);
    let chart = ChartHandle::new(ChartConfig::default(), bitcoin);
    chart.update(|view| view.set_series(raw(10, 100.0)));
    let surface = chart.event_surface().unwrap();

    let remote = chart.clone();
    let outcome = thread::spawn(move || remote.pointer_move(surface, Point::new(60.0, 100.0)))
        .join()
        .unwrap();
    assert_eq!(outcome, PointerOutcome::Hovering { index: 0 });
    assert_eq!(chart.tooltip().unwrap().price, "$100.00");

    chart.redraw();
    assert_eq!(chart.pointer_leave(surface), PointerOutcome::Stale);
    let current = chart.event_surface().unwrap();
    assert_eq!(chart.pointer_leave(current), PointerOutcome::Idle);
}

#[test]
fn test_deliver_through_handle() {
    let chart = ChartHandle::new(ChartConfig::default(), ViewConfig::new("bitcoin", TimeWindow::Year));
    let ticket = chart.update(|view| view.request_fetch());
    let newer = chart.set_view_config(ViewConfig::new("solana", TimeWindow::Month)).unwrap();
    assert_eq!(chart.deliver(ticket, Ok(raw(3, 1.0))), FetchOutcome::Stale);
    assert_eq!(chart.deliver(newer, Ok(raw(4, 1.0))), FetchOutcome::Applied);
    chart.read(|view| assert_eq!(view.series().len(), 4));
}
