#![cfg(feature = "gpui")]

use gpui::{point, px, Modifiers, TestAppContext};
use price_chart::gpui_backend::PriceChartView;
use price_chart::{
    ChartConfig, ChartHandle, FetchError, HoverState, PriceSource, RawSample, Role, StaticSource,
    TimeWindow, ViewConfig,
};
use std::sync::Arc;

const T0: f64 = 1_704_067_200_000.0;
const DAY: f64 = 86_400_000.0;

fn raw(values: &[f64]) -> Vec<RawSample> {
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| RawSample::epoch_ms(T0 + 10.0 * DAY * i as f64, v))
        .collect()
}

fn bitcoin_chart() -> ChartHandle {
    let chart = ChartHandle::new(ChartConfig::default(), ViewConfig::new("bitcoin", TimeWindow::Year));
    chart.update(|view| view.set_series(raw(&[100.0, 110.0, 90.0])));
    chart
}

#[gpui::test]
fn test_mouse_hover_drives_tooltip(cx: &mut TestAppContext) {
    let chart = bitcoin_chart();
    let (_view, cx) = cx.add_window_view(|_window, _cx| PriceChartView::new(chart.clone()));
    cx.run_until_parked();

    // Plot area starts at (60, 40); the middle sample sits at x = 415.
    cx.simulate_mouse_move(point(px(410.0), px(120.0)), None, Modifiers::default());
    assert_eq!(chart.read(|c| c.hover_state()), HoverState::Hovering { index: 1 });
    assert_eq!(chart.tooltip().unwrap().price, "$110.00");

    cx.simulate_mouse_move(point(px(75.0), px(120.0)), None, Modifiers::default());
    assert_eq!(chart.read(|c| c.hover_state()), HoverState::Hovering { index: 0 });

    // Outside the 800x400 element.
    cx.simulate_mouse_move(point(px(1200.0), px(900.0)), None, Modifiers::default());
    assert_eq!(chart.read(|c| c.hover_state()), HoverState::Idle);
    assert!(chart.tooltip().is_none());
}

#[gpui::test]
fn test_view_change_fetches_and_redraws(cx: &mut TestAppContext) {
    let ethereum = ViewConfig::new("ethereum", TimeWindow::Month);
    let source = Arc::new(StaticSource::new());
    source.insert(ethereum.clone(), raw(&[2_000.0, 2_100.0, 2_050.0, 2_300.0]));

    let chart = bitcoin_chart();
    let (view, cx) = cx.add_window_view(|_window, _cx| PriceChartView::new(chart.clone()));
    view.update(cx, |view, cx| view.show(ethereum, source, cx));
    cx.run_until_parked();

    chart.read(|c| {
        assert_eq!(c.series().len(), 4);
        assert!(c.pending_fetch().is_none());
        assert_eq!(c.scene().unwrap().text(Role::Title), Some("Ethereum Price - Monthly"));
    });

    // The redrawn chart is immediately hoverable.
    cx.simulate_mouse_move(point(px(765.0), px(200.0)), None, Modifiers::default());
    assert_eq!(chart.read(|c| c.hover_state()), HoverState::Hovering { index: 3 });
}

#[gpui::test]
fn test_failed_refresh_shows_error_frame(cx: &mut TestAppContext) {
    let source: Arc<dyn PriceSource> = Arc::new(|_: &ViewConfig| -> Result<Vec<RawSample>, FetchError> {
        Err(FetchError::WorkerLost)
    });

    let chart = bitcoin_chart();
    let (view, cx) = cx.add_window_view(|_window, _cx| PriceChartView::new(chart.clone()));
    view.update(cx, |view, cx| view.refresh(source, cx));
    cx.run_until_parked();

    chart.read(|c| {
        assert!(c.series().is_empty());
        assert!(c.event_surface().is_none());
    });
}
