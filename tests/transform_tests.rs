use chrono::{TimeZone, Utc};
use chrono_tz::Tz;
use price_chart::data_types::{ChartLayout, Sample, Series};
use price_chart::error::EmptySeriesError;
use price_chart::geometry::{Bounds, Point, Size};
use price_chart::scales::ChartScale;
use price_chart::transform::PlotTransform;

const DAY_MS: f64 = 86_400_000.0;

fn series(points: &[(i64, f64)]) -> Series {
    Series::from_samples(
        points
            .iter()
            .map(|&(day, value)| {
                let t = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + chrono::Duration::days(day);
                Sample::new(t, value)
            })
            .collect(),
    )
}

#[test]
fn test_plot_transform() {
    let x_scale = ChartScale::new_linear((0.0, 100.0), (0.0, 200.0));
    let y_scale = ChartScale::new_linear((0.0, 100.0), (200.0, 0.0));
    let bounds = Bounds::new(Point::new(10.0, 20.0), Size::new(200.0, 200.0));
    let transform = PlotTransform::new(x_scale, y_scale, bounds);

    let origin = transform.data_to_screen(0.0, 0.0);
    assert_eq!(origin, Point::new(10.0, 220.0));

    let center = transform.data_to_screen(50.0, 50.0);
    assert_eq!(center, Point::new(110.0, 120.0));

    let (x, y) = transform.screen_to_data(Point::new(110.0, 120.0));
    assert!((x - 50.0).abs() < 1e-9);
    assert!((y - 50.0).abs() < 1e-9);

    assert_eq!(transform.data_to_plot(50.0, 50.0), Point::new(100.0, 100.0));
}

#[test]
fn test_value_domain_is_padded() {
    let s = series(&[(0, 100.0), (15, 110.0), (30, 90.0)]);
    let transform = PlotTransform::from_series(&s, &ChartLayout::default(), Tz::UTC).unwrap();

    let (lo, hi) = transform.y_scale.domain();
    assert!((lo - 88.0).abs() < 1e-9);
    assert!((hi - 112.0).abs() < 1e-9);

    let (t0, t1) = transform.x_scale.domain();
    assert_eq!(t0, s.first().unwrap().time_ms());
    assert_eq!(t1, s.last().unwrap().time_ms());
}

#[test]
fn test_padded_domain_contains_extent() {
    let s = series(&[(0, -3.0), (1, 7.5), (2, 2.0), (3, 7.5)]);
    let transform = PlotTransform::from_series(&s, &ChartLayout::default(), Tz::UTC).unwrap();
    let (lo, hi) = transform.y_scale.domain();
    assert!(lo < -3.0);
    assert!(hi > 7.5);
}

#[test]
fn test_default_plot_area() {
    let layout = ChartLayout::default();
    let bounds = layout.plot_bounds();
    assert_eq!(bounds.origin, Point::new(60.0, 40.0));
    assert_eq!(bounds.size, Size::new(710.0, 310.0));
}

#[test]
fn test_single_sample_sits_in_the_middle() {
    let s = series(&[(0, 42.0)]);
    let transform = PlotTransform::from_series(&s, &ChartLayout::default(), Tz::UTC).unwrap();

    let (t0, t1) = transform.x_scale.domain();
    assert!((t1 - t0 - DAY_MS).abs() < 1e-6);

    let p = transform.data_to_plot(s.samples()[0].time_ms(), 42.0);
    assert!((p.x - 355.0).abs() < 1e-3);
    assert!((p.y - 155.0).abs() < 1e-3);
}

#[test]
fn test_empty_series_has_no_scales() {
    let s = Series::default();
    assert_eq!(
        PlotTransform::from_series(&s, &ChartLayout::default(), Tz::UTC),
        Err(EmptySeriesError)
    );
}
