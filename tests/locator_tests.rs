use chrono::DateTime;
use chrono_tz::Tz;
use price_chart::data_types::{ChartLayout, Sample, Series};
use price_chart::locator::{locate, nearest_index};
use price_chart::transform::PlotTransform;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const T0: i64 = 1_704_067_200_000;
const DAY: i64 = 86_400_000;

fn sample(ms: i64, value: f64) -> Sample {
    Sample::new(DateTime::from_timestamp_millis(ms).unwrap(), value)
}

fn three_days_apart() -> (Series, PlotTransform) {
    let series = Series::from_samples(vec![
        sample(T0, 100.0),
        sample(T0 + 10 * DAY, 110.0),
        sample(T0 + 20 * DAY, 90.0),
    ]);
    let transform = PlotTransform::from_series(&series, &ChartLayout::default(), Tz::UTC).unwrap();
    (series, transform)
}

// Lowest |t - target|, first index on ties.
fn brute_force(samples: &[Sample], target: f64) -> usize {
    let mut best = 0;
    for (i, s) in samples.iter().enumerate() {
        if (s.time_ms() - target).abs() < (samples[best].time_ms() - target).abs() {
            best = i;
        }
    }
    best
}

#[test]
fn test_locate_exact_positions() {
    let (series, transform) = three_days_apart();
    assert_eq!(locate(&series, &transform, 0.0).unwrap().index, 0);
    assert_eq!(locate(&series, &transform, 355.0).unwrap().index, 1);
    assert_eq!(locate(&series, &transform, 710.0).unwrap().index, 2);

    let hit = locate(&series, &transform, 350.0).unwrap();
    assert_eq!(hit.sample.value, 110.0);
    assert!((hit.position.x - 355.0).abs() < 1e-3);
}

#[test]
fn test_pointer_outside_the_series_clamps() {
    let (series, transform) = three_days_apart();
    assert_eq!(locate(&series, &transform, -50.0).unwrap().index, 0);
    assert_eq!(locate(&series, &transform, 1_000.0).unwrap().index, 2);
}

#[test]
fn test_equidistant_pointer_picks_earlier_sample() {
    let (series, transform) = three_days_apart();
    assert_eq!(locate(&series, &transform, 177.5).unwrap().index, 0);
    assert_eq!(locate(&series, &transform, 532.5).unwrap().index, 1);

    let samples = series.samples();
    let midpoint = (samples[0].time_ms() + samples[1].time_ms()) / 2.0;
    assert_eq!(nearest_index(samples, midpoint), Some(0));
    assert_eq!(nearest_index(samples, midpoint + 1.0), Some(1));
}

#[test]
fn test_small_series() {
    assert_eq!(nearest_index(&[], 0.0), None);
    let one = [sample(T0, 1.0)];
    assert_eq!(nearest_index(&one, -1e15), Some(0));
    assert_eq!(nearest_index(&one, 1e15), Some(0));

    let empty = Series::default();
    let (_, transform) = three_days_apart();
    assert!(locate(&empty, &transform, 10.0).is_none());
}

#[test]
fn test_nearest_index_matches_brute_force() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..100 {
        let n = rng.random_range(2..200);
        let mut t = T0;
        let samples: Vec<Sample> = (0..n)
            .map(|_| {
                t += rng.random_range(1..5 * DAY);
                sample(t, 0.0)
            })
            .collect();
        let lo = samples[0].time_ms() - DAY as f64;
        let hi = samples[n - 1].time_ms() + DAY as f64;

        for _ in 0..50 {
            let target = rng.random_range(lo..hi);
            assert_eq!(
                nearest_index(&samples, target),
                Some(brute_force(&samples, target)),
                "target {target}"
            );
        }
        // Exact midpoints between neighbours.
        for pair in samples.windows(2) {
            let mid = (pair[0].time_ms() + pair[1].time_ms()) / 2.0;
            assert_eq!(nearest_index(&samples, mid), Some(brute_force(&samples, mid)));
        }
    }
}
