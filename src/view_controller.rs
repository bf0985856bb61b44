use crate::geometry::{Point, Size};

/// Padding policy and placement rules, kept apart from the scene and the
/// lifecycle so they can be tested in isolation.
pub struct ViewController;

/// Value padding as a fraction of the value range.
pub const VALUE_PADDING_PCT: f64 = 0.1;

/// Half-width of the time domain drawn around a single sample.
pub const SINGLE_SAMPLE_HALF_SPAN_MS: f64 = 12.0 * 3600.0 * 1000.0;

impl ViewController {
    /// Calculates padded bounds around `[min, max]`.
    ///
    /// A flat range is padded by `margin_pct` of the value itself, or by 1.0
    /// when the value is zero, so the domain never collapses.
    pub fn compute_auto_fit(min: f64, max: f64, margin_pct: f64) -> (f64, f64) {
        if min == f64::INFINITY || max == f64::NEG_INFINITY {
            return (0.0, 1.0);
        }

        let span = max - min;
        let pad = if span.abs() < f64::EPSILON {
            if min.abs() > f64::EPSILON {
                min.abs() * margin_pct
            } else {
                1.0
            }
        } else {
            span * margin_pct
        };

        (min - pad, max + pad)
    }

    /// Value-axis domain: 10% symmetric padding.
    pub fn value_domain(min: f64, max: f64) -> (f64, f64) {
        Self::compute_auto_fit(min, max, VALUE_PADDING_PCT)
    }

    /// Time-axis domain: the exact extent, widened around a lone sample so it
    /// sits at the horizontal midpoint.
    pub fn time_domain(min_ms: f64, max_ms: f64) -> (f64, f64) {
        if (max_ms - min_ms).abs() < f64::EPSILON {
            (min_ms - SINGLE_SAMPLE_HALF_SPAN_MS, max_ms + SINGLE_SAMPLE_HALF_SPAN_MS)
        } else {
            (min_ms, max_ms)
        }
    }

    /// Top-left of the tooltip box relative to the marker.
    ///
    /// `marker` is in plot coordinates. The preferred `offset` is mirrored to
    /// the left of the marker when the box would cross the right edge, and the
    /// box is pushed down when it would cross the top edge.
    pub fn place_tooltip(marker: Point, plot: Size, tooltip: Size, offset: Point) -> Point {
        let mut x = offset.x;
        if marker.x + offset.x + tooltip.width > plot.width {
            x = -offset.x - tooltip.width;
        }
        let mut y = offset.y;
        if marker.y + offset.y < 0.0 {
            y = -marker.y;
        }
        Point::new(x, y)
    }
}
