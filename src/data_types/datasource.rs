use super::series::RawSample;
use super::view::ViewConfig;
use crate::error::FetchError;
use parking_lot::RwLock;
use serde::Deserialize;
use std::collections::HashMap;

/// Collaborator that retrieves a raw price series for a view.
///
/// Implementations may block; [`crate::ChartHandle::fetch_with`] runs them
/// off the UI thread.
pub trait PriceSource: Send + Sync {
    fn fetch(&self, view: &ViewConfig) -> Result<Vec<RawSample>, FetchError>;
}

impl<F> PriceSource for F
where
    F: Fn(&ViewConfig) -> Result<Vec<RawSample>, FetchError> + Send + Sync,
{
    fn fetch(&self, view: &ViewConfig) -> Result<Vec<RawSample>, FetchError> {
        self(view)
    }
}

/// In-memory source keyed by view. Unknown views fail with `NotFound`.
#[derive(Default)]
pub struct StaticSource {
    data: RwLock<HashMap<ViewConfig, Vec<RawSample>>>,
}

impl StaticSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the samples served for `view`.
    pub fn insert(&self, view: ViewConfig, samples: Vec<RawSample>) {
        self.data.write().insert(view, samples);
    }

    pub fn len(&self) -> usize {
        self.data.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PriceSource for StaticSource {
    fn fetch(&self, view: &ViewConfig) -> Result<Vec<RawSample>, FetchError> {
        self.data
            .read()
            .get(view)
            .cloned()
            .ok_or_else(|| FetchError::NotFound {
                asset: view.asset.to_string(),
                window: view.window.to_string(),
            })
    }
}

pub const COINGECKO_API: &str = "https://api.coingecko.com/api/v3";

/// `GET` URL of the CoinGecko market chart for a view, daily resolution in USD.
pub fn market_chart_url(base: &str, view: &ViewConfig) -> String {
    format!(
        "{}/coins/{}/market_chart?vs_currency=usd&days={}&interval=daily",
        base.trim_end_matches('/'),
        view.asset.id(),
        view.window.days()
    )
}

#[derive(Deserialize)]
struct MarketChart {
    prices: Vec<RawSample>,
}

/// Parses a market chart body: `{"prices": [[epoch_ms, price], ...], ...}`.
/// Other top-level fields (volumes, caps) are ignored.
pub fn parse_market_chart(body: &str) -> Result<Vec<RawSample>, FetchError> {
    let chart: MarketChart = serde_json::from_str(body)?;
    Ok(chart.prices)
}
