use price_chart::data_types::{market_chart_url, parse_market_chart, COINGECKO_API};
use price_chart::normalize::normalize;
use price_chart::{FetchError, PriceSource, RawSample, StaticSource, TimeWindow, ViewConfig};

#[test]
fn test_market_chart_url() {
    let view = ViewConfig::new("bitcoin", TimeWindow::Month);
    assert_eq!(
        market_chart_url(COINGECKO_API, &view),
        "https://api.coingecko.com/api/v3/coins/bitcoin/market_chart?vs_currency=usd&days=30&interval=daily"
    );
    let day = ViewConfig::new("ethereum", TimeWindow::Day);
    assert_eq!(
        market_chart_url("http://localhost:8080/", &day),
        "http://localhost:8080/coins/ethereum/market_chart?vs_currency=usd&days=1&interval=daily"
    );
}

#[test]
fn test_parse_market_chart() {
    let body = r#"{
        "prices": [[1704067200000, 42280.23], [1704153600000, 44187.14], [1704240000000, null]],
        "market_caps": [[1704067200000, 828000000000]],
        "total_volumes": []
    }"#;
    let raw = parse_market_chart(body).unwrap();
    assert_eq!(raw.len(), 3);
    assert_eq!(raw[0], RawSample::epoch_ms(1_704_067_200_000.0, 42_280.23));

    let out = normalize(raw);
    assert_eq!(out.series.len(), 2);
    assert_eq!(out.rejected.len(), 1);
}

#[test]
fn test_parse_market_chart_rejects_garbage() {
    assert!(matches!(
        parse_market_chart(r#"{"error": "coin not found"}"#),
        Err(FetchError::Malformed(_))
    ));
    assert!(matches!(parse_market_chart("<html>"), Err(FetchError::Malformed(_))));
}

#[test]
fn test_static_source() {
    let source = StaticSource::new();
    assert!(source.is_empty());

    let view = ViewConfig::new("bitcoin", TimeWindow::Year);
    source.insert(view.clone(), vec![RawSample::epoch_ms(0.0, 1.0)]);
    assert_eq!(source.len(), 1);
    assert_eq!(source.fetch(&view).unwrap().len(), 1);

    let other = ViewConfig::new("bitcoin", TimeWindow::Day);
    let err = source.fetch(&other).unwrap_err();
    assert_eq!(err.to_string(), "no data for bitcoin (day)");
}

#[test]
fn test_view_titles() {
    assert_eq!(ViewConfig::new("bitcoin", TimeWindow::Year).title(), "Bitcoin Price - Yearly");
    assert_eq!(ViewConfig::new("ethereum", TimeWindow::Day).title(), "Ethereum Price - Daily");
    assert_eq!(TimeWindow::default(), TimeWindow::Year);

    let view: ViewConfig = serde_json::from_str(r#"{"asset": "solana", "window": "month"}"#).unwrap();
    assert_eq!(view, ViewConfig::new("solana", TimeWindow::Month));
}

#[test]
fn test_closures_are_sources() {
    let source = |view: &ViewConfig| -> Result<Vec<RawSample>, FetchError> {
        Err(eyre::eyre!("offline while fetching {}", view.asset).into())
    };
    let err = source.fetch(&ViewConfig::new("bitcoin", TimeWindow::Day)).unwrap_err();
    assert!(matches!(err, FetchError::Source(_)));
    assert_eq!(err.to_string(), "fetch failed: offline while fetching bitcoin");
}
