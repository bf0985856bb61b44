use chrono_tz::Tz;
use price_chart::data_types::{hex_color, Rgba};
use price_chart::ChartConfig;
use std::io::Write;

#[test]
fn test_defaults() {
    let config = ChartConfig::default();
    assert_eq!(config.layout.width, 800.0);
    assert_eq!(config.layout.height, 400.0);
    assert_eq!(config.layout.margin.left, 60.0);
    assert_eq!(config.value_ticks, 10);
    assert_eq!(config.timezone, Tz::UTC);
    assert_eq!(config.time_ticks(), 7);
    assert_eq!(config.line.color, Rgba::rgb(0xEAB308));
}

#[test]
fn test_partial_json_keeps_defaults() {
    let config = ChartConfig::from_json_str(
        r##"{
            "layout": { "width": 1200 },
            "line": { "color": "#3B82F6" },
            "timezone": "Europe/Paris",
            "value_ticks": 6
        }"##,
    )
    .unwrap();
    assert_eq!(config.layout.width, 1200.0);
    assert_eq!(config.layout.height, 400.0);
    assert_eq!(config.line.color, Rgba::rgb(0x3B82F6));
    assert_eq!(config.line.line_width, 2.0);
    assert_eq!(config.timezone, Tz::Europe__Paris);
    assert_eq!(config.value_ticks, 6);
    assert_eq!(config.theme, ChartConfig::default().theme);
}

#[test]
fn test_time_ticks_follow_width() {
    let mut config = ChartConfig::default();
    config.layout.width = 300.0;
    assert_eq!(config.time_ticks(), 2);
    config.layout.width = 5_000.0;
    assert_eq!(config.time_ticks(), 12);
}

#[test]
fn test_invalid_json_is_reported() {
    let err = ChartConfig::from_json_str(r#"{ "timezone": "Mars/Olympus" }"#).unwrap_err();
    assert!(format!("{err:#}").contains("invalid chart configuration"));

    let err = ChartConfig::from_json_str(r##"{ "line": { "color": "#12" } }"##).unwrap_err();
    assert!(format!("{err:#}").contains("6 or 8 digits"));
}

#[test]
fn test_round_trip_through_file() {
    let mut config = ChartConfig::default();
    config.y_caption = "Price (EUR)".into();
    config.theme.tooltip_background = Rgba::rgb(0x111827).alpha(0.5);

    let path = std::env::temp_dir().join(format!("price_chart_config_{}.json", std::process::id()));
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(serde_json::to_string_pretty(&config).unwrap().as_bytes())
        .unwrap();
    drop(file);

    let loaded = ChartConfig::from_path(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(loaded.y_caption, "Price (EUR)");
    assert_eq!(loaded.theme.tooltip_background.to_hex(), "#111827");
    assert!((loaded.theme.tooltip_background.a - 128.0 / 255.0).abs() < 1e-6);
}

#[test]
fn test_missing_file_has_context() {
    let err = ChartConfig::from_path("/definitely/not/here.json").unwrap_err();
    assert!(err.to_string().contains("reading chart configuration"));
}

#[test]
fn test_hex_colors() {
    let c = hex_color::parse_hex_str("#EAB308").unwrap();
    assert_eq!(c, Rgba::rgb(0xEAB308));
    assert_eq!(c.to_hex(), "#EAB308");

    let translucent = hex_color::parse_hex_str("ffffffb3").unwrap();
    assert!((translucent.a - 0.7).abs() < 0.01);

    assert!(hex_color::parse_hex_str("#GGGGGG").is_err());
    assert_eq!(
        serde_json::to_string(&Rgba::rgb(0x000000).alpha(0.0)).unwrap(),
        "\"#00000000\""
    );
}
