use serde::{Deserialize, Serialize};
use std::fmt;

/// Asset identifier as understood by the data source (e.g. `bitcoin`).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Asset(pub String);

impl Asset {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn id(&self) -> &str {
        &self.0
    }

    /// Identifier with its first letter upper-cased: `bitcoin` -> `Bitcoin`.
    pub fn display_name(&self) -> String {
        let mut chars = self.0.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeWindow {
    Day,
    Month,
    #[default]
    Year,
}

impl TimeWindow {
    /// Look-back length requested from the data source.
    pub fn days(&self) -> u32 {
        match self {
            Self::Day => 1,
            Self::Month => 30,
            Self::Year => 365,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Day => "Daily",
            Self::Month => "Monthly",
            Self::Year => "Yearly",
        }
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Day => "day",
            Self::Month => "month",
            Self::Year => "year",
        })
    }
}

/// What the hosting page wants drawn.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ViewConfig {
    pub asset: Asset,
    pub window: TimeWindow,
}

impl ViewConfig {
    pub fn new(asset: impl Into<String>, window: TimeWindow) -> Self {
        Self {
            asset: Asset::new(asset),
            window,
        }
    }

    /// `Bitcoin Price - Yearly`
    pub fn title(&self) -> String {
        format!("{} Price - {}", self.asset.display_name(), self.window.label())
    }
}
