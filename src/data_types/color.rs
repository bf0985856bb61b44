use eyre::Result;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Straight-alpha RGBA color, every channel in `0.0..=1.0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub fn rgb(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as f32 / 255.0,
            g: ((hex >> 8) & 0xff) as f32 / 255.0,
            b: (hex & 0xff) as f32 / 255.0,
            a: 1.0,
        }
    }

    pub const fn transparent() -> Self {
        Self { r: 0.0, g: 0.0, b: 0.0, a: 0.0 }
    }

    pub fn alpha(self, a: f32) -> Self {
        Self { a: a.clamp(0.0, 1.0), ..self }
    }

    /// `#RRGGBB`, the alpha channel is not included.
    pub fn to_hex(&self) -> String {
        let c = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!("#{:02X}{:02X}{:02X}", c(self.r), c(self.g), c(self.b))
    }
}

// Serde helpers for Rgba <-> hex string (`#RRGGBB` or `#RRGGBBAA`).
pub mod hex_color {
    use super::*;

    pub fn serialize<S>(color: &Rgba, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if color.a >= 1.0 {
            serializer.serialize_str(&color.to_hex())
        } else {
            let a = (color.a.clamp(0.0, 1.0) * 255.0).round() as u8;
            serializer.serialize_str(&format!("{}{:02X}", color.to_hex(), a))
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Rgba, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse_hex_str(&raw).map_err(serde::de::Error::custom)
    }

    pub fn parse_hex_str(hex: &str) -> eyre::Result<Rgba> {
        let digits = hex.trim().trim_start_matches('#');
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            eyre::bail!("invalid hex color {hex:?}");
        }
        let value = match digits.len() {
            6 | 8 => u32::from_str_radix(digits, 16)?,
            _ => eyre::bail!("hex color {hex:?} must have 6 or 8 digits"),
        };
        Ok(if digits.len() == 6 {
            Rgba::rgb(value)
        } else {
            Rgba::rgb(value >> 8).alpha((value & 0xff) as f32 / 255.0)
        })
    }
}

impl Serialize for Rgba {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        hex_color::serialize(self, serializer)
    }
}

impl<'de> Deserialize<'de> for Rgba {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        hex_color::deserialize(deserializer)
    }
}
