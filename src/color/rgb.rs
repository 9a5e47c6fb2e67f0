use std::fmt;
use std::str::FromStr;

use crate::foundation::error::LoaderError;

/// Opaque 8-bit RGB color.
///
/// Formats (and serializes) as the CSS functional form `rgb(r,g,b)`, which is what ring
/// surfaces consume. Parses `rgb(r,g,b)`, `#rrggbb` and `#rgb`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb8 {
    type Err = LoaderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(hex);
        }
        if let Some(body) = s.strip_prefix("rgb(").and_then(|rest| rest.strip_suffix(')')) {
            let parts = body
                .split(',')
                .map(|p| p.trim().parse::<u8>())
                .collect::<Result<Vec<_>, _>>()
                .map_err(|e| LoaderError::validation(format!("invalid rgb() channel in '{s}': {e}")))?;
            return match parts.as_slice() {
                [r, g, b] => Ok(Self::new(*r, *g, *b)),
                _ => Err(LoaderError::validation(format!(
                    "rgb() expects 3 channels, got {} in '{s}'",
                    parts.len()
                ))),
            };
        }
        Err(LoaderError::validation(format!(
            "unsupported color '{s}' (expected #rrggbb, #rgb or rgb(r,g,b))"
        )))
    }
}

fn parse_hex(hex: &str) -> Result<Rgb8, LoaderError> {
    let invalid = || LoaderError::validation(format!("invalid hex color '#{hex}'"));
    let nibble = |c: u8| -> Result<u8, LoaderError> {
        (c as char).to_digit(16).map(|d| d as u8).ok_or_else(invalid)
    };

    let bytes = hex.as_bytes();
    match bytes.len() {
        3 => {
            let r = nibble(bytes[0])?;
            let g = nibble(bytes[1])?;
            let b = nibble(bytes[2])?;
            Ok(Rgb8::new(r * 17, g * 17, b * 17))
        }
        6 => {
            let byte = |i: usize| -> Result<u8, LoaderError> {
                Ok(nibble(bytes[i])? << 4 | nibble(bytes[i + 1])?)
            };
            Ok(Rgb8::new(byte(0)?, byte(2)?, byte(4)?))
        }
        _ => Err(invalid()),
    }
}

impl serde::Serialize for Rgb8 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for Rgb8 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/color/rgb.rs"]
mod tests;
