//! RGB colours in `#rrggbb` form.

use serde::{Deserialize, Serialize};

/// Fill for the smallest total on the map.
pub const LOW_FILL: Rgb = Rgb::new(0xec, 0xf0, 0xf1);

/// Fill for the largest total on the map.
pub const HIGH_FILL: Rgb = Rgb::new(0x2e, 0xcc, 0x71);

/// Fill for the region the user clicked.
pub const HIGHLIGHT_FILL: Rgb = Rgb::new(0x34, 0x98, 0xdb);

/// An sRGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Creates a colour from its channels.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl std::str::FromStr for Rgb {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s
            .strip_prefix('#')
            .filter(|h| h.len() == 6 && h.is_ascii())
            .ok_or_else(|| format!("Invalid colour: {s}"))?;
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| format!("Invalid colour: {s}"))
        };
        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl TryFrom<String> for Rgb {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rgb> for String {
    fn from(value: Rgb) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_lowercase_hex() {
        assert_eq!(LOW_FILL.to_string(), "#ecf0f1");
        assert_eq!(HIGH_FILL.to_string(), "#2ecc71");
        assert_eq!(HIGHLIGHT_FILL.to_string(), "#3498db");
    }

    #[test]
    fn test_parse() {
        assert_eq!("#3498DB".parse::<Rgb>().unwrap(), HIGHLIGHT_FILL);
        assert!("3498db".parse::<Rgb>().is_err());
        assert!("#3498d".parse::<Rgb>().is_err());
        assert!("#zz98db".parse::<Rgb>().is_err());
    }

    #[test]
    fn test_serde_as_hex_string() {
        let json = serde_json::to_string(&HIGH_FILL).unwrap();
        assert_eq!(json, "\"#2ecc71\"");
        let back: Rgb = serde_json::from_str(&json).unwrap();
        assert_eq!(back, HIGH_FILL);
    }
}
