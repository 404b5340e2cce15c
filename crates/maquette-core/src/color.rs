//! Color handling for maquette styles
//!
//! This module provides the [`Color`] type, which validates CSS color strings
//! through the color crate while keeping the original text so that workspace
//! files round-trip byte-for-byte.

use std::{fmt, str::FromStr};

use color::DynamicColor;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

/// A validated CSS color, stored in its original textual form.
///
/// # Examples
///
/// ```
/// use maquette_core::color::Color;
///
/// let blue = Color::new("#1168bd").unwrap();
/// assert_eq!(blue.as_str(), "#1168bd");
///
/// let named = Color::new("white").unwrap();
/// assert!(Color::new("not a color").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Color {
    value: String,
}

impl Color {
    /// Create a new `Color` from a string.
    /// This accepts CSS color strings such as "#ff0000", "rgb(255, 0, 0)", "red", etc.
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(_) => Ok(Self {
                value: color_str.to_string(),
            }),
            Err(err) => Err(format!("invalid color `{color_str}`: {err}")),
        }
    }

    /// Returns the color exactly as it was written.
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.value)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Self::new(&value).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_hex_and_named_colors() {
        assert!(Color::new("#08427b").is_ok());
        assert!(Color::new("#fff").is_ok());
        assert!(Color::new("white").is_ok());
        assert!(Color::new("rgb(17, 104, 189)").is_ok());
    }

    #[test]
    fn rejects_invalid_colors() {
        assert!(Color::new("").is_err());
        assert!(Color::new("#12345g").is_err());
        assert!(Color::new("definitely not a color").is_err());
    }

    #[test]
    fn preserves_the_original_text() {
        let color = Color::new("#1168BD").unwrap();
        assert_eq!(color.as_str(), "#1168BD");
        assert_eq!(color.to_string(), "#1168BD");
    }

    #[test]
    fn deserialization_validates() {
        let color: Color = serde_json::from_str("\"#ffffff\"").unwrap();
        assert_eq!(color.as_str(), "#ffffff");

        let result: Result<Color, _> = serde_json::from_str("\"nonsense!\"");
        assert!(result.is_err());
    }
}
