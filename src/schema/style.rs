//! Style entries: property name, value, unit.
//!
//! A widget's styles are an insertion-ordered map from CSS-like property name
//! to a [`StyleEntry`]. Insertion order is what makes compiled style strings
//! and serialized schemas reproducible, so the map type is an [`IndexMap`].

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Unit suffix appended to a style value when it is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StyleUnit {
    /// Pixels.
    #[serde(rename = "px")]
    Px,
    /// Percentage of the parent dimension.
    #[serde(rename = "%")]
    Percent,
    /// No unit; the value is rendered bare (keywords, colors, counts).
    #[default]
    #[serde(rename = "")]
    None,
}

impl StyleUnit {
    /// The suffix rendered after the value. Empty for [`StyleUnit::None`].
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Px => "px",
            Self::Percent => "%",
            Self::None => "",
        }
    }
}

impl fmt::Display for StyleUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

/// A style value: numeric or textual.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    Number(f64),
    Text(String),
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Whole numbers render without a trailing ".0" so `12` + `px`
            // becomes the CSS literal `12px`.
            Self::Number(n) => {
                if n.fract() == 0.0 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{n}")
                }
            }
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for StyleValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// One structured style descriptor: `{ name, value, unit }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleEntry {
    pub name: String,
    pub value: StyleValue,
    #[serde(default)]
    pub unit: StyleUnit,
}

impl StyleEntry {
    /// A pixel-unit entry.
    pub fn px(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value: StyleValue::Number(value),
            unit: StyleUnit::Px,
        }
    }

    /// A unit-less entry (keywords, colors, bare numbers).
    pub fn plain(name: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            unit: StyleUnit::None,
        }
    }

    /// Render the entry as its concrete style string: value followed by unit.
    pub fn render(&self) -> String {
        format!("{}{}", self.value, self.unit)
    }
}

/// Insertion-ordered map from property name to entry.
pub type StyleMap = IndexMap<String, StyleEntry>;

/// Insert an entry under its own property name.
pub fn put(styles: &mut StyleMap, entry: StyleEntry) {
    styles.insert(entry.name.clone(), entry);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn px_entry_renders_with_suffix() {
        assert_eq!(StyleEntry::px("width", 120.0).render(), "120px");
    }

    #[test]
    fn plain_entry_renders_bare() {
        assert_eq!(StyleEntry::plain("display", "flex").render(), "flex");
        assert_eq!(StyleEntry::plain("font-weight", 600.0).render(), "600");
    }

    #[test]
    fn fractional_values_keep_their_digits() {
        assert_eq!(StyleEntry::px("line-height", 1.5).render(), "1.5px");
    }

    #[test]
    fn put_keys_by_property_name() {
        let mut styles = StyleMap::new();
        put(&mut styles, StyleEntry::px("margin", 20.0));
        put(&mut styles, StyleEntry::plain("color", "#000"));
        assert_eq!(styles.get("margin").unwrap().render(), "20px");
        assert_eq!(styles.get_index(1).unwrap().0, "color");
    }

    #[test]
    fn replacing_an_entry_keeps_its_position() {
        let mut styles = StyleMap::new();
        put(&mut styles, StyleEntry::plain("display", "block"));
        put(&mut styles, StyleEntry::plain("overflow", "auto"));
        put(&mut styles, StyleEntry::plain("display", "flex"));
        assert_eq!(styles.get_index(0).unwrap().1.render(), "flex");
        assert_eq!(styles.len(), 2);
    }

    #[test]
    fn unit_round_trips_through_serde() {
        let entry = StyleEntry::px("width", 10.0);
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"unit\":\"px\""));
        let back: StyleEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);

        let bare = StyleEntry::plain("color", "#fff");
        let json = serde_json::to_string(&bare).unwrap();
        assert!(json.contains("\"unit\":\"\""));

        let percent = StyleEntry {
            name: "width".into(),
            value: StyleValue::Number(50.0),
            unit: StyleUnit::Percent,
        };
        assert_eq!(percent.render(), "50%");
        let json = serde_json::to_string(&percent).unwrap();
        assert!(json.contains("\"unit\":\"%\""));
    }
}
