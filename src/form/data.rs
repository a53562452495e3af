//! Typed form-data records.
//!
//! The editor collaborator supplies flat key/value payloads; these structs
//! give them a schema. Every field has a default so a partially-filled form
//! still deserializes, with the same fallbacks the editor's own form
//! descriptors use.

use serde::Deserialize;

use crate::schema::{EventType, StateOperator};

/// Main-axis direction for container layouts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    #[default]
    Column,
    Row,
}

/// Alignment choice along either axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    Center,
    Right,
    Top,
    Bottom,
}

impl Alignment {
    /// The flexbox keyword this alignment maps to, on either axis.
    pub fn flex_value(self) -> &'static str {
        match self {
            Self::Top | Self::Left => "flex-start",
            Self::Center => "center",
            Self::Bottom | Self::Right => "flex-end",
        }
    }
}

/// CSS positioning scheme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Positioning {
    #[default]
    Static,
    Relative,
    Absolute,
    Fixed,
    Sticky,
}

impl Positioning {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Static => "static",
            Self::Relative => "relative",
            Self::Absolute => "absolute",
            Self::Fixed => "fixed",
            Self::Sticky => "sticky",
        }
    }
}

/// Border line style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
    None,
}

impl BorderStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::Dashed => "dashed",
            Self::Dotted => "dotted",
            Self::None => "none",
        }
    }
}

/// How an image fills its box.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectFit {
    #[default]
    Cover,
    Contain,
}

impl ObjectFit {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cover => "cover",
            Self::Contain => "contain",
        }
    }
}

/// Where a link opens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum LinkTarget {
    #[serde(rename = "_self")]
    Current,
    #[default]
    #[serde(rename = "_blank")]
    Blank,
}

impl LinkTarget {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Current => "_self",
            Self::Blank => "_blank",
        }
    }
}

/// Font settings shared by the text-bearing widget forms.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FontFormData {
    pub font_size: f64,
    pub font_family: String,
    pub line_height: f64,
    pub color: String,
    pub font_weight: bool,
}

impl Default for FontFormData {
    fn default() -> Self {
        Self {
            font_size: 12.0,
            font_family: "PingFang SC".into(),
            line_height: 12.0,
            color: "#000".into(),
            font_weight: false,
        }
    }
}

/// Form record for container-family widgets.
///
/// Size fields use `0` for "unset" — the compiler falls back to `initial`
/// for them. Offset fields are raw text and only honored when non-empty and
/// numeric.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContainerFormData {
    pub name: String,
    pub desc: String,
    pub positioning: Positioning,
    pub z_index: f64,
    pub margin: f64,
    pub padding: f64,
    pub width: f64,
    pub max_width: f64,
    pub min_width: f64,
    pub height: f64,
    pub max_height: f64,
    pub min_height: f64,
    pub border_width: f64,
    pub border_style: BorderStyle,
    pub border_color: String,
    pub border_radius: f64,
    pub background_color: String,
    pub layout: Layout,
    pub horizontal_alignment: Alignment,
    pub vertical_alignment: Alignment,
    pub top: String,
    pub right: String,
    pub bottom: String,
    pub left: String,
}

impl Default for ContainerFormData {
    fn default() -> Self {
        Self {
            name: String::new(),
            desc: String::new(),
            positioning: Positioning::Static,
            z_index: 1.0,
            margin: 20.0,
            padding: 20.0,
            width: 0.0,
            max_width: 0.0,
            min_width: 200.0,
            height: 0.0,
            max_height: 0.0,
            min_height: 200.0,
            border_width: 0.0,
            border_style: BorderStyle::Solid,
            border_color: "#fff".into(),
            border_radius: 4.0,
            background_color: "#fff".into(),
            layout: Layout::Column,
            horizontal_alignment: Alignment::Left,
            vertical_alignment: Alignment::Top,
            top: String::new(),
            right: String::new(),
            bottom: String::new(),
            left: String::new(),
        }
    }
}

/// Form record for text widgets.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextFormData {
    pub name: String,
    pub desc: String,
    pub text: String,
    /// Field path into the data source, as picked in the cascade control.
    pub text_data_source: Option<Vec<String>>,
    /// Field path into a named state's output.
    pub text_state: Option<Vec<String>>,
    #[serde(flatten)]
    pub font: FontFormData,
}

/// Form record for link widgets.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LinkFormData {
    pub name: String,
    pub desc: String,
    pub title: String,
    pub title_data_source: Option<Vec<String>>,
    pub url: String,
    pub url_data_source: Option<Vec<String>>,
    pub target: LinkTarget,
    #[serde(flatten)]
    pub font: FontFormData,
}

/// Form record for image widgets.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImageFormData {
    pub name: String,
    pub desc: String,
    pub src: String,
    pub src_data_source: Option<Vec<String>>,
    pub width: f64,
    pub height: f64,
    pub object_fit: ObjectFit,
}

/// Form record for list widgets: a container plus the repeating-item source.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListFormData {
    #[serde(flatten)]
    pub container: ContainerFormData,
    pub list_data_source: Vec<String>,
}

/// Form record for state calculations.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateFormData {
    pub name: String,
    /// Field path into the data source, as picked in the cascade control.
    pub data_source: Vec<String>,
    pub state_operator: StateOperator,
    #[serde(default)]
    pub filter_field: Option<String>,
}

/// Form record for event wiring.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventFormData {
    pub name: String,
    #[serde(default)]
    pub desc: String,
    pub event_type: EventType,
    pub source_widget: String,
    pub target_widget: String,
    #[serde(default)]
    pub state_name: Option<String>,
}
