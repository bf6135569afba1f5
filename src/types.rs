//! Icon data model - authored tables of SVG primitives.

use serde::{Deserialize, Serialize};

/// Element tags that may appear in an icon data table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    Path,
    Circle,
    Rect,
    Line,
    Polyline,
    Polygon,
    Ellipse,
    G,
    Title,
}

impl Tag {
    pub fn as_str(self) -> &'static str {
        match self {
            Tag::Path => "path",
            Tag::Circle => "circle",
            Tag::Rect => "rect",
            Tag::Line => "line",
            Tag::Polyline => "polyline",
            Tag::Polygon => "polygon",
            Tag::Ellipse => "ellipse",
            Tag::G => "g",
            Tag::Title => "title",
        }
    }

    /// Drawable shapes are eligible for stroke/fill normalization.
    /// Container tags pass through unchanged.
    pub fn is_shape(self) -> bool {
        !matches!(self, Tag::G | Tag::Title)
    }
}

/// An authored attribute value - a string or a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    Str(String),
    Num(f64),
}

impl AttrValue {
    /// Attribute-text form. Numbers print the way JavaScript stringifies
    /// them: integral values without a decimal point.
    pub fn to_attr_string(&self) -> String {
        match self {
            AttrValue::Str(s) => s.clone(),
            AttrValue::Num(n) => fmt_num(*n),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        AttrValue::Str(s.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        AttrValue::Str(s)
    }
}

impl From<f64> for AttrValue {
    fn from(n: f64) -> Self {
        AttrValue::Num(n)
    }
}

impl From<i32> for AttrValue {
    fn from(n: i32) -> Self {
        AttrValue::Num(n as f64)
    }
}

/// Format a number for attribute output: integer form for whole values,
/// shortest decimal form otherwise.
pub(crate) fn fmt_num(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

/// One entry of an icon data table: a tag, its authored attributes in
/// authoring order, and any child nodes. Authored once, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IconElement {
    pub tag: Tag,
    #[serde(default)]
    pub attrs: Vec<(String, AttrValue)>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<IconNode>,
}

impl IconElement {
    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.iter().any(|(key, _)| key == name)
    }
}

/// A child of an element: a nested element or literal text content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IconNode {
    Element(IconElement),
    Text(String),
}

/// A complete authored icon: its name, literal defaults and data table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Icon {
    pub name: String,
    #[serde(rename = "viewBox", default = "default_view_box")]
    pub view_box: String,
    #[serde(rename = "defaultSize")]
    pub default_size: f64,
    #[serde(rename = "defaultStrokeWidth")]
    pub default_stroke_width: f64,
    pub elements: Vec<IconElement>,
}

fn default_view_box() -> String {
    "0 0 24 24".to_string()
}

impl Icon {
    /// Load an authored icon table from JSON.
    ///
    /// The only fallible path in the crate: malformed tables are an
    /// authoring-time defect, surfaced here rather than at render.
    pub fn from_json(json: &str) -> Result<Icon, String> {
        serde_json::from_str(json).map_err(|e| format!("invalid icon JSON: {}", e))
    }
}
