//! Label Template Model
//!
//! A template describes one physical label (millimeter dimensions) and the
//! set of placeable elements laid out on it. Element geometry is stored in
//! un-zoomed document pixel space; see [`crate::util::mm_to_px`].

use serde::{Deserialize, Serialize};

use crate::util::mm_to_px;

/// Element variant
///
/// Closed set; each variant determines how the renderer interprets
/// [`Element::content`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    #[default]
    Text,
    Barcode,
    Image,
    Price,
    Mrp,
    Sku,
}

/// Font weight
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

/// Font style
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
}

/// Text decoration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TextDecoration {
    #[default]
    None,
    Underline,
}

/// Text alignment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Border line style
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    Solid,
    Dashed,
    Dotted,
    #[default]
    None,
}

/// Element bounding box in document pixel space
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ElementGeometry {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Rotation about the box center, degrees
    #[serde(default)]
    pub rotation_degrees: f64,
}

/// Element visual style
///
/// Fields that have a document-level default (`fontSize`, `color`) are
/// optional here; `None` means "inherit from the document".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ElementStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(default)]
    pub font_weight: FontWeight,
    #[serde(default)]
    pub font_style: FontStyle,
    #[serde(default)]
    pub text_decoration: TextDecoration,
    #[serde(default)]
    pub text_align: TextAlign,
    /// Text color; inherits the document text color when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Box fill; transparent when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default = "default_border_width")]
    pub border_width: f64,
    #[serde(default = "default_border_color")]
    pub border_color: String,
    #[serde(default)]
    pub border_style: BorderStyle,
    /// Opacity in [0, 1]
    #[serde(default = "default_opacity")]
    pub opacity: f64,
    /// Paint order; higher paints on top, ties break by insertion order
    #[serde(default)]
    pub z_index: i64,
}

impl Default for ElementStyle {
    fn default() -> Self {
        Self {
            font_size: None,
            font_weight: FontWeight::default(),
            font_style: FontStyle::default(),
            text_decoration: TextDecoration::default(),
            text_align: TextAlign::default(),
            color: None,
            background_color: None,
            border_width: default_border_width(),
            border_color: default_border_color(),
            border_style: BorderStyle::default(),
            opacity: default_opacity(),
            z_index: 0,
        }
    }
}

fn default_border_width() -> f64 {
    1.0
}

fn default_border_color() -> String {
    "#000000".to_string()
}

fn default_opacity() -> f64 {
    1.0
}

/// One placeable item on the label canvas
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    /// Unique within the document, assigned at creation, immutable
    pub id: u64,
    #[serde(rename = "type")]
    pub kind: ElementKind,
    #[serde(flatten)]
    pub geometry: ElementGeometry,
    #[serde(flatten)]
    pub style: ElementStyle,
    /// Literal text, a `{{product.<field>}}` token, or barcode data
    #[serde(default)]
    pub content: String,
}

impl Element {
    /// Create an element with default style at the given position
    pub fn new(
        id: u64,
        kind: ElementKind,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id,
            kind,
            geometry: ElementGeometry {
                x,
                y,
                width,
                height,
                rotation_degrees: 0.0,
            },
            style: ElementStyle::default(),
            content: content.into(),
        }
    }
}

/// Label template entity
///
/// Owns all of its elements; elements never outlive the document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TemplateDocument {
    /// Persisted id; `None` until first save
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Template name
    pub name: String,
    /// Label width in mm
    pub width_mm: f64,
    /// Label height in mm
    pub height_mm: f64,
    /// Font size applied when an element does not set its own
    #[serde(default = "default_font_size")]
    pub default_font_size: f64,
    /// Text color applied when an element does not set its own
    #[serde(default = "default_text_color")]
    pub text_color: String,
    /// Page background
    #[serde(default = "default_background_color")]
    pub background_color: String,
    /// Page border width in document pixels
    #[serde(default = "default_border_width")]
    pub border_width: f64,
    /// Page border style
    #[serde(default = "default_page_border_style")]
    pub border_style: BorderStyle,
    #[serde(default)]
    pub include_barcode: bool,
    #[serde(default)]
    pub include_price: bool,
    #[serde(default)]
    pub include_mrp: bool,
    #[serde(default)]
    pub include_description: bool,
    #[serde(default)]
    pub include_manufacturing_date: bool,
    #[serde(default)]
    pub include_expiry_date: bool,
    #[serde(default)]
    pub elements: Vec<Element>,
    /// Created timestamp (ms), stamped by the store
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
    /// Updated timestamp (ms), stamped by the store
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
}

fn default_font_size() -> f64 {
    12.0
}

fn default_text_color() -> String {
    "#000000".to_string()
}

fn default_background_color() -> String {
    "#ffffff".to_string()
}

fn default_page_border_style() -> BorderStyle {
    BorderStyle::Solid
}

impl TemplateDocument {
    /// Create an empty document with the given physical dimensions
    ///
    /// Non-positive dimensions are clamped to 1 mm.
    pub fn new(name: impl Into<String>, width_mm: f64, height_mm: f64) -> Self {
        Self {
            id: None,
            name: name.into(),
            width_mm: width_mm.max(1.0),
            height_mm: height_mm.max(1.0),
            default_font_size: default_font_size(),
            text_color: default_text_color(),
            background_color: default_background_color(),
            border_width: default_border_width(),
            border_style: default_page_border_style(),
            include_barcode: false,
            include_price: false,
            include_mrp: false,
            include_description: false,
            include_manufacturing_date: false,
            include_expiry_date: false,
            elements: Vec::new(),
            created_at: None,
            updated_at: None,
        }
    }

    /// Document width in un-zoomed pixels
    pub fn width_px(&self) -> f64 {
        mm_to_px(self.width_mm)
    }

    /// Document height in un-zoomed pixels
    pub fn height_px(&self) -> f64 {
        mm_to_px(self.height_mm)
    }

    /// Look up an element by id
    pub fn element(&self, id: u64) -> Option<&Element> {
        self.elements.iter().find(|e| e.id == id)
    }

    /// Look up an element by id, mutably
    pub fn element_mut(&mut self, id: u64) -> Option<&mut Element> {
        self.elements.iter_mut().find(|e| e.id == id)
    }

    /// Next free element id (max existing + 1)
    pub fn next_element_id(&self) -> u64 {
        self.elements.iter().map(|e| e.id).max().unwrap_or(0) + 1
    }

    /// z-index for a newly created element
    ///
    /// `count + 1` guarantees the new element paints above everything that
    /// exists at creation time. After deletions this can collide with an
    /// existing value; paint order then falls back to insertion order.
    pub fn next_z_index(&self) -> i64 {
        self.elements.len() as i64 + 1
    }
}
