//! Document initialization
//!
//! A freshly created document starts blank; the include-toggles decide which
//! default elements get auto-populated before the operator takes over.

use shared::models::{Element, ElementKind, FontWeight, TemplateDocument};
use tracing::debug;

use crate::geometry::clamp_geometry;

/// Canvas margin used when stacking default elements, document pixels
const DEFAULT_MARGIN: f64 = 10.0;
/// Vertical gap between stacked default elements, document pixels
const DEFAULT_GAP: f64 = 8.0;

/// Default bounding box for a newly created element of the given kind
fn default_size(kind: ElementKind) -> (f64, f64) {
    match kind {
        ElementKind::Text => (150.0, 30.0),
        ElementKind::Barcode => (120.0, 60.0),
        ElementKind::Image => (100.0, 100.0),
        ElementKind::Price | ElementKind::Mrp | ElementKind::Sku => (100.0, 24.0),
    }
}

/// Default content for a newly created element of the given kind
fn default_content(kind: ElementKind) -> &'static str {
    match kind {
        ElementKind::Text => "New Text",
        ElementKind::Barcode => "{{product.barcode}}",
        ElementKind::Image => "",
        ElementKind::Price => "{{product.price}}",
        ElementKind::Mrp => "{{product.mrp}}",
        ElementKind::Sku => "{{product.sku}}",
    }
}

/// Create an element of `kind` with its default geometry and content,
/// clamped into the document bounds
pub fn default_element(doc: &TemplateDocument, kind: ElementKind, x: f64, y: f64) -> Element {
    let (width, height) = default_size(kind);
    let mut element = Element::new(
        doc.next_element_id(),
        kind,
        x,
        y,
        width,
        height,
        default_content(kind),
    );
    element.style.z_index = doc.next_z_index();
    clamp_geometry(&mut element.geometry, doc.width_px(), doc.height_px());
    element
}

/// Auto-populate the default elements gated by the document's include-toggles
///
/// Only applies to a blank document; a document that already has elements is
/// left untouched. The product name element is always included; the rest
/// follow the toggles. Elements are stacked top-down inside the margins and
/// clamped into bounds for small labels.
pub fn populate_defaults(doc: &mut TemplateDocument) {
    if !doc.elements.is_empty() {
        debug!(elements = doc.elements.len(), "document not blank, skipping defaults");
        return;
    }

    let mut slots: Vec<(ElementKind, &str)> = vec![(ElementKind::Text, "{{product.name}}")];
    if doc.include_price {
        slots.push((ElementKind::Price, "{{product.price}}"));
    }
    if doc.include_mrp {
        slots.push((ElementKind::Mrp, "{{product.mrp}}"));
    }
    if doc.include_barcode {
        slots.push((ElementKind::Barcode, "{{product.barcode}}"));
    }
    if doc.include_description {
        slots.push((ElementKind::Text, "{{product.description}}"));
    }
    if doc.include_manufacturing_date {
        slots.push((ElementKind::Text, "{{product.manufacturingDate}}"));
    }
    if doc.include_expiry_date {
        slots.push((ElementKind::Text, "{{product.expiryDate}}"));
    }

    let mut y = DEFAULT_MARGIN;
    for (kind, content) in slots {
        let mut element = default_element(doc, kind, DEFAULT_MARGIN, y);
        element.content = content.to_string();
        if kind == ElementKind::Price {
            element.style.font_weight = FontWeight::Bold;
        }
        y += element.geometry.height + DEFAULT_GAP;
        doc.elements.push(element);
    }
    debug!(elements = doc.elements.len(), "populated default elements");
}

/// Clamp every element of a loaded document back into a valid state
///
/// Externally stored documents can carry out-of-range geometry or opacity;
/// the editor runs this once after load instead of rejecting the document.
pub fn normalize_document(doc: &mut TemplateDocument) {
    let (width_px, height_px) = (doc.width_px(), doc.height_px());
    for element in &mut doc.elements {
        clamp_geometry(&mut element.geometry, width_px, height_px);
        element.style.opacity = element.style.opacity.clamp(0.0, 1.0);
    }
}
