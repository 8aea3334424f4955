//! Property editor binding
//!
//! A pure mutation surface over elements: partial patches from the property
//! panel, duplication, and deletion. Patches touch only the addressed
//! element; everything else in the document is left as-is.

use serde::{Deserialize, Serialize};
use shared::models::{
    BorderStyle, FontStyle, FontWeight, TemplateDocument, TextAlign, TextDecoration,
};
use tracing::debug;

use crate::editor::EditorState;
use crate::error::{EditorError, EditorResult};
use crate::geometry::clamp_geometry;

/// Fallback x/y when a form input fails to parse
pub const DEFAULT_POSITION: f64 = 0.0;
/// Fallback width when a form input fails to parse
pub const DEFAULT_WIDTH: f64 = 50.0;
/// Fallback height when a form input fails to parse
pub const DEFAULT_HEIGHT: f64 = 20.0;
/// Fallback font size when a form input fails to parse
pub const DEFAULT_FONT_SIZE: f64 = 12.0;

/// Offset applied to a duplicated element, document pixels
const DUPLICATE_OFFSET: f64 = 10.0;

/// Parse a numeric form input, falling back to a sane default
///
/// The property panel hands over raw strings; anything that does not parse
/// as a number becomes the field's fallback instead of an error.
pub fn parse_or(input: &str, fallback: f64) -> f64 {
    input.trim().parse().unwrap_or(fallback)
}

/// Partial element patch
///
/// Absent fields are left untouched, mirroring the update payloads of the
/// data service.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ElementUpdate {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub rotation_degrees: Option<f64>,
    pub font_size: Option<f64>,
    pub font_weight: Option<FontWeight>,
    pub font_style: Option<FontStyle>,
    pub text_decoration: Option<TextDecoration>,
    pub text_align: Option<TextAlign>,
    pub color: Option<String>,
    pub background_color: Option<String>,
    pub border_width: Option<f64>,
    pub border_color: Option<String>,
    pub border_style: Option<BorderStyle>,
    pub opacity: Option<f64>,
    pub z_index: Option<i64>,
    pub content: Option<String>,
}

/// Merge a partial update into one element
///
/// Geometry and opacity are re-clamped afterwards, so a patch can never
/// push an element out of bounds or out of range.
pub fn apply_update(
    doc: &mut TemplateDocument,
    id: u64,
    update: ElementUpdate,
) -> EditorResult<()> {
    let (width_px, height_px) = (doc.width_px(), doc.height_px());
    let element = doc.element_mut(id).ok_or(EditorError::ElementNotFound(id))?;

    let g = &mut element.geometry;
    if let Some(x) = update.x {
        g.x = x;
    }
    if let Some(y) = update.y {
        g.y = y;
    }
    if let Some(width) = update.width {
        g.width = width;
    }
    if let Some(height) = update.height {
        g.height = height;
    }
    if let Some(rotation) = update.rotation_degrees {
        g.rotation_degrees = rotation;
    }
    clamp_geometry(g, width_px, height_px);

    let s = &mut element.style;
    if let Some(font_size) = update.font_size {
        s.font_size = Some(font_size);
    }
    if let Some(font_weight) = update.font_weight {
        s.font_weight = font_weight;
    }
    if let Some(font_style) = update.font_style {
        s.font_style = font_style;
    }
    if let Some(text_decoration) = update.text_decoration {
        s.text_decoration = text_decoration;
    }
    if let Some(text_align) = update.text_align {
        s.text_align = text_align;
    }
    if let Some(color) = update.color {
        s.color = Some(color);
    }
    if let Some(background_color) = update.background_color {
        s.background_color = Some(background_color);
    }
    if let Some(border_width) = update.border_width {
        s.border_width = border_width.max(0.0);
    }
    if let Some(border_color) = update.border_color {
        s.border_color = border_color;
    }
    if let Some(border_style) = update.border_style {
        s.border_style = border_style;
    }
    if let Some(opacity) = update.opacity {
        s.opacity = opacity.clamp(0.0, 1.0);
    }
    if let Some(z_index) = update.z_index {
        s.z_index = z_index;
    }
    if let Some(content) = update.content {
        element.content = content;
    }
    Ok(())
}

/// Duplicate an element: full copy, fresh id, +10/+10 offset, next z-index
///
/// Returns the new element's id.
pub fn duplicate_element(doc: &mut TemplateDocument, id: u64) -> EditorResult<u64> {
    let source = doc
        .element(id)
        .ok_or(EditorError::ElementNotFound(id))?
        .clone();

    let mut copy = source;
    copy.id = doc.next_element_id();
    copy.geometry.x += DUPLICATE_OFFSET;
    copy.geometry.y += DUPLICATE_OFFSET;
    copy.style.z_index = doc.next_z_index();
    clamp_geometry(&mut copy.geometry, doc.width_px(), doc.height_px());

    let new_id = copy.id;
    doc.elements.push(copy);
    debug!(source = id, new_id, "element duplicated");
    Ok(new_id)
}

/// Delete an element, clearing the selection if it pointed at it
pub fn delete_element(
    doc: &mut TemplateDocument,
    editor: &mut EditorState,
    id: u64,
) -> EditorResult<()> {
    let index = doc
        .elements
        .iter()
        .position(|e| e.id == id)
        .ok_or(EditorError::ElementNotFound(id))?;
    doc.elements.remove(index);
    editor.clear_selection_of(id);
    debug!(id, "element deleted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{Element, ElementKind};

    fn doc_with_text() -> TemplateDocument {
        let mut doc = TemplateDocument::new("Bind 100x50", 100.0, 50.0);
        doc.elements
            .push(Element::new(1, ElementKind::Text, 10.0, 10.0, 50.0, 20.0, "hello"));
        doc
    }

    #[test]
    fn test_parse_or_fallbacks() {
        assert_eq!(parse_or("18.5", DEFAULT_FONT_SIZE), 18.5);
        assert_eq!(parse_or("  42 ", DEFAULT_POSITION), 42.0);
        assert_eq!(parse_or("abc", DEFAULT_FONT_SIZE), 12.0);
        assert_eq!(parse_or("", DEFAULT_WIDTH), 50.0);
        assert_eq!(parse_or("12px", DEFAULT_HEIGHT), 20.0);
    }

    #[test]
    fn test_apply_update_merges_only_given_fields() {
        let mut doc = doc_with_text();
        let update = ElementUpdate {
            x: Some(30.0),
            font_size: Some(16.0),
            content: Some("changed".into()),
            ..Default::default()
        };
        apply_update(&mut doc, 1, update).unwrap();

        let el = doc.element(1).unwrap();
        assert_eq!(el.geometry.x, 30.0);
        assert_eq!(el.geometry.y, 10.0);
        assert_eq!(el.style.font_size, Some(16.0));
        assert_eq!(el.content, "changed");
    }

    #[test]
    fn test_apply_update_clamps_geometry_and_opacity() {
        let mut doc = doc_with_text();
        let update = ElementUpdate {
            x: Some(-50.0),
            width: Some(-3.0),
            opacity: Some(4.2),
            rotation_degrees: Some(-900.0),
            ..Default::default()
        };
        apply_update(&mut doc, 1, update).unwrap();

        let el = doc.element(1).unwrap();
        assert_eq!(el.geometry.x, 0.0);
        assert!(el.geometry.width >= 1.0);
        assert_eq!(el.style.opacity, 1.0);
        assert_eq!(el.geometry.rotation_degrees, -360.0);
    }

    #[test]
    fn test_apply_update_unknown_id() {
        let mut doc = doc_with_text();
        let err = apply_update(&mut doc, 99, ElementUpdate::default()).unwrap_err();
        assert_eq!(err, EditorError::ElementNotFound(99));
    }

    #[test]
    fn test_duplicate_offsets_and_stacks() {
        let mut doc = doc_with_text();
        let new_id = duplicate_element(&mut doc, 1).unwrap();

        assert_ne!(new_id, 1);
        let copy = doc.element(new_id).unwrap();
        assert_eq!((copy.geometry.x, copy.geometry.y), (20.0, 20.0));
        assert!(copy.style.z_index > doc.element(1).unwrap().style.z_index);
        assert_eq!(copy.content, "hello");
    }

    #[test]
    fn test_delete_clears_selection() {
        let mut doc = doc_with_text();
        let mut editor = EditorState::new();
        editor.select(Some(1));

        delete_element(&mut doc, &mut editor, 1).unwrap();
        assert!(doc.elements.is_empty());
        assert_eq!(editor.selected_element_id(), None);
    }

    #[test]
    fn test_delete_keeps_unrelated_selection() {
        let mut doc = doc_with_text();
        doc.elements
            .push(Element::new(2, ElementKind::Sku, 0.0, 0.0, 100.0, 24.0, "{{product.sku}}"));
        let mut editor = EditorState::new();
        editor.select(Some(2));

        delete_element(&mut doc, &mut editor, 1).unwrap();
        assert_eq!(editor.selected_element_id(), Some(2));
    }

    #[test]
    fn test_update_patch_deserializes_camel_case() {
        let update: ElementUpdate = serde_json::from_str(
            r#"{"fontSize": 14, "textAlign": "center", "zIndex": 9}"#,
        )
        .unwrap();
        assert_eq!(update.font_size, Some(14.0));
        assert_eq!(update.text_align, Some(TextAlign::Center));
        assert_eq!(update.z_index, Some(9));
        assert!(update.x.is_none());
    }
}
