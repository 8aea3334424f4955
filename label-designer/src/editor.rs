//! Interaction engine
//!
//! The tool/selection/drag state machine. All editor state lives in one
//! explicit [`EditorState`] value threaded through the pointer handlers, so
//! the machine is testable without a live canvas. Handlers are total: bad
//! input is clamped or ignored, never a panic.

use shared::models::{ElementKind, TemplateDocument};
use tracing::debug;

use crate::document::default_element;
use crate::geometry::{Zoom, clamp_position, screen_to_document};

/// Active editor tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    /// Hit-test, select and drag existing elements
    #[default]
    Select,
    /// Next canvas click creates a text element
    Text,
    /// Next canvas click creates a barcode element
    Barcode,
    /// Next canvas click creates an image element
    Image,
}

impl Tool {
    /// The element kind this tool creates, if it is a create tool
    fn element_kind(self) -> Option<ElementKind> {
        match self {
            Tool::Select => None,
            Tool::Text => Some(ElementKind::Text),
            Tool::Barcode => Some(ElementKind::Barcode),
            Tool::Image => Some(ElementKind::Image),
        }
    }
}

/// A drag in progress
///
/// Anchored at the mousedown point: each move recomputes the element
/// position as `origin + delta / zoom`, so clamping at an edge never
/// accumulates into the stored geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragState {
    pub start_screen_x: f64,
    pub start_screen_y: f64,
    /// Element position at mousedown, document pixels
    pub origin_x: f64,
    pub origin_y: f64,
}

/// Explicit editor state threaded through interaction handlers
#[derive(Debug, Clone, Default)]
pub struct EditorState {
    tool: Tool,
    zoom: Zoom,
    selected: Option<u64>,
    drag: Option<DragState>,
}

impl EditorState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    /// Switch the active tool; an in-flight drag is abandoned
    pub fn set_tool(&mut self, tool: Tool) {
        self.tool = tool;
        self.drag = None;
    }

    pub fn zoom(&self) -> Zoom {
        self.zoom
    }

    /// Change the presentation zoom; stored geometry is untouched
    pub fn set_zoom(&mut self, zoom: Zoom) {
        self.zoom = zoom;
    }

    pub fn selected_element_id(&self) -> Option<u64> {
        self.selected
    }

    pub fn select(&mut self, id: Option<u64>) {
        self.selected = id;
    }

    pub(crate) fn clear_selection_of(&mut self, id: u64) {
        if self.selected == Some(id) {
            self.selected = None;
            self.drag = None;
        }
    }

    /// Whether a drag is currently live
    pub fn dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Pointer pressed on the canvas at screen coordinates (relative to the
    /// canvas origin)
    ///
    /// Select tool: selects the topmost hit element and arms a drag, or
    /// clears the selection on empty canvas. Create tools: place a new
    /// element at the click, select it, and revert to the select tool
    /// (one-shot creation). Returns the affected element id, if any.
    pub fn pointer_down(
        &mut self,
        doc: &mut TemplateDocument,
        screen_x: f64,
        screen_y: f64,
    ) -> Option<u64> {
        let (doc_x, doc_y) = screen_to_document(screen_x, screen_y, self.zoom);

        match self.tool.element_kind() {
            None => match hit_test(doc, doc_x, doc_y) {
                Some(id) => {
                    let el = doc.element(id)?;
                    self.selected = Some(id);
                    self.drag = Some(DragState {
                        start_screen_x: screen_x,
                        start_screen_y: screen_y,
                        origin_x: el.geometry.x,
                        origin_y: el.geometry.y,
                    });
                    debug!(id, "element selected");
                    Some(id)
                }
                None => {
                    self.selected = None;
                    self.drag = None;
                    None
                }
            },
            Some(kind) => {
                let element = default_element(doc, kind, doc_x, doc_y);
                let id = element.id;
                doc.elements.push(element);
                self.selected = Some(id);
                self.drag = None;
                self.tool = Tool::Select;
                debug!(id, ?kind, "element created");
                Some(id)
            }
        }
    }

    /// Pointer moved with the button held down
    ///
    /// Repositions the dragged element by the zoom-scaled delta from the
    /// drag anchor, clamped so the bounding box stays inside the document.
    pub fn pointer_move(&mut self, doc: &mut TemplateDocument, screen_x: f64, screen_y: f64) {
        let Some(drag) = self.drag else {
            return;
        };
        let Some(id) = self.selected else {
            return;
        };

        let scale = self.zoom.scale();
        let dx = (screen_x - drag.start_screen_x) / scale;
        let dy = (screen_y - drag.start_screen_y) / scale;

        let (width_px, height_px) = (doc.width_px(), doc.height_px());
        if let Some(el) = doc.element_mut(id) {
            el.geometry.x = drag.origin_x + dx;
            el.geometry.y = drag.origin_y + dy;
            clamp_position(&mut el.geometry, width_px, height_px);
        }
    }

    /// Pointer released; the drag ends, tool and selection stay put
    pub fn pointer_up(&mut self) {
        self.drag = None;
    }
}

/// Topmost element whose bounding box contains the document point
///
/// Ties on z-index resolve to the later insertion, matching paint order.
pub fn hit_test(doc: &TemplateDocument, doc_x: f64, doc_y: f64) -> Option<u64> {
    let mut order: Vec<usize> = (0..doc.elements.len()).collect();
    order.sort_by_key(|&i| doc.elements[i].style.z_index);

    order.iter().rev().find_map(|&i| {
        let el = &doc.elements[i];
        let g = &el.geometry;
        let inside =
            doc_x >= g.x && doc_x <= g.x + g.width && doc_y >= g.y && doc_y <= g.y + g.height;
        inside.then_some(el.id)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::Element;

    fn doc_with(elements: Vec<Element>) -> TemplateDocument {
        let mut doc = TemplateDocument::new("Test 100x50", 100.0, 50.0);
        doc.elements = elements;
        doc
    }

    #[test]
    fn test_hit_test_topmost_wins() {
        let mut a = Element::new(1, ElementKind::Text, 0.0, 0.0, 100.0, 100.0, "under");
        a.style.z_index = 1;
        let mut b = Element::new(2, ElementKind::Text, 20.0, 20.0, 100.0, 100.0, "over");
        b.style.z_index = 2;
        let doc = doc_with(vec![a, b]);

        assert_eq!(hit_test(&doc, 50.0, 50.0), Some(2));
        assert_eq!(hit_test(&doc, 5.0, 5.0), Some(1));
        assert_eq!(hit_test(&doc, 300.0, 300.0), None);
    }

    #[test]
    fn test_hit_test_equal_z_prefers_later_insertion() {
        let a = Element::new(1, ElementKind::Text, 0.0, 0.0, 50.0, 50.0, "first");
        let b = Element::new(2, ElementKind::Text, 0.0, 0.0, 50.0, 50.0, "second");
        let doc = doc_with(vec![a, b]);
        assert_eq!(hit_test(&doc, 10.0, 10.0), Some(2));
    }

    #[test]
    fn test_click_empty_canvas_clears_selection() {
        let el = Element::new(1, ElementKind::Text, 0.0, 0.0, 30.0, 30.0, "x");
        let mut doc = doc_with(vec![el]);
        let mut editor = EditorState::new();

        editor.pointer_down(&mut doc, 10.0, 10.0);
        assert_eq!(editor.selected_element_id(), Some(1));

        editor.pointer_up();
        editor.pointer_down(&mut doc, 200.0, 150.0);
        assert_eq!(editor.selected_element_id(), None);
    }

    #[test]
    fn test_create_tool_is_one_shot() {
        let mut doc = doc_with(vec![]);
        let mut editor = EditorState::new();
        editor.set_tool(Tool::Text);

        let id = editor.pointer_down(&mut doc, 10.0, 10.0).unwrap();
        assert_eq!(editor.tool(), Tool::Select);
        assert_eq!(editor.selected_element_id(), Some(id));
        assert_eq!(doc.elements.len(), 1);
        assert_eq!(doc.elements[0].content, "New Text");

        // The next click selects rather than creates
        editor.pointer_up();
        editor.pointer_down(&mut doc, 15.0, 15.0);
        assert_eq!(doc.elements.len(), 1);
    }

    #[test]
    fn test_drag_moves_and_clamps() {
        let el = Element::new(1, ElementKind::Text, 10.0, 10.0, 50.0, 20.0, "x");
        let mut doc = doc_with(vec![el]);
        let mut editor = EditorState::new();

        editor.pointer_down(&mut doc, 20.0, 15.0);
        editor.pointer_move(&mut doc, 50.0, 25.0);
        {
            let g = &doc.element(1).unwrap().geometry;
            assert_eq!((g.x, g.y), (40.0, 20.0));
        }

        // Way off-canvas: clamped to the right/bottom edge
        editor.pointer_move(&mut doc, 5000.0, 5000.0);
        let (w, h) = (doc.width_px(), doc.height_px());
        let g = &doc.element(1).unwrap().geometry;
        assert_eq!(g.x, w - g.width);
        assert_eq!(g.y, h - g.height);

        editor.pointer_up();
        assert!(!editor.dragging());
        assert_eq!(editor.selected_element_id(), Some(1));
    }

    #[test]
    fn test_drag_delta_respects_zoom() {
        let el = Element::new(1, ElementKind::Text, 10.0, 10.0, 50.0, 20.0, "x");
        let mut doc = doc_with(vec![el]);
        let mut editor = EditorState::new();
        editor.set_zoom(Zoom::Z200);

        // Screen coords are doubled at 200%; the hit point (10,10) in
        // document space is (20,20) on screen.
        editor.pointer_down(&mut doc, 30.0, 30.0);
        assert_eq!(editor.selected_element_id(), Some(1));

        // 40 screen px to the right is 20 document px
        editor.pointer_move(&mut doc, 70.0, 30.0);
        let g = &doc.element(1).unwrap().geometry;
        assert_eq!((g.x, g.y), (30.0, 10.0));
    }

    #[test]
    fn test_zoom_change_never_mutates_geometry() {
        let el = Element::new(1, ElementKind::Text, 12.5, 7.5, 50.0, 20.0, "x");
        let mut doc = doc_with(vec![el]);
        let before = doc.clone();
        let mut editor = EditorState::new();

        for zoom in Zoom::ALL {
            editor.set_zoom(zoom);
        }
        assert_eq!(doc, before);
    }
}
