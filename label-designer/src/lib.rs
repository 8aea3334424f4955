//! # label-designer
//!
//! Label template editor core - geometry, interaction and property editing.
//!
//! ## Scope
//!
//! This crate handles WHAT is on a label and how the operator changes it:
//! - Unit conversion (mm <-> document pixels) and zoom mapping
//! - Blank-document creation with toggle-driven default elements
//! - The tool/selection/drag state machine
//! - Partial property updates, duplication and deletion
//!
//! Producing output (placeholder substitution, barcodes, SVG) lives in
//! `label-render`; persistence lives in `label-store`. Everything here is
//! synchronous and runs to completion inside one input event.
//!
//! ## Example
//!
//! ```
//! use label_designer::{EditorState, Tool, populate_defaults};
//! use shared::models::TemplateDocument;
//!
//! let mut doc = TemplateDocument::new("Shelf 40x30", 40.0, 30.0);
//! doc.include_price = true;
//! populate_defaults(&mut doc);
//!
//! let mut editor = EditorState::new();
//! editor.set_tool(Tool::Text);
//! let id = editor.pointer_down(&mut doc, 20.0, 20.0).unwrap();
//! assert_eq!(editor.selected_element_id(), Some(id));
//! ```

mod binding;
mod document;
mod editor;
mod error;
mod geometry;

// Re-exports
pub use binding::{
    DEFAULT_FONT_SIZE, DEFAULT_HEIGHT, DEFAULT_POSITION, DEFAULT_WIDTH, ElementUpdate,
    apply_update, delete_element, duplicate_element, parse_or,
};
pub use document::{default_element, normalize_document, populate_defaults};
pub use editor::{DragState, EditorState, Tool, hit_test};
pub use error::{EditorError, EditorResult};
pub use geometry::{Zoom, clamp_geometry, clamp_position, screen_to_document};

// Unit conversion is shared with the renderer
pub use shared::util::{PX_PER_MM, mm_to_px, px_to_mm};
