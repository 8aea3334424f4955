//! # label-render
//!
//! Template rendering pipeline - turns a label template plus a product
//! record into camera-ready SVG at the label's true physical size.
//!
//! ## Scope
//!
//! This crate handles HOW a label becomes output:
//! - `{{product.field}}` placeholder substitution
//! - CODE128 barcode encoding
//! - SVG markup generation (mm-true dimensions, pixel viewBox)
//!
//! WHAT is on the label (editing, selection, geometry) stays in
//! `label-designer`. Rendering is deterministic and side-effect free:
//! the same document and product always produce byte-identical markup.
//!
//! ## Example
//!
//! ```
//! use label_render::render;
//! use shared::models::{ProductRecord, TemplateDocument};
//!
//! let doc = TemplateDocument::new("Shelf 40x30", 40.0, 30.0);
//! let product = ProductRecord {
//!     name: "Green Tea 250g".into(),
//!     sku: "TEA-250".into(),
//!     price: 450,
//!     mrp: 550,
//!     barcode: "8901234567890".into(),
//!     ..Default::default()
//! };
//! let output = render(&doc, &product);
//! assert!(output.svg.starts_with("<svg"));
//! assert!(output.warnings.is_empty());
//! ```

mod barcode;
mod error;
mod placeholder;
mod renderer;
mod svg;

// Re-exports
pub use barcode::{BarcodePattern, Symbology, encode};
pub use error::{EncodeError, RenderWarning};
pub use placeholder::resolve_content;
pub use renderer::{LabelOutput, render};
pub use svg::escape_xml;
