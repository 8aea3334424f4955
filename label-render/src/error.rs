//! Error types for the rendering pipeline

use thiserror::Error;

/// Barcode encode failure
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// Nothing to encode
    #[error("Barcode data is empty")]
    Empty,

    /// The symbology rejected the data (invalid character set)
    #[error("Data not encodable as {symbology}: {reason}")]
    Unencodable { symbology: &'static str, reason: String },
}

/// Per-element degradation reported alongside the rendered output
///
/// Warnings never abort rendering; the affected element degrades to an
/// empty bounding box and the rest of the document still renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderWarning {
    /// A barcode element could not be encoded
    Barcode { element_id: u64, error: EncodeError },
}
