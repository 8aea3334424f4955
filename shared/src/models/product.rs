//! Product Model
//!
//! Read-only input to label rendering. Monetary values are cents.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Product record consumed by the rendering pipeline
///
/// Fields beyond the fixed set are kept in `extra` and substituted only when
/// a template references them by name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub name: String,
    pub sku: String,
    /// Selling price in cents
    pub price: i64,
    /// Maximum retail price in cents
    pub mrp: i64,
    /// Barcode data (typically EAN-13 digits)
    pub barcode: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manufacturing_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<String>,
    /// Any additional fields from the data service
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl ProductRecord {
    /// Look up an additional field by name, rendered as plain text
    ///
    /// Strings come back unquoted; other scalar JSON values use their
    /// canonical representation. Arrays and objects are not substitutable.
    pub fn extra_field(&self, name: &str) -> Option<String> {
        match self.extra.get(name)? {
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Number(n) => Some(n.to_string()),
            serde_json::Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }
}
