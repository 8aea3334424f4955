//! # label-store
//!
//! Template persistence adapter - save/load of label templates through an
//! external store.
//!
//! The designer core consumes exactly two operations, [`TemplateStore::save`]
//! and [`TemplateStore::load`]. Transport failures surface as a single
//! [`StoreError`] per operation; a failed load never touches the caller's
//! in-memory document (results are returned by value, caller state is never
//! mutated). No retry, caching or timeout semantics beyond the HTTP client's
//! own request timeout.
//!
//! ## Example
//!
//! ```no_run
//! use label_store::{HttpTemplateStore, StoreConfig, TemplateStore};
//! use shared::models::TemplateDocument;
//!
//! # async fn run() -> label_store::StoreResult<()> {
//! let store = HttpTemplateStore::new(&StoreConfig::new("http://localhost:8080"));
//! let doc = TemplateDocument::new("Shelf 40x30", 40.0, 30.0);
//! let id = store.save(&doc).await?;
//! let loaded = store.load(id).await?;
//! assert_eq!(loaded.name, doc.name);
//! # Ok(())
//! # }
//! ```

mod config;
mod error;
mod http;
mod memory;

use async_trait::async_trait;
use shared::models::TemplateDocument;

// Re-exports
pub use config::StoreConfig;
pub use error::{StoreError, StoreResult};
pub use http::HttpTemplateStore;
pub use memory::MemoryTemplateStore;

/// Persistence seam for label templates
///
/// Implementations stamp the persisted id and timestamps on save and return
/// documents by value on load.
#[async_trait]
pub trait TemplateStore: Send + Sync {
    /// Persist a document, returning its store id
    async fn save(&self, doc: &TemplateDocument) -> StoreResult<i64>;

    /// Fetch a document by id
    async fn load(&self, id: i64) -> StoreResult<TemplateDocument>;
}
