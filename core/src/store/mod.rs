// core/src/store/mod.rs

//! Whole-document persistence.
//!
//! Each entity collection is one JSON document. Backends only move whole
//! documents; the typed helpers here turn them into `Vec<T>` and back.

use std::fmt;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::{OrderDeskError, OrderDeskResult};

pub mod blob;
pub mod file;
pub mod memory;

pub use blob::{BlobStore, BlobStoreConfig};
pub use file::FileStore;
pub use memory::MemoryStore;

/// The documents the system persists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Document {
  Orders,
  Users,
}

impl Document {
  pub fn name(&self) -> &'static str {
    match self {
      Document::Orders => "orders",
      Document::Users => "users",
    }
  }
}

impl fmt::Display for Document {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

#[async_trait]
pub trait DocumentStore: Send + Sync {
  /// Short backend label used in logs.
  fn backend_name(&self) -> &'static str;

  /// Reads a whole document. `Ok(None)` means the document does not exist yet.
  async fn read(&self, document: Document) -> OrderDeskResult<Option<Value>>;

  /// Replaces a whole document.
  async fn write(&self, document: Document, value: &Value) -> OrderDeskResult<()>;
}

/// Reads a document as a typed collection. A missing document is empty.
pub async fn read_collection<T>(store: &dyn DocumentStore, document: Document) -> OrderDeskResult<Vec<T>>
where
  T: DeserializeOwned,
{
  let value = match store.read(document).await? {
    Some(value) => value,
    None => return Ok(Vec::new()),
  };
  if !value.is_array() {
    tracing::error!(document = %document, backend = store.backend_name(), "Stored document is not an array.");
    return Err(OrderDeskError::NotAnArray {
      document: document.to_string(),
    });
  }
  serde_json::from_value(value).map_err(|source| OrderDeskError::Json {
    document: document.to_string(),
    source,
  })
}

/// Replaces a document with the serialized collection.
pub async fn write_collection<T>(store: &dyn DocumentStore, document: Document, items: &[T]) -> OrderDeskResult<()>
where
  T: Serialize,
{
  let value = serde_json::to_value(items).map_err(|source| OrderDeskError::Json {
    document: document.to_string(),
    source,
  })?;
  store.write(document, &value).await
}
