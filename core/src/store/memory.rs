// core/src/store/memory.rs

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use serde_json::Value;

use super::{Document, DocumentStore};
use crate::error::OrderDeskResult;

/// Keeps documents in process memory. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryStore {
  documents: RwLock<HashMap<Document, Value>>,
}

impl MemoryStore {
  pub fn new() -> Self {
    Self::default()
  }

  /// Seeds a document, mostly for tests.
  pub fn with_document(self, document: Document, value: Value) -> Self {
    self.documents.write().insert(document, value);
    self
  }
}

#[async_trait]
impl DocumentStore for MemoryStore {
  fn backend_name(&self) -> &'static str {
    "memory"
  }

  async fn read(&self, document: Document) -> OrderDeskResult<Option<Value>> {
    Ok(self.documents.read().get(&document).cloned())
  }

  async fn write(&self, document: Document, value: &Value) -> OrderDeskResult<()> {
    self.documents.write().insert(document, value.clone());
    Ok(())
  }
}
