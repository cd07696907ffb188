// core/src/store/file.rs

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, error, instrument, warn};

use super::{Document, DocumentStore};
use crate::error::{OrderDeskError, OrderDeskResult};

/// Stores each document as `<data_dir>/<name>.json`.
///
/// Writes land in a sibling temp file first and are renamed over the target,
/// so readers see either the old or the new document.
#[derive(Debug, Clone)]
pub struct FileStore {
  data_dir: PathBuf,
}

impl FileStore {
  pub fn new(data_dir: impl Into<PathBuf>) -> Self {
    Self {
      data_dir: data_dir.into(),
    }
  }

  pub fn data_dir(&self) -> &Path {
    &self.data_dir
  }

  pub fn path_for(&self, document: Document) -> PathBuf {
    self.data_dir.join(format!("{}.json", document.name()))
  }

  fn io_error(document: Document, source: std::io::Error) -> OrderDeskError {
    OrderDeskError::Io {
      document: document.to_string(),
      source,
    }
  }
}

#[async_trait]
impl DocumentStore for FileStore {
  fn backend_name(&self) -> &'static str {
    "file"
  }

  #[instrument(name = "file_store::read", skip(self), fields(path = %self.path_for(document).display()))]
  async fn read(&self, document: Document) -> OrderDeskResult<Option<Value>> {
    let path = self.path_for(document);
    let bytes = match tokio::fs::read(&path).await {
      Ok(bytes) => bytes,
      Err(e) if e.kind() == ErrorKind::NotFound => {
        debug!("Document file does not exist yet.");
        return Ok(None);
      }
      Err(e) => {
        error!(error = %e, "Failed to read document file.");
        return Err(Self::io_error(document, e));
      }
    };

    if bytes.iter().all(u8::is_ascii_whitespace) {
      warn!("Document file is empty; treating it as absent.");
      return Ok(None);
    }

    serde_json::from_slice(&bytes).map(Some).map_err(|source| {
      error!(error = %source, "Document file holds malformed JSON.");
      OrderDeskError::Json {
        document: document.to_string(),
        source,
      }
    })
  }

  #[instrument(name = "file_store::write", skip(self, value), fields(path = %self.path_for(document).display()))]
  async fn write(&self, document: Document, value: &Value) -> OrderDeskResult<()> {
    tokio::fs::create_dir_all(&self.data_dir)
      .await
      .map_err(|e| Self::io_error(document, e))?;

    let body = serde_json::to_vec_pretty(value).map_err(|source| OrderDeskError::Json {
      document: document.to_string(),
      source,
    })?;

    let target = self.path_for(document);
    let temp = self
      .data_dir
      .join(format!(".{}.json.{}.tmp", document.name(), uuid::Uuid::new_v4()));

    if let Err(e) = tokio::fs::write(&temp, &body).await {
      error!(error = %e, "Failed to write temporary document file.");
      let _ = tokio::fs::remove_file(&temp).await;
      return Err(Self::io_error(document, e));
    }
    if let Err(e) = tokio::fs::rename(&temp, &target).await {
      error!(error = %e, "Failed to move temporary document file into place.");
      let _ = tokio::fs::remove_file(&temp).await;
      return Err(Self::io_error(document, e));
    }

    debug!(bytes = body.len(), "Document written.");
    Ok(())
  }
}
