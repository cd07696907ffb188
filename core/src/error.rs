// core/src/error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OrderDeskError {
  #[error("I/O error on document '{document}': {source}")]
  Io {
    document: String,
    #[source]
    source: std::io::Error,
  },

  #[error("Malformed JSON in document '{document}': {source}")]
  Json {
    document: String,
    #[source]
    source: serde_json::Error,
  },

  #[error("Document '{document}' does not hold a JSON array")]
  NotAnArray { document: String },

  #[error("Blob service request for key '{key}' failed: {source}")]
  Remote {
    key: String,
    #[source]
    source: reqwest::Error,
  },

  #[error("Blob service answered {status} for key '{key}'")]
  RemoteStatus { key: String, status: u16 },

  #[error("Order not found: {0}")]
  OrderNotFound(String),

  #[error("Invalid input: {0}")]
  InvalidInput(String),

  #[error("CSV export failed: {0}")]
  Csv(#[from] csv::Error),
}

impl OrderDeskError {
  /// True for failures of the storage backend itself, as opposed to bad input
  /// or a missing record.
  pub fn is_storage_failure(&self) -> bool {
    matches!(
      self,
      OrderDeskError::Io { .. }
        | OrderDeskError::Json { .. }
        | OrderDeskError::NotAnArray { .. }
        | OrderDeskError::Remote { .. }
        | OrderDeskError::RemoteStatus { .. }
    )
  }
}

pub type OrderDeskResult<T, E = OrderDeskError> = std::result::Result<T, E>;
