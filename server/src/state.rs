// server/src/state.rs

use std::sync::Arc;

use orderdesk::{BlobStore, DocumentStore, FileStore, MemoryStore, OrderRepository, UserRepository};

use crate::config::{AppConfig, StorageBackend};
use crate::errors::{AppError, Result};
use crate::services::token_service::TokenService;

#[derive(Clone)]
pub struct AppState {
  pub orders: OrderRepository,
  pub users: UserRepository,
  pub tokens: Arc<TokenService>,
  pub config: Arc<AppConfig>, // Share loaded config
}

impl AppState {
  pub fn new(store: Arc<dyn DocumentStore>, config: Arc<AppConfig>) -> Self {
    Self {
      orders: OrderRepository::new(store.clone()),
      users: UserRepository::new(store),
      tokens: Arc::new(TokenService::new(&config.jwt_secret, config.token_ttl)),
      config,
    }
  }

  /// Opens the configured storage backend and wires the repositories to it.
  pub fn from_config(config: Arc<AppConfig>) -> Result<Self> {
    let store = build_store(&config)?;
    Ok(Self::new(store, config))
  }
}

pub fn build_store(config: &AppConfig) -> Result<Arc<dyn DocumentStore>> {
  let store: Arc<dyn DocumentStore> = match config.storage_backend {
    StorageBackend::File => Arc::new(FileStore::new(config.data_dir.clone())),
    StorageBackend::Blob => {
      let blob_config = config
        .blob
        .clone()
        .ok_or_else(|| AppError::Config("Blob backend selected without blob settings".to_string()))?;
      Arc::new(BlobStore::new(blob_config)?)
    }
    StorageBackend::Memory => {
      tracing::warn!("Using in-memory storage; orders are lost on restart.");
      Arc::new(MemoryStore::new())
    }
  };
  tracing::info!(backend = store.backend_name(), "Storage backend ready.");
  Ok(store)
}
