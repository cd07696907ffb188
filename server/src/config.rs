// server/src/config.rs

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration as StdDuration;

use chrono::Duration;
use dotenvy::dotenv;
use orderdesk::store::blob::DEFAULT_API_KEY_HEADER;
use orderdesk::BlobStoreConfig;

use crate::errors::{AppError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
  File,
  Blob,
  Memory,
}

impl FromStr for StorageBackend {
  type Err = AppError;

  fn from_str(s: &str) -> Result<Self> {
    match s.trim().to_ascii_lowercase().as_str() {
      "file" => Ok(StorageBackend::File),
      "blob" => Ok(StorageBackend::Blob),
      "memory" => Ok(StorageBackend::Memory),
      other => Err(AppError::Config(format!(
        "Invalid STORAGE_BACKEND '{}': expected file, blob or memory",
        other
      ))),
    }
  }
}

#[derive(Clone)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,

  pub jwt_secret: String,
  pub token_ttl: Duration,

  pub storage_backend: StorageBackend,
  pub data_dir: PathBuf,
  // Only present when the blob backend is selected
  pub blob: Option<BlobStoreConfig>,

  // Creates the default admin when no users exist
  pub seed_db: bool,
  pub default_admin_username: String,
  pub default_admin_password: String,
}

// Secrets stay out of logs.
impl fmt::Debug for AppConfig {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("AppConfig")
      .field("server_host", &self.server_host)
      .field("server_port", &self.server_port)
      .field("jwt_secret", &"[REDACTED]")
      .field("token_ttl_hours", &self.token_ttl.num_hours())
      .field("storage_backend", &self.storage_backend)
      .field("data_dir", &self.data_dir)
      .field("blob_base_url", &self.blob.as_ref().map(|b| b.base_url.as_str()))
      .field("seed_db", &self.seed_db)
      .field("default_admin_username", &self.default_admin_username)
      .finish()
  }
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present
    Self::from_lookup(|name| std::env::var(name).ok())
  }

  /// Builds the configuration from any variable source.
  pub fn from_lookup<F>(lookup: F) -> Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let get_env = |var_name: &str| {
      lookup(var_name)
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| AppError::Config(format!("Missing environment variable '{}'", var_name)))
    };

    let server_host = get_env("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let server_port = get_env("SERVER_PORT")
      .unwrap_or_else(|_| "3000".to_string())
      .parse::<u16>()
      .map_err(|e| AppError::Config(format!("Invalid SERVER_PORT: {}", e)))?;

    let jwt_secret = get_env("JWT_SECRET")?;
    let token_ttl_hours = get_env("TOKEN_TTL_HOURS")
      .unwrap_or_else(|_| "24".to_string())
      .parse::<i64>()
      .map_err(|e| AppError::Config(format!("Invalid TOKEN_TTL_HOURS: {}", e)))?;
    if token_ttl_hours <= 0 {
      return Err(AppError::Config("TOKEN_TTL_HOURS must be positive".to_string()));
    }

    let storage_backend = get_env("STORAGE_BACKEND")
      .unwrap_or_else(|_| "file".to_string())
      .parse::<StorageBackend>()?;
    let data_dir = PathBuf::from(get_env("DATA_DIR").unwrap_or_else(|_| "data".to_string()));

    let blob = if storage_backend == StorageBackend::Blob {
      let mut blob = BlobStoreConfig::new(get_env("BLOB_BASE_URL")?);
      blob.api_key = get_env("BLOB_API_KEY").ok();
      blob.api_key_header = get_env("BLOB_API_KEY_HEADER").unwrap_or_else(|_| DEFAULT_API_KEY_HEADER.to_string());
      if let Ok(key) = get_env("BLOB_ORDERS_KEY") {
        blob.orders_key = key;
      }
      if let Ok(key) = get_env("BLOB_USERS_KEY") {
        blob.users_key = key;
      }
      let timeout_secs = get_env("BLOB_TIMEOUT_SECS")
        .unwrap_or_else(|_| "10".to_string())
        .parse::<u64>()
        .map_err(|e| AppError::Config(format!("Invalid BLOB_TIMEOUT_SECS: {}", e)))?;
      blob.timeout = StdDuration::from_secs(timeout_secs);
      Some(blob)
    } else {
      None
    };

    let seed_db = get_env("SEED_DB")
      .unwrap_or_else(|_| "true".to_string())
      .parse::<bool>()
      .map_err(|e| AppError::Config(format!("Invalid SEED_DB value: {}", e)))?;
    let default_admin_username = get_env("DEFAULT_ADMIN_USERNAME").unwrap_or_else(|_| "admin".to_string());
    let default_admin_password = get_env("DEFAULT_ADMIN_PASSWORD").unwrap_or_else(|_| "admin123".to_string());

    tracing::info!("Application configuration loaded successfully.");

    Ok(Self {
      server_host,
      server_port,
      jwt_secret,
      token_ttl: Duration::hours(token_ttl_hours),
      storage_backend,
      data_dir,
      blob,
      seed_db,
      default_admin_username,
      default_admin_password,
    })
  }

  pub fn bind_address(&self) -> String {
    format!("{}:{}", self.server_host, self.server_port)
  }
}
