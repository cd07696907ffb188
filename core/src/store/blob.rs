// core/src/store/blob.rs

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde_json::Value;
use tracing::{debug, error, instrument};

use super::{Document, DocumentStore};
use crate::error::{OrderDeskError, OrderDeskResult};

pub const DEFAULT_API_KEY_HEADER: &str = "X-Master-Key";

#[derive(Debug, Clone)]
pub struct BlobStoreConfig {
  pub base_url: String,
  pub api_key: Option<String>,
  pub api_key_header: String,
  pub orders_key: String,
  pub users_key: String,
  pub timeout: Duration,
}

impl BlobStoreConfig {
  pub fn new(base_url: impl Into<String>) -> Self {
    Self {
      base_url: base_url.into(),
      api_key: None,
      api_key_header: DEFAULT_API_KEY_HEADER.to_string(),
      orders_key: Document::Orders.name().to_string(),
      users_key: Document::Users.name().to_string(),
      timeout: Duration::from_secs(10),
    }
  }

  pub fn key_for(&self, document: Document) -> &str {
    match document {
      Document::Orders => &self.orders_key,
      Document::Users => &self.users_key,
    }
  }

  pub fn url_for(&self, document: Document) -> String {
    format!("{}/{}", self.base_url.trim_end_matches('/'), self.key_for(document))
  }
}

/// Keeps documents in a remote key-value JSON service.
///
/// `GET {base}/{key}` fetches a document and `PUT {base}/{key}` replaces it.
/// Services that wrap the payload as `{"record": ...}` are unwrapped on read.
#[derive(Debug, Clone)]
pub struct BlobStore {
  client: Client,
  config: BlobStoreConfig,
}

impl BlobStore {
  pub fn new(config: BlobStoreConfig) -> OrderDeskResult<Self> {
    let client = Client::builder()
      .timeout(config.timeout)
      .build()
      .map_err(|source| OrderDeskError::Remote {
        key: config.base_url.clone(),
        source,
      })?;
    Ok(Self { client, config })
  }

  pub fn config(&self) -> &BlobStoreConfig {
    &self.config
  }

  fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
    match &self.config.api_key {
      Some(key) => request.header(self.config.api_key_header.as_str(), key.as_str()),
      None => request,
    }
  }

  fn remote_error(&self, document: Document, source: reqwest::Error) -> OrderDeskError {
    error!(error = %source, key = self.config.key_for(document), "Blob service request failed.");
    OrderDeskError::Remote {
      key: self.config.key_for(document).to_string(),
      source,
    }
  }
}

/// Strips a `{"record": ...}` envelope if the service added one.
pub fn unwrap_record(mut value: Value) -> Value {
  if let Some(record) = value.as_object_mut().and_then(|map| map.remove("record")) {
    return record;
  }
  value
}

#[async_trait]
impl DocumentStore for BlobStore {
  fn backend_name(&self) -> &'static str {
    "blob"
  }

  #[instrument(name = "blob_store::read", skip(self), fields(key = self.config.key_for(document)))]
  async fn read(&self, document: Document) -> OrderDeskResult<Option<Value>> {
    let response = self
      .authorize(self.client.get(self.config.url_for(document)))
      .send()
      .await
      .map_err(|e| self.remote_error(document, e))?;

    let status = response.status();
    if status == StatusCode::NOT_FOUND {
      debug!("Blob does not exist yet.");
      return Ok(None);
    }
    if !status.is_success() {
      error!(status = status.as_u16(), "Blob service rejected read.");
      return Err(OrderDeskError::RemoteStatus {
        key: self.config.key_for(document).to_string(),
        status: status.as_u16(),
      });
    }

    let body: Value = response.json().await.map_err(|e| self.remote_error(document, e))?;
    Ok(Some(unwrap_record(body)))
  }

  #[instrument(name = "blob_store::write", skip(self, value), fields(key = self.config.key_for(document)))]
  async fn write(&self, document: Document, value: &Value) -> OrderDeskResult<()> {
    let response = self
      .authorize(self.client.put(self.config.url_for(document)))
      .json(value)
      .send()
      .await
      .map_err(|e| self.remote_error(document, e))?;

    let status = response.status();
    if !status.is_success() {
      error!(status = status.as_u16(), "Blob service rejected write.");
      return Err(OrderDeskError::RemoteStatus {
        key: self.config.key_for(document).to_string(),
        status: status.as_u16(),
      });
    }
    debug!("Blob written.");
    Ok(())
  }
}
