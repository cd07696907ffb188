// tests/common/mod.rs
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;
use orderdesk::{Document, DocumentStore, MemoryStore, User};
use orderdesk_server::services::auth_service;
use orderdesk_server::{AppConfig, AppState};
use serde_json::Value;
use tracing::Level;

pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "admin123";
pub const JWT_SECRET: &str = "integration-test-secret";

static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer()
    .try_init()
    .ok();
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

pub fn test_config() -> Arc<AppConfig> {
  let vars: HashMap<&str, &str> = [("JWT_SECRET", JWT_SECRET), ("STORAGE_BACKEND", "memory")].into_iter().collect();
  Arc::new(AppConfig::from_lookup(|name| vars.get(name).map(|v| v.to_string())).expect("test config"))
}

// Hashing once keeps the suite fast; Argon2 is slow in debug builds.
static ADMIN_HASH: Lazy<String> = Lazy::new(|| auth_service::hash_password(ADMIN_PASSWORD).expect("hash"));

/// State over a memory store holding the admin user and the given orders.
pub fn state_with_orders(orders: Value) -> AppState {
  setup_tracing();
  let users = serde_json::to_value(vec![User::admin(ADMIN_USERNAME, ADMIN_HASH.as_str())]).expect("users");
  let store: Arc<dyn DocumentStore> = Arc::new(
    MemoryStore::new()
      .with_document(Document::Users, users)
      .with_document(Document::Orders, orders),
  );
  AppState::new(store, test_config())
}

pub fn empty_state() -> AppState {
  state_with_orders(Value::Array(Vec::new()))
}

pub fn admin_token(state: &AppState) -> String {
  state
    .tokens
    .issue(&User::admin(ADMIN_USERNAME, "unused"))
    .expect("token")
    .token
}

pub fn bearer(token: &str) -> (&'static str, String) {
  ("Authorization", format!("Bearer {}", token))
}
