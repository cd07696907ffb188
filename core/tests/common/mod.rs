// tests/common/mod.rs
#![allow(dead_code)] // Not every test binary uses every helper

use std::path::PathBuf;
use std::sync::Arc;

use chrono::{DateTime, Duration, TimeZone, Utc};
use once_cell::sync::Lazy;
use orderdesk::{Document, DocumentStore, MemoryStore, Order};
use serde_json::{json, Map, Value};
use tracing::Level;

// --- Helper for Tracing Setup (call once per test run if needed) ---
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

// --- Scratch directories ---
pub struct ScratchDir {
  pub path: PathBuf,
}

impl ScratchDir {
  pub fn new() -> Self {
    let path = std::env::temp_dir().join(format!("orderdesk-test-{}", uuid::Uuid::new_v4()));
    Self { path }
  }
}

impl Drop for ScratchDir {
  fn drop(&mut self) {
    let _ = std::fs::remove_dir_all(&self.path);
  }
}

// --- Order fixtures ---
pub fn base_time() -> DateTime<Utc> {
  Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap()
}

pub fn fields(value: Value) -> Map<String, Value> {
  value.as_object().cloned().expect("fixture must be a JSON object")
}

pub fn kaos_order_fields(customer: &str) -> Map<String, Value> {
  fields(json!({
    "customerName": customer,
    "phoneNumber": "081234567890",
    "email": format!("{}@mail.id", customer.to_lowercase()),
    "productType": "kaos",
    "materialName": "Cotton Combed 30s",
    "size": "L",
    "colorName": "Hitam",
    "quantity": 2,
    "totalPrice": 170000,
    "shippingCost": 15000,
    "finalTotal": 185000,
  }))
}

pub fn stored_order(id: &str, minutes_after_base: i64, status: &str) -> Order {
  let mut order = Order::new(
    id.to_string(),
    kaos_order_fields("Budi"),
    base_time() + Duration::minutes(minutes_after_base),
  );
  order.status = status.to_string();
  order
}

pub fn memory_store_with_orders(orders: &[Order]) -> Arc<dyn DocumentStore> {
  let value = serde_json::to_value(orders).expect("orders serialize");
  Arc::new(MemoryStore::new().with_document(Document::Orders, value))
}
