// core/src/model/order.rs

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Conventional status values. Status is free text; these are the ones the
/// admin panel counts.
pub mod status {
  pub const PENDING: &str = "Pending";
  pub const COMPLETED: &str = "Completed";
}

pub const ORDER_ID_PREFIX: &str = "MKS";

/// Keys owned by the server. Client-supplied values for them are dropped on intake.
pub const SERVER_KEYS: [&str; 4] = ["id", "status", "createdAt", "updatedAt"];

const ORDER_ID_MODULUS: i64 = 100_000_000;

fn default_status() -> String {
  status::PENDING.to_string()
}

/// A customer purchase submission.
///
/// Client fields (customer, product, shipping) are kept as an opaque map and
/// serialized flat next to the server-owned fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
  pub id: String,
  #[serde(default = "default_status")]
  pub status: String,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
  #[serde(flatten)]
  pub details: Map<String, Value>,
}

impl Order {
  /// Builds a freshly submitted order in `Pending` state.
  pub fn new(id: String, mut details: Map<String, Value>, now: DateTime<Utc>) -> Self {
    for key in SERVER_KEYS {
      details.remove(key);
    }
    Self {
      id,
      status: default_status(),
      created_at: now,
      updated_at: now,
      details,
    }
  }

  pub fn field(&self, key: &str) -> Option<&Value> {
    self.details.get(key)
  }

  pub fn field_str(&self, key: &str) -> Option<&str> {
    self.details.get(key).and_then(Value::as_str)
  }

  /// Renders a client field for tabular output. Missing and null fields are empty.
  pub fn field_display(&self, key: &str) -> String {
    match self.details.get(key) {
      None | Some(Value::Null) => String::new(),
      Some(Value::String(s)) => s.clone(),
      Some(other) => other.to_string(),
    }
  }

  /// The amount the customer pays: `finalTotal`, else `totalPrice`, else 0.
  /// Zero and unparseable amounts fall through to the next candidate.
  pub fn total_amount(&self) -> f64 {
    amount(self.field("finalTotal"))
      .or_else(|| amount(self.field("totalPrice")))
      .unwrap_or(0.0)
  }

  pub fn set_status(&mut self, status: &str, now: DateTime<Utc>) {
    self.status = status.to_string();
    self.updated_at = now;
  }
}

fn amount(value: Option<&Value>) -> Option<f64> {
  let parsed = match value? {
    Value::Number(n) => n.as_f64(),
    Value::String(s) => s.trim().parse::<f64>().ok(),
    _ => None,
  }?;
  (parsed != 0.0 && parsed.is_finite()).then_some(parsed)
}

/// Derives an order id from the last eight digits of the Unix time in
/// milliseconds, stepping forward past ids that are already taken.
pub fn next_order_id(now: DateTime<Utc>, taken: &HashSet<&str>) -> String {
  let mut counter = now.timestamp_millis().rem_euclid(ORDER_ID_MODULUS);
  loop {
    let candidate = format!("{}{:08}", ORDER_ID_PREFIX, counter);
    if !taken.contains(candidate.as_str()) {
      return candidate;
    }
    counter = (counter + 1) % ORDER_ID_MODULUS;
  }
}
