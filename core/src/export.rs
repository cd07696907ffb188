// core/src/export.rs

//! Download formats for the admin export.

use std::fmt;
use std::str::FromStr;

use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::error::{OrderDeskError, OrderDeskResult};
use crate::model::order::status;
use crate::model::Order;

pub const CSV_HEADERS: [&str; 12] = [
  "Order ID",
  "Customer Name",
  "Phone",
  "Email",
  "Product",
  "Material",
  "Size",
  "Color",
  "Quantity",
  "Total Price",
  "Status",
  "Created At",
];

const CREATED_AT_FORMAT: &str = "%d/%m/%Y %H:%M";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
  Csv,
  Json,
}

impl ExportFormat {
  pub fn content_type(&self) -> &'static str {
    match self {
      ExportFormat::Csv => "text/csv; charset=utf-8",
      ExportFormat::Json => "application/json",
    }
  }

  pub fn file_name(&self) -> &'static str {
    match self {
      ExportFormat::Csv => "orders.csv",
      ExportFormat::Json => "orders.json",
    }
  }

  pub fn render(&self, orders: &[Order]) -> OrderDeskResult<Vec<u8>> {
    match self {
      ExportFormat::Csv => orders_to_csv(orders).map(String::into_bytes),
      ExportFormat::Json => serde_json::to_vec_pretty(orders).map_err(|source| OrderDeskError::Json {
        document: "export".to_string(),
        source,
      }),
    }
  }
}

impl FromStr for ExportFormat {
  type Err = OrderDeskError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_ascii_lowercase().as_str() {
      "csv" => Ok(ExportFormat::Csv),
      "json" => Ok(ExportFormat::Json),
      other => Err(OrderDeskError::InvalidInput(format!(
        "Unsupported export format '{}'. Use 'csv' or 'json'.",
        other
      ))),
    }
  }
}

impl fmt::Display for ExportFormat {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ExportFormat::Csv => f.write_str("csv"),
      ExportFormat::Json => f.write_str("json"),
    }
  }
}

pub const FALLBACK_PRODUCT_NAME: &str = "Produk Custom";

/// Human-readable product label from the storefront's `productType` codes.
/// Unknown or missing codes get a generic label.
pub fn product_name(order: &Order) -> &'static str {
  match order.field_str("productType") {
    Some("kaos") => "Kaos Custom",
    Some("jaket") => "Jaket Custom",
    Some("lusinan") | Some("jaket_lusinan") => "Paket Lusinan",
    _ => FALLBACK_PRODUCT_NAME,
  }
}

fn format_amount(amount: f64) -> String {
  if amount.fract() == 0.0 {
    format!("{:.0}", amount)
  } else {
    format!("{}", amount)
  }
}

/// One quoted row per order under `CSV_HEADERS`.
pub fn orders_to_csv(orders: &[Order]) -> OrderDeskResult<String> {
  let mut writer = WriterBuilder::new()
    .quote_style(QuoteStyle::Always)
    .terminator(Terminator::Any(b'\n'))
    .from_writer(Vec::new());

  writer.write_record(CSV_HEADERS)?;
  for order in orders {
    let status_label = if order.status.is_empty() {
      status::PENDING.to_string()
    } else {
      order.status.clone()
    };
    writer.write_record([
      order.id.clone(),
      order.field_display("customerName"),
      order.field_display("phoneNumber"),
      order.field_display("email"),
      product_name(order).to_string(),
      order.field_display("materialName"),
      order.field_display("size"),
      order.field_display("colorName"),
      order.field_display("quantity"),
      format_amount(order.total_amount()),
      status_label,
      order.created_at.format(CREATED_AT_FORMAT).to_string(),
    ])?;
  }

  let bytes = writer
    .into_inner()
    .map_err(|e| OrderDeskError::Csv(csv::Error::from(e.into_error())))?;
  String::from_utf8(bytes).map_err(|e| OrderDeskError::InvalidInput(format!("Export produced invalid UTF-8: {}", e)))
}
