// core/src/dashboard.rs

use serde::Serialize;

use crate::model::order::status;
use crate::model::Order;
use crate::query::sort_by_recency;

pub const RECENT_ORDER_COUNT: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
  pub total_orders: usize,
  pub pending_orders: usize,
  pub completed_orders: usize,
  pub total_revenue: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
  pub stats: DashboardStats,
  pub recent_orders: Vec<Order>,
}

/// Aggregates admin dashboard figures. Status counts use exact matches.
pub fn summarize(orders: &[Order]) -> DashboardSummary {
  let stats = DashboardStats {
    total_orders: orders.len(),
    pending_orders: orders.iter().filter(|o| o.status == status::PENDING).count(),
    completed_orders: orders.iter().filter(|o| o.status == status::COMPLETED).count(),
    total_revenue: orders.iter().map(Order::total_amount).sum(),
  };

  let mut recent = orders.to_vec();
  sort_by_recency(&mut recent);
  recent.truncate(RECENT_ORDER_COUNT);

  DashboardSummary {
    stats,
    recent_orders: recent,
  }
}
