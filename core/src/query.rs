// core/src/query.rs

//! Listing queries over the order collection. Every query is a full scan.

use std::cmp::Ordering;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::model::Order;

pub const DEFAULT_PAGE_LIMIT: usize = 50;
pub const MAX_PAGE_LIMIT: usize = 500;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct OrderQuery {
  /// Exact status match, case-insensitive.
  pub status: Option<String>,
  /// Case-insensitive substring over the id, status, timestamps and every
  /// top-level string field.
  pub search: Option<String>,
  /// 1-based page number.
  pub page: Option<usize>,
  pub limit: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
  pub page: usize,
  pub limit: usize,
  pub total: usize,
  pub total_pages: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderPage {
  pub orders: Vec<Order>,
  pub pagination: Pagination,
}

fn non_blank(value: &Option<String>) -> Option<&str> {
  value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

// Same rendering serde gives the timestamps in stored documents.
fn timestamp(at: &DateTime<Utc>) -> String {
  at.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

fn search_hit(order: &Order, needle: &str) -> bool {
  let contains = |s: &str| s.to_lowercase().contains(needle);
  contains(&order.id)
    || contains(&order.status)
    || contains(&timestamp(&order.created_at))
    || contains(&timestamp(&order.updated_at))
    || order.details.values().filter_map(|v| v.as_str()).any(contains)
}

impl OrderQuery {
  pub fn page(&self) -> usize {
    self.page.unwrap_or(1).max(1)
  }

  pub fn limit(&self) -> usize {
    self.limit.unwrap_or(DEFAULT_PAGE_LIMIT).clamp(1, MAX_PAGE_LIMIT)
  }

  pub fn matches(&self, order: &Order) -> bool {
    if let Some(status) = non_blank(&self.status) {
      if !order.status.eq_ignore_ascii_case(status) {
        return false;
      }
    }
    if let Some(search) = non_blank(&self.search) {
      if !search_hit(order, &search.to_lowercase()) {
        return false;
      }
    }
    true
  }

  /// Filters and sorts without paging; used by export.
  pub fn select(&self, orders: Vec<Order>) -> Vec<Order> {
    let mut selected: Vec<Order> = orders.into_iter().filter(|o| self.matches(o)).collect();
    sort_by_recency(&mut selected);
    selected
  }

  pub fn paginate(&self, orders: Vec<Order>) -> OrderPage {
    let selected = self.select(orders);
    let page = self.page();
    let limit = self.limit();
    let total = selected.len();
    let total_pages = total.div_ceil(limit);
    let orders = selected.into_iter().skip((page - 1).saturating_mul(limit)).take(limit).collect();
    OrderPage {
      orders,
      pagination: Pagination {
        page,
        limit,
        total,
        total_pages,
      },
    }
  }
}

fn recency(a: &Order, b: &Order) -> Ordering {
  b.created_at.cmp(&a.created_at).then_with(|| b.id.cmp(&a.id))
}

/// Newest first; equal timestamps fall back to id, descending.
pub fn sort_by_recency(orders: &mut [Order]) {
  orders.sort_by(recency);
}
