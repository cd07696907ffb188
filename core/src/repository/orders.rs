// core/src/repository/orders.rs

use std::collections::HashSet;
use std::sync::Arc;

use chrono::Utc;
use serde_json::{Map, Value};
use tracing::{debug, info, instrument, warn};

use crate::dashboard::{summarize, DashboardSummary};
use crate::error::{OrderDeskError, OrderDeskResult};
use crate::model::order::next_order_id;
use crate::model::Order;
use crate::query::{OrderPage, OrderQuery};
use crate::store::{read_collection, write_collection, Document, DocumentStore};

#[derive(Clone)]
pub struct OrderRepository {
  store: Arc<dyn DocumentStore>,
}

impl OrderRepository {
  pub fn new(store: Arc<dyn DocumentStore>) -> Self {
    Self { store }
  }

  pub async fn all(&self) -> OrderDeskResult<Vec<Order>> {
    read_collection(self.store.as_ref(), Document::Orders).await
  }

  async fn save(&self, orders: &[Order]) -> OrderDeskResult<()> {
    write_collection(self.store.as_ref(), Document::Orders, orders).await
  }

  /// Appends a new `Pending` order built from the client's fields and persists
  /// the collection before returning it.
  #[instrument(name = "order_repository::create", skip(self, details), fields(field_count = details.len()))]
  pub async fn create(&self, details: Map<String, Value>) -> OrderDeskResult<Order> {
    let mut orders = self.all().await?;
    let now = Utc::now();
    let id = {
      let taken: HashSet<&str> = orders.iter().map(|o| o.id.as_str()).collect();
      next_order_id(now, &taken)
    };

    let order = Order::new(id, details, now);
    orders.push(order.clone());
    self.save(&orders).await?;

    info!(order_id = %order.id, total = orders.len(), "Order stored.");
    Ok(order)
  }

  pub async fn find(&self, id: &str) -> OrderDeskResult<Option<Order>> {
    Ok(self.all().await?.into_iter().find(|o| o.id == id))
  }

  pub async fn get(&self, id: &str) -> OrderDeskResult<Order> {
    self
      .find(id)
      .await?
      .ok_or_else(|| OrderDeskError::OrderNotFound(id.to_string()))
  }

  #[instrument(name = "order_repository::update_status", skip(self))]
  pub async fn update_status(&self, id: &str, status: &str) -> OrderDeskResult<Order> {
    let status = status.trim();
    if status.is_empty() {
      return Err(OrderDeskError::InvalidInput("Status must not be empty.".to_string()));
    }

    let mut orders = self.all().await?;
    let order = match orders.iter_mut().find(|o| o.id == id) {
      Some(order) => order,
      None => {
        warn!("Status update for unknown order.");
        return Err(OrderDeskError::OrderNotFound(id.to_string()));
      }
    };
    order.set_status(status, Utc::now());
    let updated = order.clone();

    self.save(&orders).await?;
    info!(order_id = %updated.id, status = %updated.status, "Order status updated.");
    Ok(updated)
  }

  #[instrument(name = "order_repository::delete", skip(self))]
  pub async fn delete(&self, id: &str) -> OrderDeskResult<Order> {
    let mut orders = self.all().await?;
    let position = match orders.iter().position(|o| o.id == id) {
      Some(position) => position,
      None => {
        warn!("Delete requested for unknown order.");
        return Err(OrderDeskError::OrderNotFound(id.to_string()));
      }
    };
    let removed = orders.remove(position);

    self.save(&orders).await?;
    info!(order_id = %removed.id, remaining = orders.len(), "Order deleted.");
    Ok(removed)
  }

  pub async fn list(&self, query: &OrderQuery) -> OrderDeskResult<OrderPage> {
    let page = query.paginate(self.all().await?);
    debug!(returned = page.orders.len(), total = page.pagination.total, "Orders listed.");
    Ok(page)
  }

  /// Filtered and sorted, without paging.
  pub async fn select(&self, query: &OrderQuery) -> OrderDeskResult<Vec<Order>> {
    Ok(query.select(self.all().await?))
  }

  pub async fn dashboard(&self) -> OrderDeskResult<DashboardSummary> {
    Ok(summarize(&self.all().await?))
  }
}
