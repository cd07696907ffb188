// server/src/web/handlers/order_handlers.rs

use actix_web::http::header::{ContentDisposition, DispositionParam, DispositionType};
use actix_web::{web, HttpResponse};
use orderdesk::{ExportFormat, OrderQuery};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::state::AppState;
use crate::web::extractors::AuthenticatedAdmin;

#[derive(Deserialize, Debug)]
pub struct UpdateOrderPayload {
  pub status: Option<String>,
}

#[instrument(name = "handler::create_order", skip(app_state, req_payload))]
pub async fn create_order_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<Value>,
) -> Result<HttpResponse, AppError> {
  let details = match req_payload.into_inner() {
    Value::Object(map) => map,
    _ => return Err(AppError::Validation("Order payload must be a JSON object".to_string())),
  };

  let order = app_state.orders.create(details).await?;
  info!(order_id = %order.id, "Order received.");

  Ok(HttpResponse::Created().json(json!({
      "success": true,
      "message": "Order received successfully",
      "orderId": order.id,
      "order": order,
  })))
}

#[instrument(name = "handler::list_orders", skip(app_state, admin), fields(admin = %admin.username))]
pub async fn list_orders_handler(
  app_state: web::Data<AppState>,
  admin: AuthenticatedAdmin,
  query: web::Query<OrderQuery>,
) -> Result<HttpResponse, AppError> {
  let page = app_state.orders.list(&query).await?;
  info!(returned = page.orders.len(), total = page.pagination.total, "Orders listed.");

  Ok(HttpResponse::Ok().json(json!({
      "success": true,
      "orders": page.orders,
      "pagination": page.pagination,
  })))
}

#[instrument(name = "handler::get_order", skip(app_state, _admin, path), fields(order_id = %path.as_ref()))]
pub async fn get_order_handler(
  app_state: web::Data<AppState>,
  _admin: AuthenticatedAdmin,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let order = app_state.orders.get(&path.into_inner()).await?;
  Ok(HttpResponse::Ok().json(json!({
      "success": true,
      "order": order,
  })))
}

#[instrument(
    name = "handler::update_order",
    skip(app_state, admin, path, req_payload),
    fields(order_id = %path.as_ref(), admin = %admin.username)
)]
pub async fn update_order_handler(
  app_state: web::Data<AppState>,
  admin: AuthenticatedAdmin,
  path: web::Path<String>,
  req_payload: web::Json<UpdateOrderPayload>,
) -> Result<HttpResponse, AppError> {
  let status = req_payload
    .status
    .as_deref()
    .map(str::trim)
    .filter(|s| !s.is_empty())
    .ok_or_else(|| AppError::Validation("Status is required".to_string()))?;

  let order = app_state.orders.update_status(&path.into_inner(), status).await?;
  info!(status = %order.status, "Order updated.");

  Ok(HttpResponse::Ok().json(json!({
      "success": true,
      "message": "Order updated successfully",
      "order": order,
  })))
}

#[instrument(
    name = "handler::delete_order",
    skip(app_state, admin, path),
    fields(order_id = %path.as_ref(), admin = %admin.username)
)]
pub async fn delete_order_handler(
  app_state: web::Data<AppState>,
  admin: AuthenticatedAdmin,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let removed = app_state.orders.delete(&path.into_inner()).await?;
  info!(order_id = %removed.id, "Order deleted.");

  Ok(HttpResponse::Ok().json(json!({
      "success": true,
      "message": "Order deleted successfully",
  })))
}

#[instrument(name = "handler::export_orders", skip(app_state, _admin, path, query), fields(format = %path.as_ref()))]
pub async fn export_orders_handler(
  app_state: web::Data<AppState>,
  _admin: AuthenticatedAdmin,
  path: web::Path<String>,
  query: web::Query<OrderQuery>,
) -> Result<HttpResponse, AppError> {
  let format: ExportFormat = path.into_inner().parse()?;
  let orders = app_state.orders.select(&query).await?;
  let body = format.render(&orders)?;
  info!(count = orders.len(), bytes = body.len(), "Orders exported.");

  Ok(
    HttpResponse::Ok()
      .content_type(format.content_type())
      .insert_header(ContentDisposition {
        disposition: DispositionType::Attachment,
        parameters: vec![DispositionParam::Filename(format.file_name().to_string())],
      })
      .body(body),
  )
}
