// server/src/web/handlers/dashboard_handlers.rs

use actix_web::{web, HttpResponse};
use serde_json::json;
use tracing::instrument;

use crate::errors::AppError;
use crate::state::AppState;
use crate::web::extractors::AuthenticatedAdmin;

#[instrument(name = "handler::dashboard", skip(app_state, _admin))]
pub async fn dashboard_handler(
  app_state: web::Data<AppState>,
  _admin: AuthenticatedAdmin,
) -> Result<HttpResponse, AppError> {
  let summary = app_state.orders.dashboard().await?;
  Ok(HttpResponse::Ok().json(json!({
      "success": true,
      "stats": summary.stats,
      "recentOrders": summary.recent_orders,
  })))
}
