// server/src/web/routes.rs

use actix_web::error::{JsonPayloadError, PathError, QueryPayloadError};
use actix_web::{web, HttpRequest, HttpResponse};
use chrono::Utc;

use crate::errors::AppError;
use crate::web::handlers::{auth_handlers, dashboard_handlers, order_handlers};

async fn health_check_handler() -> HttpResponse {
  HttpResponse::Ok().json(serde_json::json!({
      "status": "OK",
      "timestamp": Utc::now().to_rfc3339(),
  }))
}

async fn endpoint_not_found_handler(req: HttpRequest) -> HttpResponse {
  tracing::debug!(path = %req.path(), method = %req.method(), "No API route matched.");
  HttpResponse::NotFound().json(serde_json::json!({ "success": false, "error": "Endpoint not found" }))
}

fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
  AppError::Validation(format!("Malformed JSON body: {}", err)).into()
}

fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
  AppError::Validation(format!("Invalid query parameters: {}", err)).into()
}

fn path_error_handler(err: PathError, _req: &HttpRequest) -> actix_web::Error {
  AppError::Validation(format!("Invalid path parameter: {}", err)).into()
}

// Known paths answer unsupported methods the same way unknown paths do.
fn api_resource(path: &str) -> actix_web::Resource {
  web::resource(path).default_service(web::to(endpoint_not_found_handler))
}

/// Mounts the `/api` surface. Called from `main.rs` and the integration tests.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg
    .app_data(web::JsonConfig::default().error_handler(json_error_handler))
    .app_data(web::QueryConfig::default().error_handler(query_error_handler))
    .app_data(web::PathConfig::default().error_handler(path_error_handler))
    .service(
      web::scope("/api")
        .service(api_resource("/health").route(web::get().to(health_check_handler)))
        .service(api_resource("/login").route(web::post().to(auth_handlers::login_handler)))
        .service(api_resource("/dashboard").route(web::get().to(dashboard_handlers::dashboard_handler)))
        .service(
          web::scope("/orders")
            .service(
              api_resource("")
                .route(web::post().to(order_handlers::create_order_handler))
                .route(web::get().to(order_handlers::list_orders_handler)),
            )
            .service(api_resource("/export/{format}").route(web::get().to(order_handlers::export_orders_handler)))
            .service(
              api_resource("/{id}")
                .route(web::get().to(order_handlers::get_order_handler))
                .route(web::put().to(order_handlers::update_order_handler))
                .route(web::delete().to(order_handlers::delete_order_handler)),
            )
            .default_service(web::to(endpoint_not_found_handler)),
        )
        .default_service(web::to(endpoint_not_found_handler)),
    );
}
