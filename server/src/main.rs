// server/src/main.rs

use std::sync::Arc;

use actix_web::{web as actix_data, App, HttpServer};
use anyhow::Context;
use orderdesk_server::services::seed_service;
use orderdesk_server::telemetry::{self, LogFormat};
use orderdesk_server::web::configure_app_routes;
use orderdesk_server::{AppConfig, AppState};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
  dotenvy::dotenv().ok();
  telemetry::init_tracing(LogFormat::from_env());

  tracing::info!("Starting order desk server...");

  // Load application configuration
  let app_config = match AppConfig::from_env() {
    Ok(cfg) => Arc::new(cfg),
    Err(e) => {
      tracing::error!(error = %e, "Failed to load application configuration.");
      return Err(anyhow::Error::new(e).context("Configuration error"));
    }
  };
  tracing::debug!(config = ?app_config, "Loaded config details");

  let app_state = AppState::from_config(app_config.clone()).context("Failed to open the storage backend")?;

  // Seed the default admin if configured
  if app_config.seed_db {
    seed_service::ensure_default_admin(
      &app_state.users,
      &app_config.default_admin_username,
      &app_config.default_admin_password,
    )
    .await
    .context("Failed to seed the default admin user")?;
  }

  let server_address = app_config.bind_address();
  tracing::info!("Attempting to bind server to {}...", server_address);

  HttpServer::new(move || {
    App::new()
      .app_data(actix_data::Data::new(app_state.clone())) // Share AppState with handlers
      .wrap(tracing_actix_web::TracingLogger::default()) // Actix middleware for tracing requests
      .configure(configure_app_routes)
  })
  .bind(&server_address)
  .with_context(|| format!("Failed to bind {}", server_address))?
  .run()
  .await
  .context("HTTP server terminated with an error")?;

  tracing::info!("Server stopped.");
  Ok(())
}
