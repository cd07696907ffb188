// server/src/web/handlers/auth_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info, instrument, warn};

use crate::errors::AppError;
use crate::services::auth_service;
use crate::state::AppState;

// --- Request DTOs ---
// Fields are optional so that a missing one gets the same 400 as an empty one.
#[derive(Deserialize, Debug)]
pub struct LoginRequestPayload {
  pub username: Option<String>,
  pub password: Option<String>,
}

fn invalid_credentials() -> AppError {
  AppError::Auth("Invalid credentials".to_string())
}

// --- Handler Implementations ---

#[instrument(
    name = "handler::login",
    skip(app_state, req_payload),
    fields(req_username = req_payload.username.as_deref().unwrap_or(""))
)]
pub async fn login_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<LoginRequestPayload>,
) -> Result<HttpResponse, AppError> {
  let username = req_payload.username.as_deref().map(str::trim).unwrap_or("");
  let password = req_payload.password.as_deref().unwrap_or("");
  if username.is_empty() || password.is_empty() {
    return Err(AppError::Validation("Username and password required".to_string()));
  }

  let user = match app_state.users.find_by_username(username).await? {
    Some(user) => user,
    None => {
      warn!("Login attempt for unknown user.");
      return Err(invalid_credentials());
    }
  };

  match auth_service::verify_password(&user.password_hash, password) {
    Ok(true) => {}
    Ok(false) => {
      warn!("Password mismatch on login.");
      return Err(invalid_credentials());
    }
    Err(verify_err) => {
      // Unusable stored hash: fail closed.
      error!(error = %verify_err, "Stored credentials could not be checked.");
      return Err(invalid_credentials());
    }
  }

  let issued = app_state.tokens.issue(&user)?;
  info!(role = %user.role, "Login successful.");

  Ok(HttpResponse::Ok().json(json!({
      "success": true,
      "message": "Login successful",
      "token": issued.token,
      "expiresAt": issued.expires_at.to_rfc3339(),
      "user": {
          "username": user.username,
          "role": user.role,
      },
  })))
}
