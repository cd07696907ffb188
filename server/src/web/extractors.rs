// server/src/web/extractors.rs

use actix_web::http::header::AUTHORIZATION;
use actix_web::{web, FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};
use orderdesk::model::user::ROLE_ADMIN;
use tracing::warn;

use crate::errors::AppError;
use crate::state::AppState;

/// The admin identified by a valid `Authorization: Bearer <token>` header.
///
/// A missing token is rejected with 401, an invalid or expired one with 403.
#[derive(Debug, Clone)]
pub struct AuthenticatedAdmin {
  pub username: String,
  pub role: String,
}

pub fn bearer_token(req: &HttpRequest) -> Option<&str> {
  let header = req.headers().get(AUTHORIZATION)?.to_str().ok()?;
  let mut parts = header.split_whitespace();
  let scheme = parts.next()?;
  let token = parts.next()?;
  scheme.eq_ignore_ascii_case("bearer").then_some(token)
}

fn authenticate(req: &HttpRequest) -> Result<AuthenticatedAdmin, AppError> {
  let token = bearer_token(req).ok_or_else(|| {
    warn!(path = %req.path(), "Request without access token.");
    AppError::Auth("Access token required".to_string())
  })?;

  let state = req
    .app_data::<web::Data<AppState>>()
    .ok_or_else(|| AppError::Internal("Application state is not configured".to_string()))?;

  let claims = state.tokens.verify(token)?;
  if claims.role != ROLE_ADMIN {
    warn!(username = %claims.username, role = %claims.role, "Token lacks admin role.");
    return Err(AppError::Forbidden("Admin access required".to_string()));
  }

  Ok(AuthenticatedAdmin {
    username: claims.username,
    role: claims.role,
  })
}

impl FromRequest for AuthenticatedAdmin {
  type Error = AppError;
  type Future = Ready<Result<Self, Self::Error>>;

  fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
    ready(authenticate(req))
  }
}
