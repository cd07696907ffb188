// server/src/services/token_service.rs

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use orderdesk::User;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::errors::AppError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessTokenClaims {
  pub username: String,
  pub role: String,
  pub iat: i64,
  pub exp: i64,
}

#[derive(Debug, Clone)]
pub struct IssuedToken {
  pub token: String,
  pub expires_at: DateTime<Utc>,
}

/// Signs and checks HS256 access tokens.
#[derive(Clone)]
pub struct TokenService {
  header: Header,
  validation: Validation,
  encoding_key: EncodingKey,
  decoding_key: DecodingKey,
  ttl: Duration,
}

impl TokenService {
  pub fn new(secret: &str, ttl: Duration) -> Self {
    Self {
      header: Header::new(Algorithm::HS256),
      validation: Validation::new(Algorithm::HS256),
      encoding_key: EncodingKey::from_secret(secret.as_bytes()),
      decoding_key: DecodingKey::from_secret(secret.as_bytes()),
      ttl,
    }
  }

  #[instrument(name = "token_service::issue", skip(self, user), fields(username = %user.username))]
  pub fn issue(&self, user: &User) -> Result<IssuedToken, AppError> {
    let expires_at = Utc::now() + self.ttl;
    let token = self.issue_with_exp(&user.username, &user.role, expires_at)?;
    debug!(%expires_at, "Access token issued.");
    Ok(IssuedToken { token, expires_at })
  }

  pub fn issue_with_exp(&self, username: &str, role: &str, expires_at: DateTime<Utc>) -> Result<String, AppError> {
    let claims = AccessTokenClaims {
      username: username.to_string(),
      role: role.to_string(),
      iat: Utc::now().timestamp(),
      exp: expires_at.timestamp(),
    };
    jsonwebtoken::encode(&self.header, &claims, &self.encoding_key).map_err(Into::into)
  }

  /// Checks signature and expiry. Any failure is reported as a forbidden token.
  pub fn verify(&self, token: &str) -> Result<AccessTokenClaims, AppError> {
    jsonwebtoken::decode::<AccessTokenClaims>(token, &self.decoding_key, &self.validation)
      .map(|data| data.claims)
      .map_err(|e| {
        warn!(error = %e, "Access token rejected.");
        AppError::Forbidden("Invalid token".to_string())
      })
  }
}
