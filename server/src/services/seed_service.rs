// server/src/services/seed_service.rs

use orderdesk::{User, UserRepository};
use tracing::{info, instrument};

use crate::errors::Result;
use crate::services::auth_service;

/// Creates the default admin when the user collection is empty.
/// Returns whether a user was created.
#[instrument(name = "seed_service::ensure_default_admin", skip(users, password))]
pub async fn ensure_default_admin(users: &UserRepository, username: &str, password: &str) -> Result<bool> {
  if !users.is_empty().await? {
    info!("Users already present; skipping default admin.");
    return Ok(false);
  }

  let password_hash = auth_service::hash_password(password)?;
  users.insert(User::admin(username, password_hash)).await?;
  info!("Default admin user created.");
  Ok(true)
}
