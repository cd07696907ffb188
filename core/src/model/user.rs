// core/src/model/user.rs

use serde::{Deserialize, Serialize};

pub const ROLE_ADMIN: &str = "admin";

/// An admin account. `password_hash` is persisted under the `password` key and
/// always holds a PHC-format hash string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
  pub username: String,
  #[serde(rename = "password")]
  pub password_hash: String,
  pub role: String,
}

impl User {
  pub fn admin(username: impl Into<String>, password_hash: impl Into<String>) -> Self {
    Self {
      username: username.into(),
      password_hash: password_hash.into(),
      role: ROLE_ADMIN.to_string(),
    }
  }
}
