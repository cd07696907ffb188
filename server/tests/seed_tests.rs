// tests/seed_tests.rs
mod common;

use std::sync::Arc;

use common::*;
use orderdesk::{MemoryStore, UserRepository};
use orderdesk_server::services::{auth_service, seed_service};

#[actix_web::test]
async fn test_default_admin_is_created_once() {
  setup_tracing();
  let users = UserRepository::new(Arc::new(MemoryStore::new()));

  assert!(seed_service::ensure_default_admin(&users, "admin", "admin123").await.unwrap());
  assert!(!seed_service::ensure_default_admin(&users, "admin", "other").await.unwrap());

  let all = users.all().await.unwrap();
  assert_eq!(all.len(), 1);
  assert_eq!(all[0].role, "admin");
  assert_ne!(all[0].password_hash, "admin123", "password is stored hashed");
  assert!(auth_service::verify_password(&all[0].password_hash, "admin123").unwrap());
}
