// core/src/repository/users.rs

use std::sync::Arc;

use tracing::{info, instrument};

use crate::error::{OrderDeskError, OrderDeskResult};
use crate::model::User;
use crate::store::{read_collection, write_collection, Document, DocumentStore};

#[derive(Clone)]
pub struct UserRepository {
  store: Arc<dyn DocumentStore>,
}

impl UserRepository {
  pub fn new(store: Arc<dyn DocumentStore>) -> Self {
    Self { store }
  }

  pub async fn all(&self) -> OrderDeskResult<Vec<User>> {
    read_collection(self.store.as_ref(), Document::Users).await
  }

  pub async fn is_empty(&self) -> OrderDeskResult<bool> {
    Ok(self.all().await?.is_empty())
  }

  pub async fn find_by_username(&self, username: &str) -> OrderDeskResult<Option<User>> {
    Ok(self.all().await?.into_iter().find(|u| u.username == username))
  }

  /// Adds a user. Usernames are unique.
  #[instrument(name = "user_repository::insert", skip(self, user), fields(username = %user.username, role = %user.role))]
  pub async fn insert(&self, user: User) -> OrderDeskResult<()> {
    let mut users = self.all().await?;
    if users.iter().any(|u| u.username == user.username) {
      return Err(OrderDeskError::InvalidInput(format!(
        "User '{}' already exists.",
        user.username
      )));
    }
    users.push(user);
    write_collection(self.store.as_ref(), Document::Users, &users).await?;
    info!("User stored.");
    Ok(())
  }
}
