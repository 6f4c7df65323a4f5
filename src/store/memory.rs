use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::models::User;
use crate::store::{error::Result, CredentialStore};

/// In-process user store with the same semantics as [`PgUserStore`](super::PgUserStore)
#[derive(Default)]
pub struct MemoryUserStore {
    users: RwLock<Vec<User>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delete every user with this email, returning whether any existed
    pub async fn remove(&self, email: &str) -> bool {
        let mut users = self.users.write().await;
        let before = users.len();
        users.retain(|u| u.email != email);
        users.len() != before
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

#[async_trait]
impl CredentialStore for MemoryUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn insert(&self, user: &User) -> Result<()> {
        self.users.write().await.push(user.clone());
        Ok(())
    }
}
