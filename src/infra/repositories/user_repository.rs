//! User persistence port and the in-memory reference adapter.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::{Email, User};
use crate::errors::DomainResult;
use crate::types::PaginationParams;

/// User persistence port.
///
/// The core issues a single load-then-save round trip per use case;
/// transaction and locking semantics belong to the implementation.
#[cfg_attr(any(test, feature = "test-utils"), mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert or replace the aggregate, returning the persisted state
    async fn save(&self, user: User) -> DomainResult<User>;

    /// Find user by id
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<User>>;

    /// Find user by email
    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>>;

    /// Check whether a user with this id exists
    async fn exists_by_id(&self, id: Uuid) -> DomainResult<bool>;

    /// Check whether any user holds this email
    async fn exists_by_email(&self, email: &Email) -> DomainResult<bool>;

    /// Remove the aggregate
    async fn delete(&self, id: Uuid) -> DomainResult<()>;

    /// List one page of users plus the total count
    async fn find_all(&self, params: &PaginationParams) -> DomainResult<(Vec<User>, u64)>;
}

/// In-memory implementation of the persistence port.
///
/// Backs the integration tests; listing is ordered by creation time so
/// pagination is stable.
#[derive(Default)]
pub struct InMemoryUserStore {
    users: RwLock<HashMap<Uuid, User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserStore {
    async fn save(&self, user: User) -> DomainResult<User> {
        let mut users = self.users.write().await;
        users.insert(user.id(), user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email() == email).cloned())
    }

    async fn exists_by_id(&self, id: Uuid) -> DomainResult<bool> {
        let users = self.users.read().await;
        Ok(users.contains_key(&id))
    }

    async fn exists_by_email(&self, email: &Email) -> DomainResult<bool> {
        let users = self.users.read().await;
        Ok(users.values().any(|u| u.email() == email))
    }

    async fn delete(&self, id: Uuid) -> DomainResult<()> {
        let mut users = self.users.write().await;
        users.remove(&id);
        Ok(())
    }

    async fn find_all(&self, params: &PaginationParams) -> DomainResult<(Vec<User>, u64)> {
        let users = self.users.read().await;
        let mut all: Vec<User> = users.values().cloned().collect();
        all.sort_by_key(|u| (u.created_at(), u.id()));

        let total = all.len() as u64;
        let page = all
            .into_iter()
            .skip(params.offset() as usize)
            .take(params.limit() as usize)
            .collect();
        Ok((page, total))
    }
}
