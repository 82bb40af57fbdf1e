//! In-Memory User Repository

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::Arc;

use crate::application::ports::{RepositoryError, UserRecord, UserRepositoryPort};

/// 内存用户仓储
///
/// 以 name 为 key，entry API 保证唯一性检查与插入是原子的
pub struct InMemoryUserRepository {
    users: DashMap<String, UserRecord>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: DashMap::new(),
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepositoryPort for InMemoryUserRepository {
    async fn insert(&self, user: &UserRecord) -> Result<(), RepositoryError> {
        match self.users.entry(user.name.clone()) {
            Entry::Occupied(_) => Err(RepositoryError::Duplicate("name".to_string())),
            Entry::Vacant(entry) => {
                entry.insert(user.clone());
                tracing::debug!(user_id = %user.id, "User stored in memory");
                Ok(())
            }
        }
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<UserRecord>, RepositoryError> {
        Ok(self.users.get(name).map(|u| u.clone()))
    }

    async fn find_by_access_token(
        &self,
        token: &str,
    ) -> Result<Option<UserRecord>, RepositoryError> {
        Ok(self
            .users
            .iter()
            .find(|u| u.access_token == token)
            .map(|u| u.value().clone()))
    }
}
