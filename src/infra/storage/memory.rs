use async_trait::async_trait;
use dashmap::DashMap;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use crate::contract::model::User;
use crate::domain::repo::UsersRepository;

/// In-memory `UsersRepository` adapter backed by a concurrent map.
///
/// Consistency: operations on distinct ids are isolated by the map's
/// sharded locking; concurrent updates to the same id are
/// last-writer-wins. Email uniqueness is enforced at insert time.
#[derive(Debug, Default)]
pub struct InMemoryUsersRepository {
    users: DashMap<Uuid, User>,
}

impl InMemoryUsersRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[async_trait]
impl UsersRepository for InMemoryUsersRepository {
    async fn insert(&self, user: User, _cancel: &CancellationToken) -> anyhow::Result<()> {
        if self.users.iter().any(|entry| entry.email == user.email) {
            anyhow::bail!("user with email '{}' already exists", user.email);
        }
        self.users.insert(user.id, user);
        Ok(())
    }

    async fn find_by_id(
        &self,
        id: Uuid,
        _cancel: &CancellationToken,
    ) -> anyhow::Result<Option<User>> {
        Ok(self.users.get(&id).map(|entry| entry.clone()))
    }

    async fn update(&self, user: User, _cancel: &CancellationToken) -> anyhow::Result<()> {
        match self.users.get_mut(&user.id) {
            Some(mut entry) => {
                *entry = user;
                Ok(())
            }
            None => anyhow::bail!("user not found: {}", user.id),
        }
    }
}
