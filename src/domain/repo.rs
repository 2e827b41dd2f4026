use crate::contract::model::User;
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

/// Port for the domain layer: persistence operations the domain needs.
/// Object-safe and async-friendly via `async_trait`.
///
/// Concurrency contract: concurrent calls against distinct ids must not
/// corrupt each other's data. The policy for concurrent updates to the
/// *same* id (last-writer-wins, optimistic rejection, ...) is the
/// adapter's to define and document.
#[async_trait]
pub trait UsersRepository: Send + Sync {
    /// Insert a fully-formed domain user.
    ///
    /// Service computes id/timestamps/validation; repo persists. Email
    /// uniqueness, if enforced at all, is enforced here.
    async fn insert(&self, user: User, cancel: &CancellationToken) -> anyhow::Result<()>;

    /// Load a user by id.
    async fn find_by_id(
        &self,
        id: Uuid,
        cancel: &CancellationToken,
    ) -> anyhow::Result<Option<User>>;

    /// Update an existing user (by primary key in `user.id`).
    async fn update(&self, user: User, cancel: &CancellationToken) -> anyhow::Result<()>;
}
