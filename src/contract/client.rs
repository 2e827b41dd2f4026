use async_trait::async_trait;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use crate::contract::{
    error::UsersLifecycleError,
    model::{NewUser, User},
};

/// Public API trait for the users_lifecycle module that other modules can use
///
/// Every operation takes a caller-supplied cancellation token and observes
/// it cooperatively, including during the delegated repository call.
#[async_trait]
pub trait UsersLifecycleApi: Send + Sync {
    /// Create a new user; returns the record as constructed, not re-read.
    async fn create_user(
        &self,
        new_user: NewUser,
        cancel: &CancellationToken,
    ) -> Result<User, UsersLifecycleError>;

    /// Get a user by ID; absence is `None`, not an error.
    async fn get_user(
        &self,
        id: Uuid,
        cancel: &CancellationToken,
    ) -> Result<Option<User>, UsersLifecycleError>;

    /// Deactivate a user by ID; a missing user is a silent no-op.
    async fn deactivate_user(
        &self,
        id: Uuid,
        cancel: &CancellationToken,
    ) -> Result<(), UsersLifecycleError>;
}
