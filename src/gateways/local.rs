use async_trait::async_trait;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use crate::contract::{
    client::UsersLifecycleApi,
    error::UsersLifecycleError,
    model::{NewUser, User},
};
use crate::domain::service::Service;

/// Local implementation of the UsersLifecycleApi trait that delegates to the domain service
pub struct UsersLifecycleLocalClient {
    service: Arc<Service>,
}

impl UsersLifecycleLocalClient {
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl UsersLifecycleApi for UsersLifecycleLocalClient {
    async fn create_user(
        &self,
        new_user: NewUser,
        cancel: &CancellationToken,
    ) -> Result<User, UsersLifecycleError> {
        self.service
            .create_user(new_user, cancel)
            .await
            .map_err(Into::into)
    }

    async fn get_user(
        &self,
        id: Uuid,
        cancel: &CancellationToken,
    ) -> Result<Option<User>, UsersLifecycleError> {
        self.service.get_user(id, cancel).await.map_err(Into::into)
    }

    async fn deactivate_user(
        &self,
        id: Uuid,
        cancel: &CancellationToken,
    ) -> Result<(), UsersLifecycleError> {
        self.service
            .deactivate_user(id, cancel)
            .await
            .map_err(Into::into)
    }
}
