use std::future::Future;
use std::sync::Arc;

use chrono::Utc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::config::UsersLifecycleConfig;
use crate::contract::model::{NewUser, User};
use crate::domain::error::DomainError;
use crate::domain::events::UserLifecycleEvent;
use crate::domain::ports::EventPublisher;
use crate::domain::repo::UsersRepository;

/// Domain service with business rules for the user lifecycle.
/// Stateless between calls; depends only on its ports, not on infra types.
#[derive(Clone)]
pub struct Service {
    repo: Arc<dyn UsersRepository>,
    events: Arc<dyn EventPublisher<UserLifecycleEvent>>,
    config: UsersLifecycleConfig,
}

impl Service {
    /// Create a service with dependencies.
    pub fn new(
        repo: Arc<dyn UsersRepository>,
        events: Arc<dyn EventPublisher<UserLifecycleEvent>>,
        config: UsersLifecycleConfig,
    ) -> Self {
        Self {
            repo,
            events,
            config,
        }
    }

    #[instrument(
        name = "users_lifecycle.service.create_user",
        skip(self, cancel),
        fields(email = %new_user.email)
    )]
    pub async fn create_user(
        &self,
        new_user: NewUser,
        cancel: &CancellationToken,
    ) -> Result<User, DomainError> {
        info!("Creating new user");

        self.validate_new_user(&new_user)?;

        let user = User {
            id: Uuid::new_v4(),
            email: new_user.email,
            display_name: new_user.display_name,
            is_active: true,
            created_at: Utc::now(),
        };

        // No duplicate-email detection here: if the repository enforces
        // uniqueness, its failure propagates unchanged.
        self.guarded(cancel, self.repo.insert(user.clone(), cancel))
            .await?;

        self.events.publish(&UserLifecycleEvent::Created {
            id: user.id,
            at: user.created_at,
        });

        info!("Successfully created user with id={}", user.id);
        Ok(user)
    }

    /// Absence is a value, not an error.
    #[instrument(
        name = "users_lifecycle.service.get_user",
        skip(self, cancel),
        fields(user_id = %id)
    )]
    pub async fn get_user(
        &self,
        id: Uuid,
        cancel: &CancellationToken,
    ) -> Result<Option<User>, DomainError> {
        debug!("Getting user by id");

        let user = self
            .guarded(cancel, self.repo.find_by_id(id, cancel))
            .await?;

        debug!(found = user.is_some(), "Lookup finished");
        Ok(user)
    }

    /// Deactivating a missing user is a no-op, not a failure.
    #[instrument(
        name = "users_lifecycle.service.deactivate_user",
        skip(self, cancel),
        fields(user_id = %id)
    )]
    pub async fn deactivate_user(
        &self,
        id: Uuid,
        cancel: &CancellationToken,
    ) -> Result<(), DomainError> {
        info!("Deactivating user");

        let Some(mut user) = self
            .guarded(cancel, self.repo.find_by_id(id, cancel))
            .await?
        else {
            warn!("User not found, skipping deactivation");
            return Ok(());
        };

        // Repeated deactivation must not touch the repository or
        // re-publish the event.
        if !user.is_active {
            debug!("User already inactive, nothing to do");
            return Ok(());
        }

        user.is_active = false;
        self.guarded(cancel, self.repo.update(user, cancel)).await?;

        self.events
            .publish(&UserLifecycleEvent::Deactivated { id, at: Utc::now() });

        info!("Successfully deactivated user");
        Ok(())
    }

    /// Race a delegated repository call against the cancellation token.
    /// Checked on entry as well, so a pre-cancelled token never reaches
    /// the repository.
    async fn guarded<T>(
        &self,
        cancel: &CancellationToken,
        call: impl Future<Output = anyhow::Result<T>>,
    ) -> Result<T, DomainError> {
        if cancel.is_cancelled() {
            return Err(DomainError::Cancelled);
        }
        tokio::select! {
            _ = cancel.cancelled() => Err(DomainError::Cancelled),
            res = call => res.map_err(DomainError::Repository),
        }
    }

    // --- validation helpers ---

    fn validate_new_user(&self, new_user: &NewUser) -> Result<(), DomainError> {
        if new_user.email.trim().is_empty() {
            return Err(DomainError::MissingEmail);
        }
        if !new_user.email.ends_with(&self.config.allowed_email_domain) {
            return Err(DomainError::domain_not_allowed(
                &new_user.email,
                &self.config.allowed_email_domain,
            ));
        }
        Ok(())
    }
}
