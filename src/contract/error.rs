use thiserror::Error;

/// Errors that are safe to expose to other modules
#[derive(Error, Debug)]
pub enum UsersLifecycleError {
    /// Required input is missing or structurally invalid; never retried.
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// A business rule rejected the request; never retried.
    #[error("Policy violation: {message}")]
    PolicyViolation { message: String },

    /// The caller's cancellation token fired before the operation finished.
    #[error("Operation cancelled")]
    Cancelled,

    /// Failure surfaced by the repository collaborator, propagated unchanged.
    #[error(transparent)]
    Repository(anyhow::Error),
}

impl UsersLifecycleError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    pub fn policy_violation(message: impl Into<String>) -> Self {
        Self::PolicyViolation {
            message: message.into(),
        }
    }
}

impl From<crate::domain::error::DomainError> for UsersLifecycleError {
    fn from(domain_error: crate::domain::error::DomainError) -> Self {
        use crate::domain::error::DomainError::*;
        match domain_error {
            MissingEmail => Self::invalid_argument("Email is required"),
            DomainNotAllowed { email, allowed } => Self::policy_violation(format!(
                "Email domain not allowed: '{}' (allowed: {})",
                email, allowed
            )),
            Cancelled => Self::Cancelled,
            Repository(e) => Self::Repository(e),
        }
    }
}
