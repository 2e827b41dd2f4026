use thiserror::Error;

/// Domain-specific errors using thiserror
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Email is required")]
    MissingEmail,

    #[error("Email domain not allowed: '{email}' (allowed: {allowed})")]
    DomainNotAllowed { email: String, allowed: String },

    #[error("Operation cancelled")]
    Cancelled,

    /// Repository collaborator failure, carried unchanged. Not retried,
    /// not translated; transient-vs-permanent semantics belong to the
    /// collaborator.
    #[error(transparent)]
    Repository(#[from] anyhow::Error),
}

impl DomainError {
    pub fn domain_not_allowed(email: impl Into<String>, allowed: impl Into<String>) -> Self {
        Self::DomainNotAllowed {
            email: email.into(),
            allowed: allowed.into(),
        }
    }
}
