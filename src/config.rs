use serde::{Deserialize, Serialize};

/// Configuration for the users_lifecycle module
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UsersLifecycleConfig {
    /// Suffix an email must end with to be accepted at creation time,
    /// e.g. "@example.com". Resolved once at service construction and
    /// held immutably for the service's lifetime.
    #[serde(default = "default_allowed_email_domain")]
    pub allowed_email_domain: String,
}

impl Default for UsersLifecycleConfig {
    fn default() -> Self {
        Self {
            allowed_email_domain: default_allowed_email_domain(),
        }
    }
}

fn default_allowed_email_domain() -> String {
    "@example.com".to_string()
}
