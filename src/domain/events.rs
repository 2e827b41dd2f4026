use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Transport-agnostic domain event.
#[derive(Debug, Clone)]
pub enum UserLifecycleEvent {
    Created { id: Uuid, at: DateTime<Utc> },
    Deactivated { id: Uuid, at: DateTime<Utc> },
}
