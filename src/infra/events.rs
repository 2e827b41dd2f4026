use tracing::debug;

use crate::domain::events::UserLifecycleEvent;
use crate::domain::ports::EventPublisher;

/// Publishes lifecycle events into the tracing pipeline; fire-and-forget.
#[derive(Debug, Clone, Default)]
pub struct LogEventPublisher;

impl EventPublisher<UserLifecycleEvent> for LogEventPublisher {
    fn publish(&self, event: &UserLifecycleEvent) {
        debug!(?event, "user lifecycle event");
    }
}

/// Drops every event; for wiring a service without observers.
#[derive(Debug, Clone, Default)]
pub struct NullEventPublisher;

impl<E> EventPublisher<E> for NullEventPublisher {
    fn publish(&self, _event: &E) {}
}
