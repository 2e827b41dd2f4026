/// Output port: publish domain events (no knowledge of transport).
/// Fire-and-forget; implementations must never block or fail the caller.
pub trait EventPublisher<E>: Send + Sync + 'static {
    fn publish(&self, event: &E);
}
