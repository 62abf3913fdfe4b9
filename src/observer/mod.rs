pub mod mock;
pub mod noop;
pub mod tracing_observer;
pub mod variant;

pub use mock::MockObserver;
pub use noop::NoopObserver;
pub use tracing_observer::TracingObserver;
pub use variant::ObserverVariant;
