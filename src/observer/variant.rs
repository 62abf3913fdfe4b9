use super::mock::MockObserver;
use super::noop::NoopObserver;
use super::tracing_observer::TracingObserver;
use crate::traits::Observer;
use crate::types::Stats;

/// Enum representing all possible observer implementations.
///
/// `Custom` carries any caller-provided [`Observer`].
pub enum ObserverVariant {
    Noop(NoopObserver),
    Mock(MockObserver),
    Tracing(TracingObserver),
    Custom(Box<dyn Observer>),
}

impl ObserverVariant {
    pub fn custom(observer: impl Observer + 'static) -> Self {
        ObserverVariant::Custom(Box::new(observer))
    }
}

impl Default for ObserverVariant {
    fn default() -> Self {
        ObserverVariant::Noop(NoopObserver)
    }
}

impl std::fmt::Debug for ObserverVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ObserverVariant").field(&self.name()).finish()
    }
}

impl From<NoopObserver> for ObserverVariant {
    fn from(inner: NoopObserver) -> Self {
        ObserverVariant::Noop(inner)
    }
}

impl From<MockObserver> for ObserverVariant {
    fn from(inner: MockObserver) -> Self {
        ObserverVariant::Mock(inner)
    }
}

impl From<TracingObserver> for ObserverVariant {
    fn from(inner: TracingObserver) -> Self {
        ObserverVariant::Tracing(inner)
    }
}

impl Observer for ObserverVariant {
    fn name(&self) -> &'static str {
        match self {
            ObserverVariant::Noop(inner) => inner.name(),
            ObserverVariant::Mock(inner) => inner.name(),
            ObserverVariant::Tracing(inner) => inner.name(),
            ObserverVariant::Custom(inner) => inner.name(),
        }
    }

    fn observe(&self, stats: &Stats) {
        match self {
            ObserverVariant::Noop(inner) => inner.observe(stats),
            ObserverVariant::Mock(inner) => inner.observe(stats),
            ObserverVariant::Tracing(inner) => inner.observe(stats),
            ObserverVariant::Custom(inner) => inner.observe(stats),
        }
    }
}
