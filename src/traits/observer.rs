use crate::types::Stats;

/// Hook notified once per selection call with that call's [`Stats`].
///
/// Invoked synchronously on the caller's thread before `select_with`
/// returns, so a slow or blocking implementation delays the caller.
/// Implementations should be fast and non-blocking.
pub trait Observer: Send + Sync {
    /// Identifier for logging (e.g. "noop-observer", "tracing-observer").
    fn name(&self) -> &'static str;

    fn observe(&self, stats: &Stats);
}
