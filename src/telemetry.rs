use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Initialize logging.
/// Honors `RUST_LOG`; defaults to `costfloor=info`.
pub fn init() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "costfloor=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
