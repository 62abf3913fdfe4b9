// Library exports for testing and external use

pub mod candidates;
pub mod config;
pub mod datasets;
pub mod error;
pub mod observer;
pub mod selector;
pub mod telemetry;
pub mod total;
pub mod traits;
pub mod types;

// Re-export commonly used types and traits
pub use candidates::BoundedCandidates;
pub use config::{DatasetKind, DemoConfig};
pub use error::SelectError;
pub use selector::{min_selection_size, select, select_with, SelectOptions};
pub use total::sum_selected;
pub use traits::Observer;
pub use types::{CostItem, Flag, Stats};

// Re-export observer implementations for convenience
pub use observer::{MockObserver, NoopObserver, ObserverVariant, TracingObserver};
