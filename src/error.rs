use thiserror::Error;

/// Errors returned by [`select`](crate::select) and [`sum_selected`](crate::sum_selected).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectError {
    #[error("input costs slice is empty")]
    EmptyInput,

    #[error("NaN error, not a valid number (position {index})")]
    InvalidNumber { index: usize },

    #[error("the length of the costs and the flags are different: {costs} costs, {flags} flags")]
    LengthMismatch { costs: usize, flags: usize },
}

