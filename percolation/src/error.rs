use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PercolationError {
    #[error("grid size must be positive, got {0}")]
    InvalidGridSize(usize),
    #[error("number of trials must be positive, got {0}")]
    InvalidTrialCount(usize),
}
