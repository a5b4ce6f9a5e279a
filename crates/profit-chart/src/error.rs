// File: crates/profit-chart/src/error.rs
// Summary: Error taxonomy for the prepare/render/report pipeline.

use thiserror::Error;

/// Everything the pipeline can fail with. Validation happens before any
/// rendering work; render and IO failures propagate to the caller
/// unchanged and are never retried.
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid dataset: {0}")]
    Validation(String),

    #[error("chart rendering failed: {0}")]
    Render(String),

    #[error("could not write chart output: {0}")]
    Io(#[from] std::io::Error),
}
