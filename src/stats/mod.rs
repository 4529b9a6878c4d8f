mod correlation;
mod reductions;

pub use correlation::pearson;
pub use reductions::{max, mean, sum};

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum StatsError {
    #[error("Cannot reduce an empty table")]
    EmptyInput,

    #[error("Correlation needs at least 2 points, got {points}")]
    InsufficientData { points: usize },

    #[error("Degenerate input: {0}")]
    DegenerateInput(&'static str),
}
