mod chart;
pub mod format;
mod page;
mod plan;
mod resolve;

pub use chart::{
    AggregateField, Axis, ChartSpec, LabelFormat, SampleField, SortOrder, SourceTable, TextLabels,
};
pub use page::{Page, TopN};
pub use plan::{DataSlice, Kpi, ViewPlan};
pub use resolve::resolve;

use crate::dataset::{ContentRating, DatasetError};
use crate::stats::StatsError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ViewError {
    #[error("Unknown page: \"{0}\"")]
    UnknownPage(String),

    #[error("Top-N must be between {min} and {max}, got {0}", min = TopN::MIN, max = TopN::MAX)]
    TopNOutOfRange(usize),

    #[error("Missing aggregate for {} content", .0.label())]
    MissingAggregate(ContentRating),

    #[error(transparent)]
    Stats(#[from] StatsError),

    #[error(transparent)]
    Dataset(#[from] DatasetError),
}
