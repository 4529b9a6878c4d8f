use super::{ChartSpec, Page};
use crate::dataset::{CorrelationSample, ExplicitAggregate, Track};
use serde::{Deserialize, Serialize};

/// One KPI tile: label, formatted value, optional delta caption.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Kpi {
    pub label: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delta: Option<String>,
}

impl Kpi {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Kpi {
            label: label.into(),
            value: value.into(),
            delta: None,
        }
    }

    pub fn with_delta(mut self, delta: impl Into<String>) -> Self {
        self.delta = Some(delta.into());
        self
    }
}

/// The rows a page's charts and table are built from. Each page reads
/// exactly one of the three dataset tables; the slice is already ordered
/// and limited.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(tag = "table", rename_all = "snake_case")]
pub enum DataSlice {
    Tracks { rows: Vec<Track> },
    Samples { points: Vec<CorrelationSample> },
    Aggregates { rows: Vec<ExplicitAggregate> },
}

impl DataSlice {
    pub fn row_count(&self) -> usize {
        match self {
            DataSlice::Tracks { rows } => rows.len(),
            DataSlice::Samples { points } => points.len(),
            DataSlice::Aggregates { rows } => rows.len(),
        }
    }
}

/// Fully resolved, side-effect-free description of one page: data slice,
/// KPI tiles and chart specs. The presentation shell and chart composer
/// consume this without further decision-making.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct ViewPlan {
    pub page: Page,
    pub title: String,
    pub kpis: Vec<Kpi>,
    pub slice: DataSlice,
    pub charts: Vec<ChartSpec>,
}
