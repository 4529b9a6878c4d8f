//! Chart parameter contracts.
//!
//! A [`ChartSpec`] fully specifies what the rendering collaborator must
//! draw: kind, source slice, axis field bindings, optional color field,
//! text labels and their formatting, sort order and trendline. The
//! renderer draws exactly this; it never re-sorts or re-filters.

use crate::dataset::TrackField;
use serde::{Deserialize, Serialize};

/// Which table of the view's data slice a chart reads.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SourceTable {
    Tracks,
    CorrelationSamples,
    ExplicitAggregates,
}

/// Field bindings of the correlation sample pair.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SampleField {
    TiktokViews,
    SpotifyStreams,
}

/// Field bindings of the explicit/non-explicit aggregate rows.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AggregateField {
    AverageStreams,
    TrackCount,
}

/// An axis or label binding into the chart's source table.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    TrackName,
    Track(TrackField),
    Sample(SampleField),
    Rating,
    Aggregate(AggregateField),
}

/// How numeric text labels are rendered next to marks.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LabelFormat {
    /// Compact SI notation for large counts, e.g. "3.2B".
    CompactSi,
    /// Currency-prefixed compact notation, e.g. "$9.6M".
    UsdCompact,
}

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Keep the slice's own order.
    SliceOrder,
    /// Re-order marks by ascending value for display (ranked bars read
    /// bottom-up).
    AscendingValue,
}

/// Per-mark text labels: which binding to print and how.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct TextLabels {
    pub field: Axis,
    pub format: LabelFormat,
}

/// Tagged chart description consumed by the chart-building collaborator.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChartSpec {
    HorizontalBar {
        title: String,
        source: SourceTable,
        x: Axis,
        y: Axis,
        color: Option<Axis>,
        text: TextLabels,
        sort: SortOrder,
    },
    VerticalBar {
        title: String,
        source: SourceTable,
        x: Axis,
        y: Axis,
        color: Option<Axis>,
        text: TextLabels,
        angled_x_ticks: bool,
    },
    Scatter {
        title: String,
        source: SourceTable,
        x: Axis,
        y: Axis,
        trendline: bool,
    },
    GroupedBar {
        title: String,
        source: SourceTable,
        x: Axis,
        y: Axis,
        text: TextLabels,
    },
}

impl ChartSpec {
    pub fn source(&self) -> SourceTable {
        match self {
            ChartSpec::HorizontalBar { source, .. }
            | ChartSpec::VerticalBar { source, .. }
            | ChartSpec::Scatter { source, .. }
            | ChartSpec::GroupedBar { source, .. } => *source,
        }
    }
}
