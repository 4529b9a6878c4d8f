//! Navigation dispatch: maps a (page, top-N) selection onto a fully
//! specified [`ViewPlan`].
//!
//! One builder per page, no internal transitions. Metrics are computed
//! through the stats module before any chart parameters are assembled,
//! and every stats or dataset failure propagates to the caller — the
//! presentation shell decides between a placeholder and an error banner.

use super::chart::{
    AggregateField, Axis, ChartSpec, LabelFormat, SampleField, SortOrder, SourceTable, TextLabels,
};
use super::format;
use super::page::{Page, TopN};
use super::plan::{DataSlice, Kpi, ViewPlan};
use super::ViewError;
use crate::dataset::{ContentRating, Dataset, ExplicitAggregate, TrackField};
use crate::stats::{self, StatsError};
use tracing::debug;

/// Resolves one navigation selection against the current dataset.
pub fn resolve(page: Page, top_n: TopN, dataset: &Dataset) -> Result<ViewPlan, ViewError> {
    debug!("Resolving view {:?} with top_n={}", page, top_n.get());
    match page {
        Page::Overview => overview_plan(dataset),
        Page::TopTracks => top_tracks_plan(top_n, dataset),
        Page::Revenue => revenue_plan(top_n, dataset),
        Page::Correlations => correlations_plan(dataset),
        Page::ContentAnalysis => content_analysis_plan(dataset),
    }
}

fn top_tracks_chart(title: &str) -> ChartSpec {
    ChartSpec::HorizontalBar {
        title: title.to_owned(),
        source: SourceTable::Tracks,
        x: Axis::Track(TrackField::StreamsSpotify),
        y: Axis::TrackName,
        color: Some(Axis::Track(TrackField::StreamsSpotify)),
        text: TextLabels {
            field: Axis::Track(TrackField::StreamsSpotify),
            format: LabelFormat::CompactSi,
        },
        sort: SortOrder::AscendingValue,
    }
}

fn revenue_chart(title: &str) -> ChartSpec {
    ChartSpec::VerticalBar {
        title: title.to_owned(),
        source: SourceTable::Tracks,
        x: Axis::TrackName,
        y: Axis::Track(TrackField::RevenueUsd),
        color: Some(Axis::Track(TrackField::RevenueUsd)),
        text: TextLabels {
            field: Axis::Track(TrackField::RevenueUsd),
            format: LabelFormat::UsdCompact,
        },
        angled_x_ticks: true,
    }
}

/// Mean streams across both rating buckets, weighted by track count.
fn weighted_average_streams(aggregates: &[ExplicitAggregate]) -> Result<f64, StatsError> {
    let total_tracks: u64 = aggregates.iter().map(|a| a.track_count).sum();
    if total_tracks == 0 {
        return Err(StatsError::EmptyInput);
    }
    let weighted: f64 = aggregates
        .iter()
        .map(|a| a.average_streams * a.track_count as f64)
        .sum();
    Ok(weighted / total_tracks as f64)
}

/// Overview ignores the top-N filter: KPI tiles over the whole dataset
/// plus the two headline charts over the full ranked table.
fn overview_plan(dataset: &Dataset) -> Result<ViewPlan, ViewError> {
    let tracks_analyzed: u64 = dataset
        .explicit_aggregates
        .iter()
        .map(|a| a.track_count)
        .sum();
    let average_streams = weighted_average_streams(&dataset.explicit_aggregates)?;
    let average_revenue = stats::mean(TrackField::RevenueUsd, &dataset.tracks)?;
    let average_tiktok = stats::mean(TrackField::TiktokViews, &dataset.tracks)?;
    let average_youtube = stats::mean(TrackField::YoutubeViews, &dataset.tracks)?;

    let kpis = vec![
        Kpi::new("Tracks analyzed", format::grouped(tracks_analyzed)),
        Kpi::new("Average streams", format::compact(average_streams))
            .with_delta("Spotify streams"),
        Kpi::new("Average revenue", format::usd_compact(average_revenue))
            .with_delta("USD per track, top 10"),
        Kpi::new("Average TikTok views", format::compact(average_tiktok)),
        Kpi::new("Average YouTube views", format::compact(average_youtube)),
    ];

    Ok(ViewPlan {
        page: Page::Overview,
        title: "Overview".to_owned(),
        kpis,
        slice: DataSlice::Tracks {
            rows: dataset.tracks.tracks().to_vec(),
        },
        charts: vec![
            top_tracks_chart("Top Tracks by Spotify Streams"),
            revenue_chart("Top Estimated Revenue (Spotify)"),
        ],
    })
}

/// Ranked table, limited to min(top_n, rows), descending streams.
fn top_tracks_plan(top_n: TopN, dataset: &Dataset) -> Result<ViewPlan, ViewError> {
    let rows = dataset.tracks.top(top_n.get()).to_vec();
    Ok(ViewPlan {
        page: Page::TopTracks,
        title: "Track Ranking".to_owned(),
        kpis: Vec::new(),
        slice: DataSlice::Tracks { rows },
        charts: vec![top_tracks_chart("Top Tracks by Spotify Streams")],
    })
}

fn revenue_plan(top_n: TopN, dataset: &Dataset) -> Result<ViewPlan, ViewError> {
    let total_top_10 = stats::sum(TrackField::RevenueUsd, &dataset.tracks, Some(10))?;
    let average = stats::mean(TrackField::RevenueUsd, &dataset.tracks)?;
    let highest = stats::max(TrackField::RevenueUsd, &dataset.tracks)?;

    let kpis = vec![
        Kpi::new("Total revenue, top 10", format::usd_grouped(total_top_10)),
        Kpi::new("Average revenue", format::usd_grouped(average)),
        Kpi::new("Highest revenue", format::usd_grouped(highest)),
    ];

    Ok(ViewPlan {
        page: Page::Revenue,
        title: "Revenue Analysis".to_owned(),
        kpis,
        slice: DataSlice::Tracks {
            rows: dataset.tracks.top(top_n.get()).to_vec(),
        },
        charts: vec![revenue_chart("Top Estimated Revenue (Spotify)")],
    })
}

/// Always uses the full sample set; the top-N filter does not apply.
fn correlations_plan(dataset: &Dataset) -> Result<ViewPlan, ViewError> {
    let coefficient = stats::pearson(&dataset.correlation_samples)?;

    Ok(ViewPlan {
        page: Page::Correlations,
        title: "Correlation Analysis".to_owned(),
        kpis: vec![Kpi::new(
            "TikTok / Spotify correlation",
            format!("{:.3}", coefficient),
        )
        .with_delta("Pearson coefficient")],
        slice: DataSlice::Samples {
            points: dataset.correlation_samples.clone(),
        },
        charts: vec![ChartSpec::Scatter {
            title: "TikTok Views vs Spotify Streams".to_owned(),
            source: SourceTable::CorrelationSamples,
            x: Axis::Sample(SampleField::TiktokViews),
            y: Axis::Sample(SampleField::SpotifyStreams),
            trendline: true,
        }],
    })
}

fn content_analysis_plan(dataset: &Dataset) -> Result<ViewPlan, ViewError> {
    let non_explicit = dataset
        .aggregate(ContentRating::NonExplicit)
        .ok_or(ViewError::MissingAggregate(ContentRating::NonExplicit))?;
    let explicit = dataset
        .aggregate(ContentRating::Explicit)
        .ok_or(ViewError::MissingAggregate(ContentRating::Explicit))?;

    if non_explicit.average_streams <= 0.0 {
        return Err(ViewError::Stats(StatsError::DegenerateInput(
            "non-explicit average is zero",
        )));
    }
    let delta_pct = (explicit.average_streams - non_explicit.average_streams)
        / non_explicit.average_streams
        * 100.0;

    let kpis = vec![
        Kpi::new(
            "Non-explicit streams",
            format::compact(non_explicit.average_streams),
        )
        .with_delta(format!(
            "average over {} tracks",
            format::grouped(non_explicit.track_count)
        )),
        Kpi::new("Explicit streams", format::compact(explicit.average_streams)).with_delta(
            format!("{:+.1}% vs non-explicit", delta_pct),
        ),
    ];

    Ok(ViewPlan {
        page: Page::ContentAnalysis,
        title: "Explicit vs Non-explicit Content".to_owned(),
        kpis,
        slice: DataSlice::Aggregates {
            rows: dataset.explicit_aggregates.clone(),
        },
        charts: vec![ChartSpec::GroupedBar {
            title: "Average Streams by Content Rating".to_owned(),
            source: SourceTable::ExplicitAggregates,
            x: Axis::Rating,
            y: Axis::Aggregate(AggregateField::AverageStreams),
            text: TextLabels {
                field: Axis::Aggregate(AggregateField::AverageStreams),
                format: LabelFormat::CompactSi,
            },
        }],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{DatasetSource, RankedTrackTable, SyntheticSource};

    fn dataset() -> Dataset {
        SyntheticSource::new().with_seed(11).build().unwrap()
    }

    fn track_rows(plan: &ViewPlan) -> &[crate::dataset::Track] {
        match &plan.slice {
            DataSlice::Tracks { rows } => rows,
            other => panic!("Expected a track slice, got {:?}", other),
        }
    }

    #[test]
    fn top_tracks_honors_the_filter_for_the_whole_domain() {
        let dataset = dataset();
        for n in TopN::MIN..=TopN::MAX {
            let plan = resolve(Page::TopTracks, TopN::new(n).unwrap(), &dataset).unwrap();
            let rows = track_rows(&plan);
            assert_eq!(rows.len(), n.min(10));
            for pair in rows.windows(2) {
                assert!(pair[0].streams_spotify >= pair[1].streams_spotify);
            }
        }
    }

    #[test]
    fn top_tracks_five_is_headed_by_blinding_lights() {
        let plan = resolve(Page::TopTracks, TopN::new(5).unwrap(), &dataset()).unwrap();
        let rows = track_rows(&plan);
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0].name, "Blinding Lights - The Weeknd");
    }

    #[test]
    fn top_tracks_chart_is_an_ascending_horizontal_bar() {
        let plan = resolve(Page::TopTracks, TopN::default(), &dataset()).unwrap();
        assert_eq!(plan.charts.len(), 1);
        match &plan.charts[0] {
            ChartSpec::HorizontalBar { x, y, sort, text, .. } => {
                assert_eq!(*x, Axis::Track(TrackField::StreamsSpotify));
                assert_eq!(*y, Axis::TrackName);
                assert_eq!(*sort, SortOrder::AscendingValue);
                assert_eq!(text.format, LabelFormat::CompactSi);
            }
            other => panic!("Expected a horizontal bar, got {:?}", other),
        }
    }

    #[test]
    fn overview_ignores_the_filter() {
        let plan = resolve(Page::Overview, TopN::new(5).unwrap(), &dataset()).unwrap();
        assert_eq!(track_rows(&plan).len(), 10);
        assert_eq!(plan.charts.len(), 2);
    }

    #[test]
    fn overview_kpis_cover_the_dataset() {
        let plan = resolve(Page::Overview, TopN::default(), &dataset()).unwrap();
        let tracks_analyzed = plan
            .kpis
            .iter()
            .find(|k| k.label == "Tracks analyzed")
            .unwrap();
        assert_eq!(tracks_analyzed.value, "4,485");
    }

    #[test]
    fn revenue_kpis_match_the_reference_sums() {
        let plan = resolve(Page::Revenue, TopN::default(), &dataset()).unwrap();
        let values: Vec<&str> = plan.kpis.iter().map(|k| k.value.as_str()).collect();
        assert_eq!(
            values,
            vec!["$71,100,000", "$7,110,000", "$9,600,000"]
        );
    }

    #[test]
    fn revenue_slice_honors_the_filter() {
        let plan = resolve(Page::Revenue, TopN::new(7).unwrap(), &dataset()).unwrap();
        assert_eq!(track_rows(&plan).len(), 7);
        match &plan.charts[0] {
            ChartSpec::VerticalBar { angled_x_ticks, text, .. } => {
                assert!(*angled_x_ticks);
                assert_eq!(text.format, LabelFormat::UsdCompact);
            }
            other => panic!("Expected a vertical bar, got {:?}", other),
        }
    }

    #[test]
    fn correlations_always_use_the_full_sample() {
        let dataset = dataset();
        let plan = resolve(Page::Correlations, TopN::new(5).unwrap(), &dataset).unwrap();
        assert_eq!(plan.slice.row_count(), dataset.correlation_samples.len());
        match &plan.charts[0] {
            ChartSpec::Scatter { trendline, .. } => assert!(*trendline),
            other => panic!("Expected a scatter, got {:?}", other),
        }
        // KPI carries a parseable coefficient in [-1, 1].
        let coefficient: f64 = plan.kpis[0].value.parse().unwrap();
        assert!((-1.0..=1.0).contains(&coefficient));
    }

    #[test]
    fn content_analysis_reports_the_forty_million_delta() {
        let plan = resolve(Page::ContentAnalysis, TopN::default(), &dataset()).unwrap();
        match &plan.slice {
            DataSlice::Aggregates { rows } => {
                assert_eq!(rows.len(), 2);
                let explicit = rows.iter().find(|r| r.rating == ContentRating::Explicit);
                let non_explicit = rows
                    .iter()
                    .find(|r| r.rating == ContentRating::NonExplicit);
                let delta = explicit.unwrap().average_streams
                    - non_explicit.unwrap().average_streams;
                assert_eq!(delta, 40_000_000.0);
            }
            other => panic!("Expected aggregates, got {:?}", other),
        }

        let explicit_kpi = plan
            .kpis
            .iter()
            .find(|k| k.label == "Explicit streams")
            .unwrap();
        assert_eq!(explicit_kpi.value, "460M");
        assert_eq!(
            explicit_kpi.delta.as_deref(),
            Some("+9.5% vs non-explicit")
        );
    }

    #[test]
    fn stats_failures_propagate_instead_of_defaulting() {
        let mut empty = dataset();
        empty.tracks = RankedTrackTable::new(Vec::new()).unwrap();

        match resolve(Page::Revenue, TopN::default(), &empty) {
            Err(ViewError::Stats(StatsError::EmptyInput)) => {}
            other => panic!("Expected EmptyInput, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn short_correlation_sample_is_rejected() {
        let mut dataset = dataset();
        dataset.correlation_samples.truncate(1);
        match resolve(Page::Correlations, TopN::default(), &dataset) {
            Err(ViewError::Stats(StatsError::InsufficientData { points: 1 })) => {}
            other => panic!("Expected InsufficientData, got {:?}", other.map(|_| ())),
        }
    }
}
