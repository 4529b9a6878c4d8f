use super::DatasetError;
use serde::{Deserialize, Serialize};

/// One pre-aggregated track row: streams, revenue estimate and
/// cross-platform view counts.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Track {
    pub name: String,
    pub streams_spotify: u64,
    pub revenue_usd: f64,
    pub youtube_views: u64,
    pub tiktok_views: u64,
}

/// Numeric field binding into a [`Track`] row.
///
/// Shared by the stats reductions and the chart parameter contracts so
/// both sides name the same columns.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TrackField {
    StreamsSpotify,
    RevenueUsd,
    YoutubeViews,
    TiktokViews,
}

impl TrackField {
    pub fn value_of(&self, track: &Track) -> f64 {
        match self {
            TrackField::StreamsSpotify => track.streams_spotify as f64,
            TrackField::RevenueUsd => track.revenue_usd,
            TrackField::YoutubeViews => track.youtube_views as f64,
            TrackField::TiktokViews => track.tiktok_views as f64,
        }
    }
}

/// Ordered track table where insertion order is rank order
/// (highest Spotify streams first). Immutable after construction.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct RankedTrackTable {
    tracks: Vec<Track>,
}

impl RankedTrackTable {
    /// Builds the table, validating the rank invariant and value sanity.
    pub fn new(tracks: Vec<Track>) -> Result<Self, DatasetError> {
        for track in &tracks {
            if !track.revenue_usd.is_finite() || track.revenue_usd < 0.0 {
                return Err(DatasetError::InvalidValue {
                    track: track.name.clone(),
                    field: "revenue_usd",
                });
            }
        }
        for (position, pair) in tracks.windows(2).enumerate() {
            if pair[0].streams_spotify < pair[1].streams_spotify {
                return Err(DatasetError::UnorderedTracks { position: position + 1 });
            }
        }
        Ok(RankedTrackTable { tracks })
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// The first min(n, len) ranked rows.
    pub fn top(&self, n: usize) -> &[Track] {
        &self.tracks[..n.min(self.tracks.len())]
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}
