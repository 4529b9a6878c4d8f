use super::{
    draw_correlation_samples, ContentRating, CorrelationSample, DatasetError, ExplicitAggregate,
    RankedTrackTable, Track,
};
use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

/// The three in-memory tables plus a freshness timestamp.
///
/// Built once per process session by a [`DatasetSource`] and only
/// replaced through an explicit cache invalidation.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Dataset {
    pub tracks: RankedTrackTable,
    pub correlation_samples: Vec<CorrelationSample>,
    pub explicit_aggregates: Vec<ExplicitAggregate>,
    pub generated_at: DateTime<Utc>,
}

impl Dataset {
    pub fn aggregate(&self, rating: ContentRating) -> Option<&ExplicitAggregate> {
        self.explicit_aggregates.iter().find(|a| a.rating == rating)
    }
}

/// Where dataset builds come from.
///
/// The reference implementation is [`SyntheticSource`]; a real source
/// (disk, network) reports failure as [`DatasetError::Unavailable`] and
/// the caller decides whether to keep serving the last cached dataset.
pub trait DatasetSource: Send + Sync {
    fn build(&self) -> Result<Dataset, DatasetError>;
}

/// Default number of correlation observations per build.
pub const DEFAULT_SAMPLE_SIZE: usize = 100;

/// Synthesizes the reference dataset: the fixed 2024 top-10 table, the
/// two content-rating aggregates, and a fresh log-normal correlation
/// sample on every build.
#[derive(Debug, Clone)]
pub struct SyntheticSource {
    sample_size: usize,
    seed: Option<u64>,
}

impl SyntheticSource {
    pub fn new() -> Self {
        SyntheticSource {
            sample_size: DEFAULT_SAMPLE_SIZE,
            seed: None,
        }
    }

    pub fn with_sample_size(mut self, sample_size: usize) -> Self {
        self.sample_size = sample_size;
        self
    }

    /// Fixes the RNG seed so rebuilds reproduce the same sample.
    /// Without a seed every build draws a fresh independent sample.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

impl Default for SyntheticSource {
    fn default() -> Self {
        Self::new()
    }
}

impl DatasetSource for SyntheticSource {
    fn build(&self) -> Result<Dataset, DatasetError> {
        let mut rng = self.rng();
        Ok(Dataset {
            tracks: reference_tracks()?,
            correlation_samples: draw_correlation_samples(&mut rng, self.sample_size),
            explicit_aggregates: reference_aggregates(),
            generated_at: Utc::now(),
        })
    }
}

fn track(
    name: &str,
    streams_spotify: u64,
    revenue_usd: f64,
    youtube_views: u64,
    tiktok_views: u64,
) -> Track {
    Track {
        name: name.to_owned(),
        streams_spotify,
        revenue_usd,
        youtube_views,
        tiktok_views,
    }
}

/// The fixed top-10 table, ranked by Spotify streams.
fn reference_tracks() -> Result<RankedTrackTable, DatasetError> {
    RankedTrackTable::new(vec![
        track(
            "Blinding Lights - The Weeknd",
            3_200_000_000,
            9_600_000.0,
            2_800_000_000,
            8_500_000_000,
        ),
        track(
            "Shape of You - Ed Sheeran",
            3_100_000_000,
            9_300_000.0,
            5_600_000_000,
            4_200_000_000,
        ),
        track(
            "Watermelon Sugar - Harry Styles",
            2_800_000_000,
            8_400_000.0,
            1_200_000_000,
            3_800_000_000,
        ),
        track(
            "Levitating - Dua Lipa",
            2_600_000_000,
            7_800_000.0,
            1_800_000_000,
            6_200_000_000,
        ),
        track(
            "Bad Habits - Ed Sheeran",
            2_400_000_000,
            7_200_000.0,
            1_500_000_000,
            2_900_000_000,
        ),
        track(
            "Stay - The Kid LAROI & Justin Bieber",
            2_200_000_000,
            6_600_000.0,
            900_000_000,
            5_100_000_000,
        ),
        track(
            "Good 4 U - Olivia Rodrigo",
            2_000_000_000,
            6_000_000.0,
            1_100_000_000,
            4_800_000_000,
        ),
        track(
            "Industry Baby - Lil Nas X",
            1_900_000_000,
            5_700_000.0,
            800_000_000,
            3_600_000_000,
        ),
        track(
            "Heat Waves - Glass Animals",
            1_800_000_000,
            5_400_000.0,
            600_000_000,
            2_200_000_000,
        ),
        track(
            "Peaches - Justin Bieber",
            1_700_000_000,
            5_100_000.0,
            700_000_000,
            1_900_000_000,
        ),
    ])
}

/// Explicit vs non-explicit comparison rows, non-explicit first.
fn reference_aggregates() -> Vec<ExplicitAggregate> {
    vec![
        ExplicitAggregate {
            rating: ContentRating::NonExplicit,
            average_streams: 420_000_000.0,
            track_count: 2_800,
        },
        ExplicitAggregate {
            rating: ContentRating::Explicit,
            average_streams: 460_000_000.0,
            track_count: 1_685,
        },
    ]
}
