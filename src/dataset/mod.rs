mod aggregate;
mod provider;
mod sample;
mod source;
mod track;

pub use aggregate::{ContentRating, ExplicitAggregate};
pub use provider::DatasetProvider;
pub use sample::{
    draw_correlation_samples, CorrelationSample, SPOTIFY_MEAN_LOG, SPOTIFY_SD_LOG,
    TIKTOK_MEAN_LOG, TIKTOK_SD_LOG,
};
pub use source::{Dataset, DatasetSource, SyntheticSource, DEFAULT_SAMPLE_SIZE};
pub use track::{RankedTrackTable, Track, TrackField};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatasetError {
    /// The backing source could not produce a dataset. Never raised by
    /// the synthetic source.
    #[error("Dataset source unavailable: {0}")]
    Unavailable(String),

    #[error("Track table is not ranked by descending streams at row {position}")]
    UnorderedTracks { position: usize },

    #[error("Invalid {field} value for track \"{track}\"")]
    InvalidValue { track: String, field: &'static str },
}
