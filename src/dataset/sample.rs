use rand::Rng;
use rand_distr::{Distribution, LogNormal};
use serde::{Deserialize, Serialize};

/// One (TikTok views, Spotify streams) observation of the cross-platform
/// correlation sample.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq)]
pub struct CorrelationSample {
    pub tiktok_views: f64,
    pub spotify_streams: f64,
}

/// Log-scale parameters of the reference sample distributions.
pub const TIKTOK_MEAN_LOG: f64 = 20.0;
pub const TIKTOK_SD_LOG: f64 = 1.5;
pub const SPOTIFY_MEAN_LOG: f64 = 19.0;
pub const SPOTIFY_SD_LOG: f64 = 1.2;

/// Draws `count` independent log-normal observations for each platform.
pub fn draw_correlation_samples<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
) -> Vec<CorrelationSample> {
    let tiktok = LogNormal::new(TIKTOK_MEAN_LOG, TIKTOK_SD_LOG)
        .expect("Invalid log-normal parameters, this should be fixed at compile time.");
    let spotify = LogNormal::new(SPOTIFY_MEAN_LOG, SPOTIFY_SD_LOG)
        .expect("Invalid log-normal parameters, this should be fixed at compile time.");

    (0..count)
        .map(|_| CorrelationSample {
            tiktok_views: tiktok.sample(rng),
            spotify_streams: spotify.sample(rng),
        })
        .collect()
}
