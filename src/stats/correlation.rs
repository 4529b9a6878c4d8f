use super::StatsError;
use crate::dataset::CorrelationSample;

/// Pearson product-moment correlation between the TikTok and Spotify
/// series of the sample set.
///
/// Rejects sets with fewer than two points and zero-variance or
/// otherwise degenerate series instead of returning NaN.
pub fn pearson(samples: &[CorrelationSample]) -> Result<f64, StatsError> {
    let n = samples.len();
    if n < 2 {
        return Err(StatsError::InsufficientData { points: n });
    }

    let count = n as f64;
    let mean_x = samples.iter().map(|s| s.tiktok_views).sum::<f64>() / count;
    let mean_y = samples.iter().map(|s| s.spotify_streams).sum::<f64>() / count;

    let mut covariance = 0.0;
    let mut variance_x = 0.0;
    let mut variance_y = 0.0;
    for sample in samples {
        let dx = sample.tiktok_views - mean_x;
        let dy = sample.spotify_streams - mean_y;
        covariance += dx * dy;
        variance_x += dx * dx;
        variance_y += dy * dy;
    }

    if variance_x <= 0.0 || variance_y <= 0.0 {
        return Err(StatsError::DegenerateInput("zero variance series"));
    }

    let r = covariance / (variance_x.sqrt() * variance_y.sqrt());
    if !r.is_finite() {
        return Err(StatsError::DegenerateInput("non-finite coefficient"));
    }

    // Rounding can push a perfectly linear series just past 1.
    Ok(r.clamp(-1.0, 1.0))
}
