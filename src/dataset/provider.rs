//! Process-lifetime dataset cache.
//!
//! The provider owns the dataset source and memoizes its output for the
//! life of the process. Navigation handlers call [`DatasetProvider::get`]
//! on every request and share the same `Arc<Dataset>` until an explicit
//! [`DatasetProvider::invalidate`], which forces the next `get` to
//! rebuild all three tables, including a fresh correlation sample.

use super::{Dataset, DatasetError, DatasetSource, SyntheticSource};
use std::sync::{Arc, RwLock};
use tracing::{debug, info};

pub struct DatasetProvider {
    source: Box<dyn DatasetSource>,
    cached: RwLock<Option<Arc<Dataset>>>,
}

impl DatasetProvider {
    pub fn new(source: Box<dyn DatasetSource>) -> Self {
        DatasetProvider {
            source,
            cached: RwLock::new(None),
        }
    }

    /// Provider over the reference synthetic source.
    pub fn synthetic() -> Self {
        Self::new(Box::new(SyntheticSource::new()))
    }

    /// Returns the cached dataset, building it on first use.
    pub fn get(&self) -> Result<Arc<Dataset>, DatasetError> {
        if let Some(dataset) = self.cached.read().unwrap().as_ref() {
            return Ok(dataset.clone());
        }

        let mut guard = self.cached.write().unwrap();
        // Another caller may have built it while we waited for the lock.
        if let Some(dataset) = guard.as_ref() {
            return Ok(dataset.clone());
        }

        debug!("Dataset cache empty, building from source...");
        let dataset = Arc::new(self.source.build()?);
        info!(
            "Dataset built: {} tracks, {} correlation samples, {} aggregates",
            dataset.tracks.len(),
            dataset.correlation_samples.len(),
            dataset.explicit_aggregates.len()
        );
        *guard = Some(dataset.clone());
        Ok(dataset)
    }

    /// Drops the cached dataset so the next `get` recomputes everything.
    pub fn invalidate(&self) {
        *self.cached.write().unwrap() = None;
        info!("Dataset cache invalidated");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingSource;

    impl DatasetSource for FailingSource {
        fn build(&self) -> Result<Dataset, DatasetError> {
            Err(DatasetError::Unavailable("backing store offline".to_owned()))
        }
    }

    #[test]
    fn get_returns_the_same_dataset_until_invalidated() {
        let provider = DatasetProvider::synthetic();
        let first = provider.get().unwrap();
        let second = provider.get().unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn invalidate_resamples_only_the_correlation_data() {
        let provider = DatasetProvider::synthetic();
        let before = provider.get().unwrap();
        provider.invalidate();
        let after = provider.get().unwrap();

        assert_eq!(before.tracks, after.tracks);
        assert_eq!(before.explicit_aggregates, after.explicit_aggregates);
        // 100 fresh log-normal draws colliding is vanishingly unlikely.
        assert_ne!(before.correlation_samples, after.correlation_samples);
    }

    #[test]
    fn source_failure_propagates() {
        let provider = DatasetProvider::new(Box::new(FailingSource));
        match provider.get() {
            Err(DatasetError::Unavailable(reason)) => {
                assert!(reason.contains("offline"));
            }
            other => panic!("Expected Unavailable, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn failed_build_leaves_the_cache_empty() {
        let provider = DatasetProvider::new(Box::new(FailingSource));
        assert!(provider.get().is_err());
        assert!(provider.get().is_err());
    }
}
