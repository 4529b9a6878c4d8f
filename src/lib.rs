//! Trackboard Library
//!
//! Dashboard core for pre-aggregated music-streaming statistics: dataset
//! synthesis and caching, derived metrics, and navigation-to-ViewPlan
//! resolution. This library exposes the internal modules for testing and
//! potential reuse; rendering is left to the consuming shell.

pub mod config;
pub mod dataset;
pub mod server;
pub mod stats;
pub mod view;

// Re-export commonly used types for convenience
pub use dataset::{Dataset, DatasetProvider, DatasetSource, SyntheticSource};
pub use server::{run_server, RequestsLoggingLevel};
pub use view::{resolve, Page, TopN, ViewPlan};
