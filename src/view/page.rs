use super::ViewError;
use serde::{Deserialize, Serialize};

/// One dashboard page. Navigation input maps 1:1 onto this enum.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    Overview,
    TopTracks,
    Revenue,
    Correlations,
    ContentAnalysis,
}

impl Page {
    pub const ALL: [Page; 5] = [
        Page::Overview,
        Page::TopTracks,
        Page::Revenue,
        Page::Correlations,
        Page::ContentAnalysis,
    ];

    /// URL-safe identifier.
    pub fn slug(&self) -> &'static str {
        match self {
            Page::Overview => "overview",
            Page::TopTracks => "top-tracks",
            Page::Revenue => "revenue",
            Page::Correlations => "correlations",
            Page::ContentAnalysis => "content-analysis",
        }
    }

    /// Sidebar display name.
    pub fn label(&self) -> &'static str {
        match self {
            Page::Overview => "Overview",
            Page::TopTracks => "Top Tracks",
            Page::Revenue => "Revenue",
            Page::Correlations => "Correlations",
            Page::ContentAnalysis => "Content Analysis",
        }
    }

    pub fn from_slug(slug: &str) -> Result<Page, ViewError> {
        Page::ALL
            .into_iter()
            .find(|p| p.slug() == slug)
            .ok_or_else(|| ViewError::UnknownPage(slug.to_owned()))
    }
}

/// User-controlled row limit for ranked views, valid in [5, 20].
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(try_from = "usize", into = "usize")]
pub struct TopN(usize);

impl TopN {
    pub const MIN: usize = 5;
    pub const MAX: usize = 20;
    pub const DEFAULT: usize = 10;

    pub fn new(n: usize) -> Result<TopN, ViewError> {
        if (Self::MIN..=Self::MAX).contains(&n) {
            Ok(TopN(n))
        } else {
            Err(ViewError::TopNOutOfRange(n))
        }
    }

    pub fn get(&self) -> usize {
        self.0
    }
}

impl Default for TopN {
    fn default() -> Self {
        TopN(Self::DEFAULT)
    }
}

impl TryFrom<usize> for TopN {
    type Error = ViewError;

    fn try_from(n: usize) -> Result<Self, Self::Error> {
        TopN::new(n)
    }
}

impl From<TopN> for usize {
    fn from(top_n: TopN) -> usize {
        top_n.0
    }
}
