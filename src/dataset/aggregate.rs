use serde::{Deserialize, Serialize};

/// Content-rating bucket for the explicit vs non-explicit comparison.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ContentRating {
    NonExplicit,
    Explicit,
}

impl ContentRating {
    pub fn label(&self) -> &'static str {
        match self {
            ContentRating::NonExplicit => "Non-explicit",
            ContentRating::Explicit => "Explicit",
        }
    }
}

/// Per-rating aggregate: average stream count and how many tracks the
/// average covers. Exactly one record exists per rating.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct ExplicitAggregate {
    pub rating: ContentRating,
    pub average_streams: f64,
    pub track_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_serializes_as_snake_case() {
        let json = serde_json::to_string(&ContentRating::NonExplicit).unwrap();
        assert_eq!(json, "\"non_explicit\"");
        let back: ContentRating = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ContentRating::NonExplicit);
    }
}
