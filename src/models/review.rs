// src/models/review.rs
use serde::{Deserialize, Deserializer, Serialize};

/// A review as embedded in a place record.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Review {
    pub user: Option<String>,    // Display name of the author
    pub comment: Option<String>, // Free-text body
    #[serde(default, deserialize_with = "rating_in_range")]
    pub rating: Option<u8>,      // 1 to 5
}

/// Any JSON number; only whole values from 1 to 5 are kept.
fn rating_in_range<'de, D>(deserializer: D) -> Result<Option<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?
        .filter(|r| r.fract() == 0.0 && (1.0..=5.0).contains(r))
        .map(|r| r as u8))
}

/// Body of `POST /api/places/{id}/reviews`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct NewReview {
    pub comment: String,
    pub rating: u8,
}
