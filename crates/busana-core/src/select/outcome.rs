use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Placeholder for a top, bottom or shoes slot with no candidates.
pub const UNAVAILABLE: &str = "Outfit tidak tersedia";

/// Outerwear value meaning "no outerwear".
pub const NOT_NEEDED: &str = "Tidak diperlukan";

/// Accessories reported when the catalog offers none.
pub const MINIMAL_ACCESSORIES: &str = "Aksesoris minimal";

/// A complete outfit recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Generation date, e.g. "15 July 2025".
    pub date: String,
    /// Generation time, e.g. "08:30".
    pub time: String,
    pub top: String,
    pub bottom: String,
    /// Absent when no outerwear is needed.
    pub outerwear: Option<String>,
    pub shoes: String,
    /// Two or three distinct accessories.
    pub accessories: Vec<String>,
    pub color_recommendation: String,
    /// Empty when the weather has no tip.
    pub weather_tip: String,
    /// Empty when the occasion has no tip.
    pub occasion_tip: String,
}

/// A failed generation, carried as data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationError {
    pub error: String,
    pub date: String,
    pub time: String,
}

/// What a generation request produces. Serializes to the bare recommendation
/// or error object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecommendationResult {
    Outfit(Recommendation),
    Error(GenerationError),
}

impl RecommendationResult {
    pub fn is_error(&self) -> bool {
        matches!(self, RecommendationResult::Error(_))
    }

    pub fn outfit(&self) -> Option<&Recommendation> {
        match self {
            RecommendationResult::Outfit(r) => Some(r),
            RecommendationResult::Error(_) => None,
        }
    }

    pub fn error(&self) -> Option<&GenerationError> {
        match self {
            RecommendationResult::Outfit(_) => None,
            RecommendationResult::Error(e) => Some(e),
        }
    }
}

/// Date and time strings stamped onto every result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timestamp {
    pub date: String,
    pub time: String,
}

impl Timestamp {
    pub fn at(now: NaiveDateTime) -> Self {
        Timestamp {
            date: now.format("%d %B %Y").to_string(),
            time: now.format("%H:%M").to_string(),
        }
    }
}
