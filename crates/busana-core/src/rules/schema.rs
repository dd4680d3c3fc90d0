use crate::model::{Category, Occasion, Season, WeatherCondition};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Items for one category, keyed by occasion then weather.
pub type OccasionTable = BTreeMap<Occasion, BTreeMap<WeatherCondition, Vec<String>>>;

/// A wardrobe catalog: the item taxonomy plus the advice tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogDef {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub version: String,
    /// Ordered item names per (category, occasion, weather).
    pub items: BTreeMap<Category, OccasionTable>,
    #[serde(default)]
    pub color_advice: BTreeMap<Season, String>,
    #[serde(default)]
    pub weather_tips: BTreeMap<WeatherCondition, String>,
    #[serde(default)]
    pub occasion_tips: BTreeMap<Occasion, String>,
}

impl CatalogDef {
    pub fn items_for(
        &self,
        category: Category,
        occasion: Occasion,
        weather: WeatherCondition,
    ) -> Option<&[String]> {
        self.items
            .get(&category)?
            .get(&occasion)?
            .get(&weather)
            .map(Vec::as_slice)
    }
}
