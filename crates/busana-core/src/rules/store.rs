use crate::model::{Category, Occasion, Season, WeatherCondition};
use crate::rules::schema::CatalogDef;
use std::sync::Arc;

/// Color advice used when a catalog has no entry for the season.
pub const DEFAULT_COLOR_ADVICE: &str = "Pilih warna yang sesuai dengan preferensi Anda.";

/// Lookup contract shared by every catalog backend.
///
/// All operations are total: a missing key yields an empty list or a
/// fallback string, never an error.
pub trait RuleStore: Send + Sync {
    /// Candidate item names for a (category, occasion, weather) key, in
    /// catalog order. Empty when the key is not covered.
    fn lookup(&self, category: Category, occasion: Occasion, weather: WeatherCondition)
        -> Vec<String>;

    fn season_for_month(&self, month: i64) -> Season {
        Season::from_month(month)
    }

    fn color_advice(&self, season: Season) -> String;

    /// Empty when the weather has no tip.
    fn weather_tip(&self, weather: WeatherCondition) -> String;

    /// Empty when the occasion has no tip.
    fn occasion_tip(&self, occasion: Occasion) -> String;

    /// Name of this backend (for diagnostics).
    fn backend_name(&self) -> &str;
}

/// In-process backend answering straight from a [`CatalogDef`].
#[derive(Debug, Clone)]
pub struct StaticRuleStore {
    catalog: Arc<CatalogDef>,
}

impl StaticRuleStore {
    pub fn new(catalog: CatalogDef) -> Self {
        StaticRuleStore {
            catalog: Arc::new(catalog),
        }
    }

    pub fn from_shared(catalog: Arc<CatalogDef>) -> Self {
        StaticRuleStore { catalog }
    }

    pub fn catalog(&self) -> &CatalogDef {
        &self.catalog
    }
}

impl RuleStore for StaticRuleStore {
    fn lookup(
        &self,
        category: Category,
        occasion: Occasion,
        weather: WeatherCondition,
    ) -> Vec<String> {
        match self.catalog.items_for(category, occasion, weather) {
            Some(items) => items.to_vec(),
            None => {
                tracing::warn!(
                    %category,
                    %occasion,
                    %weather,
                    "no items found for {}/{}/{}",
                    category,
                    occasion,
                    weather
                );
                Vec::new()
            }
        }
    }

    fn color_advice(&self, season: Season) -> String {
        self.catalog
            .color_advice
            .get(&season)
            .cloned()
            .unwrap_or_else(|| DEFAULT_COLOR_ADVICE.to_string())
    }

    fn weather_tip(&self, weather: WeatherCondition) -> String {
        self.catalog
            .weather_tips
            .get(&weather)
            .cloned()
            .unwrap_or_default()
    }

    fn occasion_tip(&self, occasion: Occasion) -> String {
        self.catalog
            .occasion_tips
            .get(&occasion)
            .cloned()
            .unwrap_or_default()
    }

    fn backend_name(&self) -> &str {
        "static"
    }
}
