pub mod builtin;
pub mod schema;
pub mod store;

use crate::error::BusanaError;
use crate::model::{Category, Occasion, WeatherCondition};
use schema::CatalogDef;
use std::path::Path;

pub use store::{RuleStore, StaticRuleStore};

/// Load a catalog from a JSON file.
pub fn load_catalog(path: &Path) -> Result<CatalogDef, BusanaError> {
    let content = std::fs::read_to_string(path).map_err(|e| BusanaError::CatalogLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_catalog(&content, path)
}

/// Parse a catalog from a JSON string.
pub fn parse_catalog(json: &str, source: &Path) -> Result<CatalogDef, BusanaError> {
    let catalog: CatalogDef = serde_json::from_str(json).map_err(|e| BusanaError::CatalogLoad {
        path: source.to_path_buf(),
        reason: e.to_string(),
    })?;
    validate_catalog(&catalog)?;
    Ok(catalog)
}

/// Parse a catalog from a JSON string (no file path context).
pub fn parse_catalog_str(json: &str) -> Result<CatalogDef, BusanaError> {
    let catalog: CatalogDef = serde_json::from_str(json).map_err(BusanaError::Json)?;
    validate_catalog(&catalog)?;
    Ok(catalog)
}

/// Validate that a catalog is well-formed.
///
/// Missing (category, occasion, weather) keys are allowed: lookups for them
/// come back empty. See [`coverage_gaps`].
pub fn validate_catalog(catalog: &CatalogDef) -> Result<(), BusanaError> {
    if catalog.name.trim().is_empty() {
        return Err(BusanaError::CatalogInvalid(
            "catalog name must not be empty".into(),
        ));
    }

    if catalog.items.is_empty() {
        return Err(BusanaError::CatalogInvalid("items must not be empty".into()));
    }

    for (category, occasions) in &catalog.items {
        for (occasion, weathers) in occasions {
            for (weather, items) in weathers {
                if items.is_empty() {
                    return Err(BusanaError::CatalogInvalid(format!(
                        "{}/{}/{} has an empty item list",
                        category, occasion, weather
                    )));
                }
                if items.iter().any(|i| i.trim().is_empty()) {
                    return Err(BusanaError::CatalogInvalid(format!(
                        "{}/{}/{} contains a blank item name",
                        category, occasion, weather
                    )));
                }
            }
        }
    }

    Ok(())
}

/// Every (category, occasion, weather) key the catalog has no items for.
pub fn coverage_gaps(catalog: &CatalogDef) -> Vec<(Category, Occasion, WeatherCondition)> {
    let mut gaps = Vec::new();
    for category in Category::ALL {
        for occasion in Occasion::ALL {
            for weather in WeatherCondition::ALL {
                if catalog.items_for(category, occasion, weather).is_none() {
                    gaps.push((category, occasion, weather));
                }
            }
        }
    }
    gaps
}
