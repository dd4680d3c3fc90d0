use crate::error::BusanaError;
use crate::rules::parse_catalog_str;
use crate::rules::schema::CatalogDef;

const DEFAULT_CATALOG_JSON: &str = include_str!("../../../../rules/busana-default.json");

/// Available predefined catalogs.
pub const PRESETS: &[&str] = &["default"];

fn preset_json(name: &str) -> Option<&'static str> {
    match name {
        "default" => Some(DEFAULT_CATALOG_JSON),
        _ => None,
    }
}

/// Load a predefined catalog by name. Presets are validated like custom
/// catalogs.
pub fn load_preset(name: &str) -> Result<CatalogDef, BusanaError> {
    let json = preset_json(name).ok_or_else(|| {
        BusanaError::CatalogInvalid(format!(
            "unknown preset '{}'. Available: {}",
            name,
            PRESETS.join(", ")
        ))
    })?;
    parse_catalog_str(json)
}

/// The reference catalog shipped with the crate.
pub fn default_catalog() -> Result<CatalogDef, BusanaError> {
    load_preset("default")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, Occasion, Season, WeatherCondition};
    use crate::rules::{coverage_gaps, validate_catalog};

    #[test]
    fn test_load_default_preset() {
        let catalog = load_preset("default").unwrap();
        validate_catalog(&catalog).unwrap();
        assert_eq!(catalog.items.len(), 5);
    }

    #[test]
    fn test_default_covers_every_combination() {
        let catalog = default_catalog().unwrap();
        assert!(coverage_gaps(&catalog).is_empty());
    }

    #[test]
    fn test_default_advice_tables_complete() {
        let catalog = default_catalog().unwrap();
        for s in Season::ALL {
            assert!(catalog.color_advice.contains_key(&s));
        }
        for w in WeatherCondition::ALL {
            assert!(catalog.weather_tips.contains_key(&w));
        }
        for o in Occasion::ALL {
            assert!(catalog.occasion_tips.contains_key(&o));
        }
    }

    #[test]
    fn test_sports_hot_needs_no_outerwear() {
        let catalog = default_catalog().unwrap();
        assert_eq!(
            catalog.items_for(Category::Outerwear, Occasion::Sports, WeatherCondition::Hot),
            Some(&["Tidak diperlukan".to_string()][..])
        );
    }

    #[test]
    fn test_every_preset_passes_validation() {
        for name in PRESETS {
            let json = preset_json(name).unwrap();
            let catalog = parse_catalog_str(json).unwrap();
            validate_catalog(&catalog).unwrap();
            assert_eq!(load_preset(name).unwrap().name, catalog.name);
        }
    }

    #[test]
    fn test_blank_item_in_preset_json_rejected() {
        let broken = DEFAULT_CATALOG_JSON.replacen("\"Kaos katun\"", "\" \"", 1);
        assert_ne!(broken, DEFAULT_CATALOG_JSON);
        assert!(matches!(
            parse_catalog_str(&broken),
            Err(BusanaError::CatalogInvalid(_))
        ));
    }

    #[test]
    fn test_unknown_preset() {
        assert!(load_preset("xyz").is_err());
    }
}
