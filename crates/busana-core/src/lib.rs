pub mod bridge;
pub mod config;
pub mod error;
pub mod model;
pub mod rules;
pub mod select;

use bridge::ExternalRuleStore;
use config::{BackendKind, RulesConfig};
use error::BusanaError;
use rules::schema::CatalogDef;
use rules::store::{RuleStore, StaticRuleStore};
use select::{OutfitRequest, RecommendationResult, Selector};

/// Build the rule store described by the configuration.
///
/// The catalog is loaded once here; a bad custom catalog is an error. For
/// the prolog backend the catalog also serves as the fallback, so an
/// unreachable engine never surfaces as an error.
pub fn open_store(config: &RulesConfig) -> Result<Box<dyn RuleStore>, BusanaError> {
    let catalog = load_configured_catalog(config)?;
    let fallback = StaticRuleStore::new(catalog);

    let store: Box<dyn RuleStore> = match config.backend {
        BackendKind::Static => Box::new(fallback),
        BackendKind::Prolog => Box::new(ExternalRuleStore::connect(&config.prolog_file, fallback)),
    };

    tracing::info!(backend = store.backend_name(), "rule store ready");
    Ok(store)
}

/// The configured custom catalog, or the built-in one.
pub fn load_configured_catalog(config: &RulesConfig) -> Result<CatalogDef, BusanaError> {
    match &config.catalog {
        Some(path) => rules::load_catalog(path),
        None => rules::builtin::default_catalog(),
    }
}

/// Main API entry point: generate one outfit recommendation.
///
/// Never fails; invalid input comes back as an error result.
pub fn recommend(store: &dyn RuleStore, request: &OutfitRequest) -> RecommendationResult {
    Selector::new(store).generate(
        request.weather,
        request.occasion,
        request.gender,
        request.modesty,
        request.date.clone(),
    )
}
