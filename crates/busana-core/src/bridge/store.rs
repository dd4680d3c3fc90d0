use crate::bridge::swipl::SwiplProcess;
use crate::bridge::syntax::{item_options_goal, ITEMS_VAR};
use crate::bridge::{QueryBackend, Term};
use crate::model::{Category, Occasion, Season, WeatherCondition};
use crate::rules::store::{RuleStore, StaticRuleStore};
use std::path::Path;

/// Rule store backed by an external rule engine, with a static catalog
/// standing in whenever the engine cannot answer.
///
/// Falls back when the engine is unavailable at construction, when a query
/// errors, when it has no solutions, or when the first solution carries no
/// item list. Each fallback is logged; callers only ever see item lists.
/// Advice tables always come from the static catalog.
pub struct ExternalRuleStore {
    backend: Option<Box<dyn QueryBackend>>,
    fallback: StaticRuleStore,
}

impl ExternalRuleStore {
    /// Connect to SWI-Prolog with the given knowledge base file.
    pub fn connect(kb_path: &Path, fallback: StaticRuleStore) -> Self {
        if !kb_path.exists() {
            tracing::warn!(
                kb = %kb_path.display(),
                "{} not found, reverting to static catalog",
                kb_path.display()
            );
            return Self::fallback_only(fallback);
        }

        if !SwiplProcess::is_available() {
            tracing::warn!("swipl not available, reverting to static catalog");
            return Self::fallback_only(fallback);
        }

        tracing::info!(kb = %kb_path.display(), "using swipl rule engine");
        Self::with_backend(Box::new(SwiplProcess::new(kb_path)), fallback)
    }

    pub fn with_backend(backend: Box<dyn QueryBackend>, fallback: StaticRuleStore) -> Self {
        ExternalRuleStore {
            backend: Some(backend),
            fallback,
        }
    }

    pub fn fallback_only(fallback: StaticRuleStore) -> Self {
        ExternalRuleStore {
            backend: None,
            fallback,
        }
    }

    /// True if queries go to an external engine.
    pub fn is_connected(&self) -> bool {
        self.backend.is_some()
    }
}

impl RuleStore for ExternalRuleStore {
    fn lookup(
        &self,
        category: Category,
        occasion: Occasion,
        weather: WeatherCondition,
    ) -> Vec<String> {
        let Some(backend) = &self.backend else {
            return self.fallback.lookup(category, occasion, weather);
        };

        let goal = item_options_goal(category, occasion, weather);
        match backend.query(&goal) {
            Ok(results) => match results.first().and_then(|b| b.get(ITEMS_VAR)) {
                Some(Term::List(items)) => items.clone(),
                Some(_) => {
                    tracing::warn!(
                        goal = %goal,
                        "{} is not bound to a list, using static catalog",
                        ITEMS_VAR
                    );
                    self.fallback.lookup(category, occasion, weather)
                }
                None if results.is_empty() => {
                    tracing::warn!(goal = %goal, "no rule engine results for {}", goal);
                    self.fallback.lookup(category, occasion, weather)
                }
                None => {
                    tracing::warn!(goal = %goal, "rule engine result has no {} binding", ITEMS_VAR);
                    self.fallback.lookup(category, occasion, weather)
                }
            },
            Err(e) => {
                tracing::warn!(goal = %goal, error = %e, "error querying rule engine");
                self.fallback.lookup(category, occasion, weather)
            }
        }
    }

    fn season_for_month(&self, month: i64) -> Season {
        self.fallback.season_for_month(month)
    }

    fn color_advice(&self, season: Season) -> String {
        self.fallback.color_advice(season)
    }

    fn weather_tip(&self, weather: WeatherCondition) -> String {
        self.fallback.weather_tip(weather)
    }

    fn occasion_tip(&self, occasion: Occasion) -> String {
        self.fallback.occasion_tip(occasion)
    }

    fn backend_name(&self) -> &str {
        match &self.backend {
            Some(b) => b.backend_name(),
            None => self.fallback.backend_name(),
        }
    }
}
