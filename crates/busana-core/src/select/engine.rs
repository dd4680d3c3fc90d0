use crate::error::BusanaError;
use crate::model::{
    Category, DateInput, GenderPreference, ModestyPreference, Occasion, WeatherCondition,
};
use crate::rules::store::RuleStore;
use crate::select::filters;
use crate::select::outcome::{
    GenerationError, Recommendation, RecommendationResult, Timestamp, MINIMAL_ACCESSORIES,
    NOT_NEEDED, UNAVAILABLE,
};
use chrono::{Datelike, Local, NaiveDateTime};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Inputs for one recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutfitRequest {
    pub weather: WeatherCondition,
    pub occasion: Occasion,
    #[serde(default)]
    pub gender: GenderPreference,
    #[serde(default)]
    pub modesty: ModestyPreference,
    /// Date the outfit is for; today when absent.
    #[serde(default)]
    pub date: Option<DateInput>,
}

impl OutfitRequest {
    pub fn new(weather: WeatherCondition, occasion: Occasion) -> Self {
        OutfitRequest {
            weather,
            occasion,
            gender: GenderPreference::default(),
            modesty: ModestyPreference::default(),
            date: None,
        }
    }
}

/// Picks outfits from the candidates a [`RuleStore`] offers.
pub struct Selector<'a> {
    store: &'a dyn RuleStore,
}

impl<'a> Selector<'a> {
    pub fn new(store: &'a dyn RuleStore) -> Self {
        Selector { store }
    }

    /// Generate a recommendation using the thread RNG and the local clock.
    ///
    /// Never fails: problems with the input come back as
    /// [`RecommendationResult::Error`].
    pub fn generate(
        &self,
        weather: WeatherCondition,
        occasion: Occasion,
        gender: GenderPreference,
        modesty: ModestyPreference,
        date: Option<DateInput>,
    ) -> RecommendationResult {
        let request = OutfitRequest {
            weather,
            occasion,
            gender,
            modesty,
            date,
        };
        self.generate_with(&request, &mut rand::thread_rng(), Local::now().naive_local())
    }

    /// Generate a recommendation with an explicit random source and clock.
    ///
    /// `now` only stamps the result and stands in for a missing request date.
    pub fn generate_with<R: Rng + ?Sized>(
        &self,
        request: &OutfitRequest,
        rng: &mut R,
        now: NaiveDateTime,
    ) -> RecommendationResult {
        let stamp = Timestamp::at(now);
        match self.try_generate(request, rng, now, &stamp) {
            Ok(recommendation) => RecommendationResult::Outfit(recommendation),
            Err(e) => {
                tracing::warn!(error = %e, "recommendation generation failed");
                RecommendationResult::Error(GenerationError {
                    error: e.to_string(),
                    date: stamp.date,
                    time: stamp.time,
                })
            }
        }
    }

    fn try_generate<R: Rng + ?Sized>(
        &self,
        request: &OutfitRequest,
        rng: &mut R,
        now: NaiveDateTime,
        stamp: &Timestamp,
    ) -> Result<Recommendation, BusanaError> {
        let month = match &request.date {
            Some(date) => date.month_number()?,
            None => i64::from(now.month()),
        };
        let season = self.store.season_for_month(month);

        let fetch = |category| self.store.lookup(category, request.occasion, request.weather);
        let mut tops = fetch(Category::Top);
        let mut bottoms = fetch(Category::Bottom);
        let outerwear = fetch(Category::Outerwear);
        let shoes = fetch(Category::Shoes);
        let accessories = fetch(Category::Accessories);

        match request.gender {
            GenderPreference::Masculine => {
                filters::strip_feminine(&mut tops);
                filters::strip_feminine(&mut bottoms);
            }
            GenderPreference::Feminine => {
                filters::add_feminine(request.occasion, &mut tops, &mut bottoms, rng);
            }
            GenderPreference::Neutral => {}
        }

        if request.modesty == ModestyPreference::Modest {
            filters::apply_modesty(&mut tops, &mut bottoms);
        }

        let color_recommendation = self.store.color_advice(season);
        let weather_tip = self.store.weather_tip(request.weather);
        let occasion_tip = self.store.occasion_tip(request.occasion);

        let top = pick(&tops, UNAVAILABLE, rng);
        let bottom = pick(&bottoms, UNAVAILABLE, rng);
        let outerwear = pick(&outerwear, NOT_NEEDED, rng);
        let shoes = pick(&shoes, UNAVAILABLE, rng);
        let accessories = sample_accessories(&accessories, rng);

        tracing::debug!(
            %season,
            top = %top,
            bottom = %bottom,
            outerwear = %outerwear,
            shoes = %shoes,
            backend = self.store.backend_name(),
            "outfit selected"
        );

        Ok(Recommendation {
            date: stamp.date.clone(),
            time: stamp.time.clone(),
            top,
            bottom,
            outerwear: (!outerwear.contains(NOT_NEEDED)).then_some(outerwear),
            shoes,
            accessories,
            color_recommendation,
            weather_tip,
            occasion_tip,
        })
    }
}

fn pick<R: Rng + ?Sized>(items: &[String], placeholder: &str, rng: &mut R) -> String {
    items
        .choose(rng)
        .cloned()
        .unwrap_or_else(|| placeholder.to_string())
}

/// Two or three distinct accessories, fewer if the catalog offers fewer.
fn sample_accessories<R: Rng + ?Sized>(items: &[String], rng: &mut R) -> Vec<String> {
    if items.is_empty() {
        return vec![MINIMAL_ACCESSORIES.to_string()];
    }
    let amount = rng.gen_range(2..=3).min(items.len());
    items.choose_multiple(rng, amount).cloned().collect()
}
