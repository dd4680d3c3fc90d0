//! Integration tests for the recommend() end-to-end pipeline.
//!
//! Uses a MockEngine that answers queries from canned bindings without
//! invoking swipl, so these tests run without SWI-Prolog installed.

use busana_core::bridge::{Bindings, ExternalRuleStore, QueryBackend, Term};
use busana_core::config::{BackendKind, RulesConfig};
use busana_core::error::BusanaError;
use busana_core::model::{
    Category, DateInput, GenderPreference, ModestyPreference, Occasion, WeatherCondition,
};
use busana_core::rules::builtin::default_catalog;
use busana_core::rules::{RuleStore, StaticRuleStore};
use busana_core::select::{render, OutfitRequest, RecommendationResult, Selector};
use busana_core::{open_store, recommend};
use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::Write;
use std::path::PathBuf;

struct MockEngine {
    items: Vec<String>,
}

impl QueryBackend for MockEngine {
    fn query(&self, goal: &str) -> Result<Vec<Bindings>, BusanaError> {
        if !goal.starts_with("item_options(tops,") {
            return Ok(vec![]);
        }
        let mut b = Bindings::new();
        b.insert("Items".to_string(), Term::List(self.items.clone()));
        Ok(vec![b])
    }

    fn backend_name(&self) -> &str {
        "mock"
    }
}

fn static_store() -> StaticRuleStore {
    StaticRuleStore::new(default_catalog().unwrap())
}

fn request(
    weather: WeatherCondition,
    occasion: Occasion,
    gender: GenderPreference,
    modesty: ModestyPreference,
) -> OutfitRequest {
    OutfitRequest {
        weather,
        occasion,
        gender,
        modesty,
        date: Some(DateInput::from_numbers(15, 7, 2025)),
    }
}

// ---------------------------------------------------------------------------
// Test 1: Hot sports day, neutral, no modesty constraint
// ---------------------------------------------------------------------------
#[test]
fn hot_sports_neutral_draws_from_catalog() {
    let store = static_store();
    let req = request(
        WeatherCondition::Hot,
        Occasion::Sports,
        GenderPreference::Neutral,
        ModestyPreference::None,
    );

    let tops = store.lookup(Category::Top, Occasion::Sports, WeatherCondition::Hot);
    let bottoms = store.lookup(Category::Bottom, Occasion::Sports, WeatherCondition::Hot);
    let shoes = store.lookup(Category::Shoes, Occasion::Sports, WeatherCondition::Hot);
    let accessories = store.lookup(Category::Accessories, Occasion::Sports, WeatherCondition::Hot);

    for _ in 0..25 {
        let result = recommend(&store, &req);
        let outfit = result.outfit().expect("outfit expected");

        assert!(tops.contains(&outfit.top));
        assert!(bottoms.contains(&outfit.bottom));
        assert!(shoes.contains(&outfit.shoes));
        // sports/hot outerwear is only "Tidak diperlukan"
        assert_eq!(outfit.outerwear, None);
        assert!(outfit.accessories.len() == 2 || outfit.accessories.len() == 3);
        assert!(outfit.accessories.iter().all(|a| accessories.contains(a)));
        assert!(outfit.color_recommendation.contains("musim panas"));
        assert!(!outfit.date.is_empty());
        assert!(!outfit.time.is_empty());
    }
}

// ---------------------------------------------------------------------------
// Test 2: Non-numeric month yields an error result, not a failure
// ---------------------------------------------------------------------------
#[test]
fn malformed_month_yields_error_result() {
    let store = static_store();
    let mut req = OutfitRequest::new(WeatherCondition::Warm, Occasion::Casual);
    req.date = Some(DateInput::new("01", "Maret", "2025"));

    let result = recommend(&store, &req);
    let err = result.error().expect("error result expected");
    assert!(err.error.contains("Maret"));
    assert_eq!(err.time.len(), 5);
    assert!(!err.date.is_empty());

    let text = render(&result);
    assert!(text.starts_with("Error: "));

    let json = serde_json::to_value(&result).unwrap();
    assert!(json.get("error").is_some());
    assert!(json.get("top").is_none());
}

// ---------------------------------------------------------------------------
// Test 3: Masculine + modest on a casual hot day
// ---------------------------------------------------------------------------
#[test]
fn masculine_modest_casual_hot() {
    let store = static_store();
    let selector = Selector::new(&store);
    let mut rng = StdRng::seed_from_u64(42);
    let now = NaiveDate::from_ymd_opt(2025, 7, 15)
        .unwrap()
        .and_hms_opt(7, 45, 0)
        .unwrap();
    let req = request(
        WeatherCondition::Hot,
        Occasion::Casual,
        GenderPreference::Masculine,
        ModestyPreference::Modest,
    );

    for _ in 0..50 {
        let result = selector.generate_with(&req, &mut rng, now);
        let outfit = result.outfit().unwrap();
        // Tank top and Crop top are gone; Kaos katun and T-shirt vintage remain
        assert!(["Kaos katun", "T-shirt vintage"].contains(&outfit.top.as_str()));
        // Celana pendek, Rok mini and Rok flare are gone
        assert_eq!(outfit.bottom, "Jeans pendek");
        assert_eq!(outfit.time, "07:45");
    }
}

// ---------------------------------------------------------------------------
// Test 4: Feminine sports always offers the added tops
// ---------------------------------------------------------------------------
#[test]
fn feminine_sports_can_pick_added_tops() {
    let store = static_store();
    let selector = Selector::new(&store);
    let mut rng = StdRng::seed_from_u64(9);
    let now = NaiveDate::from_ymd_opt(2025, 4, 2)
        .unwrap()
        .and_hms_opt(18, 0, 0)
        .unwrap();
    let req = request(
        WeatherCondition::Warm,
        Occasion::Sports,
        GenderPreference::Feminine,
        ModestyPreference::None,
    );

    let mut seen_added = false;
    for _ in 0..100 {
        let result = selector.generate_with(&req, &mut rng, now);
        let top = &result.outfit().unwrap().top;
        if top == "Sport bra" || top == "Tank top feminine" {
            seen_added = true;
        }
    }
    assert!(seen_added);
}

// ---------------------------------------------------------------------------
// Test 5: External engine answers tops; everything else falls back
// ---------------------------------------------------------------------------
#[test]
fn external_engine_with_partial_answers() {
    let store = ExternalRuleStore::with_backend(
        Box::new(MockEngine {
            items: vec!["Kemeja dari mesin aturan".to_string()],
        }),
        static_store(),
    );
    let req = request(
        WeatherCondition::Rainy,
        Occasion::Formal,
        GenderPreference::Neutral,
        ModestyPreference::None,
    );

    let result = recommend(&store, &req);
    let outfit = result.outfit().unwrap();
    assert_eq!(outfit.top, "Kemeja dari mesin aturan");

    let fallback_shoes =
        static_store().lookup(Category::Shoes, Occasion::Formal, WeatherCondition::Rainy);
    assert!(fallback_shoes.contains(&outfit.shoes));
    assert!(outfit.outerwear.is_some());
}

// ---------------------------------------------------------------------------
// Test 6: open_store with a custom catalog and a missing prolog KB
// ---------------------------------------------------------------------------
#[test]
fn open_store_prolog_without_kb_uses_catalog() {
    let mut catalog_file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    catalog_file
        .write_all(
            br#"{
                "name": "Kecil",
                "version": "1.0",
                "items": {
                    "tops": { "casual": { "warm": ["Polo shirt"] } },
                    "bottoms": { "casual": { "warm": ["Celana chino"] } }
                },
                "color_advice": { "summer": "Pakai warna cerah." }
            }"#,
        )
        .unwrap();

    let config = RulesConfig {
        backend: BackendKind::Prolog,
        catalog: Some(catalog_file.path().to_path_buf()),
        prolog_file: PathBuf::from("/nonexistent/outfit_kb.pl"),
    };
    let store = open_store(&config).unwrap();
    assert_eq!(store.backend_name(), "static");

    let req = request(
        WeatherCondition::Warm,
        Occasion::Casual,
        GenderPreference::Neutral,
        ModestyPreference::None,
    );
    let result = recommend(store.as_ref(), &req);
    let outfit = result.outfit().unwrap();
    assert_eq!(outfit.top, "Polo shirt");
    assert_eq!(outfit.bottom, "Celana chino");
    assert_eq!(outfit.shoes, "Outfit tidak tersedia");
    assert_eq!(outfit.accessories, vec!["Aksesoris minimal"]);
    assert_eq!(outfit.color_recommendation, "Pakai warna cerah.");

    let text = render(&result);
    assert!(!text.contains("Outer:"));
    assert!(text.contains("👕 Atasan: Polo shirt"));
}

// ---------------------------------------------------------------------------
// Test 7: open_store rejects a broken custom catalog
// ---------------------------------------------------------------------------
#[test]
fn open_store_rejects_invalid_catalog() {
    let mut catalog_file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    catalog_file.write_all(b"{ not json").unwrap();
    let config = RulesConfig {
        backend: BackendKind::Static,
        catalog: Some(catalog_file.path().to_path_buf()),
        prolog_file: PathBuf::from("outfit_kb.pl"),
    };
    assert!(matches!(
        open_store(&config),
        Err(BusanaError::CatalogLoad { .. })
    ));
}

// ---------------------------------------------------------------------------
// Test 8: Rendering a generated result is stable
// ---------------------------------------------------------------------------
#[test]
fn render_generated_result_twice() {
    let store = static_store();
    let req = request(
        WeatherCondition::Cold,
        Occasion::Formal,
        GenderPreference::Feminine,
        ModestyPreference::Modest,
    );
    let result: RecommendationResult = recommend(&store, &req);
    let first = render(&result);
    assert_eq!(first, render(&result));
    assert!(first.starts_with("=== REKOMENDASI OUTFIT "));
    assert!(first.contains("Dibuat pada: "));
}
