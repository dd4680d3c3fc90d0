use busana_core::model::{Category, Occasion, WeatherCondition};
use busana_core::select::{render, RecommendationResult};

pub fn print_recommendation(result: &RecommendationResult) {
    println!("{}", render(result));
}

pub fn print_items(
    category: Category,
    occasion: Occasion,
    weather: WeatherCondition,
    items: &[String],
) {
    println!(
        "{} for {} / {}:\n",
        category.label(),
        occasion.label(),
        weather.label()
    );

    if items.is_empty() {
        println!("  (no items in catalog)");
        return;
    }

    for (i, item) in items.iter().enumerate() {
        println!("  {:>2}. {}", i + 1, item);
    }
}
