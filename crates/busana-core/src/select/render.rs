use crate::model::Category;
use crate::select::outcome::{Recommendation, RecommendationResult};

/// Format a result as display text.
pub fn render(result: &RecommendationResult) -> String {
    match result {
        RecommendationResult::Outfit(r) => render_outfit(r),
        RecommendationResult::Error(e) => format!("Error: {}", e.error),
    }
}

fn render_outfit(r: &Recommendation) -> String {
    let mut text = Vec::new();
    text.push(format!("=== REKOMENDASI OUTFIT {} ===\n", r.date));
    text.push(format!("👕 {}: {}\n", Category::Top.label(), r.top));
    text.push(format!("👖 {}: {}\n", Category::Bottom.label(), r.bottom));

    if let Some(outerwear) = &r.outerwear {
        text.push(format!("🧥 {}: {}\n", Category::Outerwear.label(), outerwear));
    }

    text.push(format!("👟 {}: {}\n", Category::Shoes.label(), r.shoes));
    text.push(format!(
        "👜 {}: {}\n",
        Category::Accessories.label(),
        r.accessories.join(", ")
    ));
    text.push(format!("🎨 {}\n", r.color_recommendation));

    if !r.weather_tip.is_empty() {
        text.push(format!("\n{}", r.weather_tip));
    }

    if !r.occasion_tip.is_empty() {
        text.push(format!("\n{}", r.occasion_tip));
    }

    text.push(format!("\nDibuat pada: {}", r.time));

    text.join("\n")
}
