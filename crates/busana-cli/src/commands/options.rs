use busana_core::config::AppConfig;
use busana_core::error::BusanaError;

use super::{parse_category, parse_occasion, parse_weather};
use crate::output;

pub fn list(
    config: &AppConfig,
    category: &str,
    occasion: &str,
    weather: &str,
    output_format: &str,
) -> Result<(), BusanaError> {
    let category = parse_category(category)?;
    let occasion = parse_occasion(occasion)?;
    let weather = parse_weather(weather)?;

    let store = busana_core::open_store(&config.rules)?;
    let items = store.lookup(category, occasion, weather);

    match output_format {
        "json" => output::json::print(&items)?,
        _ => output::text::print_items(category, occasion, weather, &items),
    }

    Ok(())
}

pub fn season(config: &AppConfig, month: &str) -> Result<(), BusanaError> {
    let month: i64 = month
        .trim()
        .parse()
        .map_err(|_| BusanaError::InvalidDate(format!("month '{}' is not a number", month)))?;

    let store = busana_core::open_store(&config.rules)?;
    let season = store.season_for_month(month);

    println!("Month {}: {}", month, season);
    println!("  {}", store.color_advice(season));
    Ok(())
}
