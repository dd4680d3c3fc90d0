use busana_core::config::AppConfig;
use busana_core::error::BusanaError;
use busana_core::model::DateInput;
use busana_core::select::OutfitRequest;

use super::{parse_gender, parse_modesty, parse_occasion, parse_weather, RecommendArgs};
use crate::output;

pub fn run(
    config: &AppConfig,
    args: RecommendArgs,
    output_format: &str,
) -> Result<(), BusanaError> {
    let request = OutfitRequest {
        weather: parse_weather(&args.weather)?,
        occasion: parse_occasion(&args.occasion)?,
        gender: parse_gender(&args.gender)?,
        modesty: parse_modesty(&args.modesty)?,
        date: args.date.as_deref().map(DateInput::parse).transpose()?,
    };

    let store = busana_core::open_store(&config.rules)?;
    let result = busana_core::recommend(store.as_ref(), &request);

    match output_format {
        "json" => output::json::print(&result)?,
        _ => output::text::print_recommendation(&result),
    }

    Ok(())
}
