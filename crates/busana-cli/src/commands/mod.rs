pub mod options;
pub mod recommend;
pub mod rules;

use busana_core::error::BusanaError;
use busana_core::model::{Category, GenderPreference, ModestyPreference, Occasion, WeatherCondition};

/// Raw `recommend` arguments as typed on the command line.
pub struct RecommendArgs {
    pub weather: String,
    pub occasion: String,
    pub gender: String,
    pub modesty: String,
    pub date: Option<String>,
}

fn invalid(field: &'static str, value: &str, expected: &str) -> BusanaError {
    BusanaError::InvalidInput {
        field,
        value: value.to_string(),
        expected: expected.to_string(),
    }
}

pub fn parse_weather(s: &str) -> Result<WeatherCondition, BusanaError> {
    WeatherCondition::from_str_loose(s)
        .ok_or_else(|| invalid("weather", s, "hot, warm, cold, rainy"))
}

pub fn parse_occasion(s: &str) -> Result<Occasion, BusanaError> {
    Occasion::from_str_loose(s).ok_or_else(|| invalid("occasion", s, "formal, casual, sports"))
}

pub fn parse_gender(s: &str) -> Result<GenderPreference, BusanaError> {
    GenderPreference::from_str_loose(s)
        .ok_or_else(|| invalid("gender", s, "masculine, feminine, neutral"))
}

pub fn parse_modesty(s: &str) -> Result<ModestyPreference, BusanaError> {
    ModestyPreference::from_str_loose(s).ok_or_else(|| invalid("modesty", s, "modest, none"))
}

pub fn parse_category(s: &str) -> Result<Category, BusanaError> {
    Category::from_str_loose(s).ok_or_else(|| {
        invalid(
            "category",
            s,
            "tops, bottoms, outerwear, shoes, accessories",
        )
    })
}
