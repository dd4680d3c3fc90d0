use crate::error::BusanaError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::IntErrorKind;
use std::str::FromStr;

/// Garment slot of an outfit. Serialized names match the catalog keys and
/// the atoms used in rule engine queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "tops")]
    Top,
    #[serde(rename = "bottoms")]
    Bottom,
    #[serde(rename = "outerwear")]
    Outerwear,
    #[serde(rename = "shoes")]
    Shoes,
    #[serde(rename = "accessories")]
    Accessories,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Top,
        Category::Bottom,
        Category::Outerwear,
        Category::Shoes,
        Category::Accessories,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Top => "tops",
            Category::Bottom => "bottoms",
            Category::Outerwear => "outerwear",
            Category::Shoes => "shoes",
            Category::Accessories => "accessories",
        }
    }

    /// Label used in the rendered recommendation.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Top => "Atasan",
            Category::Bottom => "Bawahan",
            Category::Outerwear => "Outer",
            Category::Shoes => "Alas Kaki",
            Category::Accessories => "Aksesoris",
        }
    }

    pub fn from_str_loose(s: &str) -> Option<Category> {
        match s.trim().to_lowercase().as_str() {
            "tops" | "top" | "atasan" => Some(Category::Top),
            "bottoms" | "bottom" | "bawahan" => Some(Category::Bottom),
            "outerwear" | "outer" => Some(Category::Outerwear),
            "shoes" | "shoe" | "alas kaki" | "sepatu" => Some(Category::Shoes),
            "accessories" | "accessory" | "aksesoris" => Some(Category::Accessories),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Occasion {
    Formal,
    Casual,
    Sports,
}

impl Occasion {
    pub const ALL: [Occasion; 3] = [Occasion::Formal, Occasion::Casual, Occasion::Sports];

    pub fn as_str(&self) -> &'static str {
        match self {
            Occasion::Formal => "formal",
            Occasion::Casual => "casual",
            Occasion::Sports => "sports",
        }
    }

    /// Display label offered by the input form.
    pub fn label(&self) -> &'static str {
        match self {
            Occasion::Formal => "Formal (Kerja/Meeting)",
            Occasion::Casual => "Casual (Santai/Jalan-jalan)",
            Occasion::Sports => "Olahraga/Aktivitas Fisik",
        }
    }

    pub fn from_str_loose(s: &str) -> Option<Occasion> {
        let lower = s.trim().to_lowercase();
        let starts = |prefixes: &[&str]| prefixes.iter().any(|p| lower.starts_with(p));
        if starts(&["formal", "kerja", "meeting"]) {
            Some(Occasion::Formal)
        } else if starts(&["casual", "santai"]) {
            Some(Occasion::Casual)
        } else if starts(&["sport", "olahraga"]) {
            Some(Occasion::Sports)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherCondition {
    Hot,
    Warm,
    Cold,
    Rainy,
}

impl WeatherCondition {
    pub const ALL: [WeatherCondition; 4] = [
        WeatherCondition::Hot,
        WeatherCondition::Warm,
        WeatherCondition::Cold,
        WeatherCondition::Rainy,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WeatherCondition::Hot => "hot",
            WeatherCondition::Warm => "warm",
            WeatherCondition::Cold => "cold",
            WeatherCondition::Rainy => "rainy",
        }
    }

    /// Display label offered by the input form.
    pub fn label(&self) -> &'static str {
        match self {
            WeatherCondition::Hot => "Panas (>30°C)",
            WeatherCondition::Warm => "Hangat (20-30°C)",
            WeatherCondition::Cold => "Dingin (<20°C)",
            WeatherCondition::Rainy => "Hujan",
        }
    }

    pub fn from_str_loose(s: &str) -> Option<WeatherCondition> {
        let lower = s.trim().to_lowercase();
        if lower.starts_with("hot") || lower.starts_with("panas") {
            Some(WeatherCondition::Hot)
        } else if lower.starts_with("warm") || lower.starts_with("hangat") {
            Some(WeatherCondition::Warm)
        } else if lower.starts_with("cold") || lower.starts_with("dingin") {
            Some(WeatherCondition::Cold)
        } else if lower.starts_with("rain") || lower.starts_with("hujan") {
            Some(WeatherCondition::Rainy)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    pub const ALL: [Season; 4] = [Season::Spring, Season::Summer, Season::Fall, Season::Winter];

    /// Classify a month number. Anything outside 3..=11, including values
    /// outside the calendar range, is winter.
    pub fn from_month(month: i64) -> Season {
        match month {
            3..=5 => Season::Spring,
            6..=8 => Season::Summer,
            9..=11 => Season::Fall,
            _ => Season::Winter,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Fall => "fall",
            Season::Winter => "winter",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenderPreference {
    Masculine,
    Feminine,
    #[default]
    Neutral,
}

impl GenderPreference {
    pub const ALL: [GenderPreference; 3] = [
        GenderPreference::Masculine,
        GenderPreference::Feminine,
        GenderPreference::Neutral,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GenderPreference::Masculine => "masculine",
            GenderPreference::Feminine => "feminine",
            GenderPreference::Neutral => "neutral",
        }
    }

    pub fn from_str_loose(s: &str) -> Option<GenderPreference> {
        match s.trim().to_lowercase().as_str() {
            "masculine" | "maskulin" => Some(GenderPreference::Masculine),
            "feminine" | "feminin" => Some(GenderPreference::Feminine),
            "neutral" | "netral" => Some(GenderPreference::Neutral),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModestyPreference {
    Modest,
    #[default]
    None,
}

impl ModestyPreference {
    pub const ALL: [ModestyPreference; 2] = [ModestyPreference::Modest, ModestyPreference::None];

    pub fn as_str(&self) -> &'static str {
        match self {
            ModestyPreference::Modest => "modest",
            ModestyPreference::None => "none",
        }
    }

    pub fn from_str_loose(s: &str) -> Option<ModestyPreference> {
        let lower = s.trim().to_lowercase();
        if lower.starts_with("modest") || lower.contains("tertutup") {
            Some(ModestyPreference::Modest)
        } else if lower == "none" || lower == "tidak ada" {
            Some(ModestyPreference::None)
        } else {
            None
        }
    }
}

macro_rules! impl_display_and_from_str {
    ($ty:ty, $field:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.pad(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = BusanaError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <$ty>::ALL
                    .into_iter()
                    .find(|v| v.as_str() == s)
                    .ok_or_else(|| BusanaError::InvalidInput {
                        field: $field,
                        value: s.to_string(),
                        expected: <$ty>::ALL
                            .iter()
                            .map(|v| v.as_str())
                            .collect::<Vec<_>>()
                            .join(", "),
                    })
            }
        }
    };
}

impl_display_and_from_str!(Category, "category");
impl_display_and_from_str!(Occasion, "occasion");
impl_display_and_from_str!(WeatherCondition, "weather");
impl_display_and_from_str!(Season, "season");
impl_display_and_from_str!(GenderPreference, "gender");
impl_display_and_from_str!(ModestyPreference, "modesty");

/// Calendar date as entered on the form: three raw text fields.
///
/// Only the month takes part in the recommendation (it picks the season), so
/// it is the only field that is ever coerced to a number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateInput {
    pub day: String,
    pub month: String,
    pub year: String,
}

impl DateInput {
    pub fn new(day: impl Into<String>, month: impl Into<String>, year: impl Into<String>) -> Self {
        DateInput {
            day: day.into(),
            month: month.into(),
            year: year.into(),
        }
    }

    pub fn from_numbers(day: u32, month: u32, year: i32) -> Self {
        DateInput::new(format!("{day:02}"), format!("{month:02}"), year.to_string())
    }

    /// Split a `dd/mm/yyyy` (or `dd-mm-yyyy`) argument into its fields.
    ///
    /// `-` only separates fields when there is no `/`, so a signed month
    /// such as `15/-5/2025` survives. The fields are not validated here; see
    /// [`DateInput::month_number`].
    pub fn parse(s: &str) -> Result<DateInput, BusanaError> {
        let trimmed = s.trim();
        let separator = if trimmed.contains('/') { '/' } else { '-' };
        let parts: Vec<&str> = trimmed.split(separator).collect();
        match parts.as_slice() {
            [day, month, year] => Ok(DateInput::new(*day, *month, *year)),
            _ => Err(BusanaError::InvalidDate(format!(
                "'{}' is not in dd/mm/yyyy form",
                s
            ))),
        }
    }

    /// The month as an integer. Integers beyond `i64` saturate, which still
    /// classifies them as winter.
    pub fn month_number(&self) -> Result<i64, BusanaError> {
        match self.month.trim().parse::<i64>() {
            Ok(month) => Ok(month),
            Err(e) => match e.kind() {
                IntErrorKind::PosOverflow => Ok(i64::MAX),
                IntErrorKind::NegOverflow => Ok(i64::MIN),
                _ => Err(BusanaError::InvalidDate(format!(
                    "month '{}' is not a number",
                    self.month
                ))),
            },
        }
    }
}

impl fmt::Display for DateInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.day, self.month, self.year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_season_ranges() {
        for m in [3, 4, 5] {
            assert_eq!(Season::from_month(m), Season::Spring);
        }
        for m in [6, 7, 8] {
            assert_eq!(Season::from_month(m), Season::Summer);
        }
        for m in [9, 10, 11] {
            assert_eq!(Season::from_month(m), Season::Fall);
        }
        for m in [12, 1, 2] {
            assert_eq!(Season::from_month(m), Season::Winter);
        }
    }

    #[test]
    fn test_season_out_of_range_is_winter() {
        assert_eq!(Season::from_month(0), Season::Winter);
        assert_eq!(Season::from_month(13), Season::Winter);
        assert_eq!(Season::from_month(-5), Season::Winter);
    }

    #[test]
    fn test_strict_parse() {
        assert_eq!("hot".parse::<WeatherCondition>().unwrap(), WeatherCondition::Hot);
        assert_eq!("tops".parse::<Category>().unwrap(), Category::Top);
        assert!("Hot".parse::<WeatherCondition>().is_err());
        let err = "beach".parse::<Occasion>().unwrap_err().to_string();
        assert!(err.contains("formal, casual, sports"));
    }

    #[test]
    fn test_loose_parse_accepts_form_labels() {
        for w in WeatherCondition::ALL {
            assert_eq!(WeatherCondition::from_str_loose(w.label()), Some(w));
        }
        for o in Occasion::ALL {
            assert_eq!(Occasion::from_str_loose(o.label()), Some(o));
        }
        assert_eq!(
            GenderPreference::from_str_loose("Maskulin"),
            Some(GenderPreference::Masculine)
        );
        assert_eq!(
            ModestyPreference::from_str_loose("Modest/Tertutup"),
            Some(ModestyPreference::Modest)
        );
        assert_eq!(
            ModestyPreference::from_str_loose("Tidak Ada"),
            Some(ModestyPreference::None)
        );
    }

    #[test]
    fn test_loose_occasion_matches_leading_word_only() {
        assert_eq!(Occasion::from_str_loose("informal"), None);
        assert_eq!(Occasion::from_str_loose("non-formal"), None);
        assert_eq!(Occasion::from_str_loose("e-sports"), None);
        assert_eq!(Occasion::from_str_loose("after meeting"), None);
        assert_eq!(Occasion::from_str_loose("Formal"), Some(Occasion::Formal));
        assert_eq!(Occasion::from_str_loose("kerja"), Some(Occasion::Formal));
        assert_eq!(Occasion::from_str_loose("santai"), Some(Occasion::Casual));
        assert_eq!(Occasion::from_str_loose("sports"), Some(Occasion::Sports));
        assert_eq!(Occasion::from_str_loose("Olahraga"), Some(Occasion::Sports));
    }

    #[test]
    fn test_category_serde_names() {
        let json = serde_json::to_string(&Category::Top).unwrap();
        assert_eq!(json, "\"tops\"");
        let back: Category = serde_json::from_str("\"accessories\"").unwrap();
        assert_eq!(back, Category::Accessories);
    }

    #[test]
    fn test_date_input_parse() {
        let d = DateInput::parse("15/07/2025").unwrap();
        assert_eq!(d.month_number().unwrap(), 7);
        assert_eq!(d.to_string(), "15/07/2025");
        assert!(DateInput::parse("2025").is_err());
    }

    #[test]
    fn test_date_input_parse_dashes_and_signed_month() {
        let d = DateInput::parse("15-07-2025").unwrap();
        assert_eq!(d.month, "07");

        let d = DateInput::parse("15/-5/2025").unwrap();
        assert_eq!(d.month, "-5");
        assert_eq!(d.month_number().unwrap(), -5);
        assert_eq!(Season::from_month(d.month_number().unwrap()), Season::Winter);
    }

    #[test]
    fn test_huge_month_saturates_to_winter() {
        let d = DateInput::new("01", "99999999999999999999", "2025");
        assert_eq!(d.month_number().unwrap(), i64::MAX);
        assert_eq!(Season::from_month(d.month_number().unwrap()), Season::Winter);

        let d = DateInput::new("01", "-99999999999999999999", "2025");
        assert_eq!(d.month_number().unwrap(), i64::MIN);
        assert_eq!(Season::from_month(i64::MIN), Season::Winter);
    }

    #[test]
    fn test_non_numeric_month_rejected() {
        let d = DateInput::new("15", "Juli", "2025");
        assert!(matches!(d.month_number(), Err(BusanaError::InvalidDate(_))));
    }

    #[test]
    fn test_from_numbers_pads_like_form() {
        let d = DateInput::from_numbers(5, 3, 2026);
        assert_eq!(d.day, "05");
        assert_eq!(d.month, "03");
        assert_eq!(d.month_number().unwrap(), 3);
    }
}
