use crate::model::{Category, Occasion, WeatherCondition};
use crate::rules::schema::CatalogDef;
use std::fmt::Write;

/// Name of the variable the item list is bound to in lookup queries.
pub const ITEMS_VAR: &str = "Items";

/// A goal of the form `predicate(arg1, ..., Var)`.
#[derive(Debug, Clone)]
pub struct Goal {
    predicate: String,
    args: Vec<String>,
}

impl Goal {
    pub fn new(predicate: &str) -> Self {
        Goal {
            predicate: predicate.to_string(),
            args: Vec::new(),
        }
    }

    /// Add an atom argument, quoted when needed.
    pub fn atom(mut self, value: &str) -> Self {
        self.args.push(quote_atom(value));
        self
    }

    /// Add an unbound variable argument.
    pub fn var(mut self, name: &str) -> Self {
        self.args.push(name.to_string());
        self
    }

    pub fn render(&self) -> String {
        format!("{}({})", self.predicate, self.args.join(", "))
    }
}

pub fn item_options_goal(
    category: Category,
    occasion: Occasion,
    weather: WeatherCondition,
) -> String {
    Goal::new("item_options")
        .atom(category.as_str())
        .atom(occasion.as_str())
        .atom(weather.as_str())
        .var(ITEMS_VAR)
        .render()
}

/// Quote an atom unless it is a plain lowercase identifier.
pub fn quote_atom(s: &str) -> String {
    let mut chars = s.chars();
    let plain = matches!(chars.next(), Some(c) if c.is_ascii_lowercase())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');
    if plain {
        return s.to_string();
    }
    let escaped = s.replace('\\', "\\\\").replace('\'', "\\'");
    format!("'{}'", escaped)
}

/// Render a catalog as an `item_options/4` knowledge base.
pub fn export_facts(catalog: &CatalogDef) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "% {} (version {})", catalog.name, catalog.version);
    let _ = writeln!(out, "% item_options(Category, Occasion, Weather, Items).");
    let _ = writeln!(out);

    for (category, occasions) in &catalog.items {
        for (occasion, weathers) in occasions {
            for (weather, items) in weathers {
                let list: Vec<String> = items.iter().map(|i| quote_atom(i)).collect();
                let _ = writeln!(
                    out,
                    "item_options({}, {}, {}, [{}]).",
                    category,
                    occasion,
                    weather,
                    list.join(", ")
                );
            }
        }
        let _ = writeln!(out);
    }

    out
}
