use busana_core::bridge::syntax::export_facts;
use busana_core::config::AppConfig;
use busana_core::error::BusanaError;
use busana_core::model::{Category, Occasion, WeatherCondition};
use busana_core::rules::builtin;
use busana_core::rules::schema::CatalogDef;
use std::path::{Path, PathBuf};

pub fn list() -> Result<(), BusanaError> {
    println!("Available predefined catalogs:\n");
    for name in builtin::PRESETS {
        let catalog = builtin::load_preset(name)?;
        println!("  {:<8} {} (v{})", name, catalog.name, catalog.version);
        if let Some(ref desc) = catalog.description {
            println!("           {}", desc);
        }
        println!();
    }
    Ok(())
}

pub fn explain(config: &AppConfig, preset: Option<&str>) -> Result<(), BusanaError> {
    let catalog = match preset {
        Some(name) => builtin::load_preset(name)?,
        None => busana_core::load_configured_catalog(&config.rules)?,
    };

    println!("{} (version {})\n", catalog.name, catalog.version);
    if let Some(ref desc) = catalog.description {
        println!("{}\n", desc);
    }

    for category in Category::ALL {
        println!("{} [{}]", category.label(), category);
        for occasion in Occasion::ALL {
            println!("  {}", occasion.label());
            for weather in WeatherCondition::ALL {
                let items = catalog
                    .items_for(category, occasion, weather)
                    .map(|items| items.join(", "))
                    .unwrap_or_else(|| "-".to_string());
                println!("    {:<18} {}", weather.label(), items);
            }
        }
        println!();
    }

    print_advice(&catalog);
    Ok(())
}

fn print_advice(catalog: &CatalogDef) {
    if !catalog.color_advice.is_empty() {
        println!("Color advice:");
        for (season, text) in &catalog.color_advice {
            println!("  {:<8} {}", season, text);
        }
        println!();
    }

    if !catalog.weather_tips.is_empty() {
        println!("Weather tips:");
        for (weather, text) in &catalog.weather_tips {
            println!("  {:<8} {}", weather, text);
        }
        println!();
    }

    if !catalog.occasion_tips.is_empty() {
        println!("Occasion tips:");
        for (occasion, text) in &catalog.occasion_tips {
            println!("  {:<8} {}", occasion, text);
        }
        println!();
    }
}

pub fn validate(file: &Path) -> Result<(), BusanaError> {
    let catalog = busana_core::rules::load_catalog(file)?;

    let lists: usize = catalog
        .items
        .values()
        .flat_map(|occasions| occasions.values())
        .map(|weathers| weathers.len())
        .sum();

    println!("Catalog '{}' (v{}) is valid.", catalog.name, catalog.version);
    println!("  Item lists: {}", lists);

    // Gaps are allowed but yield empty lookups and placeholder items
    let gaps = busana_core::rules::coverage_gaps(&catalog);
    let mut warnings: Vec<String> = gaps
        .iter()
        .map(|(c, o, w)| format!("no items for {}/{}/{}", c, o, w))
        .collect();

    for season in busana_core::model::Season::ALL {
        if !catalog.color_advice.contains_key(&season) {
            warnings.push(format!("no color advice for {}", season));
        }
    }

    if !warnings.is_empty() {
        println!("\nWarnings:");
        for w in &warnings {
            println!("  - {}", w);
        }
    }

    Ok(())
}

pub fn export_prolog(config: &AppConfig, out: Option<PathBuf>) -> Result<(), BusanaError> {
    let catalog = busana_core::load_configured_catalog(&config.rules)?;
    let facts = export_facts(&catalog);

    match out {
        Some(path) => {
            std::fs::write(&path, facts)?;
            eprintln!("Knowledge base written to {}", path.display());
        }
        None => print!("{facts}"),
    }

    Ok(())
}
