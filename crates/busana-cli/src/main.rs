mod commands;
mod output;

use busana_core::config::{
    AppConfig, BackendKind, ConfigOverrides, LoadOptions, LogFormat, LoggingConfig,
};
use busana_core::error::BusanaError;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "busana",
    version,
    about = "Daily outfit recommendations based on weather and occasion"
)]
struct Cli {
    /// Config file (default: ./busana.toml if present)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Custom JSON catalog instead of the built-in one
    #[arg(long, global = true, value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// Rule store backend: static or prolog
    #[arg(long, global = true, value_name = "NAME")]
    backend: Option<String>,

    /// Prolog knowledge base consulted by the prolog backend
    #[arg(long, global = true, value_name = "FILE")]
    prolog_file: Option<PathBuf>,

    /// Log level: trace, debug, info, warn, error
    #[arg(long, global = true, value_name = "LEVEL")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend an outfit for the given conditions
    Recommend {
        /// Weather: hot, warm, cold, rainy (or panas, hangat, dingin, hujan)
        #[arg(short, long)]
        weather: String,

        /// Occasion: formal, casual, sports (or kerja, santai, olahraga)
        #[arg(short = 'a', long)]
        occasion: String,

        /// Style preference: masculine, feminine, neutral
        #[arg(short, long, default_value = "neutral")]
        gender: String,

        /// Special consideration: modest or none
        #[arg(short, long, default_value = "none")]
        modesty: String,

        /// Outfit date as dd/mm/yyyy (default: today)
        #[arg(short, long)]
        date: Option<String>,

        /// Output format: text (default) or json
        #[arg(short, long, default_value = "text")]
        output: String,
    },
    /// List the catalog's candidate items for one category
    Options {
        /// Category: tops, bottoms, outerwear, shoes, accessories
        category: String,
        /// Occasion: formal, casual, sports
        occasion: String,
        /// Weather: hot, warm, cold, rainy
        weather: String,

        /// Output format: text (default) or json
        #[arg(short, long, default_value = "text")]
        output: String,
    },
    /// Show the season and color advice for a month number
    Season {
        /// Month number (1-12)
        #[arg(allow_hyphen_values = true)]
        month: String,
    },
    /// Inspect and validate catalogs
    Rules {
        #[command(subcommand)]
        action: RulesAction,
    },
}

#[derive(Subcommand)]
enum RulesAction {
    /// List predefined catalogs
    List,
    /// Print a catalog's items and advice tables
    Explain {
        /// Preset name (default: the configured catalog)
        preset: Option<String>,
    },
    /// Validate a custom catalog file
    Validate {
        /// Path to JSON catalog file
        file: PathBuf,
    },
    /// Export the configured catalog as a Prolog knowledge base
    ExportProlog {
        /// Write to a file instead of stdout
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,
    },
}

fn init_logging(logging: &LoggingConfig) {
    use tracing::Level;

    let level = logging.level.parse::<Level>().unwrap_or(Level::WARN);
    let builder = tracing_subscriber::fmt()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr);

    match logging.format {
        LogFormat::Compact => builder.compact().init(),
        LogFormat::Pretty => builder.pretty().init(),
        LogFormat::Json => builder.json().init(),
    }
}

fn run(cli: Cli) -> Result<(), BusanaError> {
    let backend = cli.backend.as_deref().map(str::parse::<BackendKind>).transpose()?;
    let config = AppConfig::load(LoadOptions {
        config_path: cli.config,
        overrides: ConfigOverrides {
            backend,
            catalog: cli.catalog,
            prolog_file: cli.prolog_file,
            log_level: cli.log_level,
        },
    })?;
    init_logging(&config.logging);

    match cli.command {
        Commands::Recommend {
            weather,
            occasion,
            gender,
            modesty,
            date,
            output,
        } => commands::recommend::run(
            &config,
            commands::RecommendArgs {
                weather,
                occasion,
                gender,
                modesty,
                date,
            },
            &output,
        ),
        Commands::Options {
            category,
            occasion,
            weather,
            output,
        } => commands::options::list(&config, &category, &occasion, &weather, &output),
        Commands::Season { month } => commands::options::season(&config, &month),
        Commands::Rules { action } => match action {
            RulesAction::List => commands::rules::list(),
            RulesAction::Explain { preset } => {
                commands::rules::explain(&config, preset.as_deref())
            }
            RulesAction::Validate { file } => commands::rules::validate(&file),
            RulesAction::ExportProlog { out } => commands::rules::export_prolog(&config, out),
        },
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
