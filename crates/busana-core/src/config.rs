use crate::error::BusanaError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "busana.toml";
pub const DEFAULT_PROLOG_FILE: &str = "outfit_kb.pl";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub rules: RulesConfig,
    pub logging: LoggingConfig,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RulesConfig {
    pub backend: BackendKind,
    /// Custom JSON catalog; the built-in catalog when absent.
    pub catalog: Option<PathBuf>,
    /// Knowledge base consulted by the prolog backend.
    pub prolog_file: PathBuf,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackendKind {
    #[default]
    Static,
    Prolog,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Compact,
    Pretty,
    Json,
}

#[derive(Clone, Debug, Default)]
pub struct ConfigOverrides {
    pub backend: Option<BackendKind>,
    pub catalog: Option<PathBuf>,
    pub prolog_file: Option<PathBuf>,
    pub log_level: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub struct LoadOptions {
    pub config_path: Option<PathBuf>,
    pub overrides: ConfigOverrides,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigPatch {
    rules: Option<RulesPatch>,
    logging: Option<LoggingPatch>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RulesPatch {
    backend: Option<BackendKind>,
    catalog: Option<PathBuf>,
    prolog_file: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct LoggingPatch {
    level: Option<String>,
    format: Option<LogFormat>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            rules: RulesConfig {
                backend: BackendKind::Static,
                catalog: None,
                prolog_file: PathBuf::from(DEFAULT_PROLOG_FILE),
            },
            logging: LoggingConfig {
                level: "warn".to_string(),
                format: LogFormat::Compact,
            },
        }
    }
}

impl std::str::FromStr for BackendKind {
    type Err = BusanaError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "static" => Ok(Self::Static),
            "prolog" => Ok(Self::Prolog),
            other => Err(BusanaError::ConfigInvalid(format!(
                "unsupported backend `{other}` (expected static|prolog)"
            ))),
        }
    }
}

impl std::str::FromStr for LogFormat {
    type Err = BusanaError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "compact" => Ok(Self::Compact),
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(BusanaError::ConfigInvalid(format!(
                "unsupported log format `{other}` (expected compact|pretty|json)"
            ))),
        }
    }
}

impl AppConfig {
    /// Defaults, then the config file, then `BUSANA_*` environment
    /// variables, then explicit overrides.
    ///
    /// An explicit `config_path` must exist; otherwise `busana.toml` in the
    /// working directory is read if present.
    pub fn load(options: LoadOptions) -> Result<Self, BusanaError> {
        Self::load_with_env(options, |key| std::env::var(key).ok())
    }

    pub fn load_with_env<F>(options: LoadOptions, env: F) -> Result<Self, BusanaError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        match options.config_path.as_deref() {
            Some(path) if !path.exists() => {
                return Err(BusanaError::MissingConfigFile(path.to_path_buf()));
            }
            Some(path) => config.apply_patch(read_patch(path)?),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    config.apply_patch(read_patch(default_path)?);
                }
            }
        }

        config.apply_env_overrides(env)?;
        config.apply_overrides(options.overrides);
        config.validate()?;

        Ok(config)
    }

    fn apply_patch(&mut self, patch: ConfigPatch) {
        if let Some(rules) = patch.rules {
            if let Some(backend) = rules.backend {
                self.rules.backend = backend;
            }
            if let Some(catalog) = rules.catalog {
                self.rules.catalog = Some(catalog);
            }
            if let Some(prolog_file) = rules.prolog_file {
                self.rules.prolog_file = prolog_file;
            }
        }

        if let Some(logging) = patch.logging {
            if let Some(level) = logging.level {
                self.logging.level = level;
            }
            if let Some(format) = logging.format {
                self.logging.format = format;
            }
        }
    }

    fn apply_env_overrides<F>(&mut self, env: F) -> Result<(), BusanaError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| env(key).filter(|v| !v.trim().is_empty());

        if let Some(value) = read("BUSANA_BACKEND") {
            self.rules.backend = value
                .parse::<BackendKind>()
                .map_err(|_| BusanaError::InvalidEnvOverride {
                    key: "BUSANA_BACKEND".into(),
                    value,
                })?;
        }
        if let Some(value) = read("BUSANA_CATALOG") {
            self.rules.catalog = Some(PathBuf::from(value));
        }
        if let Some(value) = read("BUSANA_PROLOG_FILE") {
            self.rules.prolog_file = PathBuf::from(value);
        }
        if let Some(value) = read("BUSANA_LOG_LEVEL") {
            self.logging.level = value;
        }
        if let Some(value) = read("BUSANA_LOG_FORMAT") {
            self.logging.format = value
                .parse::<LogFormat>()
                .map_err(|_| BusanaError::InvalidEnvOverride {
                    key: "BUSANA_LOG_FORMAT".into(),
                    value,
                })?;
        }

        Ok(())
    }

    fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        if let Some(backend) = overrides.backend {
            self.rules.backend = backend;
        }
        if let Some(catalog) = overrides.catalog {
            self.rules.catalog = Some(catalog);
        }
        if let Some(prolog_file) = overrides.prolog_file {
            self.rules.prolog_file = prolog_file;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), BusanaError> {
        let level = self.logging.level.trim().to_ascii_lowercase();
        if !matches!(
            level.as_str(),
            "trace" | "debug" | "info" | "warn" | "error"
        ) {
            return Err(BusanaError::ConfigInvalid(format!(
                "logging.level `{}` must be one of trace|debug|info|warn|error",
                self.logging.level
            )));
        }

        if self.rules.prolog_file.as_os_str().is_empty() {
            return Err(BusanaError::ConfigInvalid(
                "rules.prolog_file must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

fn read_patch(path: &Path) -> Result<ConfigPatch, BusanaError> {
    let raw = fs::read_to_string(path).map_err(|e| BusanaError::ConfigRead {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    toml::from_str::<ConfigPatch>(&raw).map_err(|source| BusanaError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}
