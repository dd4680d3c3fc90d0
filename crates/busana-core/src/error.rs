use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum BusanaError {
    #[error("failed to load catalog from {path}: {reason}")]
    CatalogLoad { path: PathBuf, reason: String },

    #[error("invalid catalog: {0}")]
    CatalogInvalid(String),

    #[error("invalid {field} '{value}' (expected one of: {expected})")]
    InvalidInput {
        field: &'static str,
        value: String,
        expected: String,
    },

    #[error("invalid date: {0}")]
    InvalidDate(String),

    #[error("swipl not found. Install SWI-Prolog: brew install swi-prolog (macOS) or apt install swi-prolog (Linux)")]
    SwiplNotFound,

    #[error("rule engine query failed: {0}")]
    EngineQuery(String),

    #[error("could not read config file `{path}`: {reason}")]
    ConfigRead { path: PathBuf, reason: String },

    #[error("could not parse config file `{path}`: {source}")]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("required config file was not found: `{0}`")]
    MissingConfigFile(PathBuf),

    #[error("configuration validation failed: {0}")]
    ConfigInvalid(String),

    #[error("invalid environment override for `{key}`: `{value}`")]
    InvalidEnvOverride { key: String, value: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
