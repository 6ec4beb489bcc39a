use std::path::PathBuf;
use std::str::FromStr;

use crate::budget::config::{
    BudgetConfig, DEFAULT_BUDGET, DEFAULT_MAX_BUDGET, DEFAULT_MIN_BUDGET, DEFAULT_PRESETS,
    DEFAULT_STEP,
};

pub const ENV_DATA_DIR: &str = "RIHLA_DATA_DIR";
pub const ENV_STORAGE: &str = "RIHLA_STORAGE";
pub const ENV_BUDGET_MIN: &str = "RIHLA_BUDGET_MIN";
pub const ENV_BUDGET_MAX: &str = "RIHLA_BUDGET_MAX";
pub const ENV_BUDGET_STEP: &str = "RIHLA_BUDGET_STEP";
pub const ENV_BUDGET_DEFAULT: &str = "RIHLA_BUDGET_DEFAULT";
pub const ENV_BUDGET_PRESETS: &str = "RIHLA_BUDGET_PRESETS";
pub const ENV_LOG_JSON: &str = "RIHLA_LOG_JSON";

/// Which durable store backs the preference store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageBackend {
    #[default]
    Sqlite,
    Json,
    Memory,
}

impl FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sqlite" => Ok(StorageBackend::Sqlite),
            "json" => Ok(StorageBackend::Json),
            "memory" => Ok(StorageBackend::Memory),
            other => Err(format!("unknown storage backend '{other}'")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub storage: StorageBackend,
    pub budget: BudgetConfig,
    pub log_json: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            storage: StorageBackend::default(),
            budget: BudgetConfig::default(),
            log_json: false,
        }
    }
}

impl AppConfig {
    /// Load from the process environment, after reading a `.env` file if present.
    ///
    /// # Environment Variables
    /// - `RIHLA_DATA_DIR`: where settings live. Defaults to the platform data dir.
    /// - `RIHLA_STORAGE`: `sqlite` (default), `json` or `memory`.
    /// - `RIHLA_BUDGET_MIN` / `_MAX` / `_STEP` / `_DEFAULT`: budget selector bounds.
    /// - `RIHLA_BUDGET_PRESETS`: comma-separated shortcut amounts.
    /// - `RIHLA_LOG_JSON`: "true" or "1" for JSON log lines.
    ///
    /// Malformed values fall back to defaults with a warning. Budget bounds are
    /// validated later, when the store is built.
    pub fn from_env() -> Self {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "Loaded .env");
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] but reads through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let data_dir = get(ENV_DATA_DIR)
            .map(PathBuf::from)
            .unwrap_or_else(default_data_dir);

        let storage = parse_or(ENV_STORAGE, get(ENV_STORAGE), StorageBackend::default());

        let min_budget = parse_or(ENV_BUDGET_MIN, get(ENV_BUDGET_MIN), DEFAULT_MIN_BUDGET);
        let max_budget = parse_or(ENV_BUDGET_MAX, get(ENV_BUDGET_MAX), DEFAULT_MAX_BUDGET);
        let step = parse_or(ENV_BUDGET_STEP, get(ENV_BUDGET_STEP), DEFAULT_STEP);
        let default_value = parse_or(ENV_BUDGET_DEFAULT, get(ENV_BUDGET_DEFAULT), DEFAULT_BUDGET);
        let presets = get(ENV_BUDGET_PRESETS)
            .map(|raw| parse_presets(&raw))
            .unwrap_or_else(|| DEFAULT_PRESETS.to_vec());

        let log_json = get(ENV_LOG_JSON)
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);

        Self {
            data_dir,
            storage,
            budget: BudgetConfig {
                min_budget,
                max_budget,
                step,
                default_value,
                presets,
            },
            log_json,
        }
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("rihla")
}

fn parse_or<T>(key: &str, raw: Option<String>, default: T) -> T
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match raw {
        None => default,
        Some(raw) => match raw.parse() {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key, value = %raw, "Ignoring malformed setting: {}", e);
                default
            }
        },
    }
}

/// Parse `"500, 1000,abc,2000"` into `[500, 1000, 2000]`, skipping junk entries.
fn parse_presets(raw: &str) -> Vec<i64> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .filter_map(|s| match s.parse::<i64>() {
            Ok(v) => Some(v),
            Err(_) => {
                tracing::warn!(value = %s, "Skipping malformed budget preset");
                None
            }
        })
        .collect()
}
