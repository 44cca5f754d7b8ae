//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.safar/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::tab::Tab;
use crate::i18n::Language;
use crate::planner::BudgetTier;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SafarConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub planner: PlannerConfig,
    #[serde(default)]
    pub budget: BudgetConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub language: Option<Language>,
    pub start_tab: Option<String>,
    pub animations: Option<bool>,
    pub transition_ms: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PlannerConfig {
    pub default_days: Option<u8>,
    pub default_budget: Option<BudgetTier>,
    pub latency_ms: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct BudgetConfig {
    pub total_sar: Option<u32>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_TRANSITION_MS: u64 = 300;
pub const DEFAULT_TRIP_DAYS: u8 = 3;
pub const DEFAULT_PLANNER_LATENCY_MS: u64 = 600;
pub const DEFAULT_BUDGET_TOTAL_SAR: u32 = 5000;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub language: Language,
    pub start_tab: Tab,
    pub animations: bool,
    pub transition: Duration,
    pub default_days: u8,
    pub default_budget: BudgetTier,
    pub planner_latency: Duration,
    pub budget_total_sar: u32,
}

/// Values supplied on the command line. `None` means "not specified".
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub language: Option<Language>,
    pub start_tab: Option<String>,
    pub no_animations: bool,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.safar/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".safar").join("config.toml"))
}

/// Load config from `~/.safar/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `SafarConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<SafarConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(SafarConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(SafarConfig::default());
    }

    load_config_from(&path)
}

/// Parse a config file at an explicit path.
pub fn load_config_from(path: &Path) -> Result<SafarConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: SafarConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Safar Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# language = "en"            # "en" or "ar" (or SAFAR_LANG env var)
# start_tab = "home"         # home, planner, trips, profile, destinations
# animations = true
# transition_ms = 300

# [planner]
# default_days = 3
# default_budget = "standard"  # "economy", "standard", "luxury"
# latency_ms = 600

# [budget]
# total_sar = 5000
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &SafarConfig, cli: &CliOverrides) -> ResolvedConfig {
    let env_language = std::env::var("SAFAR_LANG").ok().and_then(|v| {
        let parsed = Language::from_code(&v);
        if parsed.is_none() {
            warn!("Ignoring unsupported SAFAR_LANG value {:?}", v);
        }
        parsed
    });
    let env_start_tab = std::env::var("SAFAR_START_TAB").ok();

    resolve_with(config, cli, env_language, env_start_tab)
}

/// Resolution with the environment passed in, so tests need not touch
/// process-wide env vars.
fn resolve_with(
    config: &SafarConfig,
    cli: &CliOverrides,
    env_language: Option<Language>,
    env_start_tab: Option<String>,
) -> ResolvedConfig {
    // Language: CLI → env → config → default
    let language = cli
        .language
        .or(env_language)
        .or(config.general.language)
        .unwrap_or_default();

    // Start tab: CLI → env → config → home. Unknown ids land on home.
    let start_tab = cli
        .start_tab
        .clone()
        .or(env_start_tab)
        .or_else(|| config.general.start_tab.clone())
        .map(|id| Tab::from_id(&id))
        .unwrap_or_default();

    let animations = !cli.no_animations && config.general.animations.unwrap_or(true);

    ResolvedConfig {
        language,
        start_tab,
        animations,
        transition: Duration::from_millis(
            config.general.transition_ms.unwrap_or(DEFAULT_TRANSITION_MS),
        ),
        default_days: config
            .planner
            .default_days
            .unwrap_or(DEFAULT_TRIP_DAYS)
            .clamp(1, crate::planner::MAX_TRIP_DAYS),
        default_budget: config.planner.default_budget.unwrap_or_default(),
        planner_latency: Duration::from_millis(
            config
                .planner
                .latency_ms
                .unwrap_or(DEFAULT_PLANNER_LATENCY_MS),
        ),
        budget_total_sar: config.budget.total_sar.unwrap_or(DEFAULT_BUDGET_TOTAL_SAR),
    }
}
