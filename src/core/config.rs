//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.jumplist/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::alphabet::Alphabet;
use crate::core::keyboard::KeyboardSettings;
use crate::core::library::SystemSource;
use crate::core::navigator::{DEFAULT_CLOSE_DEBOUNCE, DEFAULT_ITERATE_STEP};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct JumplistConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub keyboard: KeyboardConfig,
    #[serde(default)]
    pub systems: Vec<SystemEntry>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub language: Option<String>,
    pub quick_system_select: Option<bool>,
    pub start_system: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct KeyboardConfig {
    pub alphabet: Option<String>,
    pub iterate_step: Option<usize>,
    pub close_debounce_ms: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SystemEntry {
    pub name: String,
    pub fullname: Option<String>,
    pub path: String,
    #[serde(default)]
    pub extensions: Vec<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LANGUAGE: &str = "en";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub language: String,
    pub quick_system_select: bool,
    pub start_system: Option<String>,
    pub keyboard: KeyboardSettings,
    pub systems: Vec<SystemSource>,
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

/// Returns the path to `~/.jumplist/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".jumplist").join("config.toml"))
}

/// Load config from `~/.jumplist/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `JumplistConfig::default()`.
pub fn load_config() -> Result<JumplistConfig, ConfigError> {
    match config_path() {
        Some(path) => load_config_from(&path, true),
        None => {
            warn!("Could not determine home directory, using default config");
            Ok(JumplistConfig::default())
        }
    }
}

/// Load config from an explicit path. A missing file yields the defaults,
/// and a commented template is written there when `generate` is set.
pub fn load_config_from(path: &Path, generate: bool) -> Result<JumplistConfig, ConfigError> {
    if !path.exists() {
        if generate {
            info!("No config file found, generating default at {}", path.display());
            generate_default_config(path);
        }
        return Ok(JumplistConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: JumplistConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Jumplist Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# language = "en"                    # "en" or "gb"; or JUMPLIST_LANGUAGE env var
# quick_system_select = false        # left/right switch systems while the strip is closed
# start_system = "snes"

# [keyboard]
# alphabet = "ABCDEFGHIJKLMNOPQRSTUVWXYZ"   # overrides the language's alphabet
# iterate_step = 2
# close_debounce_ms = 50

# [[systems]]
# name = "snes"
# fullname = "Super Nintendo"
# path = "~/roms/snes"
# extensions = [".sfc", ".smc"]
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
///
/// `cli_language` and `cli_system` are from CLI flags (None = not specified).
pub fn resolve(
    config: &JumplistConfig,
    cli_language: Option<&str>,
    cli_system: Option<&str>,
) -> ResolvedConfig {
    // Language: CLI → env → config → default
    let language = cli_language
        .map(|s| s.to_string())
        .or_else(|| std::env::var("JUMPLIST_LANGUAGE").ok())
        .or_else(|| config.general.language.clone())
        .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());

    // Alphabet: explicit symbols win over the language's alphabet
    let alphabet = match config.keyboard.alphabet.as_deref() {
        Some(symbols) => Alphabet::from_symbols(symbols).unwrap_or_else(|| {
            warn!("Configured alphabet is empty, using the '{}' alphabet", language);
            Alphabet::for_language(&language)
        }),
        None => Alphabet::for_language(&language),
    };

    let iterate_step = match config.keyboard.iterate_step {
        Some(0) => {
            warn!("iterate_step = 0 would never move the cursor, using {}", DEFAULT_ITERATE_STEP);
            DEFAULT_ITERATE_STEP
        }
        Some(step) => step,
        None => DEFAULT_ITERATE_STEP,
    };

    let close_debounce = config
        .keyboard
        .close_debounce_ms
        .map(Duration::from_millis)
        .unwrap_or(DEFAULT_CLOSE_DEBOUNCE);

    // Start system: CLI → config
    let start_system = cli_system
        .map(|s| s.to_string())
        .or_else(|| config.general.start_system.clone());

    ResolvedConfig {
        language,
        quick_system_select: config.general.quick_system_select.unwrap_or(false),
        start_system,
        keyboard: KeyboardSettings {
            alphabet,
            iterate_step,
            close_debounce,
        },
        systems: config.systems.iter().map(system_source).collect(),
    }
}

fn system_source(entry: &SystemEntry) -> SystemSource {
    SystemSource {
        name: entry.name.clone(),
        fullname: entry.fullname.clone(),
        path: expand_home(&entry.path),
        extensions: entry.extensions.clone(),
    }
}

/// Expands a leading `~/` to the home directory.
fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}
