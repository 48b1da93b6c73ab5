//! Configuration module for `rbviz`

use crate::core::render::RenderFormat;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

/// Default CLI configuration loaded based on build profile.
/// Uses release defaults in release mode, debug defaults in debug mode.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../../assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../../assets/DefaultCLIConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

/// Placeholder expanded to the config directory in path-like values
const DIR_VARIABLE: &str = "$RBVIZ";

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug)
    #[serde(default)]
    pub level: String,
    /// Log file path
    #[serde(default)]
    pub file: String,
    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,
}

/// Viewer configuration
///
/// Missing boolean keys default to `true`, matching the compiled-in defaults;
/// empty strings are filled in later by [`Config::merge_defaults`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewerConfig {
    /// URL prefix the encoded document is appended to
    #[serde(default)]
    pub base_url: String,
    /// Launch the default browser after printing the URL
    #[serde(default = "default_true")]
    pub open_browser: bool,
    /// Graph-description format (dot, mermaid, text)
    #[serde(default)]
    pub format: String,
    /// Log a warning when the input breaks red-black invariants
    #[serde(default = "default_true")]
    pub warn_invalid: bool,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            open_browser: default_true(),
            format: String::new(),
            warn_invalid: default_true(),
        }
    }
}

const fn default_true() -> bool {
    true
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    pub logging: LoggingConfig,
    /// Viewer settings
    #[serde(default)]
    pub viewer: ViewerConfig,
}

/// Optional CLI overrides for configuration values
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Override logging level
    pub level: Option<String>,
    /// Override log file path
    pub file: Option<String>,
    /// Override verbose flag
    pub verbose: Option<bool>,
    /// Override viewer base URL
    pub base_url: Option<String>,
    /// Override browser launching
    pub open_browser: Option<bool>,
    /// Override output format
    pub format: Option<String>,
}

impl Config {
    /// Get the `$RBVIZ` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/rbviz`
    /// - macOS: `~/Library/Application Support/rbviz`
    /// - Windows: `%APPDATA%\rbviz`
    #[must_use]
    pub fn get_rbviz_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("rbviz")
    }

    /// Merge missing fields from defaults into this config
    ///
    /// Only string fields that are empty here and non-empty in `defaults` are
    /// filled in. Booleans are settled at parse time by their serde defaults,
    /// so an explicit `false` is kept.
    ///
    /// # Returns
    ///
    /// `true` if any fields were added/changed, `false` otherwise
    #[allow(clippy::useless_let_if_seq)]
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let mut changed = false;

        if self.logging.level.is_empty() && !defaults.logging.level.is_empty() {
            self.logging.level.clone_from(&defaults.logging.level);
            changed = true;
        }
        if self.logging.file.is_empty() && !defaults.logging.file.is_empty() {
            self.logging.file.clone_from(&defaults.logging.file);
            changed = true;
        }

        if self.viewer.base_url.is_empty() && !defaults.viewer.base_url.is_empty() {
            self.viewer.base_url.clone_from(&defaults.viewer.base_url);
            changed = true;
        }
        if self.viewer.format.is_empty() && !defaults.viewer.format.is_empty() {
            self.viewer.format.clone_from(&defaults.viewer.format);
            changed = true;
        }

        changed
    }

    /// Apply CLI-provided overrides onto the loaded configuration
    ///
    /// Overrides last for this run only; the config file is not touched.
    /// Only non-`None` values replace config values.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(level) = &overrides.level {
            self.logging.level.clone_from(level);
        }
        if let Some(file) = &overrides.file {
            self.logging.file.clone_from(file);
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }

        if let Some(base_url) = &overrides.base_url {
            self.viewer.base_url.clone_from(base_url);
        }
        if let Some(open_browser) = overrides.open_browser {
            self.viewer.open_browser = open_browser;
        }
        if let Some(format) = &overrides.format {
            self.viewer.format.clone_from(format);
        }
    }

    /// Get the user config file path
    ///
    /// `config.toml` for release builds, `dconfig.toml` for debug builds,
    /// inside [`get_rbviz_dir`].
    ///
    /// [`get_rbviz_dir`]: Self::get_rbviz_dir
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_rbviz_dir().join(CONFIG_FILE_NAME)
    }

    /// Expand `$RBVIZ` in a string to the config directory
    #[must_use]
    fn expand_variables(value: &str) -> String {
        if value.contains(DIR_VARIABLE) {
            let rbviz_dir = Self::get_rbviz_dir();
            value.replace(DIR_VARIABLE, rbviz_dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string
    ///
    /// Missing fields use their serde defaults: empty strings, `false` for
    /// logging switches and `true` for viewer switches.
    /// `$RBVIZ` is expanded in the log file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML cannot be parsed or doesn't match the expected schema
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;
        config.logging.file = Self::expand_variables(&config.logging.file);
        Ok(config)
    }

    /// Load configuration from embedded defaults
    ///
    /// # Panics
    /// Panics if the embedded default configuration is invalid TOML.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load configuration from file, or create from defaults if not found
    ///
    /// - If the config file exists: loads it, merges missing fields from defaults and saves
    ///   the merged result.
    /// - Otherwise (first run): writes the defaults to disk and returns them.
    ///
    /// Falls back to defaults if the file cannot be read or parsed.
    #[must_use]
    pub fn load() -> Self {
        let config_file = Self::get_config_file_path();
        let defaults = Self::from_defaults();

        if !config_file.exists() {
            let _ = defaults.save();
            return defaults;
        }

        fs::read_to_string(&config_file)
            .ok()
            .and_then(|content| Self::from_toml(&content).ok())
            .map_or_else(|| defaults.clone(), |mut config| {
                if config.merge_defaults(&defaults) {
                    let _ = config.save();
                }
                config
            })
    }

    /// Save configuration to the platform config file
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created, or the file cannot be written
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let config_file = Self::get_config_file_path();
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(&config_file, toml_str)?;
        Ok(())
    }

    /// Get a configuration value by key
    ///
    /// Supported keys: `level`, `file`, `verbose`, `base_url`, `open_browser`,
    /// `format`, `warn_invalid`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "base_url" => Some(self.viewer.base_url.clone()),
            "open_browser" => Some(self.viewer.open_browser.to_string()),
            "format" => Some(self.viewer.format.clone()),
            "warn_invalid" => Some(self.viewer.warn_invalid.to_string()),
            _ => None,
        }
    }

    /// Set a configuration value by key
    ///
    /// # Errors
    /// Returns an error if the key is unknown or the value is invalid
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "level" => self.logging.level = value.to_string(),
            "file" => self.logging.file = value.to_string(),
            "verbose" => self.logging.verbose = parse_bool(key, value)?,
            "base_url" => self.viewer.base_url = value.to_string(),
            "open_browser" => self.viewer.open_browser = parse_bool(key, value)?,
            "format" => {
                value
                    .parse::<RenderFormat>()
                    .map_err(|e| e.to_string())?;
                self.viewer.format = value.to_ascii_lowercase();
            }
            "warn_invalid" => self.viewer.warn_invalid = parse_bool(key, value)?,
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Unset a configuration value by key (reset to default)
    ///
    /// # Errors
    /// Returns an error if the key is unknown
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        match key {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            "base_url" => self.viewer.base_url.clone_from(&defaults.viewer.base_url),
            "open_browser" => self.viewer.open_browser = defaults.viewer.open_browser,
            "format" => self.viewer.format.clone_from(&defaults.viewer.format),
            "warn_invalid" => self.viewer.warn_invalid = defaults.viewer.warn_invalid,
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Delete the user config file; the next [`load`](Self::load) recreates it from defaults
    ///
    /// # Errors
    /// Returns an error if the config file cannot be deleted
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, String> {
    value
        .parse::<bool>()
        .map_err(|_| format!("Invalid boolean value for '{key}': '{value}'"))
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[viewer]")?;
        writeln!(f, "  base_url = \"{}\"", self.viewer.base_url)?;
        writeln!(f, "  open_browser = {}", self.viewer.open_browser)?;
        writeln!(f, "  format = \"{}\"", self.viewer.format)?;
        writeln!(f, "  warn_invalid = {}", self.viewer.warn_invalid)?;

        Ok(())
    }
}
