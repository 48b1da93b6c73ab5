//! CLI argument definitions for `rbviz`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use rbviz::config::ConfigOverrides;
use rbviz::logger::Level;

/// CLI log level argument
///
/// Converts to lowercase strings for config storage and to `logger::Level` for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        write!(f, "{as_str}")
    }
}

/// Graph-description format argument
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum FormatArg {
    /// Graphviz DOT
    Dot,
    /// Mermaid flowchart
    Mermaid,
    /// Console drawing with `(label c)` boxes
    #[value(alias = "ascii")]
    Text,
}

impl std::fmt::Display for FormatArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dot => write!(f, "dot"),
            Self::Mermaid => write!(f, "mermaid"),
            Self::Text => write!(f, "text"),
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `base_url`, `format`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Check a tree against the red-black rules without rendering it.
    Check {
        /// Path to the JSON tree file
        #[arg(value_name = "FILE")]
        input_file: PathBuf,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "rbviz",
    about = "Render a JSON red-black tree as a Graphviz graph and open it in the browser",
    version = env!("CARGO_PKG_VERSION"),
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override the viewer URL the document is appended to
    #[arg(long = "viewer-url", value_name = "URL")]
    pub viewer_url: Option<String>,

    /// Print the URL without launching a browser
    #[arg(long = "no-open")]
    pub no_open: bool,

    /// Graph-description format for --output and --print-document
    #[arg(short, long, value_enum)]
    pub format: Option<FormatArg>,

    // --- Render options ---
    /// Also write the graph document to this file
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Print the graph document instead of the viewer URL
    #[arg(long)]
    pub print_document: bool,

    /// Path to the JSON tree file (exactly one)
    #[arg(value_name = "FILE")]
    pub input_files: Vec<PathBuf>,

    /// Optional subcommand; without one the input file is rendered.
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// `None` in the result means "keep the configured value".
    /// `--no-open` only ever disables browser launching; it never enables it.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            base_url: self.viewer_url.clone(),
            open_browser: self.no_open.then_some(false),
            format: self.format.map(|f| f.to_string()),
        }
    }

    /// The single input file, or `None` when the positional count is not exactly one
    pub fn single_input(&self) -> Option<&PathBuf> {
        match self.input_files.as_slice() {
            [only] => Some(only),
            _ => None,
        }
    }
}
