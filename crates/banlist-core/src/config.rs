//! Configuration types for banlist.
//!
//! [`Config::load`] layers, in order: the embedded defaults, an optional
//! `banlist.toml` in the working directory, and `BANLIST__*` environment
//! variables (`BANLIST__LIST__PATH=...`). [`Config::defaults`] returns the
//! embedded defaults without touching the filesystem (useful in tests).

use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[list]
path = "rsc/sdl_banned_funct.list"

[output]
summary = true
"#;

/// File looked up in the working directory by [`Config::load`].
pub const CONFIG_FILE: &str = "banlist.toml";

const ENV_PREFIX: &str = "BANLIST";

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub list: ListConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// `[list]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ListConfig {
    /// Banned list normalized when no path is given on the command line.
    #[serde(default = "default_list_path")]
    pub path: PathBuf,
}

fn default_list_path() -> PathBuf { PathBuf::from("rsc/sdl_banned_funct.list") }

impl Default for ListConfig {
    fn default() -> Self {
        Self { path: default_list_path() }
    }
}

/// `[output]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Print `Normalized N entries to PATH` after a rewrite.
    #[serde(default = "default_summary")]
    pub summary: bool,
}

fn default_summary() -> bool { true }

impl Default for OutputConfig {
    fn default() -> Self {
        Self { summary: default_summary() }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `./banlist.toml` (if present) and the environment, layered
    /// on top of the built-in defaults.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(None)
    }

    /// Like [`Config::load`], but read `file` instead of `./banlist.toml`.
    /// An explicit file must exist.
    pub fn load_from(file: Option<&Path>) -> anyhow::Result<Self> {
        let file_source = match file {
            Some(path) => config::File::from(path).required(true),
            None => config::File::from(Path::new(CONFIG_FILE)).required(false),
        };

        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(file_source)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        Self {
            list: ListConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
