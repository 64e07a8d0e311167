use config::{Config as ConfigBuilder, ConfigError, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::extract::Capabilities;
use crate::search::matcher::MatchFlags;

/// Configuration for a search operation.
///
/// Loaded from YAML with the following precedence, later sources winning:
/// global `$CONFIG_DIR/docscout/config.yaml`, local `.docscout.yaml`, then an
/// explicit config path. CLI arguments override file values via
/// [`SearchConfig::merge_with_cli`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// The search pattern (a regular expression, or a literal word when
    /// `whole_word` is set)
    pub pattern: String,

    /// Root directory for folder searches
    pub root_path: PathBuf,

    /// Pattern compilation flags
    pub flags: MatchFlags,

    /// Treat `pattern` as a literal word and match it at word boundaries
    pub whole_word: bool,

    /// Optional list of file extensions to include (e.g., ["txt", "csv"]).
    /// If None, all files are included.
    pub file_extensions: Option<Vec<String>>,

    /// Glob patterns for paths to skip
    pub ignore_patterns: Vec<String>,

    /// Which optional document handlers are enabled
    pub capabilities: Capabilities,

    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            pattern: String::new(),
            root_path: PathBuf::from("."),
            flags: MatchFlags::default(),
            whole_word: false,
            file_extensions: None,
            ignore_patterns: Vec::new(),
            capabilities: Capabilities::all(),
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl SearchConfig {
    /// Loads configuration from the default locations.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Loads configuration, optionally including an explicit config file.
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        let config_files = [
            // Global config
            dirs::config_dir().map(|p| p.join("docscout/config.yaml")),
            // Local config
            Some(PathBuf::from(".docscout.yaml")),
            // Custom config
            config_path.map(PathBuf::from),
        ];

        for path in config_files.iter().flatten() {
            if path.exists() {
                builder = builder.add_source(File::from(path.as_path()));
            }
        }

        builder.build()?.try_deserialize()
    }

    /// Merges CLI arguments over configuration file values.
    pub fn merge_with_cli(mut self, cli_config: SearchConfig) -> Self {
        if !cli_config.pattern.is_empty() {
            self.pattern = cli_config.pattern;
        }
        if cli_config.root_path != PathBuf::from(".") {
            self.root_path = cli_config.root_path;
        }
        if cli_config.flags != MatchFlags::default() {
            self.flags = cli_config.flags;
        }
        if cli_config.whole_word {
            self.whole_word = true;
        }
        if cli_config.file_extensions.is_some() {
            self.file_extensions = cli_config.file_extensions;
        }
        if !cli_config.ignore_patterns.is_empty() {
            self.ignore_patterns = cli_config.ignore_patterns;
        }
        if cli_config.capabilities != Capabilities::all() {
            self.capabilities = cli_config.capabilities;
        }
        if cli_config.log_level != default_log_level() {
            self.log_level = cli_config.log_level;
        }
        self
    }
}
