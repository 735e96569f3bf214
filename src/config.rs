use anyhow::{Context, Result};
use directories::ProjectDirs;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Punctuation appended to a composed post, chosen at random.
    #[serde(default = "default_terminators")]
    pub terminators: Vec<String>,

    /// Regex patterns; candidate topics matching any of them are skipped.
    #[serde(default = "default_skip_patterns")]
    pub skip_patterns: Vec<String>,

    /// Seen-topics cache file.
    #[serde(default)]
    pub seen_cache: Option<PathBuf>,
}

fn default_terminators() -> Vec<String> {
    vec!["!".to_string(), "...".to_string()]
}

fn default_skip_patterns() -> Vec<String> {
    // "#ThrowbackThursday" and friends recur weekly and make stale posts.
    vec!["(?i)day$".to_string()]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            terminators: default_terminators(),
            skip_patterns: default_skip_patterns(),
            seen_cache: None,
        }
    }
}

impl Config {
    /// Load configuration with priority: CLI args > local config > global config > defaults
    pub fn load(seen_cache: Option<PathBuf>, cli_patterns: Vec<String>) -> Result<Self> {
        let mut config = Self::default();

        // Load global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                let global_config = Self::from_file(&global_path)?;
                config = config.merge(global_config);
            }
        }

        // Load local config (overrides global)
        let local_path = PathBuf::from(".schmify.toml");
        if local_path.exists() {
            let local_config = Self::from_file(&local_path)?;
            config = config.merge(local_config);
        }

        // Apply CLI overrides
        if let Some(path) = seen_cache {
            config.seen_cache = Some(path);
        }
        if !cli_patterns.is_empty() {
            config.skip_patterns.extend(cli_patterns);
        }

        // Set default cache location if not specified
        if config.seen_cache.is_none() {
            config.seen_cache = Self::default_cache_path();
        }

        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    fn merge(mut self, other: Self) -> Self {
        // Merge logic: other's values override self's if they differ from defaults
        if other.terminators != default_terminators() {
            self.terminators = other.terminators;
        }
        if other.skip_patterns != default_skip_patterns() {
            self.skip_patterns = other.skip_patterns;
        }
        if other.seen_cache.is_some() {
            self.seen_cache = other.seen_cache;
        }
        self
    }

    /// Compile the skip patterns; invalid ones are warned about and dropped.
    pub fn compiled_skip_patterns(&self) -> Vec<Regex> {
        let mut patterns = Vec::new();
        for pattern in &self.skip_patterns {
            match Regex::new(pattern) {
                Ok(re) => patterns.push(re),
                Err(e) => eprintln!("Warning: Invalid regex pattern '{}': {}", pattern, e),
            }
        }
        patterns
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "schmify").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    pub fn default_cache_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "schmify").map(|dirs| dirs.cache_dir().join("seen_topics.txt"))
    }
}
