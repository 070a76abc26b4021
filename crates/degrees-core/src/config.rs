//! Configuration for dataset location and search limits.
//!
//! Load order: `.degrees/config.toml` → environment variables → defaults.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level degrees configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DegreesConfig {
    pub data: DataConfig,
    pub search: SearchConfig,
}

/// Where the CSV dataset lives.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Dataset directory. Relative paths resolve against the project root.
    pub directory: PathBuf,
}

/// Search engine limits.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Stop a search after this many node expansions. Unbounded when unset.
    pub max_expansions: Option<usize>,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("large"),
        }
    }
}

impl DegreesConfig {
    /// Load config from `.degrees/config.toml` in the project root, with env var overrides.
    /// Falls back to defaults if no config file exists.
    pub fn load(project_root: &Path) -> Result<Self> {
        Self::load_with_env(project_root, |key| std::env::var(key).ok())
    }

    /// [`DegreesConfig::load`] reading overrides through `env` instead of the process environment.
    pub fn load_with_env(
        project_root: &Path,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let config_path = project_root.join(".degrees").join("config.toml");

        let mut config: Self = if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)
                .with_context(|| format!("failed to read {}", config_path.display()))?;
            toml::from_str(&content)
                .with_context(|| format!("failed to parse {}", config_path.display()))?
        } else {
            Self::default()
        };

        config.apply_env(env);
        config.validate()?;
        Ok(config)
    }

    /// `DEGREES_DATA_DIR` (ignored when empty) and `DEGREES_MAX_EXPANSIONS`
    /// (ignored unless it parses) override the file.
    fn apply_env(&mut self, env: impl Fn(&str) -> Option<String>) {
        if let Some(dir) = env("DEGREES_DATA_DIR")
            && !dir.is_empty()
        {
            self.data.directory = PathBuf::from(dir);
        }
        if let Some(v) = env("DEGREES_MAX_EXPANSIONS")
            && let Ok(n) = v.trim().parse()
        {
            self.search.max_expansions = Some(n);
        }
    }

    /// Reject settings the search engine cannot honour.
    pub fn validate(&self) -> Result<()> {
        if self.search.max_expansions == Some(0) {
            anyhow::bail!("search.max_expansions must be at least 1 (omit it for no limit)");
        }
        Ok(())
    }

    /// Dataset directory resolved against `project_root`.
    pub fn data_dir(&self, project_root: &Path) -> PathBuf {
        if self.data.directory.is_absolute() {
            self.data.directory.clone()
        } else {
            project_root.join(&self.data.directory)
        }
    }
}
