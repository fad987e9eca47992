use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".ftlsyncrc.json";

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory holding one sub-directory per locale.
    #[serde(default = "default_locales_root")]
    pub locales_root: String,
    /// Canonical locale that other locales are reconciled against.
    #[serde(default = "default_source_locale")]
    pub source_locale: String,
    /// Resource file name inside each locale directory.
    #[serde(default = "default_resource_file")]
    pub resource_file: String,
    /// Locales to reconcile. Empty means every locale found under `locales_root`.
    #[serde(default)]
    pub target_locales: Vec<String>,
    /// Root of the source code searched for key usages.
    #[serde(default = "default_corpus_root")]
    pub corpus_root: String,
    /// Extensions of corpus files.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    /// Corpus paths to skip: literal paths (prefix match) or glob patterns.
    #[serde(default = "default_ignores")]
    pub ignores: Vec<String>,
    /// Keys built at runtime; never reported as unused.
    #[serde(default)]
    pub exclude_key_prefixes: Vec<String>,
}

fn default_locales_root() -> String {
    "./common/locales".to_string()
}

fn default_source_locale() -> String {
    "en-US".to_string()
}

fn default_resource_file() -> String {
    "main.ftl".to_string()
}

fn default_corpus_root() -> String {
    "./".to_string()
}

fn default_extensions() -> Vec<String> {
    vec!["rs".to_string()]
}

fn default_ignores() -> Vec<String> {
    vec!["target".to_string()]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locales_root: default_locales_root(),
            source_locale: default_source_locale(),
            resource_file: default_resource_file(),
            target_locales: Vec::new(),
            corpus_root: default_corpus_root(),
            extensions: default_extensions(),
            ignores: default_ignores(),
            exclude_key_prefixes: Vec::new(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob pattern in `ignores` is invalid or if no
    /// corpus extension is configured.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            if pattern.contains('*') || pattern.contains('?') {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in 'ignores': \"{}\"", pattern)
                })?;
            }
        }

        if self.extensions.iter().all(|ext| ext.trim().is_empty()) {
            bail!("'extensions' must list at least one file extension");
        }

        if self.source_locale.is_empty() {
            bail!("'sourceLocale' must not be empty");
        }

        Ok(())
    }
}

/// Keys of notification actions are assembled at runtime
/// (`toast_actions.{action}`), so a new config excludes them.
const STARTER_EXCLUDE_KEY_PREFIXES: &[&str] = &["toast_actions"];

/// Config written by `init`: the defaults plus the starter exclusions.
pub fn default_config_json() -> Result<String> {
    let config = Config {
        exclude_key_prefixes: STARTER_EXCLUDE_KEY_PREFIXES
            .iter()
            .map(|prefix| prefix.to_string())
            .collect(),
        ..Default::default()
    };
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
