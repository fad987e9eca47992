use std::{
    fs::{self, DirEntry},
    io,
    path::{Component, Path, PathBuf},
};

use anyhow::{Context as _, Result, bail};

use crate::{
    cli::args::CommonArgs,
    config::{Config, load_config},
};

/// Project settings shared by every command.
///
/// # Configuration Priority
///
/// 1. CLI arguments (e.g., `--source-locale en`)
/// 2. `.ftlsyncrc.json` config file
/// 3. Built-in defaults
pub struct ProjectContext {
    /// Merged configuration (CLI args > config file > defaults).
    pub config: Config,

    /// Project root directory; relative config paths resolve against it.
    pub root_dir: PathBuf,

    /// Explicit source resource, bypassing locale discovery.
    pub source_override: Option<PathBuf>,
}

impl ProjectContext {
    /// Create a new `ProjectContext` from command line arguments.
    ///
    /// # Errors
    ///
    /// Returns error if the config file cannot be read, parsed or validated.
    pub fn new(common_args: &CommonArgs) -> Result<Self> {
        let root_dir = common_args
            .root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));

        let config_result = load_config(&root_dir)?;
        if !config_result.from_file {
            tracing::debug!("No config file found, using default configuration");
        }

        let mut config = config_result.config;

        if let Some(ref locales_root) = common_args.locales_root {
            config.locales_root = locales_root.to_string_lossy().to_string();
        }
        if let Some(ref source_locale) = common_args.source_locale {
            config.source_locale = source_locale.clone();
        }

        let mut ctx = Self::from_config(root_dir, config);
        ctx.source_override = common_args.source.clone();
        Ok(ctx)
    }

    /// Build a context directly from a config (no file lookup).
    pub fn from_config(root_dir: impl Into<PathBuf>, config: Config) -> Self {
        Self {
            config,
            root_dir: root_dir.into(),
            source_override: None,
        }
    }

    /// Resolve a configured path against the project root.
    pub fn resolve(&self, path: impl AsRef<Path>) -> PathBuf {
        let p = path.as_ref();
        if p.is_absolute() {
            return p.to_path_buf();
        }
        let is_cur_dir = self
            .root_dir
            .components()
            .all(|c| matches!(c, Component::CurDir));
        if is_cur_dir {
            p.to_path_buf()
        } else {
            let rel = p.strip_prefix(".").unwrap_or(p);
            self.root_dir.join(rel)
        }
    }

    pub fn locales_dir(&self) -> PathBuf {
        self.resolve(&self.config.locales_root)
    }

    pub fn corpus_root(&self) -> PathBuf {
        self.resolve(&self.config.corpus_root)
    }

    /// The canonical source resource.
    pub fn source_path(&self) -> PathBuf {
        match &self.source_override {
            Some(path) => self.resolve(path),
            None => self
                .locales_dir()
                .join(&self.config.source_locale)
                .join(&self.config.resource_file),
        }
    }

    /// Target resources: the configured target locales, or every locale
    /// directory except the source locale that holds a resource file.
    ///
    /// Sorted by locale name.
    pub fn target_paths(&self) -> Result<Vec<PathBuf>> {
        let locales_dir = self.locales_dir();

        if !self.config.target_locales.is_empty() {
            return Ok(self
                .config
                .target_locales
                .iter()
                .map(|locale| locales_dir.join(locale).join(&self.config.resource_file))
                .collect());
        }

        if !locales_dir.is_dir() {
            bail!("Locales directory not found: {}", locales_dir.display());
        }

        let source_path = self.source_path();
        let mut targets = Vec::new();
        let entries = fs::read_dir(&locales_dir).with_context(|| {
            format!("Failed to read locales directory: {}", locales_dir.display())
        })?;
        for entry in entries {
            let Some(locale_dir) = locale_dir(entry, &locales_dir)? else {
                continue;
            };
            let is_source = locale_dir
                .file_name()
                .is_some_and(|name| name == self.config.source_locale.as_str());
            if is_source {
                continue;
            }
            let resource = locale_dir.join(&self.config.resource_file);
            if resource.is_file() && resource != source_path {
                targets.push(resource);
            }
        }
        targets.sort();
        Ok(targets)
    }
}

/// Path of a directory entry under the locales directory, `None` for files.
fn locale_dir(entry: io::Result<DirEntry>, locales_dir: &Path) -> Result<Option<PathBuf>> {
    let entry = entry.with_context(|| {
        format!("Failed to read locales directory: {}", locales_dir.display())
    })?;
    let file_type = entry
        .file_type()
        .with_context(|| format!("Failed to inspect locale entry: {}", entry.path().display()))?;
    Ok(file_type.is_dir().then(|| entry.path()))
}
