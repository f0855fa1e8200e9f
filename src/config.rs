use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use glob::Pattern;
use serde::Deserialize;

use crate::core::file_scanner::is_glob_pattern;

pub const CONFIG_FILE_NAME: &str = "ucd-config.json";

/// Directories tried, in order, when no source path is configured.
pub const DEFAULT_SRC_DIRS: &[&str] = &["src", "source"];

#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default)]
    pub src_path: Option<String>,
    #[serde(default)]
    pub ignore: Option<Vec<String>>,
    #[serde(default)]
    pub extensions: Option<Vec<String>>,
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error for an invalid glob in `ignore` or an empty extension.
    pub fn validate(&self) -> Result<()> {
        for pattern in self.ignore.iter().flatten() {
            if is_glob_pattern(pattern) {
                Pattern::new(pattern)
                    .with_context(|| format!("Invalid glob pattern in 'ignore': \"{}\"", pattern))?;
            }
        }

        for ext in self.extensions.iter().flatten() {
            if ext.trim_start_matches('.').is_empty() {
                bail!("Invalid entry in 'extensions': \"{}\"", ext);
            }
        }

        Ok(())
    }
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
#[derive(Debug, Default)]
pub struct ConfigLoadResult {
    pub config: Config,
    /// Config file the values came from, `None` when using defaults.
    pub path: Option<PathBuf>,
}

impl ConfigLoadResult {
    pub fn from_file(&self) -> bool {
        self.path.is_some()
    }
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Error parsing {}", path.display()))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult::default()),
    }
}

/// Determine the directory to scan.
///
/// Priority: `cli_src_path` > config `srcPath` (relative to the config
/// file) > the first existing directory of [`DEFAULT_SRC_DIRS`] in `cwd`.
/// Returned paths stay relative to `cwd` when possible so reported file
/// paths read like `src/Button.tsx`.
pub fn resolve_src_dir(
    cwd: &Path,
    cli_src_path: Option<&Path>,
    loaded: &ConfigLoadResult,
) -> Result<PathBuf> {
    let candidate = if let Some(path) = cli_src_path {
        path.to_path_buf()
    } else if let Some(src_path) = &loaded.config.src_path {
        let config_dir = loaded
            .path
            .as_deref()
            .and_then(Path::parent)
            .unwrap_or(cwd);
        match config_dir.strip_prefix(cwd) {
            Ok(rel) => rel.join(src_path),
            Err(_) => config_dir.join(src_path),
        }
    } else {
        match DEFAULT_SRC_DIRS.iter().find(|dir| cwd.join(dir).is_dir()) {
            Some(dir) => PathBuf::from(dir),
            None => bail!(
                "No source directory found. Set \"srcPath\" in {} or pass --src-path.",
                CONFIG_FILE_NAME
            ),
        }
    };

    if !cwd.join(&candidate).is_dir() {
        bail!(
            "Directory \"{}\" does not exist or wasn't found.",
            candidate.display()
        );
    }

    Ok(candidate)
}
