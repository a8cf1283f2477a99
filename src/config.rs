use crate::guides::hit_test::{HitTestConfig, TieBreak};
use crate::settings_store::SETTINGS_FILE_NAME;
use anyhow::{anyhow, Result};
use std::path::{Path, PathBuf};

pub const SETTINGS_PATH_ENV: &str = "INKGUIDE_SETTINGS";
pub const LOG_FILE_ENV: &str = "INKGUIDE_LOG_FILE";
pub const DEBUG_ENV: &str = "INKGUIDE_DEBUG";
pub const TIE_BREAK_ENV: &str = "INKGUIDE_TIE_BREAK";
pub const TOAST_LOG_FILE_NAME: &str = "toast.log";

/// Process-wide configuration, resolved once in `main` and passed down.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub settings_path: PathBuf,
    pub log_file: Option<PathBuf>,
    pub debug_logging: bool,
    pub hit_test: HitTestConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok(), default_settings_dir())
    }

    /// Builds the config from an environment lookup and the fallback
    /// settings directory.
    pub fn from_lookup<F>(lookup: F, default_dir: Option<PathBuf>) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let settings_path = match lookup(SETTINGS_PATH_ENV).filter(|v| !v.trim().is_empty()) {
            Some(path) => PathBuf::from(path),
            None => default_dir
                .map(|dir| dir.join(SETTINGS_FILE_NAME))
                .ok_or_else(|| anyhow!("unable to resolve a settings directory"))?,
        };
        let log_file = lookup(LOG_FILE_ENV)
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);
        let debug_logging = lookup(DEBUG_ENV)
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);
        let tie_break = match lookup(TIE_BREAK_ENV) {
            Some(value) => parse_tie_break(&value)?,
            None => TieBreak::default(),
        };

        Ok(Self {
            settings_path,
            log_file,
            debug_logging,
            hit_test: HitTestConfig {
                tie_break,
                ..HitTestConfig::default()
            },
        })
    }

    pub fn toast_log_path(&self) -> PathBuf {
        sibling_path(&self.settings_path, TOAST_LOG_FILE_NAME)
    }
}

fn parse_tie_break(value: &str) -> Result<TieBreak> {
    match value.trim().to_ascii_lowercase().as_str() {
        "" | "first" | "first-added" => Ok(TieBreak::FirstAdded),
        "top" | "topmost" => Ok(TieBreak::Topmost),
        other => Err(anyhow!(
            "{TIE_BREAK_ENV} must be `first` or `topmost`, got `{other}`"
        )),
    }
}

fn sibling_path(path: &Path, file_name: &str) -> PathBuf {
    match path.parent() {
        Some(parent) => parent.join(file_name),
        None => PathBuf::from(file_name),
    }
}

/// `%APPDATA%\Inkguiding` on Windows, `~/.inkguiding` elsewhere.
pub fn default_settings_dir() -> Option<PathBuf> {
    #[cfg(windows)]
    {
        dirs_next::config_dir().map(|dir| dir.join("Inkguiding"))
    }
    #[cfg(not(windows))]
    {
        dirs_next::home_dir().map(|dir| dir.join(".inkguiding"))
    }
}
