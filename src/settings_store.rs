use crate::guides::error::GuideError;
use crate::settings::{parse_settings_str, to_json_pretty, LoadedSettings, PersistedSettings};
use std::path::{Path, PathBuf};

pub const SETTINGS_FILE_NAME: &str = "inkguiding_settings.json";

/// Reads and writes the settings document at a path fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsStore {
    path: PathBuf,
}

/// A load that always produced usable settings, plus whatever went wrong
/// on the way there.
#[derive(Debug)]
pub struct LoadReport {
    pub loaded: LoadedSettings,
    pub error: Option<GuideError>,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the document, writing a default one first when none exists.
    pub fn load(&self) -> Result<LoadedSettings, GuideError> {
        if !self.path.exists() {
            tracing::info!(path = %self.path.display(), "settings file not found, writing defaults");
            self.save(&PersistedSettings::default())?;
        }

        let content = std::fs::read_to_string(&self.path).map_err(|source| {
            GuideError::PersistenceIo {
                path: self.path.clone(),
                source,
            }
        })?;

        let loaded =
            parse_settings_str(&content).map_err(|source| GuideError::MalformedSettingsDocument {
                path: self.path.clone(),
                source,
            })?;
        tracing::info!(
            path = %self.path.display(),
            guides = loaded.settings.guides.len(),
            skipped = loaded.skipped.len(),
            "settings loaded"
        );
        Ok(loaded)
    }

    /// Like [`Self::load`] but never fails: errors fall back to defaults and
    /// are handed back for the user to be told about.
    pub fn load_or_default(&self) -> LoadReport {
        match self.load() {
            Ok(loaded) => LoadReport {
                loaded,
                error: None,
            },
            Err(err) => {
                tracing::error!(%err, "failed to load settings, using defaults");
                LoadReport {
                    loaded: LoadedSettings::default(),
                    error: Some(err),
                }
            }
        }
    }

    pub fn save(&self, settings: &PersistedSettings) -> Result<(), GuideError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| GuideError::PersistenceIo {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let json = to_json_pretty(settings).map_err(GuideError::Serialize)?;
        std::fs::write(&self.path, json).map_err(|source| GuideError::PersistenceIo {
            path: self.path.clone(),
            source,
        })?;
        tracing::info!(path = %self.path.display(), guides = settings.guides.len(), "settings saved");
        Ok(())
    }
}
