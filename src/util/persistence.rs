use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde_json::Error as SerdeError;
use tracing::{debug, warn};

use crate::domain::Settings;

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "FruitTradeChecker";
const APP_NAME: &str = "FruitTradeChecker";

fn settings_file() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join("settings.json"))
}

pub fn load_settings() -> Option<Settings> {
    load_settings_from(&settings_file()?)
}

pub fn save_settings(settings: &Settings) -> Result<(), PersistSaveError> {
    let path = settings_file().ok_or(PersistSaveError::StorageUnavailable)?;
    save_settings_to(&path, settings)
}

fn load_settings_from(path: &Path) -> Option<Settings> {
    let data = fs::read_to_string(path).ok()?;
    match serde_json::from_str(&data) {
        Ok(settings) => {
            debug!(path = %path.display(), "loaded settings");
            Some(settings)
        }
        Err(err) => {
            warn!(path = %path.display(), "ignoring unreadable settings file: {err}");
            None
        }
    }
}

fn save_settings_to(path: &Path, settings: &Settings) -> Result<(), PersistSaveError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;
    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum PersistSaveError {
    #[error("storage directory unavailable")]
    StorageUnavailable,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] SerdeError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LabelMode;

    #[test]
    fn test_settings_survive_save_and_load() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("settings.json");
        let settings = Settings {
            catalog_path: Some(PathBuf::from("/srv/fruits.json")),
            label_mode: LabelMode::CanonicalOnly,
        };

        save_settings_to(&path, &settings).expect("save succeeds");
        assert_eq!(load_settings_from(&path), Some(settings));
    }

    #[test]
    fn test_missing_or_corrupt_settings() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("settings.json");
        assert_eq!(load_settings_from(&path), None);

        fs::write(&path, "{ not json").expect("write");
        assert_eq!(load_settings_from(&path), None);
    }
}
