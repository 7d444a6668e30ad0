use std::env;
use std::error::Error;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use directories_next::BaseDirs;

use super::settings::{SETTINGS_VERSION, Settings};

/// Overrides [`config_dir`] when set
pub const CONFIG_DIR_ENV: &str = "SORTVIS_CONFIG_DIR";

pub fn config_dir() -> Option<PathBuf> {
    if let Some(dir) = env::var_os(CONFIG_DIR_ENV).filter(|d| !d.is_empty()) {
        return Some(PathBuf::from(dir));
    }
    BaseDirs::new().map(|base| base.config_dir().join("SortVis"))
}

fn settings_path(config_dir: &Path) -> PathBuf {
    config_dir.join("settings.json")
}

pub fn save_settings(
    config_dir: &Path,
    settings: &Settings,
) -> Result<PathBuf, Box<dyn Error>> {
    let json = serde_json::to_string_pretty(settings)?;
    let path = settings_path(config_dir);
    if let Some(parent_dir) = path.parent() {
        fs::create_dir_all(parent_dir)?;
    }
    fs::write(&path, json)?;
    Ok(path)
}

pub fn load_settings(config_dir: &Path) -> Result<Settings, Box<dyn Error>> {
    let json = fs::read_to_string(settings_path(config_dir))?;
    let settings = serde_json::from_str::<Settings>(&json)?;
    if settings.version != SETTINGS_VERSION {
        return Err(format!(
            "unsupported settings version '{}' (expected '{}')",
            settings.version, SETTINGS_VERSION
        )
        .into());
    }
    Ok(settings)
}

pub fn load_settings_if_exists(
    config_dir: &Path,
) -> Result<Option<Settings>, Box<dyn Error>> {
    match load_settings(config_dir) {
        Ok(settings) => Ok(Some(settings)),
        Err(err) => {
            if err
                .downcast_ref::<std::io::Error>()
                .is_some_and(|e| e.kind() == ErrorKind::NotFound)
            {
                Ok(None)
            } else {
                Err(err)
            }
        }
    }
}
