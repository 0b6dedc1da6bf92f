use std::fs::{self, File};
use std::io::Read;
use std::path::Path;

use crate::error::SettingsError;
use crate::model::Settings;
use crate::paths::SettingsPaths;

/// Upper bound on the settings file size.
pub const MAX_CONFIG_SIZE: usize = 1024 * 1024;

/// Reads and writes [`Settings`] at a pair of [`SettingsPaths`].
#[derive(Clone, Debug)]
pub struct SettingsStore {
    paths: SettingsPaths,
}

impl SettingsStore {
    pub fn new(paths: SettingsPaths) -> Self {
        Self { paths }
    }

    pub fn from_env() -> Self {
        Self::new(SettingsPaths::from_env())
    }

    pub fn paths(&self) -> &SettingsPaths {
        &self.paths
    }

    pub fn load(&self) -> Result<Settings, SettingsError> {
        let path = self.paths.resolve_load_path();
        let bytes = read_limited(path)?;
        Settings::from_json(&bytes).map_err(|source| SettingsError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Like [`load`](Self::load), but any failure yields the defaults.
    pub fn load_or_default(&self) -> Settings {
        match self.load() {
            Ok(settings) => settings,
            Err(err) => {
                tracing::warn!("{err}; using default settings");
                Settings::default()
            }
        }
    }

    /// Write to the preferred path, creating its directory.
    pub fn save(&self, settings: &Settings) -> Result<(), SettingsError> {
        let path = &self.paths.preferred;
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir).map_err(|source| SettingsError::CreateDir {
                path: dir.to_path_buf(),
                source,
            })?;
        }
        fs::write(path, settings.to_json_pretty()).map_err(|source| SettingsError::Write {
            path: path.clone(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "settings saved");
        Ok(())
    }
}

fn read_limited(path: &Path) -> Result<Vec<u8>, SettingsError> {
    let read_err = |source| SettingsError::Read {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(read_err)?;
    let mut bytes = Vec::new();
    file.take(MAX_CONFIG_SIZE as u64)
        .read_to_end(&mut bytes)
        .map_err(read_err)?;
    if bytes.len() >= MAX_CONFIG_SIZE {
        return Err(SettingsError::TooLarge {
            path: path.to_path_buf(),
            limit: MAX_CONFIG_SIZE,
        });
    }
    Ok(bytes)
}
