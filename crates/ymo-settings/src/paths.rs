use std::env;
use std::path::{Path, PathBuf};

/// Directory under `APPDATA` holding the settings file.
pub const APP_DIR_NAME: &str = "AudioPlaybackConnector";
/// Settings file name, shared by both locations.
pub const CONFIG_NAME: &str = "AudioPlaybackConnector.json";

/// The two places a settings file may live.
///
/// Saving always targets `preferred`. Loading picks the first existing file,
/// `preferred` before `legacy`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SettingsPaths {
    pub preferred: PathBuf,
    pub legacy: PathBuf,
}

impl SettingsPaths {
    /// Paths with the default directory and file names.
    pub fn new(app_data: Option<&Path>, exe_dir: &Path) -> Self {
        Self::with_names(app_data, exe_dir, APP_DIR_NAME, CONFIG_NAME)
    }

    pub fn with_names(
        app_data: Option<&Path>,
        exe_dir: &Path,
        app_dir: &str,
        file_name: &str,
    ) -> Self {
        let legacy = exe_dir.join(file_name);
        let preferred = match app_data {
            Some(root) if !root.as_os_str().is_empty() => root.join(app_dir).join(file_name),
            _ => legacy.clone(),
        };
        Self { preferred, legacy }
    }

    /// Paths from the `APPDATA` variable and the running executable.
    pub fn from_env() -> Self {
        Self::new(app_data_dir().as_deref(), &exe_dir())
    }

    /// The file to read from: `preferred` if present, else `legacy` if
    /// present, else `preferred`.
    pub fn resolve_load_path(&self) -> &Path {
        if exists(&self.preferred) {
            return &self.preferred;
        }
        if exists(&self.legacy) {
            return &self.legacy;
        }
        &self.preferred
    }
}

/// The `APPDATA` directory, if set.
pub fn app_data_dir() -> Option<PathBuf> {
    env::var_os("APPDATA").map(PathBuf::from)
}

/// Directory of the running executable, or empty when it cannot be found.
pub fn exe_dir() -> PathBuf {
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_default()
}

fn exists(path: &Path) -> bool {
    path.try_exists().unwrap_or(false)
}
