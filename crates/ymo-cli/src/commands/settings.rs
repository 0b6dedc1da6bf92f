use std::path::PathBuf;

use ymo_settings::{SettingsError, SettingsPaths, SettingsStore, app_data_dir, exe_dir};

use super::table_loader::fail;

pub struct SettingsArgs {
    pub appdata: Option<PathBuf>,
    pub exe_dir: Option<PathBuf>,
    pub path_only: bool,
}

pub fn run(args: SettingsArgs) {
    let store = SettingsStore::new(resolve_paths(&args));

    if args.path_only {
        println!("{}", store.paths().resolve_load_path().display());
        return;
    }

    match render(&store) {
        Ok(json) => print!("{json}"),
        Err(e) => fail(e),
    }
}

/// Flags override the environment one location at a time.
pub fn resolve_paths(args: &SettingsArgs) -> SettingsPaths {
    let app_data = args.appdata.clone().or_else(app_data_dir);
    let legacy_dir = args.exe_dir.clone().unwrap_or_else(exe_dir);
    SettingsPaths::new(app_data.as_deref(), &legacy_dir)
}

pub fn render(store: &SettingsStore) -> Result<String, SettingsError> {
    store.load().map(|settings| settings.to_json_pretty())
}
