//! Application settings persisted as JSON.
//!
//! Two layers:
//! - **Model**: [`Settings`] and its JSON representation
//! - **Store**: where the file lives ([`SettingsPaths`]) and how it is read
//!   and written ([`SettingsStore`])

mod error;
mod model;
mod paths;
mod store;

#[cfg(test)]
mod model_tests;
#[cfg(test)]
mod store_tests;

pub use error::SettingsError;
pub use model::Settings;
pub use paths::{APP_DIR_NAME, CONFIG_NAME, SettingsPaths, app_data_dir, exe_dir};
pub use store::{MAX_CONFIG_SIZE, SettingsStore};
