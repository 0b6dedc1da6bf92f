//! Settings model and its JSON form.
//!
//! ```json
//! {
//!   "reconnect": false,
//!   "showNotification": true,
//!   "lastDevices": ["..."]
//! }
//! ```

use serde::{Deserialize, Serialize};

/// Persisted application settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Reconnect to `last_devices` on startup.
    pub reconnect: bool,
    pub show_notification: bool,
    /// Ids of the devices connected when the settings were last saved.
    pub last_devices: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            reconnect: false,
            show_notification: true,
            last_devices: Vec::new(),
        }
    }
}

impl Settings {
    /// Parse settings JSON.
    ///
    /// `reconnect` and `lastDevices` are required, `showNotification` is
    /// optional. Non-string device ids are skipped.
    pub fn from_json(json: &[u8]) -> Result<Self, serde_json::Error> {
        let raw: RawSettings = serde_json::from_slice(json)?;
        Ok(raw.into())
    }

    /// Pretty JSON (2-space indent, trailing newline).
    pub fn to_json_pretty(&self) -> String {
        // a struct of bools and strings always serializes
        let mut json = serde_json::to_string_pretty(self).unwrap_or_default();
        json.push('\n');
        json
    }
}

/// Settings as stored on disk.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSettings {
    reconnect: bool,
    #[serde(default = "default_show_notification")]
    show_notification: bool,
    last_devices: Vec<serde_json::Value>,
}

fn default_show_notification() -> bool {
    true
}

impl From<RawSettings> for Settings {
    fn from(raw: RawSettings) -> Self {
        Self {
            reconnect: raw.reconnect,
            show_notification: raw.show_notification,
            last_devices: raw
                .last_devices
                .into_iter()
                .filter_map(|v| match v {
                    serde_json::Value::String(id) => Some(id),
                    _ => None,
                })
                .collect(),
        }
    }
}
