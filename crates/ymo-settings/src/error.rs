use std::io;
use std::path::PathBuf;

/// Failure to read or write the settings file.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("cannot read '{}': {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("cannot write '{}': {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
    #[error("cannot create directory '{}': {source}", path.display())]
    CreateDir { path: PathBuf, source: io::Error },
    #[error("'{}' exceeds the {limit} byte limit", path.display())]
    TooLarge { path: PathBuf, limit: usize },
    #[error("invalid settings in '{}': {source}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}
