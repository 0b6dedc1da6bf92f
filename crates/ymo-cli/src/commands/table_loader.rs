use std::io::{self, Read};
use std::path::{Path, PathBuf};

use ymo_format::{ByteStorage, LoadReport, TranslationTable};

#[derive(Debug, thiserror::Error)]
pub enum TableLoadError {
    #[error("failed to read stdin: {0}")]
    Stdin(io::Error),
    #[error("failed to read '{}': {source}", path.display())]
    File { path: PathBuf, source: io::Error },
}

/// Read table bytes from a file, or from stdin when the path is `-`.
pub fn read_table_bytes(path: &Path) -> Result<ByteStorage, TableLoadError> {
    if path.as_os_str() == "-" {
        let mut buf = Vec::new();
        io::stdin()
            .read_to_end(&mut buf)
            .map_err(TableLoadError::Stdin)?;
        return Ok(ByteStorage::from_vec(buf));
    }
    ByteStorage::from_file(path).map_err(|source| TableLoadError::File {
        path: path.to_path_buf(),
        source,
    })
}

pub fn load_table(path: &Path) -> Result<(TranslationTable, LoadReport), TableLoadError> {
    let bytes = read_table_bytes(path)?;
    Ok(TranslationTable::load_with_report(&bytes))
}

/// Print an error and exit, the way every command reports fatal failures.
pub fn fail(msg: impl std::fmt::Display) -> ! {
    eprintln!("error: {}", msg);
    std::process::exit(1);
}
