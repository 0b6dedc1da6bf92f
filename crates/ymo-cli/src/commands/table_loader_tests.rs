use std::fs;
use std::path::Path;

use ymo_format::TableWriter;

use super::table_loader::{TableLoadError, load_table};

#[test]
fn loads_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fr.ymo");
    let mut writer = TableWriter::new();
    let hash = writer.insert("Cancel", "Annuler");
    fs::write(&path, writer.emit().unwrap()).unwrap();

    let (table, report) = load_table(&path).unwrap();

    assert!(report.is_clean());
    assert_eq!(table.get(hash), Some("Annuler"));
}

#[test]
fn missing_file_names_path() {
    let err = load_table(Path::new("/nonexistent/fr.ymo")).unwrap_err();

    assert!(matches!(err, TableLoadError::File { .. }));
    assert!(err.to_string().contains("/nonexistent/fr.ymo"), "{err}");
}
