use std::io::Write;

use super::storage::ByteStorage;

static EMBEDDED: &[u8] = &[1, 0, 0xAA];

#[test]
fn byte_storage_from_vec() {
    let storage = ByteStorage::from_vec(vec![1, 2, 3]);
    assert_eq!(&*storage, &[1, 2, 3]);
    assert_eq!(storage.len(), 3);
}

#[test]
fn byte_storage_from_static_borrows() {
    let storage = ByteStorage::from_static(EMBEDDED);
    assert!(matches!(storage, ByteStorage::Static(_)));
    assert_eq!(storage.as_slice().as_ptr(), EMBEDDED.as_ptr());
}

#[test]
fn byte_storage_copy_from_slice() {
    let data = [9u8, 8, 7];
    let storage = ByteStorage::copy_from_slice(&data);
    assert_eq!(storage[1], 8);
}

#[test]
fn byte_storage_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&[0, 0]).unwrap();

    let storage = ByteStorage::from_file(file.path()).unwrap();
    assert_eq!(&*storage, &[0, 0]);
}

#[test]
fn byte_storage_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = ByteStorage::from_file(dir.path().join("missing.ymo")).unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
}
