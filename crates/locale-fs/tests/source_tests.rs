//! Tests for the disk-backed locale source under real filesystem conditions

use locale_fs::{DiskSource, Error, LocaleSource, NormalizedPath};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::tempdir;

#[test]
fn list_entries_returns_files_and_directories() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("common.json"), "{}").unwrap();
    fs::create_dir(dir.path().join("nested")).unwrap();

    let names = DiskSource::new()
        .list_entries(&NormalizedPath::new(dir.path()))
        .unwrap();

    assert_eq!(names, vec!["common.json".to_string(), "nested".to_string()]);
}

#[test]
fn list_entries_missing_directory_is_io_error_with_path() {
    let dir = tempdir().unwrap();
    let missing = NormalizedPath::new(dir.path().join("static/locales/en"));

    let err = DiskSource::new().list_entries(&missing).unwrap_err();

    match err {
        Error::Io { path, source } => {
            assert!(path.ends_with("en"));
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected Io error, got {other:?}"),
    }
}

#[test]
fn exists_reports_present_and_absent_files() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("common.json"), "{}").unwrap();
    let root = NormalizedPath::new(dir.path());
    let source = DiskSource::new();

    assert!(source.exists(&root.join("common.json")).unwrap());
    assert!(!source.exists(&root.join("missing.json")).unwrap());
}

fn list_with<S: LocaleSource>(source: S, dir: &NormalizedPath) -> Vec<String> {
    source.list_entries(dir).unwrap()
}

#[test]
fn source_is_usable_through_a_reference() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("common.json"), "{}").unwrap();
    let source = DiskSource::new();

    let names = list_with(&source, &NormalizedPath::new(dir.path()));

    assert_eq!(names, vec!["common.json".to_string()]);
}

#[test]
fn io_error_display_contains_path() {
    let err = Error::io(
        "/srv/static/locales",
        std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
    );

    let display = err.to_string();
    assert!(
        display.contains("/srv/static/locales"),
        "Error display should contain the path, got: {}",
        display
    );
}
