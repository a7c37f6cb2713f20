//! Tests for the read-once content cache

#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use crate::cache::{CacheError, CachedContent, ContentCache};
use crate::test_support::MemorySource;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

#[test]
fn test_read_returns_file_text() {
    let source = MemorySource::new().with_file("a.py", "def foo():\n    pass\n");
    let mut cache = ContentCache::with_source(source);

    let content = cache.read(Path::new("a.py")).expect("Failed to read");

    assert_eq!(content.text, "def foo():\n    pass\n");
}

#[test]
fn test_read_hits_source_once_per_path() {
    let source = MemorySource::new()
        .with_file("a.py", "x = 1")
        .with_file("b.py", "y = 2");
    let mut cache = ContentCache::with_source(source);

    for _ in 0..3 {
        cache.read(Path::new("a.py")).expect("Failed to read");
    }
    cache.read(Path::new("b.py")).expect("Failed to read");

    assert_eq!(cache.source().reads(Path::new("a.py")), 1);
    assert_eq!(cache.source().reads(Path::new("b.py")), 1);
    assert_eq!(cache.len(), 2);
}

#[test]
fn test_cached_text_survives_source_changes() {
    let source = MemorySource::new().with_file("a.py", "original");
    let mut cache = ContentCache::with_source(source);

    cache.read(Path::new("a.py")).expect("Failed to read");
    cache.source().insert("a.py", "changed");
    let content = cache.read(Path::new("a.py")).expect("Failed to read");

    assert_eq!(content.text, "original");
}

#[test]
fn test_cached_text_survives_file_removal() {
    let source = MemorySource::new().with_file("a.py", "original");
    let mut cache = ContentCache::with_source(source);

    cache.read(Path::new("a.py")).expect("Failed to read");
    cache.source().remove(Path::new("a.py"));

    assert!(cache.read(Path::new("a.py")).is_ok());
}

#[test]
fn test_missing_file_is_a_file_access_error() {
    let mut cache = ContentCache::with_source(MemorySource::new());

    let result = cache.read(Path::new("gone.py"));

    match result {
        Err(CacheError::FileAccess { path, .. }) => assert_eq!(path, Path::new("gone.py")),
        other => panic!("Expected FileAccess error, got {other:?}"),
    }
}

#[test]
fn test_failed_read_is_not_cached() {
    let source = MemorySource::new();
    let mut cache = ContentCache::with_source(source);

    assert!(cache.read(Path::new("late.py")).is_err());
    assert!(!cache.is_cached(Path::new("late.py")));

    cache.source().insert("late.py", "def late():");
    let content = cache.read(Path::new("late.py")).expect("Failed to read");
    assert_eq!(content.text, "def late():");
    assert_eq!(cache.source().reads(Path::new("late.py")), 2);
}

#[test]
fn test_is_cached_and_len() {
    let source = MemorySource::new().with_file("a.py", "");
    let mut cache = ContentCache::with_source(source);

    assert!(cache.is_empty());
    assert!(!cache.is_cached(Path::new("a.py")));

    cache.read(Path::new("a.py")).expect("Failed to read");

    assert!(cache.is_cached(Path::new("a.py")));
    assert_eq!(cache.len(), 1);
}

#[test]
fn test_content_hash_is_sha256_hex() {
    let content = CachedContent::new(String::new());

    assert_eq!(
        content.hash,
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
}

#[test]
fn test_content_hash_differs_by_content() {
    let a = CachedContent::new("def a():".to_string());
    let b = CachedContent::new("def b():".to_string());

    assert_eq!(a.hash.len(), 64);
    assert_ne!(a.hash, b.hash);
}

#[test]
fn test_filesystem_cache_reads_real_files() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("main.py");
    fs::write(&path, "class Main:\n    pass\n").expect("Failed to write file");

    let mut cache = ContentCache::new();
    let content = cache.read(&path).expect("Failed to read");

    assert_eq!(content.text, "class Main:\n    pass\n");
    assert!(cache.exists(&path));
    assert!(!cache.exists(&temp_dir.path().join("other.py")));
}

#[test]
fn test_filesystem_cache_rejects_invalid_utf8() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("blob.json");
    fs::write(&path, [0xffu8, 0xfe, 0x00]).expect("Failed to write file");

    let mut cache = ContentCache::new();

    assert!(matches!(
        cache.read(&path),
        Err(CacheError::FileAccess { .. })
    ));
}
