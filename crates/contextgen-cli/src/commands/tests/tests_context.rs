//! Tests for the context command

#![allow(clippy::expect_used)]

use crate::commands::context::render;
use crate::commands::types::{ConventionArg, SessionArgs};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_context_json_lists_every_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let a = temp_dir.path().join("a.py");
    let b = temp_dir.path().join("b.js");
    fs::write(&a, "def foo():").expect("Failed to write file");
    fs::write(&b, "function bar() {}").expect("Failed to write file");

    let session = SessionArgs {
        path: temp_dir.path().to_path_buf(),
        conversation_files: vec![b.clone()],
        strict: false,
        gitignore: false,
        convention: ConventionArg::Auto,
    };
    let json = render(&session).expect("Context should render");
    let value: serde_json::Value = serde_json::from_str(&json).expect("Context should be JSON");

    let a_key = a.to_string_lossy().into_owned();
    let b_key = b.to_string_lossy().into_owned();
    assert_eq!(value[a_key.as_str()]["functions"][0], "foo");
    assert_eq!(value[a_key.as_str()]["is_conversation_file"], false);
    assert_eq!(value[b_key.as_str()]["functions"][0], "bar");
    assert_eq!(value[b_key.as_str()]["is_conversation_file"], true);
}

#[test]
fn test_context_fails_for_missing_root() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    let session = SessionArgs {
        path: temp_dir.path().join("absent"),
        conversation_files: vec![],
        strict: false,
        gitignore: false,
        convention: ConventionArg::Python,
    };

    assert!(render(&session).is_err());
}
