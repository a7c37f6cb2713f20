//! Tests for file kind detection

use crate::scanner::FileKind;
use rstest::rstest;
use std::path::Path;

#[rstest]
#[case("py", Some(FileKind::Python))]
#[case("js", Some(FileKind::JavaScript))]
#[case("html", Some(FileKind::Html))]
#[case("css", Some(FileKind::Css))]
#[case("json", Some(FileKind::Json))]
#[case("java", Some(FileKind::Java))]
#[case("txt", None)]
#[case("rs", None)]
#[case("PY", None)]
#[case("", None)]
fn test_file_kind_from_extension(#[case] ext: &str, #[case] expected: Option<FileKind>) {
    assert_eq!(FileKind::from_extension(ext), expected);
}

#[test]
fn test_file_kind_from_path() {
    assert_eq!(
        FileKind::from_path(Path::new("src/app.py")),
        Some(FileKind::Python)
    );
    assert_eq!(
        FileKind::from_path(Path::new("static/site.min.css")),
        Some(FileKind::Css)
    );
    assert_eq!(
        FileKind::from_path(Path::new("package.json")),
        Some(FileKind::Json)
    );
    assert_eq!(FileKind::from_path(Path::new("README.md")), None);
    assert_eq!(FileKind::from_path(Path::new("Makefile")), None);
}

#[test]
fn test_file_kind_extension_round_trips() {
    for kind in FileKind::ALL {
        assert_eq!(FileKind::from_extension(kind.extension()), Some(kind));
    }
}

#[test]
fn test_file_kind_display() {
    assert_eq!(format!("{}", FileKind::Python), "python");
    assert_eq!(format!("{}", FileKind::JavaScript), "javascript");
    assert_eq!(format!("{}", FileKind::Html), "html");
    assert_eq!(format!("{}", FileKind::Css), "css");
    assert_eq!(format!("{}", FileKind::Json), "json");
    assert_eq!(format!("{}", FileKind::Java), "java");
}

#[test]
fn test_default_kinds_leave_out_java() {
    assert!(!FileKind::DEFAULT.contains(&FileKind::Java));
    assert!(FileKind::DEFAULT.iter().all(|kind| FileKind::ALL.contains(kind)));
}
