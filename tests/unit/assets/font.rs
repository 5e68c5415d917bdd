use super::*;

#[test]
fn missing_font_file_is_a_font_error() {
    let err = FontSource::Path(PathBuf::from("/nonexistent/dir/font.ttf"))
        .load()
        .unwrap_err();
    assert!(matches!(err, StillreelError::Font(_)), "{err}");
}

#[test]
fn garbage_font_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bogus.ttf");
    std::fs::write(&path, b"definitely not a font").unwrap();
    let err = FontSource::Path(path).load().unwrap_err();
    assert!(err.to_string().contains("no usable font faces"), "{err}");
}

#[test]
fn empty_database_reports_no_fonts() {
    let db = fontdb::Database::new();
    let err = load_from_db(&db).unwrap_err();
    assert!(err.to_string().contains("no installed fonts"), "{err}");
}

#[test]
fn default_source_is_system() {
    assert_eq!(FontSource::default(), FontSource::System);
}
