use harlog_core::har::HarReader;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper to get path to test fixtures
fn fixture_path(filename: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("tests")
        .join("fixtures")
        .join(filename)
}

/// Test filtering by exact host match
#[test]
fn test_filter_exact_host_match() {
    let input = fixture_path("sample.har");
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("filtered.har");

    let result = harlog_cli::commands::filter::execute(
        &input,
        vec!["api.example.com".to_string()],
        None,
        None,
        None,
        None,
        Some(output.clone()),
    );

    assert!(result.is_ok(), "Should successfully filter HAR file");

    let filtered = HarReader::from_file(&output).unwrap();
    assert_eq!(filtered.log.entries.len(), 2);

    for entry in &filtered.log.entries {
        let url = url::Url::parse(&entry.request.url).unwrap();
        assert_eq!(url.host_str().unwrap(), "api.example.com");
    }
}

/// Test filtering with glob pattern
#[test]
fn test_filter_glob_pattern() {
    let input = fixture_path("sample.har");
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("filtered.har");

    let result = harlog_cli::commands::filter::execute(
        &input,
        vec!["*.example.com".to_string()],
        None,
        None,
        None,
        None,
        Some(output.clone()),
    );

    assert!(result.is_ok());

    // api.example.com (2) + cdn.example.com (1)
    let filtered = HarReader::from_file(&output).unwrap();
    assert_eq!(filtered.log.entries.len(), 3);
}

/// Test filtering by status class
#[test]
fn test_filter_status_class() {
    let input = fixture_path("sample.har");
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("filtered.har");

    let result = harlog_cli::commands::filter::execute(
        &input,
        vec![],
        Some("4xx".to_string()),
        None,
        None,
        None,
        Some(output.clone()),
    );

    assert!(result.is_ok());

    let filtered = HarReader::from_file(&output).unwrap();
    assert_eq!(filtered.log.entries.len(), 1);
    assert_eq!(filtered.log.entries[0].response.status, 404);
}

/// Test filtering by method
#[test]
fn test_filter_method() {
    let input = fixture_path("sample.har");
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("filtered.har");

    let result = harlog_cli::commands::filter::execute(
        &input,
        vec![],
        None,
        Some("post".to_string()),
        None,
        None,
        Some(output.clone()),
    );

    assert!(result.is_ok());

    let filtered = HarReader::from_file(&output).unwrap();
    assert_eq!(filtered.log.entries.len(), 1);
    assert_eq!(filtered.log.entries[0].request.method, "POST");
}

/// Test filtering by parent page
#[test]
fn test_filter_by_page() {
    let input = fixture_path("sample.har");
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("filtered.har");

    let result = harlog_cli::commands::filter::execute(
        &input,
        vec![],
        None,
        None,
        None,
        Some("page_1".to_string()),
        Some(output.clone()),
    );

    assert!(result.is_ok());

    // The tracker entry has no pageref and must be excluded
    let filtered = HarReader::from_file(&output).unwrap();
    assert_eq!(filtered.log.entries.len(), 3);
    for entry in &filtered.log.entries {
        assert_eq!(entry.page_ref.as_deref(), Some("page_1"));
    }
}

/// Filtering must carry custom fields through untouched
#[test]
fn test_filter_preserves_extension_fields() {
    let input = fixture_path("sample.har");
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("filtered.har");

    harlog_cli::commands::filter::execute(
        &input,
        vec!["cdn.example.com".to_string()],
        None,
        None,
        None,
        None,
        Some(output.clone()),
    )
    .unwrap();

    let filtered = HarReader::from_file(&output).unwrap();
    assert_eq!(
        filtered.log.entries[0]
            .extensions
            .get("_fromCache")
            .unwrap()
            .as_str(),
        Some("disk")
    );
}

/// Zero matches is an error, not an empty document
#[test]
fn test_filter_no_matches_is_error() {
    let input = fixture_path("sample.har");

    let result = harlog_cli::commands::filter::execute(
        &input,
        vec!["nowhere.invalid".to_string()],
        None,
        None,
        None,
        None,
        None,
    );

    assert!(result.is_err());
}
