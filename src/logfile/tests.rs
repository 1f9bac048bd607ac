use super::LogFile;

#[tokio::test]
async fn test_missing_file_needs_header() {
    let dir = tempfile::tempdir().unwrap();
    let log = LogFile::new(dir.path().join("metrics.csv"));
    assert!(log.needs_header().await);
}

#[tokio::test]
async fn test_empty_file_needs_header() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("metrics.csv");
    std::fs::write(&path, "").unwrap();

    let log = LogFile::new(&path);
    assert!(log.needs_header().await);
}

#[tokio::test]
async fn test_nonempty_file_does_not_need_header() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("metrics.csv");
    std::fs::write(&path, "timestamp,cpu,mem\n").unwrap();

    let log = LogFile::new(&path);
    assert!(!log.needs_header().await);
}

#[tokio::test]
async fn test_write_header_replaces_empty_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("metrics.csv");
    std::fs::write(&path, "").unwrap();

    let log = LogFile::new(&path);
    log.write_header("timestamp,cpu,mem").await.unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "timestamp,cpu,mem\n");
}

#[tokio::test]
async fn test_append_preserves_existing_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("metrics.csv");

    let log = LogFile::new(&path);
    log.write_header("timestamp,cpu,mem").await.unwrap();
    log.append_row("2024-01-01T00:00:00,12.3,45.6").await.unwrap();
    log.append_row("2024-01-01T00:05:00,14.0,46.1").await.unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(
        lines,
        vec![
            "timestamp,cpu,mem",
            "2024-01-01T00:00:00,12.3,45.6",
            "2024-01-01T00:05:00,14.0,46.1",
        ]
    );
}

#[tokio::test]
async fn test_append_creates_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("metrics.csv");

    let log = LogFile::new(&path);
    log.append_row("2024-01-01T00:00:00,12.3,45.6").await.unwrap();

    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "2024-01-01T00:00:00,12.3,45.6\n"
    );
}
