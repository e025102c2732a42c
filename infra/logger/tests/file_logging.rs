use petreg_logger::{LevelFilter, Logger};
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn json_file_logging_writes_structured_lines() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempdir()?;
    let log_dir = tmp_dir.path().join("logs");

    let logger = Logger::builder()
        .name("integration-file-logging")
        .console(false)
        .level(LevelFilter::INFO)
        .path(&log_dir)
        .json(true)
        .init()?;

    assert!(logger.writes_files());
    tracing::info!(pet_id = 7, "pet registered");

    std::thread::sleep(Duration::from_millis(30));
    drop(logger);

    let log_file = fs::read_dir(&log_dir)?
        .flatten()
        .map(|entry| entry.path())
        .find(|path| path.extension().and_then(|ext| ext.to_str()) == Some("log"))
        .expect("log file should be created");

    let contents = fs::read_to_string(log_file)?;
    let first = contents.lines().next().expect("at least one log line");
    let line: serde_json::Value = serde_json::from_str(first)?;
    assert_eq!(line["fields"]["message"], "pet registered");
    assert_eq!(line["fields"]["pet_id"], 7);

    Ok(())
}
