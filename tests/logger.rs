use std::fs;
use tasklist::logger::Logger;

#[test]
fn test_config_based_logging_disabled() {
    let logger = Logger::from_config(false).unwrap();
    assert!(!logger.is_enabled());
    assert!(logger.log_file().is_none());

    logger.log("Test message".to_string());
    let logs = logger.get_logs();
    assert_eq!(logs.len(), 1);
    assert!(logs[0].contains("Test message"));
}

#[test]
fn test_logs_are_newest_first_and_clearable() {
    let logger = Logger::new();
    logger.log("first".to_string());
    logger.log("second".to_string());

    let logs = logger.get_logs();
    assert!(logs[0].ends_with("second"));
    assert!(logs[1].ends_with("first"));

    // Clones share the same buffer
    let clone = logger.clone();
    clone.clear();
    assert!(logger.get_logs().is_empty());
}

#[test]
fn test_in_memory_logs_are_bounded() {
    let logger = Logger::new();
    for i in 0..(tasklist::constants::MAX_LOG_ENTRIES + 10) {
        logger.log(format!("entry {}", i));
    }

    let logs = logger.get_logs();
    assert_eq!(logs.len(), tasklist::constants::MAX_LOG_ENTRIES);
    assert!(logs[0].ends_with(&format!("entry {}", tasklist::constants::MAX_LOG_ENTRIES + 9)));
}

#[test]
fn test_file_logging_writes_entries() {
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("logs").join("tasklist.log");

    let logger = Logger::with_log_file(&log_path).unwrap();
    assert!(logger.is_enabled());
    assert_eq!(logger.log_file(), Some(log_path.as_path()));

    logger.log("Test message with file".to_string());
    log::logger().flush();

    // In-memory entry is always present
    assert!(logger.get_logs()[0].contains("Test message with file"));

    let file_content = fs::read_to_string(&log_path).unwrap_or_default();
    assert!(file_content.contains("Test message with file"));

    // The file sink is process-wide; a second file logger stays in memory only
    let second = Logger::with_log_file(dir.path().join("other.log")).unwrap();
    assert!(!second.is_enabled());
    assert!(second.log_file().is_none());
    second.log("Only in memory".to_string());
    assert!(second.get_logs()[0].contains("Only in memory"));
}

#[test]
fn test_entries_use_local_time() {
    let before = chrono::Local::now().format("[%H:%M").to_string();
    let logger = Logger::new();
    logger.log("clock".to_string());
    let after = chrono::Local::now().format("[%H:%M").to_string();

    let entry = &logger.get_logs()[0];
    assert!(entry.starts_with(&before) || entry.starts_with(&after), "{}", entry);
}
