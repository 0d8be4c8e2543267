mod common;

use common::assert_rmm_layout;
use rmm_logger::{default_logger, rmm_log_info, rmm_log_warn, Logger, SinkTarget};
use std::fs;
use std::sync::{Arc, Barrier};
use std::thread;
use tempfile::tempdir;

const THREADS: usize = 8;

#[test]
fn default_logger_appends_to_file_from_env_and_ignores_late_changes() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("rmm_debug.log");
    fs::write(&path, "line from a previous run\n").unwrap();
    std::env::set_var("RMM_DEBUG_LOG_FILE", &path);

    // All threads race on the very first access.
    let barrier = Arc::new(Barrier::new(THREADS));
    let handles: Vec<_> = (0..THREADS)
        .map(|i| {
            let barrier = barrier.clone();
            thread::spawn(move || {
                barrier.wait();
                let logger = default_logger();
                rmm_log_info!("hello from thread {}", i);
                logger as *const Logger as usize
            })
        })
        .collect();
    let addresses: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    let logger = default_logger();
    assert!(addresses.iter().all(|a| *a == logger as *const Logger as usize));
    assert!(std::ptr::eq(logger, default_logger()));
    assert_eq!(logger.name(), "RMM");

    let late = dir.path().join("late.log");
    std::env::set_var("RMM_DEBUG_LOG_FILE", &late);
    rmm_log_warn!("after env change");

    assert!(!late.exists());
    assert_eq!(default_logger().sink_target(), &SinkTarget::File(path.clone()));

    let content = fs::read_to_string(&path).unwrap();
    let mut lines = content.lines();
    assert_eq!(lines.next(), Some("line from a previous run"));

    let messages: Vec<&str> = lines.map(assert_rmm_layout).collect();
    assert_eq!(messages.len(), THREADS + 1);
    for i in 0..THREADS {
        let expected = format!("hello from thread {}", i);
        assert!(messages.iter().any(|m| *m == expected), "missing {}", expected);
    }
    assert_eq!(messages.last(), Some(&"after env change"));
    assert!(content.contains("][warning] after env change"));
    assert!(content.contains("][info  ] hello from thread 0"));
}
