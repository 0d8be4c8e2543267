/// Check that `line` follows `[%6t][%H:%M:%S:%f][%-6l] %v` and return the message.
pub fn assert_rmm_layout(line: &str) -> &str {
    let rest = line.strip_prefix('[').unwrap_or_else(|| panic!("no opening bracket: {}", line));

    let (thread_id, rest) = rest.split_at(6);
    assert!(!thread_id.trim().is_empty(), "empty thread id: {}", line);
    assert!(thread_id.trim_start().chars().all(|c| c.is_ascii_digit()), "thread id not right-aligned digits: {}", line);

    let rest = rest.strip_prefix("][").unwrap_or_else(|| panic!("bad thread id field: {}", line));
    let (time, rest) = rest.split_at(15);
    let widths: Vec<usize> = time.split(':').map(str::len).collect();
    assert_eq!(widths, vec![2, 2, 2, 6], "bad timestamp field: {}", line);
    assert!(time.chars().all(|c| c.is_ascii_digit() || c == ':'), "bad timestamp field: {}", line);

    let rest = rest.strip_prefix("][").unwrap_or_else(|| panic!("bad timestamp field: {}", line));
    let end = rest.find("] ").unwrap_or_else(|| panic!("bad level field: {}", line));
    let level = &rest[..end];
    assert!(level.len() >= 6, "level not padded to six: {}", line);
    assert!(!level.starts_with(' '), "level not left-aligned: {}", line);
    assert!(
        ["trace", "debug", "info", "warning", "error"].contains(&level.trim_end()),
        "unknown level: {}",
        line
    );

    &rest[end + 2..]
}
