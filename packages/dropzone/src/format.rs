//! Text shown in the metadata label.

/// Convert a byte count to whole kilobytes, rounding half up.
///
/// ```rust
/// assert_eq!(dropzone::size_in_kb(1023), 1);
/// assert_eq!(dropzone::size_in_kb(2050), 2);
/// ```
pub fn size_in_kb(size_bytes: u64) -> u64 {
    size_bytes.saturating_add(512) / 1024
}

/// Format the metadata label for a file: `File: <name>, Size: <size> KB`.
pub fn file_info(name: &str, size_bytes: u64) -> String {
    format!("File: {name}, Size: {} KB", size_in_kb(size_bytes))
}
