//! Tile record input: one `id,west,north,east,south` record per line

use crate::io::configuration::RECORD_COMMENT_PREFIX;
use crate::io::error::{ErrorContext, Result, WithContext};
use std::path::Path;

/// Split text into records, skipping blank lines and `#` comments
pub fn parse_records(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with(RECORD_COMMENT_PREFIX))
        .map(ToString::to_string)
        .collect()
}

/// Read records from a file
///
/// # Errors
///
/// Returns `FileSystem` if the file cannot be read
pub fn read_records(path: &Path) -> Result<Vec<String>> {
    let text = std::fs::read_to_string(path).with_context(ErrorContext {
        path: Some(path.to_path_buf()),
        operation: Some("read tile records"),
        ..Default::default()
    })?;
    Ok(parse_records(&text))
}
