// Content-type sniffing
// Magic numbers via `infer`, falling back to a plain-text heuristic

use std::io::Read;

use super::handle::FileHandle;
use crate::error::{ExtFileError, Result};

/// Bytes inspected when sniffing
pub const SNIFF_LEN: usize = 8 * 1024;

pub const TEXT_PLAIN: &str = "text/plain";
pub const OCTET_STREAM: &str = "application/octet-stream";

/// Detect the MIME type of a file from its leading bytes
pub fn detect<H: FileHandle>(handle: &H) -> Result<String> {
    let reader = handle.open_buffered_reader(SNIFF_LEN)?;

    let mut head = Vec::with_capacity(SNIFF_LEN);
    reader
        .take(SNIFF_LEN as u64)
        .read_to_end(&mut head)
        .map_err(|e| ExtFileError::from_io_error(e, "sniffing content type of", handle.path()))?;

    Ok(detect_bytes(&head).to_string())
}

/// Detect the MIME type of an in-memory buffer
pub fn detect_bytes(head: &[u8]) -> &'static str {
    if let Some(kind) = infer::get(head) {
        return kind.mime_type();
    }

    if looks_like_text(head) {
        TEXT_PLAIN
    } else {
        OCTET_STREAM
    }
}

fn looks_like_text(head: &[u8]) -> bool {
    if head.is_empty() || head.contains(&0) {
        return false;
    }

    match std::str::from_utf8(head) {
        Ok(_) => true,
        // A full sample may cut a multi-byte character in half
        Err(e) => e.error_len().is_none() && head.len() == SNIFF_LEN,
    }
}
