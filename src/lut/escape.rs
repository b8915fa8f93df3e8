use std::fmt::Write;

/// UTF-8 encoding of U+FFFD, used for control bytes and DEL.
pub const REPLACEMENT: &[u8] = b"\xEF\xBF\xBD";

/// Render every byte as a lowercase `\xHH` escape.
pub fn escape_bytes(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 4);
    for b in bytes {
        // Writing to a String cannot fail.
        let _ = write!(out, "\\x{b:02x}");
    }
    out
}
