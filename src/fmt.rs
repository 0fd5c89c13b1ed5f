use crate::parse::character_set::is_white_space;
use crate::Byte;
use crate::MAX_DEBUG_BYTES;

/// Render bytes for log and error messages, escaping anything that is not
/// printable ASCII or white-space and truncating long buffers.
pub(crate) fn debug_bytes(bytes: &[Byte]) -> String {
    let mut result = String::new();
    for &byte in bytes.iter().take(MAX_DEBUG_BYTES) {
        if byte.is_ascii_graphic() || is_white_space(byte) {
            // Preserve ASCII printable and white-space characters
            result.push(char::from(byte));
        } else {
            // Hexadecimal representation of other bytes
            result.push_str(&format!("\\x{:02X}", byte));
        }
    }
    if MAX_DEBUG_BYTES < bytes.len() {
        result.push_str("...");
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_bytes_escapes_binary() {
        assert_eq!(debug_bytes(b"AB\x00\xFF"), "AB\x00\\xFF");
        assert_eq!(debug_bytes(b"/Filter /FlateDecode"), "/Filter /FlateDecode");
    }

    #[test]
    fn debug_bytes_truncates() {
        let bytes = vec![b'A'; MAX_DEBUG_BYTES + 1];
        let debugged = debug_bytes(&bytes);
        assert!(debugged.ends_with("..."));
        assert_eq!(debugged.len(), MAX_DEBUG_BYTES + 3);
    }
}
