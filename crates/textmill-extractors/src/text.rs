//! Plain-text decoding for .txt uploads.

use crate::error::ExtractResult;

/// Decode the raw bytes of a plain-text upload as strict UTF-8.
///
/// Text uploads are decoded straight from the request body; unlike the
/// binary formats they never touch the filesystem. Invalid UTF-8 is an
/// error, not a lossy replacement.
pub fn decode_plain_text(bytes: &[u8]) -> ExtractResult<String> {
    Ok(String::from_utf8(bytes.to_vec())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExtractError;

    #[test]
    fn test_decode_plain_text() {
        let text = decode_plain_text(b"Hello\nWorld").unwrap();
        assert_eq!(text, "Hello\nWorld");
    }

    #[test]
    fn test_decode_empty_input_is_success() {
        assert_eq!(decode_plain_text(b"").unwrap(), "");
    }

    #[test]
    fn test_decode_rejects_invalid_utf8() {
        let result = decode_plain_text(&[0xff, 0xfe, 0xfd]);
        assert!(matches!(result, Err(ExtractError::Utf8(_))));
    }
}
