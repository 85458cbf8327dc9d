//! Text-to-binary decoding for embedded payload fields.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;

/// Decode a Base64-encoded payload field into raw bytes.
///
/// Never fails the caller: an empty input yields empty bytes, and a malformed
/// encoding yields empty bytes after logging a diagnostic. One corrupt field
/// must not abort a whole import batch.
pub fn decode_payload(text: &str) -> Vec<u8> {
    if text.is_empty() {
        return Vec::new();
    }
    match BASE64.decode(text) {
        Ok(bytes) => bytes,
        Err(e) => {
            log::warn!("Error decoding Base64 payload: {}", e);
            Vec::new()
        }
    }
}
