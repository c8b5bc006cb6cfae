//! HTTP Basic Auth credential encoding

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};

/// Encode a plaintext `user:password` pair into the value carried by an
/// `Authorization: Basic` header.
///
/// The result is a single line with no trailing newline, ready for direct
/// comparison against the credential a client presents. Verifying that
/// credential is the HTTP layer's job; this core only prepares the value.
pub fn encode_basic_credential(plaintext: &str) -> String {
    BASE64.encode(plaintext.as_bytes())
}
