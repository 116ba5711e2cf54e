//! Wire Protocol
//!
//! Requests are the raw query bytes with no framing, optionally zero-padded by
//! clients that send fixed-size buffers. Responses are one of two fixed lines.

use std::str::Utf8Error;

pub const RESPONSE_FOUND: &str = "STRING EXISTS\n";
pub const RESPONSE_NOT_FOUND: &str = "STRING NOT FOUND\n";

/// Removes trailing `0x00` bytes.
pub fn strip_nul_padding(payload: &[u8]) -> &[u8] {
    let end = payload
        .iter()
        .rposition(|&byte| byte != 0)
        .map_or(0, |last| last + 1);
    &payload[..end]
}

/// Strips padding and decodes the query text.
///
/// Fails when the bytes are not UTF-8, which in practice means the client and
/// server disagree on whether the connection is TLS.
pub fn decode_query(payload: &[u8]) -> Result<&str, Utf8Error> {
    std::str::from_utf8(strip_nul_padding(payload))
}

pub fn verdict_response(found: bool) -> &'static str {
    if found {
        RESPONSE_FOUND
    } else {
        RESPONSE_NOT_FOUND
    }
}
