use ferry_primitives::buf::Buf32;

use crate::errors::{DisplayableError, DisplayedError};

/// Parse a burn record key from an optionally `0x`-prefixed hex string.
pub(crate) fn parse_record_key(s: &str) -> Result<Buf32, DisplayedError> {
    parse_hex_array(s, "record key").map(Buf32::new)
}

fn parse_hex_array<const N: usize>(s: &str, what: &str) -> Result<[u8; N], DisplayedError> {
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    let mut out = [0u8; N];
    hex::decode_to_slice(digits, &mut out)
        .user_error(format!("Invalid {what}, expected {N} hex-encoded bytes"))?;
    Ok(out)
}
