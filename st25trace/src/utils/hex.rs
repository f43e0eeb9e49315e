//! Hexadecimal helpers for record annotations and test input.
//!
//! Record data fields render bytes as lowercase `0x`-prefixed values with a
//! single space between bytes; the parser accepts optional whitespace and an
//! optional `0x` prefix per byte so captures can be written readably in
//! tests.

/// Format a byte slice as `0x`-prefixed, space-separated lowercase hex.
///
/// Example: `&[0x00, 0xaa]` -> `"0x00 0xaa"`
pub fn bytes_to_hex_prefixed(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 5);
    for (i, b) in bytes.iter().enumerate() {
        if i != 0 {
            s.push(' ');
        }
        use std::fmt::Write;
        // write! never fails writing to a String
        let _ = write!(&mut s, "{:#04x}", b);
    }
    s
}

/// Parse a hex string into bytes.
///
/// Accepts whitespace between bytes and an optional `0x`/`0X` prefix per
/// byte. Returns an error message string on parse failure.
pub fn parse_hex(s: &str) -> Result<Vec<u8>, String> {
    let mut out = Vec::new();
    for token in s.split_whitespace() {
        let token = token
            .strip_prefix("0x")
            .or_else(|| token.strip_prefix("0X"))
            .unwrap_or(token);
        if token.is_empty() || token.len() % 2 != 0 {
            return Err(format!("hex token '{}' has odd length", token));
        }
        let mut i = 0usize;
        while i < token.len() {
            let pair = &token[i..i + 2];
            let byte = u8::from_str_radix(pair, 16)
                .map_err(|e| format!("invalid hex pair '{}': {}", pair, e))?;
            out.push(byte);
            i += 2;
        }
    }
    Ok(out)
}
