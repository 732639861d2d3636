//! Hexadecimal helpers for logging and captured-session parsing.

use std::fmt::Write;

/// Lowercase hex without separators: `&[0x91, 0xaf]` -> `"91af"`.
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    bytes.iter().fold(String::with_capacity(bytes.len() * 2), |mut s, b| {
        // writing into a String cannot fail
        let _ = write!(s, "{:02x}", b);
        s
    })
}

/// Lowercase hex with one space between bytes: `&[0x91, 0xaf]` -> `"91 af"`.
pub fn bytes_to_hex_spaced(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 3);
    for (i, b) in bytes.iter().enumerate() {
        if i != 0 {
            s.push(' ');
        }
        let _ = write!(s, "{:02x}", b);
    }
    s
}

/// Parse a hex dump as it usually appears in reader logs.
///
/// Whitespace, `:` and `-` separators are ignored, as is a `0x` prefix on
/// each group, so `"91 00"`, `"91:00"` and `"0x91 0x00"` all parse to
/// `[0x91, 0x00]`.
pub fn parse_hex(s: &str) -> Result<Vec<u8>, String> {
    let mut digits = String::with_capacity(s.len());
    for group in s.split(|c: char| c.is_whitespace() || c == ':' || c == '-') {
        let group = group
            .strip_prefix("0x")
            .or_else(|| group.strip_prefix("0X"))
            .unwrap_or(group);
        digits.push_str(group);
    }

    if digits.len() % 2 != 0 {
        return Err(format!("odd number of hex digits in '{}'", s.trim()));
    }

    digits
        .as_bytes()
        .chunks(2)
        .map(|pair| {
            let pair = std::str::from_utf8(pair).map_err(|e| e.to_string())?;
            u8::from_str_radix(pair, 16).map_err(|e| format!("invalid hex pair '{}': {}", pair, e))
        })
        .collect()
}
