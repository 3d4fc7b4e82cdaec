//! Markup escaping for serialized JSON
//!
//! Some server-side frameworks (Go's `encoding/json` among them) encode `<`,
//! `>` and `&` as `\u00XX` escapes by default, and the controller expects
//! that form from structured clients. serde_json leaves these characters
//! literal, so escaped-mode requests run their serialized bytes through this
//! transform. Inside valid serialized JSON these bytes only occur within
//! string values, so a byte-level substitution is safe.

/// Encode `<`, `>` and `&` in serialized JSON as unicode escapes.
pub fn escape_html_json(raw: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(raw.len());
    for &byte in raw {
        match byte {
            b'<' => out.extend_from_slice(b"\\u003c"),
            b'>' => out.extend_from_slice(b"\\u003e"),
            b'&' => out.extend_from_slice(b"\\u0026"),
            _ => out.push(byte),
        }
    }
    out
}
