//! Canonical string escaping.
//!
//! Output is a double-quoted, ASCII-only token that reparses to the exact
//! input text. Short escapes cover the usual control characters; every other
//! scalar below U+0020 or at/above U+007F becomes a `\u` escape with
//! lowercase hex digits. Code points above U+FFFF are written as a UTF-16
//! surrogate pair, high unit first, e.g. U+1D11E yields two `\u` escapes.

/// Append the quoted canonical token for `text` to `out`.
///
/// Pure and total over well-formed text; callers holding raw bytes must
/// validate UTF-8 before reaching this point.
pub(crate) fn escape_str(text: &str, out: &mut String) {
    out.push('"');
    for ch in text.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{0008}' => out.push_str("\\b"),
            '\u{000C}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            ch if (ch as u32) < 0x20 || (ch as u32) >= 0x7f => {
                let mut units = [0u16; 2];
                for unit in ch.encode_utf16(&mut units).iter() {
                    out.push_str(&format!("\\u{:04x}", unit));
                }
            }
            ch => out.push(ch),
        }
    }
    out.push('"');
}
