//! Escaping rules for the two markup contexts the renderer writes into.
//!
//! Text context escapes only the characters that can open or close a tag.
//! Attribute context additionally neutralizes embedded double quotes before
//! applying the text rules, since `"` is what delimits the value.

/// Escape HTML tag delimiters so text can be inserted into a page with no
/// chance of markup injection.
///
/// Only `<` and `>` are rewritten; everything else passes through verbatim.
#[must_use]
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape illegal characters for an HTML attribute value.
///
/// Embedded double quotes are backslash-escaped first, then the text-context
/// rules apply on top.
#[must_use]
pub fn escape_attribute_value(value: &str) -> String {
    escape_text(&value.replace('"', "\\\""))
}
