//! Percent-encoding applied at every point where user input lands in a URL.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Everything except `A-Za-z0-9_.-~` is escaped.
const UNRESERVED: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'_')
    .remove(b'.')
    .remove(b'-')
    .remove(b'~');

/// Form-style encoding: unreserved bytes kept, space as `+`, the rest `%XX`.
///
/// `"Hi There"` becomes `"Hi+There"`, `"a+b"` becomes `"a%2Bb"`.
pub fn encode_form_value(s: &str) -> String {
    s.split(' ')
        .map(|part| utf8_percent_encode(part, UNRESERVED).to_string())
        .collect::<Vec<_>>()
        .join("+")
}

/// Encode a single path segment or query component (space as `%20`).
pub fn encode_component(s: &str) -> String {
    utf8_percent_encode(s, UNRESERVED).to_string()
}

/// Encode each `/`-separated segment of a relative path, keeping the separators.
pub fn encode_path(path: &str) -> String {
    path.split('/')
        .map(encode_component)
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
#[path = "../../tests/unit/transform/encode.rs"]
mod tests;
