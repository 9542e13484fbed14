//! Shared HTML helpers for list and anchor markup.

/// HTML-escape a string for safe output.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Serialize an attribute store as ` key="value"` pairs, in store order.
///
/// Values are escaped. Keys are emitted as-is and expected to be plain
/// attribute names.
pub fn attributes(attrs: &[(String, String)]) -> String {
    attrs
        .iter()
        .map(|(k, v)| format!(" {k}=\"{}\"", html_escape(v)))
        .collect()
}

/// Build an anchor tag for an (href, text) pair, escaping both.
pub fn anchor(href: &str, text: &str) -> String {
    format!("<a href=\"{}\">{}</a>", html_escape(href), html_escape(text))
}
