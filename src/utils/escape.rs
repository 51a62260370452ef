// HTML escaping for text embedded in markup fragments

/// Escape text for literal embedding in HTML element content or attribute values.
///
/// `&`, `<`, `>`, `"` and `'` are replaced by entities; everything else passes through.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Escape an optional value; a missing value yields an empty string
pub fn escape_html_opt(text: Option<&str>) -> String {
    text.map(escape_html).unwrap_or_default()
}
