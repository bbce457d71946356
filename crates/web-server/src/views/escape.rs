/// Escape HTML special characters.
///
/// Applied to every dynamic value placed in markup, whether it is element
/// text or a single- or double-quoted attribute.
pub fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// The detail-page URL for a school code.
pub fn details_href(code: &str) -> String {
    format!("/details/{}", urlencoding::encode(code))
}
