//! Text-to-markup encoding for alert content.

/// Encodes text for an HTML text node, matching what a browser serialises
/// back from `textContent`.
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Encodes a double-quoted attribute value.
pub fn escape_attribute(value: &str) -> String {
    escape_text(value).replace('"', "&quot;")
}

/// Icon placeholder in the alert's `icon` slot followed by the message.
pub fn alert_content(icon_tag: &str, icon: &str, message: &str) -> String {
    format!(
        r#"<{tag} name="{name}" slot="icon"></{tag}>{text}"#,
        tag = icon_tag,
        name = escape_attribute(icon),
        text = escape_text(message)
    )
}
