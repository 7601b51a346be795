//! Line-ending escape toggle for pasting PEM text into and out of JSON strings

/// Toggle between real CRLF line breaks and the two-character `\n` escape.
///
/// Text containing a literal CRLF has every CRLF replaced by `\n`. Otherwise
/// text containing `\n` escapes has every escape replaced by CRLF. Anything
/// else comes back unchanged.
#[must_use]
pub fn toggle_line_escapes(text: &str) -> String {
    if text.contains("\r\n") {
        text.replace("\r\n", "\\n")
    } else if text.contains("\\n") {
        text.replace("\\n", "\r\n")
    } else {
        text.to_string()
    }
}
