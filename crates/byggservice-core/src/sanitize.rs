//! Plain-text sanitization of raw field values.
//!
//! A sanitized value can neither render as markup nor carry extra lines into
//! the composed message.

/// Neutralize markup-significant characters (`&`, `<`, `>`)
pub fn escape_markup(input: &str) -> String {
    html_escape::encode_text(input).into_owned()
}

/// Fold line breaks into spaces, drop angle brackets, trim
pub fn neutralize_header_chars(input: &str) -> String {
    input
        .chars()
        .filter(|c| *c != '<' && *c != '>')
        .map(|c| if c == '\r' || c == '\n' { ' ' } else { c })
        .collect::<String>()
        .trim()
        .to_string()
}

/// Keep at most `max` characters
pub fn cap_length(input: &str, max: usize) -> String {
    match input.char_indices().nth(max) {
        Some((idx, _)) => input[..idx].to_string(),
        None => input.to_string(),
    }
}

/// Full pipeline for one field: trim, escape, cap, neutralize
pub fn sanitize_field(raw: &str, max_chars: usize) -> String {
    let escaped = escape_markup(raw.trim());
    neutralize_header_chars(&cap_length(&escaped, max_chars))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup() {
        assert_eq!(escape_markup("<b>Jo & Co</b>"), "&lt;b&gt;Jo &amp; Co&lt;/b&gt;");
        assert_eq!(escape_markup("plain"), "plain");
    }

    #[test]
    fn neutralizes_line_breaks_and_brackets() {
        assert_eq!(
            neutralize_header_chars(" a\r\nBcc: x@y.no <z> "),
            "a  Bcc: x@y.no z"
        );
    }

    #[test]
    fn caps_on_char_boundaries() {
        assert_eq!(cap_length("æøå", 2), "æø");
        assert_eq!(cap_length("abc", 10), "abc");
        assert_eq!(cap_length("abc", 0), "");
    }

    #[test]
    fn sanitize_field_never_leaves_markup_or_newlines() {
        let out = sanitize_field("  <script>alert(1)</script>\nmore  ", 100);
        assert!(!out.contains('<'));
        assert!(!out.contains('>'));
        assert!(!out.contains('\n'));
        assert_eq!(out, "&lt;script&gt;alert(1)&lt;/script&gt; more");
    }

    #[test]
    fn sanitize_field_caps_after_escaping() {
        // "&amp;" is five characters once escaped
        assert_eq!(sanitize_field("&&", 6), "&amp;&");
    }
}
