use std::borrow::Cow;

/// Percent-decode `text`, reading the decoded bytes as UTF-8.
///
/// Invalid UTF-8 after decoding becomes U+FFFD. `+` is kept literally and
/// malformed escapes such as `%zz` or a trailing `%` pass through unchanged.
/// Text without `%` is returned borrowed.
pub fn decode_url(text: &str) -> Cow<'_, str> {
    if !text.contains('%') {
        return Cow::Borrowed(text);
    }
    percent_encoding::percent_decode_str(text).decode_utf8_lossy()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_reserved_characters_and_utf8() {
        assert_eq!(
            decode_url("http%3A%2F%2Fexample.com%2F%C3%A9"),
            "http://example.com/é"
        );
    }

    #[test]
    fn plus_is_not_a_space() {
        assert_eq!(decode_url("a+b%20c"), "a+b c");
    }

    #[test]
    fn malformed_escapes_pass_through() {
        assert_eq!(decode_url("100%"), "100%");
        assert_eq!(decode_url("%zz%4"), "%zz%4");
        assert_eq!(decode_url("50%-off"), "50%-off");
    }

    #[test]
    fn invalid_utf8_becomes_replacement_character() {
        assert_eq!(decode_url("bad%C3%28"), "bad\u{FFFD}(");
    }

    #[test]
    fn text_without_escapes_is_borrowed() {
        assert!(matches!(decode_url("página"), Cow::Borrowed("página")));
    }
}
