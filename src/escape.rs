//! Escaping for attribute values and text content
//!
//! The two contexts differ. Attribute values only need `"` and `&`
//! replaced since they are always emitted inside double quotes. Text content needs `&`, `<`,
//! `>` and the no-break space replaced, and leaves quotes and existing entities alone.
//!
//! All escapers return [`Cow::Borrowed`] when nothing had to change.

use std::borrow::Cow;

/// The no-break space, emitted as `&nbsp;` in text content
pub const NBSP: char = '\u{a0}';

/// Escape an attribute value: `"` and `&` only.
pub fn esc_attr(value: &str) -> Cow<'_, str> {
    escape_with(value, |c| match c {
        '"' => Some("&quot;"),
        '&' => Some("&amp;"),
        _ => None,
    })
}

/// Escape text content: `&`, `<`, `>` and U+00A0.
pub fn esc_text(value: &str) -> Cow<'_, str> {
    escape_with(value, |c| match c {
        '&' => Some("&amp;"),
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        NBSP => Some("&nbsp;"),
        _ => None,
    })
}

/// Escape all five XML reserved characters.
pub fn esc_xml(value: &str) -> Cow<'_, str> {
    escape_with(value, |c| match c {
        '&' => Some("&amp;"),
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '"' => Some("&quot;"),
        '\'' => Some("&#39;"),
        _ => None,
    })
}

/// Escape a value and wrap it in double quotes, e.g. for pseudo-attributes in `<?xml ... ?>`.
pub fn quote_attr(value: &str) -> String {
    format!("\"{}\"", esc_attr(value))
}

fn escape_with<F>(value: &str, replacement: F) -> Cow<'_, str>
where
    F: Fn(char) -> Option<&'static str>,
{
    let Some(first) = value.find(|c| replacement(c).is_some()) else {
        return Cow::Borrowed(value);
    };

    let mut escaped = String::with_capacity(value.len() + 8);
    escaped.push_str(&value[..first]);
    for c in value[first..].chars() {
        match replacement(c) {
            Some(entity) => escaped.push_str(entity),
            None => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_and_text_contexts_differ() {
        let source = r#"He said "hi" & left"#;
        assert_eq!(esc_attr(source), "He said &quot;hi&quot; &amp; left");
        assert_eq!(esc_text(source), r#"He said "hi" &amp; left"#);
    }

    #[test]
    fn test_safe_strings_are_borrowed() {
        assert!(matches!(esc_attr("plain value"), Cow::Borrowed("plain value")));
        assert!(matches!(esc_text("a < b"), Cow::Owned(_)));
        assert!(matches!(esc_text("it's fine"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_text_escaping_leaves_quotes_alone() {
        assert_eq!(esc_text("<a href=\"x\">"), "&lt;a href=\"x\"&gt;");
    }

    #[test]
    fn test_nbsp() {
        assert_eq!(esc_text("a\u{a0}b"), "a&nbsp;b");
        // Attribute values keep the raw character
        assert_eq!(esc_attr("a\u{a0}b"), "a\u{a0}b");
    }

    #[test]
    fn test_existing_entities_are_escaped_again() {
        // No entity detection: `&` is always replaced
        assert_eq!(esc_text("&amp;"), "&amp;amp;");
    }

    #[test]
    fn test_multibyte_prefix() {
        assert_eq!(esc_text("été <b>"), "été &lt;b&gt;");
    }

    #[test]
    fn test_xml_and_quote() {
        assert_eq!(esc_xml("'a' & \"b\""), "&#39;a&#39; &amp; &quot;b&quot;");
        assert_eq!(quote_attr("UTF-8"), "\"UTF-8\"");
    }
}
