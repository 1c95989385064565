//! Tag classification table
//!
//! Static lookup from a tag name to the four facets the serializer cares about:
//!
//! - block: the tag starts and ends on its own line
//! - empty: the tag is void and never has children
//! - preformatted: content inside is emitted verbatim
//! - requires end tag: a childless instance still needs `</tag>`
//!
//! Keys are lowercase. Tags that are not in the table are unknown and classify as
//! [`TagInfo::UNKNOWN`] (inline, non-void, not preformatted, end tag required).

use once_cell::sync::Lazy;
use std::collections::HashMap;

const BLOCK: u8 = 0x01;
const EMPTY: u8 = 0x02;
const PRE: u8 = 0x04;
const OPTIONAL_END: u8 = 0x08;

/// Formatting facets of a tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagInfo {
    pub block: bool,
    pub empty: bool,
    pub preformatted: bool,
    pub requires_end_tag: bool,
}

impl TagInfo {
    /// Facets assumed for tags missing from the table
    pub const UNKNOWN: TagInfo = TagInfo {
        block: false,
        empty: false,
        preformatted: false,
        requires_end_tag: true,
    };

    const fn from_flags(flags: u8) -> Self {
        TagInfo {
            block: flags & BLOCK != 0,
            empty: flags & EMPTY != 0,
            preformatted: flags & PRE != 0,
            requires_end_tag: flags & (EMPTY | OPTIONAL_END) == 0,
        }
    }
}

impl Default for TagInfo {
    fn default() -> Self {
        TagInfo::UNKNOWN
    }
}

#[rustfmt::skip]
const TAGS: &[(&str, u8)] = &[
    // HTML5 additions
    ("article", BLOCK),
    ("aside", BLOCK),
    ("audio", 0),
    ("bdi", 0),
    ("canvas", 0),
    ("command", EMPTY),
    ("datalist", 0),
    ("details", BLOCK),
    ("embed", EMPTY),
    ("figcaption", BLOCK),
    ("figure", BLOCK),
    ("footer", BLOCK),
    ("header", BLOCK),
    ("hgroup", BLOCK),
    ("keygen", EMPTY),
    ("main", BLOCK),
    ("mark", 0),
    ("meter", 0),
    ("nav", BLOCK),
    ("output", 0),
    ("progress", 0),
    ("rp", 0),
    ("rt", 0),
    ("ruby", 0),
    ("section", BLOCK),
    ("source", EMPTY),
    ("summary", BLOCK),
    ("time", 0),
    ("track", EMPTY),
    ("video", 0),
    ("wbr", EMPTY),
    // HTML4
    ("doctype", EMPTY),
    ("a", 0),
    ("abbr", 0),
    ("acronym", 0),
    ("address", BLOCK),
    ("applet", 0),
    ("area", EMPTY),
    ("b", 0),
    ("base", BLOCK | EMPTY),
    ("basefont", EMPTY),
    ("bdo", 0),
    ("big", 0),
    ("blockquote", BLOCK),
    ("body", BLOCK | OPTIONAL_END),
    ("br", EMPTY),
    ("button", BLOCK),
    ("caption", BLOCK),
    ("center", 0),
    ("cite", 0),
    ("code", 0),
    ("col", EMPTY),
    ("colgroup", BLOCK | OPTIONAL_END),
    ("dd", BLOCK | OPTIONAL_END),
    ("del", 0),
    ("dfn", 0),
    ("dir", BLOCK),
    ("div", BLOCK),
    ("dl", BLOCK),
    ("dt", BLOCK | OPTIONAL_END),
    ("em", 0),
    ("fieldset", BLOCK),
    ("font", 0),
    ("form", BLOCK),
    ("frame", EMPTY),
    ("frameset", 0),
    ("h1", BLOCK),
    ("h2", BLOCK),
    ("h3", BLOCK),
    ("h4", BLOCK),
    ("h5", BLOCK),
    ("h6", BLOCK),
    ("head", BLOCK | OPTIONAL_END),
    ("hr", BLOCK | EMPTY),
    ("html", BLOCK | OPTIONAL_END),
    ("i", 0),
    ("iframe", BLOCK),
    ("img", EMPTY),
    ("input", BLOCK | EMPTY),
    ("ins", 0),
    ("isindex", EMPTY),
    ("kbd", 0),
    ("label", BLOCK),
    ("legend", BLOCK),
    ("li", BLOCK | OPTIONAL_END),
    ("link", BLOCK | EMPTY),
    ("map", 0),
    ("menu", BLOCK),
    ("meta", BLOCK | EMPTY),
    ("noframes", 0),
    ("noscript", BLOCK),
    ("object", BLOCK),
    ("ol", BLOCK),
    ("optgroup", BLOCK),
    ("option", BLOCK | OPTIONAL_END),
    ("p", BLOCK | OPTIONAL_END),
    ("param", EMPTY),
    ("pre", BLOCK | PRE),
    ("q", 0),
    ("s", 0),
    ("samp", 0),
    ("script", BLOCK | PRE),
    ("select", BLOCK),
    ("small", 0),
    ("span", 0),
    ("strike", 0),
    ("strong", 0),
    ("style", BLOCK | PRE),
    ("sub", 0),
    ("sup", 0),
    ("table", BLOCK),
    ("tbody", BLOCK | OPTIONAL_END),
    ("td", BLOCK | OPTIONAL_END),
    ("textarea", BLOCK | PRE),
    ("tfoot", BLOCK | OPTIONAL_END),
    ("th", BLOCK | OPTIONAL_END),
    ("thead", BLOCK | OPTIONAL_END),
    ("title", BLOCK),
    ("tr", BLOCK | OPTIONAL_END),
    ("tt", 0),
    ("u", 0),
    ("ul", BLOCK),
    ("var", 0),
    ("xmp", BLOCK),
    ("plaintext", BLOCK),
    // Vendor extensions
    ("term", 0),
    ("sdfield", 0),
    ("nobr", 0),
    ("spacer", EMPTY),
    ("multicol", BLOCK),
    ("layer", BLOCK),
    ("ilayer", 0),
    ("nolayer", BLOCK),
];

static TABLE: Lazy<HashMap<&'static str, TagInfo>> = Lazy::new(|| {
    TAGS.iter()
        .map(|&(name, flags)| (name, TagInfo::from_flags(flags)))
        .collect()
});

/// Look up a tag, `None` for unknown tags.
///
/// A name that misses the lowercase table is retried lowercased, so `DIV` and `div` agree.
pub fn lookup(tag: &str) -> Option<TagInfo> {
    if let Some(info) = TABLE.get(tag) {
        return Some(*info);
    }
    if tag.bytes().any(|b| b.is_ascii_uppercase()) {
        return TABLE.get(tag.to_ascii_lowercase().as_str()).copied();
    }
    None
}

/// Classify a tag, falling back to [`TagInfo::UNKNOWN`]
pub fn classify(tag: &str) -> TagInfo {
    lookup(tag).unwrap_or(TagInfo::UNKNOWN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("div", true, false, false, true)]
    #[case("p", true, false, false, false)]
    #[case("tr", true, false, false, false)]
    #[case("td", true, false, false, false)]
    #[case("li", true, false, false, false)]
    #[case("h3", true, false, false, true)]
    #[case("br", false, true, false, false)]
    #[case("img", false, true, false, false)]
    #[case("meta", true, true, false, false)]
    #[case("pre", true, false, true, true)]
    #[case("script", true, false, true, true)]
    #[case("textarea", true, false, true, true)]
    #[case("span", false, false, false, true)]
    fn test_classify_known_tags(
        #[case] tag: &str,
        #[case] block: bool,
        #[case] empty: bool,
        #[case] preformatted: bool,
        #[case] requires_end_tag: bool,
    ) {
        let info = classify(tag);
        assert_eq!(info.block, block, "block facet of {}", tag);
        assert_eq!(info.empty, empty, "empty facet of {}", tag);
        assert_eq!(info.preformatted, preformatted, "pre facet of {}", tag);
        assert_eq!(
            info.requires_end_tag, requires_end_tag,
            "end tag facet of {}",
            tag
        );
    }

    #[test]
    fn test_unknown_tag_defaults() {
        assert_eq!(lookup("my-widget"), None);
        assert_eq!(classify("my-widget"), TagInfo::UNKNOWN);
        assert!(classify("my-widget").requires_end_tag);
    }

    #[test]
    fn test_uppercase_lookup() {
        assert_eq!(classify("DIV"), classify("div"));
        assert_eq!(classify("Br"), classify("br"));
    }

    #[test]
    fn test_void_tags_never_require_end_tag() {
        for (name, _) in TAGS {
            let info = classify(name);
            if info.empty {
                assert!(!info.requires_end_tag, "{} is void", name);
            }
        }
    }
}
