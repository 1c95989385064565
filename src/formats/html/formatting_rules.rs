//! Formatting rules shared by the serializer and the streaming writer

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormattingRules {
    /// Prefix written before every indented line
    pub indent: String,
    /// One level of nesting
    pub tab: String,
    /// Write childless non-void elements as `<tag/>` instead of `<tag></tag>`
    pub elide_end_tags: bool,
    /// Extra tags that get their own line, on top of the block-level ones
    pub always_wrap: Vec<String>,
}

impl Default for FormattingRules {
    fn default() -> Self {
        FormattingRules {
            indent: String::new(),
            tab: "    ".to_string(),
            elide_end_tags: false,
            always_wrap: Vec::new(),
        }
    }
}

impl FormattingRules {
    /// Defaults with end-tag elision on
    pub fn xhtml() -> Self {
        FormattingRules {
            elide_end_tags: true,
            ..Default::default()
        }
    }

    /// Defaults without any indentation
    pub fn compact() -> Self {
        FormattingRules {
            tab: String::new(),
            ..Default::default()
        }
    }

    pub fn with_tab(mut self, tab: impl Into<String>) -> Self {
        self.tab = tab.into();
        self
    }

    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    /// Whether `tag` was listed in `always_wrap`
    pub fn always_wraps(&self, tag: &str) -> bool {
        self.always_wrap
            .iter()
            .any(|wrapped| wrapped.eq_ignore_ascii_case(tag))
    }
}
