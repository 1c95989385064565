//! Format registry for format discovery and selection

use crate::ast::Node;
use crate::error::MarkupError;
use crate::format::Format;
use crate::formats::html::{FormattingRules, HtmlFormat};
use std::collections::HashMap;

/// Registry of output formats
///
/// ```ignore
/// let registry = FormatRegistry::with_rules(rules);
/// let html = registry.serialize(&tree, "xhtml")?;
/// ```
pub struct FormatRegistry {
    formats: HashMap<String, Box<dyn Format>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formats: HashMap::new(),
        }
    }

    /// Register a format, replacing any format with the same name
    pub fn register<F: Format + 'static>(&mut self, format: F) {
        self.formats
            .insert(format.name().to_string(), Box::new(format));
    }

    pub fn get(&self, name: &str) -> Result<&dyn Format, MarkupError> {
        self.formats
            .get(name)
            .map(|f| f.as_ref())
            .ok_or_else(|| MarkupError::FormatNotFound(name.to_string()))
    }

    pub fn has(&self, name: &str) -> bool {
        self.formats.contains_key(name)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formats.keys().cloned().collect();
        names.sort();
        names
    }

    /// Serialize a tree using the named format
    pub fn serialize(&self, root: &Node, format: &str) -> Result<String, MarkupError> {
        self.get(format)?.serialize(root)
    }

    /// The built-in HTML formats, derived from `rules`:
    ///
    /// - `html`: the rules as given
    /// - `xhtml`: the rules with end-tag elision on
    /// - `html-compact`: the rules without indentation
    pub fn with_rules(rules: FormattingRules) -> Self {
        let mut registry = Self::new();

        let xhtml = FormattingRules {
            elide_end_tags: true,
            ..rules.clone()
        };
        let compact = FormattingRules {
            indent: String::new(),
            tab: String::new(),
            ..rules.clone()
        };

        registry.register(HtmlFormat::new("html", "HTML5 with indentation", rules));
        registry.register(HtmlFormat::new(
            "xhtml",
            "HTML5 with self-closing empty elements",
            xhtml,
        ));
        registry.register(HtmlFormat::new(
            "html-compact",
            "HTML5 without indentation",
            compact,
        ));
        registry
    }

    /// Create a registry with the built-in formats and default rules
    pub fn with_defaults() -> Self {
        Self::with_rules(FormattingRules::default())
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
