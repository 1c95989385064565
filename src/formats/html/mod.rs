//! HTML output
//!
//! Two front ends over one line-buffering core:
//!
//! - [`serializer`]: walks a finished node tree
//! - [`writer`]: streams markup call by call, no tree needed
//!
//! Both apply the same [`FormattingRules`] and produce identical text for the same structure.

pub mod formatting_rules;
pub mod line_state;
mod markup;
pub mod serializer;
pub mod writer;

pub use formatting_rules::FormattingRules;
pub use line_state::LineState;
pub use serializer::{serialize, Html5Serializer};
pub use writer::{HtmlWriter, WriterDialect};

use crate::ast::Node;
use crate::error::MarkupError;
use crate::format::Format;

/// HTML format with a fixed set of rules
pub struct HtmlFormat {
    name: String,
    description: String,
    rules: FormattingRules,
}

impl HtmlFormat {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        rules: FormattingRules,
    ) -> Self {
        HtmlFormat {
            name: name.into(),
            description: description.into(),
            rules,
        }
    }

    pub fn rules(&self) -> &FormattingRules {
        &self.rules
    }
}

impl Default for HtmlFormat {
    fn default() -> Self {
        HtmlFormat::new("html", "HTML5 with indentation", FormattingRules::default())
    }
}

impl Format for HtmlFormat {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn serialize(&self, root: &Node) -> Result<String, MarkupError> {
        Html5Serializer::new(self.rules.clone()).serialize(root)
    }
}
