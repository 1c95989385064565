//! Leaf node kinds: text, comments, CDATA sections, processing instructions, declarations
//!
//! Text-like nodes hold one or more strings. More than one string means the content spans
//! several lines and the serializer joins them with a line break plus the current indent.

use serde::Serialize;

macro_rules! multiline_node {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Serialize)]
        pub struct $name {
            content: Vec<String>,
        }

        impl $name {
            pub fn new(content: impl Into<String>) -> Self {
                $name {
                    content: vec![content.into()],
                }
            }

            /// One string per output line
            pub fn lines<I, S>(lines: I) -> Self
            where
                I: IntoIterator<Item = S>,
                S: Into<String>,
            {
                $name {
                    content: lines.into_iter().map(Into::into).collect(),
                }
            }

            pub fn content(&self) -> &[String] {
                &self.content
            }

            pub fn is_multiline(&self) -> bool {
                self.content.len() > 1
            }
        }
    };
}

multiline_node!(
    /// Character data, emitted as is
    Text
);
multiline_node!(
    /// `<!-- ... -->`
    Comment
);
multiline_node!(
    /// `<![CDATA[ ... ]]>`
    CData
);

/// `<?target text ?>`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessingInstruction {
    target: String,
    text: String,
}

impl ProcessingInstruction {
    pub fn new(target: impl Into<String>, text: impl Into<String>) -> Self {
        ProcessingInstruction {
            target: target.into(),
            text: text.into(),
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// `<!name content...>`, content strings joined by a space
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Declaration {
    name: String,
    content: Vec<String>,
}

impl Declaration {
    pub fn new<I, S>(name: impl Into<String>, content: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Declaration {
            name: name.into(),
            content: content.into_iter().map(Into::into).collect(),
        }
    }

    /// `<!DOCTYPE html>`
    pub fn doctype() -> Self {
        Declaration::new("DOCTYPE", ["html"])
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn content(&self) -> &[String] {
        &self.content
    }
}
