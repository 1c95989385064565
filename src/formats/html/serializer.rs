//! Tree serializer
//!
//! Walks a [`Node`] tree depth first and writes indented markup. Block-level tags (and any
//! tag listed in [`FormattingRules::always_wrap`]) start and end on their own line, inline
//! tags flow within the current line, and preformatted tags switch indentation off for their
//! whole subtree.

use super::formatting_rules::FormattingRules;
use super::line_state::LineState;
use super::markup::{childless_close, open_tag, wraps};
use crate::ast::{Element, Node};
use crate::error::MarkupError;
use crate::tags::classify;
use log::{debug, warn};

pub struct Html5Serializer {
    rules: FormattingRules,
    state: LineState,
    output: String,
}

impl Html5Serializer {
    pub fn new(rules: FormattingRules) -> Self {
        let state = LineState::new(&rules);
        Html5Serializer {
            rules,
            state,
            output: String::new(),
        }
    }

    pub fn serialize(mut self, root: &Node) -> Result<String, MarkupError> {
        debug!("serializing {} tree", root.kind());
        match root {
            Node::Fragment(fragment) => self.visit_all(fragment.children())?,
            other => self.visit(other)?,
        }
        self.state.finish(&mut self.output)?;
        debug!("serialized {} bytes", self.output.len());
        Ok(self.output)
    }

    fn visit_all(&mut self, nodes: &[Node]) -> Result<(), MarkupError> {
        for node in nodes {
            self.visit(node)?;
        }
        Ok(())
    }

    fn visit(&mut self, node: &Node) -> Result<(), MarkupError> {
        match node {
            Node::Element(element) => self.visit_element(element)?,
            Node::Fragment(fragment) => {
                warn!("nested fragment met while serializing, writing its children in place");
                self.visit_all(fragment.children())?;
            }
            Node::Text(text) => self.state.append_lines(text.content()),
            Node::Comment(comment) => {
                self.state.append("<!-- ");
                self.state.append_lines(comment.content());
                self.state.append(" -->");
            }
            Node::CData(cdata) => {
                self.state.append("<![CDATA[");
                self.state.append_lines(cdata.content());
                self.state.append("]]>");
            }
            Node::ProcessingInstruction(pi) => {
                self.state.append("<?");
                self.state.append(pi.target());
                if !pi.text().is_empty() {
                    self.state.append(" ");
                    self.state.append(pi.text());
                }
                self.state.append(" ?>");
                self.state.lb(&mut self.output)?;
            }
            Node::Declaration(decl) => {
                self.state.append("<!");
                self.state.append(decl.name());
                for part in decl.content() {
                    self.state.append(" ");
                    self.state.append(part);
                }
                self.state.append(">");
                self.state.lb(&mut self.output)?;
            }
            Node::LineBreak => self.state.lb(&mut self.output)?,
        }
        Ok(())
    }

    fn visit_element(&mut self, element: &Element) -> Result<(), MarkupError> {
        let tag = element.tag();
        let info = classify(tag);
        let wrap = wraps(&info, tag, &self.rules);

        if wrap && !self.state.is_preformatted() {
            self.state.lb(&mut self.output)?;
        }
        open_tag(&mut self.state, &mut self.output, tag, element.attributes())?;

        if element.has_children() {
            self.state.append(">");
            self.state.push_tag(tag);
            let saved = self.state.is_preformatted();
            if !saved && info.preformatted {
                self.state.flush(&mut self.output)?;
            }
            self.state.set_preformatted(saved || info.preformatted);
            self.visit_all(element.children())?;
            self.state.pop_tag();
            self.state.set_preformatted(saved);
            self.state.append("</");
            self.state.append(tag);
            self.state.append(">");
        } else {
            let close = childless_close(&info, tag, self.rules.elide_end_tags);
            self.state.append(&close);
        }

        if wrap && !self.state.is_preformatted() {
            self.state.lb(&mut self.output)?;
        }
        Ok(())
    }
}

/// Serialize with the given rules
pub fn serialize(root: &Node, rules: &FormattingRules) -> Result<String, MarkupError> {
    Html5Serializer::new(rules.clone()).serialize(root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Attributes, Comment, Declaration, Fragment};
    use crate::building::html::*;
    use crate::children;

    fn render(node: impl Into<Node>) -> String {
        serialize(&node.into(), &FormattingRules::default()).unwrap()
    }

    fn render_with(node: impl Into<Node>, rules: FormattingRules) -> String {
        serialize(&node.into(), &rules).unwrap()
    }

    #[test]
    fn test_childless_block_element() {
        let d = div(children![]).with_attributes(Attributes::new().id("x"));
        assert_eq!(render(d.clone()), "<div id=\"x\"></div>\n");
        assert_eq!(render_with(d, FormattingRules::xhtml()), "<div id=\"x\"/>\n");
    }

    #[test]
    fn test_void_element_ignores_elision() {
        assert_eq!(render(br()), "<br>\n");
        assert_eq!(render_with(br(), FormattingRules::xhtml()), "<br>\n");
    }

    #[test]
    fn test_nested_blocks_are_indented() {
        let tree = div(children![p(["x"]), span(children![txt(["a", "b"])])]);
        assert_eq!(
            render_with(tree, FormattingRules::default().with_tab("  ")),
            "<div>\n  <p>x</p>\n<span>a\n  b</span></div>\n"
        );
    }

    #[test]
    fn test_preformatted_content_is_verbatim() {
        let tree = div(children![pre(children![txt(["line one", "  line two"])])]);
        assert_eq!(
            render(tree),
            "<div>\n    <pre>line one\n  line two</pre>\n</div>\n"
        );
    }

    #[test]
    fn test_inline_elements_flow() {
        let tree = p(children!["Hello ", b(["world"])]);
        assert_eq!(render(tree), "<p>Hello <b>world</b></p>\n");
    }

    #[test]
    fn test_attribute_values_are_escaped() {
        let tree = a(["x"]).with_attributes(Attributes::new().href("?a=1&b=\"2\"").flag("download"));
        assert_eq!(
            render(tree),
            "<a href=\"?a=1&amp;b=&quot;2&quot;\" download>x</a>\n"
        );
    }

    #[test]
    fn test_attribute_breaks() {
        let tree = input().with_attributes(Attributes::line_broken().type_("text").name("q"));
        assert_eq!(
            render_with(tree, FormattingRules::default().with_tab("  ")),
            "<input type=\"text\"\n name=\"q\">\n"
        );
    }

    #[test]
    fn test_comment_cdata_and_declarations() {
        let tree = Fragment::with_children(children![
            Declaration::doctype(),
            Comment::new("note"),
            cdata(["raw"]),
        ]);
        assert_eq!(
            render(tree),
            "<!DOCTYPE html>\n<!-- note --><![CDATA[raw]]>\n"
        );
    }

    #[test]
    fn test_processing_instruction() {
        assert_eq!(
            render(xml_header()),
            "<?xml version=\"1.0\" encoding=\"UTF-8\" ?>\n"
        );
    }

    #[test]
    fn test_line_break_node() {
        let tree = span(children!["a", lb(), "b"]);
        assert_eq!(render(tree), "<span>a\nb</span>\n");
    }

    #[test]
    fn test_always_wrap() {
        let rules = FormattingRules {
            always_wrap: vec!["span".to_string()],
            tab: "  ".to_string(),
            ..Default::default()
        };
        let tree = div(children![span(["a"]), span(["b"])]);
        assert_eq!(
            render_with(tree, rules),
            "<div>\n  <span>a</span>\n  <span>b</span>\n</div>\n"
        );
    }

    #[test]
    fn test_empty_attribute_name_fails() {
        let tree = div(["x"]).attr("", "y");
        let err = serialize(&tree.into(), &FormattingRules::default()).unwrap_err();
        assert_eq!(err, MarkupError::EmptyAttributeName);
    }

    #[test]
    fn test_serializing_twice_is_identical() {
        let tree: Node = html(children![
            head(children![title("t"), stylesheet("a.css")]),
            body(children![div(children![p(["x"]), "tail"])]),
        ])
        .into();
        let rules = FormattingRules::default();
        assert_eq!(serialize(&tree, &rules).unwrap(), serialize(&tree, &rules).unwrap());
    }
}
