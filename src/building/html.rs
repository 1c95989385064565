//! HTML constructors
//!
//! One function per common tag, plus a handful of composite helpers for the boilerplate every
//! page needs (doctype, stylesheet links, scripts, table layouts).
//!
//! Container constructors take any list of children convertible to [`Child`]; void
//! constructors take nothing and are decorated with
//! [`Element::with_attributes`](crate::ast::Element::with_attributes).

use super::child::Child;
use crate::ast::{
    Attributes, CData, Comment, Declaration, Element, Fragment, Node, ProcessingInstruction, Text,
};
use crate::escape::{esc_text, quote_attr};
use std::fmt::Display;

macro_rules! container_tags {
    ($($name:ident),* $(,)?) => {
        $(
            pub fn $name<I, C>(children: I) -> Element
            where
                I: IntoIterator<Item = C>,
                C: Into<Child>,
            {
                Element::with_children(stringify!($name), children)
            }
        )*
    };
}

macro_rules! void_tags {
    ($($name:ident),* $(,)?) => {
        $(
            pub fn $name() -> Element {
                Element::empty(stringify!($name))
            }
        )*
    };
}

container_tags!(
    html, head, body, div, span, p, h1, h2, h3, h4, h5, h6, ul, ol, li, dl, dt, dd, table,
    caption, thead, tbody, tfoot, tr, th, td, a, b, i, u, em, strong, small, sub, sup, code,
    pre, blockquote, form, fieldset, legend, button, label, select, optgroup, option,
    textarea, script, style, section, article, aside, nav, header, footer, figure,
    figcaption, iframe, noscript,
);

void_tags!(meta, link, base, img, br, hr, col, input, embed, area, param, source, track, wbr);

/// Any container element
pub fn tag<I, C>(name: &str, children: I) -> Element
where
    I: IntoIterator<Item = C>,
    C: Into<Child>,
{
    Element::with_children(name, children)
}

/// Any empty element
pub fn empty(name: &str) -> Element {
    Element::empty(name)
}

pub fn fragment<I, C>(children: I) -> Fragment
where
    I: IntoIterator<Item = C>,
    C: Into<Child>,
{
    Fragment::with_children(children)
}

/// Unescaped text, one entry per line
pub fn txt<I, S>(lines: I) -> Text
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Text::lines(lines)
}

/// Escaped text
pub fn esc(text: &str) -> Text {
    Text::new(esc_text(text))
}

pub fn comment<I, S>(lines: I) -> Comment
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Comment::lines(lines)
}

pub fn cdata<I, S>(lines: I) -> CData
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    CData::lines(lines)
}

pub fn pi(target: &str, text: &str) -> ProcessingInstruction {
    ProcessingInstruction::new(target, text)
}

pub fn declaration<I, S>(name: &str, content: I) -> Declaration
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Declaration::new(name, content)
}

/// Forced line break
pub fn lb() -> Node {
    Node::LineBreak
}

/// `<!DOCTYPE html>`
pub fn doctype() -> Declaration {
    Declaration::doctype()
}

/// `<?xml version="1.0" encoding="UTF-8" ?>`
pub fn xml_header() -> ProcessingInstruction {
    ProcessingInstruction::new(
        "xml",
        format!("version={} encoding={}", quote_attr("1.0"), quote_attr("UTF-8")),
    )
}

/// `<title>` with escaped text
pub fn title(text: &str) -> Element {
    Element::with_children("title", [esc(text)])
}

/// `<meta http-equiv="Content-Type" content="text/html; charset=...">`
pub fn content_type(charset: &str) -> Element {
    meta().with_attributes(
        Attributes::new()
            .add("http-equiv", "Content-Type")
            .content(format!("text/html; charset={}", charset)),
    )
}

pub fn stylesheet(href: &str) -> Element {
    link().with_attributes(
        Attributes::new()
            .rel("stylesheet")
            .type_("text/css")
            .href(href),
    )
}

/// External script reference, always written with its end tag
pub fn javascript(src: &str) -> Element {
    Element::new("script").with_attributes(Attributes::new().type_("text/javascript").src(src))
}

/// Inline script with one source line per entry, each on its own output line
pub fn script_block<I, S>(lines: I) -> Element
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    raw_block("script", "text/javascript", lines)
}

/// Inline stylesheet, laid out like [`script_block`]
pub fn style_block<I, S>(lines: I) -> Element
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    raw_block("style", "text/css", lines)
}

fn raw_block<I, S>(name: &str, mime: &str, lines: I) -> Element
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let body: Vec<Child> = vec![
        Node::LineBreak.into(),
        Text::lines(lines).into(),
        Node::LineBreak.into(),
    ];
    Element::with_children(name, body).with_attributes(Attributes::new().type_(mime))
}

/// `<colgroup>` with one `<col width=..>` per entry
pub fn colgroup<I, W>(widths: I) -> Element
where
    I: IntoIterator<Item = W>,
    W: Display,
{
    let cols = widths
        .into_iter()
        .map(|width| col().with_attributes(Attributes::new().width(width)));
    Element::with_children("colgroup", cols)
}

/// Table stacking each child in its own row
pub fn vbox<I, C>(children: I) -> Element
where
    I: IntoIterator<Item = C>,
    C: Into<Child>,
{
    let rows = children.into_iter().map(|child| {
        let child: Child = child.into();
        tr([td([child])])
    });
    table(rows)
}

/// Table placing each child in its own cell of a single row
pub fn hbox<I, C>(children: I) -> Element
where
    I: IntoIterator<Item = C>,
    C: Into<Child>,
{
    let cells = children.into_iter().map(|child| {
        let child: Child = child.into();
        td([child])
    });
    table([tr(cells)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::children;

    #[test]
    fn test_container_and_void_constructors() {
        let d = div(children![p(["x"]), br()]);
        assert_eq!(d.tag(), "div");
        assert_eq!(d.children().len(), 2);
        assert!(br().is_empty_element());
        assert!(!span(Vec::<Child>::new()).is_empty_element());
    }

    #[test]
    fn test_title_escapes() {
        let t = title("a < b");
        match &t.children()[0] {
            Node::Text(text) => assert_eq!(text.content(), ["a &lt; b".to_string()]),
            other => panic!("expected text, got {}", other.kind()),
        }
    }

    #[test]
    fn test_colgroup_widths() {
        let group = colgroup([10, 20]);
        assert_eq!(group.children().len(), 2);
        let widths: Vec<_> = group
            .children()
            .iter()
            .filter_map(|c| c.as_element())
            .filter_map(|c| c.attributes().get("width"))
            .filter_map(|a| a.value())
            .collect();
        assert_eq!(widths, vec!["10", "20"]);
    }

    #[test]
    fn test_vbox_and_hbox_layout() {
        let v = vbox(children!["a", "b"]);
        assert_eq!(v.children().len(), 2);

        let h = hbox(children!["a", "b"]);
        assert_eq!(h.children().len(), 1);
        assert_eq!(h.children()[0].children().len(), 2);
    }

    #[test]
    fn test_xml_header_text() {
        assert_eq!(
            xml_header().text(),
            r#"version="1.0" encoding="UTF-8""#
        );
    }
}
