//! The streaming writer and the tree serializer must agree
//!
//! Every test builds the same structure twice, once as a tree and once as a sequence of
//! writer calls, and compares the text.

use proptest::prelude::*;
use tagtree::building::html::*;
use tagtree::{
    children, serialize, Attributes, Comment, Element, FormattingRules, HtmlWriter, MarkupError,
    Node, Text,
};

/// Replay a tree as writer calls
fn drive(w: &mut HtmlWriter, node: &Node) -> Result<(), MarkupError> {
    match node {
        Node::Element(element) if element.has_children() => {
            w.start_with(element.tag(), element.attributes())?;
            for child in element.children() {
                drive(w, child)?;
            }
            w.end_expect(element.tag())?;
        }
        Node::Element(element) => {
            w.empty_with(element.tag(), element.attributes())?;
        }
        Node::Fragment(fragment) => {
            for child in fragment.children() {
                drive(w, child)?;
            }
        }
        Node::Text(text) => {
            w.txt(text.content())?;
        }
        Node::Comment(comment) => {
            w.comment(comment.content())?;
        }
        Node::CData(cdata) => {
            w.cdata(cdata.content())?;
        }
        Node::Declaration(decl) if decl.name() == "DOCTYPE" => {
            w.doctype()?;
        }
        Node::LineBreak => {
            w.lb()?;
        }
        other => panic!("no writer call for {}", other.kind()),
    }
    Ok(())
}

fn stream(node: &Node, rules: &FormattingRules) -> String {
    let mut w = HtmlWriter::new(rules);
    drive(&mut w, node).unwrap();
    w.lb().unwrap();
    w.close().unwrap()
}

#[test]
fn test_page_written_by_hand_matches_tree() -> Result<(), MarkupError> {
    let rules = FormattingRules::default();

    let tree: Node = fragment(children![
        doctype(),
        html(children![
            head(children![
                content_type("utf-8"),
                title("Tom & Jerry"),
                stylesheet("site.css"),
                javascript("app.js"),
            ]),
            body(children![
                div(children![
                    p(children!["Hello ", b(["world"])]),
                    pre(children![txt(["a", "  b"])]),
                ])
                .with_attributes(Attributes::new().id("main")),
                script_block(["init();"]),
            ]),
        ]),
    ])
    .into();

    let mut w = HtmlWriter::new(&rules);
    w.doctype()?
        .start("html")?
        .start("head")?
        .content_type("utf-8")?
        .title("Tom & Jerry")?
        .stylesheet("site.css")?
        .javascript("app.js")?
        .end_expect("head")?
        .start("body")?
        .start_with("div", &Attributes::new().id("main"))?
        .start("p")?
        .txt(&["Hello "])?
        .element("b", &["world"])?
        .end()?
        .element("pre", &["a", "  b"])?
        .end_expect("div")?
        .script(&["init();"])?
        .end_expect_all(&["body", "html"])?;
    let streamed = w.close()?;

    assert_eq!(serialize(&tree, &rules)?, streamed);
    Ok(())
}

#[test]
fn test_attribute_breaks_match() {
    let rules = FormattingRules::default().with_tab("  ");
    let tree: Node = form(children![input().with_attributes(
        Attributes::line_broken()
            .type_("checkbox")
            .name("agree")
            .flag("checked")
    )])
    .into();
    assert_eq!(stream(&tree, &rules), serialize(&tree, &rules).unwrap());
}

#[test]
fn test_comments_and_line_breaks_match() {
    let rules = FormattingRules::default();
    let tree: Node = ul(children![
        Comment::lines(["first", "second"]),
        li(children!["x", lb(), "y"]),
        cdata(["raw"]),
    ])
    .into();
    assert_eq!(stream(&tree, &rules), serialize(&tree, &rules).unwrap());
}

const TAGS: &[&str] = &[
    "div", "p", "span", "a", "pre", "script", "table", "tr", "td", "li", "x-card",
];
const VOIDS: &[&str] = &["br", "img", "hr", "meta", "link"];

fn tree_strategy() -> impl Strategy<Value = Node> {
    let leaf = prop_oneof![
        "[a-z ]{0,8}".prop_map(|s| Node::Text(Text::new(s))),
        prop::collection::vec("[a-z]{0,4}", 2..4).prop_map(|l| Node::Text(Text::lines(l))),
        "[a-z]{0,6}".prop_map(|s| Node::Comment(Comment::new(s))),
        prop::sample::select(VOIDS).prop_map(|tag| Node::Element(Element::empty(tag))),
        Just(Node::LineBreak),
    ];
    leaf.prop_recursive(4, 40, 4, |inner| {
        (
            prop::sample::select(TAGS),
            prop::option::of("[a-z]{1,5}"),
            prop::collection::vec(inner, 0..4),
        )
            .prop_map(|(tag, id, children)| {
                let element = Element::with_children(tag, children);
                let element = match id {
                    Some(id) => element.with_attributes(Attributes::new().id(id)),
                    None => element,
                };
                Node::Element(element)
            })
    })
}

#[cfg(test)]
mod proptest_tests {
    use super::*;

    proptest! {
        #[test]
        fn test_writer_matches_serializer(
            tree in tree_strategy(),
            tab in prop_oneof![Just(""), Just("  "), Just("    ")],
        ) {
            let rules = FormattingRules::default().with_tab(tab);
            prop_assert_eq!(stream(&tree, &rules), serialize(&tree, &rules).unwrap());
        }
    }
}
