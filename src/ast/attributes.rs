//! Ordered attribute lists
//!
//! An [`Attributes`] value is an append-only sequence of [`AttrItem`]s. Besides ordinary
//! name/value pairs a list can hold explicit [`AttrItem::Break`] markers, which the
//! serializer turns into a line break inside the opening tag. Consecutive breaks collapse:
//! asking for a break while the list is already at a break is a no-op.

use log::debug;
use serde::Serialize;
use std::fmt::Display;

/// A single attribute. A `None` value renders as a bare boolean attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attribute {
    name: String,
    value: Option<String>,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: impl Display) -> Self {
        Attribute {
            name: name.into(),
            value: Some(value.to_string()),
        }
    }

    /// A valueless attribute such as `disabled`
    pub fn flag(name: impl Into<String>) -> Self {
        Attribute {
            name: name.into(),
            value: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AttrItem {
    Attr(Attribute),
    /// Forced line break between attributes
    Break,
}

/// Ordered attribute list with optional line-break mode
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Attributes {
    items: Vec<AttrItem>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    line_break: bool,
}

macro_rules! named_setters {
    ($($(#[$meta:meta])* $method:ident => $attr:literal),* $(,)?) => {
        $(
            $(#[$meta])*
            pub fn $method(self, value: impl Display) -> Self {
                self.add($attr, value)
            }
        )*
    };
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty list in line-break mode: every attribute after the first starts a new line
    pub fn line_broken() -> Self {
        Attributes {
            items: Vec::new(),
            line_break: true,
        }
    }

    /// Build from name/value pairs
    pub fn pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Display,
    {
        pairs
            .into_iter()
            .fold(Self::new(), |attrs, (name, value)| attrs.add(name, value))
    }

    /// Build from name/value pairs with a break between each pair
    pub fn broken<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Display,
    {
        pairs
            .into_iter()
            .fold(Self::line_broken(), |attrs, (name, value)| {
                attrs.add(name, value)
            })
    }

    pub fn is_line_broken(&self) -> bool {
        self.line_break
    }

    pub fn set_line_break(&mut self, enabled: bool) {
        self.line_break = enabled;
    }

    /// Append one attribute
    pub fn push(&mut self, attribute: Attribute) {
        if self.line_break && self.attrs().next().is_some() {
            self.push_break();
        }
        self.items.push(AttrItem::Attr(attribute));
    }

    /// Append an explicit break unless the list is already at a break
    pub fn push_break(&mut self) {
        if self.at_break() {
            debug!("collapsing consecutive attribute line break");
            return;
        }
        self.items.push(AttrItem::Break);
    }

    /// Append `name="value"`
    pub fn add(mut self, name: impl Into<String>, value: impl Display) -> Self {
        self.push(Attribute::new(name, value));
        self
    }

    /// Append a valueless attribute
    pub fn flag(mut self, name: impl Into<String>) -> Self {
        self.push(Attribute::flag(name));
        self
    }

    /// Append a line break marker
    pub fn lb(mut self) -> Self {
        self.push_break();
        self
    }

    named_setters! {
        id => "id",
        /// The `class` attribute
        css => "class",
        type_ => "type",
        name => "name",
        value => "value",
        content => "content",
        label => "label",
        width => "width",
        href => "href",
        rel => "rel",
        src => "src",
        style => "style",
        colspan => "colspan",
        xmlns => "xmlns",
        onload => "onload",
        onunload => "onunload",
        onclick => "onclick",
        ondblclick => "ondblclick",
        onmousedown => "onmousedown",
        onmouseup => "onmouseup",
        onmouseover => "onmouseover",
        onmousemove => "onmousemove",
        onmouseout => "onmouseout",
        onfocus => "onfocus",
        onblur => "onblur",
        onkeypress => "onkeypress",
        onkeydown => "onkeydown",
        onkeyup => "onkeyup",
        onsubmit => "onsubmit",
        onreset => "onreset",
        onselect => "onselect",
    }

    /// `class` from several names joined by spaces
    pub fn classes<I, S>(self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined = names
            .into_iter()
            .map(|name| name.as_ref().to_string())
            .collect::<Vec<_>>()
            .join(" ");
        self.add("class", joined)
    }

    pub fn checked(self) -> Self {
        self.add("checked", "true")
    }

    pub fn selected(self) -> Self {
        self.add("selected", "true")
    }

    /// `xmlns:prefix="uri"`
    pub fn xmlns_prefixed(self, prefix: &str, uri: impl Display) -> Self {
        self.add(format!("xmlns:{}", prefix), uri)
    }

    /// Event handler attribute: `on("click", ..)` appends `onclick`
    pub fn on(self, event: &str, script: impl Display) -> Self {
        self.add(format!("on{}", event), script)
    }

    pub fn items(&self) -> &[AttrItem] {
        &self.items
    }

    /// Attributes only, breaks skipped
    pub fn attrs(&self) -> impl Iterator<Item = &Attribute> {
        self.items.iter().filter_map(|item| match item {
            AttrItem::Attr(attr) => Some(attr),
            AttrItem::Break => None,
        })
    }

    /// First attribute with this name
    pub fn get(&self, name: &str) -> Option<&Attribute> {
        self.attrs().find(|attr| attr.name() == name)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn at_break(&self) -> bool {
        matches!(self.items.last(), None | Some(AttrItem::Break))
    }
}

impl FromIterator<Attribute> for Attributes {
    fn from_iter<T: IntoIterator<Item = Attribute>>(iter: T) -> Self {
        let mut attrs = Attributes::new();
        for attr in iter {
            attrs.push(attr);
        }
        attrs
    }
}
