//! Typed markup tree and its serializer.
//!
//! Sections build [`Node`] trees instead of concatenating strings. The tree
//! is turned into HTML in exactly one place, [`Node::write_to`], which
//! escapes every text node and attribute value. Only [`Node::Raw`] bypasses
//! escaping; it is reserved for engine-generated content such as the
//! stylesheet.

use std::fmt::{self, Write};

/// Elements that never have children or a closing tag.
const VOID_ELEMENTS: [&str; 6] = ["meta", "br", "hr", "img", "input", "link"];

/// A node of the markup tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// An element with attributes and children.
    Element(Element),
    /// Text, escaped on output.
    Text(String),
    /// Trusted markup, written verbatim.
    Raw(String),
}

/// An element of the markup tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: &'static str,
    attrs: Vec<(&'static str, String)>,
    children: Vec<Node>,
}

/// Shorthand for [`Element::new`].
#[must_use]
pub fn el(tag: &'static str) -> Element {
    Element::new(tag)
}

/// Shorthand for a text node.
#[must_use]
pub fn text(value: impl Into<String>) -> Node {
    Node::Text(value.into())
}

impl Element {
    /// Creates an empty element.
    #[must_use]
    pub const fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Sets an attribute, replacing an earlier value with the same name.
    #[must_use]
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        let value = value.into();
        match self.attrs.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = value,
            None => self.attrs.push((name, value)),
        }
        self
    }

    /// Adds one or more space-separated classes.
    #[must_use]
    pub fn class(mut self, class: &str) -> Self {
        match self.attrs.iter_mut().find(|(name, _)| *name == "class") {
            Some((_, existing)) => {
                existing.push(' ');
                existing.push_str(class);
            }
            None => self.attrs.push(("class", class.to_string())),
        }
        self
    }

    /// Appends a child node.
    #[must_use]
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Appends a child when present.
    #[must_use]
    pub fn child_opt(self, child: Option<impl Into<Node>>) -> Self {
        match child {
            Some(child) => self.child(child),
            None => self,
        }
    }

    /// Appends several children.
    #[must_use]
    pub fn children<I, N>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    /// Appends a text child.
    #[must_use]
    pub fn text(self, value: impl Into<String>) -> Self {
        self.child(Node::Text(value.into()))
    }

    /// Tag name.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        self.tag
    }

    /// Value of an attribute.
    #[must_use]
    pub fn attr_value(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(existing, _)| *existing == name)
            .map(|(_, value)| value.as_str())
    }

    /// Returns true when the element carries the class.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.attr_value("class")
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
    }

    /// Child nodes.
    #[must_use]
    pub fn child_nodes(&self) -> &[Node] {
        &self.children
    }

    fn is_void(&self) -> bool {
        VOID_ELEMENTS.contains(&self.tag)
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Node {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl Node {
    /// Serializes the tree into any formatter sink.
    pub fn write_to<W: Write>(&self, out: &mut W) -> fmt::Result {
        match self {
            Self::Text(value) => out.write_str(&html_escape::encode_text(value)),
            Self::Raw(value) => out.write_str(value),
            Self::Element(element) => {
                write!(out, "<{}", element.tag)?;
                for (name, value) in &element.attrs {
                    write!(
                        out,
                        " {name}=\"{}\"",
                        html_escape::encode_double_quoted_attribute(value)
                    )?;
                }
                out.write_char('>')?;
                if element.is_void() {
                    return Ok(());
                }
                for child in &element.children {
                    child.write_to(out)?;
                }
                write!(out, "</{}>", element.tag)
            }
        }
    }

    /// Serializes the tree into a new string.
    pub fn render(&self) -> Result<String, fmt::Error> {
        let mut out = String::new();
        self.write_to(&mut out)?;
        Ok(out)
    }

    /// Returns the element, if this node is one.
    #[must_use]
    pub const fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(element) => Some(element),
            _ => None,
        }
    }

    /// All elements in the subtree (this node included) carrying the class,
    /// in document order.
    #[must_use]
    pub fn find_by_class(&self, class: &str) -> Vec<&Element> {
        let mut found = Vec::new();
        self.collect_by_class(class, &mut found);
        found
    }

    fn collect_by_class<'a>(&'a self, class: &str, found: &mut Vec<&'a Element>) {
        if let Self::Element(element) = self {
            if element.has_class(class) {
                found.push(element);
            }
            for child in &element.children {
                child.collect_by_class(class, found);
            }
        }
    }

    /// Concatenated text of the subtree, unescaped.
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Self::Text(value) => out.push_str(value),
            Self::Raw(_) => {}
            Self::Element(element) => {
                for child in &element.children {
                    child.collect_text(out);
                }
            }
        }
    }
}

/// A complete HTML document with an inline stylesheet.
#[derive(Debug, Clone)]
pub struct Document {
    title: String,
    stylesheet: String,
    body: Vec<Node>,
}

impl Document {
    /// Creates an empty document.
    #[must_use]
    pub fn new(title: impl Into<String>, stylesheet: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            stylesheet: stylesheet.into(),
            body: Vec::new(),
        }
    }

    /// Appends a body node.
    #[must_use]
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.body.push(node.into());
        self
    }

    /// Serializes the document.
    pub fn render(self) -> Result<String, fmt::Error> {
        let html = el("html")
            .attr("lang", "en")
            .child(
                el("head")
                    .child(el("meta").attr("charset", "utf-8"))
                    .child(
                        el("meta")
                            .attr("name", "viewport")
                            .attr("content", "width=device-width, initial-scale=1"),
                    )
                    .child(el("title").text(self.title))
                    .child(el("style").child(Node::Raw(self.stylesheet))),
            )
            .child(el("body").children(self.body));

        let mut out = String::from("<!DOCTYPE html>");
        Node::from(html).write_to(&mut out)?;
        Ok(out)
    }
}
