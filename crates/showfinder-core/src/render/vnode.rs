//! Virtual DOM nodes
//!
//! A minimal element tree: renderers build it, [`crate::page::Page`]
//! stores it, and [`VNode::to_html`] serializes it for the webview.

use askama_escape::{Html, escape};

/// Elements that never have children or a closing tag
const VOID_ELEMENTS: &[&str] = &["area", "br", "col", "hr", "img", "input", "link", "meta"];

/// A node of the virtual DOM
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VNode {
    /// An element with attributes and children
    Element(Element),
    /// Plain text, escaped on output
    Text {
        /// Text content
        text: String,
    },
    /// Markup inserted verbatim
    Raw {
        /// HTML fragment
        html: String,
    },
}

/// An HTML element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Tag name
    pub tag: String,
    /// Attributes in insertion order
    pub attrs: Vec<(String, String)>,
    /// Child nodes
    pub children: Vec<VNode>,
}

/// Starts an element builder
pub fn el(tag: &str) -> Element {
    Element {
        tag: tag.to_string(),
        attrs: Vec::new(),
        children: Vec::new(),
    }
}

/// Creates an escaped text node
pub fn text(content: impl Into<String>) -> VNode {
    VNode::Text {
        text: content.into(),
    }
}

/// Creates a raw markup node
pub fn raw(html: impl Into<String>) -> VNode {
    VNode::Raw { html: html.into() }
}

impl Element {
    /// Adds an attribute
    #[must_use]
    pub fn attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.attrs.push((name.to_string(), value.into()));
        self
    }

    /// Appends a child node
    #[must_use]
    pub fn child(mut self, node: impl Into<VNode>) -> Self {
        self.children.push(node.into());
        self
    }

    /// Value of the first attribute called `name`
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Whether the `class` attribute lists `class`
    pub fn has_class(&self, class: &str) -> bool {
        self.get_attr("class")
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
    }

    /// Concatenated text of all descendants
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.collect_text(&mut out);
        }
        out
    }

    /// First descendant element (pre-order, excluding self) matching `pred`
    pub fn find<P>(&self, pred: &P) -> Option<&Element>
    where
        P: Fn(&Element) -> bool,
    {
        self.children.iter().find_map(|child| child.find(pred))
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        for (name, value) in &self.attrs {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            escape_into(value, out);
            out.push('"');
        }
        out.push('>');

        if VOID_ELEMENTS.contains(&self.tag.as_str()) {
            return;
        }

        for child in &self.children {
            child.write_html(out);
        }
        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
    }
}

impl From<Element> for VNode {
    fn from(element: Element) -> Self {
        VNode::Element(element)
    }
}

impl VNode {
    /// The element, if this node is one
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            VNode::Element(element) => Some(element),
            _ => None,
        }
    }

    /// This node or its first descendant element matching `pred`
    pub fn find<P>(&self, pred: &P) -> Option<&Element>
    where
        P: Fn(&Element) -> bool,
    {
        let element = self.as_element()?;
        if pred(element) {
            return Some(element);
        }
        element.find(pred)
    }

    /// Serializes the node to HTML
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            VNode::Element(element) => element.write_html(out),
            VNode::Text { text } => escape_into(text, out),
            VNode::Raw { html } => out.push_str(html),
        }
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            VNode::Element(element) => {
                for child in &element.children {
                    child.collect_text(out);
                }
            }
            VNode::Text { text } => out.push_str(text),
            VNode::Raw { html } => out.push_str(html),
        }
    }
}

/// Serializes a node list back to back
pub fn nodes_to_html(nodes: &[VNode]) -> String {
    let mut out = String::new();
    for node in nodes {
        node.write_html(&mut out);
    }
    out
}

fn escape_into(value: &str, out: &mut String) {
    out.push_str(&escape(value, Html).to_string());
}
