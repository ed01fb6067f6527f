use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Virtual DOM node produced by block renderers
///
/// Both the interactive canvas and the static renderer emit this shape;
/// only the static renderer turns it into HTML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum VNode {
    /// HTML element
    Element {
        tag: String,
        attributes: BTreeMap<String, String>,
        styles: BTreeMap<String, String>,
        children: Vec<VNode>,
    },

    /// Text node
    Text { content: String },

    /// Comment node
    Comment { content: String },

    /// Sequence of siblings without a wrapper element
    Fragment { children: Vec<VNode> },
}

impl VNode {
    pub fn element(tag: impl Into<String>) -> Self {
        VNode::Element {
            tag: tag.into(),
            attributes: BTreeMap::new(),
            styles: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        VNode::Text {
            content: content.into(),
        }
    }

    pub fn comment(content: impl Into<String>) -> Self {
        VNode::Comment {
            content: content.into(),
        }
    }

    pub fn fragment(children: Vec<VNode>) -> Self {
        VNode::Fragment { children }
    }

    /// Set an attribute (no-op on non-elements)
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        if let VNode::Element { attributes, .. } = &mut self {
            attributes.insert(name.into(), value.into());
        }
        self
    }

    /// Set an attribute only when a value is present
    pub fn with_attr_opt(self, name: &str, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(value) => self.with_attr(name, value),
            None => self,
        }
    }

    pub fn with_class(self, class: impl Into<String>) -> Self {
        self.with_attr("class", class)
    }

    /// Set an inline style property (no-op on non-elements)
    pub fn with_style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        if let VNode::Element { styles, .. } = &mut self {
            styles.insert(property.into(), value.into());
        }
        self
    }

    /// Set a style only when the value is present and non-empty
    pub fn with_style_opt(self, property: &str, value: Option<&str>) -> Self {
        match value {
            Some(value) if !value.is_empty() => self.with_style(property, value),
            _ => self,
        }
    }

    pub fn with_child(mut self, child: VNode) -> Self {
        if let VNode::Element { children, .. } = &mut self {
            children.push(child);
        }
        self
    }

    pub fn with_children(mut self, extra: impl IntoIterator<Item = VNode>) -> Self {
        if let VNode::Element { children, .. } = &mut self {
            children.extend(extra);
        }
        self
    }

    pub fn with_text(self, content: impl Into<String>) -> Self {
        self.with_child(VNode::text(content))
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            VNode::Element { tag, .. } => Some(tag),
            _ => None,
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        match self {
            VNode::Element { attributes, .. } => attributes.get(name).map(String::as_str),
            _ => None,
        }
    }

    pub fn style(&self, property: &str) -> Option<&str> {
        match self {
            VNode::Element { styles, .. } => styles.get(property).map(String::as_str),
            _ => None,
        }
    }

    pub fn children(&self) -> &[VNode] {
        match self {
            VNode::Element { children, .. } | VNode::Fragment { children } => children,
            _ => &[],
        }
    }

    /// Concatenated text content of this node and its descendants
    pub fn text_content(&self) -> String {
        match self {
            VNode::Text { content } => content.clone(),
            VNode::Comment { .. } => String::new(),
            VNode::Element { children, .. } | VNode::Fragment { children } => {
                children.iter().map(VNode::text_content).collect()
            }
        }
    }

    /// First descendant (or self) matching the predicate, depth-first
    pub fn find(&self, predicate: &dyn Fn(&VNode) -> bool) -> Option<&VNode> {
        if predicate(self) {
            return Some(self);
        }
        self.children().iter().find_map(|child| child.find(predicate))
    }

    /// Every descendant (or self) matching the predicate, depth-first
    pub fn find_all<'a>(&'a self, predicate: &dyn Fn(&VNode) -> bool) -> Vec<&'a VNode> {
        let mut found = Vec::new();
        self.collect_into(predicate, &mut found);
        found
    }

    fn collect_into<'a>(&'a self, predicate: &dyn Fn(&VNode) -> bool, found: &mut Vec<&'a VNode>) {
        if predicate(self) {
            found.push(self);
        }
        for child in self.children() {
            child.collect_into(predicate, found);
        }
    }
}
