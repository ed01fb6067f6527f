//! # Node Type Registry
//!
//! Maps a node `type` string to the [`BlockDefinition`] capability bundle
//! that knows how to create, render and inspect nodes of that type.
//!
//! The registry keeps two views in sync by construction: a keyed lookup
//! used when rendering/inspecting a tree, and an ordered list that drives
//! the palette. [`Registry::register`] is the only way in, and it writes
//! both.

use crate::fields::InspectorField;
use recruitify_common::{BuilderNode, Props, VNode, ROOT_TYPE};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Closed set of palette categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Layout,
    Content,
    Form,
    Jobs,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Layout,
        Category::Content,
        Category::Form,
        Category::Jobs,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Layout => "layout",
            Category::Content => "content",
            Category::Form => "form",
            Category::Jobs => "jobs",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Capability bundle for one node type
///
/// Implementations are independent values, not a hierarchy. `render` and
/// `inspect` must be pure functions of their arguments.
pub trait BlockDefinition: Send + Sync {
    /// Type name stored in `BuilderNode::node_type`
    fn key(&self) -> &str;

    /// Display name in the palette and inspector header
    fn label(&self) -> &str;

    fn category(&self) -> Category;

    fn allows_children(&self) -> bool {
        false
    }

    /// Props a freshly dropped node starts with
    fn default_props(&self) -> Props;

    /// Fresh default node with a new id
    fn create(&self) -> BuilderNode {
        if self.allows_children() {
            BuilderNode::container(self.key(), self.default_props())
        } else {
            BuilderNode::new(self.key(), self.default_props())
        }
    }

    /// Project a node into visual output
    ///
    /// `children` are the node's already-rendered children; `parent_type`
    /// is the type of the immediate parent, for blocks that adapt to their
    /// structural context.
    fn render(&self, node: &BuilderNode, children: Vec<VNode>, parent_type: Option<&str>) -> VNode;

    /// Project a node into its editable fields
    fn inspect(&self, node: &BuilderNode) -> Vec<InspectorField>;
}

/// Type-keyed lookup plus ordered palette
#[derive(Clone, Default)]
pub struct Registry {
    definitions: Vec<Arc<dyn BlockDefinition>>,
    index: HashMap<String, usize>,
}

impl Registry {
    /// Empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in block, in palette order
    pub fn standard() -> Self {
        let mut registry = Self::new();
        crate::layout::register(&mut registry);
        crate::content::register(&mut registry);
        crate::form::register(&mut registry);
        crate::jobs::register(&mut registry);
        debug!(blocks = registry.len(), "Registered standard blocks");
        registry
    }

    /// Add a definition, or replace an existing one in its palette slot
    pub fn register(&mut self, definition: impl BlockDefinition + 'static) -> &mut Self {
        self.register_arc(Arc::new(definition))
    }

    pub fn register_arc(&mut self, definition: Arc<dyn BlockDefinition>) -> &mut Self {
        let key = definition.key().to_string();
        match self.index.get(&key) {
            Some(&slot) => {
                debug!(block = %key, "Replacing block definition");
                self.definitions[slot] = definition;
            }
            None => {
                self.index.insert(key, self.definitions.len());
                self.definitions.push(definition);
            }
        }
        self
    }

    /// Layer `overrides` on top of this registry
    pub fn merged_with(&self, overrides: &Registry) -> Registry {
        let mut merged = self.clone();
        for definition in &overrides.definitions {
            merged.register_arc(Arc::clone(definition));
        }
        merged
    }

    pub fn get(&self, key: &str) -> Option<&dyn BlockDefinition> {
        self.index
            .get(key)
            .map(|&slot| self.definitions[slot].as_ref())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Whether nodes of `node_type` accept children (the root always does)
    pub fn allows_children(&self, node_type: &str) -> bool {
        node_type == ROOT_TYPE || self.get(node_type).is_some_and(|d| d.allows_children())
    }

    /// Create a fresh node of `key`
    pub fn create(&self, key: &str) -> Option<BuilderNode> {
        self.get(key).map(|definition| definition.create())
    }

    /// Ordered palette
    pub fn palette(&self) -> impl Iterator<Item = &dyn BlockDefinition> {
        self.definitions.iter().map(|d| d.as_ref())
    }

    pub fn palette_by_category(&self, category: Category) -> impl Iterator<Item = &dyn BlockDefinition> {
        self.palette().filter(move |d| d.category() == category)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.palette().map(|d| d.key())
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("keys", &self.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Visible stand-in for a node whose type the registry does not know
pub fn unknown_block(node_type: &str) -> VNode {
    VNode::element("div")
        .with_class("rf-unknown-block")
        .with_attr("role", "alert")
        .with_text(format!("Unknown block: {}", node_type))
}

/// Visible drop target for an empty container
pub fn drop_placeholder() -> VNode {
    VNode::element("div")
        .with_class("rf-drop-placeholder")
        .with_text("Drop blocks here")
}

/// Rendered children, or the drop placeholder when there are none
pub fn children_or_placeholder(children: Vec<VNode>) -> Vec<VNode> {
    if children.is_empty() {
        vec![drop_placeholder()]
    } else {
        children
    }
}

/// Wrapper for the root node itself
pub fn render_root(children: Vec<VNode>) -> VNode {
    VNode::element("div")
        .with_class("rf-page")
        .with_children(children_or_placeholder(children))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::Fields;
    use recruitify_common::props;
    use std::collections::HashSet;

    struct Badge(&'static str);

    impl BlockDefinition for Badge {
        fn key(&self) -> &str {
            "badge"
        }

        fn label(&self) -> &str {
            self.0
        }

        fn category(&self) -> Category {
            Category::Content
        }

        fn default_props(&self) -> Props {
            props! { "text" => "New" }
        }

        fn render(&self, node: &BuilderNode, _children: Vec<VNode>, _parent: Option<&str>) -> VNode {
            VNode::element("span").with_text(node.prop_str("text").unwrap_or_default())
        }

        fn inspect(&self, node: &BuilderNode) -> Vec<InspectorField> {
            Fields::of(node).text("text", "Text").build()
        }
    }

    #[test]
    fn test_standard_registry_views_in_sync() {
        let registry = Registry::standard();
        let palette_keys: Vec<&str> = registry.keys().collect();
        let unique: HashSet<&str> = palette_keys.iter().copied().collect();

        assert_eq!(palette_keys.len(), 30);
        assert_eq!(unique.len(), palette_keys.len());
        for key in &palette_keys {
            assert_eq!(registry.get(key).unwrap().key(), *key);
        }
        assert!(!registry.contains(ROOT_TYPE));
    }

    #[test]
    fn test_every_category_is_populated() {
        let registry = Registry::standard();
        for category in Category::ALL {
            assert!(
                registry.palette_by_category(category).count() > 0,
                "{category} is empty"
            );
        }
    }

    #[test]
    fn test_create_matches_children_flag() {
        let registry = Registry::standard();
        for definition in registry.palette() {
            let node = definition.create();
            assert_eq!(node.node_type, definition.key());
            assert_eq!(node.children.is_some(), definition.allows_children(), "{}", definition.key());
        }
    }

    #[test]
    fn test_register_replaces_in_place() {
        let mut registry = Registry::new();
        registry.register(Badge("Badge"));
        crate::layout::register(&mut registry);
        registry.register(Badge("Fancy badge"));

        assert_eq!(registry.keys().next(), Some("badge"));
        assert_eq!(registry.get("badge").unwrap().label(), "Fancy badge");
        assert_eq!(registry.len(), 8);
    }

    #[test]
    fn test_merged_with_overrides() {
        let mut overrides = Registry::new();
        overrides.register(Badge("Badge"));

        let merged = Registry::standard().merged_with(&overrides);
        assert_eq!(merged.len(), 31);
        assert!(merged.contains("badge"));
        assert!(merged.contains("heading"));
    }

    #[test]
    fn test_root_always_allows_children() {
        let registry = Registry::new();
        assert!(registry.allows_children(ROOT_TYPE));
        assert!(!registry.allows_children("heading"));
    }

    #[test]
    fn test_unknown_block_placeholder() {
        let node = unknown_block("carousel");
        assert_eq!(node.text_content(), "Unknown block: carousel");
    }
}
