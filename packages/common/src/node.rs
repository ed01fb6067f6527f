//! # Builder Document Model
//!
//! A page template is a single recursive tree of [`BuilderNode`]s. The JSON
//! shape is the persisted contract shared by the editor and the published
//! site renderer:
//!
//! ```text
//! BuilderNode = {
//!   id: string,
//!   type: string,
//!   props: { [string]: JSON },
//!   children?: BuilderNode[]
//! }
//! ```

use crate::id_generator::new_node_id;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Reserved type of the document root
pub const ROOT_TYPE: &str = "root";

/// Open, component-specific configuration of a node
pub type Props = Map<String, Value>;

/// A single element in the page-builder document tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuilderNode {
    /// Stable identity, unique within one document
    pub id: String,

    /// Registry key; never changes after creation
    #[serde(rename = "type")]
    pub node_type: String,

    #[serde(default)]
    pub props: Props,

    /// Present only for types that allow children
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<BuilderNode>>,
}

impl BuilderNode {
    /// Create a leaf node with a freshly generated id
    pub fn new(node_type: impl Into<String>, props: Props) -> Self {
        Self {
            id: new_node_id(),
            node_type: node_type.into(),
            props,
            children: None,
        }
    }

    /// Create a container node (empty child list) with a freshly generated id
    pub fn container(node_type: impl Into<String>, props: Props) -> Self {
        Self {
            children: Some(Vec::new()),
            ..Self::new(node_type, props)
        }
    }

    /// Builder-style helper used mostly by tests and fixtures
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_children(mut self, children: Vec<BuilderNode>) -> Self {
        self.children = Some(children);
        self
    }

    pub fn is_root(&self) -> bool {
        self.node_type == ROOT_TYPE
    }

    /// Children as a slice (empty for leaves)
    pub fn children(&self) -> &[BuilderNode] {
        self.children.as_deref().unwrap_or(&[])
    }

    pub fn children_mut(&mut self) -> Option<&mut Vec<BuilderNode>> {
        self.children.as_mut()
    }

    /// Look up a string prop
    pub fn prop_str(&self, key: &str) -> Option<&str> {
        self.props.get(key).and_then(Value::as_str)
    }

    /// Parse a document from its JSON representation
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Build a [`Props`] map from `key => value` pairs
///
/// ```rust,ignore
/// let props = props! { "text" => "Your headline", "level" => 2 };
/// ```
#[macro_export]
macro_rules! props {
    () => { $crate::Props::new() };
    ($($key:expr => $value:tt),+ $(,)?) => {{
        let mut map = $crate::Props::new();
        $( map.insert(($key).to_string(), $crate::serde_json::json!($value)); )+
        map
    }};
}
