//! # Inspector Fields
//!
//! A block's inspector is a pure projection of its props into a list of
//! editable fields. Fields never touch the tree: an edit produces a props
//! *patch* (`{key: value}`) that the inspector panel merges into the node.

use recruitify_common::{BuilderNode, Props};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Choice inside a select field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

/// Sub-field of a record inside a list field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemField {
    pub key: String,
    pub label: String,
    pub kind: FieldKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum FieldKind {
    Text,
    TextArea,
    Color,
    Url,
    Toggle,
    Number {
        min: Option<f64>,
        max: Option<f64>,
    },
    Select {
        options: Vec<SelectOption>,
    },
    /// Array of records, e.g. feature lists or nav links
    List {
        item_fields: Vec<ItemField>,
    },
}

/// One editable property, bound to the node's current value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InspectorField {
    pub key: String,
    pub label: String,
    pub kind: FieldKind,
    pub value: Value,
}

impl InspectorField {
    /// Patch that sets this field to `value`
    pub fn patch(&self, value: Value) -> Props {
        let mut patch = Props::new();
        patch.insert(self.key.clone(), value);
        patch
    }

    fn items(&self) -> Vec<Value> {
        self.value.as_array().cloned().unwrap_or_default()
    }

    /// Patch that sets one sub-field of one list record
    ///
    /// Returns `None` for non-list fields or an out-of-range index.
    pub fn patch_list_item(&self, index: usize, item_key: &str, value: Value) -> Option<Props> {
        if !matches!(self.kind, FieldKind::List { .. }) {
            return None;
        }
        let mut items = self.items();
        let record = items.get_mut(index)?;
        match record {
            Value::Object(map) => {
                map.insert(item_key.to_string(), value);
            }
            other => {
                let mut map = Map::new();
                map.insert(item_key.to_string(), value);
                *other = Value::Object(map);
            }
        }
        Some(self.patch(Value::Array(items)))
    }

    /// Patch that appends a blank record built from the item sub-fields
    pub fn patch_list_push(&self) -> Option<Props> {
        let FieldKind::List { item_fields } = &self.kind else {
            return None;
        };
        let blank: Map<String, Value> = item_fields
            .iter()
            .map(|field| (field.key.clone(), blank_value(&field.kind)))
            .collect();
        let mut items = self.items();
        items.push(Value::Object(blank));
        Some(self.patch(Value::Array(items)))
    }

    /// Patch that drops one list record
    pub fn patch_list_remove(&self, index: usize) -> Option<Props> {
        if !matches!(self.kind, FieldKind::List { .. }) {
            return None;
        }
        let mut items = self.items();
        if index >= items.len() {
            return None;
        }
        items.remove(index);
        Some(self.patch(Value::Array(items)))
    }
}

fn blank_value(kind: &FieldKind) -> Value {
    match kind {
        FieldKind::Toggle => Value::Bool(false),
        FieldKind::Number { min, .. } => serde_json::json!(min.unwrap_or(0.0)),
        FieldKind::List { .. } => Value::Array(Vec::new()),
        FieldKind::Select { options } => options
            .first()
            .map(|o| Value::String(o.value.clone()))
            .unwrap_or(Value::Null),
        _ => Value::String(String::new()),
    }
}

/// Fluent construction of a block's field list
///
/// ```rust,ignore
/// Fields::of(node)
///     .text("text", "Text")
///     .select("level", "Level", &[("h1", "H1"), ("h2", "H2")])
///     .build()
/// ```
pub struct Fields<'a> {
    node: &'a BuilderNode,
    fields: Vec<InspectorField>,
}

impl<'a> Fields<'a> {
    pub fn of(node: &'a BuilderNode) -> Self {
        Self {
            node,
            fields: Vec::new(),
        }
    }

    fn push(mut self, key: &str, label: &str, kind: FieldKind) -> Self {
        let value = self.node.props.get(key).cloned().unwrap_or(Value::Null);
        self.fields.push(InspectorField {
            key: key.to_string(),
            label: label.to_string(),
            kind,
            value,
        });
        self
    }

    pub fn text(self, key: &str, label: &str) -> Self {
        self.push(key, label, FieldKind::Text)
    }

    pub fn textarea(self, key: &str, label: &str) -> Self {
        self.push(key, label, FieldKind::TextArea)
    }

    pub fn color(self, key: &str, label: &str) -> Self {
        self.push(key, label, FieldKind::Color)
    }

    pub fn url(self, key: &str, label: &str) -> Self {
        self.push(key, label, FieldKind::Url)
    }

    pub fn toggle(self, key: &str, label: &str) -> Self {
        self.push(key, label, FieldKind::Toggle)
    }

    pub fn number(self, key: &str, label: &str, min: f64, max: f64) -> Self {
        self.push(
            key,
            label,
            FieldKind::Number {
                min: Some(min),
                max: Some(max),
            },
        )
    }

    pub fn select(self, key: &str, label: &str, options: &[(&str, &str)]) -> Self {
        let options = options
            .iter()
            .map(|(value, label)| SelectOption {
                value: value.to_string(),
                label: label.to_string(),
            })
            .collect();
        self.push(key, label, FieldKind::Select { options })
    }

    /// List of records; each `(key, label)` sub-field is a text input,
    /// except keys ending in `href`/`src`/`url` which become URL inputs
    pub fn list(self, key: &str, label: &str, item_fields: &[(&str, &str)]) -> Self {
        let item_fields = item_fields
            .iter()
            .map(|(key, label)| ItemField {
                key: key.to_string(),
                label: label.to_string(),
                kind: item_kind(key),
            })
            .collect();
        self.push(key, label, FieldKind::List { item_fields })
    }

    pub fn build(self) -> Vec<InspectorField> {
        self.fields
    }
}

fn item_kind(key: &str) -> FieldKind {
    let lower = key.to_ascii_lowercase();
    if lower.ends_with("href") || lower.ends_with("src") || lower.ends_with("url") {
        FieldKind::Url
    } else if lower == "description" || lower == "answer" || lower == "quote" {
        FieldKind::TextArea
    } else {
        FieldKind::Text
    }
}
