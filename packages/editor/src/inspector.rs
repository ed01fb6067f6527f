//! Inspector panel: the selected node's editable fields, prop edits and
//! deletion.

use crate::arena::PageArena;
use recruitify_blocks::{InspectorField, Registry};
use recruitify_common::{Props, TreeError, TreeResult};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum InspectorView {
    NothingSelected,
    /// The node's type is not in the registry
    #[serde(rename_all = "camelCase")]
    NoInspector { node_type: String },
    #[serde(rename_all = "camelCase")]
    Fields {
        node_id: String,
        node_type: String,
        label: String,
        fields: Vec<InspectorField>,
    },
}

impl InspectorView {
    pub fn message(&self) -> Option<&'static str> {
        match self {
            InspectorView::NothingSelected => Some("Select a block to edit its properties"),
            InspectorView::NoInspector { .. } => Some("No inspector available"),
            InspectorView::Fields { .. } => None,
        }
    }
}

pub fn view(arena: &PageArena, registry: &Registry, selected: Option<&str>) -> InspectorView {
    let Some(node) = selected.and_then(|id| arena.shallow(id)) else {
        return InspectorView::NothingSelected;
    };

    match registry.get(&node.node_type) {
        Some(definition) => InspectorView::Fields {
            fields: definition.inspect(&node),
            label: definition.label().to_string(),
            node_id: node.id,
            node_type: node.node_type,
        },
        None => InspectorView::NoInspector {
            node_type: node.node_type,
        },
    }
}

/// Merge `partial` over the node's props; keys in `partial` win
pub fn update(arena: &mut PageArena, id: &str, partial: Props) -> TreeResult<()> {
    let mut props = arena
        .props(id)
        .cloned()
        .ok_or_else(|| TreeError::NodeNotFound(id.to_string()))?;
    props.extend(partial);
    arena.update_props(id, props)
}

/// Remove `id` and its subtree, clearing `selected` when it pointed inside it
pub fn delete(arena: &mut PageArena, selected: &mut Option<String>, id: &str) -> TreeResult<()> {
    let clears_selection = selected
        .as_deref()
        .is_some_and(|selected| arena.is_descendant(id, selected));

    arena.remove(id)?;
    if clears_selection {
        *selected = None;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use recruitify_blocks::FieldKind;
    use recruitify_common::tree::create_root;
    use recruitify_common::{props, BuilderNode};
    use serde_json::json;

    fn page() -> PageArena {
        PageArena::from_tree(&create_root().with_id("root").with_children(vec![
            BuilderNode::container("section", Props::new())
                .with_id("s")
                .with_children(vec![
                    BuilderNode::new("heading", props! { "text" => "Hi", "level" => "h2" }).with_id("h"),
                ]),
            BuilderNode::new("carousel", Props::new()).with_id("c"),
        ]))
    }

    #[test]
    fn test_view_states() {
        let arena = page();
        let registry = Registry::standard();

        assert_eq!(view(&arena, &registry, None), InspectorView::NothingSelected);
        assert_eq!(view(&arena, &registry, Some("gone")), InspectorView::NothingSelected);
        assert_eq!(
            view(&arena, &registry, Some("c")),
            InspectorView::NoInspector {
                node_type: "carousel".to_string()
            }
        );

        let InspectorView::Fields { label, fields, .. } = view(&arena, &registry, Some("h")) else {
            panic!("expected fields");
        };
        assert_eq!(label, "Heading");
        let text = fields.iter().find(|f| f.key == "text").unwrap();
        assert_eq!(text.kind, FieldKind::Text);
        assert_eq!(text.value, json!("Hi"));
    }

    #[test]
    fn test_update_merges() {
        let mut arena = page();
        update(&mut arena, "h", props! { "text" => "Hello" }).unwrap();

        assert_eq!(
            arena.props("h").unwrap(),
            &props! { "text" => "Hello", "level" => "h2" }
        );
        assert!(update(&mut arena, "gone", Props::new()).is_err());
    }

    #[test]
    fn test_delete_ancestor_clears_selection() {
        let mut arena = page();
        let mut selected = Some("h".to_string());

        delete(&mut arena, &mut selected, "s").unwrap();
        assert_eq!(selected, None);
        assert!(!arena.contains("h"));
    }

    #[test]
    fn test_delete_elsewhere_keeps_selection() {
        let mut arena = page();
        let mut selected = Some("h".to_string());

        delete(&mut arena, &mut selected, "c").unwrap();
        assert_eq!(selected.as_deref(), Some("h"));

        assert_eq!(
            delete(&mut arena, &mut selected, "root"),
            Err(TreeError::RootImmovable)
        );
    }
}
