//! # Canvas
//!
//! Selection and drag/drop state for the interactive editing surface.
//!
//! ## Events
//!
//! ```text
//! Select(id) ──────────► selected_id (root or background clears it)
//! DragStart(id) ───────► dragged_node_id
//! DragOver{parent,idx} ► drag_over_parent_id / drag_over_index (visual only)
//! DragLeave ───────────► hover target cleared
//! Drop{payload,..} ────► insert (palette block) or move (existing node)
//! DragEnd ─────────────► all drag state cleared
//! ```
//!
//! Drop indices are drop zones numbered in the child list as it is when the
//! drag happens: zone `i` sits before child `i`, zone `len` after the last
//! child.

use crate::arena::PageArena;
use recruitify_blocks::{render_root, unknown_block, Registry};
use recruitify_common::{BuilderNode, TreeError, VNode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanvasState {
    pub selected_id: Option<String>,
    pub dragged_node_id: Option<String>,
    pub drag_over_parent_id: Option<String>,
    pub drag_over_index: Option<usize>,
}

/// What is being dragged
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum DragPayload {
    /// Palette entry, by registry key
    NewBlock(String),
    /// Node already on the page, by id
    ExistingNode(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum CanvasEvent {
    Select { id: String },
    ClickBackground,
    DragStart { id: String },
    DragOver { parent_id: String, index: Option<usize> },
    DragLeave,
    Drop {
        payload: DragPayload,
        parent_id: String,
        index: Option<usize>,
    },
    DragEnd,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IgnoreReason {
    #[error("Node not found: {0}")]
    UnknownNode(String),

    #[error("Unknown block type: {0}")]
    UnknownBlock(String),

    #[error("Block type `{0}` does not accept children")]
    NotAContainer(String),

    #[error("The page root cannot be dragged")]
    RootImmovable,

    #[error("Cannot drop a node into itself")]
    CycleDetected,
}

impl From<TreeError> for IgnoreReason {
    fn from(error: TreeError) -> Self {
        match error {
            TreeError::NodeNotFound(id) | TreeError::ParentNotFound(id) => IgnoreReason::UnknownNode(id),
            TreeError::RootImmovable => IgnoreReason::RootImmovable,
            TreeError::CycleDetected => IgnoreReason::CycleDetected,
        }
    }
}

/// Result of handling one event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanvasOutcome {
    /// The page tree was mutated
    Changed,
    /// Only selection or drag state moved
    StateOnly,
    Ignored(IgnoreReason),
}

impl CanvasOutcome {
    pub fn is_changed(&self) -> bool {
        matches!(self, CanvasOutcome::Changed)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Canvas {
    state: CanvasState,
}

impl Canvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &CanvasState {
        &self.state
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.state.selected_id.as_deref()
    }

    pub fn clear_selection(&mut self) {
        self.state.selected_id = None;
    }

    /// Forget everything, as after loading a different tree
    pub fn reset(&mut self) {
        self.state = CanvasState::default();
    }

    fn clear_drag(&mut self) {
        self.state.dragged_node_id = None;
        self.state.drag_over_parent_id = None;
        self.state.drag_over_index = None;
    }

    pub fn handle(&mut self, event: CanvasEvent, arena: &mut PageArena, registry: &Registry) -> CanvasOutcome {
        match event {
            CanvasEvent::Select { id } => self.select(&id, arena),
            CanvasEvent::ClickBackground => {
                self.clear_selection();
                CanvasOutcome::StateOnly
            }
            CanvasEvent::DragStart { id } => self.drag_start(id, arena),
            CanvasEvent::DragOver { parent_id, index } => self.drag_over(parent_id, index, arena, registry),
            CanvasEvent::DragLeave => {
                self.state.drag_over_parent_id = None;
                self.state.drag_over_index = None;
                CanvasOutcome::StateOnly
            }
            CanvasEvent::Drop {
                payload,
                parent_id,
                index,
            } => {
                self.clear_drag();
                self.drop_payload(payload, &parent_id, index, arena, registry)
            }
            CanvasEvent::DragEnd => {
                self.clear_drag();
                CanvasOutcome::StateOnly
            }
        }
    }

    fn select(&mut self, id: &str, arena: &PageArena) -> CanvasOutcome {
        if !arena.contains(id) {
            return CanvasOutcome::Ignored(IgnoreReason::UnknownNode(id.to_string()));
        }
        self.state.selected_id = (id != arena.root_id()).then(|| id.to_string());
        CanvasOutcome::StateOnly
    }

    fn drag_start(&mut self, id: String, arena: &PageArena) -> CanvasOutcome {
        if id == arena.root_id() {
            return CanvasOutcome::Ignored(IgnoreReason::RootImmovable);
        }
        if !arena.contains(&id) {
            return CanvasOutcome::Ignored(IgnoreReason::UnknownNode(id));
        }
        self.state.dragged_node_id = Some(id);
        CanvasOutcome::StateOnly
    }

    fn drag_over(
        &mut self,
        parent_id: String,
        index: Option<usize>,
        arena: &PageArena,
        registry: &Registry,
    ) -> CanvasOutcome {
        if let Err(reason) = accepts_children(arena, registry, &parent_id) {
            return CanvasOutcome::Ignored(reason);
        }
        self.state.drag_over_parent_id = Some(parent_id);
        self.state.drag_over_index = index;
        CanvasOutcome::StateOnly
    }

    fn drop_payload(
        &mut self,
        payload: DragPayload,
        parent_id: &str,
        zone: Option<usize>,
        arena: &mut PageArena,
        registry: &Registry,
    ) -> CanvasOutcome {
        if let Err(reason) = accepts_children(arena, registry, parent_id) {
            return CanvasOutcome::Ignored(reason);
        }

        match payload {
            DragPayload::NewBlock(key) => {
                let Some(node) = registry.create(&key) else {
                    return CanvasOutcome::Ignored(IgnoreReason::UnknownBlock(key));
                };
                let id = node.id.clone();
                if let Err(error) = arena.insert(parent_id, node, zone) {
                    return CanvasOutcome::Ignored(error.into());
                }
                tracing::debug!(block = %key, node_id = %id, parent_id, "inserted block");
                self.state.selected_id = Some(id);
                CanvasOutcome::Changed
            }
            DragPayload::ExistingNode(id) => {
                if arena.is_descendant(&id, parent_id) {
                    return CanvasOutcome::Ignored(IgnoreReason::CycleDetected);
                }
                let position = zone.map(|zone| arena.drop_zone_position(&id, parent_id, zone));
                match arena.move_node(&id, parent_id, position) {
                    Ok(()) => {
                        tracing::debug!(node_id = %id, parent_id, ?position, "moved node");
                        CanvasOutcome::Changed
                    }
                    Err(error) => CanvasOutcome::Ignored(error.into()),
                }
            }
        }
    }

    /// Interactive projection of `tree`: every node is wrapped with its id,
    /// the selection is marked, and containers get drop zones between their
    /// children.
    pub fn render(&self, tree: &BuilderNode, registry: &Registry) -> VNode {
        let children = self.render_children(tree, registry);
        render_root(children)
            .with_class("rf-page rf-canvas")
            .with_attr("data-node-id", tree.id.clone())
    }

    fn render_children(&self, node: &BuilderNode, registry: &Registry) -> Vec<VNode> {
        let children = node.children();
        if children.is_empty() {
            return vec![];
        }

        let mut rendered = Vec::with_capacity(children.len() * 2 + 1);
        for (index, child) in children.iter().enumerate() {
            rendered.push(self.drop_zone(&node.id, index));
            rendered.push(self.render_node(child, Some(&node.node_type), registry));
        }
        rendered.push(self.drop_zone(&node.id, children.len()));
        rendered
    }

    fn render_node(&self, node: &BuilderNode, parent_type: Option<&str>, registry: &Registry) -> VNode {
        let inner = match registry.get(&node.node_type) {
            Some(definition) => definition.render(node, self.render_children(node, registry), parent_type),
            None => unknown_block(&node.node_type),
        };

        let mut class = String::from("rf-canvas-node");
        if self.selected_id() == Some(node.id.as_str()) {
            class.push_str(" is-selected");
        }
        if self.state.drag_over_parent_id.as_deref() == Some(node.id.as_str()) {
            class.push_str(" is-drop-target");
        }
        if self.state.dragged_node_id.as_deref() == Some(node.id.as_str()) {
            class.push_str(" is-dragging");
        }

        VNode::element("div")
            .with_class(class)
            .with_attr("data-node-id", node.id.clone())
            .with_attr("data-node-type", node.node_type.clone())
            .with_attr("draggable", "true")
            .with_child(inner)
    }

    fn drop_zone(&self, parent_id: &str, index: usize) -> VNode {
        let active = self.state.drag_over_parent_id.as_deref() == Some(parent_id)
            && self.state.drag_over_index == Some(index);

        VNode::element("div")
            .with_class(if active { "rf-drop-zone is-active" } else { "rf-drop-zone" })
            .with_attr("data-parent-id", parent_id)
            .with_attr("data-index", index.to_string())
    }
}

fn accepts_children(arena: &PageArena, registry: &Registry, parent_id: &str) -> Result<(), IgnoreReason> {
    let node_type = arena
        .node_type(parent_id)
        .ok_or_else(|| IgnoreReason::UnknownNode(parent_id.to_string()))?;
    if registry.allows_children(node_type) {
        Ok(())
    } else {
        Err(IgnoreReason::NotAContainer(node_type.to_string()))
    }
}
