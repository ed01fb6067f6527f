//! # Page Arena
//!
//! Editing representation of a page: nodes live in a flat table keyed by
//! id, and parent/child links are id references. A move is an index rewire
//! instead of a tree rebuild.
//!
//! The arena honours the same contract as [`recruitify_common::tree`]:
//! converting with [`PageArena::from_tree`], applying an operation and
//! converting back with [`PageArena::to_tree`] gives the tree the pure
//! algebra would have produced. Unlike the algebra, a move into the node's
//! own subtree is rejected with [`TreeError::CycleDetected`] up front.

use recruitify_common::{BuilderNode, Props, TreeError, TreeResult};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
struct Slot {
    node_type: String,
    props: Props,
    parent: Option<String>,
    /// `None` for leaf types, mirroring `BuilderNode::children`
    children: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageArena {
    root_id: String,
    slots: HashMap<String, Slot>,
}

impl PageArena {
    pub fn from_tree(tree: &BuilderNode) -> Self {
        let mut arena = Self {
            root_id: tree.id.clone(),
            slots: HashMap::new(),
        };
        arena.adopt(tree, None);
        arena
    }

    /// Table every node of `node`'s subtree under `parent`. An id already
    /// in the table keeps its first slot; the repeat and its subtree are
    /// left out. Returns whether `node` was tabled.
    fn adopt(&mut self, node: &BuilderNode, parent: Option<&str>) -> bool {
        if self.slots.contains_key(&node.id) {
            tracing::warn!(node_id = %node.id, parent = ?parent, "duplicate node id, skipping subtree");
            return false;
        }

        self.slots.insert(
            node.id.clone(),
            Slot {
                node_type: node.node_type.clone(),
                props: node.props.clone(),
                parent: parent.map(str::to_string),
                children: node.children.as_ref().map(|_| Vec::new()),
            },
        );

        let kept: Vec<String> = node
            .children()
            .iter()
            .filter(|child| self.adopt(child, Some(node.id.as_str())))
            .map(|child| child.id.clone())
            .collect();
        if let Some(children) = self.slots.get_mut(&node.id).and_then(|slot| slot.children.as_mut()) {
            *children = kept;
        }
        true
    }

    pub fn to_tree(&self) -> BuilderNode {
        self.subtree(&self.root_id)
            .unwrap_or_else(|| recruitify_common::tree::create_root().with_id(self.root_id.clone()))
    }

    /// Materialize `id` and its descendants
    pub fn subtree(&self, id: &str) -> Option<BuilderNode> {
        let slot = self.slots.get(id)?;
        Some(BuilderNode {
            id: id.to_string(),
            node_type: slot.node_type.clone(),
            props: slot.props.clone(),
            children: slot.children.as_ref().map(|children| {
                children
                    .iter()
                    .filter_map(|child| self.subtree(child))
                    .collect()
            }),
        })
    }

    /// `id` alone, with its child list left empty
    pub fn shallow(&self, id: &str) -> Option<BuilderNode> {
        let slot = self.slots.get(id)?;
        Some(BuilderNode {
            id: id.to_string(),
            node_type: slot.node_type.clone(),
            props: slot.props.clone(),
            children: slot.children.as_ref().map(|_| Vec::new()),
        })
    }

    pub fn root_id(&self) -> &str {
        &self.root_id
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.slots.contains_key(id)
    }

    pub fn node_type(&self, id: &str) -> Option<&str> {
        self.slots.get(id).map(|slot| slot.node_type.as_str())
    }

    pub fn props(&self, id: &str) -> Option<&Props> {
        self.slots.get(id).map(|slot| &slot.props)
    }

    pub fn parent_of(&self, id: &str) -> Option<&str> {
        self.slots.get(id)?.parent.as_deref()
    }

    pub fn children_of(&self, id: &str) -> &[String] {
        self.slots
            .get(id)
            .and_then(|slot| slot.children.as_deref())
            .unwrap_or(&[])
    }

    pub fn index_in_parent(&self, id: &str) -> Option<usize> {
        let parent = self.parent_of(id)?;
        self.children_of(parent).iter().position(|child| child == id)
    }

    /// True when `node_id` is `ancestor_id` itself or lies inside its subtree
    pub fn is_descendant(&self, ancestor_id: &str, node_id: &str) -> bool {
        if !self.contains(ancestor_id) {
            return false;
        }
        let mut current = Some(node_id);
        while let Some(id) = current {
            if id == ancestor_id {
                return true;
            }
            current = self.parent_of(id);
        }
        false
    }

    /// Replace (not merge) the props of `id`
    pub fn update_props(&mut self, id: &str, props: Props) -> TreeResult<()> {
        let slot = self
            .slots
            .get_mut(id)
            .ok_or_else(|| TreeError::NodeNotFound(id.to_string()))?;
        slot.props = props;
        Ok(())
    }

    /// Insert `child` and its subtree under `parent_id`; `None` or an
    /// out-of-range index appends
    pub fn insert(&mut self, parent_id: &str, child: BuilderNode, index: Option<usize>) -> TreeResult<()> {
        if !self.contains(parent_id) {
            return Err(TreeError::ParentNotFound(parent_id.to_string()));
        }
        let child_id = child.id.clone();
        if self.adopt(&child, Some(parent_id)) {
            self.attach(parent_id, child_id, index);
        }
        Ok(())
    }

    fn attach(&mut self, parent_id: &str, child_id: String, index: Option<usize>) {
        if let Some(parent) = self.slots.get_mut(parent_id) {
            let children = parent.children.get_or_insert_with(Vec::new);
            let at = index.map_or(children.len(), |i| i.min(children.len()));
            children.insert(at, child_id.clone());
        }
        if let Some(child) = self.slots.get_mut(&child_id) {
            child.parent = Some(parent_id.to_string());
        }
    }

    fn detach(&mut self, id: &str) {
        let parent = self.slots.get(id).and_then(|slot| slot.parent.clone());
        if let Some(children) = parent
            .and_then(|parent| self.slots.get_mut(&parent))
            .and_then(|slot| slot.children.as_mut())
        {
            children.retain(|child| child != id);
        }
    }

    /// Remove `id` and its subtree, handing the subtree back
    pub fn remove(&mut self, id: &str) -> TreeResult<BuilderNode> {
        if id == self.root_id {
            return Err(TreeError::RootImmovable);
        }
        let removed = self
            .subtree(id)
            .ok_or_else(|| TreeError::NodeNotFound(id.to_string()))?;

        self.detach(id);
        let mut stack = vec![id.to_string()];
        while let Some(next) = stack.pop() {
            if let Some(slot) = self.slots.remove(&next) {
                stack.extend(slot.children.into_iter().flatten());
            }
        }
        Ok(removed)
    }

    /// Reparent `node_id` under `target_parent_id` at `position` in the
    /// resulting child list
    pub fn move_node(&mut self, node_id: &str, target_parent_id: &str, position: Option<usize>) -> TreeResult<()> {
        if node_id == self.root_id {
            return Err(TreeError::RootImmovable);
        }
        if !self.contains(node_id) {
            return Err(TreeError::NodeNotFound(node_id.to_string()));
        }
        if !self.contains(target_parent_id) {
            return Err(TreeError::ParentNotFound(target_parent_id.to_string()));
        }
        if self.is_descendant(node_id, target_parent_id) {
            return Err(TreeError::CycleDetected);
        }

        self.detach(node_id);
        self.attach(target_parent_id, node_id.to_string(), position);
        Ok(())
    }

    /// Position for [`PageArena::move_node`] when `node_id` is dropped on
    /// `zone`, zones being numbered in the current child list
    pub fn drop_zone_position(&self, node_id: &str, target_parent_id: &str, zone: usize) -> usize {
        match (self.parent_of(node_id), self.index_in_parent(node_id)) {
            (Some(parent), Some(original)) if parent == target_parent_id && original < zone => zone - 1,
            _ => zone,
        }
    }
}

impl From<&BuilderNode> for PageArena {
    fn from(tree: &BuilderNode) -> Self {
        Self::from_tree(tree)
    }
}
