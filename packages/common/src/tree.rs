//! # Tree Algebra
//!
//! Pure operations over a [`BuilderNode`] tree. Every function leaves its
//! input untouched and returns a fresh tree.
//!
//! ## Missing ids
//!
//! The plain functions (`update_node_props`, `insert_child`, `remove_node`)
//! treat a missing id as a no-op and hand back an unchanged copy, so an
//! interactive surface never fails mid-drag. `move_node` reports a miss as
//! `None`. The `try_*` forms return a [`TreeError`] instead, for callers
//! that need to tell "applied" from "ignored".
//!
//! ## Move
//!
//! A move is remove-then-insert, and the target index is the node's
//! position in the target parent's *resulting* child list. With children
//! `[X, Y, Z]`, moving `X` to index 2 yields `[Y, Z, X]`.
//!
//! Canvas drop zones are numbered in the list as it looked before the drag
//! (zone 2 sits between `Y` and `Z`). [`drop_zone_position`] turns a zone
//! into a position: under the same parent, a zone after the node's original
//! index is decremented, because removing the node shifts later siblings
//! one slot left.
//!
//! The algebra does not reject cycles. Callers check [`is_descendant`]
//! before moving.

use crate::error::TreeError;
use crate::node::{BuilderNode, Props, ROOT_TYPE};
use crate::result::TreeResult;

/// Fresh root-only document
pub fn create_root() -> BuilderNode {
    BuilderNode::container(ROOT_TYPE, Props::new())
}

/// Depth-first search, parent before children
pub fn find_node<'a>(tree: &'a BuilderNode, id: &str) -> Option<&'a BuilderNode> {
    if tree.id == id {
        return Some(tree);
    }
    tree.children().iter().find_map(|child| find_node(child, id))
}

fn find_node_mut<'a>(tree: &'a mut BuilderNode, id: &str) -> Option<&'a mut BuilderNode> {
    if tree.id == id {
        return Some(tree);
    }
    tree.children
        .as_mut()?
        .iter_mut()
        .find_map(|child| find_node_mut(child, id))
}

/// Parent of `id` and the node's index in the parent's children
pub fn find_parent<'a>(tree: &'a BuilderNode, id: &str) -> Option<(&'a BuilderNode, usize)> {
    for (index, child) in tree.children().iter().enumerate() {
        if child.id == id {
            return Some((tree, index));
        }
        if let Some(found) = find_parent(child, id) {
            return Some(found);
        }
    }
    None
}

/// True when `node_id` is `ancestor_id` itself or lies inside its subtree
pub fn is_descendant(tree: &BuilderNode, ancestor_id: &str, node_id: &str) -> bool {
    find_node(tree, ancestor_id)
        .map(|ancestor| find_node(ancestor, node_id).is_some())
        .unwrap_or(false)
}

/// Replace (not merge) the props of `id`
pub fn try_update_node_props(tree: &BuilderNode, id: &str, props: Props) -> TreeResult<BuilderNode> {
    let mut next = tree.clone();
    let node = find_node_mut(&mut next, id).ok_or_else(|| TreeError::NodeNotFound(id.to_string()))?;
    node.props = props;
    Ok(next)
}

pub fn update_node_props(tree: &BuilderNode, id: &str, props: Props) -> BuilderNode {
    try_update_node_props(tree, id, props).unwrap_or_else(|_| tree.clone())
}

/// Insert `child` under `parent_id`; `None` or an out-of-range index appends
pub fn try_insert_child(
    tree: &BuilderNode,
    parent_id: &str,
    child: BuilderNode,
    index: Option<usize>,
) -> TreeResult<BuilderNode> {
    let mut next = tree.clone();
    let parent = find_node_mut(&mut next, parent_id)
        .ok_or_else(|| TreeError::ParentNotFound(parent_id.to_string()))?;

    let children = parent.children.get_or_insert_with(Vec::new);
    let at = index.map_or(children.len(), |i| i.min(children.len()));
    children.insert(at, child);
    Ok(next)
}

pub fn insert_child(
    tree: &BuilderNode,
    parent_id: &str,
    child: BuilderNode,
    index: Option<usize>,
) -> BuilderNode {
    try_insert_child(tree, parent_id, child, index).unwrap_or_else(|_| tree.clone())
}

/// Copy of `node` with every descendant whose id is `id` dropped
fn without(node: &BuilderNode, id: &str) -> BuilderNode {
    BuilderNode {
        id: node.id.clone(),
        node_type: node.node_type.clone(),
        props: node.props.clone(),
        children: node.children.as_ref().map(|children| {
            children
                .iter()
                .filter(|child| child.id != id)
                .map(|child| without(child, id))
                .collect()
        }),
    }
}

/// Remove `id` and its subtree; the top-level node is never removed
pub fn try_remove_node(tree: &BuilderNode, id: &str) -> TreeResult<BuilderNode> {
    if tree.id == id {
        return Err(TreeError::RootImmovable);
    }
    if find_node(tree, id).is_none() {
        return Err(TreeError::NodeNotFound(id.to_string()));
    }
    Ok(without(tree, id))
}

pub fn remove_node(tree: &BuilderNode, id: &str) -> BuilderNode {
    try_remove_node(tree, id).unwrap_or_else(|_| tree.clone())
}

/// Reparent `node_id` under `target_parent_id`
pub fn try_move_node(
    tree: &BuilderNode,
    node_id: &str,
    target_parent_id: &str,
    target_index: Option<usize>,
) -> TreeResult<BuilderNode> {
    if tree.id == node_id {
        return Err(TreeError::RootImmovable);
    }

    let (source_parent, original_index) =
        find_parent(tree, node_id).ok_or_else(|| TreeError::NodeNotFound(node_id.to_string()))?;
    let moved = source_parent.children()[original_index].clone();

    let detached = without(tree, node_id);
    if find_node(&detached, target_parent_id).is_none() {
        return Err(TreeError::ParentNotFound(target_parent_id.to_string()));
    }

    try_insert_child(&detached, target_parent_id, moved, target_index)
}

pub fn move_node(
    tree: &BuilderNode,
    node_id: &str,
    target_parent_id: &str,
    target_index: Option<usize>,
) -> Option<BuilderNode> {
    try_move_node(tree, node_id, target_parent_id, target_index).ok()
}

/// Position for [`move_node`] when `node_id` is dropped on `zone` of
/// `target_parent_id`, zones being numbered in the current child list
pub fn drop_zone_position(tree: &BuilderNode, node_id: &str, target_parent_id: &str, zone: usize) -> usize {
    match find_parent(tree, node_id) {
        Some((parent, original_index)) if parent.id == target_parent_id && original_index < zone => zone - 1,
        _ => zone,
    }
}
