use crate::node::BuilderNode;

/// Visitor pattern for traversing a builder tree immutably
///
/// The default implementation walks the whole tree depth-first, parent
/// before children. Override `visit_node` to act on each node, calling
/// [`walk_node`] to keep descending.
pub trait Visitor: Sized {
    fn visit_node(&mut self, node: &BuilderNode, _parent: Option<&BuilderNode>) {
        walk_node(self, node);
    }
}

pub fn walk_node<V: Visitor>(visitor: &mut V, node: &BuilderNode) {
    for child in node.children() {
        visitor.visit_node(child, Some(node));
    }
}

/// Visit the root and every descendant
pub fn walk_tree<V: Visitor>(visitor: &mut V, root: &BuilderNode) {
    visitor.visit_node(root, None);
}

struct NodeCounter(usize);

impl Visitor for NodeCounter {
    fn visit_node(&mut self, node: &BuilderNode, _parent: Option<&BuilderNode>) {
        self.0 += 1;
        walk_node(self, node);
    }
}

/// Total number of nodes in the tree, root included
pub fn count_nodes(root: &BuilderNode) -> usize {
    let mut counter = NodeCounter(0);
    walk_tree(&mut counter, root);
    counter.0
}

struct IdCollector(Vec<String>);

impl Visitor for IdCollector {
    fn visit_node(&mut self, node: &BuilderNode, _parent: Option<&BuilderNode>) {
        self.0.push(node.id.clone());
        walk_node(self, node);
    }
}

/// Every id in visiting order
pub fn collect_ids(root: &BuilderNode) -> Vec<String> {
    let mut collector = IdCollector(Vec::new());
    walk_tree(&mut collector, root);
    collector.0
}
