//! Structural checks for stored documents.
//!
//! Validation reports problems; it never repairs the tree and never blocks
//! rendering (unknown types fall back to a placeholder).

use crate::registry::Registry;
use recruitify_common::{walk_node, walk_tree, BuilderNode, Visitor};
use std::collections::HashSet;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    #[error("Root node has type `{0}`, expected `root`")]
    RootType(String),

    #[error("Nested root node: {0}")]
    NestedRoot(String),

    #[error("Duplicate node id: {0}")]
    DuplicateId(String),

    #[error("Unknown block type `{node_type}` on node {id}")]
    UnknownType { id: String, node_type: String },

    #[error("Block type `{node_type}` cannot have children (node {id})")]
    UnexpectedChildren { id: String, node_type: String },
}

struct Validator<'r> {
    registry: &'r Registry,
    seen: HashSet<String>,
    issues: Vec<ValidationIssue>,
}

impl Visitor for Validator<'_> {
    fn visit_node(&mut self, node: &BuilderNode, parent: Option<&BuilderNode>) {
        if !self.seen.insert(node.id.clone()) {
            self.issues.push(ValidationIssue::DuplicateId(node.id.clone()));
        }

        match (parent, node.is_root()) {
            (None, false) => self
                .issues
                .push(ValidationIssue::RootType(node.node_type.clone())),
            (Some(_), true) => self.issues.push(ValidationIssue::NestedRoot(node.id.clone())),
            (None, true) => {}
            (Some(_), false) => {
                if !self.registry.contains(&node.node_type) {
                    self.issues.push(ValidationIssue::UnknownType {
                        id: node.id.clone(),
                        node_type: node.node_type.clone(),
                    });
                } else if !node.children().is_empty()
                    && !self.registry.allows_children(&node.node_type)
                {
                    self.issues.push(ValidationIssue::UnexpectedChildren {
                        id: node.id.clone(),
                        node_type: node.node_type.clone(),
                    });
                }
            }
        }

        walk_node(self, node);
    }
}

/// Every structural problem in `tree`, in visiting order
pub fn validate_tree(tree: &BuilderNode, registry: &Registry) -> Vec<ValidationIssue> {
    let mut validator = Validator {
        registry,
        seen: HashSet::new(),
        issues: Vec::new(),
    };
    walk_tree(&mut validator, tree);
    validator.issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use recruitify_common::tree::{create_root, insert_child};
    use recruitify_common::{props, Props, ROOT_TYPE};

    #[test]
    fn test_clean_tree_has_no_issues() {
        let registry = Registry::standard();
        let root = create_root();
        let section = registry.create("section").unwrap();
        let section_id = section.id.clone();

        let tree = insert_child(&root, &root.id, section, None);
        let tree = insert_child(&tree, &section_id, registry.create("heading").unwrap(), None);

        assert!(validate_tree(&tree, &registry).is_empty());
    }

    #[test]
    fn test_reports_every_problem() {
        let registry = Registry::standard();
        let tree = BuilderNode::container("section", Props::new())
            .with_id("top")
            .with_children(vec![
                BuilderNode::new("carousel", Props::new()).with_id("c"),
                BuilderNode::new("heading", props! { "text" => "x" })
                    .with_id("c")
                    .with_children(vec![BuilderNode::new("text", Props::new()).with_id("t")]),
                BuilderNode::container(ROOT_TYPE, Props::new()).with_id("r2"),
            ]);

        let issues = validate_tree(&tree, &registry);
        assert_eq!(
            issues,
            vec![
                ValidationIssue::RootType("section".to_string()),
                ValidationIssue::UnknownType {
                    id: "c".to_string(),
                    node_type: "carousel".to_string()
                },
                ValidationIssue::DuplicateId("c".to_string()),
                ValidationIssue::UnexpectedChildren {
                    id: "c".to_string(),
                    node_type: "heading".to_string()
                },
                ValidationIssue::NestedRoot("r2".to_string()),
            ]
        );
    }
}
