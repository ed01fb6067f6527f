//! # Recruitify Blocks
//!
//! The node type registry: one [`BlockDefinition`] per block type, grouped
//! into the palette categories agencies see in the builder.
//!
//! ```rust,ignore
//! use recruitify_blocks::Registry;
//!
//! let registry = Registry::standard();
//! let heading = registry.create("heading").unwrap();
//! let vnode = registry.get("heading").unwrap().render(&heading, vec![], Some("root"));
//! ```

pub mod content;
pub mod fields;
pub mod form;
pub mod jobs;
pub mod layout;
pub mod props;
pub mod registry;
pub mod validate;

pub use fields::{FieldKind, Fields, InspectorField, ItemField, SelectOption};
pub use registry::{
    children_or_placeholder, drop_placeholder, render_root, unknown_block, BlockDefinition, Category,
    Registry,
};
pub use validate::{validate_tree, ValidationIssue};
