//! # Recruitify Common
//!
//! The page-builder document model shared by the registry, the editor and
//! the static renderer:
//!
//! - [`BuilderNode`]: the persisted tree of typed nodes
//! - [`tree`]: pure insert/remove/update/move/find operations
//! - [`VNode`]: the virtual DOM that block renderers produce

pub mod error;
pub mod id_generator;
pub mod node;
pub mod result;
pub mod tree;
pub mod vdom;
pub mod visitor;

pub use serde_json;

pub use error::*;
pub use id_generator::*;
pub use node::*;
pub use result::*;
pub use vdom::*;
pub use visitor::*;
