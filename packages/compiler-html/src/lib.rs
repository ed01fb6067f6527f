//! # Recruitify HTML Compiler
//!
//! Static renderer for published career sites: replays a stored page tree
//! through the block registry and serializes the result to HTML. It never
//! mutates the tree.

mod compiler;

pub use compiler::{
    compile_json_to_html, compile_to_html, escape_html, render_tree, vnode_to_html, CompileError,
    CompileOptions,
};

#[cfg(test)]
mod tests;
