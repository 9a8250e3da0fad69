#![allow(clippy::module_inception)]

pub mod ast;
pub mod errors;
pub mod macros;

pub use ast::{
    ast::{chain, Node, NodeKind, NodeType},
    operators::OpKind,
    printer::{print_tree, render_tree, write_tree},
};
