/// AST (Abstract Syntax Tree) module
/// Contains the node representation and the routines that build and print it
///
/// Submodules:
/// - ast: Node definitions, constructors and sibling chains
/// - operators: The operator enumeration shared by unary and binary nodes
/// - printer: Indented debug view of a tree
pub mod ast;
pub mod operators;
pub mod printer;
