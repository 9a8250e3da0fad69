//! Utility macros for building trees.
//!
//! - `MK_CHAIN!` - Links statements into a sibling chain
//! - `MK_BLOCK!` - Creates a Block node around a list of statements
//!
//! These macros keep bottom-up tree construction readable in parsers and tests.

/// Links statements into a sibling chain and returns its head.
///
/// Expands to an `Option<Box<Node>>`, `None` when no statements are given.
///
/// # Example
///
/// ```ignore
/// let program = MK_CHAIN![
///     Node::var_decl("x", None),
///     Node::assign("x", Node::int_literal(1)),
/// ];
/// ```
#[macro_export]
macro_rules! MK_CHAIN {
    ($($statement:expr),* $(,)?) => {
        $crate::ast::ast::chain(::std::vec![$($statement),*])
    };
}

/// Creates a Block node whose body is the given statements, in order.
///
/// # Example
///
/// ```ignore
/// let body = MK_BLOCK![Node::assign("y", Node::int_literal(1))];
/// let empty = MK_BLOCK![];
/// ```
#[macro_export]
macro_rules! MK_BLOCK {
    ($($statement:expr),* $(,)?) => {
        $crate::ast::ast::Node::block($crate::MK_CHAIN![$($statement),*])
    };
}
