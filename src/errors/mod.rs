//! Error types for the AST crate.
//!
//! Node construction cannot fail short of allocation failure, which aborts.
//! The errors here cover decoding the numeric operator codes handed over
//! by a parser.

pub mod errors;
