//! Typed syntax tree for parsed statements.
//!
//! Every grammar rule produces one of these types. The generic
//! [`SyntaxNode`](crate::syntax::SyntaxNode) view is derived from them
//! on demand.

pub mod expr;
pub mod predicate;
pub mod statement;

pub use expr::*;
pub use predicate::*;
pub use statement::*;
