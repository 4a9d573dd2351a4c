//! Generic syntax-tree view.
//!
//! Every statement can be lowered into clause nodes whose children are
//! tokens and sub-trees, for callers that walk trees by token kind
//! rather than by AST type.

pub mod kind;
mod lower;
pub mod node;
mod render;

pub use kind::SyntaxKind;
pub use node::{Descendants, SyntaxNode, SyntaxToken, TokenValue};
pub use render::render;
