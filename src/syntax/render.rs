//! Source text from clause trees.
//!
//! The inverse of lowering: operator, `.`, `AS`, `NOT` and `~` nodes are
//! written infix or prefix around their children, clause nodes are written
//! as their children in order. Strings are single-quoted, or double-quoted
//! when the payload holds a `'`.

use super::kind::SyntaxKind;
use super::node::{SyntaxNode, TokenValue};

/// Source text of a statement's clause nodes.
pub fn render(clauses: &[SyntaxNode]) -> String {
    join_spaced(clauses.iter().map(SyntaxNode::source))
}

impl SyntaxNode {
    /// Text that parses back to this node.
    pub fn source(&self) -> String {
        if self.is_leaf() {
            return leaf_source(self);
        }

        let children = self.children();
        match (self.kind(), children.len()) {
            (kind, _) if kind.is_clause() => join_spaced(children.iter().map(SyntaxNode::source)),
            (SyntaxKind::IdentifierToken, _) => {
                format!("{}{}", self.text(), join_spaced(children.iter().map(SyntaxNode::source)))
            }
            (SyntaxKind::DotToken, 2) => {
                format!("{}.{}", children[0].source(), children[1].source())
            }
            (SyntaxKind::MinusToken, 1) => {
                let inner = &children[0];
                if arithmetic_precedence(inner).is_some() {
                    format!("-({})", inner.source())
                } else {
                    format!("-{}", inner.source())
                }
            }
            (SyntaxKind::NotKeyword, 1) => format!("NOT {}", children[0].source()),
            (SyntaxKind::TildeToken, 1) => format!("~{}", children[0].source()),
            (_, 2) => infix(self, &children[0], &children[1]),
            _ => join_spaced(children.iter().map(SyntaxNode::source)),
        }
    }
}

fn leaf_source(node: &SyntaxNode) -> String {
    match (node.kind(), &node.token().value) {
        (SyntaxKind::StringToken, TokenValue::Text(s)) if s.contains('\'') => format!("\"{s}\""),
        (SyntaxKind::StringToken, TokenValue::Text(s)) => format!("'{s}'"),
        _ => node.text(),
    }
}

fn infix(node: &SyntaxNode, left: &SyntaxNode, right: &SyntaxNode) -> String {
    let (left_sql, right_sql) = match arithmetic_precedence(node) {
        Some(prec) => {
            // The grammar folds left, so a same-tier right operand is grouped.
            let left_sql = grouped(left, operand_precedence(left) < prec);
            let right_sql = grouped(right, operand_precedence(right) <= prec);
            (left_sql, right_sql)
        }
        None => (left.source(), right.source()),
    };
    format!("{} {} {}", left_sql, node.text(), right_sql)
}

fn grouped(node: &SyntaxNode, parens: bool) -> String {
    if parens {
        format!("({})", node.source())
    } else {
        node.source()
    }
}

/// Tier of a two-operand arithmetic node; `None` for anything else.
fn arithmetic_precedence(node: &SyntaxNode) -> Option<u8> {
    if node.children().len() != 2 {
        return None;
    }
    match node.kind() {
        SyntaxKind::PlusToken | SyntaxKind::MinusToken => Some(1),
        SyntaxKind::AsteriskToken | SyntaxKind::SlashToken | SyntaxKind::PercentToken => Some(2),
        _ => None,
    }
}

fn operand_precedence(node: &SyntaxNode) -> u8 {
    arithmetic_precedence(node).unwrap_or(3)
}

/// Space-separated, except around `(`, `)` and before `,`.
fn join_spaced(parts: impl Iterator<Item = String>) -> String {
    let mut out = String::new();
    for part in parts {
        let tight = out.is_empty() || out.ends_with('(') || part == "," || part == ")";
        if !tight {
            out.push(' ');
        }
        out.push_str(&part);
    }
    out
}
