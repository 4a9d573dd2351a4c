use rust_decimal::Decimal;
use serde::Serialize;

use super::kind::SyntaxKind;

/// Payload carried by a token; the kind decides which variant is set.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TokenValue {
    None,
    Number(Decimal),
    Text(String),
    Boolean(bool),
    Symbol(&'static str),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SyntaxToken {
    pub kind: SyntaxKind,
    pub value: TokenValue,
}

impl SyntaxToken {
    /// Keyword, punctuation or clause token; the payload is its fixed text.
    pub fn fixed(kind: SyntaxKind) -> Self {
        let value = match kind.text() {
            Some(text) => TokenValue::Symbol(text),
            None => TokenValue::None,
        };
        Self { kind, value }
    }

    pub fn number(n: Decimal) -> Self {
        Self {
            kind: SyntaxKind::NumberToken,
            value: TokenValue::Number(n),
        }
    }

    pub fn string(s: impl Into<String>) -> Self {
        Self {
            kind: SyntaxKind::StringToken,
            value: TokenValue::Text(s.into()),
        }
    }

    pub fn boolean(b: bool) -> Self {
        Self {
            kind: SyntaxKind::BooleanToken,
            value: TokenValue::Boolean(b),
        }
    }

    pub fn identifier(name: impl Into<String>) -> Self {
        Self {
            kind: SyntaxKind::IdentifierToken,
            value: TokenValue::Text(name.into()),
        }
    }

    /// Token payload as text; strings come back without their quotes.
    pub fn text(&self) -> String {
        match &self.value {
            TokenValue::None => String::new(),
            TokenValue::Number(n) => n.to_string(),
            TokenValue::Text(s) => s.clone(),
            TokenValue::Boolean(true) => "TRUE".to_string(),
            TokenValue::Boolean(false) => "FALSE".to_string(),
            TokenValue::Symbol(s) => s.to_string(),
        }
    }
}

/// A node of the generic clause tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SyntaxNode {
    pub token: SyntaxToken,
    pub children: Vec<SyntaxNode>,
}

impl SyntaxNode {
    pub fn leaf(token: SyntaxToken) -> Self {
        Self {
            token,
            children: Vec::new(),
        }
    }

    pub fn with_children(token: SyntaxToken, children: Vec<SyntaxNode>) -> Self {
        Self { token, children }
    }

    /// Leaf of a fixed-text kind (`,`, `(`, keywords).
    pub fn fixed(kind: SyntaxKind) -> Self {
        Self::leaf(SyntaxToken::fixed(kind))
    }

    pub fn kind(&self) -> SyntaxKind {
        self.token.kind
    }

    pub fn token(&self) -> &SyntaxToken {
        &self.token
    }

    pub fn children(&self) -> &[SyntaxNode] {
        &self.children
    }

    pub fn text(&self) -> String {
        self.token.text()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// This node and all descendants, pre-order.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }

    /// Childless nodes, depth first, left to right.
    ///
    /// Operator, `.` and `AS` tokens sit on interior nodes, so joined leaf
    /// text is not source; use [`SyntaxNode::source`] for that.
    pub fn leaves(&self) -> impl Iterator<Item = &SyntaxNode> {
        self.descendants().filter(|n| n.is_leaf())
    }

    fn fmt_indented(&self, f: &mut std::fmt::Formatter<'_>, depth: usize) -> std::fmt::Result {
        let text = self.text();
        if text.is_empty() {
            writeln!(f, "{:indent$}{}", "", self.kind(), indent = depth * 2)?;
        } else {
            writeln!(f, "{:indent$}{} {:?}", "", self.kind(), text, indent = depth * 2)?;
        }
        for child in &self.children {
            child.fmt_indented(f, depth + 1)?;
        }
        Ok(())
    }
}

impl std::fmt::Display for SyntaxNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.fmt_indented(f, 0)
    }
}

/// Pre-order walk over a [`SyntaxNode`].
pub struct Descendants<'a> {
    stack: Vec<&'a SyntaxNode>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a SyntaxNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}
