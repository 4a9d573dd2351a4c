//! Lowering from the typed AST to generic clause trees.
//!
//! Node shapes:
//!
//! | AST | node |
//! |-----|------|
//! | `a.b` | `DotToken [a, b]` |
//! | `x AS y` | `AsKeyword [x, y]` |
//! | `f(a, b)` | `IdentifierToken(f) [(, a, ',', b, )]` |
//! | `-x` | `MinusToken [x]` |
//! | `l op r` | `op [l, r]` |
//! | `NOT p` | `NotKeyword [p]` |
//! | `~x` | `TildeToken [x]` |

use super::kind::SyntaxKind;
use super::node::{SyntaxNode, SyntaxToken};
use crate::ast::*;

impl Statement {
    /// Top-level clause nodes in source order.
    pub fn syntax_nodes(&self) -> Vec<SyntaxNode> {
        match self {
            Statement::Select(s) => select_clauses(s),
            Statement::Insert(s) => insert_clauses(s),
            Statement::Delete(s) => vec![
                branch(SyntaxKind::DeleteClause, vec![fixed(SyntaxKind::DeleteKeyword)]),
                branch(
                    SyntaxKind::FromClause,
                    vec![fixed(SyntaxKind::FromKeyword), identifier(&s.table)],
                ),
            ],
            Statement::Update(s) => update_clauses(s),
        }
    }
}

impl Expr {
    pub fn syntax_node(&self) -> SyntaxNode {
        match self {
            Expr::Literal(lit) => lit.syntax_node(),
            Expr::Qualified { table, column } => qualified(table, column),
            Expr::Function(call) => call.syntax_node(),
            Expr::Negate(inner) => branch(SyntaxKind::MinusToken, vec![inner.syntax_node()]),
            Expr::Binary { left, op, right } => branch(
                binary_kind(*op),
                vec![left.syntax_node(), right.syntax_node()],
            ),
        }
    }
}

impl Literal {
    pub fn syntax_node(&self) -> SyntaxNode {
        let token = match self {
            Literal::Number(n) => SyntaxToken::number(*n),
            Literal::Boolean(b) => SyntaxToken::boolean(*b),
            Literal::String { value, .. } => SyntaxToken::string(value.as_str()),
            Literal::Identifier(name) => SyntaxToken::identifier(name.as_str()),
        };
        SyntaxNode::leaf(token)
    }
}

impl FunctionCall {
    pub fn syntax_node(&self) -> SyntaxNode {
        let mut children = vec![fixed(SyntaxKind::OpenParenthesisToken)];
        match &self.args {
            FunctionArgs::Star => children.push(fixed(SyntaxKind::AsteriskToken)),
            FunctionArgs::List(args) => {
                children.extend(comma_separated(args.iter().map(Expr::syntax_node)))
            }
        }
        children.push(fixed(SyntaxKind::CloseParenthesisToken));
        SyntaxNode::with_children(SyntaxToken::identifier(self.name.as_str()), children)
    }
}

impl Predicate {
    pub fn syntax_node(&self) -> SyntaxNode {
        match self {
            Predicate::Function(call) => call.syntax_node(),
            Predicate::Operand(expr) => expr.syntax_node(),
            Predicate::Compare { left, op, right } => branch(
                compare_kind(*op),
                vec![left.syntax_node(), right.syntax_node()],
            ),
            Predicate::Logical { left, op, right } => {
                let kind = match op {
                    LogicalOp::And => SyntaxKind::AndKeyword,
                    LogicalOp::Or => SyntaxKind::OrKeyword,
                };
                branch(kind, vec![left.syntax_node(), right.syntax_node()])
            }
            Predicate::Not(inner) => branch(SyntaxKind::NotKeyword, vec![inner.syntax_node()]),
            Predicate::BitwiseNot(expr) => {
                branch(SyntaxKind::TildeToken, vec![expr.syntax_node()])
            }
        }
    }
}

fn select_clauses(s: &SelectStatement) -> Vec<SyntaxNode> {
    let mut select = vec![fixed(SyntaxKind::SelectKeyword)];
    if s.distinct {
        select.push(fixed(SyntaxKind::DistinctKeyword));
    }
    if let Some(n) = s.top {
        select.push(fixed(SyntaxKind::TopKeyword));
        select.push(fixed(SyntaxKind::OpenParenthesisToken));
        select.push(SyntaxNode::leaf(SyntaxToken::number(n)));
        select.push(fixed(SyntaxKind::CloseParenthesisToken));
    }
    match &s.list {
        SelectList::Wildcard => select.push(fixed(SyntaxKind::AsteriskToken)),
        SelectList::Items(items) => select.extend(comma_separated(
            items
                .iter()
                .map(|item| aliased(item.expr.syntax_node(), item.alias.as_ref())),
        )),
    }

    let mut clauses = vec![branch(SyntaxKind::SelectClause, select)];

    if !s.from.is_empty() {
        let mut from = vec![fixed(SyntaxKind::FromKeyword)];
        from.extend(comma_separated(
            s.from
                .iter()
                .map(|t| aliased(identifier(&t.name), t.alias.as_ref())),
        ));
        clauses.push(branch(SyntaxKind::FromClause, from));
    }

    if let Some(predicate) = &s.selection {
        clauses.push(branch(
            SyntaxKind::WhereClause,
            vec![fixed(SyntaxKind::WhereKeyword), predicate.syntax_node()],
        ));
    }

    if let Some(order) = &s.order_by {
        let mut children = vec![fixed(SyntaxKind::OrderByKeyword)];
        children.extend(comma_separated(order.columns.iter().map(column_ref)));
        match order.direction {
            Some(SortDirection::Asc) => children.push(fixed(SyntaxKind::AscKeyword)),
            Some(SortDirection::Desc) => children.push(fixed(SyntaxKind::DescKeyword)),
            None => {}
        }
        clauses.push(branch(SyntaxKind::OrderByClause, children));
    }

    clauses
}

fn insert_clauses(s: &InsertStatement) -> Vec<SyntaxNode> {
    let mut into = vec![
        fixed(SyntaxKind::InsertKeyword),
        fixed(SyntaxKind::IntoKeyword),
        identifier(&s.table),
    ];
    if !s.columns.is_empty() {
        into.push(fixed(SyntaxKind::OpenParenthesisToken));
        into.extend(comma_separated(s.columns.iter().map(|c| identifier(c))));
        into.push(fixed(SyntaxKind::CloseParenthesisToken));
    }

    let mut values = vec![
        fixed(SyntaxKind::ValuesKeyword),
        fixed(SyntaxKind::OpenParenthesisToken),
    ];
    values.extend(comma_separated(s.values.iter().map(Literal::syntax_node)));
    values.push(fixed(SyntaxKind::CloseParenthesisToken));

    vec![
        branch(SyntaxKind::InsertIntoClause, into),
        branch(SyntaxKind::ValuesClause, values),
    ]
}

fn update_clauses(s: &UpdateStatement) -> Vec<SyntaxNode> {
    let mut set = vec![fixed(SyntaxKind::SetKeyword)];
    for (i, assignment) in s.assignments.iter().enumerate() {
        if i > 0 {
            set.push(fixed(SyntaxKind::CommaToken));
        }
        set.push(identifier(&assignment.column));
        set.push(fixed(SyntaxKind::EqualsToken));
        set.push(assignment.value.syntax_node());
    }

    vec![
        branch(
            SyntaxKind::UpdateClause,
            vec![fixed(SyntaxKind::UpdateKeyword), identifier(&s.table)],
        ),
        branch(SyntaxKind::SetClause, set),
    ]
}

fn aliased(node: SyntaxNode, alias: Option<&Alias>) -> SyntaxNode {
    match alias {
        None => node,
        Some(alias) => {
            let alias_node = match alias.quote {
                Some(_) => SyntaxNode::leaf(SyntaxToken::string(alias.name.as_str())),
                None => identifier(&alias.name),
            };
            branch(SyntaxKind::AsKeyword, vec![node, alias_node])
        }
    }
}

fn column_ref(c: &ColumnRef) -> SyntaxNode {
    match &c.table {
        Some(table) => qualified(table, &c.column),
        None => identifier(&c.column),
    }
}

fn qualified(table: &str, column: &str) -> SyntaxNode {
    branch(
        SyntaxKind::DotToken,
        vec![identifier(table), identifier(column)],
    )
}

fn comma_separated(nodes: impl Iterator<Item = SyntaxNode>) -> Vec<SyntaxNode> {
    let mut out = Vec::new();
    for (i, node) in nodes.enumerate() {
        if i > 0 {
            out.push(fixed(SyntaxKind::CommaToken));
        }
        out.push(node);
    }
    out
}

fn binary_kind(op: BinaryOp) -> SyntaxKind {
    match op {
        BinaryOp::Add => SyntaxKind::PlusToken,
        BinaryOp::Sub => SyntaxKind::MinusToken,
        BinaryOp::Mul => SyntaxKind::AsteriskToken,
        BinaryOp::Div => SyntaxKind::SlashToken,
        BinaryOp::Rem => SyntaxKind::PercentToken,
    }
}

fn compare_kind(op: CompareOp) -> SyntaxKind {
    match op {
        CompareOp::Eq => SyntaxKind::EqualsToken,
        CompareOp::NotEq => SyntaxKind::NotEqualsToken,
        CompareOp::Lt => SyntaxKind::LessThanToken,
        CompareOp::Gt => SyntaxKind::GreaterThanToken,
        CompareOp::LtEq => SyntaxKind::LessThanOrEqualsToken,
        CompareOp::GtEq => SyntaxKind::GreaterThanOrEqualsToken,
    }
}

fn fixed(kind: SyntaxKind) -> SyntaxNode {
    SyntaxNode::fixed(kind)
}

fn identifier(name: &str) -> SyntaxNode {
    SyntaxNode::leaf(SyntaxToken::identifier(name))
}

fn branch(kind: SyntaxKind, children: Vec<SyntaxNode>) -> SyntaxNode {
    SyntaxNode::with_children(SyntaxToken::fixed(kind), children)
}
