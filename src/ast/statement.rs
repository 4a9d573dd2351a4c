use rust_decimal::Decimal;
use serde::Serialize;

use super::expr::{Expr, Literal};
use super::predicate::Predicate;

/// The four statement kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StatementKind {
    Select,
    Insert,
    Delete,
    Update,
}

impl std::fmt::Display for StatementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatementKind::Select => write!(f, "SELECT"),
            StatementKind::Insert => write!(f, "INSERT"),
            StatementKind::Delete => write!(f, "DELETE"),
            StatementKind::Update => write!(f, "UPDATE"),
        }
    }
}

/// One parsed statement.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind")]
pub enum Statement {
    Select(SelectStatement),
    Insert(InsertStatement),
    Delete(DeleteStatement),
    Update(UpdateStatement),
}

impl Statement {
    pub fn kind(&self) -> StatementKind {
        match self {
            Statement::Select(_) => StatementKind::Select,
            Statement::Insert(_) => StatementKind::Insert,
            Statement::Delete(_) => StatementKind::Delete,
            Statement::Update(_) => StatementKind::Update,
        }
    }

    /// Primary table name; empty for a table-less SELECT.
    pub fn table_name(&self) -> &str {
        match self {
            Statement::Select(s) => s.table_name(),
            Statement::Insert(s) => &s.table,
            Statement::Delete(s) => &s.table,
            Statement::Update(s) => &s.table,
        }
    }

    pub fn as_select(&self) -> Option<&SelectStatement> {
        match self {
            Statement::Select(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_insert(&self) -> Option<&InsertStatement> {
        match self {
            Statement::Insert(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_delete(&self) -> Option<&DeleteStatement> {
        match self {
            Statement::Delete(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_update(&self) -> Option<&UpdateStatement> {
        match self {
            Statement::Update(s) => Some(s),
            _ => None,
        }
    }
}

/// An alias after `AS`: a bare identifier or a quoted string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alias {
    pub name: String,
    /// Quote character when the alias was written as a string.
    pub quote: Option<char>,
}

impl Alias {
    pub fn ident(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quote: None,
        }
    }

    pub fn quoted(name: impl Into<String>, quote: char) -> Self {
        Self {
            name: name.into(),
            quote: Some(quote),
        }
    }
}

/// `[table '.'] column`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnRef {
    pub table: Option<String>,
    pub column: String,
}

impl ColumnRef {
    pub fn new(column: impl Into<String>) -> Self {
        Self {
            table: None,
            column: column.into(),
        }
    }

    pub fn qualified(table: impl Into<String>, column: impl Into<String>) -> Self {
        Self {
            table: Some(table.into()),
            column: column.into(),
        }
    }
}

/// A FROM-clause entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRef {
    pub name: String,
    pub alias: Option<Alias>,
}

impl TableRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alias: None,
        }
    }

    pub fn aliased(name: impl Into<String>, alias: Alias) -> Self {
        Self {
            name: name.into(),
            alias: Some(alias),
        }
    }
}

/// One projected column or value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectItem {
    pub expr: Expr,
    pub alias: Option<Alias>,
}

impl SelectItem {
    pub fn new(expr: Expr) -> Self {
        Self { expr, alias: None }
    }

    pub fn aliased(expr: Expr, alias: Alias) -> Self {
        Self {
            expr,
            alias: Some(alias),
        }
    }
}

/// What a SELECT projects.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum SelectList {
    /// `*`
    Wildcard,
    Items(Vec<SelectItem>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SortDirection {
    Asc,
    Desc,
}

/// ORDER BY; the direction covers the whole clause.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderBy {
    pub columns: Vec<ColumnRef>,
    pub direction: Option<SortDirection>,
}

/// SELECT, either FROM-bearing or table-less (`SELECT 1 + 3`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectStatement {
    pub distinct: bool,
    pub top: Option<Decimal>,
    pub list: SelectList,
    /// Empty for a table-less SELECT.
    pub from: Vec<TableRef>,
    pub selection: Option<Predicate>,
    pub order_by: Option<OrderBy>,
}

impl SelectStatement {
    /// Base name of the first FROM table, or `""` when there is none.
    pub fn table_name(&self) -> &str {
        self.from.first().map(|t| t.name.as_str()).unwrap_or("")
    }

    pub fn is_table_less(&self) -> bool {
        self.from.is_empty()
    }
}

/// `INSERT INTO table [(cols)] VALUES (vals)`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InsertStatement {
    pub table: String,
    /// Empty when the column list was omitted.
    pub columns: Vec<String>,
    pub values: Vec<Literal>,
}

/// `DELETE FROM table`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteStatement {
    pub table: String,
}

/// `column = value` inside SET.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assignment {
    pub column: String,
    pub value: Literal,
}

/// `UPDATE table SET col = val, ...`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateStatement {
    pub table: String,
    pub assignments: Vec<Assignment>,
}
