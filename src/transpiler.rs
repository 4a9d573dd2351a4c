//! SQL text reconstruction.
//!
//! Renders AST nodes back into canonical command text: upper-case
//! keywords, `, ` separators, single spaces around operators, and
//! parentheses only where operator precedence requires them.

use crate::ast::*;

/// Trait for converting AST nodes to SQL.
pub trait ToSql {
    /// Convert this node to a SQL string.
    fn to_sql(&self) -> String;
}

impl ToSql for Statement {
    fn to_sql(&self) -> String {
        match self {
            Statement::Select(s) => s.to_sql(),
            Statement::Insert(s) => s.to_sql(),
            Statement::Delete(s) => s.to_sql(),
            Statement::Update(s) => s.to_sql(),
        }
    }
}

impl ToSql for SelectStatement {
    fn to_sql(&self) -> String {
        let mut sql = String::from("SELECT ");

        if self.distinct {
            sql.push_str("DISTINCT ");
        }
        if let Some(n) = self.top {
            sql.push_str(&format!("TOP({}) ", n));
        }

        match &self.list {
            SelectList::Wildcard => sql.push('*'),
            SelectList::Items(items) => sql.push_str(&join(items)),
        }

        if !self.from.is_empty() {
            sql.push_str(" FROM ");
            sql.push_str(&join(&self.from));
        }

        if let Some(predicate) = &self.selection {
            sql.push_str(" WHERE ");
            sql.push_str(&predicate.to_sql());
        }

        if let Some(order) = &self.order_by {
            sql.push(' ');
            sql.push_str(&order.to_sql());
        }

        sql
    }
}

impl ToSql for InsertStatement {
    fn to_sql(&self) -> String {
        let mut sql = format!("INSERT INTO {}", self.table);
        if !self.columns.is_empty() {
            sql.push_str(&format!(" ({})", self.columns.join(", ")));
        }
        sql.push_str(&format!(" VALUES ({})", join(&self.values)));
        sql
    }
}

impl ToSql for DeleteStatement {
    fn to_sql(&self) -> String {
        format!("DELETE FROM {}", self.table)
    }
}

impl ToSql for UpdateStatement {
    fn to_sql(&self) -> String {
        format!("UPDATE {} SET {}", self.table, join(&self.assignments))
    }
}

impl ToSql for Assignment {
    fn to_sql(&self) -> String {
        format!("{} = {}", self.column, self.value.to_sql())
    }
}

impl ToSql for SelectItem {
    fn to_sql(&self) -> String {
        with_alias(self.expr.to_sql(), self.alias.as_ref())
    }
}

impl ToSql for TableRef {
    fn to_sql(&self) -> String {
        with_alias(self.name.clone(), self.alias.as_ref())
    }
}

impl ToSql for Alias {
    fn to_sql(&self) -> String {
        match self.quote {
            Some(q) => format!("{q}{}{q}", self.name),
            None => self.name.clone(),
        }
    }
}

impl ToSql for ColumnRef {
    fn to_sql(&self) -> String {
        match &self.table {
            Some(table) => format!("{}.{}", table, self.column),
            None => self.column.clone(),
        }
    }
}

impl ToSql for OrderBy {
    fn to_sql(&self) -> String {
        let mut sql = format!("ORDER BY {}", join(&self.columns));
        match self.direction {
            Some(SortDirection::Asc) => sql.push_str(" ASC"),
            Some(SortDirection::Desc) => sql.push_str(" DESC"),
            None => {}
        }
        sql
    }
}

impl ToSql for Literal {
    fn to_sql(&self) -> String {
        match self {
            Literal::Number(n) => n.to_string(),
            Literal::Boolean(true) => "TRUE".to_string(),
            Literal::Boolean(false) => "FALSE".to_string(),
            Literal::String { value, quote } => format!("{quote}{value}{quote}"),
            Literal::Identifier(name) => name.clone(),
        }
    }
}

impl ToSql for FunctionCall {
    fn to_sql(&self) -> String {
        match &self.args {
            FunctionArgs::Star => format!("{}(*)", self.name),
            FunctionArgs::List(args) => format!("{}({})", self.name, join(args)),
        }
    }
}

impl ToSql for Expr {
    fn to_sql(&self) -> String {
        match self {
            Expr::Literal(lit) => lit.to_sql(),
            Expr::Qualified { table, column } => format!("{}.{}", table, column),
            Expr::Function(call) => call.to_sql(),
            Expr::Negate(inner) => match inner.as_ref() {
                Expr::Binary { .. } => format!("-({})", inner.to_sql()),
                _ => format!("-{}", inner.to_sql()),
            },
            Expr::Binary { left, op, right } => {
                let prec = op.precedence();
                let left_sql = if left.precedence() < prec {
                    format!("({})", left.to_sql())
                } else {
                    left.to_sql()
                };
                // Same-tier right operands need grouping: the grammar folds left.
                let right_sql = if right.precedence() <= prec {
                    format!("({})", right.to_sql())
                } else {
                    right.to_sql()
                };
                format!("{} {} {}", left_sql, op.symbol(), right_sql)
            }
        }
    }
}

impl ToSql for Predicate {
    fn to_sql(&self) -> String {
        match self {
            Predicate::Function(call) => call.to_sql(),
            Predicate::Operand(expr) => expr.to_sql(),
            Predicate::Compare { left, op, right } => {
                format!("{} {} {}", left.to_sql(), op.symbol(), right.to_sql())
            }
            Predicate::Logical { left, op, right } => {
                format!("{} {} {}", left.to_sql(), op.keyword(), right.to_sql())
            }
            Predicate::Not(inner) => format!("NOT {}", inner.to_sql()),
            Predicate::BitwiseNot(expr) => format!("~{}", expr.to_sql()),
        }
    }
}

fn with_alias(base: String, alias: Option<&Alias>) -> String {
    match alias {
        Some(alias) => format!("{} AS {}", base, alias.to_sql()),
        None => base,
    }
}

fn join<T: ToSql>(items: &[T]) -> String {
    items
        .iter()
        .map(ToSql::to_sql)
        .collect::<Vec<_>>()
        .join(", ")
}

impl std::fmt::Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_sql())
    }
}

impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_sql())
    }
}
