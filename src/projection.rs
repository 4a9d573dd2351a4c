//! Flat metadata extracted from parsed statements.
//!
//! Name lists follow source order. Where an alias exists it replaces the
//! base name in `column_names` / `table_names`; the `*_aliases` lists hold
//! only the aliases that were written.

use crate::ast::*;
use crate::transpiler::ToSql;
use crate::value::SqlValue;

impl SelectItem {
    /// Name of the projected column ignoring any alias.
    ///
    /// `t.col` gives `col`, `f(..)` gives `f`, a bare name gives itself;
    /// any other expression gives its canonical text.
    pub fn base_name(&self) -> String {
        match &self.expr {
            Expr::Qualified { column, .. } => column.clone(),
            Expr::Function(call) => call.name.clone(),
            Expr::Literal(Literal::Identifier(name)) => name.clone(),
            other => other.to_sql(),
        }
    }

    /// Alias if present, otherwise the base name.
    pub fn output_name(&self) -> String {
        match &self.alias {
            Some(alias) => alias.name.clone(),
            None => self.base_name(),
        }
    }
}

impl TableRef {
    /// Alias if present, otherwise the table name.
    pub fn output_name(&self) -> &str {
        self.alias.as_ref().map_or(self.name.as_str(), |a| a.name.as_str())
    }
}

impl SelectStatement {
    /// `["*"]` for a wildcard projection.
    pub fn column_names(&self) -> Vec<String> {
        match &self.list {
            SelectList::Wildcard => vec!["*".to_string()],
            SelectList::Items(items) => items.iter().map(SelectItem::output_name).collect(),
        }
    }

    pub fn column_aliases(&self) -> Vec<String> {
        match &self.list {
            SelectList::Wildcard => Vec::new(),
            SelectList::Items(items) => items
                .iter()
                .filter_map(|i| i.alias.as_ref().map(|a| a.name.clone()))
                .collect(),
        }
    }

    pub fn table_names(&self) -> Vec<String> {
        self.from.iter().map(|t| t.output_name().to_string()).collect()
    }

    pub fn table_aliases(&self) -> Vec<String> {
        self.from
            .iter()
            .filter_map(|t| t.alias.as_ref().map(|a| a.name.clone()))
            .collect()
    }
}

impl InsertStatement {
    /// Target columns; empty when the insert is positional.
    pub fn column_names(&self) -> Vec<String> {
        self.columns.clone()
    }

    pub fn values(&self) -> Vec<SqlValue> {
        self.values.iter().map(Literal::to_value).collect()
    }
}

impl UpdateStatement {
    pub fn column_names(&self) -> Vec<String> {
        self.assignments.iter().map(|a| a.column.clone()).collect()
    }

    /// Assigned values, parallel to [`column_names`](Self::column_names).
    pub fn values(&self) -> Vec<SqlValue> {
        self.assignments.iter().map(|a| a.value.to_value()).collect()
    }
}

impl Statement {
    /// Column names for any statement kind; empty for DELETE.
    pub fn column_names(&self) -> Vec<String> {
        match self {
            Statement::Select(s) => s.column_names(),
            Statement::Insert(s) => s.column_names(),
            Statement::Update(s) => s.column_names(),
            Statement::Delete(_) => Vec::new(),
        }
    }

    /// Assigned or inserted values; empty for SELECT and DELETE.
    pub fn values(&self) -> Vec<SqlValue> {
        match self {
            Statement::Insert(s) => s.values(),
            Statement::Update(s) => s.values(),
            Statement::Select(_) | Statement::Delete(_) => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;
    use pretty_assertions::assert_eq;

    fn select(sql: &str) -> SelectStatement {
        let stmts = parse(sql).unwrap();
        assert_eq!(stmts.len(), 1, "{sql}");
        stmts[0].as_select().cloned().unwrap()
    }

    #[test]
    fn test_wildcard() {
        let s = select("SELECT * FROM People");
        assert_eq!(s.column_names(), vec!["*"]);
        assert_eq!(s.table_names(), vec!["People"]);
        assert!(s.column_aliases().is_empty());
    }

    #[test]
    fn test_aliases_replace_names() {
        let s = select("SELECT People.FirstName AS Name, LastName FROM People AS Persons");
        assert_eq!(s.column_names(), vec!["Name", "LastName"]);
        assert_eq!(s.column_aliases(), vec!["Name"]);
        assert_eq!(s.table_names(), vec!["Persons"]);
        assert_eq!(s.table_aliases(), vec!["Persons"]);
        assert_eq!(s.table_name(), "People");
    }

    #[test]
    fn test_base_names() {
        let s = select("SELECT p.Id, COUNT(*) AS 'n', Concat(a, b) FROM People AS p");
        let SelectList::Items(items) = &s.list else {
            panic!("expected items");
        };
        let bases: Vec<_> = items.iter().map(SelectItem::base_name).collect();
        assert_eq!(bases, vec!["Id", "COUNT", "Concat"]);
        assert_eq!(s.column_names(), vec!["Id", "n", "Concat"]);
    }

    #[test]
    fn test_expression_base_name_is_canonical_text() {
        let s = select("SELECT 1+3");
        assert_eq!(s.column_names(), vec!["1 + 3"]);
        assert!(s.table_names().is_empty());
    }

    #[test]
    fn test_insert_values() {
        let stmts = parse("INSERT INTO People (FirstName, Nick) VALUES ('Jon', Snow)").unwrap();
        assert_eq!(stmts[0].column_names(), vec!["FirstName", "Nick"]);
        assert_eq!(
            stmts[0].values(),
            vec![SqlValue::from("Jon"), SqlValue::from("Snow")]
        );
    }

    #[test]
    fn test_update_values_keep_types() {
        let stmts = parse("UPDATE People SET Age=32, Active=true").unwrap();
        assert_eq!(stmts[0].column_names(), vec!["Age", "Active"]);
        assert_eq!(
            stmts[0].values(),
            vec![SqlValue::from(32), SqlValue::from(true)]
        );
    }
}
