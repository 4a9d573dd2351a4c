use pretty_assertions::assert_eq;
use sqltree::prelude::*;

fn one(sql: &str) -> Statement {
    let stmts = parse(sql).unwrap();
    assert_eq!(stmts.len(), 1, "expected one statement from {sql:?}");
    stmts.into_iter().next().unwrap()
}

#[test]
fn test_expression_evaluation() {
    assert_eq!(sqltree::evaluate("5+2*3").unwrap(), SqlValue::from(11));
    assert_eq!(sqltree::evaluate("-5*2").unwrap(), SqlValue::from(-10));
}

#[test]
fn test_select_star() {
    let stmt = one("SELECT * FROM People");
    assert_eq!(stmt.kind(), StatementKind::Select);
    let select = stmt.as_select().unwrap();
    assert_eq!(select.table_names(), vec!["People"]);
    assert_eq!(select.column_names(), vec!["*"]);
}

#[test]
fn test_select_columns() {
    let stmt = one("SELECT FirstName, LastName FROM People");
    assert_eq!(
        stmt.as_select().unwrap().column_names(),
        vec!["FirstName", "LastName"]
    );
}

#[test]
fn test_select_qualified_alias() {
    let stmt = one("SELECT People.FirstName AS Name FROM People");
    let select = stmt.as_select().unwrap();
    assert_eq!(select.column_names(), vec!["Name"]);
    assert_eq!(select.column_aliases(), vec!["Name"]);
}

#[test]
fn test_select_table_alias() {
    let stmt = one("SELECT * FROM People AS Persons");
    let select = stmt.as_select().unwrap();
    assert_eq!(select.table_names(), vec!["Persons"]);
    assert_eq!(select.table_aliases(), vec!["Persons"]);
    assert_eq!(stmt.table_name(), "People");
}

#[test]
fn test_insert() {
    let stmt = one("INSERT INTO People (FirstName) VALUES ('Jon')");
    assert_eq!(stmt.kind(), StatementKind::Insert);
    assert_eq!(stmt.table_name(), "People");
    assert_eq!(stmt.column_names(), vec!["FirstName"]);
    assert_eq!(stmt.values(), vec![SqlValue::from("Jon")]);
}

#[test]
fn test_delete() {
    let stmt = one("DELETE FROM Customers");
    assert_eq!(stmt.kind(), StatementKind::Delete);
    assert_eq!(stmt.table_name(), "Customers");
}

#[test]
fn test_update_value_is_numeric() {
    let stmt = one("UPDATE People SET Age=32");
    assert_eq!(stmt.kind(), StatementKind::Update);
    assert_eq!(stmt.column_names(), vec!["Age"]);
    assert_eq!(stmt.values(), vec![SqlValue::from(32)]);
    assert_ne!(stmt.values(), vec![SqlValue::from("32")]);
}

#[test]
fn test_statements_in_source_order() {
    let stmts = parse("SELECT * FROM People;SELECT * FROM Customers").unwrap();
    let tables: Vec<_> = stmts.iter().map(Statement::table_name).collect();
    assert_eq!(tables, vec!["People", "Customers"]);
}

#[test]
fn test_malformed_statements_yield_nothing() {
    for sql in [
        "SELECT FROM People",
        "DELETE * FROM Customers",
        "UPDATE People SET FirstName=",
        "INSERT INTO People VALUES",
        "DROP TABLE People",
        "INSERT INTO VALUES ('Jon','Doe')",
    ] {
        assert!(parse(sql).unwrap().is_empty(), "{sql}");
    }
}

#[test]
fn test_keywords_outside_operand_positions_are_names() {
    let select = one("SELECT Order FROM Orders");
    assert_eq!(select.as_select().unwrap().column_names(), vec!["Order"]);

    let update = one("UPDATE t SET Desc = 1");
    assert_eq!(update.column_names(), vec!["Desc"]);

    let select = one("SELECT Top FROM t");
    assert_eq!(select.as_select().unwrap().top, None);
    assert_eq!(select.as_select().unwrap().column_names(), vec!["Top"]);

    assert_eq!(one("SELECT * FROM Values").table_name(), "Values");
}

#[test]
fn test_malformed_segment_does_not_hide_neighbours() {
    let stmts = parse("DELETE FROM A; SELECT FROM People; UPDATE B SET x = 1").unwrap();
    let kinds: Vec<_> = stmts.iter().map(Statement::kind).collect();
    assert_eq!(kinds, vec![StatementKind::Delete, StatementKind::Update]);
}

#[test]
fn test_keywords_are_case_insensitive() {
    let stmt = one("select distinct top(2) Name from People where Age > 1 order by Name asc");
    let select = stmt.as_select().unwrap();
    assert!(select.distinct);
    assert_eq!(select.top, Some(rust_decimal::Decimal::from(2)));
    assert!(select.selection.is_some());
    assert_eq!(
        select.order_by.as_ref().and_then(|o| o.direction),
        Some(SortDirection::Asc)
    );
}

#[test]
fn test_table_less_select() {
    let stmt = one("SELECT 1 + 3 AS Four, 'x'");
    let select = stmt.as_select().unwrap();
    assert!(select.is_table_less());
    assert_eq!(stmt.table_name(), "");
    assert_eq!(select.column_names(), vec!["Four", "'x'"]);
    assert_eq!(
        select.evaluate_items().unwrap(),
        vec![SqlValue::from(4), SqlValue::from("x")]
    );
}

#[test]
fn test_clause_nodes() {
    let clause_kinds = |sql: &str| -> Vec<SyntaxKind> {
        one(sql).syntax_nodes().iter().map(SyntaxNode::kind).collect()
    };

    assert_eq!(
        clause_kinds("SELECT * FROM People WHERE a = 1 ORDER BY a"),
        vec![
            SyntaxKind::SelectClause,
            SyntaxKind::FromClause,
            SyntaxKind::WhereClause,
            SyntaxKind::OrderByClause,
        ]
    );
    assert_eq!(
        clause_kinds("INSERT INTO t VALUES (1)"),
        vec![SyntaxKind::InsertIntoClause, SyntaxKind::ValuesClause]
    );
    assert_eq!(
        clause_kinds("UPDATE t SET a = 1"),
        vec![SyntaxKind::UpdateClause, SyntaxKind::SetClause]
    );
    assert_eq!(
        clause_kinds("DELETE FROM t"),
        vec![SyntaxKind::DeleteClause, SyntaxKind::FromClause]
    );
}

#[test]
fn test_qualified_column_node_shape() {
    let clauses = one("SELECT People.FirstName FROM People").syntax_nodes();
    let column = &clauses[0].children()[1];
    assert_eq!(column.kind(), SyntaxKind::DotToken);
    let parts: Vec<_> = column.children().iter().map(SyntaxNode::text).collect();
    assert_eq!(parts, vec!["People", "FirstName"]);
}

#[test]
fn test_strict_statement_errors_carry_position() {
    let err = sqltree::parse_statement("UPDATE People SET Age = 1 WHERE Id = 2").unwrap_err();
    match err {
        SqlError::Parse { position, .. } => assert_eq!(position, 26),
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn test_division_by_zero_surfaces_at_evaluation() {
    let stmt = one("SELECT 1 / 0");
    let err = stmt.as_select().unwrap().evaluate_items().unwrap_err();
    assert!(err.is_evaluation_fault());
    assert!(matches!(err, SqlError::DivisionByZero));
}
