use super::*;
use types::SqlValue;

fn users_table() -> Table {
    Table::new("users", vec!["id".to_string(), "name".to_string()])
}

#[test]
fn test_row_creation() {
    let row = Row::new().with("id", 1).with("name", "Alice");
    assert_eq!(row.len(), 2);
    assert_eq!(row.get("id"), Some(&SqlValue::Integer(1)));
    assert_eq!(row.get("missing"), None);
}

#[test]
fn test_row_put_overwrites_in_place() {
    let mut row = Row::new().with("a", 1).with("b", 2);
    let previous = row.put("a", SqlValue::Integer(10));

    assert_eq!(previous, Some(SqlValue::Integer(1)));
    assert_eq!(row.columns().collect::<Vec<_>>(), vec!["a", "b"]);
    assert_eq!(row.get("a"), Some(&SqlValue::Integer(10)));
}

#[test]
fn test_row_equality_ignores_column_order() {
    let a = Row::new().with("x", 1).with("y", "q");
    let b = Row::new().with("y", "q").with("x", 1);
    assert_eq!(a, b);
}

#[test]
fn test_row_equality_requires_same_columns() {
    let a = Row::new().with("x", 1);
    let b = Row::new().with("x", 1).with("y", SqlValue::Null);
    assert_ne!(a, b);
    assert_ne!(Row::new().with("x", 1), Row::new().with("z", 1));
}

#[test]
fn test_row_from_iterator() {
    let row: Row = vec![("id", 1), ("qty", 3)].into_iter().collect();
    assert_eq!(row.values().cloned().collect::<Vec<_>>(), vec![
        SqlValue::Integer(1),
        SqlValue::Integer(3)
    ]);
}

#[test]
fn test_table_creation() {
    let table = users_table();
    assert_eq!(table.row_count(), 0);
    assert_eq!(table.name(), "users");
    assert_eq!(table.columns(), &["id".to_string(), "name".to_string()]);
}

#[test]
fn test_table_with_columns() {
    let table = Table::with_columns(["cnt", "total"]);
    assert!(table.is_empty());
    assert_eq!(table.name(), "");
    assert_eq!(table.columns().len(), 2);
}

#[test]
fn test_table_insert() {
    let mut table = users_table();
    let result = table.insert(Row::new().with("id", 1).with("name", "Alice"));
    assert!(result.is_ok());
    assert_eq!(table.row_count(), 1);
}

#[test]
fn test_table_insert_unknown_column() {
    let mut table = users_table();
    let result = table.insert(Row::new().with("id", 1).with("email", "a@b"));

    match result.unwrap_err() {
        StorageError::ColumnNotFound { table, column } => {
            assert_eq!(table, "users");
            assert_eq!(column, "email");
        }
        other => panic!("Expected ColumnNotFound error, got {:?}", other),
    }
    assert_eq!(table.row_count(), 0);
}

#[test]
fn test_table_insert_partial_row() {
    let mut table = users_table();
    table.insert(Row::new().with("id", 1)).unwrap();
    assert_eq!(table.rows()[0].get("name"), None);
}

#[test]
fn test_table_sort_by_is_stable() {
    let mut table = users_table();
    table.insert(Row::new().with("id", 2).with("name", "b")).unwrap();
    table.insert(Row::new().with("id", 1).with("name", "a")).unwrap();
    table.insert(Row::new().with("id", 2).with("name", "c")).unwrap();

    table.sort_by(|a, b| types::compare_for_sort(a.get("id").unwrap(), b.get("id").unwrap()));

    let names: Vec<String> = table.iter().map(|r| r.get("name").unwrap().to_string()).collect();
    assert_eq!(names, vec!["a", "b", "c"]);
}

#[test]
fn test_cursor_walks_rows_in_order() {
    let mut table = users_table();
    table.insert(Row::new().with("id", 1)).unwrap();
    table.insert(Row::new().with("id", 2)).unwrap();

    let mut cursor = table.cursor();
    assert!(!cursor.is_started());
    assert_eq!(cursor.peek_current(), None);
    assert!(cursor.has_next());

    assert_eq!(cursor.advance().unwrap().get("id"), Some(&SqlValue::Integer(1)));
    assert_eq!(cursor.peek_current().unwrap().get("id"), Some(&SqlValue::Integer(1)));
    assert_eq!(cursor.advance().unwrap().get("id"), Some(&SqlValue::Integer(2)));
    assert!(!cursor.has_next());
    assert_eq!(cursor.advance(), None);

    // Exhausted cursor stays on its last row
    assert_eq!(cursor.peek_current().unwrap().get("id"), Some(&SqlValue::Integer(2)));
}

#[test]
fn test_cursor_restart() {
    let mut table = users_table();
    table.insert(Row::new().with("id", 1)).unwrap();

    let mut cursor = table.cursor();
    cursor.advance();
    assert!(!cursor.has_next());

    cursor.restart();
    assert!(cursor.has_next());
    assert_eq!(cursor.advance().unwrap().get("id"), Some(&SqlValue::Integer(1)));
}

#[test]
fn test_cursor_over_empty_table() {
    let table = users_table();
    let mut cursor = table.cursor();
    assert!(cursor.is_empty());
    assert!(!cursor.has_next());
    assert_eq!(cursor.advance(), None);
}

#[test]
fn test_database_create_table() {
    let mut db = Database::new();
    let result = db.create_table("users", ["id"]);
    assert!(result.is_ok());
    assert!(db.get_table("users").is_some());
}

#[test]
fn test_database_create_duplicate_table() {
    let mut db = Database::new();
    db.create_table("users", ["id"]).unwrap();
    assert_eq!(
        db.create_table("users", ["id"]),
        Err(StorageError::TableAlreadyExists("users".to_string()))
    );
}

#[test]
fn test_database_insert_row() {
    let mut db = Database::new();
    db.create_table("users", ["id"]).unwrap();

    let result = db.insert_row("users", Row::new().with("id", 1));
    assert!(result.is_ok());
    assert_eq!(db.get_table("users").unwrap().row_count(), 1);
}

#[test]
fn test_database_insert_into_nonexistent_table() {
    let mut db = Database::new();
    let result = db.insert_row("missing", Row::new().with("id", 1));

    match result.unwrap_err() {
        StorageError::TableNotFound(name) => assert_eq!(name, "missing"),
        other => panic!("Expected TableNotFound error, got {:?}", other),
    }
}

#[test]
fn test_database_drop_table() {
    let mut db = Database::new();
    db.create_table("users", ["id"]).unwrap();

    assert!(db.drop_table("users").is_ok());
    assert!(db.get_table("users").is_none());
    assert!(db.drop_table("users").is_err());
}

#[test]
fn test_database_multiple_tables() {
    let mut db = Database::new();
    db.create_table("users", ["id"]).unwrap();
    db.create_table("orders", ["id"]).unwrap();

    db.insert_row("users", Row::new().with("id", 1)).unwrap();
    db.insert_row("orders", Row::new().with("id", 100)).unwrap();
    db.get_table_mut("orders").unwrap().insert(Row::new().with("id", 101)).unwrap();

    assert_eq!(db.get_table("users").unwrap().row_count(), 1);
    assert_eq!(db.get_table("orders").unwrap().row_count(), 2);
    assert_eq!(db.table_names(), vec!["orders".to_string(), "users".to_string()]);
}

#[test]
fn test_error_display() {
    assert_eq!(StorageError::TableNotFound("t".to_string()).to_string(), "Table 't' not found");
    assert_eq!(
        StorageError::ColumnNotFound { table: "t".to_string(), column: "c".to_string() }
            .to_string(),
        "Column 'c' not found in table 't'"
    );
}
