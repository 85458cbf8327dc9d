use herosave_db::{create_schema, open_database, open_memory};

#[test]
fn all_tables_exist() {
    let conn = open_memory().unwrap();
    for table in ["Account", "Player", "Avatar", "TeamUp", "Item"] {
        let exists: bool = conn
            .query_row(
                "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name=?1)",
                [table],
                |row| row.get(0),
            )
            .unwrap();
        assert!(exists, "table '{}' should exist", table);
    }
}

#[test]
fn schema_is_idempotent() {
    let conn = open_memory().unwrap();
    // Creating again should not error
    create_schema(&conn).unwrap();
}

#[test]
fn foreign_keys_enabled() {
    let conn = open_memory().unwrap();
    let fk: i32 = conn
        .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
        .unwrap();
    assert_eq!(fk, 1);
}

#[test]
fn open_database_requires_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.db");
    assert!(open_database(&missing).is_err());
}

#[test]
fn create_then_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("account.db");
    {
        let conn = herosave_db::create_database(&path).unwrap();
        conn.execute("INSERT INTO Account (Id) VALUES (1)", []).unwrap();
    }
    let conn = open_database(&path).unwrap();
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM Account", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 1);
}
