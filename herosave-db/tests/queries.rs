use herosave_catalog::types::PlayerRecord;
use herosave_db::*;

#[test]
fn table_exists_checks_sqlite_master() {
    let conn = open_memory().unwrap();
    assert!(table_exists(&conn, "Account").unwrap());
    assert!(!table_exists(&conn, "NoSuchTable").unwrap());
}

#[test]
fn table_counts_covers_all_entity_tables() {
    let conn = open_memory().unwrap();
    let counts = table_counts(&conn).unwrap();
    let names: Vec<_> = counts.iter().map(|(name, _)| *name).collect();
    assert_eq!(names, ["Account", "Player", "Avatar", "TeamUp", "Item"]);
    assert!(counts.iter().all(|(_, count)| *count == 0));
}

#[test]
fn table_counts_skips_missing_tables() {
    let conn = Connection::open_in_memory().unwrap();
    // Only a subset of the schema exists in this store
    conn.execute("CREATE TABLE Item (DbGuid INTEGER PRIMARY KEY)", [])
        .unwrap();
    conn.execute("INSERT INTO Item (DbGuid) VALUES (1)", []).unwrap();

    let counts = table_counts(&conn).unwrap();
    assert_eq!(counts, vec![("Item", 1)]);
}

#[test]
fn count_rows_reflects_inserts() {
    let conn = open_memory().unwrap();
    for guid in [100, 101, 102] {
        insert_player(
            &conn,
            &PlayerRecord {
                db_guid: guid,
                ..Default::default()
            },
        )
        .unwrap();
    }
    assert_eq!(count_rows(&conn, "Player").unwrap(), 3);
}
