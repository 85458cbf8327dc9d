use herosave_catalog::types::{AccountRecord, EntityKind, EntityRecord, PlayerRecord};
use herosave_db::*;

fn test_account() -> AccountRecord {
    AccountRecord {
        id: 7,
        email: "hero@example.com".to_string(),
        player_name: "Hero".to_string(),
        password_hash: vec![0xde, 0xad],
        salt: vec![0xbe, 0xef],
        user_level: 0,
        flags: 0,
    }
}

fn test_player(db_guid: i64) -> PlayerRecord {
    PlayerRecord {
        db_guid,
        archive_data: vec![0x41],
        start_target: 0,
        start_target_region_override: 0,
        aoi_volume: 3200,
        gazillionite_balance: 0,
    }
}

#[test]
fn insert_and_read_account() {
    let conn = open_memory().unwrap();
    insert_account(&conn, &test_account()).unwrap();

    let (email, hash): (String, Vec<u8>) = conn
        .query_row(
            "SELECT Email, PasswordHash FROM Account WHERE Id = 7",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .unwrap();
    assert_eq!(email, "hero@example.com");
    assert_eq!(hash, vec![0xde, 0xad]);
}

#[test]
fn insert_player_stores_blob() {
    let conn = open_memory().unwrap();
    insert_player(&conn, &test_player(100)).unwrap();

    let blob: Vec<u8> = conn
        .query_row("SELECT ArchiveData FROM Player WHERE DbGuid = 100", [], |row| {
            row.get(0)
        })
        .unwrap();
    assert_eq!(blob, vec![0x41]);
}

#[test]
fn duplicate_guid_is_a_constraint_error() {
    let conn = open_memory().unwrap();
    insert_player(&conn, &test_player(100)).unwrap();
    assert!(insert_player(&conn, &test_player(100)).is_err());
}

#[test]
fn entity_without_container_uses_default() {
    let conn = open_memory().unwrap();
    insert_player(&conn, &test_player(100)).unwrap();

    let entity = EntityRecord {
        db_guid: 500,
        container_db_guid: None,
        inventory_proto_guid: 0,
        slot: 1,
        entity_proto_guid: 42,
        archive_data: vec![],
    };
    insert_entity(&conn, EntityKind::Avatar, &entity, 100).unwrap();

    let container: i64 = conn
        .query_row(
            "SELECT ContainerDbGuid FROM Avatar WHERE DbGuid = 500",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(container, 100);
}

#[test]
fn explicit_container_wins_over_default() {
    let conn = open_memory().unwrap();
    insert_player(&conn, &test_player(100)).unwrap();
    insert_player(&conn, &test_player(200)).unwrap();

    let entity = EntityRecord {
        db_guid: 501,
        container_db_guid: Some(200),
        ..Default::default()
    };
    insert_entity(&conn, EntityKind::Item, &entity, 100).unwrap();

    let container: i64 = conn
        .query_row(
            "SELECT ContainerDbGuid FROM Item WHERE DbGuid = 501",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(container, 200);
}

#[test]
fn wipe_clears_all_tables_keeps_schema() {
    let conn = open_memory().unwrap();
    insert_account(&conn, &test_account()).unwrap();
    insert_player(&conn, &test_player(100)).unwrap();
    let entity = EntityRecord {
        db_guid: 500,
        container_db_guid: Some(100),
        ..Default::default()
    };
    insert_entity(&conn, EntityKind::TeamUp, &entity, 100).unwrap();

    wipe_tables(&conn).unwrap();

    for (table, count) in table_counts(&conn).unwrap() {
        assert_eq!(count, 0, "table '{}' should be empty after wipe", table);
    }
    // Schema survives: inserts still work
    insert_account(&conn, &test_account()).unwrap();
}

#[test]
fn foreign_keys_toggle() {
    let conn = open_memory().unwrap();
    set_foreign_keys(&conn, false).unwrap();
    // With enforcement off, a dangling container is accepted
    let entity = EntityRecord {
        db_guid: 502,
        container_db_guid: Some(999),
        ..Default::default()
    };
    insert_entity(&conn, EntityKind::Avatar, &entity, 0).unwrap();

    set_foreign_keys(&conn, true).unwrap();
    let entity = EntityRecord {
        db_guid: 503,
        container_db_guid: Some(999),
        ..Default::default()
    };
    assert!(insert_entity(&conn, EntityKind::Avatar, &entity, 0).is_err());
}
