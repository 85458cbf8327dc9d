use herosave_catalog::tables::{DEPENDENT_TABLES, TABLES, table};

#[test]
fn five_tables_in_dependency_order() {
    let names: Vec<_> = TABLES.iter().map(|t| t.name).collect();
    assert_eq!(names, ["Account", "Player", "Avatar", "TeamUp", "Item"]);
}

#[test]
fn dependent_tables_share_column_shape() {
    for name in DEPENDENT_TABLES {
        let spec = table(name).unwrap();
        assert_eq!(spec.columns.len(), 6);
        let fallback: Vec<_> = spec
            .columns
            .iter()
            .filter(|c| c.container_fallback)
            .map(|c| c.name)
            .collect();
        assert_eq!(fallback, ["ContainerDbGuid"]);
    }
}

#[test]
fn column_list_preserves_order() {
    let account = table("Account").unwrap();
    assert_eq!(
        account.column_list(),
        "Id, Email, PlayerName, PasswordHash, Salt, UserLevel, Flags"
    );
    assert!(table("sqlite_master").is_none());
}

#[test]
fn entity_kinds_map_to_dependent_tables() {
    use herosave_catalog::types::EntityKind;
    let names: Vec<_> = EntityKind::ALL.iter().map(|k| k.table_name()).collect();
    assert_eq!(names, DEPENDENT_TABLES);
}
