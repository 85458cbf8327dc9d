//! Typed row operations for the account store.
//!
//! Insert statements are plain appends: uniqueness of the primary keys is the
//! store's concern, and a collision surfaces as a constraint error rather than
//! being resolved here.

use herosave_catalog::tables::TABLES;
use herosave_catalog::types::{AccountRecord, EntityKind, EntityRecord, PlayerRecord};
use rusqlite::{Connection, params};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OperationError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Toggle foreign-key enforcement on the connection.
///
/// Has no effect inside an open transaction; callers flip it between
/// transactions, which is how the bulk-load phases bracket their writes.
pub fn set_foreign_keys(conn: &Connection, on: bool) -> Result<(), OperationError> {
    let pragma = if on {
        "PRAGMA foreign_keys=ON;"
    } else {
        "PRAGMA foreign_keys=OFF;"
    };
    conn.execute_batch(pragma)?;
    Ok(())
}

/// Insert an account row.
pub fn insert_account(conn: &Connection, account: &AccountRecord) -> Result<(), OperationError> {
    conn.execute(
        "INSERT INTO Account (Id, Email, PlayerName, PasswordHash, Salt, UserLevel, Flags)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            account.id,
            account.email,
            account.player_name,
            account.password_hash,
            account.salt,
            account.user_level,
            account.flags,
        ],
    )?;
    Ok(())
}

/// Insert a player row.
pub fn insert_player(conn: &Connection, player: &PlayerRecord) -> Result<(), OperationError> {
    conn.execute(
        "INSERT INTO Player (DbGuid, ArchiveData, StartTarget, StartTargetRegionOverride,
             AOIVolume, GazillioniteBalance)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            player.db_guid,
            player.archive_data,
            player.start_target,
            player.start_target_region_override,
            player.aoi_volume,
            player.gazillionite_balance,
        ],
    )?;
    Ok(())
}

/// Insert a dependent entity row into the table for its kind.
///
/// An entity without an explicit container is attached to `default_container`
/// (the owning account's Id during import).
pub fn insert_entity(
    conn: &Connection,
    kind: EntityKind,
    entity: &EntityRecord,
    default_container: i64,
) -> Result<(), OperationError> {
    let sql = format!(
        "INSERT INTO {} (DbGuid, ContainerDbGuid, InventoryProtoGuid, Slot, EntityProtoGuid, ArchiveData)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        kind.table_name(),
    );
    conn.execute(
        &sql,
        params![
            entity.db_guid,
            entity.container_db_guid.unwrap_or(default_container),
            entity.inventory_proto_guid,
            entity.slot,
            entity.entity_proto_guid,
            entity.archive_data,
        ],
    )?;
    Ok(())
}

/// Delete all rows from all entity tables, preserving schema.
///
/// Runs with foreign keys enabled; tables are cleared in reverse dependency
/// order so the deletes never trip a constraint. Intended to run immediately
/// before an import so stale rows cannot collide with re-imported guids.
pub fn wipe_tables(conn: &Connection) -> Result<(), OperationError> {
    set_foreign_keys(conn, true)?;
    for spec in TABLES.iter().rev() {
        let deleted = conn.execute(&format!("DELETE FROM {}", spec.name), [])?;
        log::debug!("Wiped {} rows from {}", deleted, spec.name);
    }
    Ok(())
}
