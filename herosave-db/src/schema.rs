//! SQLite schema creation and store opening.

use std::path::Path;

use rusqlite::{Connection, OpenFlags};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Create the five entity tables and their indexes if they don't exist.
///
/// This is idempotent — safe to call on an existing store.
pub fn create_schema(conn: &Connection) -> Result<(), SchemaError> {
    conn.execute_batch(SCHEMA_SQL)?;
    Ok(())
}

/// Open an existing account store.
///
/// The file must already exist and carry the entity tables; the import and
/// merge pipelines never create schema in a destination store.
pub fn open_database(path: &Path) -> Result<Connection, SchemaError> {
    let conn = Connection::open_with_flags(
        path,
        OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )?;
    conn.execute_batch("PRAGMA foreign_keys=ON;")?;
    Ok(conn)
}

/// Create a fresh account store at the given path with the full schema.
pub fn create_database(path: &Path) -> Result<Connection, SchemaError> {
    let conn = Connection::open(path)?;
    conn.execute_batch("PRAGMA foreign_keys=ON;")?;
    create_schema(&conn)?;
    Ok(conn)
}

/// Open an in-memory store with the full schema. Useful for testing.
pub fn open_memory() -> Result<Connection, SchemaError> {
    let conn = Connection::open_in_memory()?;
    conn.execute_batch("PRAGMA foreign_keys=ON;")?;
    create_schema(&conn)?;
    Ok(conn)
}

const SCHEMA_SQL: &str = r#"
-- Account: one row per game account
CREATE TABLE IF NOT EXISTS Account (
    Id INTEGER PRIMARY KEY,
    Email TEXT,
    PlayerName TEXT,
    PasswordHash BLOB,
    Salt BLOB,
    UserLevel INTEGER NOT NULL DEFAULT 0,
    Flags INTEGER NOT NULL DEFAULT 0
);

-- Player: owned by an account, container for dependent entities
CREATE TABLE IF NOT EXISTS Player (
    DbGuid INTEGER PRIMARY KEY,
    ArchiveData BLOB,
    StartTarget INTEGER NOT NULL DEFAULT 0,
    StartTargetRegionOverride INTEGER NOT NULL DEFAULT 0,
    AOIVolume INTEGER NOT NULL DEFAULT 0,
    GazillioniteBalance INTEGER NOT NULL DEFAULT 0
);

-- Dependent entities, each attached to a container
CREATE TABLE IF NOT EXISTS Avatar (
    DbGuid INTEGER PRIMARY KEY,
    ContainerDbGuid INTEGER NOT NULL REFERENCES Player(DbGuid) ON DELETE CASCADE,
    InventoryProtoGuid INTEGER NOT NULL DEFAULT 0,
    Slot INTEGER NOT NULL DEFAULT 0,
    EntityProtoGuid INTEGER NOT NULL DEFAULT 0,
    ArchiveData BLOB
);
CREATE INDEX IF NOT EXISTS idx_avatar_container ON Avatar(ContainerDbGuid);

CREATE TABLE IF NOT EXISTS TeamUp (
    DbGuid INTEGER PRIMARY KEY,
    ContainerDbGuid INTEGER NOT NULL REFERENCES Player(DbGuid) ON DELETE CASCADE,
    InventoryProtoGuid INTEGER NOT NULL DEFAULT 0,
    Slot INTEGER NOT NULL DEFAULT 0,
    EntityProtoGuid INTEGER NOT NULL DEFAULT 0,
    ArchiveData BLOB
);
CREATE INDEX IF NOT EXISTS idx_teamup_container ON TeamUp(ContainerDbGuid);

CREATE TABLE IF NOT EXISTS Item (
    DbGuid INTEGER PRIMARY KEY,
    ContainerDbGuid INTEGER NOT NULL REFERENCES Player(DbGuid) ON DELETE CASCADE,
    InventoryProtoGuid INTEGER NOT NULL DEFAULT 0,
    Slot INTEGER NOT NULL DEFAULT 0,
    EntityProtoGuid INTEGER NOT NULL DEFAULT 0,
    ArchiveData BLOB
);
CREATE INDEX IF NOT EXISTS idx_item_container ON Item(ContainerDbGuid);
"#;
