//! SQLite persistence layer for the account store.
//!
//! Provides schema creation for new stores, typed row operations, and count
//! queries backed by SQLite (via rusqlite with bundled feature). The import
//! and merge pipelines never create or alter schema through this crate; a
//! destination store is expected to already carry the five entity tables.

pub mod operations;
pub mod queries;
pub mod schema;

pub use operations::{
    OperationError, insert_account, insert_entity, insert_player, set_foreign_keys, wipe_tables,
};
pub use queries::{count_rows, table_counts, table_exists};
pub use schema::{SchemaError, create_database, create_schema, open_database, open_memory};

pub use rusqlite::Connection;
