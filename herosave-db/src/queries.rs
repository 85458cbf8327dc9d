//! Read queries for the account store.

use herosave_catalog::tables::TABLES;
use rusqlite::{Connection, params};

use crate::operations::OperationError;

/// Whether a table exists in the store.
pub fn table_exists(conn: &Connection, name: &str) -> Result<bool, OperationError> {
    let exists: bool = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name=?1)",
        params![name],
        |row| row.get(0),
    )?;
    Ok(exists)
}

/// Count the rows of a single table.
pub fn count_rows(conn: &Connection, table: &str) -> Result<i64, OperationError> {
    let count: i64 = conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
        row.get(0)
    })?;
    Ok(count)
}

/// Row counts for every entity table present in the store.
///
/// Tables missing from the store are silently skipped rather than failing the
/// whole summary; a merged output may lack tables the catalog knows about.
pub fn table_counts(conn: &Connection) -> Result<Vec<(&'static str, i64)>, OperationError> {
    let mut counts = Vec::with_capacity(TABLES.len());
    for spec in &TABLES {
        if !table_exists(conn, spec.name)? {
            continue;
        }
        counts.push((spec.name, count_rows(conn, spec.name)?));
    }
    Ok(counts)
}
