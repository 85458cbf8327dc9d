//! Union of one account store's tables into a copy of another.
//!
//! The merge never touches the source or target files: the target is copied
//! byte-for-byte to the output path first, and rows are then appended from
//! the source into the copy, table by table. Tables and columns come from the
//! static catalog, not from runtime discovery.

use std::fs;
use std::path::{Path, PathBuf};

use herosave_catalog::tables::{TABLES, TableSpec};
use herosave_db::{operations, queries};
use rusqlite::{Connection, params};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MergeError {
    #[error("Input database does not exist: {0}")]
    MissingInput(PathBuf),
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Store error: {0}")]
    Store(#[from] herosave_db::SchemaError),
    #[error("Database error: {0}")]
    Db(#[from] operations::OperationError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// How to handle a source row whose primary key already exists in the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConflictPolicy {
    /// Plain `INSERT`: a collision is a constraint failure that skips the
    /// whole table.
    #[default]
    Append,
    /// `INSERT OR IGNORE`: the output's existing row wins.
    Skip,
    /// `INSERT OR REPLACE`: the source's row wins.
    Replace,
}

impl ConflictPolicy {
    fn insert_verb(&self) -> &'static str {
        match self {
            Self::Append => "INSERT",
            Self::Skip => "INSERT OR IGNORE",
            Self::Replace => "INSERT OR REPLACE",
        }
    }
}

/// Options for a merge run.
#[derive(Debug, Clone, Copy, Default)]
pub struct MergeOptions {
    pub on_conflict: ConflictPolicy,
}

/// Statistics from a single merge run.
#[derive(Debug, Default)]
pub struct MergeStats {
    pub tables_merged: u32,
    pub tables_skipped: u32,
    pub rows_copied: u64,
}

/// Progress callbacks for merging.
pub trait MergeProgress {
    fn on_phase(&self, message: &str);
    fn on_table(&self, table: &str, rows: usize);
    fn on_table_skipped(&self, table: &str, error: &str);
}

/// Silent progress — no output.
pub struct SilentMergeProgress;

impl MergeProgress for SilentMergeProgress {
    fn on_phase(&self, _: &str) {}
    fn on_table(&self, _: &str, _: usize) {}
    fn on_table_skipped(&self, _: &str, _: &str) {}
}

/// Merge the source store's table contents into a copy of the target store.
///
/// Preconditions: both `source` and `target` must exist; otherwise no output
/// file is created. A per-table failure (missing table in the output, column
/// mismatch, key collision under `ConflictPolicy::Append`) is reported and
/// that table is skipped; the merge continues with the remaining tables.
pub fn merge_databases(
    source: &Path,
    target: &Path,
    output: &Path,
    options: &MergeOptions,
    progress: Option<&dyn MergeProgress>,
) -> Result<MergeStats, MergeError> {
    if !source.exists() {
        return Err(MergeError::MissingInput(source.to_path_buf()));
    }
    if !target.exists() {
        return Err(MergeError::MissingInput(target.to_path_buf()));
    }

    // Seed the output with the target's full schema and data.
    fs::copy(target, output)?;
    if let Some(p) = progress {
        p.on_phase(&format!("Base database copied to {}", output.display()));
    }

    let conn = herosave_db::open_database(output)?;
    operations::set_foreign_keys(&conn, false)?;
    conn.execute(
        "ATTACH DATABASE ?1 AS source",
        params![source.to_string_lossy()],
    )?;

    let mut stats = MergeStats::default();
    let tx = conn.unchecked_transaction()?;
    for spec in &TABLES {
        match merge_table(&tx, spec, options) {
            Ok(0) => {}
            Ok(rows) => {
                stats.tables_merged += 1;
                stats.rows_copied += rows as u64;
                if let Some(p) = progress {
                    p.on_table(spec.name, rows);
                }
            }
            Err(e) => {
                stats.tables_skipped += 1;
                log::warn!("Failed to merge table {}: {}", spec.name, e);
                if let Some(p) = progress {
                    p.on_table_skipped(spec.name, &e.to_string());
                }
            }
        }
    }
    tx.commit()?;

    conn.execute("DETACH DATABASE source", [])?;
    operations::set_foreign_keys(&conn, true)?;
    Ok(stats)
}

/// Append one table's source rows into the output. Returns the row count, or
/// 0 when the source lacks the table or has no rows in it.
fn merge_table(
    conn: &Connection,
    spec: &TableSpec,
    options: &MergeOptions,
) -> Result<usize, MergeError> {
    let exists: bool = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM source.sqlite_master WHERE type='table' AND name=?1)",
        params![spec.name],
        |row| row.get(0),
    )?;
    if !exists {
        return Ok(0);
    }

    let columns = spec.column_list();
    let sql = format!(
        "{verb} INTO main.{table} ({columns}) SELECT {columns} FROM source.{table}",
        verb = options.on_conflict.insert_verb(),
        table = spec.name,
    );
    Ok(conn.execute(&sql, [])?)
}

/// Post-merge sanity check: row counts per known entity table in the output.
///
/// Read-only; a failure here means the store could not be verified, never
/// that the merge was undone.
pub fn verify_merge(output: &Path) -> Result<Vec<(&'static str, i64)>, MergeError> {
    let conn = herosave_db::open_database(output)?;
    Ok(queries::table_counts(&conn)?)
}
