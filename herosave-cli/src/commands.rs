//! Command implementations for the herosave CLI.

use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use herosave_import::merge::MergeProgress;
use herosave_import::{ConflictPolicy, ImportOptions, LogProgress, MergeOptions};

fn check() -> String {
    "\u{2714}"
        .if_supports_color(Stdout, |t| t.green())
        .to_string()
}

/// Create a fresh account database.
pub(crate) fn run_init(db: &Path) {
    if db.exists() {
        log::error!("Refusing to overwrite existing file: {}", db.display());
        std::process::exit(1);
    }
    match herosave_db::create_database(db) {
        Ok(_) => {
            println!("{} Created account database at {}", check(), db.display());
        }
        Err(e) => {
            log::error!("Failed to create database at {}: {}", db.display(), e);
            std::process::exit(1);
        }
    }
}

/// Import a JSON export, wiping the destination first unless told otherwise.
pub(crate) fn run_import(json: &Path, db: &Path, keep_existing: bool) {
    let options = ImportOptions {
        wipe: !keep_existing,
    };
    match herosave_import::import_file(json, db, &options, Some(&LogProgress)) {
        Ok(stats) => {
            println!(
                "{} Imported {} account(s), {} player(s), {} avatar(s), {} team-up(s), {} item(s); {} record(s) skipped",
                check(),
                stats.accounts,
                stats.players,
                stats.avatars,
                stats.team_ups,
                stats.items,
                stats.skipped,
            );
        }
        Err(e) => {
            log::error!("Import failed: {}", e);
            std::process::exit(1);
        }
    }
}

/// A merge progress reporter that logs to the `log` crate.
struct LogMergeProgress;

impl MergeProgress for LogMergeProgress {
    fn on_phase(&self, message: &str) {
        log::info!("{}", message);
    }

    fn on_table(&self, table: &str, rows: usize) {
        log::info!("Merged {} rows into table {}", rows, table);
    }

    fn on_table_skipped(&self, table: &str, error: &str) {
        log::warn!("Skipped table {}: {}", table, error);
    }
}

/// Merge `source` into a copy of `target` at `output`, then verify.
pub(crate) fn run_merge(source: &Path, target: &Path, output: &Path, on_conflict: ConflictPolicy) {
    log::info!("Starting database merge");
    let options = MergeOptions { on_conflict };
    let stats = match herosave_import::merge_databases(
        source,
        target,
        output,
        &options,
        Some(&LogMergeProgress),
    ) {
        Ok(stats) => stats,
        Err(e) => {
            log::error!("Merge failed: {}", e);
            std::process::exit(1);
        }
    };
    println!(
        "{} Merged {} table(s), {} row(s) copied; {} table(s) skipped",
        check(),
        stats.tables_merged,
        stats.rows_copied,
        stats.tables_skipped,
    );

    // Read-only sanity check; a failure here never undoes the merge
    match herosave_import::verify_merge(output) {
        Ok(counts) => {
            for (table, count) in counts {
                log::info!("{} rows in merged store: {}", table, count);
            }
            println!("{} Merge verification complete", check());
        }
        Err(e) => {
            log::warn!("Verification failed: {}", e);
        }
    }
}

/// Print per-table row counts.
pub(crate) fn run_stats(db: &Path) {
    let conn = match herosave_db::open_database(db) {
        Ok(conn) => conn,
        Err(e) => {
            log::error!("Failed to open database at {}: {}", db.display(), e);
            std::process::exit(1);
        }
    };
    match herosave_db::table_counts(&conn) {
        Ok(counts) => {
            for (table, count) in counts {
                println!("{:>10}  {}", count, table);
            }
        }
        Err(e) => {
            log::error!("Failed to count rows: {}", e);
            std::process::exit(1);
        }
    }
}
