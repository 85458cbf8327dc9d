//! herosave CLI
//!
//! Command-line interface for converting save-game JSON exports into an
//! account database and merging account databases.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use herosave_import::ConflictPolicy;

mod commands;

#[derive(Parser)]
#[command(name = "herosave")]
#[command(about = "Convert save-game exports and merge account databases", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a fresh account database with the entity tables
    Init {
        /// Path for the new database (must not exist yet)
        db: PathBuf,
    },

    /// Import a save-game JSON export into an account database
    Import {
        /// JSON export file (bulk or single-account shape)
        json: PathBuf,

        /// Destination database; must already carry the entity tables
        db: PathBuf,

        /// Keep existing rows instead of wiping the store before importing
        #[arg(long)]
        keep_existing: bool,
    },

    /// Merge one account database into a copy of another
    Merge {
        /// Database whose rows are copied in
        source: PathBuf,

        /// Base database the output starts from
        target: PathBuf,

        /// Path for the merged output database
        output: PathBuf,

        /// What to do when a source key already exists in the output
        #[arg(long, value_enum, default_value_t = ConflictArg::Append)]
        on_conflict: ConflictArg,
    },

    /// Show per-table row counts for an account database
    Stats {
        /// Database to inspect
        db: PathBuf,
    },
}

/// CLI spelling of the merge conflict policy.
#[derive(Clone, Copy, ValueEnum)]
enum ConflictArg {
    /// Plain insert; a key collision skips the whole table
    Append,
    /// Keep the target's row on collision
    Skip,
    /// Take the source's row on collision
    Replace,
}

impl From<ConflictArg> for ConflictPolicy {
    fn from(arg: ConflictArg) -> Self {
        match arg {
            ConflictArg::Append => ConflictPolicy::Append,
            ConflictArg::Skip => ConflictPolicy::Skip,
            ConflictArg::Replace => ConflictPolicy::Replace,
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .format_target(false)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init { db } => {
            commands::run_init(&db);
        }
        Commands::Import {
            json,
            db,
            keep_existing,
        } => {
            commands::run_import(&json, &db, keep_existing);
        }
        Commands::Merge {
            source,
            target,
            output,
            on_conflict,
        } => {
            commands::run_merge(&source, &target, &output, on_conflict.into());
        }
        Commands::Stats { db } => {
            commands::run_stats(&db);
        }
    }
}
