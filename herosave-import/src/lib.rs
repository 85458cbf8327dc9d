//! Import save-game exports and merge account stores.
//!
//! This crate owns all ETL logic: classifying export documents, normalizing
//! them into canonical records, writing them into a store, and unioning one
//! store's table contents into a copy of another.

pub mod codec;
pub mod json_import;
pub mod merge;
pub mod progress;

pub use codec::decode_payload;
pub use json_import::{
    ExportDocument, ImportError, ImportOptions, ImportStats, classify, import_document,
    import_file, import_records, load_document, normalize,
};
pub use merge::{
    ConflictPolicy, MergeError, MergeOptions, MergeProgress, MergeStats, SilentMergeProgress,
    merge_databases, verify_merge,
};
pub use progress::{ImportProgress, LogProgress, SilentProgress};
