//! Account database data model types and the static table catalog.
//!
//! This crate defines the persistent data model for the account store without
//! any database dependencies. Consumers can use these types directly for
//! display or pass them to `herosave-db` for persistence.

pub mod tables;
pub mod types;

pub use tables::{ColumnSpec, ColumnType, TableSpec, DEPENDENT_TABLES, TABLES, table};
pub use types::*;
