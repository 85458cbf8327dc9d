//! Static description of the five entity tables.
//!
//! Column lists are declared here once, in insertion order, and every SQL
//! statement in the workspace is built from them. Nothing discovers tables
//! from `sqlite_master` at runtime; the schema of an account store is fixed.

/// Semantic type of a column, as stored in SQLite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Integer,
    Text,
    Blob,
}

/// One column of an entity table.
#[derive(Debug, Clone, Copy)]
pub struct ColumnSpec {
    pub name: &'static str,
    pub ty: ColumnType,
    /// Foreign key to the owning container; absent values fall back to the
    /// account Id during import.
    pub container_fallback: bool,
}

const fn col(name: &'static str, ty: ColumnType) -> ColumnSpec {
    ColumnSpec {
        name,
        ty,
        container_fallback: false,
    }
}

const fn container_col(name: &'static str) -> ColumnSpec {
    ColumnSpec {
        name,
        ty: ColumnType::Integer,
        container_fallback: true,
    }
}

/// One entity table: name plus ordered columns.
#[derive(Debug, Clone, Copy)]
pub struct TableSpec {
    pub name: &'static str,
    pub columns: &'static [ColumnSpec],
}

impl TableSpec {
    /// Comma-separated column list for SQL statements.
    pub fn column_list(&self) -> String {
        self.columns
            .iter()
            .map(|c| c.name)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

use ColumnType::{Blob, Integer, Text};

const ACCOUNT_COLUMNS: &[ColumnSpec] = &[
    col("Id", Integer),
    col("Email", Text),
    col("PlayerName", Text),
    col("PasswordHash", Blob),
    col("Salt", Blob),
    col("UserLevel", Integer),
    col("Flags", Integer),
];

const PLAYER_COLUMNS: &[ColumnSpec] = &[
    col("DbGuid", Integer),
    col("ArchiveData", Blob),
    col("StartTarget", Integer),
    col("StartTargetRegionOverride", Integer),
    col("AOIVolume", Integer),
    col("GazillioniteBalance", Integer),
];

const ENTITY_COLUMNS: &[ColumnSpec] = &[
    col("DbGuid", Integer),
    container_col("ContainerDbGuid"),
    col("InventoryProtoGuid", Integer),
    col("Slot", Integer),
    col("EntityProtoGuid", Integer),
    col("ArchiveData", Blob),
];

/// All entity tables, in import and merge order. Account and Player rows must
/// land before the dependent tables that reference them.
pub const TABLES: [TableSpec; 5] = [
    TableSpec {
        name: "Account",
        columns: ACCOUNT_COLUMNS,
    },
    TableSpec {
        name: "Player",
        columns: PLAYER_COLUMNS,
    },
    TableSpec {
        name: "Avatar",
        columns: ENTITY_COLUMNS,
    },
    TableSpec {
        name: "TeamUp",
        columns: ENTITY_COLUMNS,
    },
    TableSpec {
        name: "Item",
        columns: ENTITY_COLUMNS,
    },
];

/// The three dependent tables, in import order.
pub const DEPENDENT_TABLES: [&str; 3] = ["Avatar", "TeamUp", "Item"];

/// Look up a table by name.
pub fn table(name: &str) -> Option<&'static TableSpec> {
    TABLES.iter().find(|t| t.name == name)
}
