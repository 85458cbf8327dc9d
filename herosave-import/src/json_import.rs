//! Import save-game JSON exports into the account store.
//!
//! An export document is first classified into one of the two recognized
//! shapes, then normalized into canonical records, then written in dependency
//! order inside a single transaction. A malformed list entry is logged and
//! skipped; an unrecognized document shape aborts before any write.

use std::fs;
use std::path::Path;

use herosave_catalog::types::{
    AccountRecord, EntityKind, EntityRecord, PlayerRecord, RecordSet,
};
use herosave_db::{operations, queries};
use rusqlite::Connection;
use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::codec;
use crate::progress::ImportProgress;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Database error: {0}")]
    Db(#[from] operations::OperationError),
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Store error: {0}")]
    Store(#[from] herosave_db::SchemaError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Unsupported export format: expected a bulk export or a single-account export")]
    UnsupportedFormat,
}

/// Statistics from a single import run.
#[derive(Debug, Default)]
pub struct ImportStats {
    pub accounts: u64,
    pub players: u64,
    pub avatars: u64,
    pub team_ups: u64,
    pub items: u64,
    /// Malformed records logged and dropped during normalization.
    pub skipped: u64,
}

impl ImportStats {
    fn bump(&mut self, kind: EntityKind) {
        match kind {
            EntityKind::Avatar => self.avatars += 1,
            EntityKind::TeamUp => self.team_ups += 1,
            EntityKind::Item => self.items += 1,
        }
    }
}

/// Options for an import run.
#[derive(Debug, Clone)]
pub struct ImportOptions {
    /// Delete all existing rows before importing, so re-imported guids cannot
    /// collide with stale data.
    pub wipe: bool,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self { wipe: true }
    }
}

// ── Document shapes ─────────────────────────────────────────────────────────

/// The two recognized export document shapes.
#[derive(Debug)]
pub enum ExportDocument {
    /// Top-level `Account` object plus `Players` list.
    Bulk(Map<String, Value>),
    /// Top-level account identity with a single embedded `Player` object.
    SingleAccount(Map<String, Value>),
}

/// Read and parse an export document from disk.
pub fn load_document(path: &Path) -> Result<Value, ImportError> {
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

/// Classify a parsed document into one of the recognized shapes.
///
/// Fails closed: anything that is not clearly one of the two shapes is
/// rejected before a single row is written.
pub fn classify(document: Value) -> Result<ExportDocument, ImportError> {
    let map = match document {
        Value::Object(map) => map,
        _ => return Err(ImportError::UnsupportedFormat),
    };
    if map.contains_key("Account") && map.contains_key("Players") {
        Ok(ExportDocument::Bulk(map))
    } else if map.contains_key("Id") && map.contains_key("Player") {
        Ok(ExportDocument::SingleAccount(map))
    } else {
        Err(ImportError::UnsupportedFormat)
    }
}

// ── Normalization ───────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
struct AccountJson {
    id: i64,
    email: String,
    player_name: String,
    password_hash: String,
    salt: String,
    user_level: i64,
    flags: i64,
}

impl AccountJson {
    fn into_record(self) -> AccountRecord {
        AccountRecord {
            id: self.id,
            email: self.email,
            player_name: self.player_name,
            password_hash: codec::decode_payload(&self.password_hash),
            salt: codec::decode_payload(&self.salt),
            user_level: self.user_level,
            flags: self.flags,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
struct PlayerJson {
    db_guid: i64,
    archive_data: String,
    start_target: i64,
    start_target_region_override: i64,
    #[serde(rename = "AOIVolume")]
    aoi_volume: i64,
    gazillionite_balance: i64,
}

impl PlayerJson {
    fn into_record(self) -> PlayerRecord {
        PlayerRecord {
            db_guid: self.db_guid,
            archive_data: codec::decode_payload(&self.archive_data),
            start_target: self.start_target,
            start_target_region_override: self.start_target_region_override,
            aoi_volume: self.aoi_volume,
            gazillionite_balance: self.gazillionite_balance,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
struct EntityJson {
    db_guid: i64,
    container_db_guid: Option<i64>,
    inventory_proto_guid: i64,
    slot: i64,
    entity_proto_guid: i64,
    archive_data: String,
}

impl EntityJson {
    fn into_record(self) -> EntityRecord {
        EntityRecord {
            db_guid: self.db_guid,
            container_db_guid: self.container_db_guid,
            inventory_proto_guid: self.inventory_proto_guid,
            slot: self.slot,
            entity_proto_guid: self.entity_proto_guid,
            archive_data: codec::decode_payload(&self.archive_data),
        }
    }
}

/// Normalize a classified document into the canonical record set.
///
/// Both shapes land in the same `RecordSet`; the write logic never needs to
/// know which one the document used.
pub fn normalize(
    document: ExportDocument,
    stats: &mut ImportStats,
) -> Result<RecordSet, ImportError> {
    match document {
        ExportDocument::Bulk(mut map) => {
            let account = match map.remove("Account") {
                None | Some(Value::Null) => None,
                Some(value) => account_record(value, stats),
            };
            let players = player_records(take_list(&mut map, "Players")?, stats);
            let avatars = take_list(&mut map, "Avatars")?;
            let team_ups = take_list(&mut map, "TeamUps")?;
            let items = take_list(&mut map, "Items")?;
            Ok(RecordSet {
                account,
                players,
                avatars: entity_records(avatars, EntityKind::Avatar, stats),
                team_ups: entity_records(team_ups, EntityKind::TeamUp, stats),
                items: entity_records(items, EntityKind::Item, stats),
            })
        }
        ExportDocument::SingleAccount(mut map) => {
            // Synthesize the account record from the document's top-level
            // identity fields, then treat the embedded player as a one-entry
            // list so the rest of the pipeline is shared with the bulk shape.
            let player = map.remove("Player").unwrap_or(Value::Null);
            let avatars = take_list(&mut map, "Avatars")?;
            let team_ups = take_list(&mut map, "TeamUps")?;
            let items = take_list(&mut map, "Items")?;
            let account = account_record(Value::Object(map), stats);
            Ok(RecordSet {
                account,
                players: player_records(vec![player], stats),
                avatars: entity_records(avatars, EntityKind::Avatar, stats),
                team_ups: entity_records(team_ups, EntityKind::TeamUp, stats),
                items: entity_records(items, EntityKind::Item, stats),
            })
        }
    }
}

/// Remove a list-valued key; absent or null means empty.
fn take_list(map: &mut Map<String, Value>, key: &str) -> Result<Vec<Value>, ImportError> {
    match map.remove(key) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(value) => Ok(serde_json::from_value(value)?),
    }
}

fn account_record(value: Value, stats: &mut ImportStats) -> Option<AccountRecord> {
    match serde_json::from_value::<AccountJson>(value) {
        Ok(json) => Some(json.into_record()),
        Err(e) => {
            log::warn!("Skipping malformed Account record: {}", e);
            stats.skipped += 1;
            None
        }
    }
}

fn player_records(list: Vec<Value>, stats: &mut ImportStats) -> Vec<PlayerRecord> {
    let mut records = Vec::with_capacity(list.len());
    for value in list {
        if value.is_null() {
            continue;
        }
        match serde_json::from_value::<PlayerJson>(value) {
            Ok(json) => records.push(json.into_record()),
            Err(e) => {
                log::warn!("Skipping malformed Player record: {}", e);
                stats.skipped += 1;
            }
        }
    }
    records
}

fn entity_records(
    list: Vec<Value>,
    kind: EntityKind,
    stats: &mut ImportStats,
) -> Vec<EntityRecord> {
    let mut records = Vec::with_capacity(list.len());
    for value in list {
        if value.is_null() {
            continue;
        }
        match serde_json::from_value::<EntityJson>(value) {
            Ok(json) => records.push(json.into_record()),
            Err(e) => {
                log::warn!("Skipping malformed {} record: {}", kind.table_name(), e);
                stats.skipped += 1;
            }
        }
    }
    records
}

// ── Writing ─────────────────────────────────────────────────────────────────

/// Write a record set into the store.
///
/// Foreign-key enforcement is off for the duration of the load so intra-batch
/// ordering cannot trip a constraint, and the whole load runs in one
/// transaction: a fatal failure rolls everything back instead of leaving the
/// store partially populated. Insertion order is fixed: account, players,
/// then avatars, team-ups, and items.
pub fn import_records(
    conn: &Connection,
    records: &RecordSet,
    stats: &mut ImportStats,
    progress: Option<&dyn ImportProgress>,
) -> Result<(), ImportError> {
    operations::set_foreign_keys(conn, false)?;
    let tx = conn.unchecked_transaction()?;

    let default_container = records.account.as_ref().map(|a| a.id).unwrap_or(0);

    if let Some(account) = &records.account {
        operations::insert_account(&tx, account)?;
        stats.accounts += 1;
        if let Some(p) = progress {
            p.on_record("Account", account.id, None);
        }
    }

    for player in &records.players {
        operations::insert_player(&tx, player)?;
        stats.players += 1;
        if let Some(p) = progress {
            p.on_record("Player", player.db_guid, Some(player.archive_data.len()));
        }
    }

    for kind in EntityKind::ALL {
        for entity in records.entities(kind) {
            operations::insert_entity(&tx, kind, entity, default_container)?;
            stats.bump(kind);
            if let Some(p) = progress {
                p.on_record(kind.table_name(), entity.db_guid, None);
            }
        }
    }

    tx.commit()?;
    operations::set_foreign_keys(conn, true)?;
    Ok(())
}

/// Import an already-parsed document into an open store.
pub fn import_document(
    conn: &Connection,
    document: Value,
    progress: Option<&dyn ImportProgress>,
) -> Result<ImportStats, ImportError> {
    let mut stats = ImportStats::default();
    let shape = classify(document)?;
    let records = normalize(shape, &mut stats)?;
    import_records(conn, &records, &mut stats, progress)?;

    // Summary counts come from the destination store, not from the counters:
    // they reflect what actually landed, stale rows included.
    for (table, count) in queries::table_counts(conn)? {
        if let Some(p) = progress {
            p.on_phase(&format!("{} rows in store: {}", table, count));
        }
    }
    if let Some(p) = progress {
        p.on_complete("Import complete");
    }
    Ok(stats)
}

/// Import a JSON export file into the store at `db_path`.
///
/// With `options.wipe` (the default) all existing rows are deleted first, so
/// a re-import cannot collide with stale guids.
pub fn import_file(
    json_path: &Path,
    db_path: &Path,
    options: &ImportOptions,
    progress: Option<&dyn ImportProgress>,
) -> Result<ImportStats, ImportError> {
    let document = load_document(json_path)?;
    let conn = herosave_db::open_database(db_path)?;

    if options.wipe {
        operations::wipe_tables(&conn)?;
        if let Some(p) = progress {
            p.on_phase("Wiped existing rows from the store");
        }
    }

    import_document(&conn, document, progress)
}
