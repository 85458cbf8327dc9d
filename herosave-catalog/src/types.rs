//! Data model types for the account store.
//!
//! These types represent the persistent schema: one account, its players,
//! and the dependent entities (avatars, team-ups, items) attached to a
//! container. They are the canonical intermediate form produced by export
//! normalization and consumed uniformly by the write logic, regardless of
//! which input shape a document used.

// ── Account ─────────────────────────────────────────────────────────────────

/// A game account row.
#[derive(Debug, Clone, Default)]
pub struct AccountRecord {
    pub id: i64,
    pub email: String,
    pub player_name: String,
    /// Raw password hash bytes, decoded from the export's text encoding.
    pub password_hash: Vec<u8>,
    /// Raw salt bytes, decoded from the export's text encoding.
    pub salt: Vec<u8>,
    pub user_level: i64,
    pub flags: i64,
}

// ── Player ──────────────────────────────────────────────────────────────────

/// A player row. One account owns one or more players.
#[derive(Debug, Clone, Default)]
pub struct PlayerRecord {
    pub db_guid: i64,
    /// Opaque serialized entity state. Never interpreted, always raw bytes.
    pub archive_data: Vec<u8>,
    pub start_target: i64,
    pub start_target_region_override: i64,
    pub aoi_volume: i64,
    pub gazillionite_balance: i64,
}

// ── Dependent entities ──────────────────────────────────────────────────────

/// The three dependent entity categories, in import order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Avatar,
    TeamUp,
    Item,
}

impl EntityKind {
    /// All kinds in the fixed import order.
    pub const ALL: [EntityKind; 3] = [EntityKind::Avatar, EntityKind::TeamUp, EntityKind::Item];

    /// The destination table name for this kind.
    pub fn table_name(&self) -> &'static str {
        match self {
            Self::Avatar => "Avatar",
            Self::TeamUp => "TeamUp",
            Self::Item => "Item",
        }
    }
}

/// A dependent entity row (avatar, team-up, or item).
#[derive(Debug, Clone, Default)]
pub struct EntityRecord {
    pub db_guid: i64,
    /// The owning container. `None` falls back to the account Id at insert.
    pub container_db_guid: Option<i64>,
    pub inventory_proto_guid: i64,
    pub slot: i64,
    pub entity_proto_guid: i64,
    pub archive_data: Vec<u8>,
}

// ── Record set ──────────────────────────────────────────────────────────────

/// Everything normalized out of one export document.
#[derive(Debug, Clone, Default)]
pub struct RecordSet {
    pub account: Option<AccountRecord>,
    pub players: Vec<PlayerRecord>,
    pub avatars: Vec<EntityRecord>,
    pub team_ups: Vec<EntityRecord>,
    pub items: Vec<EntityRecord>,
}

impl RecordSet {
    /// The dependent entity list for a given kind.
    pub fn entities(&self, kind: EntityKind) -> &[EntityRecord] {
        match kind {
            EntityKind::Avatar => &self.avatars,
            EntityKind::TeamUp => &self.team_ups,
            EntityKind::Item => &self.items,
        }
    }
}
