//! Canonical event types emitted by the procurement registry contract.
//!
//! These mirror the Soroban contract events defined in
//! `contracts/procurement_registry/src/events.rs`.

use serde::{Deserialize, Serialize};

/// All recognised event kinds from the registry contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// A procurement was created and its fee paid (`created` topic).
    ProcurementCreated,
    /// A procurement's title, description or budget changed (`updated` topic).
    ProcurementUpdated,
    /// A procurement was closed by its creator (`closed` topic).
    ProcurementClosed,
    /// The fee-recipient authority contract was configured (`auth_set` topic).
    AuthorityConfigured,
    /// The creation fee changed (`fee_set` topic).
    CreationFeeSet,
    /// An event from this contract that we don't recognise yet.
    Unknown,
}

impl EventKind {
    /// Parse the leading topic symbol string produced by Soroban into an [`EventKind`].
    pub fn from_topic(topic: &str) -> Self {
        match topic {
            "created" => Self::ProcurementCreated,
            "updated" => Self::ProcurementUpdated,
            "closed" => Self::ProcurementClosed,
            "auth_set" => Self::AuthorityConfigured,
            "fee_set" => Self::CreationFeeSet,
            _ => Self::Unknown,
        }
    }

    /// Return a short identifier string suitable for storage in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ProcurementCreated => "procurement_created",
            Self::ProcurementUpdated => "procurement_updated",
            Self::ProcurementClosed => "procurement_closed",
            Self::AuthorityConfigured => "authority_configured",
            Self::CreationFeeSet => "creation_fee_set",
            Self::Unknown => "unknown",
        }
    }

    /// Whether the second topic carries a procurement id.
    pub fn has_procurement_id(&self) -> bool {
        matches!(
            self,
            Self::ProcurementCreated | Self::ProcurementUpdated | Self::ProcurementClosed
        )
    }
}

/// A fully decoded registry event, ready to be stored in the database.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcurementEvent {
    /// RPC paging token; the deduplication key.
    pub event_id: String,
    pub event_type: String,
    pub procurement_id: Option<String>,
    /// Creator, updater, closer or configured authority.
    pub actor: Option<String>,
    pub title: Option<String>,
    /// Budget for create/update, fee for `fee_set`.
    pub amount: Option<String>,
    pub ledger: i64,
    pub timestamp: i64,
    pub contract_id: String,
    pub tx_hash: Option<String>,
}

/// A raw event record as stored in / read from the database.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct EventRecord {
    pub id: i64,
    pub event_id: String,
    pub event_type: String,
    pub procurement_id: Option<String>,
    pub actor: Option<String>,
    pub title: Option<String>,
    pub amount: Option<String>,
    pub ledger: i64,
    pub timestamp: i64,
    pub contract_id: String,
    pub tx_hash: Option<String>,
    pub created_at: i64,
}
