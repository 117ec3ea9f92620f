//! # Types
//!
//! Shared data structures used across all modules of the procurement registry.
//!
//! ## Design decisions
//!
//! ### Terms / State split
//!
//! A `Procurement` is internally stored as two separate ledger entries:
//!
//! - [`ProcurementTerms`] — written once at creation; never mutated.
//! - [`ProcurementState`] — the fields `update_procurement` and
//!   `close_procurement` are allowed to touch (title, description, budget,
//!   timestamp, status).
//!
//! The public API exposes the reconstructed [`Procurement`] struct.
//!
//! ### Status as a Finite-State Machine
//!
//! ```text
//! Open ──► Closed
//! ```
//!
//! `Closed` is terminal. `close_procurement` on a closed record is rejected,
//! it is never a no-op.

use soroban_sdk::{contracttype, symbol_short, Address, String, Symbol};

/// Lifecycle status of a procurement.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ProcurementStatus {
    /// Initial state; the record may still be updated.
    Open,
    /// Terminal state.
    Closed,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ProcurementType {
    Goods,
    Services,
    Works,
}

impl ProcurementType {
    /// Parse the wire symbol (`goods`, `services`, `works`).
    pub fn from_symbol(symbol: &Symbol) -> Option<Self> {
        if *symbol == symbol_short!("goods") {
            Some(Self::Goods)
        } else if *symbol == symbol_short!("services") {
            Some(Self::Services)
        } else if *symbol == symbol_short!("works") {
            Some(Self::Works)
        } else {
            None
        }
    }
}

/// Denomination of the procurement's budget and bids.
///
/// Informational only: the creation fee is always paid in the registry's
/// configured fee token.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Currency {
    Stx,
    Usd,
    Btc,
}

impl Currency {
    /// Parse the wire symbol (`STX`, `USD`, `BTC`).
    pub fn from_symbol(symbol: &Symbol) -> Option<Self> {
        if *symbol == symbol_short!("STX") {
            Some(Self::Stx)
        } else if *symbol == symbol_short!("USD") {
            Some(Self::Usd)
        } else if *symbol == symbol_short!("BTC") {
            Some(Self::Btc)
        } else {
            None
        }
    }
}

/// Caller-supplied fields for `create_procurement`.
///
/// Every field is checked by [`crate::validation::validate_params`] before
/// anything is written.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProcurementParams {
    pub title: String,
    pub description: String,
    pub budget: i128,
    /// Ledger sequence after which bidding ends; must lie in the future.
    pub deadline: u64,
    /// Ledger sequence at which bidding opens; may be the current ledger.
    pub start_date: u64,
    pub eval_criteria: String,
    /// One of `goods`, `services`, `works`.
    pub procurement_type: Symbol,
    pub location: String,
    /// One of `STX`, `USD`, `BTC`.
    pub currency: Symbol,
    pub min_bid: i128,
    pub max_bid: i128,
    pub department: String,
    pub category: String,
    pub quantity: u64,
    pub unit: String,
    pub delivery_time: u64,
    pub payment_terms: String,
    pub warranty_period: i64,
}

/// Immutable procurement terms, written once at creation.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProcurementTerms {
    pub id: u64,
    pub creator: Address,
    pub deadline: u64,
    pub start_date: u64,
    pub eval_criteria: String,
    pub procurement_type: ProcurementType,
    pub location: String,
    pub currency: Currency,
    pub min_bid: i128,
    pub max_bid: i128,
    pub department: String,
    pub category: String,
    pub quantity: u64,
    pub unit: String,
    pub delivery_time: u64,
    pub payment_terms: String,
    pub warranty_period: i64,
}

/// Mutable procurement state, rewritten on update and close.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProcurementState {
    pub title: String,
    pub description: String,
    pub budget: i128,
    pub timestamp: u64,
    pub status: ProcurementStatus,
}

/// Full on-chain representation of a procurement record.
///
/// Used as the public API return type; reconstructed internally from
/// the split `ProcurementTerms` + `ProcurementState` storage entries.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Procurement {
    /// Dense identifier, assigned from 0 upward.
    pub id: u64,
    /// Unique among all records.
    pub title: String,
    pub description: String,
    pub budget: i128,
    pub deadline: u64,
    pub start_date: u64,
    pub eval_criteria: String,
    /// Ledger sequence of creation, or of the latest update.
    pub timestamp: u64,
    /// The only address allowed to update or close the record.
    pub creator: Address,
    pub procurement_type: ProcurementType,
    pub location: String,
    pub currency: Currency,
    pub status: ProcurementStatus,
    pub min_bid: i128,
    pub max_bid: i128,
    pub department: String,
    pub category: String,
    pub quantity: u64,
    pub unit: String,
    pub delivery_time: u64,
    pub payment_terms: String,
    pub warranty_period: i64,
}

impl Procurement {
    pub fn from_parts(terms: ProcurementTerms, state: ProcurementState) -> Self {
        Procurement {
            id: terms.id,
            title: state.title,
            description: state.description,
            budget: state.budget,
            deadline: terms.deadline,
            start_date: terms.start_date,
            eval_criteria: terms.eval_criteria,
            timestamp: state.timestamp,
            creator: terms.creator,
            procurement_type: terms.procurement_type,
            location: terms.location,
            currency: terms.currency,
            status: state.status,
            min_bid: terms.min_bid,
            max_bid: terms.max_bid,
            department: terms.department,
            category: terms.category,
            quantity: terms.quantity,
            unit: terms.unit,
            delivery_time: terms.delivery_time,
            payment_terms: terms.payment_terms,
            warranty_period: terms.warranty_period,
        }
    }
}

/// The latest update applied to a procurement.
///
/// One slot per procurement: each successful update overwrites it. Earlier
/// updates are not retained.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProcurementUpdate {
    pub title: String,
    pub description: String,
    pub budget: i128,
    pub timestamp: u64,
    pub updater: Address,
}

/// Registry-wide configuration, held as a single instance-storage entry.
///
/// Loaded into an owned value at the start of an entry point and written back
/// only when the entry point succeeds.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RegistryConfig {
    pub admin: Address,
    /// Contract answering `is_verified_authority`.
    pub verifier: Address,
    /// Token the creation fee is paid in.
    pub fee_token: Address,
    /// Id the next created procurement receives; equals the number created so far.
    pub next_id: u64,
    pub max_procurements: u32,
    pub creation_fee: i128,
    /// Fee recipient. Set at most once.
    pub authority_contract: Option<Address>,
}
