//! # Storage
//!
//! Provides typed helpers over Soroban's two storage tiers used by the registry:
//!
//! ## Instance storage (contract-lifetime TTL)
//!
//! | Key      | Type             | Description                                   |
//! |----------|------------------|-----------------------------------------------|
//! | `Config` | `RegistryConfig` | id counter, cap, fee, authority, collaborators |
//!
//! Instance TTL is bumped by **7 days** whenever it falls below 1 day remaining.
//!
//! ## Persistent storage (per-entry TTL)
//!
//! | Key          | Type                | Description                         |
//! |--------------|---------------------|-------------------------------------|
//! | `Terms(id)`  | `ProcurementTerms`  | Immutable procurement terms         |
//! | `State(id)`  | `ProcurementState`  | Mutable title/description/budget/status |
//! | `Update(id)` | `ProcurementUpdate` | Latest-update slot (overwritten)    |
//! | `Title(s)`   | `u64`               | Title index: title → procurement id |
//!
//! Persistent TTL is bumped by **30 days** whenever it falls below 7 days remaining.
//!
//! ## Title index
//!
//! `Title(s)` must always agree with `State(id).title`: for every record,
//! `Title(state.title) == id`, and no entry points at a title that no record
//! carries. [`rename_title`] is the only place the index changes for an
//! existing record; it removes the old entry and inserts the new one in the
//! same invocation as the state write.

use soroban_sdk::{contracttype, Env, String};

use crate::types::{
    Procurement, ProcurementState, ProcurementTerms, ProcurementUpdate, RegistryConfig,
};

// ── TTL Constants ────────────────────────────────────────────────────

/// Approximate ledgers per day (~5 seconds per ledger).
pub(crate) const DAY_IN_LEDGERS: u32 = 17_280;

/// Instance storage: bump by 7 days when below 1 day remaining.
const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

/// Persistent storage: bump by 30 days when below 7 days remaining.
pub(crate) const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

// ── Storage Keys ─────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Registry configuration (Instance).
    Config,
    /// Immutable procurement terms keyed by ID (Persistent).
    Terms(u64),
    /// Mutable procurement state keyed by ID (Persistent).
    State(u64),
    /// Latest update keyed by ID (Persistent).
    Update(u64),
    /// Title index entry (Persistent).
    Title(String),
}

// ── Instance Storage Helpers ─────────────────────────────────────────

/// Extend instance storage TTL if it falls below the threshold.
fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

/// Load the registry configuration, or `None` before `init`.
pub fn load_config(env: &Env) -> Option<RegistryConfig> {
    let config = env.storage().instance().get(&DataKey::Config);
    if config.is_some() {
        bump_instance(env);
    }
    config
}

pub fn save_config(env: &Env, config: &RegistryConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    bump_instance(env);
}

// ── Persistent Storage Helpers ───────────────────────────────────────

/// Extend the TTL for a persistent storage key.
fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

/// Save terms, initial state and the title index entry for a new procurement.
pub fn save_procurement(env: &Env, terms: &ProcurementTerms, state: &ProcurementState) {
    let terms_key = DataKey::Terms(terms.id);
    let state_key = DataKey::State(terms.id);
    let title_key = DataKey::Title(state.title.clone());

    env.storage().persistent().set(&terms_key, terms);
    env.storage().persistent().set(&state_key, state);
    env.storage().persistent().set(&title_key, &terms.id);
    bump_persistent(env, &terms_key);
    bump_persistent(env, &state_key);
    bump_persistent(env, &title_key);
}

/// Load the full `Procurement` by combining terms and state.
pub fn load_procurement(env: &Env, id: u64) -> Option<Procurement> {
    let terms = load_procurement_terms(env, id)?;
    let state = load_procurement_state(env, id)?;
    Some(Procurement::from_parts(terms, state))
}

/// Load only the immutable procurement terms.
pub fn load_procurement_terms(env: &Env, id: u64) -> Option<ProcurementTerms> {
    let key = DataKey::Terms(id);
    let terms: ProcurementTerms = env.storage().persistent().get(&key)?;
    bump_persistent(env, &key);
    Some(terms)
}

/// Load only the mutable procurement state.
pub fn load_procurement_state(env: &Env, id: u64) -> Option<ProcurementState> {
    let key = DataKey::State(id);
    let state: ProcurementState = env.storage().persistent().get(&key)?;
    bump_persistent(env, &key);
    Some(state)
}

/// Save only the mutable procurement state (update and close).
pub fn save_procurement_state(env: &Env, id: u64, state: &ProcurementState) {
    let key = DataKey::State(id);
    env.storage().persistent().set(&key, state);
    bump_persistent(env, &key);
}

/// Overwrite the latest-update slot for `id`.
pub fn save_procurement_update(env: &Env, id: u64, update: &ProcurementUpdate) {
    let key = DataKey::Update(id);
    env.storage().persistent().set(&key, update);
    bump_persistent(env, &key);
}

pub fn load_procurement_update(env: &Env, id: u64) -> Option<ProcurementUpdate> {
    let key = DataKey::Update(id);
    let update: ProcurementUpdate = env.storage().persistent().get(&key)?;
    bump_persistent(env, &key);
    Some(update)
}

// ── Title Index ──────────────────────────────────────────────────────

/// Look up the procurement currently holding `title`.
pub fn find_by_title(env: &Env, title: &String) -> Option<u64> {
    let key = DataKey::Title(title.clone());
    let id: u64 = env.storage().persistent().get(&key)?;
    bump_persistent(env, &key);
    Some(id)
}

pub fn title_exists(env: &Env, title: &String) -> bool {
    let key = DataKey::Title(title.clone());
    let exists = env.storage().persistent().has(&key);
    if exists {
        bump_persistent(env, &key);
    }
    exists
}

/// Move procurement `id` from `old_title` to `new_title` in the index.
///
/// Renaming to the same title leaves a single entry pointing at `id`.
pub fn rename_title(env: &Env, id: u64, old_title: &String, new_title: &String) {
    let old_key = DataKey::Title(old_title.clone());
    let new_key = DataKey::Title(new_title.clone());
    env.storage().persistent().remove(&old_key);
    env.storage().persistent().set(&new_key, &id);
    bump_persistent(env, &new_key);
}
