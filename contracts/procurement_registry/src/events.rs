//! Contract events.
//!
//! | Topic                | Data                   |
//! |----------------------|------------------------|
//! | `("created", id)`    | [`ProcurementCreated`] |
//! | `("updated", id)`    | [`ProcurementUpdated`] |
//! | `("closed", id)`     | [`ProcurementClosed`]  |
//! | `("auth_set",)`      | [`AuthorityConfigured`]|
//! | `("fee_set",)`       | [`CreationFeeSet`]     |
//!
//! The off-chain indexer in `backend/indexer` decodes these topics.

use soroban_sdk::{contracttype, symbol_short, Address, Env, String};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProcurementCreated {
    pub procurement_id: u64,
    pub creator: Address,
    pub title: String,
    pub budget: i128,
    /// Creation fee actually transferred.
    pub fee: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProcurementUpdated {
    pub procurement_id: u64,
    pub updater: Address,
    pub title: String,
    pub budget: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProcurementClosed {
    pub procurement_id: u64,
    pub closer: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuthorityConfigured {
    pub authority: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CreationFeeSet {
    pub fee: i128,
}

pub fn emit_procurement_created(env: &Env, event: ProcurementCreated) {
    env.events()
        .publish((symbol_short!("created"), event.procurement_id), event);
}

pub fn emit_procurement_updated(env: &Env, event: ProcurementUpdated) {
    env.events()
        .publish((symbol_short!("updated"), event.procurement_id), event);
}

pub fn emit_procurement_closed(env: &Env, procurement_id: u64, closer: Address) {
    env.events().publish(
        (symbol_short!("closed"), procurement_id),
        ProcurementClosed {
            procurement_id,
            closer,
        },
    );
}

pub fn emit_authority_configured(env: &Env, authority: Address) {
    env.events()
        .publish((symbol_short!("auth_set"),), AuthorityConfigured { authority });
}

pub fn emit_creation_fee_set(env: &Env, fee: i128) {
    env.events()
        .publish((symbol_short!("fee_set"),), CreationFeeSet { fee });
}
