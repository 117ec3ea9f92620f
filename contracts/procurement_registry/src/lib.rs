//! # Procurement Registry Contract
//!
//! A single authoritative ledger of procurement records. Each record is
//! created by a verified authority (who pays a creation fee to the configured
//! authority contract), may be updated by its creator, and is eventually
//! closed by its creator.
//!
//! | Phase        | Entry Point(s)                                                   |
//! |--------------|------------------------------------------------------------------|
//! | Bootstrap    | [`ProcurementRegistry::init`], `set_max_procurements`            |
//! | Authority    | `set_authority_contract`, `set_creation_fee`, `is_authorized`    |
//! | Lifecycle    | `create_procurement`, `update_procurement`, `close_procurement`  |
//! | Queries      | `get_procurement`, `get_procurement_update`, `get_procurement_count`, `check_procurement_existence`, `get_procurement_by_title` |
//!
//! ## Architecture
//!
//! Field checks live in [`validation`], permission checks in [`authority`],
//! and storage access in [`storage`]. This file sequences them: for creation
//! the order is validate → authorize → title uniqueness → authority contract
//! configured → fee transfer → commit. Each step's error is observable by
//! callers, so the order must not change.
//!
//! Soroban executes one invocation at a time and rolls back every write of an
//! invocation that returns an error, so the record, the title index, the id
//! counter and the fee transfer commit together or not at all.

#![no_std]

use soroban_sdk::{contract, contracterror, contractimpl, token, Address, Env, String};

pub mod authority;
mod events;
mod storage;
mod types;
pub mod validation;

#[cfg(test)]
mod invariants;
#[cfg(test)]
mod test_utils;
#[cfg(test)]
mod test_validation;

pub use types::{
    Currency, Procurement, ProcurementParams, ProcurementStatus, ProcurementType,
    ProcurementUpdate, RegistryConfig,
};

use types::{ProcurementState, ProcurementTerms};

/// Capacity cap applied at `init`.
pub const DEFAULT_MAX_PROCUREMENTS: u32 = 10_000;
/// Creation fee applied at `init`, in fee-token base units.
pub const DEFAULT_CREATION_FEE: i128 = 5_000;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    NotAuthorized              = 100,
    InvalidDescription         = 101,
    InvalidBudget              = 102,
    InvalidDeadline            = 103,
    InvalidStartDate           = 104,
    InvalidEvalCriteria        = 105,
    AlreadyExists              = 106,
    NotFound                   = 107,
    AuthorityNotConfigured     = 109,
    InvalidMinBid              = 110,
    InvalidMaxBid              = 111,
    InvalidTitle               = 113,
    CapacityExceeded           = 114,
    InvalidProcurementType     = 115,
    InvalidLocation            = 116,
    InvalidCurrency            = 117,
    InvalidStatusTransition    = 118,
    InvalidDepartment          = 119,
    InvalidCategory            = 120,
    InvalidQuantity            = 121,
    InvalidUnit                = 122,
    InvalidDeliveryTime        = 123,
    InvalidPaymentTerms        = 124,
    InvalidWarrantyPeriod      = 125,
    AuthorityAlreadyConfigured = 126,
    InvalidAuthorityPrincipal  = 127,
    TitleConflict              = 128,
    TransferFailed             = 129,
    ConfigNotSet               = 130,
    AlreadyInitialized         = 131,
    NotInitialized             = 132,
    InvalidFee                 = 133,
}

/// Current logical time: the ledger sequence number.
fn now(env: &Env) -> u64 {
    u64::from(env.ledger().sequence())
}

fn config(env: &Env) -> Result<RegistryConfig, Error> {
    storage::load_config(env).ok_or(Error::NotInitialized)
}

#[contract]
pub struct ProcurementRegistry;

#[contractimpl]
impl ProcurementRegistry {
    // ─────────────────────────────────────────────────────────
    // Bootstrap
    // ─────────────────────────────────────────────────────────

    /// Initialise the registry.
    ///
    /// - `admin` may later configure the authority contract and capacity.
    /// - `verifier` answers `is_verified_authority(principal) -> bool`.
    /// - `fee_token` is the token creation fees are paid in.
    ///
    /// Subsequent calls fail with `Error::AlreadyInitialized`.
    pub fn init(env: Env, admin: Address, verifier: Address, fee_token: Address) -> Result<(), Error> {
        admin.require_auth();
        if storage::has_config(&env) {
            return Err(Error::AlreadyInitialized);
        }
        storage::save_config(
            &env,
            &RegistryConfig {
                admin,
                verifier,
                fee_token,
                next_id: 0,
                max_procurements: DEFAULT_MAX_PROCUREMENTS,
                creation_fee: DEFAULT_CREATION_FEE,
                authority_contract: None,
            },
        );
        Ok(())
    }

    /// Change the capacity cap. Admin only.
    pub fn set_max_procurements(env: Env, admin: Address, max: u32) -> Result<(), Error> {
        let mut config = config(&env)?;
        authority::require_admin(&config, &admin)?;
        config.max_procurements = max;
        storage::save_config(&env, &config);
        Ok(())
    }

    // ─────────────────────────────────────────────────────────
    // Authority configuration
    // ─────────────────────────────────────────────────────────

    /// Configure the address creation fees are paid to.
    ///
    /// Set-once: a second call fails with `AuthorityAlreadyConfigured` even
    /// for a different address, and the first value is kept. The burn
    /// address and the registry itself are rejected.
    pub fn set_authority_contract(env: Env, admin: Address, principal: Address) -> Result<(), Error> {
        let mut config = config(&env)?;
        authority::require_admin(&config, &admin)?;
        authority::set_authority_contract(&env, &mut config, principal.clone())?;
        storage::save_config(&env, &config);
        events::emit_authority_configured(&env, principal);
        Ok(())
    }

    /// Change the creation fee. Requires a configured authority contract,
    /// which must authorize the change.
    pub fn set_creation_fee(env: Env, fee: i128) -> Result<(), Error> {
        let mut config = config(&env)?;
        authority::set_creation_fee(&mut config, fee)?;
        storage::save_config(&env, &config);
        events::emit_creation_fee_set(&env, fee);
        Ok(())
    }

    /// Return `true` if `principal` may create procurements.
    pub fn is_authorized(env: Env, principal: Address) -> Result<bool, Error> {
        let config = config(&env)?;
        Ok(authority::is_authorized(&env, &config, &principal))
    }

    // ─────────────────────────────────────────────────────────
    // Lifecycle
    // ─────────────────────────────────────────────────────────

    /// Create a procurement and return its id.
    ///
    /// `creator` must be a verified authority and pays the current creation
    /// fee to the authority contract.
    pub fn create_procurement(
        env: Env,
        creator: Address,
        params: ProcurementParams,
    ) -> Result<u64, Error> {
        creator.require_auth();
        let mut config = config(&env)?;
        let now = now(&env);

        let (procurement_type, currency) =
            validation::validate_params(&params, config.next_id, config.max_procurements, now)?;

        if !authority::is_authorized(&env, &config, &creator) {
            return Err(Error::NotAuthorized);
        }
        // Duplicate title is reported ahead of a missing authority contract.
        if storage::title_exists(&env, &params.title) {
            return Err(Error::AlreadyExists);
        }
        let recipient = config
            .authority_contract
            .clone()
            .ok_or(Error::AuthorityNotConfigured)?;

        let fee = config.creation_fee;
        let token_client = token::Client::new(&env, &config.fee_token);
        match token_client.try_transfer(&creator, &recipient, &fee) {
            Ok(Ok(())) => {}
            _ => return Err(Error::TransferFailed),
        }

        let id = config.next_id;
        let terms = ProcurementTerms {
            id,
            creator: creator.clone(),
            deadline: params.deadline,
            start_date: params.start_date,
            eval_criteria: params.eval_criteria,
            procurement_type,
            location: params.location,
            currency,
            min_bid: params.min_bid,
            max_bid: params.max_bid,
            department: params.department,
            category: params.category,
            quantity: params.quantity,
            unit: params.unit,
            delivery_time: params.delivery_time,
            payment_terms: params.payment_terms,
            warranty_period: params.warranty_period,
        };
        let state = ProcurementState {
            title: params.title.clone(),
            description: params.description,
            budget: params.budget,
            timestamp: now,
            status: ProcurementStatus::Open,
        };
        storage::save_procurement(&env, &terms, &state);

        config.next_id = id + 1;
        storage::save_config(&env, &config);

        events::emit_procurement_created(
            &env,
            events::ProcurementCreated {
                procurement_id: id,
                creator,
                title: params.title,
                budget: params.budget,
                fee,
            },
        );
        Ok(id)
    }

    /// Replace title, description and budget of procurement `id`.
    ///
    /// Only the creator may update. Keeping the current title is allowed;
    /// taking another record's title fails with `TitleConflict`. The
    /// latest-update slot for `id` is overwritten.
    pub fn update_procurement(
        env: Env,
        caller: Address,
        id: u64,
        title: String,
        description: String,
        budget: i128,
    ) -> Result<(), Error> {
        caller.require_auth();
        let terms = storage::load_procurement_terms(&env, id).ok_or(Error::NotFound)?;
        let mut state = storage::load_procurement_state(&env, id).ok_or(Error::NotFound)?;
        if caller != terms.creator {
            return Err(Error::NotAuthorized);
        }

        validation::validate_update(&title, &description, budget)?;

        if let Some(holder) = storage::find_by_title(&env, &title) {
            if holder != id {
                return Err(Error::TitleConflict);
            }
        }

        let now = now(&env);
        storage::rename_title(&env, id, &state.title, &title);
        state.title = title.clone();
        state.description = description.clone();
        state.budget = budget;
        state.timestamp = now;
        storage::save_procurement_state(&env, id, &state);

        storage::save_procurement_update(
            &env,
            id,
            &ProcurementUpdate {
                title: title.clone(),
                description,
                budget,
                timestamp: now,
                updater: caller.clone(),
            },
        );

        events::emit_procurement_updated(
            &env,
            events::ProcurementUpdated {
                procurement_id: id,
                updater: caller,
                title,
                budget,
            },
        );
        Ok(())
    }

    /// Move procurement `id` from `Open` to `Closed`. Only the creator may
    /// close, and closing an already closed record fails.
    pub fn close_procurement(env: Env, caller: Address, id: u64) -> Result<(), Error> {
        caller.require_auth();
        let terms = storage::load_procurement_terms(&env, id).ok_or(Error::NotFound)?;
        let mut state = storage::load_procurement_state(&env, id).ok_or(Error::NotFound)?;
        if caller != terms.creator {
            return Err(Error::NotAuthorized);
        }
        if state.status != ProcurementStatus::Open {
            return Err(Error::InvalidStatusTransition);
        }

        state.status = ProcurementStatus::Closed;
        storage::save_procurement_state(&env, id, &state);

        events::emit_procurement_closed(&env, id, caller);
        Ok(())
    }

    // ─────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────

    pub fn get_procurement(env: Env, id: u64) -> Option<Procurement> {
        storage::load_procurement(&env, id)
    }

    /// The latest update applied to `id`, if it was ever updated.
    pub fn get_procurement_update(env: Env, id: u64) -> Option<ProcurementUpdate> {
        storage::load_procurement_update(&env, id)
    }

    /// Number of procurements ever created, closed ones included.
    pub fn get_procurement_count(env: Env) -> u64 {
        storage::load_config(&env).map_or(0, |config| config.next_id)
    }

    pub fn check_procurement_existence(env: Env, title: String) -> bool {
        storage::title_exists(&env, &title)
    }

    pub fn get_procurement_by_title(env: Env, title: String) -> Option<u64> {
        storage::find_by_title(&env, &title)
    }

    pub fn get_creation_fee(env: Env) -> Result<i128, Error> {
        Ok(config(&env)?.creation_fee)
    }

    pub fn get_authority_contract(env: Env) -> Option<Address> {
        storage::load_config(&env).and_then(|config| config.authority_contract)
    }

    pub fn get_max_procurements(env: Env) -> Result<u32, Error> {
        Ok(config(&env)?.max_procurements)
    }
}
