//! # Authority gate
//!
//! Everything that decides *who* may mutate the registry:
//!
//! - [`is_authorized`] asks the external verifier contract whether a principal
//!   is a verified authority. Only creation is gated this way; update and
//!   close compare the caller against the record's creator instead.
//! - [`set_authority_contract`] configures the fee recipient, first write wins.
//! - [`set_creation_fee`] is refused until an authority contract exists.
//!
//! The gate never writes storage itself: it mutates the owned
//! [`RegistryConfig`] it is handed, and the entry point persists it.

use soroban_sdk::{contractclient, Address, Env};

use crate::types::RegistryConfig;
use crate::Error;

/// The all-zero ed25519 account. Nobody holds its key, so fees sent there burn.
pub const BURN_ADDRESS: &str = "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF";

/// Interface the registry expects from the authority-verification contract.
#[contractclient(name = "AuthorityVerifierClient")]
pub trait AuthorityVerifier {
    fn is_verified_authority(env: Env, principal: Address) -> bool;
}

/// `true` if the configured verifier vouches for `principal`.
///
/// A verifier call that traps or returns something other than a bool counts
/// as "not verified".
pub fn is_authorized(env: &Env, config: &RegistryConfig, principal: &Address) -> bool {
    let verifier = AuthorityVerifierClient::new(env, &config.verifier);
    matches!(verifier.try_is_verified_authority(principal), Ok(Ok(true)))
}

/// Require that `caller` is the registry admin.
pub fn require_admin(config: &RegistryConfig, caller: &Address) -> Result<(), Error> {
    caller.require_auth();
    if *caller != config.admin {
        return Err(Error::NotAuthorized);
    }
    Ok(())
}

fn is_sentinel(env: &Env, principal: &Address) -> bool {
    *principal == Address::from_str(env, BURN_ADDRESS)
        || *principal == env.current_contract_address()
}

/// Record `principal` as the fee recipient. Succeeds at most once.
pub fn set_authority_contract(
    env: &Env,
    config: &mut RegistryConfig,
    principal: Address,
) -> Result<(), Error> {
    if is_sentinel(env, &principal) {
        return Err(Error::InvalidAuthorityPrincipal);
    }
    if config.authority_contract.is_some() {
        return Err(Error::AuthorityAlreadyConfigured);
    }
    config.authority_contract = Some(principal);
    Ok(())
}

/// Change the creation fee. The configured authority contract must sign.
pub fn set_creation_fee(config: &mut RegistryConfig, fee: i128) -> Result<(), Error> {
    let authority = config
        .authority_contract
        .as_ref()
        .ok_or(Error::ConfigNotSet)?;
    authority.require_auth();
    if fee < 0 {
        return Err(Error::InvalidFee);
    }
    config.creation_fee = fee;
    Ok(())
}
