//! # Validation
//!
//! Stateless field checks for `create_procurement` and `update_procurement`.
//!
//! [`validate_params`] stops at the first failing rule and returns that rule's
//! error. Callers rely on which error surfaces for a malformed request, so the
//! order below is part of the contract's interface:
//!
//! 1. capacity (`next_id < max_procurements`)
//! 2. title, description, budget
//! 3. deadline (strictly future), start date (not past)
//! 4. evaluation criteria, procurement type, location, currency
//! 5. min bid, max bid
//! 6. department, category, quantity, unit, delivery time, payment terms,
//!    warranty period

use soroban_sdk::String;

use crate::types::{Currency, ProcurementParams, ProcurementType};
use crate::Error;

pub const MAX_TITLE_LEN: u32 = 200;
pub const MAX_DESCRIPTION_LEN: u32 = 1000;
pub const MAX_EVAL_CRITERIA_LEN: u32 = 500;
pub const MAX_LOCATION_LEN: u32 = 100;
pub const MAX_DEPARTMENT_LEN: u32 = 100;
pub const MAX_CATEGORY_LEN: u32 = 100;
pub const MAX_UNIT_LEN: u32 = 50;
pub const MAX_PAYMENT_TERMS_LEN: u32 = 200;

/// Largest encoding of the longest accepted text: four UTF-8 bytes per character.
const MAX_TEXT_BYTES: usize = MAX_DESCRIPTION_LEN as usize * 4;

/// Number of characters in `text`, or `None` if it is not valid UTF-8 or
/// is longer than any field accepts.
pub fn char_count(text: &String) -> Option<u32> {
    let len = text.len() as usize;
    if len > MAX_TEXT_BYTES {
        return None;
    }
    let mut buf = [0u8; MAX_TEXT_BYTES];
    let bytes = &mut buf[..len];
    text.copy_into_slice(bytes);
    core::str::from_utf8(bytes)
        .ok()
        .map(|s| s.chars().count() as u32)
}

/// Non-empty and at most `max` characters long.
fn bounded(text: &String, max: u32) -> bool {
    if text.len() > max.saturating_mul(4) {
        return false;
    }
    matches!(char_count(text), Some(n) if n > 0 && n <= max)
}

fn check(ok: bool, err: Error) -> Result<(), Error> {
    if ok {
        Ok(())
    } else {
        Err(err)
    }
}

pub fn validate_title(title: &String) -> Result<(), Error> {
    check(bounded(title, MAX_TITLE_LEN), Error::InvalidTitle)
}

pub fn validate_description(description: &String) -> Result<(), Error> {
    check(
        bounded(description, MAX_DESCRIPTION_LEN),
        Error::InvalidDescription,
    )
}

pub fn validate_budget(budget: i128) -> Result<(), Error> {
    check(budget > 0, Error::InvalidBudget)
}

/// Run every creation rule in order against `params`.
///
/// Returns the parsed `(procurement_type, currency)` pair on success so the
/// caller does not re-parse the symbols.
pub fn validate_params(
    params: &ProcurementParams,
    next_id: u64,
    max_procurements: u32,
    now: u64,
) -> Result<(ProcurementType, Currency), Error> {
    check(next_id < u64::from(max_procurements), Error::CapacityExceeded)?;
    validate_title(&params.title)?;
    validate_description(&params.description)?;
    validate_budget(params.budget)?;
    check(params.deadline > now, Error::InvalidDeadline)?;
    check(params.start_date >= now, Error::InvalidStartDate)?;
    check(
        bounded(&params.eval_criteria, MAX_EVAL_CRITERIA_LEN),
        Error::InvalidEvalCriteria,
    )?;
    let procurement_type = ProcurementType::from_symbol(&params.procurement_type)
        .ok_or(Error::InvalidProcurementType)?;
    check(
        bounded(&params.location, MAX_LOCATION_LEN),
        Error::InvalidLocation,
    )?;
    let currency = Currency::from_symbol(&params.currency).ok_or(Error::InvalidCurrency)?;
    check(params.min_bid > 0, Error::InvalidMinBid)?;
    check(params.max_bid > 0, Error::InvalidMaxBid)?;
    check(
        bounded(&params.department, MAX_DEPARTMENT_LEN),
        Error::InvalidDepartment,
    )?;
    check(
        bounded(&params.category, MAX_CATEGORY_LEN),
        Error::InvalidCategory,
    )?;
    check(params.quantity > 0, Error::InvalidQuantity)?;
    check(bounded(&params.unit, MAX_UNIT_LEN), Error::InvalidUnit)?;
    check(params.delivery_time > 0, Error::InvalidDeliveryTime)?;
    check(
        bounded(&params.payment_terms, MAX_PAYMENT_TERMS_LEN),
        Error::InvalidPaymentTerms,
    )?;
    check(params.warranty_period >= 0, Error::InvalidWarrantyPeriod)?;
    Ok((procurement_type, currency))
}

/// Checks applied to `update_procurement` arguments.
pub fn validate_update(title: &String, description: &String, budget: i128) -> Result<(), Error> {
    validate_title(title)?;
    validate_description(description)?;
    validate_budget(budget)
}
