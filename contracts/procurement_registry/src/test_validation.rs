extern crate std;

use soroban_sdk::symbol_short;

use crate::invariants::assert_text_bounds;
use crate::test_utils::{
    repeated, setup_with_authority, text, text_of_len, valid_params, Setup,
};
use crate::validation::{
    char_count, MAX_CATEGORY_LEN, MAX_DEPARTMENT_LEN, MAX_DESCRIPTION_LEN,
    MAX_EVAL_CRITERIA_LEN, MAX_LOCATION_LEN, MAX_PAYMENT_TERMS_LEN, MAX_TITLE_LEN, MAX_UNIT_LEN,
};
use crate::{Currency, Error, ProcurementParams, ProcurementType};

fn rejects(s: &Setup, params: &ProcurementParams, expected: Error) {
    assert_eq!(s.create_err(params), expected);
    assert_eq!(s.client.get_procurement_count(), 0);
}

#[test]
fn test_each_field_reports_its_own_error() {
    let s = setup_with_authority();
    let env = &s.env;

    let cases: [(fn(&mut ProcurementParams, &soroban_sdk::Env), Error); 18] = [
        (|p, e| p.title = text(e, ""), Error::InvalidTitle),
        (|p, e| p.description = text(e, ""), Error::InvalidDescription),
        (|p, _| p.budget = 0, Error::InvalidBudget),
        (|p, _| p.deadline = 0, Error::InvalidDeadline),
        (|p, e| p.eval_criteria = text(e, ""), Error::InvalidEvalCriteria),
        (
            |p, _| p.procurement_type = symbol_short!("invalid"),
            Error::InvalidProcurementType,
        ),
        (|p, e| p.location = text(e, ""), Error::InvalidLocation),
        (|p, _| p.currency = symbol_short!("EUR"), Error::InvalidCurrency),
        (|p, _| p.min_bid = 0, Error::InvalidMinBid),
        (|p, _| p.max_bid = -5, Error::InvalidMaxBid),
        (|p, e| p.department = text(e, ""), Error::InvalidDepartment),
        (|p, e| p.category = text(e, ""), Error::InvalidCategory),
        (|p, _| p.quantity = 0, Error::InvalidQuantity),
        (|p, e| p.unit = text(e, ""), Error::InvalidUnit),
        (|p, _| p.delivery_time = 0, Error::InvalidDeliveryTime),
        (|p, e| p.payment_terms = text(e, ""), Error::InvalidPaymentTerms),
        (|p, _| p.warranty_period = -1, Error::InvalidWarrantyPeriod),
        (|p, _| p.budget = -1000, Error::InvalidBudget),
    ];

    for (mutate, expected) in cases {
        let mut params = valid_params(env, "Field");
        mutate(&mut params, env);
        rejects(&s, &params, expected);
    }
}

#[test]
fn test_start_date_in_past_rejected() {
    let s = setup_with_authority();
    s.set_ledger(10);
    let mut params = valid_params(&s.env, "Past");
    params.start_date = 9;
    rejects(&s, &params, Error::InvalidStartDate);
}

#[test]
fn test_deadline_must_be_strictly_future() {
    let s = setup_with_authority();
    s.set_ledger(10);

    let mut params = valid_params(&s.env, "Edge");
    params.start_date = 10;
    params.deadline = 10;
    rejects(&s, &params, Error::InvalidDeadline);

    // Start date equal to the current ledger is accepted.
    params.deadline = 11;
    assert_eq!(s.create(&params), 0);
}

#[test]
fn test_text_length_limits() {
    let s = setup_with_authority();
    let env = &s.env;

    let limits: [(fn(&mut ProcurementParams, soroban_sdk::String), u32, Error); 8] = [
        (|p, v| p.title = v, MAX_TITLE_LEN, Error::InvalidTitle),
        (|p, v| p.description = v, MAX_DESCRIPTION_LEN, Error::InvalidDescription),
        (|p, v| p.eval_criteria = v, MAX_EVAL_CRITERIA_LEN, Error::InvalidEvalCriteria),
        (|p, v| p.location = v, MAX_LOCATION_LEN, Error::InvalidLocation),
        (|p, v| p.department = v, MAX_DEPARTMENT_LEN, Error::InvalidDepartment),
        (|p, v| p.category = v, MAX_CATEGORY_LEN, Error::InvalidCategory),
        (|p, v| p.unit = v, MAX_UNIT_LEN, Error::InvalidUnit),
        (|p, v| p.payment_terms = v, MAX_PAYMENT_TERMS_LEN, Error::InvalidPaymentTerms),
    ];

    for (i, (set, max, expected)) in limits.into_iter().enumerate() {
        let mut too_long = valid_params(env, &std::format!("TooLong{}", i));
        set(&mut too_long, text_of_len(env, max as usize + 1));
        rejects(&s, &too_long, expected);

        // Limits count characters: "é" is two bytes.
        let mut too_wide = valid_params(env, &std::format!("TooWide{}", i));
        set(&mut too_wide, repeated(env, "é", max as usize + 1));
        rejects(&s, &too_wide, expected);
    }

    // Exactly at the limit is accepted; ids keep counting from 0.
    for (i, (set, max, _)) in limits.into_iter().enumerate() {
        let mut at_limit = valid_params(env, &std::format!("AtLimit{}", i));
        set(&mut at_limit, text_of_len(env, max as usize));
        assert_eq!(s.create(&at_limit), i as u64);
    }
    for (i, (set, max, _)) in limits.into_iter().enumerate() {
        let mut at_limit = valid_params(env, &std::format!("WideAtLimit{}", i));
        set(&mut at_limit, repeated(env, "é", max as usize));
        assert_eq!(s.create(&at_limit), (limits.len() + i) as u64);
    }
}

#[test]
fn test_multibyte_title_counts_characters() {
    let s = setup_with_authority();
    let title = "é".repeat(150);

    assert_eq!(s.create(&valid_params(&s.env, &title)), 0);

    let record = s.client.get_procurement(&0).unwrap();
    assert_eq!(record.title.len(), 300);
    assert_eq!(char_count(&record.title), Some(150));
    assert_text_bounds(&record);

    // Four-byte characters: 200 fit, 201 do not.
    let mut params = valid_params(&s.env, "Emoji");
    params.description = repeated(&s.env, "🦀", 200);
    assert_eq!(s.create(&params), 1);
    let mut params = valid_params(&s.env, &"🦀".repeat(201));
    params.description = text(&s.env, "Emoji title");
    assert_eq!(s.create_err(&params), Error::InvalidTitle);
}

#[test]
fn test_invalid_utf8_text_rejected() {
    let s = setup_with_authority();
    let mut params = valid_params(&s.env, "Bytes");
    params.location = soroban_sdk::String::from_bytes(&s.env, &[0x66, 0xff, 0x66]);
    rejects(&s, &params, Error::InvalidLocation);
}

#[test]
fn test_first_failing_rule_wins() {
    let s = setup_with_authority();
    let env = &s.env;

    let mut params = valid_params(env, "");
    params.budget = 0;
    params.warranty_period = -1;
    rejects(&s, &params, Error::InvalidTitle);

    let mut params = valid_params(env, "Order");
    params.deadline = 0;
    params.currency = symbol_short!("EUR");
    rejects(&s, &params, Error::InvalidDeadline);

    let mut params = valid_params(env, "Order");
    params.procurement_type = symbol_short!("rental");
    params.location = text(env, "");
    rejects(&s, &params, Error::InvalidProcurementType);

    let mut params = valid_params(env, "Order");
    params.min_bid = 0;
    params.max_bid = 0;
    rejects(&s, &params, Error::InvalidMinBid);

    let mut params = valid_params(env, "Order");
    params.unit = text(env, "");
    params.payment_terms = text(env, "");
    rejects(&s, &params, Error::InvalidUnit);
}

#[test]
fn test_capacity_checked_before_fields() {
    let s = setup_with_authority();
    s.client.set_max_procurements(&s.admin, &0);

    let mut params = valid_params(&s.env, "");
    params.budget = 0;
    rejects(&s, &params, Error::CapacityExceeded);
}

#[test]
fn test_symbols_parse_into_enums() {
    let s = setup_with_authority();
    let env = &s.env;

    let mut works = valid_params(env, "Works");
    works.procurement_type = symbol_short!("works");
    works.currency = symbol_short!("BTC");
    let id = s.create(&works);

    let p = s.client.get_procurement(&id).unwrap();
    assert_eq!(p.procurement_type, ProcurementType::Works);
    assert_eq!(p.currency, Currency::Btc);

    assert_eq!(
        ProcurementType::from_symbol(&symbol_short!("services")),
        Some(ProcurementType::Services)
    );
    assert_eq!(Currency::from_symbol(&symbol_short!("USD")), Some(Currency::Usd));
    assert_eq!(Currency::from_symbol(&symbol_short!("usd")), None);
}

#[test]
fn test_zero_warranty_accepted() {
    let s = setup_with_authority();
    let mut params = valid_params(&s.env, "NoWarranty");
    params.warranty_period = 0;
    assert_eq!(s.create(&params), 0);
}

#[test]
fn test_bids_not_cross_checked() {
    let s = setup_with_authority();
    let mut params = valid_params(&s.env, "Inverted");
    params.min_bid = 2000;
    params.max_bid = 100;
    assert_eq!(s.create(&params), 0);
}
