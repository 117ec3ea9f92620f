#![allow(dead_code)]

extern crate std;

use crate::types::{Procurement, ProcurementStatus};
use crate::validation::{char_count, MAX_DESCRIPTION_LEN, MAX_TITLE_LEN};
use crate::ProcurementRegistryClient;

/// INV-1: Budget, bids, quantity and delivery time stay positive.
pub fn assert_amounts_positive(procurement: &Procurement) {
    assert!(
        procurement.budget > 0,
        "INV-1 violated: procurement {} has non-positive budget ({})",
        procurement.id,
        procurement.budget
    );
    assert!(procurement.min_bid > 0 && procurement.max_bid > 0);
    assert!(procurement.quantity > 0 && procurement.delivery_time > 0);
    assert!(procurement.warranty_period >= 0);
}

/// INV-2: Title and description stay within their length bounds.
pub fn assert_text_bounds(procurement: &Procurement) {
    let title = char_count(&procurement.title).unwrap_or(0);
    assert!(
        title > 0 && title <= MAX_TITLE_LEN,
        "INV-2 violated: procurement {} title length {}",
        procurement.id,
        title
    );
    let description = char_count(&procurement.description).unwrap_or(0);
    assert!(
        description > 0 && description <= MAX_DESCRIPTION_LEN,
        "INV-2 violated: procurement {} description length {}",
        procurement.id,
        description
    );
}

/// INV-3: The deadline lies strictly after the creation ledger.
pub fn assert_deadline_after_creation(procurement: &Procurement, created_at: u64) {
    assert!(
        procurement.deadline > created_at,
        "INV-3 violated: procurement {} deadline {} not after creation {}",
        procurement.id,
        procurement.deadline,
        created_at
    );
}

/// INV-4: Procurement IDs are sequential starting from 0.
pub fn assert_sequential_ids(procurements: &[Procurement]) {
    for (i, procurement) in procurements.iter().enumerate() {
        assert_eq!(
            procurement.id, i as u64,
            "INV-4 violated: expected id {}, got {}",
            i, procurement.id
        );
    }
}

/// INV-5: Only `Open -> Closed` is a valid transition.
pub fn assert_valid_status_transition(from: &ProcurementStatus, to: &ProcurementStatus) {
    assert!(
        matches!((from, to), (ProcurementStatus::Open, ProcurementStatus::Closed)),
        "INV-5 violated: invalid status transition from {:?} to {:?}",
        from,
        to
    );
}

/// INV-6: Fields outside title/description/budget/timestamp/status never change.
pub fn assert_immutable_fields(original: &Procurement, current: &Procurement) {
    assert_eq!(original.id, current.id, "INV-6 violated: id changed");
    assert_eq!(
        original.creator, current.creator,
        "INV-6 violated: creator changed"
    );
    assert_eq!(original.deadline, current.deadline);
    assert_eq!(original.start_date, current.start_date);
    assert_eq!(original.eval_criteria, current.eval_criteria);
    assert_eq!(original.procurement_type, current.procurement_type);
    assert_eq!(original.location, current.location);
    assert_eq!(original.currency, current.currency);
    assert_eq!(original.min_bid, current.min_bid);
    assert_eq!(original.max_bid, current.max_bid);
    assert_eq!(original.department, current.department);
    assert_eq!(original.category, current.category);
    assert_eq!(original.quantity, current.quantity);
    assert_eq!(original.unit, current.unit);
    assert_eq!(original.delivery_time, current.delivery_time);
    assert_eq!(original.payment_terms, current.payment_terms);
    assert_eq!(original.warranty_period, current.warranty_period);
}

/// INV-7: The title index and the records agree, and titles are unique.
///
/// Reads every record `0..count` through the client.
pub fn assert_title_index_consistent(client: &ProcurementRegistryClient) {
    let count = client.get_procurement_count();
    let mut titles: std::vec::Vec<soroban_sdk::String> = std::vec::Vec::new();
    for id in 0..count {
        let procurement = client
            .get_procurement(&id)
            .unwrap_or_else(|| panic!("INV-7 violated: procurement {} missing", id));
        assert_eq!(
            client.get_procurement_by_title(&procurement.title),
            Some(id),
            "INV-7 violated: title index does not point at {}",
            id
        );
        assert!(
            !titles.contains(&procurement.title),
            "INV-7 violated: duplicate title on procurement {}",
            id
        );
        titles.push(procurement.title);
    }
}

/// Run all stateless record invariants.
pub fn assert_all_procurement_invariants(procurement: &Procurement) {
    assert_amounts_positive(procurement);
    assert_text_bounds(procurement);
}
