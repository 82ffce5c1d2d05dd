//! Dispatch resolution in a process where no test switches tokens off.
//!
//! Kept out of the lib test binary: its token-permutation tests disable
//! tiers while they run, which could race with the first resolution.

use chanswap::{Capabilities, Tier, selected_tier};

#[test]
fn binds_to_first_supported_tier_in_priority_order() {
    let caps = Capabilities::detect();
    let tier = selected_tier();
    assert_eq!(tier, caps.best_tier());

    // Nothing wider than the selection is supported.
    for wider in Tier::PRIORITY.into_iter().filter(|&t| t > tier) {
        assert!(!caps.supports(wider), "{wider} supported but {tier} selected");
    }
    assert!(caps.supports(tier));
}

#[test]
fn selection_survives_repeated_calls() {
    let first = selected_tier();
    let again: Vec<Tier> = (0..32).map(|_| selected_tier()).collect();
    assert!(again.iter().all(|&t| t == first));
}
