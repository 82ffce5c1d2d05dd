//! Process-wide, write-once tier selection.
//!
//! The selected tier lives in a single atomic byte. Resolution may race on
//! first use; the first published value wins and every later read sees it.

use core::sync::atomic::{AtomicU8, Ordering};

use crate::{Capabilities, Tier};

const UNRESOLVED: u8 = u8::MAX;

static SELECTED: AtomicU8 = AtomicU8::new(UNRESOLVED);

/// The tier backing [`swap_in_place`](crate::swap_in_place) and
/// [`swap_to`](crate::swap_to) for the rest of the process.
///
/// Detection runs on the first call only.
#[inline]
pub fn selected_tier() -> Tier {
    match Tier::from_u8(SELECTED.load(Ordering::Relaxed)) {
        Some(tier) => tier,
        None => resolve(),
    }
}

#[cold]
#[inline(never)]
fn resolve() -> Tier {
    let tier = Capabilities::detect().best_tier();
    // A lone byte with no data published behind it: Relaxed is enough.
    match SELECTED.compare_exchange(
        UNRESOLVED,
        tier as u8,
        Ordering::Relaxed,
        Ordering::Relaxed,
    ) {
        Ok(_) => {
            log::debug!(
                "chanswap: dispatch resolved to {tier} ({} bytes per step)",
                tier.block_size()
            );
            tier
        }
        Err(published) => Tier::from_u8(published).unwrap_or(tier),
    }
}
