//! First Eligible Allocator
//!
//! Used when the trip is pinned to a set of shops: each item goes to the
//! highest-ranked shop the resolver offers, or is left unallocated.

use tracing::{debug, trace};

use crate::{
    allocators::{Allocation, Allocator},
    resolver::resolve,
    selection::ActiveShops,
    snapshot::Snapshot,
};

/// Allocates each item to its first eligible shop.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstEligibleAllocator;

impl Allocator for FirstEligibleAllocator {
    fn allocate(snapshot: &Snapshot, active: &ActiveShops, needed: &[usize]) -> Allocation {
        let mut allocation = Allocation::new();

        for &item_idx in needed {
            let Some(item) = snapshot.item_at(item_idx) else {
                continue;
            };

            let eligibility = resolve(item, active, snapshot);

            match eligibility.first() {
                Some(shop_idx) => {
                    trace!(
                        item = item.name(),
                        shop = shop_idx,
                        rule = ?eligibility.rule(),
                        "assigned"
                    );

                    allocation.assign(shop_idx, item_idx);
                }
                None => {
                    debug!(item = item.name(), rule = ?eligibility.rule(), "unallocated");

                    allocation.leave_unallocated(item_idx);
                }
            }
        }

        allocation
    }
}
