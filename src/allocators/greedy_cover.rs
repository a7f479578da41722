//! Greedy Cover Allocator
//!
//! Used when no shops are pinned. Picks a small set of shops that between them
//! cover every item some shop can sell, using the greedy maximum-coverage
//! heuristic: repeatedly take the shop that covers the most items not yet
//! covered. The result is not guaranteed minimal.
//!
//! Ties go to the shop listed first, so the choice sequence is fully
//! determined by the order of shops and items in the snapshot.

use smallvec::SmallVec;
use tracing::debug;

use crate::{
    allocators::{Allocation, Allocator},
    resolver::{Eligibility, resolve},
    selection::ActiveShops,
    shops::Shop,
    snapshot::Snapshot,
};

/// Allocates items to a greedily chosen covering set of shops.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyCoverAllocator;

impl Allocator for GreedyCoverAllocator {
    fn allocate(snapshot: &Snapshot, active: &ActiveShops, needed: &[usize]) -> Allocation {
        let mut allocation = Allocation::new();

        let candidates: SmallVec<[(usize, Eligibility); 16]> = needed
            .iter()
            .filter_map(|&item_idx| {
                snapshot
                    .item_at(item_idx)
                    .map(|item| (item_idx, resolve(item, active, snapshot)))
            })
            .collect();

        // Indexes into `candidates` not yet covered by a chosen shop.
        let mut remaining: SmallVec<[usize; 16]> = (0..candidates.len()).collect();

        while !remaining.is_empty() {
            let Some((shop_idx, covered)) = best_shop(active, &candidates, &remaining) else {
                break;
            };

            debug!(
                shop = snapshot.shop_at(shop_idx).map(Shop::name),
                covered,
                remaining = remaining.len(),
                "chose shop"
            );

            remaining.retain(|candidate| {
                let Some((item_idx, eligibility)) = candidates.get(*candidate) else {
                    return false;
                };

                if eligibility.contains(shop_idx) {
                    allocation.assign(shop_idx, *item_idx);
                    false
                } else {
                    true
                }
            });
        }

        for (item_idx, _) in remaining.iter().filter_map(|&candidate| candidates.get(candidate)) {
            let Some(item) = snapshot.item_at(*item_idx) else {
                continue;
            };

            if active
                .shops(snapshot)
                .any(|(_, shop)| snapshot.sells(shop, item.item_type()))
            {
                debug!(item = item.name(), "no shop can take item, listing under any shop");

                allocation.defer_to_any_shop(*item_idx);
            } else {
                debug!(item = item.name(), "no shop sells item type");

                allocation.leave_unallocated(*item_idx);
            }
        }

        allocation
    }
}

/// The active shop covering the most remaining items, with its count.
///
/// Only a strictly greater count displaces the current best, so the first
/// shop in canonical order wins ties. Returns `None` if no shop covers anything.
fn best_shop(
    active: &ActiveShops,
    candidates: &[(usize, Eligibility)],
    remaining: &[usize],
) -> Option<(usize, usize)> {
    let mut best: Option<(usize, usize)> = None;

    for shop_idx in active.iter() {
        let covered = remaining
            .iter()
            .filter_map(|&candidate| candidates.get(candidate))
            .filter(|(_, eligibility)| eligibility.contains(shop_idx))
            .count();

        let best_covered = best.map_or(0, |(_, count)| count);

        if covered > best_covered {
            best = Some((shop_idx, covered));
        }
    }

    best
}
