//! Allocators
//!
//! Allocators decide which shop each needed item is bought at.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::{selection::ActiveShops, snapshot::Snapshot};

pub mod first_eligible;
pub mod greedy_cover;

/// Items allocated to a single shop, in the order they were allocated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShopAllocation {
    /// Position of the shop in the snapshot
    pub shop: usize,

    /// Positions of the items bought there
    pub items: SmallVec<[usize; 10]>,
}

/// Result of allocating the needed items across the active shops
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Allocation {
    /// Shops in the order they first received an item
    shops: Vec<ShopAllocation>,

    /// Shop position -> index into `shops`
    slots: FxHashMap<usize, usize>,

    /// Items some shop type sells but no shop could take
    any_shop: SmallVec<[usize; 10]>,

    /// Items that cannot be bought on this trip
    unallocated: SmallVec<[usize; 10]>,
}

impl Allocation {
    /// Create an empty allocation.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate an item to a shop.
    pub fn assign(&mut self, shop: usize, item: usize) {
        let slot = *self.slots.entry(shop).or_insert_with(|| {
            self.shops.push(ShopAllocation {
                shop,
                items: SmallVec::new(),
            });

            self.shops.len() - 1
        });

        if let Some(allocation) = self.shops.get_mut(slot) {
            allocation.items.push(item);
        }
    }

    /// Record an item that some shop could sell but none was able to take.
    pub fn defer_to_any_shop(&mut self, item: usize) {
        self.any_shop.push(item);
    }

    /// Record an item that cannot be bought on this trip.
    pub fn leave_unallocated(&mut self, item: usize) {
        self.unallocated.push(item);
    }

    /// Per-shop allocations, in the order shops first received an item.
    pub fn shops(&self) -> &[ShopAllocation] {
        &self.shops
    }

    /// Items in the synthetic "any shop" bucket.
    pub fn any_shop(&self) -> &[usize] {
        &self.any_shop
    }

    /// Items that cannot be bought on this trip.
    pub fn unallocated(&self) -> &[usize] {
        &self.unallocated
    }

    /// The shop an item was allocated to.
    pub fn shop_for(&self, item: usize) -> Option<usize> {
        self.shops
            .iter()
            .find(|allocation| allocation.items.contains(&item))
            .map(|allocation| allocation.shop)
    }

    /// Number of items allocated to real shops.
    pub fn allocated_len(&self) -> usize {
        self.shops.iter().map(|allocation| allocation.items.len()).sum()
    }
}

/// Strategy for allocating needed items to shops
pub trait Allocator {
    /// Allocate the `needed` items across the active shops.
    fn allocate(snapshot: &Snapshot, active: &ActiveShops, needed: &[usize]) -> Allocation;
}
