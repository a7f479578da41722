//! Trip Planning
//!
//! Entry point for planning a shopping trip: allocate the needed items, group
//! them per shop in walking order and report what cannot be bought.

use tracing::debug;

use crate::{
    allocators::{
        Allocation, Allocator, first_eligible::FirstEligibleAllocator,
        greedy_cover::GreedyCoverAllocator,
    },
    grouping::{ItemTypeGroup, aisles::sequence, group_by_item_type},
    items::Item,
    reporter::UnallocatedItem,
    selection::ShopSelection,
    shops::Shop,
    snapshot::Snapshot,
};

pub mod render;

/// Display name of the synthetic bucket for items no chosen shop can take.
pub const ANY_SHOP: &str = "Any Shop";

/// Where a group of items is bought.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination<'a> {
    /// A shop from the snapshot.
    Shop(&'a Shop),

    /// Items that are sold somewhere, but that no shop on the trip can take.
    AnyShop,
}

impl<'a> Destination<'a> {
    /// Display name of the destination.
    pub fn name(&self) -> &'a str {
        match *self {
            Destination::Shop(shop) => shop.name(),
            Destination::AnyShop => ANY_SHOP,
        }
    }
}

/// The items bought at one destination, grouped by type in walking order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShopGroup<'a> {
    destination: Destination<'a>,
    item_type_groups: Vec<ItemTypeGroup<'a>>,
}

impl<'a> ShopGroup<'a> {
    /// Where the items are bought.
    pub fn destination(&self) -> Destination<'a> {
        self.destination
    }

    /// Display name of the destination.
    pub fn shop_name(&self) -> &'a str {
        self.destination.name()
    }

    /// Item type groups in walking order.
    pub fn item_type_groups(&self) -> &[ItemTypeGroup<'a>] {
        &self.item_type_groups
    }

    /// Iterate over every item at this destination in walking order.
    pub fn items(&self) -> impl Iterator<Item = &'a Item> + '_ {
        self.item_type_groups
            .iter()
            .flat_map(|group| group.items().iter().copied())
    }

    /// Number of items at this destination.
    pub fn len(&self) -> usize {
        self.item_type_groups.iter().map(ItemTypeGroup::len).sum()
    }

    /// Returns true if nothing is bought here.
    pub fn is_empty(&self) -> bool {
        self.item_type_groups.iter().all(ItemTypeGroup::is_empty)
    }
}

/// A planned shopping trip.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TripPlan<'a> {
    allocated: Vec<ShopGroup<'a>>,
    unallocated: Vec<UnallocatedItem<'a>>,
}

impl<'a> TripPlan<'a> {
    /// Build a plan from an allocation.
    pub fn from_allocation(snapshot: &'a Snapshot, allocation: &Allocation) -> Self {
        let items_at = |positions: &[usize]| -> Vec<&'a Item> {
            positions
                .iter()
                .filter_map(|&idx| snapshot.item_at(idx))
                .collect()
        };

        let mut allocated: Vec<ShopGroup<'a>> = allocation
            .shops()
            .iter()
            .filter_map(|shop_allocation| {
                let shop = snapshot.shop_at(shop_allocation.shop)?;
                let groups = group_by_item_type(items_at(shop_allocation.items.as_slice()));

                Some(ShopGroup {
                    destination: Destination::Shop(shop),
                    item_type_groups: sequence(Some(shop), groups),
                })
            })
            .collect();

        if !allocation.any_shop().is_empty() {
            let groups = group_by_item_type(items_at(allocation.any_shop()));

            allocated.push(ShopGroup {
                destination: Destination::AnyShop,
                item_type_groups: sequence(None, groups),
            });
        }

        let unallocated = items_at(allocation.unallocated())
            .into_iter()
            .map(|item| UnallocatedItem::new(item, snapshot))
            .collect();

        Self {
            allocated,
            unallocated,
        }
    }

    /// Groups of items per destination.
    pub fn allocated(&self) -> &[ShopGroup<'a>] {
        &self.allocated
    }

    /// Items that cannot be bought on this trip.
    pub fn unallocated(&self) -> &[UnallocatedItem<'a>] {
        &self.unallocated
    }

    /// Name of the destination an item is bought at.
    pub fn shop_for(&self, item_name: &str) -> Option<&'a str> {
        self.allocated
            .iter()
            .find(|group| group.items().any(|item| item.name() == item_name))
            .map(ShopGroup::shop_name)
    }

    /// Number of items placed at a destination, the "any shop" bucket included.
    pub fn allocated_len(&self) -> usize {
        self.allocated.iter().map(ShopGroup::len).sum()
    }

    /// Returns true if the plan has nothing in it.
    pub fn is_empty(&self) -> bool {
        self.allocated.is_empty() && self.unallocated.is_empty()
    }
}

/// Plan a shopping trip.
///
/// Pinned selections allocate every item to its first eligible pinned shop. The
/// all-shops selection chooses a small covering set of shops. A pinned selection
/// naming no known shop yields an empty plan.
pub fn plan<'a>(snapshot: &'a Snapshot, selection: &ShopSelection) -> TripPlan<'a> {
    let active = selection.active_shops(snapshot);

    if selection.is_pinned() && active.is_empty() {
        debug!("no shops selected");

        return TripPlan::default();
    }

    if snapshot.shop_type_items().is_empty() {
        debug!("no shop type sells anything");
    }

    let needed = snapshot.needed_items();

    let allocation = match selection {
        ShopSelection::AllShops => GreedyCoverAllocator::allocate(snapshot, &active, &needed),
        ShopSelection::Shops(_) => FirstEligibleAllocator::allocate(snapshot, &active, &needed),
    };

    debug!(
        needed = needed.len(),
        active = active.len(),
        shops = allocation.shops().len(),
        any_shop = allocation.any_shop().len(),
        unallocated = allocation.unallocated().len(),
        "planned trip"
    );

    TripPlan::from_allocation(snapshot, &allocation)
}
