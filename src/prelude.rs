//! Trolley prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    allocators::{
        Allocation, Allocator, ShopAllocation, first_eligible::FirstEligibleAllocator,
        greedy_cover::GreedyCoverAllocator,
    },
    fixtures::{Fixture, FixtureError},
    grouping::{ItemTypeGroup, aisles::sequence, group_by_item_type},
    items::{Constraint, Item, Preference, compare_names},
    reporter::{Suggestion, UnallocatedItem, suggest},
    resolver::{Eligibility, Rule, resolve},
    selection::{ActiveShops, ShopSelection},
    shops::{
        Shop,
        types::{ShopType, ShopTypeItems},
    },
    snapshot::{Snapshot, SnapshotError},
    trip::{ANY_SHOP, Destination, ShopGroup, TripPlan, plan, render::RenderError},
};
