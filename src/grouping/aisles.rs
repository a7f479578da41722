//! Aisle Sequencer
//!
//! Orders the item type groups of one shop so the list can be read walking
//! through the shop.

use crate::{grouping::ItemTypeGroup, items::compare_names, shops::Shop};

/// Order item type groups by a shop's aisle order.
///
/// Types the shop lists come first, in aisle order. Unlisted types follow in
/// the order they were given. With no shop, the given order is kept. Items
/// inside each group are sorted by name.
pub fn sequence<'a>(
    shop: Option<&Shop>,
    mut groups: Vec<ItemTypeGroup<'a>>,
) -> Vec<ItemTypeGroup<'a>> {
    if let Some(shop) = shop {
        groups.sort_by_key(|group| shop.aisle_position(group.item_type).unwrap_or(usize::MAX));
    }

    for group in &mut groups {
        group
            .items
            .sort_by(|a, b| compare_names(a.name(), b.name()));
    }

    groups
}
