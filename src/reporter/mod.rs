//! Unallocated Reporter
//!
//! Explains what to do about items that could not be placed on the trip.

use std::fmt;

use crate::{
    items::{Constraint, Item},
    snapshot::Snapshot,
};

/// A hint for getting an unallocated item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Suggestion<'a> {
    /// The item can only be bought at this shop, which is not on the trip.
    SelectShop(&'a str),

    /// The item prefers this shop.
    TryShop(&'a str),

    /// The first shop whose type sells the item.
    AvailableAt(&'a str),

    /// No shop type sells the item type.
    NoShopSellsType,
}

impl fmt::Display for Suggestion<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Suggestion::SelectShop(shop) => write!(f, "select {shop}"),
            Suggestion::TryShop(shop) => write!(f, "try {shop}"),
            Suggestion::AvailableAt(shop) => write!(f, "available at {shop}"),
            Suggestion::NoShopSellsType => f.write_str("no shop sells this item type"),
        }
    }
}

/// An item left off the trip, with a hint for getting it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnallocatedItem<'a> {
    /// The item
    pub item: &'a Item,

    /// What the user could do about it
    pub suggestion: Suggestion<'a>,
}

impl<'a> UnallocatedItem<'a> {
    /// Report an unallocated item.
    pub fn new(item: &'a Item, snapshot: &'a Snapshot) -> Self {
        Self {
            item,
            suggestion: suggest(item, snapshot),
        }
    }
}

/// Suggest where an unallocated item could be bought.
///
/// Looks at the whole snapshot, not just the shops on the trip.
pub fn suggest<'a>(item: &'a Item, snapshot: &'a Snapshot) -> Suggestion<'a> {
    match item.constraint() {
        Constraint::OnlyShop(shop) => Suggestion::SelectShop(shop),
        Constraint::PreferredShop(shop) => Suggestion::TryShop(shop),
        Constraint::Unconstrained => snapshot
            .shops_selling(item.item_type())
            .next()
            .map_or(Suggestion::NoShopSellsType, |(_, shop)| {
                Suggestion::AvailableAt(shop.name())
            }),
    }
}
