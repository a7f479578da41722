//! Constraint Resolver
//!
//! Decides which active shops an item may be bought at. The rules form a fixed
//! priority chain: the first rule that decides an item wins, and the result is
//! ranked, so the first eligible shop is the one an assignment should use.

use smallvec::{SmallVec, smallvec};

use crate::{
    items::{Constraint, Item},
    selection::ActiveShops,
    snapshot::Snapshot,
};

/// Ranked positions of the shops an item may be bought at.
pub type EligibleShops = SmallVec<[usize; 4]>;

/// A single step of the priority chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// The item names the only shop it may be bought at.
    OnlyShop,

    /// The item names a preferred shop that is on the trip.
    PreferredShop,

    /// Any active shop whose type sells the item type.
    ItemType,
}

/// Resolver rules in priority order.
pub const RULES: [Rule; 3] = [Rule::OnlyShop, Rule::PreferredShop, Rule::ItemType];

impl Rule {
    /// Apply the rule to an item.
    ///
    /// Returns `None` when the rule does not decide the item, so the next rule
    /// should be tried. A decided item may still have no eligible shop.
    pub fn apply(
        self,
        item: &Item,
        active: &ActiveShops,
        snapshot: &Snapshot,
    ) -> Option<EligibleShops> {
        match (self, item.constraint()) {
            (Rule::OnlyShop, Constraint::OnlyShop(shop)) => {
                Some(active.find(snapshot, shop).into_iter().collect())
            }
            (Rule::PreferredShop, Constraint::PreferredShop(shop)) => active
                .find(snapshot, shop)
                .map(|idx| smallvec![idx]),
            (Rule::ItemType, _) => Some(
                active
                    .shops(snapshot)
                    .filter(|(_, shop)| snapshot.sells(shop, item.item_type()))
                    .map(|(idx, _)| idx)
                    .collect(),
            ),
            _ => None,
        }
    }
}

/// Where an item may be bought, and which rule decided it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Eligibility {
    rule: Rule,
    shops: EligibleShops,
}

impl Eligibility {
    /// The rule that decided the item.
    pub fn rule(&self) -> Rule {
        self.rule
    }

    /// Eligible shop positions, highest priority first.
    pub fn shops(&self) -> &[usize] {
        &self.shops
    }

    /// The shop an assignment should use.
    pub fn first(&self) -> Option<usize> {
        self.shops.first().copied()
    }

    /// Returns true if the shop at `idx` is eligible.
    pub fn contains(&self, idx: usize) -> bool {
        self.shops.contains(&idx)
    }

    /// Returns true if no shop is eligible.
    pub fn is_empty(&self) -> bool {
        self.shops.is_empty()
    }
}

/// Resolve the eligible shops for an item against the active shops.
pub fn resolve(item: &Item, active: &ActiveShops, snapshot: &Snapshot) -> Eligibility {
    RULES
        .iter()
        .find_map(|&rule| {
            rule.apply(item, active, snapshot)
                .map(|shops| Eligibility { rule, shops })
        })
        .unwrap_or(Eligibility {
            rule: Rule::ItemType,
            shops: SmallVec::new(),
        })
}
