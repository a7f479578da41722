//! Snapshot
//!
//! An immutable view of the household data model handed to the planner. The
//! store that produces it owns integrity checks; the snapshot only indexes names
//! for lookup. Where names repeat, the first occurrence wins.

use rustc_hash::{FxHashMap, FxHashSet};
use smallvec::SmallVec;
use thiserror::Error;
use tracing::debug;

use crate::{
    items::Item,
    shops::{
        Shop,
        types::{ShopType, ShopTypeItems},
    },
};

/// Errors raised when editing a snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// No catalog item has the given name.
    #[error("Item not found: {0}")]
    ItemNotFound(String),
}

/// Items, shops and the needed list as seen by one planning run.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    items: Vec<Item>,
    shops: Vec<Shop>,
    shop_types: Vec<ShopType>,
    shop_type_items: ShopTypeItems,
    needed: Vec<String>,

    /// Name -> position lookups
    item_index: FxHashMap<String, usize>,
    shop_index: FxHashMap<String, usize>,
}

impl Snapshot {
    /// Create a snapshot from the catalog, shops, shop type mapping and needed list.
    #[must_use]
    pub fn new<S: Into<String>>(
        items: impl Into<Vec<Item>>,
        shops: impl Into<Vec<Shop>>,
        shop_type_items: ShopTypeItems,
        needed: impl IntoIterator<Item = S>,
    ) -> Self {
        let items = items.into();
        let shops = shops.into();

        let item_index = index_names(items.iter().map(Item::name));
        let shop_index = index_names(shops.iter().map(Shop::name));

        Self {
            items,
            shops,
            shop_types: Vec::new(),
            shop_type_items,
            needed: needed.into_iter().map(Into::into).collect(),
            item_index,
            shop_index,
        }
    }

    /// Attach the shop type records.
    #[must_use]
    pub fn with_shop_types(mut self, shop_types: impl Into<Vec<ShopType>>) -> Self {
        self.shop_types = shop_types.into();
        self
    }

    /// All catalog items, in catalog order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// All shops, in canonical order.
    pub fn shops(&self) -> &[Shop] {
        &self.shops
    }

    /// All shop type records.
    pub fn shop_types(&self) -> &[ShopType] {
        &self.shop_types
    }

    /// Mapping from shop type to the item types it sells.
    pub fn shop_type_items(&self) -> &ShopTypeItems {
        &self.shop_type_items
    }

    /// Names on the needed list, in list order.
    pub fn needed_names(&self) -> &[String] {
        &self.needed
    }

    /// Get an item by position.
    pub fn item_at(&self, idx: usize) -> Option<&Item> {
        self.items.get(idx)
    }

    /// Get a shop by position.
    pub fn shop_at(&self, idx: usize) -> Option<&Shop> {
        self.shops.get(idx)
    }

    /// Get an item by name.
    pub fn item(&self, name: &str) -> Option<&Item> {
        self.item_idx(name).and_then(|idx| self.items.get(idx))
    }

    /// Get a shop by name.
    pub fn shop(&self, name: &str) -> Option<&Shop> {
        self.shop_idx(name).and_then(|idx| self.shops.get(idx))
    }

    /// Position of the item with the given name.
    pub fn item_idx(&self, name: &str) -> Option<usize> {
        self.item_index.get(name).copied()
    }

    /// Position of the shop with the given name.
    pub fn shop_idx(&self, name: &str) -> Option<usize> {
        self.shop_index.get(name).copied()
    }

    /// Returns true if the shop's type sells the item type.
    pub fn sells(&self, shop: &Shop, item_type: &str) -> bool {
        self.shop_type_items.sells(shop.shop_type(), item_type)
    }

    /// Shops whose type sells the item type, in canonical order.
    pub fn shops_selling<'a>(
        &'a self,
        item_type: &'a str,
    ) -> impl Iterator<Item = (usize, &'a Shop)> + 'a {
        self.shops
            .iter()
            .enumerate()
            .filter(move |(_, shop)| self.sells(shop, item_type))
    }

    /// Positions of the items to plan for: on the needed list and not deferred.
    ///
    /// Items come back in catalog order. Needed names with no catalog item are skipped.
    pub fn needed_items(&self) -> SmallVec<[usize; 16]> {
        let needed: FxHashSet<&str> = self.needed.iter().map(String::as_str).collect();

        for name in needed.iter().filter(|name| !self.item_index.contains_key(**name)) {
            debug!(item = *name, "needed item is not in the catalog");
        }

        self.items
            .iter()
            .enumerate()
            .filter(|(idx, item)| {
                needed.contains(item.name())
                    && !item.is_deferred()
                    && self.item_idx(item.name()) == Some(*idx)
            })
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Defer an item so that later plans leave it out.
    ///
    /// # Errors
    ///
    /// Returns a `SnapshotError::ItemNotFound` if no catalog item has the name.
    pub fn defer(&mut self, name: &str) -> Result<(), SnapshotError> {
        let item = self
            .item_idx(name)
            .and_then(|idx| self.items.get_mut(idx))
            .ok_or_else(|| SnapshotError::ItemNotFound(name.to_string()))?;

        item.set_deferred(true);

        debug!(item = name, "deferred");

        Ok(())
    }

    /// Remove ticked names from the needed list, returning how many were removed.
    pub fn purge<S: AsRef<str>>(&mut self, ticked: &[S]) -> usize {
        let before = self.needed.len();

        self.needed
            .retain(|name| !ticked.iter().any(|ticked| ticked.as_ref() == name));

        before - self.needed.len()
    }
}

fn index_names<'a>(names: impl Iterator<Item = &'a str>) -> FxHashMap<String, usize> {
    let mut index = FxHashMap::default();

    for (idx, name) in names.enumerate() {
        index.entry(name.to_string()).or_insert(idx);
    }

    index
}
