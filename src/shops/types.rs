//! Shop Types
//!
//! Shop types are kept apart from the item types they sell so that every shop of
//! a type shares one sellable set.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

/// A kind of shop, e.g. "supermarket" or "bakery".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShopType {
    /// Shop type name
    pub name: String,
}

impl ShopType {
    /// Creates a new shop type.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Mapping from shop type name to the item types it sells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShopTypeItems {
    item_types: FxHashMap<String, SmallVec<[String; 8]>>,
}

impl ShopTypeItems {
    /// Creates an empty mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the item types sold by a shop type, replacing any previous entry.
    pub fn insert<S: Into<String>>(
        &mut self,
        shop_type: impl Into<String>,
        item_types: impl IntoIterator<Item = S>,
    ) {
        let mut sold: SmallVec<[String; 8]> = SmallVec::new();

        for item_type in item_types {
            let item_type = item_type.into();

            if !sold.contains(&item_type) {
                sold.push(item_type);
            }
        }

        self.item_types.insert(shop_type.into(), sold);
    }

    /// Builder form of [`ShopTypeItems::insert`].
    #[must_use]
    pub fn with<S: Into<String>>(
        mut self,
        shop_type: impl Into<String>,
        item_types: impl IntoIterator<Item = S>,
    ) -> Self {
        self.insert(shop_type, item_types);
        self
    }

    /// Item types sold by the shop type, in listed order. Unknown shop types sell nothing.
    pub fn item_types(&self, shop_type: &str) -> &[String] {
        self.item_types
            .get(shop_type)
            .map(SmallVec::as_slice)
            .unwrap_or_default()
    }

    /// Returns true if the shop type sells the item type.
    pub fn sells(&self, shop_type: &str, item_type: &str) -> bool {
        self.item_types(shop_type)
            .iter()
            .any(|sold| sold == item_type)
    }

    /// Number of shop types in the mapping.
    pub fn len(&self) -> usize {
        self.item_types.len()
    }

    /// Returns true if no shop type is mapped.
    pub fn is_empty(&self) -> bool {
        self.item_types.is_empty()
    }
}
