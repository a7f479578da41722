//! Item Type Grouping

use smallvec::SmallVec;

use crate::items::Item;

pub mod aisles;

/// Items of one type bought at the same shop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemTypeGroup<'a> {
    item_type: &'a str,
    items: SmallVec<[&'a Item; 8]>,
}

impl<'a> ItemTypeGroup<'a> {
    /// Create an empty group for an item type.
    pub fn new(item_type: &'a str) -> Self {
        Self {
            item_type,
            items: SmallVec::new(),
        }
    }

    /// The item type shared by the group.
    pub fn item_type(&self) -> &'a str {
        self.item_type
    }

    /// Items in the group.
    pub fn items(&self) -> &[&'a Item] {
        &self.items
    }

    /// Iterate over the items in the group.
    pub fn iter(&self) -> impl Iterator<Item = &'a Item> + '_ {
        self.items.iter().copied()
    }

    /// Number of items in the group.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the group has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Split items into groups by item type, in the order each type is first seen.
pub fn group_by_item_type<'a>(
    items: impl IntoIterator<Item = &'a Item>,
) -> Vec<ItemTypeGroup<'a>> {
    let mut groups: Vec<ItemTypeGroup<'a>> = Vec::new();

    for item in items {
        match groups
            .iter_mut()
            .find(|group| group.item_type == item.item_type())
        {
            Some(group) => group.items.push(item),
            None => {
                let mut group = ItemTypeGroup::new(item.item_type());
                group.items.push(item);
                groups.push(group);
            }
        }
    }

    groups
}
