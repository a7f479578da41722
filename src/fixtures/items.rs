//! Item Fixtures

use serde::Deserialize;

use crate::items::Item;

/// Wrapper for catalog items in YAML
#[derive(Debug, Deserialize)]
pub struct ItemsFixture {
    /// Items in catalog order
    pub items: Vec<ItemFixture>,
}

/// Item Fixture
#[derive(Debug, Deserialize)]
pub struct ItemFixture {
    /// Item name
    pub name: String,

    /// Item type (e.g. "dairy")
    #[serde(rename = "type")]
    pub item_type: String,

    /// Shop the item is best bought at
    #[serde(default)]
    pub preferred_shop: Option<String>,

    /// The only shop the item may be bought at
    #[serde(default)]
    pub only_shop: Option<String>,

    /// Alternate names
    #[serde(default)]
    pub nicknames: Vec<String>,

    /// Skipped for this trip
    #[serde(default)]
    pub deferred: bool,
}

impl From<ItemFixture> for Item {
    fn from(fixture: ItemFixture) -> Self {
        let mut item = Item::new(fixture.name, fixture.item_type).with_nicknames(fixture.nicknames);

        if let Some(shop) = fixture.preferred_shop {
            item = item.with_preferred_shop(shop);
        }

        if let Some(shop) = fixture.only_shop {
            item = item.with_only_shop(shop);
        }

        item.set_deferred(fixture.deferred);

        item
    }
}
