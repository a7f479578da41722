//! Shop Fixtures

use serde::Deserialize;

use crate::shops::Shop;

/// Wrapper for shops in YAML
#[derive(Debug, Deserialize)]
pub struct ShopsFixture {
    /// Shops in canonical order
    pub shops: Vec<ShopFixture>,
}

/// Shop Fixture
#[derive(Debug, Deserialize)]
pub struct ShopFixture {
    /// Shop name
    pub name: String,

    /// Shop type (e.g. "supermarket")
    #[serde(rename = "type")]
    pub shop_type: String,

    /// Item types in walking order
    #[serde(default)]
    pub aisles: Vec<String>,
}

impl From<ShopFixture> for Shop {
    fn from(fixture: ShopFixture) -> Self {
        Shop::new(fixture.name, fixture.shop_type).with_aisle_order(fixture.aisles)
    }
}
