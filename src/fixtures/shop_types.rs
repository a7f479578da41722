//! Shop Type Fixtures

use serde::Deserialize;

/// Wrapper for shop types in YAML
#[derive(Debug, Deserialize)]
pub struct ShopTypesFixture {
    /// Shop types and what they sell
    pub shop_types: Vec<ShopTypeFixture>,
}

/// Shop Type Fixture
#[derive(Debug, Deserialize)]
pub struct ShopTypeFixture {
    /// Shop type name
    pub name: String,

    /// Item types sold by shops of this type
    #[serde(default)]
    pub sells: Vec<String>,
}
