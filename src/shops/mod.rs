//! Shops

use smallvec::SmallVec;

pub mod types;

/// A shop the household can visit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Shop {
    name: String,
    shop_type: String,
    aisle_order: SmallVec<[String; 8]>,
}

impl Shop {
    /// Creates a new shop of the given type with no aisle order.
    #[must_use]
    pub fn new(name: impl Into<String>, shop_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            shop_type: shop_type.into(),
            aisle_order: SmallVec::new(),
        }
    }

    /// Sets the order in which item types are met walking through the shop.
    #[must_use]
    pub fn with_aisle_order<S: Into<String>>(
        mut self,
        aisle_order: impl IntoIterator<Item = S>,
    ) -> Self {
        self.aisle_order = aisle_order.into_iter().map(Into::into).collect();
        self
    }

    /// Returns the shop name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the shop type
    pub fn shop_type(&self) -> &str {
        &self.shop_type
    }

    /// Returns the aisle order
    pub fn aisle_order(&self) -> &[String] {
        &self.aisle_order
    }

    /// Position of an item type in the aisle order, if the shop lists it.
    pub fn aisle_position(&self, item_type: &str) -> Option<usize> {
        self.aisle_order
            .iter()
            .position(|listed| listed == item_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_shop_has_empty_aisle_order() {
        let shop = Shop::new("Corner Store", "minimart");

        assert_eq!(shop.name(), "Corner Store");
        assert_eq!(shop.shop_type(), "minimart");
        assert!(shop.aisle_order().is_empty());
    }

    #[test]
    fn aisle_position_finds_listed_types() {
        let shop = Shop::new("Supermarket", "supermarket").with_aisle_order(["produce", "dairy"]);

        assert_eq!(shop.aisle_position("produce"), Some(0));
        assert_eq!(shop.aisle_position("dairy"), Some(1));
        assert_eq!(shop.aisle_position("bakery"), None);
    }
}
