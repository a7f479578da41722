//! Fixtures

use std::{fs, path::PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

use crate::{
    fixtures::{
        items::ItemsFixture, lists::ListFixture, shop_types::ShopTypesFixture,
        shops::ShopsFixture,
    },
    items::Item,
    shops::{
        Shop,
        types::{ShopType, ShopTypeItems},
    },
    snapshot::Snapshot,
};

pub mod items;
pub mod lists;
pub mod shop_types;
pub mod shops;

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),
}

/// Fixture
#[derive(Debug)]
pub struct Fixture {
    /// Base path for fixture files
    base_path: PathBuf,

    items: Vec<Item>,
    shops: Vec<Shop>,
    shop_types: Vec<ShopType>,
    shop_type_items: ShopTypeItems,
    needed: Vec<String>,
}

impl Fixture {
    /// Create a new empty fixture with default base path
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Create a new empty fixture with custom base path
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            items: Vec::new(),
            shops: Vec::new(),
            shop_types: Vec::new(),
            shop_type_items: ShopTypeItems::new(),
            needed: Vec::new(),
        }
    }

    fn read<T: DeserializeOwned>(&self, category: &str, name: &str) -> Result<T, FixtureError> {
        let file_path = self.base_path.join(category).join(format!("{name}.yml"));

        debug!(path = %file_path.display(), "loading fixture");

        let contents = fs::read_to_string(&file_path)?;

        Ok(serde_norway::from_str(&contents)?)
    }

    /// Load catalog items from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_items(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let fixture: ItemsFixture = self.read("items", name)?;

        self.items.extend(fixture.items.into_iter().map(Item::from));

        Ok(self)
    }

    /// Load shops from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_shops(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let fixture: ShopsFixture = self.read("shops", name)?;

        self.shops.extend(fixture.shops.into_iter().map(Shop::from));

        Ok(self)
    }

    /// Load shop types and the item types they sell from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_shop_types(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let fixture: ShopTypesFixture = self.read("shop_types", name)?;

        for shop_type in fixture.shop_types {
            self.shop_type_items
                .insert(shop_type.name.as_str(), shop_type.sells);
            self.shop_types.push(ShopType::new(shop_type.name));
        }

        debug!(shop_types = self.shop_type_items.len(), "loaded shop types");

        Ok(self)
    }

    /// Load the needed list from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_list(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let fixture: ListFixture = self.read("lists", name)?;

        self.needed.extend(fixture.needed);

        Ok(self)
    }

    /// Load a complete fixture set (items, shops, shop types and list with the same name)
    ///
    /// # Errors
    ///
    /// Returns an error if any of the fixture files cannot be loaded.
    pub fn from_set(name: &str) -> Result<Self, FixtureError> {
        let mut fixture = Self::new();

        fixture.load_set(name)?;

        Ok(fixture)
    }

    /// Load a complete fixture set into this fixture
    ///
    /// # Errors
    ///
    /// Returns an error if any of the fixture files cannot be loaded.
    pub fn load_set(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        self.load_items(name)?
            .load_shops(name)?
            .load_shop_types(name)?
            .load_list(name)
    }

    /// Get all catalog items
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Get all shops
    pub fn shops(&self) -> &[Shop] {
        &self.shops
    }

    /// Get the needed item names
    pub fn needed(&self) -> &[String] {
        &self.needed
    }

    /// Build a snapshot of the loaded data
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(
            self.items.clone(),
            self.shops.clone(),
            self.shop_type_items.clone(),
            self.needed.iter().cloned(),
        )
        .with_shop_types(self.shop_types.clone())
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::{fs, path::Path};

    use tempfile::tempdir;
    use testresult::TestResult;

    use crate::items::Constraint;

    use super::*;

    fn write_fixture(base: &Path, category: &str, name: &str, contents: &str) -> TestResult {
        let dir = base.join(category);

        fs::create_dir_all(&dir)?;
        fs::write(dir.join(format!("{name}.yml")), contents)?;

        Ok(())
    }

    fn write_set(base: &Path, name: &str) -> TestResult {
        write_fixture(
            base,
            "items",
            name,
            concat!(
                "items:\n",
                "  - name: Milk\n",
                "    type: dairy\n",
                "  - name: Bread\n",
                "    type: bakery\n",
                "    only_shop: \" \"\n",
            ),
        )?;
        write_fixture(
            base,
            "shops",
            name,
            "shops:\n  - name: Corner Store\n    type: minimart\n    aisles: [bakery, dairy]\n",
        )?;
        write_fixture(
            base,
            "shop_types",
            name,
            "shop_types:\n  - name: minimart\n    sells: [dairy, bakery]\n",
        )?;
        write_fixture(base, "lists", name, "needed: [Bread, Milk, Jam]\n")?;

        Ok(())
    }

    #[test]
    fn fixture_from_set_loads_household_fixtures() -> TestResult {
        let fixture = Fixture::from_set("household")?;

        assert!(!fixture.items().is_empty());
        assert!(!fixture.shops().is_empty());
        assert!(!fixture.needed().is_empty());

        Ok(())
    }

    #[test]
    fn fixture_loads_set_from_custom_base_path() -> TestResult {
        let dir = tempdir()?;
        write_set(dir.path(), "tiny")?;

        let mut fixture = Fixture::with_base_path(dir.path());
        fixture.load_set("tiny")?;

        assert_eq!(fixture.items().len(), 2);
        assert_eq!(fixture.shops().len(), 1);
        assert_eq!(fixture.needed(), ["Bread", "Milk", "Jam"]);

        Ok(())
    }

    #[test]
    fn fixture_snapshot_carries_loaded_data() -> TestResult {
        let dir = tempdir()?;
        write_set(dir.path(), "tiny")?;

        let mut fixture = Fixture::with_base_path(dir.path());
        fixture.load_set("tiny")?;

        let snapshot = fixture.snapshot();

        let corner_store = snapshot.shop("Corner Store").ok_or("missing shop")?;
        let bread = snapshot.item("Bread").ok_or("missing bread")?;

        assert!(snapshot.sells(corner_store, "bakery"));
        assert_eq!(bread.constraint(), Constraint::Unconstrained);
        assert_eq!(snapshot.shop_types().len(), 1);
        assert_eq!(snapshot.needed_items().len(), 2);

        Ok(())
    }

    #[test]
    fn fixture_missing_file_returns_io_error() -> TestResult {
        let dir = tempdir()?;

        let mut fixture = Fixture::with_base_path(dir.path());
        let result = fixture.load_items("missing");

        assert!(matches!(result, Err(FixtureError::Io(_))));

        Ok(())
    }

    #[test]
    fn fixture_malformed_yaml_returns_yaml_error() -> TestResult {
        let dir = tempdir()?;
        write_fixture(dir.path(), "shops", "broken", "shops:\n  - name: [unclosed\n")?;

        let mut fixture = Fixture::with_base_path(dir.path());
        let result = fixture.load_shops("broken");

        assert!(matches!(result, Err(FixtureError::Yaml(_))));

        Ok(())
    }

    #[test]
    fn fixture_default_matches_new() {
        let fixture = Fixture::default();

        assert_eq!(fixture.base_path, PathBuf::from("./fixtures"));
        assert!(fixture.items().is_empty());
    }
}
