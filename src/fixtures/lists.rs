//! Shopping List Fixtures

use serde::Deserialize;

/// Needed items in YAML
#[derive(Debug, Deserialize)]
pub struct ListFixture {
    /// Names of the items on the list
    pub needed: Vec<String>,
}
