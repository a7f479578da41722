//! Utils

use std::path::PathBuf;

use clap::Parser;

use crate::selection::ShopSelection;

/// Arguments for the trip examples
#[derive(Debug, Parser)]
pub struct ExampleTripArgs {
    /// Fixture set to plan the trip from
    #[clap(short, long, default_value = "household")]
    pub fixture: String,

    /// Shop to visit; repeat for more shops, or leave out to let the planner choose
    #[clap(short, long = "shop")]
    pub shops: Vec<String>,

    /// Directory holding the fixture sets
    #[clap(long, env = "TROLLEY_FIXTURES", default_value = "./fixtures")]
    pub fixtures_dir: PathBuf,
}

impl ExampleTripArgs {
    /// The shop selection described by the arguments.
    pub fn selection(&self) -> ShopSelection {
        if self.shops.is_empty() {
            ShopSelection::AllShops
        } else {
            ShopSelection::shops(self.shops.iter().map(String::as_str))
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn no_shops_selects_all_shops() -> TestResult {
        let args = ExampleTripArgs::try_parse_from(["trip"])?;

        assert_eq!(args.fixture, "household");
        assert_eq!(args.selection(), ShopSelection::AllShops);

        Ok(())
    }

    #[test]
    fn repeated_shop_flags_pin_shops() -> TestResult {
        let args = ExampleTripArgs::try_parse_from([
            "trip",
            "--shop",
            "Bakery",
            "-s",
            "Corner Store",
            "--fixture",
            "weekly",
        ])?;

        assert_eq!(args.fixture, "weekly");
        assert_eq!(
            args.selection(),
            ShopSelection::shops(["Bakery", "Corner Store"])
        );

        Ok(())
    }
}
