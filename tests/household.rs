//! Plans built from the household fixture set

use testresult::TestResult;
use trolley::prelude::*;

fn destinations<'a>(trip: &TripPlan<'a>) -> Vec<&'a str> {
    trip.allocated().iter().map(ShopGroup::shop_name).collect()
}

fn suggestions<'a>(trip: &TripPlan<'a>) -> Vec<(&'a str, String)> {
    trip.unallocated()
        .iter()
        .map(|report| (report.item.name(), report.suggestion.to_string()))
        .collect()
}

#[test]
fn all_shops_trip_covers_the_list_greedily() -> TestResult {
    let snapshot = Fixture::from_set("household")?.snapshot();

    let trip = plan(&snapshot, &ShopSelection::AllShops);

    assert_eq!(
        destinations(&trip),
        ["Supermarket", "Corner Store", "Bakery", "Chemist", ANY_SHOP]
    );
    assert_eq!(trip.shop_for("Milk"), Some("Corner Store"));
    assert_eq!(trip.shop_for("Eggs"), Some("Supermarket"));
    assert_eq!(trip.shop_for("Sourdough"), Some("Bakery"));
    assert_eq!(trip.shop_for("Paracetamol"), Some("Chemist"));
    assert_eq!(trip.shop_for("Croissants"), Some(ANY_SHOP));
    assert_eq!(
        suggestions(&trip),
        [("Screws", "no shop sells this item type".to_string())]
    );

    Ok(())
}

#[test]
fn supermarket_list_follows_its_aisles() -> TestResult {
    let snapshot = Fixture::from_set("household")?.snapshot();

    let trip = plan(&snapshot, &ShopSelection::AllShops);

    let supermarket = trip.allocated().first().ok_or("missing supermarket")?;
    let names: Vec<&str> = supermarket.items().map(Item::name).collect();

    assert_eq!(names, ["Apples", "bananas", "Baguette", "Eggs"]);

    Ok(())
}

#[test]
fn pinned_trip_reports_what_the_chosen_shops_cannot_take() -> TestResult {
    let snapshot = Fixture::from_set("household")?.snapshot();

    let trip = plan(&snapshot, &ShopSelection::shops(["Bakery", "Supermarket"]));

    assert_eq!(destinations(&trip), ["Supermarket", "Bakery"]);
    assert_eq!(trip.shop_for("Milk"), Some("Supermarket"));
    assert_eq!(trip.shop_for("Baguette"), Some("Supermarket"));
    assert_eq!(trip.shop_for("Light Bulbs"), None);
    assert_eq!(
        suggestions(&trip),
        [
            ("Croissants", "select Patisserie".to_string()),
            ("Screws", "no shop sells this item type".to_string()),
        ]
    );

    Ok(())
}

#[test]
fn rendered_trip_lists_every_destination() -> TestResult {
    let snapshot = Fixture::from_set("household")?.snapshot();

    let trip = plan(&snapshot, &ShopSelection::shops(["Corner Store"]));

    let mut out = Vec::new();
    trip.write_to(&mut out)?;
    let output = String::from_utf8(out)?;

    assert!(output.contains("Corner Store (minimart)"));
    assert!(output.contains("Unallocated"));
    assert!(output.contains("(select Bakery)"));
    assert!(output.contains("(try Chemist)"));

    Ok(())
}
