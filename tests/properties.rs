//! Invariants that hold for every plan

use trolley::prelude::*;

fn snapshot_with_shops(shops: Vec<Shop>) -> Snapshot {
    Snapshot::new(
        [
            Item::new("Milk", "dairy").with_preferred_shop("Corner Store"),
            Item::new("Cheese", "dairy"),
            Item::new("Apples", "produce"),
            Item::new("bananas", "produce"),
            Item::new("Bread", "bakery").with_only_shop("Bakery"),
            Item::new("Cake", "bakery").with_only_shop("Patisserie"),
            Item::new("Soap", "household"),
            Item::new("Nails", "hardware"),
            Item::new("Candles", "household").deferred(),
        ],
        shops,
        ShopTypeItems::new()
            .with("minimart", ["dairy", "household"])
            .with("supermarket", ["produce", "dairy", "bakery"])
            .with("bakery", ["bakery"])
            .with("hardware", ["hardware", "household"]),
        [
            "Milk", "Cheese", "Apples", "bananas", "Bread", "Cake", "Soap", "Nails", "Candles",
        ],
    )
}

fn all_shops() -> Vec<Shop> {
    vec![
        Shop::new("Corner Store", "minimart").with_aisle_order(["household", "dairy"]),
        Shop::new("Supermarket", "supermarket").with_aisle_order(["produce", "bakery"]),
        Shop::new("Bakery", "bakery"),
        Shop::new("Hardware Store", "hardware"),
    ]
}

fn selections() -> Vec<ShopSelection> {
    vec![
        ShopSelection::AllShops,
        ShopSelection::shops(["Supermarket"]),
        ShopSelection::shops(["Corner Store", "Bakery"]),
        ShopSelection::shops(["Hardware Store", "Supermarket", "Bakery", "Corner Store"]),
        ShopSelection::shops(["Patisserie"]),
    ]
}

fn placed_names<'a>(trip: &TripPlan<'a>) -> Vec<&'a str> {
    let mut names: Vec<&str> = trip
        .allocated()
        .iter()
        .flat_map(|group| group.items().map(Item::name))
        .chain(trip.unallocated().iter().map(|report| report.item.name()))
        .collect();

    names.sort_unstable();
    names
}

#[test]
fn every_needed_item_is_placed_exactly_once() {
    let snapshot = snapshot_with_shops(all_shops());

    let mut expected: Vec<&str> = snapshot
        .needed_items()
        .iter()
        .filter_map(|&idx| snapshot.item_at(idx))
        .map(Item::name)
        .collect();
    expected.sort_unstable();

    for selection in selections() {
        let trip = plan(&snapshot, &selection);

        if trip.is_empty() {
            continue;
        }

        assert_eq!(placed_names(&trip), expected, "{selection:?}");
    }
}

#[test]
fn only_shop_items_never_go_elsewhere() {
    let snapshot = snapshot_with_shops(all_shops());

    for selection in selections() {
        let trip = plan(&snapshot, &selection);

        for item in snapshot.items() {
            let Some(only_shop) = item.only_shop() else {
                continue;
            };

            if let Some(shop) = trip.shop_for(item.name()) {
                assert!(
                    shop == only_shop || shop == ANY_SHOP,
                    "{} went to {shop}",
                    item.name()
                );
            }
        }
    }
}

#[test]
fn planning_is_deterministic() {
    let snapshot = snapshot_with_shops(all_shops());

    for selection in selections() {
        assert_eq!(plan(&snapshot, &selection), plan(&snapshot, &selection));
    }
}

#[test]
fn listed_aisles_come_first_and_in_order() {
    let snapshot = snapshot_with_shops(all_shops());

    for selection in selections() {
        let trip = plan(&snapshot, &selection);

        for group in trip.allocated() {
            let Destination::Shop(shop) = group.destination() else {
                continue;
            };

            let positions: Vec<usize> = group
                .item_type_groups()
                .iter()
                .map(|types| shop.aisle_position(types.item_type()).unwrap_or(usize::MAX))
                .collect();

            assert!(
                positions.windows(2).all(|pair| pair.first() <= pair.last()),
                "{} is out of aisle order",
                shop.name()
            );
        }
    }
}

#[test]
fn items_within_a_type_are_sorted_by_name() {
    let snapshot = snapshot_with_shops(all_shops());

    let trip = plan(&snapshot, &ShopSelection::shops(["Supermarket"]));

    for group in trip.allocated() {
        for types in group.item_type_groups() {
            let names: Vec<&str> = types.iter().map(Item::name).collect();

            assert!(
                names
                    .windows(2)
                    .all(|pair| match (pair.first(), pair.last()) {
                        (Some(a), Some(b)) => compare_names(a, b).is_le(),
                        _ => true,
                    })
            );
        }
    }
}

#[test]
fn more_shops_never_leave_more_unallocated() {
    let shops = all_shops();

    let mut previous = usize::MAX;

    for count in 0..=shops.len() {
        let snapshot = snapshot_with_shops(shops.iter().take(count).cloned().collect());
        let trip = plan(&snapshot, &ShopSelection::AllShops);

        let unallocated = trip.unallocated().len();

        assert!(unallocated <= previous, "{count} shops left {unallocated}");

        previous = unallocated;
    }
}

#[test]
fn purge_removes_ticked_items_from_the_list() {
    let mut snapshot = snapshot_with_shops(all_shops());

    let removed = snapshot.purge(["Milk", "Soap", "Marmalade"].as_slice());

    let trip = plan(&snapshot, &ShopSelection::AllShops);

    assert_eq!(removed, 2);
    assert_eq!(trip.shop_for("Milk"), None);
    assert_eq!(trip.shop_for("Soap"), None);
    assert!(trip.shop_for("Cheese").is_some());
}
