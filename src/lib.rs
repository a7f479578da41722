//! Trolley
//!
//! Trolley plans household shopping trips: it decides which shop each needed item is bought at,
//! orders every shop's list by aisle and explains what cannot be bought on the trip.

pub mod allocators;
pub mod fixtures;
pub mod grouping;
pub mod items;
pub mod prelude;
pub mod reporter;
pub mod resolver;
pub mod selection;
pub mod shops;
pub mod snapshot;
pub mod trip;
pub mod utils;
