//! Trip Rendering
//!
//! Terminal tables for a planned trip: one per destination, then one for the
//! items that cannot be bought.

use std::io;

use tabled::{
    builder::Builder,
    settings::{Color, Style, object::Rows},
};
use thiserror::Error;

use crate::{
    items::Preference,
    reporter::UnallocatedItem,
    trip::{Destination, ShopGroup, TripPlan},
};

/// Errors that can occur when writing a trip plan.
#[derive(Debug, Error)]
pub enum RenderError {
    /// IO error
    #[error("IO error")]
    IO,
}

impl TripPlan<'_> {
    /// Writes the plan as terminal tables.
    ///
    /// # Errors
    ///
    /// Returns a [`RenderError`] if the output cannot be written.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), RenderError> {
        if self.is_empty() {
            return write_line(&mut out, "Select one or more shops to generate a purchase list.");
        }

        for group in self.allocated() {
            write_shop_group(&mut out, group)?;
        }

        if !self.unallocated().is_empty() {
            write_unallocated(&mut out, self.unallocated())?;
        }

        Ok(())
    }
}

fn write_shop_group(out: &mut impl io::Write, group: &ShopGroup<'_>) -> Result<(), RenderError> {
    let mut builder = Builder::default();

    builder.push_record(["", "Item", "Type", "Note"]);

    for (position, item) in group.items().enumerate() {
        let note = match group.destination() {
            Destination::Shop(shop) => preference_note(item.preference_at(shop.name())),
            Destination::AnyShop => String::new(),
        };

        builder.push_record([
            format!("#{:<3}", position + 1),
            item.name().to_string(),
            item.item_type().to_string(),
            note,
        ]);
    }

    let title = match group.destination() {
        Destination::Shop(shop) => format!("{} ({})", shop.name(), shop.shop_type()),
        Destination::AnyShop => group.shop_name().to_string(),
    };

    write_line(out, &format!("\n{title}"))?;
    write_table(out, builder)
}

fn write_unallocated(
    out: &mut impl io::Write,
    unallocated: &[UnallocatedItem<'_>],
) -> Result<(), RenderError> {
    let mut builder = Builder::default();

    builder.push_record(["Item", "Type", "Suggestion"]);

    for report in unallocated {
        builder.push_record([
            report.item.name().to_string(),
            report.item.item_type().to_string(),
            format!("({})", report.suggestion),
        ]);
    }

    write_line(out, "\nUnallocated")?;
    write_table(out, builder)
}

fn preference_note(preference: Preference<'_>) -> String {
    match preference {
        Preference::Preferred => "preferred shop".to_string(),
        Preference::Elsewhere(preferred) => format!("{preferred} preferred"),
        Preference::Indifferent => String::new(),
    }
}

fn write_table(out: &mut impl io::Write, builder: Builder) -> Result<(), RenderError> {
    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Rows::first(), Color::BOLD);

    writeln!(out, "{table}").map_err(|_err| RenderError::IO)
}

fn write_line(out: &mut impl io::Write, line: &str) -> Result<(), RenderError> {
    writeln!(out, "{line}").map_err(|_err| RenderError::IO)
}
