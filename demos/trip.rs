//! Trip Example
//!
//! Plans a shopping trip from a fixture set and prints one list per shop.
//!
//! Use `-f` to load a fixture set by name
//! Use `-s` once per shop to visit; leave it out to let the planner choose the shops
//! Set `RUST_LOG=trolley=debug` to see planning decisions

use std::{
    io::{self, Write},
    time::Instant,
};

use anyhow::Result;
use clap::Parser;
use humanize_duration::{Truncate, prelude::DurationExt};
use tracing_subscriber::EnvFilter;
use trolley::{fixtures::Fixture, trip::plan, utils::ExampleTripArgs};

/// Trip Example
pub fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = ExampleTripArgs::parse();

    let mut fixture = Fixture::with_base_path(&args.fixtures_dir);
    fixture.load_set(&args.fixture)?;

    let snapshot = fixture.snapshot();
    let selection = args.selection();

    let start = Instant::now();

    let trip = plan(&snapshot, &selection);

    let elapsed = start.elapsed();

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    trip.write_to(&mut handle)?;

    writeln!(
        handle,
        "\nPlanned {} of {} items in {} ({}s)",
        trip.allocated_len(),
        snapshot.needed_items().len(),
        elapsed.human(Truncate::Nano),
        elapsed.as_secs_f32()
    )?;

    Ok(())
}
