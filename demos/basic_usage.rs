//! Basic logger usage example
//!
//! Demonstrates the process-wide registry, per-logger thresholds, name
//! filters and one-shot metadata with the default console printer.
//!
//! Run with: cargo run --example basic_usage
//! Try also: BROLOG=wrn cargo run --example basic_usage

use brolog::prelude::*;
use brolog::info;

fn main() -> Result<()> {
    println!("=== brolog - Basic Usage Example ===\n");

    let registry = Registry::global();
    registry.set_debug();

    let api = Logger::new("api");
    let db = Logger::new("db");

    println!("1. Logging at different levels:");
    api.debug(["This is a debug message"])?;
    api.info(["This is an info message"])?;
    api.warn(["This is a warning message"])?;
    api.error(["This is an error message"])?;

    println!("\n2. Per-logger threshold set to WRN on 'db':");
    db.set_warn();
    db.info(["Info message (hidden)"])?;
    db.warn(["Warning message (visible)"])?;

    println!("\n3. Mixed payload parts and metadata:");
    let port = 8080;
    info!(api.attach_meta("startup"), "listening on port", port)?;
    info!(api, "metadata is gone on the next message")?;

    println!("\n4. Name filter 'db' hides the api logger:");
    registry.set_name_filter("db")?;
    api.error(["Error message (hidden)"])?;
    db.error(["Error message (visible)"])?;
    registry.clear_name_filter();

    println!("\n5. Global threshold OFF silences everything:");
    registry.off();
    api.error(["Error message (hidden)"])?;

    println!("\n=== Example completed successfully! ===");
    Ok(())
}
