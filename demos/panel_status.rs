// SPDX-License-Identifier: MPL-2.0

//! Panel status walkthrough.
//!
//! Connects to a Micron panel, prints the armed/active state of every area
//! and zone, and optionally toggles one area by name.
//!
//! # Usage
//!
//! ```bash
//! # Print status using a config file
//! cargo run --example panel_status -- config.json
//!
//! # Print status, then toggle an area
//! cargo run --example panel_status -- config.json "Home"
//! ```
//!
//! The config file is JSON:
//!
//! ```json
//! {
//!     "http_url": "http://192.168.1.30/status.xml",
//!     "http_username": "admin",
//!     "http_password": "secret"
//! }
//! ```

use std::env;

use micron_lib::Panel;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().collect();
    let Some(config_path) = args.get(1) else {
        eprintln!("Usage: {} <config.json> [area_name]", args[0]);
        std::process::exit(1);
    };

    let panel = Panel::connect_file(config_path).await?;

    println!("Areas:");
    for area in panel.area_status()?.iter() {
        let state = if area.armed { "armed" } else { "disarmed" };
        println!("  {} ({}): {}", area.name, area.id, state);
    }

    println!("Zones:");
    for zone in panel.zone_status()?.iter() {
        let state = if zone.active { "active" } else { "clear" };
        println!("  {} ({}): {}", zone.name, zone.id, state);
    }

    if let Some(area_name) = args.get(2) {
        println!("Toggling {area_name}...");
        let status = panel.toggle_area_by_name(area_name).await?;
        match status.is_armed(area_name) {
            Some(true) => println!("{area_name} is now armed"),
            Some(false) => println!("{area_name} is now disarmed"),
            None => println!("{area_name} no longer reported by the panel"),
        }
    }

    Ok(())
}
