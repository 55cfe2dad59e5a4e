// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Example of evolving a double-slit heatmap over time, printed as text.
//!
//! Build and run with something like:
//! `cargo run --release --example heatmap -- 72 24`

use double_slit::{DoubleSlit, Heatmap};
use tracing_subscriber::EnvFilter;

// From darkest to brightest.
const SHADES: &[u8] = b" .:-=+*#%@";

fn main() {
    if let Err(e) = try_main() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn try_main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let width: usize = match args.next() {
        Some(w) => w.parse()?,
        None => 72,
    };
    let height: usize = match args.next() {
        Some(h) => h.parse()?,
        None => 24,
    };

    // Use a bigger time step than the default so the change is visible in a
    // terminal-sized image.
    let mut heatmap = Heatmap::new(DoubleSlit::default(), width, height)?.with_time_step(0.1);
    for _ in 0..height {
        heatmap.step();
    }

    for row in heatmap.rows().rows() {
        let line: String = row
            .iter()
            .map(|&g| SHADES[usize::from(g) * (SHADES.len() - 1) / 255] as char)
            .collect();
        println!("{line}");
    }
    println!("t offset after {height} rows: {:.2}", heatmap.time_offset());

    Ok(())
}
