// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Example of calculating a row of double-slit intensities with Rust.
//!
//! Build and run with something like:
//! `cargo run --release --example pattern -- 10000`
//!
//! Set `RUST_LOG=debug` to see what the library is doing.

use double_slit::{screen_positions, simulate_double_slit, DoubleSlit};
use tracing_subscriber::EnvFilter;

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
    let num_points: usize = match args.next() {
        Some(n) => n.parse()?,
        None => 800,
    };

    // `DoubleSlit::default` has slits at 0.3 and 0.7, t = 1 and k = 10.
    let slits = DoubleSlit::default();
    let screen_xs = screen_positions(num_points)?;

    // Call double_slit.
    let intensities = slits.calc_intensities(&screen_xs);

    // Each element is the same as a scalar call.
    let mid = num_points / 2;
    assert_eq!(
        intensities[mid],
        simulate_double_slit(slits.slit1, slits.slit2, screen_xs[mid], slits.t, slits.k)
    );

    println!("Results for {} screen positions:", intensities.len());
    println!(
        "First: x = {:.4}, intensity = {:e}",
        screen_xs[0], intensities[0]
    );
    println!(
        "Last:  x = {:.4}, intensity = {:e}",
        screen_xs[num_points - 1],
        intensities[num_points - 1]
    );
    let (i_max, max) = intensities
        .iter()
        .enumerate()
        .fold((0, 0.0), |(i_max, max), (i, &v)| {
            if v > max {
                (i, v)
            } else {
                (i_max, max)
            }
        });
    println!("Brightest: x = {:.4}, intensity = {max:e}", screen_xs[i_max]);

    Ok(())
}
