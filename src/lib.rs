// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Intensity of a simplified double-slit interference model.

The core is [`simulate_double_slit`], a pure function of two slit positions, a
screen position, a spread parameter `t` and a wavenumber `k`. It is exported
over a C ABI (and therefore as a plain WebAssembly export) under the same name.
The [`pattern`] module builds rows and scrolling heatmaps out of many such
evaluations.
 */

pub mod constants;
mod ffi;
pub mod intensity;
pub mod pattern;

#[cfg(feature = "python")]
mod python;

pub use intensity::{amplitude, simulate_double_slit, DoubleSlit};
pub use pattern::{
    grayscale_to_rgba, normalise_to_grayscale, screen_positions, Heatmap, PatternError,
};

// Re-exports.
pub use ndarray;
pub use rayon;
