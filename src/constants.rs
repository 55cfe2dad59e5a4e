// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Useful constants.
 */

/// Added to each slit distance before dividing, so that a screen position
/// sitting exactly on a slit is finite (if very large).
pub const EPSILON: f64 = 1e-6;

/// Default position of the first slit along the screen axis.
pub const DEFAULT_SLIT1: f64 = 0.3;
/// Default position of the second slit along the screen axis.
pub const DEFAULT_SLIT2: f64 = 0.7;
/// Default Gaussian spread parameter.
pub const DEFAULT_T: f64 = 1.0;
/// Default wavenumber.
pub const DEFAULT_K: f64 = 10.0;

/// How much `t` is advanced per heatmap row.
pub const DEFAULT_TIME_STEP: f64 = 0.02;

/// The brightest value of a grayscale pixel.
pub(crate) const MAX_GRAY: f64 = 255.0;
