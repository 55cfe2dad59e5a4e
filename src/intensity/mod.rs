// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The double-slit intensity kernel.


use crate::constants::{DEFAULT_K, DEFAULT_SLIT1, DEFAULT_SLIT2, DEFAULT_T, EPSILON};

/// Calculate the interference intensity at `screen_x` for slits at `slit1` and
/// `slit2`.
///
/// Each slit contributes a real amplitude (see [`amplitude`]); the intensity
/// is the square of their sum. Nothing is validated. A `t` of zero or below
/// produces infinities or NaNs, which are returned as-is, and a screen position
/// on top of a slit gives a large but finite value.
///
/// # Examples
///
/// ```
/// use double_slit::simulate_double_slit;
///
/// let a = simulate_double_slit(-1.0, 1.0, 0.0, 1.0, 1.0);
/// let b = simulate_double_slit(1.0, -1.0, 0.0, 1.0, 1.0);
/// assert_eq!(a, b);
/// assert!(a > 0.0);
/// ```
#[inline]
pub fn simulate_double_slit(slit1: f64, slit2: f64, screen_x: f64, t: f64, k: f64) -> f64 {
    let d1 = (screen_x - slit1).abs();
    let d2 = (screen_x - slit2).abs();
    let total = amplitude(d1, t, k) + amplitude(d2, t, k);
    total * total
}

/// The contribution of a single slit at `distance` from the screen position: a
/// Gaussian envelope of width `t`, a cosine phase with wavenumber `k`, and a
/// `1 / distance` falloff.
#[inline]
pub fn amplitude(distance: f64, t: f64, k: f64) -> f64 {
    (-distance * distance / (2.0 * t)).exp() * (k * distance).cos() / (distance + EPSILON)
}

/// The parameters of a double-slit setup that stay fixed while the screen
/// position varies.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DoubleSlit {
    /// Position of the first slit along the screen axis.
    pub slit1: f64,

    /// Position of the second slit along the screen axis.
    pub slit2: f64,

    /// The spread parameter of each slit's Gaussian envelope. Must be positive
    /// for finite results.
    pub t: f64,

    /// The wavenumber.
    pub k: f64,
}

impl Default for DoubleSlit {
    fn default() -> Self {
        DoubleSlit {
            slit1: DEFAULT_SLIT1,
            slit2: DEFAULT_SLIT2,
            t: DEFAULT_T,
            k: DEFAULT_K,
        }
    }
}

impl DoubleSlit {
    /// Create a new [`DoubleSlit`].
    pub fn new(slit1: f64, slit2: f64, t: f64, k: f64) -> DoubleSlit {
        DoubleSlit { slit1, slit2, t, k }
    }

    /// Get a copy of this setup with `t` shifted by `offset`.
    pub fn with_time_offset(self, offset: f64) -> DoubleSlit {
        DoubleSlit {
            t: self.t + offset,
            ..self
        }
    }

    /// Calculate the intensity at a single screen position.
    ///
    /// # Examples
    ///
    /// ```
    /// use double_slit::{simulate_double_slit, DoubleSlit};
    ///
    /// let slits = DoubleSlit::new(0.3, 0.7, 1.0, 10.0);
    /// assert_eq!(
    ///     slits.calc_intensity(0.5),
    ///     simulate_double_slit(0.3, 0.7, 0.5, 1.0, 10.0)
    /// );
    /// ```
    #[inline]
    pub fn calc_intensity(&self, screen_x: f64) -> f64 {
        simulate_double_slit(self.slit1, self.slit2, screen_x, self.t, self.k)
    }
}
