// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Code for evaluating many screen positions at once: rows of intensities,
//! grayscale pixel rows and a scrolling heatmap where each new row uses a
//! slightly larger `t`.

mod error;
#[cfg(test)]
mod tests;

pub use error::PatternError;

use ndarray::{prelude::*, s};
use rayon::prelude::*;
use tracing::{debug, trace};

use crate::{
    constants::{DEFAULT_TIME_STEP, MAX_GRAY},
    intensity::DoubleSlit,
};

/// Get `num_points` screen positions evenly spaced over [0, 1], inclusive of
/// both ends.
///
/// # Examples
///
/// ```
/// use double_slit::screen_positions;
///
/// assert_eq!(screen_positions(3).unwrap(), vec![0.0, 0.5, 1.0]);
/// assert!(screen_positions(1).is_err());
/// ```
pub fn screen_positions(num_points: usize) -> Result<Vec<f64>, PatternError> {
    if num_points < 2 {
        return Err(PatternError::TooFewPoints(num_points));
    }
    let last = (num_points - 1) as f64;
    Ok((0..num_points).map(|x| x as f64 / last).collect())
}

/// Scale a row of intensities to grayscale values, such that the brightest
/// intensity becomes 255. If nothing in the row is brighter than 0, the whole
/// row is 0. Values are floored, and anything that isn't a number becomes 0.
///
/// `gray` must have the same length as `intensities`.
pub fn normalise_to_grayscale(intensities: &[f64], gray: &mut [u8]) -> Result<(), PatternError> {
    if intensities.len() != gray.len() {
        return Err(PatternError::LengthMismatch {
            expected: intensities.len(),
            got: gray.len(),
        });
    }

    let max = intensities
        .iter()
        .fold(0.0, |max, &i| if i > max { i } else { max });
    for (g, &i) in gray.iter_mut().zip(intensities) {
        let norm = if max > 0.0 { i / max } else { 0.0 };
        // Float-to-int casts saturate and map NaN to 0.
        *g = (norm * MAX_GRAY).floor() as u8;
    }
    Ok(())
}

/// Expand grayscale values into opaque RGBA pixels. `rgba` must have exactly 4
/// bytes per gray value.
pub fn grayscale_to_rgba(gray: &[u8], rgba: &mut [u8]) -> Result<(), PatternError> {
    if rgba.len() != gray.len() * 4 {
        return Err(PatternError::LengthMismatch {
            expected: gray.len() * 4,
            got: rgba.len(),
        });
    }
    for (&g, pixel) in gray.iter().zip(rgba.chunks_exact_mut(4)) {
        pixel.copy_from_slice(&[g, g, g, u8::MAX]);
    }
    Ok(())
}

impl DoubleSlit {
    /// Calculate the intensities for many screen positions. The positions are
    /// evaluated in parallel; the number of threads used can be controlled by
    /// setting `RAYON_NUM_THREADS`.
    ///
    /// # Examples
    ///
    /// ```
    /// use double_slit::DoubleSlit;
    ///
    /// let slits = DoubleSlit::default();
    /// let intensities = slits.calc_intensities(&[0.0, 0.25, 0.5]);
    /// assert_eq!(intensities[1], slits.calc_intensity(0.25));
    /// ```
    pub fn calc_intensities(&self, screen_xs: &[f64]) -> Vec<f64> {
        debug!(num_points = screen_xs.len(), "calculating intensities");
        screen_xs
            .par_iter()
            .map(|&x| self.calc_intensity(x))
            .collect()
    }

    /// Calculate the intensities for many screen positions. This is the same
    /// as `calc_intensities` but uses pre-allocated memory. `results` should
    /// have a length equal to or greater than `screen_xs`; any extra elements
    /// are left untouched.
    pub fn calc_intensities_inner(
        &self,
        screen_xs: &[f64],
        results: &mut [f64],
    ) -> Result<(), PatternError> {
        if results.len() < screen_xs.len() {
            return Err(PatternError::BufferTooSmall {
                expected: screen_xs.len(),
                got: results.len(),
            });
        }

        debug!(num_points = screen_xs.len(), "calculating intensities");
        screen_xs
            .par_iter()
            .zip(results.par_iter_mut())
            .for_each(|(&x, result)| *result = self.calc_intensity(x));
        Ok(())
    }

    /// Calculate the intensities of a row of `width` points spanning the
    /// screen (see [`screen_positions`]).
    pub fn calc_row(&self, width: usize) -> Result<Vec<f64>, PatternError> {
        let screen_xs = screen_positions(width)?;
        Ok(self.calc_intensities(&screen_xs))
    }

    /// Calculate a row of `width` grayscale values spanning the screen.
    pub fn calc_grayscale_row(&self, width: usize) -> Result<Vec<u8>, PatternError> {
        let intensities = self.calc_row(width)?;
        let mut gray = vec![0; width];
        normalise_to_grayscale(&intensities, &mut gray)?;
        Ok(gray)
    }
}

/// A grayscale image that grows from the bottom. Each call to
/// [`Heatmap::step`] scrolls every row up by one and draws a fresh row at the
/// bottom, evaluated with `t` advanced by the time step. The top row is
/// discarded.
#[derive(Clone, Debug)]
pub struct Heatmap {
    slits: DoubleSlit,

    /// The amount added to `slits.t` for the next row.
    time_offset: f64,

    /// How much `time_offset` grows per row.
    time_step: f64,

    /// Grayscale pixels with shape (height, width). Row 0 is the top.
    rows: Array2<u8>,

    screen_xs: Vec<f64>,
    intensities: Vec<f64>,
    gray: Vec<u8>,
}

impl Heatmap {
    /// Create a new, all-black [`Heatmap`] with the
    /// [default](DEFAULT_TIME_STEP) time step.
    pub fn new(slits: DoubleSlit, width: usize, height: usize) -> Result<Heatmap, PatternError> {
        if height == 0 {
            return Err(PatternError::NoRows(height));
        }
        let screen_xs = screen_positions(width)?;
        Ok(Heatmap {
            slits,
            time_offset: 0.0,
            time_step: DEFAULT_TIME_STEP,
            rows: Array2::zeros((height, width)),
            screen_xs,
            intensities: vec![0.0; width],
            gray: vec![0; width],
        })
    }

    /// Use a custom time step.
    pub fn with_time_step(self, time_step: f64) -> Heatmap {
        Heatmap { time_step, ..self }
    }

    /// Scroll the image up by one row, calculate a new bottom row, then
    /// advance the time offset.
    pub fn step(&mut self) {
        let height = self.rows.nrows();
        trace!(time_offset = self.time_offset, height, "heatmap step");

        let shifted = self.rows.slice(s![1.., ..]).to_owned();
        self.rows.slice_mut(s![..height - 1, ..]).assign(&shifted);

        let slits = self.slits.with_time_offset(self.time_offset);
        self.screen_xs
            .par_iter()
            .zip(self.intensities.par_iter_mut())
            .for_each(|(&x, result)| *result = slits.calc_intensity(x));
        // The buffers are sized together in `new`, so this can't fail.
        if normalise_to_grayscale(&self.intensities, &mut self.gray).is_ok() {
            self.rows
                .row_mut(height - 1)
                .assign(&ArrayView1::from(self.gray.as_slice()));
        }

        self.time_offset += self.time_step;
    }

    /// Use new slit parameters for the rows that follow. Time starts again from
    /// zero; the rows already drawn are kept and keep scrolling.
    pub fn set_slits(&mut self, slits: DoubleSlit) {
        self.slits = slits;
        self.time_offset = 0.0;
    }

    /// Start time again from zero without touching the rows already drawn.
    pub fn reset(&mut self) {
        self.time_offset = 0.0;
    }

    /// Black out the image and start time again from zero.
    pub fn clear(&mut self) {
        self.rows.fill(0);
        self.time_offset = 0.0;
    }

    /// The grayscale pixels, with shape (height, width).
    pub fn rows(&self) -> ArrayView2<'_, u8> {
        self.rows.view()
    }

    /// The intensities that made the most recent bottom row, before they were
    /// normalised.
    pub fn last_intensities(&self) -> &[f64] {
        &self.intensities
    }

    /// The offset that will be added to `t` for the next row.
    pub fn time_offset(&self) -> f64 {
        self.time_offset
    }

    /// How much the time offset grows per row.
    pub fn time_step(&self) -> f64 {
        self.time_step
    }

    /// The slit parameters used for new rows.
    pub fn slits(&self) -> DoubleSlit {
        self.slits
    }

    /// The number of pixels per row.
    pub fn width(&self) -> usize {
        self.rows.ncols()
    }

    /// The number of rows.
    pub fn height(&self) -> usize {
        self.rows.nrows()
    }
}
