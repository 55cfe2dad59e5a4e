// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Python interface to double_slit via pyo3.
 */

use numpy::{IntoPyArray, PyArray1, PyArray2, ToPyArray};
use pyo3::create_exception;
use pyo3::prelude::*;

use crate::{
    constants::{DEFAULT_K, DEFAULT_SLIT1, DEFAULT_SLIT2, DEFAULT_T, DEFAULT_TIME_STEP},
    DoubleSlit as DoubleSlitRust, Heatmap as HeatmapRust, PatternError,
};

// Add a python exception for double_slit.
create_exception!(double_slit, DoubleSlitError, pyo3::exceptions::PyException);
impl std::convert::From<PatternError> for PyErr {
    fn from(err: PatternError) -> PyErr {
        DoubleSlitError::new_err(err.to_string())
    }
}

/// Calculate the interference intensity at `screen_x` for slits at `slit1`
/// and `slit2`.
#[pyfunction]
#[pyo3(name = "simulate_double_slit")]
fn simulate_double_slit_py(slit1: f64, slit2: f64, screen_x: f64, t: f64, k: f64) -> f64 {
    crate::simulate_double_slit(slit1, slit2, screen_x, t, k)
}

/// Get `num_points` screen positions evenly spanning [0, 1].
#[pyfunction]
fn screen_positions(py: Python<'_>, num_points: usize) -> PyResult<Bound<'_, PyArray1<f64>>> {
    let xs = crate::screen_positions(num_points)?;
    Ok(xs.into_pyarray_bound(py))
}

/// A Python class holding the parameters of a double-slit setup.
#[pyclass(name = "DoubleSlit")]
struct DoubleSlit {
    slits: DoubleSlitRust,
}

#[pymethods]
impl DoubleSlit {
    /// Create a new `DoubleSlit` object. Anything not given uses the same
    /// defaults as the Rust code.
    #[new]
    #[pyo3(signature = (slit1=DEFAULT_SLIT1, slit2=DEFAULT_SLIT2, t=DEFAULT_T, k=DEFAULT_K))]
    fn new(slit1: f64, slit2: f64, t: f64, k: f64) -> DoubleSlit {
        DoubleSlit {
            slits: DoubleSlitRust::new(slit1, slit2, t, k),
        }
    }

    /// Calculate the intensity at a single screen position.
    fn calc_intensity(&self, screen_x: f64) -> f64 {
        self.slits.calc_intensity(screen_x)
    }

    /// Calculate the intensities for many screen positions. These are
    /// calculated in parallel by Rust. The number of parallel threads used can
    /// be controlled by setting RAYON_NUM_THREADS.
    fn calc_intensities<'py>(
        &self,
        py: Python<'py>,
        screen_x: Vec<f64>,
    ) -> Bound<'py, PyArray1<f64>> {
        self.slits.calc_intensities(&screen_x).into_pyarray_bound(py)
    }

    /// Calculate a row of `width` grayscale values spanning the screen.
    fn calc_grayscale_row<'py>(
        &self,
        py: Python<'py>,
        width: usize,
    ) -> PyResult<Bound<'py, PyArray1<u8>>> {
        let gray = self.slits.calc_grayscale_row(width)?;
        Ok(gray.into_pyarray_bound(py))
    }
}

/// A scrolling grayscale image of the interference pattern, where every new
/// row advances `t`.
#[pyclass(name = "Heatmap")]
struct Heatmap {
    heatmap: HeatmapRust,
}

#[pymethods]
impl Heatmap {
    #[new]
    #[allow(clippy::too_many_arguments)]
    #[pyo3(signature = (width, height, slit1=DEFAULT_SLIT1, slit2=DEFAULT_SLIT2, t=DEFAULT_T, k=DEFAULT_K, time_step=DEFAULT_TIME_STEP))]
    fn new(
        width: usize,
        height: usize,
        slit1: f64,
        slit2: f64,
        t: f64,
        k: f64,
        time_step: f64,
    ) -> PyResult<Heatmap> {
        let slits = DoubleSlitRust::new(slit1, slit2, t, k);
        let heatmap = HeatmapRust::new(slits, width, height)?.with_time_step(time_step);
        Ok(Heatmap { heatmap })
    }

    /// Scroll up by one row and draw a new bottom row.
    fn step(&mut self) {
        self.heatmap.step();
    }

    /// Use new slit parameters for the following rows. Time starts again
    /// from zero, but the rows already drawn are kept.
    fn set_slits(&mut self, slit1: f64, slit2: f64, t: f64, k: f64) {
        self.heatmap.set_slits(DoubleSlitRust::new(slit1, slit2, t, k));
    }

    /// Start time again from zero, keeping the rows already drawn.
    fn reset(&mut self) {
        self.heatmap.reset();
    }

    /// Black out the image and start time again from zero.
    fn clear(&mut self) {
        self.heatmap.clear();
    }

    /// Get a copy of the grayscale pixels, with shape (height, width).
    fn rows<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray2<u8>> {
        self.heatmap.rows().to_pyarray_bound(py)
    }

    #[getter]
    fn time_offset(&self) -> f64 {
        self.heatmap.time_offset()
    }
}

/// A Python module interfacing with the double_slit code written in Rust. This
/// module depends on and will import numpy.
#[pymodule]
fn double_slit(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.py().import_bound("numpy")?;
    m.add_function(wrap_pyfunction!(simulate_double_slit_py, m)?)?;
    m.add_function(wrap_pyfunction!(screen_positions, m)?)?;
    m.add_class::<DoubleSlit>()?;
    m.add_class::<Heatmap>()?;
    m.add("DoubleSlitError", m.py().get_type_bound::<DoubleSlitError>())?;

    Ok(())
}
