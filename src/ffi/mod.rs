// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Code for allowing other languages to talk to this Rust library. A C header
//! is generated into `include/` at build time.
//!
//! `simulate_double_slit` never fails. Every other function returns an exit
//! code; if it is non-zero, the error message can be obtained by (1) getting
//! the length of the error string with `ds_last_error_length` and (2) calling
//! `ds_last_error_message` with a buffer at least that long.


use std::{
    cell::RefCell,
    ffi::{c_char, c_int},
    slice,
};

use crate::{intensity, pattern::grayscale_to_rgba, DoubleSlit};

thread_local! {
    static LAST_ERROR: RefCell<Option<String>> = const { RefCell::new(None) };
}

/// Set the most recent error for this thread, clearing any previous one.
pub(crate) fn update_last_error(err: String) {
    LAST_ERROR.with(|prev| {
        *prev.borrow_mut() = Some(err);
    });
}

/// Take the most recent error for this thread, if there is one.
fn take_last_error() -> Option<String> {
    LAST_ERROR.with(|prev| prev.borrow_mut().take())
}

/// Unwrap a `Result`, or record its error as the last error and return 1 from
/// the enclosing FFI function.
macro_rules! ffi_error {
    ($result:expr) => {{
        match $result {
            Ok(r) => r,
            Err(e) => {
                update_last_error(e.to_string());
                return 1;
            }
        }
    }};
}

/// Calculate the number of bytes in the last error's message, including the
/// trailing null byte. If there is no error, 0 is returned.
#[no_mangle]
pub extern "C" fn ds_last_error_length() -> c_int {
    LAST_ERROR.with(|prev| match *prev.borrow() {
        Some(ref err) => err.len() as c_int + 1,
        None => 0,
    })
}

/// Write the most recent error message into a caller-provided buffer as a
/// null-terminated string, clearing the error.
///
/// # Returns
///
/// * The number of bytes written (excluding the null byte), 0 if there was no
///   error, or -1 if `buffer` is null or `length` is smaller than
///   `ds_last_error_length`.
///   On -1, the error is kept.
///
#[no_mangle]
pub unsafe extern "C" fn ds_last_error_message(buffer: *mut c_char, length: c_int) -> c_int {
    if buffer.is_null() || length <= 0 {
        return -1;
    }

    let last_error = match take_last_error() {
        Some(err) => err,
        None => return 0,
    };

    let buffer = slice::from_raw_parts_mut(buffer as *mut u8, length as usize);
    if last_error.len() >= buffer.len() {
        // Put it back; the caller can try again with a bigger buffer.
        update_last_error(last_error);
        return -1;
    }

    buffer[..last_error.len()].copy_from_slice(last_error.as_bytes());
    buffer[last_error.len()] = 0;
    last_error.len() as c_int
}

/// Calculate the interference intensity at `screen_x` for slits at `slit1` and
/// `slit2`, with Gaussian spread `t` and wavenumber `k`.
///
/// There is no error path. Degenerate inputs (e.g. `t <= 0`) give infinities
/// or NaNs.
#[no_mangle]
pub extern "C" fn simulate_double_slit(
    slit1: f64,
    slit2: f64,
    screen_x: f64,
    t: f64,
    k: f64,
) -> f64 {
    intensity::simulate_double_slit(slit1, slit2, screen_x, t, k)
}

/// Calculate the intensities for many screen positions. Rust will calculate
/// the intensities in parallel.
///
/// # Arguments
///
/// * `slit1` - The position of the first slit
/// * `slit2` - The position of the second slit
/// * `t` - The spread of each slit's Gaussian envelope
/// * `k` - The wavenumber
/// * `num_points` - The number of screen positions in `screen_x`
/// * `screen_x` - A pointer to `num_points` screen positions
/// * `results` - A pointer to a buffer with at least `num_points *
///   sizeof(double)` bytes allocated. The intensities are written here.
///
/// # Returns
///
/// * An exit code integer. If this is non-zero then an error occurred; the
///   details can be obtained by (1) getting the length of the error string by
///   calling `ds_last_error_length` and (2) calling `ds_last_error_message`
///   with a string buffer with a length at least equal to the error length.
///
#[no_mangle]
pub unsafe extern "C" fn calc_intensities(
    slit1: f64,
    slit2: f64,
    t: f64,
    k: f64,
    num_points: u32,
    screen_x: *const f64,
    results: *mut f64,
) -> i32 {
    if screen_x.is_null() || results.is_null() {
        update_last_error("A null pointer was given for screen_x or results".to_string());
        return 1;
    }

    let slits = DoubleSlit::new(slit1, slit2, t, k);
    let xs = slice::from_raw_parts(screen_x, num_points as usize);
    let results_s = slice::from_raw_parts_mut(results, xs.len());
    // Both slices have the same length, so this can't fail.
    let _ = slits.calc_intensities_inner(xs, results_s);
    0
}

/// Calculate one row of an interference image: `width` screen positions evenly
/// spanning [0, 1], normalised so that the brightest is 255, written as opaque
/// RGBA pixels.
///
/// # Arguments
///
/// * `slit1` - The position of the first slit
/// * `slit2` - The position of the second slit
/// * `t` - The spread of each slit's Gaussian envelope
/// * `k` - The wavenumber
/// * `width` - The number of pixels in the row. Must be at least 2.
/// * `rgba` - A pointer to a buffer with at least `4 * width` bytes allocated.
///
/// # Returns
///
/// * An exit code integer. If this is non-zero then an error occurred; the
///   details can be obtained by (1) getting the length of the error string by
///   calling `ds_last_error_length` and (2) calling `ds_last_error_message`
///   with a string buffer with a length at least equal to the error length.
///
#[no_mangle]
pub unsafe extern "C" fn calc_grayscale_row(
    slit1: f64,
    slit2: f64,
    t: f64,
    k: f64,
    width: u32,
    rgba: *mut u8,
) -> i32 {
    if rgba.is_null() {
        update_last_error("A null pointer was given for rgba".to_string());
        return 1;
    }

    let slits = DoubleSlit::new(slit1, slit2, t, k);
    let gray = ffi_error!(slits.calc_grayscale_row(width as usize));
    let rgba_s = slice::from_raw_parts_mut(rgba, 4 * gray.len());
    ffi_error!(grayscale_to_rgba(&gray, rgba_s));
    0
}
