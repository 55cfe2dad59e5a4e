// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use approx::*;

use super::*;
use crate::simulate_double_slit;

#[test]
fn test_screen_positions() {
    let xs = screen_positions(5).unwrap();
    assert_abs_diff_eq!(xs.as_slice(), [0.0, 0.25, 0.5, 0.75, 1.0].as_slice());

    let xs = screen_positions(800).unwrap();
    assert_eq!(xs.len(), 800);
    assert_eq!(xs[0], 0.0);
    assert_eq!(xs[799], 1.0);

    assert_eq!(screen_positions(1), Err(PatternError::TooFewPoints(1)));
    assert_eq!(screen_positions(0), Err(PatternError::TooFewPoints(0)));
}

#[test]
fn test_calc_intensities_matches_scalar() {
    let slits = DoubleSlit::new(0.3, 0.7, 1.3, 10.0);
    let xs = screen_positions(1000).unwrap();
    let intensities = slits.calc_intensities(&xs);
    assert_eq!(intensities.len(), xs.len());
    for (&x, &i) in xs.iter().zip(&intensities) {
        assert_eq!(
            i.to_bits(),
            simulate_double_slit(0.3, 0.7, x, 1.3, 10.0).to_bits()
        );
    }
}

#[test]
fn test_calc_intensities_inner() {
    let slits = DoubleSlit::default();
    let xs = [0.1, 0.2, 0.3];
    let mut results = [-1.0; 5];
    slits.calc_intensities_inner(&xs, &mut results).unwrap();
    assert_eq!(&results[..3], slits.calc_intensities(&xs).as_slice());
    // Extra elements are untouched.
    assert_eq!(&results[3..], &[-1.0, -1.0]);

    let mut too_small = [0.0; 2];
    let result = slits.calc_intensities_inner(&xs, &mut too_small);
    assert_eq!(
        result,
        Err(PatternError::BufferTooSmall {
            expected: 3,
            got: 2
        })
    );
}

#[test]
fn test_normalise_to_grayscale() {
    let intensities = [0.0, 1.0, 2.0, 4.0, 3.999];
    let mut gray = [0; 5];
    normalise_to_grayscale(&intensities, &mut gray).unwrap();
    assert_eq!(gray, [0, 63, 127, 255, 254]);
}

#[test]
fn test_normalise_all_zero_row() {
    let intensities = [0.0; 4];
    let mut gray = [7; 4];
    normalise_to_grayscale(&intensities, &mut gray).unwrap();
    assert_eq!(gray, [0; 4]);
}

#[test]
fn test_normalise_special_values() {
    // NaN never becomes the maximum and maps to 0.
    let intensities = [f64::NAN, 2.0, 1.0];
    let mut gray = [0; 3];
    normalise_to_grayscale(&intensities, &mut gray).unwrap();
    assert_eq!(gray, [0, 255, 127]);

    // An infinite maximum makes finite values 0 and itself NaN (i.e. 0).
    let intensities = [f64::INFINITY, 2.0];
    let mut gray = [9; 2];
    normalise_to_grayscale(&intensities, &mut gray).unwrap();
    assert_eq!(gray, [0, 0]);
}

#[test]
fn test_normalise_length_mismatch() {
    let mut gray = [0; 2];
    assert_eq!(
        normalise_to_grayscale(&[1.0, 2.0, 3.0], &mut gray),
        Err(PatternError::LengthMismatch {
            expected: 3,
            got: 2
        })
    );
}

#[test]
fn test_grayscale_to_rgba() {
    let mut rgba = [0; 8];
    grayscale_to_rgba(&[10, 200], &mut rgba).unwrap();
    assert_eq!(rgba, [10, 10, 10, 255, 200, 200, 200, 255]);

    let mut wrong = [0; 7];
    assert!(grayscale_to_rgba(&[10, 200], &mut wrong).is_err());
}

#[test]
fn test_calc_grayscale_row() {
    let slits = DoubleSlit::default();
    let gray = slits.calc_grayscale_row(800).unwrap();
    assert_eq!(gray.len(), 800);
    assert_eq!(gray.iter().copied().max(), Some(255));

    assert_eq!(
        slits.calc_grayscale_row(1),
        Err(PatternError::TooFewPoints(1))
    );
}

#[test]
fn test_heatmap_new() {
    let heatmap = Heatmap::new(DoubleSlit::default(), 16, 4).unwrap();
    assert_eq!(heatmap.width(), 16);
    assert_eq!(heatmap.height(), 4);
    assert_eq!(heatmap.time_offset(), 0.0);
    assert_abs_diff_eq!(heatmap.time_step(), 0.02);
    assert!(heatmap.rows().iter().all(|&p| p == 0));

    assert_eq!(
        Heatmap::new(DoubleSlit::default(), 16, 0).unwrap_err(),
        PatternError::NoRows(0)
    );
    assert_eq!(
        Heatmap::new(DoubleSlit::default(), 1, 4).unwrap_err(),
        PatternError::TooFewPoints(1)
    );
}

#[test]
fn test_heatmap_step_scrolls_up() {
    let slits = DoubleSlit::default();
    let mut heatmap = Heatmap::new(slits, 32, 3).unwrap().with_time_step(0.5);

    heatmap.step();
    let first_row = slits.calc_grayscale_row(32).unwrap();
    assert_eq!(heatmap.rows().row(2).to_vec(), first_row);
    assert!(heatmap.rows().row(0).iter().all(|&p| p == 0));
    assert!(heatmap.rows().row(1).iter().all(|&p| p == 0));
    assert_abs_diff_eq!(heatmap.time_offset(), 0.5);

    heatmap.step();
    let second_row = slits.with_time_offset(0.5).calc_grayscale_row(32).unwrap();
    assert_eq!(heatmap.rows().row(1).to_vec(), first_row);
    assert_eq!(heatmap.rows().row(2).to_vec(), second_row);
    assert_abs_diff_eq!(heatmap.time_offset(), 1.0);

    let expected_intensities = slits.with_time_offset(0.5).calc_row(32).unwrap();
    assert_eq!(heatmap.last_intensities(), expected_intensities.as_slice());

    // Restarting time keeps the picture.
    let before = heatmap.rows().to_owned();
    heatmap.reset();
    assert_eq!(heatmap.time_offset(), 0.0);
    assert_eq!(heatmap.rows(), before.view());

    heatmap.clear();
    assert_eq!(heatmap.time_offset(), 0.0);
    assert!(heatmap.rows().iter().all(|&p| p == 0));
}

#[test]
fn test_heatmap_set_slits_keeps_rows() {
    let width = 16;
    let slits = DoubleSlit::default();
    let mut heatmap = Heatmap::new(slits, width, 3).unwrap();
    heatmap.step();
    heatmap.step();
    let old_rows = heatmap.rows().to_owned();
    let nonzero_before = old_rows.iter().filter(|&&p| p != 0).count();
    assert!(nonzero_before > 0);

    let new_slits = DoubleSlit::new(0.1, 0.9, 2.0, 25.0);
    heatmap.set_slits(new_slits);
    assert_eq!(heatmap.slits(), new_slits);
    assert_eq!(heatmap.time_offset(), 0.0);
    // Nothing is wiped by changing the parameters.
    assert_eq!(heatmap.rows(), old_rows.view());

    heatmap.step();
    assert_eq!(heatmap.rows().row(0), old_rows.row(1));
    assert_eq!(heatmap.rows().row(1), old_rows.row(2));
    assert_eq!(
        heatmap.rows().row(2).to_vec(),
        new_slits.calc_grayscale_row(width).unwrap()
    );
    assert_abs_diff_eq!(heatmap.time_offset(), heatmap.time_step());
}

#[test]
fn test_heatmap_single_row() {
    let slits = DoubleSlit::default();
    let mut heatmap = Heatmap::new(slits, 8, 1).unwrap();
    heatmap.step();
    heatmap.step();
    let expected = slits
        .with_time_offset(heatmap.time_step())
        .calc_grayscale_row(8)
        .unwrap();
    assert_eq!(heatmap.rows().row(0).to_vec(), expected);
}
