// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Errors associated with building interference patterns.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    #[error("At least 2 screen points are needed to span the screen (got {0})")]
    TooFewPoints(usize),

    #[error("The results buffer has room for {got} intensities, but {expected} screen positions were given")]
    BufferTooSmall { expected: usize, got: usize },

    /// The input and output rows of a conversion have incompatible lengths.
    #[error("Expected an output of length {expected}, but got {got}")]
    LengthMismatch { expected: usize, got: usize },

    #[error("A heatmap needs at least 1 row (got {0})")]
    NoRows(usize),
}
