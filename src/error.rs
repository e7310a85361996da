// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The single error type for everything in this crate that can fail.
//! The arithmetic and the escape-time evaluator never fail; only
//! parameter validation, the thread pool, and image output do.

use complex::Complex;
use std::io;

/// Everything that can go wrong while configuring, rendering, or
/// writing a Julia set.
#[derive(Debug, Fail)]
pub enum Error {
    /// The raster must be at least one pixel on a side.
    #[fail(display = "image dimension must be at least one pixel")]
    EmptyImage,

    /// The plane window must have a positive, finite half-width.
    #[fail(display = "scale must be a positive, finite number, got {}", _0)]
    InvalidScale(f64),

    /// At least one iteration must be performed per pixel.
    #[fail(display = "iteration depth must be at least one")]
    ZeroDepth,

    /// The squared-magnitude threshold must be positive and finite.
    #[fail(display = "divergence threshold must be a positive, finite number, got {}", _0)]
    InvalidThreshold(f64),

    /// Both components of the seed constant must be finite.
    #[fail(display = "seed constant must be finite, got {}", _0)]
    InvalidSeed(Complex),

    /// Rendering needs at least one worker.
    #[fail(display = "worker count must be at least one")]
    NoWorkers,

    /// One of the scoped render threads panicked.
    #[fail(display = "a render worker panicked")]
    WorkerPanicked,

    /// Writing the image failed.  The image crate reports unknown
    /// formats and encoder failures through here as well.
    #[fail(display = "I/O error: {}", _0)]
    Io(#[cause] io::Error),
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error::Io(err)
    }
}

/// Shorthand used throughout the crate.
pub type Result<T> = ::std::result::Result<T, Error>;
