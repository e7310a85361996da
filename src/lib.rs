#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Julia set renderer
//!
//! A Julia set is the set of points on the complex plane whose orbit
//! under `z <- z^2 + c`, for some fixed seed `c`, stays bounded
//! forever.  We can't iterate forever, so this crate uses the
//! escape-time approximation: every pixel of a square image is mapped
//! to a point on the plane, the recurrence is run from that point for
//! a fixed number of steps, and if the squared magnitude of `z` ever
//! crosses a threshold the point has escaped.  Points that never
//! escape are in the set and get painted.
//!
//! No pixel depends on any other, so the image is cut into bands of
//! rows and each band is rendered on its own thread.

extern crate crossbeam;
#[macro_use]
extern crate failure;
extern crate image;
extern crate itertools;
#[macro_use]
extern crate log;
extern crate num;

#[cfg(test)]
extern crate rand;
#[cfg(test)]
extern crate tempfile;

pub mod color;
pub mod complex;
pub mod error;
pub mod escape;
pub mod params;
pub mod plane;
pub mod ppm;
pub mod progress;
pub mod raster;

pub use color::{ColorMap, Rgb, TwoTone};
pub use complex::Complex;
pub use error::{Error, Result};
pub use escape::{Julia, Membership, Orbit};
pub use params::JuliaParams;
pub use plane::{Pixel, PlaneMapper};
pub use progress::{Progress, ProgressBar, Silent};
pub use raster::{memberships, Raster};
