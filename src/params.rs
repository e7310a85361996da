// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The iteration parameters.  These are built once, validated once,
//! and then only ever read.

use complex::Complex;
use error::{Error, Result};

/// Pixels per side of the reference image.
pub const DEFAULT_DIM: usize = 1080;
/// Half-width of the plane window of the reference image.
pub const DEFAULT_SCALE: f64 = 1.5;
/// The reference seed constant, `-0.8 + 0.156i`.
pub const DEFAULT_SEED: Complex = Complex {
    re: -0.8,
    im: 0.156,
};
/// Iterations per pixel before a point is assumed bounded.
pub const DEFAULT_DEPTH: usize = 200;
/// Squared magnitude past which a point is considered to have escaped.
pub const DEFAULT_THRESHOLD: f64 = 1000.0;

/// Everything the evaluator needs to know besides the pixel.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct JuliaParams {
    /// The image is `dim` pixels on each side.
    pub dim: usize,
    /// The plane window spans `-scale..scale` on both axes.
    pub scale: f64,
    /// The constant `c` in `z <- z^2 + c`.
    pub seed: Complex,
    /// The iteration budget.
    pub depth: usize,
    /// Compared against the squared magnitude, never the magnitude.
    pub threshold: f64,
}

impl Default for JuliaParams {
    fn default() -> JuliaParams {
        JuliaParams {
            dim: DEFAULT_DIM,
            scale: DEFAULT_SCALE,
            seed: DEFAULT_SEED,
            depth: DEFAULT_DEPTH,
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl JuliaParams {
    /// Replace the image dimension.
    pub fn with_dim(self, dim: usize) -> JuliaParams {
        JuliaParams { dim, ..self }
    }

    /// Replace the plane half-width.
    pub fn with_scale(self, scale: f64) -> JuliaParams {
        JuliaParams { scale, ..self }
    }

    /// Replace the seed constant.
    pub fn with_seed(self, seed: Complex) -> JuliaParams {
        JuliaParams { seed, ..self }
    }

    /// Replace the iteration budget.
    pub fn with_depth(self, depth: usize) -> JuliaParams {
        JuliaParams { depth, ..self }
    }

    /// Replace the divergence threshold.
    pub fn with_threshold(self, threshold: f64) -> JuliaParams {
        JuliaParams { threshold, ..self }
    }

    /// Rejects parameter sets the evaluator cannot give a meaningful
    /// answer for.  The evaluator itself never checks again.
    pub fn validate(&self) -> Result<()> {
        if self.dim == 0 {
            return Err(Error::EmptyImage);
        }
        if !(self.scale.is_finite() && self.scale > 0.0) {
            return Err(Error::InvalidScale(self.scale));
        }
        if self.depth == 0 {
            return Err(Error::ZeroDepth);
        }
        if !(self.threshold.is_finite() && self.threshold > 0.0) {
            return Err(Error::InvalidThreshold(self.threshold));
        }
        if !self.seed.is_finite() {
            return Err(Error::InvalidSeed(self.seed));
        }
        Ok(())
    }
}
