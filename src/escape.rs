// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The escape-time evaluator.
//!
//! Each pixel is mapped to a point `z0` on the complex plane, and
//! `z <- z^2 + c` is iterated from there.  If the squared magnitude
//! of `z` ever exceeds the threshold the point has escaped and lies
//! outside the Julia set; if it survives `depth` iterations it is
//! assumed to be bounded.  A pixel's answer depends on nothing but
//! its coordinates and the parameters, so pixels may be evaluated in
//! any order, on any thread.

use complex::{add, mul, Complex};
use error::Result;
use params::JuliaParams;
use plane::{Pixel, PlaneMapper};

/// Whether a pixel's orbit escaped.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Membership {
    /// The orbit passed the threshold: outside the set.
    Diverged = 0,
    /// The orbit survived the iteration budget: inside the set.
    Bounded = 1,
}

impl Membership {
    /// 0 for diverged, 1 for bounded.
    pub fn value(self) -> u8 {
        self as u8
    }
}

/// The successive values of `z <- z^2 + c`, not including the
/// starting point.  Never ends on its own; pair it with `take`.
#[derive(Copy, Clone, Debug)]
pub struct Orbit {
    z: Complex,
    c: Complex,
}

impl Orbit {
    /// An orbit starting at `z0` under the seed `c`.
    pub fn new(z0: Complex, c: Complex) -> Orbit {
        Orbit { z: z0, c }
    }
}

impl Iterator for Orbit {
    type Item = Complex;

    fn next(&mut self) -> Option<Complex> {
        self.z = add(mul(self.z, self.z), self.c);
        Some(self.z)
    }
}

/// True when `z` counts as having escaped.  A NaN magnitude compares
/// false against everything, so it is caught explicitly.
#[inline]
fn escaped(z: Complex, threshold: f64) -> bool {
    let m = z.mag_sq();
    m > threshold || m.is_nan()
}

/// A validated parameter set and the plane mapping derived from it.
#[derive(Copy, Clone, Debug)]
pub struct Julia {
    params: JuliaParams,
    plane: PlaneMapper,
}

impl Julia {
    /// Validates the parameters; nothing after this point can fail.
    pub fn new(params: JuliaParams) -> Result<Julia> {
        params.validate()?;
        Ok(Julia {
            params,
            plane: PlaneMapper::new(params.dim, params.scale),
        })
    }

    /// The parameters this evaluator was built with.
    pub fn params(&self) -> &JuliaParams {
        &self.params
    }

    /// The pixel-to-plane mapping.
    pub fn plane(&self) -> &PlaneMapper {
        &self.plane
    }

    /// The orbit seeded at a pixel.
    pub fn orbit(&self, pixel: &Pixel) -> Orbit {
        Orbit::new(self.plane.pixel_to_point(pixel), self.params.seed)
    }

    /// The 1-based iteration at which the orbit from `z0` escaped, or
    /// None if it stayed bounded for the whole budget.
    pub fn escape_step(&self, z0: Complex) -> Option<usize> {
        let threshold = self.params.threshold;
        Orbit::new(z0, self.params.seed)
            .take(self.params.depth)
            .position(|z| escaped(z, threshold))
            .map(|i| i + 1)
    }

    /// Membership of the pixel at `row`, `col`.
    pub fn membership(&self, row: usize, col: usize) -> Membership {
        self.membership_at(&Pixel::new(row, col))
    }

    /// Membership of a pixel.
    pub fn membership_at(&self, pixel: &Pixel) -> Membership {
        match self.escape_step(self.plane.pixel_to_point(pixel)) {
            Some(_) => Membership::Diverged,
            None => Membership::Bounded,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::iproduct;
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;
    use std::f64;

    fn small(dim: usize) -> Julia {
        Julia::new(JuliaParams::default().with_dim(dim)).unwrap()
    }

    fn grid(julia: &Julia) -> Vec<u8> {
        julia
            .plane()
            .pixels()
            .map(|p| julia.membership_at(&p).value())
            .collect()
    }

    #[test]
    fn orbit_from_the_origin_matches_hand_computation() {
        let julia = small(1080);
        let z0 = julia.plane().pixel_to_point(&Pixel::new(540, 540));
        assert_eq!(z0, Complex::new(0.0, 0.0));

        let expected = [
            (-0.8, 0.156),
            (-0.184336, -0.0936),
            (-0.774781199104, 0.1905076992),
            (-0.23600727696944535, -0.1392035672494403),
            (-0.763678198352437, 0.22170610970194693),
            (-0.26594920844034764, -0.1826242448418212),
        ];
        let orbit: Vec<Complex> = julia.orbit(&Pixel::new(540, 540)).take(6).collect();
        for (z, &(re, im)) in orbit.iter().zip(expected.iter()) {
            assert!(z.approx_eq(Complex::new(re, im), 1e-12), "{} != ({}, {})", z, re, im);
            assert!(z.mag_sq() <= 1000.0);
        }
        assert_eq!(julia.membership(540, 540), Membership::Bounded);
    }

    #[test]
    fn escape_is_reported_on_the_first_step_past_the_threshold() {
        let julia = Julia::new(JuliaParams::default().with_threshold(4.0)).unwrap();
        // 3^2 - 0.8 = 8.2 on the first step
        assert_eq!(julia.escape_step(Complex::new(3.0, 0.0)), Some(1));
        assert_eq!(julia.escape_step(Complex::new(0.0, 0.0)), None);
    }

    #[test]
    fn far_corners_diverge() {
        let julia = small(1080);
        assert_eq!(julia.membership(0, 0), Membership::Diverged);
        assert_eq!(julia.membership(1079, 1079), Membership::Diverged);
    }

    #[test]
    fn nan_magnitude_counts_as_escaped() {
        assert!(escaped(Complex::new(f64::NAN, 0.0), 1000.0));
        assert!(escaped(Complex::new(f64::INFINITY, 0.0), 1000.0));
        assert!(!escaped(Complex::new(1.0, 1.0), 1000.0));
        let julia = small(4);
        assert!(julia.escape_step(Complex::new(f64::NAN, f64::NAN)).is_some());
    }

    #[test]
    fn evaluation_is_deterministic() {
        let julia = small(64);
        for (row, col) in iproduct!(0..64, 0..64) {
            assert_eq!(julia.membership(row, col), julia.membership(row, col));
        }
    }

    #[test]
    fn four_by_four_grid() {
        let julia = small(4);
        let expected: Vec<u8> = vec![
            0, 0, 0, 0,
            0, 0, 1, 0,
            0, 0, 1, 0,
            0, 0, 1, 0,
        ];
        assert_eq!(grid(&julia), expected);
        assert_eq!(grid(&julia), grid(&julia));
    }

    #[test]
    fn grid_does_not_depend_on_evaluation_order() {
        let julia = small(4);
        let mut pixels: Vec<Pixel> = julia.plane().pixels().collect();
        pixels.shuffle(&mut StdRng::seed_from_u64(0x5eed));
        let mut shuffled = vec![0u8; julia.plane().len()];
        for p in &pixels {
            shuffled[julia.plane().offset(p)] = julia.membership_at(p).value();
        }
        assert_eq!(shuffled, grid(&julia));
    }

    #[test]
    fn doubling_the_raster_keeps_memberships() {
        let small4 = small(4);
        let small8 = small(8);
        for (row, col) in iproduct!(0..4, 0..4) {
            assert_eq!(
                small4.membership(row, col),
                small8.membership(row * 2, col * 2)
            );
        }
        let large = small(128);
        let larger = small(256);
        for (row, col) in iproduct!(0..128, 0..128) {
            assert_eq!(
                large.membership(row, col),
                larger.membership(row * 2, col * 2)
            );
        }
    }
}
