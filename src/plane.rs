// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Contains the PlaneMapper struct, which describes a relationship
//! between a square of pixels with its origin at the upper-left
//! corner, and a square window on the complex plane centered on the
//! origin.  Rows grow downward and map to a falling imaginary part;
//! columns grow rightward and map to a falling real part.
use complex::Complex;
use itertools::iproduct;

/// A row and column on the integral plane.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Pixel {
    /// Counted from the top.
    pub row: usize,
    /// Counted from the left.
    pub col: usize,
}

impl Pixel {
    /// Constructor.
    pub fn new(row: usize, col: usize) -> Pixel {
        Pixel { row, col }
    }
}

/// Maps pixels of a `dim` x `dim` raster onto the complex window
/// `[-scale, scale] x [-scale, scale]`, and back.
#[derive(Copy, Clone, Debug)]
pub struct PlaneMapper {
    /// Pixels per side.
    pub dim: usize,
    /// Half-width of the complex window.
    pub scale: f64,
    // dim / 2, as a float, kept around because every mapping uses it.
    half: f64,
}

impl PlaneMapper {
    /// Constructor.  Takes the side of the raster and the half-width
    /// of the complex window.
    pub fn new(dim: usize, scale: f64) -> PlaneMapper {
        PlaneMapper {
            dim,
            scale,
            half: (dim as f64) / 2.0,
        }
    }

    /// The total number of pixels.  Used to size buffers.
    pub fn len(&self) -> usize {
        self.dim * self.dim
    }

    /// True for a zero-sized raster.
    pub fn is_empty(&self) -> bool {
        self.dim == 0
    }

    /// Given a pixel, return the point on the complex plane it
    /// stands for.  The pixel at `(dim/2, dim/2)` is the origin.
    pub fn pixel_to_point(&self, pixel: &Pixel) -> Complex {
        Complex::new(
            self.scale * (self.half - pixel.col as f64) / self.half,
            self.scale * (self.half - pixel.row as f64) / self.half,
        )
    }

    /// Given a point on the complex plane, return the nearest pixel,
    /// or None if the point falls outside the raster.
    pub fn point_to_pixel(&self, point: &Complex) -> Option<Pixel> {
        let col = (self.half - point.re * self.half / self.scale).round();
        let row = (self.half - point.im * self.half / self.scale).round();
        let limit = self.dim as f64;
        if !(col >= 0.0 && col < limit && row >= 0.0 && row < limit) {
            return None;
        }
        Some(Pixel::new(row as usize, col as usize))
    }

    /// The linear offset of a pixel in a row-major buffer.
    pub fn offset(&self, pixel: &Pixel) -> usize {
        pixel.col + pixel.row * self.dim
    }

    /// Every pixel of the raster, in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = Pixel> {
        iproduct!(0..self.dim, 0..self.dim).map(|(row, col)| Pixel::new(row, col))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_pixel_is_the_origin() {
        let pm = PlaneMapper::new(1080, 1.5);
        assert_eq!(pm.pixel_to_point(&Pixel::new(540, 540)), Complex::new(0.0, 0.0));
        let pm = PlaneMapper::new(4, 1.5);
        assert_eq!(pm.pixel_to_point(&Pixel::new(2, 2)), Complex::new(0.0, 0.0));
    }

    #[test]
    fn corners_map_to_the_window_edges() {
        let pm = PlaneMapper::new(4, 2.0);
        assert_eq!(pm.pixel_to_point(&Pixel::new(0, 0)), Complex::new(2.0, 2.0));
        assert_eq!(pm.pixel_to_point(&Pixel::new(0, 3)), Complex::new(-1.0, 2.0));
        assert_eq!(pm.pixel_to_point(&Pixel::new(3, 0)), Complex::new(2.0, -1.0));
    }

    #[test]
    fn point_to_pixel_inverts_pixel_to_point() {
        let pm = PlaneMapper::new(37, 1.5);
        for pixel in pm.pixels() {
            let point = pm.pixel_to_point(&pixel);
            assert_eq!(pm.point_to_pixel(&point), Some(pixel));
        }
    }

    #[test]
    fn point_to_pixel_rejects_points_off_the_raster() {
        let pm = PlaneMapper::new(4, 2.0);
        assert_eq!(pm.point_to_pixel(&Complex::new(3.0, 0.0)), None);
        assert_eq!(pm.point_to_pixel(&Complex::new(0.0, -2.5)), None);
        assert_eq!(pm.point_to_pixel(&Complex::new(0.0, 0.0)), Some(Pixel::new(2, 2)));
    }

    #[test]
    fn doubling_the_raster_keeps_the_mapping() {
        let small = PlaneMapper::new(8, 1.5);
        let large = PlaneMapper::new(16, 1.5);
        for p in small.pixels() {
            assert_eq!(
                small.pixel_to_point(&p),
                large.pixel_to_point(&Pixel::new(p.row * 2, p.col * 2))
            );
        }
    }

    #[test]
    fn offsets_are_row_major() {
        let pm = PlaneMapper::new(5, 1.0);
        assert_eq!(pm.len(), 25);
        assert!(!pm.is_empty());
        assert!(PlaneMapper::new(0, 1.0).is_empty());
        for (i, p) in pm.pixels().enumerate() {
            assert_eq!(pm.offset(&p), i);
        }
    }
}
