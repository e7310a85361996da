// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The raster: a `dim` x `dim` buffer of colors, filled by asking the
//! evaluator about every pixel.
//!
//! The multi-threaded fill cuts the buffer into contiguous bands of
//! whole rows, one band per worker, and hands each worker a mutable
//! slice of its own band.  Since no two workers share a byte of
//! output, nothing is locked; the crossbeam scope is the only
//! barrier.

use color::{ColorMap, Rgb};
use crossbeam;
use error::{Error, Result};
use escape::{Julia, Membership};
use plane::{Pixel, PlaneMapper};
use progress::Progress;

/// Calls `f` for every pixel and stores the answer at that pixel's
/// offset.  Progress is reported one row at a time.
fn fill<T, F>(
    plane: &PlaneMapper,
    buffer: &mut [T],
    threads: usize,
    progress: &dyn Progress,
    f: F,
) -> Result<()>
where
    T: Send,
    F: Fn(&Pixel) -> T + Sync,
{
    if threads == 0 {
        return Err(Error::NoWorkers);
    }
    debug_assert_eq!(buffer.len(), plane.len());
    let dim = plane.dim;
    if dim == 0 {
        return Ok(());
    }

    let fill_band = |first_row: usize, band: &mut [T]| {
        for (i, row) in band.chunks_mut(dim).enumerate() {
            for (col, cell) in row.iter_mut().enumerate() {
                *cell = f(&Pixel::new(first_row + i, col));
            }
            progress.advance(1);
        }
    };

    if threads == 1 {
        fill_band(0, buffer);
        return Ok(());
    }

    let band_rows = (dim + threads - 1) / threads;
    debug!(
        "filling {}x{} raster on {} workers, {} rows each",
        dim, dim, threads, band_rows
    );
    let fill_band = &fill_band;
    crossbeam::scope(|spawner| {
        for (index, band) in buffer.chunks_mut(band_rows * dim).enumerate() {
            spawner.spawn(move |_| fill_band(index * band_rows, band));
        }
    })
    .map_err(|_| Error::WorkerPanicked)
}

/// The membership of every pixel, row-major.
pub fn memberships(julia: &Julia, threads: usize, progress: &dyn Progress) -> Result<Vec<Membership>> {
    let plane = julia.plane();
    let mut grid = vec![Membership::Diverged; plane.len()];
    fill(plane, &mut grid, threads, progress, |p| julia.membership_at(p))?;
    progress.finish();
    Ok(grid)
}

/// A square image, stored row-major.
#[derive(Clone, Debug, PartialEq)]
pub struct Raster {
    dim: usize,
    pixels: Vec<Rgb>,
}

impl Raster {
    /// A raster of the given side, all black.
    pub fn new(dim: usize) -> Raster {
        Raster {
            dim,
            pixels: vec![Rgb::default(); dim * dim],
        }
    }

    /// Evaluates every pixel of `julia` and colors it through
    /// `colors`.
    pub fn render<C>(julia: &Julia, colors: &C, threads: usize, progress: &dyn Progress) -> Result<Raster>
    where
        C: ColorMap + ?Sized,
    {
        let mut raster = Raster::new(julia.params().dim);
        fill(julia.plane(), &mut raster.pixels, threads, progress, |p| {
            colors.color(julia.membership_at(p))
        })?;
        progress.finish();
        Ok(raster)
    }

    /// Pixels per side.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// All pixels, row-major.
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// The color at a pixel, or None if it is off the raster.
    pub fn get(&self, pixel: &Pixel) -> Option<Rgb> {
        if pixel.row >= self.dim || pixel.col >= self.dim {
            return None;
        }
        Some(self.pixels[pixel.col + pixel.row * self.dim])
    }

    /// The raster as packed 8-bit RGB, the layout the image crate
    /// expects.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for &Rgb(r, g, b) in &self.pixels {
            bytes.extend_from_slice(&[r, g, b]);
        }
        bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use color::TwoTone;
    use params::JuliaParams;
    use progress::Silent;

    fn julia(dim: usize) -> Julia {
        Julia::new(JuliaParams::default().with_dim(dim)).unwrap()
    }

    #[test]
    fn single_and_threaded_fills_agree() {
        let j = julia(61);
        let single = memberships(&j, 1, &Silent).unwrap();
        for threads in 2..9 {
            assert_eq!(memberships(&j, threads, &Silent).unwrap(), single);
        }
    }

    #[test]
    fn more_workers_than_rows() {
        let j = julia(4);
        assert_eq!(
            memberships(&j, 16, &Silent).unwrap(),
            memberships(&j, 1, &Silent).unwrap()
        );
    }

    #[test]
    fn zero_workers_is_an_error() {
        match memberships(&julia(4), 0, &Silent) {
            Err(Error::NoWorkers) => {}
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn colors_follow_memberships() {
        let j = julia(4);
        let colors = TwoTone::default();
        let raster = Raster::render(&j, &colors, 3, &Silent).unwrap();
        let grid = memberships(&j, 1, &Silent).unwrap();
        assert_eq!(raster.dim(), 4);
        for (pixel, membership) in raster.pixels().iter().zip(grid.iter()) {
            assert_eq!(*pixel, colors.color(*membership));
        }
        assert_eq!(raster.get(&Pixel::new(1, 2)), Some(Rgb(3, 78, 252)));
        assert_eq!(raster.get(&Pixel::new(0, 0)), Some(Rgb(0, 0, 0)));
        assert_eq!(raster.get(&Pixel::new(4, 0)), None);
    }

    #[test]
    fn bytes_are_packed_rgb() {
        let raster = Raster::render(&julia(4), &TwoTone::default(), 1, &Silent).unwrap();
        let bytes = raster.to_bytes();
        assert_eq!(bytes.len(), 48);
        assert_eq!(&bytes[6 * 3..6 * 3 + 3], &[3u8, 78, 252][..]);
    }
}
