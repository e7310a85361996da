// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Writing a raster out.  The plain-text PPM is written by hand, since
//! its layout is fixed down to the whitespace; anything else goes
//! through the image crate.

use color::Rgb;
use error::Result;
use image;
use raster::Raster;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes `P3`, the dimensions, and the maximum sample value, then one
/// `R G B` line per pixel in row-major order.
pub fn write_ppm<W: Write>(raster: &Raster, out: W) -> Result<()> {
    let mut out = BufWriter::new(out);
    write!(out, "P3\n{} {}\n255\n", raster.dim(), raster.dim())?;
    for &Rgb(r, g, b) in raster.pixels() {
        writeln!(out, "{} {} {}", r, g, b)?;
    }
    out.flush()?;
    Ok(())
}

/// Saves a raster to `path`.  A `.ppm` extension gets the plain-text
/// format above; every other extension is left to the image crate to
/// recognize.
pub fn save<P: AsRef<Path>>(raster: &Raster, path: P) -> Result<()> {
    let path = path.as_ref();
    let plain = path
        .extension()
        .and_then(|e| e.to_str())
        .map_or(false, |e| e.eq_ignore_ascii_case("ppm"));
    if plain {
        debug!("writing plain PPM to {}", path.display());
        return write_ppm(raster, File::create(path)?);
    }
    debug!("encoding {} with the image crate", path.display());
    let side = raster.dim() as u32;
    image::save_buffer(path, &raster.to_bytes(), side, side, image::ColorType::RGB(8))?;
    Ok(())
}
