//! Nearest-match search for where a color sits in a raster.

use pigment_core::{Position, RgbColor};

use crate::raster::Raster;

/// Find where `target` appears in the raster, as percentage coordinates.
///
/// Scans every `sample_step`-th pixel in both axes, row-major, and keeps the
/// sampled coordinate with the smallest RGB distance to the target. Later
/// samples replace the best match only on a strictly smaller distance, so
/// ties go to the earliest sample. The result is approximate by design: a
/// closer pixel may sit between samples.
///
/// Returns `None` when the raster has no pixels or `sample_step` is zero.
pub fn find_color_position(
    raster: &Raster,
    target: RgbColor,
    sample_step: u32,
) -> Option<Position> {
    if raster.is_empty() || sample_step == 0 {
        return None;
    }

    let mut min_distance = f64::INFINITY;
    let mut best_x = 0u32;
    let mut best_y = 0u32;

    for y in (0..raster.height()).step_by(sample_step as usize) {
        for x in (0..raster.width()).step_by(sample_step as usize) {
            let distance = raster.pixel(x, y).distance(&target);
            if distance < min_distance {
                min_distance = distance;
                best_x = x;
                best_y = y;
            }
        }
    }

    Some(Position {
        x: best_x as f64 / raster.width() as f64 * 100.0,
        y: best_y as f64 / raster.height() as f64 * 100.0,
    })
}
