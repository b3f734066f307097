//! Cellular (Worley) noise.
//!
//! Every integer cell owns one feature point: the cell corner displaced by a
//! hashed unit direction scaled by the jitter. The 3×3(×3) block of cells
//! around the rounded query point is scanned, and the result is derived either
//! from the single nearest feature or from the four smallest distances.

use crate::config::{CellularReturnType, NoiseConfig};
use crate::math::{Float, fast_round};

use super::hash::{cell_2d, cell_3d, val_coord_2d, val_coord_3d};

/// Distance assigned before any feature point has been seen.
const NO_FEATURE: Float = 999_999.0;

/// Insert `distance` into an ascending four-slot ranking, dropping the largest.
///
/// Each slot becomes `max(min(slot, distance), previous slot)`, walking from the
/// top so every slot still reads its predecessor's old value.
#[inline]
fn insert_ranked(ranked: &mut [Float; 4], distance: Float) {
    for i in (1..ranked.len()).rev() {
        ranked[i] = ranked[i].min(distance).max(ranked[i - 1]);
    }
    ranked[0] = ranked[0].min(distance);
}

/// Combine two ranked distances according to a two-edge return type.
#[inline]
fn combine_ranked(
    return_type: CellularReturnType,
    ranked: &[Float; 4],
    i0: usize,
    i1: usize,
) -> Float {
    match return_type {
        CellularReturnType::Distance2 => ranked[i1],
        CellularReturnType::Distance2Add => ranked[i1] + ranked[i0],
        CellularReturnType::Distance2Sub => ranked[i1] - ranked[i0],
        CellularReturnType::Distance2Mul => ranked[i1] * ranked[i0],
        CellularReturnType::Distance2Div => ranked[i0] / ranked[i1],
        CellularReturnType::CellValue
        | CellularReturnType::NoiseLookup
        | CellularReturnType::Distance => 0.0,
    }
}

/// Cellular noise at a frequency-scaled 2D point.
#[must_use]
pub fn cellular_2d(config: &NoiseConfig, x: Float, y: Float) -> Float {
    let return_type = config.cellular_return_type();
    if return_type.uses_ranked_distances() {
        let (i0, i1) = config.cellular_distance_indices();
        return combine_ranked(return_type, &ranked_distances_2d(config, x, y), i0, i1);
    }

    let (distance, [xc, yc]) = nearest_2d(config, x, y);
    match return_type {
        CellularReturnType::CellValue => val_coord_2d(config.seed(), xc, yc),
        CellularReturnType::NoiseLookup => {
            let Some(lookup) = config.cellular_noise_lookup() else {
                return 0.0;
            };
            let jitter = config.cellular_jitter();
            let [vx, vy] = cell_2d(config.seed(), xc, yc);
            lookup.sample_2d(xc as Float + vx * jitter, yc as Float + vy * jitter)
        }
        CellularReturnType::Distance => distance,
        _ => 0.0,
    }
}

/// Cellular noise at a frequency-scaled 3D point.
#[must_use]
pub fn cellular_3d(config: &NoiseConfig, x: Float, y: Float, z: Float) -> Float {
    let return_type = config.cellular_return_type();
    if return_type.uses_ranked_distances() {
        let (i0, i1) = config.cellular_distance_indices();
        return combine_ranked(return_type, &ranked_distances_3d(config, x, y, z), i0, i1);
    }

    let (distance, [xc, yc, zc]) = nearest_3d(config, x, y, z);
    match return_type {
        CellularReturnType::CellValue => val_coord_3d(config.seed(), xc, yc, zc),
        CellularReturnType::NoiseLookup => {
            let Some(lookup) = config.cellular_noise_lookup() else {
                return 0.0;
            };
            let jitter = config.cellular_jitter();
            let [vx, vy, vz] = cell_3d(config.seed(), xc, yc, zc);
            lookup.sample_3d(
                xc as Float + vx * jitter,
                yc as Float + vy * jitter,
                zc as Float + vz * jitter,
            )
        }
        CellularReturnType::Distance => distance,
        _ => 0.0,
    }
}

/// Scan the 3×3 block around `(x, y)` and call `visit` with each cell and
/// the distance to its feature point.
#[inline]
fn scan_2d(config: &NoiseConfig, x: Float, y: Float, mut visit: impl FnMut(Float, [i32; 2])) {
    let seed = config.seed();
    let jitter = config.cellular_jitter();
    let distance_function = config.cellular_distance_function();
    let xr = fast_round(x);
    let yr = fast_round(y);

    for dx in -1..=1 {
        let xi = xr.wrapping_add(dx);
        for dy in -1..=1 {
            let yi = yr.wrapping_add(dy);
            let [vx, vy] = cell_2d(seed, xi, yi);
            let vec_x = xi as Float - x + vx * jitter;
            let vec_y = yi as Float - y + vy * jitter;
            visit(distance_function.distance_2d(vec_x, vec_y), [xi, yi]);
        }
    }
}

#[inline]
fn scan_3d(
    config: &NoiseConfig,
    x: Float,
    y: Float,
    z: Float,
    mut visit: impl FnMut(Float, [i32; 3]),
) {
    let seed = config.seed();
    let jitter = config.cellular_jitter();
    let distance_function = config.cellular_distance_function();
    let xr = fast_round(x);
    let yr = fast_round(y);
    let zr = fast_round(z);

    for dx in -1..=1 {
        let xi = xr.wrapping_add(dx);
        for dy in -1..=1 {
            let yi = yr.wrapping_add(dy);
            for dz in -1..=1 {
                let zi = zr.wrapping_add(dz);
                let [vx, vy, vz] = cell_3d(seed, xi, yi, zi);
                let vec_x = xi as Float - x + vx * jitter;
                let vec_y = yi as Float - y + vy * jitter;
                let vec_z = zi as Float - z + vz * jitter;
                visit(
                    distance_function.distance_3d(vec_x, vec_y, vec_z),
                    [xi, yi, zi],
                );
            }
        }
    }
}

/// Nearest feature distance and the cell that owns it.
fn nearest_2d(config: &NoiseConfig, x: Float, y: Float) -> (Float, [i32; 2]) {
    let mut nearest = (NO_FEATURE, [0; 2]);
    scan_2d(config, x, y, |distance, cell| {
        if distance < nearest.0 {
            nearest = (distance, cell);
        }
    });
    nearest
}

fn nearest_3d(config: &NoiseConfig, x: Float, y: Float, z: Float) -> (Float, [i32; 3]) {
    let mut nearest = (NO_FEATURE, [0; 3]);
    scan_3d(config, x, y, z, |distance, cell| {
        if distance < nearest.0 {
            nearest = (distance, cell);
        }
    });
    nearest
}

/// The four smallest feature distances around a frequency-scaled 2D point,
/// in ascending order.
#[must_use]
pub fn ranked_distances_2d(config: &NoiseConfig, x: Float, y: Float) -> [Float; 4] {
    let mut ranked = [NO_FEATURE; 4];
    scan_2d(config, x, y, |distance, _| insert_ranked(&mut ranked, distance));
    ranked
}

/// The four smallest feature distances around a frequency-scaled 3D point,
/// in ascending order.
#[must_use]
pub fn ranked_distances_3d(config: &NoiseConfig, x: Float, y: Float, z: Float) -> [Float; 4] {
    let mut ranked = [NO_FEATURE; 4];
    scan_3d(config, x, y, z, |distance, _| insert_ranked(&mut ranked, distance));
    ranked
}
