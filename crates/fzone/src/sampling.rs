//! Deterministic direction and rotation sampling.
//!
//! Purpose
//! - `uniform_s2` is the numerical fallback consumed by the sector-center
//!   computation: a UV grid over polar rings with the azimuth step scaled to
//!   the ring circumference. It is deliberately simple; the catalog carries
//!   fixed centers for the cubic groups where this grid is not uniform
//!   enough.
//! - `random_rotations` provides seeded, replayable quaternion streams for
//!   tests and benches; nothing in the library paths draws entropy.

use nalgebra::Vector3;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use crate::quat::Rotation;

/// UV grid over the unit sphere at roughly `resolution_deg` spacing.
///
/// Rows run from the north to the south pole inclusive; pole rows collapse
/// to single points. The grid is a pure function of the resolution.
pub fn uniform_s2(resolution_deg: f64) -> Vec<Vector3<f64>> {
    let res = resolution_deg.clamp(1e-2, 90.0);
    let n_polar = (180.0 / res).ceil().max(1.0) as usize;
    let mut out = Vec::new();
    for i in 0..=n_polar {
        let theta = std::f64::consts::PI * (i as f64) / (n_polar as f64);
        let (sin_t, cos_t) = theta.sin_cos();
        let ring = ((sin_t * 360.0 / res).ceil() as usize).max(1);
        for j in 0..ring {
            let phi = 2.0 * std::f64::consts::PI * (j as f64) / (ring as f64);
            out.push(Vector3::new(sin_t * phi.cos(), sin_t * phi.sin(), cos_t));
        }
    }
    out
}

/// Seeded stream of `count` approximately uniform unit quaternions.
///
/// Rejection sampling from the 4-cube shell keeps the distribution free of
/// corner bias; the same seed replays the same stream.
pub fn random_rotations(seed: u64, count: usize) -> Vec<Rotation> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut out = Vec::with_capacity(count);
    while out.len() < count {
        let q = Rotation::new(
            sample_component(&mut rng),
            sample_component(&mut rng),
            sample_component(&mut rng),
            sample_component(&mut rng),
        );
        let norm = q.norm();
        if norm < 1e-3 || norm > 1.0 {
            continue;
        }
        if let Some(u) = q.unit() {
            out.push(u);
        }
    }
    out
}

fn sample_component(rng: &mut StdRng) -> f64 {
    // Uniform in [-1, 1].
    let raw = rng.next_u64();
    let unit = (raw >> 11) as f64 / ((1u64 << 53) as f64);
    unit * 2.0 - 1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_is_unit_length_and_covers_both_poles() {
        let grid = uniform_s2(10.0);
        assert!(grid.iter().all(|v| (v.norm() - 1.0).abs() < 1e-12));
        assert!(grid.iter().any(|v| (v - Vector3::z()).norm() < 1e-12));
        assert!(grid
            .iter()
            .any(|v| (v - Vector3::new(0.0, 0.0, -1.0)).norm() < 1e-12));
    }

    #[test]
    fn finer_grids_are_denser() {
        assert!(uniform_s2(5.0).len() > uniform_s2(20.0).len());
    }

    #[test]
    fn rotation_stream_replays_by_seed() {
        let a = random_rotations(77, 32);
        let b = random_rotations(77, 32);
        assert_eq!(a.len(), 32);
        for (x, y) in a.iter().zip(&b) {
            assert!(x.approx_eq(y, 1e-15));
        }
        assert!(a.iter().all(|q| (q.norm() - 1.0).abs() < 1e-12));
    }
}
