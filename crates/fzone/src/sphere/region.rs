//! Convex spherical region from inward normals.

use nalgebra::Vector3;

use crate::quat::{dedup_vectors_in_place, Rotation, FEAS_EPS};

/// Convex region `{v : dot(v, n) ≥ 0 for all normals n}` on the unit sphere.
///
/// Invariants:
/// - Normals are unit length, deduplicated, in insertion order.
/// - Membership uses `≥ -eps` (closed) or `> +eps` (open); the slack policy
///   mirrors the half-space conventions used for the quaternion zone.
#[derive(Clone, Debug, Default)]
pub struct SphericalRegion {
    normals: Vec<Vector3<f64>>,
}

impl SphericalRegion {
    /// Build from raw normals: normalize, drop zero rows, dedup.
    pub fn new(normals: Vec<Vector3<f64>>) -> Self {
        let mut out: Vec<Vector3<f64>> = Vec::with_capacity(normals.len());
        for n in normals {
            let len = n.norm();
            if len.is_finite() && len > FEAS_EPS {
                out.push(n / len);
            }
        }
        dedup_vectors_in_place(&mut out, FEAS_EPS);
        Self { normals: out }
    }

    #[inline]
    pub fn normals(&self) -> &[Vector3<f64>] {
        &self.normals
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.normals.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.normals.is_empty()
    }

    /// Closed membership: on-boundary points count as inside.
    #[inline]
    pub fn contains(&self, v: &Vector3<f64>) -> bool {
        self.normals.iter().all(|n| n.dot(v) >= -FEAS_EPS)
    }

    /// Open membership: boundary points are excluded.
    #[inline]
    pub fn contains_strict(&self, v: &Vector3<f64>) -> bool {
        self.normals.iter().all(|n| n.dot(v) > FEAS_EPS)
    }

    /// One great circle per normal, discretized into `steps` points.
    ///
    /// Each circle starts at a perpendicular of its normal and sweeps the
    /// full turn; consumers clip against the region afterwards.
    pub fn great_circles(&self, steps: usize) -> Vec<Vec<Vector3<f64>>> {
        let steps = steps.max(1);
        self.normals
            .iter()
            .map(|n| {
                let start = perpendicular(n);
                (0..steps)
                    .map(|k| {
                        let angle = 2.0 * std::f64::consts::PI * (k as f64) / (steps as f64);
                        Rotation::from_axis_angle(*n, angle).rotate(start)
                    })
                    .collect()
            })
            .collect()
    }
}

/// Some unit vector perpendicular to `v` (x for the poles).
pub(crate) fn perpendicular(v: &Vector3<f64>) -> Vector3<f64> {
    let planar = Vector3::new(-v.y, v.x, 0.0);
    let n = planar.norm();
    if n < FEAS_EPS {
        Vector3::x()
    } else {
        planar / n
    }
}

#[inline]
pub(crate) fn azimuth(v: &Vector3<f64>) -> f64 {
    v.y.atan2(v.x)
}

#[inline]
pub(crate) fn polar(v: &Vector3<f64>) -> f64 {
    let n = v.norm();
    if n < FEAS_EPS {
        return 0.0;
    }
    (v.z / n).clamp(-1.0, 1.0).acos()
}

#[inline]
pub(crate) fn angle_between(a: &Vector3<f64>, b: &Vector3<f64>) -> f64 {
    let denom = a.norm() * b.norm();
    if denom < FEAS_EPS {
        return 0.0;
    }
    (a.dot(b) / denom).clamp(-1.0, 1.0).acos()
}
