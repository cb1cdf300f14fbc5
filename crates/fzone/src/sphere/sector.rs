//! Fundamental sector for inverse-pole-figure work.

use nalgebra::Vector3;

use crate::quat::{dedup_vectors_in_place, Rotation, FEAS_EPS};
use crate::sampling;

use super::region::{angle_between, azimuth, polar, SphericalRegion};

/// Steps per boundary great circle in `edges`.
const EDGE_STEPS: usize = 500;
/// Grid resolution (degrees) for the numerical center fallback.
const CENTER_RESOLUTION_DEG: f64 = 1.0;

/// Fundamental sector of a symmetry group on the unit sphere.
///
/// Invariants:
/// - `vertices`, `center` and `edges` are pure functions of the normal set
///   (and the optional center constant), so repeated derivation is
///   order-stable.
/// - The center constant is only set for the three cubic groups whose
///   UV-sampled centers are not reliable; it wins over the sampling fallback
///   and over nothing else.
#[derive(Clone, Debug, Default)]
pub struct FundamentalSector {
    region: SphericalRegion,
    center_override: Option<Vector3<f64>>,
}

impl FundamentalSector {
    pub fn new(normals: Vec<Vector3<f64>>) -> Self {
        Self {
            region: SphericalRegion::new(normals),
            center_override: None,
        }
    }

    pub(crate) fn with_center_override(
        normals: Vec<Vector3<f64>>,
        center: Vector3<f64>,
    ) -> Self {
        Self {
            region: SphericalRegion::new(normals),
            center_override: Some(center),
        }
    }

    #[inline]
    pub fn region(&self) -> &SphericalRegion {
        &self.region
    }

    #[inline]
    pub fn normals(&self) -> &[Vector3<f64>] {
        self.region.normals()
    }

    /// Corner directions of the sector: pairwise normal crosses filtered by
    /// membership, unit length, deduplicated. Empty below two normals.
    pub fn vertices(&self) -> Vec<Vector3<f64>> {
        let ns = self.normals();
        let mut out: Vec<Vector3<f64>> = Vec::new();
        for (i, ni) in ns.iter().enumerate() {
            for (j, nj) in ns.iter().enumerate() {
                if i == j {
                    continue;
                }
                let u = ni.cross(nj);
                let len = u.norm();
                if len < FEAS_EPS {
                    continue;
                }
                let u = u / len;
                if self.region.contains(&u) {
                    out.push(u);
                }
            }
        }
        dedup_vectors_in_place(&mut out, FEAS_EPS);
        out
    }

    /// Canonical representative direction of the sector.
    ///
    /// Case split on normal/vertex counts; the wide sectors (fewer than three
    /// vertices) use the pair of normals with maximum separation, compact
    /// sectors average their vertices, and everything larger falls back to
    /// averaging a uniform sample of interior directions unless a fixed
    /// center is attached.
    pub fn center(&self) -> Vector3<f64> {
        if self.needs_sample_fallback() {
            self.center_from_samples(&sampling::uniform_s2(CENTER_RESOLUTION_DEG))
        } else {
            self.center_from_samples(&[])
        }
    }

    /// `center` with the sampling grid supplied by the caller; the grid is
    /// only consulted on the fallback path.
    pub fn center_from_samples(&self, samples: &[Vector3<f64>]) -> Vector3<f64> {
        let ns = self.normals();
        if ns.len() < 2 {
            return ns.first().copied().unwrap_or_else(Vector3::zeros);
        }
        let verts = self.vertices();
        if verts.len() < 3 {
            // Widest axis pair: for every normal take its most distant
            // partner, then average the partners.
            let mut acc = Vector3::zeros();
            for ni in ns {
                let mut best = *ni;
                let mut best_angle = -1.0;
                for nj in ns {
                    let a = angle_between(ni, nj);
                    if a > best_angle {
                        best_angle = a;
                        best = *nj;
                    }
                }
                acc += best;
            }
            return normalize_or_zero(acc);
        }
        if verts.len() < 4 {
            return normalize_or_zero(verts.iter().sum());
        }
        if let Some(c) = self.center_override {
            return c;
        }
        let mut acc = Vector3::zeros();
        let mut hits = 0usize;
        for s in samples {
            if self.region.contains_strict(s) {
                acc += *s;
                hits += 1;
            }
        }
        if hits == 0 {
            return normalize_or_zero(verts.iter().sum());
        }
        normalize_or_zero(acc)
    }

    /// Ordered boundary polyline of the sector.
    ///
    /// Per normal, the discretized great circle is clipped to the region and
    /// the position-matched vertex is appended to close the corner gap; each
    /// circle's survivors are sorted by (polar, azimuth). The concatenated
    /// buffer is then re-sorted counter-clockwise by azimuth in the frame
    /// that puts `center` at the +z pole, yielding one traversal of the whole
    /// boundary. Empty for an unbounded (normal-free) sector.
    pub fn edges(&self) -> Vec<Vector3<f64>> {
        if self.normals().is_empty() {
            return Vec::new();
        }
        let circles = self.region.great_circles(EDGE_STEPS);
        let verts = self.vertices();
        if verts.is_empty() {
            return circles.concat();
        }

        let mut pts: Vec<Vector3<f64>> = Vec::new();
        for (circle, vertex) in circles.iter().zip(verts.iter()) {
            let mut keep: Vec<Vector3<f64>> = circle
                .iter()
                .copied()
                .filter(|p| self.region.contains(p))
                .collect();
            keep.push(*vertex);
            dedup_vectors_in_place(&mut keep, FEAS_EPS);
            keep.sort_by(|p, q| {
                polar(p)
                    .partial_cmp(&polar(q))
                    .unwrap_or(std::cmp::Ordering::Equal)
                    .then_with(|| {
                        azimuth(p)
                            .partial_cmp(&azimuth(q))
                            .unwrap_or(std::cmp::Ordering::Equal)
                    })
            });
            pts.extend(keep);
        }

        let recenter = pole_alignment(&self.center());
        pts.sort_by(|p, q| {
            let ap = azimuth(&recenter.rotate(*p));
            let aq = azimuth(&recenter.rotate(*q));
            ap.partial_cmp(&aq).unwrap_or(std::cmp::Ordering::Equal)
        });
        pts
    }

    fn needs_sample_fallback(&self) -> bool {
        self.normals().len() >= 2 && self.center_override.is_none() && self.vertices().len() >= 4
    }
}

/// Rotation taking `center` onto the +z pole (identity when already polar).
fn pole_alignment(center: &Vector3<f64>) -> Rotation {
    let vz = Vector3::z();
    let axis = vz.cross(center);
    if axis.norm() < FEAS_EPS {
        return Rotation::identity();
    }
    Rotation::from_axis_angle(axis, -angle_between(&vz, center))
}

fn normalize_or_zero(v: Vector3<f64>) -> Vector3<f64> {
    let n = v.norm();
    if n < FEAS_EPS {
        Vector3::zeros()
    } else {
        v / n
    }
}
