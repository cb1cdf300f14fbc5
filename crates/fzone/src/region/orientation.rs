//! The convex fundamental zone in quaternion space.

use crate::quat::{
    combinations, dedup_rotations_in_place, triple_cross, Rotation, FEAS_EPS, GROUP_EPS,
    TIGHT_EPS,
};
use crate::symmetry::Symmetry;

use super::normals::large_cell_normals;
use super::resolve::{resolve_proper_groups, ResolveError};

/// Convex region `{q : dot(q, n) ≥ 0 for all normals n}` on S³, identified
/// under the double cover (the all-≤ branch is the same region).
///
/// Invariants:
/// - Normals are unit quaternions; zero-norm rows are dropped at
///   construction.
/// - Immutable value object; `from_symmetry` is the only constructor that
///   applies vertex-based pruning.
#[derive(Clone, Debug, Default)]
pub struct OrientationRegion {
    normals: Vec<Rotation>,
}

/// One bounding great hypersphere together with the zone vertices on it.
#[derive(Clone, Debug)]
pub struct Face {
    pub normal: Rotation,
    pub vertices: Vec<Rotation>,
}

impl OrientationRegion {
    /// Build from raw boundary normals (normalizing each).
    pub fn new(normals: Vec<Rotation>) -> Self {
        let normals = normals.iter().filter_map(Rotation::unit).collect();
        Self { normals }
    }

    /// Fundamental zone of the left/right symmetry pair.
    ///
    /// Resolves the pair to proper groups (rejecting unsupported improper
    /// pairs), derives the large-cell normals, appends the quaternion images
    /// `(0, n)` of the shared subgroup's IPF sector normals, and finally
    /// drops normals whose hypersphere touches no zone vertex (skipped when
    /// the zone has no vertices at all).
    pub fn from_symmetry(gl: &Symmetry, gr: &Symmetry) -> Result<Self, ResolveError> {
        let (pl, pr) = resolve_proper_groups(gl, gr)?;
        let mut normals = large_cell_normals(&pl, &pr);
        let shared = pl.intersection(&pr);
        for n in shared.fundamental_sector().normals() {
            normals.push(Rotation::new(0.0, n.x, n.y, n.z));
        }
        dedup_rotations_in_place(&mut normals, GROUP_EPS, false);

        let region = Self { normals };
        let vertices = region.vertices();
        if vertices.is_empty() {
            return Ok(region);
        }
        let kept = region
            .normals
            .iter()
            .filter(|n| vertices.iter().any(|v| n.dot(v).abs() <= TIGHT_EPS))
            .copied()
            .collect();
        Ok(Self { normals: kept })
    }

    #[inline]
    pub fn normals(&self) -> &[Rotation] {
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

    /// Membership under the double cover: inside iff the dot products with
    /// every normal share a sign (within slack).
    pub fn contains(&self, q: &Rotation) -> bool {
        if self.normals.is_empty() {
            return true;
        }
        let all_pos = self.normals.iter().all(|n| q.dot(n) >= -FEAS_EPS);
        let all_neg = self.normals.iter().all(|n| q.dot(n) <= FEAS_EPS);
        all_pos || all_neg
    }

    /// Zone corners: intersections of three bounding hyperspheres that lie
    /// inside the zone, deduplicated up to the antipode.
    pub fn vertices(&self) -> Vec<Rotation> {
        let n = self.normals.len();
        let mut out: Vec<Rotation> = Vec::new();
        for comb in combinations(n, 3) {
            let v = triple_cross(
                &self.normals[comb[0]],
                &self.normals[comb[1]],
                &self.normals[comb[2]],
            );
            if !v.q.iter().all(|x| x.is_finite()) {
                continue;
            }
            if let Some(u) = v.unit() {
                if self.contains(&u) {
                    out.push(u);
                }
            }
        }
        dedup_rotations_in_place(&mut out, GROUP_EPS, true);
        out
    }

    /// Bounding great hyperspheres carrying at least three vertices.
    ///
    /// Degenerate zones (fewer than three normals, or slab-like zones with
    /// no vertices) yield an empty list rather than an error.
    pub fn faces(&self) -> Vec<Face> {
        let vertices = self.vertices();
        self.normals
            .iter()
            .filter_map(|n| {
                let on_plane: Vec<Rotation> = vertices
                    .iter()
                    .filter(|v| n.dot(v).abs() <= TIGHT_EPS)
                    .copied()
                    .collect();
                (on_plane.len() >= 3).then(|| Face {
                    normal: *n,
                    vertices: on_plane,
                })
            })
            .collect()
    }
}
