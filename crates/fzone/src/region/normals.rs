//! Distinguished points and the boundary normals they induce.

use crate::quat::{
    dedup_rotations_in_place, sort_by_vector_part, Rotation, FEAS_EPS, GROUP_EPS,
};
use crate::symmetry::Symmetry;

/// Rotations symmetry-equivalent to the identity under the combined action
/// `q ↦ g_l · q · g_r⁻¹`: the Voronoi neighbors seeding the zone boundary.
///
/// Enumeration runs the right group in the outer loop so the identity row
/// lists `gl` in catalog order; representatives are deduplicated up to the
/// double cover keeping first occurrences, the identity itself is dropped,
/// and each survivor is emitted together with its antipode.
pub fn distinguished_points(gl: &Symmetry, gr: &Symmetry) -> Vec<Rotation> {
    let left = gl.rotations();
    let right = gr.rotations();
    let mut reps: Vec<Rotation> = Vec::with_capacity(left.len() * right.len());
    for r in &right {
        for l in &left {
            reps.push(*l * r.inverse());
        }
    }
    dedup_rotations_in_place(&mut reps, GROUP_EPS, true);

    let mut out = Vec::with_capacity(reps.len() * 2);
    for p in reps {
        if p.is_identity(GROUP_EPS) {
            continue;
        }
        out.push(p);
        out.push(-p);
    }
    out
}

/// Half-space boundary normals of the orientation fundamental zone.
///
/// For each distinguished point `p` the candidate is the normalized midpoint
/// `unit(identity + p)`, the pole of the perpendicular bisector between the
/// identity and `p` on S³. Candidates sharing a rotation axis are implied by
/// the extreme pair, so per signed axis only the largest-angle candidate is
/// kept; the survivors are sorted by quaternion vector part for stable
/// output.
pub fn large_cell_normals(gl: &Symmetry, gr: &Symmetry) -> Vec<Rotation> {
    let identity = Rotation::identity();
    let mut mids: Vec<Rotation> = Vec::new();
    for p in distinguished_points(gl, gr) {
        let m = Rotation::from_vector4(identity.q + p.q);
        if let Some(u) = m.unit() {
            mids.push(u);
        }
    }
    dedup_rotations_in_place(&mut mids, GROUP_EPS, false);

    let mut keep: Vec<Rotation> = Vec::new();
    for m in mids {
        match keep
            .iter_mut()
            .find(|k| (k.axis() - m.axis()).norm() < GROUP_EPS)
        {
            Some(k) => {
                if m.angle() > k.angle() + FEAS_EPS {
                    *k = m;
                }
            }
            None => keep.push(m),
        }
    }
    sort_by_vector_part(&mut keep);
    keep
}
