//! Combination enumeration and tolerance-based dedup helpers.

use nalgebra::Vector3;

use super::types::Rotation;

/// k-combinations of `0..n` (lexicographic).
pub(crate) fn combinations(n: usize, k: usize) -> Vec<Vec<usize>> {
    fn rec(n: usize, k: usize, start: usize, cur: &mut Vec<usize>, out: &mut Vec<Vec<usize>>) {
        if cur.len() == k {
            out.push(cur.clone());
            return;
        }
        for i in start..n {
            cur.push(i);
            rec(n, k, i + 1, cur, out);
            cur.pop();
        }
    }
    let mut out = Vec::new();
    if k == 0 || k > n {
        return out;
    }
    let mut cur = Vec::with_capacity(k);
    rec(n, k, 0, &mut cur, &mut out);
    out
}

/// Remove near-duplicate rotations, keeping first occurrences in order.
///
/// With `antipodal` set, `q` and `-q` count as the same rotation.
pub(crate) fn dedup_rotations_in_place(rs: &mut Vec<Rotation>, tol: f64, antipodal: bool) {
    let mut kept: Vec<Rotation> = Vec::with_capacity(rs.len());
    rs.retain(|r| {
        let dup = kept.iter().any(|k| {
            if antipodal {
                r.approx_eq_antipodal(k, tol)
            } else {
                r.approx_eq(k, tol)
            }
        });
        if !dup {
            kept.push(*r);
        }
        !dup
    });
}

/// Remove near-duplicate 3-vectors, keeping first occurrences in order.
pub(crate) fn dedup_vectors_in_place(vs: &mut Vec<Vector3<f64>>, tol: f64) {
    let mut kept: Vec<Vector3<f64>> = Vec::with_capacity(vs.len());
    vs.retain(|v| {
        let dup = kept.iter().any(|k| (v - k).norm() < tol);
        if !dup {
            kept.push(*v);
        }
        !dup
    });
}

/// Stable order for normal sets: lexicographic by the quaternion vector part
/// `(b, c, d)`, then by `a`.
pub(crate) fn sort_by_vector_part(rs: &mut [Rotation]) {
    rs.sort_by(|p, q| {
        p.q[1]
            .partial_cmp(&q.q[1])
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| p.q[2].partial_cmp(&q.q[2]).unwrap_or(std::cmp::Ordering::Equal))
            .then_with(|| p.q[3].partial_cmp(&q.q[3]).unwrap_or(std::cmp::Ordering::Equal))
            .then_with(|| p.q[0].partial_cmp(&q.q[0]).unwrap_or(std::cmp::Ordering::Equal))
    });
}

/// 4D generalized cross product: the quaternion orthogonal to three others.
///
/// Cofactor expansion over the 3x4 matrix of inputs; the result is zero when
/// the inputs are linearly dependent.
pub(crate) fn triple_cross(r1: &Rotation, r2: &Rotation, r3: &Rotation) -> Rotation {
    let a = [
        [r1.q[0], r1.q[1], r1.q[2], r1.q[3]],
        [r2.q[0], r2.q[1], r2.q[2], r2.q[3]],
        [r3.q[0], r3.q[1], r3.q[2], r3.q[3]],
    ];
    let n0 = det3([
        [a[0][1], a[0][2], a[0][3]],
        [a[1][1], a[1][2], a[1][3]],
        [a[2][1], a[2][2], a[2][3]],
    ]);
    let n1 = -det3([
        [a[0][0], a[0][2], a[0][3]],
        [a[1][0], a[1][2], a[1][3]],
        [a[2][0], a[2][2], a[2][3]],
    ]);
    let n2 = det3([
        [a[0][0], a[0][1], a[0][3]],
        [a[1][0], a[1][1], a[1][3]],
        [a[2][0], a[2][1], a[2][3]],
    ]);
    let n3 = -det3([
        [a[0][0], a[0][1], a[0][2]],
        [a[1][0], a[1][1], a[1][2]],
        [a[2][0], a[2][1], a[2][2]],
    ]);
    Rotation::new(n0, n1, n2, n3)
}

fn det3(m: [[f64; 3]; 3]) -> f64 {
    m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
        - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
        + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
}
