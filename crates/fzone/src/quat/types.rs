//! The `Rotation` value type: a unit quaternion under the double cover.

use std::ops::{Mul, Neg};

use nalgebra::{Vector3, Vector4};

use super::cfg::FEAS_EPS;

/// A rotation stored as a quaternion `(a, b, c, d) = (w, x, y, z)`.
///
/// Invariants:
/// - `q` and `-q` denote the same rotation (double cover); comparisons that
///   care about the rotation rather than the quaternion must use
///   `approx_eq_antipodal`.
/// - Constructors do not normalize; `unit()` is the explicit normalizing
///   step. Arithmetic assumes unit inputs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rotation {
    pub q: Vector4<f64>,
}

impl Rotation {
    #[inline]
    pub fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self {
            q: Vector4::new(a, b, c, d),
        }
    }

    #[inline]
    pub fn from_vector4(q: Vector4<f64>) -> Self {
        Self { q }
    }

    #[inline]
    pub fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0)
    }

    /// Rotation by `angle` about `axis` (normalized internally).
    pub fn from_axis_angle(axis: Vector3<f64>, angle: f64) -> Self {
        let ax = axis.normalize();
        let half = 0.5 * angle;
        let s = half.sin();
        Self::new(half.cos(), s * ax.x, s * ax.y, s * ax.z)
    }

    #[inline]
    pub fn a(&self) -> f64 {
        self.q[0]
    }

    /// Imaginary part `(b, c, d)` as a 3-vector.
    #[inline]
    pub fn vector_part(&self) -> Vector3<f64> {
        Vector3::new(self.q[1], self.q[2], self.q[3])
    }

    #[inline]
    pub fn dot(&self, other: &Rotation) -> f64 {
        self.q.dot(&other.q)
    }

    #[inline]
    pub fn norm(&self) -> f64 {
        self.q.norm()
    }

    /// Normalized copy, or `None` for a near-zero quaternion.
    pub fn unit(&self) -> Option<Rotation> {
        let n = self.norm();
        if !n.is_finite() || n < FEAS_EPS {
            return None;
        }
        Some(Self { q: self.q / n })
    }

    /// Inverse of a unit rotation (the conjugate).
    #[inline]
    pub fn inverse(&self) -> Rotation {
        Self::new(self.q[0], -self.q[1], -self.q[2], -self.q[3])
    }

    /// Rotation angle in `[0, π]`, identified under the double cover.
    #[inline]
    pub fn angle(&self) -> f64 {
        2.0 * self.q[0].abs().min(1.0).acos()
    }

    /// Rotation axis as a unit vector; `+z` for (near-)identity rotations
    /// whose axis is undefined.
    pub fn axis(&self) -> Vector3<f64> {
        let v = self.vector_part();
        let n = v.norm();
        if n < FEAS_EPS {
            Vector3::z()
        } else {
            v / n
        }
    }

    #[inline]
    pub fn is_identity(&self, tol: f64) -> bool {
        1.0 - self.q[0].abs() < tol && self.vector_part().norm() < tol.sqrt()
    }

    /// Apply the rotation to a 3-vector (`q v q⁻¹` for unit `q`).
    pub fn rotate(&self, v: Vector3<f64>) -> Vector3<f64> {
        let u = self.vector_part();
        let t = u.cross(&v) + self.q[0] * v;
        v + 2.0 * u.cross(&t)
    }

    /// Componentwise closeness of the quaternions (sign-sensitive).
    #[inline]
    pub fn approx_eq(&self, other: &Rotation, tol: f64) -> bool {
        (self.q - other.q).norm() < tol
    }

    /// Closeness of the rotations: `q` matches both `p` and `-p`.
    #[inline]
    pub fn approx_eq_antipodal(&self, other: &Rotation, tol: f64) -> bool {
        (self.q - other.q).norm() < tol || (self.q + other.q).norm() < tol
    }
}

impl Mul for Rotation {
    type Output = Rotation;

    fn mul(self, rhs: Rotation) -> Rotation {
        let (a1, u1) = (self.q[0], self.vector_part());
        let (a2, u2) = (rhs.q[0], rhs.vector_part());
        let a = a1 * a2 - u1.dot(&u2);
        let u = a1 * u2 + a2 * u1 + u1.cross(&u2);
        Rotation::new(a, u.x, u.y, u.z)
    }
}

impl Neg for Rotation {
    type Output = Rotation;

    #[inline]
    fn neg(self) -> Rotation {
        Rotation { q: -self.q }
    }
}
