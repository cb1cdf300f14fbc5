//! A single point-group operation.

use crate::quat::Rotation;

/// Point-group operation: a rotation plus an improper flag.
///
/// Invariants:
/// - An improper operation is inversion ∘ `rotation`; a mirror is stored as
///   the two-fold rotation about its plane normal with the flag set.
/// - `rotation` is a unit quaternion; the stored sign is part of the
///   catalog's ordering contract, equality ignores it.
#[derive(Clone, Copy, Debug)]
pub struct SymOp {
    pub rotation: Rotation,
    pub improper: bool,
}

impl SymOp {
    #[inline]
    pub fn proper(rotation: Rotation) -> Self {
        Self {
            rotation,
            improper: false,
        }
    }

    #[inline]
    pub fn improper(rotation: Rotation) -> Self {
        Self {
            rotation,
            improper: true,
        }
    }

    #[inline]
    pub fn identity() -> Self {
        Self::proper(Rotation::identity())
    }

    /// The pure inversion (improper identity).
    #[inline]
    pub fn inversion() -> Self {
        Self::improper(Rotation::identity())
    }

    #[inline]
    pub fn is_inversion(&self, tol: f64) -> bool {
        self.improper && self.rotation.is_identity(tol)
    }

    /// Group composition; improper parities add modulo two.
    #[inline]
    pub fn compose(&self, other: &SymOp) -> SymOp {
        SymOp {
            rotation: self.rotation * other.rotation,
            improper: self.improper != other.improper,
        }
    }

    #[inline]
    pub fn inverse(&self) -> SymOp {
        SymOp {
            rotation: self.rotation.inverse(),
            improper: self.improper,
        }
    }

    /// Same operation up to the quaternion double cover.
    #[inline]
    pub fn approx_eq(&self, other: &SymOp, tol: f64) -> bool {
        self.improper == other.improper && self.rotation.approx_eq_antipodal(&other.rotation, tol)
    }
}
