//! Quaternion-space primitives (rotations under the double cover).
//!
//! Purpose
//! - Provide the `Rotation` value type used by every other module: a unit
//!   quaternion with the double-cover identification `q ≡ -q`, plus the small
//!   set of operations the region builders need (composition, conjugation,
//!   angle/axis, vector rotation).
//! - Keep the numerics explicit: tolerance-based equality and dedup live here
//!   so no caller re-implements them ad hoc.
//!
//! Why this design
//! - Rotations are stored as plain `Vector4<f64>` in `(a, b, c, d) = (w, x,
//!   y, z)` order; no normalization is enforced by `new` (cold constructors
//!   stay cheap), `unit()` is the explicit normalizing step.
//! - The 4D generalized cross product (`triple_cross`) is the cofactor
//!   expansion used to intersect three great hyperspheres on S³.

mod cfg;
mod types;
mod util;

pub use types::Rotation;

pub(crate) use cfg::{FEAS_EPS, GROUP_EPS, TIGHT_EPS};
pub(crate) use util::{
    combinations, dedup_rotations_in_place, dedup_vectors_in_place, sort_by_vector_part,
    triple_cross,
};
