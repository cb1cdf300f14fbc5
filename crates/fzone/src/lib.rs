//! Fundamental domains for crystallographic point-symmetry groups.
//!
//! Two constructions share the tolerance-robust geometric core:
//! - the orientation fundamental zone: the convex region of unit-quaternion
//!   space holding one representative per symmetry-equivalent orientation
//!   under a left/right group pair (`region::OrientationRegion`);
//! - the fundamental sector: the convex region of direction space used for
//!   inverse-pole-figure work (`sphere::FundamentalSector`).
//!
//! All computation is pure and synchronous over immutable inputs; the
//! symmetry catalog is the only shared state and it is read-only.

pub mod quat;
pub mod region;
pub mod sampling;
pub mod sphere;
pub mod symmetry;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::quat::Rotation;
    pub use crate::region::{
        distinguished_points, large_cell_normals, resolve_proper_groups, Face, OrientationRegion,
        ResolveError,
    };
    pub use crate::sampling::{random_rotations, uniform_s2};
    pub use crate::sphere::{FundamentalSector, SphericalRegion};
    pub use crate::symmetry::{SymOp, Symmetry};
    pub use nalgebra::{Vector3, Vector4};
}
