//! Direction-space geometry on the unit sphere.
//!
//! Purpose
//! - `SphericalRegion`: a convex region cut out by inward unit normals, with
//!   eps-aware membership and great-circle discretization.
//! - `FundamentalSector`: the IPF specialization with derived vertices, a
//!   canonical center (with the fixed cubic overrides), and an ordered
//!   boundary polyline.
//!
//! Why this design
//! - Both types are immutable value objects over a plain normal list; every
//!   derived quantity is a pure function of it, so re-derivation is
//!   reproducible by construction.

mod region;
mod sector;

pub use region::SphericalRegion;
pub use sector::FundamentalSector;
