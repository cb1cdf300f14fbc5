//! Crystallographic point-group catalog.
//!
//! Purpose
//! - Provide the finite rotation groups (and the improper groups reduced to
//!   rotation-plus-inversion form) that seed the fundamental-domain builders,
//!   as immutable element tables with fixed storage order.
//! - Attach to each named group its inverse-pole-figure sector normals and,
//!   for the three cubic groups whose sampled centers are unreliable, the
//!   hand-fixed center constants.
//!
//! Why this design
//! - Groups are explicit enumerable element lists, not generator machinery:
//!   downstream order-stability guarantees lean on the stored order, so the
//!   tables are data, built once per constructor call.
//! - Improper operations are stored as inversion ∘ rotation with a boolean
//!   flag; that is the only improper form the builders need.

mod catalog;
mod groups;
mod ops;

pub use groups::Symmetry;
pub use ops::SymOp;
