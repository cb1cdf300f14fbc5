//! Tolerance defaults for quaternion- and direction-space geometry (internal).
//!
//! Policy
//! - Defaults are fixed constants to avoid "tolerance juggling" during normal
//!   development. Adjustments are rare; if needed later we can make these
//!   configurable behind a small `Config` without changing call sites broadly.

/// Feasibility/membership epsilon used by region membership and geometric dedup.
pub(crate) const FEAS_EPS: f64 = 1e-9;
/// Coarser epsilon for identifying group elements. Catalog entries are exact
/// to a few ulps, but products of several elements accumulate more error.
pub(crate) const GROUP_EPS: f64 = 1e-6;
/// Tightness threshold for "vertex lies on a bounding hypersphere" tests.
pub(crate) const TIGHT_EPS: f64 = 1e-7;
