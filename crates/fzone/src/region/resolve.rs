//! Reduction of group pairs to the proper rotation groups used in
//! quaternion space.

use std::fmt;

use crate::symmetry::Symmetry;

/// Error from `resolve_proper_groups`.
#[derive(Debug)]
pub enum ResolveError {
    /// Both groups are improper and neither contains the inversion; the
    /// mirror halves cannot be folded into rotations and the construction is
    /// not implemented.
    BothImproper {
        left: &'static str,
        right: &'static str,
    },
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BothImproper { left, right } => write!(
                f,
                "fundamental zone for two inversion-free improper groups ({left}, {right}) is not implemented"
            ),
        }
    }
}

impl std::error::Error for ResolveError {}

/// Reduce `(gl, gr)` to the proper rotation groups whose quaternion-space
/// Voronoi construction represents the original pair's action.
///
/// - Both proper: unchanged.
/// - One improper: the improper half has no improper partner to pair with
///   and contributes nothing; the group drops to its proper subgroup.
/// - Both improper: improper·improper pairs act properly. The inversion
///   commutes and acts trivially on rotations, so a group containing it
///   drops to its proper subgroup while the partner folds its improper half
///   into rotations (`laue_proper`). Without any inversion the fold is
///   unavailable and the pair is rejected.
pub fn resolve_proper_groups(
    gl: &Symmetry,
    gr: &Symmetry,
) -> Result<(Symmetry, Symmetry), ResolveError> {
    match (gl.is_proper(), gr.is_proper()) {
        (true, true) => Ok((gl.clone(), gr.clone())),
        (true, false) => Ok((gl.clone(), gr.proper_subgroup())),
        (false, true) => Ok((gl.proper_subgroup(), gr.clone())),
        (false, false) => match (gl.contains_inversion(), gr.contains_inversion()) {
            (true, true) => Ok((gl.proper_subgroup(), gr.proper_subgroup())),
            (true, false) => Ok((gl.proper_subgroup(), gr.laue_proper())),
            (false, true) => Ok((gl.laue_proper(), gr.proper_subgroup())),
            (false, false) => Err(ResolveError::BothImproper {
                left: gl.name(),
                right: gr.name(),
            }),
        },
    }
}
