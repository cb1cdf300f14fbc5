//! The `Symmetry` type: a named finite group of point operations.

use crate::quat::{dedup_rotations_in_place, Rotation, GROUP_EPS};
use crate::sphere::FundamentalSector;

use super::catalog;
use super::ops::SymOp;

/// Named finite point group, closed under composition and inverse.
///
/// Invariants:
/// - The identity is stored first; the remaining storage order is part of the
///   crate's determinism contract (distinguished-point output order follows
///   it).
/// - Instances are immutable; derived groups are new values.
#[derive(Clone, Debug)]
pub struct Symmetry {
    name: &'static str,
    ops: Vec<SymOp>,
}

impl Symmetry {
    pub(crate) fn from_ops(name: &'static str, ops: Vec<SymOp>) -> Self {
        Self { name, ops }
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn ops(&self) -> &[SymOp] {
        &self.ops
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Proper rotation elements in stored order.
    pub fn rotations(&self) -> Vec<Rotation> {
        self.ops
            .iter()
            .filter(|op| !op.improper)
            .map(|op| op.rotation)
            .collect()
    }

    pub fn is_proper(&self) -> bool {
        self.ops.iter().all(|op| !op.improper)
    }

    pub fn contains_inversion(&self) -> bool {
        self.ops.iter().any(|op| op.is_inversion(GROUP_EPS))
    }

    /// The subgroup of proper rotations.
    pub fn proper_subgroup(&self) -> Symmetry {
        let ops: Vec<SymOp> = self.ops.iter().filter(|op| !op.improper).copied().collect();
        Symmetry {
            name: catalog::proper_name(self.name),
            ops,
        }
    }

    /// Rotation parts of the group extended by inversion: every improper
    /// element folds to its underlying rotation (mirror → two-fold). This is
    /// the proper subgroup of the group's Laue extension.
    pub fn laue_proper(&self) -> Symmetry {
        let mut rotations: Vec<Rotation> = self.ops.iter().map(|op| op.rotation).collect();
        dedup_rotations_in_place(&mut rotations, GROUP_EPS, true);
        let ops: Vec<SymOp> = rotations.into_iter().map(SymOp::proper).collect();
        let name = catalog::identify(&ops).unwrap_or("");
        Symmetry { name, ops }
    }

    /// Elements common to both groups, in `self`'s stored order.
    pub fn intersection(&self, other: &Symmetry) -> Symmetry {
        let ops: Vec<SymOp> = self
            .ops
            .iter()
            .filter(|op| other.ops.iter().any(|o| o.approx_eq(op, GROUP_EPS)))
            .copied()
            .collect();
        let name = catalog::identify(&ops).unwrap_or("");
        Symmetry { name, ops }
    }

    pub fn contains(&self, op: &SymOp) -> bool {
        self.ops.iter().any(|o| o.approx_eq(op, GROUP_EPS))
    }

    /// Inverse-pole-figure sector for this group (empty for unlisted names).
    pub fn fundamental_sector(&self) -> FundamentalSector {
        catalog::sector_for(self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_closed(g: &Symmetry) {
        for a in g.ops() {
            assert!(g.contains(&a.inverse()), "{}: inverse missing", g.name());
            for b in g.ops() {
                assert!(
                    g.contains(&a.compose(b)),
                    "{}: product missing",
                    g.name()
                );
            }
        }
    }

    #[test]
    fn catalog_groups_are_closed_with_identity_first() {
        for g in catalog::all() {
            assert!(!g.is_empty());
            assert!(g.ops()[0].rotation.is_identity(1e-12) && !g.ops()[0].improper);
            assert_closed(&g);
        }
    }

    #[test]
    fn group_orders() {
        let expected = [
            ("1", 1),
            ("-1", 2),
            ("m", 2),
            ("2", 2),
            ("3", 3),
            ("4", 4),
            ("6", 6),
            ("222", 4),
            ("32", 6),
            ("422", 8),
            ("622", 12),
            ("23", 12),
            ("m-3", 24),
            ("432", 24),
            ("m-3m", 48),
        ];
        for (name, order) in expected {
            let g = catalog::all()
                .into_iter()
                .find(|g| g.name() == name)
                .unwrap();
            assert_eq!(g.len(), order, "{name}");
        }
    }

    #[test]
    fn improper_flags_and_subgroups() {
        assert!(Symmetry::c1().is_proper());
        assert!(!Symmetry::ci().is_proper());
        assert!(Symmetry::ci().contains_inversion());
        assert!(!Symmetry::csz().contains_inversion());
        assert!(Symmetry::th().contains_inversion());

        let t = Symmetry::th().proper_subgroup();
        assert_eq!(t.name(), "23");
        assert_eq!(t.len(), 12);
        let o = Symmetry::oh().proper_subgroup();
        assert_eq!(o.name(), "432");
        assert_eq!(o.len(), 24);
    }

    #[test]
    fn mirror_folds_to_two_fold_under_laue() {
        let folded = Symmetry::csz().laue_proper();
        assert_eq!(folded.name(), "2");
        assert_eq!(folded.len(), 2);
        assert!(folded.is_proper());
    }

    #[test]
    fn intersection_of_nested_dihedral_groups() {
        let shared = Symmetry::d6().intersection(&Symmetry::d3());
        assert_eq!(shared.name(), "32");
        assert_eq!(shared.len(), 6);
        let trivial = Symmetry::d3().intersection(&Symmetry::c1());
        assert_eq!(trivial.name(), "1");
        assert_eq!(trivial.len(), 1);
    }
}
