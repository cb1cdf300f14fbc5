//! Stored element tables and IPF sector data for the named point groups.

use std::f64::consts::{FRAC_1_SQRT_2, PI};

use nalgebra::Vector3;

use crate::quat::Rotation;
use crate::sphere::FundamentalSector;

use super::groups::Symmetry;
use super::ops::SymOp;

impl Symmetry {
    /// Triclinic 1 (trivial group).
    pub fn c1() -> Symmetry {
        Symmetry::from_ops("1", vec![SymOp::identity()])
    }

    /// Triclinic -1 (identity plus inversion).
    pub fn ci() -> Symmetry {
        Symmetry::from_ops("-1", vec![SymOp::identity(), SymOp::inversion()])
    }

    /// Monoclinic m with the mirror plane normal to z.
    pub fn csz() -> Symmetry {
        let two_fold_z = Rotation::from_axis_angle(Vector3::z(), PI);
        Symmetry::from_ops("m", vec![SymOp::identity(), SymOp::improper(two_fold_z)])
    }

    /// Monoclinic 2 (two-fold about z).
    pub fn c2() -> Symmetry {
        Symmetry::from_ops("2", cyclic_z(2))
    }

    /// Trigonal 3.
    pub fn c3() -> Symmetry {
        Symmetry::from_ops("3", cyclic_z(3))
    }

    /// Tetragonal 4.
    pub fn c4() -> Symmetry {
        Symmetry::from_ops("4", cyclic_z(4))
    }

    /// Hexagonal 6.
    pub fn c6() -> Symmetry {
        Symmetry::from_ops("6", cyclic_z(6))
    }

    /// Orthorhombic 222.
    pub fn d2() -> Symmetry {
        Symmetry::from_ops("222", dihedral(2))
    }

    /// Trigonal 32.
    pub fn d3() -> Symmetry {
        Symmetry::from_ops("32", dihedral(3))
    }

    /// Tetragonal 422.
    pub fn d4() -> Symmetry {
        Symmetry::from_ops("422", dihedral(4))
    }

    /// Hexagonal 622.
    pub fn d6() -> Symmetry {
        Symmetry::from_ops("622", dihedral(6))
    }

    /// Cubic 23.
    pub fn t() -> Symmetry {
        Symmetry::from_ops("23", tetrahedral())
    }

    /// Cubic m-3 (23 extended by inversion).
    pub fn th() -> Symmetry {
        Symmetry::from_ops("m-3", with_inversion(tetrahedral()))
    }

    /// Cubic 432.
    pub fn o() -> Symmetry {
        Symmetry::from_ops("432", octahedral())
    }

    /// Cubic m-3m (432 extended by inversion).
    pub fn oh() -> Symmetry {
        Symmetry::from_ops("m-3m", with_inversion(octahedral()))
    }
}

/// Every catalog group, used for identification and property tests.
pub(crate) fn all() -> Vec<Symmetry> {
    vec![
        Symmetry::c1(),
        Symmetry::ci(),
        Symmetry::csz(),
        Symmetry::c2(),
        Symmetry::c3(),
        Symmetry::c4(),
        Symmetry::c6(),
        Symmetry::d2(),
        Symmetry::d3(),
        Symmetry::d4(),
        Symmetry::d6(),
        Symmetry::t(),
        Symmetry::th(),
        Symmetry::o(),
        Symmetry::oh(),
    ]
}

/// Catalog name whose element set matches `ops` (up to order and the double
/// cover), if any.
pub(crate) fn identify(ops: &[SymOp]) -> Option<&'static str> {
    for g in all() {
        if g.len() == ops.len() && ops.iter().all(|op| g.contains(op)) {
            return Some(g.name());
        }
    }
    None
}

/// Name of the proper subgroup of a catalog group.
pub(crate) fn proper_name(name: &'static str) -> &'static str {
    match name {
        "-1" | "m" => "1",
        "m-3" => "23",
        "m-3m" => "432",
        other => other,
    }
}

/// IPF sector normals (inward convention) per group, with the fixed center
/// constants for 23, m-3 and 432 whose sampled centers are unreliable.
pub(crate) fn sector_for(name: &str) -> FundamentalSector {
    let y = Vector3::y();
    let z = Vector3::z();
    // Azimuth-wedge boundary at `alpha`: keeps azimuth ≤ alpha.
    let wedge = |alpha: f64| Vector3::new(alpha.sin(), -alpha.cos(), 0.0);
    let s = FRAC_1_SQRT_2;
    match name {
        "-1" | "m" => FundamentalSector::new(vec![z]),
        "2" => FundamentalSector::new(vec![y]),
        "3" => FundamentalSector::new(vec![y, wedge(2.0 * PI / 3.0)]),
        "4" => FundamentalSector::new(vec![y, wedge(PI / 2.0)]),
        "6" => FundamentalSector::new(vec![y, wedge(PI / 3.0)]),
        "222" => FundamentalSector::new(vec![y, z]),
        "32" => FundamentalSector::new(vec![y, wedge(2.0 * PI / 3.0), z]),
        "422" => FundamentalSector::new(vec![y, wedge(PI / 2.0), z]),
        "622" => FundamentalSector::new(vec![y, wedge(PI / 3.0), z]),
        "23" => FundamentalSector::with_center_override(
            vec![
                Vector3::new(s, s, 0.0),
                Vector3::new(0.0, s, s),
                Vector3::new(s, -s, 0.0),
                Vector3::new(0.0, -s, s),
            ],
            Vector3::new(s, 0.0, s),
        ),
        "m-3" | "432" => FundamentalSector::with_center_override(
            vec![
                y,
                Vector3::new(s, -s, 0.0),
                z,
                Vector3::new(s, 0.0, -s),
            ],
            Vector3::new(0.854_765, 0.367_001, 0.367_001),
        ),
        "m-3m" => FundamentalSector::new(vec![
            y,
            Vector3::new(s, -s, 0.0),
            Vector3::new(-s, 0.0, s),
        ]),
        _ => FundamentalSector::new(Vec::new()),
    }
}

/// `n`-fold rotations about z, identity first, increasing angle.
fn cyclic_z(n: u32) -> Vec<SymOp> {
    (0..n)
        .map(|k| {
            let angle = 2.0 * PI * f64::from(k) / f64::from(n);
            SymOp::proper(Rotation::from_axis_angle(Vector3::z(), angle))
        })
        .collect()
}

/// Cyclic part about z plus `n` in-plane two-folds at azimuth k·π/n.
fn dihedral(n: u32) -> Vec<SymOp> {
    let mut ops = cyclic_z(n);
    for k in 0..n {
        let az = PI * f64::from(k) / f64::from(n);
        let axis = Vector3::new(az.cos(), az.sin(), 0.0);
        ops.push(SymOp::proper(Rotation::from_axis_angle(axis, PI)));
    }
    ops
}

/// The 12 rotations of 23: identity, axis two-folds, diagonal three-folds.
fn tetrahedral() -> Vec<SymOp> {
    let mut ops = vec![SymOp::identity()];
    for axis in [Vector3::x(), Vector3::y(), Vector3::z()] {
        ops.push(SymOp::proper(Rotation::from_axis_angle(axis, PI)));
    }
    for axis in diagonal_axes() {
        ops.push(SymOp::proper(Rotation::from_axis_angle(axis, 2.0 * PI / 3.0)));
        ops.push(SymOp::proper(Rotation::from_axis_angle(axis, 4.0 * PI / 3.0)));
    }
    ops
}

/// The 24 rotations of 432: 23 plus axis quarter-turns and face-diagonal
/// two-folds.
fn octahedral() -> Vec<SymOp> {
    let mut ops = tetrahedral();
    for axis in [Vector3::x(), Vector3::y(), Vector3::z()] {
        ops.push(SymOp::proper(Rotation::from_axis_angle(axis, PI / 2.0)));
        ops.push(SymOp::proper(Rotation::from_axis_angle(axis, 3.0 * PI / 2.0)));
    }
    for axis in face_diagonal_axes() {
        ops.push(SymOp::proper(Rotation::from_axis_angle(axis, PI)));
    }
    ops
}

fn diagonal_axes() -> [Vector3<f64>; 4] {
    [
        Vector3::new(1.0, 1.0, 1.0),
        Vector3::new(1.0, -1.0, 1.0),
        Vector3::new(1.0, 1.0, -1.0),
        Vector3::new(1.0, -1.0, -1.0),
    ]
}

fn face_diagonal_axes() -> [Vector3<f64>; 6] {
    [
        Vector3::new(1.0, 1.0, 0.0),
        Vector3::new(1.0, -1.0, 0.0),
        Vector3::new(1.0, 0.0, 1.0),
        Vector3::new(1.0, 0.0, -1.0),
        Vector3::new(0.0, 1.0, 1.0),
        Vector3::new(0.0, 1.0, -1.0),
    ]
}

/// Extend a proper element list by its inversion coset.
fn with_inversion(ops: Vec<SymOp>) -> Vec<SymOp> {
    let mut out = ops.clone();
    out.extend(ops.into_iter().map(|op| SymOp::improper(op.rotation)));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const SQRT3_OVER_2: f64 = 0.866_025_403_784_438_6;

    #[test]
    fn cyclic_storage_matches_the_documented_convention() {
        let c3 = Symmetry::c3();
        let r = c3.rotations();
        assert!(r[1].approx_eq(&Rotation::new(0.5, 0.0, 0.0, SQRT3_OVER_2), 1e-12));
        assert!(r[2].approx_eq(&Rotation::new(-0.5, 0.0, 0.0, SQRT3_OVER_2), 1e-12));

        let d3 = Symmetry::d3();
        let r = d3.rotations();
        assert!(r[3].approx_eq(&Rotation::new(0.0, 1.0, 0.0, 0.0), 1e-12));
        assert!(r[4].approx_eq(&Rotation::new(0.0, 0.5, SQRT3_OVER_2, 0.0), 1e-12));
        assert!(r[5].approx_eq(&Rotation::new(0.0, -0.5, SQRT3_OVER_2, 0.0), 1e-12));
    }

    #[test]
    fn sector_table_covers_every_catalog_group_except_triclinic_1() {
        for g in all() {
            let sector = g.fundamental_sector();
            if g.name() == "1" {
                assert!(sector.normals().is_empty());
            } else {
                assert!(!sector.normals().is_empty(), "{}", g.name());
            }
        }
    }

    #[test]
    fn cubic_center_overrides_lie_strictly_inside_their_sector() {
        for name in ["23", "m-3", "432"] {
            let sector = sector_for(name);
            let c = sector.center();
            for n in sector.normals() {
                assert!(c.dot(n) > 0.0, "{name}");
            }
        }
    }
}
