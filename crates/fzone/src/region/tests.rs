use std::f64::consts::PI;

use nalgebra::Vector3;
use proptest::prelude::*;

use crate::quat::Rotation;
use crate::symmetry::Symmetry;

use super::{
    distinguished_points, large_cell_normals, resolve_proper_groups, OrientationRegion,
    ResolveError,
};

const SQRT2_OVER_2: f64 = std::f64::consts::FRAC_1_SQRT_2;

fn assert_rotations_close(actual: &[Rotation], expected: &[[f64; 4]], tol: f64) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "count mismatch: {actual:?} vs {expected:?}"
    );
    for (a, e) in actual.iter().zip(expected) {
        let d = (a.q[0] - e[0]).abs().max(
            (a.q[1] - e[1])
                .abs()
                .max((a.q[2] - e[2]).abs().max((a.q[3] - e[3]).abs())),
        );
        assert!(d < tol, "rotation {a:?} differs from {e:?}");
    }
}

#[test]
fn distinguished_points_two_fold() {
    let dp = distinguished_points(&Symmetry::c2(), &Symmetry::c1());
    assert_rotations_close(&dp, &[[0.0, 0.0, 0.0, 1.0], [0.0, 0.0, 0.0, -1.0]], 1e-3);
}

#[test]
fn distinguished_points_three_fold() {
    let dp = distinguished_points(&Symmetry::c3(), &Symmetry::c1());
    assert_rotations_close(
        &dp,
        &[
            [0.5, 0.0, 0.0, 0.866],
            [-0.5, 0.0, 0.0, -0.866],
            [-0.5, 0.0, 0.0, 0.866],
            [0.5, 0.0, 0.0, -0.866],
        ],
        1e-3,
    );
}

#[test]
fn distinguished_points_dihedral_pair() {
    let dp = distinguished_points(&Symmetry::d3(), &Symmetry::c3());
    assert_rotations_close(
        &dp,
        &[
            [0.5, 0.0, 0.0, 0.866],
            [-0.5, 0.0, 0.0, -0.866],
            [-0.5, 0.0, 0.0, 0.866],
            [0.5, 0.0, 0.0, -0.866],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, -1.0, 0.0, 0.0],
            [0.0, 0.5, 0.866, 0.0],
            [0.0, -0.5, -0.866, 0.0],
            [0.0, -0.5, 0.866, 0.0],
            [0.0, 0.5, -0.866, 0.0],
        ],
        1e-3,
    );
}

#[test]
fn large_cell_normals_two_fold() {
    let n = large_cell_normals(&Symmetry::c2(), &Symmetry::c1());
    assert_rotations_close(
        &n,
        &[
            [SQRT2_OVER_2, 0.0, 0.0, -SQRT2_OVER_2],
            [SQRT2_OVER_2, 0.0, 0.0, SQRT2_OVER_2],
        ],
        1e-3,
    );
}

#[test]
fn large_cell_normals_six_fold() {
    let n = large_cell_normals(&Symmetry::c6(), &Symmetry::c1());
    assert_rotations_close(
        &n,
        &[
            [0.258819, 0.0, 0.0, -0.965926],
            [0.258819, 0.0, 0.0, 0.965926],
        ],
        1e-3,
    );
}

#[test]
fn large_cell_normals_equal_three_folds() {
    let n = large_cell_normals(&Symmetry::c3(), &Symmetry::c3());
    assert_rotations_close(
        &n,
        &[[0.5, 0.0, 0.0, -0.866], [0.5, 0.0, 0.0, 0.866]],
        1e-3,
    );
}

#[test]
fn large_cell_normals_orthorhombic() {
    let n = large_cell_normals(&Symmetry::d2(), &Symmetry::c1());
    assert_rotations_close(
        &n,
        &[
            [SQRT2_OVER_2, -SQRT2_OVER_2, 0.0, 0.0],
            [SQRT2_OVER_2, 0.0, -SQRT2_OVER_2, 0.0],
            [SQRT2_OVER_2, 0.0, 0.0, -SQRT2_OVER_2],
            [SQRT2_OVER_2, 0.0, 0.0, SQRT2_OVER_2],
            [SQRT2_OVER_2, 0.0, SQRT2_OVER_2, 0.0],
            [SQRT2_OVER_2, SQRT2_OVER_2, 0.0, 0.0],
        ],
        1e-3,
    );
}

#[test]
fn large_cell_normals_trigonal_dihedral() {
    let n = large_cell_normals(&Symmetry::d3(), &Symmetry::c1());
    assert_rotations_close(
        &n,
        &[
            [0.707107, -0.707107, 0.0, 0.0],
            [0.707107, -0.353553, -0.612372, 0.0],
            [0.707107, -0.353553, 0.612372, 0.0],
            [0.5, 0.0, 0.0, -0.866025],
            [0.5, 0.0, 0.0, 0.866025],
            [0.707107, 0.353553, -0.612372, 0.0],
            [0.707107, 0.353553, 0.612372, 0.0],
            [0.707107, 0.707107, 0.0, 0.0],
        ],
        1e-3,
    );
}

#[test]
fn large_cell_normals_hexagonal_dihedral() {
    let n = large_cell_normals(&Symmetry::d6(), &Symmetry::c1());
    assert_rotations_close(
        &n,
        &[
            [0.707107, -0.707107, 0.0, 0.0],
            [0.707107, -0.612372, -0.353553, 0.0],
            [0.707107, -0.612372, 0.353553, 0.0],
            [0.707107, -0.353553, -0.612372, 0.0],
            [0.707107, -0.353553, 0.612372, 0.0],
            [0.707107, 0.0, -0.707107, 0.0],
            [0.258819, 0.0, 0.0, -0.965926],
            [0.258819, 0.0, 0.0, 0.965926],
            [0.707107, 0.0, 0.707107, 0.0],
            [0.707107, 0.353553, -0.612372, 0.0],
            [0.707107, 0.353553, 0.612372, 0.0],
            [0.707107, 0.612372, -0.353553, 0.0],
            [0.707107, 0.612372, 0.353553, 0.0],
            [0.707107, 0.707107, 0.0, 0.0],
        ],
        1e-3,
    );
}

#[test]
fn resolving_mixed_improper_pairs_succeeds() {
    let groups = [Symmetry::c1, Symmetry::ci, Symmetry::csz];
    for (i, gl) in groups.iter().enumerate() {
        for (j, gr) in groups.iter().enumerate() {
            let gl = gl();
            let gr = gr();
            let both_mirrors = i == 2 && j == 2;
            match resolve_proper_groups(&gl, &gr) {
                Ok((pl, pr)) => {
                    assert!(!both_mirrors);
                    assert!(pl.is_proper() && pr.is_proper());
                }
                Err(ResolveError::BothImproper { .. }) => assert!(both_mirrors),
            }
        }
    }
}

#[test]
fn resolved_groups_are_proper_for_catalog_pairs() {
    let pairs = [
        (Symmetry::oh(), Symmetry::c1()),
        (Symmetry::th(), Symmetry::d3()),
        (Symmetry::ci(), Symmetry::csz()),
        (Symmetry::csz(), Symmetry::ci()),
    ];
    for (gl, gr) in pairs {
        let (pl, pr) = resolve_proper_groups(&gl, &gr).unwrap();
        assert!(pl.is_proper(), "{} left", gl.name());
        assert!(pr.is_proper(), "{} right", gr.name());
    }
}

#[test]
fn mirror_pair_error_propagates_through_region_construction() {
    let err = OrientationRegion::from_symmetry(&Symmetry::csz(), &Symmetry::csz());
    assert!(matches!(err, Err(ResolveError::BothImproper { .. })));
}

#[test]
fn faces_never_panic_for_degenerate_regions() {
    // Raw single-normal region (arbitrary orientation data).
    let region = OrientationRegion::new(vec![Rotation::new(1.0, 1.0, 1.0, 1.0)]);
    assert!(region.faces().is_empty());
    assert!(region.vertices().is_empty());

    // Slab-like zones without vertices.
    let region = OrientationRegion::from_symmetry(&Symmetry::c6(), &Symmetry::c1()).unwrap();
    assert_eq!(region.len(), 2);
    assert!(region.faces().is_empty());

    // A zone with genuine corners keeps its faces.
    let region = OrientationRegion::from_symmetry(&Symmetry::d2(), &Symmetry::c1()).unwrap();
    let faces = region.faces();
    assert!(!faces.is_empty());
    for f in &faces {
        assert!(f.vertices.len() >= 3);
    }
}

#[test]
fn identity_lies_in_every_proper_zone() {
    let groups = [
        Symmetry::c1(),
        Symmetry::c2(),
        Symmetry::c3(),
        Symmetry::c4(),
        Symmetry::c6(),
        Symmetry::d2(),
        Symmetry::d3(),
        Symmetry::d4(),
        Symmetry::d6(),
        Symmetry::t(),
        Symmetry::o(),
    ];
    for g in groups {
        let region = OrientationRegion::from_symmetry(&g, &Symmetry::c1()).unwrap();
        assert!(
            region.contains(&Rotation::identity()),
            "{} zone rejects identity",
            g.name()
        );
    }
}

#[test]
fn zone_membership_tracks_the_closest_boundary() {
    let region = OrientationRegion::from_symmetry(&Symmetry::c6(), &Symmetry::c1()).unwrap();
    let inside = Rotation::from_axis_angle(Vector3::z(), 25.0 * PI / 180.0);
    let outside = Rotation::from_axis_angle(Vector3::z(), 35.0 * PI / 180.0);
    assert!(region.contains(&inside));
    assert!(region.contains(&-inside));
    assert!(!region.contains(&outside));
}

#[test]
fn every_sampled_rotation_has_an_image_in_the_zone() {
    let region = OrientationRegion::from_symmetry(&Symmetry::d2(), &Symmetry::c1()).unwrap();
    let elements = Symmetry::d2().rotations();
    for q in crate::sampling::random_rotations(911, 200) {
        let hit = elements.iter().any(|g| region.contains(&(*g * q)));
        assert!(hit, "no image of {q:?} lies in the 222 zone");
    }
}

#[test]
fn construction_is_deterministic() {
    let a = OrientationRegion::from_symmetry(&Symmetry::d6(), &Symmetry::c1()).unwrap();
    let b = OrientationRegion::from_symmetry(&Symmetry::d6(), &Symmetry::c1()).unwrap();
    assert_eq!(a.len(), b.len());
    for (x, y) in a.normals().iter().zip(b.normals()) {
        assert!(x.approx_eq(y, 1e-15));
    }
}

proptest! {
    // The zone tiles rotation space: some symmetry image of any rotation
    // falls inside the four-fold fundamental zone.
    #[test]
    fn some_image_lies_in_the_four_fold_zone(
        a in -1.0_f64..1.0,
        b in -1.0_f64..1.0,
        c in -1.0_f64..1.0,
        d in -1.0_f64..1.0,
    ) {
        prop_assume!((a * a + b * b + c * c + d * d).sqrt() > 0.1);
        let q = Rotation::new(a, b, c, d).unit().unwrap();
        let region = OrientationRegion::from_symmetry(&Symmetry::c4(), &Symmetry::c1()).unwrap();
        let hit = Symmetry::c4()
            .rotations()
            .into_iter()
            .any(|g| region.contains(&(g * q)));
        prop_assert!(hit);
    }

    // Every direction has an orthorhombic image inside the 222 sector.
    #[test]
    fn some_image_lies_in_the_orthorhombic_sector(
        x in -1.0_f64..1.0,
        y in -1.0_f64..1.0,
        z in -1.0_f64..1.0,
    ) {
        prop_assume!((x * x + y * y + z * z).sqrt() > 0.1);
        let v = Vector3::new(x, y, z).normalize();
        let sector = Symmetry::d2().fundamental_sector();
        let hit = Symmetry::d2()
            .rotations()
            .into_iter()
            .any(|g| sector.region().contains(&g.rotate(v)));
        prop_assert!(hit);
    }
}
