//! Fundamental-domain walkthrough for a hexagonal crystal.
//!
//! Purpose
//! - Print the orientation-zone normals and the IPF sector geometry for 622
//!   so the construction can be eyeballed against tabulated references.
//! - Give a ready-made starting point for wiring the sector polyline into a
//!   stereographic plot.

use fzone::prelude::*;

fn main() {
    let d6 = Symmetry::d6();
    let c1 = Symmetry::c1();

    let region = OrientationRegion::from_symmetry(&d6, &c1).expect("proper pair");
    println!("orientation zone for {}:", d6.name());
    println!("  {} boundary normals", region.len());
    for n in region.normals() {
        println!(
            "    ({:+.6}, {:+.6}, {:+.6}, {:+.6})  angle {:6.2}°",
            n.q[0],
            n.q[1],
            n.q[2],
            n.q[3],
            n.angle().to_degrees()
        );
    }
    println!("  {} faces with corners", region.faces().len());

    let sector = d6.fundamental_sector();
    println!("IPF sector for {}:", d6.name());
    for v in sector.vertices() {
        println!("    vertex ({:+.4}, {:+.4}, {:+.4})", v.x, v.y, v.z);
    }
    let c = sector.center();
    println!("    center ({:+.4}, {:+.4}, {:+.4})", c.x, c.y, c.z);
    println!("    boundary polyline: {} points", sector.edges().len());
}
