//! Sample elevation and snow depth from a small terrain TIN.
//!
//! Run with: cargo run --example terrain_sampling

use meshfield::field::MeshInterpolator;
use nalgebra::Point2;

fn main() {
    // A hand-made triangulated irregular network: a ridge between two valleys
    let positions = vec![
        Point2::new(0.0, 0.0),
        Point2::new(4.0, 0.0),
        Point2::new(8.0, 0.0),
        Point2::new(2.0, 3.0),
        Point2::new(6.0, 3.0),
        Point2::new(4.0, 6.0),
    ];
    let elevations = vec![100.0, 140.0, 95.0, 160.0, 180.0, 120.0];
    let triangles = vec![[0, 1, 3], [1, 4, 3], [1, 2, 4], [3, 4, 5]];

    let elevation: MeshInterpolator = MeshInterpolator::new(&positions, &elevations, &triangles)
        .expect("Failed to build terrain field");

    let mesh = elevation.topology();
    println!(
        "Built terrain: {} vertices, {} triangles",
        mesh.num_vertices(),
        mesh.num_triangles()
    );
    if let Some((min, max)) = mesh.bounding_box() {
        println!(
            "Extent: ({:.1}, {:.1}) to ({:.1}, {:.1})",
            min.x, min.y, max.x, max.y
        );
    }

    // Walk a west-to-east transect across the terrain
    println!("\nTransect along y = 1.0:");
    for i in 0..=8 {
        let x = i as f64;
        match elevation.try_evaluate(x, 1.0) {
            Some(z) => println!("  x={:.1}  elevation {:.1} m", x, z),
            None => println!("  x={:.1}  outside coverage", x),
        }
    }

    // Bind a second attribute to the same mesh; the topology and kd-tree
    // are shared, not rebuilt
    let snow_depths = vec![0.0, 0.2, 0.0, 0.8, 1.1, 0.4];
    let snow = elevation
        .with_values(snow_depths)
        .expect("Failed to bind snow depths");
    println!("\nRebound snow depths onto the same mesh");

    let (x, y) = (4.0, 4.0);
    println!(
        "Near the summit ({:.1}, {:.1}): elevation {:.1} m, snow {:.2} m",
        x,
        y,
        elevation.evaluate(x, y),
        snow.evaluate(x, y)
    );

    println!("Done!");
}
