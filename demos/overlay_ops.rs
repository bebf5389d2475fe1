use topo_kernel::{
    core::{math::vec2, traits::FuzzyEq},
    geometry::{Geometry, LineString, Polygon},
    overlay, OpCode,
};

fn main() {
    polygon_operations();
    mixed_dimension_operations();
}

fn polygon_operations() {
    println!("Overlapping squares...");

    let a = Geometry::from_polygon(Polygon::rect(0.0, 0.0, 1.0, 1.0));
    let b = Geometry::from_polygon(Polygon::rect(0.5, 0.5, 1.5, 1.5));

    for (op, expected) in [
        (OpCode::Intersection, 0.25),
        (OpCode::Union, 1.75),
        (OpCode::Difference, 0.75),
        (OpCode::SymDifference, 1.5),
    ] {
        let result = match overlay(&a, &b, op) {
            Ok(r) => r,
            Err(e) => {
                eprintln!("{:?} failed: {}", op, e);
                continue;
            }
        };
        assert!(result.area().fuzzy_eq(expected));
        println!(
            "  {:?}: {} polygon(s), area = {:.3}",
            op,
            result.polygons.len(),
            result.area()
        );
    }

    // a square fully inside another leaves a hole behind
    let outer = Geometry::from_polygon(Polygon::rect(0.0, 0.0, 4.0, 4.0));
    let inner = Geometry::from_polygon(Polygon::rect(1.0, 1.0, 2.0, 2.0));
    if let Ok(result) = outer.difference(&inner) {
        println!(
            "  difference with contained square: {} hole(s), area = {:.3}",
            result.polygons[0].holes.len(),
            result.area()
        );
    }
}

fn mixed_dimension_operations() {
    println!("Line against polygon...");

    let line = Geometry::from_line(LineString::new(vec![vec2(-1.0, 0.5), vec2(3.0, 0.5)]));
    let square = Geometry::from_polygon(Polygon::rect(0.0, 0.0, 2.0, 1.0));

    if let Ok(inside) = line.intersection(&square) {
        println!("  clipped length = {:.3}", inside.length());
    }
    if let Ok(outside) = line.difference(&square) {
        println!("  {} line(s) outside the square", outside.lines.len());
    }

    let touching = Geometry::from_polygon(Polygon::rect(1.0, 1.0, 2.0, 2.0));
    let corner = Geometry::from_polygon(Polygon::rect(0.0, 0.0, 1.0, 1.0));
    if let Ok(result) = corner.intersection(&touching) {
        println!("  squares touching at a corner intersect in {:?}", result.points);
    }
}
