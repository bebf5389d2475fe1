use topo_kernel::{
    core::math::vec2,
    geometry::LineString,
    simplify::{DouglasPeuckerLineSimplifier, TopologyPreservingSimplifier},
};

fn main() {
    let wave: Vec<_> = (0..=40)
        .map(|i| {
            let x = i as f64 * 0.25;
            vec2(x, (x * 2.0).sin() * 0.5)
        })
        .collect();

    for tolerance in [0.01, 0.1, 0.5] {
        let simplified = DouglasPeuckerLineSimplifier::simplify(&wave, tolerance);
        println!(
            "douglas peucker tolerance {}: {} -> {} points",
            tolerance,
            wave.len(),
            simplified.len()
        );
    }

    // the short vertical line sits between the bump and its chord, the simplifier keeps enough
    // of the bump that the two never cross
    let lines = vec![
        LineString::new(vec![vec2(0.0, 0.0), vec2(5.0, 3.0), vec2(10.0, 0.0)]),
        LineString::new(vec![vec2(5.0, -1.0), vec2(5.0, 1.0)]),
    ];
    let result = TopologyPreservingSimplifier::simplify_lines(&lines, 5.0);
    println!(
        "topology preserving: first line kept {} of {} points",
        result[0].len(),
        lines[0].len()
    );
}
