mod test_utils;

use proptest::prelude::*;
use test_utils::init_logging;
use topo_kernel::{
    core::math::{seg_seg_intr, vec2, SegSegIntr, Vector2},
    geometry::{Geometry, LineSegment, LineString, Polygon},
    simplify::{DouglasPeuckerLineSimplifier, TopologyPreservingSimplifier},
};

fn distance_to_polyline(p: Vector2<f64>, line: &[Vector2<f64>]) -> f64 {
    line.windows(2)
        .map(|w| LineSegment::new(w[0], w[1]).distance_to_point(p))
        .fold(f64::INFINITY, f64::min)
}

/// Segments of all lines that touch or cross, ignoring consecutive segments of the same line
/// (including the last and first segment of a closed line).
fn find_crossing(lines: &[Vec<Vector2<f64>>]) -> Option<(usize, usize, usize, usize)> {
    let is_consecutive = |l: usize, i: usize, j: usize| {
        let pts = &lines[l];
        j == i + 1 || (i == 0 && j + 2 == pts.len() && pts.first() == pts.last())
    };

    let segs: Vec<(usize, usize, Vector2<f64>, Vector2<f64>)> = lines
        .iter()
        .enumerate()
        .flat_map(|(l, pts)| {
            pts.windows(2)
                .enumerate()
                .map(move |(i, w)| (l, i, w[0], w[1]))
        })
        .collect();

    for (a, &(la, ia, a0, a1)) in segs.iter().enumerate() {
        for &(lb, ib, b0, b1) in segs[a + 1..].iter() {
            if la == lb && is_consecutive(la, ia, ib) {
                continue;
            }
            if !matches!(seg_seg_intr(a0, a1, b0, b1), SegSegIntr::NoIntersect) {
                return Some((la, ia, lb, ib));
            }
        }
    }
    None
}

#[test]
fn douglas_peucker_collapses_nearly_straight_line() {
    let pts: Vec<_> = (0..=20)
        .map(|i| vec2(i as f64, if i % 2 == 0 { 0.01 } else { -0.01 }))
        .collect();
    let result = DouglasPeuckerLineSimplifier::simplify(&pts, 0.1);
    assert_eq!(result, vec![pts[0], pts[20]]);

    // zero tolerance keeps every vertex off the chord
    let result = DouglasPeuckerLineSimplifier::simplify(&pts, 0.0);
    assert_eq!(result.len(), pts.len());
}

#[test]
fn douglas_peucker_indices_are_ascending_and_keep_ends() {
    let pts = [
        vec2(0.0, 0.0),
        vec2(1.0, 2.0),
        vec2(2.0, 0.9),
        vec2(3.0, 0.0),
        vec2(4.0, 3.0),
        vec2(5.0, 0.0),
    ];
    let indices = DouglasPeuckerLineSimplifier::simplify_indices(&pts, 0.5);
    assert_eq!(indices.first(), Some(&0));
    assert_eq!(indices.last(), Some(&5));
    assert!(indices.windows(2).all(|w| w[0] < w[1]));
    assert!(indices.contains(&1));
    assert!(indices.contains(&4));
    assert!(!indices.contains(&2));
}

#[test]
fn topology_preserving_keeps_ring_valid() {
    init_logging();
    // noisy 40 sided polygon with a noisy hole close to the shell
    let n = 40;
    let circle = |r: f64, noise: f64| -> Vec<Vector2<f64>> {
        let mut pts: Vec<_> = (0..n)
            .map(|i| {
                let a = i as f64 / n as f64 * std::f64::consts::TAU;
                let r = r + if i % 2 == 0 { noise } else { -noise };
                vec2(r * a.cos(), r * a.sin())
            })
            .collect();
        pts.push(pts[0]);
        pts
    };
    let polygon = Polygon::new(circle(10.0, 0.2), vec![circle(9.0, 0.2)]);
    let geometry = Geometry::from_polygon(polygon);

    let result = TopologyPreservingSimplifier::simplify(&geometry, 3.0);
    assert_eq!(result.polygons.len(), 1);
    let simplified = &result.polygons[0];
    assert_eq!(simplified.holes.len(), 1);
    for ring in simplified.rings() {
        assert!(ring.len() >= 4);
        assert_eq!(ring.first(), ring.last());
    }
    assert!(simplified.shell.len() < geometry.polygons[0].shell.len());
    assert!(find_crossing(&[simplified.shell.clone(), simplified.holes[0].clone()]).is_none());
}

#[test]
fn topology_preserving_keeps_points_and_line_order() {
    let geometry = Geometry::new(
        vec![vec2(100.0, 100.0)],
        vec![
            LineString::new(vec![vec2(0.0, 0.0), vec2(1.0, 0.1), vec2(2.0, 0.0)]),
            LineString::new(vec![vec2(0.0, 5.0), vec2(1.0, 5.1), vec2(2.0, 5.0)]),
        ],
        Vec::new(),
    );
    let result = TopologyPreservingSimplifier::simplify(&geometry, 1.0);
    assert_eq!(result.points, geometry.points);
    assert_eq!(result.lines[0].coords, vec![vec2(0.0, 0.0), vec2(2.0, 0.0)]);
    assert_eq!(result.lines[1].coords, vec![vec2(0.0, 5.0), vec2(2.0, 5.0)]);
}

#[test]
fn later_lines_extending_below_first_extent() {
    init_logging();
    // second segment reaches left of the first segment's envelope
    let lines = vec![
        LineString::new(vec![vec2(0.0, 0.0), vec2(1.0, 1.0)]),
        LineString::new(vec![vec2(-0.5, 2.0), vec2(5.0, 3.0)]),
        LineString::new(vec![vec2(0.5, -4.0), vec2(0.6, -3.0), vec2(0.7, 9.0)]),
    ];
    let result = TopologyPreservingSimplifier::simplify_lines(&lines, 1.0);
    assert_eq!(result.len(), 3);
    assert_eq!(result[0].coords, lines[0].coords);
    assert_eq!(result[1].coords, lines[1].coords);
    assert_eq!(result[2].coords.first(), Some(&vec2(0.5, -4.0)));
    assert_eq!(result[2].coords.last(), Some(&vec2(0.7, 9.0)));
}

proptest! {
    #[test]
    fn douglas_peucker_within_tolerance_and_idempotent(
        ys in prop::collection::vec(-10.0f64..10.0, 2..60),
        tolerance in 0.0f64..5.0,
    ) {
        let pts: Vec<_> = ys.iter().enumerate().map(|(i, &y)| vec2(i as f64, y)).collect();
        let result = DouglasPeuckerLineSimplifier::simplify(&pts, tolerance);
        prop_assert_eq!(result.first(), pts.first());
        prop_assert_eq!(result.last(), pts.last());
        for &p in pts.iter() {
            prop_assert!(distance_to_polyline(p, &result) <= tolerance + 1e-9);
        }
        prop_assert_eq!(DouglasPeuckerLineSimplifier::simplify(&result, tolerance), result);
    }

    #[test]
    fn stacked_lines_never_cross_after_simplification(
        base in prop::collection::vec(-3.0f64..3.0, 3..40),
        gaps in prop::collection::vec(prop::collection::vec(0.05f64..1.0, 40), 1..4),
        tolerance in 0.1f64..4.0,
    ) {
        // every line lies strictly above the previous one at each x sample, so the inputs are
        // simple and pairwise disjoint
        let n = base.len();
        let mut lines = vec![base.clone()];
        for g in gaps.iter() {
            let prev = &lines[lines.len() - 1];
            let next: Vec<f64> = prev.iter().zip(g.iter()).map(|(y, d)| y + d).collect();
            lines.push(next);
        }
        let lines: Vec<LineString<f64>> = lines
            .iter()
            .map(|ys| LineString::new(ys.iter().take(n).enumerate().map(|(i, &y)| vec2(i as f64, y)).collect()))
            .collect();

        let result = TopologyPreservingSimplifier::simplify_lines(&lines, tolerance);
        prop_assert_eq!(result.len(), lines.len());
        for (input, output) in lines.iter().zip(result.iter()) {
            prop_assert!(output.len() >= 2);
            prop_assert_eq!(output.coords.first(), input.coords.first());
            prop_assert_eq!(output.coords.last(), input.coords.last());
        }

        let coords: Vec<_> = result.iter().map(|l| l.coords.clone()).collect();
        prop_assert_eq!(find_crossing(&coords), None);
    }
}
