use super::{is_covered, is_covered_by_lines, OpCode};
use crate::core::{math::Vector2, traits::Real};
use crate::geometry::{LineString, Polygon};
use crate::graph::PlanarGraph;

/// Collects the result points: nodes in the result without any incident result edge which are
/// not covered by a result line or polygon.
pub fn build_points<T>(
    graph: &PlanarGraph<T>,
    op: OpCode,
    result_lines: &[LineString<T>],
    result_polygons: &[Polygon<T>],
) -> Vec<Vector2<T>>
where
    T: Real,
{
    let mut points = Vec::new();
    for node in graph.node_indexes() {
        if graph.is_incident_edge_in_result(node) {
            continue;
        }

        let n = &graph.nodes[node];
        if (n.degree() == 0 || op == OpCode::Intersection) && op.is_result_of_label(&n.label) {
            let coord = n.coord;
            if !is_covered_by_lines(coord, result_lines) && !is_covered(coord, result_polygons) {
                points.push(coord);
            }
        }
    }

    points
}
