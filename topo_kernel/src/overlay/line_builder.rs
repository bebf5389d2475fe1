use super::{is_covered, OpCode};
use crate::core::traits::Real;
use crate::geometry::{LineString, Polygon};
use crate::graph::PlanarGraph;

/// Collects the result lines: line edges in the result that are not covered by a result polygon,
/// plus (for intersection) area boundaries shared by both inputs that do not bound a result
/// polygon.
#[derive(Debug)]
pub struct LineBuilder<'a, T = f64> {
    result_polygons: &'a [Polygon<T>],
}

impl<'a, T> LineBuilder<'a, T>
where
    T: Real,
{
    pub fn new(result_polygons: &'a [Polygon<T>]) -> Self {
        Self { result_polygons }
    }

    pub fn build(&self, graph: &mut PlanarGraph<T>, op: OpCode) -> Vec<LineString<T>> {
        self.find_covered_line_edges(graph);

        let mut line_edges = Vec::new();
        for de in 0..graph.dirs.len() {
            collect_line_edge(graph, de, op, &mut line_edges);
            collect_boundary_touch_edge(graph, de, op, &mut line_edges);
        }

        line_edges
            .into_iter()
            .map(|e| {
                graph.edges[e].is_in_result = true;
                LineString::new(graph.edges[e].pts.clone())
            })
            .collect()
    }

    fn find_covered_line_edges(&self, graph: &mut PlanarGraph<T>) {
        for node in graph.node_indexes() {
            graph.find_covered_line_edges(node);
        }

        // edges not incident to any result area edge are checked against the result polygons
        for de in 0..graph.dirs.len() {
            let edge = graph.dirs[de].edge;
            if graph.dirs[de].is_line_edge() && !graph.edges[edge].is_covered_set() {
                let covered = is_covered(graph.dirs[de].coordinate(), self.result_polygons);
                graph.edges[edge].set_covered(covered);
            }
        }
    }
}

fn collect_line_edge<T>(graph: &mut PlanarGraph<T>, de: usize, op: OpCode, out: &mut Vec<usize>)
where
    T: Real,
{
    let dir = &graph.dirs[de];
    if !dir.is_line_edge() || dir.is_visited {
        return;
    }

    let edge = dir.edge;
    if op.is_result_of_label(&dir.label) && !graph.edges[edge].is_covered() {
        out.push(edge);
        graph.set_visited_edge(de, true);
    }
}

fn collect_boundary_touch_edge<T>(
    graph: &mut PlanarGraph<T>,
    de: usize,
    op: OpCode,
    out: &mut Vec<usize>,
) where
    T: Real,
{
    let dir = &graph.dirs[de];
    if dir.is_line_edge() || dir.is_visited || dir.is_interior_area_edge() {
        return;
    }

    let edge = dir.edge;
    // linework already part of a result ring
    if graph.edges[edge].is_in_result {
        return;
    }

    if op == OpCode::Intersection && op.is_result_of_label(&dir.label) {
        out.push(edge);
        graph.set_visited_edge(de, true);
    }
}
