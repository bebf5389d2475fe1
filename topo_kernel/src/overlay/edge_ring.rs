use crate::core::{math::Vector2, traits::Real};
use crate::error::{err_coord, TopologyError, TopologyResult};
use crate::geometry::{is_ccw, Envelope};
use crate::graph::PlanarGraph;

/// Kind of ring traced through the linked result edges.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RingKind {
    /// Follows `next` links, may pass through a node more than once.
    Maximal,
    /// Follows `next_min` links, passes through each node at most once.
    Minimal,
}

/// Closed ring of directed edges from the result area boundary.
#[derive(Debug, Clone)]
pub struct EdgeRing<T = f64> {
    pub kind: RingKind,
    pub start: usize,
    /// Directed edges of the ring in traversal order.
    pub edges: Vec<usize>,
    /// Closed ring coordinates.
    pub pts: Vec<Vector2<T>>,
    /// Counter clockwise rings are holes (the result area is on the right of each directed
    /// edge).
    pub is_hole: bool,
    pub shell: Option<usize>,
    pub holes: Vec<usize>,
    envelope: Envelope<T>,
}

impl<T> EdgeRing<T>
where
    T: Real,
{
    /// Trace the ring starting at directed edge `start`, recording `ring_index` on each directed
    /// edge visited.
    pub fn build(
        graph: &mut PlanarGraph<T>,
        start: usize,
        ring_index: usize,
        kind: RingKind,
    ) -> TopologyResult<Self> {
        let mut edges = Vec::new();
        let mut pts = Vec::new();
        let mut de = start;
        loop {
            let dir = &graph.dirs[de];
            let assigned = match kind {
                RingKind::Maximal => dir.edge_ring,
                RingKind::Minimal => dir.min_edge_ring,
            };
            if assigned == Some(ring_index) {
                return Err(TopologyError::RingEdgeVisitedTwice {
                    at: err_coord(dir.coordinate()),
                });
            }

            let edge_pts = &graph.edges[dir.edge].pts;
            let is_first = edges.is_empty();
            if dir.is_forward {
                let start_index = if is_first { 0 } else { 1 };
                pts.extend_from_slice(&edge_pts[start_index..]);
            } else {
                let end_index = if is_first {
                    edge_pts.len()
                } else {
                    edge_pts.len() - 1
                };
                pts.extend(edge_pts[..end_index].iter().rev());
            }

            edges.push(de);
            let next = match kind {
                RingKind::Maximal => {
                    graph.dirs[de].edge_ring = Some(ring_index);
                    graph.dirs[de].next
                }
                RingKind::Minimal => {
                    graph.dirs[de].min_edge_ring = Some(ring_index);
                    graph.dirs[de].next_min
                }
            };

            de = next.ok_or_else(|| TopologyError::NullRingEdge {
                at: err_coord(graph.dirs[start].coordinate()),
            })?;

            if de == start {
                break;
            }
        }

        let is_hole = is_ccw(&pts);
        let envelope = Envelope::from_points(pts.iter());
        Ok(Self {
            kind,
            start,
            edges,
            pts,
            is_hole,
            shell: None,
            holes: Vec::new(),
            envelope,
        })
    }

    #[inline]
    pub fn envelope(&self) -> &Envelope<T> {
        &self.envelope
    }

    #[inline]
    pub fn coordinate(&self) -> Vector2<T> {
        self.pts[0]
    }

    /// Largest degree (incoming plus outgoing ring edges) of any node on the ring, a ring that
    /// passes through a node only once has degree 2.
    pub fn max_node_degree(&self, graph: &PlanarGraph<T>, ring_index: usize) -> usize {
        self.edges
            .iter()
            .map(|&de| graph.outgoing_degree(graph.dirs[de].node, ring_index))
            .max()
            .unwrap_or(0)
            * 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::vec2;
    use crate::geometry::Location;
    use crate::graph::{Edge, Label};

    #[test]
    fn trace_triangle_ring() {
        let mut graph = PlanarGraph::new();
        let label = Label::new_area(0, Location::Boundary, Location::Exterior, Location::Interior);
        graph.add_edges(vec![
            Edge::new(vec![vec2(0.0, 0.0), vec2(0.0, 1.0)], label),
            Edge::new(vec![vec2(0.0, 1.0), vec2(1.0, 0.0)], label),
            Edge::new(vec![vec2(1.0, 0.0), vec2(0.0, 0.0)], label),
        ]);
        // forward directed edges are 0, 2 and 4
        graph.dirs[0].next = Some(2);
        graph.dirs[2].next = Some(4);
        graph.dirs[4].next = Some(0);

        let ring = EdgeRing::build(&mut graph, 0, 0, RingKind::Maximal).unwrap();
        assert_eq!(ring.edges, vec![0, 2, 4]);
        assert_eq!(ring.pts.len(), 4);
        assert_eq!(ring.pts[0], ring.pts[3]);
        assert!(!ring.is_hole);
        assert_eq!(ring.max_node_degree(&graph, 0), 2);
        assert_eq!(graph.dirs[2].edge_ring, Some(0));
    }

    #[test]
    fn unlinked_edge_is_an_error() {
        let mut graph = PlanarGraph::new();
        let label = Label::new_area(0, Location::Boundary, Location::Exterior, Location::Interior);
        graph.add_edges(vec![Edge::new(vec![vec2(0.0, 0.0), vec2(0.0, 1.0)], label)]);
        let err = EdgeRing::build(&mut graph, 0, 0, RingKind::Maximal).unwrap_err();
        assert!(matches!(err, TopologyError::NullRingEdge { .. }));
    }
}
