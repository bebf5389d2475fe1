use super::edge_ring::{EdgeRing, RingKind};
use crate::core::{math::Vector2, traits::Real};
use crate::error::{err_coord, TopologyError, TopologyResult};
use crate::geometry::{point_in_ring, Polygon};
use crate::graph::PlanarGraph;

/// Builds result polygons from the directed edges marked as in the result.
///
/// Result edges are linked into maximal rings, maximal rings passing through a node more than
/// once are split into minimal rings, then each hole is assigned to its shell.
#[derive(Debug, Clone, Default)]
pub struct PolygonBuilder<T = f64> {
    rings: Vec<EdgeRing<T>>,
    shells: Vec<usize>,
}

impl<T> PolygonBuilder<T>
where
    T: Real,
{
    pub fn new() -> Self {
        Self {
            rings: Vec::new(),
            shells: Vec::new(),
        }
    }

    /// Build the rings from the result edges of `graph`.
    pub fn add(&mut self, graph: &mut PlanarGraph<T>) -> TopologyResult<()> {
        for node in graph.node_indexes() {
            graph.link_result_directed_edges(node)?;
        }

        let max_rings = self.build_maximal_edge_rings(graph)?;
        let mut free_holes = Vec::new();
        let edge_rings = self.build_minimal_edge_rings(graph, &max_rings, &mut free_holes)?;
        self.sort_shells_and_holes(&edge_rings, &mut free_holes);
        self.place_free_holes(&free_holes)?;

        log::debug!(
            "polygon builder: {} maximal rings, {} shells, {} free holes",
            max_rings.len(),
            self.shells.len(),
            free_holes.len()
        );

        Ok(())
    }

    fn push_ring(
        &mut self,
        graph: &mut PlanarGraph<T>,
        start: usize,
        kind: RingKind,
    ) -> TopologyResult<usize> {
        let ring_index = self.rings.len();
        let ring = EdgeRing::build(graph, start, ring_index, kind)?;
        self.rings.push(ring);
        Ok(ring_index)
    }

    fn build_maximal_edge_rings(&mut self, graph: &mut PlanarGraph<T>) -> TopologyResult<Vec<usize>> {
        let mut max_rings = Vec::new();
        for de in 0..graph.dirs.len() {
            let dir = &graph.dirs[de];
            if !dir.is_in_result || !dir.label.is_area() || dir.edge_ring.is_some() {
                continue;
            }

            let ring_index = self.push_ring(graph, de, RingKind::Maximal)?;
            for &ring_de in self.rings[ring_index].edges.iter() {
                let edge = graph.dirs[ring_de].edge;
                graph.edges[edge].is_in_result = true;
            }
            max_rings.push(ring_index);
        }

        Ok(max_rings)
    }

    fn build_minimal_edge_rings(
        &mut self,
        graph: &mut PlanarGraph<T>,
        max_rings: &[usize],
        free_holes: &mut Vec<usize>,
    ) -> TopologyResult<Vec<usize>> {
        let mut edge_rings = Vec::new();
        for &max_ring in max_rings.iter() {
            if self.rings[max_ring].max_node_degree(graph, max_ring) <= 2 {
                edge_rings.push(max_ring);
                continue;
            }

            for i in 0..self.rings[max_ring].edges.len() {
                let node = graph.dirs[self.rings[max_ring].edges[i]].node;
                graph.link_minimal_directed_edges(node, max_ring)?;
            }

            let mut min_rings = Vec::new();
            for i in 0..self.rings[max_ring].edges.len() {
                let de = self.rings[max_ring].edges[i];
                if graph.dirs[de].min_edge_ring.is_none() {
                    min_rings.push(self.push_ring(graph, de, RingKind::Minimal)?);
                }
            }

            match self.find_shell(&min_rings)? {
                Some(shell) => {
                    for &ring in min_rings.iter() {
                        if self.rings[ring].is_hole {
                            self.set_shell(ring, shell);
                        }
                    }
                    self.shells.push(shell);
                }
                None => free_holes.extend_from_slice(&min_rings),
            }
        }

        Ok(edge_rings)
    }

    /// At most one minimal ring split from a maximal ring can be a shell.
    fn find_shell(&self, min_rings: &[usize]) -> TopologyResult<Option<usize>> {
        let mut shell = None;
        for &ring in min_rings.iter() {
            if self.rings[ring].is_hole {
                continue;
            }
            if shell.is_some() {
                return Err(TopologyError::MultipleShells {
                    at: err_coord(self.rings[ring].coordinate()),
                });
            }
            shell = Some(ring);
        }

        Ok(shell)
    }

    fn set_shell(&mut self, hole: usize, shell: usize) {
        self.rings[hole].shell = Some(shell);
        self.rings[shell].holes.push(hole);
    }

    fn sort_shells_and_holes(&mut self, edge_rings: &[usize], free_holes: &mut Vec<usize>) {
        for &ring in edge_rings.iter() {
            if self.rings[ring].is_hole {
                free_holes.push(ring);
            } else {
                self.shells.push(ring);
            }
        }
    }

    fn place_free_holes(&mut self, free_holes: &[usize]) -> TopologyResult<()> {
        for &hole in free_holes.iter() {
            if self.rings[hole].shell.is_some() {
                continue;
            }

            let shell = self
                .find_edge_ring_containing(hole)
                .ok_or_else(|| TopologyError::UnassignedHole {
                    at: err_coord(self.rings[hole].coordinate()),
                })?;
            self.set_shell(hole, shell);
        }

        Ok(())
    }

    /// Smallest shell containing the hole: its envelope contains the hole envelope (inclusive)
    /// and it contains a hole vertex which does not lie on the shell.
    fn find_edge_ring_containing(&self, hole: usize) -> Option<usize> {
        let test_ring = &self.rings[hole];
        let test_env = test_ring.envelope();

        let mut min_shell: Option<usize> = None;
        for &shell in self.shells.iter() {
            let shell_ring = &self.rings[shell];
            let shell_env = shell_ring.envelope();
            if shell_env == test_env || !shell_env.contains(test_env) {
                continue;
            }

            let test_pt = match pt_not_in_list(&test_ring.pts, &shell_ring.pts) {
                Some(pt) => pt,
                None => continue,
            };

            if !point_in_ring(test_pt, &shell_ring.pts) {
                continue;
            }

            let is_smaller = match min_shell {
                None => true,
                Some(current) => self.rings[current].envelope().contains(shell_env),
            };
            if is_smaller {
                min_shell = Some(shell);
            }
        }

        min_shell
    }

    /// One polygon per shell, holes in the order they were assigned.
    pub fn polygons(&self) -> Vec<Polygon<T>> {
        self.shells
            .iter()
            .map(|&shell| {
                let ring = &self.rings[shell];
                let holes = ring
                    .holes
                    .iter()
                    .map(|&h| self.rings[h].pts.clone())
                    .collect();
                Polygon::new(ring.pts.clone(), holes)
            })
            .collect()
    }
}

/// First point of `pts` that is not in `list`.
fn pt_not_in_list<T>(pts: &[Vector2<T>], list: &[Vector2<T>]) -> Option<Vector2<T>>
where
    T: Real,
{
    pts.iter().copied().find(|p| !list.contains(p))
}
