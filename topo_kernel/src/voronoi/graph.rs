use crate::core::{math::Vector2, traits::Real};
use crate::error::{TopologyError, TopologyResult};
use crate::graph::CoordKey;
use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Voronoi edge, the part of the bisector between two input sites that bounds both their cells.
///
/// Vertexes start as [Vector2::unknown] and are each assigned exactly once, an open end is
/// closed with [Vector2::infinite] when the graph is cleaned up.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct VoronoiEdge<T = f64> {
    pub left_data: Vector2<T>,
    pub right_data: Vector2<T>,
    pub vertex_a: Vector2<T>,
    pub vertex_b: Vector2<T>,
}

impl<T> VoronoiEdge<T>
where
    T: Real,
{
    pub fn new(left_data: Vector2<T>, right_data: Vector2<T>) -> Self {
        Self {
            left_data,
            right_data,
            vertex_a: Vector2::unknown(),
            vertex_b: Vector2::unknown(),
        }
    }

    /// Assign the next unknown vertex.
    pub fn add_vertex(&mut self, v: Vector2<T>) -> TopologyResult<()> {
        if self.vertex_a.is_unknown() {
            self.vertex_a = v;
        } else if self.vertex_b.is_unknown() {
            self.vertex_b = v;
        } else {
            return Err(TopologyError::VertexAlreadyAssigned);
        }
        Ok(())
    }

    /// Both ends at infinity (bisector of two sites with no other site nearby).
    #[inline]
    pub fn is_infinite(&self) -> bool {
        self.vertex_a.is_infinite() && self.vertex_b.is_infinite()
    }

    #[inline]
    pub fn is_partly_infinite(&self) -> bool {
        self.vertex_a.is_infinite() || self.vertex_b.is_infinite()
    }

    /// A finite point on the edge: a finite vertex, or the midpoint between the sites of a fully
    /// infinite edge.
    pub fn fixed_point(&self) -> Vector2<T> {
        if self.is_infinite() {
            return (self.left_data + self.right_data).scale(T::half());
        }
        if !self.vertex_a.is_infinite() {
            return self.vertex_a;
        }
        self.vertex_b
    }

    /// Unit direction of the edge, from a toward b for finite edges, otherwise perpendicular to
    /// the sites oriented away from the fixed point.
    pub fn direction_vector(&self) -> Vector2<T> {
        if !self.is_partly_infinite() {
            return (self.vertex_b - self.vertex_a).normalize();
        }

        let (l, r) = (self.left_data, self.right_data);
        if l.x == r.x {
            return if l.y < r.y {
                Vector2::new(-T::one(), T::zero())
            } else {
                Vector2::new(T::one(), T::zero())
            };
        }

        let mut dir = Vector2::new(-(r.y - l.y) / (r.x - l.x), T::one());
        if r.x < l.x {
            dir = -dir;
        }
        dir.normalize()
    }

    /// Euclidean length, infinite if either end is infinite.
    pub fn length(&self) -> T {
        if self.is_partly_infinite() {
            return T::infinity();
        }
        self.vertex_a.distance(self.vertex_b)
    }
}

/// Voronoi cell of one site: the indexes of the edges bounding it.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct VoronoiCell<T = f64> {
    pub site: Vector2<T>,
    pub edges: Vec<usize>,
}

/// Result of the sweep: edges, finite vertexes and the (deduplicated) input sites.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VoronoiGraph<T = f64> {
    pub edges: Vec<VoronoiEdge<T>>,
    /// Finite vertexes, the infinite sentinel is never included.
    pub vertices: Vec<Vector2<T>>,
    pub sites: Vec<Vector2<T>>,
}

impl<T> VoronoiGraph<T>
where
    T: Real,
{
    pub fn new() -> Self {
        Self {
            edges: Vec::new(),
            vertices: Vec::new(),
            sites: Vec::new(),
        }
    }

    /// One cell per site (in site order) listing the edges that have the site on either side.
    pub fn cells(&self) -> Vec<VoronoiCell<T>> {
        let mut lookup = BTreeMap::new();
        let mut cells: Vec<VoronoiCell<T>> = Vec::with_capacity(self.sites.len());
        for &site in self.sites.iter() {
            lookup.entry(CoordKey(site)).or_insert_with(|| {
                cells.push(VoronoiCell {
                    site,
                    edges: Vec::new(),
                });
                cells.len() - 1
            });
        }

        for (i, edge) in self.edges.iter().enumerate() {
            for site in [edge.left_data, edge.right_data] {
                if let Some(&c) = lookup.get(&CoordKey(site)) {
                    cells[c].edges.push(i);
                }
            }
        }

        cells
    }

    /// Copy of the graph without edges whose two sites are closer than `min_site_distance`,
    /// vertexes are recollected from the remaining edges.
    pub fn filter(&self, min_site_distance: T) -> Self {
        let edges: Vec<_> = self
            .edges
            .iter()
            .filter(|e| e.left_data.distance(e.right_data) >= min_site_distance)
            .copied()
            .collect();

        let mut seen = BTreeMap::new();
        let mut vertices = Vec::new();
        for e in edges.iter() {
            for v in [e.vertex_a, e.vertex_b] {
                if v.is_infinite() || v.is_unknown() {
                    continue;
                }
                if seen.insert(CoordKey(v), ()).is_none() {
                    vertices.push(v);
                }
            }
        }

        Self {
            edges,
            vertices,
            sites: self.sites.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::vec2;

    #[test]
    fn third_vertex_is_rejected() {
        let mut e = VoronoiEdge::new(vec2(0.0, 0.0), vec2(2.0, 0.0));
        e.add_vertex(vec2(1.0, 1.0)).unwrap();
        e.add_vertex(vec2(1.0, -1.0)).unwrap();
        assert_eq!(
            e.add_vertex(vec2(1.0, 5.0)),
            Err(TopologyError::VertexAlreadyAssigned)
        );
        assert_eq!(e.length(), 2.0);
        assert_eq!(e.direction_vector(), vec2(0.0, -1.0));
    }

    #[test]
    fn infinite_edge_queries() {
        let mut e = VoronoiEdge::new(vec2(0.0, 0.0), vec2(2.0, 0.0));
        e.add_vertex(Vector2::infinite()).unwrap();
        e.add_vertex(Vector2::infinite()).unwrap();
        assert!(e.is_infinite());
        assert!(e.is_partly_infinite());
        assert_eq!(e.fixed_point(), vec2(1.0, 0.0));
        assert_eq!(e.length(), f64::INFINITY);

        let mut e = VoronoiEdge::new(vec2(0.0, 0.0), vec2(0.0, 2.0));
        e.add_vertex(vec2(0.0, 1.0)).unwrap();
        e.add_vertex(Vector2::infinite()).unwrap();
        assert!(!e.is_infinite());
        assert_eq!(e.fixed_point(), vec2(0.0, 1.0));
        assert_eq!(e.direction_vector(), vec2(-1.0, 0.0));
    }

    #[test]
    fn cells_and_filter() {
        let mut graph = VoronoiGraph::new();
        graph.sites = vec![vec2(0.0, 0.0), vec2(1.0, 0.0), vec2(10.0, 0.0)];
        let mut near = VoronoiEdge::new(vec2(0.0, 0.0), vec2(1.0, 0.0));
        near.add_vertex(vec2(0.5, 1.0)).unwrap();
        near.add_vertex(vec2(0.5, -1.0)).unwrap();
        let mut far = VoronoiEdge::new(vec2(1.0, 0.0), vec2(10.0, 0.0));
        far.add_vertex(vec2(5.5, 1.0)).unwrap();
        far.add_vertex(Vector2::infinite()).unwrap();
        graph.edges = vec![near, far];

        let cells = graph.cells();
        assert_eq!(cells.len(), 3);
        assert_eq!(cells[1].edges, vec![0, 1]);

        let filtered = graph.filter(2.0);
        assert_eq!(filtered.edges, vec![far]);
        assert_eq!(filtered.vertices, vec![vec2(5.5, 1.0)]);
    }
}
