//! Voronoi diagram of a point set using Fortune's sweepline.
//!
//! The sweep moves in increasing y. Every edge of the result knows the two sites it separates
//! (`left_data`, `right_data`) and its two vertexes, which may be the infinite sentinel
//! ([Vector2::infinite]) for unbounded edges.
//!
//! # Examples
//!
//! ```
//! use topo_kernel::core::math::vec2;
//! use topo_kernel::voronoi::{compute_voronoi_graph, VoronoiOptions};
//!
//! let sites = [vec2(0.0, 0.0), vec2(2.0, 0.0), vec2(0.0, 2.0)];
//! let graph = compute_voronoi_graph(&sites, &VoronoiOptions::new()).unwrap();
//! assert_eq!(graph.vertices, vec![vec2(1.0, 1.0)]);
//! assert_eq!(graph.edges.len(), 3);
//! ```
mod beachline;
mod event;
mod fortune;
mod graph;
mod math;

pub use graph::*;
pub use math::{ccw, circumcircle_center, parabolic_cut};

use crate::core::{math::Vector2, traits::Real};
use crate::error::TopologyResult;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Options for [compute_voronoi_graph].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct VoronoiOptions<T = f64> {
    /// Points closer than this are treated as the same site, 0 means exact equality.
    pub tolerance: T,
    /// Close open edges with the infinite sentinel and remove zero length edges after the sweep.
    pub cleanup: bool,
}

impl<T> VoronoiOptions<T>
where
    T: Real,
{
    pub fn new() -> Self {
        Self {
            tolerance: T::zero(),
            cleanup: true,
        }
    }
}

impl<T> Default for VoronoiOptions<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Compute the voronoi graph of `points`.
///
/// Duplicate sites (per `options.tolerance`) are kept once. Fewer than two distinct sites
/// produce a graph with no edges.
pub fn compute_voronoi_graph<T>(
    points: &[Vector2<T>],
    options: &VoronoiOptions<T>,
) -> TopologyResult<VoronoiGraph<T>>
where
    T: Real,
{
    fortune::sweep(points, options)
}

/// Same as [compute_voronoi_graph] with the points given as `[x0, y0, x1, y1, ...]`, a trailing
/// odd value is ignored.
pub fn compute_voronoi_graph_from_flat<T>(
    coords: &[T],
    options: &VoronoiOptions<T>,
) -> TopologyResult<VoronoiGraph<T>>
where
    T: Real,
{
    let points: Vec<Vector2<T>> = coords
        .chunks_exact(2)
        .map(|c| Vector2::new(c[0], c[1]))
        .collect();
    compute_voronoi_graph(&points, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::vec2;
    use crate::core::traits::FuzzyEq;

    fn compute(points: &[Vector2<f64>]) -> VoronoiGraph<f64> {
        compute_voronoi_graph(points, &VoronoiOptions::new()).unwrap()
    }

    #[test]
    fn empty_and_single_site() {
        let g = compute(&[]);
        assert!(g.edges.is_empty());
        assert!(g.vertices.is_empty());

        let g = compute(&[vec2(3.0, 4.0)]);
        assert!(g.edges.is_empty());
        assert_eq!(g.sites.len(), 1);
    }

    #[test]
    fn two_sites_give_one_infinite_bisector() {
        let g = compute(&[vec2(0.0, 0.0), vec2(0.0, 2.0)]);
        assert_eq!(g.edges.len(), 1);
        assert!(g.vertices.is_empty());
        let e = g.edges[0];
        assert!(e.is_infinite());
        assert!(e.fixed_point().fuzzy_eq(vec2(0.0, 1.0)));
    }

    #[test]
    fn duplicate_sites_are_merged() {
        let g = compute(&[vec2(0.0, 0.0), vec2(0.0, 0.0), vec2(2.0, 0.0)]);
        assert_eq!(g.sites.len(), 2);
        assert_eq!(g.edges.len(), 1);

        let options = VoronoiOptions {
            tolerance: 0.01,
            cleanup: true,
        };
        let g = compute_voronoi_graph(&[vec2(0.0, 0.0), vec2(0.001, 0.0), vec2(2.0, 0.0)], &options)
            .unwrap();
        assert_eq!(g.sites.len(), 2);
    }

    #[test]
    fn square_sites_share_center_vertex() {
        let sites = [
            vec2(0.0, 0.0),
            vec2(2.0, 0.0),
            vec2(0.0, 2.0),
            vec2(2.0, 2.0),
        ];
        let g = compute(&sites);
        assert_eq!(g.vertices.len(), 1);
        assert!(g.vertices[0].fuzzy_eq(vec2(1.0, 1.0)));
        assert_eq!(g.edges.len(), 4);
        for e in g.edges.iter() {
            assert!(e.is_partly_infinite() && !e.is_infinite());
            assert!(e.fixed_point().fuzzy_eq(vec2(1.0, 1.0)));
            // diagonal sites never share an edge
            assert!(e.left_data.distance(e.right_data).fuzzy_eq(2.0));
        }
    }

    #[test]
    fn vertices_are_equidistant_from_their_edge_sites() {
        let sites = [
            vec2(0.0, 0.0),
            vec2(4.0, 1.0),
            vec2(1.0, 5.0),
            vec2(6.0, 6.0),
            vec2(3.0, 3.0),
            vec2(-2.0, 4.0),
        ];
        let g = compute(&sites);
        for e in g.edges.iter() {
            for v in [e.vertex_a, e.vertex_b] {
                if v.is_infinite() {
                    continue;
                }
                let dl = v.distance(e.left_data);
                let dr = v.distance(e.right_data);
                assert!(dl.fuzzy_eq_eps(dr, 1e-6), "{:?} {} {}", v, dl, dr);
                // no site is strictly closer than the edge sites
                for s in sites.iter() {
                    assert!(v.distance(*s) >= dl - 1e-6);
                }
            }
        }
    }

    #[test]
    fn flat_input_ignores_trailing_value() {
        let g = compute_voronoi_graph_from_flat(&[0.0, 0.0, 2.0, 0.0, 0.0, 2.0, 9.0], &VoronoiOptions::new())
            .unwrap();
        assert_eq!(g.sites.len(), 3);
        assert_eq!(g.vertices.len(), 1);
    }

    #[test]
    fn cells_list_bounding_edges() {
        let g = compute(&[vec2(0.0, 0.0), vec2(2.0, 0.0), vec2(0.0, 2.0)]);
        let cells = g.cells();
        assert_eq!(cells.len(), 3);
        for c in cells.iter() {
            assert_eq!(c.edges.len(), 2);
        }
    }
}
