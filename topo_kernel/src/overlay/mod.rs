//! Boolean set operations (intersection, union, difference, symmetric difference) between two
//! geometries computed by merging both inputs into one labeled planar graph.
//!
//! The overlay runs in a fixed sequence of stages: node both inputs, merge coincident edges,
//! resolve collapsed areas, label every directed edge relative to both inputs, select the result
//! edges and finally build polygons, then lines, then points from them.
mod edge_ring;
mod geometry_graph;
mod line_builder;
mod point_builder;
mod polygon_builder;

pub use edge_ring::{EdgeRing, RingKind};
pub use geometry_graph::GeometryGraph;
pub use line_builder::LineBuilder;
pub use point_builder::build_points;
pub use polygon_builder::PolygonBuilder;

use crate::core::{
    math::{seg_seg_intr, Vector2},
    traits::Real,
};
use crate::error::{err_coord, TopologyError, TopologyResult};
use crate::geometry::{Geometry, LineString, Location, PointLocator, Polygon};
use crate::graph::{sym, Edge, EdgeList, Label, PlanarGraph, Position};
use geometry_graph::unwrap_spatial_index;
use static_aabb2d_index::StaticAABB2DIndexBuilder;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Boolean operation to compute.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum OpCode {
    Intersection,
    Union,
    Difference,
    SymDifference,
}

impl OpCode {
    /// Tests if a point with locations `loc0` (first input) and `loc1` (second input) is in the
    /// result of the operation. Boundary counts as interior.
    pub fn is_result(self, loc0: Location, loc1: Location) -> bool {
        let in0 = loc0.boundary_as_interior() == Location::Interior;
        let in1 = loc1.boundary_as_interior() == Location::Interior;
        match self {
            OpCode::Intersection => in0 && in1,
            OpCode::Union => in0 || in1,
            OpCode::Difference => in0 && !in1,
            OpCode::SymDifference => in0 != in1,
        }
    }

    /// Same as [OpCode::is_result] using the on locations of `label`.
    #[inline]
    pub fn is_result_of_label(self, label: &Label) -> bool {
        self.is_result(label.on_location(0), label.on_location(1))
    }
}

/// Options for the overlay.
#[derive(Debug, Clone)]
pub struct OverlayOptions {
    /// Verify the merged edges are fully noded (no two edges cross at a point interior to
    /// either) before building the graph, returning [TopologyError::InvalidNoding] if not.
    pub check_noding: bool,
}

impl OverlayOptions {
    pub fn new() -> Self {
        Self { check_noding: true }
    }
}

impl Default for OverlayOptions {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Computes a boolean operation between two geometries.
#[derive(Debug)]
pub struct OverlayOp<'a, T = f64> {
    args: [&'a Geometry<T>; 2],
    locator: PointLocator,
}

impl<'a, T> OverlayOp<'a, T>
where
    T: Real,
{
    pub fn new(a: &'a Geometry<T>, b: &'a Geometry<T>) -> Self {
        Self {
            args: [a, b],
            locator: PointLocator::new(),
        }
    }

    /// Compute the result of `op`, an ordered collection of points, lines and polygons.
    pub fn compute(&self, op: OpCode, options: &OverlayOptions) -> TopologyResult<Geometry<T>> {
        let mut g0 = GeometryGraph::new(0, self.args[0]);
        let mut g1 = GeometryGraph::new(1, self.args[1]);
        let mut graph = PlanarGraph::new();

        for (arg_index, g) in [&g0, &g1].into_iter().enumerate() {
            for (coord, label) in g.nodes() {
                let n = graph.add_node(coord);
                graph.nodes[n].set_label(arg_index, label.on_location(arg_index));
            }
        }

        g0.compute_self_nodes();
        g1.compute_self_nodes();
        g0.compute_edge_intersections(&mut g1);

        let mut split_edges = Vec::new();
        g0.compute_split_edges(&mut split_edges);
        g1.compute_split_edges(&mut split_edges);
        log::debug!("overlay {:?}: {} noded edges", op, split_edges.len());

        let mut edge_list = insert_unique_edges(split_edges);
        compute_labels_from_depths(&mut edge_list);
        edge_list.replace_with(|e| e.is_collapsed().then(|| e.collapsed_edge()));
        log::debug!("overlay {:?}: {} unique edges", op, edge_list.len());

        if options.check_noding {
            check_valid_noding(&edge_list)?;
        }

        graph.add_edges(edge_list.into_edges());
        self.compute_labelling(&mut graph)?;
        self.label_incomplete_nodes(&mut graph);

        find_result_area_edges(&mut graph, op);
        cancel_duplicate_result_edges(&mut graph);

        let mut polygon_builder = PolygonBuilder::new();
        polygon_builder.add(&mut graph)?;
        let polygons = polygon_builder.polygons();
        let lines = LineBuilder::new(&polygons).build(&mut graph, op);
        let points = build_points(&graph, op, &lines, &polygons);

        log::debug!(
            "overlay {:?}: {} points, {} lines, {} polygons",
            op,
            points.len(),
            lines.len(),
            polygons.len()
        );

        Ok(Geometry::new(points, lines, polygons))
    }

    fn compute_labelling(&self, graph: &mut PlanarGraph<T>) -> TopologyResult<()> {
        let nodes = graph.node_indexes();
        for &node in nodes.iter() {
            graph.compute_star_labelling(node, |geom_index, p| {
                self.locator.locate_in_area(p, self.args[geom_index])
            })?;
        }

        for &node in nodes.iter() {
            graph.merge_sym_labels(node);
        }

        for &node in nodes.iter() {
            graph.update_node_labelling(node);
        }

        Ok(())
    }

    /// Isolated nodes only have a location for one input, locate them in the other input then
    /// push the node locations to any still null directed edge locations.
    fn label_incomplete_nodes(&self, graph: &mut PlanarGraph<T>) {
        for node in graph.node_indexes() {
            let n = &graph.nodes[node];
            if n.is_isolated() {
                let target = if n.label.is_null(0) { 0 } else { 1 };
                let loc = self.locator.locate(n.coord, self.args[target]);
                graph.nodes[node].set_label(target, loc);
            }
            graph.update_star_labelling(node);
        }
    }
}

/// Compute the boolean operation `op` between `a` and `b` with default options.
///
/// # Examples
///
/// ```
/// # use topo_kernel::geometry::*;
/// # use topo_kernel::overlay::*;
/// let a = Geometry::from_polygon(Polygon::rect(0.0, 0.0, 1.0, 1.0));
/// let b = Geometry::from_polygon(Polygon::rect(0.5, 0.5, 1.5, 1.5));
/// let result = overlay(&a, &b, OpCode::Intersection).unwrap();
/// assert_eq!(result.polygons.len(), 1);
/// assert_eq!(result.area(), 0.25);
/// ```
pub fn overlay<T>(a: &Geometry<T>, b: &Geometry<T>, op: OpCode) -> TopologyResult<Geometry<T>>
where
    T: Real,
{
    OverlayOp::new(a, b).compute(op, &OverlayOptions::new())
}

/// Insert edges, merging the label and depth of edges equal to one already inserted.
fn insert_unique_edges<T>(edges: Vec<Edge<T>>) -> EdgeList<T>
where
    T: Real,
{
    let mut edge_list = EdgeList::new();
    for edge in edges {
        match edge_list.find_equal_edge(&edge) {
            Some(existing_index) => {
                let existing = edge_list.get_mut(existing_index);
                let label_to_merge = if existing.is_pointwise_equal(&edge) {
                    edge.label
                } else {
                    edge.label.flipped()
                };

                if existing.depth.is_null() {
                    let existing_label = existing.label;
                    existing.depth.add(&existing_label);
                }
                existing.depth.add(&label_to_merge);
                existing.label.merge(&label_to_merge);
            }
            None => edge_list.add(edge),
        }
    }

    edge_list
}

/// Edges with accumulated depths get their side locations from the depths, an area edge with
/// equal depth on both sides collapsed to a line.
fn compute_labels_from_depths<T>(edge_list: &mut EdgeList<T>)
where
    T: Real,
{
    for edge in edge_list.iter_mut() {
        if edge.depth.is_null() {
            continue;
        }

        edge.depth.normalize();
        for i in 0..2 {
            if edge.label.is_null(i) || !edge.label.is_area() || edge.depth.is_null_for(i) {
                continue;
            }

            if edge.depth.delta(i) == 0 {
                edge.label.to_line(i);
            } else {
                let left = edge.depth.location(i, Position::Left);
                let right = edge.depth.location(i, Position::Right);
                edge.label.set_location(i, Position::Left, left);
                edge.label.set_location(i, Position::Right, right);
            }
        }
    }
}

/// Verify no two edges intersect at a point interior to either segment.
fn check_valid_noding<T>(edge_list: &EdgeList<T>) -> TopologyResult<()>
where
    T: Real,
{
    let segments: Vec<(Vector2<T>, Vector2<T>)> = edge_list
        .iter()
        .flat_map(|e| e.pts.windows(2).map(|w| (w[0], w[1])))
        .collect();

    let mut builder = StaticAABB2DIndexBuilder::new(segments.len());
    for &(p0, p1) in segments.iter() {
        builder.add(
            num_traits::real::Real::min(p0.x, p1.x),
            num_traits::real::Real::min(p0.y, p1.y),
            num_traits::real::Real::max(p0.x, p1.x),
            num_traits::real::Real::max(p0.y, p1.y),
        );
    }
    let index = unwrap_spatial_index(builder);

    let mut query_stack = Vec::new();
    let mut failure = None;
    for (i, &(p0, p1)) in segments.iter().enumerate() {
        let mut visitor = |j: usize| {
            if j <= i {
                return static_aabb2d_index::Control::Continue;
            }
            let (q0, q1) = segments[j];
            let intr = seg_seg_intr(p0, p1, q0, q1);
            if intr.is_interior_to(p0, p1) || intr.is_interior_to(q0, q1) {
                failure = intr.points().first().copied();
                return static_aabb2d_index::Control::Break(());
            }
            static_aabb2d_index::Control::Continue
        };

        index.visit_query_with_stack(
            num_traits::real::Real::min(p0.x, p1.x),
            num_traits::real::Real::min(p0.y, p1.y),
            num_traits::real::Real::max(p0.x, p1.x),
            num_traits::real::Real::max(p0.y, p1.y),
            &mut visitor,
            &mut query_stack,
        );

        if let Some(at) = failure {
            return Err(TopologyError::InvalidNoding { at: err_coord(at) });
        }
    }

    Ok(())
}

/// Mark the area directed edges with the result area on their right.
fn find_result_area_edges<T>(graph: &mut PlanarGraph<T>, op: OpCode)
where
    T: Real,
{
    for de in graph.dirs.iter_mut() {
        let label = &de.label;
        if label.is_area()
            && !de.is_interior_area_edge()
            && op.is_result(
                label.location(0, Position::Right),
                label.location(1, Position::Right),
            )
        {
            de.is_in_result = true;
        }
    }
}

/// Directed edges in the result in both directions are interior to the result area.
fn cancel_duplicate_result_edges<T>(graph: &mut PlanarGraph<T>)
where
    T: Real,
{
    for de in (0..graph.dirs.len()).step_by(2) {
        if graph.dirs[de].is_in_result && graph.dirs[sym(de)].is_in_result {
            graph.dirs[de].is_in_result = false;
            graph.dirs[sym(de)].is_in_result = false;
        }
    }
}

/// True if `coord` is in or on any of `polygons`.
pub(crate) fn is_covered<T>(coord: Vector2<T>, polygons: &[Polygon<T>]) -> bool
where
    T: Real,
{
    let locator = PointLocator::new();
    polygons
        .iter()
        .any(|p| locator.locate_in_polygon(coord, p) != Location::Exterior)
}

/// True if `coord` is on any of `lines`.
pub(crate) fn is_covered_by_lines<T>(coord: Vector2<T>, lines: &[LineString<T>]) -> bool
where
    T: Real,
{
    let locator = PointLocator::new();
    lines
        .iter()
        .any(|l| locator.locate_on_line(coord, l) != Location::Exterior)
}

impl<T> Geometry<T>
where
    T: Real,
{
    /// Point set intersection with `other`.
    pub fn intersection(&self, other: &Geometry<T>) -> TopologyResult<Geometry<T>> {
        overlay(self, other, OpCode::Intersection)
    }

    /// Point set union with `other`.
    pub fn union(&self, other: &Geometry<T>) -> TopologyResult<Geometry<T>> {
        overlay(self, other, OpCode::Union)
    }

    /// Point set difference `self - other`.
    pub fn difference(&self, other: &Geometry<T>) -> TopologyResult<Geometry<T>> {
        overlay(self, other, OpCode::Difference)
    }

    /// Point set symmetric difference with `other`.
    pub fn sym_difference(&self, other: &Geometry<T>) -> TopologyResult<Geometry<T>> {
        overlay(self, other, OpCode::SymDifference)
    }
}
