use crate::core::{
    math::{seg_seg_intr, SegSegIntr, Vector2},
    traits::Real,
};
use crate::geometry::{is_ccw, remove_repeated_points, Geometry, Location};
use crate::graph::{CoordKey, Edge, Label};
use static_aabb2d_index::{
    StaticAABB2DIndex, StaticAABB2DIndexBuildError, StaticAABB2DIndexBuilder,
};
use std::collections::BTreeMap;

/// Edges and nodes of one overlay input, before the two inputs are merged into one planar
/// graph.
///
/// Nodes only carry the location of the input at that point: points are interior, ring start
/// points and ring self intersections are boundary, line end points follow the mod-2 rule.
#[derive(Debug, Clone)]
pub struct GeometryGraph<'a, T = f64> {
    arg_index: usize,
    geometry: &'a Geometry<T>,
    pub edges: Vec<Edge<T>>,
    nodes: BTreeMap<CoordKey<T>, Label>,
}

impl<'a, T> GeometryGraph<'a, T>
where
    T: Real,
{
    pub fn new(arg_index: usize, geometry: &'a Geometry<T>) -> Self {
        let mut graph = Self {
            arg_index,
            geometry,
            edges: Vec::new(),
            nodes: BTreeMap::new(),
        };

        for &pt in geometry.points.iter() {
            graph.insert_point(pt, Location::Interior);
        }

        for line in geometry.lines.iter() {
            graph.add_line_string(&line.coords);
        }

        for polygon in geometry.polygons.iter() {
            if polygon.is_empty() {
                continue;
            }
            graph.add_polygon_ring(&polygon.shell, Location::Exterior, Location::Interior);
            for hole in polygon.holes.iter() {
                graph.add_polygon_ring(hole, Location::Interior, Location::Exterior);
            }
        }

        graph
    }

    #[inline]
    pub fn geometry(&self) -> &'a Geometry<T> {
        self.geometry
    }

    /// Nodes in coordinate order with their labels.
    pub fn nodes(&self) -> impl Iterator<Item = (Vector2<T>, &Label)> {
        self.nodes.iter().map(|(k, l)| (k.0, l))
    }

    fn add_line_string(&mut self, coords: &[Vector2<T>]) {
        let coords = remove_repeated_points(coords);
        if coords.len() < 2 {
            log::debug!("skipping line with fewer than 2 distinct points");
            return;
        }

        let first = coords[0];
        let last = coords[coords.len() - 1];
        self.edges
            .push(Edge::new(coords, Label::new_line(self.arg_index, Location::Interior)));
        self.insert_boundary_point(first);
        self.insert_boundary_point(last);
    }

    fn add_polygon_ring(&mut self, ring: &[Vector2<T>], cw_left: Location, cw_right: Location) {
        if ring.is_empty() {
            return;
        }

        let coords = remove_repeated_points(ring);
        if coords.len() < 4 {
            log::debug!("skipping ring with fewer than 4 points");
            return;
        }

        let (left, right) = if is_ccw(&coords) {
            (cw_right, cw_left)
        } else {
            (cw_left, cw_right)
        };

        let start = coords[0];
        self.edges.push(Edge::new(
            coords,
            Label::new_area(self.arg_index, Location::Boundary, left, right),
        ));
        self.insert_point(start, Location::Boundary);
    }

    fn node_label_mut(&mut self, coord: Vector2<T>) -> &mut Label {
        self.nodes.entry(CoordKey(coord)).or_default()
    }

    fn insert_point(&mut self, coord: Vector2<T>, loc: Location) {
        let arg_index = self.arg_index;
        self.node_label_mut(coord).set_on_location(arg_index, loc);
    }

    /// Mod-2 rule: a point that is the end of an odd number of lines is boundary.
    fn insert_boundary_point(&mut self, coord: Vector2<T>) {
        let arg_index = self.arg_index;
        let label = self.node_label_mut(coord);
        let boundary_count = if label.on_location(arg_index) == Location::Boundary {
            2
        } else {
            1
        };

        let loc = if boundary_count % 2 == 1 {
            Location::Boundary
        } else {
            Location::Interior
        };

        label.set_on_location(arg_index, loc);
    }

    fn is_boundary_node(&self, coord: Vector2<T>) -> bool {
        self.nodes
            .get(&CoordKey(coord))
            .map_or(false, |l| l.on_location(self.arg_index) == Location::Boundary)
    }

    fn segment_refs(&self) -> Vec<(usize, usize)> {
        self.edges
            .iter()
            .enumerate()
            .flat_map(|(ei, e)| (0..e.num_points() - 1).map(move |si| (ei, si)))
            .collect()
    }

    fn segment_index(&self, segments: &[(usize, usize)]) -> StaticAABB2DIndex<T> {
        let mut builder = StaticAABB2DIndexBuilder::new(segments.len());
        for &(ei, si) in segments.iter() {
            let p0 = self.edges[ei].pts[si];
            let p1 = self.edges[ei].pts[si + 1];
            builder.add(
                num_traits::real::Real::min(p0.x, p1.x),
                num_traits::real::Real::min(p0.y, p1.y),
                num_traits::real::Real::max(p0.x, p1.x),
                num_traits::real::Real::max(p0.y, p1.y),
            );
        }

        unwrap_spatial_index(builder)
    }

    /// Find the self intersections of this input and add them as nodes.
    ///
    /// Intersections within a single polygon ring are not searched for, rings are assumed to be
    /// valid. Lines are fully self noded.
    pub fn compute_self_nodes(&mut self) {
        let is_rings = self.geometry.lines.is_empty() && !self.geometry.polygons.is_empty();
        let compute_all_segments = !is_rings;

        let segments = self.segment_refs();
        let index = self.segment_index(&segments);
        let mut query_stack = Vec::new();
        let mut candidates = Vec::new();

        for (i, &(e0, s0)) in segments.iter().enumerate() {
            let p00 = self.edges[e0].pts[s0];
            let p01 = self.edges[e0].pts[s0 + 1];
            candidates.clear();
            let mut visitor = |j: usize| {
                if j > i {
                    candidates.push(j);
                }
            };
            index.visit_query_with_stack(
                num_traits::real::Real::min(p00.x, p01.x),
                num_traits::real::Real::min(p00.y, p01.y),
                num_traits::real::Real::max(p00.x, p01.x),
                num_traits::real::Real::max(p00.y, p01.y),
                &mut visitor,
                &mut query_stack,
            );

            for &j in candidates.iter() {
                let (e1, s1) = segments[j];
                if e0 == e1 && !compute_all_segments {
                    continue;
                }

                let p10 = self.edges[e1].pts[s1];
                let p11 = self.edges[e1].pts[s1 + 1];
                let intr = seg_seg_intr(p00, p01, p10, p11);
                if !intr.has_intersect() || self.is_trivial_intersection(&intr, e0, s0, e1, s1) {
                    continue;
                }

                self.edges[e0].add_intersections(&intr, s0);
                self.edges[e1].add_intersections(&intr, s1);
            }
        }

        self.add_self_intersection_nodes();
    }

    /// Adjacent segments of the same edge always touch at their shared vertex (as do the first
    /// and last segment of a closed edge), that is not a self intersection.
    fn is_trivial_intersection(
        &self,
        intr: &SegSegIntr<T>,
        e0: usize,
        s0: usize,
        e1: usize,
        s1: usize,
    ) -> bool {
        if e0 != e1 || intr.count() != 1 {
            return false;
        }

        if s0.abs_diff(s1) == 1 {
            return true;
        }

        let edge = &self.edges[e0];
        if edge.is_closed() {
            let last_seg = edge.num_points() - 2;
            if (s0 == 0 && s1 == last_seg) || (s1 == 0 && s0 == last_seg) {
                return true;
            }
        }

        false
    }

    fn add_self_intersection_nodes(&mut self) {
        let mut to_add = Vec::new();
        for edge in self.edges.iter() {
            let loc = edge.label.on_location(self.arg_index);
            for ei in edge.intersections.iter() {
                to_add.push((ei.coord, loc));
            }
        }

        for (coord, loc) in to_add {
            if self.is_boundary_node(coord) {
                continue;
            }

            if loc == Location::Boundary {
                self.insert_boundary_point(coord);
            } else {
                self.insert_point(coord, loc);
            }
        }
    }

    /// Find all intersections between the edges of this input and the edges of `other`.
    pub fn compute_edge_intersections(&mut self, other: &mut GeometryGraph<'_, T>) {
        let other_segments = other.segment_refs();
        let index = other.segment_index(&other_segments);
        let mut query_stack = Vec::new();
        let mut candidates = Vec::new();

        for e0 in 0..self.edges.len() {
            for s0 in 0..self.edges[e0].num_points() - 1 {
                let p00 = self.edges[e0].pts[s0];
                let p01 = self.edges[e0].pts[s0 + 1];
                candidates.clear();
                let mut visitor = |j: usize| candidates.push(j);
                index.visit_query_with_stack(
                    num_traits::real::Real::min(p00.x, p01.x),
                    num_traits::real::Real::min(p00.y, p01.y),
                    num_traits::real::Real::max(p00.x, p01.x),
                    num_traits::real::Real::max(p00.y, p01.y),
                    &mut visitor,
                    &mut query_stack,
                );

                for &j in candidates.iter() {
                    let (e1, s1) = other_segments[j];
                    let p10 = other.edges[e1].pts[s1];
                    let p11 = other.edges[e1].pts[s1 + 1];
                    let intr = seg_seg_intr(p00, p01, p10, p11);
                    if !intr.has_intersect() {
                        continue;
                    }

                    self.edges[e0].add_intersections(&intr, s0);
                    other.edges[e1].add_intersections(&intr, s1);
                }
            }
        }
    }

    /// Split every edge at its intersections, appending the noded edges to `out`.
    pub fn compute_split_edges(&mut self, out: &mut Vec<Edge<T>>) {
        for edge in self.edges.iter_mut() {
            edge.split_edges(out);
        }
    }
}

/// Build a spatial index from a builder, the item count always matches so failure is a bug.
pub(crate) fn unwrap_spatial_index<T>(builder: StaticAABB2DIndexBuilder<T>) -> StaticAABB2DIndex<T>
where
    T: Real,
{
    match builder.build() {
        Ok(x) => x,
        Err(e) => match e {
            StaticAABB2DIndexBuildError::ItemCountError { .. } => {
                unreachable!("internal library error: count mismatch when building spatial index")
            }
            StaticAABB2DIndexBuildError::NumericCastError => {
                panic!("failed to cast Self::Num type: {e}")
            }
        },
    }
}
