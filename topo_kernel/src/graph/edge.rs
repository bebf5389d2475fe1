use super::{Depth, Label};
use crate::core::{
    math::{edge_distance, SegSegIntr, Vector2},
    traits::Real,
};
use crate::geometry::Envelope;
use std::cmp::Ordering;

/// Intersection point along an edge, identified by the segment it lies on and its distance along
/// that segment.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EdgeIntersection<T = f64> {
    pub coord: Vector2<T>,
    pub segment_index: usize,
    pub dist: T,
}

impl<T> EdgeIntersection<T>
where
    T: Real,
{
    #[inline]
    fn cmp_position(&self, segment_index: usize, dist: T) -> Ordering {
        self.segment_index.cmp(&segment_index).then_with(|| {
            self.dist
                .partial_cmp(&dist)
                .unwrap_or(Ordering::Equal)
        })
    }
}

/// Ordered set of intersections along an edge used to split it into noded edges.
#[derive(Debug, Clone, Default)]
pub struct EdgeIntersectionList<T = f64> {
    items: Vec<EdgeIntersection<T>>,
}

impl<T> EdgeIntersectionList<T>
where
    T: Real,
{
    /// Adds an intersection, an intersection already present at the same position is kept.
    pub fn add(&mut self, coord: Vector2<T>, segment_index: usize, dist: T) {
        match self
            .items
            .binary_search_by(|ei| ei.cmp_position(segment_index, dist))
        {
            Ok(_) => {}
            Err(i) => self.items.insert(
                i,
                EdgeIntersection {
                    coord,
                    segment_index,
                    dist,
                },
            ),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &EdgeIntersection<T>> {
        self.items.iter()
    }

    pub fn is_intersection(&self, pt: Vector2<T>) -> bool {
        self.items.iter().any(|ei| ei.coord == pt)
    }
}

/// Undirected chain of coordinates in a planar graph, shared by both input geometries once
/// merged.
#[derive(Debug, Clone)]
pub struct Edge<T = f64> {
    pub pts: Vec<Vector2<T>>,
    pub label: Label,
    pub depth: Depth,
    pub depth_delta: i32,
    pub is_in_result: bool,
    is_covered: bool,
    is_covered_set: bool,
    pub intersections: EdgeIntersectionList<T>,
}

impl<T> Edge<T>
where
    T: Real,
{
    pub fn new(pts: Vec<Vector2<T>>, label: Label) -> Self {
        debug_assert!(pts.len() >= 2, "edge requires at least 2 points");
        Self {
            pts,
            label,
            depth: Depth::new(),
            depth_delta: 0,
            is_in_result: false,
            is_covered: false,
            is_covered_set: false,
            intersections: EdgeIntersectionList::default(),
        }
    }

    #[inline]
    pub fn num_points(&self) -> usize {
        self.pts.len()
    }

    #[inline]
    pub fn max_segment_index(&self) -> usize {
        self.pts.len() - 1
    }

    #[inline]
    pub fn is_closed(&self) -> bool {
        self.pts[0] == self.pts[self.pts.len() - 1]
    }

    #[inline]
    pub fn coordinate(&self) -> Vector2<T> {
        self.pts[0]
    }

    pub fn envelope(&self) -> Envelope<T> {
        Envelope::from_points(self.pts.iter())
    }

    /// True if the edge is an area edge that collapsed to a line going out and back.
    pub fn is_collapsed(&self) -> bool {
        self.label.is_area() && self.pts.len() == 3 && self.pts[0] == self.pts[2]
    }

    /// Line edge replacing a collapsed area edge.
    pub fn collapsed_edge(&self) -> Self {
        Edge::new(
            vec![self.pts[0], self.pts[1]],
            Label::to_line_label(&self.label),
        )
    }

    #[inline]
    pub fn is_covered(&self) -> bool {
        self.is_covered
    }

    #[inline]
    pub fn is_covered_set(&self) -> bool {
        self.is_covered_set
    }

    #[inline]
    pub fn set_covered(&mut self, covered: bool) {
        self.is_covered = covered;
        self.is_covered_set = true;
    }

    /// Record the intersections found between segment `segment_index` of this edge and another
    /// segment.
    pub fn add_intersections(&mut self, intr: &SegSegIntr<T>, segment_index: usize) {
        for pt in intr.points() {
            self.add_intersection(pt, segment_index);
        }
    }

    /// Record one intersection point lying on segment `segment_index`.
    ///
    /// A point equal to the next vertex is normalized to that vertex so every intersection has a
    /// unique key.
    pub fn add_intersection(&mut self, pt: Vector2<T>, segment_index: usize) {
        let p0 = self.pts[segment_index];
        let p1 = self.pts[segment_index + 1];
        let mut normalized_index = segment_index;
        let mut dist = edge_distance(pt, p0, p1);

        let next_index = normalized_index + 1;
        if next_index < self.pts.len() && pt == self.pts[next_index] {
            normalized_index = next_index;
            dist = T::zero();
        }

        self.intersections.add(pt, normalized_index, dist);
    }

    /// True if `other` has the same points in the same or reverse order.
    pub fn equals(&self, other: &Self) -> bool {
        if self.pts.len() != other.pts.len() {
            return false;
        }

        self.is_pointwise_equal(other) || self.pts.iter().eq(other.pts.iter().rev())
    }

    /// True if `other` has the same points in the same order.
    #[inline]
    pub fn is_pointwise_equal(&self, other: &Self) -> bool {
        self.pts == other.pts
    }

    /// Split this edge at all of its recorded intersections (end points included), pushing the
    /// resulting edges to `out`.
    pub fn split_edges(&mut self, out: &mut Vec<Edge<T>>) {
        let max_seg = self.max_segment_index();
        let first = self.pts[0];
        let last = self.pts[max_seg];
        self.intersections.add(first, 0, T::zero());
        self.intersections.add(last, max_seg, T::zero());

        let items = &self.intersections.items;
        for w in items.windows(2) {
            out.push(self.create_split_edge(&w[0], &w[1]));
        }
    }

    fn create_split_edge(&self, ei0: &EdgeIntersection<T>, ei1: &EdgeIntersection<T>) -> Self {
        let last_seg_start = self.pts[ei1.segment_index];
        // the last point is the intersection unless it lies exactly on the segment start vertex
        let use_int_pt1 = ei1.dist > T::zero() || ei1.coord != last_seg_start;

        let mut pts = Vec::with_capacity(ei1.segment_index - ei0.segment_index + 2);
        pts.push(ei0.coord);
        pts.extend_from_slice(&self.pts[ei0.segment_index + 1..=ei1.segment_index]);
        if use_int_pt1 {
            pts.push(ei1.coord);
        }

        Edge::new(pts, self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::vec2;
    use crate::geometry::Location;

    fn line_edge(pts: Vec<Vector2<f64>>) -> Edge<f64> {
        Edge::new(pts, Label::new_line(0, Location::Interior))
    }

    #[test]
    fn split_at_interior_intersection() {
        let mut e = line_edge(vec![vec2(0.0, 0.0), vec2(4.0, 0.0), vec2(4.0, 4.0)]);
        e.add_intersection(vec2(2.0, 0.0), 0);
        let mut out = Vec::new();
        e.split_edges(&mut out);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].pts, vec![vec2(0.0, 0.0), vec2(2.0, 0.0)]);
        assert_eq!(
            out[1].pts,
            vec![vec2(2.0, 0.0), vec2(4.0, 0.0), vec2(4.0, 4.0)]
        );
    }

    #[test]
    fn intersection_at_vertex_is_normalized() {
        let mut e = line_edge(vec![vec2(0.0, 0.0), vec2(4.0, 0.0), vec2(4.0, 4.0)]);
        e.add_intersection(vec2(4.0, 0.0), 0);
        e.add_intersection(vec2(4.0, 0.0), 1);
        assert_eq!(e.intersections.len(), 1);
        let mut out = Vec::new();
        e.split_edges(&mut out);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].pts, vec![vec2(0.0, 0.0), vec2(4.0, 0.0)]);
        assert_eq!(out[1].pts, vec![vec2(4.0, 0.0), vec2(4.0, 4.0)]);
    }

    #[test]
    fn equality_ignores_direction() {
        let a = line_edge(vec![vec2(0.0, 0.0), vec2(1.0, 0.0), vec2(1.0, 1.0)]);
        let b = line_edge(vec![vec2(1.0, 1.0), vec2(1.0, 0.0), vec2(0.0, 0.0)]);
        assert!(a.equals(&b));
        assert!(!a.is_pointwise_equal(&b));
    }

    #[test]
    fn collapsed_area_edge() {
        let e = Edge::new(
            vec![vec2(0.0, 0.0), vec2(1.0, 0.0), vec2(0.0, 0.0)],
            Label::new_area(0, Location::Boundary, Location::Exterior, Location::Interior),
        );
        assert!(e.is_collapsed());
        let c = e.collapsed_edge();
        assert_eq!(c.pts.len(), 2);
        assert!(!c.label.is_area());
    }
}
