use super::{Label, Position};
use crate::core::{
    math::{orientation_index, Vector2},
    traits::Real,
};
use crate::geometry::Location;
use std::cmp::Ordering;

/// Quadrant of a direction vector, counter clockwise from north east (0) to south east (3).
#[inline]
pub fn quadrant<T>(dx: T, dy: T) -> u8
where
    T: Real,
{
    match (dx >= T::zero(), dy >= T::zero()) {
        (true, true) => 0,
        (false, true) => 1,
        (false, false) => 2,
        (true, false) => 3,
    }
}

/// One direction of an [Edge](super::Edge) leaving a node.
///
/// Directed edges are stored in pairs by the [PlanarGraph](super::PlanarGraph) so the
/// symmetric edge of `i` is always `i ^ 1`. Ring membership and ring linkage are indexes
/// assigned while building result rings.
#[derive(Debug, Clone)]
pub struct DirectedEdge<T = f64> {
    pub edge: usize,
    pub is_forward: bool,
    /// Origin of the edge (the node coordinate).
    pub p0: Vector2<T>,
    /// Next point along the edge, defines the outgoing direction.
    pub p1: Vector2<T>,
    pub quadrant: u8,
    pub label: Label,
    pub node: usize,
    pub next: Option<usize>,
    pub next_min: Option<usize>,
    pub edge_ring: Option<usize>,
    pub min_edge_ring: Option<usize>,
    pub is_in_result: bool,
    pub is_visited: bool,
}

impl<T> DirectedEdge<T>
where
    T: Real,
{
    pub fn new(edge: usize, edge_pts: &[Vector2<T>], edge_label: &Label, is_forward: bool) -> Self {
        let n = edge_pts.len();
        let (p0, p1) = if is_forward {
            (edge_pts[0], edge_pts[1])
        } else {
            (edge_pts[n - 1], edge_pts[n - 2])
        };

        let label = if is_forward {
            *edge_label
        } else {
            edge_label.flipped()
        };

        Self {
            edge,
            is_forward,
            p0,
            p1,
            quadrant: quadrant(p1.x - p0.x, p1.y - p0.y),
            label,
            node: usize::MAX,
            next: None,
            next_min: None,
            edge_ring: None,
            min_edge_ring: None,
            is_in_result: false,
            is_visited: false,
        }
    }

    #[inline]
    pub fn coordinate(&self) -> Vector2<T> {
        self.p0
    }

    /// Angular order of outgoing directions around a node, counter clockwise from the positive
    /// x axis. Uses the quadrant first then an exact orientation test.
    pub fn compare_direction(&self, other: &Self) -> Ordering {
        let dx = self.p1.x - self.p0.x;
        let dy = self.p1.y - self.p0.y;
        if dx == other.p1.x - other.p0.x && dy == other.p1.y - other.p0.y {
            return Ordering::Equal;
        }

        match self.quadrant.cmp(&other.quadrant) {
            Ordering::Equal => match orientation_index(other.p0, other.p1, self.p1) {
                1 => Ordering::Greater,
                -1 => Ordering::Less,
                _ => Ordering::Equal,
            },
            ord => ord,
        }
    }

    /// A line edge that is not inside either area.
    pub fn is_line_edge(&self) -> bool {
        let is_line = self.label.is_line(0) || self.label.is_line(1);
        let exterior_if_area = |i: usize| {
            !self.label.is_area_for(i) || self.label.all_positions_equal(i, Location::Exterior)
        };
        is_line && exterior_if_area(0) && exterior_if_area(1)
    }

    /// An area edge with interior on both sides for both geometries.
    pub fn is_interior_area_edge(&self) -> bool {
        (0..2).all(|i| {
            self.label.is_area_for(i)
                && self.label.location(i, Position::Left) == Location::Interior
                && self.label.location(i, Position::Right) == Location::Interior
        })
    }
}

/// Symmetric (opposite direction) directed edge index.
#[inline]
pub fn sym(de: usize) -> usize {
    de ^ 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::vec2;

    fn de(p1: Vector2<f64>) -> DirectedEdge<f64> {
        DirectedEdge::new(
            0,
            &[vec2(0.0, 0.0), p1],
            &Label::new_line(0, Location::Interior),
            true,
        )
    }

    #[test]
    fn quadrants() {
        assert_eq!(quadrant(1.0, 0.0), 0);
        assert_eq!(quadrant(-1.0, 0.0), 1);
        assert_eq!(quadrant(-1.0, -1.0), 2);
        assert_eq!(quadrant(0.0, -1.0), 3);
    }

    #[test]
    fn direction_order_is_counter_clockwise() {
        let east = de(vec2(1.0, 0.0));
        let north_east = de(vec2(1.0, 1.0));
        let north_east_steep = de(vec2(1.0, 2.0));
        let south = de(vec2(0.0, -1.0));
        assert_eq!(east.compare_direction(&north_east), Ordering::Less);
        assert_eq!(north_east_steep.compare_direction(&north_east), Ordering::Greater);
        assert_eq!(south.compare_direction(&east), Ordering::Greater);
        assert_eq!(east.compare_direction(&de(vec2(2.0, 0.0))), Ordering::Equal);
    }

    #[test]
    fn reverse_direction_flips_label() {
        let label = Label::new_area(0, Location::Boundary, Location::Exterior, Location::Interior);
        let pts = [vec2(0.0, 0.0), vec2(1.0, 0.0), vec2(1.0, 1.0)];
        let rev = DirectedEdge::new(0, &pts, &label, false);
        assert_eq!(rev.p0, vec2(1.0, 1.0));
        assert_eq!(rev.p1, vec2(1.0, 0.0));
        assert_eq!(rev.label.location(0, Position::Left), Location::Interior);
    }
}
