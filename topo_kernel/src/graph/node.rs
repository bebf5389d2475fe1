use super::Label;
use crate::core::{math::Vector2, traits::Real};
use std::cmp::Ordering;

/// Coordinate wrapper ordered by x then y, used to key node maps.
#[derive(Debug, Copy, Clone)]
pub struct CoordKey<T>(pub Vector2<T>);

impl<T> PartialEq for CoordKey<T>
where
    T: Real,
{
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for CoordKey<T> where T: Real {}

impl<T> PartialOrd for CoordKey<T>
where
    T: Real,
{
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for CoordKey<T>
where
    T: Real,
{
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp_xy(&other.0)
    }
}

/// Planar graph node, the directed edges leaving it are kept sorted by angle in `star`.
#[derive(Debug, Clone)]
pub struct Node<T = f64> {
    pub coord: Vector2<T>,
    pub label: Label,
    /// Outgoing directed edge indexes sorted counter clockwise.
    pub star: Vec<usize>,
    /// Subset of `star` with the edge or its symmetric edge in the result, cached when result
    /// edges are linked.
    pub result_area_edges: Vec<usize>,
    /// Summary label of all incident edges.
    pub star_label: Label,
}

impl<T> Node<T>
where
    T: Real,
{
    pub fn new(coord: Vector2<T>) -> Self {
        Self {
            coord,
            label: Label::default(),
            star: Vec::new(),
            result_area_edges: Vec::new(),
            star_label: Label::default(),
        }
    }

    /// Set the on location for `geom_index`.
    #[inline]
    pub fn set_label(&mut self, geom_index: usize, loc: crate::geometry::Location) {
        self.label.set_on_location(geom_index, loc);
    }

    /// A node is isolated if only one of the input geometries has a location for it.
    #[inline]
    pub fn is_isolated(&self) -> bool {
        self.label.geometry_count() == 1
    }

    #[inline]
    pub fn degree(&self) -> usize {
        self.star.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::vec2;
    use crate::geometry::Location;
    use std::collections::BTreeMap;

    #[test]
    fn coord_keys_sort_by_x_then_y() {
        let mut map = BTreeMap::new();
        map.insert(CoordKey(vec2(1.0, 0.0)), 0);
        map.insert(CoordKey(vec2(0.0, 5.0)), 1);
        map.insert(CoordKey(vec2(0.0, 1.0)), 2);
        map.insert(CoordKey(vec2(1.0, 0.0)), 3);
        let order: Vec<_> = map.values().copied().collect();
        assert_eq!(order, vec![2, 1, 3]);
    }

    #[test]
    fn isolated_node() {
        let mut node = Node::new(vec2(0.0, 0.0));
        assert!(!node.is_isolated());
        node.set_label(1, Location::Interior);
        assert!(node.is_isolated());
        node.set_label(0, Location::Exterior);
        assert!(!node.is_isolated());
    }
}
