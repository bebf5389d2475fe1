use super::{CoordKey, Edge};
use crate::core::{math::Vector2, traits::Real};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Edge sequence key that is equal for the same points in either direction.
#[derive(Debug, Clone)]
struct OrientedCoords<T>(Vec<CoordKey<T>>);

impl<T> OrientedCoords<T>
where
    T: Real,
{
    fn new(pts: &[Vector2<T>]) -> Self {
        let forward = pts
            .iter()
            .zip(pts.iter().rev())
            .map(|(a, b)| a.cmp_xy(b))
            .find(|o| *o != Ordering::Equal)
            .map_or(true, |o| o == Ordering::Less);

        let keys = if forward {
            pts.iter().copied().map(CoordKey).collect()
        } else {
            pts.iter().rev().copied().map(CoordKey).collect()
        };

        Self(keys)
    }
}

impl<T: Real> PartialEq for OrientedCoords<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T: Real> Eq for OrientedCoords<T> {}

impl<T: Real> PartialOrd for OrientedCoords<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Real> Ord for OrientedCoords<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

/// List of edges with lookup of an equal edge (same points, either direction).
///
/// Equality is exact, coincident edges are expected to have been noded to identical vertexes.
#[derive(Debug, Clone, Default)]
pub struct EdgeList<T = f64> {
    edges: Vec<Edge<T>>,
    index: BTreeMap<OrientedCoords<T>, usize>,
}

impl<T> EdgeList<T>
where
    T: Real,
{
    pub fn new() -> Self {
        Self {
            edges: Vec::new(),
            index: BTreeMap::new(),
        }
    }

    pub fn add(&mut self, edge: Edge<T>) {
        self.index
            .insert(OrientedCoords::new(&edge.pts), self.edges.len());
        self.edges.push(edge);
    }

    /// Index of an edge equal to `edge` if one exists.
    pub fn find_equal_edge(&self, edge: &Edge<T>) -> Option<usize> {
        self.index.get(&OrientedCoords::new(&edge.pts)).copied()
    }

    #[inline]
    pub fn get(&self, index: usize) -> &Edge<T> {
        &self.edges[index]
    }

    #[inline]
    pub fn get_mut(&mut self, index: usize) -> &mut Edge<T> {
        &mut self.edges[index]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Edge<T>> {
        self.edges.iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Edge<T>> {
        self.edges.iter_mut()
    }

    /// Replace each edge for which `replace` returns a new edge, replacements are moved to the
    /// end of the list.
    pub fn replace_with<F>(&mut self, mut replace: F)
    where
        F: FnMut(&Edge<T>) -> Option<Edge<T>>,
    {
        let mut kept = Vec::with_capacity(self.edges.len());
        let mut replaced = Vec::new();
        for edge in self.edges.drain(..) {
            match replace(&edge) {
                Some(new_edge) => replaced.push(new_edge),
                None => kept.push(edge),
            }
        }

        self.index.clear();
        for edge in kept.into_iter().chain(replaced) {
            self.add(edge);
        }
    }

    pub fn into_edges(self) -> Vec<Edge<T>> {
        self.edges
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::vec2;
    use crate::geometry::Location;
    use crate::graph::Label;

    fn edge(pts: Vec<Vector2<f64>>) -> Edge<f64> {
        Edge::new(pts, Label::new_line(0, Location::Interior))
    }

    #[test]
    fn finds_reversed_edge() {
        let mut list = EdgeList::new();
        list.add(edge(vec![vec2(0.0, 0.0), vec2(1.0, 1.0), vec2(2.0, 0.0)]));
        list.add(edge(vec![vec2(5.0, 5.0), vec2(6.0, 6.0)]));
        let rev = edge(vec![vec2(2.0, 0.0), vec2(1.0, 1.0), vec2(0.0, 0.0)]);
        assert_eq!(list.find_equal_edge(&rev), Some(0));
        let other = edge(vec![vec2(0.0, 0.0), vec2(1.0, 1.0)]);
        assert_eq!(list.find_equal_edge(&other), None);
    }

    #[test]
    fn replaced_edges_move_to_end() {
        let mut list = EdgeList::new();
        list.add(edge(vec![vec2(0.0, 0.0), vec2(1.0, 0.0)]));
        list.add(edge(vec![vec2(3.0, 0.0), vec2(4.0, 0.0)]));
        list.replace_with(|e| {
            if e.pts[0] == vec2(0.0, 0.0) {
                Some(edge(vec![vec2(0.0, 0.0), vec2(0.5, 0.0)]))
            } else {
                None
            }
        });
        assert_eq!(list.get(0).pts[0], vec2(3.0, 0.0));
        assert_eq!(list.get(1).pts[1], vec2(0.5, 0.0));
        assert_eq!(list.find_equal_edge(&edge(vec![vec2(0.5, 0.0), vec2(0.0, 0.0)])), Some(1));
    }
}
