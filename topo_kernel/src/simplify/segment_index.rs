use super::{quadtree::Quadtree, tagged_line::TaggedLineSegment, TaggedLineString};
use crate::core::traits::Real;
use crate::geometry::LineSegment;

/// Envelope index of tagged segments supporting removal, used to look for segments a
/// simplified section could cross.
#[derive(Debug, Clone)]
pub struct LineSegmentIndex<T = f64> {
    tree: Quadtree<TaggedLineSegment<T>, T>,
}

impl<T> LineSegmentIndex<T>
where
    T: Real,
{
    pub fn new() -> Self {
        Self {
            tree: Quadtree::new(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Add every segment of `line`.
    pub fn add_line(&mut self, line: &TaggedLineString<T>) {
        for seg in line.segments() {
            self.add(*seg);
        }
    }

    #[inline]
    pub fn add(&mut self, seg: TaggedLineSegment<T>) {
        self.tree.insert(seg.envelope(), seg);
    }

    #[inline]
    pub fn remove(&mut self, seg: &TaggedLineSegment<T>) -> bool {
        self.tree.remove(&seg.envelope(), seg)
    }

    /// Segments whose envelope intersects the envelope of `query`.
    pub fn query(&self, query: &LineSegment<T>) -> Vec<TaggedLineSegment<T>> {
        self.tree
            .query(&query.envelope())
            .into_iter()
            .copied()
            .collect()
    }
}

impl<T> Default for LineSegmentIndex<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::vec2;

    #[test]
    fn query_and_remove_segments() {
        let line = TaggedLineString::new(
            vec![vec2(0.0, 0.0), vec2(1.0, 0.0), vec2(2.0, 0.0), vec2(10.0, 0.0)],
            7,
        );
        let mut index = LineSegmentIndex::new();
        index.add_line(&line);
        assert_eq!(index.len(), 3);

        let hits = index.query(&LineSegment::new(vec2(0.5, -1.0), vec2(0.5, 1.0)));
        assert_eq!(hits.len(), 1);
        assert_eq!((hits[0].parent, hits[0].index), (7, 0));

        assert!(index.remove(line.segment(0)));
        assert!(index
            .query(&LineSegment::new(vec2(0.5, -1.0), vec2(0.5, 1.0)))
            .is_empty());
        assert_eq!(index.len(), 2);
    }
}
