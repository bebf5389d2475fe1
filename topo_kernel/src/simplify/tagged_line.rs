use crate::core::{math::Vector2, traits::Real};
use crate::geometry::{Envelope, LineSegment};

/// Segment `index` of the input line `parent`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TaggedLineSegment<T = f64> {
    pub segment: LineSegment<T>,
    pub parent: usize,
    pub index: usize,
}

impl<T> TaggedLineSegment<T>
where
    T: Real,
{
    #[inline]
    pub fn new(segment: LineSegment<T>, parent: usize, index: usize) -> Self {
        Self {
            segment,
            parent,
            index,
        }
    }

    #[inline]
    pub fn envelope(&self) -> Envelope<T> {
        self.segment.envelope()
    }
}

/// An input line split into tagged segments, together with the segments accepted into its
/// simplified form.
#[derive(Debug, Clone)]
pub struct TaggedLineString<T = f64> {
    parent: usize,
    coords: Vec<Vector2<T>>,
    segs: Vec<TaggedLineSegment<T>>,
    result_segs: Vec<LineSegment<T>>,
    min_size: usize,
}

impl<T> TaggedLineString<T>
where
    T: Real,
{
    /// Line identified by `parent`, which must be unique among the lines simplified together.
    ///
    /// A closed line (a ring) never shrinks below 4 coordinates, an open one below 2.
    pub fn new(coords: Vec<Vector2<T>>, parent: usize) -> Self {
        let is_ring = coords.len() > 1 && coords.first() == coords.last();
        let min_size = if is_ring { 4 } else { 2 };
        Self::with_min_size(coords, parent, min_size)
    }

    pub fn with_min_size(coords: Vec<Vector2<T>>, parent: usize, min_size: usize) -> Self {
        let segs = coords
            .windows(2)
            .enumerate()
            .map(|(i, w)| TaggedLineSegment::new(LineSegment::new(w[0], w[1]), parent, i))
            .collect();
        Self {
            parent,
            coords,
            segs,
            result_segs: Vec::new(),
            min_size,
        }
    }

    #[inline]
    pub fn parent(&self) -> usize {
        self.parent
    }

    #[inline]
    pub fn min_size(&self) -> usize {
        self.min_size
    }

    #[inline]
    pub fn parent_coordinates(&self) -> &[Vector2<T>] {
        &self.coords
    }

    #[inline]
    pub fn segments(&self) -> &[TaggedLineSegment<T>] {
        &self.segs
    }

    #[inline]
    pub fn segment(&self, i: usize) -> &TaggedLineSegment<T> {
        &self.segs[i]
    }

    /// Coordinate count of the simplified form so far (0 before any segment is accepted).
    #[inline]
    pub fn result_size(&self) -> usize {
        if self.result_segs.is_empty() {
            0
        } else {
            self.result_segs.len() + 1
        }
    }

    #[inline]
    pub fn add_to_result(&mut self, seg: LineSegment<T>) {
        self.result_segs.push(seg);
    }

    pub fn clear_result(&mut self) {
        self.result_segs.clear();
    }

    /// Simplified coordinates, or the input coordinates if nothing has been simplified.
    pub fn result_coordinates(&self) -> Vec<Vector2<T>> {
        if self.result_segs.is_empty() {
            return self.coords.clone();
        }

        let mut pts: Vec<Vector2<T>> = self.result_segs.iter().map(|s| s.p0).collect();
        if let Some(last) = self.result_segs.last() {
            pts.push(last.p1);
        }
        pts
    }
}
