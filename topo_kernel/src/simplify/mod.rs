//! Line simplification.
//!
//! [DouglasPeuckerLineSimplifier] simplifies one line on its own.
//! [TaggedLinesSimplifier] (and the [TopologyPreservingSimplifier] entry point) simplifies many
//! lines together without introducing crossings between them.
mod douglas_peucker;
mod quadtree;
mod segment_index;
mod tagged_line;
mod tagged_lines_simplifier;

pub use douglas_peucker::DouglasPeuckerLineSimplifier;
pub use quadtree::Quadtree;
pub use segment_index::LineSegmentIndex;
pub use tagged_line::{TaggedLineSegment, TaggedLineString};
pub use tagged_lines_simplifier::TaggedLinesSimplifier;

use crate::core::traits::Real;
use crate::geometry::{Geometry, LineString, Polygon};

/// Simplification of lines and polygon rings that keeps their crossing relationships.
pub struct TopologyPreservingSimplifier;

impl TopologyPreservingSimplifier {
    /// Simplify `lines` together with `tolerance`, one result per input line in input order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use topo_kernel::core::math::vec2;
    /// # use topo_kernel::geometry::LineString;
    /// # use topo_kernel::simplify::TopologyPreservingSimplifier;
    /// let lines = vec![
    ///     LineString::new(vec![vec2(0.0, 0.0), vec2(5.0, 2.0), vec2(10.0, 0.0)]),
    ///     LineString::new(vec![vec2(5.0, -1.0), vec2(5.0, 1.0)]),
    /// ];
    /// let result = TopologyPreservingSimplifier::simplify_lines(&lines, 5.0);
    /// // flattening the first line would cross the second
    /// assert_eq!(result[0].len(), 3);
    /// ```
    pub fn simplify_lines<T>(lines: &[LineString<T>], tolerance: T) -> Vec<LineString<T>>
    where
        T: Real,
    {
        let mut tagged: Vec<TaggedLineString<T>> = lines
            .iter()
            .enumerate()
            .map(|(i, l)| TaggedLineString::new(l.coords.clone(), i))
            .collect();

        TaggedLinesSimplifier::new(tolerance).simplify(&mut tagged);

        tagged
            .iter()
            .map(|t| LineString::new(t.result_coordinates()))
            .collect()
    }

    /// Simplify every line and polygon ring of `geometry` together. Points are kept as is.
    pub fn simplify<T>(geometry: &Geometry<T>, tolerance: T) -> Geometry<T>
    where
        T: Real,
    {
        let mut tagged: Vec<TaggedLineString<T>> = Vec::new();
        for line in geometry.lines.iter() {
            let id = tagged.len();
            tagged.push(TaggedLineString::new(line.coords.clone(), id));
        }
        for poly in geometry.polygons.iter() {
            for ring in poly.rings() {
                let id = tagged.len();
                tagged.push(TaggedLineString::with_min_size(ring.clone(), id, 4));
            }
        }

        TaggedLinesSimplifier::new(tolerance).simplify(&mut tagged);

        let mut results = tagged.iter().map(|t| t.result_coordinates());
        let lines: Vec<LineString<T>> = results
            .by_ref()
            .take(geometry.lines.len())
            .map(LineString::new)
            .collect();
        let polygons = geometry
            .polygons
            .iter()
            .map(|poly| {
                let shell = results.next().unwrap_or_else(|| poly.shell.clone());
                let holes = poly
                    .holes
                    .iter()
                    .map(|h| results.next().unwrap_or_else(|| h.clone()))
                    .collect();
                Polygon::new(shell, holes)
            })
            .collect();

        Geometry::new(geometry.points.clone(), lines, polygons)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::vec2;

    #[test]
    fn simplify_geometry_keeps_structure() {
        let mut shell = vec![vec2(0.0, 0.0)];
        for i in 1..10 {
            shell.push(vec2(i as f64, 0.01 * (i % 2) as f64));
        }
        shell.extend([vec2(10.0, 0.0), vec2(10.0, 10.0), vec2(0.0, 10.0), vec2(0.0, 0.0)]);
        let hole = vec![
            vec2(4.0, 4.0),
            vec2(4.0, 6.0),
            vec2(6.0, 6.0),
            vec2(6.0, 4.0),
            vec2(4.0, 4.0),
        ];
        let poly = Polygon::new(shell, vec![hole.clone()]);
        let g = Geometry::new(vec![vec2(20.0, 20.0)], Vec::new(), vec![poly]);

        let s = TopologyPreservingSimplifier::simplify(&g, 0.1);
        assert_eq!(s.points, g.points);
        assert_eq!(s.polygons.len(), 1);
        assert_eq!(s.polygons[0].holes.len(), 1);
        assert_eq!(s.polygons[0].holes[0], hole);
        assert!(s.polygons[0].shell.len() < g.polygons[0].shell.len());
        assert!((s.polygons[0].area() - g.polygons[0].area()).abs() < 1.0);
    }
}
