use super::{
    douglas_peucker::find_furthest_point, segment_index::LineSegmentIndex,
    tagged_line::TaggedLineSegment, TaggedLineString,
};
use crate::core::traits::Real;
use crate::geometry::LineSegment;

/// Simplifies a set of lines together so that no simplified line crosses another line, or
/// another part of itself, where the input did not.
///
/// Every input segment is indexed up front. A section `i..j` of a line is only flattened to
/// the chord `coords[i] -> coords[j]` if the chord is within tolerance, keeps the line above
/// its minimum size, and does not cross any remaining input segment outside of the section or
/// any segment already produced. Otherwise the section is split at its furthest point.
#[derive(Debug, Clone)]
pub struct TaggedLinesSimplifier<T = f64> {
    input_index: LineSegmentIndex<T>,
    output_index: LineSegmentIndex<T>,
    distance_tolerance: T,
}

impl<T> TaggedLinesSimplifier<T>
where
    T: Real,
{
    pub fn new(distance_tolerance: T) -> Self {
        Self {
            input_index: LineSegmentIndex::new(),
            output_index: LineSegmentIndex::new(),
            distance_tolerance,
        }
    }

    /// Simplify all `lines`, results are read back with
    /// [TaggedLineString::result_coordinates].
    pub fn simplify(&mut self, lines: &mut [TaggedLineString<T>]) {
        for line in lines.iter() {
            self.input_index.add_line(line);
        }

        for line in lines.iter_mut() {
            self.simplify_line(line);
        }
    }

    fn simplify_line(&mut self, line: &mut TaggedLineString<T>) {
        line.clear_result();
        let n = line.parent_coordinates().len();
        if n < 2 {
            return;
        }

        // sections are processed depth first, left before right, so result segments stay in
        // line order
        let mut sections = vec![(0, n - 1, 0usize)];
        while let Some((i, j, depth)) = sections.pop() {
            let depth = depth + 1;
            if i + 1 == j {
                // left in the input index
                let seg = line.segment(i).segment;
                line.add_to_result(seg);
                continue;
            }

            let mut is_valid_to_simplify = true;
            if line.result_size() < line.min_size() && depth + 1 < line.min_size() {
                is_valid_to_simplify = false;
            }

            let (furthest, distance) = find_furthest_point(line.parent_coordinates(), i, j);
            if distance > self.distance_tolerance {
                is_valid_to_simplify = false;
            }

            let pts = line.parent_coordinates();
            let candidate = LineSegment::new(pts[i], pts[j]);
            if is_valid_to_simplify && self.has_bad_intersection(line, i, j, &candidate) {
                log::trace!(
                    "simplify: line {} section {}..{} rejected, chord crosses another segment",
                    line.parent(),
                    i,
                    j
                );
                is_valid_to_simplify = false;
            }

            if is_valid_to_simplify {
                let seg = self.flatten(line, i, j);
                line.add_to_result(seg);
                continue;
            }

            sections.push((furthest, j, depth));
            sections.push((i, furthest, depth));
        }
    }

    /// Replace segments `i..j` of `line` by their chord in the indexes.
    fn flatten(&mut self, line: &TaggedLineString<T>, i: usize, j: usize) -> LineSegment<T> {
        let pts = line.parent_coordinates();
        let seg = LineSegment::new(pts[i], pts[j]);
        for k in i..j {
            self.input_index.remove(line.segment(k));
        }
        self.output_index
            .add(TaggedLineSegment::new(seg, line.parent(), i));
        seg
    }

    fn has_bad_intersection(
        &self,
        line: &TaggedLineString<T>,
        i: usize,
        j: usize,
        candidate: &LineSegment<T>,
    ) -> bool {
        self.has_bad_output_intersection(candidate)
            || self.has_bad_input_intersection(line, i, j, candidate)
    }

    fn has_bad_output_intersection(&self, candidate: &LineSegment<T>) -> bool {
        self.output_index
            .query(candidate)
            .iter()
            .any(|s| has_interior_intersection(&s.segment, candidate))
    }

    fn has_bad_input_intersection(
        &self,
        line: &TaggedLineString<T>,
        i: usize,
        j: usize,
        candidate: &LineSegment<T>,
    ) -> bool {
        self.input_index.query(candidate).iter().any(|s| {
            let in_section = s.parent == line.parent() && s.index >= i && s.index < j;
            !in_section && has_interior_intersection(&s.segment, candidate)
        })
    }
}

/// Segments meet at a point that is not an end point of both.
fn has_interior_intersection<T>(a: &LineSegment<T>, b: &LineSegment<T>) -> bool
where
    T: Real,
{
    let intr = a.intersection(b);
    intr.is_interior_to(a.p0, a.p1) || intr.is_interior_to(b.p0, b.p1)
}
