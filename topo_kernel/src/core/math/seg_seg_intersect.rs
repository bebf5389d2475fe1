use super::{base_math::point_in_seg_bounds, orientation_index, Vector2};
use crate::core::traits::Real;

/// Holds the result of finding the intersect between two line segments.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum SegSegIntr<T>
where
    T: Real,
{
    /// Segments do not touch.
    NoIntersect,
    /// Segments meet at a single point.
    PointIntersect {
        point: Vector2<T>,
        /// True if the point is interior to both segments (not one of the end points).
        is_proper: bool,
    },
    /// Segments are collinear and overlap from `point1` to `point2`.
    CollinearIntersect {
        point1: Vector2<T>,
        point2: Vector2<T>,
    },
}

impl<T> SegSegIntr<T>
where
    T: Real,
{
    /// Number of intersection points (0, 1 or 2).
    #[inline]
    pub fn count(&self) -> usize {
        match self {
            SegSegIntr::NoIntersect => 0,
            SegSegIntr::PointIntersect { .. } => 1,
            SegSegIntr::CollinearIntersect { .. } => 2,
        }
    }

    #[inline]
    pub fn has_intersect(&self) -> bool {
        !matches!(self, SegSegIntr::NoIntersect)
    }

    /// Intersection points (0, 1 or 2 elements).
    pub fn points(&self) -> Vec<Vector2<T>> {
        match *self {
            SegSegIntr::NoIntersect => Vec::new(),
            SegSegIntr::PointIntersect { point, .. } => vec![point],
            SegSegIntr::CollinearIntersect { point1, point2 } => vec![point1, point2],
        }
    }

    /// Returns true if any intersection point is not an end point of the segment `p1 -> p2`.
    pub fn is_interior_to(&self, p1: Vector2<T>, p2: Vector2<T>) -> bool {
        self.points().into_iter().any(|pt| pt != p1 && pt != p2)
    }
}

/// Finds the intersect between the segments `p1 -> p2` and `q1 -> q2`.
///
/// Orientation tests are exact, end points are returned verbatim whenever the intersection lies
/// on one so noding never perturbs input vertexes.
///
/// # Examples
///
/// ```
/// # use topo_kernel::core::math::*;
/// let intr = seg_seg_intr(
///     Vector2::new(0.0, 0.0),
///     Vector2::new(2.0, 2.0),
///     Vector2::new(0.0, 2.0),
///     Vector2::new(2.0, 0.0),
/// );
/// assert_eq!(
///     intr,
///     SegSegIntr::PointIntersect { point: Vector2::new(1.0, 1.0), is_proper: true }
/// );
/// ```
pub fn seg_seg_intr<T>(p1: Vector2<T>, p2: Vector2<T>, q1: Vector2<T>, q2: Vector2<T>) -> SegSegIntr<T>
where
    T: Real,
{
    use SegSegIntr::*;

    if !envelopes_overlap(p1, p2, q1, q2) {
        return NoIntersect;
    }

    let pq1 = orientation_index(p1, p2, q1);
    let pq2 = orientation_index(p1, p2, q2);
    if (pq1 > 0 && pq2 > 0) || (pq1 < 0 && pq2 < 0) {
        return NoIntersect;
    }

    let qp1 = orientation_index(q1, q2, p1);
    let qp2 = orientation_index(q1, q2, p2);
    if (qp1 > 0 && qp2 > 0) || (qp1 < 0 && qp2 < 0) {
        return NoIntersect;
    }

    if pq1 == 0 && pq2 == 0 && qp1 == 0 && qp2 == 0 {
        return collinear_intr(p1, p2, q1, q2);
    }

    if pq1 == 0 || pq2 == 0 || qp1 == 0 || qp2 == 0 {
        // intersection is at an end point of at least one segment
        let point = if p1 == q1 || p1 == q2 {
            p1
        } else if p2 == q1 || p2 == q2 {
            p2
        } else if pq1 == 0 {
            q1
        } else if pq2 == 0 {
            q2
        } else if qp1 == 0 {
            p1
        } else {
            p2
        };

        return PointIntersect {
            point,
            is_proper: false,
        };
    }

    PointIntersect {
        point: proper_intr_point(p1, p2, q1, q2),
        is_proper: true,
    }
}

fn envelopes_overlap<T>(p1: Vector2<T>, p2: Vector2<T>, q1: Vector2<T>, q2: Vector2<T>) -> bool
where
    T: Real,
{
    let min_q = num_traits::real::Real::min(q1.x, q2.x);
    let max_q = num_traits::real::Real::max(q1.x, q2.x);
    let min_p = num_traits::real::Real::min(p1.x, p2.x);
    let max_p = num_traits::real::Real::max(p1.x, p2.x);
    if min_p > max_q || max_p < min_q {
        return false;
    }

    let min_q = num_traits::real::Real::min(q1.y, q2.y);
    let max_q = num_traits::real::Real::max(q1.y, q2.y);
    let min_p = num_traits::real::Real::min(p1.y, p2.y);
    let max_p = num_traits::real::Real::max(p1.y, p2.y);
    !(min_p > max_q || max_p < min_q)
}

fn collinear_intr<T>(p1: Vector2<T>, p2: Vector2<T>, q1: Vector2<T>, q2: Vector2<T>) -> SegSegIntr<T>
where
    T: Real,
{
    use SegSegIntr::*;

    let p1q1p2 = point_in_seg_bounds(p1, p2, q1);
    let p1q2p2 = point_in_seg_bounds(p1, p2, q2);
    let q1p1q2 = point_in_seg_bounds(q1, q2, p1);
    let q1p2q2 = point_in_seg_bounds(q1, q2, p2);

    let point_or_overlap = |a: Vector2<T>, b: Vector2<T>| {
        if a == b {
            PointIntersect {
                point: a,
                is_proper: false,
            }
        } else {
            CollinearIntersect {
                point1: a,
                point2: b,
            }
        }
    };

    if p1q1p2 && p1q2p2 {
        return point_or_overlap(q1, q2);
    }
    if q1p1q2 && q1p2q2 {
        return point_or_overlap(p1, p2);
    }
    if p1q1p2 && q1p1q2 {
        return point_or_overlap(q1, p1);
    }
    if p1q1p2 && q1p2q2 {
        return point_or_overlap(q1, p2);
    }
    if p1q2p2 && q1p1q2 {
        return point_or_overlap(q2, p1);
    }
    if p1q2p2 && q1p2q2 {
        return point_or_overlap(q2, p2);
    }

    NoIntersect
}

/// Computes the crossing point of two segments known to properly intersect. Round off can push the
/// computed point outside of the segment bounds, in which case the nearest end point is used.
fn proper_intr_point<T>(p1: Vector2<T>, p2: Vector2<T>, q1: Vector2<T>, q2: Vector2<T>) -> Vector2<T>
where
    T: Real,
{
    // translate to a local origin to limit precision loss
    let origin = Vector2::new(
        (p1.x + p2.x + q1.x + q2.x) / (T::two() + T::two()),
        (p1.y + p2.y + q1.y + q2.y) / (T::two() + T::two()),
    );
    let a1 = p1 - origin;
    let a2 = p2 - origin;
    let b1 = q1 - origin;
    let b2 = q2 - origin;

    let v = a2 - a1;
    let u = b2 - b1;
    let denom = v.perp_dot(u);
    let t = (b1 - a1).perp_dot(u) / denom;
    let point = a1 + v.scale(t) + origin;

    if point_in_seg_bounds(p1, p2, point) && point_in_seg_bounds(q1, q2, point) {
        return point;
    }

    nearest_end_point(p1, p2, q1, q2)
}

fn nearest_end_point<T>(p1: Vector2<T>, p2: Vector2<T>, q1: Vector2<T>, q2: Vector2<T>) -> Vector2<T>
where
    T: Real,
{
    use super::seg_point_distance;
    let candidates = [
        (p1, seg_point_distance(q1, q2, p1)),
        (p2, seg_point_distance(q1, q2, p2)),
        (q1, seg_point_distance(p1, p2, q1)),
        (q2, seg_point_distance(p1, p2, q2)),
    ];

    let mut best = candidates[0];
    for c in candidates.iter().skip(1) {
        if c.1 < best.1 {
            best = *c;
        }
    }

    best.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::vec2;

    #[test]
    fn touching_end_points() {
        let intr = seg_seg_intr(vec2(0.0, 0.0), vec2(1.0, 0.0), vec2(1.0, 0.0), vec2(1.0, 1.0));
        assert_eq!(
            intr,
            SegSegIntr::PointIntersect {
                point: vec2(1.0, 0.0),
                is_proper: false
            }
        );
        assert!(!intr.is_interior_to(vec2(0.0, 0.0), vec2(1.0, 0.0)));
    }

    #[test]
    fn t_junction_is_interior_to_one() {
        let intr = seg_seg_intr(vec2(0.0, 0.0), vec2(2.0, 0.0), vec2(1.0, 0.0), vec2(1.0, 1.0));
        assert_eq!(intr.count(), 1);
        assert!(intr.is_interior_to(vec2(0.0, 0.0), vec2(2.0, 0.0)));
        assert!(!intr.is_interior_to(vec2(1.0, 0.0), vec2(1.0, 1.0)));
    }

    #[test]
    fn collinear_overlap() {
        let intr = seg_seg_intr(vec2(0.0, 0.0), vec2(2.0, 0.0), vec2(1.0, 0.0), vec2(3.0, 0.0));
        assert_eq!(
            intr,
            SegSegIntr::CollinearIntersect {
                point1: vec2(1.0, 0.0),
                point2: vec2(2.0, 0.0)
            }
        );
    }

    #[test]
    fn parallel_disjoint() {
        let intr = seg_seg_intr(vec2(0.0, 0.0), vec2(2.0, 0.0), vec2(0.0, 1.0), vec2(2.0, 1.0));
        assert_eq!(intr, SegSegIntr::NoIntersect);
    }
}
