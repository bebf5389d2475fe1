use crate::core::{math::Vector2, traits::Real};
use crate::geometry::LineSegment;

/// Douglas-Peucker simplification of a single line in isolation.
///
/// Points within `tolerance` of the chord of the section they belong to are dropped. No
/// topology is preserved, the result may self intersect or collapse a ring.
pub struct DouglasPeuckerLineSimplifier;

impl DouglasPeuckerLineSimplifier {
    /// Simplified copy of `points`, consecutive repeated points are removed from the result.
    ///
    /// # Examples
    ///
    /// ```
    /// # use topo_kernel::core::math::vec2;
    /// # use topo_kernel::simplify::DouglasPeuckerLineSimplifier;
    /// let pts = [vec2(0.0, 0.0), vec2(1.0, 0.05), vec2(2.0, 0.0), vec2(3.0, 1.0)];
    /// let result = DouglasPeuckerLineSimplifier::simplify(&pts, 0.1);
    /// assert_eq!(result, vec![vec2(0.0, 0.0), vec2(2.0, 0.0), vec2(3.0, 1.0)]);
    /// ```
    pub fn simplify<T>(points: &[Vector2<T>], tolerance: T) -> Vec<Vector2<T>>
    where
        T: Real,
    {
        let mut result: Vec<Vector2<T>> = Vec::new();
        for i in Self::simplify_indices(points, tolerance) {
            let p = points[i];
            if result.last() != Some(&p) {
                result.push(p);
            }
        }
        result
    }

    /// Indexes (ascending) of the points of `points` kept by the simplification.
    pub fn simplify_indices<T>(points: &[Vector2<T>], tolerance: T) -> Vec<usize>
    where
        T: Real,
    {
        if points.len() < 3 {
            return (0..points.len()).collect();
        }

        let mut use_pt = vec![true; points.len()];
        let mut sections = vec![(0, points.len() - 1)];
        while let Some((i, j)) = sections.pop() {
            if i + 1 >= j {
                continue;
            }

            let (max_index, max_dist) = find_furthest_point(points, i, j);
            if max_dist <= tolerance {
                for u in use_pt[i + 1..j].iter_mut() {
                    *u = false;
                }
            } else {
                sections.push((max_index, j));
                sections.push((i, max_index));
            }
        }

        use_pt
            .iter()
            .enumerate()
            .filter_map(|(i, &u)| if u { Some(i) } else { None })
            .collect()
    }
}

/// Index and distance of the point strictly between `i` and `j` furthest from the segment
/// `points[i] -> points[j]`, the first one wins ties.
pub(crate) fn find_furthest_point<T>(points: &[Vector2<T>], i: usize, j: usize) -> (usize, T)
where
    T: Real,
{
    let seg = LineSegment::new(points[i], points[j]);
    let mut max_dist = -T::one();
    let mut max_index = i;
    for (k, p) in points.iter().enumerate().take(j).skip(i + 1) {
        let dist = seg.distance_to_point(*p);
        if dist > max_dist {
            max_dist = dist;
            max_index = k;
        }
    }
    (max_index, max_dist)
}
