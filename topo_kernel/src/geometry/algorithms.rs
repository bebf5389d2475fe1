use super::Location;
use crate::core::{
    math::{orientation_index, Vector2},
    traits::Real,
};

/// Signed area of a closed ring (shoelace formula), positive for counter clockwise rings.
///
/// # Examples
///
/// ```
/// # use topo_kernel::geometry::*;
/// # use topo_kernel::core::math::Vector2;
/// let ccw = [
///     Vector2::new(0.0, 0.0),
///     Vector2::new(2.0, 0.0),
///     Vector2::new(2.0, 2.0),
///     Vector2::new(0.0, 2.0),
///     Vector2::new(0.0, 0.0),
/// ];
/// assert_eq!(signed_area(&ccw), 4.0);
/// assert!(is_ccw(&ccw));
/// ```
pub fn signed_area<T>(ring: &[Vector2<T>]) -> T
where
    T: Real,
{
    if ring.len() < 3 {
        return T::zero();
    }

    // shift to first point to reduce round off
    let origin = ring[0];
    let mut sum = T::zero();
    for w in ring.windows(2) {
        let a = w[0] - origin;
        let b = w[1] - origin;
        sum = sum + a.perp_dot(b);
    }

    sum * T::half()
}

/// Returns true if the closed `ring` is oriented counter clockwise.
///
/// Uses the orientation at the highest vertex which is exact and tolerates repeated points and
/// flat tops, rings with fewer than 3 distinct points return false.
pub fn is_ccw<T>(ring: &[Vector2<T>]) -> bool
where
    T: Real,
{
    if ring.len() < 4 {
        return false;
    }
    // ignore closing point
    let n = ring.len() - 1;

    let mut hi_index = 0;
    for i in 1..n {
        if ring[i].y > ring[hi_index].y {
            hi_index = i;
        }
    }
    let hi = ring[hi_index];

    let mut prev_index = hi_index;
    loop {
        prev_index = if prev_index == 0 { n - 1 } else { prev_index - 1 };
        if ring[prev_index] != hi || prev_index == hi_index {
            break;
        }
    }

    let mut next_index = hi_index;
    loop {
        next_index = (next_index + 1) % n;
        if ring[next_index] != hi || next_index == hi_index {
            break;
        }
    }

    let prev = ring[prev_index];
    let next = ring[next_index];
    if prev == hi || next == hi || prev == next {
        return false;
    }

    match orientation_index(prev, hi, next) {
        0 => prev.x > next.x,
        d => d > 0,
    }
}

/// Locates `point` relative to the closed `ring` using ray crossing counting with exact
/// orientation tests.
pub fn locate_in_ring<T>(point: Vector2<T>, ring: &[Vector2<T>]) -> Location
where
    T: Real,
{
    let mut crossings = 0usize;
    for w in ring.windows(2) {
        let p1 = w[0];
        let p2 = w[1];

        if p1.x < point.x && p2.x < point.x {
            continue;
        }

        if point == p2 {
            return Location::Boundary;
        }

        if p1.y == point.y && p2.y == point.y {
            let (min_x, max_x) = if p1.x < p2.x { (p1.x, p2.x) } else { (p2.x, p1.x) };
            if point.x >= min_x && point.x <= max_x {
                return Location::Boundary;
            }
            continue;
        }

        if (p1.y > point.y && p2.y <= point.y) || (p2.y > point.y && p1.y <= point.y) {
            let mut orient = orientation_index(p1, p2, point);
            if orient == 0 {
                return Location::Boundary;
            }
            if p2.y < p1.y {
                orient = -orient;
            }
            if orient > 0 {
                crossings += 1;
            }
        }
    }

    if crossings % 2 == 1 {
        Location::Interior
    } else {
        Location::Exterior
    }
}

/// Returns true if `point` is inside or on the boundary of the closed `ring`.
#[inline]
pub fn point_in_ring<T>(point: Vector2<T>, ring: &[Vector2<T>]) -> bool
where
    T: Real,
{
    locate_in_ring(point, ring) != Location::Exterior
}

/// Copy of `coords` with consecutive duplicate coordinates removed.
pub fn remove_repeated_points<T>(coords: &[Vector2<T>]) -> Vec<Vector2<T>>
where
    T: Real,
{
    let mut result: Vec<Vector2<T>> = Vec::with_capacity(coords.len());
    for &c in coords {
        if result.last() != Some(&c) {
            result.push(c);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::vec2;

    fn square_cw() -> Vec<Vector2<f64>> {
        vec![
            vec2(0.0, 0.0),
            vec2(0.0, 2.0),
            vec2(2.0, 2.0),
            vec2(2.0, 0.0),
            vec2(0.0, 0.0),
        ]
    }

    #[test]
    fn orientation_of_rings() {
        let cw = square_cw();
        assert!(!is_ccw(&cw));
        assert_eq!(signed_area(&cw), -4.0);
        let ccw: Vec<_> = cw.iter().rev().copied().collect();
        assert!(is_ccw(&ccw));
    }

    #[test]
    fn flat_top_ring() {
        // repeated highest vertex and a flat top edge
        let ring = vec![
            vec2(0.0, 0.0),
            vec2(4.0, 0.0),
            vec2(4.0, 2.0),
            vec2(4.0, 2.0),
            vec2(0.0, 2.0),
            vec2(0.0, 0.0),
        ];
        assert!(is_ccw(&ring));
    }

    #[test]
    fn ring_location() {
        let ring = square_cw();
        assert_eq!(locate_in_ring(vec2(1.0, 1.0), &ring), Location::Interior);
        assert_eq!(locate_in_ring(vec2(0.0, 1.0), &ring), Location::Boundary);
        assert_eq!(locate_in_ring(vec2(2.0, 2.0), &ring), Location::Boundary);
        assert_eq!(locate_in_ring(vec2(1.0, 2.0), &ring), Location::Boundary);
        assert_eq!(locate_in_ring(vec2(3.0, 1.0), &ring), Location::Exterior);
        assert!(point_in_ring(vec2(0.0, 0.0), &ring));
    }

    #[test]
    fn repeated_points_removed() {
        let coords = vec![vec2(0.0, 0.0), vec2(0.0, 0.0), vec2(1.0, 0.0), vec2(1.0, 0.0)];
        assert_eq!(remove_repeated_points(&coords), vec![vec2(0.0, 0.0), vec2(1.0, 0.0)]);
    }
}
