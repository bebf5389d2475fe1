use super::Vector2;
use crate::core::traits::Real;

/// Returns the (min, max) values from `v1` and `v2`.
///
/// # Examples
///
/// ```
/// # use topo_kernel::core::math::*;
/// let (min_val, max_val) = min_max(8, 4);
/// assert_eq!(min_val, 4);
/// assert_eq!(max_val, 8);
/// ```
#[inline]
pub fn min_max<T>(v1: T, v2: T) -> (T, T)
where
    T: PartialOrd,
{
    if v1 < v2 {
        (v1, v2)
    } else {
        (v2, v1)
    }
}

/// Distance squared between the points `p0` and `p1`.
#[inline]
pub fn dist_squared<T>(p0: Vector2<T>, p1: Vector2<T>) -> T
where
    T: Real,
{
    let d = p0 - p1;
    d.dot(d)
}

/// Midpoint of a line segment defined by `p0` to `p1`.
#[inline]
pub fn midpoint<T>(p0: Vector2<T>, p1: Vector2<T>) -> Vector2<T>
where
    T: Real,
{
    Vector2::new((p0.x + p1.x) * T::half(), (p0.y + p1.y) * T::half())
}

/// Returns the orientation of `q` relative to the directed line `p1 -> p2` using an exact
/// predicate.
///
/// Returns `1` if `q` is left (counter clockwise turn), `-1` if right (clockwise turn) and `0` if
/// the three points are collinear.
///
/// # Examples
///
/// ```
/// # use topo_kernel::core::math::*;
/// let p1 = Vector2::new(0.0, 0.0);
/// let p2 = Vector2::new(1.0, 0.0);
/// assert_eq!(orientation_index(p1, p2, Vector2::new(0.5, 1.0)), 1);
/// assert_eq!(orientation_index(p1, p2, Vector2::new(0.5, -1.0)), -1);
/// assert_eq!(orientation_index(p1, p2, Vector2::new(7.0, 0.0)), 0);
/// ```
#[inline]
pub fn orientation_index<T>(p1: Vector2<T>, p2: Vector2<T>, q: Vector2<T>) -> i32
where
    T: Real,
{
    let det = robust::orient2d(
        robust::Coord {
            x: p1.x.as_f64(),
            y: p1.y.as_f64(),
        },
        robust::Coord {
            x: p2.x.as_f64(),
            y: p2.y.as_f64(),
        },
        robust::Coord {
            x: q.x.as_f64(),
            y: q.y.as_f64(),
        },
    );

    if det > 0.0 {
        1
    } else if det < 0.0 {
        -1
    } else {
        0
    }
}

/// Returns the closest point on the line segment from `p0` to `p1` to the `point` given.
#[inline]
pub fn seg_closest_point<T>(p0: Vector2<T>, p1: Vector2<T>, point: Vector2<T>) -> Vector2<T>
where
    T: Real,
{
    // Dot product used to find angles
    // See: http://geomalgorithms.com/a02-_lines.html
    let v = p1 - p0;
    let w = point - p0;
    let c1 = w.dot(v);
    if c1 <= T::zero() {
        return p0;
    }

    let c2 = v.length_squared();
    if c2 <= c1 {
        return p1;
    }

    let b = c1 / c2;
    p0 + v.scale(b)
}

/// Distance from `point` to the line segment `p0` to `p1`.
#[inline]
pub fn seg_point_distance<T>(p0: Vector2<T>, p1: Vector2<T>, point: Vector2<T>) -> T
where
    T: Real,
{
    dist_squared(seg_closest_point(p0, p1, point), point).sqrt()
}

/// Perpendicular distance from `point` to the infinite line through `p0` and `p1`.
///
/// If `p0 == p1` the point distance to `p0` is returned.
#[inline]
pub fn line_point_distance<T>(p0: Vector2<T>, p1: Vector2<T>, point: Vector2<T>) -> T
where
    T: Real,
{
    let v = p1 - p0;
    let len = v.length();
    if len == T::zero() {
        return point.distance(p0);
    }

    (v.perp_dot(point - p0) / len).abs()
}

/// Computes a monotonic "distance" of the `point` (which must lie on the segment) along the
/// segment `p0` to `p1`.
///
/// This is not a euclidean distance, it is the larger of the x/y deltas which is robust and
/// sufficient for ordering several points on the same segment.
#[inline]
pub fn edge_distance<T>(point: Vector2<T>, p0: Vector2<T>, p1: Vector2<T>) -> T
where
    T: Real,
{
    let dx = (p1.x - p0.x).abs();
    let dy = (p1.y - p0.y).abs();

    if point == p0 {
        return T::zero();
    }

    if point == p1 {
        return if dx > dy { dx } else { dy };
    }

    let pdx = (point.x - p0.x).abs();
    let pdy = (point.y - p0.y).abs();
    let dist = if dx > dy { pdx } else { pdy };
    if dist == T::zero() {
        // hack to ensure that non-endpoints always have a non-zero distance
        return num_traits::real::Real::max(pdx, pdy);
    }

    dist
}

/// Tests if `q` lies within the axis aligned bounding box of `p1` and `p2` (inclusive).
#[inline]
pub fn point_in_seg_bounds<T>(p1: Vector2<T>, p2: Vector2<T>, q: Vector2<T>) -> bool
where
    T: Real,
{
    let (min_x, max_x) = min_max(p1.x, p2.x);
    let (min_y, max_y) = min_max(p1.y, p2.y);
    q.x >= min_x && q.x <= max_x && q.y >= min_y && q.y <= max_y
}
