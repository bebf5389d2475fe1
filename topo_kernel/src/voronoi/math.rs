use crate::core::{math::Vector2, traits::Real};
use crate::error::{err_coord, TopologyError, TopologyResult};

/// Fixed epsilon used by the sweep for near equal sweep positions and parabola parameters.
#[inline]
pub(crate) fn sweep_eps<T: Real>() -> T {
    T::from_f64(1e-10)
}

/// Round to 10 decimal places, applied to breakpoint positions so tiny round off differences do
/// not flip the search direction in the beachline.
#[inline]
pub(crate) fn round10<T: Real>(value: T) -> T {
    let scale = T::from_f64(1e10);
    let scaled = value * scale;
    if scaled.is_nan() || scaled.is_infinite() {
        return value;
    }
    scaled.round() / scale
}

/// Orientation of `p0 -> p1 -> p2`: `1` for a counter clockwise turn, `-1` for clockwise or when
/// `p2` lies behind `p0` on the line through `p0` and `p1`, otherwise `0`.
pub fn ccw<T>(p0: Vector2<T>, p1: Vector2<T>, p2: Vector2<T>, plus_one_on_zero_degrees: bool) -> i32
where
    T: Real,
{
    let dx1 = p1.x - p0.x;
    let dy1 = p1.y - p0.y;
    let dx2 = p2.x - p0.x;
    let dy2 = p2.y - p0.y;

    if dx1 * dy2 > dy1 * dx2 {
        return 1;
    }
    if dx1 * dy2 < dy1 * dx2 {
        return -1;
    }
    if dx1 * dx2 < T::zero() || dy1 * dy2 < T::zero() {
        return -1;
    }
    if plus_one_on_zero_degrees && dx1 * dx1 + dy1 * dy1 < dx2 * dx2 + dy2 * dy2 {
        return 1;
    }

    0
}

/// Center of the circle through three distinct points.
///
/// # Examples
///
/// ```
/// # use topo_kernel::voronoi::circumcircle_center;
/// # use topo_kernel::core::math::Vector2;
/// let c = circumcircle_center(
///     Vector2::new(0.0, 0.0),
///     Vector2::new(2.0, 0.0),
///     Vector2::new(0.0, 2.0),
/// )
/// .unwrap();
/// assert_eq!(c, Vector2::new(1.0, 1.0));
/// ```
pub fn circumcircle_center<T>(a: Vector2<T>, b: Vector2<T>, c: Vector2<T>) -> TopologyResult<Vector2<T>>
where
    T: Real,
{
    if a == b || b == c || a == c {
        return Err(TopologyError::CoincidentCircumcirclePoints);
    }

    // intersection of the perpendicular bisectors of a-c and b-c
    let tx = (a.x + c.x) * T::half();
    let ty = (a.y + c.y) * T::half();
    let vx = (b.x + c.x) * T::half();
    let vy = (b.y + c.y) * T::half();

    let (ux, uy) = if a.x == c.x {
        (T::one(), T::zero())
    } else {
        ((c.y - a.y) / (a.x - c.x), T::one())
    };

    let (wx, wy) = if b.x == c.x {
        (-T::one(), T::zero())
    } else {
        ((b.y - c.y) / (b.x - c.x), -T::one())
    };

    let alpha = (wy * (vx - tx) - wx * (vy - ty)) / (ux * wy - wx * uy);
    Ok(Vector2::new(tx + alpha * ux, ty + alpha * uy))
}

/// X position of the breakpoint between the parabolas with foci `p1` and `p2` for the sweep
/// line at `ys`. Of the two intersections the one to the right of the lower focus is returned.
pub fn parabolic_cut<T>(p1: Vector2<T>, p2: Vector2<T>, ys: T) -> TopologyResult<T>
where
    T: Real,
{
    let eps = sweep_eps::<T>();
    let (x1, y1, x2, y2) = (p1.x, p1.y, p2.x, p2.y);

    if (x1 - x2).abs() < eps && (y1 - y2).abs() < eps {
        return Err(TopologyError::CoincidentParabolaFoci { at: err_coord(p1) });
    }

    let on_sweep1 = (y1 - ys).abs() < eps;
    let on_sweep2 = (y2 - ys).abs() < eps;
    if on_sweep1 && on_sweep2 {
        return Ok((x1 + x2) * T::half());
    }
    if on_sweep1 {
        return Ok(x1);
    }
    if on_sweep2 {
        return Ok(x2);
    }

    let two = T::two();
    let four = two * two;
    let a1 = T::one() / (two * (y1 - ys));
    let a2 = T::one() / (two * (y2 - ys));
    if (a1 - a2).abs() < eps {
        return Ok((x1 + x2) * T::half());
    }

    let discriminant = -two * four * a1 * x1 * a2 * x2 - two * a1 * y1 + two * a1 * y2
        + four * a1 * a2 * x2 * x2
        + two * a2 * y1
        + four * a2 * a1 * x1 * x1
        - two * a2 * y2;
    let root = discriminant.sqrt();
    let factor = T::half() / (two * a1 - two * a2);
    let base = four * a1 * x1 - four * a2 * x2;

    let mut xs1 = round10(factor * (base + two * root));
    let mut xs2 = round10(factor * (base - two * root));
    if xs1 > xs2 {
        std::mem::swap(&mut xs1, &mut xs2);
    }

    if y1 >= y2 {
        Ok(xs2)
    } else {
        Ok(xs1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::vec2;

    #[test]
    fn ccw_turns() {
        let a = vec2(0.0, 0.0);
        let b = vec2(1.0, 0.0);
        assert_eq!(ccw(a, b, vec2(1.0, 1.0), false), 1);
        assert_eq!(ccw(a, b, vec2(1.0, -1.0), false), -1);
        assert_eq!(ccw(a, b, vec2(-1.0, 0.0), false), -1);
        assert_eq!(ccw(a, b, vec2(2.0, 0.0), false), 0);
        assert_eq!(ccw(a, b, vec2(2.0, 0.0), true), 1);
    }

    #[test]
    fn circumcircle_requires_distinct_points() {
        let a = vec2(0.0, 0.0);
        assert_eq!(
            circumcircle_center(a, a, vec2(1.0, 0.0)),
            Err(TopologyError::CoincidentCircumcirclePoints)
        );
        let c = circumcircle_center(vec2(0.0, 0.0), vec2(4.0, 0.0), vec2(4.0, 2.0)).unwrap();
        assert_eq!(c, vec2(2.0, 1.0));
    }

    #[test]
    fn breakpoint_between_symmetric_foci() {
        let x = parabolic_cut(vec2(0.0, 0.0), vec2(2.0, 0.0), 1.0).unwrap();
        assert_eq!(x, 1.0);
        // focus on the sweep line, its parabola is a vertical ray
        let x = parabolic_cut(vec2(0.0, 0.0), vec2(3.0, 1.0), 1.0).unwrap();
        assert_eq!(x, 3.0);
        assert!(parabolic_cut(vec2(1.0, 1.0), vec2(1.0, 1.0), 2.0).is_err());
    }

    #[test]
    fn breakpoint_is_equidistant() {
        let p1 = vec2(0.0, 0.0);
        let p2 = vec2(3.0, 1.0);
        let ys: f64 = 4.0;
        let x = parabolic_cut(p1, p2, ys).unwrap();
        // the breakpoint is the point on the parabola of p1 at x
        let y = ((x - p1.x) * (x - p1.x) + p1.y * p1.y - ys * ys) / (2.0 * (p1.y - ys));
        let pt = vec2(x, y);
        let d1 = pt.distance(p1);
        let d2 = pt.distance(p2);
        assert!((d1 - d2).abs() < 1e-8);
        assert!((d1 - (ys - y)).abs() < 1e-8);
    }
}
