use crate::core::traits::Real;
use std::ops;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Two dimensional vector/point, used for every coordinate in the crate.
///
/// Equality via `PartialEq` is exact, tolerance aware comparisons go through
/// [Vector2::fuzzy_eq_eps] with the tolerance threaded in by the caller.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Vector2<T = f64> {
    pub x: T,
    pub y: T,
}

impl<T> Vector2<T>
where
    T: Real,
{
    /// Create a new vector with x and y components.
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        Vector2 { x, y }
    }

    /// Create a zero vector (x = 0, y = 0).
    #[inline]
    pub fn zero() -> Self {
        Vector2::new(T::zero(), T::zero())
    }

    /// Sentinel used for a voronoi vertex at infinity.
    #[inline]
    pub fn infinite() -> Self {
        Vector2::new(T::infinity(), T::infinity())
    }

    /// Sentinel used for a not yet known voronoi vertex.
    #[inline]
    pub fn unknown() -> Self {
        Vector2::new(T::nan(), T::nan())
    }

    #[inline]
    pub fn is_infinite(&self) -> bool {
        self.x.is_infinite() || self.y.is_infinite()
    }

    #[inline]
    pub fn is_unknown(&self) -> bool {
        self.x.is_nan() || self.y.is_nan()
    }

    /// Uniformly scale the vector by `scale_factor`.
    #[inline]
    pub fn scale(&self, scale_factor: T) -> Self {
        vec2(scale_factor * self.x, scale_factor * self.y)
    }

    /// Dot product.
    #[inline]
    pub fn dot(&self, other: Self) -> T {
        self.x * other.x + self.y * other.y
    }

    /// Compute the perpendicular dot product (`self.x * other.y - self.y * other.x`).
    #[inline]
    pub fn perp_dot(&self, other: Self) -> T {
        self.x * other.y - self.y * other.x
    }

    /// Squared length of the vector.
    #[inline]
    pub fn length_squared(&self) -> T {
        self.dot(*self)
    }

    /// Length of the vector.
    #[inline]
    pub fn length(&self) -> T {
        self.dot(*self).sqrt()
    }

    /// Distance to another point.
    #[inline]
    pub fn distance(&self, other: Self) -> T {
        (*self - other).length()
    }

    /// Normalize the vector (length = 1).
    #[inline]
    pub fn normalize(&self) -> Self {
        self.scale(T::one() / self.length())
    }

    /// Tolerance aware equality, each component is compared with `fuzzy_epsilon` (inclusive, so
    /// `0.0` is exact equality).
    #[inline]
    pub fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: T) -> bool {
        self.x.fuzzy_eq_eps(other.x, fuzzy_epsilon) && self.y.fuzzy_eq_eps(other.y, fuzzy_epsilon)
    }

    #[inline]
    pub fn fuzzy_eq(&self, other: Self) -> bool {
        self.fuzzy_eq_eps(other, T::fuzzy_epsilon())
    }

    /// Lexicographic compare by x then y, total for non NaN values.
    #[inline]
    pub fn cmp_xy(&self, other: &Self) -> std::cmp::Ordering {
        self.x
            .partial_cmp(&other.x)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| {
                self.y
                    .partial_cmp(&other.y)
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
    }
}

#[inline(always)]
pub fn vec2<T>(x: T, y: T) -> Vector2<T>
where
    T: Real,
{
    Vector2::new(x, y)
}

macro_rules! ImplBinaryOp {
    ($op_trait:ident, $op_func:ident, $op:tt) => {
        impl<T: Real> ops::$op_trait<Vector2<T>> for Vector2<T> {
            type Output = Vector2<T>;
            fn $op_func(self, rhs: Vector2<T>) -> Self::Output {
                Vector2::new(self.x $op rhs.x, self.y $op rhs.y)
            }
        }

        impl<'a, T: Real> ops::$op_trait<&'a Vector2<T>> for &'a Vector2<T> {
            type Output = Vector2<T>;
            fn $op_func(self, rhs: &'a Vector2<T>) -> Self::Output {
                Vector2::new(self.x $op rhs.x, self.y $op rhs.y)
            }
        }
    };
}

ImplBinaryOp!(Add, add, +);
ImplBinaryOp!(Sub, sub, -);

impl<T: Real> ops::Neg for Vector2<T> {
    type Output = Vector2<T>;
    fn neg(self) -> Self::Output {
        Vector2::new(-self.x, -self.y)
    }
}

impl<T: Real> ops::Mul<T> for Vector2<T> {
    type Output = Vector2<T>;
    fn mul(self, rhs: T) -> Self::Output {
        self.scale(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ops() {
        let v1 = vec2(4.0, 5.0);
        let v2 = vec2(1.0, 2.0);
        assert_eq!(v1 + v2, vec2(5.0, 7.0));
        assert_eq!(&v1 - &v2, vec2(3.0, 3.0));
        assert_eq!(-v2, vec2(-1.0, -2.0));
        assert_eq!(v2 * 2.0, vec2(2.0, 4.0));
        assert_eq!(v1.perp_dot(v2), 3.0);
    }

    #[test]
    fn sentinels() {
        assert!(Vector2::<f64>::infinite().is_infinite());
        assert!(Vector2::<f64>::unknown().is_unknown());
        assert!(!Vector2::<f64>::unknown().is_infinite());
        assert!(!vec2(1.0, 2.0).is_unknown());
    }

    #[test]
    fn zero_tolerance_is_exact() {
        let a = vec2(1.0, 1.0);
        let b = vec2(1.0 + 1e-12, 1.0);
        assert!(!a.fuzzy_eq_eps(b, 0.0));
        assert!(a.fuzzy_eq_eps(b, 1e-9));
        assert!(a.fuzzy_eq_eps(a, 0.0));
    }
}
