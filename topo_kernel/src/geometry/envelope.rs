use crate::core::{math::Vector2, traits::Real};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Axis aligned bounding rectangle.
///
/// A "null" envelope (see [Envelope::null]) contains nothing and is the identity for
/// [Envelope::expand_to_include].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Envelope<T = f64> {
    pub min_x: T,
    pub min_y: T,
    pub max_x: T,
    pub max_y: T,
}

impl<T> Envelope<T>
where
    T: Real,
{
    /// Envelope from two corners (corners may be given in any order).
    #[inline]
    pub fn new(x1: T, y1: T, x2: T, y2: T) -> Self {
        Self {
            min_x: num_traits::real::Real::min(x1, x2),
            min_y: num_traits::real::Real::min(y1, y2),
            max_x: num_traits::real::Real::max(x1, x2),
            max_y: num_traits::real::Real::max(y1, y2),
        }
    }

    /// Envelope containing nothing.
    #[inline]
    pub fn null() -> Self {
        Self {
            min_x: T::infinity(),
            min_y: T::infinity(),
            max_x: -T::infinity(),
            max_y: -T::infinity(),
        }
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        self.max_x < self.min_x
    }

    #[inline]
    pub fn from_point(p: Vector2<T>) -> Self {
        Self::new(p.x, p.y, p.x, p.y)
    }

    #[inline]
    pub fn from_segment(p0: Vector2<T>, p1: Vector2<T>) -> Self {
        Self::new(p0.x, p0.y, p1.x, p1.y)
    }

    /// Smallest envelope containing all `points`, null if `points` is empty.
    pub fn from_points<'a, I>(points: I) -> Self
    where
        I: IntoIterator<Item = &'a Vector2<T>>,
    {
        let mut result = Self::null();
        for p in points {
            result.expand_to_include(*p);
        }
        result
    }

    pub fn expand_to_include(&mut self, p: Vector2<T>) {
        if self.is_null() {
            *self = Self::from_point(p);
            return;
        }
        self.min_x = num_traits::real::Real::min(self.min_x, p.x);
        self.min_y = num_traits::real::Real::min(self.min_y, p.y);
        self.max_x = num_traits::real::Real::max(self.max_x, p.x);
        self.max_y = num_traits::real::Real::max(self.max_y, p.y);
    }

    pub fn expand_to_include_envelope(&mut self, other: &Self) {
        if other.is_null() {
            return;
        }
        if self.is_null() {
            *self = *other;
            return;
        }
        self.min_x = num_traits::real::Real::min(self.min_x, other.min_x);
        self.min_y = num_traits::real::Real::min(self.min_y, other.min_y);
        self.max_x = num_traits::real::Real::max(self.max_x, other.max_x);
        self.max_y = num_traits::real::Real::max(self.max_y, other.max_y);
    }

    /// Returns true if the envelopes share at least one point (boundaries touching counts).
    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        if self.is_null() || other.is_null() {
            return false;
        }
        !(other.min_x > self.max_x
            || other.max_x < self.min_x
            || other.min_y > self.max_y
            || other.max_y < self.min_y)
    }

    #[inline]
    pub fn intersects_point(&self, p: Vector2<T>) -> bool {
        !self.is_null()
            && p.x >= self.min_x
            && p.x <= self.max_x
            && p.y >= self.min_y
            && p.y <= self.max_y
    }

    /// Returns true if `other` lies entirely inside this envelope (boundaries inclusive).
    #[inline]
    pub fn contains(&self, other: &Self) -> bool {
        if self.is_null() || other.is_null() {
            return false;
        }
        other.min_x >= self.min_x
            && other.max_x <= self.max_x
            && other.min_y >= self.min_y
            && other.max_y <= self.max_y
    }

    #[inline]
    pub fn width(&self) -> T {
        if self.is_null() {
            return T::zero();
        }
        self.max_x - self.min_x
    }

    #[inline]
    pub fn height(&self) -> T {
        if self.is_null() {
            return T::zero();
        }
        self.max_y - self.min_y
    }

    #[inline]
    pub fn area(&self) -> T {
        self.width() * self.height()
    }
}

impl<T> Default for Envelope<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::null()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::vec2;

    #[test]
    fn null_envelope() {
        let mut env = Envelope::<f64>::null();
        assert!(env.is_null());
        assert_eq!(env.area(), 0.0);
        assert!(!env.intersects(&Envelope::new(0.0, 0.0, 1.0, 1.0)));
        env.expand_to_include(vec2(1.0, 2.0));
        assert!(!env.is_null());
        assert_eq!(env, Envelope::new(1.0, 2.0, 1.0, 2.0));
    }

    #[test]
    fn contains_is_inclusive() {
        let outer = Envelope::new(0.0, 0.0, 2.0, 2.0);
        assert!(outer.contains(&Envelope::new(0.0, 0.0, 1.0, 1.0)));
        assert!(outer.contains(&outer));
        assert!(!outer.contains(&Envelope::new(1.0, 1.0, 3.0, 1.5)));
        assert!(outer.intersects(&Envelope::new(2.0, 2.0, 3.0, 3.0)));
    }
}
