use super::Envelope;
use crate::core::{
    math::{
        line_point_distance, midpoint, orientation_index, seg_closest_point, seg_point_distance,
        seg_seg_intr, SegSegIntr, Vector2,
    },
    traits::Real,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A line segment from `p0` to `p1`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LineSegment<T = f64> {
    pub p0: Vector2<T>,
    pub p1: Vector2<T>,
}

impl<T> LineSegment<T>
where
    T: Real,
{
    #[inline]
    pub fn new(p0: Vector2<T>, p1: Vector2<T>) -> Self {
        Self { p0, p1 }
    }

    #[inline]
    pub fn length(&self) -> T {
        self.p0.distance(self.p1)
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.p0 == self.p1
    }

    #[inline]
    pub fn reversed(&self) -> Self {
        Self::new(self.p1, self.p0)
    }

    #[inline]
    pub fn midpoint(&self) -> Vector2<T> {
        midpoint(self.p0, self.p1)
    }

    #[inline]
    pub fn envelope(&self) -> Envelope<T> {
        Envelope::from_segment(self.p0, self.p1)
    }

    /// Orientation of `point` relative to this segment, see
    /// [orientation_index](crate::core::math::orientation_index).
    #[inline]
    pub fn orientation_index(&self, point: Vector2<T>) -> i32 {
        orientation_index(self.p0, self.p1, point)
    }

    /// Euclidean distance from `point` to this segment.
    #[inline]
    pub fn distance_to_point(&self, point: Vector2<T>) -> T {
        seg_point_distance(self.p0, self.p1, point)
    }

    /// Perpendicular distance from `point` to the line this segment lies on.
    #[inline]
    pub fn distance_perpendicular(&self, point: Vector2<T>) -> T {
        line_point_distance(self.p0, self.p1, point)
    }

    /// Parametric factor of the projection of `point` onto the line through this segment
    /// (`0` at `p0`, `1` at `p1`, unclamped).
    pub fn project_factor(&self, point: Vector2<T>) -> T {
        if point == self.p0 {
            return T::zero();
        }
        if point == self.p1 {
            return T::one();
        }
        let v = self.p1 - self.p0;
        let len2 = v.length_squared();
        if len2 == T::zero() {
            return T::zero();
        }
        (point - self.p0).dot(v) / len2
    }

    #[inline]
    pub fn closest_point(&self, point: Vector2<T>) -> Vector2<T> {
        seg_closest_point(self.p0, self.p1, point)
    }

    #[inline]
    pub fn intersection(&self, other: &Self) -> SegSegIntr<T> {
        seg_seg_intr(self.p0, self.p1, other.p0, other.p1)
    }
}
