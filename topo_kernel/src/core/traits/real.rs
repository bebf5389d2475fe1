use super::FuzzyOrd;
use static_aabb2d_index::IndexableNum;

/// Trait representing a real number (e.g. 1.1, -3.5, etc.) that can be fuzzy compared and ordered.
///
/// All geometry in this crate is generic over this trait, `f64` is the default everywhere a
/// default type parameter is allowed.
pub trait Real:
    num_traits::real::Real
    + num_traits::Bounded
    + FuzzyOrd
    + std::default::Default
    + std::fmt::Debug
    + IndexableNum
    + 'static
{
    fn two() -> Self;

    fn half() -> Self;

    fn infinity() -> Self;

    fn nan() -> Self;

    fn is_nan(self) -> bool;

    fn is_infinite(self) -> bool;

    /// Lossy conversion used to feed exact predicates which operate on `f64`.
    fn as_f64(self) -> f64;

    /// Conversion from a constant, used for default option values.
    fn from_f64(value: f64) -> Self;

    #[inline]
    fn min_value() -> Self {
        num_traits::real::Real::min_value()
    }

    #[inline]
    fn max_value() -> Self {
        num_traits::real::Real::max_value()
    }
}

macro_rules! impl_real {
    ($ty:ty) => {
        impl Real for $ty {
            #[inline]
            fn two() -> Self {
                2.0
            }

            #[inline]
            fn half() -> Self {
                0.5
            }

            #[inline]
            fn infinity() -> Self {
                <$ty>::INFINITY
            }

            #[inline]
            fn nan() -> Self {
                <$ty>::NAN
            }

            #[inline]
            fn is_nan(self) -> bool {
                <$ty>::is_nan(self)
            }

            #[inline]
            fn is_infinite(self) -> bool {
                <$ty>::is_infinite(self)
            }

            #[inline]
            fn as_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn from_f64(value: f64) -> Self {
                value as $ty
            }
        }
    };
}

impl_real!(f32);
impl_real!(f64);
