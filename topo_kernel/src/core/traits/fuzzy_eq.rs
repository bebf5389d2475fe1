/// Trait for tolerance aware equality comparisons with floating point numbers.
///
/// The tolerance is inclusive: values whose difference is at most epsilon are equal, so an
/// epsilon of zero is exact equality.
///
/// # Examples
///
/// ```
/// # use topo_kernel::core::traits::*;
/// let a = 0.1 + 0.2;
/// let b = 0.3;
/// assert_ne!(a, b);
/// assert!(a.fuzzy_eq(b));
/// // zero tolerance is exact
/// assert!(!a.fuzzy_eq_eps(b, 0.0));
/// assert!(a.fuzzy_eq_eps(a, 0.0));
/// ```
pub trait FuzzyEq: Sized + Copy {
    /// Returns the default epsilon value for fuzzy comparisons.
    fn fuzzy_epsilon() -> Self;

    /// Returns `true` if `|self - other| <= fuzzy_epsilon`.
    fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: Self) -> bool;

    /// Same as [FuzzyEq::fuzzy_eq_eps] using [FuzzyEq::fuzzy_epsilon].
    #[inline]
    fn fuzzy_eq(&self, other: Self) -> bool {
        self.fuzzy_eq_eps(other, Self::fuzzy_epsilon())
    }

    /// Returns `true` if `|self| <= fuzzy_epsilon`.
    fn fuzzy_eq_zero_eps(&self, fuzzy_epsilon: Self) -> bool;

    #[inline]
    fn fuzzy_eq_zero(&self) -> bool {
        self.fuzzy_eq_zero_eps(Self::fuzzy_epsilon())
    }
}

macro_rules! impl_fuzzy_eq {
    ($ty:ty, $eps:expr) => {
        impl FuzzyEq for $ty {
            #[inline]
            fn fuzzy_epsilon() -> Self {
                $eps
            }
            #[inline]
            fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: Self) -> bool {
                *self == other || (*self - other).abs() <= fuzzy_epsilon
            }
            #[inline]
            fn fuzzy_eq_zero_eps(&self, fuzzy_epsilon: Self) -> bool {
                self.abs() <= fuzzy_epsilon
            }
        }
    };
}

impl_fuzzy_eq!(f32, 1.0e-6);
impl_fuzzy_eq!(f64, 1.0e-10);
