use super::FuzzyEq;

/// Tolerance aware ordering, values within tolerance of each other are treated as tied.
pub trait FuzzyOrd: FuzzyEq {
    /// `self > other` and not within `fuzzy_epsilon` of it.
    fn fuzzy_gt_eps(&self, other: Self, fuzzy_epsilon: Self) -> bool;

    #[inline]
    fn fuzzy_gt(&self, other: Self) -> bool {
        self.fuzzy_gt_eps(other, Self::fuzzy_epsilon())
    }

    /// `self < other` and not within `fuzzy_epsilon` of it.
    fn fuzzy_lt_eps(&self, other: Self, fuzzy_epsilon: Self) -> bool;

    #[inline]
    fn fuzzy_lt(&self, other: Self) -> bool {
        self.fuzzy_lt_eps(other, Self::fuzzy_epsilon())
    }

    /// Three way compare where values within `fuzzy_epsilon` compare equal.
    ///
    /// # Examples
    ///
    /// ```
    /// # use topo_kernel::core::traits::*;
    /// use std::cmp::Ordering;
    /// assert_eq!(1.0f64.fuzzy_cmp_eps(1.05, 0.1), Ordering::Equal);
    /// assert_eq!(1.0f64.fuzzy_cmp_eps(1.05, 0.0), Ordering::Less);
    /// assert_eq!(2.0f64.fuzzy_cmp_eps(1.0, 0.1), Ordering::Greater);
    /// ```
    #[inline]
    fn fuzzy_cmp_eps(&self, other: Self, fuzzy_epsilon: Self) -> std::cmp::Ordering {
        if self.fuzzy_lt_eps(other, fuzzy_epsilon) {
            std::cmp::Ordering::Less
        } else if self.fuzzy_gt_eps(other, fuzzy_epsilon) {
            std::cmp::Ordering::Greater
        } else {
            std::cmp::Ordering::Equal
        }
    }
}

macro_rules! impl_fuzzy_ord {
    ($ty:ty) => {
        impl FuzzyOrd for $ty {
            #[inline]
            fn fuzzy_gt_eps(&self, other: $ty, fuzzy_epsilon: $ty) -> bool {
                *self > other && !self.fuzzy_eq_eps(other, fuzzy_epsilon)
            }
            #[inline]
            fn fuzzy_lt_eps(&self, other: $ty, fuzzy_epsilon: $ty) -> bool {
                *self < other && !self.fuzzy_eq_eps(other, fuzzy_epsilon)
            }
        }
    };
}

impl_fuzzy_ord!(f32);
impl_fuzzy_ord!(f64);
