//!
//! `approx` comparison impls for `NumericArray`
//!
//! Two arrays are approximately equal when their lengths match and every
//! pair of same-index elements is approximately equal. Used with
//! `assert_abs_diff_eq!` and friends in tests of float arrays.
//!
use super::NumericArray;
use ::approx::{AbsDiffEq, RelativeEq};

/// for approx `assert_abs_diff_eq`
impl<T> AbsDiffEq for NumericArray<T>
where
    T: AbsDiffEq + Copy,
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other.iter())
                .all(|(a, b)| T::abs_diff_eq(a, b, epsilon))
    }
}

/// for approx `assert_relative_eq`
impl<T> RelativeEq for NumericArray<T>
where
    T: RelativeEq + Copy,
    T::Epsilon: Copy,
{
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other.iter())
                .all(|(a, b)| T::relative_eq(a, b, epsilon, max_relative))
    }
}
