//!
//! Compound assignment operators for `NumericArray`
//!
//! Scalar forms (`a += x`) apply the operation to every element in place.
//! Array forms (`a += &b`) apply the operation element-wise and require
//! equal lengths; a length mismatch is a caller error and panics. There is
//! no broadcasting.
//!
//! Division follows the element type's own semantics: IEEE 754 inf/NaN for
//! floats, a panic on division by zero for integers.
//!
use super::NumericArray;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

/// Implement in-place scalar addition, `a += x`
impl<T> AddAssign<T> for NumericArray<T>
where
    T: Copy + Add<Output = T>,
{
    fn add_assign(&mut self, x: T) {
        for v in self.iter_mut() {
            *v = *v + x;
        }
    }
}

/// Implement in-place scalar subtraction, `a -= x`
impl<T> SubAssign<T> for NumericArray<T>
where
    T: Copy + Sub<Output = T>,
{
    fn sub_assign(&mut self, x: T) {
        for v in self.iter_mut() {
            *v = *v - x;
        }
    }
}

/// Implement in-place scalar multiplication, `a *= x`
impl<T> MulAssign<T> for NumericArray<T>
where
    T: Copy + Mul<Output = T>,
{
    fn mul_assign(&mut self, x: T) {
        for v in self.iter_mut() {
            *v = *v * x;
        }
    }
}

/// Implement in-place scalar division, `a /= x`
impl<T> DivAssign<T> for NumericArray<T>
where
    T: Copy + Div<Output = T>,
{
    fn div_assign(&mut self, x: T) {
        for v in self.iter_mut() {
            *v = *v / x;
        }
    }
}

/// Implement element-wise addition with assignment, `a += &b`
/// This does not cause re-allocation
impl<'a, T> AddAssign<&'a NumericArray<T>> for NumericArray<T>
where
    T: Copy + Add<Output = T>,
{
    fn add_assign(&mut self, other: &'a NumericArray<T>) {
        assert_eq!(self.len(), other.len());
        for i in 0..self.len() {
            self[i] = self[i] + other[i];
        }
    }
}

/// Implement element-wise subtraction with assignment, `a -= &b`
/// This does not cause re-allocation
impl<'a, T> SubAssign<&'a NumericArray<T>> for NumericArray<T>
where
    T: Copy + Sub<Output = T>,
{
    fn sub_assign(&mut self, other: &'a NumericArray<T>) {
        assert_eq!(self.len(), other.len());
        for i in 0..self.len() {
            self[i] = self[i] - other[i];
        }
    }
}

/// Implement element-wise multiplication with assignment, `a *= &b`
/// This does not cause re-allocation
impl<'a, T> MulAssign<&'a NumericArray<T>> for NumericArray<T>
where
    T: Copy + Mul<Output = T>,
{
    fn mul_assign(&mut self, other: &'a NumericArray<T>) {
        assert_eq!(self.len(), other.len());
        for i in 0..self.len() {
            self[i] = self[i] * other[i];
        }
    }
}

/// Implement element-wise division with assignment, `a /= &b`
/// This does not cause re-allocation
impl<'a, T> DivAssign<&'a NumericArray<T>> for NumericArray<T>
where
    T: Copy + Div<Output = T>,
{
    fn div_assign(&mut self, other: &'a NumericArray<T>) {
        assert_eq!(self.len(), other.len());
        for i in 0..self.len() {
            self[i] = self[i] / other[i];
        }
    }
}
