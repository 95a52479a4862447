//! Operator overloads. Everything is componentwise; `Vec3 * Vec3` is the Hadamard product,
//! use [`super::dot`] or [`super::cross`] for the others.
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use crate::error::Vec3Error;
use crate::numeric::Scalar;

use super::Vec3;

/// Panics on an index outside `0..=2`. [`Vec3::get`] is the non panicking version.
impl<T> Index<usize> for Vec3<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        match self.data.get(index) {
            Some(component) => component,
            None => panic!("{}", Vec3Error::IndexOutOfRange { index }),
        }
    }
}

impl<T> IndexMut<usize> for Vec3<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.data.get_mut(index) {
            Some(component) => component,
            None => panic!("{}", Vec3Error::IndexOutOfRange { index }),
        }
    }
}

impl<T: Scalar + Neg<Output = T>> Neg for Vec3<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Vec3::new(-self.data[0], -self.data[1], -self.data[2])
    }
}

impl<T: Scalar> Add for Vec3<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Vec3::new(
            self.data[0] + rhs.data[0],
            self.data[1] + rhs.data[1],
            self.data[2] + rhs.data[2],
        )
    }
}

impl<T: Scalar> Sub for Vec3<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Vec3::new(
            self.data[0] - rhs.data[0],
            self.data[1] - rhs.data[1],
            self.data[2] - rhs.data[2],
        )
    }
}

impl<T: Scalar> Mul for Vec3<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Vec3::new(
            self.data[0] * rhs.data[0],
            self.data[1] * rhs.data[1],
            self.data[2] * rhs.data[2],
        )
    }
}

impl<T: Scalar> Mul<T> for Vec3<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        Vec3::new(self.data[0] * rhs, self.data[1] * rhs, self.data[2] * rhs)
    }
}

/// Floats multiply by `1 / rhs`, integers divide and panic on a zero `rhs`.
impl<T: Scalar> Div<T> for Vec3<T> {
    type Output = Self;

    fn div(self, rhs: T) -> Self {
        Vec3 { data: T::div_components(self.data, rhs) }
    }
}

impl<T: Scalar> AddAssign for Vec3<T> {
    fn add_assign(&mut self, rhs: Self) {
        self.data[0] += rhs.data[0];
        self.data[1] += rhs.data[1];
        self.data[2] += rhs.data[2];
    }
}

impl<T: Scalar> SubAssign for Vec3<T> {
    fn sub_assign(&mut self, rhs: Self) {
        self.data[0] -= rhs.data[0];
        self.data[1] -= rhs.data[1];
        self.data[2] -= rhs.data[2];
    }
}

impl<T: Scalar> MulAssign<T> for Vec3<T> {
    fn mul_assign(&mut self, rhs: T) {
        self.data[0] *= rhs;
        self.data[1] *= rhs;
        self.data[2] *= rhs;
    }
}

impl<T: Scalar> DivAssign<T> for Vec3<T> {
    fn div_assign(&mut self, rhs: T) {
        self.data = T::div_components(self.data, rhs);
    }
}

// Scalar on the left. Coherence won't allow a blanket impl over a foreign `T`.
macro_rules! scalar_lhs_mul {
    ($($t:ty),*) => {$(
        impl Mul<Vec3<$t>> for $t {
            type Output = Vec3<$t>;

            #[inline]
            fn mul(self, rhs: Vec3<$t>) -> Vec3<$t> {
                rhs * self
            }
        }
    )*};
}

scalar_lhs_mul!(f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
