//! Numeric traits
use std::fmt::{Debug, Display};

use num_traits::{Float, NumAssign, NumCast};

use crate::error::{Result, Vec3Error};

pub trait Number: Copy + Clone + Debug + NumAssign + NumCast { }

impl <T> Number for T
where T: Copy + Clone + Debug + NumAssign + NumCast
{
}

/// Our lovable IEEE 754
pub trait Floater: Number + Float { }

impl <T> Floater for T
where T: Number + Float
{
}

/// A primitive scalar that can sit in a vector component.
///
/// Implemented for every primitive integer and float. Division is where the two families
/// part ways: floats multiply by the reciprocal of the divisor and let IEEE 754 sort out a
/// zero divisor, integers divide each component for real.
pub trait Scalar: Number + PartialOrd + Default + Display {
    /// Lossy widening into `f64` for lengths and dot products.
    fn widen(self) -> f64;

    /// Divide each component by `divisor`. Integer zero divisors panic.
    fn div_components(components: [Self; 3], divisor: Self) -> [Self; 3];

    /// As `div_components` but integer failures come back as errors.
    fn checked_div_components(components: [Self; 3], divisor: Self) -> Result<[Self; 3]>;
}

macro_rules! float_scalar {
    ($($t:ty),*) => {$(
        impl Scalar for $t {
            #[inline]
            fn widen(self) -> f64 {
                self as f64
            }

            #[inline]
            fn div_components(components: [Self; 3], divisor: Self) -> [Self; 3] {
                let recip = 1.0 / divisor;
                [components[0] * recip, components[1] * recip, components[2] * recip]
            }

            #[inline]
            fn checked_div_components(
                components: [Self; 3], divisor: Self
            ) -> Result<[Self; 3]> {
                Ok(Self::div_components(components, divisor))
            }
        }
    )*};
}

macro_rules! integer_scalar {
    ($($t:ty),*) => {$(
        impl Scalar for $t {
            #[inline]
            fn widen(self) -> f64 {
                self as f64
            }

            #[inline]
            fn div_components(components: [Self; 3], divisor: Self) -> [Self; 3] {
                [components[0] / divisor, components[1] / divisor, components[2] / divisor]
            }

            fn checked_div_components(
                components: [Self; 3], divisor: Self
            ) -> Result<[Self; 3]> {
                if divisor == 0 {
                    return Err(Vec3Error::DivideByZero);
                }
                match (
                    components[0].checked_div(divisor),
                    components[1].checked_div(divisor),
                    components[2].checked_div(divisor),
                ) {
                    (Some(x), Some(y), Some(z)) => Ok([x, y, z]),
                    _ => Err(Vec3Error::Overflow),
                }
            }
        }
    )*};
}

float_scalar!(f32, f64);
integer_scalar!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
