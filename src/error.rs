//! Failures of the checked vector operations.
use std::{error, fmt, result};

pub type Result<T> = result::Result<T, Vec3Error>;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Vec3Error {
    /// Component index outside of `0..=2`.
    IndexOutOfRange { index: usize },
    /// Integer division by a zero scalar.
    DivideByZero,
    /// Integer division that cannot be represented, i.e. `MIN / -1`.
    Overflow,
    /// Normalizing a vector whose length is zero.
    ZeroLength,
}

impl fmt::Display for Vec3Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Vec3Error::IndexOutOfRange { index } => write!(
                f, "component index {} is out of range, expected 0, 1 or 2", index
            ),
            Vec3Error::DivideByZero => write!(f, "attempt to divide a vector by zero"),
            Vec3Error::Overflow => write!(f, "vector division overflowed its scalar type"),
            Vec3Error::ZeroLength => write!(f, "cannot normalize a zero length vector"),
        }
    }
}

impl error::Error for Vec3Error { }
