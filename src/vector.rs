//! Three numbers over 3-space. Direction or position, it's the same bunch.
use std::fmt;
use std::slice;

use log::{debug, trace};
use num_traits::NumCast;

use crate::error::{Result, Vec3Error};
use crate::numeric::{Floater, Scalar};

mod interop;
mod ops;

/// A three component vector. Components are stored in `x, y, z` order and are always all
/// present. Copy it around freely, it's only ever three scalars.
///
/// Integer vectors divide for real, float vectors divide by multiplying with the reciprocal.
/// See [`Scalar`] for the details.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Vec3<T> {
    data: [T; 3],
}

/// Same as a vector. The name is there to say what you mean at the call site.
pub type Point3<T> = Vec3<T>;

impl<T> Vec3<T> {
    pub const fn new(x: T, y: T, z: T) -> Self {
        Vec3 { data: [x, y, z] }
    }

    pub fn as_array(&self) -> &[T; 3] {
        &self.data
    }

    pub fn into_array(self) -> [T; 3] {
        self.data
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.data.iter()
    }
}

impl<T: Copy> Vec3<T> {
    /// Apply `f` to each component in order, producing a vector over whatever `f` returns.
    pub fn map<U, F>(self, mut f: F) -> Vec3<U>
    where F: FnMut(T) -> U,
    {
        Vec3::new(f(self.data[0]), f(self.data[1]), f(self.data[2]))
    }
}

impl<T: Scalar> Vec3<T> {
    pub fn zero() -> Self {
        Self::splat(T::zero())
    }

    pub fn splat(value: T) -> Self {
        Vec3::new(value, value, value)
    }

    pub fn unit_x() -> Self {
        Vec3::new(T::one(), T::zero(), T::zero())
    }

    pub fn unit_y() -> Self {
        Vec3::new(T::zero(), T::one(), T::zero())
    }

    pub fn unit_z() -> Self {
        Vec3::new(T::zero(), T::zero(), T::one())
    }

    pub fn x(&self) -> T {
        self.data[0]
    }

    pub fn y(&self) -> T {
        self.data[1]
    }

    pub fn z(&self) -> T {
        self.data[2]
    }

    pub fn set_x(&mut self, x: T) {
        self.data[0] = x;
    }

    pub fn set_y(&mut self, y: T) {
        self.data[1] = y;
    }

    pub fn set_z(&mut self, z: T) {
        self.data[2] = z;
    }

    /// Component at `index`. Unlike `v[index]` this doesn't panic on a bad index.
    pub fn get(&self, index: usize) -> Result<T> {
        self.data
            .get(index)
            .copied()
            .ok_or(Vec3Error::IndexOutOfRange { index })
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        self.data
            .get_mut(index)
            .ok_or(Vec3Error::IndexOutOfRange { index })
    }

    /// Sum of the squared components. Each component is widened to `f64` before squaring
    /// so narrow integer types can't overflow.
    pub fn len_squared(&self) -> f64 {
        let [x, y, z] = self.widened();
        x * x + y * y + z * z
    }

    pub fn len(&self) -> f64 {
        self.len_squared().sqrt()
    }

    pub fn dot(&self, other: &Self) -> f64 {
        dot(self, other)
    }

    pub fn cross(&self, other: &Self) -> Self {
        cross(self, other)
    }

    /// Divide every component by `divisor`, returning an error where the integer operator
    /// would panic. Float vectors always succeed.
    pub fn checked_div(self, divisor: T) -> Result<Self> {
        T::checked_div_components(self.data, divisor)
            .map(|data| Vec3 { data })
            .map_err(|e| {
                debug!("Dividing {} by {} failed: {}", self, divisor, e);
                e
            })
    }

    /// Write `(x, y, z)` to stdout.
    pub fn print(&self) {
        println!("{}", self);
    }

    fn widened(&self) -> [f64; 3] {
        [self.data[0].widen(), self.data[1].widen(), self.data[2].widen()]
    }
}

impl<T: Scalar + Floater> Vec3<T> {
    /// A new vector pointing the same way with a length of one. The receiver is left alone.
    ///
    /// A zero length vector has no direction. Normalizing one divides by zero and every
    /// component comes out NaN. Use [`Vec3::try_unit`] if that needs catching.
    pub fn unit(&self) -> Self {
        let len = self.len();
        if len == 0.0 {
            trace!("Normalizing zero length vector {}, result is NaN.", self);
        }
        let len = <T as NumCast>::from(len).unwrap_or_else(T::nan);
        *self / len
    }

    pub fn try_unit(&self) -> Result<Self> {
        if self.len_squared() == 0.0 {
            debug!("Refusing to normalize zero length vector {}.", self);
            return Err(Vec3Error::ZeroLength);
        }
        Ok(self.unit())
    }

    /// Linear interpolation. `t = 0` is `self`, `t = 1` is `other`.
    pub fn lerp(&self, other: &Self, t: T) -> Self {
        *self + (*other - *self) * t
    }
}

impl<T: fmt::Display> fmt::Display for Vec3<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {}, {})", self.data[0], self.data[1], self.data[2])
    }
}

/// Sum of the pairwise component products, worked out in `f64`.
pub fn dot<T: Scalar>(lhs: &Vec3<T>, rhs: &Vec3<T>) -> f64 {
    let [ax, ay, az] = lhs.widened();
    let [bx, by, bz] = rhs.widened();
    ax * bx + ay * by + az * bz
}

/// The right handed cross product `lhs × rhs`.
///
/// Computed in `T`. Unsigned vectors only work out when no component difference goes below
/// zero.
pub fn cross<T: Scalar>(lhs: &Vec3<T>, rhs: &Vec3<T>) -> Vec3<T> {
    let a = &lhs.data;
    let b = &rhs.data;
    Vec3::new(
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    )
}

pub fn distance_squared<T: Scalar>(lhs: &Point3<T>, rhs: &Point3<T>) -> f64 {
    let [ax, ay, az] = lhs.widened();
    let [bx, by, bz] = rhs.widened();
    let (dx, dy, dz) = (ax - bx, ay - by, az - bz);
    dx * dx + dy * dy + dz * dz
}

pub fn distance<T: Scalar>(lhs: &Point3<T>, rhs: &Point3<T>) -> f64 {
    distance_squared(lhs, rhs).sqrt()
}
