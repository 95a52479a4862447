//! Three component vectors for geometry code.
//!
//! [`Vec3`] works over any primitive scalar. Lengths and dot products come back as `f64`
//! whatever the scalar is, cross products come back as vectors. Points are vectors too, see
//! [`Point3`].
//!
//! ```
//! use trivec::{cross, dot, Vec3};
//!
//! let x = Vec3::new(1.0, 0.0, 0.0);
//! let y = Vec3::new(0.0, 1.0, 0.0);
//! assert_eq!(dot(&x, &y), 0.0);
//! assert_eq!(cross(&x, &y), Vec3::new(0.0, 0.0, 1.0));
//! assert_eq!(Vec3::new(2, 4, 6) / 2, Vec3::new(1, 2, 3));
//! ```
pub mod error;
pub mod numeric;
pub mod vector;

pub use error::{Result, Vec3Error};
pub use numeric::{Floater, Number, Scalar};
pub use vector::{cross, distance, distance_squared, dot, Point3, Vec3};
