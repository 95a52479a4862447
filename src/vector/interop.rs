//! Getting in and out of other representations, plus tolerant float comparison.
use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use super::Vec3;

impl<T> From<[T; 3]> for Vec3<T> {
    fn from(data: [T; 3]) -> Self {
        Vec3 { data }
    }
}

impl<T> From<(T, T, T)> for Vec3<T> {
    fn from((x, y, z): (T, T, T)) -> Self {
        Vec3::new(x, y, z)
    }
}

impl<T> From<Vec3<T>> for [T; 3] {
    fn from(v: Vec3<T>) -> Self {
        v.data
    }
}

impl<T> From<Vec3<T>> for (T, T, T) {
    fn from(v: Vec3<T>) -> Self {
        let [x, y, z] = v.data;
        (x, y, z)
    }
}

#[cfg(feature = "cgmath")]
mod cg {
    use super::Vec3;

    impl<T> From<cgmath::Vector3<T>> for Vec3<T> {
        fn from(v: cgmath::Vector3<T>) -> Self {
            Vec3::new(v.x, v.y, v.z)
        }
    }

    impl<T> From<Vec3<T>> for cgmath::Vector3<T> {
        fn from(v: Vec3<T>) -> Self {
            let [x, y, z] = v.data;
            cgmath::Vector3::new(x, y, z)
        }
    }

    impl<T> From<cgmath::Point3<T>> for Vec3<T> {
        fn from(p: cgmath::Point3<T>) -> Self {
            Vec3::new(p.x, p.y, p.z)
        }
    }

    impl<T> From<Vec3<T>> for cgmath::Point3<T> {
        fn from(v: Vec3<T>) -> Self {
            let [x, y, z] = v.data;
            cgmath::Point3::new(x, y, z)
        }
    }
}

impl<T> AbsDiffEq for Vec3<T>
where T: AbsDiffEq,
      T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> T::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T::Epsilon) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<T> RelativeEq for Vec3<T>
where T: RelativeEq,
      T::Epsilon: Copy,
{
    fn default_max_relative() -> T::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T::Epsilon, max_relative: T::Epsilon) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl<T> UlpsEq for Vec3<T>
where T: UlpsEq,
      T::Epsilon: Copy,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: T::Epsilon, max_ulps: u32) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
    }
}
