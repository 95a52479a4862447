use approx::assert_relative_eq;

use trivec::{cross, distance, dot, Point3, Vec3, Vec3Error};

mod common;

#[test]
fn adding_vectors() {
    common::init();

    assert_eq!(Vec3::new(1, 2, 3) + Vec3::new(4, 5, 6), Vec3::new(5, 7, 9));
    assert_eq!(Vec3::new(1.0, 2.0, 3.0) + Vec3::new(4.0, 5.0, 6.0), Vec3::new(5.0, 7.0, 9.0));
}

#[test]
fn perpendicular_dot_is_zero() {
    common::init();

    assert_eq!(dot(&Vec3::new(1, 0, 0), &Vec3::new(0, 1, 0)), 0.0);
    assert_eq!(dot(&Vec3::new(1.0, 0.0, 0.0), &Vec3::new(0.0, 1.0, 0.0)), 0.0);
    assert_eq!(Vec3::new(1u8, 2, 3).dot(&Vec3::new(4, 5, 6)), 32.0);
}

#[test]
fn cross_of_x_and_y_is_z() {
    common::init();

    let z = cross(&Vec3::new(1.0, 0.0, 0.0), &Vec3::new(0.0, 1.0, 0.0));
    assert_eq!(z, Vec3::new(0.0, 0.0, 1.0));
    assert_eq!(cross(&Vec3::new(1, 0, 0), &Vec3::new(0, 1, 0)), Vec3::new(0, 0, 1));
}

#[test]
fn dividing_by_a_scalar() {
    common::init();

    assert_eq!(Vec3::new(2.0, 4.0, 6.0) / 2.0, Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(Vec3::new(2, 4, 6) / 2, Vec3::new(1, 2, 3));
    assert_eq!(Vec3::new(2u64, 4, 6) / 2, Vec3::new(1, 2, 3));

    let mut v = Vec3::new(2.0f32, 4.0, 6.0);
    v /= 2.0;
    assert_eq!(v, Vec3::new(1.0, 2.0, 3.0));

    let mut v = Vec3::new(2i8, 4, 6);
    v /= 2;
    assert_eq!(v, Vec3::new(1, 2, 3));
}

#[test]
fn integer_divide_by_zero_is_an_error() {
    common::init();

    assert_eq!(Vec3::new(2, 4, 6).checked_div(0), Err(Vec3Error::DivideByZero));
    assert_eq!(Vec3::new(i32::MIN, 0, 0).checked_div(-1), Err(Vec3Error::Overflow));
}

#[test]
fn lengths() {
    common::init();

    let v = Vec3::new(3, 4, 0);
    assert_eq!(v.len_squared(), 25.0);
    assert_eq!(v.len(), 5.0);

    let v = Vec3::new(3.0, 4.0, 0.0);
    assert_eq!(v.len_squared(), 25.0);
    assert_eq!(v.len(), 5.0);
}

#[test]
fn normalizing_zero_is_nan_or_an_error() {
    common::init();

    let zero = Vec3::<f64>::zero();
    let u = zero.unit();
    assert!(u.x().is_nan() && u.y().is_nan() && u.z().is_nan());
    assert_eq!(zero.try_unit(), Err(Vec3Error::ZeroLength));
}

#[test]
fn points_walk_along_directions() {
    common::init();

    let origin: Point3<f64> = Vec3::zero();
    let dir = Vec3::new(1.0, 1.0, 0.0).unit();
    let p: Point3<f64> = origin + dir * 2.0_f64.sqrt();

    assert_relative_eq!(p, Vec3::new(1.0, 1.0, 0.0), epsilon = 1e-12);
    assert_relative_eq!(distance(&origin, &p), 2.0_f64.sqrt(), epsilon = 1e-12);
    assert_relative_eq!(origin.lerp(&p, 0.5), Vec3::new(0.5, 0.5, 0.0), epsilon = 1e-12);
}

#[test]
fn components_are_mutable_in_place() {
    common::init();

    let mut v = Vec3::new(0, 0, 0);
    v.set_x(1);
    v[1] = 2;
    *v.get_mut(2).unwrap() = 3;
    assert_eq!(v, Vec3::new(1, 2, 3));
    assert_eq!(v.get_mut(3).unwrap_err(), Vec3Error::IndexOutOfRange { index: 3 });

    v += Vec3::splat(1);
    v *= 2;
    assert_eq!(v, Vec3::new(4, 6, 8));
}

#[test]
fn printing_does_not_disturb_the_value() {
    common::init();

    let v = Vec3::new(1.5, -2.0, 0.0);
    v.print();
    assert_eq!(v.to_string(), "(1.5, -2, 0)");
    assert_eq!(v, Vec3::new(1.5, -2.0, 0.0));
}
