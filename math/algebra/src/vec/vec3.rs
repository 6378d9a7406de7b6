use serde::{Deserialize, Serialize};

use crate::*;

#[repr(C)]
#[derive(Serialize, Deserialize)]
#[derive(Debug, Copy, Clone, Default, Hash, Eq, PartialEq)]
pub struct Vector3<T> {
  pub x: T,
  pub y: T,
  pub z: T,
}

impl<T: Scalar> Vector3<T> {
  /// Cross product, written into `vres` without building a temporary.
  #[inline]
  pub fn cross_into<'a>(&self, v2: Self, vres: &'a mut Self) -> &'a mut Self {
    vres.x = self.y * v2.z - v2.y * self.z;
    vres.y = -self.x * v2.z + v2.x * self.z;
    vres.z = self.x * v2.y - v2.x * self.y;
    vres
  }

  #[inline]
  pub fn cross(&self, v2: Self) -> Self {
    let mut vres = Self::zero();
    self.cross_into(v2, &mut vres);
    vres
  }
}

impl<T: Scalar> From<Vector2<T>> for Vector3<T> {
  #[inline]
  fn from(v: Vector2<T>) -> Self {
    Self::new(v.x, v.y, T::zero())
  }
}

#[cfg(test)]
mod tests {
  use approx::assert_abs_diff_eq;

  use crate::*;

  #[test]
  fn cross_of_axes() {
    let z = vec3(1.0_f32, 0., 0.).cross(vec3(0., 1., 0.));
    assert_eq!(z, vec3(0., 0., 1.));
    assert_eq!(vec3(0, 1, 0).cross(vec3(0, 0, 1)), vec3(1, 0, 0));
    assert_eq!(vec3(0, 0, 1).cross(vec3(1, 0, 0)), vec3(0, 1, 0));
  }

  #[test]
  fn both_forms_agree() {
    let u = vec3(1.5, -2., 0.25);
    let v = vec3(-3., 4., 7.);
    let mut out = Vector3d::zero();
    let returned = *u.cross_into(v, &mut out);
    assert_eq!(returned, u.cross(v));
    assert_eq!(out, u.cross(v));
  }

  #[test]
  fn anti_commutative_and_orthogonal() {
    let u = vec3(1, -2, 3);
    let v = vec3(4, 5, -6);
    assert_eq!(u.cross(v), -(v.cross(u)));
    assert_eq!(u.dot(u.cross(v)), 0);
    assert_eq!(v.dot(u.cross(v)), 0);

    let u = vec3(0.3_f64, -1.7, 2.2);
    let v = vec3(4.1, 0.5, -0.6);
    let c = u.cross(v);
    assert_abs_diff_eq!(u.dot(c), 0., epsilon = 1e-12);
    assert_abs_diff_eq!(v.dot(c), 0., epsilon = 1e-12);
  }

  #[test]
  fn matches_reference_cross() {
    let u = vec3(0.25_f32, 3., -1.5);
    let v = vec3(2., -0.5, 4.);
    let expect = cgmath::vec3(0.25_f32, 3., -1.5).cross(cgmath::vec3(2., -0.5, 4.));
    let c = u.cross(v);
    assert_abs_diff_eq!(c.x, expect.x, epsilon = 1e-5);
    assert_abs_diff_eq!(c.y, expect.y, epsilon = 1e-5);
    assert_abs_diff_eq!(c.z, expect.z, epsilon = 1e-5);
  }
}
