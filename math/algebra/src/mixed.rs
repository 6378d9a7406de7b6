//! Products between a vector and a matrix of the same dimension.
//!
//! `v * m` treats `v` as a row vector on the left of `m`, `m * v` treats it as a
//! column vector on the right. The two use different index patterns and only
//! agree for symmetric matrices. There is no `Matrix *= Vector`: the result is a
//! vector, not a matrix.

use std::ops::{Mul, MulAssign};

use crate::*;

impl<T: Scalar> MulAssign<Matrix22<T>> for Vector2<T> {
  fn mul_assign(&mut self, m: Matrix22<T>) {
    let v = *self;
    let m = &m.m;
    self.x = v.x * m[0] + v.y * m[1];
    self.y = v.x * m[2] + v.y * m[3];
  }
}

impl<T: Scalar> MulAssign<Matrix33<T>> for Vector3<T> {
  fn mul_assign(&mut self, m: Matrix33<T>) {
    let v = *self;
    let m = &m.m;
    self.x = v.x * m[0] + v.y * m[1] + v.z * m[2];
    self.y = v.x * m[3] + v.y * m[4] + v.z * m[5];
    self.z = v.x * m[6] + v.y * m[7] + v.z * m[8];
  }
}

impl<T: Scalar> MulAssign<Matrix44<T>> for Vector4<T> {
  fn mul_assign(&mut self, m: Matrix44<T>) {
    let v = *self;
    let m = &m.m;
    self.x = v.x * m[0] + v.y * m[1] + v.z * m[2] + v.w * m[3];
    self.y = v.x * m[4] + v.y * m[5] + v.z * m[6] + v.w * m[7];
    self.z = v.x * m[8] + v.y * m[9] + v.z * m[10] + v.w * m[11];
    self.w = v.x * m[12] + v.y * m[13] + v.z * m[14] + v.w * m[15];
  }
}

macro_rules! impl_vector_times_matrix {
  ($VectorN:ident, $MatrixN:ident) => {
    impl<T: Scalar> Mul<$MatrixN<T>> for $VectorN<T> {
      type Output = $VectorN<T>;

      #[inline]
      fn mul(mut self, m: $MatrixN<T>) -> $VectorN<T> {
        self *= m;
        self
      }
    }
  };
}

impl_vector_times_matrix!(Vector2, Matrix22);
impl_vector_times_matrix!(Vector3, Matrix33);
impl_vector_times_matrix!(Vector4, Matrix44);

impl<T: Scalar> Mul<Vector2<T>> for Matrix22<T> {
  type Output = Vector2<T>;

  fn mul(self, v: Vector2<T>) -> Vector2<T> {
    let m = &self.m;
    Vector2 {
      x: m[0] * v.x + m[2] * v.y,
      y: m[1] * v.x + m[3] * v.y,
    }
  }
}

impl<T: Scalar> Mul<Vector3<T>> for Matrix33<T> {
  type Output = Vector3<T>;

  fn mul(self, v: Vector3<T>) -> Vector3<T> {
    let m = &self.m;
    Vector3 {
      x: m[0] * v.x + m[3] * v.y + m[6] * v.z,
      y: m[1] * v.x + m[4] * v.y + m[7] * v.z,
      z: m[2] * v.x + m[5] * v.y + m[8] * v.z,
    }
  }
}

impl<T: Scalar> Mul<Vector4<T>> for Matrix44<T> {
  type Output = Vector4<T>;

  fn mul(self, v: Vector4<T>) -> Vector4<T> {
    let m = &self.m;
    Vector4 {
      x: m[0] * v.x + m[4] * v.y + m[8] * v.z + m[12] * v.w,
      y: m[1] * v.x + m[5] * v.y + m[9] * v.z + m[13] * v.w,
      z: m[2] * v.x + m[6] * v.y + m[10] * v.z + m[14] * v.w,
      w: m[3] * v.x + m[7] * v.y + m[11] * v.z + m[15] * v.w,
    }
  }
}
