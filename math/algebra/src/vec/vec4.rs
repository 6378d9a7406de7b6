use serde::{Deserialize, Serialize};

use crate::*;

#[repr(C)]
#[derive(Serialize, Deserialize)]
#[derive(Debug, Copy, Clone, Default, Hash, Eq, PartialEq)]
pub struct Vector4<T> {
  pub x: T,
  pub y: T,
  pub z: T,
  pub w: T,
}

impl<T: Scalar> From<Vector2<T>> for Vector4<T> {
  #[inline]
  fn from(v: Vector2<T>) -> Self {
    Self::new(v.x, v.y, T::zero(), T::zero())
  }
}

impl<T: Scalar> From<Vector3<T>> for Vector4<T> {
  #[inline]
  fn from(v: Vector3<T>) -> Self {
    Self::new(v.x, v.y, v.z, T::zero())
  }
}
