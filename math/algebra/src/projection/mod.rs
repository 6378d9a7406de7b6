//! OpenGL style projection matrices: right handed eye space looking down `-z`,
//! mapped to a `[-1, 1]` clip cube.

use crate::*;

mod orth;
mod perspective;

pub use orth::*;
pub use perspective::*;

pub trait Projection<T: Scalar> {
  fn update_projection(&self, projection: &mut Matrix44<T>);
}

pub trait ResizableProjection<T: Scalar>: Projection<T> {
  /// Adapt to a viewport of `size = (width, height)`.
  fn resize(&mut self, size: (T, T));
}

/// Orthographic projection of the box bounded by the six planes.
///
/// Degenerate bounds such as `left == right` are not checked and produce
/// infinite or NaN elements.
#[rustfmt::skip]
pub fn ortho_mat44<T: Scalar>(m: &mut Matrix44<T>, near: T, far: T, left: T, right: T, bottom: T, top: T) {
  let z = T::zero();
  let two = T::two();
  m.assign(
    two / (right - left),              z,                                 z,                             z,
    z,                                 two / (top - bottom),              z,                             z,
    z,                                 z,                                 -two / (far - near),           z,
    -(right + left) / (right - left),  -(top + bottom) / (top - bottom),  -(far + near) / (far - near),  T::one(),
  );
}

/// Perspective projection of the frustum whose near plane spans
/// `left..right` and `bottom..top`. The last row yields `w' = -z`.
#[rustfmt::skip]
pub fn persp_mat44<T: Scalar>(m: &mut Matrix44<T>, near: T, far: T, left: T, right: T, bottom: T, top: T) {
  let z = T::zero();
  let two = T::two();
  m.assign(
    (two * near) / (right - left),     z,                                 z,                                  z,
    z,                                 (two * near) / (top - bottom),     z,                                  z,
    (right + left) / (right - left),   (top + bottom) / (top - bottom),   -(far + near) / (far - near),       -T::one(),
    z,                                 z,                                 -(two * near * far) / (far - near), z,
  );
}

/// [`persp_mat44`] with the far plane at infinity.
#[rustfmt::skip]
pub fn persp_inf_mat44<T: Scalar>(m: &mut Matrix44<T>, near: T, left: T, right: T, bottom: T, top: T) {
  let z = T::zero();
  let two = T::two();
  m.assign(
    (two * near) / (right - left),     z,                                 z,            z,
    z,                                 (two * near) / (top - bottom),     z,            z,
    (right + left) / (right - left),   (top + bottom) / (top - bottom),   -T::one(),    -T::one(),
    z,                                 z,                                 -two * near,  z,
  );
}
