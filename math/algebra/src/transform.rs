//! Affine transform builders. Every builder overwrites a caller supplied matrix.
//!
//! Angles are in radians and rotations follow the right hand rule about the
//! given axis. Points are column vectors multiplied on the right, so the
//! translation of a 4x4 transform lives in column 3.

use crate::*;

/// Translation by `d`: identity with column 3 set to `(d, 1)`.
pub fn translation_mat44<T: Scalar>(m: &mut Matrix44<T>, d: Vector3<T>) {
  m.set_identity();
  m.set_col(3, (d.x, d.y, d.z, T::one()));
}

/// Rotation by `angle` about `axis`, using Rodrigues' formula.
///
/// The axis does not need to be normalized. An axis of exactly zero length
/// yields the identity whatever the angle.
#[rustfmt::skip]
pub fn rotation_mat33<T: RealScalar>(m: &mut Matrix33<T>, angle: T, mut axis: Vector3<T>) {
  if axis.length() == 0.0 {
    m.set_identity();
    return;
  }

  let v = *axis.normalize();
  let c = angle.cos();
  let s = angle.sin();
  let t = T::one() - c;

  // each line below is one column
  m.assign(
    c + t * v.x * v.x,       t * v.x * v.y + s * v.z, t * v.x * v.z - s * v.y,
    t * v.x * v.y - s * v.z, c + t * v.y * v.y,       t * v.y * v.z + s * v.x,
    t * v.x * v.z + s * v.y, t * v.y * v.z - s * v.x, c + t * v.z * v.z,
  );
}

/// [`rotation_mat33`] embedded in the upper left block of a 4x4 identity.
pub fn rotation_mat44<T: RealScalar>(m: &mut Matrix44<T>, angle: T, axis: Vector3<T>) {
  transform_mat44(m, angle, axis, Vector3::zero());
}

/// Uniform scale: every element of the identity scaled by `s`, except the
/// homogeneous element 15 which stays one.
pub fn uniform_scale_mat44<T: Scalar, S: ScaleFactor>(m: &mut Matrix44<T>, s: S) {
  m.set_identity().scale_by(s);
  m[15] = T::one();
}

/// Axis aligned scale: identity with the diagonal set to `s`.
pub fn scale_mat44<T: Scalar>(m: &mut Matrix44<T>, s: Vector3<T>) {
  m.set_identity();
  m[0] = s.x;
  m[5] = s.y;
  m[10] = s.z;
}

/// Scale by `s.x`, `s.y`, `s.z` along the axes `x`, `y`, `z`, computed as
/// `F * S * transpose(F)` where `F` has the axes as its columns.
///
/// The axes are expected to be unit length.
///
/// # Panics
///
/// When any two of the axes have a non zero dot product.
pub fn scale_along_axes_mat44<T: Scalar>(
  m: &mut Matrix44<T>,
  s: Vector3<T>,
  x: Vector3<T>,
  y: Vector3<T>,
  z: Vector3<T>,
) {
  assert!(x.dot(y) == T::zero(), "scale axes x and y are not orthogonal");
  assert!(x.dot(z) == T::zero(), "scale axes x and z are not orthogonal");
  assert!(y.dot(z) == T::zero(), "scale axes y and z are not orthogonal");

  let mut f = Matrix44::zero();
  f.set_col(0, x)
    .set_col(1, y)
    .set_col(2, z)
    .set_col(3, (T::zero(), T::zero(), T::zero(), T::one()));

  let mut scale = Matrix44::zero();
  scale_mat44(&mut scale, s);

  *m = f * scale * transpose(&f);
}

/// Shear coordinate `i` by `s` times coordinate `j`: identity with the element
/// at row `i`, column `j` set to `s`. Indices are zero based, 0 to 2 for x to z.
///
/// # Panics
///
/// When `i` or `j` is not in `0..3`.
pub fn shear_mat44<T: Scalar>(m: &mut Matrix44<T>, i: usize, j: usize, s: T) {
  assert!(i < 3, "shear row {} out of range", i);
  assert!(j < 3, "shear column {} out of range", j);
  m.set_identity();
  m[4 * j + i] = s;
}

/// Rotation by `angle` about `axis` followed by a translation by `d`.
pub fn transform_mat44<T: RealScalar>(
  m: &mut Matrix44<T>,
  angle: T,
  axis: Vector3<T>,
  d: Vector3<T>,
) {
  let mut r = Matrix33::zero();
  rotation_mat33(&mut r, angle, axis);
  embed_rotation(m, &r, d);
}

/// Rotation by `angle` about the line through `p` along `axis`.
pub fn rotation_about_point_mat44<T: RealScalar>(
  m: &mut Matrix44<T>,
  angle: T,
  axis: Vector3<T>,
  p: Vector3<T>,
) {
  let mut r = Matrix33::zero();
  rotation_mat33(&mut r, angle, axis);
  let p1 = r * p;
  embed_rotation(m, &r, p - p1);
}

#[rustfmt::skip]
fn embed_rotation<T: Scalar>(m: &mut Matrix44<T>, r: &Matrix33<T>, d: Vector3<T>) {
  let z = T::zero();
  let r = &r.m;
  m.assign(
    r[0], r[1], r[2], z,
    r[3], r[4], r[5], z,
    r[6], r[7], r[8], z,
    d.x, d.y, d.z, T::one(),
  );
}
