use serde::{Deserialize, Serialize};

use crate::*;

/// 4x4 matrix, column major: `m[12]`, `m[13]`, `m[14]` hold the translation of an
/// affine transform.
#[repr(C)]
#[derive(Serialize, Deserialize)]
#[derive(Debug, Copy, Clone, Default, Hash, Eq, PartialEq)]
pub struct Matrix44<T> {
  pub m: [T; 16],
}

impl<T: Scalar> SquareMatrix<T> for Matrix44<T> {
  impl_square_matrix_common!(Matrix44, 4);

  /// Cofactor expansion along the first column, evaluated in the element type.
  #[rustfmt::skip]
  fn det(&self) -> f64 {
    let m = &self.m;
    let d = m[0]  * (  m[5]  * (m[10] * m[15] - m[11] * m[14])
                     - m[9]  * (m[6]  * m[15] - m[7]  * m[14])
                     + m[13] * (m[6]  * m[11] - m[7]  * m[10]))
          - m[4]  * (  m[1]  * (m[10] * m[15] - m[11] * m[14])
                     - m[9]  * (m[2]  * m[15] - m[3]  * m[14])
                     + m[13] * (m[2]  * m[11] - m[3]  * m[10]))
          + m[8]  * (  m[1]  * (m[6]  * m[15] - m[7]  * m[14])
                     - m[5]  * (m[2]  * m[15] - m[3]  * m[14])
                     + m[13] * (m[2]  * m[7]  - m[3]  * m[6]))
          - m[12] * (  m[1]  * (m[6]  * m[11] - m[7]  * m[10])
                     - m[5]  * (m[2]  * m[11] - m[3]  * m[10])
                     + m[9]  * (m[2]  * m[7]  - m[3]  * m[6]));
    d.as_f64()
  }
}

#[cfg(test)]
mod tests {
  use approx::assert_abs_diff_eq;

  use crate::*;

  #[test]
  fn det() {
    let m = Matrix44::new(2, 0, 0, 0, 0, 3, 0, 0, 0, 0, 4, 0, 0, 0, 0, 5);
    assert_eq!(crate::det(&m), 120.);

    let mut swapped = Matrix44i::identity();
    swapped.set_col(0, (0, 1, 0, 0)).set_col(1, (1, 0, 0, 0));
    assert_eq!(crate::det(&swapped), -1.);

    let mut translate = Matrix44::identity();
    translate.set_col(3, (7, -3, 2, 1));
    assert_eq!(crate::det(&translate), 1.);
  }

  #[test]
  fn det_matches_reference() {
    #[rustfmt::skip]
    let values = [
      1., 2., 0., -1.,
      3., -1., 2., 0.5,
      0., 4., 1., 2.,
      -2., 1., 3., 1.,
    ];
    let m = Matrix44::from(values);
    let v = values;
    let reference = cgmath::Matrix4::new(
      v[0], v[1], v[2], v[3], v[4], v[5], v[6], v[7], v[8], v[9], v[10], v[11], v[12], v[13],
      v[14], v[15],
    );
    use cgmath::SquareMatrix as _;
    assert_abs_diff_eq!(crate::det(&m), reference.determinant(), epsilon = 1e-9);
  }
}
