use serde::{Deserialize, Serialize};

use crate::*;

/// 3x3 matrix, column major.
#[repr(C)]
#[derive(Serialize, Deserialize)]
#[derive(Debug, Copy, Clone, Default, Hash, Eq, PartialEq)]
pub struct Matrix33<T> {
  pub m: [T; 9],
}

impl<T: Scalar> SquareMatrix<T> for Matrix33<T> {
  impl_square_matrix_common!(Matrix33, 3);

  /// Cofactor expansion along the first column, minors in double precision.
  fn det(&self) -> f64 {
    let m = self.m.map(|e| e.as_f64());
    m[0] * (m[4] * m[8] - m[5] * m[7]) - m[3] * (m[1] * m[8] - m[2] * m[7])
      + m[6] * (m[1] * m[5] - m[2] * m[4])
  }
}
