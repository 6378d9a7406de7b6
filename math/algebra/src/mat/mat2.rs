use serde::{Deserialize, Serialize};

use crate::*;

/// 2x2 matrix, column major: `m[0]`, `m[1]` are the first column.
#[repr(C)]
#[derive(Serialize, Deserialize)]
#[derive(Debug, Copy, Clone, Default, Hash, Eq, PartialEq)]
pub struct Matrix22<T> {
  pub m: [T; 4],
}

impl<T: Scalar> SquareMatrix<T> for Matrix22<T> {
  impl_square_matrix_common!(Matrix22, 2);

  fn det(&self) -> f64 {
    let m = &self.m;
    (m[0] * m[3]).as_f64() - (m[1] * m[2]).as_f64()
  }
}
