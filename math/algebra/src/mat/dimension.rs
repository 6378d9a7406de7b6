use crate::Scalar;

pub trait SquareMatrix<T: Scalar>: Sized {
  #[must_use]
  fn identity() -> Self;

  #[must_use]
  fn transpose(&self) -> Self;

  /// Double precision whatever the element type.
  #[must_use]
  fn det(&self) -> f64;
}

macro_rules! impl_square_matrix_common {
  ($MatrixN:ident, $n:expr) => {
    #[inline]
    fn identity() -> Self {
      let mut m = $MatrixN::zero();
      m.set_identity();
      m
    }

    fn transpose(&self) -> Self {
      let mut mres = $MatrixN::zero();
      for i in 0..$n {
        for j in 0..$n {
          mres[$n * i + j] = self[$n * j + i];
        }
      }
      mres
    }
  };
}
