#[macro_use]
mod dimension;
mod mat2;
mod mat3;
mod mat4;

pub use dimension::*;
pub use mat2::*;
pub use mat3::*;
pub use mat4::*;

use crate::*;

macro_rules! impl_matrix {
  ($MatrixN:ident, $VectorN:ident, $n:expr, $len:expr, [$($a:ident),+]) => {
    impl<T> $MatrixN<T> {
      /// Construct a new matrix from its elements in column major order.
      #[rustfmt::skip]
      #[inline]
      pub const fn new($($a: T),+) -> Self {
        Self { m: [$($a),+] }
      }

      /// Overwrite every element in place, column major order.
      #[inline]
      pub fn assign(&mut self, $($a: T),+) -> &mut Self {
        self.m = [$($a),+];
        self
      }

      #[inline]
      pub fn map<U, F>(self, f: F) -> $MatrixN<U>
      where
        F: FnMut(T) -> U,
      {
        $MatrixN { m: self.m.map(f) }
      }

      #[inline]
      pub fn as_array(&self) -> &[T; $len] {
        &self.m
      }
    }

    impl<T: Copy> $MatrixN<T> {
      /// Every element set to `v`.
      #[inline]
      pub fn splat(v: T) -> Self {
        Self { m: [v; $len] }
      }
    }

    impl<T: Scalar> $MatrixN<T> {
      #[inline]
      pub fn zero() -> Self {
        Self::splat(T::zero())
      }

      pub fn set_identity(&mut self) -> &mut Self {
        self.m = [T::zero(); $len];
        for i in 0..$n {
          self.m[i * $n + i] = T::one();
        }
        self
      }

      /// Column `i`: the `N` consecutive stored elements starting at `i * N`.
      pub fn col(&self, i: usize) -> $VectorN<T> {
        assert!(i < $n, "column {} out of range for {}", i, stringify!($MatrixN));
        std::array::from_fn::<T, $n, _>(|r| self.m[i * $n + r]).into()
      }

      /// Row `i`: the stored elements at stride `N` starting at `i`.
      pub fn row(&self, i: usize) -> $VectorN<T> {
        assert!(i < $n, "row {} out of range for {}", i, stringify!($MatrixN));
        std::array::from_fn::<T, $n, _>(|c| self.m[i + c * $n]).into()
      }

      /// Accepts a vector, an array or a tuple of `N` values.
      pub fn set_col(&mut self, i: usize, v: impl Into<$VectorN<T>>) -> &mut Self {
        assert!(i < $n, "column {} out of range for {}", i, stringify!($MatrixN));
        let v: $VectorN<T> = v.into();
        let v: [T; $n] = v.into();
        for (r, e) in v.into_iter().enumerate() {
          self.m[i * $n + r] = e;
        }
        self
      }

      /// Accepts a vector, an array or a tuple of `N` values.
      pub fn set_row(&mut self, i: usize, v: impl Into<$VectorN<T>>) -> &mut Self {
        assert!(i < $n, "row {} out of range for {}", i, stringify!($MatrixN));
        let v: $VectorN<T> = v.into();
        let v: [T; $n] = v.into();
        for (c, e) in v.into_iter().enumerate() {
          self.m[i + c * $n] = e;
        }
        self
      }

      /// Multiply every element by `a`, in place.
      #[inline]
      pub fn scale_by<S: ScaleFactor>(&mut self, a: S) -> &mut Self {
        for e in self.m.iter_mut() {
          *e = a.scale(*e);
        }
        self
      }

      /// Divide every element by `a`, in place.
      ///
      /// # Panics
      ///
      /// When `a` is exactly zero.
      #[inline]
      pub fn divide_by<S: ScaleFactor>(&mut self, a: S) -> &mut Self {
        assert!(!a.is_zero(), "matrix divided by zero");
        for e in self.m.iter_mut() {
          *e = a.divide(*e);
        }
        self
      }
    }

    impl<T> std::ops::Index<usize> for $MatrixN<T> {
      type Output = T;

      #[inline]
      fn index(&self, i: usize) -> &T {
        &self.m[i]
      }
    }

    impl<T> std::ops::IndexMut<usize> for $MatrixN<T> {
      #[inline]
      fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.m[i]
      }
    }

    impl<T: Scalar> std::ops::AddAssign for $MatrixN<T> {
      #[inline]
      fn add_assign(&mut self, m2: Self) {
        for (e, o) in self.m.iter_mut().zip(m2.m) {
          *e += o;
        }
      }
    }

    impl<T: Scalar> std::ops::Add for $MatrixN<T> {
      type Output = Self;
      #[inline]
      fn add(mut self, m2: Self) -> Self {
        self += m2;
        self
      }
    }

    impl<T: Scalar> std::ops::SubAssign for $MatrixN<T> {
      #[inline]
      fn sub_assign(&mut self, m2: Self) {
        for (e, o) in self.m.iter_mut().zip(m2.m) {
          *e -= o;
        }
      }
    }

    impl<T: Scalar> std::ops::Sub for $MatrixN<T> {
      type Output = Self;
      #[inline]
      fn sub(mut self, m2: Self) -> Self {
        self -= m2;
        self
      }
    }

    impl<T: Scalar> std::ops::Neg for $MatrixN<T> {
      type Output = Self;
      #[inline]
      fn neg(self) -> Self {
        self.map(|e| -e)
      }
    }

    /// `self = self * m2`, self on the left.
    impl<T: Scalar> std::ops::MulAssign for $MatrixN<T> {
      fn mul_assign(&mut self, m2: Self) {
        let mut mres = Self::zero();
        for i in 0..$n {
          for j in 0..$n {
            for k in 0..$n {
              mres.m[$n * i + j] += self.m[$n * k + j] * m2.m[$n * i + k];
            }
          }
        }
        *self = mres;
      }
    }

    impl<T: Scalar> std::ops::Mul for $MatrixN<T> {
      type Output = Self;
      #[inline]
      fn mul(mut self, m2: Self) -> Self {
        self *= m2;
        self
      }
    }

    impl<T: std::fmt::Display> std::fmt::Display for $MatrixN<T> {
      fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "[ ")?;
        for (c, group) in self.m.chunks($n).enumerate() {
          if c > 0 {
            write!(f, ", ")?;
          }
          write!(f, "[ ")?;
          for (r, e) in group.iter().enumerate() {
            if r > 0 {
              write!(f, ", ")?;
            }
            write!(f, "{}", e)?;
          }
          write!(f, " ]")?;
        }
        write!(f, " ]")
      }
    }

    impl<T> From<[T; $len]> for $MatrixN<T> {
      #[inline]
      fn from(m: [T; $len]) -> Self {
        Self { m }
      }
    }

    impl<T> From<$MatrixN<T>> for [T; $len] {
      #[inline]
      fn from(m: $MatrixN<T>) -> Self {
        m.m
      }
    }

    unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for $MatrixN<T> {}
    unsafe impl<T: bytemuck::Pod> bytemuck::Pod for $MatrixN<T> {}

    impl_scale_operators!($MatrixN);
    impl_scalar_kind_aliases!($MatrixN);
  };
}

impl_matrix!(Matrix22, Vector2, 2, 4, [a0, a1, a2, a3]);
impl_matrix!(Matrix33, Vector3, 3, 9, [a0, a1, a2, a3, a4, a5, a6, a7, a8]);
impl_matrix!(Matrix44, Vector4, 4, 16, [
  a0, a1, a2, a3, a4, a5, a6, a7, a8, a9, a10, a11, a12, a13, a14, a15
]);

/// The determinant, always in double precision.
///
/// Plain cofactor expansion, no attempt is made to limit round off on nearly
/// singular matrices.
#[inline]
pub fn det<T: Scalar, M: SquareMatrix<T>>(m: &M) -> f64 {
  m.det()
}

#[inline]
pub fn transpose<T: Scalar, M: SquareMatrix<T>>(m: &M) -> M {
  m.transpose()
}

#[cfg(test)]
mod tests {
  use crate::*;

  #[test]
  fn construction_is_column_major() {
    let m = Matrix22::new(1, 2, 3, 4);
    assert_eq!(m.col(0), vec2(1, 2));
    assert_eq!(m.col(1), vec2(3, 4));
    assert_eq!(m.row(0), vec2(1, 3));
    assert_eq!(m.row(1), vec2(2, 4));
    assert_eq!(m[1], 2);

    assert_eq!(Matrix33::splat(2.5_f32), Matrix33::from([2.5; 9]));
    assert_eq!(Matrix44d::zero(), Matrix44::default());
  }

  #[test]
  #[should_panic]
  fn index_out_of_range() {
    let m = Matrix33i::zero();
    let _ = m[9];
  }

  #[test]
  #[should_panic]
  fn col_out_of_range() {
    let m = Matrix22i::zero();
    let _ = m.col(2);
  }

  #[test]
  fn assign_and_identity() {
    let mut m = Matrix22i::zero();
    m.assign(9, 9, 9, 9).assign(1, 0, 0, 1);
    assert_eq!(m, Matrix22::identity());

    let mut m = Matrix44::splat(7.0_f64);
    m.set_identity();
    for i in 0..16 {
      let expect = if i % 5 == 0 { 1. } else { 0. };
      assert_eq!(m[i], expect);
    }

    let mut m = Matrix33::splat(3);
    m.set_identity();
    assert_eq!(m.as_array(), &[1, 0, 0, 0, 1, 0, 0, 0, 1]);
  }

  #[test]
  fn row_and_column_setters() {
    let mut m = Matrix33i::zero();
    m.set_col(0, vec3(1, 2, 3))
      .set_col(1, [4, 5, 6])
      .set_col(2, (7, 8, 9));
    assert_eq!(m, Matrix33::new(1, 2, 3, 4, 5, 6, 7, 8, 9));
    assert_eq!(m.row(2), vec3(3, 6, 9));

    m.set_row(0, (0, 0, 0));
    assert_eq!(m, Matrix33::new(0, 2, 3, 0, 5, 6, 0, 8, 9));

    let mut m = Matrix44::zero();
    m.set_row(3, vec4(1, 2, 3, 4));
    assert_eq!(m[3], 1);
    assert_eq!(m[7], 2);
    assert_eq!(m[11], 3);
    assert_eq!(m[15], 4);
    assert_eq!(m.col(3), vec4(0, 0, 0, 4));
  }

  #[test]
  fn element_wise_arithmetic() {
    let a = Matrix22::new(1, 2, 3, 4);
    let b = Matrix22::new(5, 6, 7, 8);
    assert_eq!(a + b, Matrix22::new(6, 8, 10, 12));
    assert_eq!(b - a, Matrix22::splat(4));
    assert_eq!(-a, Matrix22::new(-1, -2, -3, -4));

    let mut c = a;
    c += b;
    c -= a;
    assert_eq!(c, b);
  }

  #[test]
  fn scaling_by_every_scalar_kind() {
    let a = Matrix22::new(1, 2, 3, 4);
    assert_eq!(a * 2, Matrix22::new(2, 4, 6, 8));
    assert_eq!(2 * a, a * 2);
    assert_eq!(a * 0.5_f32, Matrix22::new(0, 1, 1, 2));
    assert_eq!(a / 2, Matrix22::new(0, 1, 1, 2));

    let mut f = Matrix33::splat(1.0_f32);
    f *= 3.0_f64;
    f /= 2;
    assert_eq!(f, Matrix33::splat(1.5));
    assert_eq!(0.5_f64 * Matrix44::splat(4.0_f64), Matrix44::splat(2.0));
  }

  #[test]
  #[should_panic]
  fn division_by_zero() {
    let _ = Matrix22::new(1, 2, 3, 4) / 0;
  }

  #[test]
  fn product_2x2() {
    let a = Matrix22::new(1, 2, 3, 4);
    let b = Matrix22::new(5, 6, 7, 8);
    assert_eq!(a * b, Matrix22::new(23, 34, 31, 46));
    assert_eq!(b * a, Matrix22::new(19, 22, 43, 50));

    let mut c = a;
    c *= b;
    assert_eq!(c, a * b);
  }

  #[test]
  fn product_matches_reference() {
    #[rustfmt::skip]
    let values = [
      1., -2., 3., 0.5,
      4., 5., -6., 1.,
      0., 2., 1., -1.,
      3., 0., 2., 7.,
    ];
    #[rustfmt::skip]
    let other = [
      2., 1., 0., -3.,
      -1., 4., 2., 0.,
      5., 0., 1., 2.,
      1., 1., -2., 6.,
    ];
    let ours: [f64; 16] = (Matrix44::from(values) * Matrix44::from(other)).into();

    let to_ref = |v: [f64; 16]| {
      cgmath::Matrix4::new(
        v[0], v[1], v[2], v[3], v[4], v[5], v[6], v[7], v[8], v[9], v[10], v[11], v[12], v[13],
        v[14], v[15],
      )
    };
    let expect = to_ref(values) * to_ref(other);
    let expect: &[f64; 16] = expect.as_ref();
    assert_eq!(&ours, expect);

    let a = Matrix33::new(1., 2., 3., 4., 5., 6., 7., 8., 10.);
    let b = Matrix33::new(-1., 0., 2., 3., 1., 1., 0., 4., -2.);
    let ca = cgmath::Matrix3::new(1., 2., 3., 4., 5., 6., 7., 8., 10.);
    let cb = cgmath::Matrix3::new(-1., 0., 2., 3., 1., 1., 0., 4., -2.);
    let product = ca * cb;
    let expect: &[f64; 9] = product.as_ref();
    assert_eq!((a * b).as_array(), expect);
  }

  #[test]
  fn identity_is_neutral() {
    let x = Matrix33::new(1, 2, 3, 4, 5, 6, 7, 8, 9);
    let i = Matrix33::identity();
    assert_eq!(x * i, x);
    assert_eq!(i * x, x);

    let x = Matrix44::new(
      0.5, 1., 2., 3., 4., 5., 6., 7., 8., 9., 10., 11., 12., 13., 14., 15.,
    );
    assert_eq!(x * Matrix44::identity(), x);
    assert_eq!(Matrix44::identity() * x, x);
  }

  #[test]
  fn transpose_twice() {
    let m = Matrix22::new(1, 2, 3, 4);
    assert_eq!(transpose(&m), Matrix22::new(1, 3, 2, 4));
    assert_eq!(transpose(&transpose(&m)), m);

    let m = Matrix33::new(1., 2., 3., 4., 5., 6., 7., 8., 9.);
    assert_eq!(transpose(&m).row(0), m.col(0));
    assert_eq!(transpose(&transpose(&m)), m);

    let m = Matrix44::from(std::array::from_fn::<i32, 16, _>(|i| i as i32));
    let t = transpose(&m);
    for i in 0..4 {
      assert_eq!(t.col(i), m.row(i));
    }
    assert_eq!(transpose(&t), m);
  }

  #[test]
  fn determinant_of_identity() {
    assert_eq!(det(&Matrix22::<i32>::identity()), 1.);
    assert_eq!(det(&Matrix33::<f32>::identity()), 1.);
    assert_eq!(det(&Matrix44::<f64>::identity()), 1.);
  }

  #[test]
  fn to_string() {
    assert_eq!(Matrix22::new(1, 2, 3, 4).to_string(), "[ [ 1, 2 ], [ 3, 4 ] ]");
    assert_eq!(
      Matrix33::new(1, 2, 3, 4, 5, 6, 7, 8, 9).to_string(),
      "[ [ 1, 2, 3 ], [ 4, 5, 6 ], [ 7, 8, 9 ] ]"
    );
    assert_eq!(
      Matrix44d::identity().to_string(),
      "[ [ 1, 0, 0, 0 ], [ 0, 1, 0, 0 ], [ 0, 0, 1, 0 ], [ 0, 0, 0, 1 ] ]"
    );
  }

  #[test]
  fn gpu_layout() {
    let m = Matrix22::new(1.0_f32, 2., 3., 4.);
    let bytes: &[u8] = bytemuck::bytes_of(&m);
    assert_eq!(bytes.len(), 16);
    let floats: &[f32] = bytemuck::cast_slice(bytes);
    assert_eq!(floats, &[1., 2., 3., 4.]);
  }

  #[test]
  fn serde_round_trip() {
    let m = Matrix22::new(1, 2, 3, 4);
    let json = serde_json::to_string(&m).unwrap();
    let back: Matrix22i = serde_json::from_str(&json).unwrap();
    assert_eq!(back, m);
  }
}
