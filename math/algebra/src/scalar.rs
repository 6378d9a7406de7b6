use std::fmt::{Debug, Display};
use std::ops::Neg;

use num_traits::{Float, Num, NumAssign, Zero};

/// The element type of every vector and matrix.
///
/// Besides the plain arithmetic contract, a scalar knows how to be scaled by
/// each of the three scalar kinds used by client code (`i32`, `f32`, `f64`)
/// following the usual promotion rules: the product is computed in the wider
/// of the two kinds and converted back to `Self`.
pub trait Scalar:
  Num + NumAssign + Neg<Output = Self> + Copy + Default + PartialOrd + Debug + Display + Send + Sync + 'static
{
  fn as_f64(self) -> f64;

  /// Integer scalars truncate toward zero.
  fn cast_from_f64(v: f64) -> Self;

  fn mul_int(self, a: i32) -> Self;
  fn mul_float(self, a: f32) -> Self;
  fn mul_double(self, a: f64) -> Self;

  fn div_int(self, a: i32) -> Self;
  fn div_float(self, a: f32) -> Self;
  fn div_double(self, a: f64) -> Self;

  #[inline(always)]
  fn two() -> Self {
    Self::one() + Self::one()
  }
}

/// Scalars with trigonometry, required by the rotation and projection builders.
pub trait RealScalar: Scalar + Float {}
impl<T: Scalar + Float> RealScalar for T {}

macro_rules! impl_integer_scalar {
  ($($t:ty),+) => {
    $(
      impl Scalar for $t {
        #[inline(always)]
        fn as_f64(self) -> f64 {
          self as f64
        }
        #[inline(always)]
        fn cast_from_f64(v: f64) -> Self {
          v as $t
        }
        #[inline(always)]
        fn mul_int(self, a: i32) -> Self {
          self * a as $t
        }
        #[inline(always)]
        fn mul_float(self, a: f32) -> Self {
          (self as f32 * a) as $t
        }
        #[inline(always)]
        fn mul_double(self, a: f64) -> Self {
          (self as f64 * a) as $t
        }
        #[inline(always)]
        fn div_int(self, a: i32) -> Self {
          self / a as $t
        }
        #[inline(always)]
        fn div_float(self, a: f32) -> Self {
          (self as f32 / a) as $t
        }
        #[inline(always)]
        fn div_double(self, a: f64) -> Self {
          (self as f64 / a) as $t
        }
      }
    )+
  };
}

// a single precision product rounded from double precision is exactly the
// single precision product, so float factors can share the double path
macro_rules! impl_float_scalar {
  ($($t:ty),+) => {
    $(
      impl Scalar for $t {
        #[inline(always)]
        fn as_f64(self) -> f64 {
          self as f64
        }
        #[inline(always)]
        fn cast_from_f64(v: f64) -> Self {
          v as $t
        }
        #[inline(always)]
        fn mul_int(self, a: i32) -> Self {
          self * a as $t
        }
        #[inline(always)]
        fn mul_float(self, a: f32) -> Self {
          (self as f64 * a as f64) as $t
        }
        #[inline(always)]
        fn mul_double(self, a: f64) -> Self {
          (self as f64 * a) as $t
        }
        #[inline(always)]
        fn div_int(self, a: i32) -> Self {
          self / a as $t
        }
        #[inline(always)]
        fn div_float(self, a: f32) -> Self {
          (self as f64 / a as f64) as $t
        }
        #[inline(always)]
        fn div_double(self, a: f64) -> Self {
          (self as f64 / a) as $t
        }
      }
    )+
  };
}

impl_integer_scalar!(i32, i64);
impl_float_scalar!(f32, f64);

/// A factor a vector or matrix can be multiplied or divided by.
pub trait ScaleFactor: Copy + Zero + PartialEq + Debug {
  fn scale<T: Scalar>(self, value: T) -> T;
  /// `value / self`
  fn divide<T: Scalar>(self, value: T) -> T;
}

impl ScaleFactor for i32 {
  #[inline(always)]
  fn scale<T: Scalar>(self, value: T) -> T {
    value.mul_int(self)
  }
  #[inline(always)]
  fn divide<T: Scalar>(self, value: T) -> T {
    value.div_int(self)
  }
}

impl ScaleFactor for f32 {
  #[inline(always)]
  fn scale<T: Scalar>(self, value: T) -> T {
    value.mul_float(self)
  }
  #[inline(always)]
  fn divide<T: Scalar>(self, value: T) -> T {
    value.div_float(self)
  }
}

impl ScaleFactor for f64 {
  #[inline(always)]
  fn scale<T: Scalar>(self, value: T) -> T {
    value.mul_double(self)
  }
  #[inline(always)]
  fn divide<T: Scalar>(self, value: T) -> T {
    value.div_double(self)
  }
}
