mod vec2;
mod vec3;
mod vec4;

pub use vec2::*;
pub use vec3::*;
pub use vec4::*;

use crate::*;

macro_rules! impl_vector {
  ($VectorN:ident { $($field:ident : $index:tt),+ }, $n:expr, $constructor:ident, $Tuple:ty) => {
    impl<T> $VectorN<T> {
      /// Construct a new vector, using the provided values.
      #[inline]
      pub const fn new($($field: T),+) -> Self {
        $VectorN { $($field),+ }
      }

      /// Perform the given operation on each field in the vector, returning a new vector
      /// constructed from the operations.
      #[inline]
      pub fn map<U, F>(self, mut f: F) -> $VectorN<U>
      where
        F: FnMut(T) -> U,
      {
        $VectorN { $($field: f(self.$field)),+ }
      }

      /// Overwrite every component in place.
      #[inline]
      pub fn assign(&mut self, $($field: T),+) -> &mut Self {
        $(self.$field = $field;)+
        self
      }
    }

    impl<T: Copy> $VectorN<T> {
      /// Every component set to `v`.
      #[inline]
      pub fn splat(v: T) -> Self {
        $VectorN { $($field: v),+ }
      }
    }

    impl<T: Scalar> $VectorN<T> {
      #[inline]
      pub fn zero() -> Self {
        Self::splat(T::zero())
      }

      #[inline]
      pub fn dot(&self, v2: Self) -> T {
        let mut sum = T::zero();
        $(sum += self.$field * v2.$field;)+
        sum
      }

      /// Always double precision, whatever the element type.
      #[inline]
      pub fn length(&self) -> f64 {
        self.dot(*self).as_f64().sqrt()
      }

      /// Divides by the length in place. The zero vector is left untouched.
      ///
      /// Not meaningful for integer vectors.
      #[inline]
      pub fn normalize(&mut self) -> &mut Self {
        let l = self.length();
        if l == 0.0 {
          return self;
        }
        self.divide_by(l)
      }

      /// The unsigned angle in radians between the two vectors, in `[0, pi/2]`.
      ///
      /// The dot product is squared before the square root, which folds obtuse
      /// angles onto their acute supplement.
      #[inline]
      pub fn get_angle(&self, v2: Self) -> f64 {
        let tmp = self.dot(v2).as_f64();
        (tmp * tmp / (self.dot(*self) * v2.dot(v2)).as_f64()).sqrt().acos()
      }

      /// Like [`Self::get_angle`], but both vectors must already be normalized.
      #[inline]
      pub fn get_anglen(&self, v2: Self) -> f64 {
        self.dot(v2).as_f64().acos()
      }

      /// The projection of this vector onto `v2`.
      #[inline]
      pub fn proj(&self, v2: Self) -> Self {
        let k = self.dot(v2) / v2.dot(v2);
        v2.map(|c| c * k)
      }

      /// Same as [`Self::proj`], writing the result into `vres`.
      #[inline]
      pub fn proj_into<'a>(&self, v2: Self, vres: &'a mut Self) -> &'a mut Self {
        *vres = self.proj(v2);
        vres
      }

      /// Multiply every component by `a`, in place.
      #[inline]
      pub fn scale_by<S: ScaleFactor>(&mut self, a: S) -> &mut Self {
        $(self.$field = a.scale(self.$field);)+
        self
      }

      /// Divide every component by `a`, in place.
      ///
      /// # Panics
      ///
      /// When `a` is exactly zero.
      #[inline]
      pub fn divide_by<S: ScaleFactor>(&mut self, a: S) -> &mut Self {
        assert!(!a.is_zero(), "vector divided by zero");
        $(self.$field = a.divide(self.$field);)+
        self
      }
    }

    /// The short constructor.
    #[inline]
    pub const fn $constructor<T>($($field: T),+) -> $VectorN<T> {
      $VectorN::new($($field),+)
    }

    impl<T: Scalar> std::ops::AddAssign for $VectorN<T> {
      #[inline]
      fn add_assign(&mut self, v2: Self) {
        $(self.$field += v2.$field;)+
      }
    }

    impl<T: Scalar> std::ops::Add for $VectorN<T> {
      type Output = Self;
      #[inline]
      fn add(mut self, v2: Self) -> Self {
        self += v2;
        self
      }
    }

    impl<T: Scalar> std::ops::SubAssign for $VectorN<T> {
      #[inline]
      fn sub_assign(&mut self, v2: Self) {
        $(self.$field -= v2.$field;)+
      }
    }

    impl<T: Scalar> std::ops::Sub for $VectorN<T> {
      type Output = Self;
      #[inline]
      fn sub(mut self, v2: Self) -> Self {
        self -= v2;
        self
      }
    }

    impl<T: Scalar> std::ops::Neg for $VectorN<T> {
      type Output = Self;
      #[inline]
      fn neg(self) -> Self {
        self.map(|c| -c)
      }
    }

    impl<T: std::fmt::Display> std::fmt::Display for $VectorN<T> {
      fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut sep = "[ ";
        $(
          write!(f, "{}{}", sep, self.$field)?;
          sep = ", ";
        )+
        let _ = sep;
        write!(f, " ]")
      }
    }

    unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for $VectorN<T> {}
    unsafe impl<T: bytemuck::Pod> bytemuck::Pod for $VectorN<T> {}

    impl_fixed_array_conversions!($VectorN<T> { $($field : $index),+ }, $n);
    impl_tuple_conversions!($VectorN<T> { $($field),+ }, $Tuple);
    impl_scale_operators!($VectorN);
    impl_scalar_kind_aliases!($VectorN);
  };
}

impl_vector!(Vector2 { x: 0, y: 1 }, 2, vec2, (T, T));
impl_vector!(Vector3 { x: 0, y: 1, z: 2 }, 3, vec3, (T, T, T));
impl_vector!(Vector4 { x: 0, y: 1, z: 2, w: 3 }, 4, vec4, (T, T, T, T));
