/// Generate array conversion implementations for a compound array type
macro_rules! impl_fixed_array_conversions {
  ($ArrayN:ident <$S:ident> { $($field:ident : $index:tt),+ }, $n:expr) => {
    impl<$S> From<$ArrayN<$S>> for [$S; $n] {
      #[inline]
      fn from(v: $ArrayN<$S>) -> [$S; $n] {
        match v { $ArrayN { $($field),+ } => [$($field),+] }
      }
    }

    impl<$S> From<[$S; $n]> for $ArrayN<$S> {
      #[inline]
      fn from(v: [$S; $n]) -> $ArrayN<$S> {
        let [$($field),+] = v;
        $ArrayN { $($field),+ }
      }
    }

    impl<$S> std::ops::Index<usize> for $ArrayN<$S> {
      type Output = $S;

      #[inline]
      fn index(&self, i: usize) -> &$S {
        match i {
          $($index => &self.$field,)+
          _ => panic!("index {} out of range for {}", i, stringify!($ArrayN)),
        }
      }
    }

    impl<$S> std::ops::IndexMut<usize> for $ArrayN<$S> {
      #[inline]
      fn index_mut(&mut self, i: usize) -> &mut $S {
        match i {
          $($index => &mut self.$field,)+
          _ => panic!("index {} out of range for {}", i, stringify!($ArrayN)),
        }
      }
    }
  };
}

/// Generate homogeneous tuple conversion implementations for a compound array type
macro_rules! impl_tuple_conversions {
  ($ArrayN:ident <$S:ident> { $($field:ident),+ }, $Tuple:ty) => {
    impl<$S> From<$ArrayN<$S>> for $Tuple {
      #[inline]
      fn from(v: $ArrayN<$S>) -> $Tuple {
        match v { $ArrayN { $($field),+ } => ($($field),+,) }
      }
    }

    impl<$S> From<$Tuple> for $ArrayN<$S> {
      #[inline]
      fn from(v: $Tuple) -> $ArrayN<$S> {
        match v { ($($field),+,) => $ArrayN { $($field),+ } }
      }
    }
  };
}

/// Generates the scalar multiplication and division operators for every
/// supported scalar kind. The type must provide `scale_by` and `divide_by`.
macro_rules! impl_scale_operators {
  ($Compound:ident) => {
    impl_scale_operators!($Compound, i32);
    impl_scale_operators!($Compound, f32);
    impl_scale_operators!($Compound, f64);
  };
  ($Compound:ident, $Factor:ty) => {
    impl<T: Scalar> std::ops::MulAssign<$Factor> for $Compound<T> {
      #[inline]
      fn mul_assign(&mut self, a: $Factor) {
        self.scale_by(a);
      }
    }

    impl<T: Scalar> std::ops::Mul<$Factor> for $Compound<T> {
      type Output = Self;
      #[inline]
      fn mul(mut self, a: $Factor) -> Self {
        self.scale_by(a);
        self
      }
    }

    impl<T: Scalar> std::ops::Mul<$Compound<T>> for $Factor {
      type Output = $Compound<T>;
      #[inline]
      fn mul(self, mut v: $Compound<T>) -> $Compound<T> {
        v.scale_by(self);
        v
      }
    }

    impl<T: Scalar> std::ops::DivAssign<$Factor> for $Compound<T> {
      #[inline]
      fn div_assign(&mut self, a: $Factor) {
        self.divide_by(a);
      }
    }

    impl<T: Scalar> std::ops::Div<$Factor> for $Compound<T> {
      type Output = Self;
      #[inline]
      fn div(mut self, a: $Factor) -> Self {
        self.divide_by(a);
        self
      }
    }
  };
}

/// Generates the short type aliases for the three scalar kinds.
macro_rules! impl_scalar_kind_aliases {
  ($Compound:ident) => {
    paste::paste! {
      pub type [<$Compound i>] = $Compound<i32>;
      pub type [<$Compound f>] = $Compound<f32>;
      pub type [<$Compound d>] = $Compound<f64>;
    }
  };
}
