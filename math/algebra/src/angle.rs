use serde::{Deserialize, Serialize};

use crate::Scalar;

pub const PI: f64 = std::f64::consts::PI;
pub const TWO_PI: f64 = 2.0 * PI;
pub const PI_DIV_180: f64 = PI / 180.0;
pub const INV_PI_DIV_180: f64 = 180.0 / PI;

#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
  deg * PI_DIV_180
}

#[inline]
pub fn rad_to_deg(rad: f64) -> f64 {
  rad * INV_PI_DIV_180
}

/// A simple value wrapper that indicate the inner value type is in degree unit.
/// Avoid possible miss conversion between degree and rad.
///
/// Every angle taken by the builders of this crate is in radians, convert with
/// [`Deg::to_rad`] before passing one in.
#[derive(Serialize, Deserialize)]
#[derive(Debug, Copy, Clone, Default, Hash, Eq, PartialEq)]
pub struct Deg<T> {
  pub value: T,
}

impl<T: Scalar> Deg<T> {
  pub fn by(value: T) -> Self {
    Deg { value }
  }

  /// Computed in double precision.
  pub fn to_rad(&self) -> T {
    T::cast_from_f64(deg_to_rad(self.value.as_f64()))
  }

  pub fn from_rad(rad: T) -> Self {
    Self::by(T::cast_from_f64(rad_to_deg(rad.as_f64())))
  }
}

#[cfg(test)]
mod tests {
  use approx::assert_abs_diff_eq;

  use super::*;

  #[test]
  fn conversions() {
    assert_abs_diff_eq!(deg_to_rad(180.), PI);
    assert_abs_diff_eq!(rad_to_deg(TWO_PI), 360.);
    assert_abs_diff_eq!(deg_to_rad(rad_to_deg(0.3)), 0.3, epsilon = 1e-15);
  }

  #[test]
  fn degree_wrapper() {
    assert_abs_diff_eq!(Deg::by(90.0_f32).to_rad(), std::f32::consts::FRAC_PI_2);
    assert_abs_diff_eq!(Deg::from_rad(PI / 4.).value, 45., epsilon = 1e-12);
    assert_eq!(Deg::by(90).to_rad(), 1);
    assert_eq!(Deg::<f64>::default().to_rad(), 0.);
  }
}
