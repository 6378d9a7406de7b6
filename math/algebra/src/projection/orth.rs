use serde::{Deserialize, Serialize};

use crate::*;

/// Orthographic projection of an explicit view box.
#[derive(Serialize, Deserialize)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct OrthographicProjection<T> {
  pub near: T,
  pub far: T,
  pub left: T,
  pub right: T,
  pub bottom: T,
  pub top: T,
}

impl<T: Scalar> Default for OrthographicProjection<T> {
  fn default() -> Self {
    Self {
      near: T::zero(),
      far: T::cast_from_f64(1000.),
      left: -T::one(),
      right: T::one(),
      bottom: -T::one(),
      top: T::one(),
    }
  }
}

impl<T: Scalar> Projection<T> for OrthographicProjection<T> {
  fn update_projection(&self, projection: &mut Matrix44<T>) {
    ortho_mat44(
      projection,
      self.near,
      self.far,
      self.left,
      self.right,
      self.bottom,
      self.top,
    );
  }
}

impl<T: Scalar> ResizableProjection<T> for OrthographicProjection<T> {
  /// Keeps the vertical extent and the horizontal center, widens or narrows the
  /// horizontal extent to the viewport aspect.
  fn resize(&mut self, size: (T, T)) {
    let half_width = (self.top - self.bottom) * size.0 / size.1 / T::two();
    let center = (self.left + self.right) / T::two();
    self.left = center - half_width;
    self.right = center + half_width;
  }
}
