use serde::{Deserialize, Serialize};

use crate::*;

/// Symmetric perspective projection described by a vertical field of view.
#[derive(Serialize, Deserialize)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PerspectiveProjection<T> {
  pub near: T,
  pub far: T,
  pub fov: Deg<T>,
  pub aspect: T,
}

impl<T: Scalar> Default for PerspectiveProjection<T> {
  fn default() -> Self {
    Self {
      near: T::one(),
      far: T::cast_from_f64(100_000.),
      fov: Deg::by(T::cast_from_f64(90.)),
      aspect: T::one(),
    }
  }
}

impl<T: RealScalar> PerspectiveProjection<T> {
  /// Half extents `(right, top)` of the near plane.
  pub fn near_plane_half_size(&self) -> (T, T) {
    let top = self.near * (self.fov.to_rad() / T::two()).tan();
    (top * self.aspect, top)
  }

  /// How many pixels one world unit covers at `distance` from the eye, for a
  /// viewport `view_height` pixels tall.
  pub fn pixels_per_unit(&self, distance: T, view_height: T) -> T {
    let (_, top) = self.near_plane_half_size();
    let height_at_one = T::two() * top / self.near;
    view_height / height_at_one / distance
  }
}

impl<T: RealScalar> Projection<T> for PerspectiveProjection<T> {
  fn update_projection(&self, projection: &mut Matrix44<T>) {
    let (right, top) = self.near_plane_half_size();
    persp_mat44(projection, self.near, self.far, -right, right, -top, top);
  }
}

impl<T: RealScalar> ResizableProjection<T> for PerspectiveProjection<T> {
  fn resize(&mut self, size: (T, T)) {
    self.aspect = size.0 / size.1;
  }
}

#[cfg(test)]
mod tests {
  use approx::assert_abs_diff_eq;

  use super::super::tests::assert_matches_reference;
  use crate::*;

  #[test]
  fn matches_reference_perspective() {
    let projection = PerspectiveProjection {
      near: 0.1,
      far: 500.,
      fov: Deg::by(60.),
      aspect: 16. / 9.,
    };
    let mut m = Matrix44::zero();
    projection.update_projection(&mut m);
    let reference = cgmath::perspective(cgmath::Deg(60.), 16. / 9., 0.1, 500.);
    assert_matches_reference(&m, reference, 1e-12);
  }

  #[test]
  fn resize_updates_aspect() {
    let mut projection = PerspectiveProjection::<f32>::default();
    projection.resize((1920., 1080.));
    assert_eq!(projection.aspect, 1920. / 1080.);

    let (right, top) = projection.near_plane_half_size();
    assert_abs_diff_eq!(top, 1., epsilon = 1e-6);
    assert_abs_diff_eq!(right, 1920. / 1080., epsilon = 1e-6);
  }

  #[test]
  fn pixels_per_unit() {
    let projection = PerspectiveProjection::<f64>::default();
    // fov 90: at distance 1 the view spans 2 units
    assert_abs_diff_eq!(projection.pixels_per_unit(1., 600.), 300., epsilon = 1e-9);
    assert_abs_diff_eq!(projection.pixels_per_unit(3., 600.), 100., epsilon = 1e-9);
  }
}
