//! Per-axis calibration offsets.
//!
//! Offsets are additive and applied after scaling, so they are expressed in
//! the sensor's physical unit (°/s for the gyro, g for the accelerometer).
//! They live in driver memory only and are lost with the driver.
//!
//! ```
//! use mpu6050::calib::Offsets;
//!
//! // Correct only the X axis; Y and Z are left as read.
//! let gyro = Offsets::new().with_x(-0.8);
//! assert_eq!(gyro.x, Some(-0.8));
//! assert_eq!(gyro.y, None);
//! ```

use micromath::vector::Vector3d;

/// Optional additive correction for each axis.
///
/// An axis is corrected only when its entry is `Some` and finite; `None`,
/// NaN and infinities leave the reading untouched.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Offsets {
  pub x: Option<f32>,
  pub y: Option<f32>,
  pub z: Option<f32>,
}

impl Offsets {
  /// No correction on any axis.
  pub const fn new() -> Self {
    Self { x: None, y: None, z: None }
  }

  /// Correction on all three axes.
  pub const fn xyz(x: f32, y: f32, z: f32) -> Self {
    Self { x: Some(x), y: Some(y), z: Some(z) }
  }

  pub const fn with_x(self, v: f32) -> Self {
    Self { x: Some(v), ..self }
  }

  pub const fn with_y(self, v: f32) -> Self {
    Self { y: Some(v), ..self }
  }

  pub const fn with_z(self, v: f32) -> Self {
    Self { z: Some(v), ..self }
  }

  /// Add the offsets to a scaled reading.
  pub fn apply(&self, v: Vector3d<f32>) -> Vector3d<f32> {
    Vector3d { x: correct(v.x, self.x), y: correct(v.y, self.y), z: correct(v.z, self.z) }
  }
}

#[inline]
fn correct(v: f32, o: Option<f32>) -> f32 {
  match o.filter(|o| o.is_finite()) {
    Some(o) => v + o,
    None => v,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  const ONE: Vector3d<f32> = Vector3d { x: 1.0, y: 2.0, z: 3.0 };

  #[test]
  fn default_is_identity() {
    assert_eq!(Offsets::default(), Offsets::new());
    assert_eq!(Offsets::default().apply(ONE), ONE);
  }

  #[test]
  fn single_axis() {
    let v = Offsets::new().with_x(5.0).apply(ONE);
    assert_eq!(v, Vector3d { x: 6.0, y: 2.0, z: 3.0 });
  }

  #[test]
  fn all_axes() {
    let v = Offsets::xyz(-1.0, 0.5, -3.0).apply(ONE);
    assert_eq!(v, Vector3d { x: 0.0, y: 2.5, z: 0.0 });
  }

  #[test]
  fn non_finite_entries_are_ignored() {
    let o = Offsets { x: Some(f32::NAN), y: Some(f32::INFINITY), z: Some(f32::NEG_INFINITY) };
    assert_eq!(o.apply(ONE), ONE);
  }
}
