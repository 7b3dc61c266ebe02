//! Tilt estimate from a single accelerometer sample.
//!
//! At rest the accelerometer measures gravity only, so its direction gives
//! the sensor's inclination. No filtering is done: motion shows up directly as
//! tilt error, and rotation about the gravity vector is not observable.

use embedded_hal_async::i2c::*;
use micromath::vector::Vector3d;

use crate::{Error, Mpu6050};

const RAD_TO_DEG: f32 = 180.0 / core::f32::consts::PI;

impl<I, E> Mpu6050<I>
where
  I: I2c<SevenBitAddress, Error = E>,
{
  /// Tilt estimate in degrees for `accel`, or for a fresh
  /// [`read_accel`](Self::read_accel) when `None`.
  ///
  /// With `Some(..)` the bus is not touched and the call cannot fail.
  pub async fn read_rotation(&mut self, accel: Option<Vector3d<f32>>) -> Result<Vector3d<f32>, Error<E>> {
    let accel = match accel {
      Some(a) => a,
      None => self.read_accel().await?,
    };
    Ok(rotation(accel))
  }
}

/// Tilt angles in degrees from an acceleration vector in g.
///
/// - `x` (pitch): `-atan2(y, √(x² + z²))`
/// - `y` (roll): `-atan2(x, √(y² + z²))`
/// - `z`: `-atan2(y, √(z² + x²))`
///
/// The zero vector has no direction and yields `(0, 0, 0)`. The result never
/// contains NaN.
pub fn rotation(a: Vector3d<f32>) -> Vector3d<f32> {
  if a.x == 0.0 && a.y == 0.0 && a.z == 0.0 {
    return Vector3d { x: 0.0, y: 0.0, z: 0.0 };
  }

  Vector3d {
    x: angle(a.y, dist(a.x, a.z)),
    y: angle(a.x, dist(a.y, a.z)),
    z: angle(a.y, dist(a.z, a.x)),
  }
}

#[inline]
fn dist(a: f32, b: f32) -> f32 {
  libm::sqrtf(a * a + b * b)
}

#[inline]
fn angle(opposite: f32, adjacent: f32) -> f32 {
  let deg = -(libm::atan2f(opposite, adjacent) * RAD_TO_DEG);
  if deg.is_finite() {
    deg
  } else {
    0.0
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn close(a: f32, b: f32) -> bool {
    a - b < 1e-3 && b - a < 1e-3
  }

  #[test]
  fn zero_vector_is_level() {
    let r = rotation(Vector3d { x: 0.0, y: 0.0, z: 0.0 });
    assert_eq!(r, Vector3d { x: 0.0, y: 0.0, z: 0.0 });
  }

  #[test]
  fn flat_on_table() {
    let r = rotation(Vector3d { x: 0.0, y: 0.0, z: 1.0 });
    assert!(close(r.x, 0.0) && close(r.y, 0.0) && close(r.z, 0.0), "{r:?}");
  }

  #[test]
  fn pitched_forty_five_degrees() {
    let r = rotation(Vector3d { x: 0.0, y: 1.0, z: 1.0 });
    assert!(close(r.x, -45.0), "{r:?}");
    assert!(close(r.y, 0.0), "{r:?}");
    assert!(close(r.z, -45.0), "{r:?}");
  }

  #[test]
  fn rolled_forty_five_degrees() {
    let r = rotation(Vector3d { x: -1.0, y: 0.0, z: 1.0 });
    assert!(close(r.x, 0.0), "{r:?}");
    assert!(close(r.y, 45.0), "{r:?}");
  }

  /// Same formula evaluated in f64.
  fn exact(opposite: f32, a: f32, b: f32) -> f32 {
    let (o, a, b) = (f64::from(opposite), f64::from(a), f64::from(b));
    (-libm::atan2(o, libm::sqrt(a * a + b * b)) * (180.0 / core::f64::consts::PI)) as f32
  }

  #[test]
  fn thirty_degrees_pitch() {
    let r = rotation(Vector3d { x: 0.0, y: 0.5, z: 0.866 });
    assert!(close(r.x, exact(0.5, 0.0, 0.866)), "{r:?}");
    assert!(r.x < -29.99 && r.x > -30.01, "{r:?}");
  }

  #[test]
  fn matches_formula_off_axis() {
    for v in [
      Vector3d { x: -1.4, y: 1.85, z: -0.2 },
      Vector3d { x: 0.3, y: 0.5, z: 0.8 },
      Vector3d { x: 0.9, y: -0.1, z: -0.4 },
    ] {
      let r = rotation(v);
      assert!(close(r.x, exact(v.y, v.x, v.z)), "{v:?} -> {r:?}");
      assert!(close(r.y, exact(v.x, v.y, v.z)), "{v:?} -> {r:?}");
      assert!(close(r.z, exact(v.y, v.z, v.x)), "{v:?} -> {r:?}");
    }
    let r = rotation(Vector3d { x: -1.4, y: 1.85, z: -0.2 });
    assert!(r.x < -52.5 && r.x > -52.7, "{r:?}");
  }

  #[test]
  fn never_nan() {
    for v in [
      Vector3d { x: 1.0, y: 0.0, z: 0.0 },
      Vector3d { x: 0.0, y: -1.0, z: 0.0 },
      Vector3d { x: 0.0, y: 0.0, z: -1.0 },
      Vector3d { x: f32::MIN_POSITIVE, y: 0.0, z: 0.0 },
    ] {
      let r = rotation(v);
      assert!(!r.x.is_nan() && !r.y.is_nan() && !r.z.is_nan(), "{v:?} -> {r:?}");
    }
  }
}
