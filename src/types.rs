use micromath::vector::Vector3d;

use crate::{calib::Offsets, defs::*};

/// One point-in-time sample of every sensor on the chip.
///
/// Produced by `read_all`; the rotation is derived from `accel` of the same
/// sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot {
  /// Angular rate in °/s, calibration applied.
  pub gyro: Vector3d<f32>,
  /// Acceleration in g, calibration applied.
  pub accel: Vector3d<f32>,
  /// Tilt estimate in degrees. See [`rotation`](crate::rotation::rotation).
  pub rotation: Vector3d<f32>,
  /// Die temperature in °C.
  pub temperature: f32,
  /// Decoded gyro counts.
  pub raw_gyro: Vector3d<i16>,
  /// Decoded accelerometer counts.
  pub raw_accel: Vector3d<i16>,
}

impl Snapshot {
  pub(crate) fn assemble(
    raw_gyro: Vector3d<i16>,
    raw_accel: Vector3d<i16>,
    temperature: f32,
    gyro_offsets: &Offsets,
    accel_offsets: &Offsets,
  ) -> Self {
    let gyro = gyro_offsets.apply(scale(raw_gyro, GYRO_SENSITIVITY));
    let accel = accel_offsets.apply(scale(raw_accel, ACCEL_SENSITIVITY));
    Snapshot { gyro, accel, rotation: crate::rotation(accel), temperature, raw_gyro, raw_accel }
  }
}

/// Decode a two's-complement register word.
///
/// Words at or above `0x8000` map to `-(65536 - raw)`, everything else is
/// returned unchanged.
///
/// ```
/// assert_eq!(mpu6050::decode_word(0x8000), -32768);
/// assert_eq!(mpu6050::decode_word(0xFFFF), -1);
/// assert_eq!(mpu6050::decode_word(0x7FFF), 32767);
/// ```
pub fn decode_word(raw: u16) -> i16 {
  let raw = i32::from(raw);
  let v = if raw >= 0x8000 { -(65536 - raw) } else { raw };
  // v is in [-32768, 32767] for every u16 input
  v as i16
}

/// Divide decoded counts by a sensitivity (LSB per unit).
pub fn scale(raw: Vector3d<i16>, divisor: f32) -> Vector3d<f32> {
  Vector3d { x: f32::from(raw.x) / divisor, y: f32::from(raw.y) / divisor, z: f32::from(raw.z) / divisor }
}

/// Convert a decoded `TEMP_OUT` word to °C.
pub fn temperature(raw: i16) -> f32 {
  f32::from(raw) / TEMP_SENSITIVITY + TEMP_OFFSET
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn decode_boundaries() {
    assert_eq!(decode_word(0x0000), 0);
    assert_eq!(decode_word(0x0001), 1);
    assert_eq!(decode_word(0x7FFF), 32767);
    assert_eq!(decode_word(0x8000), -32768);
    assert_eq!(decode_word(0x8001), -32767);
    assert_eq!(decode_word(0xFFFF), -1);
  }

  #[test]
  fn decode_matches_formula() {
    for raw in (0..=u16::MAX).step_by(257) {
      let expected = if raw >= 0x8000 { -(65536 - i32::from(raw)) } else { i32::from(raw) };
      assert_eq!(i32::from(decode_word(raw)), expected, "raw = {raw:#06x}");
    }
  }

  #[test]
  fn scale_gyro_counts() {
    let v = scale(Vector3d { x: 131, y: 262, z: 393 }, crate::GYRO_SENSITIVITY);
    assert_eq!(v, Vector3d { x: 1.0, y: 2.0, z: 3.0 });
  }

  #[test]
  fn scale_negative_accel_counts() {
    let v = scale(Vector3d { x: -16384, y: 8192, z: 0 }, crate::ACCEL_SENSITIVITY);
    assert_eq!(v, Vector3d { x: -1.0, y: 0.5, z: 0.0 });
  }

  fn close(a: f32, b: f32) -> bool {
    a - b < 1e-4 && b - a < 1e-4
  }

  #[test]
  fn temperature_conversion() {
    assert!(close(temperature(0), 36.53));
    assert!(close(temperature(340), 37.53));
    assert!(close(temperature(-3400), 26.53));
  }
}
