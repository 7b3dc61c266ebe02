//! Accelerometer data reading.
//!
//! The driver leaves `ACCEL_CONFIG` at its power-on value, ±2 g, where one g
//! is 16384 LSB.
//!
//! # Examples
//!
//! ```no_run
//! # async fn example(mut imu: mpu6050::Mpu6050<impl embedded_hal_async::i2c::I2c>) {
//! // Read acceleration in g units
//! let accel = imu.read_accel().await.unwrap();
//! println!("Accel: x={}, y={}, z={}", accel.x, accel.y, accel.z);
//!
//! // Tilt from that same sample, no extra bus traffic
//! let tilt = imu.read_rotation(Some(accel)).await.unwrap();
//! println!("Pitch: {}, roll: {}", tilt.x, tilt.y);
//! # }
//! ```

use embedded_hal_async::i2c::*;
use micromath::vector::Vector3d;

use super::{defs::*, Error, Mpu6050};

impl<I, E> Mpu6050<I>
where
  I: I2c<SevenBitAddress, Error = E>,
{
  /// Read decoded accelerometer counts, X then Y then Z.
  ///
  /// Use [`read_accel`](Self::read_accel) for g units.
  pub async fn read_raw_accel(&mut self) -> Result<Vector3d<i16>, Error<E>> {
    let [x, y, z] = ACCEL_REGS;
    Ok(Vector3d { x: self.read_word_2c(x).await?, y: self.read_word_2c(y).await?, z: self.read_word_2c(z).await? })
  }

  /// Read acceleration in g (9.81 m/s²) with the accelerometer calibration
  /// applied.
  pub async fn read_accel(&mut self) -> Result<Vector3d<f32>, Error<E>> {
    let raw = self.read_raw_accel().await?;
    Ok(self.accel_offsets.apply(crate::scale(raw, ACCEL_SENSITIVITY)))
  }
}
