//! Gyroscope data reading.
//!
//! The driver leaves `GYRO_CONFIG` at its power-on value, ±250 °/s, where
//! one degree per second is 131 LSB.
//!
//! # Examples
//!
//! ```no_run
//! # async fn example(mut imu: mpu6050::Mpu6050<impl embedded_hal_async::i2c::I2c>) {
//! use mpu6050::calib::Offsets;
//!
//! // Cancel a measured zero-rate bias on X and Z.
//! imu.set_gyro_calibration(Offsets::new().with_x(0.42).with_z(-1.1));
//!
//! let gyro = imu.read_gyro().await.unwrap();
//! println!("Gyro: x={}, y={}, z={}", gyro.x, gyro.y, gyro.z);
//! # }
//! ```

use embedded_hal_async::i2c::*;
use micromath::vector::Vector3d;

use super::{defs::*, Error, Mpu6050};

impl<I, E> Mpu6050<I>
where
  I: I2c<SevenBitAddress, Error = E>,
{
  /// Read decoded gyroscope counts, X then Y then Z.
  ///
  /// Use [`read_gyro`](Self::read_gyro) for °/s.
  pub async fn read_raw_gyro(&mut self) -> Result<Vector3d<i16>, Error<E>> {
    let [x, y, z] = GYRO_REGS;
    Ok(Vector3d { x: self.read_word_2c(x).await?, y: self.read_word_2c(y).await?, z: self.read_word_2c(z).await? })
  }

  /// Read angular rate in degrees per second with the gyro calibration applied.
  pub async fn read_gyro(&mut self) -> Result<Vector3d<f32>, Error<E>> {
    let raw = self.read_raw_gyro().await?;
    Ok(self.gyro_offsets.apply(crate::scale(raw, GYRO_SENSITIVITY)))
  }
}
