//! Blocking driver over `embedded-hal` 1.0 I2C.
//!
//! Same register access, decoding and calibration as the async
//! [`Mpu6050`](crate::Mpu6050); each call blocks the calling thread on the
//! bus.
//!
//! ```no_run
//! # use embedded_hal::i2c::{I2c, ErrorKind};
//! # fn example(i2c: impl I2c<Error = ErrorKind>) -> Result<(), mpu6050::Error<ErrorKind>> {
//! use mpu6050::{blocking::Mpu6050, DEFAULT_ADDRESS};
//!
//! let mut imu = Mpu6050::new(i2c, DEFAULT_ADDRESS)?;
//! let _celsius = imu.read_temperature()?;
//! # Ok(())
//! # }
//! ```

use embedded_hal::i2c::*;
use micromath::vector::Vector3d;

use crate::{calib::Offsets, defs::*, Error, Snapshot};

/// Blocking MPU-6050 device driver instance.
///
/// # Type Parameters
///
/// - `I`: I2C implementation (must implement `embedded_hal::i2c::I2c`)
pub struct Mpu6050<I> {
  i2c: I,
  address: u8,
  gyro_offsets: Offsets,
  accel_offsets: Offsets,
}

impl<I, E> Mpu6050<I>
where
  I: I2c<SevenBitAddress, Error = E>,
{
  /// Create a driver and wake the device with a single `PWR_MGMT_1` write.
  pub fn new(i2c: I, address: u8) -> Result<Self, Error<E>> {
    let mut imu = Self { i2c, address, gyro_offsets: Offsets::new(), accel_offsets: Offsets::new() };
    imu.wake()?;
    Ok(imu)
  }

  /// Clear the sleep bit again.
  pub fn wake(&mut self) -> Result<(), Error<E>> {
    self.write_u8(Register::PwrMgmt1.into(), WAKE)?;
    #[cfg(feature = "defmt")]
    defmt::debug!("MPU-6050 at {=u8:#x} awake", self.address);
    Ok(())
  }

  /// Read a big-endian 16-bit register: `reg` (high byte) then `reg + 1`.
  pub fn read_word(&mut self, reg: Register) -> Result<u16, Error<E>> {
    let high = self.read_u8(reg.into())?;
    let low = self.read_u8(reg.next())?;
    Ok(u16::from(high) << 8 | u16::from(low))
  }

  /// [`read_word`](Self::read_word) decoded as two's complement.
  pub fn read_word_2c(&mut self, reg: Register) -> Result<i16, Error<E>> {
    Ok(crate::decode_word(self.read_word(reg)?))
  }

  /// Read decoded gyroscope counts, X then Y then Z.
  pub fn read_raw_gyro(&mut self) -> Result<Vector3d<i16>, Error<E>> {
    self.read_vector(GYRO_REGS)
  }

  /// Read angular rate in °/s with the gyro calibration applied.
  pub fn read_gyro(&mut self) -> Result<Vector3d<f32>, Error<E>> {
    let raw = self.read_raw_gyro()?;
    Ok(self.gyro_offsets.apply(crate::scale(raw, GYRO_SENSITIVITY)))
  }

  /// Read decoded accelerometer counts, X then Y then Z.
  pub fn read_raw_accel(&mut self) -> Result<Vector3d<i16>, Error<E>> {
    self.read_vector(ACCEL_REGS)
  }

  /// Read acceleration in g with the accelerometer calibration applied.
  pub fn read_accel(&mut self) -> Result<Vector3d<f32>, Error<E>> {
    let raw = self.read_raw_accel()?;
    Ok(self.accel_offsets.apply(crate::scale(raw, ACCEL_SENSITIVITY)))
  }

  /// Read the die temperature in °C.
  pub fn read_temperature(&mut self) -> Result<f32, Error<E>> {
    let raw = self.read_word_2c(Register::TempOutH)?;
    Ok(crate::temperature(raw))
  }

  /// Tilt estimate in degrees for `accel`, or for a fresh
  /// [`read_accel`](Self::read_accel) when `None`.
  pub fn read_rotation(&mut self, accel: Option<Vector3d<f32>>) -> Result<Vector3d<f32>, Error<E>> {
    let accel = match accel {
      Some(a) => a,
      None => self.read_accel()?,
    };
    Ok(crate::rotation(accel))
  }

  /// Read gyro, accelerometer and temperature as one sample.
  pub fn read_all(&mut self) -> Result<Snapshot, Error<E>> {
    let raw_gyro = self.read_raw_gyro()?;
    let raw_accel = self.read_raw_accel()?;
    let temperature = self.read_temperature()?;
    Ok(Snapshot::assemble(raw_gyro, raw_accel, temperature, &self.gyro_offsets, &self.accel_offsets))
  }

  fn read_vector(&mut self, [x, y, z]: [Register; 3]) -> Result<Vector3d<i16>, Error<E>> {
    Ok(Vector3d { x: self.read_word_2c(x)?, y: self.read_word_2c(y)?, z: self.read_word_2c(z)? })
  }

  fn read_u8(&mut self, reg: u8) -> Result<u8, Error<E>> {
    let mut b = [0u8; 1];
    self.i2c.write_read(self.address, &[reg], &mut b).map_err(|e| Error::bus(reg, e))?;
    Ok(b[0])
  }

  fn write_u8(&mut self, reg: u8, value: u8) -> Result<(), Error<E>> {
    self.i2c.write(self.address, &[reg, value]).map_err(|e| Error::bus(reg, e))
  }
}

impl<I> Mpu6050<I> {
  /// 7-bit I2C address this driver talks to.
  pub fn address(&self) -> u8 {
    self.address
  }

  /// Consume the driver and hand back the bus.
  pub fn release(self) -> I {
    self.i2c
  }

  /// Replace the gyro offsets (°/s). Takes effect on the next read.
  pub fn set_gyro_calibration(&mut self, offsets: Offsets) {
    #[cfg(feature = "defmt")]
    defmt::debug!("MPU-6050: gyro calibration {}", offsets);
    self.gyro_offsets = offsets;
  }

  /// Replace the accelerometer offsets (g). Takes effect on the next read.
  pub fn set_accel_calibration(&mut self, offsets: Offsets) {
    #[cfg(feature = "defmt")]
    defmt::debug!("MPU-6050: accel calibration {}", offsets);
    self.accel_offsets = offsets;
  }

  /// Gyro offsets applied to every read.
  pub fn gyro_calibration(&self) -> Offsets {
    self.gyro_offsets
  }

  /// Accelerometer offsets applied to every read.
  pub fn accel_calibration(&self) -> Offsets {
    self.accel_offsets
  }
}
