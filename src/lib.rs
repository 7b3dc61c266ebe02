#![no_std]
#![doc = include_str!("../README.md")]
//!
//! ## Design Principles
//!
//! - **Async-first**: [`Mpu6050`] is built on `embedded-hal-async` I2C traits;
//!   [`blocking::Mpu6050`] offers the same API over `embedded-hal`
//! - **Ordered**: every 16-bit word is two single-byte reads, high byte first,
//!   and vectors are read X, Y, Z
//! - **All or nothing**: the first bus error aborts a composite read; partial
//!   vectors or snapshots are never returned
//! - **Typed calibration**: offsets are `Option<f32>` per axis
//!
//! ## Module Organization
//!
//! - [`accel`]: Accelerometer data reading
//! - [`gyro`]: Gyroscope data reading
//! - [`rotation`]: Tilt estimate from the gravity vector
//! - [`calib`]: Calibration offsets
//! - [`blocking`]: Blocking driver
//!
//! ## Basic Usage
//!
//! ```no_run
//! # use embedded_hal_async::i2c::{I2c, ErrorKind};
//! # async fn example(i2c: impl I2c<Error = ErrorKind>) -> Result<(), mpu6050::Error<ErrorKind>> {
//! use mpu6050::{Mpu6050, DEFAULT_ADDRESS};
//!
//! // Wakes the device
//! let mut imu = Mpu6050::new(i2c, DEFAULT_ADDRESS).await?;
//!
//! let sample = imu.read_all().await?;
//! let _pitch = sample.rotation.x;
//! # Ok(())
//! # }
//! ```

use embedded_hal_async::i2c::*;

pub mod accel;
pub mod blocking;
pub mod calib;
mod defs;
pub mod gyro;
pub mod rotation;
pub(crate) mod rw;
mod types;

pub use defs::*;
pub use rotation::rotation;
pub use types::*;

use calib::Offsets;

/// Driver error type.
///
/// Wraps the underlying I2C error together with the register address whose
/// transaction failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
  /// I2C transaction on `reg` failed
  Bus { reg: u8, source: E },
}

impl<E> Error<E> {
  #[inline]
  pub(crate) fn bus(reg: u8, source: E) -> Self {
    #[cfg(feature = "defmt")]
    defmt::warn!("MPU-6050: bus error at register {=u8:#x}", reg);
    Error::Bus { reg, source }
  }

  /// Register address of the failed transaction.
  pub fn reg(&self) -> u8 {
    match self {
      Error::Bus { reg, .. } => *reg,
    }
  }

  /// Underlying I2C error.
  pub fn into_inner(self) -> E {
    match self {
      Error::Bus { source, .. } => source,
    }
  }
}

impl<E: core::fmt::Debug> core::fmt::Display for Error<E> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    match self {
      Error::Bus { reg, source } => write!(f, "I2C error at register {reg:#04x}: {source:?}"),
    }
  }
}

/// MPU-6050 device driver instance.
///
/// Owns the I2C bus (or a shared-bus device handle) and the calibration
/// offsets. Every bus operation takes `&mut self`, so one instance never has
/// two transactions in flight.
///
/// # Type Parameters
///
/// - `I`: I2C implementation (must implement `embedded_hal_async::i2c::I2c`)
pub struct Mpu6050<I> {
  pub(crate) i2c: I,
  pub(crate) address: u8,
  pub(crate) gyro_offsets: Offsets,
  pub(crate) accel_offsets: Offsets,
}

impl<I, E> Mpu6050<I>
where
  I: I2c<SevenBitAddress, Error = E>,
{
  /// Create a driver and wake the device.
  ///
  /// Writes `0x00` to `PWR_MGMT_1` (one transaction) to clear the sleep bit
  /// the chip sets at power-up. Fails if the device does not acknowledge.
  ///
  /// # Arguments
  ///
  /// - `i2c`: I2C bus implementation
  /// - `address`: 7-bit device address, usually [`DEFAULT_ADDRESS`]
  pub async fn new(i2c: I, address: u8) -> Result<Self, Error<E>> {
    let mut imu = Self { i2c, address, gyro_offsets: Offsets::new(), accel_offsets: Offsets::new() };
    imu.wake().await?;
    Ok(imu)
  }

  /// Clear the sleep bit again, e.g. after the device was reset externally.
  pub async fn wake(&mut self) -> Result<(), Error<E>> {
    self.write_u8(Register::PwrMgmt1.into(), WAKE).await?;
    #[cfg(feature = "defmt")]
    defmt::debug!("MPU-6050 at {=u8:#x} awake", self.address);
    Ok(())
  }

  /// Read the die temperature in °C.
  pub async fn read_temperature(&mut self) -> Result<f32, Error<E>> {
    let raw = self.read_word_2c(Register::TempOutH).await?;
    Ok(types::temperature(raw))
  }

  /// Read gyro, accelerometer and temperature as one sample.
  ///
  /// The rotation estimate is computed from the accelerometer values of this
  /// sample. The first failed transaction aborts the whole read.
  pub async fn read_all(&mut self) -> Result<Snapshot, Error<E>> {
    let raw_gyro = self.read_raw_gyro().await?;
    let raw_accel = self.read_raw_accel().await?;
    let temperature = self.read_temperature().await?;
    Ok(Snapshot::assemble(raw_gyro, raw_accel, temperature, &self.gyro_offsets, &self.accel_offsets))
  }
}

// Bus-independent functionality
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
