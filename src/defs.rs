/// MPU-6050 register map (the subset this driver touches).
///
/// Data registers hold big-endian 16-bit words: the named address is the high
/// byte and the next address is the low byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Register {
  AccelXoutH = 0x3B,
  AccelYoutH = 0x3D,
  AccelZoutH = 0x3F,
  TempOutH = 0x41,
  GyroXoutH = 0x43,
  GyroYoutH = 0x45,
  GyroZoutH = 0x47,
  /// Power management 1. Bit 6 is the sleep bit, set after power-up.
  PwrMgmt1 = 0x6B,
}

impl Register {
  /// Address of the low byte paired with this register.
  #[inline]
  pub const fn next(self) -> u8 {
    (self as u8).wrapping_add(1)
  }
}

impl From<Register> for u8 {
  #[inline]
  fn from(r: Register) -> Self {
    r as u8
  }
}

pub(crate) const GYRO_REGS: [Register; 3] = [Register::GyroXoutH, Register::GyroYoutH, Register::GyroZoutH];
pub(crate) const ACCEL_REGS: [Register; 3] = [Register::AccelXoutH, Register::AccelYoutH, Register::AccelZoutH];

/// I2C address with AD0 tied low.
pub const DEFAULT_ADDRESS: u8 = 0x68;
/// I2C address with AD0 tied high.
pub const ALT_ADDRESS: u8 = 0x69;

/// Gyro sensitivity at ±250 °/s full scale (LSB per °/s).
pub const GYRO_SENSITIVITY: f32 = 131.0;
/// Accelerometer sensitivity at ±2 g full scale (LSB per g).
pub const ACCEL_SENSITIVITY: f32 = 16384.0;
/// Temperature sensitivity (LSB per °C).
pub const TEMP_SENSITIVITY: f32 = 340.0;
/// Temperature offset in °C, added after scaling.
pub const TEMP_OFFSET: f32 = 36.53;

/// `PWR_MGMT_1` value that clears sleep and selects the internal oscillator.
pub(crate) const WAKE: u8 = 0x00;
