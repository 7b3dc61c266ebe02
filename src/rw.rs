use embedded_hal_async::i2c::*;

use crate::{Error, Mpu6050, Register};

impl<I, E> Mpu6050<I>
where
  I: I2c<SevenBitAddress, Error = E>,
{
  /// Read a big-endian 16-bit register: `reg` (high byte) then `reg + 1`.
  ///
  /// The low byte is only requested once the high byte has arrived.
  pub async fn read_word(&mut self, reg: Register) -> Result<u16, Error<E>> {
    let high = self.read_u8(reg.into()).await?;
    let low = self.read_u8(reg.next()).await?;
    Ok(u16::from(high) << 8 | u16::from(low))
  }

  /// [`read_word`](Self::read_word) decoded as two's complement.
  pub async fn read_word_2c(&mut self, reg: Register) -> Result<i16, Error<E>> {
    Ok(crate::decode_word(self.read_word(reg).await?))
  }

  pub(crate) async fn read_u8(&mut self, reg: u8) -> Result<u8, Error<E>> {
    let mut b = [0u8; 1];
    self
      .i2c
      .write_read(self.address, &[reg], &mut b)
      .await
      .map_err(|e| Error::bus(reg, e))?;
    Ok(b[0])
  }

  pub(crate) async fn write_u8(&mut self, reg: u8, value: u8) -> Result<(), Error<E>> {
    self.i2c.write(self.address, &[reg, value]).await.map_err(|e| Error::bus(reg, e))
  }
}
