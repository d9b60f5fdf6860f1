// src/bus/native.rs

//! Two-wire transport over an `embedded-hal` 1.0 I2C peripheral.

use crate::common::hal_traits::TwoWire;
use embedded_hal::i2c::{I2c, SevenBitAddress};
use heapless::Vec;

/// Transmit and receive buffer size, the classic Wire limit.
pub const BUFFER_LEN: usize = 32;

/// Buffers a Wire-style transmission and replays it as `embedded-hal` I2C operations.
///
/// A transmission closed with a stop becomes one `write`. One closed without a stop
/// is held and sent, together with the following request to the same address, as a
/// single `write_read` (repeated-start). Requests longer than [`BUFFER_LEN`] are
/// granted only up to the buffer size and never reach the peripheral.
#[derive(Debug)]
pub struct HalWire<I2C> {
    i2c: I2C,
    address: SevenBitAddress,
    tx: Vec<u8, BUFFER_LEN>,
    held: Option<(SevenBitAddress, Vec<u8, BUFFER_LEN>)>,
    rx: Vec<u8, BUFFER_LEN>,
    rx_pos: usize,
}

impl<I2C> HalWire<I2C>
where
    I2C: I2c,
{
    pub fn new(i2c: I2C) -> Self {
        HalWire {
            i2c,
            address: 0,
            tx: Vec::new(),
            held: None,
            rx: Vec::new(),
            rx_pos: 0,
        }
    }

    /// Gives the peripheral back.
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C> TwoWire for HalWire<I2C>
where
    I2C: I2c,
{
    type Error = I2C::Error;

    fn begin_transmission(&mut self, address: u8) {
        self.address = address;
        self.tx.clear();
    }

    fn write(&mut self, byte: u8) -> usize {
        match self.tx.push(byte) {
            Ok(()) => 1,
            Err(_) => 0,
        }
    }

    fn write_all(&mut self, data: &[u8]) -> usize {
        data.iter().take_while(|b| self.tx.push(**b).is_ok()).count()
    }

    fn end_transmission(&mut self, send_stop: bool) -> Result<(), Self::Error> {
        if send_stop {
            self.held = None;
            let result = self.i2c.write(self.address, &self.tx);
            self.tx.clear();
            result
        } else {
            self.held = Some((self.address, core::mem::take(&mut self.tx)));
            Ok(())
        }
    }

    fn abort_transmission(&mut self) {
        self.tx.clear();
        self.held = None;
    }

    fn request_from(&mut self, address: u8, len: usize) -> Result<usize, Self::Error> {
        self.rx.clear();
        self.rx_pos = 0;
        if len > BUFFER_LEN {
            // Grant the buffer size without a transfer, the caller sees the short grant
            self.held = None;
            return Ok(BUFFER_LEN);
        }
        // Cannot fail, len <= capacity
        let _ = self.rx.resize(len, 0);

        let result = match self.held.take() {
            Some((held_address, prefix)) if held_address == address && !prefix.is_empty() => {
                self.i2c.write_read(address, &prefix, &mut self.rx)
            }
            _ => self.i2c.read(address, &mut self.rx),
        };
        if let Err(e) = result {
            self.rx.clear();
            return Err(e);
        }
        Ok(len)
    }

    fn available(&mut self) -> usize {
        self.rx.len() - self.rx_pos
    }

    fn read(&mut self) -> nb::Result<u8, Self::Error> {
        match self.rx.get(self.rx_pos) {
            Some(&byte) => {
                self.rx_pos += 1;
                Ok(byte)
            }
            None => Err(nb::Error::WouldBlock),
        }
    }
}
