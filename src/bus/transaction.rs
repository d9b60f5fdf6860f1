// src/bus/transaction.rs

use super::RegisterBus;
use crate::common::{
    error::{ImuError, TransferPhase},
    hal_traits::TwoWire,
};
use crate::logging::log_debug;

impl<W> RegisterBus<W>
where
    W: TwoWire,
{
    /// Reads `buffer.len()` consecutive registers starting at `reg`.
    ///
    /// Address phase, repeated-start, request, then byte-by-byte drain of the receive
    /// buffer. Each step is checked. When the device supplies fewer bytes than it
    /// granted, the bytes that did arrive are left at the front of `buffer` and the
    /// rest of `buffer` is not touched.
    pub fn read_registers<R: Into<u8>>(
        &mut self,
        reg: R,
        buffer: &mut [u8],
    ) -> Result<(), ImuError<W::Error>> {
        if buffer.is_empty() {
            return Err(ImuError::InvalidArgument);
        }
        let reg = reg.into();
        let address = self.address.as_u8();

        // 1. Address phase
        self.wire.begin_transmission(address);
        if self.wire.write(reg) != 1 {
            self.wire.abort_transmission();
            log_debug!("read {=u8:#x}: register address not accepted", reg);
            return Err(ImuError::Bus {
                phase: TransferPhase::Address,
            });
        }

        // 2. Keep the bus for the read
        self.wire
            .end_transmission(false)
            .map_err(|error| ImuError::Transport {
                phase: TransferPhase::Release,
                error,
            })?;

        // 3. Request
        let expected = buffer.len();
        let granted = self
            .wire
            .request_from(address, expected)
            .map_err(|error| ImuError::Transport {
                phase: TransferPhase::Request,
                error,
            })?;
        if granted != expected {
            log_debug!("read {=u8:#x}: granted {=usize} of {=usize}", reg, granted, expected);
            return Err(ImuError::Bus {
                phase: TransferPhase::Request,
            });
        }

        // 4. Drain
        let mut received = 0;
        while received < expected && self.wire.available() > 0 {
            match self.wire.read() {
                Ok(byte) => {
                    buffer[received] = byte;
                    received += 1;
                }
                Err(nb::Error::WouldBlock) => break,
                Err(nb::Error::Other(error)) => {
                    return Err(ImuError::Transport {
                        phase: TransferPhase::Request,
                        error,
                    });
                }
            }
        }

        if received < expected {
            log_debug!("read {=u8:#x}: received {=usize} of {=usize}", reg, received, expected);
            return Err(ImuError::IncompleteTransfer {
                expected,
                received,
            });
        }

        Ok(())
    }

    /// Writes `data` to consecutive registers starting at `reg` in one transaction.
    ///
    /// A short address or payload write drops the transmission instead of closing it.
    pub fn write_registers<R: Into<u8>>(
        &mut self,
        reg: R,
        data: &[u8],
    ) -> Result<(), ImuError<W::Error>> {
        if data.is_empty() {
            return Err(ImuError::InvalidArgument);
        }
        let reg = reg.into();

        self.wire.begin_transmission(self.address.as_u8());
        if self.wire.write(reg) != 1 {
            self.wire.abort_transmission();
            log_debug!("write {=u8:#x}: register address not accepted", reg);
            return Err(ImuError::Bus {
                phase: TransferPhase::Address,
            });
        }

        let accepted = self.wire.write_all(data);
        if accepted != data.len() {
            self.wire.abort_transmission();
            log_debug!("write {=u8:#x}: accepted {=usize} of {=usize}", reg, accepted, data.len());
            return Err(ImuError::Bus {
                phase: TransferPhase::Payload,
            });
        }

        self.wire
            .end_transmission(true)
            .map_err(|error| ImuError::Transport {
                phase: TransferPhase::Release,
                error,
            })
    }

    /// Reads a single register.
    pub fn read_register<R: Into<u8>>(&mut self, reg: R) -> Result<u8, ImuError<W::Error>> {
        let mut buf = [0u8; 1];
        self.read_registers(reg, &mut buf)?;
        Ok(buf[0])
    }

    /// Writes a single register.
    pub fn write_register<R: Into<u8>>(
        &mut self,
        reg: R,
        value: u8,
    ) -> Result<(), ImuError<W::Error>> {
        self.write_registers(reg, &[value])
    }
}
