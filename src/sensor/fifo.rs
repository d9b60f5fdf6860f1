// src/sensor/fifo.rs

use super::{Lsm6ds3, Phase};
use crate::common::{
    error::ImuError,
    hal_traits::TwoWire,
    register::Reg,
    types::{FifoStatus, RawSample},
};
use crate::logging::{log_debug, log_trace, log_warn};
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};

impl<W, IRQ, D, PWR> Lsm6ds3<W, IRQ, D, PWR>
where
    W: TwoWire,
    IRQ: InputPin,
    D: DelayNs,
    PWR: OutputPin,
{
    /// Enables the FIFO with the configured FIFO_CTRL1..FIFO_CTRL5 block.
    ///
    /// The phase only advances to `FifoActive` from `Configured`; before `begin`
    /// has completed the block is still written but the phase is left alone.
    pub fn fifo_begin(&mut self) -> Result<(), ImuError<W::Error>> {
        self.bus.write_registers(Reg::FifoCtrl1, &self.config.fifo.to_bytes())?;
        if self.phase == Phase::Configured {
            self.phase = Phase::FifoActive;
        }
        log_debug!("fifo on, mode/odr {=u8:#x}", self.config.fifo.to_bytes()[4]);
        Ok(())
    }

    /// Puts the FIFO back in bypass mode.
    pub fn fifo_end(&mut self) -> Result<(), ImuError<W::Error>> {
        self.bus.write_register(Reg::FifoCtrl5, 0x00)?;
        if self.phase == Phase::FifoActive {
            self.phase = Phase::Configured;
        }
        Ok(())
    }

    /// Pops one X/Y/Z word triple from FIFO_DATA_OUT.
    pub fn fifo_read_value(&mut self) -> Result<RawSample, ImuError<W::Error>> {
        let mut raw = [0u8; RawSample::SIZE];
        self.bus.read_registers(Reg::FifoDataOutL, &mut raw)?;
        Ok(RawSample::from_le_bytes(raw))
    }

    /// FIFO_STATUS1..FIFO_STATUS2.
    pub fn fifo_get_status(&mut self) -> Result<FifoStatus, ImuError<W::Error>> {
        let mut raw = [0u8; 2];
        self.bus.read_registers(Reg::FifoStatus1, &mut raw)?;
        Ok(FifoStatus::from_le_bytes(raw))
    }

    /// FIFO_STATUS3..FIFO_STATUS4, the pattern of the next word.
    pub fn fifo_get_pattern(&mut self) -> Result<u16, ImuError<W::Error>> {
        let mut raw = [0u8; 2];
        self.bus.read_registers(Reg::FifoStatus3, &mut raw)?;
        Ok(u16::from_le_bytes(raw))
    }

    /// Reads and discards samples until FIFO_STATUS reports empty.
    ///
    /// Failed status reads count as "not empty" and failed sample reads are ignored,
    /// so this spins for as long as the bus is broken. Use
    /// [`fifo_clear_bounded`](Self::fifo_clear_bounded) where that is not acceptable.
    pub fn fifo_clear(&mut self) {
        self.check_configured();
        let mut status = self.fifo_status_or_zero();
        while !status.is_empty() {
            self.discard_sample();
            status = self.fifo_status_or_zero();
        }
    }

    /// Like [`fifo_clear`](Self::fifo_clear), but gives up with `OutOfBounds` after
    /// `max_samples` sample reads. Returns the number of sample reads issued.
    pub fn fifo_clear_bounded(&mut self, max_samples: usize) -> Result<usize, ImuError<W::Error>> {
        self.check_configured();
        let mut discarded = 0;
        let mut status = self.fifo_status_or_zero();
        while !status.is_empty() {
            if discarded == max_samples {
                log_warn!("fifo still not empty after {=usize} reads", discarded);
                return Err(ImuError::OutOfBounds);
            }
            self.discard_sample();
            discarded += 1;
            status = self.fifo_status_or_zero();
        }
        Ok(discarded)
    }

    fn fifo_status_or_zero(&mut self) -> FifoStatus {
        match self.fifo_get_status() {
            Ok(status) => status,
            Err(_e) => {
                log_trace!("fifo status read failed: {}", _e.status());
                FifoStatus::default()
            }
        }
    }

    fn discard_sample(&mut self) {
        if let Err(_e) = self.fifo_read_value() {
            log_trace!("fifo sample read failed: {}", _e.status());
        }
    }

    fn check_configured(&self) {
        if matches!(self.phase, Phase::Uninitialized | Phase::Identified) {
            log_warn!("fifo serviced before begin() completed");
        }
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use crate::common::{
        error::{ImuError, StatusCode, TransferPhase},
        register::Reg,
    };
    use crate::mock::{MockDelay, MockPin, MockWire};
    use crate::sensor::{Lsm6ds3, Phase};
    use std::vec;

    const NOT_EMPTY: u16 = 0x0003;
    const EMPTY: u16 = 0x1000;

    type TestImu = Lsm6ds3<MockWire, MockPin, MockDelay>;

    /// Configured controller whose unscripted status reads report an empty FIFO.
    fn configured_imu() -> TestImu {
        let wire = MockWire::new()
            .with_register(Reg::WhoAmI, 0x69)
            .with_register(Reg::FifoStatus2, 0x10);
        let mut imu = Lsm6ds3::new(wire, MockPin::default(), MockDelay::default());
        imu.begin().unwrap();
        imu.bus().wire().reset_log();
        imu
    }

    #[test]
    fn test_fifo_begin_writes_config_block() {
        let mut imu = configured_imu();

        imu.fifo_begin().unwrap();

        assert_eq!(imu.phase(), Phase::FifoActive);
        assert_eq!(
            imu.bus().wire().committed,
            vec![(0x06, vec![0x00, 0x00, 0x03, 0x00, 0x56])]
        );
        let mut back = [0u8; 5];
        imu.read_registers(Reg::FifoCtrl1, &mut back).unwrap();
        assert_eq!(back, [0x00, 0x00, 0x03, 0x00, 0x56]);
    }

    #[test]
    fn test_fifo_begin_failure_keeps_phase() {
        let mut imu = configured_imu();
        imu.bus().wire().payload_shortfall = 1;

        let err = imu.fifo_begin().unwrap_err();

        assert!(matches!(
            err,
            ImuError::Bus {
                phase: TransferPhase::Payload,
            }
        ));
        assert_eq!(imu.phase(), Phase::Configured);
    }

    #[test]
    fn test_fifo_end_selects_bypass() {
        let mut imu = configured_imu();
        imu.fifo_begin().unwrap();

        imu.fifo_end().unwrap();

        assert_eq!(imu.phase(), Phase::Configured);
        assert_eq!(imu.bus().wire().committed.last(), Some(&(0x0A, vec![0x00])));
    }

    #[test]
    fn test_fifo_on_unidentified_device_keeps_phase() {
        let mut imu = Lsm6ds3::new(
            MockWire::new().with_register(Reg::WhoAmI, 0x00),
            MockPin::default(),
            MockDelay::default(),
        );
        assert!(imu.begin().is_err());

        imu.fifo_begin().unwrap();
        assert_eq!(imu.phase(), Phase::Uninitialized);
        imu.fifo_end().unwrap();

        assert_eq!(imu.phase(), Phase::Uninitialized);
        assert_eq!(imu.bus().wire().committed.len(), 2);
    }

    #[test]
    fn test_read_value_decodes_little_endian_axes() {
        let mut imu = configured_imu();
        imu.bus().wire().load(0x3E, &[0x34, 0x12, 0xFF, 0xFF, 0x00, 0x80]);

        let sample = imu.fifo_read_value().unwrap();

        assert_eq!((sample.x, sample.y, sample.z), (0x1234, -1, i16::MIN));
        assert_eq!(imu.bus().wire().reads, vec![(0x3E, 6)]);
    }

    #[test]
    fn test_read_value_incomplete() {
        let mut imu = configured_imu();
        imu.bus().wire().supply_shortfall = 2;

        let err = imu.fifo_read_value().unwrap_err();

        assert!(matches!(
            err,
            ImuError::IncompleteTransfer {
                expected: 6,
                received: 4,
            }
        ));
    }

    #[test]
    fn test_status_and_pattern() {
        let mut imu = configured_imu();
        imu.bus().wire().load(0x3A, &[0x21, 0x83, 0x05, 0x00]);

        let status = imu.fifo_get_status().unwrap();
        let pattern = imu.fifo_get_pattern().unwrap();

        assert_eq!(status.bits(), 0x8321);
        assert!(status.is_watermark());
        assert!(!status.is_empty());
        assert_eq!(status.unread_words(), 0x321);
        assert_eq!(pattern, 0x0005);
    }

    #[test]
    fn test_status_read_failure_propagates() {
        let mut imu = configured_imu();
        imu.bus().wire().fail_request = true;

        let err = imu.fifo_get_status().unwrap_err();

        assert_eq!(err.status(), StatusCode::BusError);
    }

    #[test]
    fn test_clear_reads_exactly_until_empty() {
        for n in 0..6usize {
            let mut imu = configured_imu();
            let script = core::iter::repeat(Some(NOT_EMPTY)).take(n).chain([Some(EMPTY)]);
            imu.bus().wire().script_status(script);

            imu.fifo_clear();

            let wire = imu.bus().wire();
            assert_eq!(wire.reads_from(Reg::FifoDataOutL), n);
            assert_eq!(wire.reads_from(Reg::FifoStatus1), n + 1);
        }
    }

    #[test]
    fn test_clear_treats_failed_status_as_not_empty() {
        let mut imu = configured_imu();
        imu.bus().wire().script_status([None, Some(NOT_EMPTY), None, Some(EMPTY)]);

        imu.fifo_clear();

        assert_eq!(imu.bus().wire().reads_from(Reg::FifoDataOutL), 3);
    }

    #[test]
    fn test_clear_ignores_failed_sample_reads() {
        let mut imu = configured_imu();
        imu.bus().wire().fail_request_at = Some(Reg::FifoDataOutL.addr());
        imu.bus().wire().script_status([Some(NOT_EMPTY), Some(NOT_EMPTY), Some(EMPTY)]);

        imu.fifo_clear();

        let wire = imu.bus().wire();
        assert_eq!(wire.reads_from(Reg::FifoDataOutL), 2);
        assert_eq!(wire.reads_from(Reg::FifoStatus1), 3);
    }

    #[test]
    fn test_clear_before_begin_still_drains() {
        let wire = MockWire::new().with_register(Reg::FifoStatus2, 0x10);
        let mut imu = Lsm6ds3::new(wire, MockPin::default(), MockDelay::default());
        imu.bus().wire().script_status([Some(NOT_EMPTY), Some(EMPTY)]);

        imu.fifo_clear();

        assert_eq!(imu.phase(), Phase::Uninitialized);
        assert_eq!(imu.bus().wire().reads_from(Reg::FifoDataOutL), 1);
    }

    #[test]
    fn test_clear_bounded_counts_reads() {
        let mut imu = configured_imu();
        imu.bus().wire().script_status([Some(NOT_EMPTY), Some(NOT_EMPTY), Some(EMPTY)]);

        assert_eq!(imu.fifo_clear_bounded(8).unwrap(), 2);
    }

    #[test]
    fn test_clear_bounded_gives_up() {
        let mut imu = configured_imu();
        imu.bus().wire().script_status(core::iter::repeat(Some(NOT_EMPTY)).take(10));

        let err = imu.fifo_clear_bounded(3).unwrap_err();

        assert!(matches!(err, ImuError::OutOfBounds));
        assert_eq!(err.status(), StatusCode::OutOfBounds);
        assert_eq!(imu.bus().wire().reads_from(Reg::FifoDataOutL), 3);
    }

    #[test]
    fn test_clear_bounded_with_dead_bus() {
        let mut imu = configured_imu();
        imu.bus().wire().fail_request = true;

        let err = imu.fifo_clear_bounded(4).unwrap_err();

        assert!(matches!(err, ImuError::OutOfBounds));
        assert_eq!(imu.bus().wire().reads_from(Reg::FifoDataOutL), 4);
    }
}
