// src/sensor/mod.rs

//! LSM6DS3 controller: bring-up, interrupt line and FIFO service.

mod fifo;

use crate::bus::RegisterBus;
use crate::common::{
    config::DriverConfig,
    error::ImuError,
    hal_traits::{NoPowerPin, TwoWire},
    register::{DeviceId, Reg},
};
use crate::logging::{log_debug, log_warn};
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};

/// Where the controller is in its bring-up.
///
/// Informational only: no operation is refused because of the phase.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    Uninitialized,
    /// WHO_AM_I matched, configuration not (fully) written.
    Identified,
    Configured,
    FifoActive,
}

/// An LSM6DS3 on a two-wire bus with its interrupt line.
///
/// `PWR` switches the sensor supply; boards without one use [`NoPowerPin`].
#[derive(Debug)]
pub struct Lsm6ds3<W, IRQ, D, PWR = NoPowerPin>
where
    W: TwoWire,
{
    bus: RegisterBus<W>,
    irq: IRQ,
    delay: D,
    power: Option<PWR>,
    config: DriverConfig,
    phase: Phase,
    device: Option<DeviceId>,
}

impl<W, IRQ, D> Lsm6ds3<W, IRQ, D, NoPowerPin>
where
    W: TwoWire,
    IRQ: InputPin,
    D: DelayNs,
{
    /// Controller at the primary address with the default profile.
    pub fn new(wire: W, irq: IRQ, delay: D) -> Self {
        Self::with_config(wire, irq, delay, DriverConfig::default())
    }

    pub fn with_config(wire: W, irq: IRQ, delay: D, config: DriverConfig) -> Self {
        Lsm6ds3 {
            bus: RegisterBus::new(wire, config.address),
            irq,
            delay,
            power: None,
            config,
            phase: Phase::Uninitialized,
            device: None,
        }
    }

    /// Adds a supply switch, driven high by [`begin`](Lsm6ds3::begin).
    pub fn with_power_pin<P: OutputPin>(self, power: P) -> Lsm6ds3<W, IRQ, D, P> {
        Lsm6ds3 {
            bus: self.bus,
            irq: self.irq,
            delay: self.delay,
            power: Some(power),
            config: self.config,
            phase: self.phase,
            device: self.device,
        }
    }
}

impl<W, IRQ, D, PWR> Lsm6ds3<W, IRQ, D, PWR>
where
    W: TwoWire,
    IRQ: InputPin,
    D: DelayNs,
    PWR: OutputPin,
{
    /// Powers, identifies and configures the sensor.
    ///
    /// Returns `Unsupported(id)` for an unknown WHO_AM_I without writing anything.
    /// Otherwise writes the sensor profile to CTRL1_XL/CTRL2_G and the interrupt
    /// routing to INT1_CTRL/INT2_CTRL, stopping at the first failure. Calling it
    /// again repeats the whole sequence.
    pub fn begin(&mut self) -> Result<(), ImuError<W::Error>> {
        self.phase = Phase::Uninitialized;
        self.device = None;

        // 1. Supply
        if let Some(power) = self.power.as_mut() {
            if power.set_high().is_err() {
                log_warn!("power pin could not be driven high");
            }
            let settle =
                u32::try_from(self.config.power_on_delay.as_micros()).unwrap_or(u32::MAX);
            self.delay.delay_us(settle);
        }

        // 2. Identify
        let id = self.bus.read_register(Reg::WhoAmI)?;
        let device = match DeviceId::from_who_am_i(id) {
            Some(device) => device,
            None => {
                if id == 0xFF {
                    log_warn!("WHO_AM_I reads 0xff, nothing is driving the bus");
                } else {
                    log_warn!("WHO_AM_I {=u8:#x} is not an LSM6DS3", id);
                }
                return Err(ImuError::Unsupported(id));
            }
        };
        self.device = Some(device);
        self.phase = Phase::Identified;
        log_debug!("found {} at {=u8:#x}", device, self.bus.address().as_u8());

        // 3. Sensor profile
        self.bus.write_registers(Reg::Ctrl1Xl, &self.config.sensor.to_bytes())?;

        // 4. Interrupt routing
        self.bus.write_registers(Reg::Int1Ctrl, &self.config.interrupts.to_bytes())?;

        self.phase = Phase::Configured;
        Ok(())
    }

    /// Level of the interrupt line. No bus traffic; a pin error reads as low.
    pub fn is_irq_set(&mut self) -> bool {
        self.irq.is_high().unwrap_or(false)
    }

    /// Reads WHO_AM_I.
    pub fn who_am_i(&mut self) -> Result<u8, ImuError<W::Error>> {
        self.bus.read_register(Reg::WhoAmI)
    }

    /// Raw register block read, see [`RegisterBus::read_registers`].
    pub fn read_registers<R: Into<u8>>(
        &mut self,
        reg: R,
        buffer: &mut [u8],
    ) -> Result<(), ImuError<W::Error>> {
        self.bus.read_registers(reg, buffer)
    }

    /// Raw register block write, see [`RegisterBus::write_registers`].
    pub fn write_registers<R: Into<u8>>(
        &mut self,
        reg: R,
        data: &[u8],
    ) -> Result<(), ImuError<W::Error>> {
        self.bus.write_registers(reg, data)
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The revision found by the last successful identification.
    #[inline]
    pub fn device_id(&self) -> Option<DeviceId> {
        self.device
    }

    #[inline]
    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    pub fn bus(&mut self) -> &mut RegisterBus<W> {
        &mut self.bus
    }

    /// Gives the peripherals back. The power pin is `None` if none was attached.
    pub fn release(self) -> (W, IRQ, D, Option<PWR>) {
        (self.bus.release(), self.irq, self.delay, self.power)
    }
}
