// src/mock.rs

//! Test doubles: a scripted two-wire transport backed by a register file, plus
//! trivial pin and delay implementations.

use crate::common::{hal_traits::TwoWire, register::Reg};
use core::convert::Infallible;
use std::collections::VecDeque;
use std::vec::Vec;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) struct MockWireError;

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub(crate) struct CallCounts {
    pub begin: usize,
    pub write: usize,
    pub write_all: usize,
    pub end: usize,
    pub abort: usize,
    pub request: usize,
    pub available: usize,
    pub read: usize,
}

impl CallCounts {
    pub fn total(&self) -> usize {
        self.begin
            + self.write
            + self.write_all
            + self.end
            + self.abort
            + self.request
            + self.available
            + self.read
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum WireEvent {
    Begin(u8),
    End { stop: bool },
    Abort,
    Request { address: u8, len: usize },
}

/// Two-wire transport over a 256-byte register file with auto-increment.
///
/// The first byte of a closed transmission sets the register pointer, the rest
/// is stored from there on. Reads serve bytes from the pointer. Faults are
/// persistent until cleared by the test.
pub(crate) struct MockWire {
    pub regs: [u8; 256],
    pub calls: CallCounts,
    pub events: Vec<WireEvent>,
    /// Start register and data of every completed write.
    pub committed: Vec<(u8, Vec<u8>)>,
    /// Start register and length of every read request.
    pub reads: Vec<(u8, usize)>,

    pub reject_address_write: bool,
    pub payload_shortfall: usize,
    /// Payload writes to this start register accept nothing.
    pub reject_payload_to: Option<u8>,
    pub fail_close: bool,
    pub fail_request: bool,
    /// Requests starting at this register fail.
    pub fail_request_at: Option<u8>,
    pub grant_shortfall: usize,
    pub supply_shortfall: usize,

    /// Served instead of the register file for reads at FIFO_STATUS1; `None` fails the request.
    status_script: VecDeque<Option<u16>>,

    tx: Vec<u8>,
    pointer: u8,
    rx: VecDeque<u8>,
}

impl MockWire {
    pub fn new() -> Self {
        MockWire {
            regs: [0; 256],
            calls: CallCounts::default(),
            events: Vec::new(),
            committed: Vec::new(),
            reads: Vec::new(),
            reject_address_write: false,
            payload_shortfall: 0,
            reject_payload_to: None,
            fail_close: false,
            fail_request: false,
            fail_request_at: None,
            grant_shortfall: 0,
            supply_shortfall: 0,
            status_script: VecDeque::new(),
            tx: Vec::new(),
            pointer: 0,
            rx: VecDeque::new(),
        }
    }

    pub fn with_register(mut self, reg: Reg, value: u8) -> Self {
        self.regs[reg as usize] = value;
        self
    }

    pub fn load(&mut self, start: u8, data: &[u8]) {
        for (i, byte) in data.iter().enumerate() {
            self.regs[start.wrapping_add(i as u8) as usize] = *byte;
        }
    }

    pub fn script_status<I>(&mut self, words: I)
    where
        I: IntoIterator<Item = Option<u16>>,
    {
        self.status_script.extend(words);
    }

    pub fn reads_from(&self, reg: Reg) -> usize {
        self.reads.iter().filter(|(start, _)| *start == reg as u8).count()
    }

    pub fn reset_log(&mut self) {
        self.calls = CallCounts::default();
        self.events.clear();
        self.committed.clear();
        self.reads.clear();
    }
}

impl TwoWire for MockWire {
    type Error = MockWireError;

    fn begin_transmission(&mut self, address: u8) {
        self.calls.begin += 1;
        self.events.push(WireEvent::Begin(address));
        self.tx.clear();
    }

    fn write(&mut self, byte: u8) -> usize {
        self.calls.write += 1;
        if self.reject_address_write {
            return 0;
        }
        self.tx.push(byte);
        1
    }

    fn write_all(&mut self, data: &[u8]) -> usize {
        self.calls.write_all += 1;
        if self.reject_payload_to.is_some() && self.tx.first().copied() == self.reject_payload_to {
            return 0;
        }
        let accepted = data.len().saturating_sub(self.payload_shortfall);
        self.tx.extend_from_slice(&data[..accepted]);
        accepted
    }

    fn end_transmission(&mut self, send_stop: bool) -> Result<(), Self::Error> {
        self.calls.end += 1;
        self.events.push(WireEvent::End { stop: send_stop });
        if self.fail_close {
            self.tx.clear();
            return Err(MockWireError);
        }
        if let Some((&start, data)) = self.tx.split_first() {
            self.pointer = start;
            if !data.is_empty() {
                let data = data.to_vec();
                self.load(start, &data);
                self.committed.push((start, data));
            }
        }
        self.tx.clear();
        Ok(())
    }

    fn abort_transmission(&mut self) {
        self.calls.abort += 1;
        self.events.push(WireEvent::Abort);
        self.tx.clear();
    }

    fn request_from(&mut self, address: u8, len: usize) -> Result<usize, Self::Error> {
        self.calls.request += 1;
        self.events.push(WireEvent::Request { address, len });
        self.reads.push((self.pointer, len));
        self.rx.clear();
        if self.fail_request || self.fail_request_at == Some(self.pointer) {
            return Err(MockWireError);
        }

        let mut source: Vec<u8> = (0..len)
            .map(|i| self.regs[self.pointer.wrapping_add(i as u8) as usize])
            .collect();
        if self.pointer == Reg::FifoStatus1 as u8 {
            if let Some(entry) = self.status_script.pop_front() {
                let word = entry.ok_or(MockWireError)?;
                for (dst, src) in source.iter_mut().zip(word.to_le_bytes()) {
                    *dst = src;
                }
            }
        }

        let granted = len.saturating_sub(self.grant_shortfall);
        let supplied = granted.saturating_sub(self.supply_shortfall);
        self.rx.extend(source.into_iter().take(supplied));
        Ok(granted)
    }

    fn available(&mut self) -> usize {
        self.calls.available += 1;
        self.rx.len()
    }

    fn read(&mut self) -> nb::Result<u8, Self::Error> {
        self.calls.read += 1;
        self.rx.pop_front().ok_or(nb::Error::WouldBlock)
    }
}

/// Digital pin with a settable level; counts level reads.
#[derive(Debug, Default)]
pub(crate) struct MockPin {
    pub high: bool,
    pub level_reads: usize,
    pub set_high_calls: usize,
}

impl embedded_hal::digital::ErrorType for MockPin {
    type Error = Infallible;
}

impl embedded_hal::digital::InputPin for MockPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        self.level_reads += 1;
        Ok(self.high)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        self.level_reads += 1;
        Ok(!self.high)
    }
}

impl embedded_hal::digital::OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.high = false;
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.set_high_calls += 1;
        self.high = true;
        Ok(())
    }
}

/// Delay that only accumulates the requested time.
#[derive(Debug, Default)]
pub(crate) struct MockDelay {
    pub total_ns: u64,
}

impl embedded_hal::delay::DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += u64::from(ns);
    }
}
