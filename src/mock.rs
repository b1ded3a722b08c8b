//! Recording panel interface for the unit tests

use embedded_hal::digital::PinState;

use crate::interface::{BiasSequence, Error, PanelInterface};

/// A primitive call seen by the recorder
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Reset(PinState),
    Bias(bool, BiasSequence, u16),
    BiasPin(PinState),
    DelayMs(u32),
    DelayUs(u32),
    Write(u32, Vec<u8>, bool),
    Read(u32),
}

/// Records every primitive call in order
///
/// With a budget set, the first fallible call past the budget fails and is not
/// recorded. Delays never fail.
#[derive(Debug, Default)]
pub struct Recorder {
    pub calls: Vec<Call>,
    pub registers: Vec<(u32, Vec<u8>)>,
    budget: Option<usize>,
}

impl Recorder {
    pub fn failing_after(calls: usize) -> Recorder {
        Recorder {
            budget: Some(calls),
            ..Default::default()
        }
    }

    pub fn with_register(mut self, opcode: u32, content: &[u8]) -> Recorder {
        self.registers.push((opcode, content.to_vec()));
        self
    }

    pub fn writes(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, Call::Write(..)))
            .count()
    }

    fn charge(&mut self, error: Error) -> Result<(), Error> {
        match self.budget {
            Some(0) => Err(error),
            Some(ref mut left) => {
                *left -= 1;
                Ok(())
            }
            None => Ok(()),
        }
    }
}

impl PanelInterface for Recorder {
    fn set_reset_pin(&mut self, level: PinState) -> Result<(), Error> {
        self.charge(Error::GPIOError)?;
        self.calls.push(Call::Reset(level));
        Ok(())
    }

    fn set_bias(
        &mut self,
        enable: bool,
        sequence: BiasSequence,
        millivolts: u16,
    ) -> Result<(), Error> {
        self.charge(Error::BiasError)?;
        self.calls.push(Call::Bias(enable, sequence, millivolts));
        Ok(())
    }

    fn set_bias_pin(&mut self, level: PinState) -> Result<(), Error> {
        self.charge(Error::BiasError)?;
        self.calls.push(Call::BiasPin(level));
        Ok(())
    }

    fn delay_ms(&mut self, ms: u32) -> Result<(), Error> {
        self.calls.push(Call::DelayMs(ms));
        Ok(())
    }

    fn delay_us(&mut self, us: u32) -> Result<(), Error> {
        self.calls.push(Call::DelayUs(us));
        Ok(())
    }

    fn write_command(
        &mut self,
        opcode: u32,
        params: &[u8],
        force_update: bool,
    ) -> Result<(), Error> {
        self.charge(Error::TransportError)?;
        self.calls
            .push(Call::Write(opcode, params.to_vec(), force_update));
        Ok(())
    }

    fn read_register_into(&mut self, opcode: u32, buf: &mut [u8]) -> Result<usize, Error> {
        self.charge(Error::TransportError)?;
        self.calls.push(Call::Read(opcode));
        let content = self
            .registers
            .iter()
            .find(|(reg, _)| *reg == opcode)
            .map(|(_, content)| content.as_slice())
            .unwrap_or(&[]);
        if content.len() > buf.len() {
            return Err(Error::BufferTooSmall);
        }
        buf[..content.len()].copy_from_slice(content);
        Ok(content.len())
    }
}
