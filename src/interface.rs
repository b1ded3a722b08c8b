//! Contains the panel interface
//!
//! [`PanelInterface`] is everything the sequencer needs from the host: the reset
//! line, the bias rail, blocking delays and the command transport.

use embedded_hal::{
    delay::DelayNs,
    digital::{OutputPin, PinState},
};

/// Interface Error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A error in the command transport
    TransportError,
    /// A error in the gpio driver
    GPIOError,
    /// The bias supply rejected the request
    BiasError,
    /// The read back buffer can not hold the register content
    BufferTooSmall,
    /// A register write carries more than [`crate::command::MAX_PARAMETERS`] bytes
    TooManyParameters,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::TransportError => write!(f, "command transport error"),
            Error::GPIOError => write!(f, "gpio error"),
            Error::BiasError => write!(f, "bias supply error"),
            Error::BufferTooSmall => write!(f, "read buffer too small"),
            Error::TooManyParameters => write!(f, "register write exceeds the parameter limit"),
        }
    }
}

impl core::error::Error for Error {}

/// Order in which the positive and negative bias rails are switched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BiasSequence {
    /// VSP first, VSN after
    VspFirstVsnAfter,
    /// VSN first, VSP after
    VsnFirstVspAfter,
}

/// Trait to describe the host capabilities used by the sequencer
/// Every call blocks until the operation is done
pub trait PanelInterface {
    /// drive the panel reset line
    fn set_reset_pin(&mut self, level: PinState) -> Result<(), Error>;

    /// enable or disable the regulated bias rail
    /// `millivolts` is the target voltage of both rails
    fn set_bias(
        &mut self,
        enable: bool,
        sequence: BiasSequence,
        millivolts: u16,
    ) -> Result<(), Error>;

    /// drive the enable pin of a gpio switched bias rail
    fn set_bias_pin(&mut self, level: PinState) -> Result<(), Error>;

    /// block for at least `ms` milliseconds
    fn delay_ms(&mut self, ms: u32) -> Result<(), Error>;

    /// block for at least `us` microseconds
    fn delay_us(&mut self, us: u32) -> Result<(), Error>;

    /// issue one command with its parameters on the transport
    /// `force_update` asks the host to send it now instead of queueing it
    fn write_command(&mut self, opcode: u32, params: &[u8], force_update: bool)
        -> Result<(), Error>;

    /// read a single register byte
    fn read_register(&mut self, opcode: u32) -> Result<u8, Error> {
        let mut buf = [0u8; 1];
        self.read_register_into(opcode, &mut buf)?;
        Ok(buf[0])
    }

    /// read up to `buf.len()` register bytes, returns the number of bytes read
    fn read_register_into(&mut self, opcode: u32, buf: &mut [u8]) -> Result<usize, Error>;
}

impl<T: PanelInterface + ?Sized> PanelInterface for &mut T {
    fn set_reset_pin(&mut self, level: PinState) -> Result<(), Error> {
        T::set_reset_pin(self, level)
    }

    fn set_bias(
        &mut self,
        enable: bool,
        sequence: BiasSequence,
        millivolts: u16,
    ) -> Result<(), Error> {
        T::set_bias(self, enable, sequence, millivolts)
    }

    fn set_bias_pin(&mut self, level: PinState) -> Result<(), Error> {
        T::set_bias_pin(self, level)
    }

    fn delay_ms(&mut self, ms: u32) -> Result<(), Error> {
        T::delay_ms(self, ms)
    }

    fn delay_us(&mut self, us: u32) -> Result<(), Error> {
        T::delay_us(self, us)
    }

    fn write_command(
        &mut self,
        opcode: u32,
        params: &[u8],
        force_update: bool,
    ) -> Result<(), Error> {
        T::write_command(self, opcode, params, force_update)
    }

    fn read_register(&mut self, opcode: u32) -> Result<u8, Error> {
        T::read_register(self, opcode)
    }

    fn read_register_into(&mut self, opcode: u32, buf: &mut [u8]) -> Result<usize, Error> {
        T::read_register_into(self, opcode, buf)
    }
}

/// Command transport of the display host (usually a MIPI-DSI controller)
pub trait DsiBus {
    /// transport specific error
    type Error: core::fmt::Debug;

    /// send a command with parameters
    fn write(&mut self, opcode: u32, params: &[u8], force_update: bool)
        -> Result<(), Self::Error>;

    /// read a register into `buf`, returns the number of valid bytes
    fn read(&mut self, opcode: u32, buf: &mut [u8]) -> Result<usize, Self::Error>;
}

/// Bias supply of the panel
pub trait BiasControl {
    /// bias specific error
    type Error: core::fmt::Debug;

    /// switch the regulated rails
    fn set(
        &mut self,
        enable: bool,
        sequence: BiasSequence,
        millivolts: u16,
    ) -> Result<(), Self::Error>;

    /// drive the rail enable pin directly
    fn set_pin(&mut self, level: PinState) -> Result<(), Self::Error>;
}

/// Bias rail switched by a single enable pin
/// Sequence and voltage are fixed by the hardware and ignored
pub struct GpioBias<P> {
    enable: P,
}

impl<P: OutputPin> GpioBias<P> {
    /// Create a new pin switched bias rail
    pub fn new(enable: P) -> GpioBias<P> {
        GpioBias { enable }
    }
}

impl<P: OutputPin> BiasControl for GpioBias<P> {
    type Error = P::Error;

    fn set(
        &mut self,
        enable: bool,
        _sequence: BiasSequence,
        _millivolts: u16,
    ) -> Result<(), Self::Error> {
        self.enable.set_state(PinState::from(enable))
    }

    fn set_pin(&mut self, level: PinState) -> Result<(), Self::Error> {
        self.enable.set_state(level)
    }
}

/// Implements the panel interface on top of embedded_hal gpio and delay drivers
/// The command transport and the bias supply are provided by the host
pub struct HalInterface<BUS, RST, BIAS, DELAY> {
    bus: BUS,
    rst: RST,
    bias: BIAS,
    delay: DELAY,
}

impl<BUS, RST, BIAS, DELAY> HalInterface<BUS, RST, BIAS, DELAY>
where
    BUS: DsiBus,
    RST: OutputPin,
    BIAS: BiasControl,
    DELAY: DelayNs,
{
    /// Create a new panel interface
    pub fn new(bus: BUS, rst: RST, bias: BIAS, delay: DELAY) -> HalInterface<BUS, RST, BIAS, DELAY> {
        HalInterface {
            bus,
            rst,
            bias,
            delay,
        }
    }

    /// Give back the wrapped drivers
    pub fn release(self) -> (BUS, RST, BIAS, DELAY) {
        (self.bus, self.rst, self.bias, self.delay)
    }
}

impl<BUS, RST, BIAS, DELAY> PanelInterface for HalInterface<BUS, RST, BIAS, DELAY>
where
    BUS: DsiBus,
    RST: OutputPin,
    BIAS: BiasControl,
    DELAY: DelayNs,
{
    fn set_reset_pin(&mut self, level: PinState) -> Result<(), Error> {
        if self.rst.set_state(level).is_err() {
            return Err(Error::GPIOError);
        }
        Ok(())
    }

    fn set_bias(
        &mut self,
        enable: bool,
        sequence: BiasSequence,
        millivolts: u16,
    ) -> Result<(), Error> {
        self.bias
            .set(enable, sequence, millivolts)
            .map_err(|_| Error::BiasError)
    }

    fn set_bias_pin(&mut self, level: PinState) -> Result<(), Error> {
        self.bias.set_pin(level).map_err(|_| Error::BiasError)
    }

    fn delay_ms(&mut self, ms: u32) -> Result<(), Error> {
        self.delay.delay_ms(ms);
        Ok(())
    }

    fn delay_us(&mut self, us: u32) -> Result<(), Error> {
        self.delay.delay_us(us);
        Ok(())
    }

    fn write_command(
        &mut self,
        opcode: u32,
        params: &[u8],
        force_update: bool,
    ) -> Result<(), Error> {
        if self.bus.write(opcode, params, force_update).is_err() {
            return Err(Error::TransportError);
        }
        Ok(())
    }

    fn read_register_into(&mut self, opcode: u32, buf: &mut [u8]) -> Result<usize, Error> {
        let read = self
            .bus
            .read(opcode, buf)
            .map_err(|_| Error::TransportError)?;
        if read > buf.len() {
            return Err(Error::BufferTooSmall);
        }
        Ok(read)
    }
}
