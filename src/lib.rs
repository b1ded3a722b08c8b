#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

//! Bring-up sequencer for MIPI-DSI display panels
//! Panel setup is described by static command tables of register writes and
//! delays. The driver runs them together with the reset and bias sequencing of
//! the panel model to initialize, suspend and resume the panel.

pub mod command;
pub mod descriptor;
pub mod interface;
pub mod models;
pub mod power;
pub mod sequence;

#[cfg(test)]
mod mock;

use core::fmt;

use log::{debug, warn};

use crate::descriptor::PanelDescriptor;
use crate::interface::PanelInterface;
use crate::models::PanelModel;
use crate::power::run_power_script;
use crate::sequence::push_table;

/// Controller Error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// panel interface error
    Interface(interface::Error),
    /// no panel interface configured
    NotConfigured,
    /// the operation is not allowed in the current lifecycle state
    InvalidTransition {
        /// state the panel was in
        from: LifecycleState,
        /// rejected operation
        operation: Operation,
    },
}

impl From<interface::Error> for Error {
    fn from(e: interface::Error) -> Self {
        Error::Interface(e)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Interface(e) => write!(f, "interface error: {e}"),
            Error::NotConfigured => write!(f, "panel interface not configured"),
            Error::InvalidTransition { from, operation } => {
                write!(f, "{operation:?} is not allowed while {from:?}")
            }
        }
    }
}

impl core::error::Error for Error {}

/// Lifecycle state of the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    /// power state unknown, only `initialize` is accepted
    Uninitialized,
    /// panel is powered and displaying
    Active,
    /// panel is in sleep and the rails are off
    Suspended,
}

/// Lifecycle operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// power up and register setup
    Initialize,
    /// register shutdown and power down
    Suspend,
    /// full re-initialization after suspend
    Resume,
    /// one pass over the liveness table
    CheckLiveness,
}

/// Display panel driver
/// Generic over the host interface, parameterized by the panel model
pub struct Panel<I> {
    model: &'static PanelModel,
    interface: Option<I>,
    state: LifecycleState,
}

impl<I> Panel<I>
where
    I: PanelInterface,
{
    /// Creates a new panel driver object
    /// Call configure afterwards to hand over the host interface
    pub fn new(model: &'static PanelModel) -> Panel<I> {
        Panel {
            model,
            interface: None,
            state: LifecycleState::Uninitialized,
        }
    }

    /// Creates a new panel driver object with the host interface already set
    pub fn with_interface(model: &'static PanelModel, interface: I) -> Panel<I> {
        Panel {
            model,
            interface: Some(interface),
            state: LifecycleState::Uninitialized,
        }
    }

    /// Stores the host interface, replacing and returning the previous one
    pub fn configure(&mut self, interface: I) -> Option<I> {
        debug!("{}: configure", self.model.name);
        self.interface.replace(interface)
    }

    /// Driver name of the panel model
    pub fn name(&self) -> &'static str {
        self.model.name
    }

    /// Current lifecycle state
    pub fn state(&self) -> LifecycleState {
        self.state
    }

    /// Static characteristics of the panel model
    pub fn describe(&self) -> PanelDescriptor {
        self.model.descriptor
    }

    /// The configured host interface
    pub fn interface(&self) -> Option<&I> {
        self.interface.as_ref()
    }

    /// The configured host interface
    pub fn interface_mut(&mut self) -> Option<&mut I> {
        self.interface.as_mut()
    }

    /// Gives back the host interface
    pub fn release(self) -> Option<I> {
        self.interface
    }

    /// Powers the panel up and sends the init table
    /// Calling it again on an active panel repeats the full sequence
    pub fn initialize(&mut self) -> Result<(), Error> {
        match self.state {
            LifecycleState::Uninitialized => {}
            LifecycleState::Active => warn!("{}: initialize on active panel", self.model.name),
            LifecycleState::Suspended => {
                return Err(self.invalid(Operation::Initialize));
            }
        }
        self.power_up(Operation::Initialize)
    }

    /// Sends the suspend table and powers the panel down
    pub fn suspend(&mut self) -> Result<(), Error> {
        if self.state != LifecycleState::Active {
            return Err(self.invalid(Operation::Suspend));
        }
        let model = self.model;
        self.run(Operation::Suspend, LifecycleState::Suspended, |interface| {
            push_table(interface, model.suspend_table, true)?;
            run_power_script(interface, model.power_off)
        })
    }

    /// Brings a suspended panel back, same sequence as initialize
    pub fn resume(&mut self) -> Result<(), Error> {
        if self.state != LifecycleState::Suspended {
            return Err(self.invalid(Operation::Resume));
        }
        self.power_up(Operation::Resume)
    }

    /// Reads every register of the liveness table once
    /// Returns false as soon as one register differs from the expected content.
    /// Expected contents longer than [`command::MAX_PARAMETERS`] fail with
    /// [`interface::Error::BufferTooSmall`].
    pub fn check_liveness(&mut self) -> Result<bool, Error> {
        if self.state != LifecycleState::Active {
            return Err(self.invalid(Operation::CheckLiveness));
        }
        let interface = self.interface.as_mut().ok_or(Error::NotConfigured)?;

        let mut buf = [0u8; command::MAX_PARAMETERS];
        for check in self.model.descriptor.dsi.liveness_checks() {
            let expected = check.expected;
            let window = buf
                .get_mut(..expected.len())
                .ok_or(interface::Error::BufferTooSmall)?;
            let read = interface
                .read_register_into(check.opcode, window)?
                .min(expected.len());
            if buf[..read] != *expected {
                warn!(
                    "{}: register {:#04x} reads {:02x?}, expected {:02x?}",
                    self.model.name,
                    check.opcode,
                    &buf[..read],
                    expected
                );
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn power_up(&mut self, operation: Operation) -> Result<(), Error> {
        let model = self.model;
        self.run(operation, LifecycleState::Active, |interface| {
            run_power_script(interface, model.power_on)?;
            push_table(interface, model.init_table, true)
        })
    }

    /// Runs a lifecycle sequence and moves to `target` on success
    /// On failure the panel is left in an unknown state, only initialize is accepted afterwards
    fn run<F>(&mut self, operation: Operation, target: LifecycleState, sequence: F) -> Result<(), Error>
    where
        F: FnOnce(&mut I) -> Result<(), interface::Error>,
    {
        let interface = self.interface.as_mut().ok_or(Error::NotConfigured)?;

        debug!("{}: {:?} +", self.model.name, operation);
        match sequence(interface) {
            Ok(()) => {
                self.state = target;
                debug!("{}: {:?} -", self.model.name, operation);
                Ok(())
            }
            Err(e) => {
                self.state = LifecycleState::Uninitialized;
                warn!("{}: {:?} failed: {:?}", self.model.name, operation, e);
                Err(e.into())
            }
        }
    }

    fn invalid(&self, operation: Operation) -> Error {
        Error::InvalidTransition {
            from: self.state,
            operation,
        }
    }
}

// --------------------------- embedded graphics support --------------------------------------

use embedded_graphics_core::geometry::{OriginDimensions, Size};

impl<I> OriginDimensions for Panel<I>
where
    I: PanelInterface,
{
    fn size(&self) -> Size {
        let descriptor = &self.model.descriptor;
        Size::new(descriptor.width as u32, descriptor.height as u32)
    }
}
