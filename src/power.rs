//! Power sequencing scripts
//!
//! The reset and bias handling around the command tables differs per panel only
//! in its steps and timings, so it is kept as data next to the tables.

use embedded_hal::digital::PinState;
use log::trace;

use crate::interface::{self, BiasSequence, PanelInterface};

/// One step of a power script
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerStep {
    /// drive the reset line
    Reset(PinState),
    /// switch the regulated bias rails
    Bias {
        /// rails on or off
        enable: bool,
        /// switching order of the rails
        sequence: BiasSequence,
        /// target voltage in mV
        millivolts: u16,
    },
    /// drive the bias enable pin
    BiasPin(PinState),
    /// wait in milliseconds
    DelayMs(u32),
}

/// Executes a power script step by step
pub fn run_power_script<I>(interface: &mut I, script: &[PowerStep]) -> Result<(), interface::Error>
where
    I: PanelInterface + ?Sized,
{
    for step in script {
        trace!("power step {:?}", step);
        match *step {
            PowerStep::Reset(level) => interface.set_reset_pin(level)?,
            PowerStep::Bias {
                enable,
                sequence,
                millivolts,
            } => interface.set_bias(enable, sequence, millivolts)?,
            PowerStep::BiasPin(level) => interface.set_bias_pin(level)?,
            PowerStep::DelayMs(ms) => interface.delay_ms(ms)?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{Call, Recorder};

    #[test]
    fn steps_map_to_primitives() {
        let script = [
            PowerStep::BiasPin(PinState::High),
            PowerStep::DelayMs(15),
            PowerStep::Reset(PinState::Low),
            PowerStep::Bias {
                enable: true,
                sequence: BiasSequence::VspFirstVsnAfter,
                millivolts: 5500,
            },
        ];
        let mut recorder = Recorder::default();
        run_power_script(&mut recorder, &script).unwrap();

        assert_eq!(
            recorder.calls,
            vec![
                Call::BiasPin(PinState::High),
                Call::DelayMs(15),
                Call::Reset(PinState::Low),
                Call::Bias(true, BiasSequence::VspFirstVsnAfter, 5500),
            ]
        );
    }

    #[test]
    fn first_failure_stops_the_script() {
        let script = [
            PowerStep::Reset(PinState::High),
            PowerStep::DelayMs(10),
            PowerStep::Reset(PinState::Low),
        ];
        let mut recorder = Recorder::failing_after(1);
        assert_eq!(
            run_power_script(&mut recorder, &script),
            Err(interface::Error::GPIOError)
        );
        assert_eq!(
            recorder.calls,
            vec![Call::Reset(PinState::High), Call::DelayMs(10)]
        );
    }
}
