//! Command table interpreter

use log::{trace, warn};

use crate::command::{Command, MAX_PARAMETERS};
use crate::interface::{self, PanelInterface};

/// Delays up to this many milliseconds run on the microsecond primitive
pub const DELAY_US_THRESHOLD_MS: u32 = 10;

/// Sends a command table to the panel
///
/// Every entry is dispatched in order, the end marker included, which
/// dispatches nothing. The entry count is the length of `table`, so to send
/// only the first `n` entries pass `&table[..n]`. `force_update` is handed to
/// every register write.
///
/// The first failing primitive stops the walk and its error is returned.
/// Entries already sent are not undone. A register write with more than
/// [`MAX_PARAMETERS`] bytes is never sent and fails with
/// [`interface::Error::TooManyParameters`].
pub fn push_table<I>(
    interface: &mut I,
    table: &[Command],
    force_update: bool,
) -> Result<(), interface::Error>
where
    I: PanelInterface + ?Sized,
{
    for (index, command) in table.iter().enumerate() {
        trace!("entry {}: {:?}", index, command);
        dispatch(interface, command, force_update)?;
    }
    Ok(())
}

fn dispatch<I>(interface: &mut I, command: &Command, force_update: bool) -> Result<(), interface::Error>
where
    I: PanelInterface + ?Sized,
{
    match *command {
        Command::Delay(ms) if ms <= DELAY_US_THRESHOLD_MS => interface.delay_us(ms * 1000),
        Command::Delay(ms) => interface.delay_ms(ms),
        Command::MicroDelay(us) => interface.delay_us(us),
        Command::End => Ok(()),
        Command::Write { opcode, params } if params.len() > MAX_PARAMETERS => {
            warn!("register {:#04x}: {} parameter bytes", opcode, params.len());
            Err(interface::Error::TooManyParameters)
        }
        Command::Write { opcode, params } => interface.write_command(opcode, params, force_update),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{REGFLAG_DELAY, REGFLAG_END_OF_TABLE, REGFLAG_UDELAY};
    use crate::mock::{Call, Recorder};

    macro_rules! delay_threshold_tests {
        ($($name:ident: $value:expr,)*) => {
        $(
            #[test]
            fn $name() {
                let (millis, expected) = $value;
                let mut recorder = Recorder::default();
                push_table(&mut recorder, &[Command::Delay(millis)], true).unwrap();
                assert_eq!(recorder.calls, vec![expected]);
            }
        )*
        }
    }

    delay_threshold_tests! {
        delay_0: (0, Call::DelayUs(0)),
        delay_1: (1, Call::DelayUs(1000)),
        delay_5: (5, Call::DelayUs(5000)),
        delay_10: (10, Call::DelayUs(10000)),
        delay_11: (11, Call::DelayMs(11)),
        delay_120: (120, Call::DelayMs(120)),
        delay_255: (255, Call::DelayMs(255)),
    }

    static SCENARIO: [Command; 3] = [
        Command::raw(0xB9, 3, &[0xF1, 0x12, 0x83]),
        Command::raw(REGFLAG_DELAY, 5, &[]),
        Command::raw(REGFLAG_END_OF_TABLE, 0, &[]),
    ];

    #[test]
    fn write_then_short_delay() {
        let mut recorder = Recorder::default();
        push_table(&mut recorder, &SCENARIO, true).unwrap();
        assert_eq!(
            recorder.calls,
            vec![
                Call::Write(0xB9, vec![0xF1, 0x12, 0x83], true),
                Call::DelayUs(5000),
            ]
        );
    }

    #[test]
    fn micro_delay_is_passed_through() {
        let mut recorder = Recorder::default();
        push_table(&mut recorder, &[Command::raw(REGFLAG_UDELAY, 40, &[])], false).unwrap();
        assert_eq!(recorder.calls, vec![Call::DelayUs(40)]);
    }

    #[test]
    fn force_update_is_forwarded() {
        let table = [Command::write(0x11, &[0x00])];
        let mut recorder = Recorder::default();
        push_table(&mut recorder, &table, false).unwrap();
        assert_eq!(recorder.calls, vec![Call::Write(0x11, vec![0x00], false)]);
    }

    #[test]
    fn end_marker_does_not_stop_the_walk() {
        let table = [
            Command::write(0x28, &[]),
            Command::End,
            Command::write(0x10, &[]),
        ];
        let mut recorder = Recorder::default();
        push_table(&mut recorder, &table, true).unwrap();
        assert_eq!(
            recorder.calls,
            vec![
                Call::Write(0x28, vec![], true),
                Call::Write(0x10, vec![], true),
            ]
        );
    }

    #[test]
    fn writes_match_non_pseudo_entries() {
        for table in [
            crate::models::ST7703_HELITAI.init_table,
            crate::models::ST7703_HELITAI.suspend_table,
            crate::models::JD9365_GUOXIAN.init_table,
            crate::models::JD9365_GUOXIAN.suspend_table,
        ] {
            let mut recorder = Recorder::default();
            push_table(&mut recorder, table, true).unwrap();
            let expected = table.iter().filter(|command| command.is_write()).count();
            assert_eq!(recorder.writes(), expected);
            let ends = table.iter().filter(|command| **command == Command::End).count();
            assert_eq!(recorder.calls.len(), table.len() - ends);
        }
    }

    #[test]
    fn prefix_only_sends_prefix() {
        let mut recorder = Recorder::default();
        push_table(&mut recorder, &SCENARIO[..1], true).unwrap();
        assert_eq!(recorder.calls.len(), 1);
    }

    #[test]
    fn failing_write_stops_the_walk() {
        let table = [
            Command::write(0x28, &[]),
            Command::Delay(20),
            Command::write(0x10, &[]),
            Command::Delay(120),
        ];
        let mut recorder = Recorder::failing_after(1);
        assert_eq!(
            push_table(&mut recorder, &table, true),
            Err(interface::Error::TransportError)
        );
        assert_eq!(
            recorder.calls,
            vec![Call::Write(0x28, vec![], true), Call::DelayMs(20)]
        );
    }

    static OVERSIZED: [u8; MAX_PARAMETERS + 1] = [0; MAX_PARAMETERS + 1];
    static FULL: [u8; MAX_PARAMETERS] = [0; MAX_PARAMETERS];

    #[test]
    fn oversized_write_is_rejected() {
        let table = [
            Command::write(0xB9, &[0xF1, 0x12, 0x83]),
            Command::Write {
                opcode: 0xE9,
                params: &OVERSIZED,
            },
            Command::Delay(120),
        ];
        let mut recorder = Recorder::default();
        assert_eq!(
            push_table(&mut recorder, &table, true),
            Err(interface::Error::TooManyParameters)
        );
        assert_eq!(
            recorder.calls,
            vec![Call::Write(0xB9, vec![0xF1, 0x12, 0x83], true)]
        );
    }

    #[test]
    fn write_at_parameter_limit_is_sent() {
        let table = [Command::Write {
            opcode: 0xE9,
            params: &FULL,
        }];
        let mut recorder = Recorder::default();
        push_table(&mut recorder, &table, true).unwrap();
        assert_eq!(recorder.calls, vec![Call::Write(0xE9, FULL.to_vec(), true)]);
    }
}
