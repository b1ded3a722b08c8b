//! Command table entries
//!
//! Vendor init tables are a list of `{cmd, count, {params}}` triples where three
//! reserved `cmd` values stand for delays and an end marker. Entries are decoded
//! into [`Command`] once, when the table is built, so dispatch never has to look
//! at the reserved values again.

use core::fmt;

/// Maximum number of parameter bytes a single register write may carry
pub const MAX_PARAMETERS: usize = 64;

// ---- reserved opcodes of the vendor table format ---------------------------------------------
/// delay, count is in milliseconds
pub const REGFLAG_DELAY: u32 = 0xFFFC;
/// delay, count is in microseconds
pub const REGFLAG_UDELAY: u32 = 0xFFFB;
/// advisory end of table marker
pub const REGFLAG_END_OF_TABLE: u32 = 0xFFFD;

// ---- MIPI DCS commands used by the lifecycle tables ------------------------------------------
/// DCS enter_sleep_mode
pub const DCS_ENTER_SLEEP_MODE: u32 = 0x10;
/// DCS exit_sleep_mode
pub const DCS_EXIT_SLEEP_MODE: u32 = 0x11;
/// DCS set_display_off
pub const DCS_SET_DISPLAY_OFF: u32 = 0x28;
/// DCS set_display_on
pub const DCS_SET_DISPLAY_ON: u32 = 0x29;
/// DCS set_tear_on
pub const DCS_SET_TEAR_ON: u32 = 0x35;
/// DCS get_power_mode
pub const DCS_GET_POWER_MODE: u32 = 0x0A;

/// Table construction error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableError {
    /// the entry carries more than [`MAX_PARAMETERS`] bytes
    TooManyParameters {
        /// declared parameter count
        count: usize,
    },
    /// the declared count of a register write does not match the parameter bytes
    CountMismatch {
        /// declared parameter count
        count: u8,
        /// number of parameter bytes actually given
        provided: usize,
    },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::TooManyParameters { count } => {
                write!(f, "{count} parameters exceed the {MAX_PARAMETERS} byte limit")
            }
            TableError::CountMismatch { count, provided } => {
                write!(f, "declared {count} parameters, {provided} given")
            }
        }
    }
}

impl core::error::Error for TableError {}

/// One entry of a command table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// write `params` to the panel command/register `opcode`
    Write {
        /// command code
        opcode: u32,
        /// parameter bytes, at most [`MAX_PARAMETERS`]
        /// longer lists are rejected by [`crate::sequence::push_table`]
        params: &'static [u8],
    },
    /// wait for the given number of milliseconds
    /// short waits are executed on the microsecond primitive, see [`crate::sequence`]
    Delay(u32),
    /// wait for the given number of microseconds
    MicroDelay(u32),
    /// end of table marker, dispatches nothing
    End,
}

impl Command {
    /// Register write entry
    ///
    /// Panics if `params` is longer than [`MAX_PARAMETERS`]. In a `static` or
    /// `const` table the panic is a compile error.
    pub const fn write(opcode: u32, params: &'static [u8]) -> Command {
        assert!(
            params.len() <= MAX_PARAMETERS,
            "register write exceeds 64 parameter bytes"
        );
        Command::Write { opcode, params }
    }

    /// Decodes one entry in the vendor table format
    ///
    /// Panics on malformed entries, see [`Command::try_raw`] for the checks.
    pub const fn raw(opcode: u32, count: u8, params: &'static [u8]) -> Command {
        match Command::try_raw(opcode, count, params) {
            Ok(command) => command,
            Err(TableError::TooManyParameters { .. }) => {
                panic!("register write exceeds 64 parameter bytes")
            }
            Err(TableError::CountMismatch { .. }) => {
                panic!("parameter count does not match the parameter list")
            }
        }
    }

    /// Decodes one entry in the vendor table format
    ///
    /// The reserved opcodes turn into pseudo instructions and take their
    /// duration from `count`. Any other opcode is a register write whose
    /// `count` must match `params` and stay within [`MAX_PARAMETERS`].
    pub const fn try_raw(
        opcode: u32,
        count: u8,
        params: &'static [u8],
    ) -> Result<Command, TableError> {
        match opcode {
            REGFLAG_DELAY => Ok(Command::Delay(count as u32)),
            REGFLAG_UDELAY => Ok(Command::MicroDelay(count as u32)),
            REGFLAG_END_OF_TABLE => Ok(Command::End),
            _ => {
                if (count as usize) > MAX_PARAMETERS {
                    return Err(TableError::TooManyParameters {
                        count: count as usize,
                    });
                }
                if (count as usize) != params.len() {
                    return Err(TableError::CountMismatch {
                        count,
                        provided: params.len(),
                    });
                }
                Ok(Command::Write { opcode, params })
            }
        }
    }

    /// true for entries that end up on the bus
    pub fn is_write(&self) -> bool {
        matches!(self, Command::Write { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_decodes_reserved_opcodes() {
        assert_eq!(Command::raw(REGFLAG_DELAY, 120, &[]), Command::Delay(120));
        assert_eq!(Command::raw(REGFLAG_UDELAY, 40, &[]), Command::MicroDelay(40));
        assert_eq!(Command::raw(REGFLAG_END_OF_TABLE, 0, &[]), Command::End);
    }

    #[test]
    fn raw_keeps_register_writes() {
        assert_eq!(
            Command::raw(0xB9, 3, &[0xF1, 0x12, 0x83]),
            Command::Write {
                opcode: 0xB9,
                params: &[0xF1, 0x12, 0x83]
            }
        );
        assert_eq!(
            Command::raw(DCS_SET_DISPLAY_OFF, 0, &[]),
            Command::Write {
                opcode: DCS_SET_DISPLAY_OFF,
                params: &[]
            }
        );
    }

    #[test]
    fn typed_write_may_use_reserved_values() {
        // only the vendor format gives these values a meaning
        let command = Command::write(REGFLAG_DELAY, &[0x01]);
        assert!(command.is_write());
    }

    #[test]
    fn count_mismatch_is_rejected() {
        assert_eq!(
            Command::try_raw(0xB8, 2, &[0x75]),
            Err(TableError::CountMismatch {
                count: 2,
                provided: 1
            })
        );
    }

    #[test]
    fn parameter_overflow_is_rejected() {
        static TOO_LONG: [u8; 65] = [0; 65];
        assert_eq!(
            Command::try_raw(0xE9, 65, &TOO_LONG),
            Err(TableError::TooManyParameters { count: 65 })
        );
    }

    #[test]
    fn full_buffer_is_accepted() {
        static FULL: [u8; MAX_PARAMETERS] = [0xAA; MAX_PARAMETERS];
        assert!(Command::try_raw(0xE9, 64, &FULL).is_ok());
    }

    #[test]
    #[should_panic]
    fn oversized_write_panics() {
        static TOO_LONG: [u8; 65] = [0; 65];
        let _ = Command::write(0xE9, &TOO_LONG);
    }
}
