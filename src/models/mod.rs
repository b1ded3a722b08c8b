//! Supported panel models
//!
//! A model bundles everything that differs between panels: the descriptor, the
//! init and suspend tables and the power scripts around them. The lifecycle
//! logic in [`crate::Panel`] is shared by all of them.

use crate::command::Command;
use crate::descriptor::PanelDescriptor;
use crate::power::PowerStep;

mod jd9365_guoxian;
mod st7703_helitai;

pub use jd9365_guoxian::JD9365_GUOXIAN;
pub use st7703_helitai::ST7703_HELITAI;

/// Per model configuration record
#[derive(Debug)]
pub struct PanelModel {
    /// driver name of the model
    pub name: &'static str,
    /// static characteristics reported by `describe`
    pub descriptor: PanelDescriptor,
    /// power up script, runs before the init table
    pub power_on: &'static [PowerStep],
    /// register setup sent on initialize and resume
    pub init_table: &'static [Command],
    /// register setup sent on suspend
    pub suspend_table: &'static [Command],
    /// power down script, runs after the suspend table
    pub power_off: &'static [PowerStep],
}

/// All models shipped with the crate
pub static MODELS: [&PanelModel; 2] = [&ST7703_HELITAI, &JD9365_GUOXIAN];

/// Looks up a model by its driver name
pub fn find(name: &str) -> Option<&'static PanelModel> {
    MODELS.iter().copied().find(|model| model.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::MAX_PARAMETERS;

    #[test]
    fn lookup_by_name() {
        assert_eq!(find("ST7703_HELITAI").map(|m| m.name), Some("ST7703_HELITAI"));
        assert_eq!(find("JD9365_GUOXIAN").map(|m| m.name), Some("JD9365_GUOXIAN"));
        assert!(find("ILI9881C").is_none());
    }

    #[test]
    fn tables_stay_within_parameter_limit() {
        for model in MODELS {
            for command in model.init_table.iter().chain(model.suspend_table) {
                if let Command::Write { params, .. } = command {
                    assert!(params.len() <= MAX_PARAMETERS);
                }
            }
        }
    }

    #[test]
    fn init_tables_end_with_display_on() {
        use crate::command::DCS_SET_DISPLAY_ON;

        for model in MODELS {
            let last_write = model
                .init_table
                .iter()
                .rev()
                .find_map(|command| match command {
                    Command::Write { opcode, .. } => Some(*opcode),
                    _ => None,
                });
            assert_eq!(last_write, Some(DCS_SET_DISPLAY_ON), "{}", model.name);
        }
    }
}
