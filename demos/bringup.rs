use linux_embedded_hal::gpio_cdev::{Chip, LineRequestFlags};
use linux_embedded_hal::{CdevPin, Delay};
use std::error::Error;

use panel_sequencer::interface::{DsiBus, GpioBias, HalInterface};
use panel_sequencer::{models, Panel};

/// Stands in for the DSI host and prints every transaction
struct DryRunBus;

impl DsiBus for DryRunBus {
    type Error = core::convert::Infallible;

    fn write(&mut self, opcode: u32, params: &[u8], force_update: bool) -> Result<(), Self::Error> {
        println!("dsi write {:#04x} {:02x?} force={}", opcode, params, force_update);
        Ok(())
    }

    fn read(&mut self, opcode: u32, buf: &mut [u8]) -> Result<usize, Self::Error> {
        println!("dsi read {:#04x} ({} bytes)", opcode, buf.len());
        Ok(0)
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let name = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "JD9365_GUOXIAN".into());
    let model = models::find(&name).ok_or_else(|| format!("unknown panel model {name}"))?;

    let mut chip = Chip::new("/dev/gpiochip0")?;
    // RST: 17
    let rst_output = chip.get_line(17)?;
    let rst_output_handle = rst_output.request(LineRequestFlags::OUTPUT, 0, "panel-sequencer")?;
    let rst = CdevPin::new(rst_output_handle)?;
    // LCD_ENP: 27
    let enp_output = chip.get_line(27)?;
    let enp_output_handle = enp_output.request(LineRequestFlags::OUTPUT, 0, "panel-sequencer")?;
    let enp = CdevPin::new(enp_output_handle)?;

    let interface = HalInterface::new(DryRunBus, rst, GpioBias::new(enp), Delay);
    let mut panel = Panel::with_interface(model, interface);

    println!("{}: {:?}", panel.name(), panel.describe());

    panel.initialize()?;
    println!("Initialized panel, liveness ok: {}", panel.check_liveness()?);

    panel.suspend()?;
    panel.resume()?;
    println!("Suspend / resume done");

    Ok(())
}
