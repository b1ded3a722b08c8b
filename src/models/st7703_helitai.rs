//! Helitai panel with a Sitronix ST7703 controller, 720x1520, 4 lane video mode

use embedded_hal::digital::PinState;

use super::PanelModel;
use crate::command::*;
use crate::descriptor::*;
use crate::interface::BiasSequence;
use crate::power::PowerStep;

const FRAME_WIDTH: u16 = 720;
const FRAME_HEIGHT: u16 = 1520;
const BIAS_MILLIVOLTS: u16 = 5500;

/// Helitai ST7703 panel
pub static ST7703_HELITAI: PanelModel = PanelModel {
    name: "ST7703_HELITAI",
    descriptor: PanelDescriptor {
        interface: InterfaceType::Dsi,
        width: FRAME_WIDTH,
        height: FRAME_HEIGHT,
        density: 320,
        dsi: DsiParams {
            mode: DsiMode::SyncPulseVideo,
            lanes: LaneCount::Four,
            packet_size: 256,
            data_format: DataFormatSetting {
                color_order: ColorOrder::Rgb,
                trans_seq: TransSeq::MsbFirst,
                padding: Padding::OnLsb,
                format: DataFormat::Rgb888,
            },
            pixel_stream: PixelStream::Packed24BitRgb888,
            timing: VideoTiming {
                vertical_sync_active: 3,
                vertical_backporch: 10,
                vertical_frontporch: 16,
                vertical_active_line: FRAME_HEIGHT,
                horizontal_sync_active: 10,
                horizontal_backporch: 50,
                horizontal_frontporch: 50,
                horizontal_active_pixel: FRAME_WIDTH,
            },
            pll_clock: 241,
            esd_check_enable: true,
            liveness: [
                LivenessCheck {
                    opcode: 0x68,
                    expected: &[0xC0],
                },
                LivenessCheck {
                    opcode: 0x09,
                    expected: &[0x80, 0x73, 0x04],
                },
                LivenessCheck {
                    opcode: 0xAF,
                    expected: &[0xFD],
                },
            ],
            ..DsiParams::EMPTY
        },
    },
    power_on: &POWER_ON,
    init_table: &INIT_TABLE,
    suspend_table: &SUSPEND_TABLE,
    power_off: &POWER_OFF,
};

static POWER_ON: [PowerStep; 8] = [
    PowerStep::Reset(PinState::High),
    PowerStep::DelayMs(10),
    PowerStep::Reset(PinState::Low),
    PowerStep::DelayMs(1),
    PowerStep::Reset(PinState::High),
    PowerStep::DelayMs(120),
    PowerStep::Bias {
        enable: true,
        sequence: BiasSequence::VspFirstVsnAfter,
        millivolts: BIAS_MILLIVOLTS,
    },
    PowerStep::DelayMs(15),
];

// reset is driven low a second time after the rails are off
static POWER_OFF: [PowerStep; 6] = [
    PowerStep::DelayMs(10),
    PowerStep::Reset(PinState::Low),
    PowerStep::DelayMs(120),
    PowerStep::Bias {
        enable: false,
        sequence: BiasSequence::VsnFirstVspAfter,
        millivolts: BIAS_MILLIVOLTS,
    },
    PowerStep::Reset(PinState::Low),
    PowerStep::DelayMs(10),
];

static INIT_TABLE: [Command; 26] = [
    Command::write(0xB9, &[0xF1, 0x12, 0x83]),
    Command::write(
        0xBA,
        &[
            0x33, 0x81, 0x05, 0xF9, 0x0E, 0x0E, 0x20, 0x00, 0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x44, 0x25, 0x00, 0x90, 0x0A, 0x00, 0x00, 0x00, 0x4F, 0xD1,
            0xFF, 0x7F, 0x37,
        ],
    ),
    Command::write(0xB8, &[0x75]),
    Command::write(0xBF, &[0x02, 0x11, 0x00]),
    Command::write(0xB3, &[0x07, 0x0B, 0x28, 0x28, 0x03, 0xFF, 0x00, 0x00, 0x00, 0x00]),
    Command::write(0xC0, &[0x73, 0x73, 0x50, 0x50, 0x00, 0x00, 0x08, 0x50, 0x00]),
    Command::write(0xBC, &[0x46]),
    Command::write(0xCC, &[0x0A]),
    Command::write(0xB4, &[0x80]),
    Command::write(0xB1, &[0x85]),
    Command::write(0xB2, &[0x04, 0x12, 0xF0]),
    Command::write(
        0xE3,
        &[
            0x07, 0x07, 0x0B, 0x0B, 0x03, 0x0B, 0x00, 0x00, 0x00, 0x00, 0xFF, 0x80,
            0xC0, 0x17,
        ],
    ),
    Command::write(0xC1, &[0x54, 0x00, 0x1E, 0x1E, 0x99, 0xF1, 0xFF, 0xFF, 0xEE, 0xEE, 0x77, 0x77]),
    Command::write(0xC6, &[0x25, 0x00, 0xFF, 0xDF, 0x20, 0x20]),
    Command::write(0xB5, &[0x09, 0x09]),
    Command::write(0xB6, &[0x60, 0x60]),
    Command::write(
        0xE9,
        &[
            0x02, 0x00, 0x07, 0x05, 0xFD, 0x80, 0x81, 0x12, 0x31, 0x23, 0x77, 0x0B,
            0x80, 0x81, 0x47, 0x18, 0x00, 0x01, 0x01, 0x00, 0x00, 0x00, 0x00, 0x01,
            0x01, 0x00, 0x00, 0x00, 0x4F, 0x88, 0x64, 0x20, 0x08, 0x88, 0x88, 0x88,
            0x88, 0x88, 0x88, 0x5F, 0x88, 0x75, 0x31, 0x18, 0x88, 0x88, 0x88, 0x88,
            0x88, 0x88, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00,
        ],
    ),
    Command::write(
        0xEA,
        &[
            0x00, 0x1A, 0x00, 0x00, 0x00, 0x00, 0x02, 0x00, 0x00, 0x00, 0x00, 0x00,
            0x18, 0xF8, 0x13, 0x57, 0x58, 0x88, 0x88, 0x88, 0x88, 0x88, 0x88, 0x08,
            0xF8, 0x02, 0x46, 0x48, 0x88, 0x88, 0x88, 0x88, 0x88, 0x88, 0x23, 0x14,
            0x00, 0x00, 0x1C, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x30, 0x80, 0x81, 0x00, 0x00, 0x00,
            0x00,
        ],
    ),
    Command::write(
        0xE0,
        &[
            0x00, 0x09, 0x0D, 0x2B, 0x2B, 0x3F, 0x3E, 0x31, 0x07, 0x0C, 0x0D, 0x11,
            0x12, 0x10, 0x13, 0x16, 0x1C, 0x00, 0x09, 0x0D, 0x2B, 0x2B, 0x3F, 0x3E,
            0x31, 0x07, 0x0C, 0x0D, 0x11, 0x12, 0x10, 0x13, 0x16, 0x1C,
        ],
    ),
    Command::write(0xEF, &[0xFF, 0xFF, 0x01]),
    Command::write(0xC7, &[0x10]),
    Command::write(DCS_EXIT_SLEEP_MODE, &[0x00]),
    Command::Delay(120),
    Command::write(DCS_SET_DISPLAY_ON, &[0x00]),
    Command::Delay(5),
    Command::End,
];

static SUSPEND_TABLE: [Command; 4] = [
    Command::write(DCS_SET_DISPLAY_OFF, &[]),
    Command::Delay(20),
    Command::write(DCS_ENTER_SLEEP_MODE, &[]),
    Command::Delay(200),
];
