//! Guoxian panel with a Fitipower JD9365 controller, 720x1520, 4 lane video mode

use embedded_hal::digital::PinState;

use super::PanelModel;
use crate::command::*;
use crate::descriptor::*;
use crate::power::PowerStep;

const FRAME_WIDTH: u16 = 720;
const FRAME_HEIGHT: u16 = 1520;

/// Guoxian JD9365 panel
pub static JD9365_GUOXIAN: PanelModel = PanelModel {
    name: "JD9365_GUOXIAN",
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
                vertical_sync_active: 4,
                vertical_backporch: 12,
                vertical_frontporch: 18,
                vertical_active_line: FRAME_HEIGHT,
                horizontal_sync_active: 20,
                horizontal_backporch: 80,
                horizontal_frontporch: 80,
                horizontal_active_pixel: FRAME_WIDTH,
            },
            pll_clock: 260,
            esd_check_enable: true,
            customization_esd_check_enable: true,
            liveness: [
                LivenessCheck {
                    opcode: DCS_GET_POWER_MODE,
                    expected: &[0x1C],
                },
                LivenessCheck::EMPTY,
                LivenessCheck::EMPTY,
            ],
            ..DsiParams::EMPTY
        },
    },
    power_on: &POWER_ON,
    init_table: &INIT_TABLE,
    suspend_table: &SUSPEND_TABLE,
    power_off: &POWER_OFF,
};

// the bias rail is a plain gpio switched supply on this board
static POWER_ON: [PowerStep; 8] = [
    PowerStep::BiasPin(PinState::High),
    PowerStep::DelayMs(15),
    PowerStep::Reset(PinState::High),
    PowerStep::DelayMs(2),
    PowerStep::Reset(PinState::Low),
    PowerStep::DelayMs(5),
    PowerStep::Reset(PinState::High),
    PowerStep::DelayMs(15),
];

static POWER_OFF: [PowerStep; 4] = [
    PowerStep::DelayMs(10),
    PowerStep::Reset(PinState::Low),
    PowerStep::DelayMs(120),
    PowerStep::BiasPin(PinState::Low),
];

static INIT_TABLE: [Command; 218] = [
    // page 0
    Command::write(0xE0, &[0x00]),
    Command::write(0xE1, &[0x93]),
    Command::write(0xE2, &[0x65]),
    Command::write(0xE3, &[0xF8]),
    Command::write(0x80, &[0x03]),
    // page 1
    Command::write(0xE0, &[0x01]),
    Command::write(0x00, &[0x00]),
    Command::write(0x01, &[0x47]),
    Command::write(0x03, &[0x00]),
    Command::write(0x04, &[0x48]),
    Command::write(0x17, &[0x00]),
    Command::write(0x18, &[0xCD]),
    Command::write(0x19, &[0x00]),
    Command::write(0x1A, &[0x00]),
    Command::write(0x1B, &[0xCD]),
    Command::write(0x1C, &[0x00]),
    Command::write(0x23, &[0x02]),
    Command::write(0x24, &[0xFE]),
    Command::write(0x25, &[0x20]),
    Command::write(0x27, &[0x22]),
    Command::write(0x32, &[0x23]),
    Command::write(0x37, &[0x09]),
    Command::write(0x38, &[0x04]),
    Command::write(0x39, &[0x08]),
    Command::write(0x3A, &[0x12]),
    Command::write(0x3C, &[0x64]),
    Command::write(0x3D, &[0xFF]),
    Command::write(0x3E, &[0xFF]),
    Command::write(0x3F, &[0x64]),
    Command::write(0x40, &[0x04]),
    Command::write(0x41, &[0xBE]),
    Command::write(0x42, &[0x6B]),
    Command::write(0x43, &[0x12]),
    Command::write(0x44, &[0x0F]),
    Command::write(0x45, &[0x28]),
    Command::write(0x55, &[0x0F]),
    Command::write(0x56, &[0x01]),
    Command::write(0x57, &[0x65]),
    Command::write(0x58, &[0x0A]),
    Command::write(0x59, &[0x0A]),
    Command::write(0x5A, &[0x28]),
    Command::write(0x5B, &[0x10]),
    Command::write(0x5D, &[0x4C]),
    Command::write(0x5E, &[0x36]),
    Command::write(0x5F, &[0x2A]),
    Command::write(0x60, &[0x20]),
    Command::write(0x61, &[0x20]),
    Command::write(0x62, &[0x14]),
    Command::write(0x63, &[0x1D]),
    Command::write(0x64, &[0x0B]),
    Command::write(0x65, &[0x28]),
    Command::write(0x66, &[0x2A]),
    Command::write(0x67, &[0x2D]),
    Command::write(0x68, &[0x4D]),
    Command::write(0x69, &[0x3D]),
    Command::write(0x6A, &[0x47]),
    Command::write(0x6B, &[0x39]),
    Command::write(0x6C, &[0x39]),
    Command::write(0x6D, &[0x2E]),
    Command::write(0x6E, &[0x22]),
    Command::write(0x6F, &[0x09]),
    Command::write(0x70, &[0x4C]),
    Command::write(0x71, &[0x36]),
    Command::write(0x72, &[0x2A]),
    Command::write(0x73, &[0x20]),
    Command::write(0x74, &[0x20]),
    Command::write(0x75, &[0x14]),
    Command::write(0x76, &[0x1D]),
    Command::write(0x77, &[0x0B]),
    Command::write(0x78, &[0x28]),
    Command::write(0x79, &[0x2A]),
    Command::write(0x7A, &[0x2D]),
    Command::write(0x7B, &[0x4D]),
    Command::write(0x7C, &[0x3D]),
    Command::write(0x7D, &[0x47]),
    Command::write(0x7E, &[0x39]),
    Command::write(0x7F, &[0x39]),
    Command::write(0x80, &[0x2E]),
    Command::write(0x81, &[0x22]),
    Command::write(0x82, &[0x09]),
    // page 2
    Command::write(0xE0, &[0x02]),
    Command::write(0x00, &[0x5E]),
    Command::write(0x01, &[0x5F]),
    Command::write(0x02, &[0x57]),
    Command::write(0x03, &[0x58]),
    Command::write(0x04, &[0x44]),
    Command::write(0x05, &[0x46]),
    Command::write(0x06, &[0x48]),
    Command::write(0x07, &[0x4A]),
    Command::write(0x08, &[0x40]),
    Command::write(0x09, &[0x1D]),
    Command::write(0x0A, &[0x1D]),
    Command::write(0x0B, &[0x1D]),
    Command::write(0x0C, &[0x1D]),
    Command::write(0x0D, &[0x1D]),
    Command::write(0x0E, &[0x1D]),
    Command::write(0x0F, &[0x50]),
    Command::write(0x10, &[0x5F]),
    Command::write(0x11, &[0x5F]),
    Command::write(0x12, &[0x5F]),
    Command::write(0x13, &[0x5F]),
    Command::write(0x14, &[0x5F]),
    Command::write(0x15, &[0x5F]),
    Command::write(0x16, &[0x5E]),
    Command::write(0x17, &[0x5F]),
    Command::write(0x18, &[0x57]),
    Command::write(0x19, &[0x58]),
    Command::write(0x1A, &[0x45]),
    Command::write(0x1B, &[0x47]),
    Command::write(0x1C, &[0x49]),
    Command::write(0x1D, &[0x4B]),
    Command::write(0x1E, &[0x41]),
    Command::write(0x1F, &[0x1D]),
    Command::write(0x20, &[0x1D]),
    Command::write(0x21, &[0x1D]),
    Command::write(0x22, &[0x1D]),
    Command::write(0x23, &[0x1D]),
    Command::write(0x24, &[0x1D]),
    Command::write(0x25, &[0x51]),
    Command::write(0x26, &[0x5F]),
    Command::write(0x27, &[0x5F]),
    Command::write(0x28, &[0x5F]),
    Command::write(0x29, &[0x5F]),
    Command::write(0x2A, &[0x5F]),
    Command::write(0x2B, &[0x5F]),
    Command::write(0x2C, &[0x1F]),
    Command::write(0x2D, &[0x1E]),
    Command::write(0x2E, &[0x17]),
    Command::write(0x2F, &[0x18]),
    Command::write(0x30, &[0x0B]),
    Command::write(0x31, &[0x09]),
    Command::write(0x32, &[0x07]),
    Command::write(0x33, &[0x05]),
    Command::write(0x34, &[0x11]),
    Command::write(0x35, &[0x1F]),
    Command::write(0x36, &[0x1F]),
    Command::write(0x37, &[0x1F]),
    Command::write(0x38, &[0x1F]),
    Command::write(0x39, &[0x1F]),
    Command::write(0x3A, &[0x1F]),
    Command::write(0x3B, &[0x01]),
    Command::write(0x3C, &[0x1F]),
    Command::write(0x3D, &[0x1F]),
    Command::write(0x3E, &[0x1F]),
    Command::write(0x3F, &[0x1F]),
    Command::write(0x40, &[0x1F]),
    Command::write(0x41, &[0x1F]),
    Command::write(0x42, &[0x1F]),
    Command::write(0x43, &[0x1E]),
    Command::write(0x44, &[0x17]),
    Command::write(0x45, &[0x18]),
    Command::write(0x46, &[0x0A]),
    Command::write(0x47, &[0x08]),
    Command::write(0x48, &[0x06]),
    Command::write(0x49, &[0x04]),
    Command::write(0x4A, &[0x10]),
    Command::write(0x4B, &[0x1F]),
    Command::write(0x4C, &[0x1F]),
    Command::write(0x4D, &[0x1F]),
    Command::write(0x4E, &[0x1F]),
    Command::write(0x4F, &[0x1F]),
    Command::write(0x50, &[0x1F]),
    Command::write(0x51, &[0x00]),
    Command::write(0x52, &[0x1F]),
    Command::write(0x53, &[0x1F]),
    Command::write(0x54, &[0x1F]),
    Command::write(0x55, &[0x1F]),
    Command::write(0x56, &[0x1F]),
    Command::write(0x57, &[0x1F]),
    Command::write(0x58, &[0x40]),
    Command::write(0x59, &[0x00]),
    Command::write(0x5A, &[0x00]),
    Command::write(0x5B, &[0x10]),
    Command::write(0x5C, &[0x0B]),
    Command::write(0x5D, &[0x30]),
    Command::write(0x5E, &[0x01]),
    Command::write(0x5F, &[0x02]),
    Command::write(0x60, &[0x30]),
    Command::write(0x61, &[0x03]),
    Command::write(0x62, &[0x04]),
    Command::write(0x63, &[0x1C]),
    Command::write(0x64, &[0x52]),
    Command::write(0x65, &[0x56]),
    Command::write(0x66, &[0x00]),
    Command::write(0x67, &[0x73]),
    Command::write(0x68, &[0x0D]),
    Command::write(0x69, &[0x0D]),
    Command::write(0x6A, &[0x52]),
    Command::write(0x6B, &[0x00]),
    Command::write(0x6C, &[0x00]),
    Command::write(0x6D, &[0x00]),
    Command::write(0x6E, &[0x00]),
    Command::write(0x6F, &[0x88]),
    Command::write(0x70, &[0x00]),
    Command::write(0x71, &[0x00]),
    Command::write(0x72, &[0x06]),
    Command::write(0x73, &[0x7B]),
    Command::write(0x74, &[0x00]),
    Command::write(0x75, &[0xBC]),
    Command::write(0x76, &[0x00]),
    Command::write(0x77, &[0x0E]),
    Command::write(0x78, &[0x11]),
    Command::write(0x79, &[0x00]),
    Command::write(0x7A, &[0x00]),
    Command::write(0x7B, &[0x00]),
    Command::write(0x7C, &[0x00]),
    Command::write(0x7D, &[0x03]),
    Command::write(0x7E, &[0x7B]),
    // page 4
    Command::write(0xE0, &[0x04]),
    Command::write(0x09, &[0x11]),
    Command::write(0x0E, &[0x4A]),
    // page 0
    Command::write(0xE0, &[0x00]),
    Command::write(DCS_SET_TEAR_ON, &[0x00]),
    Command::write(DCS_EXIT_SLEEP_MODE, &[0x00]),
    Command::Delay(120),
    Command::write(DCS_SET_DISPLAY_ON, &[0x00]),
    Command::Delay(5),
    Command::End,
];

static SUSPEND_TABLE: [Command; 5] = [
    Command::Delay(5),
    Command::write(DCS_SET_DISPLAY_OFF, &[]),
    Command::Delay(50),
    Command::write(DCS_ENTER_SLEEP_MODE, &[]),
    Command::Delay(120),
];
