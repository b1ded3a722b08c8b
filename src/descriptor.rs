//! Static panel characteristics handed to the display host
//!
//! Every field defaults to zero, so a model only spells out what it uses and
//! everything else reads as "not set".

/// Maximum number of entries in the liveness check table
pub const MAX_LIVENESS_CHECKS: usize = 3;

/// Physical interface of the panel
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum InterfaceType {
    /// not set
    #[default]
    Unknown,
    /// MIPI-DSI
    Dsi,
}

/// DSI operating mode
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum DsiMode {
    /// command mode, the panel has its own frame memory
    #[default]
    Command,
    /// video mode with sync pulses
    SyncPulseVideo,
    /// video mode with sync events
    SyncEventVideo,
    /// video mode in burst
    BurstVideo,
}

/// Number of DSI data lanes
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LaneCount {
    /// not set
    #[default]
    Unset,
    /// one lane
    One,
    /// two lanes
    Two,
    /// three lanes
    Three,
    /// four lanes
    Four,
}

impl LaneCount {
    /// number of lanes, 0 when not set
    pub fn lanes(self) -> u8 {
        match self {
            LaneCount::Unset => 0,
            LaneCount::One => 1,
            LaneCount::Two => 2,
            LaneCount::Three => 3,
            LaneCount::Four => 4,
        }
    }
}

/// Subpixel order
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ColorOrder {
    /// red, green, blue
    #[default]
    Rgb,
    /// blue, green, red
    Bgr,
}

/// Bit order on the link
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TransSeq {
    /// most significant bit first
    #[default]
    MsbFirst,
    /// least significant bit first
    LsbFirst,
}

/// Padding position for formats narrower than the link word
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Padding {
    /// pad the least significant bits
    #[default]
    OnLsb,
    /// pad the most significant bits
    OnMsb,
}

/// Pixel format coming from the display engine
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    /// 16 bit
    #[default]
    Rgb565,
    /// 18 bit
    Rgb666,
    /// 24 bit
    Rgb888,
}

/// Packed pixel stream format on the DSI link
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum PixelStream {
    /// 16 bit packed
    #[default]
    Packed16BitRgb565,
    /// 18 bit loosely packed
    Loosely18BitRgb666,
    /// 24 bit packed
    Packed24BitRgb888,
    /// 18 bit packed
    Packed18BitRgb666,
}

/// Format of the data coming from the display engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataFormatSetting {
    /// subpixel order
    pub color_order: ColorOrder,
    /// bit order
    pub trans_seq: TransSeq,
    /// padding position
    pub padding: Padding,
    /// pixel format
    pub format: DataFormat,
}

impl DataFormatSetting {
    /// nothing set
    pub const EMPTY: DataFormatSetting = DataFormatSetting {
        color_order: ColorOrder::Rgb,
        trans_seq: TransSeq::MsbFirst,
        padding: Padding::OnLsb,
        format: DataFormat::Rgb565,
    };
}

impl Default for DataFormatSetting {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// Video mode timing, all values in lines or pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VideoTiming {
    /// vertical sync pulse width
    pub vertical_sync_active: u16,
    /// vertical back porch
    pub vertical_backporch: u16,
    /// vertical front porch
    pub vertical_frontporch: u16,
    /// visible lines
    pub vertical_active_line: u16,
    /// horizontal sync pulse width
    pub horizontal_sync_active: u16,
    /// horizontal back porch
    pub horizontal_backporch: u16,
    /// horizontal front porch
    pub horizontal_frontporch: u16,
    /// visible pixels per line
    pub horizontal_active_pixel: u16,
}

impl VideoTiming {
    /// nothing set
    pub const EMPTY: VideoTiming = VideoTiming {
        vertical_sync_active: 0,
        vertical_backporch: 0,
        vertical_frontporch: 0,
        vertical_active_line: 0,
        horizontal_sync_active: 0,
        horizontal_backporch: 0,
        horizontal_frontporch: 0,
        horizontal_active_pixel: 0,
    };
}

impl Default for VideoTiming {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// A register and the bytes it must read back while the panel is healthy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LivenessCheck {
    /// register to read
    pub opcode: u32,
    /// expected content
    pub expected: &'static [u8],
}

impl LivenessCheck {
    /// empty slot
    pub const EMPTY: LivenessCheck = LivenessCheck {
        opcode: 0,
        expected: &[],
    };
}

impl Default for LivenessCheck {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// DSI link settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DsiParams {
    /// operating mode
    pub mode: DsiMode,
    /// data lanes
    pub lanes: LaneCount,
    /// maximum long packet size in bytes
    pub packet_size: u16,
    /// data format from the display engine
    pub data_format: DataFormatSetting,
    /// packed pixel stream format
    pub pixel_stream: PixelStream,
    /// video mode timing
    pub timing: VideoTiming,
    /// spread spectrum clocking disabled
    pub ssc_disable: bool,
    /// link PLL clock in MHz
    pub pll_clock: u16,
    /// host checks panel health
    pub esd_check_enable: bool,
    /// host uses the liveness table below instead of its own check
    pub customization_esd_check_enable: bool,
    /// registers read by the health monitor, unused slots stay empty
    pub liveness: [LivenessCheck; MAX_LIVENESS_CHECKS],
}

impl Default for DsiParams {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl DsiParams {
    /// nothing set
    pub const EMPTY: DsiParams = DsiParams {
        mode: DsiMode::Command,
        lanes: LaneCount::Unset,
        packet_size: 0,
        data_format: DataFormatSetting::EMPTY,
        pixel_stream: PixelStream::Packed16BitRgb565,
        timing: VideoTiming::EMPTY,
        ssc_disable: false,
        pll_clock: 0,
        esd_check_enable: false,
        customization_esd_check_enable: false,
        liveness: [LivenessCheck::EMPTY; MAX_LIVENESS_CHECKS],
    };

    /// populated liveness checks
    pub fn liveness_checks(&self) -> impl Iterator<Item = &LivenessCheck> {
        self.liveness.iter().filter(|check| !check.expected.is_empty())
    }
}

/// Describes a panel model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelDescriptor {
    /// physical interface
    pub interface: InterfaceType,
    /// width in pixel
    pub width: u16,
    /// height in pixel
    pub height: u16,
    /// pixel density in dpi
    pub density: u16,
    /// DSI link settings
    pub dsi: DsiParams,
}

impl PanelDescriptor {
    /// nothing set
    pub const EMPTY: PanelDescriptor = PanelDescriptor {
        interface: InterfaceType::Unknown,
        width: 0,
        height: 0,
        density: 0,
        dsi: DsiParams::EMPTY,
    };
}

impl Default for PanelDescriptor {
    fn default() -> Self {
        Self::EMPTY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_descriptor_is_zeroed() {
        let descriptor = PanelDescriptor::default();
        assert_eq!(descriptor.width, 0);
        assert_eq!(descriptor.dsi.lanes.lanes(), 0);
        assert_eq!(descriptor.dsi.pll_clock, 0);
        assert!(!descriptor.dsi.esd_check_enable);
        assert_eq!(descriptor.dsi.liveness_checks().count(), 0);
    }

    #[test]
    fn liveness_checks_skip_empty_slots() {
        let dsi = DsiParams {
            liveness: [
                LivenessCheck {
                    opcode: 0x0A,
                    expected: &[0x1C],
                },
                LivenessCheck::default(),
                LivenessCheck::default(),
            ],
            ..Default::default()
        };
        let checks: Vec<_> = dsi.liveness_checks().collect();
        assert_eq!(checks.len(), 1);
        assert_eq!(checks[0].opcode, 0x0A);
    }
}
