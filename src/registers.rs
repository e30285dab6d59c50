//! Register map of the Qwiic Button.
//!
//! The device exposes a flat 8-bit register space. Multi-byte fields
//! (debounce time, LED pulse timing, queue front entries) are stored
//! little-endian starting at the listed address.

/// Value the identity register must return for a genuine Qwiic Button.
pub const DEVICE_ID: u8 = 0x5D;

/// Factory-default 7-bit I2C address.
pub const DEFAULT_ADDRESS: u8 = 0x6F;

// ---------------------------------------------------------------------------
// Button status register bits (0x03)
// ---------------------------------------------------------------------------

/// Button is currently held down.
pub const STATUS_IS_PRESSED: u8 = 1 << 0;

/// A click (press and release) completed since the flag was last cleared.
pub const STATUS_HAS_BEEN_CLICKED: u8 = 1 << 1;

/// At least one unread entry sits in an event queue.
pub const STATUS_EVENT_AVAILABLE: u8 = 1 << 2;

// ---------------------------------------------------------------------------
// Interrupt config register bits (0x04)
// ---------------------------------------------------------------------------

/// Assert the interrupt pin on press events.
pub const INT_PRESSED_ENABLE: u8 = 1 << 0;

/// Assert the interrupt pin on click events.
pub const INT_CLICKED_ENABLE: u8 = 1 << 1;

// ---------------------------------------------------------------------------
// Queue status register bits (0x07 pressed, 0x10 clicked)
// ---------------------------------------------------------------------------

/// Queue holds no entries.
pub const QUEUE_IS_EMPTY: u8 = 1 << 0;

/// Queue is at capacity; the device drops further events.
pub const QUEUE_IS_FULL: u8 = 1 << 1;

/// Writing this bit back asks the device to discard the front entry.
pub const QUEUE_POP_REQUEST: u8 = 1 << 2;

/// Access direction of a register, from the host's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Access {
    /// Host reads only.
    Read,
    /// Host writes only.
    Write,
    /// Host reads and writes (queue status registers, for the pop protocol).
    ReadWrite,
}

/// Register addresses of the Qwiic Button.
///
/// Each variant is the address of the first byte of its field;
/// [`Register::width`] gives the field size in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Register {
    /// Device identity, must read [`DEVICE_ID`].
    Id = 0x00,
    /// Firmware minor version.
    FirmwareMinor = 0x01,
    /// Firmware major version.
    FirmwareMajor = 0x02,
    /// Live button status bits.
    ButtonStatus = 0x03,
    /// Interrupt pin configuration.
    InterruptConfig = 0x04,
    /// Debounce time in milliseconds, u16 LE.
    DebounceTime = 0x05,
    /// Pressed-event queue status bits.
    PressedQueueStatus = 0x07,
    /// Front entry of the pressed-event queue, u32 LE.
    PressedQueueFront = 0x08,
    /// Clicked-event queue status bits.
    ClickedQueueStatus = 0x10,
    /// Front entry of the clicked-event queue, u32 LE.
    ClickedQueueFront = 0x11,
    /// LED brightness, 0-255.
    LedBrightness = 0x19,
    /// LED pulse granularity.
    LedPulseGranularity = 0x1A,
    /// LED pulse cycle time in milliseconds, u16 LE.
    LedPulseCycleTime = 0x1B,
    /// LED pulse off time in milliseconds, u16 LE.
    LedPulseOffTime = 0x1D,
    /// I2C address reassignment. Mapped for completeness; this driver
    /// never writes it.
    I2cAddress = 0x1F,
}

impl Register {
    /// Every register, in address order.
    pub const ALL: [Register; 15] = [
        Register::Id,
        Register::FirmwareMinor,
        Register::FirmwareMajor,
        Register::ButtonStatus,
        Register::InterruptConfig,
        Register::DebounceTime,
        Register::PressedQueueStatus,
        Register::PressedQueueFront,
        Register::ClickedQueueStatus,
        Register::ClickedQueueFront,
        Register::LedBrightness,
        Register::LedPulseGranularity,
        Register::LedPulseCycleTime,
        Register::LedPulseOffTime,
        Register::I2cAddress,
    ];

    /// Address of the field's first byte.
    pub const fn addr(self) -> u8 {
        self as u8
    }

    /// Field width in bytes.
    pub const fn width(self) -> u8 {
        match self {
            Register::DebounceTime
            | Register::LedPulseCycleTime
            | Register::LedPulseOffTime => 2,
            Register::PressedQueueFront | Register::ClickedQueueFront => 4,
            _ => 1,
        }
    }

    /// Access direction.
    pub const fn access(self) -> Access {
        match self {
            Register::Id
            | Register::FirmwareMinor
            | Register::FirmwareMajor
            | Register::ButtonStatus
            | Register::PressedQueueFront
            | Register::ClickedQueueFront => Access::Read,
            Register::PressedQueueStatus | Register::ClickedQueueStatus => Access::ReadWrite,
            Register::InterruptConfig
            | Register::DebounceTime
            | Register::LedBrightness
            | Register::LedPulseGranularity
            | Register::LedPulseCycleTime
            | Register::LedPulseOffTime
            | Register::I2cAddress => Access::Write,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn addresses_are_strictly_ascending() {
        for pair in Register::ALL.windows(2) {
            assert!(
                pair[0].addr() < pair[1].addr(),
                "{:?} and {:?} out of order",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn multi_byte_fields_do_not_overlap_neighbours() {
        for pair in Register::ALL.windows(2) {
            let end = pair[0].addr() + pair[0].width();
            assert!(
                end <= pair[1].addr(),
                "{:?} ({} bytes) overlaps {:?}",
                pair[0],
                pair[0].width(),
                pair[1]
            );
        }
    }

    #[test]
    fn map_matches_datasheet() {
        assert_eq!(Register::Id.addr(), 0x00);
        assert_eq!(Register::DebounceTime.addr(), 0x05);
        assert_eq!(Register::DebounceTime.width(), 2);
        assert_eq!(Register::PressedQueueFront.width(), 4);
        assert_eq!(Register::ClickedQueueStatus.addr(), 0x10);
        assert_eq!(Register::ClickedQueueStatus.access(), Access::ReadWrite);
        assert_eq!(Register::LedPulseOffTime.addr(), 0x1D);
        assert_eq!(Register::I2cAddress.access(), Access::Write);
    }

    #[test]
    fn status_bits_are_distinct() {
        assert_eq!(STATUS_IS_PRESSED & STATUS_HAS_BEEN_CLICKED, 0);
        assert_eq!(STATUS_HAS_BEEN_CLICKED & STATUS_EVENT_AVAILABLE, 0);
        assert_eq!(QUEUE_IS_EMPTY & QUEUE_IS_FULL, 0);
        assert_eq!(QUEUE_IS_FULL & QUEUE_POP_REQUEST, 0);
    }
}
