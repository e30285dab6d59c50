//! Configuration types and typed views over raw register bytes.

use crate::registers::{
    INT_CLICKED_ENABLE, INT_PRESSED_ENABLE, QUEUE_IS_EMPTY, QUEUE_IS_FULL, STATUS_EVENT_AVAILABLE,
    STATUS_HAS_BEEN_CLICKED, STATUS_IS_PRESSED,
};

/// Configuration written to the device during initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonConfig {
    /// Hardware debounce time in milliseconds. Zero leaves the device default.
    pub debounce_ms: u16,

    /// Assert the interrupt pin on press events.
    pub pressed_interrupt: bool,

    /// Assert the interrupt pin on click events.
    pub clicked_interrupt: bool,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 10,
            pressed_interrupt: false,
            clicked_interrupt: false,
        }
    }
}

impl ButtonConfig {
    /// Computes the interrupt-config register byte from the two enable flags.
    pub fn interrupt_mask(&self) -> u8 {
        let mut mask = 0;
        if self.pressed_interrupt {
            mask |= INT_PRESSED_ENABLE;
        }
        if self.clicked_interrupt {
            mask |= INT_CLICKED_ENABLE;
        }
        mask
    }
}

/// Firmware version read from the device at initialization.
///
/// Stays at 0.0 if the version registers could not be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FirmwareVersion {
    pub major: u8,
    pub minor: u8,
}

impl core::fmt::Display for FirmwareVersion {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// View over the button status register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonStatus(u8);

impl ButtonStatus {
    /// Wraps a raw status byte.
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    /// Raw status byte.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Button is currently held down.
    pub const fn is_pressed(self) -> bool {
        self.0 & STATUS_IS_PRESSED != 0
    }

    /// A click completed since the flag was last cleared.
    pub const fn has_been_clicked(self) -> bool {
        self.0 & STATUS_HAS_BEEN_CLICKED != 0
    }

    /// At least one unread entry sits in an event queue.
    pub const fn is_event_available(self) -> bool {
        self.0 & STATUS_EVENT_AVAILABLE != 0
    }
}

/// View over a pressed/clicked queue status register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct QueueStatus(u8);

impl QueueStatus {
    /// Wraps a raw queue status byte.
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    /// Raw queue status byte.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Queue holds no entries.
    pub const fn is_empty(self) -> bool {
        self.0 & QUEUE_IS_EMPTY != 0
    }

    /// Queue is at capacity.
    pub const fn is_full(self) -> bool {
        self.0 & QUEUE_IS_FULL != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::string::ToString;

    #[test]
    fn config_defaults() {
        let config = ButtonConfig::default();
        assert_eq!(config.debounce_ms, 10);
        assert!(!config.pressed_interrupt);
        assert!(!config.clicked_interrupt);
        assert_eq!(config.interrupt_mask(), 0);
    }

    #[test]
    fn interrupt_mask_combines_flags() {
        let config = ButtonConfig {
            pressed_interrupt: true,
            ..Default::default()
        };
        assert_eq!(config.interrupt_mask(), 0x01);

        let config = ButtonConfig {
            clicked_interrupt: true,
            ..Default::default()
        };
        assert_eq!(config.interrupt_mask(), 0x02);

        let config = ButtonConfig {
            pressed_interrupt: true,
            clicked_interrupt: true,
            ..Default::default()
        };
        assert_eq!(config.interrupt_mask(), 0x03);
    }

    #[test]
    fn firmware_version_displays_dotted() {
        let version = FirmwareVersion { major: 1, minor: 2 };
        assert_eq!(version.to_string(), "1.2");
    }

    #[test]
    fn button_status_bits() {
        let status = ButtonStatus::from_bits(0b101);
        assert!(status.is_pressed());
        assert!(!status.has_been_clicked());
        assert!(status.is_event_available());
    }

    #[test]
    fn queue_status_bits() {
        let status = QueueStatus::from_bits(0b01);
        assert!(status.is_empty());
        assert!(!status.is_full());

        let status = QueueStatus::from_bits(0b10);
        assert!(!status.is_empty());
        assert!(status.is_full());
    }
}
