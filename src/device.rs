//! Register-level driver for the Qwiic Button.
//!
//! Provides [`QwiicButton`] which owns the bus handle and implements the
//! device's register protocol: identity verification, debounce and
//! interrupt configuration, status queries, event queue access and LED
//! control. Every operation maps to one or a few bus transfers; nothing
//! is cached except the firmware version read at init.

use embedded_hal::i2c::I2c;

use crate::registers::{DEVICE_ID, QUEUE_POP_REQUEST, Register};
use crate::types::{ButtonConfig, ButtonStatus, FirmwareVersion, QueueStatus};

/// Errors that can occur during device operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Bus transfer failed.
    I2c(E),

    /// The identity register returned something other than
    /// [`DEVICE_ID`] — wrong device on the address, or a misbehaving bus.
    WrongDeviceId {
        /// The value the identity register actually returned.
        found: u8,
    },
}

impl<E> core::fmt::Display for Error<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::I2c(_) => write!(f, "bus transfer failed"),
            Error::WrongDeviceId { found } => {
                write!(f, "unexpected device identity: {found:#04x}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl<E: core::fmt::Debug> std::error::Error for Error<E> {}

/// Register-level driver for a single Qwiic Button.
///
/// Generic over any blocking `embedded-hal` I2C implementation. The
/// driver takes ownership of the bus handle; use [`QwiicButton::release`]
/// to get it back.
pub struct QwiicButton<I2C> {
    i2c: I2C,
    address: u8,
    firmware: FirmwareVersion,
}

impl<I2C> QwiicButton<I2C> {
    /// Creates a driver for the device at the given 7-bit address.
    ///
    /// Use [`crate::registers::DEFAULT_ADDRESS`] unless the device has
    /// been reassigned.
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self {
            i2c,
            address,
            firmware: FirmwareVersion::default(),
        }
    }

    /// The 7-bit bus address this driver talks to.
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Firmware version read during [`QwiicButton::init`], 0.0 before
    /// init or if the version registers were unreadable.
    pub fn firmware_version(&self) -> FirmwareVersion {
        self.firmware
    }

    /// Consumes the driver and returns the bus handle.
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C: I2c> QwiicButton<I2C> {
    /// Initializes the device.
    ///
    /// Verifies the identity register, reads the firmware version
    /// (best-effort), writes the debounce time when non-zero and the
    /// interrupt mask when any interrupt is enabled.
    ///
    /// An unreadable identity register or an identity mismatch is fatal
    /// and aborts before any further register traffic. Debounce and
    /// interrupt write failures are logged and swallowed — the device
    /// keeps its defaults and init still succeeds.
    pub fn init(&mut self, config: &ButtonConfig) -> Result<FirmwareVersion, Error<I2C::Error>> {
        let id = match self.read_register(Register::Id) {
            Ok(id) => id,
            Err(e) => {
                error!("failed to read device identity");
                return Err(e);
            }
        };
        if id != DEVICE_ID {
            error!("unexpected device identity: {:#x}", id);
            return Err(Error::WrongDeviceId { found: id });
        }

        let major = self.read_register(Register::FirmwareMajor).unwrap_or_else(|_| {
            warn!("failed to read firmware major version");
            0
        });
        let minor = self.read_register(Register::FirmwareMinor).unwrap_or_else(|_| {
            warn!("failed to read firmware minor version");
            0
        });
        self.firmware = FirmwareVersion { major, minor };
        debug!("firmware version {}.{}", major, minor);

        if config.debounce_ms > 0 {
            match self.write_u16_le(Register::DebounceTime.addr(), config.debounce_ms) {
                Ok(()) => debug!("debounce time set to {} ms", config.debounce_ms),
                Err(_) => warn!("failed to set debounce time"),
            }
        }

        let mask = config.interrupt_mask();
        if mask != 0 {
            match self.write_register(Register::InterruptConfig, mask) {
                Ok(()) => debug!("interrupt config: {:#x}", mask),
                Err(_) => warn!("failed to write interrupt config"),
            }
        }

        Ok(self.firmware)
    }

    // -----------------------------------------------------------------------
    // Status queries — fresh bus read each call, nothing cached
    // -----------------------------------------------------------------------

    /// Reads the button status register.
    pub fn read_status(&mut self) -> Result<ButtonStatus, Error<I2C::Error>> {
        Ok(ButtonStatus::from_bits(
            self.read_register(Register::ButtonStatus)?,
        ))
    }

    /// Returns true while the button is held down.
    pub fn is_pressed(&mut self) -> Result<bool, Error<I2C::Error>> {
        Ok(self.read_status()?.is_pressed())
    }

    /// Returns true if a click completed since the flag was last cleared.
    pub fn has_been_clicked(&mut self) -> Result<bool, Error<I2C::Error>> {
        Ok(self.read_status()?.has_been_clicked())
    }

    /// Returns true if an unread entry sits in an event queue.
    pub fn is_event_available(&mut self) -> Result<bool, Error<I2C::Error>> {
        Ok(self.read_status()?.is_event_available())
    }

    // -----------------------------------------------------------------------
    // Event queues
    // -----------------------------------------------------------------------

    /// Reads the pressed-queue status register.
    pub fn pressed_queue_status(&mut self) -> Result<QueueStatus, Error<I2C::Error>> {
        Ok(QueueStatus::from_bits(
            self.read_register(Register::PressedQueueStatus)?,
        ))
    }

    /// Reads the clicked-queue status register.
    pub fn clicked_queue_status(&mut self) -> Result<QueueStatus, Error<I2C::Error>> {
        Ok(QueueStatus::from_bits(
            self.read_register(Register::ClickedQueueStatus)?,
        ))
    }

    /// Reads the front entry of the pressed-event queue.
    ///
    /// The entry is a device-defined timestamp; this driver treats it as
    /// an opaque little-endian u32.
    pub fn pressed_queue_front(&mut self) -> Result<u32, Error<I2C::Error>> {
        self.read_u32_le(Register::PressedQueueFront)
    }

    /// Reads the front entry of the clicked-event queue.
    pub fn clicked_queue_front(&mut self) -> Result<u32, Error<I2C::Error>> {
        self.read_u32_le(Register::ClickedQueueFront)
    }

    /// Asks the device to discard the front entry of the pressed queue.
    pub fn pop_pressed_queue(&mut self) -> Result<(), Error<I2C::Error>> {
        self.pop_queue(Register::PressedQueueStatus)
    }

    /// Asks the device to discard the front entry of the clicked queue.
    pub fn pop_clicked_queue(&mut self) -> Result<(), Error<I2C::Error>> {
        self.pop_queue(Register::ClickedQueueStatus)
    }

    /// Read-modify-write of the pop-request bit. Not atomic: a
    /// device-side queue mutation between the read and the write is a
    /// protocol hazard the hardware has to tolerate.
    fn pop_queue(&mut self, register: Register) -> Result<(), Error<I2C::Error>> {
        let status = self.read_register(register)?;
        self.write_register(register, status | QUEUE_POP_REQUEST)
    }

    // -----------------------------------------------------------------------
    // LED control
    // -----------------------------------------------------------------------

    /// Sets the LED brightness, 0 (off) to 255 (full).
    pub fn set_led_brightness(&mut self, brightness: u8) -> Result<(), Error<I2C::Error>> {
        self.write_register(Register::LedBrightness, brightness)?;
        debug!("LED brightness set to {}", brightness);
        Ok(())
    }

    /// Turns the LED fully on. Same register traffic as
    /// `set_led_brightness(255)`.
    pub fn set_led_on(&mut self) -> Result<(), Error<I2C::Error>> {
        self.set_led_brightness(255)
    }

    /// Turns the LED off. Same register traffic as
    /// `set_led_brightness(0)`.
    pub fn set_led_off(&mut self) -> Result<(), Error<I2C::Error>> {
        self.set_led_brightness(0)
    }

    /// Configures the LED breathing effect: granularity first, then
    /// cycle and off time as little-endian 16-bit pairs. Five writes,
    /// not atomic — the device may briefly run a torn configuration.
    pub fn set_led_pulse(
        &mut self,
        cycle_ms: u16,
        off_ms: u16,
        granularity: u8,
    ) -> Result<(), Error<I2C::Error>> {
        self.write_register(Register::LedPulseGranularity, granularity)?;
        self.write_u16_le(Register::LedPulseCycleTime.addr(), cycle_ms)?;
        self.write_u16_le(Register::LedPulseOffTime.addr(), off_ms)?;
        debug!(
            "LED pulse set: cycle {} ms, off {} ms, granularity {}",
            cycle_ms, off_ms, granularity
        );
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Bus primitives
    // -----------------------------------------------------------------------

    fn read_register(&mut self, register: Register) -> Result<u8, Error<I2C::Error>> {
        let mut buf = [0u8; 1];
        self.i2c
            .write_read(self.address, &[register.addr()], &mut buf)
            .map_err(Error::I2c)?;
        Ok(buf[0])
    }

    fn read_u32_le(&mut self, register: Register) -> Result<u32, Error<I2C::Error>> {
        let mut buf = [0u8; 4];
        self.i2c
            .write_read(self.address, &[register.addr()], &mut buf)
            .map_err(Error::I2c)?;
        Ok(u32::from_le_bytes(buf))
    }

    fn write_register(&mut self, register: Register, value: u8) -> Result<(), Error<I2C::Error>> {
        self.write_raw(register.addr(), value)
    }

    fn write_raw(&mut self, addr: u8, value: u8) -> Result<(), Error<I2C::Error>> {
        self.i2c.write(self.address, &[addr, value]).map_err(Error::I2c)
    }

    /// Low byte at `base`, high byte at `base + 1`.
    fn write_u16_le(&mut self, base: u8, value: u16) -> Result<(), Error<I2C::Error>> {
        let [lsb, msb] = value.to_le_bytes();
        self.write_raw(base, lsb)?;
        self.write_raw(base + 1, msb)
    }
}
