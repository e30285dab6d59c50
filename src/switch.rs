//! Boolean switch over the button's onboard LED.
//!
//! Provides [`LedSwitch`], a stateless actuator that maps on/off
//! requests to LED brightness writes, and the [`LedControl`] trait it
//! drives.

use embedded_hal::i2c::I2c;

use crate::device::{Error, QwiicButton};

/// Trait for hardware with a brightness-controlled LED.
///
/// The seam between [`LedSwitch`] and the device, so the switch can
/// drive an owned driver, a borrowed one, or a test double.
pub trait LedControl {
    /// Error produced by brightness writes.
    type Error;

    /// Sets the LED brightness, 0 (off) to 255 (full).
    fn set_led_brightness(&mut self, brightness: u8) -> Result<(), Self::Error>;

    /// Turns the LED fully on.
    fn set_led_on(&mut self) -> Result<(), Self::Error> {
        self.set_led_brightness(255)
    }

    /// Turns the LED off.
    fn set_led_off(&mut self) -> Result<(), Self::Error> {
        self.set_led_brightness(0)
    }
}

impl<T: LedControl + ?Sized> LedControl for &mut T {
    type Error = T::Error;

    fn set_led_brightness(&mut self, brightness: u8) -> Result<(), Self::Error> {
        (**self).set_led_brightness(brightness)
    }
}

impl<I2C: I2c> LedControl for QwiicButton<I2C> {
    type Error = Error<I2C::Error>;

    fn set_led_brightness(&mut self, brightness: u8) -> Result<(), Self::Error> {
        QwiicButton::set_led_brightness(self, brightness)
    }
}

/// Boolean actuator over an LED.
///
/// `set_state(true)` drives the configured brightness, `set_state(false)`
/// turns the LED off. The switch holds no state beyond the configured
/// brightness and never reads back from the hardware.
pub struct LedSwitch<D: LedControl> {
    device: Option<D>,
    brightness: u8,
}

impl<D: LedControl> LedSwitch<D> {
    /// Creates an unbound switch. Until a device is bound, state
    /// requests are silent no-ops.
    pub fn new(brightness: u8) -> Self {
        Self {
            device: None,
            brightness,
        }
    }

    /// Creates a switch bound to a device.
    pub fn with_device(device: D, brightness: u8) -> Self {
        Self {
            device: Some(device),
            brightness,
        }
    }

    /// Binds a device, replacing any previous binding.
    pub fn bind(&mut self, device: D) {
        self.device = Some(device);
    }

    /// Removes and returns the bound device.
    pub fn unbind(&mut self) -> Option<D> {
        self.device.take()
    }

    /// True when a device is bound.
    pub fn is_bound(&self) -> bool {
        self.device.is_some()
    }

    /// Brightness driven on `set_state(true)`.
    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Changes the brightness driven on `set_state(true)`. Takes effect
    /// on the next state request.
    pub fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness;
    }

    /// Borrows the bound device.
    pub fn device_mut(&mut self) -> Option<&mut D> {
        self.device.as_mut()
    }

    /// Applies a boolean state to the LED.
    ///
    /// A write failure is logged and swallowed; an unbound switch does
    /// nothing.
    pub fn set_state(&mut self, on: bool) {
        let Some(device) = self.device.as_mut() else {
            return;
        };
        let result = if on {
            device.set_led_brightness(self.brightness)
        } else {
            device.set_led_off()
        };
        if result.is_err() {
            warn!("failed to update button LED");
        }
    }
}
