//! Polling event monitor with edge detection and click pulses.
//!
//! Provides [`ButtonMonitor`] which owns a [`QwiicButton`] and, driven by
//! a host scheduler tick, turns raw register state into boolean state
//! publishes: the pressed level is edge-detected, and every hardware
//! click event becomes a momentary `true` pulse that resets to `false`
//! after [`CLICK_PULSE_MS`]. Also defines the [`StateSink`] trait for the
//! publish targets.

use embedded_hal::i2c::I2c;
use heapless::Deque;

use crate::device::{Error, QwiicButton};
use crate::time::{TimeDuration, TimeInstant, TimeSource};
use crate::types::{ButtonConfig, FirmwareVersion};

/// Width of the momentary `true` pulse published for each click, in
/// milliseconds.
pub const CLICK_PULSE_MS: u64 = 50;

/// Upper bound on click pulses awaiting their `false` reset. More
/// clicks than this inside one pulse window coalesce into the resets
/// already pending.
const MAX_PENDING_PULSES: usize = 4;

/// Trait for boolean state consumers.
///
/// Implement this for whatever receives the pressed/clicked states
/// (a framework binary sensor, a channel, a GPIO mirror). Publishing
/// cannot fail — implementations handle their own errors internally.
pub trait StateSink {
    /// Delivers a new boolean state.
    fn publish(&mut self, state: bool);
}

/// Placeholder for an absent sink; never receives a publish because the
/// monitor skips the corresponding work entirely.
impl StateSink for () {
    fn publish(&mut self, _state: bool) {}
}

impl<S: StateSink + ?Sized> StateSink for &mut S {
    fn publish(&mut self, state: bool) {
        (**self).publish(state);
    }
}

/// The current state of a button monitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MonitorState {
    /// Created but not yet initialized. Polling is a no-op.
    Idle,
    /// Device verified and configured; polling is live.
    Running,
    /// Identity check failed. Permanent — polling stays suppressed.
    Failed,
}

/// Errors that can occur during monitor operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MonitorError<E> {
    /// Operation called from an invalid state.
    InvalidState {
        /// Human-readable description of the expected state.
        expected: &'static str,
        /// The actual current state.
        actual: MonitorState,
    },
    /// Device initialization failed.
    Device(Error<E>),
}

impl<E> core::fmt::Display for MonitorError<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MonitorError::InvalidState { expected, actual } => {
                write!(
                    f,
                    "invalid state: expected {}, but monitor is in {:?}",
                    expected, actual
                )
            }
            MonitorError::Device(e) => write!(f, "device initialization failed: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl<E: core::fmt::Debug> std::error::Error for MonitorError<E> {}

/// Polls a Qwiic Button and publishes pressed/clicked states to sinks.
///
/// The host scheduler calls [`ButtonMonitor::init`] once and then
/// [`ButtonMonitor::poll`] on every tick. Each sink is optional; an
/// unattached sink disables that pipeline, including its register
/// traffic.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I2C` - Bus implementation type
/// * `I` - Time instant type
/// * `T` - Time source implementation type
/// * `P` - Pressed sink type
/// * `C` - Clicked sink type
pub struct ButtonMonitor<'t, I2C, I: TimeInstant, T: TimeSource<I>, P: StateSink = (), C: StateSink = ()>
{
    device: QwiicButton<I2C>,
    clock: &'t T,
    config: ButtonConfig,
    state: MonitorState,
    pressed_sink: Option<P>,
    clicked_sink: Option<C>,
    last_pressed: bool,
    pending_pulses: Deque<I, MAX_PENDING_PULSES>,
}

impl<'t, I2C, I: TimeInstant, T: TimeSource<I>> ButtonMonitor<'t, I2C, I, T> {
    /// Creates an idle monitor with no sinks attached.
    pub fn new(device: QwiicButton<I2C>, clock: &'t T, config: ButtonConfig) -> Self {
        Self {
            device,
            clock,
            config,
            state: MonitorState::Idle,
            pressed_sink: None,
            clicked_sink: None,
            last_pressed: false,
            pending_pulses: Deque::new(),
        }
    }
}

impl<'t, I2C, I: TimeInstant, T: TimeSource<I>, P: StateSink, C: StateSink>
    ButtonMonitor<'t, I2C, I, T, P, C>
{
    /// Attaches the sink that receives the edge-detected pressed level.
    pub fn with_pressed_sink<P2: StateSink>(
        self,
        sink: P2,
    ) -> ButtonMonitor<'t, I2C, I, T, P2, C> {
        ButtonMonitor {
            device: self.device,
            clock: self.clock,
            config: self.config,
            state: self.state,
            pressed_sink: Some(sink),
            clicked_sink: self.clicked_sink,
            last_pressed: self.last_pressed,
            pending_pulses: self.pending_pulses,
        }
    }

    /// Attaches the sink that receives click pulses.
    pub fn with_clicked_sink<C2: StateSink>(
        self,
        sink: C2,
    ) -> ButtonMonitor<'t, I2C, I, T, P, C2> {
        ButtonMonitor {
            device: self.device,
            clock: self.clock,
            config: self.config,
            state: self.state,
            pressed_sink: self.pressed_sink,
            clicked_sink: Some(sink),
            last_pressed: self.last_pressed,
            pending_pulses: self.pending_pulses,
        }
    }

    /// Returns the current state of the monitor.
    pub fn state(&self) -> MonitorState {
        self.state
    }

    /// Returns true once the identity check has failed.
    pub fn is_failed(&self) -> bool {
        self.state == MonitorState::Failed
    }

    /// The configuration this monitor writes at init.
    pub fn config(&self) -> &ButtonConfig {
        &self.config
    }

    /// Firmware version reported by the device, 0.0 before init.
    pub fn firmware_version(&self) -> FirmwareVersion {
        self.device.firmware_version()
    }

    /// Borrows the underlying driver, e.g. for LED control.
    pub fn device_mut(&mut self) -> &mut QwiicButton<I2C> {
        &mut self.device
    }

    /// Consumes the monitor and returns the underlying driver.
    pub fn release(self) -> QwiicButton<I2C> {
        self.device
    }

    /// Publishes the `false` reset for every click pulse whose window
    /// has elapsed, oldest first.
    ///
    /// [`ButtonMonitor::poll`] calls this on every tick; hosts whose
    /// poll period is much longer than [`CLICK_PULSE_MS`] can call it
    /// separately at finer granularity.
    pub fn service(&mut self) {
        let now = self.clock.now();
        while let Some(&scheduled) = self.pending_pulses.front() {
            if now.duration_since(scheduled).as_millis() < CLICK_PULSE_MS {
                break;
            }
            self.pending_pulses.pop_front();
            if let Some(sink) = self.clicked_sink.as_mut() {
                sink.publish(false);
            }
        }
    }

    /// Debug-logs the monitor configuration and device state.
    pub fn log_configuration(&self) {
        let version = self.device.firmware_version();
        debug!("Qwiic Button:");
        debug!("  address: {:#x}", self.device.address());
        debug!("  firmware version: {}.{}", version.major, version.minor);
        debug!("  debounce time: {} ms", self.config.debounce_ms);
        debug!("  pressed interrupt: {}", self.config.pressed_interrupt);
        debug!("  clicked interrupt: {}", self.config.clicked_interrupt);
        debug!("  pressed sink attached: {}", self.pressed_sink.is_some());
        debug!("  clicked sink attached: {}", self.clicked_sink.is_some());
        if self.is_failed() {
            error!("communication with the button failed");
        }
    }
}

impl<'t, I2C: I2c, I: TimeInstant, T: TimeSource<I>, P: StateSink, C: StateSink>
    ButtonMonitor<'t, I2C, I, T, P, C>
{
    /// Initializes the device and performs one immediate poll so the
    /// sinks reflect current hardware state before the first scheduled
    /// tick.
    ///
    /// Must be called from `Idle`. An identity failure transitions to
    /// `Failed` permanently; there is no retry.
    pub fn init(&mut self) -> Result<FirmwareVersion, MonitorError<I2C::Error>> {
        if self.state != MonitorState::Idle {
            return Err(MonitorError::InvalidState {
                expected: "Idle",
                actual: self.state,
            });
        }

        match self.device.init(&self.config) {
            Ok(version) => {
                self.state = MonitorState::Running;
                self.poll();
                Ok(version)
            }
            Err(e) => {
                self.state = MonitorState::Failed;
                Err(MonitorError::Device(e))
            }
        }
    }

    /// One scheduler tick: resets elapsed click pulses, reads the button
    /// status and publishes whatever changed.
    ///
    /// Side-effect only. A no-op unless `Running`. Register read/write
    /// failures are logged and leave all published state untouched —
    /// the next tick simply tries again.
    pub fn poll(&mut self) {
        if self.state != MonitorState::Running {
            return;
        }

        self.service();

        let status = match self.device.read_status() {
            Ok(status) => status,
            Err(_) => {
                warn!("failed to read button status");
                return;
            }
        };

        // Pressed level: strict edge detection, repeat reads never re-publish.
        if let Some(sink) = self.pressed_sink.as_mut() {
            let pressed = status.is_pressed();
            if pressed != self.last_pressed {
                sink.publish(pressed);
                self.last_pressed = pressed;
                if pressed {
                    debug!("button pressed");
                } else {
                    debug!("button released");
                }
            }
        }

        // Clicked queue: at most one pop per tick, regardless of depth.
        if self.clicked_sink.is_some() {
            match self.device.clicked_queue_status() {
                Ok(queue) if !queue.is_empty() => {
                    if self.device.pop_clicked_queue().is_err() {
                        warn!("failed to pop clicked event queue");
                    }
                    if let Some(sink) = self.clicked_sink.as_mut() {
                        sink.publish(true);
                    }
                    debug!("button clicked");
                    // Deque full means enough resets are already pending
                    // to pull the sink back to false; the pulse coalesces.
                    let _ = self.pending_pulses.push_back(self.clock.now());
                }
                Ok(_) => {}
                Err(_) => warn!("failed to read clicked queue status"),
            }
        }
    }
}
