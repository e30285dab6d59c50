//! Shared test infrastructure for qwiic-button integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::cell::{Cell, RefCell};
use qwiic_button::{StateSink, TimeDuration, TimeInstant, TimeSource};

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    fn as_millis(&self) -> u64 {
        self.0
    }
}

/// Mock instant type for testing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0 - earlier.0)
    }
}

// ============================================================================
// Mock Clock
// ============================================================================

/// Mock time source with controllable time advancement
pub struct MockClock {
    current_time: Cell<TestInstant>,
}

impl MockClock {
    pub fn new() -> Self {
        Self {
            current_time: Cell::new(TestInstant(0)),
        }
    }

    /// Advance time by the given number of milliseconds
    pub fn advance(&self, millis: u64) {
        let current = self.current_time.get();
        self.current_time.set(TestInstant(current.0 + millis));
    }

    pub fn set_time(&self, time: TestInstant) {
        self.current_time.set(time);
    }
}

impl TimeSource<TestInstant> for MockClock {
    fn now(&self) -> TestInstant {
        self.current_time.get()
    }
}

// ============================================================================
// Recording Sink
// ============================================================================

/// Sink that records every published state for testing.
///
/// Implements `StateSink` for `&RecordingSink` so the monitor can hold
/// a shared reference while the test keeps inspecting the history.
pub struct RecordingSink {
    states: RefCell<Vec<bool>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self {
            states: RefCell::new(Vec::new()),
        }
    }

    /// All published states, oldest first
    pub fn states(&self) -> Vec<bool> {
        self.states.borrow().clone()
    }

    /// The most recently published state, if any
    pub fn last(&self) -> Option<bool> {
        self.states.borrow().last().copied()
    }

    /// Number of publishes so far
    pub fn publish_count(&self) -> usize {
        self.states.borrow().len()
    }

    /// Number of `true` publishes so far
    pub fn true_count(&self) -> usize {
        self.states.borrow().iter().filter(|&&s| s).count()
    }
}

impl StateSink for &RecordingSink {
    fn publish(&mut self, state: bool) {
        self.states.borrow_mut().push(state);
    }
}
