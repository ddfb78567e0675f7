//! Push button input
//!
//! Debounced handling for the three navigation buttons (active low).
//! Each button reduces to one fixed navigation event.

use embassy_rp::gpio::Input;
use embassy_time::{Duration, Timer};

use tiller_core::NavigationEvent;

/// Settle time after a falling edge
const DEBOUNCE_MS: u64 = 20;

/// Lockout after release
const RELEASE_MS: u64 = 50;

/// One debounced push button bound to a navigation event
pub struct Button<'d> {
    input: Input<'d>,
    event: NavigationEvent,
}

impl<'d> Button<'d> {
    pub fn new(input: Input<'d>, event: NavigationEvent) -> Self {
        Self { input, event }
    }

    /// Wait for one debounced press and report its event
    ///
    /// Returns after the press is confirmed; release handling (with its
    /// own lockout) happens before the next call can fire again.
    pub async fn wait_pressed(&mut self) -> NavigationEvent {
        loop {
            self.input.wait_for_falling_edge().await;

            // Debounce
            Timer::after(Duration::from_millis(DEBOUNCE_MS)).await;
            if self.input.is_low() {
                let event = self.event;
                self.input.wait_for_rising_edge().await;
                Timer::after(Duration::from_millis(RELEASE_MS)).await;
                return event;
            }
        }
    }
}
