//! Self-timer countdown.
//!
//! The full number of seconds is shown as soon as the shutter is pressed
//! and drops by one every second. The capture fires when it reaches zero,
//! so a 3 second timer shows 3, 2, 1 and captures at 3 s.

use frameguide_common::clock::TimestampNs;
use frameguide_pose_model::SelfTimer;
use serde::{Deserialize, Serialize};

const SECOND_NS: TimestampNs = 1_000_000_000;

/// One displayed countdown number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountdownTick {
    /// Time since the shutter was pressed.
    pub at_ns: TimestampNs,
    /// Number shown until the next tick.
    pub remaining: u32,
}

/// Countdown schedule for one self-timer capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    seconds: u32,
}

impl Countdown {
    pub fn new(timer: SelfTimer) -> Self {
        Self {
            seconds: timer.seconds(),
        }
    }

    /// Delay between the shutter press and the capture.
    pub fn capture_delay_ns(&self) -> TimestampNs {
        u64::from(self.seconds) * SECOND_NS
    }

    /// Number on screen `elapsed_ns` after the shutter press, or `None`
    /// once the capture is due.
    pub fn remaining_at(&self, elapsed_ns: TimestampNs) -> Option<u32> {
        if elapsed_ns >= self.capture_delay_ns() {
            return None;
        }
        let whole_seconds = (elapsed_ns / SECOND_NS) as u32;
        Some(self.seconds - whole_seconds)
    }

    /// Every number shown, in order. Empty when the timer is off.
    pub fn ticks(&self) -> Vec<CountdownTick> {
        (0..self.seconds)
            .map(|i| CountdownTick {
                at_ns: u64::from(i) * SECOND_NS,
                remaining: self.seconds - i,
            })
            .collect()
    }
}
