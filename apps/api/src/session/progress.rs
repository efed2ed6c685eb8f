//! Perceived-progress simulation for the `parsing` phase.
//!
//! Purely cosmetic: a cycling message and an asymptotic percentage give the
//! user feedback during the one slow, opaque operation in the system. Both
//! are derived from the elapsed time since parsing began, so they reset
//! deterministically whenever the phase is left — there is no free-running
//! background timer to tear down.

use std::time::Duration;

use serde::Serialize;

pub const LOADING_MESSAGES: [&str; 5] = [
    "Deep analyzing structure...",
    "Scanning publications...",
    "Mapping milestones...",
    "Synthesizing About...",
    "Finalizing sections...",
];

/// Message cycle period.
const MESSAGE_INTERVAL_MS: u128 = 2500;
/// Percentage tick period.
const PROGRESS_INTERVAL_MS: u128 = 700;
/// The displayed percentage approaches this ceiling and never reaches it.
const PROGRESS_CEILING: f64 = 95.0;
/// Fraction of the remaining distance to the ceiling added per tick.
const PROGRESS_DECAY: f64 = 0.05;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressSnapshot {
    pub percent: f64,
    pub message: &'static str,
}

/// Snapshot after `elapsed` time in the parsing phase.
///
/// Each 700 ms tick applies `p += (95 − p) · 0.05`. The increments shrink
/// toward zero, so the percentage approaches the ceiling without reaching
/// it; the loop stops once an increment no longer moves the value.
pub fn progress_at(elapsed: Duration) -> ProgressSnapshot {
    let ticks = elapsed.as_millis() / PROGRESS_INTERVAL_MS;
    let mut percent = 0.0_f64;
    for _ in 0..ticks {
        let next = percent + (PROGRESS_CEILING - percent) * PROGRESS_DECAY;
        if next == percent {
            break;
        }
        percent = next;
    }
    let message_idx = (elapsed.as_millis() / MESSAGE_INTERVAL_MS) as usize % LOADING_MESSAGES.len();
    ProgressSnapshot {
        percent,
        message: LOADING_MESSAGES[message_idx],
    }
}

/// Snapshot reported outside the parsing phase: zero progress, first message.
pub fn progress_idle() -> ProgressSnapshot {
    ProgressSnapshot {
        percent: 0.0,
        message: LOADING_MESSAGES[0],
    }
}
