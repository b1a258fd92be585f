//! Pressure source classification and speed-based estimation.
//!
//! Each raw input event is classified as either carrying genuine device
//! pressure (stylus tip or force-touch sensor) or not. Non-genuine events
//! return the neutral sentinel and feed a session-scoped miss counter;
//! once enough misses accumulate without any genuine reading, the
//! pipeline substitutes a synthetic pressure derived from pointer speed.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::{FALLBACK_PRESSURE, NEUTRAL_PRESSURE, PRESSURE_MISS_THRESHOLD};
use crate::types::Sample;

/// Phase of a raw pointer event within a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventPhase {
    Start,
    Move,
    End,
}

/// Raw input event, tagged by device class.
///
/// `None` readings model events that arrived without the expected field;
/// they degrade to the non-genuine path rather than failing the gesture.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerInput {
    /// Pen-class pointer event.
    Pen { pressure: Option<f32> },
    /// Touch contact reported as a stylus tip.
    TouchStylus { force: Option<f32> },
    /// Finger touch; never carries a usable pressure signal.
    TouchFinger,
    Mouse,
    /// Safari force-touch reading: 1.0 is neutral, pressed reads up to ~3.0.
    ForceTouch { force: f32 },
    /// Unrecognized source.
    Unknown,
}

/// Session-scoped record of how trustworthy the pressure channel is.
///
/// Counters are monotonic within a gesture run and survive across
/// gestures; they are only cleared by [`PressureConfidence::reset`]
/// (e.g. when the drawing context switches to a new target glyph).
#[derive(Debug, Clone, Copy, Default)]
pub struct PressureConfidence {
    genuine_seen: bool,
    miss_count: u32,
}

impl PressureConfidence {
    /// Whether a genuine pressure reading has ever been observed.
    pub fn genuine_seen(&self) -> bool {
        self.genuine_seen
    }

    /// How many readings arrived without genuine pressure.
    pub fn miss_count(&self) -> u32 {
        self.miss_count
    }

    /// Whether neutral readings should be replaced by speed estimation.
    pub fn should_estimate(&self) -> bool {
        !self.genuine_seen && self.miss_count > PRESSURE_MISS_THRESHOLD
    }

    /// Explicit session reset. Never called implicitly.
    pub fn reset(&mut self) {
        debug!("pressure confidence reset");
        self.genuine_seen = false;
        self.miss_count = 0;
    }

    /// Classify one raw event into a pressure value in 0..=1.
    ///
    /// Genuine sources mark `genuine_seen` permanently for this session
    /// and are capped on the end phase (lifted tips read artificially
    /// high). Non-genuine sources bump the miss counter and return the
    /// neutral sentinel, except on the end phase where pressure tapers
    /// off from the last known sample.
    pub fn classify(
        &mut self,
        input: PointerInput,
        phase: EventPhase,
        last_pressure: Option<f32>,
    ) -> f32 {
        match input {
            PointerInput::Pen { pressure: Some(p) } if p > 0.1 => {
                self.genuine_seen = true;
                let p = if phase == EventPhase::End { p.min(0.6) } else { p };
                p.clamp(0.1, 1.0)
            }
            PointerInput::TouchStylus { force: Some(f) } if f > 0.1 => {
                self.genuine_seen = true;
                let f = if phase == EventPhase::End { f.min(0.6) } else { f };
                f.clamp(0.1, 1.0)
            }
            PointerInput::ForceTouch { force } if force > 1.0 => {
                self.genuine_seen = true;
                let force = if phase == EventPhase::End {
                    force.min(2.0)
                } else {
                    force
                };
                // Map the 1.0..3.0 sensor range onto 0.1..1.0.
                ((force - 1.0) / 2.0 + 0.5).clamp(0.1, 1.0)
            }
            _ => {
                if phase == EventPhase::End {
                    // Lift-off: taper sharply from the last known pressure.
                    return match last_pressure {
                        Some(last) => (last * 0.3).max(0.05),
                        None => 0.3,
                    };
                }
                self.miss_count += 1;
                match input {
                    PointerInput::Unknown => FALLBACK_PRESSURE,
                    _ => NEUTRAL_PRESSURE,
                }
            }
        }
    }
}

/// Derive a synthetic pressure from pointer speed.
///
/// Slower motion reads heavier; the result lands in 0.4..0.8 before the
/// contrast boost. Only ever applied to the non-genuine path.
pub fn estimate_from_speed(last: &Sample, x: f32, y: f32) -> f32 {
    let distance = last.distance_to(x, y);
    let speed_factor = (10.0 / distance.max(1.0)).min(1.0);
    boost_contrast(0.4 + speed_factor * 0.4)
}

/// Asymmetric contrast boost widening the perceptual range of estimated
/// pressures: light readings get lighter, heavy readings heavier.
fn boost_contrast(pressure: f32) -> f32 {
    if pressure < 0.5 {
        pressure * 0.9
    } else {
        0.4 + (pressure - 0.5) * 1.1
    }
}
