//! Gesture lifecycle transitions for the stroke pipeline.

use tracing::{debug, warn};

use crate::constants::{
    DOT_EXTENT_THRESHOLD, DOT_MAX_SAMPLES, MOVE_THRESHOLD, NEUTRAL_PRESSURE, PREVIEW_MIN_SAMPLES,
};
use crate::outline::dot_polygon;
use crate::pressure::estimate_from_speed;
use crate::types::{Bounds, GestureState, Sample, StrokeShape};

use super::StrokePipeline;

/// Error type for gesture protocol violations.
///
/// These report caller bugs, as opposed to data-quality issues which are
/// always handled silently.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum GestureError {
    #[error("gesture already in progress - finish() or cancel() it first")]
    AlreadyActive,
    #[error("no active gesture - call start_gesture() first")]
    NotActive,
}

impl StrokePipeline {
    /// Begin a gesture with a provisional first sample.
    ///
    /// The gesture stays in `PendingStart` until enough movement confirms
    /// a drag; until then it is still a candidate tap.
    pub fn start_gesture(&mut self, x: f32, y: f32, pressure: f32) -> Result<(), GestureError> {
        if self.is_active() {
            return Err(GestureError::AlreadyActive);
        }

        let sample = Sample::new(x, y, pressure);
        self.samples.clear();
        self.samples.push(sample);
        self.last_sample = Some(sample);
        self.state = GestureState::PendingStart;
        debug!(x, y, pressure = sample.pressure, "gesture started");
        Ok(())
    }

    /// Feed one classified sample into the live gesture.
    ///
    /// While pending, samples within [`MOVE_THRESHOLD`] of the start point
    /// merge into the provisional first sample (keeping the running max
    /// pressure); the first sample beyond the threshold confirms a drag.
    /// Neutral-pressure samples are replaced by a speed estimate once the
    /// session has lost confidence in the pressure channel.
    pub fn add_sample(&mut self, x: f32, y: f32, pressure: f32) -> Result<(), GestureError> {
        match self.state {
            GestureState::Idle | GestureState::Finished => return Err(GestureError::NotActive),
            GestureState::PendingStart | GestureState::Accumulating => {}
        }
        let mut pressure = pressure.clamp(0.0, 1.0);

        if self.state == GestureState::PendingStart {
            let start = self.samples[0];
            if start.distance_to(x, y) < MOVE_THRESHOLD {
                self.samples[0] =
                    Sample::new(start.x, start.y, start.pressure.max(pressure));
                self.last_sample = Some(Sample::new(x, y, pressure));
                return Ok(());
            }
            self.state = GestureState::Accumulating;
            debug!(x, y, "drag confirmed");
        }

        if pressure == NEUTRAL_PRESSURE && self.confidence.should_estimate() {
            if let Some(last) = self.last_sample {
                pressure = estimate_from_speed(&last, x, y);
            }
        }

        let sample = Sample::new(x, y, pressure);
        self.samples.push(sample);
        self.last_sample = Some(sample);
        Ok(())
    }

    /// Finish the live gesture and emit its renderable shape.
    ///
    /// Taps and degenerate geometry come back as a dot polygon; confirmed
    /// drags are pressure-smoothed and handed to the outline generator.
    /// A generator failure is swallowed (`None`), the gesture still
    /// transitions to `Finished` and the buffer is cleared. Finishing with
    /// no active gesture is a no-op.
    pub fn finish(&mut self) -> Option<StrokeShape> {
        match self.state {
            GestureState::Idle | GestureState::Finished => {
                debug!("finish with no active gesture, ignoring");
                None
            }
            GestureState::PendingStart => {
                // Never left the tap window: the merged provisional sample
                // becomes a dot.
                let polygon = dot_polygon(&self.samples, &self.options);
                debug!(points = polygon.len(), "tap emitted as dot");
                self.conclude();
                Some(StrokeShape::Dot(polygon))
            }
            GestureState::Accumulating => {
                let samples = std::mem::take(&mut self.samples);
                let mut options = self.options.clone();
                options.simulate_pressure = self.confidence.should_estimate();

                let smoothed = crate::smoothing::smooth_pressure(&samples);
                let extent = Bounds::of(&smoothed)
                    .map(|b| b.max_extent())
                    .unwrap_or(0.0);

                let shape = if smoothed.len() <= DOT_MAX_SAMPLES
                    || extent < DOT_EXTENT_THRESHOLD
                {
                    debug!(
                        samples = smoothed.len(),
                        extent, "near-stationary gesture emitted as dot"
                    );
                    // Dot geometry always derives from the raw sample set.
                    Some(StrokeShape::Dot(dot_polygon(&samples, &options)))
                } else {
                    match self.generator.compute_outline(&smoothed, &options) {
                        Ok(points) if points.len() >= 2 => {
                            debug!(points = points.len(), "stroke outline emitted");
                            Some(StrokeShape::Outline(points))
                        }
                        Ok(points) => {
                            warn!(
                                points = points.len(),
                                "outline generator returned a degenerate polygon, skipping"
                            );
                            None
                        }
                        Err(err) => {
                            warn!(error = %err, "outline generator failed, skipping gesture");
                            None
                        }
                    }
                };

                self.conclude();
                shape
            }
        }
    }

    /// Discard the live gesture without emitting.
    ///
    /// Valid from any state. Confidence counters survive: they are
    /// session-scoped and only reset explicitly.
    pub fn cancel(&mut self) {
        debug!(state = ?self.state, discarded = self.samples.len(), "gesture cancelled");
        self.samples.clear();
        self.last_sample = None;
        self.state = GestureState::Idle;
    }

    /// Best-effort outline of the in-progress buffer for live preview.
    ///
    /// Returns `None` while pending (no drag confirmed yet), when the
    /// buffer is too small to preview, or when the generator fails.
    pub fn preview_outline(&self) -> Option<Vec<glam::Vec2>> {
        if self.state != GestureState::Accumulating || self.samples.len() < PREVIEW_MIN_SAMPLES {
            return None;
        }

        let mut options = self.options.clone();
        options.simulate_pressure = self.confidence.should_estimate();
        let smoothed = crate::smoothing::smooth_pressure(&self.samples);

        match self.generator.compute_outline(&smoothed, &options) {
            Ok(points) if points.len() >= 2 => Some(points),
            _ => None,
        }
    }

    fn conclude(&mut self) {
        self.samples.clear();
        self.state = GestureState::Finished;
    }
}
