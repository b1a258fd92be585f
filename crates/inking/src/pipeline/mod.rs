//! Gesture capture pipeline
//!
//! This module provides the lifecycle state machine that connects:
//! - Pressure classification (raw device events to normalized pressure)
//! - The gesture buffer (tap-vs-drag classification, sample accumulation)
//! - Pressure smoothing (applied when a gesture finishes)
//! - Outline/dot emission (dot fallback or the external outline generator)
//!
//! The pipeline is invoked synchronously from an external input-event
//! dispatch loop and owns exactly one live gesture at a time.

mod gesture;

pub use gesture::GestureError;

use crate::options::StrokeOptions;
use crate::outline::OutlineGenerator;
use crate::pressure::{EventPhase, PointerInput, PressureConfidence};
use crate::types::{GestureState, Sample};

/// Stroke capture pipeline for one input surface.
///
/// Workflow:
/// 1. The dispatcher classifies raw events via `classify_pressure`
/// 2. Samples arrive through `start_gesture` / `add_sample`
/// 3. `finish` smooths the buffer and emits an outline or dot
/// 4. `cancel` discards the live gesture at any point
pub struct StrokePipeline {
    /// Buffered samples of the live gesture (append-only until finish).
    pub(crate) samples: Vec<Sample>,
    /// Lifecycle state of the live gesture.
    pub(crate) state: GestureState,
    /// Last raw sample seen, for speed estimation and lift-off taper.
    pub(crate) last_sample: Option<Sample>,
    /// Session-scoped pressure trust state.
    pub(crate) confidence: PressureConfidence,
    /// Options handed to the outline generator on emit.
    pub(crate) options: StrokeOptions,
    /// External outline geometry collaborator.
    pub(crate) generator: Box<dyn OutlineGenerator>,
}

impl StrokePipeline {
    /// Create a pipeline with default stroke options.
    pub fn new(generator: Box<dyn OutlineGenerator>) -> Self {
        Self::with_options(generator, StrokeOptions::default())
    }

    /// Create a pipeline with caller-supplied stroke options.
    pub fn with_options(generator: Box<dyn OutlineGenerator>, options: StrokeOptions) -> Self {
        Self {
            samples: Vec::new(),
            state: GestureState::Idle,
            last_sample: None,
            confidence: PressureConfidence::default(),
            options,
            generator,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> GestureState {
        self.state
    }

    /// Whether a gesture is currently in progress.
    pub fn is_active(&self) -> bool {
        matches!(
            self.state,
            GestureState::PendingStart | GestureState::Accumulating
        )
    }

    /// Read-only snapshot of the in-progress sample buffer.
    pub fn buffered_samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Current pressure confidence state.
    pub fn confidence(&self) -> &PressureConfidence {
        &self.confidence
    }

    /// Explicitly reset pressure confidence, e.g. when the drawing
    /// context switches to a new target glyph. Never called implicitly.
    pub fn reset_pressure_confidence(&mut self) {
        self.confidence.reset();
    }

    /// Classify one raw event into a pressure value, updating confidence
    /// state as a side effect.
    pub fn classify_pressure(&mut self, input: PointerInput, phase: EventPhase) -> f32 {
        let last = self.last_sample.map(|s| s.pressure);
        self.confidence.classify(input, phase, last)
    }

    /// Stroke options used when a gesture is emitted.
    pub fn options(&self) -> &StrokeOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: StrokeOptions) {
        self.options = options;
    }
}
