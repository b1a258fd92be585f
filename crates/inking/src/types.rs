use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A single captured input sample.
///
/// Ordering is temporal and load-bearing: smoothing and gesture
/// classification both depend on sample position within the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub x: f32,
    pub y: f32,
    /// Normalized pressure, clamped to 0..=1 at construction.
    pub pressure: f32,
}

impl Sample {
    /// Create a sample, clamping pressure into the normalized range.
    pub fn new(x: f32, y: f32, pressure: f32) -> Self {
        Self {
            x,
            y,
            pressure: pressure.clamp(0.0, 1.0),
        }
    }

    /// Position as a vector.
    pub fn pos(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Euclidean distance to a point.
    pub fn distance_to(&self, x: f32, y: f32) -> f32 {
        let dx = x - self.x;
        let dy = y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Lifecycle state of the single live gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum GestureState {
    /// No gesture in progress.
    #[default]
    Idle,
    /// A provisional first sample is held, awaiting enough movement to
    /// confirm a drag.
    PendingStart,
    /// Confirmed drag, collecting samples.
    Accumulating,
    /// Terminal: the buffer has been consumed and emitted.
    Finished,
}

/// Axis-aligned bounds of a sample sequence. Derived and ephemeral.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
}

impl Bounds {
    /// Compute bounds over a sample sequence. Empty input has no bounds.
    pub fn of(samples: &[Sample]) -> Option<Self> {
        let first = samples.first()?;
        let mut bounds = Self {
            min_x: first.x,
            max_x: first.x,
            min_y: first.y,
            max_y: first.y,
        };
        for sample in &samples[1..] {
            bounds.min_x = bounds.min_x.min(sample.x);
            bounds.max_x = bounds.max_x.max(sample.x);
            bounds.min_y = bounds.min_y.min(sample.y);
            bounds.max_y = bounds.max_y.max(sample.y);
        }
        Some(bounds)
    }

    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }

    /// Larger of width and height; the dot-vs-outline classifier input.
    pub fn max_extent(&self) -> f32 {
        self.width().max(self.height())
    }
}

/// Renderable geometry emitted for one finished gesture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StrokeShape {
    /// Outline polygon from the external generator (open).
    Outline(Vec<Vec2>),
    /// Dot polygon for taps and degenerate geometry (implicitly closed).
    Dot(Vec<Vec2>),
}

impl StrokeShape {
    /// The polygon points regardless of shape kind.
    pub fn points(&self) -> &[Vec2] {
        match self {
            StrokeShape::Outline(points) | StrokeShape::Dot(points) => points,
        }
    }

    pub fn is_dot(&self) -> bool {
        matches!(self, StrokeShape::Dot(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_clamps_pressure() {
        assert_eq!(Sample::new(0.0, 0.0, 1.5).pressure, 1.0);
        assert_eq!(Sample::new(0.0, 0.0, -0.2).pressure, 0.0);
        assert_eq!(Sample::new(0.0, 0.0, 0.7).pressure, 0.7);
    }

    #[test]
    fn test_sample_distance() {
        let sample = Sample::new(0.0, 0.0, 0.5);
        assert!((sample.distance_to(3.0, 4.0) - 5.0).abs() < 0.001);
    }

    #[test]
    fn test_bounds_of_empty() {
        assert!(Bounds::of(&[]).is_none());
    }

    #[test]
    fn test_bounds_extent() {
        let samples = [
            Sample::new(1.0, 2.0, 0.5),
            Sample::new(4.0, 2.0, 0.5),
            Sample::new(2.0, 7.0, 0.5),
        ];
        let bounds = Bounds::of(&samples).unwrap();
        assert!((bounds.width() - 3.0).abs() < 0.001);
        assert!((bounds.height() - 5.0).abs() < 0.001);
        assert!((bounds.max_extent() - 5.0).abs() < 0.001);
    }

    #[test]
    fn test_bounds_single_sample() {
        let bounds = Bounds::of(&[Sample::new(3.0, 3.0, 0.5)]).unwrap();
        assert_eq!(bounds.max_extent(), 0.0);
    }
}
