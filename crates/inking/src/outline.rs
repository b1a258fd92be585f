//! Outline and dot emission.
//!
//! The outline polygon itself comes from an external geometry collaborator
//! behind [`OutlineGenerator`]; this module owns the dot fallback for taps
//! and degenerate geometry, plus the polygon-to-path conversion used by
//! rendering collaborators.

use glam::Vec2;
use thiserror::Error;

use crate::constants::DOT_SEGMENTS;
use crate::options::StrokeOptions;
use crate::types::Sample;

/// Error surfaced by an outline generator implementation.
#[derive(Debug, Error)]
pub enum OutlineError {
    #[error("outline generator failed: {0}")]
    Generator(String),
    #[error("generator returned a degenerate outline ({0} points)")]
    Degenerate(usize),
}

/// External outline algorithm consumed by the pipeline.
///
/// Implementations are treated as synchronous, potentially-failing pure
/// functions; failures never propagate past the gesture boundary.
pub trait OutlineGenerator {
    fn compute_outline(
        &self,
        samples: &[Sample],
        options: &StrokeOptions,
    ) -> Result<Vec<Vec2>, OutlineError>;
}

/// Build the dot polygon for a tap or degenerate gesture.
///
/// A regular [`DOT_SEGMENTS`]-gon centered on the sample centroid, with a
/// radius scaled by mean pressure. Stable under all-identical-point input;
/// empty input yields an empty polygon.
pub fn dot_polygon(samples: &[Sample], options: &StrokeOptions) -> Vec<Vec2> {
    if samples.is_empty() {
        return Vec::new();
    }

    let count = samples.len() as f32;
    let centroid = samples.iter().map(Sample::pos).sum::<Vec2>() / count;
    let mean_pressure = samples.iter().map(|s| s.pressure).sum::<f32>() / count;

    let base_radius = options.size * 0.6;
    let radius = base_radius * (0.4 + mean_pressure * 0.8);

    (0..DOT_SEGMENTS)
        .map(|i| {
            let angle = (i as f32 * 2.0 * std::f32::consts::PI) / DOT_SEGMENTS as f32;
            centroid + Vec2::new(angle.cos(), angle.sin()) * radius
        })
        .collect()
}

/// Convert a polygon to an SVG-style path description.
///
/// The first point becomes a move, the rest line segments, and the path is
/// explicitly closed. Fewer than two points yields an empty path, never an
/// error.
pub fn polygon_to_path(points: &[Vec2]) -> String {
    if points.len() < 2 {
        return String::new();
    }

    let mut path = String::new();
    for (i, point) in points.iter().enumerate() {
        if i == 0 {
            path.push_str(&format!("M{},{}", point.x, point.y));
        } else {
            path.push_str(&format!("L{},{}", point.x, point.y));
        }
    }
    path.push('Z');
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dot_polygon_empty_input() {
        assert!(dot_polygon(&[], &StrokeOptions::default()).is_empty());
    }

    #[test]
    fn test_dot_polygon_single_sample() {
        let samples = [Sample::new(0.0, 0.0, 0.5)];
        let polygon = dot_polygon(&samples, &StrokeOptions::default());
        assert_eq!(polygon.len(), DOT_SEGMENTS);

        // radius = 12 * 0.6 * (0.4 + 0.5 * 0.8) = 5.76, centered at origin.
        for point in &polygon {
            assert!((point.length() - 5.76).abs() < 0.001);
        }
        // First vertex sits on the positive x axis.
        assert!((polygon[0].x - 5.76).abs() < 0.001);
        assert!(polygon[0].y.abs() < 0.001);
    }

    #[test]
    fn test_dot_radius_increases_with_pressure() {
        let options = StrokeOptions::default();
        let mut last_radius = 0.0;
        for pressure in [0.0, 0.25, 0.5, 0.75, 1.0] {
            let polygon = dot_polygon(&[Sample::new(0.0, 0.0, pressure)], &options);
            let radius = polygon[0].length();
            assert!(radius > last_radius);
            last_radius = radius;
        }
    }

    #[test]
    fn test_dot_polygon_centroid() {
        let samples = [
            Sample::new(0.0, 0.0, 0.5),
            Sample::new(4.0, 0.0, 0.5),
            Sample::new(2.0, 6.0, 0.5),
        ];
        let polygon = dot_polygon(&samples, &StrokeOptions::default());
        let centroid = polygon.iter().sum::<Vec2>() / polygon.len() as f32;
        assert!((centroid.x - 2.0).abs() < 0.001);
        assert!((centroid.y - 2.0).abs() < 0.001);
    }

    #[test]
    fn test_dot_polygon_identical_points() {
        let samples = [Sample::new(3.0, 3.0, 0.7); 5];
        let polygon = dot_polygon(&samples, &StrokeOptions::default());
        assert_eq!(polygon.len(), DOT_SEGMENTS);
        let radius = (polygon[0] - Vec2::new(3.0, 3.0)).length();
        assert!(radius > 0.0);
    }

    #[test]
    fn test_polygon_to_path() {
        let points = [Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0), Vec2::new(5.0, 6.0)];
        assert_eq!(polygon_to_path(&points), "M1,2L3,4L5,6Z");
    }

    #[test]
    fn test_polygon_to_path_degenerate() {
        assert_eq!(polygon_to_path(&[]), "");
        assert_eq!(polygon_to_path(&[Vec2::new(1.0, 1.0)]), "");
    }
}
