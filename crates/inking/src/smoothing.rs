//! Pressure smoothing for finished sample sequences.
//!
//! Raw pressure traces carry sensor noise plus fade-in/fade-out artifacts
//! where the tip touches down and lifts off. The pipeline trims the
//! unstable boundary regions, smooths what remains with a moving average,
//! and reshapes the profile into a light-heavy-light envelope. Positions
//! are never touched, only pressures.

use crate::constants::{
    SMOOTHING_MIN_SAMPLES, SMOOTHING_WINDOW, STABILITY_SCAN_LIMIT, STABLE_DEVIATION,
};
use crate::types::Sample;

/// Run the full smoothing pipeline.
///
/// Sequences of [`SMOOTHING_MIN_SAMPLES`] or fewer samples pass through
/// unchanged, as does any sequence whose stable region is too small to
/// work with. The result is same-length or shorter, never longer.
pub fn smooth_pressure(samples: &[Sample]) -> Vec<Sample> {
    if samples.len() <= SMOOTHING_MIN_SAMPLES {
        return samples.to_vec();
    }

    let (start, end) = find_stable_range(samples);
    let stable = &samples[start..end];
    if stable.len() < 3 {
        return samples.to_vec();
    }

    reshape_envelope(&moving_average(stable))
}

/// Standard deviation of pressure over the inclusive window `start..=end`.
///
/// Windows that do not fit the sequence report as maximally unstable.
fn pressure_deviation(samples: &[Sample], start: usize, end: usize) -> f32 {
    if end >= samples.len() || end - start < 2 {
        return f32::INFINITY;
    }

    let window = &samples[start..=end];
    let mean = window.iter().map(|s| s.pressure).sum::<f32>() / window.len() as f32;
    let variance = window
        .iter()
        .map(|s| (s.pressure - mean).powi(2))
        .sum::<f32>()
        / window.len() as f32;
    variance.sqrt()
}

/// Locate the stable region of a pressure trace.
///
/// Scans forward from index 2 (and symmetrically backward from the tail)
/// for the first centered window whose deviation falls below
/// [`STABLE_DEVIATION`], probing at most [`STABILITY_SCAN_LIMIT`] indices
/// from either end. If no stable point is found the original boundary is
/// kept.
fn find_stable_range(samples: &[Sample]) -> (usize, usize) {
    let len = samples.len();
    let half = SMOOTHING_WINDOW / 2;

    let mut start = 0;
    for i in 2..(len - 2).min(STABILITY_SCAN_LIMIT) {
        if pressure_deviation(samples, i - half, i + half) < STABLE_DEVIATION {
            start = i;
            break;
        }
    }

    let mut end = len;
    let lower = (start + 2).max(len.saturating_sub(STABILITY_SCAN_LIMIT));
    for i in (lower..=len - 3).rev() {
        if pressure_deviation(samples, i - half, i + half) < STABLE_DEVIATION {
            end = i + 1;
            break;
        }
    }

    (start, end)
}

/// Replace each pressure with the mean over a centered window of
/// [`SMOOTHING_WINDOW`] samples, clamped at the sequence boundaries.
fn moving_average(samples: &[Sample]) -> Vec<Sample> {
    let half = SMOOTHING_WINDOW / 2;
    samples
        .iter()
        .enumerate()
        .map(|(i, sample)| {
            let start = i.saturating_sub(half);
            let end = (i + half).min(samples.len() - 1);
            let window = &samples[start..=end];
            let mean = window.iter().map(|s| s.pressure).sum::<f32>() / window.len() as f32;
            Sample {
                pressure: mean,
                ..*sample
            }
        })
        .collect()
}

/// Force a light-heavy-light pressure profile.
///
/// The first pressure maximum anchors the envelope: samples before it ramp
/// up from 30%, samples after it ramp down to a 20% floor. A peak sitting
/// on the final sample keeps that sample unscaled.
fn reshape_envelope(samples: &[Sample]) -> Vec<Sample> {
    let len = samples.len();
    if len < 3 {
        return samples.to_vec();
    }

    let mut peak = len / 2;
    let mut max_pressure = 0.0;
    for (i, sample) in samples.iter().enumerate() {
        if sample.pressure > max_pressure {
            max_pressure = sample.pressure;
            peak = i;
        }
    }

    samples
        .iter()
        .enumerate()
        .map(|(i, sample)| {
            let factor = if i < peak {
                0.3 + 0.7 * (i as f32 / peak as f32)
            } else {
                let span = (len - 1 - peak) as f32;
                if span <= 0.0 {
                    1.0
                } else {
                    (1.0 - 0.8 * ((i - peak) as f32 / span)).max(0.2)
                }
            };
            Sample::new(sample.x, sample.y, sample.pressure * factor)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(pressures: &[f32]) -> Vec<Sample> {
        pressures
            .iter()
            .enumerate()
            .map(|(i, &p)| Sample::new(i as f32, 0.0, p))
            .collect()
    }

    #[test]
    fn test_short_sequence_passes_through() {
        let samples = line(&[0.1, 0.9, 0.2, 0.8, 0.3]);
        assert_eq!(smooth_pressure(&samples), samples);
    }

    #[test]
    fn test_moving_average_idempotent_on_constant() {
        let samples = line(&[0.4; 12]);
        let once = moving_average(&samples);
        let twice = moving_average(&once);
        assert_eq!(once, twice);
        for sample in &once {
            assert!((sample.pressure - 0.4).abs() < 0.0001);
        }
    }

    #[test]
    fn test_moving_average_smooths_spike() {
        let samples = line(&[0.3, 0.3, 0.3, 1.0, 0.3, 0.3, 0.3]);
        let smoothed = moving_average(&samples);
        assert!(smoothed[3].pressure < 1.0);
        assert!(smoothed[3].pressure > 0.3);
        // Neighbors absorb part of the spike.
        assert!(smoothed[2].pressure > 0.3);
    }

    #[test]
    fn test_stability_trim_drops_noisy_head() {
        // Two wild head samples, then flat. First stable centered window
        // is at index 4.
        let mut pressures = vec![0.0, 1.0];
        pressures.extend(std::iter::repeat(0.5).take(18));
        let samples = line(&pressures);

        let (start, end) = find_stable_range(&samples);
        assert_eq!(start, 4);
        assert_eq!(end, 18);

        let smoothed = smooth_pressure(&samples);
        assert_eq!(smoothed.len(), 14);
        // Positions survive the crop untouched.
        assert_eq!(smoothed[0].x, samples[4].x);
    }

    #[test]
    fn test_no_stable_point_keeps_boundaries() {
        let samples = line(&[0.0, 1.0, 0.0, 1.0, 0.0, 1.0, 0.0, 1.0]);
        let (start, end) = find_stable_range(&samples);
        assert_eq!(start, 0);
        assert_eq!(end, samples.len());
        assert_eq!(smooth_pressure(&samples).len(), samples.len());
    }

    #[test]
    fn test_envelope_spike_scenario() {
        // 20 samples at 0.3 with a spike of 1.0 at index 10.
        let mut pressures = vec![0.3; 20];
        pressures[10] = 1.0;
        let reshaped = reshape_envelope(&line(&pressures));

        let max = reshaped
            .iter()
            .map(|s| s.pressure)
            .fold(f32::MIN, f32::max);
        assert!((reshaped[10].pressure - max).abs() < 0.0001);
        assert!((reshaped[10].pressure - 1.0).abs() < 0.0001);

        // Head ramps from 30%, tail floors at 20%.
        assert!((reshaped[0].pressure - 0.3 * 0.3).abs() < 0.0001);
        assert!((reshaped[19].pressure - 0.3 * 0.2).abs() < 0.0001);
    }

    #[test]
    fn test_envelope_peak_is_post_reshape_maximum() {
        let samples = line(&[0.2, 0.5, 0.9, 0.6, 0.4, 0.3, 0.2, 0.2]);
        let reshaped = reshape_envelope(&samples);
        let peak_pressure = reshaped[2].pressure;
        for sample in &reshaped {
            assert!(sample.pressure <= peak_pressure + 0.0001);
        }
    }

    #[test]
    fn test_envelope_peak_at_last_index() {
        let samples = line(&[0.1, 0.2, 0.3, 0.4, 0.5, 0.9]);
        let reshaped = reshape_envelope(&samples);
        // Ramp-down span is empty; the peak sample keeps its value.
        assert!((reshaped[5].pressure - 0.9).abs() < 0.0001);
        for sample in &reshaped {
            assert!(sample.pressure.is_finite());
        }
    }

    #[test]
    fn test_envelope_peak_at_first_index() {
        let samples = line(&[0.9, 0.5, 0.4, 0.3, 0.2]);
        let reshaped = reshape_envelope(&samples);
        assert!((reshaped[0].pressure - 0.9).abs() < 0.0001);
        // Tail reaches the 20% floor.
        assert!((reshaped[4].pressure - 0.2 * 0.2).abs() < 0.0001);
    }

    #[test]
    fn test_smooth_pressure_leaves_positions_unchanged() {
        let samples: Vec<Sample> = (0..16)
            .map(|i| Sample::new(i as f32 * 2.0, i as f32, 0.5))
            .collect();
        let smoothed = smooth_pressure(&samples);
        for sample in &smoothed {
            let original = samples
                .iter()
                .find(|s| s.x == sample.x && s.y == sample.y);
            assert!(original.is_some());
        }
    }
}
