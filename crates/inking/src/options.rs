//! Stroke options handed to the outline generator.
//!
//! Callers build a full record with struct-update syntax
//! (`StrokeOptions { size: 20.0, ..Default::default() }`), so any field
//! left unset keeps its documented default. `simulate_pressure` is the
//! exception: it is derived from pressure confidence when a gesture is
//! emitted and overwrites whatever the caller set.

use serde::{Deserialize, Serialize};

/// Easing curve for taper profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Easing {
    /// Identity.
    #[default]
    Linear,
    /// `sin(t * pi / 2)` - decelerates toward the tip.
    SineOut,
}

impl Easing {
    pub fn apply(self, t: f32) -> f32 {
        match self {
            Easing::Linear => t,
            Easing::SineOut => (t * std::f32::consts::FRAC_PI_2).sin(),
        }
    }
}

/// Cap and taper configuration for one stroke end.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TaperOptions {
    /// Taper length in pixels (0 = no taper).
    pub taper: f32,
    pub easing: Easing,
    /// Round cap at this end.
    pub cap: bool,
}

/// Configuration record for outline generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrokeOptions {
    /// Base thickness in pixels.
    pub size: f32,
    /// How strongly pressure thins the stroke.
    pub thinning: f32,
    pub smoothing: f32,
    /// Input streamlining; kept low so pressure variation stays visible.
    pub streamline: f32,
    /// Derived at emit time from pressure confidence, not user-set.
    pub simulate_pressure: bool,
    pub easing: Easing,
    pub start: TaperOptions,
    pub end: TaperOptions,
}

impl Default for StrokeOptions {
    fn default() -> Self {
        Self {
            size: 12.0,
            thinning: 0.8,
            smoothing: 0.5,
            streamline: 0.3,
            simulate_pressure: false,
            easing: Easing::Linear,
            start: TaperOptions {
                taper: 0.0,
                easing: Easing::Linear,
                cap: true,
            },
            end: TaperOptions {
                // Long sine-eased taper keeps lift-off from ending sharp.
                taper: 25.0,
                easing: Easing::SineOut,
                cap: true,
            },
        }
    }
}
