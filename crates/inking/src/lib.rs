//! Inking - pressure-aware freehand stroke capture
//!
//! This crate turns raw pointer/stylus events into renderable stroke
//! outlines (or filled dots for taps):
//! - [`pressure`] - pressure source classification and speed estimation
//! - [`pipeline::StrokePipeline`] - the gesture lifecycle state machine
//! - [`smoothing`] - boundary trimming, moving average, envelope reshaping
//! - [`outline`] - dot fallback, path conversion, and the external
//!   outline-generator seam
//! - [`options`] - stroke options handed to the outline generator
//!
//! Rasterization, hit-testing, undo and persistence are deliberately out
//! of scope; the pipeline only transforms an input sample sequence into
//! an output polygon plus the decision of which kind to emit.

pub mod constants;
pub mod options;
pub mod outline;
pub mod pipeline;
pub mod pressure;
pub mod smoothing;
pub mod types;

pub use constants::*;
pub use options::*;
pub use outline::*;
pub use pipeline::*;
pub use pressure::*;
pub use smoothing::*;
pub use types::*;
