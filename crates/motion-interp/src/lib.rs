//! # Motion Interpolation
//!
//! Buffered temporal interpolation producing smooth, frame-rate-independent
//! poses from sparse, irregularly-timed entity-state samples.
//!
//! ## Features
//!
//! - Linear interpolation over scalars and geographic positions
//! - Shortest-arc heading interpolation across the 0/360 boundary
//! - Per-entity keyframe buffers with a fixed render-delay policy

#![forbid(unsafe_code)]
#![warn(clippy::all)]

pub mod buffer;
pub mod interpolate;

pub use buffer::{BufferError, InterpolationBuffer};
pub use interpolate::{interpolate_keyframe, lerp, lerp_position, slerp_heading};
