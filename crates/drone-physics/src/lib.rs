//! # Drone Physics
//!
//! Composable aerodynamic/energy model and operating-envelope safety
//! assessment for drone platforms.
//!
//! ## Features
//!
//! - Barometric air density and quadratic drag
//! - Power draw and remaining-endurance estimation
//! - Wind-adjusted ground speed
//! - Per-evaluation safety verdicts (wind, weather, battery)

#![forbid(unsafe_code)]
#![warn(clippy::all)]

pub mod aero;
pub mod platform;
pub mod safety;

pub use aero::{air_density, drag_force, ground_speed, power_consumption, remaining_flight_time_s};
pub use platform::{DroneSpec, PhysicsError};
pub use safety::{SafetyAssessment, assess_safety};
