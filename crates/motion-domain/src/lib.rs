//! # Entity Motion Core - Domain Model
//!
//! Shared value objects, enums, and entity-state types for the real-time
//! entity-motion subsystem. These types are the single source of truth
//! across the interpolation engine and the flight physics model.

#![forbid(unsafe_code)]
#![warn(clippy::all)]

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// =============================================================================
// VALUE OBJECTS
// =============================================================================

/// Geographic position in WGS84 degrees plus altitude in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPosition {
    pub longitude: f64,
    pub latitude: f64,
    pub altitude_m: f64,
}

impl GeoPosition {
    pub fn new(longitude: f64, latitude: f64, altitude_m: f64) -> Self {
        Self {
            longitude,
            latitude,
            altitude_m,
        }
    }

    /// All components are finite numbers. Geographic range is not checked.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.longitude.is_finite() && self.latitude.is_finite() && self.altitude_m.is_finite()
    }
}

/// Timestamped pose sample used as an interpolation anchor.
///
/// Heading is circular (0 and 360 denote the same direction) and is stored
/// normalized into `[0, 360)`. Pitch and roll are plain angles. Timestamps
/// are wall-clock or simulation-clock epoch milliseconds; duplicates are
/// permitted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    pub position: GeoPosition,
    pub heading_deg: f64,
    pub pitch_deg: f64,
    pub roll_deg: f64,
    pub timestamp_ms: i64,
}

impl Keyframe {
    /// Build a keyframe, rejecting non-finite components and normalizing
    /// the heading into `[0, 360)`.
    pub fn new(
        position: GeoPosition,
        heading_deg: f64,
        pitch_deg: f64,
        roll_deg: f64,
        timestamp_ms: i64,
    ) -> Result<Self, DomainError> {
        if !position.is_finite() {
            return Err(DomainError::NonFinite {
                field: "position",
                value: position.longitude,
            });
        }
        for (field, value) in [
            ("heading_deg", heading_deg),
            ("pitch_deg", pitch_deg),
            ("roll_deg", roll_deg),
        ] {
            if !value.is_finite() {
                return Err(DomainError::NonFinite { field, value });
            }
        }

        Ok(Self {
            position,
            heading_deg: heading_deg.rem_euclid(360.0),
            pitch_deg,
            roll_deg,
            timestamp_ms,
        })
    }
}

// =============================================================================
// ENUMS
// =============================================================================

/// Entity classes observed by the motion subsystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityKind {
    Drone,
    Vehicle,
    Vessel,
    Person,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Drone => "DRONE",
            Self::Vehicle => "VEHICLE",
            Self::Vessel => "VESSEL",
            Self::Person => "PERSON",
        }
    }
}

/// Categorical weather condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WeatherCondition {
    Clear,
    Rain,
    Storm,
    Typhoon,
    Snow,
}

// =============================================================================
// ENTITY STATE
// =============================================================================

/// Instantaneous kinematic state of one entity, produced and owned by the
/// external simulation driver. The physics and safety components only read it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KinematicState {
    pub entity_id: Uuid,
    pub kind: EntityKind,
    pub position: GeoPosition,
    pub heading_deg: f64,
    pub pitch_deg: f64,
    pub roll_deg: f64,
    pub speed_mps: f64,

    /// Normalized stored-energy level in `[0, 1]`.
    pub energy_level: f64,

    /// Free-form host metadata, passed through untouched.
    pub metadata: serde_json::Value,

    pub recorded_at: DateTime<Utc>,
}

impl KinematicState {
    /// Check numeric fields for finiteness and the energy level for range.
    pub fn validate(&self) -> Result<(), DomainError> {
        if !self.position.is_finite() {
            return Err(DomainError::NonFinite {
                field: "position",
                value: self.position.longitude,
            });
        }
        for (field, value) in [
            ("heading_deg", self.heading_deg),
            ("pitch_deg", self.pitch_deg),
            ("roll_deg", self.roll_deg),
            ("speed_mps", self.speed_mps),
        ] {
            if !value.is_finite() {
                return Err(DomainError::NonFinite { field, value });
            }
        }
        if !self.energy_level.is_finite() || !(0.0..=1.0).contains(&self.energy_level) {
            return Err(DomainError::EnergyOutOfRange(self.energy_level));
        }
        Ok(())
    }

    /// Recording instant as epoch milliseconds (the playback clock unit).
    #[must_use]
    pub fn recorded_at_ms(&self) -> i64 {
        self.recorded_at.timestamp_millis()
    }

    /// Pose sample for this state, ready to push into an interpolation buffer.
    pub fn keyframe(&self) -> Result<Keyframe, DomainError> {
        Keyframe::new(
            self.position,
            self.heading_deg,
            self.pitch_deg,
            self.roll_deg,
            self.recorded_at_ms(),
        )
    }
}

/// Process-wide environmental parameters, externally owned and read fresh
/// on every safety evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Environment {
    pub wind_speed_mps: f64,

    /// Meteorological convention: the direction the wind blows FROM, degrees.
    pub wind_direction_deg: f64,

    pub weather: WeatherCondition,
    pub temperature_c: f64,

    /// Simulation time-scale multiplier (1.0 = realtime). Consumed by the
    /// host frame driver, not by this library.
    pub time_scale: f64,
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            wind_speed_mps: 0.0,
            wind_direction_deg: 0.0,
            weather: WeatherCondition::Clear,
            temperature_c: 15.0,
            time_scale: 1.0,
        }
    }
}

// =============================================================================
// ERRORS
// =============================================================================

/// Domain-level validation errors.
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("non-finite value for {field}: {value}")]
    NonFinite { field: &'static str, value: f64 },

    #[error("energy level out of range [0, 1]: {0}")]
    EnergyOutOfRange(f64),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nominal_state() -> KinematicState {
        KinematicState {
            entity_id: Uuid::new_v4(),
            kind: EntityKind::Drone,
            position: GeoPosition::new(65.7372, 31.6289, 1200.0),
            heading_deg: 90.0,
            pitch_deg: 0.0,
            roll_deg: 0.0,
            speed_mps: 12.0,
            energy_level: 0.8,
            metadata: serde_json::json!({ "callsign": "SCOUT-01" }),
            recorded_at: Utc::now(),
        }
    }

    #[test]
    fn test_keyframe_normalizes_heading() {
        let pos = GeoPosition::new(0.0, 0.0, 100.0);
        let kf = Keyframe::new(pos, 450.0, 0.0, 0.0, 1000).unwrap();
        assert!((kf.heading_deg - 90.0).abs() < 1e-9);

        let kf = Keyframe::new(pos, -90.0, 0.0, 0.0, 1000).unwrap();
        assert!((kf.heading_deg - 270.0).abs() < 1e-9);
    }

    #[test]
    fn test_keyframe_rejects_non_finite() {
        let pos = GeoPosition::new(0.0, 0.0, 100.0);
        assert!(Keyframe::new(pos, f64::NAN, 0.0, 0.0, 0).is_err());

        let bad_pos = GeoPosition::new(f64::INFINITY, 0.0, 100.0);
        assert!(Keyframe::new(bad_pos, 0.0, 0.0, 0.0, 0).is_err());
    }

    #[test]
    fn test_state_validation() {
        let state = nominal_state();
        assert!(state.validate().is_ok());

        let mut bad = nominal_state();
        bad.energy_level = 1.5;
        assert!(matches!(
            bad.validate(),
            Err(DomainError::EnergyOutOfRange(_))
        ));
    }

    #[test]
    fn test_state_to_keyframe() {
        let state = nominal_state();
        let kf = state.keyframe().unwrap();
        assert_eq!(kf.timestamp_ms, state.recorded_at_ms());
        assert!((kf.heading_deg - state.heading_deg).abs() < 1e-9);
    }
}
