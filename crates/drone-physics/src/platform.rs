//! Drone platform specifications.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Physics-model errors.
#[derive(Debug, Error)]
pub enum PhysicsError {
    #[error("invalid spec parameter {field}: {value}")]
    InvalidParameter { field: &'static str, value: f64 },
}

/// Immutable configuration for one vehicle class, shared read-only across
/// all instances of that class.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DroneSpec {
    pub empty_mass_kg: f64,
    pub max_payload_kg: f64,

    /// Frontal area exposed to the airstream.
    pub frontal_area_m2: f64,
    pub drag_coefficient: f64,

    pub battery_capacity_wh: f64,
    pub hover_power_w: f64,

    pub max_airspeed_mps: f64,

    /// Wind limit for safe operation.
    pub max_wind_speed_mps: f64,
}

impl DroneSpec {
    /// Reject non-finite or non-positive parameters. Payload capacity may
    /// be zero; every other parameter must be strictly positive.
    pub fn validate(&self) -> Result<(), PhysicsError> {
        for (field, value) in [
            ("empty_mass_kg", self.empty_mass_kg),
            ("frontal_area_m2", self.frontal_area_m2),
            ("drag_coefficient", self.drag_coefficient),
            ("battery_capacity_wh", self.battery_capacity_wh),
            ("hover_power_w", self.hover_power_w),
            ("max_airspeed_mps", self.max_airspeed_mps),
            ("max_wind_speed_mps", self.max_wind_speed_mps),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(PhysicsError::InvalidParameter { field, value });
            }
        }
        if !self.max_payload_kg.is_finite() || self.max_payload_kg < 0.0 {
            return Err(PhysicsError::InvalidParameter {
                field: "max_payload_kg",
                value: self.max_payload_kg,
            });
        }
        Ok(())
    }

    /// Small reconnaissance quadcopter.
    #[must_use]
    pub fn quad_scout() -> Self {
        Self {
            empty_mass_kg: 1.2,
            max_payload_kg: 0.4,
            frontal_area_m2: 0.05,
            drag_coefficient: 1.0,
            battery_capacity_wh: 77.0,
            hover_power_w: 180.0,
            max_airspeed_mps: 18.0,
            max_wind_speed_mps: 10.0,
        }
    }

    /// Heavy-lift hexacopter for cargo delivery.
    #[must_use]
    pub fn hexa_lifter() -> Self {
        Self {
            empty_mass_kg: 6.5,
            max_payload_kg: 5.0,
            frontal_area_m2: 0.25,
            drag_coefficient: 1.1,
            battery_capacity_wh: 888.0,
            hover_power_w: 1500.0,
            max_airspeed_mps: 15.0,
            max_wind_speed_mps: 12.0,
        }
    }

    /// Fixed-wing VTOL survey platform.
    #[must_use]
    pub fn vtol_surveyor() -> Self {
        Self {
            empty_mass_kg: 3.8,
            max_payload_kg: 1.0,
            frontal_area_m2: 0.12,
            drag_coefficient: 0.45,
            battery_capacity_wh: 355.0,
            hover_power_w: 900.0,
            max_airspeed_mps: 28.0,
            max_wind_speed_mps: 14.0,
        }
    }
}
