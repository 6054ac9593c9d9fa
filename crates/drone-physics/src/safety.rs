//! Operating-envelope safety assessment for one entity at one instant.

use motion_domain::{Environment, KinematicState, WeatherCondition};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::aero::{power_consumption, remaining_flight_time_s};
use crate::platform::DroneSpec;

/// Battery endurance below this is a critical risk, minutes.
const CRITICAL_BATTERY_MIN: f64 = 5.0;

/// Battery endurance below this is a low-battery risk, minutes.
const LOW_BATTERY_MIN: f64 = 15.0;

/// Safety verdict for one entity at one instant. Recomputed fresh on every
/// call, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SafetyAssessment {
    pub safe: bool,

    /// Human-readable risk descriptions, in wind -> weather -> battery order.
    pub risks: Vec<String>,

    pub battery_minutes_remaining: f64,

    /// Wind speed as a fraction of the platform limit.
    pub wind_stress: f64,
}

/// Evaluate the operating envelope for one entity under the given
/// environment. All checks run unconditionally and accumulate
/// independently; the verdict reports risks, it makes no go/no-go decision.
#[must_use]
pub fn assess_safety(
    spec: &DroneSpec,
    state: &KinematicState,
    env: &Environment,
) -> SafetyAssessment {
    let mut risks = Vec::new();

    let wind_stress = env.wind_speed_mps / spec.max_wind_speed_mps;
    if wind_stress > 1.0 {
        risks.push(format!(
            "wind speed {:.1} m/s exceeds platform limit of {:.1} m/s",
            env.wind_speed_mps, spec.max_wind_speed_mps
        ));
    }

    match env.weather {
        WeatherCondition::Typhoon => {
            risks.push("typhoon conditions: flight not recommended".to_string());
        }
        WeatherCondition::Storm => {
            risks.push("storm conditions: elevated operational risk".to_string());
        }
        _ => {}
    }

    // endurance from zero-payload draw; actual payload is intentionally
    // ignored to bias the battery estimate toward caution
    let power_w = power_consumption(
        spec,
        state.speed_mps,
        0.0,
        state.position.altitude_m,
        env.temperature_c,
    );
    let battery_minutes_remaining = remaining_flight_time_s(spec, state.energy_level, power_w) / 60.0;

    if battery_minutes_remaining < CRITICAL_BATTERY_MIN {
        risks.push(format!(
            "critical battery: {battery_minutes_remaining:.1} minutes of flight remaining"
        ));
    } else if battery_minutes_remaining < LOW_BATTERY_MIN {
        risks.push(format!(
            "low battery: {battery_minutes_remaining:.1} minutes of flight remaining"
        ));
    }

    if !risks.is_empty() {
        debug!(
            entity_id = %state.entity_id,
            risk_count = risks.len(),
            "safety assessment accumulated risks"
        );
    }

    SafetyAssessment {
        safe: risks.is_empty(),
        risks,
        battery_minutes_remaining,
        wind_stress,
    }
}
