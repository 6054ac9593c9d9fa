//! Pure aerodynamic and energy functions over plain data.

use crate::platform::DroneSpec;

/// Air density at sea level, 15 °C (kg/m³). ISA reference value.
pub const SEA_LEVEL_AIR_DENSITY: f64 = 1.225;

/// Specific gas constant for dry air (J/(kg·K)).
pub const SPECIFIC_GAS_CONSTANT_AIR: f64 = 287.05;

/// Standard gravitational acceleration (m/s²).
pub const STANDARD_GRAVITY: f64 = 9.80665;

const KELVIN_OFFSET: f64 = 273.15;

/// Air density from the simplified barometric formula,
/// `ρ = ρ₀ · exp(−g·h / (R·T))`. Decreases monotonically with altitude
/// for a fixed temperature.
#[must_use]
pub fn air_density(altitude_m: f64, temperature_c: f64) -> f64 {
    let kelvin = temperature_c + KELVIN_OFFSET;
    SEA_LEVEL_AIR_DENSITY
        * (-STANDARD_GRAVITY * altitude_m / (SPECIFIC_GAS_CONSTANT_AIR * kelvin)).exp()
}

/// Aerodynamic drag `½ρ·Cd·A·v²` in newtons. Zero at zero airspeed,
/// quadratic in airspeed.
#[must_use]
pub fn drag_force(spec: &DroneSpec, airspeed_mps: f64, altitude_m: f64, temperature_c: f64) -> f64 {
    0.5 * air_density(altitude_m, temperature_c)
        * spec.drag_coefficient
        * spec.frontal_area_m2
        * airspeed_mps
        * airspeed_mps
}

/// Instantaneous power draw in watts: hover power scaled by the loaded mass
/// ratio, plus drag-induced power. Strictly positive even when hovering.
#[must_use]
pub fn power_consumption(
    spec: &DroneSpec,
    airspeed_mps: f64,
    payload_kg: f64,
    altitude_m: f64,
    temperature_c: f64,
) -> f64 {
    let mass_ratio = (spec.empty_mass_kg + payload_kg) / spec.empty_mass_kg;
    let drag_power = drag_force(spec, airspeed_mps, altitude_m, temperature_c) * airspeed_mps;
    spec.hover_power_w * mass_ratio + drag_power
}

/// Remaining endurance in seconds for the given normalized energy level and
/// power draw. Non-positive power yields infinity; a vehicle consuming no
/// power never depletes.
#[must_use]
pub fn remaining_flight_time_s(spec: &DroneSpec, energy_level: f64, power_w: f64) -> f64 {
    if power_w <= 0.0 {
        return f64::INFINITY;
    }
    spec.battery_capacity_wh * energy_level / power_w * 3600.0
}

/// Ground speed from airspeed and wind, both resolved into 2-D velocity
/// components and vector-summed. Wind direction follows the meteorological
/// "blowing from" convention, so a tailwind for heading 0 blows from 180.
#[must_use]
pub fn ground_speed(
    airspeed_mps: f64,
    heading_deg: f64,
    wind_speed_mps: f64,
    wind_from_deg: f64,
) -> f64 {
    let heading = heading_deg.to_radians();
    let wind_to = (wind_from_deg + 180.0).to_radians();

    let east = airspeed_mps * heading.sin() + wind_speed_mps * wind_to.sin();
    let north = airspeed_mps * heading.cos() + wind_speed_mps * wind_to.cos();

    east.hypot(north)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_air_density_sea_level() {
        assert_relative_eq!(air_density(0.0, 15.0), SEA_LEVEL_AIR_DENSITY);
    }

    #[test]
    fn test_air_density_decreases_with_altitude() {
        let d0 = air_density(0.0, 15.0);
        let d1 = air_density(1000.0, 15.0);
        let d2 = air_density(2000.0, 15.0);
        assert!(d0 > d1);
        assert!(d1 > d2);
    }

    #[test]
    fn test_drag_zero_at_zero_airspeed() {
        let spec = DroneSpec::quad_scout();
        assert_relative_eq!(drag_force(&spec, 0.0, 500.0, 15.0), 0.0);
    }

    #[test]
    fn test_drag_quadratic_in_airspeed() {
        let spec = DroneSpec::quad_scout();
        let d1 = drag_force(&spec, 5.0, 500.0, 15.0);
        let d2 = drag_force(&spec, 10.0, 500.0, 15.0);
        assert_relative_eq!(d2, 4.0 * d1, max_relative = 1e-9);
    }

    #[test]
    fn test_hover_power_positive() {
        let spec = DroneSpec::quad_scout();
        let hover = power_consumption(&spec, 0.0, 0.0, 500.0, 15.0);
        assert_relative_eq!(hover, spec.hover_power_w);
        assert!(hover > 0.0);
    }

    #[test]
    fn test_power_increases_with_payload() {
        let spec = DroneSpec::hexa_lifter();
        let unloaded = power_consumption(&spec, 10.0, 0.0, 500.0, 15.0);
        let loaded = power_consumption(&spec, 10.0, 3.0, 500.0, 15.0);
        assert!(loaded > unloaded);
    }

    #[test]
    fn test_remaining_flight_time() {
        let mut spec = DroneSpec::quad_scout();
        spec.battery_capacity_wh = 100.0;

        // 50 Wh remaining at 100 W is half an hour
        assert_relative_eq!(remaining_flight_time_s(&spec, 0.5, 100.0), 1800.0);
        assert!(remaining_flight_time_s(&spec, 0.5, 0.0).is_infinite());
        assert!(remaining_flight_time_s(&spec, 0.5, -10.0).is_infinite());
    }

    #[test]
    fn test_ground_speed_no_wind() {
        assert_relative_eq!(ground_speed(10.0, 0.0, 0.0, 90.0), 10.0);
    }

    #[test]
    fn test_ground_speed_tailwind_and_headwind() {
        // wind from 180 pushes a north-bound vehicle along
        let tailwind = ground_speed(10.0, 0.0, 5.0, 180.0);
        assert_relative_eq!(tailwind, 15.0, max_relative = 1e-9);

        let headwind = ground_speed(10.0, 0.0, 5.0, 0.0);
        assert_relative_eq!(headwind, 5.0, max_relative = 1e-9);
    }

    #[test]
    fn test_ground_speed_crosswind() {
        let cross = ground_speed(10.0, 0.0, 5.0, 90.0);
        assert_relative_eq!(cross, (125.0_f64).sqrt(), max_relative = 1e-9);
    }
}
