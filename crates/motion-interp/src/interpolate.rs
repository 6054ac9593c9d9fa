//! Interpolation primitives over scalars, positions, and headings.

use motion_domain::{GeoPosition, Keyframe};

/// Linear interpolation between two scalars.
///
/// The fraction is clamped to `[0, 1]`; interpolation never extrapolates.
#[must_use]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t.clamp(0.0, 1.0)
}

/// Component-wise linear interpolation between two geographic positions.
#[must_use]
pub fn lerp_position(a: &GeoPosition, b: &GeoPosition, t: f64) -> GeoPosition {
    GeoPosition {
        longitude: lerp(a.longitude, b.longitude, t),
        latitude: lerp(a.latitude, b.latitude, t),
        altitude_m: lerp(a.altitude_m, b.altitude_m, t),
    }
}

/// Shortest-arc interpolation between two headings in degrees.
///
/// The signed difference is folded into a half-turn so the blend always
/// takes the arc of at most 180 degrees: 350 -> 10 passes through 0,
/// never through 180. Result is normalized into `[0, 360)`.
#[must_use]
pub fn slerp_heading(a: f64, b: f64, t: f64) -> f64 {
    let diff = (b - a + 540.0).rem_euclid(360.0) - 180.0;
    (a + diff * t.clamp(0.0, 1.0)).rem_euclid(360.0)
}

/// Synthesize the pose at `render_time_ms` between two bracketing keyframes.
///
/// Position, pitch, and roll blend linearly; heading takes the shortest arc.
/// A degenerate or duplicate-timestamp span (`duration <= 0`) resolves to
/// the earlier keyframe's pose. The returned keyframe carries
/// `render_time_ms` itself, decoupled from the bracketing samples' stamps.
#[must_use]
pub fn interpolate_keyframe(prev: &Keyframe, next: &Keyframe, render_time_ms: i64) -> Keyframe {
    let duration = next.timestamp_ms - prev.timestamp_ms;
    let t = if duration > 0 {
        (render_time_ms - prev.timestamp_ms) as f64 / duration as f64
    } else {
        0.0
    };

    Keyframe {
        position: lerp_position(&prev.position, &next.position, t),
        heading_deg: slerp_heading(prev.heading_deg, next.heading_deg, t),
        pitch_deg: lerp(prev.pitch_deg, next.pitch_deg, t),
        roll_deg: lerp(prev.roll_deg, next.roll_deg, t),
        timestamp_ms: render_time_ms,
    }
}
