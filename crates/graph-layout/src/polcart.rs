//! Polar and cartesian conversions.
//!
//! All functions are total: inputs outside the operating range yield
//! degenerate values instead of errors.

use std::f64::consts::{PI, TAU};

/// Converts polar `(r, theta)` to cartesian `(x, y)`
///
/// `theta` is in radians and is wrapped onto `(-π, π]` first.
pub fn to_cartesian(r: f64, theta: f64) -> (f64, f64) {
    let theta = wrap_pi(theta);
    (r * theta.cos(), r * theta.sin())
}

/// Converts cartesian `(x, y)` to polar `(r, theta)` with `theta` in `[0, 2π)`
pub fn to_polar(x: f64, y: f64) -> (f64, f64) {
    let r = x.hypot(y);
    let mut theta = y.atan2(x);
    if theta < 0.0 {
        theta += TAU;
    }
    // tiny negative angles can round up to exactly 2π
    if theta >= TAU {
        theta = 0.0;
    }
    (r, theta)
}

/// Reduces `theta` (radians) into `[-π, π]`
///
/// Out-of-range values are reduced modulo π, not 2π, which keeps the result
/// in range but does not preserve the direction.
pub fn to_proper_radians(theta: f64) -> f64 {
    if (-PI..=PI).contains(&theta) {
        theta
    } else {
        theta.rem_euclid(PI)
    }
}

/// Reduces `theta` (degrees) into `[-180, 180]`, modulo 180 when out of range
pub fn to_proper_degrees(theta: f64) -> f64 {
    if (-180.0..=180.0).contains(&theta) {
        theta
    } else {
        theta.rem_euclid(180.0)
    }
}

/// Radians to degrees in `[-180, 180]`
pub fn to_degrees(theta: f64) -> f64 {
    (to_proper_radians(theta) / PI * 180.0).clamp(-180.0, 180.0)
}

/// Degrees to radians in `[-π, π]`
pub fn to_radians(theta: f64) -> f64 {
    (to_proper_degrees(theta) * PI / 180.0).clamp(-PI, PI)
}

/// Maps any angle onto `[0, 2π)`
pub fn correct_negative_angle(theta: f64) -> f64 {
    let angle = theta.rem_euclid(TAU);
    if angle >= TAU {
        0.0
    } else {
        angle
    }
}

fn wrap_pi(theta: f64) -> f64 {
    if theta > -PI && theta <= PI {
        return theta;
    }
    let wrapped = theta.rem_euclid(TAU);
    if wrapped > PI {
        wrapped - TAU
    } else {
        wrapped
    }
}
