//! Easing functions for elastic animations.
//!
//! Easing functions map a linear progress value (0.0 to 1.0) to a transformed
//! value. The elastic family overshoots past 1.0 before settling, which is
//! what gives elastic views their spring-like feel.

use std::f32::consts::PI;

use serde::{Deserialize, Serialize};

/// Available easing functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    /// Linear interpolation (no easing).
    Linear,
    /// Quadratic ease-in (starts slow, accelerates).
    EaseIn,
    /// Quadratic ease-out (starts fast, decelerates).
    EaseOut,
    /// Quadratic ease-in-out (smooth start and end).
    EaseInOut,
    /// Cubic ease-out.
    EaseOutCubic,
    /// Sinusoidal ease-in-out.
    EaseInOutSine,
    /// Elastic ease-in: winds up below 0.0 before launching toward the end.
    ElasticIn,
    /// Elastic ease-out: overshoots past 1.0, then settles.
    #[default]
    ElasticOut,
    /// Elastic ease-in-out: winds up, then overshoots and settles.
    ElasticInOut,
}

impl Easing {
    /// Returns `true` for curves that leave the `[0.0, 1.0]` range mid-flight.
    pub fn overshoots(self) -> bool {
        matches!(
            self,
            Easing::ElasticIn | Easing::ElasticOut | Easing::ElasticInOut
        )
    }
}

/// Apply an easing function to a progress value.
///
/// `t` is clamped to `[0.0, 1.0]`. Every curve maps 0.0 to 0.0 and 1.0 to 1.0
/// exactly.
///
/// # Example
///
/// ```
/// use elastic_views::widget::animation::{ease, Easing};
///
/// assert_eq!(ease(Easing::Linear, 0.5), 0.5);
/// assert_eq!(ease(Easing::ElasticOut, 1.0), 1.0);
///
/// // Elastic-out overshoots early in the animation
/// assert!(ease(Easing::ElasticOut, 0.1) > 1.0);
/// ```
#[inline]
pub fn ease(easing: Easing, t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);

    match easing {
        Easing::Linear => t,
        Easing::EaseIn => t * t,
        Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
        Easing::EaseInOut => ease_in_out_quad(t),
        Easing::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
        Easing::EaseInOutSine => -((PI * t).cos() - 1.0) / 2.0,
        Easing::ElasticIn => ease_in_elastic(t),
        Easing::ElasticOut => ease_out_elastic(t),
        Easing::ElasticInOut => ease_in_out_elastic(t),
    }
}

/// Interpolate between two values using an easing function.
#[inline]
pub fn lerp_eased(easing: Easing, start: f32, end: f32, t: f32) -> f32 {
    start + (end - start) * ease(easing, t)
}

#[inline]
fn ease_in_out_quad(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

// =============================================================================
// Elastic Easing
// =============================================================================

/// Angular frequency of the in/out curves: one oscillation per 0.3 of progress.
const ELASTIC_PERIOD: f32 = (2.0 * PI) / 3.0;
/// Angular frequency of the in-out curve.
const ELASTIC_PERIOD_IN_OUT: f32 = (2.0 * PI) / 4.5;

#[inline]
fn ease_in_elastic(t: f32) -> f32 {
    if t == 0.0 || t == 1.0 {
        return t;
    }
    -(2f32.powf(10.0 * t - 10.0)) * ((t * 10.0 - 10.75) * ELASTIC_PERIOD).sin()
}

#[inline]
fn ease_out_elastic(t: f32) -> f32 {
    if t == 0.0 || t == 1.0 {
        return t;
    }
    2f32.powf(-10.0 * t) * ((t * 10.0 - 0.75) * ELASTIC_PERIOD).sin() + 1.0
}

#[inline]
fn ease_in_out_elastic(t: f32) -> f32 {
    if t == 0.0 || t == 1.0 {
        return t;
    }
    let wave = ((20.0 * t - 11.125) * ELASTIC_PERIOD_IN_OUT).sin();
    if t < 0.5 {
        -(2f32.powf(20.0 * t - 10.0) * wave) / 2.0
    } else {
        (2f32.powf(-20.0 * t + 10.0) * wave) / 2.0 + 1.0
    }
}
