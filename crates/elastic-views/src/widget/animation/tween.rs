//! Scale tweens and their per-frame state.
//!
//! A [`Tween`] interpolates a [`Scale`] from a start value to a target value
//! over a fixed duration. It does not read the clock itself: the caller feeds
//! it frame timestamps, and the first timestamp it sees becomes its start time.

use std::time::Duration;

use elastic_views_core::Scale;

use super::easing::{ease, Easing};

/// Current state of a tween after sampling a frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TweenState {
    /// The tween is in progress.
    Running {
        /// Linear progress from 0.0 to 1.0 (before easing).
        fraction: f32,
        /// Eased scale for this frame.
        scale: Scale,
    },
    /// The tween reached its end; `scale` is exactly the target.
    Finished {
        /// The target scale.
        scale: Scale,
    },
}

impl TweenState {
    /// Check if the tween is still running.
    pub fn is_running(&self) -> bool {
        matches!(self, TweenState::Running { .. })
    }

    /// The scale to apply for this frame.
    pub fn scale(&self) -> Scale {
        match *self {
            TweenState::Running { scale, .. } | TweenState::Finished { scale } => scale,
        }
    }

    /// Linear progress, 1.0 once finished.
    pub fn fraction(&self) -> f32 {
        match *self {
            TweenState::Running { fraction, .. } => fraction,
            TweenState::Finished { .. } => 1.0,
        }
    }
}

/// A time-driven interpolation between two scales.
#[derive(Debug, Clone)]
pub struct Tween {
    from: Scale,
    to: Scale,
    duration: Duration,
    easing: Easing,
    /// Frame time of the first sample, if any.
    start_time: Option<Duration>,
}

impl Tween {
    /// Create a tween. It starts on the first call to [`Tween::sample`].
    pub fn new(from: Scale, to: Scale, duration: Duration, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration,
            easing,
            start_time: None,
        }
    }

    /// The starting scale.
    #[inline]
    pub fn from(&self) -> Scale {
        self.from
    }

    /// The target scale.
    #[inline]
    pub fn to(&self) -> Scale {
        self.to
    }

    /// The tween duration.
    #[inline]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// The easing curve.
    #[inline]
    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Frame time at which the tween started, if it has been sampled.
    #[inline]
    pub fn start_time(&self) -> Option<Duration> {
        self.start_time
    }

    /// Sample the tween at a frame time.
    pub fn sample(&mut self, frame_time: Duration) -> TweenState {
        let start = *self.start_time.get_or_insert(frame_time);
        let elapsed = frame_time.saturating_sub(start);

        let fraction = if self.duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
        };

        if fraction >= 1.0 {
            // Never derive the last frame from the curve: the eased value can
            // carry float error or residual oscillation.
            return TweenState::Finished { scale: self.to };
        }

        TweenState::Running {
            fraction,
            scale: self.from.lerp(self.to, ease(self.easing, fraction)),
        }
    }
}
