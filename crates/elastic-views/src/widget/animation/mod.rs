//! Elastic scale animations.
//!
//! This module provides easing curves, scale tweens and the
//! [`ElasticAnimator`] that drives them on live elements.
//!
//! # Easing Functions
//!
//! Easing functions take a normalized progress value `t` (0.0 to 1.0) and
//! return a transformed value. The default, [`Easing::ElasticOut`], overshoots
//! the target and settles back onto it.
//!
//! # Example
//!
//! ```
//! use elastic_views::widget::animation::{AnimationOutcome, ElasticAnimator};
//! use elastic_views_core::{ElementKind, SharedElementRegistry};
//! use std::time::Duration;
//!
//! let registry = SharedElementRegistry::new();
//! let text = registry.create("example2_textView0", ElementKind::Text);
//! let animator = ElasticAnimator::new(registry.clone());
//!
//! animator
//!     .configure(text, 0.75, 0.75, 500)?
//!     .set_on_finish_listener(|outcome| assert_eq!(outcome, AnimationOutcome::Finished))
//!     .start();
//!
//! for frame in (0..=500).step_by(16).chain([500]) {
//!     animator.on_frame(Duration::from_millis(frame));
//! }
//! assert!(!animator.is_animating(text));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod animator;
mod easing;
mod request;
mod tween;

pub use animator::{AnimationId, ElasticAnimation, ElasticAnimator};
pub use easing::{ease, lerp_eased, Easing};
pub use request::{
    AnimationListener, AnimationOutcome, AnimationRequest, CancelReason, FinishCallback,
};
pub use tween::{Tween, TweenState};
