//! Prelude module for Elastic Views.
//!
//! ```
//! use elastic_views::prelude::*;
//! ```

// ============================================================================
// Element Model
// ============================================================================

pub use crate::{ElasticError, ElementId, ElementKind, FrameClock, Scale, SharedElementRegistry};

// ============================================================================
// Animation
// ============================================================================

pub use crate::widget::animation::{
    AnimationId, AnimationListener, AnimationOutcome, CancelReason, Easing, ElasticAnimator,
};

// ============================================================================
// Widgets
// ============================================================================

pub use crate::config::ElasticConfig;
pub use crate::widget::widgets::{ElasticCheckButton, ElasticView};
pub use crate::widget::ClickDispatcher;
