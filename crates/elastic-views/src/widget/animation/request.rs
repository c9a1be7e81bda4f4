//! Animation requests and completion reporting.

use std::fmt;
use std::time::Duration;

use elastic_views_core::{ElementId, Scale};

use super::easing::Easing;

/// Why a run ended without reaching its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelReason {
    /// A newer animation was started on the same element.
    Superseded,
    /// The run was stopped explicitly.
    Stopped,
    /// The target element was destroyed.
    TargetRemoved,
}

/// How a run ended. Passed to the finish callback exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationOutcome {
    /// The target scale was reached and applied.
    Finished,
    /// The run stopped early.
    Cancelled(CancelReason),
}

impl AnimationOutcome {
    /// Returns `true` if the target scale was reached.
    #[inline]
    pub fn is_finished(self) -> bool {
        self == AnimationOutcome::Finished
    }

    /// Returns the cancel reason, if the run was cancelled.
    #[inline]
    pub fn cancel_reason(self) -> Option<CancelReason> {
        match self {
            AnimationOutcome::Finished => None,
            AnimationOutcome::Cancelled(reason) => Some(reason),
        }
    }
}

/// Completion callback for a run.
pub type FinishCallback = Box<dyn FnOnce(AnimationOutcome) + Send + 'static>;

/// Lifecycle hooks for a run, in addition to the finish callback.
///
/// All methods default to no-ops.
pub trait AnimationListener: Send {
    /// Called when the run is submitted.
    fn on_start(&mut self, _target: ElementId) {}

    /// Called when the run reaches its target.
    fn on_end(&mut self, _target: ElementId) {}

    /// Called when the run is cancelled.
    fn on_cancel(&mut self, _target: ElementId, _reason: CancelReason) {}
}

/// Everything needed to run one elastic scale animation.
///
/// Built through [`ElasticAnimation`](super::ElasticAnimation); immutable once
/// submitted.
pub struct AnimationRequest {
    pub(crate) target: ElementId,
    pub(crate) scale: Scale,
    pub(crate) duration: Duration,
    pub(crate) easing: Easing,
    pub(crate) include_children: bool,
    pub(crate) on_finish: Option<FinishCallback>,
    pub(crate) listener: Option<Box<dyn AnimationListener>>,
}

impl AnimationRequest {
    /// Scale used when none is configured.
    pub const DEFAULT_SCALE: f32 = 0.7;
    /// Duration used when none is configured.
    pub const DEFAULT_DURATION_MS: i64 = 400;

    pub(crate) fn new(target: ElementId, scale: Scale, duration: Duration) -> Self {
        Self {
            target,
            scale,
            duration,
            easing: Easing::default(),
            include_children: true,
            on_finish: None,
            listener: None,
        }
    }

    /// A callback-free copy of this request aimed at another element.
    pub(crate) fn for_child(&self, child: ElementId) -> Self {
        Self {
            target: child,
            scale: self.scale,
            duration: self.duration,
            easing: self.easing,
            include_children: false,
            on_finish: None,
            listener: None,
        }
    }

    /// The element being animated.
    #[inline]
    pub fn target(&self) -> ElementId {
        self.target
    }

    /// The target scale.
    #[inline]
    pub fn scale(&self) -> Scale {
        self.scale
    }

    /// The animation duration.
    #[inline]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// The easing curve.
    #[inline]
    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Whether direct children of the target animate alongside it.
    #[inline]
    pub fn include_children(&self) -> bool {
        self.include_children
    }

    /// Whether a finish callback is registered.
    #[inline]
    pub fn has_finish_callback(&self) -> bool {
        self.on_finish.is_some()
    }
}

impl fmt::Debug for AnimationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnimationRequest")
            .field("target", &self.target)
            .field("scale", &self.scale)
            .field("duration", &self.duration)
            .field("easing", &self.easing)
            .field("include_children", &self.include_children)
            .field("on_finish", &self.on_finish.is_some())
            .field("listener", &self.listener.is_some())
            .finish()
    }
}
