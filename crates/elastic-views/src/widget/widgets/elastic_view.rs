//! Elastic press behaviour for buttons, image views and floating action buttons.
//!
//! Clicking an [`ElasticView`] plays a two-phase press: the element shrinks to
//! its configured scale, then springs back to 1.0. The click listener runs
//! once the element is back at rest.
//!
//! # Example
//!
//! ```
//! use elastic_views::widget::animation::ElasticAnimator;
//! use elastic_views::widget::widgets::ElasticView;
//! use elastic_views_core::{ElementKind, SharedElementRegistry};
//! use std::time::Duration;
//!
//! let registry = SharedElementRegistry::new();
//! let animator = ElasticAnimator::new(registry.clone());
//! let mut button = ElasticView::create(&animator, "button", ElementKind::Button);
//! button.set_on_click_listener(|id| println!("{id:?} clicked"));
//!
//! assert!(button.click()?);
//! for frame in [0, 250, 266, 516] {
//!     animator.on_frame(Duration::from_millis(frame));
//! }
//! assert!(button.is_at_rest()?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use elastic_views_core::logging::targets;
use elastic_views_core::{ElasticError, ElementId, ElementKind, Result};

use crate::config::ElasticConfig;
use crate::widget::animation::{AnimationId, Easing, ElasticAnimator};

/// Listener invoked with the clicked element's id.
pub type ClickListener = Arc<dyn Fn(ElementId) + Send + Sync + 'static>;

/// Listener invoked after the click listener.
pub type FinishListener = Arc<dyn Fn() + Send + Sync + 'static>;

/// Parameters of a shrink-and-release press.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Press {
    pub(crate) id: ElementId,
    pub(crate) scale: f32,
    pub(crate) duration_ms: u32,
    pub(crate) easing: Easing,
    pub(crate) include_children: bool,
}

impl Press {
    /// Shrink to `scale`, then release back to 1.0, each phase taking half
    /// the duration. `on_released` runs only if both phases finish.
    ///
    /// `pressing` must already be set; it is cleared once the press ends,
    /// whatever the outcome.
    pub(crate) fn play<F>(
        self,
        animator: &ElasticAnimator,
        pressing: Arc<AtomicBool>,
        on_released: F,
    ) -> Result<AnimationId>
    where
        F: FnOnce() + Send + 'static,
    {
        let half = i64::from(self.duration_ms / 2);
        let release = animator.clone();
        let shrink = match animator.configure(self.id, self.scale, self.scale, half) {
            Ok(animation) => animation,
            Err(err) => {
                pressing.store(false, Ordering::SeqCst);
                return Err(err);
            }
        };

        let id = shrink
            .set_easing(self.easing)
            .set_include_children(self.include_children)
            .set_on_finish_listener(move |outcome| {
                if !outcome.is_finished() {
                    tracing::debug!(target: targets::WIDGET, element = ?self.id, ?outcome, "press interrupted");
                    pressing.store(false, Ordering::SeqCst);
                    return;
                }
                let released = pressing.clone();
                let started = release.configure(self.id, 1.0, 1.0, half).map(|animation| {
                    animation
                        .set_easing(self.easing)
                        .set_include_children(self.include_children)
                        .set_on_finish_listener(move |outcome| {
                            released.store(false, Ordering::SeqCst);
                            if outcome.is_finished() {
                                on_released();
                            } else {
                                tracing::debug!(target: targets::WIDGET, element = ?self.id, ?outcome, "release interrupted");
                            }
                        })
                        .start()
                });
                if let Err(err) = started {
                    pressing.store(false, Ordering::SeqCst);
                    tracing::warn!(target: targets::WIDGET, element = ?self.id, %err, "could not release press");
                }
            })
            .start();
        Ok(id)
    }
}

/// An element that plays an elastic press when clicked.
pub struct ElasticView {
    id: ElementId,
    animator: ElasticAnimator,
    scale: f32,
    duration_ms: u32,
    easing: Easing,
    include_children: bool,
    on_click: Option<ClickListener>,
    on_finish: Option<FinishListener>,
    pressing: Arc<AtomicBool>,
}

impl ElasticView {
    /// Wrap an existing element using the default configuration.
    pub fn new(animator: &ElasticAnimator, id: ElementId) -> Self {
        Self::with_config(animator, id, &ElasticConfig::default())
    }

    /// Wrap an existing element.
    pub fn with_config(animator: &ElasticAnimator, id: ElementId, config: &ElasticConfig) -> Self {
        Self {
            id,
            animator: animator.clone(),
            scale: config.scale,
            duration_ms: config.duration_ms,
            easing: config.easing,
            include_children: config.include_children,
            on_click: None,
            on_finish: None,
            pressing: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Create a new root element in the animator's registry and wrap it.
    pub fn create(animator: &ElasticAnimator, name: impl Into<String>, kind: ElementKind) -> Self {
        let id = animator.registry().create(name, kind);
        Self::new(animator, id)
    }

    /// The wrapped element.
    #[inline]
    pub fn id(&self) -> ElementId {
        self.id
    }

    /// Scale reached at the bottom of a press.
    #[inline]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Set the press scale.
    pub fn set_scale(&mut self, scale: f32) -> Result<()> {
        if !scale.is_finite() {
            return Err(ElasticError::invalid_argument(
                "scale",
                format!("must be finite, got {scale}"),
            ));
        }
        self.scale = scale;
        Ok(())
    }

    /// Total press duration in milliseconds.
    #[inline]
    pub fn duration_ms(&self) -> u32 {
        self.duration_ms
    }

    /// Set the total press duration.
    pub fn set_duration_ms(&mut self, duration_ms: u32) {
        self.duration_ms = duration_ms;
    }

    /// Set the press easing curve.
    pub fn set_easing(&mut self, easing: Easing) {
        self.easing = easing;
    }

    /// Set the click listener, replacing any previous one.
    pub fn set_on_click_listener<F>(&mut self, listener: F)
    where
        F: Fn(ElementId) + Send + Sync + 'static,
    {
        self.on_click = Some(Arc::new(listener));
    }

    /// Set the finish listener, replacing any previous one.
    pub fn set_on_finish_listener<F>(&mut self, listener: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_finish = Some(Arc::new(listener));
    }

    /// Returns `true` while a press is in flight.
    #[inline]
    pub fn is_pressed(&self) -> bool {
        self.pressing.load(Ordering::SeqCst)
    }

    /// Returns `true` if no press is in flight and the element is unscaled.
    pub fn is_at_rest(&self) -> Result<bool> {
        let scale = self.animator.registry().scale(self.id)?;
        Ok(scale.is_identity() && !self.is_pressed() && !self.animator.is_animating(self.id))
    }

    /// Play the press animation.
    ///
    /// Returns `Ok(false)` if the click was ignored because a press is
    /// already in flight.
    pub fn click(&self) -> Result<bool> {
        self.click_then(|| {})
    }

    /// Play the press and run `on_released` before the listeners.
    pub(crate) fn click_then<F>(&self, on_released: F) -> Result<bool>
    where
        F: FnOnce() + Send + 'static,
    {
        if self.pressing.swap(true, Ordering::SeqCst) {
            tracing::trace!(target: targets::WIDGET, element = ?self.id, "click ignored, press in flight");
            return Ok(false);
        }

        let id = self.id;
        let on_click = self.on_click.clone();
        let on_finish = self.on_finish.clone();
        self.press().play(&self.animator, self.pressing.clone(), move || {
            on_released();
            if let Some(on_click) = on_click {
                on_click(id);
            }
            if let Some(on_finish) = on_finish {
                on_finish();
            }
        })?;
        Ok(true)
    }

    pub(crate) fn press(&self) -> Press {
        Press {
            id: self.id,
            scale: self.scale,
            duration_ms: self.duration_ms,
            easing: self.easing,
            include_children: self.include_children,
        }
    }

    pub(crate) fn animator(&self) -> &ElasticAnimator {
        &self.animator
    }
}

impl fmt::Debug for ElasticView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElasticView")
            .field("id", &self.id)
            .field("scale", &self.scale)
            .field("duration_ms", &self.duration_ms)
            .field("easing", &self.easing)
            .field("pressing", &self.is_pressed())
            .finish_non_exhaustive()
    }
}
