//! ElasticCheckButton widget implementation.
//!
//! An [`ElasticCheckButton`] toggles its checked state on every click and
//! plays the elastic press unless one is already in flight. Once the press
//! completes the element is drawn at `checked_alpha` while checked and fully
//! opaque otherwise.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use elastic_views_core::logging::targets;
use elastic_views_core::{ElementId, ElementKind, Result};

use super::elastic_view::ElasticView;
use crate::config::ElasticConfig;
use crate::widget::animation::ElasticAnimator;

/// A checkable button with an elastic press.
#[derive(Debug)]
pub struct ElasticCheckButton {
    view: ElasticView,
    checked: Arc<AtomicBool>,
    checked_alpha: f32,
}

impl ElasticCheckButton {
    /// Create a check button element in the animator's registry.
    pub fn create(animator: &ElasticAnimator, name: impl Into<String>) -> Self {
        let id = animator.registry().create(name, ElementKind::CheckButton);
        Self::with_config(animator, id, &ElasticConfig::default())
    }

    /// Wrap an existing element.
    pub fn with_config(animator: &ElasticAnimator, id: ElementId, config: &ElasticConfig) -> Self {
        Self {
            view: ElasticView::with_config(animator, id, config),
            checked: Arc::new(AtomicBool::new(false)),
            checked_alpha: config.checked_alpha.clamp(0.0, 1.0),
        }
    }

    /// The underlying elastic view.
    pub fn view(&self) -> &ElasticView {
        &self.view
    }

    /// Mutable access to the underlying view, for listeners and press tuning.
    pub fn view_mut(&mut self) -> &mut ElasticView {
        &mut self.view
    }

    /// The wrapped element.
    pub fn id(&self) -> ElementId {
        self.view.id()
    }

    /// Returns `true` if the button is checked.
    pub fn is_checked(&self) -> bool {
        self.checked.load(Ordering::SeqCst)
    }

    /// Opacity while checked.
    pub fn checked_alpha(&self) -> f32 {
        self.checked_alpha
    }

    /// Set the opacity used while checked.
    pub fn set_checked_alpha(&mut self, alpha: f32) -> Result<()> {
        self.checked_alpha = alpha.clamp(0.0, 1.0);
        self.apply_alpha()
    }

    /// Set the checked state and update the element's opacity.
    pub fn set_checked(&self, checked: bool) -> Result<()> {
        self.checked.store(checked, Ordering::SeqCst);
        self.apply_alpha()
    }

    fn apply_alpha(&self) -> Result<()> {
        let alpha = if self.is_checked() { self.checked_alpha } else { 1.0 };
        self.view.animator().registry().set_alpha(self.id(), alpha)?;
        Ok(())
    }

    /// Toggle and play the press. Opacity and listeners update once the
    /// press completes.
    ///
    /// The checked state always toggles. Returns `Ok(false)` if no press was
    /// started because one is already in flight; the in-flight press applies
    /// the latest state when it completes.
    pub fn click(&self) -> Result<bool> {
        let checked = !self.checked.fetch_xor(true, Ordering::SeqCst);
        tracing::debug!(target: targets::WIDGET, element = ?self.id(), checked, "check button toggled");

        if self.view.is_pressed() {
            return Ok(false);
        }

        let registry = self.view.animator().registry().clone();
        let state = self.checked.clone();
        let checked_alpha = self.checked_alpha;
        let id = self.id();
        self.view.click_then(move || {
            let alpha = if state.load(Ordering::SeqCst) { checked_alpha } else { 1.0 };
            if let Err(err) = registry.set_alpha(id, alpha) {
                tracing::warn!(target: targets::WIDGET, element = ?id, %err, "could not update alpha");
            }
        })
    }
}
