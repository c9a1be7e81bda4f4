//! Click dispatch for elements.
//!
//! The host UI reports clicks by element id. [`ClickDispatcher`] maps each id
//! to a handler closure, so routing a click is one table lookup followed by a
//! direct call.
//!
//! # Usage
//!
//! ```
//! use elastic_views::widget::ClickDispatcher;
//! use elastic_views_core::{ElementKind, SharedElementRegistry};
//!
//! let registry = SharedElementRegistry::new();
//! let fab = registry.create("example2_fab", ElementKind::FloatingActionButton);
//!
//! let mut dispatcher = ClickDispatcher::new();
//! dispatcher.register(fab, |id| println!("clicked {id:?}"));
//!
//! assert!(dispatcher.dispatch(fab));
//! ```

use std::collections::HashMap;
use std::fmt;

use elastic_views_core::logging::targets;
use elastic_views_core::ElementId;

/// A click handler. Receives the id of the clicked element.
pub type ClickHandler = Box<dyn FnMut(ElementId) + Send + 'static>;

/// Routes clicks to per-element handlers.
#[derive(Default)]
pub struct ClickDispatcher {
    handlers: HashMap<ElementId, ClickHandler>,
}

impl ClickDispatcher {
    /// Create an empty dispatcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the handler for `element`.
    ///
    /// Returns `true` if a previous handler was replaced.
    pub fn register<F>(&mut self, element: ElementId, handler: F) -> bool
    where
        F: FnMut(ElementId) + Send + 'static,
    {
        self.handlers.insert(element, Box::new(handler)).is_some()
    }

    /// Remove the handler for `element`. Returns `true` if one was registered.
    pub fn unregister(&mut self, element: ElementId) -> bool {
        self.handlers.remove(&element).is_some()
    }

    /// Check whether `element` has a handler.
    pub fn contains(&self, element: ElementId) -> bool {
        self.handlers.contains_key(&element)
    }

    /// Route a click. Returns `false` if no handler is registered.
    pub fn dispatch(&mut self, element: ElementId) -> bool {
        match self.handlers.get_mut(&element) {
            Some(handler) => {
                tracing::debug!(target: targets::DISPATCH, ?element, "dispatching click");
                handler(element);
                true
            }
            None => {
                tracing::trace!(target: targets::DISPATCH, ?element, "click without handler");
                false
            }
        }
    }

    /// Number of registered handlers.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Returns `true` if no handlers are registered.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl fmt::Debug for ClickDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClickDispatcher")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}
