//! Elastic Views - elastic scale animations for clickable elements.
//!
//! This is the main crate. It re-exports the core element model and adds the
//! animator, click dispatch, widgets and configuration.
//!
//! # Example
//!
//! ```
//! use elastic_views::prelude::*;
//! use std::time::Duration;
//!
//! let registry = SharedElementRegistry::new();
//! let view = registry.create("example2_view3", ElementKind::Button);
//! let animator = ElasticAnimator::new(registry.clone());
//!
//! animator
//!     .configure(view, 0.85, 0.85, 500)?
//!     .set_on_finish_listener(|_| println!("finished"))
//!     .start();
//!
//! let mut clock = FrameClock::new();
//! animator.attach_to(&mut clock);
//! clock.advance_to(Duration::ZERO);
//! clock.advance_to(Duration::from_millis(500));
//! assert_eq!(registry.scale(view)?, Scale::uniform(0.85));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use elastic_views_core::*;

pub mod config;
pub mod prelude;
pub mod widget;
