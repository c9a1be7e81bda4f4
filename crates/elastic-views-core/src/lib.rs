//! Core systems for Elastic Views.
//!
//! This crate provides the host-side model that elastic animations act on:
//!
//! - **Elements**: Generational handles to visual nodes with a scale transform,
//!   opacity and a parent/child tree
//! - **Frame Clock**: Per-frame callbacks with a monotonic frame time
//! - **Thread Affinity**: Checks that UI state stays on its owning thread
//! - **Logging**: `tracing` targets and element tree visualization
//!
//! # Example
//!
//! ```
//! use elastic_views_core::{ElementKind, FrameClock, Scale, SharedElementRegistry};
//! use std::time::Duration;
//!
//! let registry = SharedElementRegistry::new();
//! let button = registry.create("button", ElementKind::Button);
//! assert_eq!(registry.scale(button).unwrap(), Scale::IDENTITY);
//!
//! let mut clock = FrameClock::new();
//! let reg = registry.clone();
//! clock.register(move |_frame_time| {
//!     reg.set_scale(button, Scale::uniform(0.9)).ok();
//! });
//! clock.advance_to(Duration::from_millis(16));
//! assert_eq!(registry.scale(button).unwrap(), Scale::uniform(0.9));
//! ```

pub mod element;
mod error;
pub mod frame_clock;
pub mod logging;
pub mod thread_check;

pub use element::{
    ElementError, ElementId, ElementKind, ElementRegistry, ElementResult, Scale,
    SharedElementRegistry,
};
pub use error::{ElasticError, Result};
pub use frame_clock::{FrameCallbackId, FrameClock, FrameClockError};
pub use logging::{ElementTreeDebug, TreeFormatOptions, TreeStyle};
pub use thread_check::ThreadAffinity;
