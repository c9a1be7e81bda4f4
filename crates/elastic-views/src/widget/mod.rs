//! Widget layer for Elastic Views.
//!
//! This module ties elements to behaviour:
//!
//! - [`animation`]: Easing curves, tweens and the [`ElasticAnimator`](animation::ElasticAnimator)
//! - [`ClickDispatcher`]: Routes clicks from the host to per-element handlers
//! - [`widgets`]: Elastic buttons built on the animator
//!
//! # Overview
//!
//! Elements live in a [`SharedElementRegistry`](elastic_views_core::SharedElementRegistry).
//! The animator writes their scale each frame, driven either directly through
//! [`ElasticAnimator::on_frame`](animation::ElasticAnimator::on_frame) or by a
//! [`FrameClock`](elastic_views_core::FrameClock) it is attached to.

pub mod animation;
mod dispatcher;
pub mod widgets;

pub use dispatcher::{ClickDispatcher, ClickHandler};
