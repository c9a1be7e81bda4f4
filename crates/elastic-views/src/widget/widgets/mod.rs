//! Elastic widgets.
//!
//! This module provides the clickable widgets that play an elastic press:
//!
//! - [`ElasticView`]: Buttons, image views and floating action buttons
//! - [`ElasticCheckButton`]: A checkable button that dims while checked

mod check_button;
mod elastic_view;

pub use check_button::ElasticCheckButton;
pub use elastic_view::{ClickListener, ElasticView, FinishListener};
