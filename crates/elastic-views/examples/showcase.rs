//! Elastic Views Showcase
//!
//! Headless replay of the showcase screen:
//! - `example2_view3` animates to 0.85 over 500 ms and logs when it finishes
//! - `example2_textView0` animates to 0.75 over 500 ms
//! - `example2_imv` and `example2_fab` play an elastic press and post a notification
//!
//! Run with: cargo run -p elastic-views --example showcase [-- config.toml]

use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

use elastic_views::config::ElasticConfig;
use elastic_views::prelude::*;
use elastic_views::{ElementTreeDebug, TreeFormatOptions, TreeStyle};
use parking_lot::Mutex;

const FRAME: Duration = Duration::from_millis(16);

/// What the replay left behind.
struct Replay {
    /// Final element tree, one element per line.
    tree: String,
    /// Notifications posted by the image view and the floating action button.
    notifications: Vec<&'static str>,
}

/// Click every element on the screen in turn, letting each animation settle.
fn replay(config: &ElasticConfig) -> Result<Replay, Box<dyn Error>> {
    let registry = SharedElementRegistry::new();
    let animator = ElasticAnimator::new(registry.clone());
    let mut clock = FrameClock::new();
    animator.attach_to(&mut clock);

    let screen = registry.create("example2_screen", ElementKind::Group);
    let view3 = registry.create_child(screen, "example2_view3", ElementKind::Button)?;
    let text = registry.create_child(screen, "example2_textView0", ElementKind::Text)?;
    let image = registry.create_child(screen, "example2_imv", ElementKind::Image)?;
    let fab = registry.create_child(screen, "example2_fab", ElementKind::FloatingActionButton)?;

    let mut dispatcher = ClickDispatcher::new();

    let anim = animator.clone();
    dispatcher.register(view3, move |id| {
        let started = anim.configure(id, 0.85, 0.85, 500).map(|animation| {
            animation
                .set_on_finish_listener(|outcome| {
                    tracing::info!(target: "showcase", ?outcome, "view3 animation finished");
                })
                .start()
        });
        if let Err(err) = started {
            tracing::error!(target: "showcase", %err, "could not animate view3");
        }
    });

    let anim = animator.clone();
    dispatcher.register(text, move |id| {
        if let Err(err) = anim.configure(id, 0.75, 0.75, 500).map(|animation| animation.start()) {
            tracing::error!(target: "showcase", %err, "could not animate textView0");
        }
    });

    // The host presents notifications; here they are logged and collected.
    let notifications = Arc::new(Mutex::new(Vec::new()));
    for (id, message) in [(image, "imv clicked"), (fab, "fab clicked")] {
        let mut view = ElasticView::with_config(&animator, id, config);
        let posted = notifications.clone();
        view.set_on_click_listener(move |_| {
            tracing::info!(target: "showcase", text = message, "notification");
            posted.lock().push(message);
        });
        dispatcher.register(id, move |_| {
            if let Err(err) = view.click() {
                tracing::error!(target: "showcase", %err, "click failed");
            }
        });
    }

    for id in [view3, text, image, fab] {
        dispatcher.dispatch(id);
        while animator.active_count() > 0 {
            clock.advance_by(FRAME);
        }
    }

    let options = TreeFormatOptions {
        style: TreeStyle::Ascii,
        ..TreeFormatOptions::default()
    };
    let tree = registry.with_read(|registry| {
        ElementTreeDebug::with_options(options).format_subtree(registry, screen)
    })?;
    let notifications = notifications.lock().clone();

    Ok(Replay { tree, notifications })
}

#[cfg_attr(test, allow(dead_code))]
fn main() -> Result<(), Box<dyn Error>> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => ElasticConfig::load(path)?,
        None => ElasticConfig::default(),
    };

    let replay = replay(&config)?;
    println!("{}", replay.tree);
    Ok(())
}
