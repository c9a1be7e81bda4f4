//! Integration tests for the shared element registry and frame clock.

use std::time::Duration;

use elastic_views_core::{
    ElementError, ElementKind, ElementTreeDebug, FrameClock, Scale, SharedElementRegistry,
};

fn example_screen(registry: &SharedElementRegistry) -> Vec<elastic_views_core::ElementId> {
    let layout = registry.create("example2_layout", ElementKind::Group);
    let names = [
        ("example2_view3", ElementKind::Button),
        ("example2_imv", ElementKind::Image),
        ("example2_textView0", ElementKind::Text),
        ("example2_fab", ElementKind::FloatingActionButton),
    ];
    let mut ids = vec![layout];
    for (name, kind) in names {
        ids.push(registry.create_child(layout, name, kind).unwrap());
    }
    ids
}

#[test]
fn screen_tree_lookup_and_teardown() {
    let registry = SharedElementRegistry::new();
    let ids = example_screen(&registry);

    assert_eq!(registry.len(), 5);
    assert_eq!(registry.children(ids[0]).unwrap(), ids[1..].to_vec());
    assert_eq!(registry.find_by_name("example2_fab"), Some(ids[4]));
    assert_eq!(registry.kind(ids[2]).unwrap(), ElementKind::Image);

    registry.destroy(ids[0]).unwrap();
    assert!(registry.is_empty());
    assert_eq!(registry.scale(ids[1]), Err(ElementError::InvalidElementId));
}

#[test]
fn frame_callbacks_mutate_shared_registry() {
    let registry = SharedElementRegistry::new();
    let ids = example_screen(&registry);
    let button = ids[1];

    let mut clock = FrameClock::new();
    let reg = registry.clone();
    let callback = clock.register(move |frame_time| {
        let shrink = 1.0 - frame_time.as_secs_f32();
        reg.set_scale(button, Scale::uniform(shrink)).ok();
    });

    clock.advance_to(Duration::from_millis(250));
    assert_eq!(registry.scale(button).unwrap(), Scale::uniform(0.75));

    clock.unregister(callback).unwrap();
    clock.advance_to(Duration::from_millis(500));
    assert_eq!(registry.scale(button).unwrap(), Scale::uniform(0.75));

    let tree = registry.with_read(|r| ElementTreeDebug::new().format_all(r)).unwrap();
    assert!(tree.contains("example2_view3 <Button> scale=0.75x0.75"));
}

#[test]
fn frame_time_regression_is_clamped() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("elastic_views_core=trace")
        .with_test_writer()
        .try_init();

    let mut clock = FrameClock::new();
    let seen = std::sync::Arc::new(parking_lot::Mutex::new(Vec::new()));
    let log = seen.clone();
    clock.register(move |frame_time| log.lock().push(frame_time));

    clock.advance_to(Duration::from_millis(32));
    assert_eq!(clock.advance_to(Duration::from_millis(16)), Duration::from_millis(32));
    clock.advance_by(Duration::from_millis(16));

    assert_eq!(
        *seen.lock(),
        vec![
            Duration::from_millis(32),
            Duration::from_millis(32),
            Duration::from_millis(48),
        ]
    );
    assert_eq!(clock.frame_count(), 3);
}
