//! The elastic animator.
//!
//! [`ElasticAnimator`] owns every in-flight scale animation. Each element has
//! at most one run at a time: the animator keeps a side table from element to
//! run, and starting a new run on an element cancels the previous one.
//!
//! Runs advance only when the host delivers a frame through
//! [`ElasticAnimator::on_frame`] (or a [`FrameClock`] the animator is attached
//! to). A run's start time is the first frame it observes.
//!
//! Completion callbacks fire exactly once per run, after the animator's
//! internal lock is released, so a callback may start further animations.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use elastic_views_core::logging::targets;
use elastic_views_core::{
    ElasticError, ElementId, FrameCallbackId, FrameClock, Result, Scale, SharedElementRegistry,
    ThreadAffinity,
};
use parking_lot::Mutex;
use slotmap::{new_key_type, SlotMap};

use super::easing::Easing;
use super::request::{
    AnimationListener, AnimationOutcome, AnimationRequest, CancelReason, FinishCallback,
};
use super::tween::{Tween, TweenState};

new_key_type! {
    /// Identifies one animation run.
    pub struct AnimationId;
}

/// An in-flight animation.
struct Run {
    target: ElementId,
    tween: Tween,
    on_finish: Option<FinishCallback>,
    listener: Option<Box<dyn AnimationListener>>,
    /// Runs started for the target's children by the same request.
    followers: Vec<AnimationId>,
}

/// A finished or cancelled run whose callbacks still have to be invoked.
struct Completion {
    id: AnimationId,
    target: ElementId,
    outcome: AnimationOutcome,
    on_finish: Option<FinishCallback>,
    listener: Option<Box<dyn AnimationListener>>,
}

impl Completion {
    fn notify(self) {
        tracing::debug!(target: targets::ANIMATION, id = ?self.id, element = ?self.target, outcome = ?self.outcome, "animation ended");
        if let Some(mut listener) = self.listener {
            match self.outcome {
                AnimationOutcome::Finished => listener.on_end(self.target),
                AnimationOutcome::Cancelled(reason) => listener.on_cancel(self.target, reason),
            }
        }
        if let Some(on_finish) = self.on_finish {
            on_finish(self.outcome);
        }
    }
}

#[derive(Default)]
struct AnimatorState {
    runs: SlotMap<AnimationId, Run>,
    /// Per-element slot: the run currently driving each element.
    slots: HashMap<ElementId, AnimationId>,
}

impl AnimatorState {
    /// Remove a run and release its slot. `None` if it already ended.
    fn end(&mut self, id: AnimationId, outcome: AnimationOutcome) -> Option<Completion> {
        let run = self.runs.remove(id)?;
        if self.slots.get(&run.target) == Some(&id) {
            self.slots.remove(&run.target);
        }
        Some(Completion {
            id,
            target: run.target,
            outcome,
            on_finish: run.on_finish,
            listener: run.listener,
        })
    }

    /// End the run driving `element` because a new request replaces it.
    fn supersede(&mut self, element: ElementId) -> Option<Completion> {
        let previous = self.slots.get(&element).copied()?;
        tracing::debug!(target: targets::ANIMATION, ?previous, element = ?element, "superseding running animation");
        self.end(previous, AnimationOutcome::Cancelled(CancelReason::Superseded))
    }

    /// Stop a run together with the child runs its request started.
    fn stop(&mut self, id: AnimationId) -> Vec<Completion> {
        let followers = match self.runs.get(id) {
            Some(run) => run.followers.clone(),
            None => return Vec::new(),
        };
        let stopped = AnimationOutcome::Cancelled(CancelReason::Stopped);
        let mut completions: Vec<Completion> = self.end(id, stopped).into_iter().collect();
        completions.extend(followers.into_iter().filter_map(|follower| self.end(follower, stopped)));
        completions
    }
}

/// Drives elastic scale animations on elements of a [`SharedElementRegistry`].
///
/// Cloning is cheap; clones share the same runs.
///
/// # Example
///
/// ```
/// use elastic_views::widget::animation::ElasticAnimator;
/// use elastic_views_core::{ElementKind, Scale, SharedElementRegistry};
/// use std::time::Duration;
///
/// let registry = SharedElementRegistry::new();
/// let button = registry.create("button", ElementKind::Button);
/// let animator = ElasticAnimator::new(registry.clone());
///
/// animator
///     .configure(button, 0.85, 0.85, 500)?
///     .set_on_finish_listener(|_outcome| println!("done"))
///     .start();
///
/// animator.on_frame(Duration::from_millis(0));
/// animator.on_frame(Duration::from_millis(500));
/// assert_eq!(registry.scale(button)?, Scale::uniform(0.85));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone)]
pub struct ElasticAnimator {
    registry: SharedElementRegistry,
    state: Arc<Mutex<AnimatorState>>,
    affinity: ThreadAffinity,
}

static_assertions::assert_impl_all!(ElasticAnimator: Send, Sync);

impl ElasticAnimator {
    /// Create an animator bound to the current thread.
    pub fn new(registry: SharedElementRegistry) -> Self {
        Self {
            registry,
            state: Arc::new(Mutex::new(AnimatorState::default())),
            affinity: ThreadAffinity::current(),
        }
    }

    /// The registry whose elements this animator drives.
    pub fn registry(&self) -> &SharedElementRegistry {
        &self.registry
    }

    /// Begin configuring an animation of `target` toward the given scale.
    ///
    /// # Errors
    ///
    /// Returns [`ElasticError::InvalidArgument`] if `duration_ms` is negative,
    /// a scale is not finite, or `target` is not a live element. Nothing is
    /// registered in that case.
    pub fn configure(
        &self,
        target: ElementId,
        scale_x: f32,
        scale_y: f32,
        duration_ms: i64,
    ) -> Result<ElasticAnimation> {
        let duration = validate_duration(duration_ms)?;
        let scale = Scale::new(validate_scale("scale_x", scale_x)?, validate_scale("scale_y", scale_y)?);
        if !self.registry.contains(target) {
            tracing::warn!(target: targets::ANIMATION, element = ?target, "rejected animation of a dead element");
            return Err(ElasticError::invalid_argument(
                "target",
                "element is not live",
            ));
        }
        Ok(ElasticAnimation {
            animator: self.clone(),
            request: AnimationRequest::new(target, scale, duration),
        })
    }

    /// Begin configuring an animation of `target` with the default scale and duration.
    pub fn animate(&self, target: ElementId) -> Result<ElasticAnimation> {
        self.configure(
            target,
            AnimationRequest::DEFAULT_SCALE,
            AnimationRequest::DEFAULT_SCALE,
            AnimationRequest::DEFAULT_DURATION_MS,
        )
    }

    /// Submit a request. Cancels any run already driving the same element.
    ///
    /// Superseded runs are reported before the new run's start hook fires.
    fn submit(&self, mut request: AnimationRequest) -> AnimationId {
        self.affinity.debug_assert_same_thread();

        let children = if request.include_children {
            self.registry.children(request.target).unwrap_or_default()
        } else {
            Vec::new()
        };

        let superseded: Vec<Completion> = {
            let mut state = self.state.lock();
            std::iter::once(request.target)
                .chain(children.iter().copied())
                .filter_map(|element| state.supersede(element))
                .collect()
        };
        for completion in superseded {
            completion.notify();
        }

        if let Some(listener) = request.listener.as_mut() {
            listener.on_start(request.target);
        }

        let mut completions = Vec::new();
        let id = {
            let mut state = self.state.lock();
            let followers = children
                .into_iter()
                .map(|child| {
                    self.begin_run(&mut state, request.for_child(child), Vec::new(), &mut completions)
                })
                .collect();
            self.begin_run(&mut state, request, followers, &mut completions)
        };

        for completion in completions {
            completion.notify();
        }
        id
    }

    fn begin_run(
        &self,
        state: &mut AnimatorState,
        request: AnimationRequest,
        followers: Vec<AnimationId>,
        completions: &mut Vec<Completion>,
    ) -> AnimationId {
        let target = request.target;
        completions.extend(state.supersede(target));

        let run = |from: Scale| Run {
            target,
            tween: Tween::new(from, request.scale, request.duration, request.easing),
            on_finish: request.on_finish,
            listener: request.listener,
            followers,
        };

        let from = match self.registry.scale(target) {
            Ok(scale) => scale,
            Err(_) => {
                let id = state.runs.insert(run(request.scale));
                completions.extend(state.end(id, AnimationOutcome::Cancelled(CancelReason::TargetRemoved)));
                return id;
            }
        };

        let id = state.runs.insert(run(from));
        tracing::debug!(
            target: targets::ANIMATION,
            ?id,
            element = ?target,
            %from,
            to = %request.scale,
            duration_ms = request.duration.as_millis() as u64,
            easing = ?request.easing,
            "animation started"
        );

        if request.duration.is_zero() {
            let outcome = match self.registry.set_scale(target, request.scale) {
                Ok(()) => AnimationOutcome::Finished,
                Err(_) => AnimationOutcome::Cancelled(CancelReason::TargetRemoved),
            };
            completions.extend(state.end(id, outcome));
        } else {
            state.slots.insert(target, id);
        }
        id
    }

    /// Advance every run to `frame_time`.
    ///
    /// Finished runs get their exact target scale; runs whose element was
    /// destroyed are cancelled with [`CancelReason::TargetRemoved`].
    pub fn on_frame(&self, frame_time: Duration) {
        self.affinity.debug_assert_same_thread();

        let completions: Vec<Completion> = {
            let mut state = self.state.lock();
            let mut ended = Vec::new();

            for (id, run) in state.runs.iter_mut() {
                let frame = run.tween.sample(frame_time);
                let applied = self.registry.set_scale(run.target, frame.scale());
                match (applied, frame) {
                    (Err(_), _) => {
                        tracing::debug!(target: targets::ANIMATION, ?id, element = ?run.target, "target removed mid-animation");
                        ended.push((id, AnimationOutcome::Cancelled(CancelReason::TargetRemoved)));
                    }
                    (Ok(()), TweenState::Finished { .. }) => ended.push((id, AnimationOutcome::Finished)),
                    (Ok(()), TweenState::Running { fraction, scale }) => {
                        tracing::trace!(target: targets::ANIMATION, ?id, fraction, %scale, "tick");
                    }
                }
            }

            ended
                .into_iter()
                .filter_map(|(id, outcome)| state.end(id, outcome))
                .collect()
        };

        for completion in completions {
            completion.notify();
        }
    }

    /// Register [`ElasticAnimator::on_frame`] with a frame clock.
    pub fn attach_to(&self, clock: &mut FrameClock) -> FrameCallbackId {
        let animator = self.clone();
        clock.register(move |frame_time| animator.on_frame(frame_time))
    }

    /// Stop a run where it is. Returns `false` if it had already ended.
    ///
    /// Child runs started by the same group request stop with it. Elements
    /// keep whatever scale the last frame applied.
    pub fn cancel(&self, id: AnimationId) -> bool {
        let completions = self.state.lock().stop(id);
        let stopped = !completions.is_empty();
        for completion in completions {
            completion.notify();
        }
        stopped
    }

    /// Stop the run driving `element`, if any.
    pub fn cancel_element(&self, element: ElementId) -> bool {
        match self.animation_for(element) {
            Some(id) => self.cancel(id),
            None => false,
        }
    }

    /// Stop every run. Returns how many were stopped.
    pub fn cancel_all(&self) -> usize {
        let completions: Vec<Completion> = {
            let mut state = self.state.lock();
            let ids: Vec<AnimationId> = state.runs.keys().collect();
            ids.into_iter()
                .filter_map(|id| state.end(id, AnimationOutcome::Cancelled(CancelReason::Stopped)))
                .collect()
        };
        let count = completions.len();
        for completion in completions {
            completion.notify();
        }
        count
    }

    /// The run currently driving `element`.
    pub fn animation_for(&self, element: ElementId) -> Option<AnimationId> {
        self.state.lock().slots.get(&element).copied()
    }

    /// Check whether `element` is being animated.
    pub fn is_animating(&self, element: ElementId) -> bool {
        self.state.lock().slots.contains_key(&element)
    }

    /// Check whether a run is still in flight.
    pub fn is_active(&self, id: AnimationId) -> bool {
        self.state.lock().runs.contains_key(id)
    }

    /// Number of runs in flight.
    pub fn active_count(&self) -> usize {
        self.state.lock().runs.len()
    }
}

impl std::fmt::Debug for ElasticAnimator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ElasticAnimator")
            .field("active", &self.active_count())
            .finish_non_exhaustive()
    }
}

fn validate_duration(duration_ms: i64) -> Result<Duration> {
    u64::try_from(duration_ms)
        .map(Duration::from_millis)
        .map_err(|_| {
            tracing::warn!(target: targets::ANIMATION, duration_ms, "rejected negative duration");
            ElasticError::invalid_argument(
                "duration_ms",
                format!("must be >= 0, got {duration_ms}"),
            )
        })
}

fn validate_scale(argument: &'static str, value: f32) -> Result<f32> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ElasticError::invalid_argument(
            argument,
            format!("must be finite, got {value}"),
        ))
    }
}

/// Builder for one elastic animation.
///
/// Created by [`ElasticAnimator::configure`]; nothing runs until
/// [`ElasticAnimation::start`].
#[must_use = "an animation does nothing until `start` is called"]
pub struct ElasticAnimation {
    animator: ElasticAnimator,
    request: AnimationRequest,
}

impl ElasticAnimation {
    /// Set the horizontal target scale.
    pub fn set_scale_x(mut self, scale_x: f32) -> Result<Self> {
        self.request.scale.x = validate_scale("scale_x", scale_x)?;
        Ok(self)
    }

    /// Set the vertical target scale.
    pub fn set_scale_y(mut self, scale_y: f32) -> Result<Self> {
        self.request.scale.y = validate_scale("scale_y", scale_y)?;
        Ok(self)
    }

    /// Set the duration in milliseconds.
    pub fn set_duration_ms(mut self, duration_ms: i64) -> Result<Self> {
        self.request.duration = validate_duration(duration_ms)?;
        Ok(self)
    }

    /// Set the easing curve. Defaults to [`Easing::ElasticOut`].
    pub fn set_easing(mut self, easing: Easing) -> Self {
        self.request.easing = easing;
        self
    }

    /// Whether direct children of the target animate too. Defaults to `true`.
    pub fn set_include_children(mut self, include_children: bool) -> Self {
        self.request.include_children = include_children;
        self
    }

    /// Register the completion callback, replacing any previous one.
    pub fn set_on_finish_listener<F>(mut self, on_finish: F) -> Self
    where
        F: FnOnce(AnimationOutcome) + Send + 'static,
    {
        self.request.on_finish = Some(Box::new(on_finish));
        self
    }

    /// Register lifecycle hooks, replacing any previous listener.
    pub fn set_listener<L>(mut self, listener: L) -> Self
    where
        L: AnimationListener + 'static,
    {
        self.request.listener = Some(Box::new(listener));
        self
    }

    /// The request as configured so far.
    pub fn request(&self) -> &AnimationRequest {
        &self.request
    }

    /// Start the animation and return immediately.
    ///
    /// A zero-duration animation applies its target and invokes the finish
    /// callback before this returns.
    pub fn start(self) -> AnimationId {
        self.animator.submit(self.request)
    }
}

impl std::fmt::Debug for ElasticAnimation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ElasticAnimation")
            .field("request", &self.request)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use elastic_views_core::ElementKind;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    fn setup() -> (SharedElementRegistry, ElasticAnimator, ElementId) {
        let registry = SharedElementRegistry::new();
        let button = registry.create("button", ElementKind::Button);
        let animator = ElasticAnimator::new(registry.clone());
        (registry, animator, button)
    }

    fn counting_callback(
        outcomes: &Arc<Mutex<Vec<AnimationOutcome>>>,
    ) -> impl FnOnce(AnimationOutcome) + Send + use<> {
        let outcomes = outcomes.clone();
        move |outcome| outcomes.lock().push(outcome)
    }

    #[test]
    fn test_negative_duration_rejected() {
        let (_registry, animator, button) = setup();
        let err = animator.configure(button, 0.5, 0.5, -1).unwrap_err();
        assert!(err.is_invalid_argument());
        assert_eq!(animator.active_count(), 0);
    }

    #[test]
    fn test_non_finite_scale_rejected() {
        let (_registry, animator, button) = setup();
        assert!(animator.configure(button, f32::NAN, 0.5, 10).is_err());
        assert!(animator.configure(button, 0.5, f32::INFINITY, 10).is_err());
    }

    #[test]
    fn test_dead_target_rejected() {
        let (registry, animator, button) = setup();
        registry.destroy(button).unwrap();
        let err = animator.configure(button, 0.5, 0.5, 100).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_runs_to_exact_target() {
        let (registry, animator, button) = setup();
        let outcomes = Arc::new(Mutex::new(Vec::new()));

        let id = animator
            .configure(button, 0.85, 0.85, 500)
            .unwrap()
            .set_on_finish_listener(counting_callback(&outcomes))
            .start();
        assert!(animator.is_active(id));
        assert_eq!(animator.animation_for(button), Some(id));

        for frame in (0..=500).step_by(16) {
            animator.on_frame(ms(frame));
        }
        assert!(outcomes.lock().is_empty());
        animator.on_frame(ms(500));

        assert_eq!(registry.scale(button).unwrap(), Scale::uniform(0.85));
        assert_eq!(*outcomes.lock(), vec![AnimationOutcome::Finished]);
        assert!(!animator.is_animating(button));
        assert!(!animator.is_active(id));
    }

    #[test]
    fn test_zero_duration_is_synchronous() {
        let (registry, animator, button) = setup();
        let outcomes = Arc::new(Mutex::new(Vec::new()));

        animator
            .configure(button, 0.75, 0.6, 0)
            .unwrap()
            .set_on_finish_listener(counting_callback(&outcomes))
            .start();

        assert_eq!(*outcomes.lock(), vec![AnimationOutcome::Finished]);
        assert_eq!(registry.scale(button).unwrap(), Scale::new(0.75, 0.6));
        assert_eq!(animator.active_count(), 0);
    }

    #[test]
    fn test_restart_supersedes_previous_once() {
        let (registry, animator, button) = setup();
        let first = Arc::new(Mutex::new(Vec::new()));
        let second = Arc::new(Mutex::new(Vec::new()));

        let first_id = animator
            .configure(button, 0.5, 0.5, 400)
            .unwrap()
            .set_on_finish_listener(counting_callback(&first))
            .start();
        animator.on_frame(ms(0));
        animator.on_frame(ms(100));

        animator
            .configure(button, 0.9, 0.9, 400)
            .unwrap()
            .set_on_finish_listener(counting_callback(&second))
            .start();

        assert_eq!(
            *first.lock(),
            vec![AnimationOutcome::Cancelled(CancelReason::Superseded)]
        );
        assert!(!animator.cancel(first_id));
        assert_eq!(animator.active_count(), 1);

        for frame in [100, 300, 500] {
            animator.on_frame(ms(frame));
        }

        assert_eq!(first.lock().len(), 1);
        assert_eq!(*second.lock(), vec![AnimationOutcome::Finished]);
        assert_eq!(registry.scale(button).unwrap(), Scale::uniform(0.9));
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let (registry, animator, button) = setup();
        let outcomes = Arc::new(Mutex::new(Vec::new()));
        let id = animator
            .configure(button, 0.5, 0.5, 1000)
            .unwrap()
            .set_easing(Easing::Linear)
            .set_on_finish_listener(counting_callback(&outcomes))
            .start();

        animator.on_frame(ms(0));
        animator.on_frame(ms(500));
        assert!(animator.cancel(id));
        assert!(!animator.cancel(id));
        assert!(!animator.cancel_element(button));

        assert_eq!(
            *outcomes.lock(),
            vec![AnimationOutcome::Cancelled(CancelReason::Stopped)]
        );
        // Cancelling leaves the element where the last frame put it.
        assert_eq!(registry.scale(button).unwrap(), Scale::uniform(0.75));
    }

    #[test]
    fn test_target_removed_mid_animation() {
        let (registry, animator, button) = setup();
        let outcomes = Arc::new(Mutex::new(Vec::new()));
        animator
            .configure(button, 0.5, 0.5, 300)
            .unwrap()
            .set_on_finish_listener(counting_callback(&outcomes))
            .start();

        animator.on_frame(ms(0));
        registry.destroy(button).unwrap();
        animator.on_frame(ms(16));
        animator.on_frame(ms(32));

        assert_eq!(
            *outcomes.lock(),
            vec![AnimationOutcome::Cancelled(CancelReason::TargetRemoved)]
        );
        assert_eq!(animator.active_count(), 0);
    }

    #[test]
    fn test_target_removed_before_start() {
        let (registry, animator, button) = setup();
        let outcomes = Arc::new(Mutex::new(Vec::new()));
        let animation = animator
            .configure(button, 0.5, 0.5, 300)
            .unwrap()
            .set_on_finish_listener(counting_callback(&outcomes));

        registry.destroy(button).unwrap();
        animation.start();

        assert_eq!(
            *outcomes.lock(),
            vec![AnimationOutcome::Cancelled(CancelReason::TargetRemoved)]
        );
    }

    #[test]
    fn test_group_children_follow_target() {
        let registry = SharedElementRegistry::new();
        let group = registry.create("group", ElementKind::Group);
        let label = registry.create_child(group, "label", ElementKind::Text).unwrap();
        let icon = registry.create_child(group, "icon", ElementKind::Image).unwrap();
        let animator = ElasticAnimator::new(registry.clone());

        let calls = Arc::new(AtomicUsize::new(0));
        let calls_clone = calls.clone();
        animator
            .configure(group, 0.8, 0.8, 200)
            .unwrap()
            .set_on_finish_listener(move |_| {
                calls_clone.fetch_add(1, Ordering::SeqCst);
            })
            .start();
        assert_eq!(animator.active_count(), 3);

        animator.on_frame(ms(0));
        animator.on_frame(ms(200));

        for element in [group, label, icon] {
            assert_eq!(registry.scale(element).unwrap(), Scale::uniform(0.8));
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_cancelling_group_stops_children() {
        let registry = SharedElementRegistry::new();
        let group = registry.create("group", ElementKind::Group);
        let label = registry.create_child(group, "label", ElementKind::Text).unwrap();
        let animator = ElasticAnimator::new(registry.clone());

        let outcomes = Arc::new(Mutex::new(Vec::new()));
        animator
            .configure(group, 0.5, 0.5, 400)
            .unwrap()
            .set_on_finish_listener(counting_callback(&outcomes))
            .start();
        animator.on_frame(ms(0));
        animator.on_frame(ms(100));
        let label_scale = registry.scale(label).unwrap();

        assert!(animator.cancel_element(group));
        assert!(!animator.is_animating(label));
        assert_eq!(animator.active_count(), 0);
        assert_eq!(
            *outcomes.lock(),
            vec![AnimationOutcome::Cancelled(CancelReason::Stopped)]
        );

        animator.on_frame(ms(400));
        assert_eq!(registry.scale(label).unwrap(), label_scale);
    }

    #[test]
    fn test_child_restarted_elsewhere_survives_group_cancel() {
        let registry = SharedElementRegistry::new();
        let group = registry.create("group", ElementKind::Group);
        let label = registry.create_child(group, "label", ElementKind::Text).unwrap();
        let animator = ElasticAnimator::new(registry.clone());

        animator.configure(group, 0.5, 0.5, 400).unwrap().start();
        animator.configure(label, 0.9, 0.9, 400).unwrap().start();
        assert!(animator.cancel_element(group));

        assert!(animator.is_animating(label));
        animator.on_frame(ms(0));
        animator.on_frame(ms(400));
        assert_eq!(registry.scale(label).unwrap(), Scale::uniform(0.9));
    }

    #[test]
    fn test_children_excluded() {
        let registry = SharedElementRegistry::new();
        let group = registry.create("group", ElementKind::Group);
        let label = registry.create_child(group, "label", ElementKind::Text).unwrap();
        let animator = ElasticAnimator::new(registry.clone());

        animator
            .configure(group, 0.8, 0.8, 0)
            .unwrap()
            .set_include_children(false)
            .start();

        assert_eq!(registry.scale(group).unwrap(), Scale::uniform(0.8));
        assert_eq!(registry.scale(label).unwrap(), Scale::IDENTITY);
    }

    #[test]
    fn test_listener_hooks() {
        #[derive(Clone, Default)]
        struct Recorder(Arc<Mutex<Vec<&'static str>>>);

        impl AnimationListener for Recorder {
            fn on_start(&mut self, _target: ElementId) {
                self.0.lock().push("start");
            }
            fn on_end(&mut self, _target: ElementId) {
                self.0.lock().push("end");
            }
            fn on_cancel(&mut self, _target: ElementId, _reason: CancelReason) {
                self.0.lock().push("cancel");
            }
        }

        let (_registry, animator, button) = setup();
        let recorder = Recorder::default();

        animator.animate(button).unwrap().set_listener(recorder.clone()).start();
        animator.cancel_element(button);
        animator
            .configure(button, 1.0, 1.0, 0)
            .unwrap()
            .set_listener(recorder.clone())
            .start();

        assert_eq!(*recorder.0.lock(), vec!["start", "cancel", "start", "end"]);
    }

    #[test]
    fn test_superseded_run_reported_before_new_start() {
        struct Labelled(&'static str, Arc<Mutex<Vec<String>>>);

        impl AnimationListener for Labelled {
            fn on_start(&mut self, _target: ElementId) {
                self.1.lock().push(format!("{}:start", self.0));
            }
            fn on_end(&mut self, _target: ElementId) {
                self.1.lock().push(format!("{}:end", self.0));
            }
            fn on_cancel(&mut self, _target: ElementId, reason: CancelReason) {
                self.1.lock().push(format!("{}:cancel:{reason:?}", self.0));
            }
        }

        let (_registry, animator, button) = setup();
        let events = Arc::new(Mutex::new(Vec::new()));

        let finished = events.clone();
        animator
            .configure(button, 0.5, 0.5, 400)
            .unwrap()
            .set_listener(Labelled("first", events.clone()))
            .set_on_finish_listener(move |_| finished.lock().push("first:finish".to_string()))
            .start();
        animator.on_frame(ms(0));
        animator
            .configure(button, 0.8, 0.8, 0)
            .unwrap()
            .set_listener(Labelled("second", events.clone()))
            .start();

        assert_eq!(
            *events.lock(),
            vec![
                "first:start",
                "first:cancel:Superseded",
                "first:finish",
                "second:start",
                "second:end",
            ]
        );
    }

    #[test]
    fn test_callback_can_chain_animation() {
        let (registry, animator, button) = setup();
        let chained = animator.clone();

        animator
            .configure(button, 0.5, 0.5, 100)
            .unwrap()
            .set_on_finish_listener(move |outcome| {
                if outcome.is_finished() {
                    chained
                        .configure(button, 1.0, 1.0, 100)
                        .unwrap()
                        .start();
                }
            })
            .start();

        animator.on_frame(ms(0));
        animator.on_frame(ms(100));
        assert!(animator.is_animating(button));
        assert_eq!(registry.scale(button).unwrap(), Scale::uniform(0.5));

        animator.on_frame(ms(116));
        animator.on_frame(ms(216));
        assert_eq!(registry.scale(button).unwrap(), Scale::IDENTITY);
        assert_eq!(animator.active_count(), 0);
    }

    #[test]
    fn test_attach_to_frame_clock() {
        let (registry, animator, button) = setup();
        let mut clock = FrameClock::new();
        animator.attach_to(&mut clock);

        animator.configure(button, 0.6, 0.6, 50).unwrap().start();
        clock.advance_to(ms(10));
        clock.advance_to(ms(60));

        assert_eq!(registry.scale(button).unwrap(), Scale::uniform(0.6));
    }

    #[test]
    fn test_cancel_all() {
        let registry = SharedElementRegistry::new();
        let a = registry.create("a", ElementKind::Button);
        let b = registry.create("b", ElementKind::Image);
        let animator = ElasticAnimator::new(registry);

        animator.configure(a, 0.5, 0.5, 100).unwrap().start();
        animator.configure(b, 0.5, 0.5, 100).unwrap().start();
        assert_eq!(animator.cancel_all(), 2);
        assert_eq!(animator.cancel_all(), 0);
    }
}
