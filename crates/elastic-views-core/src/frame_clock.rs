//! Frame clock for Elastic Views.
//!
//! The host UI drives the clock once per display frame. Everything that wants
//! per-frame work (the elastic animator in particular) registers a callback
//! and receives the frame timestamp, measured from the clock's origin.
//!
//! Frame time is monotonic: a timestamp earlier than the previous frame is
//! clamped to the previous frame time.

use std::fmt;
use std::time::{Duration, Instant};

use slotmap::{new_key_type, SlotMap};

use crate::logging::targets;

new_key_type! {
    /// A unique identifier for a registered frame callback.
    pub struct FrameCallbackId;
}

/// Frame clock errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FrameClockError {
    /// The callback ID is invalid or has already been removed.
    #[error("Invalid or unregistered frame callback ID")]
    InvalidCallbackId,
}

type FrameCallback = Box<dyn FnMut(Duration) + Send>;

/// Drives per-frame callbacks with a monotonic frame time.
pub struct FrameClock {
    /// Wall-clock origin used by [`FrameClock::tick`].
    origin: Instant,
    /// Timestamp of the most recent frame.
    frame_time: Duration,
    /// Number of frames delivered so far.
    frame_count: u64,
    callbacks: SlotMap<FrameCallbackId, FrameCallback>,
}

impl FrameClock {
    /// Create a new frame clock whose origin is now.
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            frame_time: Duration::ZERO,
            frame_count: 0,
            callbacks: SlotMap::with_key(),
        }
    }

    /// Register a callback invoked on every frame with the frame time.
    pub fn register<F>(&mut self, callback: F) -> FrameCallbackId
    where
        F: FnMut(Duration) + Send + 'static,
    {
        let id = self.callbacks.insert(Box::new(callback));
        tracing::trace!(target: targets::FRAME_CLOCK, ?id, "registered frame callback");
        id
    }

    /// Remove a callback.
    pub fn unregister(&mut self, id: FrameCallbackId) -> Result<(), FrameClockError> {
        self.callbacks
            .remove(id)
            .map(|_| ())
            .ok_or(FrameClockError::InvalidCallbackId)
    }

    /// Check whether a callback is registered.
    pub fn is_registered(&self, id: FrameCallbackId) -> bool {
        self.callbacks.contains_key(id)
    }

    /// Number of registered callbacks.
    pub fn callback_count(&self) -> usize {
        self.callbacks.len()
    }

    /// Deliver a frame at an explicit timestamp.
    ///
    /// Returns the frame time actually delivered after clamping.
    pub fn advance_to(&mut self, frame_time: Duration) -> Duration {
        if frame_time < self.frame_time {
            tracing::warn!(
                target: targets::FRAME_CLOCK,
                requested = ?frame_time,
                current = ?self.frame_time,
                "frame time moved backwards, clamping"
            );
        } else {
            self.frame_time = frame_time;
        }
        self.frame_count += 1;

        let frame_time = self.frame_time;
        tracing::trace!(target: targets::FRAME_CLOCK, frame = self.frame_count, ?frame_time, "frame");
        for callback in self.callbacks.values_mut() {
            callback(frame_time);
        }
        frame_time
    }

    /// Advance the clock by `delta` from the previous frame.
    pub fn advance_by(&mut self, delta: Duration) -> Duration {
        self.advance_to(self.frame_time + delta)
    }

    /// Deliver a frame stamped with the wall-clock time elapsed since the origin.
    pub fn tick(&mut self) -> Duration {
        self.advance_to(self.origin.elapsed())
    }

    /// Timestamp of the most recent frame.
    #[inline]
    pub fn frame_time(&self) -> Duration {
        self.frame_time
    }

    /// Number of frames delivered so far.
    #[inline]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for FrameClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FrameClock")
            .field("frame_time", &self.frame_time)
            .field("frame_count", &self.frame_count)
            .field("callbacks", &self.callbacks.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[test]
    fn test_callbacks_receive_frame_time() {
        let mut clock = FrameClock::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_clone = seen.clone();
        clock.register(move |t| seen_clone.lock().push(t));

        clock.advance_to(Duration::from_millis(16));
        clock.advance_by(Duration::from_millis(16));

        assert_eq!(
            *seen.lock(),
            vec![Duration::from_millis(16), Duration::from_millis(32)]
        );
        assert_eq!(clock.frame_count(), 2);
    }

    #[test]
    fn test_frame_time_never_moves_backwards() {
        let mut clock = FrameClock::new();
        clock.advance_to(Duration::from_millis(100));
        let delivered = clock.advance_to(Duration::from_millis(50));
        assert_eq!(delivered, Duration::from_millis(100));
        assert_eq!(clock.frame_time(), Duration::from_millis(100));
    }

    #[test]
    fn test_unregister() {
        let mut clock = FrameClock::new();
        let id = clock.register(|_| {});
        assert!(clock.is_registered(id));
        assert_eq!(clock.unregister(id), Ok(()));
        assert!(!clock.is_registered(id));
        assert_eq!(clock.unregister(id), Err(FrameClockError::InvalidCallbackId));
    }

    #[test]
    fn test_tick_uses_elapsed_time() {
        let mut clock = FrameClock::new();
        let first = clock.tick();
        let second = clock.tick();
        assert!(second >= first);
    }
}
