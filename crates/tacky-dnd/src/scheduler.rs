//! Frame scheduling with at most one pending request.
//!
//! Pointer events arrive faster than frames are drawn. Work is scheduled
//! against the next frame; scheduling again before that frame fires cancels
//! the earlier request, so only the latest payload is ever acted upon.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameRequestId(u64);

/// Source of animation frames (`requestAnimationFrame` in a browser host,
/// the tick loop in the terminal).
pub trait FrameClock {
    fn request_frame(&mut self) -> FrameRequestId;
    fn cancel_frame(&mut self, id: FrameRequestId);
}

/// A clock that fires only when told to.
#[derive(Debug, Default)]
pub struct ManualFrameClock {
    next_id: u64,
    pending: Vec<FrameRequestId>,
    cancelled: usize,
}

impl ManualFrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> &[FrameRequestId] {
        &self.pending
    }

    pub fn cancelled_count(&self) -> usize {
        self.cancelled
    }

    /// Fires every outstanding request, oldest first.
    pub fn tick(&mut self) -> Vec<FrameRequestId> {
        std::mem::take(&mut self.pending)
    }
}

impl FrameClock for ManualFrameClock {
    fn request_frame(&mut self) -> FrameRequestId {
        self.next_id += 1;
        let id = FrameRequestId(self.next_id);
        self.pending.push(id);
        id
    }

    fn cancel_frame(&mut self, id: FrameRequestId) {
        let before = self.pending.len();
        self.pending.retain(|pending| *pending != id);
        if self.pending.len() != before {
            self.cancelled += 1;
        }
    }
}

#[derive(Debug)]
pub struct FrameScheduler<T, C> {
    clock: C,
    pending: Option<(FrameRequestId, T)>,
}

impl<T, C: FrameClock> FrameScheduler<T, C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            pending: None,
        }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Replaces any pending payload and requests a fresh frame for it.
    pub fn schedule(&mut self, payload: T) -> FrameRequestId {
        self.cancel();
        let id = self.clock.request_frame();
        self.pending = Some((id, payload));
        id
    }

    /// Drops the pending payload. Returns whether one existed.
    pub fn cancel(&mut self) -> bool {
        match self.pending.take() {
            Some((id, _)) => {
                self.clock.cancel_frame(id);
                true
            }
            None => false,
        }
    }

    /// Frame `id` fired. Yields the payload when `id` is the current request;
    /// stale ids yield nothing.
    pub fn run_frame(&mut self, id: FrameRequestId) -> Option<T> {
        match self.pending.take() {
            Some((pending, payload)) if pending == id => Some(payload),
            other => {
                self.pending = other;
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reschedule_keeps_latest_only() {
        let mut scheduler = FrameScheduler::new(ManualFrameClock::new());
        let first = scheduler.schedule("first");
        let second = scheduler.schedule("second");

        assert_ne!(first, second);
        assert_eq!(scheduler.clock().pending(), &[second]);
        assert_eq!(scheduler.clock().cancelled_count(), 1);

        let fired = scheduler.clock_mut().tick();
        let payloads: Vec<_> = fired.into_iter().filter_map(|id| scheduler.run_frame(id)).collect();
        assert_eq!(payloads, vec!["second"]);
        assert!(!scheduler.is_pending());
    }

    #[test]
    fn test_cancel_prevents_delivery() {
        let mut scheduler = FrameScheduler::new(ManualFrameClock::new());
        let id = scheduler.schedule(1);
        assert!(scheduler.cancel());
        assert!(!scheduler.cancel());
        assert!(scheduler.clock_mut().tick().is_empty());
        assert_eq!(scheduler.run_frame(id), None);
    }

    #[test]
    fn test_stale_id_leaves_pending_payload() {
        let mut scheduler = FrameScheduler::new(ManualFrameClock::new());
        let stale = scheduler.schedule(1);
        let current = scheduler.schedule(2);

        assert_eq!(scheduler.run_frame(stale), None);
        assert!(scheduler.is_pending());
        assert_eq!(scheduler.run_frame(current), Some(2));
    }
}
